//! # Snapshot Repair
//!
//! Turns whatever JSON is found in a slot back into domain values, one field
//! at a time.
//!
//! ## Repair, Don't Reject
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Persisted stump                     Repaired stump                     │
//! │  ───────────────────────────────     ───────────────────────────────    │
//! │  { "diameter": 14,                   diameter: 14        (kept)         │
//! │    "count": 0,               ──►     count: 1            (default)      │
//! │    "isComplex": 1 }                  isComplex: true     (truthy)       │
//! │                                      id: <new uuid>      (generated)    │
//! │                                      location: "Stump 3" (synthesized)  │
//! │                                      photos: []          (default)      │
//! │                                                                         │
//! │  One bad field costs that field, never the whole draft.                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Default Table
//!
//! | Field | Accepted | Otherwise |
//! |---|---|---|
//! | `job.id`, `stump.id` | non-empty string | new UUID |
//! | `clientName`, `address` | string | `""` |
//! | `status` | `DRAFT`/`SENT`/`COMPLETED`/`ARCHIVED` | `DRAFT` |
//! | `createdAt` | RFC 3339 string | now |
//! | `stumps` | non-empty array | one fresh stump |
//! | `diameter` | finite number | `0` |
//! | `count` | number ≥ 1 | `1` |
//! | `locationDescription` | string | `"Stump N"` |
//! | `notes` | string | none |
//! | `isComplex`, `isTightAccess` | any (truthiness) | `false` |
//! | `photos` | array of photos | `[]`, capped at 3 |
//! | `baseRatePerInch` | number in 0..=1000 | default |
//! | `taxRate` | finite number in 0..=1 | default |
//! | `taxEnabled` | boolean | default |
//! | `companyName` | string | default |

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use stump_core::types::{new_id, Job, JobStatus, Photo, Settings, Stump};
use stump_core::validation::{validate_base_rate, validate_tax_rate};
use stump_core::MAX_PHOTOS_PER_STUMP;

// =============================================================================
// Job
// =============================================================================

/// Rebuilds a job from a persisted snapshot.
pub fn repair_job(raw: &Value) -> Job {
    let Some(fields) = raw.as_object() else {
        warn!("persisted job is not an object, starting a fresh draft");
        return Job::new();
    };

    let stumps = match fields.get("stumps").and_then(Value::as_array) {
        Some(items) if !items.is_empty() => items
            .iter()
            .enumerate()
            .map(|(idx, item)| repair_stump(item, idx + 1))
            .collect(),
        _ => {
            debug!("persisted job has no stumps, seeding one");
            Job::new().stumps
        }
    };

    Job {
        id: id_or_new(fields, "job"),
        client_name: string_or_empty(fields, "clientName"),
        address: string_or_empty(fields, "address"),
        status: fields
            .get("status")
            .and_then(|v| serde_json::from_value::<JobStatus>(v.clone()).ok())
            .unwrap_or_default(),
        created_at: fields
            .get("createdAt")
            .and_then(Value::as_str)
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or_else(Utc::now),
        stumps,
    }
}

/// Rebuilds one stump. `position` is 1-based and only used to name a stump
/// that lost its location.
pub fn repair_stump(raw: &Value, position: usize) -> Stump {
    let empty = Map::new();
    let fields = raw.as_object().unwrap_or(&empty);

    let diameter = match fields.get("diameter").and_then(Value::as_f64) {
        Some(d) if d.is_finite() => d,
        _ => {
            debug!(position, "stump diameter missing or not a number");
            0.0
        }
    };

    let location_description = match fields.get("locationDescription") {
        Some(Value::String(location)) => location.clone(),
        _ => format!("Stump {}", position),
    };

    let mut photos = fields
        .get("photos")
        .and_then(|v| serde_json::from_value::<Vec<Photo>>(v.clone()).ok())
        .unwrap_or_default();
    photos.truncate(MAX_PHOTOS_PER_STUMP);

    Stump {
        id: id_or_new(fields, "stump"),
        diameter,
        count: count_or_one(fields.get("count")),
        location_description: Some(location_description),
        notes: fields
            .get("notes")
            .and_then(Value::as_str)
            .map(str::to_string),
        is_complex: truthy(fields.get("isComplex")),
        is_tight_access: truthy(fields.get("isTightAccess")),
        photos,
    }
}

fn id_or_new(fields: &Map<String, Value>, entity: &str) -> String {
    match fields.get("id").and_then(Value::as_str) {
        Some(id) if !id.trim().is_empty() => id.to_string(),
        _ => {
            debug!(entity, "persisted record has no id, generating one");
            new_id()
        }
    }
}

fn string_or_empty(fields: &Map<String, Value>, key: &str) -> String {
    fields
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn count_or_one(value: Option<&Value>) -> u32 {
    let Some(value) = value else {
        return 1;
    };
    if let Some(n) = value.as_u64() {
        return u32::try_from(n).ok().filter(|&n| n > 0).unwrap_or(1);
    }
    match value.as_f64() {
        Some(n) if n.is_finite() && n >= 1.0 && n <= u32::MAX as f64 => n.trunc() as u32,
        _ => 1,
    }
}

/// Truthiness the way the form stored flags: `false`, `0`, `""`, `null` and
/// missing are false, everything else is true.
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(false),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Merges persisted settings over the defaults, keeping a default for every
/// field that is missing, mistyped or out of range.
pub fn repair_settings(raw: &Value) -> Settings {
    let mut settings = Settings::default();
    let Some(fields) = raw.as_object() else {
        warn!("persisted settings are not an object, using defaults");
        return settings;
    };

    if let Some(value) = fields.get("baseRatePerInch") {
        match value.as_f64().filter(|rate| validate_base_rate(*rate).is_ok()) {
            Some(rate) => settings.base_rate_per_inch = rate,
            None => warn!(%value, "ignoring persisted baseRatePerInch"),
        }
    }

    if let Some(value) = fields.get("taxRate") {
        match value.as_f64().filter(|rate| validate_tax_rate(*rate).is_ok()) {
            Some(rate) => settings.tax_rate = rate,
            None => warn!(%value, "ignoring persisted taxRate"),
        }
    }

    if let Some(value) = fields.get("taxEnabled") {
        match value.as_bool() {
            Some(enabled) => settings.tax_enabled = enabled,
            None => warn!(%value, "ignoring persisted taxEnabled"),
        }
    }

    if let Some(value) = fields.get("companyName") {
        match value.as_str() {
            Some(name) => settings.company_name = name.to_string(),
            None => warn!(%value, "ignoring persisted companyName"),
        }
    }

    // measureUnit and currency have a single value each; nothing to merge.
    settings
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stump_missing_fields_are_filled() {
        let stump = repair_stump(&json!({ "diameter": 14 }), 3);
        assert!(!stump.id.is_empty());
        assert_eq!(stump.diameter, 14.0);
        assert_eq!(stump.count, 1);
        assert_eq!(stump.location_description.as_deref(), Some("Stump 3"));
        assert_eq!(stump.notes, None);
        assert!(!stump.is_complex);
        assert!(stump.photos.is_empty());
    }

    #[test]
    fn test_stump_bad_values_are_coerced() {
        let stump = repair_stump(
            &json!({
                "id": "",
                "diameter": "twelve",
                "count": -4,
                "locationDescription": 7,
                "isComplex": 1,
                "isTightAccess": "",
                "photos": "not a list"
            }),
            1,
        );
        assert!(!stump.id.is_empty());
        assert_eq!(stump.diameter, 0.0);
        assert_eq!(stump.count, 1);
        assert_eq!(stump.location_description.as_deref(), Some("Stump 1"));
        assert!(stump.is_complex);
        assert!(!stump.is_tight_access);
        assert!(stump.photos.is_empty());
    }

    #[test]
    fn test_stump_valid_fields_survive() {
        let stump = repair_stump(
            &json!({
                "id": "s-1",
                "diameter": 22.5,
                "count": 3,
                "locationDescription": "",
                "notes": "Near fence",
                "isComplex": false,
                "isTightAccess": true
            }),
            1,
        );
        assert_eq!(stump.id, "s-1");
        assert_eq!(stump.diameter, 22.5);
        assert_eq!(stump.count, 3);
        assert_eq!(stump.location_description.as_deref(), Some(""));
        assert_eq!(stump.notes.as_deref(), Some("Near fence"));
        assert!(stump.is_tight_access);
    }

    #[test]
    fn test_count_coercion() {
        assert_eq!(count_or_one(Some(&json!(0))), 1);
        assert_eq!(count_or_one(Some(&json!(2.7))), 2);
        assert_eq!(count_or_one(Some(&json!(0.5))), 1);
        assert_eq!(count_or_one(Some(&json!(null))), 1);
        assert_eq!(count_or_one(Some(&json!(u64::MAX))), 1);
        assert_eq!(count_or_one(None), 1);
    }

    #[test]
    fn test_job_repair() {
        let job = repair_job(&json!({
            "id": "job-1",
            "clientName": "Pat",
            "address": null,
            "status": "SENT",
            "createdAt": "2025-06-01T12:00:00Z",
            "stumps": [{ "id": "a", "diameter": 10, "count": 1 }, {}]
        }));
        assert_eq!(job.id, "job-1");
        assert_eq!(job.client_name, "Pat");
        assert_eq!(job.address, "");
        assert_eq!(job.status, JobStatus::Sent);
        assert_eq!(job.created_at.to_rfc3339(), "2025-06-01T12:00:00+00:00");
        assert_eq!(job.stumps.len(), 2);
        assert_eq!(job.stumps[0].id, "a");
        assert_eq!(job.stumps[1].location_description.as_deref(), Some("Stump 2"));
    }

    #[test]
    fn test_job_without_usable_stumps_gets_one() {
        for stumps in [json!("nope"), json!([]), Value::Null] {
            let job = repair_job(&json!({ "id": "j", "stumps": stumps, "status": "LOST" }));
            assert_eq!(job.id, "j");
            assert_eq!(job.status, JobStatus::Draft);
            assert_eq!(job.stumps.len(), 1);
        }
    }

    #[test]
    fn test_job_not_an_object() {
        let job = repair_job(&json!([1, 2, 3]));
        assert_eq!(job.stumps.len(), 1);
        assert_eq!(job.status, JobStatus::Draft);
    }

    #[test]
    fn test_settings_merge_over_defaults() {
        let settings = repair_settings(&json!({ "companyName": "Stumpy Bros", "taxEnabled": false }));
        assert_eq!(settings.company_name, "Stumpy Bros");
        assert!(!settings.tax_enabled);
        assert_eq!(settings.base_rate_per_inch, 5.0);
        assert_eq!(settings.tax_rate, 0.13);
    }

    #[test]
    fn test_settings_bad_fields_fall_back() {
        let settings = repair_settings(&json!({
            "baseRatePerInch": "lots",
            "taxRate": 13,
            "taxEnabled": "yes",
            "companyName": 42,
            "currency": "USD"
        }));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_settings_rate_above_limit_falls_back() {
        let settings = repair_settings(&json!({ "baseRatePerInch": 1e306, "taxRate": 0.05 }));
        assert_eq!(settings.base_rate_per_inch, 5.0);
        assert_eq!(settings.tax_rate, 0.05);
    }

    #[test]
    fn test_settings_empty_object_is_default() {
        assert_eq!(repair_settings(&json!({})), Settings::default());
        assert_eq!(repair_settings(&json!("garbage")), Settings::default());
    }
}
