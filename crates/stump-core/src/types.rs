//! # Domain Types
//!
//! Core domain types used throughout StumpCalc.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Settings     │   │      Job        │   │     Stump       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  baseRate/inch  │   │  id (UUID)      │   │  id (UUID)      │       │
//! │  │  taxRate        │   │  clientName     │   │  diameter       │       │
//! │  │  taxEnabled     │   │  status         │   │  count          │       │
//! │  │  companyName    │   │  stumps[] ──────┼──►│  photos[] (≤3)  │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  QuoteTotals    │   │   JobStatus     │   │     Photo       │       │
//! │  │  (derived)      │   │  DRAFT / SENT   │   │  dataUrl        │       │
//! │  │  subtotal/tax   │   │  COMPLETED      │   │  session-only   │       │
//! │  └─────────────────┘   │  ARCHIVED       │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Wire names are camelCase so the same JSON is read by the UI and written to
//! the persisted slots. Patches carry `Option` fields: `None` leaves the target
//! value as it is.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::DEFAULT_COMPANY_NAME;

/// Generates a fresh entity id (UUID v4).
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

// =============================================================================
// Units
// =============================================================================

/// Currency quotes are priced in. Fixed to Canadian dollars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Currency {
    #[default]
    #[serde(rename = "CAD")]
    Cad,
}

impl Currency {
    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Cad => "CAD",
        }
    }

    /// Symbol shown in front of amounts.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Currency::Cad => "$",
        }
    }
}

/// Unit stump diameters are measured in. Fixed to inches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MeasureUnit {
    #[default]
    #[serde(rename = "inches")]
    Inches,
}

impl MeasureUnit {
    /// Suffix written after a measurement (`24"`).
    pub const fn symbol(&self) -> &'static str {
        match self {
            MeasureUnit::Inches => "\"",
        }
    }
}

// =============================================================================
// Settings
// =============================================================================

/// Pricing configuration. One per installation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Price per inch of diameter.
    pub base_rate_per_inch: f64,

    /// Tax as a fraction (0.13 = 13% HST).
    pub tax_rate: f64,

    /// Whether tax is added to quotes.
    pub tax_enabled: bool,

    pub measure_unit: MeasureUnit,

    pub currency: Currency,

    /// Shown at the top of every quote and in the signature.
    pub company_name: String,
}

impl Default for Settings {
    /// Ontario defaults: $5/inch, 13% HST charged.
    fn default() -> Self {
        Settings {
            base_rate_per_inch: 5.0,
            tax_rate: 0.13,
            tax_enabled: true,
            measure_unit: MeasureUnit::Inches,
            currency: Currency::Cad,
            company_name: DEFAULT_COMPANY_NAME.to_string(),
        }
    }
}

impl Settings {
    /// Shallow-merges a patch into these settings.
    pub fn apply(&mut self, patch: SettingsPatch) {
        if let Some(rate) = patch.base_rate_per_inch {
            self.base_rate_per_inch = rate;
        }
        if let Some(rate) = patch.tax_rate {
            self.tax_rate = rate;
        }
        if let Some(enabled) = patch.tax_enabled {
            self.tax_enabled = enabled;
        }
        if let Some(name) = patch.company_name {
            self.company_name = name;
        }
    }

    /// Tax rate as a whole percentage for labels (0.13 → 13).
    pub fn tax_percent_label(&self) -> String {
        format!("{:.0}", (self.tax_rate * 100.0).round())
    }
}

/// Partial update for [`Settings`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsPatch {
    pub base_rate_per_inch: Option<f64>,
    pub tax_rate: Option<f64>,
    pub tax_enabled: Option<bool>,
    pub company_name: Option<String>,
}

// =============================================================================
// Job Status
// =============================================================================

/// Lifecycle tag on a job.
///
/// Recorded and persisted, but nothing in the core moves a job between
/// states; that belongs to whatever sends or invoices the quote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "UPPERCASE")]
pub enum JobStatus {
    #[default]
    Draft,
    Sent,
    Completed,
    Archived,
}

// =============================================================================
// Photo
// =============================================================================

/// An image attached to a stump.
///
/// Held in memory for the session only. Persisted snapshots drop photos so
/// a few phone pictures cannot blow the storage quota.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Photo {
    pub id: String,

    /// Embedded image payload (`data:image/jpeg;base64,...`).
    pub data_url: String,

    /// Original file name.
    pub name: String,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

impl Photo {
    /// Creates a photo record from an already-encoded payload.
    pub fn new(name: impl Into<String>, data_url: impl Into<String>) -> Self {
        Photo {
            id: new_id(),
            data_url: data_url.into(),
            name: name.into(),
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// Stump
// =============================================================================

/// One line of the quote: a stump (or a group of identical stumps).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Stump {
    pub id: String,

    /// Diameter in [`Settings::measure_unit`]. Zero until measured.
    pub diameter: f64,

    /// How many stumps of this size. Zero is tolerated while editing.
    pub count: u32,

    pub location_description: Option<String>,

    pub notes: Option<String>,

    /// Complex stump: +20%.
    pub is_complex: bool,

    /// Tight access: +10%.
    pub is_tight_access: bool,

    /// At most [`crate::MAX_PHOTOS_PER_STUMP`].
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Stump {
    /// A blank stump with the given location label.
    pub fn with_location(location: impl Into<String>) -> Self {
        Stump {
            id: new_id(),
            diameter: 0.0,
            count: 1,
            location_description: Some(location.into()),
            notes: None,
            is_complex: false,
            is_tight_access: false,
            photos: Vec::new(),
        }
    }

    /// The blank stump appended as the `position`-th entry (1-based),
    /// labelled "Stump {position}".
    pub fn numbered(position: usize) -> Self {
        Stump::with_location(format!("Stump {}", position))
    }

    /// Shallow-merges a patch into this stump. The id never changes.
    pub fn apply(&mut self, patch: StumpPatch) {
        if let Some(diameter) = patch.diameter {
            self.diameter = diameter;
        }
        if let Some(count) = patch.count {
            self.count = count;
        }
        if let Some(location) = patch.location_description {
            self.location_description = Some(location);
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
        if let Some(complex) = patch.is_complex {
            self.is_complex = complex;
        }
        if let Some(tight) = patch.is_tight_access {
            self.is_tight_access = tight;
        }
        if let Some(mut photos) = patch.photos {
            photos.truncate(crate::MAX_PHOTOS_PER_STUMP);
            self.photos = photos;
        }
    }

    /// Labels for the surcharges that apply ("Complex stump", "Tight access").
    pub fn adjustment_labels(&self) -> Vec<&'static str> {
        let mut labels = Vec::with_capacity(2);
        if self.is_complex {
            labels.push("Complex stump");
        }
        if self.is_tight_access {
            labels.push("Tight access");
        }
        labels
    }

    /// Photo slots still free on this stump.
    pub fn remaining_photo_slots(&self) -> usize {
        crate::MAX_PHOTOS_PER_STUMP.saturating_sub(self.photos.len())
    }
}

/// Partial update for a [`Stump`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct StumpPatch {
    pub diameter: Option<f64>,
    pub count: Option<u32>,
    pub location_description: Option<String>,
    pub notes: Option<String>,
    pub is_complex: Option<bool>,
    pub is_tight_access: Option<bool>,
    pub photos: Option<Vec<Photo>>,
}

// =============================================================================
// Job
// =============================================================================

/// The draft quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub client_name: String,
    pub address: String,
    pub status: JobStatus,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    pub stumps: Vec<Stump>,
}

impl Job {
    /// A fresh draft with a single blank stump in the front yard.
    pub fn new() -> Self {
        Job {
            id: new_id(),
            client_name: String::new(),
            address: String::new(),
            status: JobStatus::Draft,
            created_at: Utc::now(),
            stumps: vec![Stump::with_location("Front yard")],
        }
    }

    /// Shallow-merges a patch into the job metadata.
    pub fn apply(&mut self, patch: JobPatch) {
        if let Some(client_name) = patch.client_name {
            self.client_name = client_name;
        }
        if let Some(address) = patch.address {
            self.address = address;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
    }

    pub fn stump(&self, id: &str) -> Option<&Stump> {
        self.stumps.iter().find(|s| s.id == id)
    }

    pub fn stump_mut(&mut self, id: &str) -> Option<&mut Stump> {
        self.stumps.iter_mut().find(|s| s.id == id)
    }

    /// Short reference printed on quotes: first 8 characters of the id,
    /// upper-cased.
    pub fn reference(&self) -> String {
        self.id.chars().take(8).collect::<String>().to_uppercase()
    }
}

impl Default for Job {
    fn default() -> Self {
        Job::new()
    }
}

/// Partial update for [`Job`] metadata. Stumps are edited through their own
/// operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPatch {
    pub client_name: Option<String>,
    pub address: Option<String>,
    pub status: Option<JobStatus>,
}

// =============================================================================
// Quote Totals
// =============================================================================

/// Derived totals for a job. Always recomputed, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct QuoteTotals {
    pub subtotal: f64,
    pub tax_amount: f64,
    pub total: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();
        assert_eq!(settings.base_rate_per_inch, 5.0);
        assert_eq!(settings.tax_rate, 0.13);
        assert!(settings.tax_enabled);
        assert_eq!(settings.company_name, "Forest City Stump Works");
        assert_eq!(settings.tax_percent_label(), "13");
    }

    #[test]
    fn test_settings_wire_format() {
        let json = serde_json::to_value(Settings::default()).unwrap();
        assert_eq!(json["baseRatePerInch"], 5.0);
        assert_eq!(json["measureUnit"], "inches");
        assert_eq!(json["currency"], "CAD");
        assert_eq!(json["taxEnabled"], true);
    }

    #[test]
    fn test_settings_patch_is_shallow() {
        let mut settings = Settings::default();
        settings.apply(SettingsPatch {
            tax_enabled: Some(false),
            ..Default::default()
        });
        assert!(!settings.tax_enabled);
        assert_eq!(settings.tax_rate, 0.13);
        assert_eq!(settings.base_rate_per_inch, 5.0);
    }

    #[test]
    fn test_new_job_has_one_blank_stump() {
        let job = Job::new();
        assert_eq!(job.status, JobStatus::Draft);
        assert_eq!(job.stumps.len(), 1);
        let stump = &job.stumps[0];
        assert_eq!(stump.diameter, 0.0);
        assert_eq!(stump.count, 1);
        assert_eq!(stump.location_description.as_deref(), Some("Front yard"));
        assert!(stump.photos.is_empty());
    }

    #[test]
    fn test_job_status_wire_format() {
        assert_eq!(serde_json::to_value(JobStatus::Completed).unwrap(), "COMPLETED");
        let status: JobStatus = serde_json::from_str("\"ARCHIVED\"").unwrap();
        assert_eq!(status, JobStatus::Archived);
    }

    #[test]
    fn test_stump_patch_keeps_untouched_fields() {
        let mut stump = Stump::numbered(2);
        let id = stump.id.clone();
        stump.apply(StumpPatch {
            diameter: Some(18.0),
            is_complex: Some(true),
            ..Default::default()
        });
        assert_eq!(stump.id, id);
        assert_eq!(stump.diameter, 18.0);
        assert_eq!(stump.count, 1);
        assert!(stump.is_complex);
        assert_eq!(stump.location_description.as_deref(), Some("Stump 2"));
    }

    #[test]
    fn test_stump_patch_caps_photos() {
        let mut stump = Stump::numbered(1);
        let photos = (0..5).map(|i| Photo::new(format!("p{}.jpg", i), "data:")).collect();
        stump.apply(StumpPatch {
            photos: Some(photos),
            ..Default::default()
        });
        assert_eq!(stump.photos.len(), crate::MAX_PHOTOS_PER_STUMP);
        assert_eq!(stump.remaining_photo_slots(), 0);
    }

    #[test]
    fn test_patch_from_partial_json() {
        let patch: StumpPatch = serde_json::from_str(r#"{"isTightAccess": true}"#).unwrap();
        assert_eq!(patch.is_tight_access, Some(true));
        assert_eq!(patch.diameter, None);
    }

    #[test]
    fn test_adjustment_labels() {
        let mut stump = Stump::numbered(1);
        assert!(stump.adjustment_labels().is_empty());
        stump.is_complex = true;
        stump.is_tight_access = true;
        assert_eq!(stump.adjustment_labels(), vec!["Complex stump", "Tight access"]);
    }

    #[test]
    fn test_job_reference() {
        let mut job = Job::new();
        job.id = "1a2b3c4d-0000-4000-8000-000000000000".to_string();
        assert_eq!(job.reference(), "1A2B3C4D");
    }
}
