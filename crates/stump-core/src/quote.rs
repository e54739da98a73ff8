//! # Quote Text
//!
//! The canonical line-by-line rendering of a quote.
//!
//! ## One Source, Three Channels
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Job + Settings + QuoteTotals                                          │
//! │              │                                                          │
//! │              ▼                                                          │
//! │        quote_lines() ← THIS MODULE                                      │
//! │              │                                                          │
//! │     ┌────────┼─────────────────┐                                        │
//! │     ▼        ▼                 ▼                                        │
//! │  clipboard  native share    mailto: body                                │
//! │  share_text share_text      mailto_link(email_subject, share_text)      │
//! │                                                                         │
//! │  All three read the same lines, so they can never disagree.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Layout
//! ```text
//! Forest City Stump Works
//! Stump Quote
//! Date: 2026-10-18
//! Quote #: 1A2B3C4D
//! Client: Jane Doe
//! Address: 12 Elm St
//! Stumps: 1
//!
//! Stump 1
//! - Diameter: 10"
//! - Count: 2
//! - Location: Front yard
//! - Adjustments: Complex stump, Tight access
//! - Photos: none
//! - Line total: $130.00
//!
//! Subtotal: $130.00
//! HST (13%): $16.90
//! Total: $146.90
//!
//! Thank you for considering us. This quote is valid for 30 days.
//!
//! Regards,
//! Forest City Stump Works
//! ```
//!
//! Every free-text field except the company name is written behind a label
//! (`Client: `, `- Notes: `, ...). The company name is echoed as typed on the
//! first and last lines. Summary lines are the ones starting with `Total: $`
//! (always exactly one) and `HST (` (present only when tax is enabled).

use chrono::{NaiveDate, Utc};

use crate::money::format_currency;
use crate::pricing::stump_line_total;
use crate::types::{Job, QuoteTotals, Settings, Stump};

/// Title line under the company name, also used for share sheets.
pub const DOCUMENT_TITLE: &str = "Stump Quote";

/// Closing line printed after the totals.
pub const CLOSING_MESSAGE: &str =
    "Thank you for considering us. This quote is valid for 30 days.";

/// First line of the signature block; the company name follows.
pub const SIGNATURE_GREETING: &str = "Regards,";

/// Quote lines dated today (UTC).
pub fn quote_lines(job: &Job, settings: &Settings, totals: &QuoteTotals) -> Vec<String> {
    quote_lines_on(job, settings, totals, Utc::now().date_naive())
}

/// Quote lines for a given date.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use stump_core::pricing::calculate_quote;
/// use stump_core::quote::quote_lines_on;
/// use stump_core::types::{Job, Settings};
///
/// let job = Job::new();
/// let settings = Settings::default();
/// let totals = calculate_quote(&job, &settings);
/// let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
///
/// let lines = quote_lines_on(&job, &settings, &totals, date);
/// assert_eq!(lines[0], "Forest City Stump Works");
/// assert_eq!(lines[2], "Date: 2026-10-18");
/// assert_eq!(lines.iter().filter(|l| l.starts_with("Total:")).count(), 1);
/// ```
pub fn quote_lines_on(
    job: &Job,
    settings: &Settings,
    totals: &QuoteTotals,
    date: NaiveDate,
) -> Vec<String> {
    let currency = settings.currency;
    let mut lines = Vec::with_capacity(16 + job.stumps.len() * 8);

    lines.push(settings.company_name.clone());
    lines.push(DOCUMENT_TITLE.to_string());
    lines.push(format!("Date: {}", date.format("%Y-%m-%d")));
    lines.push(format!("Quote #: {}", job.reference()));
    if !job.client_name.trim().is_empty() {
        lines.push(format!("Client: {}", job.client_name));
    }
    if !job.address.trim().is_empty() {
        lines.push(format!("Address: {}", job.address));
    }
    lines.push(format!("Stumps: {}", job.stumps.len()));
    lines.push(String::new());

    for (idx, stump) in job.stumps.iter().enumerate() {
        push_stump_lines(&mut lines, idx + 1, stump, settings);
        lines.push(String::new());
    }

    lines.push(format!("Subtotal: {}", format_currency(totals.subtotal, currency)));
    if settings.tax_enabled {
        lines.push(format!(
            "HST ({}%): {}",
            settings.tax_percent_label(),
            format_currency(totals.tax_amount, currency)
        ));
    }
    lines.push(format!("Total: {}", format_currency(totals.total, currency)));

    lines.push(String::new());
    lines.push(CLOSING_MESSAGE.to_string());
    lines.push(String::new());
    lines.push(SIGNATURE_GREETING.to_string());
    lines.push(settings.company_name.clone());

    lines
}

fn push_stump_lines(lines: &mut Vec<String>, position: usize, stump: &Stump, settings: &Settings) {
    lines.push(format!("Stump {}", position));
    lines.push(format!(
        "- Diameter: {}{}",
        stump.diameter,
        settings.measure_unit.symbol()
    ));
    lines.push(format!("- Count: {}", stump.count));

    if let Some(location) = non_blank(&stump.location_description) {
        lines.push(format!("- Location: {}", location));
    }

    let adjustments = stump.adjustment_labels();
    if !adjustments.is_empty() {
        lines.push(format!("- Adjustments: {}", adjustments.join(", ")));
    }

    if let Some(notes) = non_blank(&stump.notes) {
        lines.push(format!("- Notes: {}", notes));
    }

    if stump.photos.is_empty() {
        lines.push("- Photos: none".to_string());
    } else {
        lines.push(format!(
            "- Photos: {} (not attached; available in app)",
            stump.photos.len()
        ));
    }

    lines.push(format!(
        "- Line total: {}",
        format_currency(stump_line_total(stump, settings), settings.currency)
    ));
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// =============================================================================
// Distribution Channels
// =============================================================================

/// The quote as one block of text (clipboard and native share).
pub fn share_text(lines: &[String]) -> String {
    lines.join("\n")
}

/// Subject line for emailed quotes.
pub fn email_subject(settings: &Settings) -> String {
    format!("{} — {}", settings.company_name, DOCUMENT_TITLE)
}

/// Builds a `mailto:` link with no recipient, so the user picks one in their
/// mail app.
///
/// ## Example
/// ```rust
/// use stump_core::quote::mailto_link;
///
/// let link = mailto_link("Stump Quote", "Total: $50.00\nThanks");
/// assert_eq!(
///     link,
///     "mailto:?subject=Stump%20Quote&body=Total%3A%20%2450.00%0AThanks"
/// );
/// ```
pub fn mailto_link(subject: &str, body: &str) -> String {
    format!(
        "mailto:?subject={}&body={}",
        encode_component(subject),
        encode_component(body)
    )
}

/// Percent-encodes a mailto header value. Spaces become `%20`, not `+`,
/// since mail clients read `+` literally.
fn encode_component(value: &str) -> String {
    // form_urlencoded writes a literal '+' as %2B, so any '+' left is a space
    url::form_urlencoded::byte_serialize(value.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::calculate_quote;
    use crate::types::Photo;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    fn sample_job() -> Job {
        let mut job = Job::new();
        job.id = "1a2b3c4d-5e6f-4000-8000-000000000000".to_string();
        job.client_name = "Jane Doe".to_string();
        job.address = "12 Elm St".to_string();
        let stump = &mut job.stumps[0];
        stump.diameter = 10.0;
        stump.count = 2;
        stump.is_complex = true;
        stump.is_tight_access = true;
        job
    }

    fn render(job: &Job, settings: &Settings) -> Vec<String> {
        let totals = calculate_quote(job, settings);
        quote_lines_on(job, settings, &totals, date())
    }

    #[test]
    fn test_full_layout() {
        let lines = render(&sample_job(), &Settings::default());
        let expected = vec![
            "Forest City Stump Works",
            "Stump Quote",
            "Date: 2026-10-18",
            "Quote #: 1A2B3C4D",
            "Client: Jane Doe",
            "Address: 12 Elm St",
            "Stumps: 1",
            "",
            "Stump 1",
            "- Diameter: 10\"",
            "- Count: 2",
            "- Location: Front yard",
            "- Adjustments: Complex stump, Tight access",
            "- Photos: none",
            "- Line total: $130.00",
            "",
            "Subtotal: $130.00",
            "HST (13%): $16.90",
            "Total: $146.90",
            "",
            CLOSING_MESSAGE,
            "",
            "Regards,",
            "Forest City Stump Works",
        ];
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_optional_lines_are_skipped() {
        let mut job = Job::new();
        job.stumps[0].location_description = Some("   ".to_string());
        let lines = render(&job, &Settings::default());

        assert!(!lines.iter().any(|l| l.starts_with("Client:")));
        assert!(!lines.iter().any(|l| l.starts_with("Address:")));
        assert!(!lines.iter().any(|l| l.starts_with("- Location:")));
        assert!(!lines.iter().any(|l| l.starts_with("- Adjustments:")));
        assert!(!lines.iter().any(|l| l.starts_with("- Notes:")));
    }

    #[test]
    fn test_notes_and_photos() {
        let mut job = sample_job();
        job.stumps[0].notes = Some("Haul away chips".to_string());
        job.stumps[0].photos = vec![Photo::new("a.jpg", "data:"), Photo::new("b.jpg", "data:")];
        let lines = render(&job, &Settings::default());

        assert!(lines.contains(&"- Notes: Haul away chips".to_string()));
        assert!(lines.contains(&"- Photos: 2 (not attached; available in app)".to_string()));
    }

    #[test]
    fn test_hst_line_follows_tax_flag() {
        let job = sample_job();
        let mut settings = Settings::default();

        let with_tax = render(&job, &settings);
        assert_eq!(with_tax.iter().filter(|l| l.contains("HST")).count(), 1);

        settings.tax_enabled = false;
        let without_tax = render(&job, &settings);
        assert!(!without_tax.iter().any(|l| l.contains("HST")));
        assert!(without_tax.contains(&"Total: $130.00".to_string()));
    }

    #[test]
    fn test_exactly_one_total_line() {
        let mut job = sample_job();
        job.stumps.push(Stump::numbered(2));
        job.stumps.push(Stump::numbered(3));
        for tax_enabled in [true, false] {
            let settings = Settings {
                tax_enabled,
                ..Settings::default()
            };
            let lines = render(&job, &settings);
            assert_eq!(lines.iter().filter(|l| l.starts_with("Total:")).count(), 1);
        }
    }

    #[test]
    fn test_summary_prefixes_ignore_free_text() {
        let mut job = sample_job();
        job.client_name = "HST Holdings".to_string();
        job.stumps[0].notes = Some("Total: unknown until we dig".to_string());
        for tax_enabled in [true, false] {
            let settings = Settings {
                tax_enabled,
                company_name: "Total: Stump Co".to_string(),
                ..Settings::default()
            };
            let lines = render(&job, &settings);
            assert_eq!(lines.iter().filter(|l| l.starts_with("Total: $")).count(), 1);
            assert_eq!(
                lines.iter().filter(|l| l.starts_with("HST (")).count(),
                usize::from(tax_enabled)
            );
            assert_eq!(lines.first().map(String::as_str), Some("Total: Stump Co"));
            assert_eq!(lines.last().map(String::as_str), Some("Total: Stump Co"));
        }
    }

    #[test]
    fn test_stumps_are_numbered_in_order() {
        let mut job = sample_job();
        job.stumps.push(Stump::numbered(2));
        let lines = render(&job, &Settings::default());
        let headers: Vec<_> = lines
            .iter()
            .filter(|l| {
                l.strip_prefix("Stump ")
                    .map_or(false, |rest| rest.starts_with(|c: char| c.is_ascii_digit()))
            })
            .collect();
        assert_eq!(headers, vec!["Stump 1", "Stump 2"]);
        assert!(lines.contains(&"Stumps: 2".to_string()));
    }

    #[test]
    fn test_share_text_and_email() {
        let lines = vec!["a".to_string(), String::new(), "b".to_string()];
        assert_eq!(share_text(&lines), "a\n\nb");

        let subject = email_subject(&Settings::default());
        assert_eq!(subject, "Forest City Stump Works — Stump Quote");

        let link = mailto_link(&subject, "1+1 & more");
        assert!(link.starts_with("mailto:?subject=Forest%20City%20Stump%20Works%20%E2%80%94%20Stump%20Quote"));
        assert!(link.ends_with("&body=1%2B1%20%26%20more"));
    }
}
