//! # Settings Commands

use tracing::{debug, info};

use stump_core::types::{Settings, SettingsPatch};
use stump_core::validation::{validate_base_rate, validate_tax_rate};
use stump_store::KeyValueStore;

use crate::error::ApiError;
use crate::state::SettingsState;

pub fn get_settings<S: KeyValueStore>(settings: &SettingsState<S>) -> Settings {
    debug!("get_settings command");
    settings.current()
}

/// Validates and applies a settings change.
///
/// ## Validation
/// - `baseRatePerInch`: between 0 and 1000
/// - `taxRate`: a fraction between 0 and 1 (0.13, not 13)
///
/// A rejected patch changes nothing.
pub fn update_settings<S: KeyValueStore>(
    settings: &SettingsState<S>,
    patch: SettingsPatch,
) -> Result<Settings, ApiError> {
    if let Some(rate) = patch.base_rate_per_inch {
        validate_base_rate(rate)?;
    }
    if let Some(rate) = patch.tax_rate {
        validate_tax_rate(rate)?;
    }

    info!(?patch, "update_settings command");
    Ok(settings.with_settings_mut(|s| s.update_settings(patch).clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use stump_store::MemoryStore;

    #[test]
    fn test_update_settings() {
        let state = SettingsState::new(MemoryStore::new());
        let updated = update_settings(
            &state,
            SettingsPatch {
                base_rate_per_inch: Some(6.0),
                tax_enabled: Some(false),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(updated.base_rate_per_inch, 6.0);
        assert!(!updated.tax_enabled);
        assert_eq!(get_settings(&state), updated);
    }

    #[test]
    fn test_invalid_rates_rejected() {
        let state = SettingsState::new(MemoryStore::new());

        let err = update_settings(
            &state,
            SettingsPatch {
                tax_rate: Some(13.0),
                company_name: Some("Changed".into()),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = update_settings(
            &state,
            SettingsPatch {
                base_rate_per_inch: Some(-1.0),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);

        let err = update_settings(
            &state,
            SettingsPatch {
                base_rate_per_inch: Some(1e306),
                ..Default::default()
            },
        )
        .unwrap_err();
        assert_eq!(err.message, "baseRatePerInch must be between 0 and 1000");

        assert_eq!(get_settings(&state), Settings::default());
    }
}
