use crate::payload::{Fields, FromPayload, ValidationError, deserialize_from_payload};
use serde::Serialize;

/// Hardware capabilities of a tracker. A capability the service does not mention is unsupported.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Serialize)]
pub struct TrackerFeatures {
    flash_light: bool,
    sleep_mode: bool,
    live_tracking: bool,
}

impl TrackerFeatures {
    pub fn flash_light(&self) -> bool {
        self.flash_light
    }

    pub fn sleep_mode(&self) -> bool {
        self.sleep_mode
    }

    pub fn live_tracking(&self) -> bool {
        self.live_tracking
    }
}

impl FromPayload for TrackerFeatures {
    const ENTITY: &'static str = "TrackerFeatures";

    fn from_payload(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(TrackerFeatures {
            flash_light: fields.with_default("flash_light", || false)?,
            sleep_mode: fields.with_default("sleep_mode", || false)?,
            live_tracking: fields.with_default("live_tracking", || false)?,
        })
    }
}

pub const DEFAULT_GENERATION: &str = "1.0";

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TrackerSettings {
    generation: String,
    features: TrackerFeatures,
}

impl TrackerSettings {
    /// Hardware generation as reported by the service, `"1.0"` when it is not reported.
    pub fn generation(&self) -> &str {
        &self.generation
    }

    pub fn features(&self) -> &TrackerFeatures {
        &self.features
    }
}

impl Default for TrackerSettings {
    fn default() -> Self {
        TrackerSettings {
            generation: DEFAULT_GENERATION.to_string(),
            features: TrackerFeatures::default(),
        }
    }
}

impl FromPayload for TrackerSettings {
    const ENTITY: &'static str = "TrackerSettings";

    fn from_payload(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(TrackerSettings {
            generation: fields.with_default("generation", || DEFAULT_GENERATION.to_string())?,
            features: fields.nested_or_default("features")?,
        })
    }
}

deserialize_from_payload! { TrackerFeatures TrackerSettings }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn empty_settings_are_fully_defaulted() {
        let settings = TrackerSettings::from_payload(&json!({})).unwrap();

        assert_eq!(settings, TrackerSettings::default());
        assert_eq!(settings.generation(), "1.0");
        assert_eq!(settings.features(), &TrackerFeatures::default());
    }

    #[test]
    fn partially_reported_features_default_the_rest() -> Result<(), serde_json::Error> {
        let json = r#"
          {
            "generation": "2.0",
            "features": {
              "flash_light": true,
              "buzzer": true
            }
          }
        "#;

        let settings = serde_json::from_str::<TrackerSettings>(json)?;

        assert_eq!(settings.generation(), "2.0");
        assert!(settings.features().flash_light());
        assert!(!settings.features().sleep_mode());
        assert!(!settings.features().live_tracking());

        Ok(())
    }

    #[test]
    fn invalid_feature_flag_reports_the_nested_path() {
        let error = TrackerSettings::from_payload(&json!({"features": {"flash_light": "sometimes"}})).unwrap_err();

        assert_eq!(error.entity(), "TrackerSettings");
        assert_eq!(error.path(), &"features.flash_light");
    }
}
