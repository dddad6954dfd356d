use crate::payload::{Fields, FromPayload, ValidationError, deserialize_from_payload};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DeepSleep {
    value: bool,
    status: Option<String>,
}

impl DeepSleep {
    pub fn value(&self) -> bool {
        self.value
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl FromPayload for DeepSleep {
    const ENTITY: &'static str = "DeepSleep";

    fn from_payload(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(DeepSleep {
            value: fields.required("value")?,
            status: fields.optional("status")?,
        })
    }
}

deserialize_from_payload! { DeepSleep }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payload::ValidationErrorKind;
    use serde_json::json;

    #[test]
    fn deserialize_deep_sleep() -> Result<(), serde_json::Error> {
        let deep_sleep = serde_json::from_value::<DeepSleep>(json!({"value": true, "status": "applied"}))?;

        assert!(deep_sleep.value());
        assert_eq!(deep_sleep.status(), Some("applied"));

        Ok(())
    }

    #[test]
    fn value_must_be_a_boolean() {
        let result = serde_json::from_value::<DeepSleep>(json!({"value": 3}));

        assert!(result.is_err());
    }

    #[test]
    fn value_is_required() {
        let error = DeepSleep::from_payload(&json!({"status": "pending"})).unwrap_err();

        assert_eq!(error.entity(), "DeepSleep");
        assert_eq!(error.path(), &"value");
        assert_eq!(error.kind(), &ValidationErrorKind::Missing);
    }
}
