use crate::payload::{Fields, FromPayload, ValidationError, deserialize_from_payload};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LedBrightness {
    value: i64,
    status: Option<String>,
}

impl LedBrightness {
    pub fn value(&self) -> i64 {
        self.value
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}

impl FromPayload for LedBrightness {
    const ENTITY: &'static str = "LedBrightness";

    fn from_payload(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(LedBrightness {
            value: fields.required("value")?,
            status: fields.optional("status")?,
        })
    }
}

deserialize_from_payload! { LedBrightness }
