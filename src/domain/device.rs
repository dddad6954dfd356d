use crate::payload::{Fields, FromPayload, ValidationError, deserialize_from_payload};
use serde::Serialize;

/// Entry of the account's device list, used to pair a tracker.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Device {
    serialnumber: String,
    token: String,
}

impl Device {
    pub fn serialnumber(&self) -> &str {
        &self.serialnumber
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}

impl FromPayload for Device {
    const ENTITY: &'static str = "Device";

    fn from_payload(value: &serde_json::Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(Device {
            serialnumber: fields.required("serialnumber")?,
            token: fields.required("token")?,
        })
    }
}

deserialize_from_payload! { Device }
