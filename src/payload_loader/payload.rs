use crate::domain::{Device, PhoneVerificationResponse, SmsCodeResponse, Tracker};
use crate::payload::{FromPayload, ValidationError};
use serde::Deserialize;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// The service response a payload file is expected to hold.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayloadKind {
    Tracker,
    Devices,
    SmsCode,
    PhoneVerification,
}

#[derive(Debug, PartialEq)]
pub enum Payload {
    Tracker(Tracker),
    Devices(Vec<Device>),
    SmsCode(SmsCodeResponse),
    PhoneVerification(PhoneVerificationResponse),
}

impl Payload {
    pub fn parse(kind: PayloadKind, json: &str) -> Result<Payload, PayloadError> {
        let value = serde_json::from_str::<serde_json::Value>(json)?;
        let payload = match kind {
            PayloadKind::Tracker => Payload::Tracker(Tracker::from_payload(&value)?),
            PayloadKind::Devices => Payload::Devices(Vec::from_payload(&value)?),
            PayloadKind::SmsCode => Payload::SmsCode(SmsCodeResponse::from_payload(&value)?),
            PayloadKind::PhoneVerification => Payload::PhoneVerification(PhoneVerificationResponse::from_payload(&value)?),
        };
        Ok(payload)
    }
}

impl Display for Payload {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Payload::Tracker(tracker) => {
                write!(f, "🐾 '{}' battery {}%", tracker.name(), tracker.battery())?;
                if tracker.charging() {
                    write!(f, " (charging)")?;
                }
                match tracker.position() {
                    Some(position) => write!(f, ", at {}, {} ±{} m", position.lat(), position.lng(), position.accuracy())?,
                    None => write!(f, ", no position")?,
                }
                write!(
                    f,
                    ", flash light: {}, sleep mode: {}, live tracking: {}, LED: {}, deep sleep: {}",
                    tracker.supports_flash_light(),
                    tracker.supports_sleep_mode(),
                    tracker.supports_live_tracking(),
                    match (tracker.led_activatable_overall(), tracker.led_brightness_value()) {
                        (false, _) => "unavailable".to_string(),
                        (true, Some(brightness)) => format!("{}%", brightness),
                        (true, None) => "available".to_string(),
                    },
                    tracker.deep_sleep_value().map_or("unknown".to_string(), |value| value.to_string())
                )
            }
            Payload::Devices(devices) => {
                let serials = devices.iter().map(Device::serialnumber).collect::<Vec<_>>();
                write!(f, "📟 {} device(s): {}", devices.len(), serials.join(", "))
            }
            Payload::SmsCode(response) => write!(f, "✉️ SMS code request {}", response.id()),
            Payload::PhoneVerification(response) => write!(
                f,
                "🔑 phone verified, refresh token {}",
                if response.user_token().refresh_token().is_some() { "issued" } else { "missing" }
            ),
        }
    }
}

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
