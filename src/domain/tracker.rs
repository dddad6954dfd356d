use crate::domain::{DeepSleep, LedBrightness, Position, TrackerSettings};
use crate::payload::{Fields, FromPayload, ValidationError, deserialize_from_payload};
use serde::Serialize;
use serde_json::{Map, Value};

/// Complete state of a tracker as returned by the service.
///
/// Capabilities always resolve (missing settings mean "not supported"), whereas hardware settings
/// that were not reported stay `None` so callers can tell them apart from a reported value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tracker {
    name: String,
    battery: i64, // In percent
    charging: bool,
    position: Option<Position>,
    tracker_settings: TrackerSettings,
    led_brightness: Option<LedBrightness>,
    deep_sleep: Option<DeepSleep>,
    led_activatable: Option<Map<String, Value>>,
}

impl Tracker {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn battery(&self) -> i64 {
        self.battery
    }

    pub fn charging(&self) -> bool {
        self.charging
    }

    pub fn position(&self) -> Option<&Position> {
        self.position.as_ref()
    }

    pub fn tracker_settings(&self) -> &TrackerSettings {
        &self.tracker_settings
    }

    pub fn led_brightness(&self) -> Option<&LedBrightness> {
        self.led_brightness.as_ref()
    }

    pub fn deep_sleep(&self) -> Option<&DeepSleep> {
        self.deep_sleep.as_ref()
    }

    /// Raw LED availability map. Its shape is not stable across service versions, so it is kept
    /// unvalidated.
    pub fn led_activatable(&self) -> Option<&Map<String, Value>> {
        self.led_activatable.as_ref()
    }

    pub fn led_brightness_value(&self) -> Option<i64> {
        self.led_brightness.as_ref().map(LedBrightness::value)
    }

    /// Whether the LED can be switched on at all, judged by the truthiness of the `overall` entry.
    pub fn led_activatable_overall(&self) -> bool {
        self.led_activatable
            .as_ref()
            .and_then(|map| map.get("overall"))
            .is_some_and(is_truthy)
    }

    pub fn deep_sleep_value(&self) -> Option<bool> {
        self.deep_sleep.as_ref().map(DeepSleep::value)
    }

    pub fn supports_flash_light(&self) -> bool {
        self.tracker_settings.features().flash_light()
    }

    pub fn supports_sleep_mode(&self) -> bool {
        self.tracker_settings.features().sleep_mode()
    }

    pub fn supports_live_tracking(&self) -> bool {
        self.tracker_settings.features().live_tracking()
    }
}

impl FromPayload for Tracker {
    const ENTITY: &'static str = "Tracker";

    fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        let fields = Fields::of(Self::ENTITY, value)?;
        Ok(Tracker {
            name: fields.required("name")?,
            battery: fields.required("battery")?,
            charging: fields.with_default("charging", || false)?,
            position: fields.optional_nested("position")?,
            tracker_settings: fields.nested_or_default("tracker_settings")?,
            led_brightness: fields.optional_nested("led_brightness")?,
            deep_sleep: fields.optional_nested("deep_sleep")?,
            led_activatable: fields.optional("led_activatable")?,
        })
    }
}

deserialize_from_payload! { Tracker }

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
