use crate::payload::{FieldPath, FieldValue, FromPayload, ValidationError, ValidationErrorKind};
use serde_json::{Map, Value};

/// Read-only view over the keys of one entity's payload object.
///
/// Keys that are never asked for are ignored, so payloads carrying fields added by the service
/// later on still decode.
pub struct Fields<'a> {
    entity: &'static str,
    map: &'a Map<String, Value>,
}

impl<'a> Fields<'a> {
    pub fn of(entity: &'static str, value: &'a Value) -> Result<Self, ValidationError> {
        match value {
            Value::Object(map) => Ok(Fields { entity, map }),
            _ => Err(ValidationError::new(
                entity,
                FieldPath::root(),
                ValidationErrorKind::invalid_type("an object", value),
            )),
        }
    }

    /// Must be present, non-null and convertible.
    pub fn required<T: FieldValue>(&self, name: &str) -> Result<T, ValidationError> {
        match self.map.get(name) {
            Some(value) => T::coerce(value).map_err(|kind| self.error(name, kind)),
            None => Err(self.error(name, ValidationErrorKind::Missing)),
        }
    }

    /// Absent or `null` resolves to `None`.
    pub fn optional<T: FieldValue>(&self, name: &str) -> Result<Option<T>, ValidationError> {
        match self.map.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::coerce(value).map(Some).map_err(|kind| self.error(name, kind)),
        }
    }

    /// Absent resolves to `default`; an explicit `null` is still a type error.
    pub fn with_default<T: FieldValue>(&self, name: &str, default: impl FnOnce() -> T) -> Result<T, ValidationError> {
        match self.map.get(name) {
            Some(value) => T::coerce(value).map_err(|kind| self.error(name, kind)),
            None => Ok(default()),
        }
    }

    pub fn nested<T: FromPayload>(&self, name: &str) -> Result<T, ValidationError> {
        match self.map.get(name) {
            Some(value) => T::from_payload(value).map_err(|e| e.within(self.entity, name)),
            None => Err(self.error(name, ValidationErrorKind::Missing)),
        }
    }

    pub fn optional_nested<T: FromPayload>(&self, name: &str) -> Result<Option<T>, ValidationError> {
        match self.map.get(name) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => T::from_payload(value).map(Some).map_err(|e| e.within(self.entity, name)),
        }
    }

    pub fn nested_or_default<T: FromPayload + Default>(&self, name: &str) -> Result<T, ValidationError> {
        match self.map.get(name) {
            Some(value) => T::from_payload(value).map_err(|e| e.within(self.entity, name)),
            None => Ok(T::default()),
        }
    }

    fn error(&self, name: &str, kind: ValidationErrorKind) -> ValidationError {
        ValidationError::new(self.entity, FieldPath::field(name), kind)
    }
}
