mod field_value;
mod fields;
mod validation_error;

pub use field_value::FieldValue;
pub use fields::Fields;
pub use validation_error::{FieldPath, ValidationError, ValidationErrorKind};

use serde_json::Value;

/// An entity that is built from a decoded service payload, validating every field on the way.
///
/// Construction is all or nothing: either every required field is present and well typed, or a
/// single [`ValidationError`] describes the first offending field.
pub trait FromPayload: Sized {
    const ENTITY: &'static str;

    fn from_payload(value: &Value) -> Result<Self, ValidationError>;
}

impl<T: FromPayload> FromPayload for Vec<T> {
    const ENTITY: &'static str = T::ENTITY;

    fn from_payload(value: &Value) -> Result<Self, ValidationError> {
        match value {
            Value::Array(items) => items
                .iter()
                .enumerate()
                .map(|(index, item)| T::from_payload(item).map_err(|e| e.within(T::ENTITY, index.to_string())))
                .collect(),
            _ => Err(ValidationError::new(
                T::ENTITY,
                FieldPath::root(),
                ValidationErrorKind::invalid_type("an array", value),
            )),
        }
    }
}

/// Implements `serde::Deserialize` on top of [`FromPayload`], so entities can be read straight
/// from `serde_json` with the same validation rules.
macro_rules! deserialize_from_payload {
    ($($entity:ident)*) => ($(
        impl<'de> serde::Deserialize<'de> for $entity {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                <$entity as $crate::payload::FromPayload>::from_payload(&value).map_err(serde::de::Error::custom)
            }
        }
    )*)
}

pub(crate) use deserialize_from_payload;
