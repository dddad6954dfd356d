use crate::payload::ValidationErrorKind;
use serde_json::{Map, Value};

/// A scalar (or opaque) field type that can be read out of a payload value.
///
/// The service reports some numeric and boolean fields as text, so conversions are lax about
/// representation but strict about the value: anything that does not fit the declared type
/// exactly is rejected instead of being truncated or wrapped.
pub trait FieldValue: Sized {
    const EXPECTED: &'static str;

    fn coerce(value: &Value) -> Result<Self, ValidationErrorKind>;

    fn invalid(value: &Value) -> ValidationErrorKind {
        ValidationErrorKind::invalid_type(Self::EXPECTED, value)
    }
}

impl FieldValue for i64 {
    const EXPECTED: &'static str = "an integer";

    fn coerce(value: &Value) -> Result<Self, ValidationErrorKind> {
        match value {
            Value::Number(number) => {
                if let Some(n) = number.as_i64() {
                    return Ok(n);
                }
                if number.is_u64() {
                    return Err(out_of_range(Self::EXPECTED, number.to_string()));
                }
                match number.as_f64() {
                    Some(n) if n.fract() != 0.0 => Err(Self::invalid(value)),
                    Some(n) if n >= i64::MIN as f64 && n < i64::MAX as f64 => Ok(n as i64),
                    Some(_) => Err(out_of_range(Self::EXPECTED, number.to_string())),
                    None => Err(Self::invalid(value)),
                }
            }
            Value::String(text) => {
                let text = text.trim();
                match text.parse::<i64>() {
                    Ok(n) => Ok(n),
                    Err(_) if is_integer_literal(text) => Err(out_of_range(Self::EXPECTED, text.to_owned())),
                    Err(_) => Err(Self::invalid(value)),
                }
            }
            _ => Err(Self::invalid(value)),
        }
    }
}

impl FieldValue for f64 {
    const EXPECTED: &'static str = "a float";

    fn coerce(value: &Value) -> Result<Self, ValidationErrorKind> {
        match value {
            Value::Number(number) => number.as_f64().ok_or_else(|| Self::invalid(value)),
            Value::String(text) => match text.trim().parse::<f64>() {
                Ok(n) if n.is_finite() => Ok(n),
                _ => Err(Self::invalid(value)),
            },
            _ => Err(Self::invalid(value)),
        }
    }
}

impl FieldValue for bool {
    const EXPECTED: &'static str = "a boolean";

    fn coerce(value: &Value) -> Result<Self, ValidationErrorKind> {
        match value {
            Value::Bool(flag) => Ok(*flag),
            Value::Number(number) => match number.as_f64() {
                Some(n) if n == 0.0 => Ok(false),
                Some(n) if n == 1.0 => Ok(true),
                _ => Err(Self::invalid(value)),
            },
            Value::String(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" | "on" | "t" | "y" => Ok(true),
                "false" | "0" | "no" | "off" | "f" | "n" => Ok(false),
                _ => Err(Self::invalid(value)),
            },
            _ => Err(Self::invalid(value)),
        }
    }
}

impl FieldValue for String {
    const EXPECTED: &'static str = "a string";

    fn coerce(value: &Value) -> Result<Self, ValidationErrorKind> {
        match value {
            Value::String(text) => Ok(text.clone()),
            _ => Err(Self::invalid(value)),
        }
    }
}

// Opaque key/value maps are taken as-is, only the container kind is checked.
impl FieldValue for Map<String, Value> {
    const EXPECTED: &'static str = "an object";

    fn coerce(value: &Value) -> Result<Self, ValidationErrorKind> {
        match value {
            Value::Object(map) => Ok(map.clone()),
            _ => Err(Self::invalid(value)),
        }
    }
}

fn out_of_range(expected: &'static str, value: String) -> ValidationErrorKind {
    ValidationErrorKind::OutOfRange { expected, value }
}

fn is_integer_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['-', '+']).unwrap_or(text);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::integer(json!(80), 80)]
    #[case::negative(json!(-3), -3)]
    #[case::integral_float(json!(80.0), 80)]
    #[case::numeric_text(json!("80"), 80)]
    #[case::padded_text(json!(" 42 "), 42)]
    fn coerces_integers(#[case] value: Value, #[case] expected: i64) {
        assert_eq!(i64::coerce(&value), Ok(expected));
    }

    #[rstest]
    #[case::fraction(json!(80.5))]
    #[case::boolean(json!(true))]
    #[case::word(json!("eighty"))]
    #[case::fractional_text(json!("80.5"))]
    #[case::null(json!(null))]
    #[case::object(json!({"value": 1}))]
    fn rejects_values_that_are_not_integers(#[case] value: Value) {
        assert!(matches!(i64::coerce(&value), Err(ValidationErrorKind::InvalidType { .. })));
    }

    #[rstest]
    #[case::u64(json!(u64::MAX))]
    #[case::huge_float(json!(1e20))]
    #[case::huge_text(json!("99999999999999999999999"))]
    fn rejects_integers_that_do_not_fit(#[case] value: Value) {
        assert!(matches!(i64::coerce(&value), Err(ValidationErrorKind::OutOfRange { .. })));
    }

    #[rstest]
    #[case::float(json!(52.1), 52.1)]
    #[case::integer(json!(13), 13.0)]
    #[case::text(json!("13.4"), 13.4)]
    fn coerces_floats(#[case] value: Value, #[case] expected: f64) {
        assert_eq!(f64::coerce(&value), Ok(expected));
    }

    #[rstest]
    #[case::not_a_number(json!("NaN"))]
    #[case::infinite(json!("inf"))]
    #[case::boolean(json!(false))]
    fn rejects_values_that_are_not_floats(#[case] value: Value) {
        assert!(f64::coerce(&value).is_err());
    }

    #[rstest]
    #[case::literal_true(json!(true), true)]
    #[case::literal_false(json!(false), false)]
    #[case::one(json!(1), true)]
    #[case::zero(json!(0), false)]
    #[case::integral_one(json!(1.0), true)]
    #[case::integral_zero(json!(0.0), false)]
    #[case::text_true(json!("True"), true)]
    #[case::text_off(json!("off"), false)]
    fn coerces_booleans(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(bool::coerce(&value), Ok(expected));
    }

    #[rstest]
    #[case::two(json!(2))]
    #[case::fraction(json!(0.5))]
    #[case::negative(json!(-1))]
    #[case::word(json!("maybe"))]
    #[case::null(json!(null))]
    fn rejects_values_that_are_not_booleans(#[case] value: Value) {
        assert!(bool::coerce(&value).is_err());
    }

    #[test]
    fn strings_are_not_coerced_from_numbers() {
        assert_eq!(String::coerce(&json!("Rex")), Ok("Rex".to_string()));
        assert!(String::coerce(&json!(42)).is_err());
    }

    #[test]
    fn maps_keep_their_contents() {
        let value = json!({"overall": true, "nested": {"a": [1, 2]}});

        let map = Map::coerce(&value).unwrap();

        assert_eq!(Value::Object(map), value);
        assert!(Map::<String, Value>::coerce(&json!([])).is_err());
    }
}
