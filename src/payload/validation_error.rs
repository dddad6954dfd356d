use serde_json::Value;
use std::fmt::{Display, Formatter};
use thiserror::Error;

/// Failure to construct an entity from a decoded payload.
///
/// `entity` is always the outermost entity being constructed; failures in nested entities are
/// re-anchored onto it with the nested field name prepended to `path`.
#[derive(Error, Debug, Clone, PartialEq)]
#[error("invalid {entity} payload at '{path}': {kind}")]
pub struct ValidationError {
    entity: &'static str,
    path: FieldPath,
    kind: ValidationErrorKind,
}

impl ValidationError {
    pub fn new(entity: &'static str, path: FieldPath, kind: ValidationErrorKind) -> Self {
        ValidationError { entity, path, kind }
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn path(&self) -> &FieldPath {
        &self.path
    }

    pub fn kind(&self) -> &ValidationErrorKind {
        &self.kind
    }

    /// Re-anchors an error raised by a nested entity onto its parent.
    pub(crate) fn within(mut self, entity: &'static str, segment: impl Into<String>) -> Self {
        self.entity = entity;
        self.path.0.insert(0, segment.into());
        self
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationErrorKind {
    #[error("field required")]
    Missing,
    #[error("expected {expected}, found {found}")]
    InvalidType { expected: &'static str, found: String },
    #[error("{value} is out of range for {expected}")]
    OutOfRange { expected: &'static str, value: String },
}

impl ValidationErrorKind {
    pub(crate) fn invalid_type(expected: &'static str, found: &Value) -> Self {
        ValidationErrorKind::InvalidType {
            expected,
            found: describe(found),
        }
    }
}

/// Dot separated location of a field, starting at the outermost entity.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct FieldPath(Vec<String>);

impl FieldPath {
    pub fn root() -> Self {
        FieldPath(Vec::new())
    }

    pub fn field(name: &str) -> Self {
        FieldPath(vec![name.to_owned()])
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for FieldPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_root() {
            return write!(f, "(root)");
        }
        write!(f, "{}", self.0.join("."))
    }
}

impl PartialEq<&str> for FieldPath {
    fn eq(&self, other: &&str) -> bool {
        !self.is_root() && self.0.join(".") == *other
    }
}

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(value) => format!("boolean {}", value),
        Value::Number(value) => format!("number {}", value),
        Value::String(value) => format!("string {:?}", value),
        Value::Array(_) => "an array".to_string(),
        Value::Object(_) => "an object".to_string(),
    }
}
