//! Runtime property-bag validation.
//!
//! A [`PropertySchema`] declares the accepted shape of one component's
//! configuration: field names, kinds, required/optional status, and the
//! default applied when an optional field is absent. Schemas are built once
//! per component and consulted on every [`PropertySchema::validate`] call.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single dynamically-typed property value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Free-form or token text.
    Text(String),
}

impl PropValue {
    /// Returns a short name for the value's type, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Text(_) => "text",
        }
    }

    /// Returns the boolean payload when this is a [`PropValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the integer payload when this is a [`PropValue::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text payload when this is a [`PropValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Accepted kind for one schema field.
#[derive(Debug, Clone, PartialEq)]
pub enum PropKind {
    /// Boolean flag.
    Bool,
    /// Integer with optional inclusive bounds.
    Int {
        /// Smallest accepted value.
        min: Option<i64>,
        /// Largest accepted value.
        max: Option<i64>,
    },
    /// Free-form text.
    Text,
    /// Text restricted to a closed token set.
    Enum {
        /// Accepted tokens, in declaration order.
        allowed: Vec<&'static str>,
    },
}

impl PropKind {
    /// Convenience constructor for an unbounded integer field.
    pub fn int() -> Self {
        Self::Int {
            min: None,
            max: None,
        }
    }

    /// Convenience constructor for an integer field with a lower bound.
    pub fn int_min(min: i64) -> Self {
        Self::Int {
            min: Some(min),
            max: None,
        }
    }

    /// Convenience constructor for a closed token set.
    pub fn tokens(allowed: &[&'static str]) -> Self {
        Self::Enum {
            allowed: allowed.to_vec(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Self::Bool => "bool".to_string(),
            Self::Int { .. } => "int".to_string(),
            Self::Text => "text".to_string(),
            Self::Enum { allowed } => format!("one of [{}]", allowed.join(", ")),
        }
    }

    fn accepts(&self, value: &PropValue) -> Result<(), String> {
        match (self, value) {
            (Self::Bool, PropValue::Bool(_)) => Ok(()),
            (Self::Int { min, max }, PropValue::Int(raw)) => {
                if let Some(min) = min {
                    if raw < min {
                        return Err(format!("{raw} is below the minimum of {min}"));
                    }
                }
                if let Some(max) = max {
                    if raw > max {
                        return Err(format!("{raw} is above the maximum of {max}"));
                    }
                }
                Ok(())
            }
            (Self::Text, PropValue::Text(_)) => Ok(()),
            (Self::Enum { allowed }, PropValue::Text(raw)) => {
                if allowed.iter().any(|token| *token == raw.as_str()) {
                    Ok(())
                } else {
                    Err(format!(
                        "`{raw}` is not one of [{}]",
                        allowed.join(", ")
                    ))
                }
            }
            (kind, value) => Err(format!(
                "expected {}, got {}",
                kind.describe(),
                value.type_name()
            )),
        }
    }
}

/// One declared field of a [`PropertySchema`].
#[derive(Debug, Clone, PartialEq)]
pub struct PropField {
    /// Field name as supplied by callers.
    pub name: &'static str,
    /// Accepted kind.
    pub kind: PropKind,
    /// Whether the field must be present in the input bag.
    pub required: bool,
    /// Default applied when an optional field is absent.
    pub default: Option<PropValue>,
}

/// Raw caller-supplied property bag awaiting validation.
pub type PropBag = BTreeMap<String, PropValue>;

/// Error raised while constructing a schema. Construction failures indicate
/// a mismatch between a field kind and its declared default and are fatal.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SchemaError {
    /// Two fields share one name.
    #[error("schema `{component}` declares field `{field}` more than once")]
    DuplicateField {
        /// Component the schema belongs to.
        component: &'static str,
        /// Offending field name.
        field: &'static str,
    },
    /// An optional field's default does not satisfy its own kind.
    #[error("schema `{component}` field `{field}` has an invalid default: {reason}")]
    InvalidDefault {
        /// Component the schema belongs to.
        component: &'static str,
        /// Offending field name.
        field: &'static str,
        /// Why the default was rejected.
        reason: String,
    },
}

/// Error describing exactly which field of an input bag was rejected.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ValidationError {
    /// A required field was absent.
    #[error("`{component}` requires property `{field}`")]
    MissingField {
        /// Component whose schema rejected the bag.
        component: &'static str,
        /// Missing field name.
        field: &'static str,
    },
    /// A field was present but its value did not satisfy the declared kind.
    #[error("`{component}` property `{field}` is invalid: {reason}")]
    InvalidValue {
        /// Component whose schema rejected the bag.
        component: &'static str,
        /// Offending field name.
        field: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// The bag carried a field the schema does not declare.
    #[error("`{component}` does not accept property `{field}`")]
    UnknownField {
        /// Component whose schema rejected the bag.
        component: &'static str,
        /// Unknown field name.
        field: String,
    },
}

/// Validated, fully-defaulted property bag.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedProps {
    values: BTreeMap<&'static str, PropValue>,
}

impl ValidatedProps {
    /// Returns the value for `field`, which is present for every declared
    /// field that is required or carries a default.
    pub fn get(&self, field: &str) -> Option<&PropValue> {
        self.values.get(field)
    }

    /// Returns a boolean field, when present and boolean.
    pub fn bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(PropValue::as_bool)
    }

    /// Returns an integer field, when present and integral.
    pub fn int(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(PropValue::as_int)
    }

    /// Returns a text or token field, when present and textual.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(PropValue::as_text)
    }
}

/// Declared shape of one component's dynamic configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    component: &'static str,
    fields: Vec<PropField>,
}

impl PropertySchema {
    /// Starts a schema for the named component.
    pub fn builder(component: &'static str) -> PropertySchemaBuilder {
        PropertySchemaBuilder {
            component,
            fields: Vec::new(),
        }
    }

    /// Returns the component name the schema belongs to.
    pub fn component(&self) -> &'static str {
        self.component
    }

    /// Returns the declared fields in declaration order.
    pub fn fields(&self) -> &[PropField] {
        &self.fields
    }

    /// Validates `input` against the schema.
    ///
    /// Required fields must be present and well-typed; optional fields
    /// absent from the input receive their declared default; token fields
    /// outside the declared set and fields the schema does not declare are
    /// rejected.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] naming the first offending field.
    pub fn validate(&self, input: &PropBag) -> Result<ValidatedProps, ValidationError> {
        for name in input.keys() {
            if !self.fields.iter().any(|field| field.name == name) {
                return Err(ValidationError::UnknownField {
                    component: self.component,
                    field: name.clone(),
                });
            }
        }

        let mut values = BTreeMap::new();
        for field in &self.fields {
            match input.get(field.name) {
                Some(value) => {
                    field.kind.accepts(value).map_err(|reason| {
                        ValidationError::InvalidValue {
                            component: self.component,
                            field: field.name,
                            reason,
                        }
                    })?;
                    values.insert(field.name, value.clone());
                }
                None if field.required => {
                    return Err(ValidationError::MissingField {
                        component: self.component,
                        field: field.name,
                    });
                }
                None => {
                    if let Some(default) = &field.default {
                        values.insert(field.name, default.clone());
                    }
                }
            }
        }

        Ok(ValidatedProps { values })
    }
}

/// Incremental [`PropertySchema`] construction.
#[derive(Debug)]
pub struct PropertySchemaBuilder {
    component: &'static str,
    fields: Vec<PropField>,
}

impl PropertySchemaBuilder {
    /// Declares a required field.
    pub fn required(mut self, name: &'static str, kind: PropKind) -> Self {
        self.fields.push(PropField {
            name,
            kind,
            required: true,
            default: None,
        });
        self
    }

    /// Declares an optional field with the default applied when absent.
    pub fn optional(mut self, name: &'static str, kind: PropKind, default: PropValue) -> Self {
        self.fields.push(PropField {
            name,
            kind,
            required: false,
            default: Some(default),
        });
        self
    }

    /// Declares an optional field that stays absent when not supplied.
    pub fn optional_bare(mut self, name: &'static str, kind: PropKind) -> Self {
        self.fields.push(PropField {
            name,
            kind,
            required: false,
            default: None,
        });
        self
    }

    /// Finishes the schema, verifying field-name uniqueness and that every
    /// declared default satisfies its own kind.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemaError`] for duplicate fields or mismatched
    /// defaults. Component schema catalogs treat this as a fatal startup
    /// failure.
    pub fn build(self) -> Result<PropertySchema, SchemaError> {
        for (index, field) in self.fields.iter().enumerate() {
            if self.fields[..index].iter().any(|prev| prev.name == field.name) {
                return Err(SchemaError::DuplicateField {
                    component: self.component,
                    field: field.name,
                });
            }
            if let Some(default) = &field.default {
                field.kind.accepts(default).map_err(|reason| {
                    SchemaError::InvalidDefault {
                        component: self.component,
                        field: field.name,
                        reason,
                    }
                })?;
            }
        }

        Ok(PropertySchema {
            component: self.component,
            fields: self.fields,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn button_schema() -> PropertySchema {
        PropertySchema::builder("button")
            .optional(
                "style",
                PropKind::tokens(&["primary", "secondary"]),
                PropValue::Text("primary".to_string()),
            )
            .optional(
                "variant",
                PropKind::tokens(&["solid", "soft", "link", "outline"]),
                PropValue::Text("solid".to_string()),
            )
            .optional(
                "size",
                PropKind::tokens(&["xs", "sm", "base", "lg"]),
                PropValue::Text("base".to_string()),
            )
            .optional("block", PropKind::Bool, PropValue::Bool(false))
            .optional("disabled", PropKind::Bool, PropValue::Bool(false))
            .build()
            .expect("button test schema is well formed")
    }

    fn bag(entries: &[(&str, PropValue)]) -> PropBag {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn absent_optional_fields_receive_their_defaults() {
        let props = button_schema()
            .validate(&bag(&[("size", PropValue::Text("lg".to_string()))]))
            .expect("bag is valid");

        assert_eq!(props.text("size"), Some("lg"));
        assert_eq!(props.text("variant"), Some("solid"));
        assert_eq!(props.text("style"), Some("primary"));
        assert_eq!(props.bool("block"), Some(false));
    }

    #[test]
    fn unknown_enum_token_is_rejected_with_the_field_name() {
        let err = button_schema()
            .validate(&bag(&[("variant", PropValue::Text("ghost".to_string()))]))
            .expect_err("ghost is not a button variant");

        match err {
            ValidationError::InvalidValue { field, .. } => assert_eq!(field, "variant"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn wrong_primitive_type_is_rejected() {
        let err = button_schema()
            .validate(&bag(&[("block", PropValue::Text("yes".to_string()))]))
            .expect_err("block takes a bool");

        assert!(matches!(
            err,
            ValidationError::InvalidValue { field: "block", .. }
        ));
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let schema = PropertySchema::builder("pagination")
            .required("current_page", PropKind::int_min(1))
            .required("total_pages", PropKind::int_min(1))
            .build()
            .expect("pagination test schema is well formed");

        let err = schema
            .validate(&bag(&[("current_page", PropValue::Int(3))]))
            .expect_err("total_pages is required");

        assert_eq!(
            err,
            ValidationError::MissingField {
                component: "pagination",
                field: "total_pages",
            }
        );
    }

    #[test]
    fn out_of_range_int_is_rejected() {
        let schema = PropertySchema::builder("pagination")
            .required("current_page", PropKind::int_min(1))
            .build()
            .expect("schema is well formed");

        let err = schema
            .validate(&bag(&[("current_page", PropValue::Int(0))]))
            .expect_err("zero is below the minimum");

        assert!(matches!(
            err,
            ValidationError::InvalidValue {
                field: "current_page",
                ..
            }
        ));
    }

    #[test]
    fn undeclared_fields_are_rejected_not_stripped() {
        let err = button_schema()
            .validate(&bag(&[("elevation", PropValue::Int(2))]))
            .expect_err("button has no elevation prop");

        assert_eq!(
            err,
            ValidationError::UnknownField {
                component: "button",
                field: "elevation".to_string(),
            }
        );
    }

    #[test]
    fn mismatched_default_fails_at_build_time() {
        let err = PropertySchema::builder("badge")
            .optional(
                "tone",
                PropKind::tokens(&["neutral", "info"]),
                PropValue::Text("primary".to_string()),
            )
            .build()
            .expect_err("default token is outside the set");

        assert!(matches!(err, SchemaError::InvalidDefault { field: "tone", .. }));
    }

    #[test]
    fn validation_is_deterministic() {
        let schema = button_schema();
        let input = bag(&[
            ("size", PropValue::Text("sm".to_string())),
            ("block", PropValue::Bool(true)),
        ]);

        let first = schema.validate(&input).expect("bag is valid");
        let second = schema.validate(&input).expect("bag is valid");
        assert_eq!(first, second);
    }
}
