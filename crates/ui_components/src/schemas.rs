//! Runtime schemas for dynamically-driven component configuration.
//!
//! Typed props carry the component contracts at compile time; these
//! schemas cover the places where configuration genuinely arrives
//! untyped, such as the gallery playground. Each schema is built once
//! and mirrors the corresponding axis enums exactly; drift between the
//! two is caught by the tests at the bottom of this module.

use std::sync::OnceLock;

use ui_contract::{PropBag, PropKind, PropValue, PropertySchema, ValidationError};

use crate::components::{ButtonSize, ButtonStyle, ButtonVariant};

/// Schema for a dynamically-configured button.
pub fn button_schema() -> &'static PropertySchema {
    static SCHEMA: OnceLock<PropertySchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
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
            .optional("icon_only", PropKind::Bool, PropValue::Bool(false))
            .optional("disabled", PropKind::Bool, PropValue::Bool(false))
            .build()
            .expect("button schema is well formed")
    })
}

/// Schema for dynamically-configured pagination.
pub fn pagination_schema() -> &'static PropertySchema {
    static SCHEMA: OnceLock<PropertySchema> = OnceLock::new();
    SCHEMA.get_or_init(|| {
        PropertySchema::builder("pagination")
            .required("current_page", PropKind::int_min(1))
            .required("total_pages", PropKind::int_min(1))
            .optional("show_first_last", PropKind::Bool, PropValue::Bool(false))
            .build()
            .expect("pagination schema is well formed")
    })
}

/// Button configuration decoded from a validated property bag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicButtonProps {
    /// Color family.
    pub style: ButtonStyle,
    /// Visual treatment.
    pub variant: ButtonVariant,
    /// Sizing token.
    pub size: ButtonSize,
    /// Full-width structure.
    pub block: bool,
    /// Icon-only structure.
    pub icon_only: bool,
    /// Disabled state.
    pub disabled: bool,
}

/// Validates a raw bag against the button schema and decodes it into
/// typed axis values.
///
/// # Errors
///
/// Returns the schema's [`ValidationError`] naming the offending field.
pub fn button_props_from_bag(input: &PropBag) -> Result<DynamicButtonProps, ValidationError> {
    let props = button_schema().validate(input)?;

    let style = props
        .text("style")
        .and_then(ButtonStyle::from_token)
        .expect("schema-validated style token parses");
    let variant = props
        .text("variant")
        .and_then(ButtonVariant::from_token)
        .expect("schema-validated variant token parses");
    let size = props
        .text("size")
        .and_then(ButtonSize::from_token)
        .expect("schema-validated size token parses");

    Ok(DynamicButtonProps {
        style,
        variant,
        size,
        block: props.bool("block").unwrap_or(false),
        icon_only: props.bool("icon_only").unwrap_or(false),
        disabled: props.bool("disabled").unwrap_or(false),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn bag(entries: &[(&str, PropValue)]) -> PropBag {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    #[test]
    fn schema_tokens_and_axis_enums_stay_in_step() {
        for style in ButtonStyle::all() {
            let decoded = button_props_from_bag(&bag(&[(
                "style",
                PropValue::Text(style.token().to_string()),
            )]))
            .expect("every style token validates");
            assert_eq!(decoded.style, *style);
        }
        for variant in ButtonVariant::all() {
            let decoded = button_props_from_bag(&bag(&[(
                "variant",
                PropValue::Text(variant.token().to_string()),
            )]))
            .expect("every variant token validates");
            assert_eq!(decoded.variant, *variant);
        }
        for size in ButtonSize::all() {
            let decoded = button_props_from_bag(&bag(&[(
                "size",
                PropValue::Text(size.token().to_string()),
            )]))
            .expect("every size token validates");
            assert_eq!(decoded.size, *size);
        }
    }

    #[test]
    fn empty_bag_decodes_to_the_defaults() {
        let decoded = button_props_from_bag(&PropBag::new()).expect("defaults fill in");
        assert_eq!(
            decoded,
            DynamicButtonProps {
                style: ButtonStyle::Primary,
                variant: ButtonVariant::Solid,
                size: ButtonSize::Base,
                block: false,
                icon_only: false,
                disabled: false,
            }
        );
    }

    #[test]
    fn unknown_variant_token_is_rejected_loudly() {
        let err = button_props_from_bag(&bag(&[(
            "variant",
            PropValue::Text("ghost".to_string()),
        )]))
        .expect_err("ghost is not a variant");

        assert!(matches!(
            err,
            ValidationError::InvalidValue { field: "variant", .. }
        ));
    }

    #[test]
    fn pagination_schema_requires_both_page_fields() {
        let err = pagination_schema()
            .validate(&bag(&[("current_page", PropValue::Int(3))]))
            .expect_err("total_pages is required");

        assert!(matches!(
            err,
            ValidationError::MissingField {
                field: "total_pages",
                ..
            }
        ));
    }
}
