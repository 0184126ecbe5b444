//! Structured navigation menu data.
//!
//! Navigation dropdowns accept either an opaque caller-rendered view or
//! structured group data. The structured form is plain serde data so it
//! can arrive from configuration, and it is validated here before any
//! component consumes it.

use serde::{Deserialize, Serialize};

use crate::schema::ValidationError;

/// One link inside a navigation dropdown group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenuItem {
    /// Visible link label.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// One titled group of links inside a navigation dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavMenuGroup {
    /// Group heading.
    pub title: String,
    /// Links in display order.
    pub items: Vec<NavMenuItem>,
}

/// Validates structured dropdown data before render.
///
/// Group titles and item labels must be non-empty; an empty `href` is
/// permitted and renders as an inert link.
///
/// # Errors
///
/// Returns a [`ValidationError`] naming the offending field path.
pub fn validate_menu_groups(groups: &[NavMenuGroup]) -> Result<(), ValidationError> {
    for (group_index, group) in groups.iter().enumerate() {
        if group.title.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                component: "navigation",
                field: "dropdown",
                reason: format!("group {group_index} has an empty title"),
            });
        }
        for (item_index, item) in group.items.iter().enumerate() {
            if item.label.trim().is_empty() {
                return Err(ValidationError::InvalidValue {
                    component: "navigation",
                    field: "dropdown",
                    reason: format!(
                        "group {group_index} item {item_index} has an empty label"
                    ),
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample() -> Vec<NavMenuGroup> {
        vec![NavMenuGroup {
            title: "Resources".to_string(),
            items: vec![
                NavMenuItem {
                    label: "Documentation".to_string(),
                    href: "/docs".to_string(),
                },
                NavMenuItem {
                    label: "Changelog".to_string(),
                    href: "/changelog".to_string(),
                },
            ],
        }]
    }

    #[test]
    fn well_formed_groups_validate() {
        assert_eq!(validate_menu_groups(&sample()), Ok(()));
    }

    #[test]
    fn empty_item_label_is_rejected_with_a_path() {
        let mut groups = sample();
        groups[0].items[1].label = "  ".to_string();

        let err = validate_menu_groups(&groups).expect_err("blank label");
        match err {
            ValidationError::InvalidValue { field, reason, .. } => {
                assert_eq!(field, "dropdown");
                assert!(reason.contains("group 0 item 1"), "reason: {reason}");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn menu_data_round_trips_through_serde() {
        let groups = sample();
        let encoded = serde_json::to_string(&groups).expect("groups serialize");
        let decoded: Vec<NavMenuGroup> =
            serde_json::from_str(&encoded).expect("groups deserialize");
        assert_eq!(decoded, groups);
    }
}
