//! Variant tables: pure mapping from an axis selection to a class list.
//!
//! A table declares an unconditional base fragment, per-axis value
//! lookups applied in axis declaration order, and compound overrides
//! applied afterwards in declaration order. Later overrides supersede
//! earlier ones for the same combination, so entries are listed from
//! least to most specific. Coverage is verified when the table is built;
//! a selection value missing from a verified table at resolve time is an
//! internal-consistency failure, not a recoverable error.

use thiserror::Error;

use crate::classes::merge_classes;

/// One axis of a variant table: a name plus its value-to-fragment map in
/// declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Axis {
    name: &'static str,
    values: Vec<(&'static str, &'static str)>,
}

impl Axis {
    fn fragment_for(&self, value: &str) -> Option<&'static str> {
        self.values
            .iter()
            .find(|(candidate, _)| *candidate == value)
            .map(|(_, fragment)| *fragment)
    }
}

/// A rule keyed on a combination of axis values. When every listed pair
/// matches the selection, the fragment is appended after all base-axis
/// lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompoundOverride {
    when: Vec<(&'static str, &'static str)>,
    fragment: &'static str,
}

impl CompoundOverride {
    fn matches(&self, selection: &Selection) -> bool {
        self.when
            .iter()
            .all(|(axis, value)| selection.get(axis) == Some(*value))
    }
}

/// Chosen value per axis for one resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    chosen: Vec<(&'static str, &'static str)>,
}

impl Selection {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the chosen value for an axis, replacing any earlier choice.
    pub fn set(mut self, axis: &'static str, value: &'static str) -> Self {
        self.chosen.retain(|(name, _)| *name != axis);
        self.chosen.push((axis, value));
        self
    }

    /// Sets a boolean axis using `true`/`false` tokens.
    pub fn flag(self, axis: &'static str, value: bool) -> Self {
        self.set(axis, if value { "true" } else { "false" })
    }

    /// Returns the chosen value for an axis, when one was set.
    pub fn get(&self, axis: &str) -> Option<&'static str> {
        self.chosen
            .iter()
            .find(|(name, _)| *name == axis)
            .map(|(_, value)| *value)
    }
}

/// Error raised while building a table. Construction is the point where
/// a schema/table mismatch must surface, so these are fatal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VariantTableError {
    /// Two axes share one name.
    #[error("variant table declares axis `{axis}` more than once")]
    DuplicateAxis {
        /// Offending axis name.
        axis: &'static str,
    },
    /// One axis declares the same value twice.
    #[error("axis `{axis}` declares value `{value}` more than once")]
    DuplicateValue {
        /// Offending axis name.
        axis: &'static str,
        /// Offending value.
        value: &'static str,
    },
    /// A compound override references an axis the table does not declare.
    #[error("compound override references unknown axis `{axis}`")]
    UnknownCompoundAxis {
        /// Offending axis name.
        axis: &'static str,
    },
    /// A compound override references a value its axis does not declare.
    #[error("compound override references unknown value `{value}` on axis `{axis}`")]
    UnknownCompoundValue {
        /// Axis the override references.
        axis: &'static str,
        /// Offending value.
        value: &'static str,
    },
}

/// Error raised at resolve time. Reaching this against a verified table
/// means the caller's enums and the table have drifted apart, which is a
/// programming error rather than bad user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VariantError {
    /// The selection chose a value the axis does not declare.
    #[error("axis `{axis}` has no entry for value `{value}`")]
    UnknownValue {
        /// Offending axis name.
        axis: &'static str,
        /// Value the selection carried.
        value: &'static str,
    },
}

/// Output of one resolution: the merged class list plus the class tokens
/// in their surviving order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariant {
    tokens: Vec<String>,
}

impl ResolvedVariant {
    /// Returns the surviving class tokens in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the class attribute value.
    pub fn class(&self) -> String {
        self.tokens.join(" ")
    }

    /// Returns whether the class list contains `token`.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|candidate| candidate == token)
    }
}

/// A verified variant table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantTable {
    base: Vec<&'static str>,
    axes: Vec<Axis>,
    compounds: Vec<CompoundOverride>,
}

impl VariantTable {
    /// Starts an empty table.
    pub fn builder() -> VariantTableBuilder {
        VariantTableBuilder {
            base: Vec::new(),
            axes: Vec::new(),
            compounds: Vec::new(),
        }
    }

    /// Resolves a selection to its merged class list.
    ///
    /// Axes absent from the selection are skipped; axes present must name
    /// a declared value. `extra` is merged last so caller-supplied
    /// overrides win their property group.
    ///
    /// # Errors
    ///
    /// Returns [`VariantError::UnknownValue`] when the selection chose a
    /// value outside the table, which callers treat as fatal.
    pub fn resolve(
        &self,
        selection: &Selection,
        extra: &[&str],
    ) -> Result<ResolvedVariant, VariantError> {
        let mut fragments: Vec<&str> = Vec::new();
        fragments.extend(self.base.iter().copied());

        for axis in &self.axes {
            let Some(value) = selection.get(axis.name) else {
                continue;
            };
            match axis.fragment_for(value) {
                Some(fragment) => fragments.push(fragment),
                None => {
                    return Err(VariantError::UnknownValue {
                        axis: axis.name,
                        value,
                    })
                }
            }
        }

        for compound in &self.compounds {
            if compound.matches(selection) {
                fragments.push(compound.fragment);
            }
        }

        fragments.extend(extra.iter().copied());

        let tokens: Vec<&str> = fragments
            .iter()
            .flat_map(|fragment| fragment.split_whitespace())
            .collect();
        let merged = merge_classes(&tokens);

        Ok(ResolvedVariant {
            tokens: merged.split_whitespace().map(str::to_string).collect(),
        })
    }
}

/// Incremental [`VariantTable`] construction.
#[derive(Debug)]
pub struct VariantTableBuilder {
    base: Vec<&'static str>,
    axes: Vec<Axis>,
    compounds: Vec<CompoundOverride>,
}

impl VariantTableBuilder {
    /// Appends an unconditional base fragment.
    pub fn base(mut self, fragment: &'static str) -> Self {
        self.base.push(fragment);
        self
    }

    /// Declares an axis and its value fragments. Axis declaration order
    /// is application order.
    pub fn axis(mut self, name: &'static str, values: &[(&'static str, &'static str)]) -> Self {
        self.axes.push(Axis {
            name,
            values: values.to_vec(),
        });
        self
    }

    /// Declares a boolean axis whose `true` value carries a fragment.
    pub fn flag_axis(self, name: &'static str, fragment: &'static str) -> Self {
        self.axis(name, &[("true", fragment), ("false", "")])
    }

    /// Appends a compound override. Declaration order is application
    /// order, so later entries supersede earlier ones for the same
    /// combination.
    pub fn compound(
        mut self,
        when: &[(&'static str, &'static str)],
        fragment: &'static str,
    ) -> Self {
        self.compounds.push(CompoundOverride {
            when: when.to_vec(),
            fragment,
        });
        self
    }

    /// Finishes the table, verifying axis uniqueness and that every
    /// compound override references declared axes and values.
    ///
    /// # Errors
    ///
    /// Returns a [`VariantTableError`]; component catalogs treat this as
    /// a fatal startup failure.
    pub fn build(self) -> Result<VariantTable, VariantTableError> {
        for (index, axis) in self.axes.iter().enumerate() {
            if self.axes[..index].iter().any(|prev| prev.name == axis.name) {
                return Err(VariantTableError::DuplicateAxis { axis: axis.name });
            }
            for (value_index, (value, _)) in axis.values.iter().enumerate() {
                if axis.values[..value_index]
                    .iter()
                    .any(|(prev, _)| prev == value)
                {
                    return Err(VariantTableError::DuplicateValue {
                        axis: axis.name,
                        value,
                    });
                }
            }
        }

        for compound in &self.compounds {
            for (axis_name, value) in &compound.when {
                let Some(axis) = self.axes.iter().find(|axis| axis.name == *axis_name) else {
                    return Err(VariantTableError::UnknownCompoundAxis { axis: axis_name });
                };
                if axis.fragment_for(value).is_none() {
                    return Err(VariantTableError::UnknownCompoundValue {
                        axis: axis_name,
                        value,
                    });
                }
            }
        }

        Ok(VariantTable {
            base: self.base,
            axes: self.axes,
            compounds: self.compounds,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sample_table() -> VariantTable {
        VariantTable::builder()
            .base("inline-flex items-center justify-center")
            .base("h-12 rounded-lg px-6 text-base")
            .axis(
                "size",
                &[
                    ("xs", "h-8 rounded px-4 text-sm"),
                    ("base", "h-12 rounded-lg px-6"),
                    ("lg", "h-13 gap-3 px-7 text-lg"),
                ],
            )
            .axis(
                "variant",
                &[("solid", ""), ("outline", "")],
            )
            .axis("style", &[("primary", ""), ("secondary", "")])
            .flag_axis("block", "w-full")
            .flag_axis("icon", "gap-0 px-0")
            .compound(
                &[("style", "primary"), ("variant", "solid")],
                "bg-primary-600 text-whitely-50",
            )
            .compound(
                &[("style", "secondary"), ("variant", "outline")],
                "text-secondary-800 border-secondary-800 bg-transparent",
            )
            .compound(&[("icon", "true"), ("size", "xs")], "w-8")
            .compound(&[("icon", "true"), ("size", "base")], "w-12")
            .build()
            .expect("sample table is well formed")
    }

    fn selection(size: &'static str, variant: &'static str, style: &'static str) -> Selection {
        Selection::new()
            .set("size", size)
            .set("variant", variant)
            .set("style", style)
            .flag("block", false)
            .flag("icon", false)
    }

    #[test]
    fn resolution_is_deterministic() {
        let table = sample_table();
        let chosen = selection("lg", "outline", "secondary");

        let first = table.resolve(&chosen, &[]).expect("selection resolves");
        let second = table.resolve(&chosen, &[]).expect("selection resolves");
        assert_eq!(first, second);
    }

    #[test]
    fn secondary_outline_lg_carries_its_fragments_and_no_solid_ones() {
        let resolved = sample_table()
            .resolve(&selection("lg", "outline", "secondary"), &[])
            .expect("selection resolves");

        assert!(resolved.contains("h-13"), "lg size fragment expected");
        assert!(resolved.contains("text-secondary-800"));
        assert!(resolved.contains("border-secondary-800"));
        assert!(!resolved.contains("bg-primary-600"), "solid fragment leaked");
        assert!(!resolved.contains("text-whitely-50"), "solid fragment leaked");
    }

    #[test]
    fn later_compound_supersedes_block_width() {
        let chosen = Selection::new()
            .set("size", "xs")
            .set("variant", "solid")
            .set("style", "primary")
            .flag("block", true)
            .flag("icon", true);

        let resolved = sample_table()
            .resolve(&chosen, &[])
            .expect("selection resolves");

        assert!(resolved.contains("w-8"), "icon compound width expected");
        assert!(!resolved.contains("w-full"), "block width should lose");
        assert!(!resolved.contains("px-4"), "icon zero padding should win");
        assert!(resolved.contains("px-0"));
    }

    #[test]
    fn caller_extras_merge_last() {
        let resolved = sample_table()
            .resolve(&selection("base", "solid", "primary"), &["h-full px-4"])
            .expect("selection resolves");

        assert!(resolved.contains("h-full"));
        assert!(!resolved.contains("h-12"));
        assert!(resolved.contains("px-4"));
        assert!(!resolved.contains("px-6"));
    }

    #[test]
    fn axes_absent_from_the_selection_are_skipped() {
        let resolved = sample_table()
            .resolve(&Selection::new().set("size", "xs"), &[])
            .expect("partial selection resolves");

        assert!(resolved.contains("h-8"));
        assert!(!resolved.contains("bg-primary-600"));
    }

    #[test]
    fn unknown_selection_value_is_an_internal_failure() {
        let err = sample_table()
            .resolve(&selection("xl", "solid", "primary"), &[])
            .expect_err("xl is not declared");

        assert_eq!(
            err,
            VariantError::UnknownValue {
                axis: "size",
                value: "xl",
            }
        );
    }

    #[test]
    fn compound_referencing_unknown_value_fails_at_build() {
        let err = VariantTable::builder()
            .axis("size", &[("sm", "h-10")])
            .compound(&[("size", "lg")], "w-10")
            .build()
            .expect_err("lg is not declared on size");

        assert_eq!(
            err,
            VariantTableError::UnknownCompoundValue {
                axis: "size",
                value: "lg",
            }
        );
    }

    #[test]
    fn duplicate_axis_fails_at_build() {
        let err = VariantTable::builder()
            .axis("size", &[("sm", "")])
            .axis("size", &[("lg", "")])
            .build()
            .expect_err("size declared twice");

        assert_eq!(err, VariantTableError::DuplicateAxis { axis: "size" });
    }
}
