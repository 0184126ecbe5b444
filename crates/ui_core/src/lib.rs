//! Headless presentation core for the meridian component library.
//!
//! Everything in this crate is a pure function or an explicit state
//! machine: variant tables resolving axis selections to utility-class
//! lists, the per-property-group class merge, the render-as-child
//! attribute merge, pagination windows, multi-select toggling, and the
//! timer-driven hover/toast machines expressed as effects so cancellation
//! is testable without a clock. Nothing here touches the DOM.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod classes;
mod hover;
mod pagination;
mod preview;
mod selection;
mod slot;
mod toast;
mod variant;

pub use classes::{conflict_group, merge_class_lists, merge_classes};
pub use hover::{HoverEffect, HoverIntent, TimerId};
pub use pagination::{page_items, PageItem};
pub use preview::{ObjectUrlFactory, PreviewSlot};
pub use selection::toggle_value;
pub use slot::{merge_into_child, ElementNode, NodeContent, SlotError};
pub use toast::{ToastEffect, ToastTimeline};
pub use variant::{
    CompoundOverride, ResolvedVariant, Selection, VariantError, VariantTable,
    VariantTableBuilder, VariantTableError,
};
