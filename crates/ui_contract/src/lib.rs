//! Shared property contracts for the meridian component library.
//!
//! The crate owns the runtime schema validator used at dynamic boundaries
//! (data-driven prop bags, structured menu data, file selection), together
//! with the structured rejection types those boundaries report. Components
//! with fully typed props carry the same contract at compile time and only
//! reach for this crate where input genuinely arrives untyped.
//!
//! Validation failures are never swallowed: every entry point returns a
//! `Result` and the error names the offending field.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod files;
mod nav;
mod schema;

pub use files::{FileMeta, FilePolicy, FileRejection, DEFAULT_MAX_FILE_BYTES};
pub use nav::{validate_menu_groups, NavMenuGroup, NavMenuItem};
pub use schema::{
    PropBag, PropField, PropKind, PropValue, PropertySchema, SchemaError, ValidatedProps,
    ValidationError,
};
