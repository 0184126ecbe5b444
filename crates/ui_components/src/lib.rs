//! Leptos component library for the meridian design system.
//!
//! Every component is a thin typed wrapper over the shared headless
//! core: axis enums select rows in verified variant tables, utility
//! classes merge with last-wins-per-property-group semantics, and
//! interactive widgets reconcile caller-controlled and internal state
//! through one adapter. Components expose a stable `data-ui-*` attribute
//! contract alongside their utility classes.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod components;
mod icon;
mod schemas;
mod state;

pub use components::{
    Accordion, AccordionItem, Alert, AlertTone, Avatar, AvatarSize, Badge, BadgeTone,
    BreadcrumbEntry, BreadcrumbSeparator, Breadcrumbs, Button, ButtonSize, ButtonStyle,
    ButtonVariant, Card, CheckboxField, ChildRoot, FieldSize, FieldTone, FileUpload,
    FileUploadVariant, Modal, MultiSelect, NavEntry, NavigationBar, Pagination, Popover,
    PopoverAlign, PopoverSide, RadioGroup, RootTag, SelectField, SelectOption, Switch, TabItem,
    Tabs, TabsVariant, TextArea, TextField, Toast, ToggleVariant, Tooltip,
};
pub use icon::{Icon, IconName, IconSize};
pub use schemas::{button_props_from_bag, button_schema, pagination_schema, DynamicButtonProps};
pub use state::{
    use_controllable, use_controllable_list, use_hover_intent, use_toast_timeline,
    use_viewport_is_mobile, HoverBinding, ToastBinding, MOBILE_BREAKPOINT_PX,
};

/// Convenience imports for crates consuming the component set.
pub mod prelude {
    pub use crate::{
        Accordion, AccordionItem, Alert, AlertTone, Avatar, AvatarSize, Badge, BadgeTone,
        BreadcrumbEntry, BreadcrumbSeparator, Breadcrumbs, Button, ButtonSize, ButtonStyle,
        ButtonVariant, Card, CheckboxField, ChildRoot, FieldSize, FieldTone, FileUpload,
        FileUploadVariant, Icon, IconName, IconSize, Modal, MultiSelect, NavEntry, NavigationBar,
        Pagination, Popover, PopoverAlign, PopoverSide, RadioGroup, RootTag, SelectField,
        SelectOption, Switch, TabItem, Tabs, TabsVariant, TextArea, TextField, Toast,
        ToggleVariant, Tooltip,
    };
}
