//! Component families and their shared axis enums.
//!
//! Each enum is one axis of visual configuration with a closed value
//! set. `token()` feeds both the variant-table selection and the
//! `data-ui-*` attribute contract; `from_token` is the inverse used
//! where axis values arrive as text.

mod button;
mod display;
mod fields;
mod navigation;
mod overlays;
mod select;
mod upload;

pub use button::{Button, ChildRoot, RootTag};
pub use display::{Accordion, AccordionItem, Alert, Avatar, Badge, Card};
pub use fields::{CheckboxField, RadioGroup, Switch, TextArea, TextField};
pub use navigation::{
    BreadcrumbEntry, Breadcrumbs, NavEntry, NavigationBar, Pagination, TabItem, Tabs,
};
pub use overlays::{Modal, Popover, Toast, Tooltip};
pub use select::{MultiSelect, SelectField, SelectOption};
pub use upload::{FileUpload, FileUploadVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Color family driving a button's variant fragments.
pub enum ButtonStyle {
    /// Brand color family.
    Primary,
    /// Neutral secondary family.
    Secondary,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonStyle {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }

    /// Parses a token back into the axis value.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "primary" => Some(Self::Primary),
            "secondary" => Some(Self::Secondary),
            _ => None,
        }
    }

    /// All values, in declaration order.
    pub const fn all() -> &'static [ButtonStyle] {
        &[Self::Primary, Self::Secondary]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual treatment of a button within its color family.
pub enum ButtonVariant {
    /// Filled background.
    Solid,
    /// Tinted background.
    Soft,
    /// Text-only treatment.
    Link,
    /// Border-only treatment.
    Outline,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Solid
    }
}

impl ButtonVariant {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Solid => "solid",
            Self::Soft => "soft",
            Self::Link => "link",
            Self::Outline => "outline",
        }
    }

    /// Parses a token back into the axis value.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "solid" => Some(Self::Solid),
            "soft" => Some(Self::Soft),
            "link" => Some(Self::Link),
            "outline" => Some(Self::Outline),
            _ => None,
        }
    }

    /// All values, in declaration order.
    pub const fn all() -> &'static [ButtonVariant] {
        &[Self::Solid, Self::Soft, Self::Link, Self::Outline]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Button sizing tokens.
pub enum ButtonSize {
    /// Extra small.
    Xs,
    /// Small.
    Sm,
    /// Default.
    Base,
    /// Large.
    Lg,
}

impl Default for ButtonSize {
    fn default() -> Self {
        Self::Base
    }
}

impl ButtonSize {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Xs => "xs",
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
        }
    }

    /// Parses a token back into the axis value.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "xs" => Some(Self::Xs),
            "sm" => Some(Self::Sm),
            "base" => Some(Self::Base),
            "lg" => Some(Self::Lg),
            _ => None,
        }
    }

    /// All values, in declaration order.
    pub const fn all() -> &'static [ButtonSize] {
        &[Self::Xs, Self::Sm, Self::Base, Self::Lg]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Input-family sizing tokens.
pub enum FieldSize {
    /// Compact field.
    Sm,
    /// Default field.
    Base,
    /// Spacious field.
    Lg,
}

impl Default for FieldSize {
    fn default() -> Self {
        Self::Base
    }
}

impl FieldSize {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
        }
    }

    /// All values, in declaration order.
    pub const fn all() -> &'static [FieldSize] {
        &[Self::Sm, Self::Base, Self::Lg]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Input-family color tone. An error state supersedes the tone.
pub enum FieldTone {
    /// Brand ring and focus colors.
    Primary,
    /// Neutral secondary ring and focus colors.
    Secondary,
}

impl Default for FieldTone {
    fn default() -> Self {
        Self::Primary
    }
}

impl FieldTone {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Switch color treatments.
pub enum ToggleVariant {
    /// Brand checked color.
    Default,
    /// Green checked color.
    Success,
    /// Neutral dark checked color.
    Secondary,
    /// Light/dark mode toggle with icon thumb.
    Mode,
}

impl Default for ToggleVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl ToggleVariant {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Success => "success",
            Self::Secondary => "secondary",
            Self::Mode => "mode",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tab strip treatments.
pub enum TabsVariant {
    /// Underlined triggers on a bottom rule.
    Default,
    /// Pill-shaped triggers.
    Pills,
    /// Dense underlined triggers.
    Compact,
}

impl Default for TabsVariant {
    fn default() -> Self {
        Self::Default
    }
}

impl TabsVariant {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Pills => "pills",
            Self::Compact => "compact",
        }
    }

    /// All values, in declaration order.
    pub const fn all() -> &'static [TabsVariant] {
        &[Self::Default, Self::Pills, Self::Compact]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Alert tones.
pub enum AlertTone {
    /// Informational message.
    Info,
    /// Positive confirmation.
    Success,
    /// Caution message.
    Warning,
    /// Failure message.
    Danger,
}

impl Default for AlertTone {
    fn default() -> Self {
        Self::Info
    }
}

impl AlertTone {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// All values, in declaration order.
    pub const fn all() -> &'static [AlertTone] {
        &[Self::Info, Self::Success, Self::Warning, Self::Danger]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Badge tones.
pub enum BadgeTone {
    /// Muted neutral badge.
    Neutral,
    /// Brand-colored badge.
    Primary,
    /// Positive badge.
    Success,
    /// Caution badge.
    Warning,
    /// Failure badge.
    Danger,
}

impl Default for BadgeTone {
    fn default() -> Self {
        Self::Neutral
    }
}

impl BadgeTone {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Primary => "primary",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }

    /// All values, in declaration order.
    pub const fn all() -> &'static [BadgeTone] {
        &[
            Self::Neutral,
            Self::Primary,
            Self::Success,
            Self::Warning,
            Self::Danger,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Avatar sizing tokens.
pub enum AvatarSize {
    /// Compact avatar.
    Sm,
    /// Default avatar.
    Base,
    /// Prominent avatar.
    Lg,
}

impl Default for AvatarSize {
    fn default() -> Self {
        Self::Base
    }
}

impl AvatarSize {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Base => "base",
            Self::Lg => "lg",
        }
    }

    /// All values, in declaration order.
    pub const fn all() -> &'static [AvatarSize] {
        &[Self::Sm, Self::Base, Self::Lg]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Breadcrumb separator glyphs.
pub enum BreadcrumbSeparator {
    /// Forward slash.
    Slash,
    /// Right-pointing caret.
    Caret,
}

impl Default for BreadcrumbSeparator {
    fn default() -> Self {
        Self::Slash
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Side a popover opens toward, relative to its trigger.
pub enum PopoverSide {
    /// Above the trigger.
    Top,
    /// To the right of the trigger.
    Right,
    /// Below the trigger.
    Bottom,
    /// To the left of the trigger.
    Left,
}

impl Default for PopoverSide {
    fn default() -> Self {
        Self::Bottom
    }
}

impl PopoverSide {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }

    pub(crate) fn placement_class(self) -> &'static str {
        match self {
            Self::Top => "bottom-full mb-2",
            Self::Right => "left-full ml-2",
            Self::Bottom => "top-full mt-2",
            Self::Left => "right-full mr-2",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Popover alignment along its side.
pub enum PopoverAlign {
    /// Aligned with the leading edge.
    Start,
    /// Centered on the trigger.
    Center,
    /// Aligned with the trailing edge.
    End,
}

impl Default for PopoverAlign {
    fn default() -> Self {
        Self::Center
    }
}

impl PopoverAlign {
    /// Stable token for selections and `data-ui-*` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Center => "center",
            Self::End => "end",
        }
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
