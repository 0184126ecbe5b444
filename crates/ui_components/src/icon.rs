//! Inline SVG icon set shared by the components.

use leptos::*;

/// Icons available to the component set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconName {
    /// Downward caret.
    CaretDown,
    /// Upward caret.
    CaretUp,
    /// Left caret.
    CaretLeft,
    /// Right caret.
    CaretRight,
    /// Double left caret.
    CaretDoubleLeft,
    /// Double right caret.
    CaretDoubleRight,
    /// Check mark.
    Check,
    /// Close cross.
    Close,
    /// House outline.
    House,
    /// Upward arrow leaving a tray.
    Upload,
    /// Framed landscape placeholder.
    Image,
    /// Hamburger menu rows.
    Menu,
}

impl IconName {
    /// Stable token used in `data-ui-icon` attributes.
    pub fn token(self) -> &'static str {
        match self {
            Self::CaretDown => "caret-down",
            Self::CaretUp => "caret-up",
            Self::CaretLeft => "caret-left",
            Self::CaretRight => "caret-right",
            Self::CaretDoubleLeft => "caret-double-left",
            Self::CaretDoubleRight => "caret-double-right",
            Self::Check => "check",
            Self::Close => "close",
            Self::House => "house",
            Self::Upload => "upload",
            Self::Image => "image",
            Self::Menu => "menu",
        }
    }

    fn path(self) -> &'static str {
        match self {
            Self::CaretDown => "M4 9l8 8 8-8",
            Self::CaretUp => "M4 15l8-8 8 8",
            Self::CaretLeft => "M15 4l-8 8 8 8",
            Self::CaretRight => "M9 4l8 8-8 8",
            Self::CaretDoubleLeft => "M11 4l-7 8 7 8M20 4l-7 8 7 8",
            Self::CaretDoubleRight => "M4 4l7 8-7 8M13 4l7 8-7 8",
            Self::Check => "M4 13l5 5L20 7",
            Self::Close => "M6 6l12 12M18 6L6 18",
            Self::House => "M4 11l8-7 8 7v9h-5v-6h-6v6H4z",
            Self::Upload => "M12 16V4m0 0L7 9m5-5l5 5M5 20h14",
            Self::Image => "M4 5h16v14H4zM8 11a1.5 1.5 0 100-3 1.5 1.5 0 000 3zm-4 6l5-5 3 3 4-4 4 4",
            Self::Menu => "M4 7h16M4 12h16M4 17h16",
        }
    }
}

/// Rendered icon sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Compact glyph.
    Sm,
    /// Default glyph.
    Md,
    /// Prominent glyph.
    Lg,
}

impl Default for IconSize {
    fn default() -> Self {
        Self::Md
    }
}

impl IconSize {
    fn class(self) -> &'static str {
        match self {
            Self::Sm => "h-4 w-4",
            Self::Md => "h-5 w-5",
            Self::Lg => "h-6 w-6",
        }
    }
}

#[component]
/// Stroke-based inline SVG icon.
pub fn Icon(
    /// Glyph to draw.
    icon: IconName,
    /// Rendered size.
    #[prop(default = IconSize::Md)]
    size: IconSize,
    /// Extra utility classes appended to the sizing classes.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let class = match class {
        Some(extra) => format!("{} {extra}", size.class()),
        None => size.class().to_string(),
    };
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-icon=icon.token()
        >
            <path d=icon.path()></path>
        </svg>
    }
}
