//! Button component and its variant table.

use std::sync::OnceLock;

use leptos::ev::MouseEvent;
use leptos::*;
use ui_core::{merge_into_child, ElementNode, NodeContent, Selection, VariantTable};

use super::{bool_token, ButtonSize, ButtonStyle, ButtonVariant};

fn button_table() -> &'static VariantTable {
    static TABLE: OnceLock<VariantTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::builder()
            .base("inline-flex flex-shrink-0 cursor-pointer select-none flex-wrap items-center justify-center text-center no-underline transition duration-200 ease-in-out")
            .base("h-12 gap-2 rounded-lg border-2 border-transparent px-6 text-base font-medium focus:outline-none focus-visible:ring-2 focus-visible:ring-offset-2")
            .base("disabled:pointer-events-none disabled:cursor-not-allowed disabled:opacity-30 disabled:shadow-none")
            .axis(
                "size",
                &[
                    ("xs", "h-8 rounded px-4 text-sm"),
                    ("sm", "h-10 rounded-md px-5 text-base"),
                    ("base", "h-12 gap-2 rounded-lg px-6"),
                    ("lg", "h-13 gap-3 px-7 text-lg"),
                ],
            )
            .axis("style", &[("primary", ""), ("secondary", "")])
            .axis(
                "variant",
                &[("solid", ""), ("soft", ""), ("link", ""), ("outline", "")],
            )
            .flag_axis("block", "w-full")
            .flag_axis("icon", "gap-0 px-0")
            .compound(
                &[("style", "primary"), ("variant", "solid")],
                "bg-primary-600 text-whitely-50 hover:bg-primary-500 hover:text-primary-50 hover:ring-4 hover:ring-primary-100 hover:shadow-primary-100 focus-visible:ring-primary-support-300",
            )
            .compound(
                &[("style", "primary"), ("variant", "soft")],
                "bg-primary-50 hover:bg-primary-100 text-primary-700 hover:text-primary-600 focus-visible:ring-primary-support-400 hover:shadow-none focus-visible:ring-offset-0 disabled:opacity-50",
            )
            .compound(
                &[("style", "primary"), ("variant", "link")],
                "text-primary-600 hover:bg-primary-50 focus-visible:ring-primary-support-400 focus-visible:border-primary-support-400 bg-transparent hover:shadow-none focus-visible:ring-1 focus-visible:ring-offset-0",
            )
            .compound(
                &[("style", "primary"), ("variant", "outline")],
                "text-primary-600 hover:bg-primary-50 border-primary-600 focus-visible:border-primary-support-400 focus-visible:ring-primary-support-400 bg-transparent hover:shadow-none focus-visible:ring-1 focus-visible:ring-offset-0",
            )
            .compound(
                &[("style", "secondary"), ("variant", "solid")],
                "bg-secondary-800 text-secondary-50 hover:bg-secondary-950 hover:text-secondary-100 hover:ring-4 hover:ring-secondary-100 hover:shadow-secondary-100 focus-visible:ring-secondary-support-300",
            )
            .compound(
                &[("style", "secondary"), ("variant", "soft")],
                "bg-secondary-50 hover:bg-secondary-100 text-secondary-800 hover:text-secondary-800 hover:shadow-none focus-visible:ring-offset-0 disabled:opacity-50",
            )
            .compound(
                &[("style", "secondary"), ("variant", "link")],
                "text-secondary-800 hover:bg-secondary-50 focus-visible:border-secondary-support-300 bg-transparent hover:shadow-none focus-visible:ring-1 focus-visible:ring-offset-0",
            )
            .compound(
                &[("style", "secondary"), ("variant", "outline")],
                "text-secondary-800 hover:bg-secondary-100 border-secondary-800 focus-visible:border-secondary-support-300 bg-transparent hover:shadow-none focus-visible:ring-1 focus-visible:ring-offset-0",
            )
            .compound(&[("icon", "true"), ("size", "xs")], "w-8")
            .compound(&[("icon", "true"), ("size", "sm")], "w-10")
            .compound(&[("icon", "true"), ("size", "base")], "w-12")
            .compound(&[("icon", "true"), ("size", "lg")], "w-14")
            .build()
            .expect("button variant table matches its declared axes")
    })
}

pub(crate) fn button_class(
    style: ButtonStyle,
    variant: ButtonVariant,
    size: ButtonSize,
    block: bool,
    icon_only: bool,
    extra: Option<&str>,
) -> String {
    let selection = Selection::new()
        .set("size", size.token())
        .set("style", style.token())
        .set("variant", variant.token())
        .flag("block", block)
        .flag("icon", icon_only);

    button_table()
        .resolve(&selection, &[extra.unwrap_or("")])
        .expect("button axes are covered by the button variant table")
        .class()
}

/// Tags a caller may substitute for the default button root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootTag {
    /// Render as an anchor.
    Anchor,
    /// Render as a span.
    Span,
    /// Render as a label.
    Label,
    /// Render as a div.
    Div,
}

impl RootTag {
    fn tag_name(self) -> &'static str {
        match self {
            Self::Anchor => "a",
            Self::Span => "span",
            Self::Label => "label",
            Self::Div => "div",
        }
    }
}

/// Caller-supplied root element used instead of the default one. The
/// component merges its resolved attributes onto this element; an
/// attribute set here wins over the resolved one, and class lists merge
/// with the child's classes taking their property groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChildRoot {
    /// Tag to render.
    pub tag: RootTag,
    /// Attributes owned by the substituted root.
    pub attrs: Vec<(&'static str, String)>,
}

impl ChildRoot {
    /// Creates a bare substituted root.
    pub fn new(tag: RootTag) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
        }
    }

    /// Appends an attribute owned by the substituted root.
    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }
}

fn render_child_root(
    root: ChildRoot,
    resolved: Vec<(&'static str, String)>,
    disabled: MaybeSignal<bool>,
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> View {
    let child = ElementNode {
        tag: root.tag.tag_name().to_string(),
        attrs: root
            .attrs
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect(),
        children: Vec::new(),
    };
    let resolved: Vec<(&str, String)> = resolved
        .into_iter()
        .map(|(name, value)| (name, value))
        .collect();
    let merged = merge_into_child(&resolved, vec![NodeContent::Element(child)])
        .expect("a substituted root is exactly one element");

    let element = match root.tag {
        RootTag::Anchor => html::a().into_any(),
        RootTag::Span => html::span().into_any(),
        RootTag::Label => html::label().into_any(),
        RootTag::Div => html::div().into_any(),
    };
    let element = merged
        .attrs
        .into_iter()
        .fold(element, |element, (name, value)| element.attr(name, value));

    element
        .attr("aria-disabled", move || disabled.get().to_string())
        .on(ev::click, move |event| {
            if disabled.get_untracked() {
                return;
            }
            if let Some(on_click) = on_click.as_ref() {
                on_click.call(event);
            }
        })
        .child(children())
        .into_view()
}

#[component]
/// Action button with style, variant, and size axes, optional block and
/// icon-only structure, and a substitutable root element.
pub fn Button(
    /// Color family.
    #[prop(default = ButtonStyle::Primary)]
    style: ButtonStyle,
    /// Visual treatment within the family.
    #[prop(default = ButtonVariant::Solid)]
    variant: ButtonVariant,
    /// Sizing token.
    #[prop(default = ButtonSize::Base)]
    size: ButtonSize,
    /// Stretch to the full container width.
    #[prop(optional)]
    block: bool,
    /// Square icon-only structure; width follows the size axis.
    #[prop(optional)]
    icon_only: bool,
    /// Extra utility classes merged last, winning their property groups.
    #[prop(optional, into)]
    class: Option<String>,
    /// DOM id.
    #[prop(optional, into)]
    id: Option<String>,
    /// Accessible label for icon-only usage.
    #[prop(optional, into)]
    aria_label: Option<String>,
    /// Disabled state.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Click handler.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    /// Render through this root instead of a `button` element.
    #[prop(optional)]
    as_child: Option<ChildRoot>,
    children: Children,
) -> impl IntoView {
    let class = button_class(style, variant, size, block, icon_only, class.as_deref());

    let resolved = vec![
        ("class", class.clone()),
        ("data-ui-kind", "button".to_string()),
        ("data-ui-style", style.token().to_string()),
        ("data-ui-variant", variant.token().to_string()),
        ("data-ui-size", size.token().to_string()),
        ("data-ui-block", bool_token(block).to_string()),
        ("data-ui-icon-only", bool_token(icon_only).to_string()),
    ];

    match as_child {
        Some(root) => render_child_root(root, resolved, disabled, on_click, children),
        None => view! {
            <button
                type="button"
                class=class
                id=id
                aria-label=aria_label
                disabled=move || disabled.get()
                aria-disabled=move || disabled.get().to_string()
                data-ui-kind="button"
                data-ui-style=style.token()
                data-ui-variant=variant.token()
                data-ui-size=size.token()
                data-ui-block=bool_token(block)
                data-ui-icon-only=bool_token(icon_only)
                on:click=move |event| {
                    if let Some(on_click) = on_click.as_ref() {
                        on_click.call(event);
                    }
                }
            >
                {children()}
            </button>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tokens(class: &str) -> Vec<&str> {
        class.split_whitespace().collect()
    }

    #[test]
    fn every_axis_combination_resolves() {
        for style in ButtonStyle::all() {
            for variant in ButtonVariant::all() {
                for size in ButtonSize::all() {
                    for block in [false, true] {
                        for icon_only in [false, true] {
                            let class =
                                button_class(*style, *variant, *size, block, icon_only, None);
                            assert!(!class.is_empty());
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn secondary_outline_lg_selects_the_expected_fragments() {
        let class = button_class(
            ButtonStyle::Secondary,
            ButtonVariant::Outline,
            ButtonSize::Lg,
            false,
            false,
            None,
        );
        let tokens = tokens(&class);

        assert!(tokens.contains(&"h-13"), "lg height missing: {class}");
        assert!(tokens.contains(&"px-7"), "lg padding missing: {class}");
        assert!(tokens.contains(&"text-secondary-800"));
        assert!(tokens.contains(&"border-secondary-800"));
        assert!(!tokens.contains(&"bg-secondary-800"), "solid fragment leaked");
        assert!(!tokens.contains(&"bg-primary-600"), "solid fragment leaked");
    }

    #[test]
    fn icon_only_width_follows_the_size_axis() {
        let class = button_class(
            ButtonStyle::Primary,
            ButtonVariant::Solid,
            ButtonSize::Xs,
            false,
            true,
            None,
        );
        let tokens = tokens(&class);

        assert!(tokens.contains(&"w-8"));
        assert!(tokens.contains(&"px-0"), "icon padding override missing");
        assert!(!tokens.contains(&"px-4"), "size padding survived: {class}");
    }

    #[test]
    fn icon_only_width_beats_block_width() {
        let class = button_class(
            ButtonStyle::Primary,
            ButtonVariant::Solid,
            ButtonSize::Base,
            true,
            true,
            None,
        );
        let tokens = tokens(&class);

        assert!(tokens.contains(&"w-12"));
        assert!(!tokens.contains(&"w-full"));
    }

    #[test]
    fn caller_classes_merge_last() {
        let class = button_class(
            ButtonStyle::Primary,
            ButtonVariant::Link,
            ButtonSize::Base,
            false,
            false,
            Some("h-full px-4 py-2 rounded-none"),
        );
        let tokens = tokens(&class);

        assert!(tokens.contains(&"h-full"));
        assert!(!tokens.contains(&"h-12"));
        assert!(tokens.contains(&"rounded-none"));
        assert!(!tokens.contains(&"rounded-lg"));
    }

    #[test]
    fn resolution_is_stable_across_calls() {
        let first = button_class(
            ButtonStyle::Secondary,
            ButtonVariant::Soft,
            ButtonSize::Sm,
            true,
            false,
            Some("mt-2"),
        );
        let second = button_class(
            ButtonStyle::Secondary,
            ButtonVariant::Soft,
            ButtonSize::Sm,
            true,
            false,
            Some("mt-2"),
        );
        assert_eq!(first, second);
    }
}
