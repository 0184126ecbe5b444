//! Cards, badges, avatars, alerts, and the accordion.

use leptos::*;
use ui_core::{merge_class_lists, toggle_value};

use super::{bool_token, AlertTone, AvatarSize, BadgeTone};
use crate::icon::{Icon, IconName, IconSize};
use crate::state::use_controllable;

#[component]
/// Content card with an optional heading.
pub fn Card(
    /// Card heading.
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra utility classes merged onto the card container.
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let card_class = merge_class_lists(&[
        "rounded-lg border border-gray-200 bg-white p-6 shadow-sm",
        class.as_deref().unwrap_or(""),
    ]);

    view! {
        <div class=card_class data-ui-kind="card">
            {title.map(|title| view! {
                <h3 class="mb-2 text-lg font-semibold text-gray-900">{title}</h3>
            })}
            {children()}
        </div>
    }
}

fn badge_tone_class(tone: BadgeTone) -> &'static str {
    match tone {
        BadgeTone::Neutral => "bg-gray-100 text-gray-700",
        BadgeTone::Primary => "bg-primary-100 text-primary-800",
        BadgeTone::Success => "bg-aegreen-100 text-aegreen-800",
        BadgeTone::Warning => "bg-amber-100 text-amber-800",
        BadgeTone::Danger => "bg-red-100 text-red-800",
    }
}

#[component]
/// Small tonal status badge.
pub fn Badge(
    /// Color tone.
    #[prop(default = BadgeTone::Neutral)]
    tone: BadgeTone,
    /// Extra utility classes merged last.
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let badge_class = merge_class_lists(&[
        "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium",
        badge_tone_class(tone),
        class.as_deref().unwrap_or(""),
    ]);

    view! {
        <span class=badge_class data-ui-kind="badge" data-ui-tone=tone.token()>
            {children()}
        </span>
    }
}

fn avatar_size_class(size: AvatarSize) -> &'static str {
    match size {
        AvatarSize::Sm => "h-8 w-8 text-xs",
        AvatarSize::Base => "h-10 w-10 text-sm",
        AvatarSize::Lg => "h-14 w-14 text-base",
    }
}

#[component]
/// Avatar showing an image when a source is supplied, otherwise the
/// initials fallback.
pub fn Avatar(
    /// Image source.
    #[prop(optional, into)]
    src: Option<String>,
    /// Accessible name, also used to derive the initials fallback.
    #[prop(into)]
    name: String,
    /// Sizing token.
    #[prop(default = AvatarSize::Base)]
    size: AvatarSize,
    /// Extra utility classes merged last.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let initials: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();
    let shell_class = merge_class_lists(&[
        "inline-flex items-center justify-center overflow-hidden rounded-full bg-primary-100 font-medium text-primary-800",
        avatar_size_class(size),
        class.as_deref().unwrap_or(""),
    ]);

    view! {
        <span class=shell_class data-ui-kind="avatar" data-ui-size=size.token()>
            {match src {
                Some(src) => view! {
                    <img class="h-full w-full object-cover" src=src alt=name.clone() />
                }
                .into_view(),
                None => view! { <span aria-label=name.clone()>{initials}</span> }.into_view(),
            }}
        </span>
    }
}

fn alert_tone_class(tone: AlertTone) -> &'static str {
    match tone {
        AlertTone::Info => "border-primary-200 bg-primary-50 text-primary-800",
        AlertTone::Success => "border-aegreen-200 bg-aegreen-50 text-aegreen-800",
        AlertTone::Warning => "border-amber-200 bg-amber-50 text-amber-800",
        AlertTone::Danger => "border-red-200 bg-red-50 text-red-800",
    }
}

#[component]
/// Tonal alert with an optional title.
pub fn Alert(
    /// Message tone.
    #[prop(default = AlertTone::Info)]
    tone: AlertTone,
    /// Alert heading.
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra utility classes merged last.
    #[prop(optional, into)]
    class: Option<String>,
    children: Children,
) -> impl IntoView {
    let alert_class = merge_class_lists(&[
        "rounded-lg border px-4 py-3 text-sm",
        alert_tone_class(tone),
        class.as_deref().unwrap_or(""),
    ]);

    view! {
        <div class=alert_class role="alert" data-ui-kind="alert" data-ui-tone=tone.token()>
            {title.map(|title| view! { <p class="font-semibold">{title}</p> })}
            <div>{children()}</div>
        </div>
    }
}

/// One accordion section.
#[derive(Clone)]
pub struct AccordionItem {
    /// Stable section value.
    pub value: String,
    /// Visible trigger title.
    pub title: String,
    /// Section content rendered while expanded.
    pub content: ViewFn,
}

impl AccordionItem {
    /// Creates a section from a value, a title, and a content closure.
    pub fn new(
        value: impl Into<String>,
        title: impl Into<String>,
        content: impl Into<ViewFn>,
    ) -> Self {
        Self {
            value: value.into(),
            title: title.into(),
            content: content.into(),
        }
    }
}

#[component]
/// Accordion with single or multiple expansion and an optionally
/// caller-controlled open set.
pub fn Accordion(
    /// Sections in display order.
    items: Vec<AccordionItem>,
    /// Allow several sections open at once.
    #[prop(optional)]
    multiple: bool,
    /// In single mode, allow closing the open section.
    #[prop(default = true)]
    collapsible: bool,
    /// Open section values supplied by the caller.
    #[prop(optional)]
    value: Option<MaybeSignal<Vec<String>>>,
    /// Initially open sections for uncontrolled usage.
    #[prop(optional)]
    default_value: Vec<String>,
    /// Invoked with the full next open set on every toggle.
    #[prop(optional)]
    on_change: Option<Callback<Vec<String>>>,
    /// Extra utility classes merged onto the root container.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let (open_values, request_open) = use_controllable(value, on_change, default_value);
    let root_class = merge_class_lists(&["w-full", class.as_deref().unwrap_or("")]);

    let toggle_section = Callback::new(move |section: String| {
        let current = open_values.get_untracked();
        let next = if multiple {
            toggle_value(&current, &section)
        } else if current.contains(&section) {
            if collapsible {
                Vec::new()
            } else {
                current
            }
        } else {
            vec![section]
        };
        request_open.call(next);
    });

    view! {
        <div class=root_class data-ui-kind="accordion" data-ui-multiple=bool_token(multiple)>
            {items
                .into_iter()
                .map(|item| {
                    let section_value = item.value.clone();
                    let state_value = item.value.clone();
                    let content_value = item.value.clone();
                    let content = item.content.clone();
                    view! {
                        <div class="border-b border-gray-200 last:border-0" data-ui-slot="section">
                            <h3 class="w-full">
                                <button
                                    type="button"
                                    class="group flex w-full items-center justify-between py-4 text-left text-base font-semibold text-gray-900 hover:text-primary-600 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary-400"
                                    aria-expanded=move || {
                                        open_values.get().contains(&state_value).to_string()
                                    }
                                    on:click=move |_| toggle_section.call(section_value.clone())
                                >
                                    {item.title}
                                    <Icon
                                        icon=IconName::CaretDown
                                        size=IconSize::Sm
                                        class="shrink-0 text-gray-500 transition-transform duration-200 group-hover:text-primary-600"
                                    />
                                </button>
                            </h3>
                            {move || {
                                open_values
                                    .get()
                                    .contains(&content_value)
                                    .then(|| view! {
                                        <div class="overflow-hidden pb-4 pt-1 text-gray-700">
                                            {content.run()}
                                        </div>
                                    })
                            }}
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
