//! Tabs, breadcrumbs, pagination, and the responsive navigation bar.

use std::time::Duration;

use leptos::*;
use ui_contract::{validate_menu_groups, NavMenuGroup};
use ui_core::{merge_class_lists, page_items, PageItem};

use super::{bool_token, BreadcrumbSeparator, TabsVariant};
use crate::icon::{Icon, IconName, IconSize};
use crate::state::{use_controllable, use_hover_intent, use_viewport_is_mobile};

/// One tab with its rendered panel content.
#[derive(Clone)]
pub struct TabItem {
    /// Stable tab value.
    pub value: String,
    /// Visible trigger label.
    pub label: String,
    /// Panel content rendered while the tab is active.
    pub content: ViewFn,
}

impl TabItem {
    /// Creates a tab from a value, a label, and a content closure.
    pub fn new(
        value: impl Into<String>,
        label: impl Into<String>,
        content: impl Into<ViewFn>,
    ) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            content: content.into(),
        }
    }
}

fn tabs_root_class(variant: TabsVariant) -> String {
    merge_class_lists(&[
        "w-full",
        match variant {
            TabsVariant::Default | TabsVariant::Compact => "border-b-2 border-gray-200",
            TabsVariant::Pills => "",
        },
    ])
}

fn tab_trigger_class(variant: TabsVariant, active: bool) -> String {
    merge_class_lists(&[
        "items-center gap-3 font-medium rounded-t-lg border-b-[3px] border-transparent transition-colors",
        "focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary-400 focus-visible:ring-offset-0",
        match variant {
            TabsVariant::Default => "py-6 px-1 text-base hover:text-gray-950 hover:border-primary-500",
            TabsVariant::Pills => "py-3 px-4 lg:px-6 text-base rounded-lg hover:bg-aeblack-50",
            TabsVariant::Compact => "py-4 px-1 text-sm hover:text-gray-950 hover:border-primary-500",
        },
        match (variant, active) {
            (TabsVariant::Pills, true) => "bg-primary-100 text-primary-900",
            (TabsVariant::Default | TabsVariant::Compact, true) => {
                "text-primary-600 border-primary-500"
            }
            (_, false) => "",
        },
    ])
}

fn tab_content_class(variant: TabsVariant) -> String {
    merge_class_lists(&[
        "p-4 focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-primary-400 focus-visible:ring-offset-0",
        match variant {
            TabsVariant::Default | TabsVariant::Compact => "border-t-2 border-aeblack-100",
            TabsVariant::Pills => "",
        },
    ])
}

#[component]
/// Tab strip with an optionally caller-controlled active tab.
pub fn Tabs(
    /// Tabs in display order.
    items: Vec<TabItem>,
    /// Strip treatment.
    #[prop(default = TabsVariant::Default)]
    variant: TabsVariant,
    /// Active tab value supplied by the caller.
    #[prop(optional)]
    value: Option<MaybeSignal<String>>,
    /// Initial active tab for uncontrolled usage; the first tab when
    /// absent.
    #[prop(optional, into)]
    default_value: Option<String>,
    /// Invoked with the newly activated tab value.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Extra utility classes merged onto the root container.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let fallback = default_value
        .or_else(|| items.first().map(|item| item.value.clone()))
        .unwrap_or_default();
    let (active, request_active) = use_controllable(value, on_change, fallback);

    let root_class = merge_class_lists(&[
        &tabs_root_class(variant),
        class.as_deref().unwrap_or(""),
    ]);
    let content_items = items.clone();

    view! {
        <div class=root_class data-ui-kind="tabs" data-ui-variant=variant.token()>
            <div class="flex gap-4 md:gap-6 lg:gap-7 xl:gap-8 -mb-px" role="tablist">
                {items
                    .into_iter()
                    .map(|item| {
                        let class_value = item.value.clone();
                        let selected_value = item.value.clone();
                        let state_value = item.value.clone();
                        view! {
                            <button
                                type="button"
                                role="tab"
                                class=move || tab_trigger_class(variant, active.get() == class_value)
                                aria-selected=move || (active.get() == selected_value).to_string()
                                data-state=move || {
                                    if active.get() == state_value { "active" } else { "inactive" }
                                }
                                on:click={
                                    let click_value = item.value.clone();
                                    move |_| request_active.call(click_value.clone())
                                }
                            >
                                {item.label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class=tab_content_class(variant) role="tabpanel">
                {move || {
                    let current = active.get();
                    content_items
                        .iter()
                        .find(|item| item.value == current)
                        .map(|item| item.content.run())
                }}
            </div>
        </div>
    }
}

/// One breadcrumb: either structured link data or an opaque renderable.
#[derive(Clone)]
pub enum BreadcrumbEntry {
    /// Structured label/target data rendered by the component.
    Link {
        /// Visible label.
        label: String,
        /// Link target; the entry renders as plain text when absent.
        href: Option<String>,
        /// Leading glyph.
        icon: Option<IconName>,
    },
    /// Caller-rendered content dropped into the item slot.
    Custom(ViewFn),
}

impl BreadcrumbEntry {
    /// Creates a structured link entry.
    pub fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: Some(href.into()),
            icon: None,
        }
    }

    /// Creates a structured entry without a target.
    pub fn text(label: impl Into<String>) -> Self {
        Self::Link {
            label: label.into(),
            href: None,
            icon: None,
        }
    }

    /// Attaches a leading glyph to a structured entry. Custom entries
    /// are returned unchanged.
    pub fn with_icon(self, icon: IconName) -> Self {
        match self {
            Self::Link { label, href, .. } => Self::Link {
                label,
                href,
                icon: Some(icon),
            },
            custom => custom,
        }
    }
}

const BREADCRUMB_LINK_CLASS: &str = "text-sm text-gray-500 hover:text-primary-600 max-w-[140px] truncate font-medium py-2 hover:underline decoration-2 underline-offset-2 flex items-center";
const BREADCRUMB_CURRENT_CLASS: &str = "text-sm font-semibold text-gray-800 max-w-[160px] truncate";

#[component]
/// Breadcrumb trail accepting structured items and opaque renderables.
pub fn Breadcrumbs(
    /// Trail entries, root first.
    items: Vec<BreadcrumbEntry>,
    /// Separator glyph between entries.
    #[prop(default = BreadcrumbSeparator::Slash)]
    separator: BreadcrumbSeparator,
    /// Replace the first structured entry's icon with a house glyph.
    #[prop(optional)]
    show_home_icon: bool,
    /// Extra utility classes merged onto the list container.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let count = items.len();
    let list_class = merge_class_lists(&[
        "flex items-center gap-1",
        class.as_deref().unwrap_or(""),
    ]);

    view! {
        <nav aria-label="Breadcrumb" data-ui-kind="breadcrumbs">
            <ol class=list_class>
                {items
                    .into_iter()
                    .enumerate()
                    .map(|(index, entry)| {
                        let is_first = index == 0;
                        let is_last = index + 1 == count;
                        let rendered = match entry {
                            BreadcrumbEntry::Link { label, href, icon } => {
                                let icon = if is_first && show_home_icon {
                                    Some(IconName::House)
                                } else {
                                    icon
                                };
                                let leading = icon.map(|icon| {
                                    view! {
                                        <span class="mr-1">
                                            <Icon icon=icon size=IconSize::Sm />
                                        </span>
                                    }
                                });
                                if is_last {
                                    view! {
                                        <span aria-current="page" class=BREADCRUMB_CURRENT_CLASS>
                                            {leading}
                                            {label}
                                        </span>
                                    }
                                    .into_view()
                                } else {
                                    view! {
                                        <a
                                            class=BREADCRUMB_LINK_CLASS
                                            href=href.unwrap_or_else(|| "#".to_string())
                                        >
                                            {leading}
                                            {label}
                                        </a>
                                    }
                                    .into_view()
                                }
                            }
                            BreadcrumbEntry::Custom(content) => {
                                let slot_class = if is_last {
                                    BREADCRUMB_CURRENT_CLASS
                                } else {
                                    BREADCRUMB_LINK_CLASS
                                };
                                view! {
                                    <span class=slot_class>{content.run()}</span>
                                }
                                .into_view()
                            }
                        };

                        view! {
                            <li class="flex items-center gap-1">
                                {rendered}
                                {(!is_last).then(|| match separator {
                                    BreadcrumbSeparator::Slash => view! {
                                        <span class="text-gray-400" aria-hidden="true">"/"</span>
                                    }
                                    .into_view(),
                                    BreadcrumbSeparator::Caret => view! {
                                        <Icon
                                            icon=IconName::CaretRight
                                            size=IconSize::Sm
                                            class="text-gray-400"
                                        />
                                    }
                                    .into_view(),
                                })}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>
        </nav>
    }
}

const PAGE_NAV_BUTTON_CLASS: &str =
    "inline-flex items-center gap-2 px-2 py-1 text-gray-700 hover:text-primary-600 disabled:opacity-50";

#[component]
/// Windowed pagination strip.
pub fn Pagination(
    /// Current page, starting at one.
    #[prop(into)]
    current_page: MaybeSignal<u32>,
    /// Total number of pages.
    #[prop(into)]
    total_pages: MaybeSignal<u32>,
    /// Invoked with the requested page number.
    on_page_change: Callback<u32>,
    /// Show the jump-to-first and jump-to-last controls.
    #[prop(optional)]
    show_first_last: bool,
    /// Extra utility classes merged onto the container.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let container_class = merge_class_lists(&[
        "flex items-center justify-center",
        class.as_deref().unwrap_or(""),
    ]);
    let at_first = move || current_page.get() == 1;
    let at_last = move || current_page.get() >= total_pages.get();

    view! {
        <div class=container_class data-ui-kind="pagination">
            <div class="flex w-full items-center justify-between sm:hidden">
                <button
                    type="button"
                    class=PAGE_NAV_BUTTON_CLASS
                    disabled=at_first
                    on:click=move |_| on_page_change.call(current_page.get_untracked() - 1)
                >
                    <Icon icon=IconName::CaretLeft size=IconSize::Sm />
                    <span>"Previous"</span>
                </button>
                <span class="text-sm">
                    {move || format!("Page {} of {}", current_page.get(), total_pages.get())}
                </span>
                <button
                    type="button"
                    class=PAGE_NAV_BUTTON_CLASS
                    disabled=at_last
                    on:click=move |_| on_page_change.call(current_page.get_untracked() + 1)
                >
                    <span>"Next"</span>
                    <Icon icon=IconName::CaretRight size=IconSize::Sm />
                </button>
            </div>

            <div class="hidden sm:flex sm:items-center sm:gap-1">
                {show_first_last.then(|| view! {
                    <button
                        type="button"
                        class=PAGE_NAV_BUTTON_CLASS
                        disabled=at_first
                        on:click=move |_| on_page_change.call(1)
                    >
                        <Icon icon=IconName::CaretDoubleLeft size=IconSize::Sm />
                        <span class="hidden lg:inline">"First"</span>
                    </button>
                })}
                <button
                    type="button"
                    class=PAGE_NAV_BUTTON_CLASS
                    disabled=at_first
                    on:click=move |_| on_page_change.call(current_page.get_untracked() - 1)
                >
                    <Icon icon=IconName::CaretLeft size=IconSize::Sm />
                    <span class="hidden lg:inline">"Previous"</span>
                </button>

                <div class="flex items-center gap-1">
                    {move || {
                        page_items(current_page.get(), total_pages.get())
                            .into_iter()
                            .map(|item| match item {
                                PageItem::Ellipsis => view! {
                                    <span class="px-2 text-gray-400">"..."</span>
                                }
                                .into_view(),
                                PageItem::Page(page) => {
                                    let is_current = current_page.get() == page;
                                    view! {
                                        <button
                                            type="button"
                                            class=merge_class_lists(&[
                                                "inline-flex h-8 w-8 items-center justify-center rounded-full text-sm",
                                                if is_current {
                                                    "bg-primary-550 text-white"
                                                } else {
                                                    "text-gray-700 hover:bg-primary-50 hover:text-primary-600"
                                                },
                                            ])
                                            aria-current=is_current.then(|| "page")
                                            on:click=move |_| on_page_change.call(page)
                                        >
                                            {page}
                                        </button>
                                    }
                                    .into_view()
                                }
                            })
                            .collect_view()
                    }}
                </div>

                <button
                    type="button"
                    class=PAGE_NAV_BUTTON_CLASS
                    disabled=at_last
                    on:click=move |_| on_page_change.call(current_page.get_untracked() + 1)
                >
                    <span class="hidden lg:inline">"Next"</span>
                    <Icon icon=IconName::CaretRight size=IconSize::Sm />
                </button>
                {show_first_last.then(|| view! {
                    <button
                        type="button"
                        class=PAGE_NAV_BUTTON_CLASS
                        disabled=at_last
                        on:click=move |_| on_page_change.call(total_pages.get_untracked())
                    >
                        <span class="hidden lg:inline">"Last"</span>
                        <Icon icon=IconName::CaretDoubleRight size=IconSize::Sm />
                    </button>
                })}
            </div>
        </div>
    }
}

/// One top-level navigation entry.
#[derive(Clone)]
pub enum NavEntry {
    /// Plain link.
    Link {
        /// Visible label.
        label: String,
        /// Link target.
        href: String,
        /// Marks the entry as the current page.
        active: bool,
    },
    /// Label opening a structured dropdown.
    Dropdown {
        /// Visible trigger label.
        label: String,
        /// Validated group data rendered inside the dropdown.
        groups: Vec<NavMenuGroup>,
        /// Marks the entry as the current section.
        active: bool,
    },
    /// Caller-rendered entry dropped into the item slot.
    Custom(ViewFn),
}

const NAV_TRIGGER_CLASS: &str = "group inline-flex items-center gap-2 border-b-2 border-transparent px-3 py-4 font-bold transition-colors hover:border-primary-800 hover:text-primary-800";
const NAV_ACTIVE_CLASS: &str = "border-primary-900 text-primary-900";

fn dropdown_panel(groups: &[NavMenuGroup]) -> impl IntoView {
    view! {
        <div class="rounded-lg border border-aeblack-100 bg-whitely-50 p-4 shadow-lg">
            <div class="flex flex-col">
                {groups
                    .iter()
                    .map(|group| {
                        view! {
                            <div class="mb-6 last:mb-0">
                                <h2 class="mb-2 text-primary-500 font-bold">{group.title.clone()}</h2>
                                <ul class="space-y-1">
                                    {group
                                        .items
                                        .iter()
                                        .map(|item| {
                                            let href = if item.href.is_empty() {
                                                "#".to_string()
                                            } else {
                                                item.href.clone()
                                            };
                                            view! {
                                                <li>
                                                    <a
                                                        class="block px-2 py-1.5 text-aeblack-900 rounded hover:bg-aeblack-50 hover:text-primary-700 transition-colors"
                                                        href=href
                                                    >
                                                        {item.label.clone()}
                                                    </a>
                                                </li>
                                            }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn DesktopNavEntry(entry: NavEntry) -> impl IntoView {
    match entry {
        NavEntry::Link {
            label,
            href,
            active,
        } => view! {
            <li>
                <a
                    class=merge_class_lists(&[
                        NAV_TRIGGER_CLASS,
                        if active { NAV_ACTIVE_CLASS } else { "" },
                    ])
                    href=href
                >
                    {label}
                </a>
            </li>
        }
        .into_view(),
        NavEntry::Dropdown {
            label,
            groups,
            active,
        } => {
            let hover = use_hover_intent(Duration::from_millis(150));
            view! {
                <li
                    class="group relative z-[1]"
                    on:pointerenter=move |_| hover.pointer_enter()
                    on:pointerleave=move |_| hover.pointer_leave()
                >
                    <button
                        type="button"
                        class=merge_class_lists(&[
                            NAV_TRIGGER_CLASS,
                            if active { NAV_ACTIVE_CLASS } else { "" },
                        ])
                        aria-expanded=move || hover.is_open().get().to_string()
                        aria-haspopup="true"
                    >
                        {label}
                        <Icon icon=IconName::CaretDown size=IconSize::Sm />
                    </button>
                    {move || {
                        let groups = groups.clone();
                        hover.is_open().get().then(move || {
                            view! {
                                <div class="mt-2 absolute z-50 w-[300px]">
                                    {dropdown_panel(&groups)}
                                </div>
                            }
                        })
                    }}
                </li>
            }
            .into_view()
        }
        NavEntry::Custom(content) => view! { <li>{content.run()}</li> }.into_view(),
    }
}

#[component]
fn MobileNav(entries: Vec<NavEntry>, logo: Option<ViewFn>) -> impl IntoView {
    let drawer_open = create_rw_signal(false);
    // One slot per top-level entry, all starting closed.
    let submenu_open = create_rw_signal(vec![false; entries.len()]);
    let toggle_submenu = move |index: usize| {
        submenu_open.update(|open| {
            if let Some(slot) = open.get_mut(index) {
                *slot = !*slot;
            }
        });
    };

    view! {
        <div class="py-2.5" data-ui-kind="navigation" data-ui-mode="mobile">
            <div class="flex items-center justify-between">
                <a href="#" class="block">
                    <span class="sr-only">"Home"</span>
                    {logo.clone().map(|logo| logo.run())}
                </a>
                <button
                    type="button"
                    class="text-aeblack-700"
                    aria-label="Open menu"
                    on:click=move |_| drawer_open.set(true)
                >
                    <Icon icon=IconName::Menu size=IconSize::Lg />
                </button>
            </div>

            {move || drawer_open.get().then(|| view! {
                <div class="fixed inset-0 z-50 bg-whitely-50 p-4 overflow-y-auto">
                    <div class="flex items-center justify-end">
                        <button
                            type="button"
                            class="text-aeblack-700"
                            aria-label="Close menu"
                            on:click=move |_| drawer_open.set(false)
                        >
                            <Icon icon=IconName::Close size=IconSize::Lg />
                        </button>
                    </div>
                    <ul class="mt-4 flex flex-col gap-1">
                        {entries
                            .iter()
                            .cloned()
                            .enumerate()
                            .map(|(index, entry)| match entry {
                                NavEntry::Link { label, href, active } => view! {
                                    <li>
                                        <a
                                            class=merge_class_lists(&[
                                                "block px-3 py-3 font-bold text-aeblack-900 rounded hover:bg-aeblack-50",
                                                if active { "text-primary-900" } else { "" },
                                            ])
                                            href=href
                                        >
                                            {label}
                                        </a>
                                    </li>
                                }
                                .into_view(),
                                NavEntry::Dropdown { label, groups, active } => {
                                    let is_open = move || {
                                        submenu_open
                                            .get()
                                            .get(index)
                                            .copied()
                                            .unwrap_or(false)
                                    };
                                    view! {
                                        <li>
                                            <button
                                                type="button"
                                                class=merge_class_lists(&[
                                                    "flex w-full items-center justify-between px-3 py-3 font-bold text-aeblack-900 rounded hover:bg-aeblack-50",
                                                    if active { "text-primary-900" } else { "" },
                                                ])
                                                aria-expanded=move || is_open().to_string()
                                                on:click=move |_| toggle_submenu(index)
                                            >
                                                {label}
                                                {move || if is_open() {
                                                    view! { <Icon icon=IconName::CaretUp size=IconSize::Sm /> }
                                                } else {
                                                    view! { <Icon icon=IconName::CaretDown size=IconSize::Sm /> }
                                                }}
                                            </button>
                                            {move || is_open().then(|| view! {
                                                <div class="pl-3">
                                                    {dropdown_panel(&groups)}
                                                </div>
                                            })}
                                        </li>
                                    }
                                    .into_view()
                                }
                                NavEntry::Custom(content) => {
                                    view! { <li class="px-3 py-3">{content.run()}</li> }.into_view()
                                }
                            })
                            .collect_view()}
                    </ul>
                </div>
            })}
        </div>
    }
}

#[component]
fn DesktopNav(entries: Vec<NavEntry>, logo: Option<ViewFn>) -> impl IntoView {
    view! {
        <div class="py-2.5" data-ui-kind="navigation" data-ui-mode="desktop">
            <div class="flex items-center justify-between">
                <a href="#" class="block">
                    <span class="sr-only">"Home"</span>
                    {logo.map(|logo| logo.run())}
                </a>
                <ul class="flex items-center">
                    {entries
                        .into_iter()
                        .map(|entry| view! { <DesktopNavEntry entry=entry /> })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}

#[component]
/// Site navigation bar that collapses into a drawer below the mobile
/// breakpoint. Structured dropdown data is validated before render;
/// rejected data is surfaced loudly instead of rendering a partial bar.
pub fn NavigationBar(
    /// Top-level entries in display order.
    entries: Vec<NavEntry>,
    /// Brand slot rendered at the leading edge.
    #[prop(optional, into)]
    logo: Option<ViewFn>,
    /// Extra utility classes merged onto the nav root.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let rejected = entries.iter().find_map(|entry| match entry {
        NavEntry::Dropdown { groups, .. } => validate_menu_groups(groups).err(),
        _ => None,
    });
    if let Some(err) = rejected {
        logging::error!("navigation dropdown data rejected: {err}");
        return view! {
            <div
                class="rounded-lg border border-red-400 bg-red-50 px-4 py-3 text-sm text-red-700"
                role="alert"
                data-ui-kind="navigation-error"
            >
                {err.to_string()}
            </div>
        }
        .into_view();
    }

    let is_mobile = use_viewport_is_mobile();
    let mobile_entries = entries.clone();
    let mobile_logo = logo.clone();
    let nav_class = class.unwrap_or_default();

    view! {
        <nav
            class=nav_class
            data-ui-kind="navigation-bar"
            data-ui-mobile=move || bool_token(is_mobile.get())
        >
            {move || if is_mobile.get() {
                view! { <MobileNav entries=mobile_entries.clone() logo=mobile_logo.clone() /> }
                    .into_view()
            } else {
                view! { <DesktopNav entries=entries.clone() logo=logo.clone() /> }.into_view()
            }}
        </nav>
    }
    .into_view()
}
