//! Single and multi-value selection fields.

use leptos::*;
use ui_core::merge_class_lists;

use super::{bool_token, FieldSize, FieldTone};
use crate::icon::{Icon, IconName, IconSize};
use crate::state::{use_controllable, use_controllable_list};

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    /// Stable option value.
    pub value: String,
    /// Visible option label.
    pub label: String,
    /// Whether the option can be chosen.
    pub disabled: bool,
}

impl SelectOption {
    /// Creates an enabled option.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks the option as disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

fn tone_ring_class(tone: FieldTone, has_error: bool) -> &'static str {
    if has_error {
        return "focus-within:ring-red-600 ring-red-400 bg-red-50";
    }
    match tone {
        FieldTone::Primary => "focus-within:ring-primary-600 ring-primary-400",
        FieldTone::Secondary => "focus-within:ring-secondary-600 ring-secondary-400",
    }
}

fn trigger_size_class(size: FieldSize) -> &'static str {
    match size {
        FieldSize::Sm => "min-h-10 text-sm py-1.5",
        FieldSize::Base => "min-h-12 text-base py-2",
        FieldSize::Lg => "min-h-14 text-lg py-2.5",
    }
}

fn select_label_class(size: FieldSize, has_error: bool, required: bool) -> String {
    merge_class_lists(&[
        "mb-1 block font-medium text-gray-900",
        match size {
            FieldSize::Sm | FieldSize::Base => "text-sm",
            FieldSize::Lg => "text-base",
        },
        if has_error { "text-red-600" } else { "" },
        if required {
            "after:ml-0.5 after:text-red-500 after:content-['*']"
        } else {
            ""
        },
    ])
}

pub(crate) fn select_trigger_class(
    tone: FieldTone,
    size: FieldSize,
    has_error: bool,
    disabled: bool,
    extra: Option<&str>,
) -> String {
    merge_class_lists(&[
        "relative flex w-full flex-wrap items-center justify-between rounded-lg shadow-sm ring-2 ring-inset focus-within:ring-2 focus-within:ring-inset bg-whitely-50",
        "px-4 text-left outline-none",
        tone_ring_class(tone, has_error),
        trigger_size_class(size),
        if disabled { "opacity-40 cursor-not-allowed" } else { "" },
        extra.unwrap_or(""),
    ])
}

#[component]
fn SelectFooter(error: Option<String>, helper_text: Option<String>) -> impl IntoView {
    let is_error = error.is_some();
    let footer_class = if is_error {
        "mt-1 text-sm text-red-600"
    } else {
        "mt-1 text-sm text-gray-500"
    };
    error.or(helper_text).map(|message| {
        view! {
            <p class=footer_class>{message}</p>
        }
    })
}

#[component]
/// Native single-value select with tone, size, and error chrome.
pub fn SelectField(
    /// Options in display order.
    options: Vec<SelectOption>,
    /// Selected value supplied by the caller.
    #[prop(optional)]
    value: Option<MaybeSignal<String>>,
    /// Initial selection for uncontrolled usage.
    #[prop(optional, into)]
    default_value: String,
    /// Invoked with the newly selected value.
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Visible label above the control.
    #[prop(optional, into)]
    label: Option<String>,
    /// Error message; supersedes the tone and the helper text.
    #[prop(optional, into)]
    error: Option<String>,
    /// Helper text below the control.
    #[prop(optional, into)]
    helper_text: Option<String>,
    /// Placeholder shown while nothing is selected.
    #[prop(default = "Select an option".to_string(), into)]
    placeholder: String,
    /// Sizing token.
    #[prop(default = FieldSize::Base)]
    size: FieldSize,
    /// Ring and focus color tone.
    #[prop(default = FieldTone::Primary)]
    tone: FieldTone,
    /// Marks the field as required in the label.
    #[prop(optional)]
    required: bool,
    /// Disabled state.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Extra utility classes merged onto the trigger chrome.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let (selected, request_selected) = use_controllable(value, on_change, default_value);
    let has_error = error.is_some();
    let trigger = select_trigger_class(
        tone,
        size,
        has_error,
        disabled.get_untracked(),
        class.as_deref(),
    );

    view! {
        <div class="w-full" data-ui-kind="select" data-ui-size=size.token() data-ui-tone=tone.token()>
            {label.map(|label| view! {
                <label class=select_label_class(size, has_error, required)>{label}</label>
            })}
            <div class=trigger>
                <select
                    class="w-full flex-1 appearance-none border-0 bg-transparent outline-none focus:ring-0 disabled:cursor-not-allowed"
                    disabled=move || disabled.get()
                    on:change=move |event| request_selected.call(event_target_value(&event))
                >
                    <option value="" disabled=true selected=move || selected.get().is_empty()>
                        {placeholder}
                    </option>
                    {options
                        .into_iter()
                        .map(|option| {
                            let option_value = option.value.clone();
                            view! {
                                <option
                                    value=option.value.clone()
                                    disabled=option.disabled
                                    selected=move || selected.get() == option_value
                                >
                                    {option.label}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <Icon icon=IconName::CaretDown size=IconSize::Sm class="pointer-events-none text-gray-400" />
            </div>
            <SelectFooter error=error helper_text=helper_text />
        </div>
    }
}

#[component]
/// Multi-value select rendering chips for the current selection. The
/// value list may be caller-controlled; toggling an option removes it
/// when present and appends it otherwise.
pub fn MultiSelect(
    /// Options in display order.
    options: Vec<SelectOption>,
    /// Selected values supplied by the caller.
    #[prop(optional)]
    value: Option<MaybeSignal<Vec<String>>>,
    /// Initial selection for uncontrolled usage.
    #[prop(optional)]
    default_value: Vec<String>,
    /// Invoked with the full next selection on every toggle.
    #[prop(optional)]
    on_change: Option<Callback<Vec<String>>>,
    /// Visible label above the control.
    #[prop(optional, into)]
    label: Option<String>,
    /// Error message; supersedes the tone and the helper text.
    #[prop(optional, into)]
    error: Option<String>,
    /// Helper text below the control.
    #[prop(optional, into)]
    helper_text: Option<String>,
    /// Placeholder shown while nothing is selected.
    #[prop(default = "Select options".to_string(), into)]
    placeholder: String,
    /// Sizing token.
    #[prop(default = FieldSize::Base)]
    size: FieldSize,
    /// Ring and focus color tone.
    #[prop(default = FieldTone::Primary)]
    tone: FieldTone,
    /// Marks the field as required in the label.
    #[prop(optional)]
    required: bool,
    /// Disabled state.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Extra utility classes merged onto the trigger chrome.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let (values, toggle) = use_controllable_list(value, on_change, default_value);
    let open = create_rw_signal(false);
    let has_error = error.is_some();
    let trigger = select_trigger_class(
        tone,
        size,
        has_error,
        disabled.get_untracked(),
        class.as_deref(),
    );

    // Any press outside the component closes the list; presses inside
    // stop propagation before they reach the window.
    let outside_press = window_event_listener(ev::mousedown, move |_| {
        if open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || outside_press.remove());

    let chip_options = options.clone();
    let list_options = options;

    view! {
        <div
            class="w-full relative"
            data-ui-kind="multi-select"
            data-ui-size=size.token()
            data-ui-tone=tone.token()
            on:mousedown=move |event| event.stop_propagation()
        >
            {label.map(|label| view! {
                <label class=select_label_class(size, has_error, required)>{label}</label>
            })}
            <div
                class=trigger
                role="combobox"
                tabindex=move || if disabled.get() { -1 } else { 0 }
                aria-expanded=move || open.get().to_string()
                aria-haspopup="listbox"
                on:click=move |_| {
                    if !disabled.get_untracked() {
                        open.update(|open| *open = !*open);
                    }
                }
            >
                <div class="flex flex-wrap flex-1">
                    {move || {
                        let selected = values.get();
                        if selected.is_empty() {
                            view! { <span class="text-gray-400 py-1">{placeholder.clone()}</span> }
                                .into_view()
                        } else {
                            chip_options
                                .iter()
                                .filter(|option| selected.contains(&option.value))
                                .map(|option| {
                                    let chip_value = option.value.clone();
                                    view! {
                                        <span class="flex items-center gap-1 m-0.5 px-2 py-1 rounded-md bg-primary-100 text-primary-800 text-sm">
                                            <span>{option.label.clone()}</span>
                                            <button
                                                type="button"
                                                class="text-primary-600 hover:text-primary-800 focus:outline-none"
                                                aria-label="Remove selection"
                                                on:click=move |event| {
                                                    event.stop_propagation();
                                                    toggle.call(chip_value.clone());
                                                }
                                            >
                                                <Icon icon=IconName::Close size=IconSize::Sm class="h-3 w-3" />
                                            </button>
                                        </span>
                                    }
                                })
                                .collect_view()
                        }
                    }}
                </div>
                <div class="flex items-center ml-2 text-gray-400">
                    {move || if open.get() {
                        view! { <Icon icon=IconName::CaretUp size=IconSize::Sm /> }
                    } else {
                        view! { <Icon icon=IconName::CaretDown size=IconSize::Sm /> }
                    }}
                </div>
            </div>

            {move || {
                open.get().then(|| {
                    view! {
                        <div
                            class="absolute left-0 right-0 mt-1 overflow-hidden rounded-lg bg-white shadow-lg border border-gray-200 z-50 max-h-60 overflow-y-auto"
                            role="listbox"
                        >
                            {list_options
                                .iter()
                                .map(|option| {
                                    let option_value = option.value.clone();
                                    let marker_value = option.value.clone();
                                    let option_disabled = option.disabled;
                                    view! {
                                        <div
                                            class=merge_class_lists(&[
                                                "relative flex items-center px-4 py-2 text-gray-900",
                                                "hover:bg-primary-50 hover:text-primary-900 outline-none cursor-pointer",
                                                if option_disabled { "opacity-50 pointer-events-none" } else { "" },
                                            ])
                                            role="option"
                                            aria-selected=move || {
                                                bool_token(values.get().contains(&marker_value))
                                            }
                                            on:click=move |_| {
                                                if !option_disabled {
                                                    toggle.call(option_value.clone());
                                                }
                                            }
                                        >
                                            <span class="flex-1">{option.label.clone()}</span>
                                            {
                                                let check_value = option.value.clone();
                                                move || {
                                                    values
                                                        .get()
                                                        .contains(&check_value)
                                                        .then(|| view! {
                                                            <Icon
                                                                icon=IconName::Check
                                                                size=IconSize::Sm
                                                                class="text-primary-600"
                                                            />
                                                        })
                                                }
                                            }
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                })
            }}

            <SelectFooter error=error helper_text=helper_text />
        </div>
    }
}
