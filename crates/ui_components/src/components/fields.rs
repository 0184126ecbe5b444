//! Text, checkbox, switch, and radio form fields.

use std::sync::OnceLock;

use leptos::ev::FocusEvent;
use leptos::*;
use ui_core::{merge_class_lists, Selection, VariantTable};

use super::{bool_token, FieldSize, FieldTone, SelectOption, ToggleVariant};
use crate::state::use_controllable;

fn field_chrome_table() -> &'static VariantTable {
    static TABLE: OnceLock<VariantTable> = OnceLock::new();
    TABLE.get_or_init(|| {
        VariantTable::builder()
            .base("relative flex rounded-lg shadow-sm ring-2 ring-inset focus-within:ring-2 focus-within:ring-inset bg-whitely-50")
            .axis(
                "tone",
                &[
                    ("primary", "focus-within:ring-primary-600 ring-primary-400"),
                    ("secondary", "focus-within:ring-secondary-600 ring-secondary-400"),
                ],
            )
            .axis(
                "state",
                &[
                    ("normal", ""),
                    ("error", "focus-within:ring-red-600 ring-red-400 bg-red-50"),
                ],
            )
            .flag_axis("disabled", "opacity-40")
            .build()
            .expect("field chrome table matches its declared axes")
    })
}

pub(crate) fn field_chrome_class(
    tone: FieldTone,
    has_error: bool,
    disabled: bool,
    extra: Option<&str>,
) -> String {
    let selection = Selection::new()
        .set("tone", tone.token())
        .set("state", if has_error { "error" } else { "normal" })
        .flag("disabled", disabled);

    field_chrome_table()
        .resolve(&selection, &[extra.unwrap_or("")])
        .expect("field axes are covered by the field chrome table")
        .class()
}

fn input_size_class(size: FieldSize) -> &'static str {
    match size {
        FieldSize::Sm => "h-10 text-sm",
        FieldSize::Base => "h-12 text-base",
        FieldSize::Lg => "h-14 text-lg",
    }
}

fn label_size_class(size: FieldSize) -> &'static str {
    match size {
        FieldSize::Sm | FieldSize::Base => "text-sm",
        FieldSize::Lg => "text-base",
    }
}

fn label_class(size: FieldSize, has_error: bool, required: bool) -> String {
    merge_class_lists(&[
        "mb-1 block font-medium text-gray-900",
        label_size_class(size),
        if has_error { "text-red-600" } else { "" },
        if required {
            "after:ml-0.5 after:text-red-500 after:content-['*']"
        } else {
            ""
        },
    ])
}

#[component]
fn FieldFooter(
    error: Option<String>,
    helper_text: Option<String>,
) -> impl IntoView {
    let is_error = error.is_some();
    let footer_class = if is_error {
        "mt-1 text-sm text-red-600"
    } else {
        "mt-1 text-sm text-gray-500"
    };
    error.or(helper_text).map(|message| {
        view! {
            <p class=footer_class data-ui-slot="footer" data-ui-error=bool_token(is_error)>
                {message}
            </p>
        }
    })
}

#[component]
/// Labeled text input with tone, size, and error chrome.
pub fn TextField(
    /// Visible label above the control.
    #[prop(optional, into)]
    label: Option<String>,
    /// Error message; supersedes the tone and the helper text.
    #[prop(optional, into)]
    error: Option<String>,
    /// Helper text below the control.
    #[prop(optional, into)]
    helper_text: Option<String>,
    /// Sizing token.
    #[prop(default = FieldSize::Base)]
    size: FieldSize,
    /// Ring and focus color tone.
    #[prop(default = FieldTone::Primary)]
    tone: FieldTone,
    /// Input element type.
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// DOM id for the input and label pairing.
    #[prop(optional, into)]
    id: Option<String>,
    /// Marks the field as required in the label.
    #[prop(optional)]
    required: bool,
    /// Disabled state.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Current value.
    #[prop(optional, into)]
    value: MaybeSignal<String>,
    /// Extra utility classes merged onto the chrome container.
    #[prop(optional, into)]
    class: Option<String>,
    /// Invoked with the new text on every input event.
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Blur handler.
    #[prop(optional)]
    on_blur: Option<Callback<FocusEvent>>,
) -> impl IntoView {
    let has_error = error.is_some();
    let chrome = field_chrome_class(
        tone,
        has_error,
        disabled.get_untracked(),
        class.as_deref(),
    );
    let input_class = merge_class_lists(&[
        "w-full flex-1 border-0 bg-transparent px-4 text-gray-900 placeholder:text-gray-400",
        "focus:ring-0 outline-none disabled:cursor-not-allowed",
        input_size_class(size),
    ]);
    let input_id = id.clone();

    view! {
        <div class="w-full" data-ui-kind="text-field" data-ui-size=size.token() data-ui-tone=tone.token()>
            {label.map(|label| view! {
                <label class=label_class(size, has_error, required) for=id.clone().unwrap_or_default()>
                    {label}
                </label>
            })}
            <div class=chrome>
                <input
                    class=input_class
                    type=input_type
                    id=input_id
                    placeholder=placeholder
                    required=required
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    on:input=move |event| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(event_target_value(&event));
                        }
                    }
                    on:blur=move |event| {
                        if let Some(on_blur) = on_blur.as_ref() {
                            on_blur.call(event);
                        }
                    }
                />
            </div>
            <FieldFooter error=error helper_text=helper_text />
        </div>
    }
}

#[component]
/// Labeled multiline text area with the same chrome as [`TextField`].
pub fn TextArea(
    /// Visible label above the control.
    #[prop(optional, into)]
    label: Option<String>,
    /// Error message; supersedes the tone and the helper text.
    #[prop(optional, into)]
    error: Option<String>,
    /// Helper text below the control.
    #[prop(optional, into)]
    helper_text: Option<String>,
    /// Ring and focus color tone.
    #[prop(default = FieldTone::Primary)]
    tone: FieldTone,
    /// Visible row count.
    #[prop(default = 4)]
    rows: u32,
    /// Placeholder text.
    #[prop(optional, into)]
    placeholder: Option<String>,
    /// Marks the field as required in the label.
    #[prop(optional)]
    required: bool,
    /// Disabled state.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Current value.
    #[prop(optional, into)]
    value: MaybeSignal<String>,
    /// Extra utility classes merged onto the chrome container.
    #[prop(optional, into)]
    class: Option<String>,
    /// Invoked with the new text on every input event.
    #[prop(optional)]
    on_input: Option<Callback<String>>,
) -> impl IntoView {
    let has_error = error.is_some();
    let chrome = field_chrome_class(
        tone,
        has_error,
        disabled.get_untracked(),
        class.as_deref(),
    );

    view! {
        <div class="w-full" data-ui-kind="text-area" data-ui-tone=tone.token()>
            {label.map(|label| view! {
                <label class=label_class(FieldSize::Base, has_error, required)>{label}</label>
            })}
            <div class=chrome>
                <textarea
                    class="w-full flex-1 border-0 bg-transparent px-4 py-2 text-base text-gray-900 placeholder:text-gray-400 focus:ring-0 outline-none disabled:cursor-not-allowed resize-none"
                    rows=rows
                    placeholder=placeholder
                    required=required
                    prop:value=move || value.get()
                    disabled=move || disabled.get()
                    on:input=move |event| {
                        if let Some(on_input) = on_input.as_ref() {
                            on_input.call(event_target_value(&event));
                        }
                    }
                ></textarea>
            </div>
            <FieldFooter error=error helper_text=helper_text />
        </div>
    }
}

fn checkbox_size_class(size: FieldSize) -> &'static str {
    match size {
        FieldSize::Sm => "h-4 w-4",
        FieldSize::Base => "h-5 w-5",
        FieldSize::Lg => "h-6 w-6",
    }
}

#[component]
/// Checkbox with an optional caller-controlled checked state.
pub fn CheckboxField(
    /// Visible label beside the control.
    #[prop(optional, into)]
    label: Option<String>,
    /// Secondary description under the label.
    #[prop(optional, into)]
    description: Option<String>,
    /// Sizing token.
    #[prop(default = FieldSize::Base)]
    size: FieldSize,
    /// Checked state supplied by the caller. When set, the component
    /// never stores its own copy.
    #[prop(optional)]
    checked: Option<MaybeSignal<bool>>,
    /// Initial checked state for uncontrolled usage.
    #[prop(optional)]
    default_checked: bool,
    /// Invoked with the next checked state on every toggle.
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Disabled state.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Extra utility classes merged onto the outer label.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let (is_checked, request_checked) = use_controllable(checked, on_change, default_checked);

    let box_class = merge_class_lists(&[
        "rounded border-2 border-gray-300 text-primary-600 accent-primary-600",
        "focus-visible:ring-2 focus-visible:ring-primary-400 disabled:cursor-not-allowed disabled:opacity-40",
        checkbox_size_class(size),
    ]);
    let wrapper_class = merge_class_lists(&[
        "flex items-start gap-2 cursor-pointer",
        class.as_deref().unwrap_or(""),
    ]);

    view! {
        <label
            class=wrapper_class
            data-ui-kind="checkbox"
            data-ui-size=size.token()
            data-ui-checked=move || bool_token(is_checked.get())
        >
            <input
                class=box_class
                type="checkbox"
                prop:checked=move || is_checked.get()
                disabled=move || disabled.get()
                on:change=move |event| request_checked.call(event_target_checked(&event))
            />
            {label.map(|label| view! {
                <span class="flex flex-col">
                    <span class=label_size_class(size)>{label}</span>
                    {description.map(|description| view! {
                        <span class="text-xs text-gray-500">{description}</span>
                    })}
                </span>
            })}
        </label>
    }
}

fn switch_track_class(variant: ToggleVariant) -> &'static str {
    match variant {
        ToggleVariant::Default => "bg-aeblack-100 data-[state=checked]:bg-primary-300",
        ToggleVariant::Success => "bg-aeblack-100 data-[state=checked]:bg-aegreen-300",
        ToggleVariant::Secondary => "bg-aeblack-100 data-[state=checked]:bg-secondary-800",
        ToggleVariant::Mode => {
            "bg-whitely-50 border border-aeblack-100 data-[state=checked]:bg-aeblack-950"
        }
    }
}

fn switch_thumb_class(variant: ToggleVariant) -> &'static str {
    match variant {
        ToggleVariant::Default => {
            "bg-whitely-50 border border-aeblack-100 data-[state=checked]:border-primary-600"
        }
        ToggleVariant::Success => {
            "bg-whitely-50 border border-aeblack-100 data-[state=checked]:border-aegreen-600"
        }
        ToggleVariant::Secondary => {
            "bg-whitely-50 border border-aeblack-100 data-[state=checked]:border-secondary-600"
        }
        ToggleVariant::Mode => "bg-transparent border-transparent flex items-center justify-center",
    }
}

#[component]
/// Switch with `role="switch"` semantics and an optional caller-controlled
/// checked state.
pub fn Switch(
    /// Color treatment.
    #[prop(default = ToggleVariant::Default)]
    variant: ToggleVariant,
    /// Visible label beside the control.
    #[prop(optional, into)]
    label: Option<String>,
    /// Checked state supplied by the caller.
    #[prop(optional)]
    checked: Option<MaybeSignal<bool>>,
    /// Initial checked state for uncontrolled usage.
    #[prop(optional)]
    default_checked: bool,
    /// Invoked with the next checked state on every toggle.
    #[prop(optional)]
    on_change: Option<Callback<bool>>,
    /// Disabled state.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Extra utility classes merged onto the outer label.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let (is_checked, request_checked) = use_controllable(checked, on_change, default_checked);

    let root_class = merge_class_lists(&[
        "relative flex items-center h-4 w-10 cursor-pointer rounded-full outline-none transition-colors",
        "focus-visible:outline focus-visible:outline-offset-[3px] focus-visible:outline-primary-500",
        "disabled:cursor-not-allowed disabled:opacity-30",
        switch_track_class(variant),
    ]);
    let thumb_class = merge_class_lists(&[
        "block h-6 w-6 rounded-full shadow transition-transform",
        "data-[state=checked]:translate-x-5",
        switch_thumb_class(variant),
    ]);
    let label_wrap = merge_class_lists(&[
        "relative inline-flex cursor-pointer items-center gap-2",
        class.as_deref().unwrap_or(""),
    ]);

    let handle_toggle = move || {
        if disabled.get_untracked() {
            return;
        }
        request_checked.call(!is_checked.get_untracked());
    };

    view! {
        <label class=label_wrap data-ui-kind="switch" data-ui-variant=variant.token()>
            <button
                type="button"
                class=root_class
                role="switch"
                aria-checked=move || is_checked.get().to_string()
                disabled=move || disabled.get()
                data-state=move || if is_checked.get() { "checked" } else { "unchecked" }
                on:click=move |_| handle_toggle()
                on:keydown=move |event| match event.key().as_str() {
                    " " | "Enter" => {
                        event.prevent_default();
                        handle_toggle();
                    }
                    _ => {}
                }
            >
                <span
                    class=thumb_class
                    data-state=move || if is_checked.get() { "checked" } else { "unchecked" }
                ></span>
            </button>
            {label.map(|label| view! { <span class="text-sm text-gray-900">{label}</span> })}
        </label>
    }
}

#[component]
/// Radio group with a single caller-controlled or internal selection.
pub fn RadioGroup(
    /// Form name shared by the radio inputs.
    #[prop(into)]
    name: String,
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
    /// Sizing token.
    #[prop(default = FieldSize::Base)]
    size: FieldSize,
    /// Disabled state for the whole group.
    #[prop(optional, into)]
    disabled: MaybeSignal<bool>,
    /// Extra utility classes merged onto the group container.
    #[prop(optional, into)]
    class: Option<String>,
) -> impl IntoView {
    let (selected, request_selected) = use_controllable(value, on_change, default_value);
    let group_class = merge_class_lists(&[
        "flex flex-col gap-2",
        class.as_deref().unwrap_or(""),
    ]);

    view! {
        <div
            class=group_class
            role="radiogroup"
            data-ui-kind="radio-group"
            data-ui-size=size.token()
        >
            {options
                .into_iter()
                .map(|option| {
                    let option_value = option.value.clone();
                    let check_value = option.value.clone();
                    let option_disabled = option.disabled;
                    view! {
                        <label class="flex items-center gap-2 cursor-pointer">
                            <input
                                class=merge_class_lists(&[
                                    "border-2 border-gray-300 text-primary-600 accent-primary-600",
                                    "focus-visible:ring-2 focus-visible:ring-primary-400",
                                    checkbox_size_class(size),
                                ])
                                type="radio"
                                name=name.clone()
                                value=option.value.clone()
                                prop:checked=move || selected.get() == check_value
                                disabled=move || disabled.get() || option_disabled
                                on:change=move |_| request_selected.call(option_value.clone())
                            />
                            <span class=label_size_class(size)>{option.label}</span>
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn error_chrome_replaces_the_tone_ring() {
        let class = field_chrome_class(FieldTone::Primary, true, false, None);
        let tokens: Vec<&str> = class.split_whitespace().collect();

        assert!(tokens.contains(&"ring-red-400"));
        assert!(!tokens.contains(&"ring-primary-400"));
        assert!(tokens.contains(&"bg-red-50"));
        assert!(!tokens.contains(&"bg-whitely-50"));
    }

    #[test]
    fn tone_ring_survives_without_an_error() {
        let class = field_chrome_class(FieldTone::Secondary, false, false, None);
        let tokens: Vec<&str> = class.split_whitespace().collect();

        assert!(tokens.contains(&"ring-secondary-400"));
        assert!(!tokens.contains(&"ring-red-400"));
    }

    #[test]
    fn disabled_chrome_adds_the_opacity_token() {
        let class = field_chrome_class(FieldTone::Primary, false, true, None);
        assert!(class.split_whitespace().any(|token| token == "opacity-40"));
    }

    #[test]
    fn required_label_carries_the_marker_classes() {
        let class = label_class(FieldSize::Base, false, true);
        assert!(class.contains("after:content-['*']"));
        assert_eq!(label_class(FieldSize::Base, false, false).contains("after:"), false);
    }
}
