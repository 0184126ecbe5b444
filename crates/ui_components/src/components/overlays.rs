//! Modal, hover-intent popover, and toast overlays.

use std::time::Duration;

use leptos::*;

use super::{bool_token, PopoverAlign, PopoverSide};
use crate::icon::{Icon, IconName, IconSize};
use crate::state::{use_hover_intent, use_toast_timeline};

#[component]
/// Caller-controlled modal dialog. The escape key and a backdrop press
/// both request a close through `on_close`; the caller owns the open
/// state.
pub fn Modal(
    /// Whether the dialog is shown.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Invoked when the user requests a close.
    #[prop(optional)]
    on_close: Option<Callback<()>>,
    /// Dialog heading.
    #[prop(optional, into)]
    title: Option<String>,
    /// Extra utility classes merged onto the dialog panel.
    #[prop(optional, into)]
    class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let request_close = move || {
        if let Some(on_close) = on_close.as_ref() {
            on_close.call(());
        }
    };

    let escape_listener = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" && open.get_untracked() {
            request_close();
        }
    });
    on_cleanup(move || escape_listener.remove());

    let panel_class = ui_core::merge_class_lists(&[
        "w-full max-w-lg rounded-lg bg-white p-6 shadow-lg",
        class.as_deref().unwrap_or(""),
    ]);

    view! {
        {move || {
            let children = children.clone();
            let title = title.clone();
            let panel_class = panel_class.clone();
            open.get().then(move || view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-aeblack-950/40 p-4"
                    data-ui-kind="modal-backdrop"
                    on:click=move |_| request_close()
                >
                    <div
                        class=panel_class
                        role="dialog"
                        aria-modal="true"
                        data-ui-kind="modal"
                        on:click=move |event| event.stop_propagation()
                    >
                        <div class="flex items-start justify-between gap-4">
                            {title.map(|title| view! {
                                <h2 class="text-lg font-semibold text-gray-900">{title}</h2>
                            })}
                            <button
                                type="button"
                                class="inline-flex h-6 w-6 items-center justify-center rounded-full text-gray-500 hover:bg-gray-100"
                                aria-label="Close"
                                on:click=move |_| request_close()
                            >
                                <Icon icon=IconName::Close size=IconSize::Sm />
                            </button>
                        </div>
                        <div class="mt-2">{children()}</div>
                    </div>
                </div>
            })
        }}
    }
}

#[component]
/// Popover opened by hover intent: entry opens immediately, leaving
/// closes after a grace window so the pointer can travel from trigger to
/// content, and re-entry cancels the pending close.
pub fn Popover(
    /// Trigger content.
    #[prop(into)]
    trigger: ViewFn,
    /// Side the content opens toward.
    #[prop(default = PopoverSide::Bottom)]
    side: PopoverSide,
    /// Alignment along the chosen side.
    #[prop(default = PopoverAlign::Center)]
    align: PopoverAlign,
    /// Close-grace window in milliseconds.
    #[prop(default = 300)]
    close_delay_ms: u64,
    /// Extra utility classes merged onto the content panel.
    #[prop(optional, into)]
    class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let hover = use_hover_intent(Duration::from_millis(close_delay_ms));

    let content_class = ui_core::merge_class_lists(&[
        "absolute z-50 w-72 rounded-lg bg-white p-4 shadow-lg",
        side.placement_class(),
        class.as_deref().unwrap_or(""),
    ]);

    view! {
        <span
            class="relative inline-flex"
            data-ui-kind="popover"
            data-ui-side=side.token()
            data-ui-align=align.token()
            data-ui-open=move || bool_token(hover.is_open().get())
            on:pointerenter=move |_| hover.pointer_enter()
            on:pointerleave=move |_| hover.pointer_leave()
        >
            <span class="inline-flex items-center justify-center">{trigger.run()}</span>
            {move || {
                let children = children.clone();
                let content_class = content_class.clone();
                hover.is_open().get().then(move || view! {
                    <div class=content_class role="dialog">
                        {children()}
                    </div>
                })
            }}
        </span>
    }
}

#[component]
/// Text tooltip sharing the popover's hover-intent behavior.
pub fn Tooltip(
    /// Tooltip text.
    #[prop(into)]
    text: String,
    /// Side the bubble opens toward.
    #[prop(default = PopoverSide::Top)]
    side: PopoverSide,
    /// Close-grace window in milliseconds.
    #[prop(default = 150)]
    close_delay_ms: u64,
    children: Children,
) -> impl IntoView {
    let hover = use_hover_intent(Duration::from_millis(close_delay_ms));

    let bubble_class = ui_core::merge_class_lists(&[
        "absolute z-50 whitespace-nowrap rounded-md bg-aeblack-950 px-2 py-1 text-xs text-whitely-50 shadow-lg",
        side.placement_class(),
    ]);

    view! {
        <span
            class="relative inline-flex"
            data-ui-kind="tooltip"
            data-ui-side=side.token()
            on:pointerenter=move |_| hover.pointer_enter()
            on:pointerleave=move |_| hover.pointer_leave()
        >
            {children()}
            {move || {
                let text = text.clone();
                let bubble_class = bubble_class.clone();
                hover.is_open().get().then(move || view! {
                    <span class=bubble_class role="tooltip">{text}</span>
                })
            }}
        </span>
    }
}

#[component]
/// Toast notification. A rising edge on `show` restarts the cycle: any
/// visible toast closes, the toast re-opens after a short re-trigger
/// delay, and it dismisses itself once the duration elapses.
pub fn Toast(
    /// Show request; the rising edge triggers a cycle.
    #[prop(into)]
    show: MaybeSignal<bool>,
    /// Auto-dismiss window in milliseconds.
    #[prop(default = 5000)]
    duration_ms: u64,
    /// Observes visibility changes.
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    /// Extra utility classes merged onto the toast panel.
    #[prop(optional, into)]
    class: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let timeline = use_toast_timeline(
        Duration::from_millis(100),
        Duration::from_millis(duration_ms),
    );
    let panel_class = ui_core::merge_class_lists(&[
        "fixed bottom-4 right-4 z-50 w-[380px] rounded-lg border border-gray-200 bg-white p-4 shadow-lg",
        class.as_deref().unwrap_or(""),
    ]);

    let was_requested = create_rw_signal(false);
    create_effect(move |_| {
        let requested = show.get();
        let previous = was_requested.get_untracked();
        if requested && !previous {
            timeline.show();
        }
        was_requested.set(requested);
    });

    if let Some(on_open_change) = on_open_change {
        create_effect(move |_| {
            on_open_change.call(timeline.is_visible().get());
        });
    }

    view! {
        {move || {
            let children = children.clone();
            let panel_class = panel_class.clone();
            timeline.is_visible().get().then(move || view! {
                <div
                    class=panel_class
                    role="status"
                    data-ui-kind="toast"
                >
                    <div class="flex justify-between items-start gap-4">
                        <div class="flex-1">{children()}</div>
                        <button
                            type="button"
                            class="text-gray-400 hover:text-gray-600 rounded-lg p-1 hover:bg-gray-100 transition-colors"
                            aria-label="Close"
                            on:click=move |_| timeline.dismiss()
                        >
                            <Icon icon=IconName::Close size=IconSize::Sm />
                        </button>
                    </div>
                </div>
            })
        }}
    }
}
