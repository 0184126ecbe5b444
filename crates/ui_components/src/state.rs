//! Controlled/uncontrolled state adapters and transient UI lifetimes.
//!
//! `use_controllable` unifies the two ownership models behind one pair:
//! a read signal that always reflects the authoritative value and a
//! request callback that routes mutations to the right place. When a
//! caller supplies an external value the component never stores its own
//! copy; the request only notifies the caller, and the value changes
//! when the caller feeds the new one back through props. Without an
//! external value the component owns a fallback signal seeded once from
//! the default.
//!
//! The hover and toast bindings drive the headless timer machines with
//! real browser timeouts. Every scheduled handle is tracked and cleared
//! both on supersession and unconditionally at unmount.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::*;
use ui_core::{
    toggle_value, HoverEffect, HoverIntent, ObjectUrlFactory, TimerId, ToastEffect, ToastTimeline,
};

/// Viewport width below which navigation collapses into its mobile form.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Reconciles an optionally caller-controlled value with internal
/// fallback state.
///
/// Returns the current-value signal and the change-request callback.
/// With `value` supplied the signal always mirrors it and a request only
/// invokes `on_change`; if the caller never feeds the value back the UI
/// holds still, which is the contract rather than a defect. Without
/// `value` the internal fallback is seeded from `default_value` exactly
/// once and requests update it directly, echoing through `on_change`
/// when one is supplied.
pub fn use_controllable<T: Clone + 'static>(
    value: Option<MaybeSignal<T>>,
    on_change: Option<Callback<T>>,
    default_value: T,
) -> (Signal<T>, Callback<T>) {
    let internal = create_rw_signal(default_value);
    let controlled = value.is_some();

    let current = Signal::derive(move || match &value {
        Some(external) => external.get(),
        None => internal.get(),
    });

    let request = Callback::new(move |next: T| {
        if !controlled {
            internal.set(next.clone());
        }
        if let Some(on_change) = on_change {
            on_change.call(next);
        }
    });

    (current, request)
}

/// Multi-value form of [`use_controllable`]. The returned callback
/// toggles one item: removed when present, appended otherwise, with the
/// relative order of untouched items preserved.
pub fn use_controllable_list<T: Clone + PartialEq + 'static>(
    value: Option<MaybeSignal<Vec<T>>>,
    on_change: Option<Callback<Vec<T>>>,
    default_value: Vec<T>,
) -> (Signal<Vec<T>>, Callback<T>) {
    let (current, request) = use_controllable(value, on_change, default_value);

    let toggle = Callback::new(move |item: T| {
        let next = toggle_value(&current.get_untracked(), &item);
        request.call(next);
    });

    (current, toggle)
}

fn schedule(delay: Duration, callback: impl FnOnce() + 'static) -> Option<TimeoutHandle> {
    match set_timeout_with_handle(callback, delay) {
        Ok(handle) => Some(handle),
        Err(err) => {
            logging::warn!("timer scheduling failed: {err:?}");
            None
        }
    }
}

fn clear_handle(pending: StoredValue<Vec<(TimerId, TimeoutHandle)>>, id: TimerId) {
    pending.update_value(|pending| {
        if let Some(position) = pending.iter().position(|(timer, _)| *timer == id) {
            let (_, handle) = pending.remove(position);
            handle.clear();
        }
    });
}

fn clear_all_handles(pending: StoredValue<Vec<(TimerId, TimeoutHandle)>>) {
    pending.update_value(|pending| {
        for (_, handle) in pending.drain(..) {
            handle.clear();
        }
    });
}

/// Hover-intent wiring for one popover or tooltip instance.
#[derive(Clone, Copy)]
pub struct HoverBinding {
    open: RwSignal<bool>,
    machine: StoredValue<HoverIntent>,
    pending: StoredValue<Vec<(TimerId, TimeoutHandle)>>,
    close_delay: Duration,
}

impl HoverBinding {
    /// Returns whether content should be visible.
    pub fn is_open(&self) -> Signal<bool> {
        self.open.into()
    }

    /// Pointer entered the trigger or content.
    pub fn pointer_enter(&self) {
        let effects = self
            .machine
            .try_update_value(|machine| machine.pointer_enter())
            .unwrap_or_default();
        self.apply(effects);
    }

    /// Pointer left the trigger and content.
    pub fn pointer_leave(&self) {
        let effects = self
            .machine
            .try_update_value(|machine| machine.pointer_leave())
            .unwrap_or_default();
        self.apply(effects);
    }

    fn timer_fired(&self, id: TimerId) {
        self.pending
            .update_value(|pending| pending.retain(|(timer, _)| *timer != id));
        let effects = self
            .machine
            .try_update_value(|machine| machine.timer_fired(id))
            .unwrap_or_default();
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<HoverEffect>) {
        for effect in effects {
            match effect {
                HoverEffect::Open => self.open.set(true),
                HoverEffect::Close => self.open.set(false),
                HoverEffect::Cancel(id) => clear_handle(self.pending, id),
                HoverEffect::ScheduleClose(id) => {
                    let binding = *self;
                    if let Some(handle) =
                        schedule(self.close_delay, move || binding.timer_fired(id))
                    {
                        self.pending.update_value(|pending| pending.push((id, handle)));
                    }
                }
            }
        }
    }
}

/// Creates a hover-intent binding whose close is deferred by
/// `close_delay`. All pending timers are cleared at unmount.
pub fn use_hover_intent(close_delay: Duration) -> HoverBinding {
    let binding = HoverBinding {
        open: create_rw_signal(false),
        machine: store_value(HoverIntent::new()),
        pending: store_value(Vec::new()),
        close_delay,
    };

    on_cleanup(move || {
        let _ = binding
            .machine
            .try_update_value(|machine| machine.teardown());
        clear_all_handles(binding.pending);
    });

    binding
}

/// Show/auto-dismiss wiring for one toast instance.
#[derive(Clone, Copy)]
pub struct ToastBinding {
    visible: RwSignal<bool>,
    machine: StoredValue<ToastTimeline>,
    pending: StoredValue<Vec<(TimerId, TimeoutHandle)>>,
    reopen_delay: Duration,
    dismiss_after: Duration,
}

impl ToastBinding {
    /// Returns whether the toast should be visible.
    pub fn is_visible(&self) -> Signal<bool> {
        self.visible.into()
    }

    /// Requests the toast to show, restarting any cycle in flight.
    pub fn show(&self) {
        let effects = self
            .machine
            .try_update_value(|machine| machine.show())
            .unwrap_or_default();
        self.apply(effects);
    }

    /// Dismisses the toast immediately.
    pub fn dismiss(&self) {
        let effects = self
            .machine
            .try_update_value(|machine| machine.dismiss_now())
            .unwrap_or_default();
        self.apply(effects);
    }

    fn reopen_fired(&self, id: TimerId) {
        self.pending
            .update_value(|pending| pending.retain(|(timer, _)| *timer != id));
        let effects = self
            .machine
            .try_update_value(|machine| machine.reopen_fired(id))
            .unwrap_or_default();
        self.apply(effects);
    }

    fn dismiss_fired(&self, id: TimerId) {
        self.pending
            .update_value(|pending| pending.retain(|(timer, _)| *timer != id));
        let effects = self
            .machine
            .try_update_value(|machine| machine.dismiss_fired(id))
            .unwrap_or_default();
        self.apply(effects);
    }

    fn apply(&self, effects: Vec<ToastEffect>) {
        for effect in effects {
            match effect {
                ToastEffect::Open => self.visible.set(true),
                ToastEffect::Close => self.visible.set(false),
                ToastEffect::Cancel(id) => clear_handle(self.pending, id),
                ToastEffect::ScheduleReopen(id) => {
                    let binding = *self;
                    if let Some(handle) =
                        schedule(self.reopen_delay, move || binding.reopen_fired(id))
                    {
                        self.pending.update_value(|pending| pending.push((id, handle)));
                    }
                }
                ToastEffect::ScheduleDismiss(id) => {
                    let binding = *self;
                    if let Some(handle) =
                        schedule(self.dismiss_after, move || binding.dismiss_fired(id))
                    {
                        self.pending.update_value(|pending| pending.push((id, handle)));
                    }
                }
            }
        }
    }
}

/// Creates a toast binding that re-opens after `reopen_delay` and
/// auto-dismisses `dismiss_after` later. All pending timers are cleared
/// at unmount.
pub fn use_toast_timeline(reopen_delay: Duration, dismiss_after: Duration) -> ToastBinding {
    let binding = ToastBinding {
        visible: create_rw_signal(false),
        machine: store_value(ToastTimeline::new()),
        pending: store_value(Vec::new()),
        reopen_delay,
        dismiss_after,
    };

    on_cleanup(move || {
        let _ = binding
            .machine
            .try_update_value(|machine| machine.teardown());
        clear_all_handles(binding.pending);
    });

    binding
}

fn current_viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|width| width.as_f64())
        .unwrap_or(MOBILE_BREAKPOINT_PX)
}

/// Subscribes this component instance to window resizes and derives the
/// mobile-layout flag. Resize events are applied unthrottled; the
/// subscription is removed at unmount.
pub fn use_viewport_is_mobile() -> Signal<bool> {
    let width = create_rw_signal(current_viewport_width());

    let resize_listener = window_event_listener(ev::resize, move |_| {
        width.set(current_viewport_width());
    });
    on_cleanup(move || resize_listener.remove());

    Signal::derive(move || width.get() < MOBILE_BREAKPOINT_PX)
}

/// Object-URL factory backed by the browser's URL API.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct BrowserUrlFactory;

impl ObjectUrlFactory<web_sys::File> for BrowserUrlFactory {
    fn create(&mut self, source: &web_sys::File) -> Option<String> {
        match web_sys::Url::create_object_url_with_blob(source) {
            Ok(url) => Some(url),
            Err(err) => {
                logging::warn!("object url creation failed: {err:?}");
                None
            }
        }
    }

    fn revoke(&mut self, url: &str) {
        if let Err(err) = web_sys::Url::revoke_object_url(url) {
            logging::warn!("object url revoke failed: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn controlled_value_always_reports_the_external_value() {
        let runtime = create_runtime();

        let (current, request) = use_controllable(
            Some(MaybeSignal::from("external".to_string())),
            None,
            "default".to_string(),
        );

        assert_eq!(current.get_untracked(), "external");
        request.call("requested".to_string());
        assert_eq!(
            current.get_untracked(),
            "external",
            "a controlled component never stores the requested value itself"
        );

        runtime.dispose();
    }

    #[test]
    fn controlled_requests_reach_the_change_callback() {
        let runtime = create_runtime();

        let observed = create_rw_signal(Vec::<String>::new());
        let (_, request) = use_controllable(
            Some(MaybeSignal::from("external".to_string())),
            Some(Callback::new(move |next: String| {
                observed.update(|seen| seen.push(next));
            })),
            "default".to_string(),
        );

        request.call("first".to_string());
        request.call("second".to_string());
        assert_eq!(
            observed.get_untracked(),
            vec!["first".to_string(), "second".to_string()]
        );

        runtime.dispose();
    }

    #[test]
    fn uncontrolled_value_starts_at_the_default_and_follows_requests() {
        let runtime = create_runtime();

        let (current, request) = use_controllable::<String>(None, None, "default".to_string());

        assert_eq!(current.get_untracked(), "default");
        request.call("next".to_string());
        assert_eq!(current.get_untracked(), "next");

        runtime.dispose();
    }

    #[test]
    fn uncontrolled_changes_echo_through_the_callback_when_supplied() {
        let runtime = create_runtime();

        let observed = create_rw_signal(None::<bool>);
        let (current, request) = use_controllable(
            None,
            Some(Callback::new(move |next: bool| observed.set(Some(next)))),
            false,
        );

        request.call(true);
        assert_eq!(current.get_untracked(), true);
        assert_eq!(observed.get_untracked(), Some(true));

        runtime.dispose();
    }

    #[test]
    fn list_toggle_appends_then_removes() {
        let runtime = create_runtime();

        let (current, toggle) = use_controllable_list::<String>(
            None,
            None,
            vec!["a".to_string()],
        );

        toggle.call("b".to_string());
        assert_eq!(
            current.get_untracked(),
            vec!["a".to_string(), "b".to_string()]
        );

        toggle.call("a".to_string());
        assert_eq!(current.get_untracked(), vec!["b".to_string()]);

        runtime.dispose();
    }

    #[test]
    fn controlled_list_toggles_report_without_mutating() {
        let runtime = create_runtime();

        let reported = create_rw_signal(Vec::<String>::new());
        let (current, toggle) = use_controllable_list(
            Some(MaybeSignal::from(vec!["a".to_string()])),
            Some(Callback::new(move |next: Vec<String>| reported.set(next))),
            Vec::new(),
        );

        toggle.call("b".to_string());
        assert_eq!(
            reported.get_untracked(),
            vec!["a".to_string(), "b".to_string()]
        );
        assert_eq!(
            current.get_untracked(),
            vec!["a".to_string()],
            "the displayed list waits for the caller to feed the value back"
        );

        runtime.dispose();
    }
}
