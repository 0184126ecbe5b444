//! Toast show/auto-dismiss timeline.
//!
//! A show request closes any visible toast, cancels whatever is pending,
//! and re-opens after a short re-trigger delay so the entry animation
//! restarts. Once open, the toast dismisses itself when the configured
//! window elapses. Like the hover machine, transitions return effects
//! and the component layer owns the actual timers.

use crate::hover::TimerId;

/// Host-side effect requested by a timeline transition, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastEffect {
    /// Hide the toast now.
    Close,
    /// Show the toast now.
    Open,
    /// Start the re-trigger delay under the given identity.
    ScheduleReopen(TimerId),
    /// Start the auto-dismiss window under the given identity.
    ScheduleDismiss(TimerId),
    /// Cancel a previously scheduled timer.
    Cancel(TimerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    PendingOpen(TimerId),
    Visible(TimerId),
}

/// Timeline for one toast instance.
#[derive(Debug)]
pub struct ToastTimeline {
    phase: Phase,
    next_timer: u64,
}

impl Default for ToastTimeline {
    fn default() -> Self {
        Self::new()
    }
}

impl ToastTimeline {
    /// Creates an idle timeline.
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            next_timer: 0,
        }
    }

    /// Returns whether the toast should currently be visible.
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, Phase::Visible(_))
    }

    fn fresh_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId::from_raw(self.next_timer)
    }

    /// A show was requested.
    pub fn show(&mut self) -> Vec<ToastEffect> {
        let mut effects = Vec::new();
        match self.phase {
            Phase::Idle => {}
            Phase::PendingOpen(timer) => effects.push(ToastEffect::Cancel(timer)),
            Phase::Visible(timer) => {
                effects.push(ToastEffect::Cancel(timer));
                effects.push(ToastEffect::Close);
            }
        }
        let timer = self.fresh_timer();
        self.phase = Phase::PendingOpen(timer);
        effects.push(ToastEffect::ScheduleReopen(timer));
        effects
    }

    /// The re-trigger delay elapsed.
    pub fn reopen_fired(&mut self, timer: TimerId) -> Vec<ToastEffect> {
        match self.phase {
            Phase::PendingOpen(pending) if pending == timer => {
                let dismiss = self.fresh_timer();
                self.phase = Phase::Visible(dismiss);
                vec![ToastEffect::Open, ToastEffect::ScheduleDismiss(dismiss)]
            }
            _ => Vec::new(),
        }
    }

    /// The auto-dismiss window elapsed.
    pub fn dismiss_fired(&mut self, timer: TimerId) -> Vec<ToastEffect> {
        match self.phase {
            Phase::Visible(pending) if pending == timer => {
                self.phase = Phase::Idle;
                vec![ToastEffect::Close]
            }
            _ => Vec::new(),
        }
    }

    /// The close control was pressed.
    pub fn dismiss_now(&mut self) -> Vec<ToastEffect> {
        let effects = match self.phase {
            Phase::Idle => Vec::new(),
            Phase::PendingOpen(timer) => vec![ToastEffect::Cancel(timer)],
            Phase::Visible(timer) => vec![ToastEffect::Cancel(timer), ToastEffect::Close],
        };
        self.phase = Phase::Idle;
        effects
    }

    /// The owning component is unmounting; any pending timer must go.
    pub fn teardown(&mut self) -> Vec<ToastEffect> {
        let effects = match self.phase {
            Phase::Idle => Vec::new(),
            Phase::PendingOpen(timer) | Phase::Visible(timer) => {
                vec![ToastEffect::Cancel(timer)]
            }
        };
        self.phase = Phase::Idle;
        effects
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scheduled_reopen(effects: &[ToastEffect]) -> TimerId {
        effects
            .iter()
            .find_map(|effect| match effect {
                ToastEffect::ScheduleReopen(timer) => Some(*timer),
                _ => None,
            })
            .expect("a reopen timer was scheduled")
    }

    #[test]
    fn show_schedules_a_reopen_then_opens_with_a_dismiss_window() {
        let mut timeline = ToastTimeline::new();

        let shown = timeline.show();
        let reopen = scheduled_reopen(&shown);
        assert!(!timeline.is_visible());

        let opened = timeline.reopen_fired(reopen);
        assert_eq!(opened[0], ToastEffect::Open);
        assert!(matches!(opened[1], ToastEffect::ScheduleDismiss(_)));
        assert!(timeline.is_visible());
    }

    #[test]
    fn dismiss_window_closes_the_toast() {
        let mut timeline = ToastTimeline::new();
        let reopen = scheduled_reopen(&timeline.show());
        let opened = timeline.reopen_fired(reopen);
        let ToastEffect::ScheduleDismiss(dismiss) = opened[1] else {
            panic!("expected a dismiss window");
        };

        assert_eq!(timeline.dismiss_fired(dismiss), vec![ToastEffect::Close]);
        assert!(!timeline.is_visible());
    }

    #[test]
    fn reshow_while_visible_restarts_the_cycle() {
        let mut timeline = ToastTimeline::new();
        let reopen = scheduled_reopen(&timeline.show());
        let opened = timeline.reopen_fired(reopen);
        let ToastEffect::ScheduleDismiss(dismiss) = opened[1] else {
            panic!("expected a dismiss window");
        };

        let reshown = timeline.show();
        assert_eq!(reshown[0], ToastEffect::Cancel(dismiss));
        assert_eq!(reshown[1], ToastEffect::Close);
        assert!(matches!(reshown[2], ToastEffect::ScheduleReopen(_)));

        // The superseded dismiss timer must not close the next toast.
        assert_eq!(timeline.dismiss_fired(dismiss), Vec::new());
    }

    #[test]
    fn manual_dismiss_cancels_and_closes() {
        let mut timeline = ToastTimeline::new();
        let reopen = scheduled_reopen(&timeline.show());
        timeline.reopen_fired(reopen);

        let effects = timeline.dismiss_now();
        assert!(matches!(effects[0], ToastEffect::Cancel(_)));
        assert_eq!(effects[1], ToastEffect::Close);
        assert!(!timeline.is_visible());
    }

    #[test]
    fn teardown_cancels_whatever_is_pending() {
        let mut timeline = ToastTimeline::new();
        timeline.show();

        let effects = timeline.teardown();
        assert_eq!(effects.len(), 1);
        assert!(matches!(effects[0], ToastEffect::Cancel(_)));
    }
}
