//! Hover-intent state machine for popovers and tooltips.
//!
//! Opening is immediate on pointer-enter. Closing is deferred behind a
//! grace timer so the pointer can travel from trigger to content, and a
//! re-enter before the timer fires cancels it. The machine owns no
//! clock: every transition returns the effects the host must perform
//! (open, close, schedule, cancel), which keeps cancellation observable
//! in tests and leaves actual timers to the component layer.

/// Identity of one scheduled close timer. A fired timer only closes the
/// popover while it is still the machine's current pending timer, so a
/// stale callback that survives cancellation is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn from_raw(raw: u64) -> Self {
        Self(raw)
    }
}

/// Host-side effect requested by a transition, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoverEffect {
    /// Show the content now.
    Open,
    /// Hide the content now.
    Close,
    /// Start the close-grace timer under the given identity.
    ScheduleClose(TimerId),
    /// Cancel a previously scheduled timer.
    Cancel(TimerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open,
    PendingClose(TimerId),
}

/// Hover-intent machine for one popover instance.
#[derive(Debug)]
pub struct HoverIntent {
    phase: Phase,
    next_timer: u64,
}

impl Default for HoverIntent {
    fn default() -> Self {
        Self::new()
    }
}

impl HoverIntent {
    /// Creates a closed machine.
    pub fn new() -> Self {
        Self {
            phase: Phase::Closed,
            next_timer: 0,
        }
    }

    /// Returns whether content should currently be visible. The pending
    /// close window still counts as visible.
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, Phase::Closed)
    }

    fn fresh_timer(&mut self) -> TimerId {
        self.next_timer += 1;
        TimerId::from_raw(self.next_timer)
    }

    /// Pointer entered the trigger or the content.
    pub fn pointer_enter(&mut self) -> Vec<HoverEffect> {
        match self.phase {
            Phase::Closed => {
                self.phase = Phase::Open;
                vec![HoverEffect::Open]
            }
            Phase::Open => Vec::new(),
            Phase::PendingClose(timer) => {
                self.phase = Phase::Open;
                vec![HoverEffect::Cancel(timer)]
            }
        }
    }

    /// Pointer left the trigger and the content.
    pub fn pointer_leave(&mut self) -> Vec<HoverEffect> {
        match self.phase {
            Phase::Closed => Vec::new(),
            Phase::Open => {
                let timer = self.fresh_timer();
                self.phase = Phase::PendingClose(timer);
                vec![HoverEffect::ScheduleClose(timer)]
            }
            Phase::PendingClose(previous) => {
                let timer = self.fresh_timer();
                self.phase = Phase::PendingClose(timer);
                vec![HoverEffect::Cancel(previous), HoverEffect::ScheduleClose(timer)]
            }
        }
    }

    /// A scheduled close timer fired.
    pub fn timer_fired(&mut self, timer: TimerId) -> Vec<HoverEffect> {
        match self.phase {
            Phase::PendingClose(pending) if pending == timer => {
                self.phase = Phase::Closed;
                vec![HoverEffect::Close]
            }
            _ => Vec::new(),
        }
    }

    /// The owning component is unmounting; any pending timer must go.
    pub fn teardown(&mut self) -> Vec<HoverEffect> {
        let effects = match self.phase {
            Phase::PendingClose(timer) => vec![HoverEffect::Cancel(timer)],
            _ => Vec::new(),
        };
        self.phase = Phase::Closed;
        effects
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn close_count(effects: &[HoverEffect]) -> usize {
        effects
            .iter()
            .filter(|effect| matches!(effect, HoverEffect::Close))
            .count()
    }

    #[test]
    fn enter_opens_immediately() {
        let mut intent = HoverIntent::new();
        assert_eq!(intent.pointer_enter(), vec![HoverEffect::Open]);
        assert!(intent.is_open());
    }

    #[test]
    fn leave_schedules_a_close_instead_of_closing() {
        let mut intent = HoverIntent::new();
        intent.pointer_enter();

        let effects = intent.pointer_leave();
        assert!(matches!(effects[..], [HoverEffect::ScheduleClose(_)]));
        assert!(intent.is_open(), "grace window keeps content visible");
    }

    #[test]
    fn reenter_before_the_timer_fires_cancels_it() {
        let mut intent = HoverIntent::new();
        intent.pointer_enter();
        let leave_effects = intent.pointer_leave();
        let HoverEffect::ScheduleClose(timer) = leave_effects[0] else {
            panic!("expected a scheduled close");
        };

        let reenter_effects = intent.pointer_enter();
        assert_eq!(reenter_effects, vec![HoverEffect::Cancel(timer)]);

        // The cancelled timer may still fire if the host raced; it must
        // not close anything.
        let stale = intent.timer_fired(timer);
        assert_eq!(close_count(&stale), 0);
        assert!(intent.is_open());
    }

    #[test]
    fn current_timer_firing_closes() {
        let mut intent = HoverIntent::new();
        intent.pointer_enter();
        let effects = intent.pointer_leave();
        let HoverEffect::ScheduleClose(timer) = effects[0] else {
            panic!("expected a scheduled close");
        };

        assert_eq!(intent.timer_fired(timer), vec![HoverEffect::Close]);
        assert!(!intent.is_open());
    }

    #[test]
    fn repeated_leave_replaces_the_pending_timer() {
        let mut intent = HoverIntent::new();
        intent.pointer_enter();
        let first = intent.pointer_leave();
        let HoverEffect::ScheduleClose(first_timer) = first[0] else {
            panic!("expected a scheduled close");
        };

        let second = intent.pointer_leave();
        assert_eq!(second[0], HoverEffect::Cancel(first_timer));
        assert!(matches!(second[1], HoverEffect::ScheduleClose(_)));

        assert_eq!(close_count(&intent.timer_fired(first_timer)), 0);
    }

    #[test]
    fn teardown_cancels_the_pending_timer() {
        let mut intent = HoverIntent::new();
        intent.pointer_enter();
        let effects = intent.pointer_leave();
        let HoverEffect::ScheduleClose(timer) = effects[0] else {
            panic!("expected a scheduled close");
        };

        assert_eq!(intent.teardown(), vec![HoverEffect::Cancel(timer)]);
        assert!(!intent.is_open());
    }
}
