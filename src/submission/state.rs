use std::time::Duration;

use super::error::SubmissionError;

pub const SENDING_LABEL: &str = "Sending...";
pub const ERROR_LABEL: &str = "Error - Try Again";
pub const TIMEOUT_LABEL: &str = "Timed Out - Try Again";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Timeout,
    Generic,
}

impl From<&SubmissionError> for FailureKind {
    fn from(err: &SubmissionError) -> Self {
        match err {
            SubmissionError::Timeout => FailureKind::Timeout,
            _ => FailureKind::Generic,
        }
    }
}

/// What the submit button currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Idle,
    Sending,
    Failed(FailureKind),
}

/// Identifies one scheduled revert so a late timer can't undo a newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevertTicket(u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    Submit,
    Resolved(Result<(), SubmissionError>),
    RevertElapsed(RevertTicket),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    SendRequest,
    ShowSuccessOverlay,
    ClearFields,
    ScheduleRevert { ticket: RevertTicket, after: Duration },
}

/// idle -> sending -> {idle (success) | failed -> idle (after delay)}
#[derive(Debug, Clone)]
pub struct SubmitMachine {
    state: ButtonState,
    idle_label: String,
    revert_after: Duration,
    pending_revert: Option<RevertTicket>,
    next_ticket: u64,
}

impl SubmitMachine {
    pub fn new(idle_label: impl Into<String>, revert_after: Duration) -> Self {
        Self {
            state: ButtonState::Idle,
            idle_label: idle_label.into(),
            revert_after,
            pending_revert: None,
            next_ticket: 0,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    pub fn label(&self) -> &str {
        match self.state {
            ButtonState::Idle => &self.idle_label,
            ButtonState::Sending => SENDING_LABEL,
            ButtonState::Failed(FailureKind::Timeout) => TIMEOUT_LABEL,
            ButtonState::Failed(FailureKind::Generic) => ERROR_LABEL,
        }
    }

    pub fn disabled(&self) -> bool {
        !matches!(self.state, ButtonState::Idle)
    }

    pub fn pending_revert(&self) -> Option<RevertTicket> {
        self.pending_revert
    }

    pub fn step(&mut self, transition: Transition) -> Vec<Effect> {
        match (self.state, transition) {
            (ButtonState::Idle, Transition::Submit) => {
                self.state = ButtonState::Sending;
                vec![Effect::SendRequest]
            }
            (ButtonState::Sending, Transition::Resolved(Ok(()))) => {
                self.state = ButtonState::Idle;
                vec![Effect::ShowSuccessOverlay, Effect::ClearFields]
            }
            (ButtonState::Sending, Transition::Resolved(Err(err))) => {
                self.state = ButtonState::Failed(FailureKind::from(&err));
                let ticket = RevertTicket(self.next_ticket);
                self.next_ticket += 1;
                self.pending_revert = Some(ticket);
                vec![Effect::ScheduleRevert {
                    ticket,
                    after: self.revert_after,
                }]
            }
            (ButtonState::Failed(_), Transition::RevertElapsed(ticket))
                if self.pending_revert == Some(ticket) =>
            {
                self.pending_revert = None;
                self.state = ButtonState::Idle;
                Vec::new()
            }
            // Everything else is either a double submit while disabled, a
            // late timer, or a response for an attempt we no longer track.
            _ => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDLE: &str = "Send Message";

    fn machine() -> SubmitMachine {
        SubmitMachine::new(IDLE, Duration::from_millis(3_000))
    }

    /// Fast-forwardable stand-in for the browser timers.
    #[derive(Default)]
    struct VirtualClock {
        now: Duration,
        scheduled: Vec<(Duration, RevertTicket)>,
    }

    impl VirtualClock {
        fn apply(&mut self, effects: &[Effect]) {
            for effect in effects {
                if let Effect::ScheduleRevert { ticket, after } = effect {
                    self.scheduled.push((self.now + *after, *ticket));
                }
            }
        }

        fn advance(&mut self, by: Duration, machine: &mut SubmitMachine) {
            self.now += by;
            let now = self.now;
            let (due, later): (Vec<_>, Vec<_>) =
                self.scheduled.drain(..).partition(|(at, _)| *at <= now);
            self.scheduled = later;
            for (_, ticket) in due {
                let effects = machine.step(Transition::RevertElapsed(ticket));
                self.apply(&effects);
            }
        }
    }

    #[test]
    fn success_returns_to_idle_immediately() {
        let mut m = machine();
        assert_eq!(m.step(Transition::Submit), vec![Effect::SendRequest]);
        assert!(m.disabled());
        assert_eq!(m.label(), SENDING_LABEL);

        let effects = m.step(Transition::Resolved(Ok(())));
        assert_eq!(effects, vec![Effect::ShowSuccessOverlay, Effect::ClearFields]);
        assert_eq!(m.state(), ButtonState::Idle);
        assert_eq!(m.label(), IDLE);
        assert!(!m.disabled());
    }

    #[test]
    fn rejected_submission_reverts_after_three_seconds() {
        let mut m = machine();
        let mut clock = VirtualClock::default();
        m.step(Transition::Submit);

        let effects = m.step(Transition::Resolved(Err(SubmissionError::Rejected {
            status: 422,
            message: Some("Email invalid".to_string()),
        })));
        clock.apply(&effects);
        assert_eq!(m.label(), ERROR_LABEL);
        assert!(m.disabled());

        clock.advance(Duration::from_millis(2_999), &mut m);
        assert_eq!(m.label(), ERROR_LABEL);
        assert!(m.disabled());

        clock.advance(Duration::from_millis(1), &mut m);
        assert_eq!(m.label(), IDLE);
        assert!(!m.disabled());
        assert_eq!(m.pending_revert(), None);
    }

    #[test]
    fn timeout_has_its_own_label() {
        let mut m = machine();
        let mut clock = VirtualClock::default();
        m.step(Transition::Submit);
        clock.apply(&m.step(Transition::Resolved(Err(SubmissionError::Timeout))));

        assert_eq!(m.state(), ButtonState::Failed(FailureKind::Timeout));
        assert_eq!(m.label(), TIMEOUT_LABEL);
        assert_ne!(m.label(), ERROR_LABEL);

        clock.advance(Duration::from_secs(3), &mut m);
        assert_eq!(m.label(), IDLE);
    }

    #[test]
    fn button_stays_disabled_for_every_outcome_until_resolution() {
        let outcomes = [
            Ok(()),
            Err(SubmissionError::Rejected { status: 500, message: None }),
            Err(SubmissionError::Network("Failed to fetch".to_string())),
            Err(SubmissionError::Timeout),
        ];

        for outcome in outcomes {
            let mut m = machine();
            let mut clock = VirtualClock::default();
            m.step(Transition::Submit);

            // Repeated clicks while in flight change nothing.
            for _ in 0..3 {
                assert!(m.disabled());
                assert!(m.step(Transition::Submit).is_empty());
                clock.advance(Duration::from_secs(1), &mut m);
            }
            assert!(m.disabled());

            let succeeded = outcome.is_ok();
            clock.apply(&m.step(Transition::Resolved(outcome)));
            if succeeded {
                assert!(!m.disabled());
            } else {
                assert!(m.disabled());
                assert!(m.step(Transition::Submit).is_empty());
                clock.advance(Duration::from_secs(3), &mut m);
                assert!(!m.disabled());
                assert_eq!(m.label(), IDLE);
            }
        }
    }

    #[test]
    fn stale_revert_ticket_is_ignored() {
        let mut m = machine();
        m.step(Transition::Submit);
        let effects = m.step(Transition::Resolved(Err(SubmissionError::Timeout)));
        let first = match effects.as_slice() {
            [Effect::ScheduleRevert { ticket, .. }] => *ticket,
            other => panic!("unexpected effects: {:?}", other),
        };
        m.step(Transition::RevertElapsed(first));

        m.step(Transition::Submit);
        m.step(Transition::Resolved(Err(SubmissionError::Network("offline".into()))));

        // The first attempt's timer firing again must not unlock the button.
        assert!(m.step(Transition::RevertElapsed(first)).is_empty());
        assert_eq!(m.label(), ERROR_LABEL);
        assert!(m.disabled());
    }

    #[test]
    fn resolution_without_attempt_is_ignored() {
        let mut m = machine();
        assert!(m.step(Transition::Resolved(Ok(()))).is_empty());
        assert_eq!(m.state(), ButtonState::Idle);
    }
}
