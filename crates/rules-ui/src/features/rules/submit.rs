//! Rule submission flow.
//!
//! # Design
//! - One submission in flight at a time; the tracker rejects overlapping attempts.
//! - Completion state is observable so the view can disable the submit control.
//! - Any HTTP response counts as delivered; only transport failures are errors.

use crate::config::PageConfig;
use crate::error::SubmitError;
use crate::features::rules::state::{RuleTables, TableView};
use rules_api_models::AffectRulesRequest;
use std::cell::RefCell;

/// Lifecycle of the most recent submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Nothing submitted yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    /// The last request produced a response.
    Succeeded,
    /// The last request failed before a response arrived.
    Failed,
}

impl SubmissionState {
    /// Whether the submit control should accept input.
    #[must_use]
    pub const fn accepts_submit(self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// User-facing acknowledgment for a finished submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ack {
    /// The server answered.
    Delivered,
    /// The request never got an answer.
    Failed,
}

impl Ack {
    /// Message shown to the user.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Delivered => "Yeah! Data sent and response loaded.",
            Self::Failed => "Oops! Something went wrong.",
        }
    }
}

/// Proof that [`SubmissionTracker::begin`] succeeded.
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct SubmissionTicket {
    attempt: u64,
}

impl SubmissionTicket {
    /// One-based attempt number, for diagnostics.
    #[must_use]
    pub const fn attempt(&self) -> u64 {
        self.attempt
    }
}

/// Single-flight guard around rule submissions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionTracker {
    state: SubmissionState,
    attempts: u64,
}

impl SubmissionTracker {
    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SubmissionState {
        self.state
    }

    /// Number of submissions started so far.
    #[must_use]
    pub const fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Enter [`SubmissionState::Pending`].
    ///
    /// # Errors
    /// Returns [`SubmitError::InFlight`] when a submission is already pending.
    pub fn begin(&mut self) -> Result<SubmissionTicket, SubmitError> {
        if !self.state.accepts_submit() {
            return Err(SubmitError::InFlight);
        }
        self.attempts += 1;
        self.state = SubmissionState::Pending;
        Ok(SubmissionTicket {
            attempt: self.attempts,
        })
    }

    /// Record the outcome of the ticketed submission.
    pub fn finish(&mut self, ticket: SubmissionTicket, outcome: Result<(), &SubmitError>) -> Ack {
        debug_assert_eq!(ticket.attempt, self.attempts);
        if outcome.is_ok() {
            self.state = SubmissionState::Succeeded;
            Ack::Delivered
        } else {
            self.state = SubmissionState::Failed;
            Ack::Failed
        }
    }
}

/// Sends the rule assignment to the server.
pub trait RulesTransport {
    /// POST `request` to `url`. Resolves `Ok` once any response arrives.
    fn post_affect_rules(
        &self,
        url: &str,
        request: &AffectRulesRequest,
    ) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Receives submission progress for display.
pub trait SubmitFeedback {
    /// Called whenever the tracker changes state.
    fn state_changed(&self, state: SubmissionState);

    /// Called exactly once per finished submission.
    fn acknowledge(&self, ack: Ack);
}

/// Submit the current contents of both tables.
///
/// The tracker borrow is released before the request is awaited, so event
/// handlers stay free to touch it while the request is pending.
///
/// # Errors
/// Returns [`SubmitError::InFlight`] without sending anything when another
/// submission is pending. Transport failures are reported through `feedback`
/// and resolve to [`Ack::Failed`].
#[allow(clippy::future_not_send)]
pub async fn submit_rules<T, X, F>(
    tables: &RuleTables<T>,
    tracker: &RefCell<SubmissionTracker>,
    config: &PageConfig,
    transport: &X,
    feedback: &F,
) -> Result<Ack, SubmitError>
where
    T: TableView,
    X: RulesTransport,
    F: SubmitFeedback,
{
    let ticket = tracker.borrow_mut().begin()?;
    feedback.state_changed(SubmissionState::Pending);

    let request = tables.snapshot(config.csrf_token());
    let outcome = transport
        .post_affect_rules(config.post_url(), &request)
        .await;

    let ack = tracker.borrow_mut().finish(ticket, outcome.as_ref().copied());
    let state = tracker.borrow().state();
    feedback.state_changed(state);
    feedback.acknowledge(ack);
    Ok(ack)
}

#[cfg(test)]
mod tests {
    use super::{
        Ack, RulesTransport, SubmissionState, SubmissionTracker, SubmitFeedback, submit_rules,
    };
    use crate::config::PageConfig;
    use crate::error::SubmitError;
    use crate::features::rules::actions::TableKind;
    use crate::features::rules::state::RuleTables;
    use crate::test_support::{MemoryDocument, MemoryTable};
    use anyhow::Result;
    use rules_api_models::AffectRulesRequest;
    use std::cell::RefCell;

    struct FakeTransport {
        fail: bool,
        sent: RefCell<Vec<(String, AffectRulesRequest)>>,
    }

    impl FakeTransport {
        fn new(fail: bool) -> Self {
            Self {
                fail,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl RulesTransport for FakeTransport {
        async fn post_affect_rules(
            &self,
            url: &str,
            request: &AffectRulesRequest,
        ) -> Result<(), SubmitError> {
            self.sent
                .borrow_mut()
                .push((url.to_string(), request.clone()));
            tokio::task::yield_now().await;
            if self.fail {
                Err(SubmitError::Transport("connection refused".into()))
            } else {
                Ok(())
            }
        }
    }

    #[derive(Default)]
    struct RecordingFeedback {
        states: RefCell<Vec<SubmissionState>>,
        acks: RefCell<Vec<Ack>>,
    }

    impl SubmitFeedback for RecordingFeedback {
        fn state_changed(&self, state: SubmissionState) {
            self.states.borrow_mut().push(state);
        }

        fn acknowledge(&self, ack: Ack) {
            self.acks.borrow_mut().push(ack);
        }
    }

    fn fixture() -> Result<(MemoryDocument, RuleTables<MemoryTable>, PageConfig)> {
        let doc = MemoryDocument::default();
        let tables = RuleTables::new(doc.table(&["r1", "r2"]), doc.table(&["r3"]));
        let config = PageConfig::new("/rules/affect", "csrf-123")?;
        Ok((doc, tables, config))
    }

    #[test]
    fn tracker_rejects_overlapping_begin() {
        let mut tracker = SubmissionTracker::default();
        let ticket = tracker.begin().expect("first begin");
        assert_eq!(ticket.attempt(), 1);
        assert_eq!(tracker.begin(), Err(SubmitError::InFlight));
        assert_eq!(tracker.finish(ticket, Ok(())), Ack::Delivered);
        assert_eq!(tracker.state(), SubmissionState::Succeeded);
        let again = tracker.begin().expect("begin after finish");
        assert_eq!(again.attempt(), 2);
        assert_eq!(tracker.attempts(), 2);
    }

    #[test]
    fn failed_submission_can_be_retried_by_the_user() {
        let mut tracker = SubmissionTracker::default();
        let ticket = tracker.begin().expect("begin");
        let err = SubmitError::Transport("offline".into());
        assert_eq!(tracker.finish(ticket, Err(&err)), Ack::Failed);
        assert!(tracker.state().accepts_submit());
    }

    #[tokio::test]
    async fn success_posts_payload_and_acknowledges_once() -> Result<()> {
        let (_doc, tables, config) = fixture()?;
        let tracker = RefCell::new(SubmissionTracker::default());
        let transport = FakeTransport::new(false);
        let feedback = RecordingFeedback::default();

        let ack = submit_rules(&tables, &tracker, &config, &transport, &feedback).await?;

        assert_eq!(ack, Ack::Delivered);
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].0, "/rules/affect");
        assert_eq!(
            sent[0].1,
            AffectRulesRequest::new(
                vec!["r1".into(), "r2".into()],
                vec!["r3".into()],
                "csrf-123"
            )
        );
        assert_eq!(*feedback.acks.borrow(), [Ack::Delivered]);
        assert_eq!(
            *feedback.states.borrow(),
            [SubmissionState::Pending, SubmissionState::Succeeded]
        );
        Ok(())
    }

    #[tokio::test]
    async fn transport_failure_acknowledges_failure_only() -> Result<()> {
        let (_doc, tables, config) = fixture()?;
        let tracker = RefCell::new(SubmissionTracker::default());
        let transport = FakeTransport::new(true);
        let feedback = RecordingFeedback::default();

        let ack = submit_rules(&tables, &tracker, &config, &transport, &feedback).await?;

        assert_eq!(ack, Ack::Failed);
        assert_eq!(*feedback.acks.borrow(), [Ack::Failed]);
        assert_eq!(tracker.borrow().state(), SubmissionState::Failed);
        Ok(())
    }

    #[tokio::test]
    async fn second_submit_while_pending_sends_nothing() -> Result<()> {
        let (_doc, tables, config) = fixture()?;
        let tracker = RefCell::new(SubmissionTracker::default());
        let transport = FakeTransport::new(false);
        let feedback = RecordingFeedback::default();

        let (first, second) = tokio::join!(
            submit_rules(&tables, &tracker, &config, &transport, &feedback),
            submit_rules(&tables, &tracker, &config, &transport, &feedback),
        );

        assert_eq!(first?, Ack::Delivered);
        assert_eq!(second, Err(SubmitError::InFlight));
        assert_eq!(transport.sent.borrow().len(), 1);
        assert_eq!(*feedback.acks.borrow(), [Ack::Delivered]);
        Ok(())
    }

    #[tokio::test]
    async fn payload_reflects_moves_made_before_submit() -> Result<()> {
        let (doc, tables, config) = fixture()?;
        tables.toggle(TableKind::Active, &doc.row("r1"));
        tables.move_selected(TableKind::Active);
        let tracker = RefCell::new(SubmissionTracker::default());
        let transport = FakeTransport::new(false);
        let feedback = RecordingFeedback::default();

        submit_rules(&tables, &tracker, &config, &transport, &feedback).await?;

        let sent = transport.sent.borrow();
        assert_eq!(sent[0].1.active_ids, vec!["r2"]);
        assert_eq!(sent[0].1.non_active_ids, vec!["r3", "r1"]);
        Ok(())
    }
}
