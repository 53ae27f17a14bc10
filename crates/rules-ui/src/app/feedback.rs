//! Submission feedback: submit-control gating plus modal acknowledgments.

use crate::features::rules::submit::{Ack, SubmissionState, SubmitFeedback};
use gloo::{console, dialogs};
use web_sys::Element;

pub(crate) struct AlertFeedback {
    controls: Vec<Element>,
}

impl AlertFeedback {
    pub(crate) const fn new(controls: Vec<Element>) -> Self {
        Self { controls }
    }
}

impl SubmitFeedback for AlertFeedback {
    fn state_changed(&self, state: SubmissionState) {
        let disabled = !state.accepts_submit();
        for control in &self.controls {
            let result = if disabled {
                control.set_attribute("disabled", "")
            } else {
                control.remove_attribute("disabled")
            };
            if let Err(err) = result {
                console::error!("submit control update failed", err);
            }
        }
    }

    fn acknowledge(&self, ack: Ack) {
        dialogs::alert(ack.message());
    }
}
