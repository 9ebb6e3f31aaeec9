//! Form submission seam.
//!
//! The controller only knows that a transport takes a [`Submission`] and
//! eventually answers. The site currently ships a simulated transport that
//! succeeds after a fixed delay; a real endpoint can replace it without
//! touching the disable / notify / reset sequence in [`drive_submission`].

use std::future::Future;

use thiserror::Error;

use crate::notification::Notification;

pub const SUCCESS_MESSAGE: &str = "Thank you! We will contact you soon.";
pub const SENDING_LABEL: &str = "Sending...";

/// Name/value pairs of a form at submission time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    pub form_id: Option<String>,
    pub fields: Vec<(String, String)>,
}

impl Submission {
    pub fn new(form_id: Option<String>) -> Self {
        Self {
            form_id,
            fields: Vec::new(),
        }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("transport unavailable: {0}")]
    Unavailable(String),
}

pub trait SubmitTransport {
    fn submit(&self, submission: Submission) -> impl Future<Output = Result<(), SubmitError>>;
}

/// Side effects on the page around a submission.
pub trait SubmitControl {
    /// Disables the submit control and shows the sending state. Returns the
    /// label to restore afterwards.
    fn begin_sending(&self) -> String;
    fn end_sending(&self, original_label: &str);
    fn notify(&self, notification: Notification);
    /// Clears the form fields.
    fn reset(&self);
}

/// Runs one submission: disable, send, restore, then notify and reset on
/// success. On failure the fields are kept so the visitor can retry.
pub async fn drive_submission<T, C>(
    transport: &T,
    control: &C,
    submission: Submission,
) -> Result<(), SubmitError>
where
    T: SubmitTransport,
    C: SubmitControl,
{
    let original_label = control.begin_sending();
    let result = transport.submit(submission).await;
    control.end_sending(&original_label);

    match &result {
        Ok(()) => {
            tracing::info!("form submitted");
            control.notify(Notification::success(SUCCESS_MESSAGE));
            control.reset();
        }
        Err(e) => {
            tracing::warn!(error = %e, "form submission failed");
            control.notify(Notification::info(format!(
                "We could not send your message ({e}). Please try again."
            )));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Severity;
    use std::cell::RefCell;
    use std::future::ready;

    struct FixedTransport(Result<(), SubmitError>);

    impl SubmitTransport for FixedTransport {
        fn submit(&self, _submission: Submission) -> impl Future<Output = Result<(), SubmitError>> {
            ready(self.0.clone())
        }
    }

    #[derive(Default)]
    struct RecordingControl {
        events: RefCell<Vec<String>>,
        notes: RefCell<Vec<Notification>>,
    }

    impl SubmitControl for RecordingControl {
        fn begin_sending(&self) -> String {
            self.events.borrow_mut().push("disable".to_string());
            "Send Enquiry".to_string()
        }

        fn end_sending(&self, original_label: &str) {
            self.events
                .borrow_mut()
                .push(format!("enable:{original_label}"));
        }

        fn notify(&self, notification: Notification) {
            self.events.borrow_mut().push("notify".to_string());
            self.notes.borrow_mut().push(notification);
        }

        fn reset(&self) {
            self.events.borrow_mut().push("reset".to_string());
        }
    }

    fn sample() -> Submission {
        let mut s = Submission::new(Some("contact".to_string()));
        s.push("name", "Asha");
        s.push("email", "asha@example.in");
        s
    }

    #[test]
    fn success_restores_button_then_notifies_and_resets() {
        let control = RecordingControl::default();
        let result = pollster::block_on(drive_submission(&FixedTransport(Ok(())), &control, sample()));
        assert_eq!(result, Ok(()));
        assert_eq!(
            *control.events.borrow(),
            vec!["disable", "enable:Send Enquiry", "notify", "reset"]
        );
        let notes = control.notes.borrow();
        assert_eq!(notes[0].message, SUCCESS_MESSAGE);
        assert_eq!(notes[0].severity, Severity::Success);
    }

    #[test]
    fn failure_keeps_fields() {
        let control = RecordingControl::default();
        let err = SubmitError::Unavailable("offline".to_string());
        let result = pollster::block_on(drive_submission(
            &FixedTransport(Err(err.clone())),
            &control,
            sample(),
        ));
        assert_eq!(result, Err(err));
        assert_eq!(
            *control.events.borrow(),
            vec!["disable", "enable:Send Enquiry", "notify"]
        );
        assert_eq!(control.notes.borrow()[0].severity, Severity::Info);
    }

    #[test]
    fn submission_lookup_by_name() {
        let s = sample();
        assert_eq!(s.get("email"), Some("asha@example.in"));
        assert_eq!(s.get("phone"), None);
    }
}
