// Headless form state machine. Nothing in here touches the DOM, so every
// transition is unit-testable on the host.

use thiserror::Error;

use crate::form::{Field, Submission};
use crate::notify::Notification;
use crate::steps::{Step, STEPS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field missing on step {step}")]
    MissingRequiredField { step: usize, fields: Vec<Field> },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormEvent {
    Notify(Notification),
    /// Full record at the moment of a successful submit.
    Submitted(Submission),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// Submitted before the last step: treated as "next". Holds the new index.
    Advanced(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepFormController {
    index: usize,
    record: Submission,
    submissions: u32,
    outbox: Vec<FormEvent>,
}

impl Default for StepFormController {
    fn default() -> Self {
        Self::new()
    }
}

impl StepFormController {
    pub fn new() -> Self {
        Self {
            index: 0,
            record: Submission::default(),
            submissions: 0,
            outbox: Vec::new(),
        }
    }

    pub fn steps(&self) -> &'static [Step] {
        &STEPS
    }

    pub fn step_index(&self) -> usize {
        self.index
    }

    pub fn current_step(&self) -> &'static Step {
        &STEPS[self.index]
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= STEPS.len()
    }

    pub fn submission(&self) -> &Submission {
        &self.record
    }

    pub fn submissions(&self) -> u32 {
        self.submissions
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.record.set(field, value);
    }

    fn check_current(&self) -> Result<(), FormError> {
        let fields = self.current_step().missing_fields(&self.record);
        if fields.is_empty() {
            Ok(())
        } else {
            Err(FormError::MissingRequiredField { step: self.index, fields })
        }
    }

    /// Moves forward one step if the current one is complete. Returns the
    /// step index after the call.
    pub fn advance(&mut self) -> Result<usize, FormError> {
        if let Err(e) = self.check_current() {
            self.outbox
                .push(FormEvent::Notify(Notification::missing_field_on_advance()));
            return Err(e);
        }
        if !self.is_last() {
            self.index += 1;
        }
        Ok(self.index)
    }

    pub fn retreat(&mut self) -> usize {
        if self.index > 0 {
            self.index -= 1;
        }
        self.index
    }

    /// Earlier steps are not re-checked; they passed on the way here.
    /// Before the last step (Enter in a text input) this is `advance`.
    pub fn submit(&mut self) -> Result<SubmitOutcome, FormError> {
        if !self.is_last() {
            return self.advance().map(SubmitOutcome::Advanced);
        }
        if let Err(e) = self.check_current() {
            self.outbox
                .push(FormEvent::Notify(Notification::missing_field_on_submit()));
            return Err(e);
        }
        self.submissions += 1;
        self.outbox.push(FormEvent::Notify(Notification::submitted()));
        self.outbox.push(FormEvent::Submitted(self.record.clone()));
        Ok(SubmitOutcome::Sent)
    }

    pub fn drain_events(&mut self) -> Vec<FormEvent> {
        std::mem::take(&mut self.outbox)
    }
}
