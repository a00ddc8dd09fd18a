use chrono::NaiveDateTime;

use crate::api::AddAvailabilityRequest;
use crate::outcome::AddOutcome;
use crate::validation::{validate_slot, ValidationError};
use crate::variant::ClientVariant;

/// Where the add-availability flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// Modal closed
    Idle,
    /// Modal open, user editing
    DateSelected,
    /// Request in flight
    Submitting,
}

/// Field values of the add-availability modal
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    /// Inline error region contents
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvailabilityForm {
    phase: FormPhase,
    draft: FormDraft,
}

impl Default for AvailabilityForm {
    fn default() -> Self {
        Self {
            phase: FormPhase::Idle,
            draft: FormDraft::default(),
        }
    }
}

impl AvailabilityForm {
    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn draft(&self) -> &FormDraft {
        &self.draft
    }

    pub fn is_open(&self) -> bool {
        self.phase != FormPhase::Idle
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Date-click: take the date, wipe the times and any old error, open the modal
    pub fn select_date(&mut self, date: String) {
        self.draft = FormDraft {
            date,
            ..FormDraft::default()
        };
        self.phase = FormPhase::DateSelected;
    }

    pub fn set_date(&mut self, date: String) {
        self.draft.date = date;
    }

    pub fn set_start_time(&mut self, start_time: String) {
        self.draft.start_time = start_time;
    }

    pub fn set_end_time(&mut self, end_time: String) {
        self.draft.end_time = end_time;
    }

    /// Dismiss without submitting
    pub fn close(&mut self) {
        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Idle;
        }
    }

    /// Validate and, on success, move to `Submitting` and hand back the request body.
    ///
    /// A failed validation writes the message into the error region and leaves
    /// the modal open.
    pub fn submit(
        &mut self,
        variant: &ClientVariant,
        now: NaiveDateTime,
    ) -> Result<AddAvailabilityRequest, ValidationError> {
        let draft = &self.draft;
        if let Err(e) = validate_slot(variant, &draft.date, &draft.start_time, &draft.end_time, now) {
            self.draft.error = Some(e.to_string());
            self.phase = FormPhase::DateSelected;
            return Err(e);
        }

        self.phase = FormPhase::Submitting;
        Ok(AddAvailabilityRequest {
            date: draft.date.clone(),
            start_time: draft.start_time.clone(),
            end_time: draft.end_time.clone(),
        })
    }

    /// Apply the server's verdict. The error region is left alone on success and on alerts.
    pub fn resolve(&mut self, outcome: &AddOutcome) {
        match outcome {
            AddOutcome::Saved => self.phase = FormPhase::Idle,
            AddOutcome::InlineError(message) => {
                self.draft.error = Some(message.clone());
                self.phase = FormPhase::DateSelected;
            }
            AddOutcome::Alert(_) => self.phase = FormPhase::DateSelected,
        }
    }
}
