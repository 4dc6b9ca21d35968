//! Declaration form state machine
//!
//! ```text
//! Editing --submit ok--> Reviewing --close--> Editing
//! Editing --submit err-> Editing (errors annotated)
//! ```

use crate::declaration::export::ExportDocument;
use crate::declaration::form::DeclarationForm;
use crate::declaration::id::DeclarationId;
use crate::declaration::summary::DeclarationSummary;
use crate::declaration::validate::validate;
use crate::error::ValidationErrors;
use tracing::info;

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Reviewing,
}

/// One user filling in one declaration
#[derive(Debug, Clone)]
pub struct DeclarationSession {
    id: DeclarationId,
    form: DeclarationForm,
    /// Present exactly while reviewing
    review: Option<DeclarationSummary>,
    errors: ValidationErrors,
}

impl Default for DeclarationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl DeclarationSession {
    /// Open a blank form with a fresh identifier
    pub fn new() -> Self {
        Self::with_form(DeclarationId::generate(), DeclarationForm::new())
    }

    pub fn with_form(id: DeclarationId, form: DeclarationForm) -> Self {
        Self {
            id,
            form,
            review: None,
            errors: ValidationErrors::new(),
        }
    }

    pub fn id(&self) -> &DeclarationId {
        &self.id
    }

    pub fn form(&self) -> &DeclarationForm {
        &self.form
    }

    /// Mutable access to the form; `None` while reviewing
    pub fn form_mut(&mut self) -> Option<&mut DeclarationForm> {
        match self.review {
            None => Some(&mut self.form),
            Some(_) => None,
        }
    }

    pub fn state(&self) -> FormState {
        match self.review {
            None => FormState::Editing,
            Some(_) => FormState::Reviewing,
        }
    }

    pub fn is_reviewing(&self) -> bool {
        self.review.is_some()
    }

    /// Errors from the last failed submit
    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Submit the form.
    ///
    /// On success the session moves to review and the summary is returned.
    /// On failure it stays in editing with the errors annotated. Submitting
    /// while already reviewing returns the current summary unchanged.
    pub fn submit(&mut self) -> Result<&DeclarationSummary, ValidationErrors> {
        if self.review.is_none() {
            let report = validate(&self.form);
            if !report.ok {
                info!(id = %self.id, errors = report.field_errors.len(), "Declaration rejected");
                self.errors = report.field_errors.clone();
                return Err(report.field_errors);
            }

            info!(id = %self.id, "Declaration accepted for review");
            self.errors = ValidationErrors::new();
        }

        let (form, id) = (&self.form, &self.id);
        Ok(self
            .review
            .get_or_insert_with(|| DeclarationSummary::compose(form, id)))
    }

    /// Close the review and return to editing
    pub fn close(&mut self) {
        self.review = None;
    }

    /// Current summary, while reviewing
    pub fn summary(&self) -> Option<&DeclarationSummary> {
        self.review.as_ref()
    }

    /// Build the simulated report download; only available while reviewing
    pub fn export(&self) -> Option<ExportDocument> {
        self.summary().map(ExportDocument::from_summary)
    }
}
