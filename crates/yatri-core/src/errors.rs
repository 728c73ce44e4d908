//! Errores específicos del core del wizard (simples por ahora).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use yatri_domain::FieldKey;

use crate::submit::SubmissionError;

#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum CoreWizardError {
    #[error("wizard already submitted")] WizardCompleted,
    #[error("wizard session is not open")] NotOpen,
    #[error("step not found in registry")] StepNotFound,
    #[error("registry step ids must form a dense 1..N sequence")] InvalidRegistry,
    #[error("missing required fields at step {step_id}")] MissingRequiredFields { step_id: u32, missing: Vec<FieldKey> },
    #[error("unsupported attachment type: {0}")] UnsupportedAttachmentType(String),
    #[error("attachment exceeds size bound ({0} bytes)")] AttachmentTooLarge(u64),
    #[error("field {0} does not take attachments")] InvalidAttachmentSlot(FieldKey),
    #[error("field {0} exceeds length bound")] FieldTooLong(FieldKey),
    #[error("submit is only valid at the final step")] SubmitBeforeFinalStep,
    #[error("submission failed: {0}")] Submission(#[from] SubmissionError),
    #[error("internal: {0}")] Internal(String),
}
