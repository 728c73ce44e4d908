//! yatri-core: máquina de estados del wizard de registro turístico
pub mod attachment;
pub mod config;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod event;
pub mod hashing;
pub mod registry;
pub mod replay;
pub mod store;
pub mod submit;

pub use attachment::RawUpload;
pub use config::WizardConfig;
pub use engine::{WizardBuilder, WizardEngine};
pub use errors::CoreWizardError;
pub use event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
pub use registry::{RenderCapability, StepDescriptor, StepRegistry};
pub use replay::{event_variants, replay, WizardInstance};
pub use store::FormFieldStore;
pub use submit::{SubmissionAck, SubmissionError, SubmissionService};

#[cfg(test)]
mod tests {
    use super::*;
    use yatri_domain::{FieldKey, FieldValue};

    #[test]
    fn progress_ratio_is_exact() {
        let mut engine = WizardEngine::open(StepRegistry::tourist_default());
        assert_eq!(engine.progress_ratio(), 1.0 / 5.0);
        engine.advance().unwrap();
        engine.advance().unwrap();
        // N=5, step 3 -> 0.6
        assert_eq!(engine.progress_ratio(), 0.6);
        assert_eq!(engine.progress_percent(), 60);
    }

    #[test]
    fn boundaries_are_noops() {
        let mut engine = WizardEngine::open(StepRegistry::tourist_default());
        assert!(!engine.retreat().unwrap());
        for _ in 0..4 {
            assert!(engine.advance().unwrap());
        }
        // one further advance is idempotent at the boundary
        assert!(!engine.advance().unwrap());
        assert_eq!(engine.current_step(), 5);
    }

    #[test]
    fn field_writes_are_never_step_scoped() {
        let mut engine = WizardEngine::open(StepRegistry::tourist_default());
        engine.advance().unwrap();
        // arrival_date belongs to step 3 but must be stored from step 2
        engine.update_field(FieldKey::ArrivalDate, FieldValue::text("2024-05-01")).unwrap();
        assert_eq!(engine.store().get(FieldKey::ArrivalDate), &FieldValue::text("2024-05-01"));
    }
}
