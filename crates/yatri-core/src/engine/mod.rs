//! Engine module for the wizard state machine.
//!
//! Provides the core engine and the builder used to compose a session
//! (registry + event store + policy config).

pub mod builder;
pub mod core;

pub use builder::WizardBuilder;
pub use core::WizardEngine;

pub use crate::event::{EventStore, InMemoryEventStore, WizardEvent, WizardEventKind};
pub use crate::registry::{RenderCapability, StepDescriptor, StepRegistry};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::submit::{SubmissionAck, SubmissionError, SubmissionService};
    use yatri_domain::{FieldKey, FieldValue, RegistrationRecord};

    // Colaborador de prueba que acusa recibo siempre.
    struct AckService {
        calls: usize,
    }

    impl SubmissionService for AckService {
        fn submit(&mut self, _record: &RegistrationRecord, fingerprint: &str) -> Result<SubmissionAck, SubmissionError> {
            self.calls += 1;
            Ok(SubmissionAck { digital_id: format!("YTR-{}", &fingerprint[..12]),
                               issued_at: chrono::Utc::now() })
        }
    }

    #[test]
    fn test_full_session_reaches_submission() {
        let mut engine = WizardEngine::open(StepRegistry::tourist_default());
        engine.update_field(FieldKey::FullName, FieldValue::text("Asha Verma")).unwrap();
        for _ in 0..4 {
            assert!(engine.advance().unwrap());
        }
        assert_eq!(engine.current_step(), 5);

        let mut service = AckService { calls: 0 };
        let ack = engine.submit(&mut service).expect("la sesión completa debería emitir id");
        assert_eq!(service.calls, 1);
        assert!(ack.digital_id.starts_with("YTR-"));

        // Verificar la secuencia compacta de eventos
        let variants = engine.event_variants();
        assert_eq!(variants.first(), Some(&"I"));
        assert!(variants.contains(&"S"));
    }

    #[test]
    fn test_submit_terminal_state() {
        let mut engine = WizardEngine::open(StepRegistry::tourist_default());
        for _ in 0..4 {
            engine.advance().unwrap();
        }
        let mut service = AckService { calls: 0 };
        engine.submit(&mut service).unwrap();

        // Tras el envío la sesión es terminal
        assert!(engine.advance().is_err());
        assert!(engine.update_field(FieldKey::FullName, FieldValue::text("x")).is_err());
        assert!(engine.submit(&mut service).is_err());
        assert_eq!(service.calls, 1);
    }
}
