use yatri_core::{replay, RawUpload, StepRegistry, SubmissionAck, SubmissionError, SubmissionService, WizardEngine};
use yatri_domain::{FieldKey, FieldValue, RegistrationRecord};

struct AckService;

impl SubmissionService for AckService {
    fn submit(&mut self, _record: &RegistrationRecord, fingerprint: &str) -> Result<SubmissionAck, SubmissionError> {
        Ok(SubmissionAck { digital_id: format!("YTR-{}", &fingerprint[..12]),
                           issued_at: chrono::Utc::now() })
    }
}

#[test]
fn replay_agrees_with_live_state() {
    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    engine.update_field(FieldKey::FullName, FieldValue::text("Asha")).unwrap();
    engine.advance().unwrap();
    engine.accept_attachment(FieldKey::AadhaarDocument, RawUpload::new("a.pdf", "application/pdf", vec![1]))
          .unwrap();
    engine.advance().unwrap();
    engine.retreat().unwrap();

    let instance = engine.audit();
    assert_eq!(instance.current_step, engine.current_step());
    assert!(!instance.submitted);
    assert_eq!(instance.touched_fields, vec![FieldKey::FullName, FieldKey::AadhaarDocument]);
}

#[test]
fn replay_marks_submission() {
    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    for _ in 0..4 {
        engine.advance().unwrap();
    }
    engine.submit(&mut AckService).unwrap();
    let instance = engine.audit();
    assert!(instance.submitted);
    assert!(!instance.closed);
}

#[test]
fn close_is_journaled_and_replayable() {
    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    engine.advance().unwrap();
    let wizard_id = engine.wizard_id();
    let journal = engine.close();

    let instance = replay(wizard_id, &journal);
    assert!(instance.closed);
    assert_eq!(instance.current_step, 2);
}

#[test]
fn compact_variant_trace() {
    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    engine.update_field(FieldKey::FullName, FieldValue::text("Asha")).unwrap();
    engine.advance().unwrap();
    // I = initialized, E = step entered, U = field updated
    assert_eq!(engine.event_variants(), vec!["I", "E", "U", "E"]);
}
