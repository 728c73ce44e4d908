use yatri_core::{CoreWizardError, StepRegistry, SubmissionAck, SubmissionError, SubmissionService, WizardEngine,
                 WizardEventKind};
use yatri_domain::{FieldKey, FieldValue, RegistrationRecord};

/// Colaborador de prueba: registra invocaciones y responde según `fail`.
struct RecordingService {
    calls: Vec<(RegistrationRecord, String)>,
    fail: bool,
}

impl RecordingService {
    fn new(fail: bool) -> Self {
        Self { calls: Vec::new(), fail }
    }
}

impl SubmissionService for RecordingService {
    fn submit(&mut self, record: &RegistrationRecord, fingerprint: &str) -> Result<SubmissionAck, SubmissionError> {
        self.calls.push((record.clone(), fingerprint.to_string()));
        if self.fail {
            return Err(SubmissionError::Unavailable("issuer offline".to_string()));
        }
        Ok(SubmissionAck { digital_id: format!("YTR-{}", &fingerprint[..12]),
                           issued_at: chrono::Utc::now() })
    }
}

#[test]
fn submit_before_final_step_never_calls_collaborator() {
    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    let mut service = RecordingService::new(false);
    for _ in 0..4 {
        let err = engine.submit(&mut service).unwrap_err();
        assert_eq!(err, CoreWizardError::SubmitBeforeFinalStep);
        engine.advance().unwrap();
    }
    assert!(service.calls.is_empty());

    // reachability path: at step N the collaborator is called exactly once
    engine.submit(&mut service).unwrap();
    assert_eq!(service.calls.len(), 1);
}

#[test]
fn submitted_record_carries_field_values() {
    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    engine.update_field(FieldKey::FullName, FieldValue::text("Asha Verma")).unwrap();
    engine.update_field(FieldKey::Contact1Phone, FieldValue::text("+91 9876543210")).unwrap();
    for _ in 0..4 {
        engine.advance().unwrap();
    }
    let mut service = RecordingService::new(false);
    engine.submit(&mut service).unwrap();

    let (record, fingerprint) = &service.calls[0];
    assert_eq!(record.full_name, "Asha Verma");
    assert_eq!(record.contact1_phone, "+91 9876543210");
    assert_eq!(record.gender, ""); // untouched text projects to empty
    assert!(!fingerprint.is_empty());
}

#[test]
fn submission_failure_is_recoverable() {
    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    engine.update_field(FieldKey::FullName, FieldValue::text("Asha")).unwrap();
    for _ in 0..4 {
        engine.advance().unwrap();
    }

    let mut failing = RecordingService::new(true);
    let err = engine.submit(&mut failing).unwrap_err();
    assert!(matches!(err, CoreWizardError::Submission(SubmissionError::Unavailable(_))));

    // state intact: the user can retry against a healthy collaborator
    assert_eq!(engine.current_step(), 5);
    assert_eq!(engine.store().get(FieldKey::FullName), &FieldValue::text("Asha"));
    let events = engine.events();
    assert!(events.iter().any(|e| matches!(e.kind, WizardEventKind::SubmissionFailed { .. })));

    let mut healthy = RecordingService::new(false);
    let ack = engine.submit(&mut healthy).unwrap();
    assert!(ack.digital_id.starts_with("YTR-"));
}

#[test]
fn fingerprint_is_stable_across_navigation() {
    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    engine.update_field(FieldKey::FullName, FieldValue::text("Asha")).unwrap();
    let fp1 = engine.record_fingerprint().unwrap();
    engine.advance().unwrap();
    engine.retreat().unwrap();
    // navigation is a pure view change: identity derives from data only
    assert_eq!(engine.record_fingerprint().unwrap(), fp1);

    engine.update_field(FieldKey::FullName, FieldValue::text("Otra")).unwrap();
    assert_ne!(engine.record_fingerprint().unwrap(), fp1);
}

#[test]
fn successful_submit_is_terminal() {
    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    for _ in 0..4 {
        engine.advance().unwrap();
    }
    let mut service = RecordingService::new(false);
    engine.submit(&mut service).unwrap();

    assert_eq!(engine.retreat().unwrap_err(), CoreWizardError::WizardCompleted);
    assert_eq!(engine.submit(&mut service).unwrap_err(), CoreWizardError::WizardCompleted);
    assert_eq!(service.calls.len(), 1);
}
