/// Validación de la sesión completa: cinco pasos, adjuntos y emisión.
fn run_session_validation() {
    use yatri_adapters::{MockSubmissionService, VerifyingSubmissionService};
    use yatri_core::{RawUpload, StepRegistry, WizardEngine};
    use yatri_domain::{FieldKey, FieldValue};

    let mut engine = WizardEngine::open(StepRegistry::tourist_default());
    assert_eq!(engine.current_step(), 1);
    assert!(engine.login_handoff_allowed());

    engine.update_field(FieldKey::FullName, FieldValue::text("Asha Verma")).expect("field write");
    engine.update_field(FieldKey::Nationality, FieldValue::choice("indian")).expect("field write");
    engine.advance().expect("advance to KYC");

    engine.accept_attachment(FieldKey::AadhaarDocument,
                             RawUpload::new("aadhaar.pdf", "application/pdf", vec![0xA1; 512]))
          .expect("aadhaar accepted");
    // Un tipo fuera de la allow-list no debe tocar el slot
    let rejected = engine.accept_attachment(FieldKey::PassportDocument,
                                            RawUpload::new("video.mp4", "video/mp4", vec![1]));
    assert!(rejected.is_err(), "el tipo no listado debe rechazarse");
    assert!(engine.store().get(FieldKey::PassportDocument).is_unset());

    engine.update_field(FieldKey::ArrivalDate, FieldValue::text("2024-05-01")).expect("field write");
    engine.update_field(FieldKey::DepartureDate, FieldValue::text("2024-05-20")).expect("field write");
    engine.update_field(FieldKey::Contact1Phone, FieldValue::text("+91 9876543210")).expect("field write");

    while engine.advance().expect("advance") {}
    assert_eq!(engine.current_step(), engine.step_count());
    assert_eq!(engine.progress_percent(), 100);

    let record = engine.review_record();
    println!("registro listo para emisión:\n{}",
             serde_json::to_string_pretty(&record).expect("record serializes"));

    let mut service = VerifyingSubmissionService::new(MockSubmissionService::with_delay_ms(0));
    let ack = engine.submit(&mut service).expect("la emisión simulada siempre acusa");
    println!("id emitido: {}", ack.digital_id);
    println!("eventos: {:?}", engine.event_variants());
}

/// Validación de la política estricta: los campos requeridos bloquean.
fn run_policy_validation() {
    use yatri_core::{CoreWizardError, StepRegistry, WizardEngine};
    use yatri_domain::{FieldKey, FieldValue};

    let mut engine = WizardEngine::builder(StepRegistry::tourist_default()).enforce_step_validation(true)
                                                                           .build();
    match engine.advance() {
        Err(CoreWizardError::MissingRequiredFields { step_id: 1, missing }) => {
            println!("bloqueado en paso 1, faltan {} campos", missing.len());
        }
        other => panic!("la política estricta debía bloquear, obtuvo {other:?}"),
    }
    engine.update_field(FieldKey::FullName, FieldValue::text("Asha")).expect("field write");
    engine.update_field(FieldKey::Gender, FieldValue::choice("female")).expect("field write");
    engine.update_field(FieldKey::Age, FieldValue::text("29")).expect("field write");
    engine.update_field(FieldKey::Nationality, FieldValue::choice("indian")).expect("field write");
    assert!(engine.advance().expect("paso completo avanza"));
}

fn main() {
    run_session_validation();
    run_policy_validation();
    println!("main-wizard: validaciones OK");
}
