use yatri_adapters::{DigitalTouristId, MockSubmissionService, VerifyingSubmissionService};
use yatri_core::{RawUpload, StepRegistry, WizardConfig, WizardEngine};
use yatri_domain::{FieldKey, FieldValue};

fn main() {
    // Cargar .env si existe para obtener la configuración YATRI_*
    let _ = dotenvy::dotenv();
    // CLI mínima: `yatri register [--strict] [--delay-ms <N>]` | `yatri steps`
    let args: Vec<String> = std::env::args().collect();
    if args.len() >= 2 && args[1] == "register" {
        let mut strict: Option<bool> = None;
        let mut delay_ms: Option<u64> = None;
        let mut i = 2;
        while i < args.len() {
            match args[i].as_str() {
                "--strict" => {
                    strict = Some(true);
                }
                "--delay-ms" => {
                    i += 1;
                    if i < args.len() { delay_ms = args[i].parse::<u64>().ok(); }
                }
                _ => {}
            }
            i += 1;
        }

        let mut config = WizardConfig::from_env();
        if let Some(s) = strict {
            config.enforce_step_validation = s;
        }
        let delay_ms = delay_ms.or_else(|| std::env::var("YATRI_SUBMIT_DELAY_MS").ok().and_then(|v| v.parse().ok()))
                               .unwrap_or(400);

        let mut engine = WizardEngine::builder(StepRegistry::tourist_default()).config(config).build();
        println!("wizard abierto: sesión {}", engine.wizard_id());

        // Sesión guionada con el registro de ejemplo
        let script: Vec<(FieldKey, FieldValue)> = vec![(FieldKey::FullName, FieldValue::text("Asha Verma")),
                                                       (FieldKey::Gender, FieldValue::choice("female")),
                                                       (FieldKey::Age, FieldValue::text("29")),
                                                       (FieldKey::Nationality, FieldValue::choice("indian")),
                                                       (FieldKey::ArrivalDate, FieldValue::text("2024-05-01")),
                                                       (FieldKey::DepartureDate, FieldValue::text("2024-05-20")),
                                                       (FieldKey::Itinerary, FieldValue::text("Guwahati, Shillong, Tawang")),
                                                       (FieldKey::Contact1Name, FieldValue::text("Ravi Verma")),
                                                       (FieldKey::Contact1Phone, FieldValue::text("+91 9876543210")),
                                                       (FieldKey::Contact2Name, FieldValue::text("Meera Joshi")),
                                                       (FieldKey::Contact2Phone, FieldValue::text("+91 9123456780")),
                                                       (FieldKey::EmergencyEmail, FieldValue::text("ravi@example.com"))];
        for (key, value) in script {
            if let Err(e) = engine.update_field(key, value) {
                eprintln!("[yatri register] fallo escribiendo {key}: {e}");
                std::process::exit(4);
            }
        }
        let uploads = [(FieldKey::AadhaarDocument, "aadhaar.pdf", "application/pdf"),
                       (FieldKey::PassportDocument, "passport.png", "image/png")];
        for (slot, name, mime) in uploads {
            match engine.accept_attachment(slot, RawUpload::new(name, mime, vec![0xAB; 2048])) {
                Ok(r) => println!("adjunto aceptado en {slot}: {r}"),
                Err(e) => {
                    eprintln!("[yatri register] adjunto rechazado en {slot}: {e}");
                    std::process::exit(4);
                }
            }
        }

        loop {
            let step = match engine.current_descriptor() {
                Ok(d) => d,
                Err(e) => { eprintln!("[yatri register] error: {e}"); std::process::exit(5); }
            };
            println!("paso {}/{} · {} · {}% completo",
                     step.id,
                     engine.step_count(),
                     step.title,
                     engine.progress_percent());
            match engine.advance() {
                Ok(true) => continue,
                Ok(false) => break, // último paso alcanzado
                Err(e) => { eprintln!("[yatri register] navegación bloqueada: {e}"); std::process::exit(4); }
            }
        }

        println!("--- revisión ---");
        for (label, value) in engine.review_record().summary() {
            println!("{label}: {value}");
        }

        let mut service = VerifyingSubmissionService::new(MockSubmissionService::with_delay_ms(delay_ms));
        match engine.submit(&mut service) {
            Ok(ack) => {
                println!("emitido: {} ({})", ack.digital_id, ack.issued_at);
                if let Ok(fingerprint) = engine.record_fingerprint() {
                    println!("identidad: {}", DigitalTouristId::issue(&fingerprint).payload());
                }
                println!("secuencia de eventos: {:?}", engine.event_variants());
                std::process::exit(0);
            }
            Err(e) => {
                eprintln!("[yatri register] envío rechazado: {e}");
                std::process::exit(4);
            }
        }
    } else if args.len() >= 2 && args[1] == "steps" {
        let registry = StepRegistry::tourist_default();
        println!("registry {} · {} pasos", registry.registry_hash(), registry.count());
        for step in registry.steps() {
            let required: Vec<&str> = step.required.iter().map(|k| k.as_str()).collect();
            println!("{}. {} [{:?}] required: {}",
                     step.id,
                     step.title,
                     step.capability,
                     serde_json::json!(required));
        }
    } else {
        println!("yatri-cli: use 'register' or 'steps' subcommands");
    }
}
