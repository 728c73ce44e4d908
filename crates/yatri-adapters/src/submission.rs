//! Emisión simulada del Digital Tourist ID.
//!
//! - No hay backend: la latencia se simula con un sleep y el acuse llega
//!   siempre (comportamiento observado en la fuente original, hecho
//!   explícito aquí en lugar de asumido por el core).
//! - No accede a IO externo; sólo deriva el id en memoria.

use chrono::Utc;
use log::{debug, info};
use std::thread;
use std::time::Duration;

use yatri_core::{SubmissionAck, SubmissionError, SubmissionService};
use yatri_domain::RegistrationRecord;

use crate::identity::derive_digital_id;

/// Colaborador de emisión simulado. Una instancia por sesión de wizard es
/// suficiente; no guarda estado entre envíos.
pub struct MockSubmissionService {
    delay: Duration,
}

impl MockSubmissionService {
    pub fn new() -> Self {
        Self::with_delay_ms(400)
    }

    /// Latencia simulada antes de responder, en milisegundos.
    pub fn with_delay_ms(ms: u64) -> Self {
        Self { delay: Duration::from_millis(ms) }
    }
}

impl Default for MockSubmissionService {
    fn default() -> Self {
        Self::new()
    }
}

impl SubmissionService for MockSubmissionService {
    fn submit(&mut self, record: &RegistrationRecord, record_fingerprint: &str) -> Result<SubmissionAck, SubmissionError> {
        debug!("simulated submission, fingerprint={record_fingerprint}");
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let ack = SubmissionAck { digital_id: derive_digital_id(record_fingerprint),
                                  issued_at: Utc::now() };
        info!("issued {} for {}", ack.digital_id, record);
        Ok(ack)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yatri_domain::{FieldKey, FieldValue};

    fn sample_record() -> RegistrationRecord {
        let fields = vec![(FieldKey::FullName, FieldValue::text("Asha"))];
        RegistrationRecord::from_fields(fields.iter().map(|(k, v)| (k, v)))
    }

    #[test]
    fn mock_always_acks() {
        let mut svc = MockSubmissionService::with_delay_ms(0);
        let ack = svc.submit(&sample_record(), "fp-1").unwrap();
        assert_eq!(ack.digital_id, derive_digital_id("fp-1"));
    }

    #[test]
    fn same_fingerprint_same_id() {
        let mut svc = MockSubmissionService::with_delay_ms(0);
        let a = svc.submit(&sample_record(), "fp-x").unwrap();
        let b = svc.submit(&sample_record(), "fp-x").unwrap();
        assert_eq!(a.digital_id, b.digital_id);
    }
}
