//! Verificación documental simulada.
//!
//! La fuente original simulaba la verificación de Aadhaar con un número
//! mágico y azar; aquí la simulación es determinista para no romper la
//! reproducibilidad: un registro sin ningún documento KYC adjunto se
//! rechaza, cualquier otro se delega al colaborador envuelto. El backend
//! real de verificación queda fuera de alcance.

use log::warn;

use yatri_core::{SubmissionAck, SubmissionError, SubmissionService};
use yatri_domain::RegistrationRecord;

/// Decorador de verificación sobre cualquier colaborador de emisión.
pub struct VerifyingSubmissionService<S: SubmissionService> {
    inner: S,
}

impl<S: SubmissionService> VerifyingSubmissionService<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Regla determinista: al menos un documento de identidad presente.
    fn documents_present(record: &RegistrationRecord) -> bool {
        record.aadhaar_attachment.is_some() || record.passport_attachment.is_some()
    }
}

impl<S: SubmissionService> SubmissionService for VerifyingSubmissionService<S> {
    fn submit(&mut self, record: &RegistrationRecord, record_fingerprint: &str) -> Result<SubmissionAck, SubmissionError> {
        if !Self::documents_present(record) {
            warn!("rejecting registration without KYC documents, fingerprint={record_fingerprint}");
            return Err(SubmissionError::Rejected("no identity document attached".to_string()));
        }
        self.inner.submit(record, record_fingerprint)
    }
}
