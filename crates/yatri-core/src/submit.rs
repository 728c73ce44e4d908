//! Contrato con el colaborador de emisión de identidad.
//!
//! El core entrega el registro agregado y su fingerprint; la persistencia
//! real, la verificación documental y la emisión pertenecen al colaborador
//! inyectado. La fuente original asumía éxito incondicional; aquí la
//! frontera es `Result` para que un backend real pueda reportar fallo sin
//! cambiar la forma del core.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use yatri_domain::RegistrationRecord;

/// Acuse de emisión: el id digital asignado y su momento de emisión.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAck {
    pub digital_id: String,
    pub issued_at: DateTime<Utc>,
}

/// Fallo recuperable del colaborador. El estado del wizard queda intacto
/// para que el usuario reintente.
#[derive(Debug, Error, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub enum SubmissionError {
    #[error("rejected: {0}")] Rejected(String),
    #[error("service unavailable: {0}")] Unavailable(String),
}

/// Colaborador externo que recibe el registro terminado.
pub trait SubmissionService {
    fn submit(&mut self, record: &RegistrationRecord, record_fingerprint: &str) -> Result<SubmissionAck, SubmissionError>;
}
