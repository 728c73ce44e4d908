//! Tipos de evento del wizard y estructura `WizardEvent`.
//!
//! Rol en el flujo:
//! - Cada sesión del `WizardEngine` emite eventos a un `EventStore`
//!   append-only; el journal es el canal de observabilidad del core.
//! - `FieldUpdated` registra la clave pero nunca el valor: los valores son
//!   datos personales del viajero y no pertenecen al journal.
//! - Los timestamps son metadato y no entran en ningún fingerprint.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use yatri_domain::FieldKey;

use crate::errors::CoreWizardError;
use crate::submit::SubmissionError;

/// Tipos de eventos de una sesión de registro.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WizardEventKind {
    /// Apertura de la sesión: fija el `registry_hash` y la cantidad de
    /// pasos. Invariante: debe ser el primer evento de un `wizard_id`.
    WizardInitialized { registry_hash: String, step_count: u32 },
    /// El usuario entró a un paso (por avance o retroceso).
    StepEntered { step_id: u32, title: String },
    /// Un campo fue escrito. Sólo la clave; el valor queda fuera.
    FieldUpdated { key: FieldKey },
    /// Un adjunto pasó la política y quedó en su slot.
    AttachmentAccepted { slot: FieldKey, file_name: String, byte_size: u64 },
    /// Un adjunto fue rechazado; el slot conserva su valor previo.
    AttachmentRejected { slot: FieldKey, reason: CoreWizardError },
    /// El colaborador de emisión rechazó el registro; el estado del wizard
    /// queda intacto para reintentar.
    SubmissionFailed { error: SubmissionError },
    /// Evento de cierre exitoso con el fingerprint del registro enviado y
    /// el id digital emitido.
    WizardSubmitted { record_fingerprint: String, digital_id: String },
    /// La sesión fue descartada sin enviar.
    WizardClosed { last_step: u32 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WizardEvent {
    pub seq: u64, // asignado por el EventStore (orden append)
    pub wizard_id: Uuid,
    pub kind: WizardEventKind,
    pub ts: DateTime<Utc>, // metadato (no entra en fingerprint)
}
