//! Derivación del Digital Tourist ID.
//!
//! La identidad emitida se deriva del fingerprint canónico del registro:
//! misma información → mismo id. El formato visible es `YTR-` seguido de
//! doce hex en mayúsculas, apto para mostrar en la UI y citar en soporte.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Identidad digital emitida para un registro turístico.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigitalTouristId {
    pub id: String,
    /// Fingerprint del registro del que se derivó el id.
    pub record_fingerprint: String,
}

/// Deriva el id visible a partir del fingerprint del registro.
pub fn derive_digital_id(record_fingerprint: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(record_fingerprint.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    format!("YTR-{}", digest[..12].to_uppercase())
}

impl DigitalTouristId {
    pub fn issue(record_fingerprint: &str) -> Self {
        Self { id: derive_digital_id(record_fingerprint),
               record_fingerprint: record_fingerprint.to_string() }
    }

    /// Payload JSON estable para handoff a capas externas (display, logs
    /// de auditoría). No incluye datos personales del viajero.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::json!({
            "digital_id": self.id,
            "record_fingerprint": self.record_fingerprint,
        })
    }
}

impl fmt::Display for DigitalTouristId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.id)
    }
}
