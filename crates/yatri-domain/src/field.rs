//! Vocabulario de campos del registro turístico.
//!
//! Rol en el wizard:
//! - `FieldKey` es el conjunto cerrado de campos que el flujo de registro
//!   acumula a través de sus pasos. Los ids string son estables y forman
//!   parte del contrato serializado (eventos, snapshots, fingerprint).
//! - `FieldValue` distingue explícitamente el centinela `Unset` ("nunca
//!   tocado") de un texto vacío ("borrado por el usuario").
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::AttachmentRef;

/// Campos del registro. El orden declarado es el orden natural de lectura
/// (paso 1 → paso 4); el registry decide qué campo pertenece a qué paso.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKey {
    FullName,
    Gender,
    Age,
    Nationality,
    AadhaarDocument,
    PassportDocument,
    ArrivalDate,
    DepartureDate,
    Itinerary,
    Contact1Name,
    Contact1Phone,
    Contact2Name,
    Contact2Phone,
    EmergencyEmail,
}

impl FieldKey {
    /// Lista completa en orden declarado. Útil para iterar snapshots y
    /// construir el registro agregado.
    pub const ALL: [FieldKey; 14] = [FieldKey::FullName,
                                     FieldKey::Gender,
                                     FieldKey::Age,
                                     FieldKey::Nationality,
                                     FieldKey::AadhaarDocument,
                                     FieldKey::PassportDocument,
                                     FieldKey::ArrivalDate,
                                     FieldKey::DepartureDate,
                                     FieldKey::Itinerary,
                                     FieldKey::Contact1Name,
                                     FieldKey::Contact1Phone,
                                     FieldKey::Contact2Name,
                                     FieldKey::Contact2Phone,
                                     FieldKey::EmergencyEmail];

    /// Id string estable (snake_case), igual al usado por serde.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::FullName => "full_name",
            FieldKey::Gender => "gender",
            FieldKey::Age => "age",
            FieldKey::Nationality => "nationality",
            FieldKey::AadhaarDocument => "aadhaar_document",
            FieldKey::PassportDocument => "passport_document",
            FieldKey::ArrivalDate => "arrival_date",
            FieldKey::DepartureDate => "departure_date",
            FieldKey::Itinerary => "itinerary",
            FieldKey::Contact1Name => "contact1_name",
            FieldKey::Contact1Phone => "contact1_phone",
            FieldKey::Contact2Name => "contact2_name",
            FieldKey::Contact2Phone => "contact2_phone",
            FieldKey::EmergencyEmail => "emergency_email",
        }
    }

    /// Parseo inverso de `as_str`. Devuelve None para ids desconocidos.
    pub fn parse(id: &str) -> Option<FieldKey> {
        FieldKey::ALL.iter().copied().find(|k| k.as_str() == id)
    }

    /// Indica si el campo es uno de los dos slots de documento adjunto.
    pub fn is_attachment_slot(&self) -> bool {
        matches!(self, FieldKey::AadhaarDocument | FieldKey::PassportDocument)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Valor de un campo del formulario.
///
/// Invariante: `Unset` es el centinela "nunca visitado" y es distinto de
/// `Text(String::new())`. Quien escribe decide el tipo; el store nunca
/// coacciona valores (un texto en un campo de fecha se conserva tal cual).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum FieldValue {
    Unset,
    Text(String),
    Date(NaiveDate),
    Choice(String),
    Attachment(AttachmentRef),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> FieldValue {
        FieldValue::Text(s.into())
    }

    pub fn choice(s: impl Into<String>) -> FieldValue {
        FieldValue::Choice(s.into())
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, FieldValue::Unset)
    }

    /// Proyección a texto para el registro agregado y el resumen de
    /// revisión. `Unset` proyecta a cadena vacía; los adjuntos proyectan su
    /// nombre de archivo (eco de filename, igual que la UI original).
    pub fn display_text(&self) -> String {
        match self {
            FieldValue::Unset => String::new(),
            FieldValue::Text(s) | FieldValue::Choice(s) => s.clone(),
            FieldValue::Date(d) => d.format("%Y-%m-%d").to_string(),
            FieldValue::Attachment(a) => a.name().to_string(),
        }
    }

    pub fn as_attachment(&self) -> Option<&AttachmentRef> {
        match self {
            FieldValue::Attachment(a) => Some(a),
            _ => None,
        }
    }
}

impl Default for FieldValue {
    fn default() -> Self {
        FieldValue::Unset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_is_not_empty_text() {
        // "never visited" must be distinguishable from "cleared by user"
        assert_ne!(FieldValue::Unset, FieldValue::text(""));
        assert!(FieldValue::Unset.is_unset());
        assert!(!FieldValue::text("").is_unset());
    }

    #[test]
    fn key_ids_roundtrip() {
        for k in FieldKey::ALL {
            assert_eq!(FieldKey::parse(k.as_str()), Some(k));
        }
        assert_eq!(FieldKey::parse("no_such_field"), None);
    }

    #[test]
    fn attachment_slots() {
        assert!(FieldKey::AadhaarDocument.is_attachment_slot());
        assert!(FieldKey::PassportDocument.is_attachment_slot());
        assert!(!FieldKey::FullName.is_attachment_slot());
    }
}
