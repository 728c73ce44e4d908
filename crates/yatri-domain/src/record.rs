//! Registro agregado que el wizard entrega al colaborador de emisión.
//!
//! Reglas clave:
//! - La construcción es permisiva (espejo del comportamiento observado):
//!   campos de texto nunca tocados proyectan a cadena vacía y adjuntos
//!   ausentes quedan en `None`. La decisión de rechazar un registro
//!   incompleto pertenece al colaborador o a la política estricta del
//!   engine, no a este tipo.
//! - El payload serializado es estable: el orden de campos es el orden de
//!   declaración, apto para canonicalizar y calcular fingerprint.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{AttachmentRef, FieldKey, FieldValue};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub full_name: String,
    pub gender: String,
    pub age: String,
    pub nationality: String,
    pub aadhaar_attachment: Option<AttachmentRef>,
    pub passport_attachment: Option<AttachmentRef>,
    pub arrival_date: String,
    pub departure_date: String,
    pub itinerary: String,
    pub contact1_name: String,
    pub contact1_phone: String,
    pub contact2_name: String,
    pub contact2_phone: String,
    pub emergency_email: String,
}

impl RegistrationRecord {
    /// Agrega un snapshot campo→valor en el registro final. Acepta
    /// cualquier iterador de pares para no acoplarse al contenedor del
    /// store.
    pub fn from_fields<'a, I>(fields: I) -> Self
        where I: IntoIterator<Item = (&'a FieldKey, &'a FieldValue)>
    {
        let mut rec = RegistrationRecord::empty();
        for (key, value) in fields {
            match key {
                FieldKey::FullName => rec.full_name = value.display_text(),
                FieldKey::Gender => rec.gender = value.display_text(),
                FieldKey::Age => rec.age = value.display_text(),
                FieldKey::Nationality => rec.nationality = value.display_text(),
                FieldKey::AadhaarDocument => rec.aadhaar_attachment = value.as_attachment().cloned(),
                FieldKey::PassportDocument => rec.passport_attachment = value.as_attachment().cloned(),
                FieldKey::ArrivalDate => rec.arrival_date = value.display_text(),
                FieldKey::DepartureDate => rec.departure_date = value.display_text(),
                FieldKey::Itinerary => rec.itinerary = value.display_text(),
                FieldKey::Contact1Name => rec.contact1_name = value.display_text(),
                FieldKey::Contact1Phone => rec.contact1_phone = value.display_text(),
                FieldKey::Contact2Name => rec.contact2_name = value.display_text(),
                FieldKey::Contact2Phone => rec.contact2_phone = value.display_text(),
                FieldKey::EmergencyEmail => rec.emergency_email = value.display_text(),
            }
        }
        rec
    }

    fn empty() -> Self {
        RegistrationRecord { full_name: String::new(),
                             gender: String::new(),
                             age: String::new(),
                             nationality: String::new(),
                             aadhaar_attachment: None,
                             passport_attachment: None,
                             arrival_date: String::new(),
                             departure_date: String::new(),
                             itinerary: String::new(),
                             contact1_name: String::new(),
                             contact1_phone: String::new(),
                             contact2_name: String::new(),
                             contact2_phone: String::new(),
                             emergency_email: String::new() }
    }

    /// Campos sin contenido (texto vacío o adjunto ausente). Es estado de
    /// display/advisory, no un veredicto de validez.
    pub fn missing_fields(&self) -> Vec<FieldKey> {
        let mut missing = Vec::new();
        for key in FieldKey::ALL {
            let empty = match key {
                FieldKey::FullName => self.full_name.is_empty(),
                FieldKey::Gender => self.gender.is_empty(),
                FieldKey::Age => self.age.is_empty(),
                FieldKey::Nationality => self.nationality.is_empty(),
                FieldKey::AadhaarDocument => self.aadhaar_attachment.is_none(),
                FieldKey::PassportDocument => self.passport_attachment.is_none(),
                FieldKey::ArrivalDate => self.arrival_date.is_empty(),
                FieldKey::DepartureDate => self.departure_date.is_empty(),
                FieldKey::Itinerary => self.itinerary.is_empty(),
                FieldKey::Contact1Name => self.contact1_name.is_empty(),
                FieldKey::Contact1Phone => self.contact1_phone.is_empty(),
                FieldKey::Contact2Name => self.contact2_name.is_empty(),
                FieldKey::Contact2Phone => self.contact2_phone.is_empty(),
                FieldKey::EmergencyEmail => self.emergency_email.is_empty(),
            };
            if empty {
                missing.push(key);
            }
        }
        missing
    }

    /// Filas del resumen de revisión del último paso: nombre,
    /// nacionalidad, ventana de viaje y contacto primario.
    pub fn summary(&self) -> Vec<(String, String)> {
        vec![("Name".to_string(), self.full_name.clone()),
             ("Nationality".to_string(), self.nationality.clone()),
             ("Travel Duration".to_string(), format!("{} to {}", self.arrival_date, self.departure_date)),
             ("Emergency Contact".to_string(), self.contact1_phone.clone())]
    }
}

impl fmt::Display for RegistrationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f,
               "RegistrationRecord(name: {}, nationality: {}, attachments: {})",
               if self.full_name.is_empty() { "sin nombre" } else { &self.full_name },
               self.nationality,
               self.aadhaar_attachment.iter().count() + self.passport_attachment.iter().count())
    }
}
