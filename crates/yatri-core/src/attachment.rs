//! Política de aceptación de adjuntos (documentos de identidad).
//!
//! Reglas clave:
//! - Allow-list fija de tipos documento/imagen; cualquier otro tipo se
//!   rechaza sin tocar el slot.
//! - Cota de tamaño explícita (la fuente original no imponía ninguna; la
//!   cota por defecto vive en `WizardConfig`).
//! - No hay transferencia real de bytes: sólo se registra la referencia
//!   con metadatos para display y para el handoff final.

use yatri_domain::{AttachmentRef, FieldKey};

use crate::errors::CoreWizardError;

/// Extensiones aceptadas (comparación case-insensitive sobre el sufijo).
pub const ALLOWED_EXTENSIONS: [&str; 4] = ["pdf", "jpg", "jpeg", "png"];

/// MIME hints aceptados de forma directa.
pub const ALLOWED_MIME_HINTS: [&str; 3] = ["application/pdf", "image/jpeg", "image/png"];

/// Archivo tal como llega de la capa de presentación tras la selección del
/// usuario. El mecanismo que disparó la selección no le importa al core.
#[derive(Debug, Clone)]
pub struct RawUpload {
    pub name: String,
    pub mime_hint: String,
    pub bytes: Vec<u8>,
}

impl RawUpload {
    pub fn new(name: impl Into<String>, mime_hint: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self { name: name.into(),
               mime_hint: mime_hint.into(),
               bytes }
    }
}

fn extension_of(name: &str) -> Option<String> {
    name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_lowercase())
}

/// Decide si el tipo declarado (extensión o MIME) está en la allow-list.
pub fn type_allowed(raw: &RawUpload) -> bool {
    if ALLOWED_MIME_HINTS.iter().any(|m| raw.mime_hint.eq_ignore_ascii_case(m)) {
        return true;
    }
    match extension_of(&raw.name) {
        Some(ext) => ALLOWED_EXTENSIONS.iter().any(|e| *e == ext),
        None => false,
    }
}

/// Valida el archivo contra la política y produce la referencia.
///
/// No escribe en ningún store: el engine decide dónde colocar la
/// referencia y qué eventos emitir alrededor.
pub fn accept(slot: FieldKey, raw: RawUpload, max_bytes: u64) -> Result<AttachmentRef, CoreWizardError> {
    if !slot.is_attachment_slot() {
        return Err(CoreWizardError::InvalidAttachmentSlot(slot));
    }
    if !type_allowed(&raw) {
        let shown = if raw.mime_hint.is_empty() { raw.name.clone() } else { raw.mime_hint.clone() };
        return Err(CoreWizardError::UnsupportedAttachmentType(shown));
    }
    let size = raw.bytes.len() as u64;
    if size > max_bytes {
        return Err(CoreWizardError::AttachmentTooLarge(size));
    }
    AttachmentRef::new(raw.name, raw.mime_hint, raw.bytes).map_err(|e| CoreWizardError::Internal(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_listed_types_by_extension_or_mime() {
        assert!(type_allowed(&RawUpload::new("doc.PDF", "", vec![])));
        assert!(type_allowed(&RawUpload::new("photo.bin", "image/png", vec![])));
        assert!(!type_allowed(&RawUpload::new("movie.mp4", "video/mp4", vec![])));
        assert!(!type_allowed(&RawUpload::new("noext", "", vec![])));
    }

    #[test]
    fn rejects_non_attachment_slot() {
        let raw = RawUpload::new("a.pdf", "application/pdf", vec![1]);
        let err = accept(FieldKey::FullName, raw, u64::MAX).unwrap_err();
        assert_eq!(err, CoreWizardError::InvalidAttachmentSlot(FieldKey::FullName));
    }

    #[test]
    fn rejects_oversized_upload() {
        let raw = RawUpload::new("a.pdf", "application/pdf", vec![0; 32]);
        let err = accept(FieldKey::AadhaarDocument, raw, 16).unwrap_err();
        assert_eq!(err, CoreWizardError::AttachmentTooLarge(32));
    }

    #[test]
    fn accepts_and_builds_reference() {
        let raw = RawUpload::new("aadhaar.jpg", "image/jpeg", vec![5; 10]);
        let r = accept(FieldKey::AadhaarDocument, raw, 1024).unwrap();
        assert_eq!(r.name(), "aadhaar.jpg");
        assert_eq!(r.byte_size(), 10);
    }
}
