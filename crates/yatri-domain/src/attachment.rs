// attachment.rs
use crate::DomainError;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;

/// Referencia inmutable a un documento adjunto seleccionado por el usuario.
/// Guarda metadatos para display (eco de filename) y un digest de contenido
/// para verificación de integridad; los bytes viven sólo en memoria y no se
/// serializan ni se suben a ningún lado.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttachmentRef {
    name: String,
    byte_size: u64,
    mime_hint: String,
    content_digest: String,
    #[serde(skip)]
    content: AttachmentHandle,
}

/// Handle opaco a los bytes del adjunto. Compartido por Arc: clonar una
/// referencia no duplica el contenido.
#[derive(Debug, Clone, Default)]
pub struct AttachmentHandle(Arc<Vec<u8>>);

impl AttachmentRef {
    /// Crea una referencia a partir del archivo elegido.
    ///
    /// # Errores
    /// Retorna `DomainError::ValidationError` si el nombre está vacío. La
    /// política de tipos permitidos y tamaño máximo no vive aquí: es
    /// responsabilidad del handler de adjuntos del core.
    pub fn new(name: impl Into<String>, mime_hint: impl Into<String>, bytes: Vec<u8>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError("El adjunto requiere un nombre de archivo".to_string()));
        }
        let byte_size = bytes.len() as u64;
        let content_digest = Self::calculate_digest(&bytes);
        Ok(AttachmentRef { name,
                           byte_size,
                           mime_hint: mime_hint.into(),
                           content_digest,
                           content: AttachmentHandle(Arc::new(bytes)) })
    }

    /// Digest sha256 (hex) del contenido, identidad estable del adjunto.
    fn calculate_digest(bytes: &[u8]) -> String {
        let mut hasher = Sha256::new();
        hasher.update(bytes);
        format!("{:x}", hasher.finalize())
    }

    // Getters
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn byte_size(&self) -> u64 {
        self.byte_size
    }

    pub fn mime_hint(&self) -> &str {
        &self.mime_hint
    }

    pub fn content_digest(&self) -> &str {
        &self.content_digest
    }

    /// Acceso de sólo lectura a los bytes retenidos en memoria.
    pub fn bytes(&self) -> &[u8] {
        &self.content.0
    }

    /// Verifica integridad recalculando y comparando el digest.
    pub fn verify_integrity(&self) -> bool {
        Self::calculate_digest(&self.content.0) == self.content_digest
    }
}

// Igualdad basada en el digest de contenido (el nombre es sólo display).
impl PartialEq for AttachmentRef {
    fn eq(&self, other: &Self) -> bool {
        self.content_digest == other.content_digest
    }
}

impl fmt::Display for AttachmentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Attachment({}, {} bytes, {})", self.name, self.byte_size, self.mime_hint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attachment_creation() -> Result<(), DomainError> {
        let a = AttachmentRef::new("aadhaar.pdf", "application/pdf", vec![1, 2, 3])?;
        assert_eq!(a.name(), "aadhaar.pdf");
        assert_eq!(a.byte_size(), 3);
        assert!(a.verify_integrity());
        Ok(())
    }

    #[test]
    fn test_attachment_requires_name() {
        let r = AttachmentRef::new("   ", "application/pdf", vec![1]);
        assert!(r.is_err());
    }

    #[test]
    fn test_attachment_equality_by_content() -> Result<(), DomainError> {
        let a = AttachmentRef::new("a.pdf", "application/pdf", vec![9, 9])?;
        let b = AttachmentRef::new("b.pdf", "application/pdf", vec![9, 9])?;
        let c = AttachmentRef::new("a.pdf", "application/pdf", vec![1])?;
        assert_eq!(a, b);
        assert_ne!(a, c);
        Ok(())
    }
}
