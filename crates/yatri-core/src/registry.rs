//! Registry de pasos: definición inmutable del recorrido del wizard.
//!
//! En el flujo de registro, el registry cumple el rol de la definición del
//! flow: una lista ordenada de descriptores creada una sola vez al componer
//! la aplicación. Cualquier cambio de secuencia es un redeploy, no un
//! evento de runtime.
//!
//! Invariante: los ids forman una secuencia densa 1..N sin huecos; el orden
//! de la secuencia es el orden de recorrido obligatorio.

use serde::{Deserialize, Serialize};
use serde_json::json;

use yatri_domain::FieldKey;

use crate::errors::CoreWizardError;
use crate::hashing::{hash_str, to_canonical_json};

/// Tag de capacidad de render por paso. La capa de presentación resuelve
/// icono y campos con un lookup sobre este valor (dispatch dirigido por
/// datos, sin herencia ni reflexión).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderCapability {
    PersonalForm,
    DocumentUpload,
    TripForm,
    ContactForm,
    ReviewSummary,
}

/// Descriptor inmutable de un paso. Se crea al inicio y nunca se muta.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepDescriptor {
    pub id: u32,
    pub title: String,
    /// Campos requeridos del paso. Bajo política permisiva son estado de
    /// display; bajo política estricta bloquean `advance()`.
    pub required: Vec<FieldKey>,
    pub capability: RenderCapability,
}

impl StepDescriptor {
    pub fn new(id: u32, title: impl Into<String>, required: Vec<FieldKey>, capability: RenderCapability) -> Self {
        Self { id,
               title: title.into(),
               required,
               capability }
    }
}

/// Lista ordenada e inmutable de descriptores, con hash de definición.
pub struct StepRegistry {
    steps: Vec<StepDescriptor>,
    registry_hash: String,
}

impl StepRegistry {
    /// Construye el registry validando la densidad de ids.
    ///
    /// # Errores
    /// `CoreWizardError::InvalidRegistry` si la lista está vacía o los ids
    /// no son exactamente 1..N en orden.
    pub fn new(steps: Vec<StepDescriptor>) -> Result<Self, CoreWizardError> {
        if steps.is_empty() {
            return Err(CoreWizardError::InvalidRegistry);
        }
        for (i, step) in steps.iter().enumerate() {
            if step.id != (i as u32) + 1 {
                return Err(CoreWizardError::InvalidRegistry);
            }
        }
        let registry_hash = Self::calculate_hash(&steps);
        Ok(StepRegistry { steps, registry_hash })
    }

    /// Hash canónico sobre ids, títulos y campos requeridos. Identifica la
    /// definición del recorrido en eventos y fingerprints.
    fn calculate_hash(steps: &[StepDescriptor]) -> String {
        let shape: Vec<serde_json::Value> =
            steps.iter()
                 .map(|s| {
                     json!({
                         "id": s.id,
                         "title": s.title,
                         "required": s.required.iter().map(|k| k.as_str()).collect::<Vec<_>>(),
                     })
                 })
                 .collect();
        hash_str(&to_canonical_json(&json!(shape)))
    }

    /// Descriptor por id. Falla con `StepNotFound` fuera de 1..N.
    pub fn by_id(&self, id: u32) -> Result<&StepDescriptor, CoreWizardError> {
        if id == 0 {
            return Err(CoreWizardError::StepNotFound);
        }
        self.steps.get((id - 1) as usize).ok_or(CoreWizardError::StepNotFound)
    }

    /// Cantidad total de pasos (N).
    pub fn count(&self) -> u32 {
        self.steps.len() as u32
    }

    pub fn steps(&self) -> &[StepDescriptor] {
        &self.steps
    }

    pub fn registry_hash(&self) -> &str {
        &self.registry_hash
    }

    /// Registry de cinco pasos del registro turístico original.
    pub fn tourist_default() -> StepRegistry {
        use FieldKey::*;
        let steps = vec![StepDescriptor::new(1,
                                             "Personal Info",
                                             vec![FullName, Gender, Age, Nationality],
                                             RenderCapability::PersonalForm),
                         StepDescriptor::new(2,
                                             "KYC Upload",
                                             vec![AadhaarDocument, PassportDocument],
                                             RenderCapability::DocumentUpload),
                         StepDescriptor::new(3,
                                             "Trip Details",
                                             vec![ArrivalDate, DepartureDate, Itinerary],
                                             RenderCapability::TripForm),
                         StepDescriptor::new(4,
                                             "Emergency Contacts",
                                             vec![Contact1Name, Contact1Phone, EmergencyEmail],
                                             RenderCapability::ContactForm),
                         StepDescriptor::new(5, "Review & Generate", vec![], RenderCapability::ReviewSummary)];
        // La lista literal de arriba es densa por construcción.
        StepRegistry::new(steps).expect("default registry is dense")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_rejects_gaps() {
        let steps = vec![StepDescriptor::new(1, "a", vec![], RenderCapability::PersonalForm),
                         StepDescriptor::new(3, "b", vec![], RenderCapability::ReviewSummary)];
        assert_eq!(StepRegistry::new(steps).err(), Some(CoreWizardError::InvalidRegistry));
    }

    #[test]
    fn registry_rejects_empty() {
        assert!(StepRegistry::new(vec![]).is_err());
    }

    #[test]
    fn by_id_bounds() {
        let reg = StepRegistry::tourist_default();
        assert_eq!(reg.count(), 5);
        assert_eq!(reg.by_id(1).unwrap().title, "Personal Info");
        assert_eq!(reg.by_id(5).unwrap().capability, RenderCapability::ReviewSummary);
        assert!(reg.by_id(0).is_err());
        assert!(reg.by_id(6).is_err());
    }

    #[test]
    fn registry_hash_tracks_definition() {
        let a = StepRegistry::tourist_default();
        let b = StepRegistry::tourist_default();
        assert_eq!(a.registry_hash(), b.registry_hash());

        let other = StepRegistry::new(vec![StepDescriptor::new(1, "Solo", vec![], RenderCapability::ReviewSummary)]).unwrap();
        assert_ne!(a.registry_hash(), other.registry_hash());
    }
}
