//! Core WizardEngine implementation

use indexmap::IndexMap;
use serde_json::json;
use uuid::Uuid;

use yatri_domain::{AttachmentRef, FieldKey, FieldValue, RegistrationRecord};

use crate::attachment::{self, RawUpload};
use crate::config::WizardConfig;
use crate::errors::CoreWizardError;
use crate::event::{EventStore, WizardEvent, WizardEventKind};
use crate::hashing::hash_value;
use crate::registry::{StepDescriptor, StepRegistry};
use crate::replay::{self, WizardInstance};
use crate::store::FormFieldStore;
use crate::submit::{SubmissionAck, SubmissionService};

/// Máquina de estados del wizard de registro.
///
/// Dueña única del store de campos y del puntero de paso; consulta el
/// registry para navegación y emite eventos de cada operación efectiva.
/// Una instancia por sesión abierta: cerrar o enviar la descarta.
pub struct WizardEngine<E>
    where E: EventStore
{
    event_store: E,
    registry: StepRegistry,
    store: FormFieldStore,
    config: WizardConfig,
    wizard_id: Uuid,
    current_step: u32,
    submitted: bool,
}

impl WizardEngine<crate::event::InMemoryEventStore> {
    /// Abre una sesión con store de eventos en memoria y política por
    /// defecto (permisiva).
    pub fn open(registry: StepRegistry) -> Self {
        Self::builder(registry).build()
    }

    /// Crea un builder para configurar la sesión.
    #[inline]
    pub fn builder(registry: StepRegistry) -> crate::engine::WizardBuilder<crate::event::InMemoryEventStore> {
        crate::engine::WizardBuilder::new(registry)
    }
}

impl<E> WizardEngine<E>
    where E: EventStore
{
    pub(crate) fn new_with_parts(event_store: E, registry: StepRegistry, config: WizardConfig) -> Self {
        let mut engine = Self { event_store,
                                registry,
                                store: FormFieldStore::new(),
                                config,
                                wizard_id: Uuid::new_v4(),
                                current_step: 1,
                                submitted: false };
        let registry_hash = engine.registry.registry_hash().to_string();
        let step_count = engine.registry.count();
        engine.append(WizardEventKind::WizardInitialized { registry_hash, step_count });
        let title = engine.registry.by_id(1).map(|s| s.title.clone()).unwrap_or_default();
        engine.append(WizardEventKind::StepEntered { step_id: 1, title });
        engine
    }

    fn append(&mut self, kind: WizardEventKind) -> WizardEvent {
        self.event_store.append_kind(self.wizard_id, kind)
    }

    fn ensure_active(&self) -> Result<(), CoreWizardError> {
        if self.submitted {
            return Err(CoreWizardError::WizardCompleted);
        }
        Ok(())
    }

    /// Avanza al siguiente paso.
    ///
    /// En el borde (paso N) es un no-op que devuelve `Ok(false)`; la UI
    /// deshabilita el control pero la capa de datos nunca lo trata como
    /// error. Bajo política estricta, los campos requeridos faltantes del
    /// paso actual bloquean con `MissingRequiredFields` dejando el estado
    /// intacto.
    pub fn advance(&mut self) -> Result<bool, CoreWizardError> {
        self.ensure_active()?;
        if self.current_step >= self.registry.count() {
            return Ok(false);
        }
        if self.config.enforce_step_validation {
            let missing = self.missing_required_fields()?;
            if !missing.is_empty() {
                return Err(CoreWizardError::MissingRequiredFields { step_id: self.current_step,
                                                                    missing });
            }
        }
        self.current_step += 1;
        let title = self.registry.by_id(self.current_step)?.title.clone();
        self.append(WizardEventKind::StepEntered { step_id: self.current_step,
                                                   title });
        Ok(true)
    }

    /// Retrocede un paso. No-op `Ok(false)` en el paso 1. Es un cambio de
    /// vista puro: nunca descarta contenido del store.
    pub fn retreat(&mut self) -> Result<bool, CoreWizardError> {
        self.ensure_active()?;
        if self.current_step <= 1 {
            return Ok(false);
        }
        self.current_step -= 1;
        let title = self.registry.by_id(self.current_step)?.title.clone();
        self.append(WizardEventKind::StepEntered { step_id: self.current_step,
                                                   title });
        Ok(true)
    }

    /// Escribe un campo. Permitido desde cualquier paso (las escrituras
    /// nunca están acotadas al paso actual) y no afecta la navegación.
    pub fn update_field(&mut self, key: FieldKey, value: FieldValue) -> Result<(), CoreWizardError> {
        self.ensure_active()?;
        if self.config.enforce_step_validation {
            if let FieldValue::Text(s) = &value {
                if s.len() > self.config.max_field_len {
                    return Err(CoreWizardError::FieldTooLong(key));
                }
            }
        }
        self.store.set(key, value);
        self.append(WizardEventKind::FieldUpdated { key });
        Ok(())
    }

    /// Acepta un adjunto para el slot dado según la política de tipos y
    /// tamaño. Si se rechaza, el slot conserva su valor previo y queda
    /// constancia en el journal.
    pub fn accept_attachment(&mut self, slot: FieldKey, raw: RawUpload) -> Result<AttachmentRef, CoreWizardError> {
        self.ensure_active()?;
        match attachment::accept(slot, raw, self.config.max_attachment_bytes) {
            Ok(reference) => {
                self.store.set(slot, FieldValue::Attachment(reference.clone()));
                self.append(WizardEventKind::AttachmentAccepted { slot,
                                                                  file_name: reference.name().to_string(),
                                                                  byte_size: reference.byte_size() });
                Ok(reference)
            }
            Err(reason) => {
                self.append(WizardEventKind::AttachmentRejected { slot,
                                                                  reason: reason.clone() });
                Err(reason)
            }
        }
    }

    /// Fracción de progreso `paso_actual / N`, en (0, 1].
    pub fn progress_ratio(&self) -> f64 {
        f64::from(self.current_step) / f64::from(self.registry.count())
    }

    /// Progreso redondeado a porcentaje entero, como lo muestra la UI.
    pub fn progress_percent(&self) -> u32 {
        (self.progress_ratio() * 100.0).round() as u32
    }

    /// Campos requeridos del paso actual que siguen en `Unset`. Estado
    /// advisory de display; sólo la política estricta lo convierte en
    /// bloqueo.
    pub fn missing_required_fields(&self) -> Result<Vec<FieldKey>, CoreWizardError> {
        let descriptor = self.registry.by_id(self.current_step)?;
        Ok(descriptor.required
                     .iter()
                     .copied()
                     .filter(|key| self.store.get(*key).is_unset())
                     .collect())
    }

    /// Registro agregado tal como lo vería el paso de revisión, leído de
    /// una copia defensiva del store.
    pub fn review_record(&self) -> RegistrationRecord {
        let snapshot = self.store.snapshot();
        RegistrationRecord::from_fields(snapshot.iter())
    }

    /// Fingerprint canónico del registro actual: versión del wizard +
    /// hash del registry + payload del registro.
    pub fn record_fingerprint(&self) -> Result<String, CoreWizardError> {
        let record = self.review_record();
        let payload = serde_json::to_value(&record).map_err(|e| CoreWizardError::Internal(e.to_string()))?;
        Ok(hash_value(&json!({
               "wizard_version": crate::constants::WIZARD_VERSION,
               "registry_hash": self.registry.registry_hash(),
               "record": payload,
           })))
    }

    /// Entrega el registro terminado al colaborador de emisión.
    ///
    /// Sólo es válido en el paso N; antes, devuelve `SubmitBeforeFinalStep`
    /// sin invocar al colaborador. Un `Ok` marca la sesión como terminal;
    /// un fallo del colaborador deja el estado intacto para reintentar.
    pub fn submit(&mut self, service: &mut dyn SubmissionService) -> Result<SubmissionAck, CoreWizardError> {
        self.ensure_active()?;
        if self.current_step != self.registry.count() {
            return Err(CoreWizardError::SubmitBeforeFinalStep);
        }
        let record = self.review_record();
        let fingerprint = self.record_fingerprint()?;
        match service.submit(&record, &fingerprint) {
            Ok(ack) => {
                self.submitted = true;
                self.append(WizardEventKind::WizardSubmitted { record_fingerprint: fingerprint,
                                                               digital_id: ack.digital_id.clone() });
                Ok(ack)
            }
            Err(error) => {
                self.append(WizardEventKind::SubmissionFailed { error: error.clone() });
                Err(CoreWizardError::Submission(error))
            }
        }
    }

    /// Cierra la sesión descartando el estado. Devuelve el journal para
    /// auditoría; los handles de adjuntos no requieren limpieza (sólo
    /// referencian bytes en memoria).
    pub fn close(mut self) -> Vec<WizardEvent> {
        if !self.submitted {
            let last_step = self.current_step;
            self.append(WizardEventKind::WizardClosed { last_step });
        }
        self.event_store.list(self.wizard_id)
    }

    /// El handoff al flujo de login sólo se ofrece desde el paso 1.
    pub fn login_handoff_allowed(&self) -> bool {
        self.current_step == 1 && !self.submitted
    }

    // Accessors
    pub fn wizard_id(&self) -> Uuid {
        self.wizard_id
    }

    pub fn current_step(&self) -> u32 {
        self.current_step
    }

    pub fn step_count(&self) -> u32 {
        self.registry.count()
    }

    pub fn current_descriptor(&self) -> Result<&StepDescriptor, CoreWizardError> {
        self.registry.by_id(self.current_step)
    }

    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    pub fn store(&self) -> &FormFieldStore {
        &self.store
    }

    pub fn event_store(&self) -> &E {
        &self.event_store
    }

    /// Copia defensiva del mapeo campo→valor.
    pub fn snapshot(&self) -> IndexMap<FieldKey, FieldValue> {
        self.store.snapshot()
    }

    /// Journal completo de la sesión.
    pub fn events(&self) -> Vec<WizardEvent> {
        self.event_store.list(self.wizard_id)
    }

    /// Variante compacta del journal (una letra por evento).
    pub fn event_variants(&self) -> Vec<&'static str> {
        replay::event_variants(&self.events())
    }

    /// Estado reconstruido desde el journal, para contrastar con el vivo.
    pub fn audit(&self) -> WizardInstance {
        replay::replay(self.wizard_id, &self.events())
    }
}
