//! Pegamento con la capa de presentación.
//!
//! El shell posee el flag de apertura y los callbacks sin argumentos de la
//! superficie que lo aloja: `on_close` (cerrar el modal) y `on_login`
//! (abrir el flujo de login par). El core nunca ve estos callbacks; el
//! shell traduce eventos de input `(clave, valor)` en operaciones del
//! engine y descarta la sesión al cerrar.

use log::debug;

use yatri_core::{CoreWizardError, EventStore, RawUpload, SubmissionAck, SubmissionService, WizardEngine, WizardEvent};
use yatri_domain::{AttachmentRef, FieldKey, FieldValue};

pub struct WizardShell<E: EventStore> {
    engine: Option<WizardEngine<E>>,
    on_close: Box<dyn FnMut()>,
    on_login: Box<dyn FnMut()>,
}

impl<E: EventStore> WizardShell<E> {
    /// Abre el shell sobre una sesión recién construida.
    pub fn open(engine: WizardEngine<E>, on_close: Box<dyn FnMut()>, on_login: Box<dyn FnMut()>) -> Self {
        Self { engine: Some(engine),
               on_close,
               on_login }
    }

    pub fn is_open(&self) -> bool {
        self.engine.is_some()
    }

    fn engine_mut(&mut self) -> Result<&mut WizardEngine<E>, CoreWizardError> {
        self.engine.as_mut().ok_or(CoreWizardError::NotOpen)
    }

    pub fn engine(&self) -> Option<&WizardEngine<E>> {
        self.engine.as_ref()
    }

    /// Evento de input de la superficie de render: un par `(clave, valor)`
    /// por cada tecleo/selección. Sin batching ni debounce.
    pub fn input(&mut self, key: FieldKey, value: FieldValue) -> Result<(), CoreWizardError> {
        self.engine_mut()?.update_field(key, value)
    }

    /// Selección de archivo ya realizada por el usuario; el mecanismo que
    /// disparó el picker es asunto de la superficie, no del core.
    pub fn pick_file(&mut self, slot: FieldKey, raw: RawUpload) -> Result<AttachmentRef, CoreWizardError> {
        self.engine_mut()?.accept_attachment(slot, raw)
    }

    pub fn next(&mut self) -> Result<bool, CoreWizardError> {
        self.engine_mut()?.advance()
    }

    pub fn previous(&mut self) -> Result<bool, CoreWizardError> {
        self.engine_mut()?.retreat()
    }

    /// Handoff al flujo de login. Sólo se ofrece desde el paso 1; cierra
    /// la sesión actual y dispara el callback del peer.
    pub fn request_login(&mut self) -> bool {
        let allowed = self.engine.as_ref().map(|e| e.login_handoff_allowed()).unwrap_or(false);
        if !allowed {
            return false;
        }
        self.discard();
        (self.on_login)();
        true
    }

    /// Cierre explícito: descarta el estado incondicionalmente y devuelve
    /// el journal de la sesión para auditoría.
    pub fn close(&mut self) -> Option<Vec<WizardEvent>> {
        let engine = self.engine.take()?;
        let journal = engine.close();
        (self.on_close)();
        Some(journal)
    }

    fn discard(&mut self) {
        if let Some(engine) = self.engine.take() {
            let journal = engine.close();
            debug!("wizard discarded after {} events", journal.len());
            (self.on_close)();
        }
    }

    /// El botón "Generate ID" del último paso: envía el registro y, si el
    /// colaborador acusa recibo, cierra el modal (igual que la fuente
    /// original). Un fallo deja la sesión abierta para reintentar.
    pub fn generate_id(&mut self, service: &mut dyn SubmissionService) -> Result<SubmissionAck, CoreWizardError> {
        let ack = self.engine_mut()?.submit(service)?;
        self.engine = None;
        (self.on_close)();
        Ok(ack)
    }
}
