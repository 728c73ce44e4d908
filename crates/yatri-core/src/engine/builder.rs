//! Builder para `WizardEngine`.
//!
//! Notas de diseño
//! - El builder fija primero el registry (obligatorio) y permite sustituir
//!   el event store y la política antes de abrir la sesión.
//! - `build()` consume el builder, abre la sesión en el paso 1 y emite los
//!   eventos iniciales (`WizardInitialized`, `StepEntered`).
//!
//! Ejemplo de uso (comentario):
//!
//! ```ignore
//! // let engine = WizardEngine::builder(StepRegistry::tourist_default())
//! //     .config(WizardConfig::from_env())
//! //     .enforce_step_validation(true)
//! //     .build();
//! ```

use crate::config::WizardConfig;
use crate::engine::WizardEngine;
use crate::event::{EventStore, InMemoryEventStore};
use crate::registry::StepRegistry;

pub struct WizardBuilder<E: EventStore> {
    registry: StepRegistry,
    event_store: E,
    config: WizardConfig,
}

impl WizardBuilder<InMemoryEventStore> {
    pub(crate) fn new(registry: StepRegistry) -> Self {
        Self { registry,
               event_store: InMemoryEventStore::default(),
               config: WizardConfig::default() }
    }
}

impl<E: EventStore> WizardBuilder<E> {
    /// Sustituye el store de eventos que usará la sesión.
    pub fn event_store<E2: EventStore>(self, event_store: E2) -> WizardBuilder<E2> {
        WizardBuilder { registry: self.registry,
                        event_store,
                        config: self.config }
    }

    /// Reemplaza la configuración completa.
    pub fn config(mut self, config: WizardConfig) -> Self {
        self.config = config;
        self
    }

    /// Atajo para elegir entre navegación permisiva (default) y estricta.
    pub fn enforce_step_validation(mut self, enforce: bool) -> Self {
        self.config.enforce_step_validation = enforce;
        self
    }

    /// Abre la sesión en el paso 1.
    pub fn build(self) -> WizardEngine<E> {
        WizardEngine::new_with_parts(self.event_store, self.registry, self.config)
    }
}
