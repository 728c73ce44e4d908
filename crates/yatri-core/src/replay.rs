//! Reconstrucción de estado a partir del journal (replay de auditoría).
//!
//! El engine vivo es el único dueño del estado; el replay existe para
//! auditar que el journal cuenta la misma historia: consume eventos en
//! orden y actualiza una `WizardInstance` por evento. Lo usan los tests de
//! consistencia y la vista `audit` de la CLI.
use uuid::Uuid;

use yatri_domain::FieldKey;

use crate::event::{WizardEvent, WizardEventKind};

/// Estado reconstruido de una sesión de wizard.
pub struct WizardInstance {
    pub id: Uuid,
    pub current_step: u32,
    /// Claves tocadas (escrituras de campo o adjuntos aceptados), en orden
    /// de primer toque.
    pub touched_fields: Vec<FieldKey>,
    pub submitted: bool,
    pub closed: bool,
}

/// Reconstruye la instancia aplicando el journal en orden.
pub fn replay(wizard_id: Uuid, events: &[WizardEvent]) -> WizardInstance {
    let mut instance = WizardInstance { id: wizard_id,
                                        current_step: 1,
                                        touched_fields: Vec::new(),
                                        submitted: false,
                                        closed: false };
    for ev in events {
        match &ev.kind {
            WizardEventKind::WizardInitialized { .. } => {}
            WizardEventKind::StepEntered { step_id, .. } => instance.current_step = *step_id,
            WizardEventKind::FieldUpdated { key } => touch(&mut instance.touched_fields, *key),
            WizardEventKind::AttachmentAccepted { slot, .. } => touch(&mut instance.touched_fields, *slot),
            WizardEventKind::AttachmentRejected { .. } => {}
            WizardEventKind::SubmissionFailed { .. } => {}
            WizardEventKind::WizardSubmitted { .. } => instance.submitted = true,
            WizardEventKind::WizardClosed { last_step } => {
                instance.current_step = *last_step;
                instance.closed = true;
            }
        }
    }
    instance
}

fn touch(touched: &mut Vec<FieldKey>, key: FieldKey) {
    if !touched.contains(&key) {
        touched.push(key);
    }
}

/// Variante compacta del journal, una letra por evento.
pub fn event_variants(events: &[WizardEvent]) -> Vec<&'static str> {
    events.iter()
          .map(|e| match e.kind {
              WizardEventKind::WizardInitialized { .. } => "I",
              WizardEventKind::StepEntered { .. } => "E",
              WizardEventKind::FieldUpdated { .. } => "U",
              WizardEventKind::AttachmentAccepted { .. } => "A",
              WizardEventKind::AttachmentRejected { .. } => "X",
              WizardEventKind::SubmissionFailed { .. } => "F",
              WizardEventKind::WizardSubmitted { .. } => "S",
              WizardEventKind::WizardClosed { .. } => "C",
          })
          .collect()
}
