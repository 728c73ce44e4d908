//! yatri-adapters: colaboradores externos del core del wizard
//!
//! Este crate provee:
//! - `MockSubmissionService`: emisión simulada con latencia configurable
//!   (el backend real queda fuera de alcance; el acuse siempre llega).
//! - `VerifyingSubmissionService`: verificación documental simulada y
//!   determinista, envolviendo a cualquier otro colaborador.
//! - Derivación del Digital Tourist ID a partir del fingerprint del
//!   registro.
//! - `WizardShell`: el pegamento con la capa de presentación (flag open,
//!   callbacks de cierre y de handoff a login).
//!
//! Nota: el core sólo conoce el trait `SubmissionService`; nada aquí
//! modifica la forma del engine.

pub mod identity;
pub mod shell;
pub mod submission;
pub mod verification;

pub use identity::{derive_digital_id, DigitalTouristId};
pub use shell::WizardShell;
pub use submission::MockSubmissionService;
pub use verification::VerifyingSubmissionService;
