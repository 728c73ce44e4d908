//! Constantes del core del wizard.
//!
//! Este módulo agrupa valores estáticos que participan en el cálculo del
//! fingerprint del registro enviado. Cambios aquí alteran la identidad de
//! los registros emitidos aunque los datos no cambien (por contrato,
//! `WIZARD_VERSION` forma parte del input del hashing).

/// Versión lógica del wizard. Se incluye en el input del fingerprint para
/// que un cambio incompatible de versión invalide determinísticamente las
/// identidades derivadas. Mantener estable mientras no haya cambios de
/// contrato.
pub const WIZARD_VERSION: &str = "W1.0";
