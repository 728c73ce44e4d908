//! Carga de configuración del wizard desde variables de entorno.
//! Usa convención `YATRI_*` y defaults permisivos (el comportamiento
//! observado en la fuente original nunca bloquea la navegación).

use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;

// Carga perezosa del archivo .env una sola vez.
static DOTENV_LOADED: Lazy<()> = Lazy::new(|| {
    let _ = dotenv(); // ignora error si no existe .env
});

#[derive(Debug, Clone)]
pub struct WizardConfig {
    /// Si está activo, `advance()` exige los campos requeridos del paso
    /// actual. Por defecto la navegación es permisiva (los marcados
    /// "required" son sólo estado de display).
    pub enforce_step_validation: bool,
    /// Cota máxima de tamaño de adjunto en bytes.
    pub max_attachment_bytes: u64,
    /// Cota máxima de longitud de valores de texto, aplicada sólo bajo
    /// validación estricta.
    pub max_field_len: usize,
}

impl Default for WizardConfig {
    fn default() -> Self {
        Self { enforce_step_validation: false,
               max_attachment_bytes: 10 * 1024 * 1024,
               max_field_len: 4096 }
    }
}

impl WizardConfig {
    pub fn from_env() -> Self {
        // asegura que .env se haya cargado
        Lazy::force(&DOTENV_LOADED);
        let defaults = WizardConfig::default();
        let enforce_step_validation = env::var("YATRI_ENFORCE_STEP_VALIDATION").map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                                                                               .unwrap_or(defaults.enforce_step_validation);
        let max_attachment_bytes = env::var("YATRI_MAX_ATTACHMENT_BYTES").ok()
                                                                         .and_then(|v| v.parse().ok())
                                                                         .unwrap_or(defaults.max_attachment_bytes);
        let max_field_len = env::var("YATRI_MAX_FIELD_LEN").ok()
                                                           .and_then(|v| v.parse().ok())
                                                           .unwrap_or(defaults.max_field_len);
        Self { enforce_step_validation,
               max_attachment_bytes,
               max_field_len }
    }
}

/// Forzar carga temprana de .env desde aplicaciones externas si se desea.
pub fn init_dotenv() {
    Lazy::force(&DOTENV_LOADED);
}
