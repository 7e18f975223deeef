// Build-time knobs. There is no runtime config: no env, no storage.

pub const APP_TITLE: &str = "Formulário de Perguntas";

pub const TOAST_DURATION_MS: u32 = 5_000;
pub const MAX_TOASTS: usize = 3;

pub const SUBMISSION_LOG_LABEL: &str = "Dados do formulário:";
