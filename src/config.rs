use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub app_title: String,
    /// Backend real, accesible en desarrollo a través del proxy
    pub backend_url: String,
    pub environment: String,
    pub enable_logging: bool,
    pub user_email_storage_key: String,
    pub avatar_url: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_title: "Vault Admin".to_string(),
            backend_url: "http://localhost:8000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            user_email_storage_key: "email".to_string(),
            avatar_url: None,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "APP_TITLE" => option_env!("APP_TITLE"),
            "BACKEND_URL" => option_env!("BACKEND_URL"),
            "ENVIRONMENT" => option_env!("ENVIRONMENT"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "USER_EMAIL_STORAGE_KEY" => option_env!("USER_EMAIL_STORAGE_KEY"),
            "AVATAR_URL" => option_env!("AVATAR_URL"),
            _ => None,
        })
    }

    /// Construir a partir de una función de búsqueda; los valores ausentes o
    /// inválidos caen en los valores por defecto
    pub fn from_lookup<'a>(lookup: impl Fn(&str) -> Option<&'a str>) -> Self {
        let defaults = Self::default();
        Self {
            app_title: lookup("APP_TITLE")
                .map(str::to_string)
                .unwrap_or(defaults.app_title),
            backend_url: lookup("BACKEND_URL")
                .map(str::to_string)
                .unwrap_or(defaults.backend_url),
            environment: lookup("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: lookup("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            user_email_storage_key: lookup("USER_EMAIL_STORAGE_KEY")
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .unwrap_or(defaults.user_email_storage_key),
            avatar_url: lookup("AVATAR_URL")
                .filter(|v| !v.is_empty())
                .map(str::to_string),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Nivel de log para wasm_logger
    pub fn log_level(&self) -> log::Level {
        if !self.enable_logging {
            log::Level::Error
        } else if self.is_production() {
            log::Level::Info
        } else {
            log::Level::Debug
        }
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
