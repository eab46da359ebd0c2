// ============================================================================
// CONFIG - Configuración resuelta en tiempo de compilación
// ============================================================================
// Los valores vienen de .env (via build.rs) o del entorno de compilación.
// ============================================================================

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_url: String,
    pub x_api_key: String,
    pub environment: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            x_api_key: String::new(),
            environment: "development".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            api_url: option_env!("API_URL")
                .unwrap_or("http://localhost:3000")
                .to_string(),
            x_api_key: option_env!("X_API_KEY").unwrap_or("").to_string(),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
