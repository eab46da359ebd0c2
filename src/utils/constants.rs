/// Claves de los documentos persistidos (un blob JSON por clave)
pub const AUTH_DATA_KEY: &str = "authData";
pub const LOC_DATA_KEY: &str = "locData";

/// Tamaño de página del dashboard (ambos scopes)
pub const DASHBOARD_PAGE_LIMIT: u32 = 10;

/// Tamaño de página del buscador de sociedades
pub const SEARCH_PAGE_LIMIT: u32 = 20;

/// Margen en px para considerar que el scroll llegó al final
pub const NEAR_END_MARGIN_PX: i32 = 48;

/// Segundos de espera para reenviar el OTP
pub const OTP_RESEND_SECONDS: u32 = 30;

/// Longitudes validadas en el cliente antes de cualquier request
pub const PHONE_LEN: usize = 10;
pub const OTP_LEN: usize = 6;
