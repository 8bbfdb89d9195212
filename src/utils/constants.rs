/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:5000 (por defecto)
/// - Producción: via BACKEND_URL env var (ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Clave de localStorage para el token de sesión
pub const STORAGE_KEY_TOKEN: &str = "mediverse_token";

/// Clave de localStorage para los medicamentos sugeridos por el chat
pub const STORAGE_KEY_MEDICINES: &str = "mediverse_medicines";
