use thiserror::Error;

/// Taxonomía de fallos de la capa de red.
///
/// - `Validation`: detectado localmente, nunca llegó a la red.
/// - `Unauthorized`: HTTP 401, la sesión expiró o el token es inválido.
/// - `Backend`: 4xx/5xx con mensaje del servidor.
/// - `Network`: sin respuesta (transporte).
/// - `Parse`: la respuesta no tiene la forma esperada.
///
/// Ningún fallo se reintenta automáticamente: cada error es terminal
/// para ese intento y queda en manos del usuario.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Sesión expirada o inválida: {0}")]
    Unauthorized(String),

    #[error("HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    #[error("Error de red: {0}")]
    Network(String),

    #[error("Respuesta inválida: {0}")]
    Parse(String),
}

impl ApiError {
    /// Clasificar una respuesta no-OK por su código de estado.
    pub fn from_status(status: u16, message: String) -> Self {
        if status == 401 {
            Self::Unauthorized(message)
        } else {
            Self::Backend { status, message }
        }
    }

    /// ¿Hay que forzar logout y volver al login?
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_401_maps_to_unauthorized() {
        let err = ApiError::from_status(401, "token expirado".into());
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_other_statuses_map_to_backend() {
        let err = ApiError::from_status(422, "cantidad inválida".into());
        assert_eq!(
            err,
            ApiError::Backend {
                status: 422,
                message: "cantidad inválida".into()
            }
        );
        assert!(!err.is_unauthorized());
        assert_eq!(err.to_string(), "HTTP 422: cantidad inválida");
    }
}
