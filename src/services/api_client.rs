// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless salvo el token compartido)
// ============================================================================
// Único punto de salida HTTP del cliente. NO tiene lógica de negocio:
// una operación async por endpoint del backend, sin reintentos ni timeouts
// propios. Los fallos se propagan al caller como ApiError.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{
    CartEntry, ChatRequest, ChatResponse, LoginRequest, LoginResponse, Order,
    PaymentIntentRequest, PaymentIntentResponse, PaymentVerifyRequest, RegisterRequest, User,
};
use crate::services::ApiError;
use crate::utils::constants::BACKEND_URL;

/// Cliente API. El token vive en una celda compartida: el hook de auth y la
/// fachada ven siempre el mismo valor, sin estado global ambiental.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    token: Rc<RefCell<Option<String>>>,
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Rc::ptr_eq(&self.token, &other.token)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(BACKEND_URL)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Rc::new(RefCell::new(None)),
        }
    }

    /// Actualizar el token que se adjunta a las peticiones autenticadas.
    /// `None` deja de enviar el header Authorization.
    pub fn set_token(&self, token: Option<String>) {
        *self.token.borrow_mut() = token;
    }

    /// Valor del header Authorization, si hay sesión.
    pub fn bearer(&self) -> Option<String> {
        self.token
            .borrow()
            .as_ref()
            .map(|token| format!("Bearer {}", token))
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_auth(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.bearer() {
            Some(bearer) => builder.header("Authorization", &bearer),
            None => builder,
        }
    }

    // ------------------------------------------------------------------
    // Auth
    // ------------------------------------------------------------------

    pub async fn register(&self, data: &RegisterRequest) -> Result<(), ApiError> {
        self.post_json::<_, serde_json::Value>("/register", data)
            .await?;
        Ok(())
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("/login", &request).await
    }

    /// Login con el access token de Google; el backend lo canjea por
    /// un token propio.
    pub async fn login_google(&self, google_token: &str) -> Result<LoginResponse, ApiError> {
        let body = serde_json::json!({ "token": google_token });
        self.post_json("/login/google", &body).await
    }

    pub async fn get_user(&self) -> Result<User, ApiError> {
        self.get_json("/user").await
    }

    // ------------------------------------------------------------------
    // Chat
    // ------------------------------------------------------------------

    /// Enviar un mensaje al asistente. Los mensajes vacíos se rechazan
    /// localmente, sin tocar la red.
    pub async fn send_message(&self, message: &str) -> Result<ChatResponse, ApiError> {
        let trimmed = validate_message(message)?;
        log::info!("💬 Enviando mensaje al asistente ({} chars)", trimmed.len());
        let request = ChatRequest {
            message: trimmed.to_string(),
        };
        self.post_json("/chat", &request).await
    }

    /// Reconocer la letra de una receta (imagen → nombre de medicamento).
    pub async fn recognize(&self, image: &web_sys::File) -> Result<String, ApiError> {
        let form = web_sys::FormData::new()
            .map_err(|_| ApiError::Network("No se pudo construir el formulario".into()))?;
        form.append_with_blob("image", image)
            .map_err(|_| ApiError::Network("No se pudo adjuntar la imagen".into()))?;

        let response = self
            .with_auth(Request::post(&self.url("/recognize")))
            .body(form)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;

        let response = Self::ensure_ok(response).await?;

        #[derive(serde::Deserialize)]
        struct RecognizeResponse {
            predicted_label: String,
        }

        let parsed: RecognizeResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Parse error: {}", e)))?;
        Ok(parsed.predicted_label)
    }

    // ------------------------------------------------------------------
    // Pedidos
    // ------------------------------------------------------------------

    pub async fn order_history(&self) -> Result<Vec<Order>, ApiError> {
        self.get_json("/order/history").await
    }

    pub async fn cancel_order(&self, order_id: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({ "order_id": order_id });
        self.post_json::<_, serde_json::Value>("/order/cancel", &body)
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Carrito
    // ------------------------------------------------------------------

    pub async fn cart_add(&self, medicine_id: &str, quantity: u32) -> Result<(), ApiError> {
        let body = serde_json::json!({ "medicine_id": medicine_id, "quantity": quantity });
        self.post_json::<_, serde_json::Value>("/cart", &body)
            .await?;
        Ok(())
    }

    pub async fn cart_get(&self) -> Result<Vec<CartEntry>, ApiError> {
        self.get_json("/cart").await
    }

    pub async fn cart_delete(&self, medicine_id: &str) -> Result<(), ApiError> {
        let response = self
            .with_auth(Request::delete(&self.url(&format!("/cart/{}", medicine_id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;
        Self::ensure_ok(response).await?;
        Ok(())
    }

    pub async fn checkout(&self) -> Result<(), ApiError> {
        let response = self
            .with_auth(Request::post(&self.url("/checkout")))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;
        Self::ensure_ok(response).await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Pago
    // ------------------------------------------------------------------

    pub async fn payment_intent(&self, amount: f64) -> Result<PaymentIntentResponse, ApiError> {
        let request = PaymentIntentRequest { amount };
        self.post_json("/payment/intent", &request).await
    }

    pub async fn payment_verify(&self, payment_intent_id: &str) -> Result<(), ApiError> {
        let request = PaymentVerifyRequest {
            payment_intent_id: payment_intent_id.to_string(),
        };
        self.post_json::<_, serde_json::Value>("/payment/verify", &request)
            .await?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .with_auth(Request::get(&self.url(path)))
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;
        let response = Self::ensure_ok(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Parse error: {}", e)))
    }

    async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(Request::post(&self.url(path)))
            .json(body)
            .map_err(|e| ApiError::Network(format!("Request build error: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Network error: {}", e)))?;
        let response = Self::ensure_ok(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(format!("Parse error: {}", e)))
    }

    /// Convertir respuestas no-OK en ApiError, rescatando el mensaje
    /// que el backend incluye en el cuerpo (`{"message": "..."}`).
    async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
        if response.ok() {
            return Ok(response);
        }

        let status = response.status();
        let message = match response.text().await {
            Ok(body) => serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(String::from))
                .unwrap_or(body),
            Err(_) => "Unknown error".to_string(),
        };

        log::error!("❌ HTTP {}: {}", status, message);
        Err(ApiError::from_status(status, message))
    }
}

/// Validación local de mensajes de chat: nunca se envía un mensaje vacío
/// o de solo espacios. Se ejecuta antes de construir la petición.
pub fn validate_message(message: &str) -> Result<&str, ApiError> {
    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation(
            "El mensaje no puede estar vacío".into(),
        ));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_reflects_token() {
        let api = ApiClient::new("http://localhost:5000");
        assert_eq!(api.bearer(), None);

        api.set_token(Some("T".into()));
        assert_eq!(api.bearer(), Some("Bearer T".into()));

        // setToken(null): ninguna petición posterior lleva Authorization
        api.set_token(None);
        assert_eq!(api.bearer(), None);
    }

    #[test]
    fn test_token_cell_is_shared_between_clones() {
        let api = ApiClient::new("http://localhost:5000");
        let clone = api.clone();
        api.set_token(Some("T".into()));
        assert_eq!(clone.bearer(), Some("Bearer T".into()));
    }

    #[test]
    fn test_empty_message_rejected_before_network() {
        assert!(matches!(
            validate_message(""),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_message("   \n\t "),
            Err(ApiError::Validation(_))
        ));
        assert_eq!(validate_message("  hola  ").unwrap(), "hola");
    }

    #[test]
    fn test_url_joining() {
        let api = ApiClient::new("http://localhost:5000");
        assert_eq!(api.url("/cart"), "http://localhost:5000/cart");
        assert_eq!(api.url("/cart/m1"), "http://localhost:5000/cart/m1");
    }
}
