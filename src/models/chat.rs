use serde::{Deserialize, Serialize};

use crate::models::Medicine;

#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// Ciclo de vida de un mensaje saliente:
/// enviado → esperando respuesta → entregado | fallido.
/// Los mensajes del bot nacen entregados.
#[derive(Clone, Copy, PartialEq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "snake_case")]
pub enum DeliveryState {
    AwaitingResponse,
    Delivered,
    Failed,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: String,
    pub state: DeliveryState,
}

impl ChatMessage {
    pub fn from_user(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender: Sender::User,
            timestamp: chrono::Utc::now().to_rfc3339(),
            state: DeliveryState::AwaitingResponse,
        }
    }

    pub fn from_bot(content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            content: content.into(),
            sender: Sender::Bot,
            timestamp: chrono::Utc::now().to_rfc3339(),
            state: DeliveryState::Delivered,
        }
    }
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct ChatRequest {
    pub message: String,
}

/// Respuesta de POST /chat. Cuando el servicio NLP detecta una búsqueda
/// de medicamentos adjunta los candidatos encontrados; en caso contrario
/// solo trae el texto de respuesta.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct ChatResponse {
    pub message: String,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub medicines: Vec<Medicine>,
}

impl ChatResponse {
    /// ¿La respuesta trae candidatos para el panel lateral?
    pub fn is_medicine_search(&self) -> bool {
        !self.medicines.is_empty()
            || self.intent.as_deref() == Some("medicine_search")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_reply_is_not_a_search() {
        let json = r#"{"message":"Hola, ¿en qué puedo ayudarte?"}"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(!response.is_medicine_search());
        assert!(response.medicines.is_empty());
    }

    #[test]
    fn test_search_intent_with_candidates() {
        let json = r#"{
            "message": "Encontré estas opciones",
            "intent": "medicine_search",
            "medicines": [
                {"id":"m1","name":"Dolo 650","pack_size_label":"15 tabletas","price":30.0,"image_url":""}
            ]
        }"#;
        let response: ChatResponse = serde_json::from_str(json).unwrap();
        assert!(response.is_medicine_search());
        assert_eq!(response.medicines.len(), 1);
    }
}
