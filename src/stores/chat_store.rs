use crate::models::{ChatMessage, DeliveryState, Sender};

/// Registro de la conversación. Los mensajes salientes pasan por
/// esperando-respuesta → entregado | fallido; los fallidos permanecen
/// visibles en el log (no hay reintento automático).
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ChatStore {
    messages: Vec<ChatMessage>,
}

impl ChatStore {
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Registrar un mensaje saliente. Devuelve su id para poder marcar
    /// después el desenlace.
    pub fn push_user(&mut self, content: impl Into<String>) -> String {
        let message = ChatMessage::from_user(content);
        let id = message.id.clone();
        self.messages.push(message);
        id
    }

    pub fn push_bot(&mut self, content: impl Into<String>) {
        self.messages.push(ChatMessage::from_bot(content));
    }

    pub fn mark_delivered(&mut self, id: &str) {
        self.set_state(id, DeliveryState::Delivered);
    }

    pub fn mark_failed(&mut self, id: &str) {
        self.set_state(id, DeliveryState::Failed);
    }

    fn set_state(&mut self, id: &str, state: DeliveryState) {
        if let Some(message) = self.messages.iter_mut().find(|m| m.id == id) {
            message.state = state;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outbound_lifecycle() {
        let mut chat = ChatStore::default();
        let id = chat.push_user("necesito paracetamol");

        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].state, DeliveryState::AwaitingResponse);
        assert_eq!(chat.messages()[0].sender, Sender::User);

        chat.mark_delivered(&id);
        assert_eq!(chat.messages()[0].state, DeliveryState::Delivered);
    }

    #[test]
    fn test_failed_message_stays_in_log() {
        let mut chat = ChatStore::default();
        let id = chat.push_user("hola");
        chat.mark_failed(&id);

        assert_eq!(chat.messages().len(), 1);
        assert_eq!(chat.messages()[0].state, DeliveryState::Failed);
        assert_eq!(chat.messages()[0].content, "hola");
    }

    #[test]
    fn test_bot_replies_are_delivered() {
        let mut chat = ChatStore::default();
        chat.push_bot("Encontré estas opciones");
        assert_eq!(chat.messages()[0].sender, Sender::Bot);
        assert_eq!(chat.messages()[0].state, DeliveryState::Delivered);
    }
}
