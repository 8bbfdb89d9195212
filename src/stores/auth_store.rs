use crate::models::User;

/// Sesión actual: token + perfil. El token es la única credencial que se
/// adjunta a las peticiones autenticadas.
///
/// Invariante: el token en memoria y la copia durable en localStorage nunca
/// divergen. Las transiciones aquí son puras; el hook `use_auth` escribe
/// primero la copia durable y solo ante éxito aplica la transición.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AuthStore {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthStore {
    pub fn is_logged_in(&self) -> bool {
        self.token.is_some()
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn with_user(mut self, user: Option<User>) -> Self {
        self.user = user;
        self
    }

    /// Sesión destruida: sin token y sin perfil.
    pub fn logged_out() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_presence_controls_login() {
        let store = AuthStore::default();
        assert!(!store.is_logged_in());

        let store = store.with_token(Some("T".into()));
        assert!(store.is_logged_in());
        assert_eq!(store.token.as_deref(), Some("T"));

        let store = store.with_token(None);
        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_logout_clears_everything() {
        let user = User {
            id: "u1".into(),
            username: "ana".into(),
            email: "a@b.com".into(),
            date_of_birth: "1990-05-20".into(),
            phone_number: "1234567890".into(),
        };
        let store = AuthStore::default()
            .with_token(Some("T".into()))
            .with_user(Some(user));
        assert!(store.is_logged_in());

        let store = AuthStore::logged_out();
        assert_eq!(store, AuthStore::default());
        assert!(store.user.is_none());
    }
}
