use yew::prelude::*;

use crate::models::RegisterRequest;
use crate::services::ApiClient;
use crate::stores::AuthStore;
use crate::utils::{
    is_adult, is_valid_email, is_valid_password, is_valid_phone, is_valid_username, load_raw,
    remove_from_storage, save_raw, STORAGE_KEY_TOKEN,
};

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub store: UseStateHandle<AuthStore>,
    pub submitting: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    /// Mensaje de éxito tras el registro (se muestra en el login).
    pub notice: UseStateHandle<Option<String>>,
    pub login: Callback<(String, String)>,
    pub login_google: Callback<String>,
    pub register: Callback<RegisterRequest>,
    pub logout: Callback<()>,
}

impl UseAuthHandle {
    pub fn is_logged_in(&self) -> bool {
        self.store.is_logged_in()
    }
}

/// Sesión durable primero, memoria después: si la escritura en localStorage
/// falla, el caller no debe aplicar la transición en memoria. Así el token
/// en memoria y la copia persistida nunca divergen.
fn persist_token(api: &ApiClient, token: Option<String>) -> Result<(), String> {
    match &token {
        Some(value) => save_raw(STORAGE_KEY_TOKEN, value)?,
        None => remove_from_storage(STORAGE_KEY_TOKEN)?,
    }
    api.set_token(token);
    Ok(())
}

#[hook]
pub fn use_auth(api: ApiClient) -> UseAuthHandle {
    let store = {
        let api = api.clone();
        use_state(move || {
            // Rehidratar la sesión guardada antes del primer render
            let token = load_raw(STORAGE_KEY_TOKEN);
            api.set_token(token.clone());
            AuthStore::default().with_token(token)
        })
    };
    let submitting = use_state(|| false);
    let error = use_state(|| None::<String>);
    let notice = use_state(|| None::<String>);

    // Completar el perfil al rehidratar. Un 401 significa token vencido:
    // se destruye la sesión (durable + memoria).
    {
        let api = api.clone();
        let store = store.clone();
        use_effect_with((), move |_| {
            if store.is_logged_in() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api.get_user().await {
                        Ok(user) => {
                            log::info!("✅ Sesión restaurada: {}", user.username);
                            store.set((*store).clone().with_user(Some(user)));
                        }
                        Err(e) if e.is_unauthorized() => {
                            log::warn!("⚠️ Token guardado ya no es válido, cerrando sesión");
                            if persist_token(&api, None).is_ok() {
                                store.set(AuthStore::logged_out());
                            }
                        }
                        Err(e) => {
                            log::error!("❌ Error cargando perfil: {}", e);
                        }
                    }
                });
            }
            || ()
        });
    }

    // Login callback
    let login = {
        let api = api.clone();
        let store = store.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let notice = notice.clone();

        Callback::from(move |(email, password): (String, String)| {
            if *submitting {
                return;
            }
            if !is_valid_email(&email) {
                error.set(Some("Correo electrónico inválido".into()));
                return;
            }
            if !is_valid_password(&password) {
                error.set(Some("La contraseña debe tener al menos 6 caracteres".into()));
                return;
            }

            let api = api.clone();
            let store = store.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let notice = notice.clone();

            submitting.set(true);
            error.set(None);
            notice.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match api.login(&email, &password).await {
                    Ok(response) => {
                        let token = response.access_token;
                        match persist_token(&api, Some(token.clone())) {
                            Ok(()) => {
                                log::info!("✅ Login exitoso: {}", email);
                                let user = api.get_user().await.ok();
                                store.set(
                                    AuthStore::default()
                                        .with_token(Some(token))
                                        .with_user(user),
                                );
                            }
                            Err(e) => {
                                log::error!("❌ No se pudo persistir la sesión: {}", e);
                                error.set(Some(e));
                            }
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Login fallido: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    // Login con Google: el backend canjea el access token por uno propio
    let login_google = {
        let api = api.clone();
        let store = store.clone();
        let submitting = submitting.clone();
        let error = error.clone();

        Callback::from(move |google_token: String| {
            if *submitting {
                return;
            }
            let api = api.clone();
            let store = store.clone();
            let submitting = submitting.clone();
            let error = error.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api.login_google(&google_token).await {
                    Ok(response) => {
                        let token = response.access_token;
                        match persist_token(&api, Some(token.clone())) {
                            Ok(()) => {
                                let user = api.get_user().await.ok();
                                store.set(
                                    AuthStore::default()
                                        .with_token(Some(token))
                                        .with_user(user),
                                );
                            }
                            Err(e) => error.set(Some(e)),
                        }
                    }
                    Err(e) => {
                        log::error!("❌ Login con Google fallido: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    // Registro: validación local primero, nunca llega a la red con datos malos
    let register = {
        let api = api.clone();
        let submitting = submitting.clone();
        let error = error.clone();
        let notice = notice.clone();

        Callback::from(move |data: RegisterRequest| {
            if *submitting {
                return;
            }
            if let Err(message) = validate_registration(&data) {
                error.set(Some(message));
                return;
            }

            let api = api.clone();
            let submitting = submitting.clone();
            let error = error.clone();
            let notice = notice.clone();

            submitting.set(true);
            error.set(None);

            wasm_bindgen_futures::spawn_local(async move {
                match api.register(&data).await {
                    Ok(()) => {
                        log::info!("✅ Registro exitoso: {}", data.username);
                        notice.set(Some("Cuenta creada, ya puedes iniciar sesión".into()));
                    }
                    Err(e) => {
                        log::error!("❌ Registro fallido: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    // Logout callback
    let logout = {
        let api = api.clone();
        let store = store.clone();
        let error = error.clone();

        Callback::from(move |_| {
            match persist_token(&api, None) {
                Ok(()) => {
                    log::info!("👋 Logout");
                    store.set(AuthStore::logged_out());
                }
                Err(e) => {
                    // La copia durable no se pudo borrar: no tocamos memoria
                    // para no dejar las dos vistas en desacuerdo.
                    log::error!("❌ No se pudo borrar la sesión persistida: {}", e);
                    error.set(Some(e));
                }
            }
        })
    };

    UseAuthHandle {
        store,
        submitting,
        error,
        notice,
        login,
        login_google,
        register,
        logout,
    }
}

fn validate_registration(data: &RegisterRequest) -> Result<(), String> {
    if !is_valid_username(&data.username) {
        return Err("El usuario debe tener al menos 3 caracteres".into());
    }
    if !is_valid_email(&data.email) {
        return Err("Correo electrónico inválido".into());
    }
    if !is_valid_password(&data.password) {
        return Err("La contraseña debe tener al menos 6 caracteres".into());
    }
    if !is_adult(&data.date_of_birth) {
        return Err("Debes ser mayor de 18 años".into());
    }
    if !is_valid_phone(&data.phone_number) {
        return Err("El teléfono debe tener 10 dígitos".into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> RegisterRequest {
        RegisterRequest {
            username: "anabel".into(),
            email: "a@b.com".into(),
            password: "secret1".into(),
            date_of_birth: "1990-05-20".into(),
            phone_number: "1234567890".into(),
        }
    }

    #[test]
    fn test_valid_registration_passes() {
        assert!(validate_registration(&request()).is_ok());
    }

    #[test]
    fn test_each_field_is_checked() {
        let mut bad = request();
        bad.username = "ab".into();
        assert!(validate_registration(&bad).is_err());

        let mut bad = request();
        bad.email = "sin-arroba".into();
        assert!(validate_registration(&bad).is_err());

        let mut bad = request();
        bad.password = "123".into();
        assert!(validate_registration(&bad).is_err());

        let mut bad = request();
        bad.date_of_birth = "2020-01-01".into();
        assert!(validate_registration(&bad).is_err());

        let mut bad = request();
        bad.phone_number = "555".into();
        assert!(validate_registration(&bad).is_err());
    }
}
