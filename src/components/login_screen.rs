use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::utils::google_ffi::google_sign_in;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub submitting: bool,
    pub error: Option<String>,
    pub notice: Option<String>,
    pub on_login: Callback<(String, String)>,
    pub on_login_google: Callback<String>,
    pub on_show_register: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();

    let on_submit = {
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let on_login = props.on_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                let email = email_input.value();
                let password = password_input.value();

                if email.is_empty() || password.is_empty() {
                    if let Some(win) = web_sys::window() {
                        let _ = win.alert_with_message("Por favor, completa todos los campos");
                    }
                    return;
                }

                on_login.emit((email, password));
            }
        })
    };

    // Flujo de Google: el SDK entrega el access token por callback y el
    // backend lo canjea por un token propio
    let on_google = {
        let on_login_google = props.on_login_google.clone();
        Callback::from(move |_: MouseEvent| {
            let on_login_google = on_login_google.clone();
            let on_token = Closure::wrap(Box::new(move |token: JsValue| {
                if let Some(token) = token.as_string() {
                    on_login_google.emit(token);
                }
            }) as Box<dyn FnMut(JsValue)>);

            let on_error = Closure::wrap(Box::new(move |err: JsValue| {
                log::error!("❌ Google sign-in falló: {:?}", err);
                if let Some(win) = web_sys::window() {
                    let _ = win.alert_with_message("No se pudo iniciar sesión con Google");
                }
            }) as Box<dyn FnMut(JsValue)>);

            google_sign_in(
                on_token.as_ref().unchecked_ref(),
                on_error.as_ref().unchecked_ref(),
            );
            on_token.forget();
            on_error.forget();
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"💊"}</div>
                    </div>
                    <h1>{"MediVerse"}</h1>
                    <p>{"Tu farmacia con asistente inteligente"}</p>
                </div>

                if let Some(notice) = &props.notice {
                    <p class="form-notice">{notice}</p>
                }

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Correo electrónico"}</label>
                        <input
                            type="email"
                            id="email"
                            name="email"
                            placeholder="john@example.com"
                            ref={email_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            placeholder="••••••••"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(error) = &props.error {
                        <p class="form-error">{error}</p>
                    }

                    <button type="submit" class="btn-login" disabled={props.submitting}>
                        <span class="btn-text">
                            {if props.submitting { "Entrando..." } else { "Iniciar Sesión" }}
                        </span>
                    </button>

                    <button type="button" class="btn-google" onclick={on_google}>
                        {"Entrar con Google"}
                    </button>

                    <div class="login-footer">
                        <p class="register-text">{"¿No tienes cuenta?"}</p>
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_show_register.reform(|_| ())}
                        >
                            {"Crear cuenta"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
