use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::RegisterRequest;

#[derive(Properties, PartialEq)]
pub struct RegisterScreenProps {
    pub submitting: bool,
    pub error: Option<String>,
    pub on_register: Callback<RegisterRequest>,
    pub on_back_to_login: Callback<()>,
}

#[function_component(RegisterScreen)]
pub fn register_screen(props: &RegisterScreenProps) -> Html {
    let username_ref = use_node_ref();
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let birth_ref = use_node_ref();
    let phone_ref = use_node_ref();

    let on_submit = {
        let username_ref = username_ref.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let birth_ref = birth_ref.clone();
        let phone_ref = phone_ref.clone();
        let on_register = props.on_register.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let value = |node: &NodeRef| {
                node.cast::<HtmlInputElement>()
                    .map(|input| input.value())
                    .unwrap_or_default()
            };

            // La validación de fondo (edad, formato) vive en el hook de auth
            on_register.emit(RegisterRequest {
                username: value(&username_ref),
                email: value(&email_ref),
                password: value(&password_ref),
                date_of_birth: value(&birth_ref),
                phone_number: value(&phone_ref),
            });
        })
    };

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">
                        <div class="logo-icon">{"💊"}</div>
                    </div>
                    <h1>{"Crear cuenta"}</h1>
                    <p>{"Regístrate para comprar con el asistente"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Usuario"}</label>
                        <input type="text" id="username" placeholder="johndoe" ref={username_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="email">{"Correo electrónico"}</label>
                        <input type="email" id="email" placeholder="john@example.com" ref={email_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input type="password" id="password" placeholder="••••••••" ref={password_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="date_of_birth">{"Fecha de nacimiento"}</label>
                        <input type="date" id="date_of_birth" ref={birth_ref} required=true />
                    </div>

                    <div class="form-group">
                        <label for="phone_number">{"Teléfono"}</label>
                        <input type="tel" id="phone_number" placeholder="1234567890" ref={phone_ref} required=true />
                    </div>

                    if let Some(error) = &props.error {
                        <p class="form-error">{error}</p>
                    }

                    <button type="submit" class="btn-login" disabled={props.submitting}>
                        <span class="btn-text">
                            {if props.submitting { "Creando..." } else { "Crear cuenta" }}
                        </span>
                    </button>

                    <div class="login-footer">
                        <p class="register-text">{"¿Ya tienes cuenta?"}</p>
                        <button
                            type="button"
                            class="btn-register-link"
                            onclick={props.on_back_to_login.reform(|_| ())}
                        >
                            {"Iniciar sesión"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
