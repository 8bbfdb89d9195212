use yew::prelude::*;

use crate::models::User;

#[derive(Properties, PartialEq)]
pub struct AccountScreenProps {
    pub user: Option<User>,
    pub on_back: Callback<()>,
}

/// Perfil de solo lectura. Los datos vienen de GET /user al iniciar sesión;
/// no hay edición desde el cliente.
#[function_component(AccountScreen)]
pub fn account_screen(props: &AccountScreenProps) -> Html {
    html! {
        <div class="account-screen">
            <h2>{"👤 Mi cuenta"}</h2>

            {
                match &props.user {
                    Some(user) => html! {
                        <div class="account-card">
                            <div class="account-row">
                                <span class="account-label">{"Usuario"}</span>
                                <span class="account-value">{&user.username}</span>
                            </div>
                            <div class="account-row">
                                <span class="account-label">{"Correo"}</span>
                                <span class="account-value">{&user.email}</span>
                            </div>
                            <div class="account-row">
                                <span class="account-label">{"Fecha de nacimiento"}</span>
                                <span class="account-value">{&user.date_of_birth}</span>
                            </div>
                            <div class="account-row">
                                <span class="account-label">{"Teléfono"}</span>
                                <span class="account-value">{&user.phone_number}</span>
                            </div>
                        </div>
                    },
                    None => html! {
                        <p class="loading">{"Cargando perfil..."}</p>
                    },
                }
            }

            <button class="btn-secondary" onclick={props.on_back.reform(|_| ())}>
                {"Volver al chat"}
            </button>
        </div>
    }
}
