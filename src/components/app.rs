use yew::prelude::*;

use crate::components::{
    AccountScreen, CartScreen, ChatScreen, CheckoutScreen, LoginScreen, OrdersScreen,
    PaymentScreen, RegisterScreen,
};
use crate::hooks::use_auth;
use crate::services::ApiClient;

/// Pantallas de la app. Sin router: la navegación es estado local que el
/// componente raíz conmuta, y un usuario sin sesión siempre cae en Login.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Page {
    Chat,
    Cart,
    Checkout,
    Payment,
    Orders,
    Account,
}

#[function_component(App)]
pub fn app() -> Html {
    // Una sola fachada HTTP para toda la app. Los clones por props
    // comparten la misma celda de token.
    let api = use_memo((), |_| ApiClient::default());
    let api = (*api).clone();

    let auth = use_auth(api.clone());
    let page = use_state(|| Page::Chat);
    let show_register = use_state(|| false);

    // Logout fuerza la vuelta a Chat para la próxima sesión
    let on_logout = {
        let logout = auth.logout.clone();
        let page = page.clone();
        Callback::from(move |_: ()| {
            page.set(Page::Chat);
            logout.emit(());
        })
    };

    let navigate = {
        let page = page.clone();
        Callback::from(move |target: Page| page.set(target))
    };

    // Sin sesión: login o registro, nada más
    if !auth.is_logged_in() {
        let on_show_register = {
            let show_register = show_register.clone();
            Callback::from(move |_| show_register.set(true))
        };
        let on_back_to_login = {
            let show_register = show_register.clone();
            Callback::from(move |_| show_register.set(false))
        };

        return html! {
            if *show_register {
                <RegisterScreen
                    submitting={*auth.submitting}
                    error={(*auth.error).clone()}
                    on_register={auth.register.clone()}
                    on_back_to_login={on_back_to_login}
                />
            } else {
                <LoginScreen
                    submitting={*auth.submitting}
                    error={(*auth.error).clone()}
                    notice={(*auth.notice).clone()}
                    on_login={auth.login.clone()}
                    on_login_google={auth.login_google.clone()}
                    on_show_register={on_show_register}
                />
            }
        };
    }

    let nav_button = |target: Page, label: &str| -> Html {
        let navigate = navigate.clone();
        let active = *page == target;
        html! {
            <button
                class={if active { "nav-link active" } else { "nav-link" }}
                onclick={Callback::from(move |_| navigate.emit(target))}
            >
                {label}
            </button>
        }
    };

    html! {
        <div class="app-shell">
            <header class="app-header">
                <h1>{"MediVerse"}</h1>
                <nav class="app-nav">
                    { nav_button(Page::Chat, "💬 Chat") }
                    { nav_button(Page::Cart, "🛒 Carrito") }
                    { nav_button(Page::Orders, "📋 Pedidos") }
                    { nav_button(Page::Account, "👤 Cuenta") }
                    <button class="nav-link" onclick={on_logout.reform(|_| ())}>
                        {"⎋ Salir"}
                    </button>
                </nav>
            </header>

            <main class="app-main">
            {
                match *page {
                    Page::Chat => html! {
                        <ChatScreen
                            api={api.clone()}
                            on_unauthorized={on_logout.clone()}
                        />
                    },
                    Page::Cart => html! {
                        <CartScreen
                            api={api.clone()}
                            on_unauthorized={on_logout.clone()}
                            on_navigate={navigate.clone()}
                        />
                    },
                    Page::Checkout => html! {
                        <CheckoutScreen
                            api={api.clone()}
                            on_unauthorized={on_logout.clone()}
                            on_navigate={navigate.clone()}
                        />
                    },
                    Page::Payment => html! {
                        <PaymentScreen
                            api={api.clone()}
                            on_unauthorized={on_logout.clone()}
                            on_navigate={navigate.clone()}
                        />
                    },
                    Page::Orders => html! {
                        <OrdersScreen
                            api={api.clone()}
                            on_unauthorized={on_logout.clone()}
                        />
                    },
                    Page::Account => html! {
                        <AccountScreen
                            user={auth.store.user.clone()}
                            on_back={navigate.reform(|_| Page::Chat)}
                        />
                    },
                }
            }
            </main>
        </div>
    }
}
