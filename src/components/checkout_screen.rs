use yew::prelude::*;

use crate::components::Page;
use crate::hooks::use_cart;
use crate::services::ApiClient;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct CheckoutScreenProps {
    pub api: ApiClient,
    pub on_unauthorized: Callback<()>,
    pub on_navigate: Callback<Page>,
}

/// Resumen previo al pago. No muta nada: el pedido se crea recién cuando
/// el pago queda verificado.
#[function_component(CheckoutScreen)]
pub fn checkout_screen(props: &CheckoutScreenProps) -> Html {
    let cart = use_cart(props.api.clone(), props.on_unauthorized.clone());

    if cart.store.is_empty() && !*cart.loading {
        return html! {
            <div class="checkout-screen">
                <p>{"No hay nada que pagar."}</p>
                <button
                    class="btn-primary"
                    onclick={props.on_navigate.reform(|_| Page::Chat)}
                >
                    {"Volver al chat"}
                </button>
            </div>
        };
    }

    html! {
        <div class="checkout-screen">
            <h2>{"Resumen del pedido"}</h2>

            <div class="checkout-list">
                {
                    for cart.store.items().iter().map(|item| html! {
                        <div class="checkout-item" key={item.id.clone()}>
                            <span class="item-name">
                                {format!("{} × {}", item.quantity, item.name)}
                            </span>
                            <span class="item-subtotal">{format_price(item.subtotal())}</span>
                        </div>
                    })
                }
            </div>

            <p class="checkout-total">
                {"Total: "}{format_price(cart.store.total())}
            </p>

            <div class="checkout-actions">
                <button
                    class="btn-secondary"
                    onclick={props.on_navigate.reform(|_| Page::Cart)}
                >
                    {"Editar carrito"}
                </button>
                <button
                    class="btn-primary"
                    onclick={props.on_navigate.reform(|_| Page::Payment)}
                >
                    {"Pagar"}
                </button>
            </div>
        </div>
    }
}
