use yew::prelude::*;

use crate::components::Page;
use crate::hooks::use_cart;
use crate::services::ApiClient;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct CartScreenProps {
    pub api: ApiClient,
    pub on_unauthorized: Callback<()>,
    pub on_navigate: Callback<Page>,
}

#[function_component(CartScreen)]
pub fn cart_screen(props: &CartScreenProps) -> Html {
    let cart = use_cart(props.api.clone(), props.on_unauthorized.clone());

    if *cart.loading && cart.store.is_empty() {
        return html! {
            <div class="cart-screen">
                <p class="loading">{"Cargando carrito..."}</p>
            </div>
        };
    }

    if cart.store.is_empty() {
        return html! {
            <div class="cart-screen">
                <div class="cart-empty">
                    <p>{"🛒 Tu carrito está vacío"}</p>
                    <button
                        class="btn-primary"
                        onclick={props.on_navigate.reform(|_| Page::Chat)}
                    >
                        {"Buscar medicamentos"}
                    </button>
                </div>
            </div>
        };
    }

    html! {
        <div class="cart-screen">
            <h2>{"🛒 Carrito"}</h2>

            if let Some(error) = &*cart.error {
                <p class="form-error">{error}</p>
            }

            <div class="cart-list">
                {
                    for cart.store.items().iter().map(|item| {
                        let busy = cart.busy_item.as_deref() == Some(item.id.as_str());
                        let on_decrease = {
                            let change = cart.change_quantity.clone();
                            let id = item.id.clone();
                            let quantity = item.quantity;
                            Callback::from(move |_| {
                                change.emit((id.clone(), quantity.saturating_sub(1)))
                            })
                        };
                        let on_increase = {
                            let change = cart.change_quantity.clone();
                            let id = item.id.clone();
                            let quantity = item.quantity;
                            Callback::from(move |_| change.emit((id.clone(), quantity + 1)))
                        };
                        let on_remove = {
                            let remove = cart.remove.clone();
                            let id = item.id.clone();
                            Callback::from(move |_| remove.emit(id.clone()))
                        };

                        html! {
                            <div class="cart-item" key={item.id.clone()}>
                                if !item.image_url.is_empty() {
                                    <img src={item.image_url.clone()} alt={item.name.clone()} />
                                }
                                <div class="cart-item-info">
                                    <h3>{&item.name}</h3>
                                    <p class="price">{format_price(item.price)}</p>
                                </div>
                                <div class="quantity-stepper">
                                    <button onclick={on_decrease} disabled={busy}>{"−"}</button>
                                    <span class="quantity">{item.quantity}</span>
                                    <button onclick={on_increase} disabled={busy}>{"+"}</button>
                                </div>
                                <p class="subtotal">{format_price(item.subtotal())}</p>
                                <button class="btn-remove" onclick={on_remove} disabled={busy}>
                                    {if busy { "⏳" } else { "🗑" }}
                                </button>
                            </div>
                        }
                    })
                }
            </div>

            <div class="cart-footer">
                <p class="cart-total">
                    {"Total: "}{format_price(cart.store.total())}
                </p>
                <button
                    class="btn-secondary"
                    onclick={props.on_navigate.reform(|_| Page::Chat)}
                >
                    {"Seguir comprando"}
                </button>
                <button
                    class="btn-primary"
                    onclick={props.on_navigate.reform(|_| Page::Checkout)}
                >
                    {"Proceder al pago"}
                </button>
            </div>
        </div>
    }
}
