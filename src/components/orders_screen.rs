use std::collections::HashSet;

use yew::prelude::*;

use crate::hooks::use_orders;
use crate::services::ApiClient;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct OrdersScreenProps {
    pub api: ApiClient,
    pub on_unauthorized: Callback<()>,
}

#[function_component(OrdersScreen)]
pub fn orders_screen(props: &OrdersScreenProps) -> Html {
    let orders = use_orders(props.api.clone(), props.on_unauthorized.clone());
    let expanded = use_state(HashSet::<String>::new);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |id: String| {
            let mut next = (*expanded).clone();
            if !next.remove(&id) {
                next.insert(id);
            }
            expanded.set(next);
        })
    };

    if *orders.loading {
        return html! {
            <div class="orders-screen">
                <p class="loading">{"Cargando pedidos..."}</p>
            </div>
        };
    }

    html! {
        <div class="orders-screen">
            <h2>{"📋 Mis pedidos"}</h2>

            if let Some(error) = &*orders.error {
                <p class="form-error">{error}</p>
            }

            if orders.orders.is_empty() {
                <p class="orders-empty">{"Todavía no tienes pedidos."}</p>
            } else {
                <div class="orders-list">
                    {
                        for orders.orders.iter().map(|order| {
                            let is_expanded = expanded.contains(&order.id);
                            let is_cancelling =
                                orders.cancelling.as_deref() == Some(order.id.as_str());

                            let on_toggle = {
                                let toggle = toggle.clone();
                                let id = order.id.clone();
                                Callback::from(move |_| toggle.emit(id.clone()))
                            };
                            let on_cancel = {
                                let cancel = orders.cancel.clone();
                                let id = order.id.clone();
                                Callback::from(move |e: MouseEvent| {
                                    e.stop_propagation();
                                    cancel.emit(id.clone());
                                })
                            };

                            html! {
                                <div class="order-card" key={order.id.clone()}>
                                    <div class="order-summary" onclick={on_toggle}>
                                        <span class="order-id">{format!("#{}", order.id)}</span>
                                        <span class="order-date">{&order.created_at}</span>
                                        <span class={classes!("order-status", order.status.css_class())}>
                                            {order.status.label()}
                                        </span>
                                        <span class="order-total">{format_price(order.total)}</span>
                                        <span class="order-chevron">
                                            {if is_expanded { "▲" } else { "▼" }}
                                        </span>
                                    </div>

                                    if is_expanded {
                                        <div class="order-detail">
                                            {
                                                for order.items.iter().map(|item| html! {
                                                    <div class="order-item" key={item.id.clone()}>
                                                        <span>{format!("{} × {}", item.quantity, item.name)}</span>
                                                        <span>{format_price(item.subtotal())}</span>
                                                    </div>
                                                })
                                            }

                                            if order.can_cancel() {
                                                <button
                                                    class="btn-cancel-order"
                                                    onclick={on_cancel}
                                                    disabled={is_cancelling}
                                                >
                                                    {if is_cancelling { "Cancelando..." } else { "Cancelar pedido" }}
                                                </button>
                                            }
                                        </div>
                                    }
                                </div>
                            }
                        })
                    }
                </div>
            }
        </div>
    }
}
