use yew::prelude::*;

use crate::models::{Order, OrderStatus};
use crate::services::ApiClient;

#[derive(Clone, PartialEq)]
pub struct UseOrdersHandle {
    pub orders: UseStateHandle<Vec<Order>>,
    pub loading: UseStateHandle<bool>,
    /// Pedido con cancelación en vuelo; su botón queda deshabilitado.
    pub cancelling: UseStateHandle<Option<String>>,
    pub error: UseStateHandle<Option<String>>,
    pub cancel: Callback<String>,
}

#[hook]
pub fn use_orders(api: ApiClient, on_unauthorized: Callback<()>) -> UseOrdersHandle {
    let orders = use_state(Vec::<Order>::new);
    let loading = use_state(|| true);
    let cancelling = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    // Historial al montar
    {
        let api = api.clone();
        let orders = orders.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_unauthorized = on_unauthorized.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api.order_history().await {
                    Ok(history) => {
                        log::info!("📋 Historial cargado: {} pedidos", history.len());
                        orders.set(history);
                    }
                    Err(e) if e.is_unauthorized() => on_unauthorized.emit(()),
                    Err(e) => {
                        log::error!("❌ Error cargando historial: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    // Cancelación: el backend decide; localmente solo se sobreescribe el
    // estado una vez confirmada. La UI no ofrece cancelar fuera de
    // pending/processing (Order::can_cancel).
    let cancel = {
        let api = api.clone();
        let orders = orders.clone();
        let cancelling = cancelling.clone();
        let error = error.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |order_id: String| {
            if cancelling.is_some() {
                return;
            }
            let cancellable = orders
                .iter()
                .any(|o| o.id == order_id && o.can_cancel());
            if !cancellable {
                return;
            }

            let api = api.clone();
            let orders = orders.clone();
            let cancelling = cancelling.clone();
            let error = error.clone();
            let on_unauthorized = on_unauthorized.clone();

            cancelling.set(Some(order_id.clone()));
            wasm_bindgen_futures::spawn_local(async move {
                match api.cancel_order(&order_id).await {
                    Ok(()) => {
                        log::info!("✅ Pedido cancelado: {}", order_id);
                        let updated: Vec<Order> = orders
                            .iter()
                            .cloned()
                            .map(|mut order| {
                                if order.id == order_id {
                                    order.status = OrderStatus::Cancelled;
                                }
                                order
                            })
                            .collect();
                        orders.set(updated);
                    }
                    Err(e) if e.is_unauthorized() => on_unauthorized.emit(()),
                    Err(e) => {
                        log::error!("❌ No se pudo cancelar {}: {}", order_id, e);
                        error.set(Some(e.to_string()));
                    }
                }
                cancelling.set(None);
            });
        })
    };

    UseOrdersHandle {
        orders,
        loading,
        cancelling,
        error,
        cancel,
    }
}
