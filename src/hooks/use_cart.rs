use yew::prelude::*;

use crate::models::{CartItem, Medicine};
use crate::services::{ApiClient, ApiError};
use crate::stores::CartStore;

#[derive(Clone, PartialEq)]
pub struct UseCartHandle {
    pub store: UseStateHandle<CartStore>,
    pub loading: UseStateHandle<bool>,
    /// Ítem con petición en vuelo. Mientras está ocupado, los controles de
    /// ese ítem se deshabilitan: así se suprimen los dobles clics sin
    /// necesitar claves de idempotencia en el backend.
    pub busy_item: UseStateHandle<Option<String>>,
    pub error: UseStateHandle<Option<String>>,
    pub refresh: Callback<()>,
    pub add: Callback<(Medicine, u32)>,
    pub remove: Callback<String>,
    pub change_quantity: Callback<(String, u32)>,
    pub clear_local: Callback<()>,
}

fn report(
    err: ApiError,
    error: &UseStateHandle<Option<String>>,
    on_unauthorized: &Callback<()>,
) {
    log::error!("❌ Carrito: {}", err);
    if err.is_unauthorized() {
        on_unauthorized.emit(());
    } else {
        error.set(Some(err.to_string()));
    }
}

async fn fetch_into(
    api: &ApiClient,
    store: &UseStateHandle<CartStore>,
) -> Result<(), ApiError> {
    let fetched = api
        .cart_get()
        .await
        .map(|entries| entries.into_iter().map(CartItem::from).collect::<Vec<_>>());

    // apply_fetch solo reemplaza ante Ok; con Err el handle no se toca
    let mut next = (**store).clone();
    next.apply_fetch(fetched)?;
    log::info!("🛒 Carrito sincronizado: {} ítems", next.len());
    store.set(next);
    Ok(())
}

#[hook]
pub fn use_cart(api: ApiClient, on_unauthorized: Callback<()>) -> UseCartHandle {
    let store = use_state(CartStore::default);
    let loading = use_state(|| false);
    let busy_item = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);

    // Cargar el carrito del backend al montar
    {
        let api = api.clone();
        let store = store.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_unauthorized = on_unauthorized.clone();

        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                // Un fetch fallido deja el estado previo intacto
                if let Err(e) = fetch_into(&api, &store).await {
                    report(e, &error, &on_unauthorized);
                }
                loading.set(false);
            });
            || ()
        });
    }

    let refresh = {
        let api = api.clone();
        let store = store.clone();
        let loading = loading.clone();
        let error = error.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |_| {
            let api = api.clone();
            let store = store.clone();
            let loading = loading.clone();
            let error = error.clone();
            let on_unauthorized = on_unauthorized.clone();

            wasm_bindgen_futures::spawn_local(async move {
                loading.set(true);
                if let Err(e) = fetch_into(&api, &store).await {
                    report(e, &error, &on_unauthorized);
                }
                loading.set(false);
            });
        })
    };

    // Alta canónica: POST /cart seguido de refresh. El merge local solo
    // cubre la ventana entre ambos para que la UI responda al instante.
    let add = {
        let api = api.clone();
        let store = store.clone();
        let busy_item = busy_item.clone();
        let error = error.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |(medicine, quantity): (Medicine, u32)| {
            if busy_item.is_some() {
                return;
            }
            let api = api.clone();
            let store = store.clone();
            let busy_item = busy_item.clone();
            let error = error.clone();
            let on_unauthorized = on_unauthorized.clone();

            busy_item.set(Some(medicine.id.clone()));
            let optimistic = CartItem {
                id: medicine.id.clone(),
                name: medicine.name.clone(),
                quantity: quantity.max(1),
                price: medicine.price,
                image_url: medicine.image_url.clone(),
            };
            let mut next = (*store).clone();
            next.merge_item(optimistic);
            store.set(next);

            wasm_bindgen_futures::spawn_local(async move {
                match api.cart_add(&medicine.id, quantity.max(1)).await {
                    Ok(()) => {
                        log::info!("✅ Agregado al carrito: {}", medicine.name);
                        if let Err(e) = fetch_into(&api, &store).await {
                            report(e, &error, &on_unauthorized);
                        }
                    }
                    Err(e) => {
                        report(e, &error, &on_unauthorized);
                        // Revertir el merge optimista con el estado del servidor
                        let _ = fetch_into(&api, &store).await;
                    }
                }
                busy_item.set(None);
            });
        })
    };

    // Baja: primero el backend; solo ante éxito se quita el ítem local
    let remove = {
        let api = api.clone();
        let store = store.clone();
        let busy_item = busy_item.clone();
        let error = error.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |id: String| {
            if busy_item.is_some() {
                return;
            }
            let api = api.clone();
            let store = store.clone();
            let busy_item = busy_item.clone();
            let error = error.clone();
            let on_unauthorized = on_unauthorized.clone();

            busy_item.set(Some(id.clone()));
            wasm_bindgen_futures::spawn_local(async move {
                let mut next = (*store).clone();
                match next.apply_removal(&id, api.cart_delete(&id).await) {
                    Ok(()) => store.set(next),
                    Err(e) => report(e, &error, &on_unauthorized),
                }
                busy_item.set(None);
            });
        })
    };

    // Cambio de cantidad confirmado contra el backend con los dos endpoints
    // disponibles: subir = POST /cart con el delta; bajar = DELETE + POST
    // con la cantidad final; 0 = eliminación. La mutación local es solo el
    // adelanto optimista y el refresh final la reconcilia.
    let change_quantity = {
        let api = api.clone();
        let store = store.clone();
        let busy_item = busy_item.clone();
        let error = error.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |(id, quantity): (String, u32)| {
            if busy_item.is_some() {
                return;
            }
            let Some(current) = store.get(&id).map(|item| item.quantity) else {
                return;
            };
            if quantity == current {
                return;
            }

            let api = api.clone();
            let store = store.clone();
            let busy_item = busy_item.clone();
            let error = error.clone();
            let on_unauthorized = on_unauthorized.clone();

            busy_item.set(Some(id.clone()));

            if quantity > 0 {
                let mut next = (*store).clone();
                next.set_quantity(&id, quantity);
                store.set(next);
            }

            wasm_bindgen_futures::spawn_local(async move {
                let result = if quantity == 0 {
                    api.cart_delete(&id).await
                } else if quantity > current {
                    api.cart_add(&id, quantity - current).await
                } else {
                    match api.cart_delete(&id).await {
                        Ok(()) => api.cart_add(&id, quantity).await,
                        Err(e) => Err(e),
                    }
                };

                match result {
                    Ok(()) => {
                        if quantity == 0 {
                            let mut next = (*store).clone();
                            next.remove_item(&id);
                            store.set(next);
                        }
                        if let Err(e) = fetch_into(&api, &store).await {
                            report(e, &error, &on_unauthorized);
                        }
                    }
                    Err(e) => {
                        report(e, &error, &on_unauthorized);
                        // Reconciliar con el servidor tras el fallo
                        let _ = fetch_into(&api, &store).await;
                    }
                }
                busy_item.set(None);
            });
        })
    };

    // Vaciar solo el espejo local (tras un pago confirmado)
    let clear_local = {
        let store = store.clone();
        Callback::from(move |_| {
            let mut next = (*store).clone();
            next.clear();
            store.set(next);
        })
    };

    UseCartHandle {
        store,
        loading,
        busy_item,
        error,
        refresh,
        add,
        remove,
        change_quantity,
        clear_local,
    }
}
