use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use yew::prelude::*;

use crate::components::Page;
use crate::hooks::use_cart;
use crate::models::PaymentIntentResponse;
use crate::services::ApiClient;
use crate::utils::format_price;
use crate::utils::payment_ffi::{
    confirm_card_payment, init_payment_element, teardown_payment_element,
};

const PAYMENT_CONTAINER_ID: &str = "payment-element";

#[derive(Properties, PartialEq)]
pub struct PaymentScreenProps {
    pub api: ApiClient,
    pub on_unauthorized: Callback<()>,
    pub on_navigate: Callback<Page>,
}

/// Pago con el SDK alojado. El carrito queda intacto hasta que el backend
/// verifica el pago y confirma el pedido; recién ahí se vacía el espejo
/// local y se navega al historial.
#[function_component(PaymentScreen)]
pub fn payment_screen(props: &PaymentScreenProps) -> Html {
    let cart = use_cart(props.api.clone(), props.on_unauthorized.clone());

    let intent = use_state(|| None::<PaymentIntentResponse>);
    let processing = use_state(|| false);
    let error = use_state(|| None::<String>);

    let total = cart.store.total();

    // Crear el intent una sola vez, cuando el total ya está sincronizado
    {
        let api = props.api.clone();
        let intent = intent.clone();
        let error = error.clone();
        let on_unauthorized = props.on_unauthorized.clone();

        use_effect_with(total, move |&total| {
            if total > 0.0 && intent.is_none() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api.payment_intent(total).await {
                        Ok(response) => {
                            init_payment_element(PAYMENT_CONTAINER_ID, &response.client_secret);
                            intent.set(Some(response));
                        }
                        Err(e) if e.is_unauthorized() => on_unauthorized.emit(()),
                        Err(e) => {
                            log::error!("❌ No se pudo crear el intent de pago: {}", e);
                            error.set(Some(e.to_string()));
                        }
                    }
                });
            }
            || ()
        });
    }

    // El widget del SDK se desmonta junto con la pantalla
    use_effect_with((), |_| || teardown_payment_element());

    let on_pay = {
        let api = props.api.clone();
        let intent = intent.clone();
        let processing = processing.clone();
        let error = error.clone();
        let clear_local = cart.clear_local.clone();
        let on_navigate = props.on_navigate.clone();
        let on_unauthorized = props.on_unauthorized.clone();

        Callback::from(move |_: MouseEvent| {
            if *processing {
                return;
            }
            let Some(intent) = (*intent).clone() else {
                return;
            };

            processing.set(true);
            error.set(None);

            // Éxito del SDK: verificar en el backend, confirmar el pedido
            // y recién entonces vaciar el carrito local
            let on_success = {
                let api = api.clone();
                let processing = processing.clone();
                let error = error.clone();
                let clear_local = clear_local.clone();
                let on_navigate = on_navigate.clone();
                let on_unauthorized = on_unauthorized.clone();
                let payment_intent_id = intent.payment_intent_id.clone();

                Closure::wrap(Box::new(move |_: JsValue| {
                    let api = api.clone();
                    let processing = processing.clone();
                    let error = error.clone();
                    let clear_local = clear_local.clone();
                    let on_navigate = on_navigate.clone();
                    let on_unauthorized = on_unauthorized.clone();
                    let payment_intent_id = payment_intent_id.clone();

                    wasm_bindgen_futures::spawn_local(async move {
                        let result = async {
                            api.payment_verify(&payment_intent_id).await?;
                            api.checkout().await
                        }
                        .await;

                        match result {
                            Ok(()) => {
                                log::info!("✅ Pago verificado y pedido confirmado");
                                clear_local.emit(());
                                on_navigate.emit(Page::Orders);
                            }
                            Err(e) if e.is_unauthorized() => on_unauthorized.emit(()),
                            Err(e) => {
                                log::error!("❌ Verificación de pago falló: {}", e);
                                error.set(Some(e.to_string()));
                            }
                        }
                        processing.set(false);
                    });
                }) as Box<dyn FnMut(JsValue)>)
            };

            // Fallo del SDK: mensaje tal cual y el carrito sin tocar
            let on_error = {
                let processing = processing.clone();
                let error = error.clone();

                Closure::wrap(Box::new(move |err: JsValue| {
                    let message = err
                        .as_string()
                        .unwrap_or_else(|| "El pago fue rechazado".to_string());
                    log::error!("❌ Pago rechazado: {}", message);
                    error.set(Some(message));
                    processing.set(false);
                }) as Box<dyn FnMut(JsValue)>)
            };

            confirm_card_payment(
                &intent.client_secret,
                on_success.as_ref().unchecked_ref(),
                on_error.as_ref().unchecked_ref(),
            );
            on_success.forget();
            on_error.forget();
        })
    };

    html! {
        <div class="payment-screen">
            <h2>{"Pago"}</h2>
            <p class="payment-total">
                {"Total a pagar: "}{format_price(total)}
            </p>

            <div id={PAYMENT_CONTAINER_ID} class="payment-element"></div>

            if let Some(error) = &*error {
                <p class="form-error">{error}</p>
            }

            <div class="payment-actions">
                <button
                    class="btn-secondary"
                    onclick={props.on_navigate.reform(|_| Page::Checkout)}
                    disabled={*processing}
                >
                    {"Volver"}
                </button>
                <button
                    class="btn-primary"
                    onclick={on_pay}
                    disabled={*processing || intent.is_none()}
                >
                    {if *processing { "Procesando..." } else { "Pagar ahora" }}
                </button>
            </div>
        </div>
    }
}
