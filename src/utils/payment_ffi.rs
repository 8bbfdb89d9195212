// ============================================================================
// PAYMENT FFI - Foreign Function Interface para JavaScript
// ============================================================================
// Wrappers para el SDK alojado del procesador de pagos - Sin estado, sin lógica
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Montar el formulario de tarjeta del SDK dentro del contenedor dado.
    #[wasm_bindgen(js_name = initPaymentElement)]
    pub fn init_payment_element(container_id: &str, client_secret: &str);

    /// Confirmar el pago con los datos capturados por el SDK.
    /// `on_success` recibe el payment_intent_id confirmado;
    /// `on_error` recibe el mensaje de error del procesador, tal cual.
    #[wasm_bindgen(js_name = confirmCardPayment)]
    pub fn confirm_card_payment(
        client_secret: &str,
        on_success: &js_sys::Function,
        on_error: &js_sys::Function,
    );

    /// Desmontar el formulario (al salir de la página de pago).
    #[wasm_bindgen(js_name = teardownPaymentElement)]
    pub fn teardown_payment_element();
}
