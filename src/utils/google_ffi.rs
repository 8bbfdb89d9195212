// ============================================================================
// GOOGLE SIGN-IN FFI - Wrapper para el SDK de identidad de Google
// ============================================================================

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// Abrir el flujo de Google y entregar el access token resultante.
    /// `on_token` recibe el token como string; `on_error` el mensaje de fallo.
    #[wasm_bindgen(js_name = googleSignIn)]
    pub fn google_sign_in(on_token: &js_sys::Function, on_error: &js_sys::Function);
}
