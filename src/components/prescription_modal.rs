use web_sys::{HtmlInputElement, Url};
use yew::prelude::*;

use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct PrescriptionModalProps {
    pub api: ApiClient,
    /// Nombre confirmado por el usuario; el chat lo envía como búsqueda.
    pub on_confirm: Callback<String>,
    pub on_close: Callback<()>,
}

/// Reconocimiento de recetas escritas a mano. El resultado nunca se usa
/// directo: el usuario lo confirma o lo rechaza antes de buscar.
#[function_component(PrescriptionModal)]
pub fn prescription_modal(props: &PrescriptionModalProps) -> Html {
    let file_ref = use_node_ref();
    let preview_url = use_state(|| None::<String>);
    let predicted = use_state(|| None::<String>);
    let recognizing = use_state(|| false);
    let error = use_state(|| None::<String>);

    let on_file_change = {
        let file_ref = file_ref.clone();
        let preview_url = preview_url.clone();
        let predicted = predicted.clone();
        let error = error.clone();

        Callback::from(move |_: Event| {
            let Some(input) = file_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            // Una imagen nueva invalida la predicción anterior
            predicted.set(None);
            error.set(None);
            match Url::create_object_url_with_blob(&file) {
                Ok(url) => preview_url.set(Some(url)),
                Err(_) => preview_url.set(None),
            }
        })
    };

    let on_recognize = {
        let api = props.api.clone();
        let file_ref = file_ref.clone();
        let predicted = predicted.clone();
        let recognizing = recognizing.clone();
        let error = error.clone();

        Callback::from(move |_: MouseEvent| {
            if *recognizing {
                return;
            }
            let Some(input) = file_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let Some(file) = input.files().and_then(|list| list.get(0)) else {
                error.set(Some("Selecciona una imagen primero".into()));
                return;
            };

            let api = api.clone();
            let predicted = predicted.clone();
            let recognizing = recognizing.clone();
            let error = error.clone();

            recognizing.set(true);
            error.set(None);
            wasm_bindgen_futures::spawn_local(async move {
                match api.recognize(&file).await {
                    Ok(label) => {
                        log::info!("📋 Receta reconocida: {}", label);
                        predicted.set(Some(label));
                    }
                    Err(e) => {
                        log::error!("❌ Reconocimiento falló: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                recognizing.set(false);
            });
        })
    };

    let on_confirm = {
        let predicted = predicted.clone();
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(label) = (*predicted).clone() {
                on_confirm.emit(label);
            }
        })
    };

    let on_reject = {
        let predicted = predicted.clone();
        Callback::from(move |_: MouseEvent| predicted.set(None))
    };

    html! {
        <div class="modal-overlay">
            <div class="modal prescription-modal">
                <div class="modal-header">
                    <h2>{"📷 Subir receta"}</h2>
                    <button class="btn-close" onclick={props.on_close.reform(|_| ())}>
                        {"✕"}
                    </button>
                </div>

                <div class="modal-body">
                    <input
                        type="file"
                        accept="image/*"
                        ref={file_ref}
                        onchange={on_file_change}
                    />

                    if let Some(url) = &*preview_url {
                        <img class="prescription-preview" src={url.clone()} alt="Receta" />
                    }

                    if let Some(error) = &*error {
                        <p class="form-error">{error}</p>
                    }

                    if let Some(label) = &*predicted {
                        <div class="prediction-result">
                            <p>{"¿Buscar este medicamento?"}</p>
                            <p class="predicted-label">{label}</p>
                            <div class="prediction-actions">
                                <button class="btn-confirm" onclick={on_confirm}>
                                    {"✅ Sí, buscar"}
                                </button>
                                <button class="btn-reject" onclick={on_reject}>
                                    {"❌ No es correcto"}
                                </button>
                            </div>
                        </div>
                    } else {
                        <button
                            class="btn-recognize"
                            onclick={on_recognize}
                            disabled={*recognizing}
                        >
                            {if *recognizing { "Reconociendo..." } else { "Reconocer" }}
                        </button>
                    }
                </div>
            </div>
        </div>
    }
}
