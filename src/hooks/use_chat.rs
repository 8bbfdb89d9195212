use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::UseMedicinesHandle;
use crate::services::ApiClient;
use crate::stores::ChatStore;

/// Tiempo que la alerta transitoria queda visible antes de borrarse sola.
const ALERT_DISMISS_MS: u32 = 4_000;

#[derive(Clone, PartialEq)]
pub struct UseChatHandle {
    pub store: UseStateHandle<ChatStore>,
    pub sending: UseStateHandle<bool>,
    /// Alerta transitoria de fallo; el log de conversación queda intacto.
    pub alert: UseStateHandle<Option<String>>,
    /// Se activa cuando la respuesta trae candidatos de medicamentos.
    pub show_panel: UseStateHandle<bool>,
    pub send: Callback<String>,
}

#[hook]
pub fn use_chat(
    api: ApiClient,
    medicines: UseMedicinesHandle,
    on_unauthorized: Callback<()>,
) -> UseChatHandle {
    let store = use_state(ChatStore::default);
    let sending = use_state(|| false);
    let alert = use_state(|| None::<String>);
    let show_panel = use_state(|| !medicines.store.is_empty());

    // Por mensaje: enviado → esperando respuesta → entregado | fallido.
    // Sin reintentos: un fallo es terminal para ese intento.
    let send = {
        let api = api.clone();
        let store = store.clone();
        let sending = sending.clone();
        let alert = alert.clone();
        let show_panel = show_panel.clone();
        let medicines = medicines.clone();
        let on_unauthorized = on_unauthorized.clone();

        Callback::from(move |message: String| {
            if *sending {
                return;
            }
            let trimmed = message.trim().to_string();
            if trimmed.is_empty() {
                // La fachada también lo rechazaría, pero ni siquiera
                // registramos el mensaje en el log
                return;
            }

            let api = api.clone();
            let store = store.clone();
            let sending = sending.clone();
            let alert = alert.clone();
            let show_panel = show_panel.clone();
            let medicines = medicines.clone();
            let on_unauthorized = on_unauthorized.clone();

            let mut next = (*store).clone();
            let message_id = next.push_user(trimmed.clone());
            store.set(next.clone());
            sending.set(true);

            wasm_bindgen_futures::spawn_local(async move {
                match api.send_message(&trimmed).await {
                    Ok(response) => {
                        next.mark_delivered(&message_id);
                        if response.is_medicine_search() {
                            log::info!(
                                "💊 Búsqueda de medicamentos: {} candidatos",
                                response.medicines.len()
                            );
                            medicines.add_all.emit(response.medicines.clone());
                            show_panel.set(true);
                        }
                        next.push_bot(response.message);
                        store.set(next);
                    }
                    Err(e) if e.is_unauthorized() => {
                        // Token vencido: sesión fuera y de vuelta al login
                        log::warn!("⚠️ Sesión expirada durante el chat");
                        on_unauthorized.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Error enviando mensaje: {}", e);
                        next.mark_failed(&message_id);
                        store.set(next);

                        alert.set(Some(e.to_string()));
                        let alert = alert.clone();
                        Timeout::new(ALERT_DISMISS_MS, move || {
                            alert.set(None);
                        })
                        .forget();
                    }
                }
                sending.set(false);
            });
        })
    };

    UseChatHandle {
        store,
        sending,
        alert,
        show_panel,
        send,
    }
}
