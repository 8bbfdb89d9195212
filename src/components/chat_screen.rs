use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::components::{MedicinePanel, PrescriptionModal};
use crate::hooks::{use_cart, use_chat, use_medicines};
use crate::models::{DeliveryState, Sender};
use crate::services::ApiClient;

#[derive(Properties, PartialEq)]
pub struct ChatScreenProps {
    pub api: ApiClient,
    pub on_unauthorized: Callback<()>,
}

#[function_component(ChatScreen)]
pub fn chat_screen(props: &ChatScreenProps) -> Html {
    let medicines = use_medicines();
    let chat = use_chat(
        props.api.clone(),
        medicines.clone(),
        props.on_unauthorized.clone(),
    );
    let cart = use_cart(props.api.clone(), props.on_unauthorized.clone());

    let input_ref = use_node_ref();
    let messages_end_ref = use_node_ref();
    let show_prescription = use_state(|| false);

    // Mantener visible el último mensaje cuando crece el log
    {
        let messages_end_ref = messages_end_ref.clone();
        let count = chat.store.messages().len();
        use_effect_with(count, move |_| {
            Timeout::new(50, move || {
                if let Some(element) = messages_end_ref.cast::<web_sys::Element>() {
                    element.scroll_into_view();
                }
            })
            .forget();
            || ()
        });
    }

    let do_send = {
        let input_ref = input_ref.clone();
        let send = chat.send.clone();
        Callback::from(move |_: ()| {
            if let Some(input) = input_ref.cast::<HtmlInputElement>() {
                let message = input.value();
                if message.trim().is_empty() {
                    return;
                }
                input.set_value("");
                send.emit(message);
            }
        })
    };

    let on_click_send = do_send.reform(|_: MouseEvent| ());
    let on_keypress = {
        let do_send = do_send.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Enter" {
                do_send.emit(());
            }
        })
    };

    // La receta confirmada se envía como mensaje de búsqueda
    let on_prescription_confirm = {
        let send = chat.send.clone();
        let show_prescription = show_prescription.clone();
        Callback::from(move |label: String| {
            show_prescription.set(false);
            send.emit(label);
        })
    };

    let on_panel_add = {
        let add = cart.add.clone();
        Callback::from(move |medicine| add.emit((medicine, 1)))
    };

    let on_panel_close = {
        let show_panel = chat.show_panel.clone();
        Callback::from(move |_| show_panel.set(false))
    };

    let panel_visible = *chat.show_panel && !medicines.store.is_empty();

    html! {
        <div class="chat-screen">
            <div class="chat-main">
                <div class="chat-messages">
                    {
                        for chat.store.messages().iter().map(|msg| {
                            let bubble = match msg.sender {
                                Sender::User => "message user",
                                Sender::Bot => "message bot",
                            };
                            html! {
                                <div class={bubble} key={msg.id.clone()}>
                                    <p>{&msg.content}</p>
                                    if msg.state == DeliveryState::Failed {
                                        <span class="message-failed">{"⚠️ No se pudo enviar"}</span>
                                    }
                                </div>
                            }
                        })
                    }
                    <div ref={messages_end_ref}></div>
                </div>

                if let Some(alert) = &*chat.alert {
                    <div class="chat-alert">{alert}</div>
                }

                <div class="chat-input-row">
                    <input
                        type="text"
                        class="chat-input"
                        placeholder="Escribe tu mensaje..."
                        ref={input_ref}
                        onkeypress={on_keypress}
                    />
                    <button
                        class="btn-send"
                        onclick={on_click_send}
                        disabled={*chat.sending}
                    >
                        {if *chat.sending { "⏳" } else { "Enviar" }}
                    </button>
                    <button
                        class="btn-prescription"
                        onclick={{
                            let show_prescription = show_prescription.clone();
                            Callback::from(move |_| show_prescription.set(true))
                        }}
                    >
                        {"📷 Receta"}
                    </button>
                </div>
            </div>

            if panel_visible {
                <MedicinePanel
                    medicines={medicines.store.medicines().to_vec()}
                    busy_item={(*cart.busy_item).clone()}
                    on_add={on_panel_add}
                    on_dismiss={medicines.remove.clone()}
                    on_clear={medicines.clear.clone()}
                    on_close={on_panel_close}
                />
            }

            if *show_prescription {
                <PrescriptionModal
                    api={props.api.clone()}
                    on_confirm={on_prescription_confirm}
                    on_close={{
                        let show_prescription = show_prescription.clone();
                        Callback::from(move |_| show_prescription.set(false))
                    }}
                />
            }
        </div>
    }
}
