use yew::prelude::*;

use crate::models::Medicine;
use crate::utils::format_price;

#[derive(Properties, PartialEq)]
pub struct MedicinePanelProps {
    pub medicines: Vec<Medicine>,
    /// Ítem con alta en vuelo; su botón queda deshabilitado mientras tanto.
    pub busy_item: Option<String>,
    pub on_add: Callback<Medicine>,
    pub on_dismiss: Callback<String>,
    pub on_clear: Callback<()>,
    pub on_close: Callback<()>,
}

/// Panel lateral con los medicamentos que sugirió el asistente. Descartar
/// una tarjeta no toca el carrito; solo saca el candidato del borrador.
#[function_component(MedicinePanel)]
pub fn medicine_panel(props: &MedicinePanelProps) -> Html {
    html! {
        <aside class="medicine-panel">
            <div class="panel-header">
                <h2>{"💊 Sugerencias"}</h2>
                <button class="btn-close" onclick={props.on_close.reform(|_| ())}>
                    {"✕"}
                </button>
            </div>

            <div class="panel-list">
                {
                    for props.medicines.iter().map(|medicine| {
                        let busy = props.busy_item.as_deref() == Some(medicine.id.as_str());
                        let on_add = {
                            let on_add = props.on_add.clone();
                            let medicine = medicine.clone();
                            Callback::from(move |_| on_add.emit(medicine.clone()))
                        };
                        let on_dismiss = {
                            let on_dismiss = props.on_dismiss.clone();
                            let id = medicine.id.clone();
                            Callback::from(move |_| on_dismiss.emit(id.clone()))
                        };

                        html! {
                            <div class="medicine-card" key={medicine.id.clone()}>
                                if !medicine.image_url.is_empty() {
                                    <img src={medicine.image_url.clone()} alt={medicine.name.clone()} />
                                }
                                <div class="medicine-info">
                                    <h3>{&medicine.name}</h3>
                                    if !medicine.pack_size_label.is_empty() {
                                        <p class="pack-size">{&medicine.pack_size_label}</p>
                                    }
                                    <p class="price">{format_price(medicine.price)}</p>
                                </div>
                                <div class="medicine-actions">
                                    <button class="btn-add" onclick={on_add} disabled={busy}>
                                        {if busy { "⏳" } else { "🛒 Agregar" }}
                                    </button>
                                    <button class="btn-dismiss" onclick={on_dismiss}>
                                        {"Descartar"}
                                    </button>
                                </div>
                            </div>
                        }
                    })
                }
            </div>

            <button class="btn-clear-panel" onclick={props.on_clear.reform(|_| ())}>
                {"Limpiar sugerencias"}
            </button>
        </aside>
    }
}
