use yew::prelude::*;

use crate::models::Medicine;
use crate::stores::MedicineStore;
use crate::utils::{load_from_storage, save_to_storage, STORAGE_KEY_MEDICINES};

/// Borrador de medicamentos sugeridos por el chat. Persistido entre
/// recargas; sin espejo en el backend.
#[derive(Clone, PartialEq)]
pub struct UseMedicinesHandle {
    pub store: UseStateHandle<MedicineStore>,
    pub add_all: Callback<Vec<Medicine>>,
    pub remove: Callback<String>,
    pub clear: Callback<()>,
}

#[hook]
pub fn use_medicines() -> UseMedicinesHandle {
    let store = use_state(|| {
        let saved: Vec<Medicine> =
            load_from_storage(STORAGE_KEY_MEDICINES).unwrap_or_default();
        MedicineStore::from_medicines(saved)
    });

    // Persistencia como observador: cada cambio del store se refleja en
    // localStorage, fuera de las mutaciones mismas.
    {
        let snapshot = (*store).clone();
        use_effect_with(snapshot, move |store| {
            if let Err(e) = save_to_storage(STORAGE_KEY_MEDICINES, &store.medicines().to_vec()) {
                log::error!("❌ No se pudieron persistir los medicamentos: {}", e);
            }
            || ()
        });
    }

    let add_all = {
        let store = store.clone();
        Callback::from(move |medicines: Vec<Medicine>| {
            let mut next = (*store).clone();
            for medicine in medicines {
                next.add(medicine);
            }
            store.set(next);
        })
    };

    let remove = {
        let store = store.clone();
        Callback::from(move |id: String| {
            let mut next = (*store).clone();
            next.remove(&id);
            store.set(next);
        })
    };

    let clear = {
        let store = store.clone();
        Callback::from(move |_| {
            store.set(MedicineStore::default());
        })
    };

    UseMedicinesHandle {
        store,
        add_all,
        remove,
        clear,
    }
}
