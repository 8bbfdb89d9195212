use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Guardar un valor serializable como JSON bajo `key`.
pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    let json = serde_json::to_string(value)
        .map_err(|e| format!("Error serializando datos: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Guardar una cadena tal cual (sin envolver en JSON). Usado para el token,
/// que el backend emite y consume como texto plano.
pub fn save_raw(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Error guardando en localStorage".to_string())?;
    Ok(())
}

pub fn load_raw(key: &str) -> Option<String> {
    get_local_storage()?.get_item(key).ok()?
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("No se pudo acceder a localStorage")?;
    storage
        .remove_item(key)
        .map_err(|_| "Error eliminando de localStorage".to_string())?;
    Ok(())
}

// Estos helpers tocan localStorage de verdad, así que solo se prueban
// bajo wasm (wasm-pack test / cargo test --target wasm32-unknown-unknown).
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn raw_value_survives_save_and_removal_clears_it() {
        save_raw("test_token", "T123").unwrap();
        assert_eq!(load_raw("test_token").as_deref(), Some("T123"));

        remove_from_storage("test_token").unwrap();
        assert_eq!(load_raw("test_token"), None);
    }

    #[wasm_bindgen_test]
    fn typed_load_on_missing_key_is_none() {
        remove_from_storage("test_missing").unwrap();
        let missing: Option<Vec<String>> = load_from_storage("test_missing");
        assert!(missing.is_none());
    }

    #[wasm_bindgen_test]
    fn corrupt_json_loads_as_none() {
        save_raw("test_bad", "{no es json").unwrap();
        let loaded: Option<Vec<String>> = load_from_storage("test_bad");
        assert!(loaded.is_none());
        remove_from_storage("test_bad").unwrap();
    }

    #[wasm_bindgen_test]
    fn json_values_survive_save_and_load() {
        let medicines = vec!["m1".to_string(), "m2".to_string()];
        save_to_storage("test_meds", &medicines).unwrap();

        let loaded: Vec<String> = load_from_storage("test_meds").unwrap();
        assert_eq!(loaded, medicines);
        remove_from_storage("test_meds").unwrap();
    }
}
