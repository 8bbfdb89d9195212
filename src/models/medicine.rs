use serde::{Deserialize, Serialize};

/// Medicamento sugerido por una búsqueda del chat.
/// Es un candidato transitorio: no está relacionado con el carrito
/// hasta que el usuario lo agrega explícitamente (POST /cart).
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Medicine {
    pub id: String,
    pub name: String,
    pub pack_size_label: String,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}
