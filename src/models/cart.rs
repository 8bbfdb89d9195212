use serde::{Deserialize, Serialize};

/// Ítem del carrito en la forma que usa la UI.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Entrada del carrito tal como la devuelve GET /cart.
/// El backend nombra los campos con el prefijo medicine_*.
#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct CartEntry {
    pub medicine_id: String,
    pub medicine_name: String,
    pub quantity: u32,
    pub price: f64,
    #[serde(default)]
    pub image_url: String,
}

impl From<CartEntry> for CartItem {
    fn from(entry: CartEntry) -> Self {
        Self {
            id: entry.medicine_id,
            name: entry.medicine_name,
            quantity: entry.quantity,
            price: entry.price,
            image_url: entry.image_url,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_entry_maps_to_cart_item() {
        let json = r#"{
            "medicine_id": "m1",
            "medicine_name": "Paracetamol 500mg",
            "quantity": 2,
            "price": 35.5,
            "image_url": "https://cdn.example.com/m1.jpg"
        }"#;
        let entry: CartEntry = serde_json::from_str(json).unwrap();
        let item: CartItem = entry.into();
        assert_eq!(item.id, "m1");
        assert_eq!(item.name, "Paracetamol 500mg");
        assert_eq!(item.quantity, 2);
        assert_eq!(item.subtotal(), 71.0);
    }

    #[test]
    fn test_entry_without_image_url() {
        let json = r#"{"medicine_id":"m2","medicine_name":"Ibuprofeno","quantity":1,"price":12.0}"#;
        let entry: CartEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.image_url, "");
    }
}
