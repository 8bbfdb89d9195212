use crate::models::CartItem;

/// Espejo local del carrito del servidor.
///
/// El estado autoritativo es siempre lo último que devolvió GET /cart
/// (`replace_items`); las demás mutaciones son optimistas y pueden quedar
/// superadas por el siguiente fetch. Los ítems son únicos por `id`.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
}

impl CartStore {
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Reemplazar la secuencia completa con la respuesta del backend.
    /// Solo se llama con un fetch exitoso: un fetch fallido no toca nada.
    pub fn replace_items(&mut self, items: Vec<CartItem>) {
        self.items = items;
    }

    /// Aplicar el resultado de GET /cart: reemplaza solo ante `Ok`.
    /// Un fetch fallido deja el estado previo intacto y propaga el error.
    pub fn apply_fetch<E>(&mut self, fetched: Result<Vec<CartItem>, E>) -> Result<(), E> {
        self.replace_items(fetched?);
        Ok(())
    }

    /// Aplicar el resultado de DELETE /cart/:id: el ítem local desaparece
    /// solo si el backend confirmó la baja.
    pub fn apply_removal<E>(&mut self, id: &str, outcome: Result<(), E>) -> Result<(), E> {
        outcome?;
        self.remove_item(id);
        Ok(())
    }

    /// Alta optimista: si el `id` ya existe, suma cantidades en la entrada
    /// existente; si no, agrega al final. El alta canónica es POST /cart
    /// seguido de un refresh.
    pub fn merge_item(&mut self, item: CartItem) {
        match self.items.iter_mut().find(|i| i.id == item.id) {
            Some(existing) => existing.quantity += item.quantity,
            None => self.items.push(item),
        }
    }

    /// Baja local. Se aplica solo después de que DELETE /cart/:id respondió OK.
    pub fn remove_item(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }

    /// Cambio de cantidad optimista. La cantidad 0 no es válida aquí:
    /// se fija a mínimo 1 y la eliminación pasa por `remove_item`.
    pub fn set_quantity(&mut self, id: &str, quantity: u32) {
        if let Some(item) = self.items.iter_mut().find(|i| i.id == id) {
            item.quantity = quantity.max(1);
        }
    }

    /// Vaciar incondicionalmente. Usado tras un pago exitoso.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn total(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::ApiError;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: id.into(),
            name: format!("Medicamento {}", id),
            quantity,
            price,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_merge_same_id_sums_quantities() {
        let mut cart = CartStore::default();
        cart.merge_item(item("a", 10.0, 2));
        cart.merge_item(item("a", 10.0, 3));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get("a").unwrap().quantity, 5);
    }

    #[test]
    fn test_merge_distinct_ids_appends() {
        let mut cart = CartStore::default();
        cart.merge_item(item("a", 10.0, 1));
        cart.merge_item(item("b", 5.0, 1));
        assert_eq!(cart.len(), 2);
    }

    #[test]
    fn test_failed_fetch_leaves_items_untouched() {
        let mut cart = CartStore::default();
        cart.merge_item(item("a", 10.0, 2));
        let before = cart.clone();

        let outcome = cart.apply_fetch(Err::<Vec<CartItem>, _>(ApiError::Network(
            "network down".into(),
        )));
        assert!(outcome.is_err());
        assert_eq!(cart, before);

        // Con Ok sí reemplaza, al por mayor
        cart.apply_fetch(Ok::<_, ApiError>(vec![item("b", 1.0, 1)]))
            .unwrap();
        assert_eq!(cart.len(), 1);
        assert!(cart.get("a").is_none());
        assert!(cart.get("b").is_some());
    }

    #[test]
    fn test_remove_only_after_backend_success() {
        let mut cart = CartStore::default();
        cart.merge_item(item("a", 10.0, 2));
        let before = cart.clone();

        // DELETE falló: el ítem se conserva y el error se propaga.
        let failed = cart.apply_removal(
            "a",
            Err(ApiError::Backend {
                status: 500,
                message: "boom".into(),
            }),
        );
        assert!(failed.is_err());
        assert_eq!(cart, before);

        // DELETE OK: ahora sí desaparece.
        cart.apply_removal("a", Ok::<_, ApiError>(())).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_total() {
        let mut cart = CartStore::default();
        cart.merge_item(item("m1", 10.0, 2));
        cart.merge_item(item("m2", 5.0, 1));
        assert_eq!(cart.total(), 25.0);
    }

    #[test]
    fn test_set_quantity_clamps_to_one() {
        let mut cart = CartStore::default();
        cart.merge_item(item("a", 10.0, 3));

        cart.set_quantity("a", 7);
        assert_eq!(cart.get("a").unwrap().quantity, 7);

        // 0 no es una cantidad válida: queda en 1, eliminar es remove_item
        cart.set_quantity("a", 0);
        assert_eq!(cart.get("a").unwrap().quantity, 1);

        // id inexistente: no-op
        cart.set_quantity("zzz", 4);
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut cart = CartStore::default();
        cart.merge_item(item("a", 10.0, 2));
        cart.replace_items(vec![item("b", 1.0, 1)]);
        assert!(cart.get("a").is_none());
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartStore::default();
        cart.merge_item(item("a", 10.0, 2));
        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.total(), 0.0);
    }
}
