use crate::models::Medicine;

/// Candidatos surgidos de búsquedas del chat, pendientes de acción del
/// usuario (ver / agregar al carrito / descartar). Es un borrador local
/// persistido entre recargas, no un espejo del inventario.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct MedicineStore {
    medicines: Vec<Medicine>,
}

impl MedicineStore {
    pub fn from_medicines(medicines: Vec<Medicine>) -> Self {
        let mut store = Self::default();
        for medicine in medicines {
            store.add(medicine);
        }
        store
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }

    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }

    /// Agregar un candidato. No-op si el `id` ya está presente.
    pub fn add(&mut self, medicine: Medicine) {
        if self.medicines.iter().any(|m| m.id == medicine.id) {
            return;
        }
        self.medicines.push(medicine);
    }

    pub fn remove(&mut self, id: &str) {
        self.medicines.retain(|m| m.id != id);
    }

    pub fn clear(&mut self) {
        self.medicines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn medicine(id: &str) -> Medicine {
        Medicine {
            id: id.into(),
            name: format!("Med {}", id),
            pack_size_label: "10 tabletas".into(),
            price: 12.0,
            image_url: String::new(),
        }
    }

    #[test]
    fn test_add_dedupes_by_id() {
        let mut store = MedicineStore::default();
        store.add(medicine("m1"));
        store.add(medicine("m1"));
        store.add(medicine("m2"));
        assert_eq!(store.medicines().len(), 2);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut store =
            MedicineStore::from_medicines(vec![medicine("m1"), medicine("m2"), medicine("m1")]);
        assert_eq!(store.medicines().len(), 2);

        store.remove("m1");
        assert_eq!(store.medicines().len(), 1);
        assert_eq!(store.medicines()[0].id, "m2");

        store.clear();
        assert!(store.is_empty());
    }
}
