// ============================================================================
// STORES - Estado puro, sin efectos
// ============================================================================
// Cada store es un struct plano con operaciones de mutación puras. La
// persistencia en localStorage y las llamadas HTTP viven en los hooks
// (src/hooks), que observan los cambios y disparan los efectos. Así el
// estado se puede testear sin navegador ni backend.
// ============================================================================

pub mod auth_store;
pub mod cart_store;
pub mod chat_store;
pub mod medicine_store;

pub use auth_store::AuthStore;
pub use cart_store::CartStore;
pub use chat_store::ChatStore;
pub use medicine_store::MedicineStore;
