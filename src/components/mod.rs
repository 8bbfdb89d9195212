pub mod account_screen;
pub mod app;
pub mod cart_screen;
pub mod chat_screen;
pub mod checkout_screen;
pub mod login_screen;
pub mod medicine_panel;
pub mod orders_screen;
pub mod payment_screen;
pub mod prescription_modal;
pub mod register_screen;

pub use account_screen::AccountScreen;
pub use app::{App, Page};
pub use cart_screen::CartScreen;
pub use chat_screen::ChatScreen;
pub use checkout_screen::CheckoutScreen;
pub use login_screen::LoginScreen;
pub use medicine_panel::MedicinePanel;
pub use orders_screen::OrdersScreen;
pub use payment_screen::PaymentScreen;
pub use prescription_modal::PrescriptionModal;
pub use register_screen::RegisterScreen;
