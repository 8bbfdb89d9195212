pub mod use_auth;
pub mod use_cart;
pub mod use_chat;
pub mod use_medicines;
pub mod use_orders;

pub use use_auth::{use_auth, UseAuthHandle};
pub use use_cart::{use_cart, UseCartHandle};
pub use use_chat::{use_chat, UseChatHandle};
pub use use_medicines::{use_medicines, UseMedicinesHandle};
pub use use_orders::{use_orders, UseOrdersHandle};
