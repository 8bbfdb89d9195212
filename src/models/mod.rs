pub mod auth;
pub mod cart;
pub mod chat;
pub mod medicine;
pub mod order;
pub mod payment;

pub use auth::{LoginRequest, LoginResponse, RegisterRequest, User};
pub use cart::{CartEntry, CartItem};
pub use chat::{ChatMessage, ChatRequest, ChatResponse, DeliveryState, Sender};
pub use medicine::Medicine;
pub use order::{Order, OrderStatus};
pub use payment::{PaymentIntentRequest, PaymentIntentResponse, PaymentVerifyRequest};
