use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct PaymentIntentRequest {
    pub amount: f64,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct PaymentIntentResponse {
    pub client_secret: String,
    pub payment_intent_id: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct PaymentVerifyRequest {
    pub payment_intent_id: String,
}
