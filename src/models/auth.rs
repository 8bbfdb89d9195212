use serde::{Deserialize, Serialize};

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub date_of_birth: String,
    pub phone_number: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub date_of_birth: String,
    pub phone_number: String,
}

#[derive(Clone, PartialEq, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Clone, PartialEq, Deserialize, Debug)]
pub struct LoginResponse {
    pub access_token: String,
}
