use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Tax identifier (CPF/CNPJ).
    pub document: String,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
}

impl NewCustomer {
    #[must_use]
    pub fn new(name: String, email: String, phone: String, document: String) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
            document: document.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateCustomer {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
}

impl UpdateCustomer {
    #[must_use]
    pub fn new(name: String, email: String, phone: String, document: String) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_lowercase(),
            phone: phone.trim().to_string(),
            document: document.trim().to_string(),
        }
    }
}
