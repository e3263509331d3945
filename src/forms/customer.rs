use serde::Deserialize;
use validator::Validate;

use crate::domain::customer::{NewCustomer, UpdateCustomer};

#[derive(Deserialize, Validate)]
/// Form data for creating or updating a customer.
pub struct CustomerForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    /// Tax identifier (CPF/CNPJ).
    #[validate(length(min = 1, message = "Tax id is required"))]
    pub document: String,
}

impl From<&CustomerForm> for NewCustomer {
    fn from(form: &CustomerForm) -> Self {
        NewCustomer::new(
            form.name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.document.clone(),
        )
    }
}

impl From<&CustomerForm> for UpdateCustomer {
    fn from(form: &CustomerForm) -> Self {
        UpdateCustomer::new(
            form.name.clone(),
            form.email.clone(),
            form.phone.clone(),
            form.document.clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::collect_errors;

    #[test]
    fn rejects_missing_fields_with_all_messages() {
        let form = CustomerForm {
            name: String::new(),
            email: "invalid".to_string(),
            phone: String::new(),
            document: String::new(),
        };
        let errors = form.validate().unwrap_err();
        let message = collect_errors(&errors);
        assert!(message.contains("Name is required"));
        assert!(message.contains("Invalid email"));
        assert!(message.contains("Phone is required"));
        assert!(message.contains("Tax id is required"));
    }

    #[test]
    fn accepts_valid_customer() {
        let form = CustomerForm {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
            phone: "555-0100".to_string(),
            document: "123.456.789-00".to_string(),
        };
        assert!(form.validate().is_ok());
    }
}
