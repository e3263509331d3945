use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::domain::product::{NewProduct, ProductKind, UpdateProduct};

fn validate_kind(kind: &str) -> Result<(), ValidationError> {
    kind.parse::<ProductKind>().map(|_| ()).map_err(|_| {
        let mut error = ValidationError::new("kind");
        error.message = Some("Type must be product or service".into());
        error
    })
}

#[derive(Deserialize, Validate)]
/// Form data for creating or updating a catalog product.
pub struct ProductForm {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(custom(function = validate_kind))]
    pub kind: String,
    #[validate(length(min = 1, message = "Unit is required"))]
    pub unit: String,
    #[validate(range(min = 0.01, message = "Value must be positive"))]
    pub value: f64,
    pub photo_url: Option<String>,
}

impl ProductForm {
    fn kind(&self) -> ProductKind {
        // Guarded by validate(); default only to keep the conversion total.
        self.kind.parse().unwrap_or_default()
    }
}

impl From<&ProductForm> for NewProduct {
    fn from(form: &ProductForm) -> Self {
        NewProduct::new(
            form.name.clone(),
            form.kind(),
            form.unit.clone(),
            form.value,
            form.photo_url.clone(),
        )
    }
}

impl From<&ProductForm> for UpdateProduct {
    fn from(form: &ProductForm) -> Self {
        UpdateProduct::new(
            form.name.clone(),
            form.kind(),
            form.unit.clone(),
            form.value,
            form.photo_url.clone(),
        )
    }
}
