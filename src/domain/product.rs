use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::TypeConstraintError;

/// Whether a catalog entry is a physical product or a billed service.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProductKind {
    #[default]
    Product,
    Service,
}

impl Display for ProductKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductKind::Product => write!(f, "product"),
            ProductKind::Service => write!(f, "service"),
        }
    }
}

impl FromStr for ProductKind {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(ProductKind::Product),
            "service" => Ok(ProductKind::Service),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown product kind: {other}"
            ))),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub kind: ProductKind,
    /// Free-text unit label shown next to quantities ("h", "un", "month").
    pub unit: String,
    /// Current catalog unit price. Budget line items copy this value at
    /// selection time; later changes never touch existing budgets.
    pub value: f64,
    /// Optional photo, stored as a URL or data URI.
    pub photo_url: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub kind: ProductKind,
    pub unit: String,
    pub value: f64,
    pub photo_url: Option<String>,
}

impl NewProduct {
    #[must_use]
    pub fn new(
        name: String,
        kind: ProductKind,
        unit: String,
        value: f64,
        photo_url: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            kind,
            unit: unit.trim().to_string(),
            value,
            photo_url: photo_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct UpdateProduct {
    pub name: String,
    pub kind: ProductKind,
    pub unit: String,
    pub value: f64,
    pub photo_url: Option<String>,
}

impl UpdateProduct {
    #[must_use]
    pub fn new(
        name: String,
        kind: ProductKind,
        unit: String,
        value: f64,
        photo_url: Option<String>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            kind,
            unit: unit.trim().to_string(),
            value,
            photo_url: photo_url
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_round_trips_through_strings() {
        assert_eq!("product".parse::<ProductKind>().unwrap(), ProductKind::Product);
        assert_eq!("service".parse::<ProductKind>().unwrap(), ProductKind::Service);
        assert_eq!(ProductKind::Service.to_string(), "service");
        assert!("gadget".parse::<ProductKind>().is_err());
    }

    #[test]
    fn new_product_drops_blank_photo() {
        let product = NewProduct::new(
            "Consulting".to_string(),
            ProductKind::Service,
            "h".to_string(),
            250.0,
            Some("   ".to_string()),
        );
        assert!(product.photo_url.is_none());
    }
}
