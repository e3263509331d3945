use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductKind,
    UpdateProduct as DomainUpdateProduct,
};
use crate::domain::types::TypeConstraintError;

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
/// Diesel model for [`crate::domain::product::Product`].
pub struct Product {
    pub id: i32,
    pub name: String,
    pub kind: String,
    pub unit: String,
    pub value: f64,
    pub photo_url: Option<String>,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
/// Insertable form of [`Product`].
pub struct NewProduct<'a> {
    pub name: &'a str,
    pub kind: String,
    pub unit: &'a str,
    pub value: f64,
    pub photo_url: Option<&'a str>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
/// Data used when updating a [`Product`] record.
pub struct UpdateProduct<'a> {
    pub name: &'a str,
    pub kind: String,
    pub unit: &'a str,
    pub value: f64,
    pub photo_url: Option<&'a str>,
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    /// Decode a stored row; an unknown `kind` text is a decode failure.
    fn try_from(product: Product) -> Result<Self, Self::Error> {
        let kind: ProductKind = product.kind.parse()?;
        Ok(Self {
            id: product.id,
            name: product.name,
            kind,
            unit: product.unit,
            value: product.value,
            photo_url: product.photo_url,
            created_at: product.created_at,
        })
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(product: &'a DomainNewProduct) -> Self {
        Self {
            name: product.name.as_str(),
            kind: product.kind.to_string(),
            unit: product.unit.as_str(),
            value: product.value,
            photo_url: product.photo_url.as_deref(),
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(product: &'a DomainUpdateProduct) -> Self {
        Self {
            name: product.name.as_str(),
            kind: product.kind.to_string(),
            unit: product.unit.as_str(),
            value: product.value,
            photo_url: product.photo_url.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn db_product(kind: &str) -> Product {
        Product {
            id: 1,
            name: "Consulting".to_string(),
            kind: kind.to_string(),
            unit: "h".to_string(),
            value: 250.0,
            photo_url: None,
            created_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn product_into_domain_parses_kind() {
        let domain = DomainProduct::try_from(db_product("service")).unwrap();
        assert_eq!(domain.kind, ProductKind::Service);
        assert_eq!(domain.value, 250.0);
    }

    #[test]
    fn product_into_domain_rejects_unknown_kind() {
        assert!(DomainProduct::try_from(db_product("gadget")).is_err());
    }

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewProduct::new(
            "Consulting".to_string(),
            ProductKind::Service,
            "h".to_string(),
            250.0,
            None,
        );
        let new: NewProduct = (&domain).into();
        assert_eq!(new.name, "Consulting");
        assert_eq!(new.kind, "service");
        assert_eq!(new.unit, "h");
        assert_eq!(new.value, 250.0);
        assert!(new.photo_url.is_none());
    }
}
