use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::customers)]
/// Diesel model for [`crate::domain::customer::Customer`].
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub document: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
/// Insertable form of [`Customer`].
pub struct NewCustomer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub document: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
/// Data used when updating a [`Customer`] record.
pub struct UpdateCustomer<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub document: &'a str,
}

impl From<Customer> for DomainCustomer {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            name: customer.name,
            email: customer.email,
            phone: customer.phone,
            document: customer.document,
            created_at: customer.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(customer: &'a DomainNewCustomer) -> Self {
        Self {
            name: customer.name.as_str(),
            email: customer.email.as_str(),
            phone: customer.phone.as_str(),
            document: customer.document.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateCustomer> for UpdateCustomer<'a> {
    fn from(customer: &'a DomainUpdateCustomer) -> Self {
        Self {
            name: customer.name.as_str(),
            email: customer.email.as_str(),
            phone: customer.phone.as_str(),
            document: customer.document.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn from_domain_new_creates_insertable() {
        let domain = DomainNewCustomer::new(
            "Ana".to_string(),
            "ana@example.com".to_string(),
            "555-0100".to_string(),
            "123.456.789-00".to_string(),
        );
        let new: NewCustomer = (&domain).into();
        assert_eq!(new.name, domain.name);
        assert_eq!(new.email, domain.email);
        assert_eq!(new.phone, domain.phone);
        assert_eq!(new.document, domain.document);
    }

    #[test]
    fn customer_into_domain() {
        let now: NaiveDateTime = Utc::now().naive_utc();
        let db_customer = Customer {
            id: 1,
            name: "n".to_string(),
            email: "e@example.com".to_string(),
            phone: "p".to_string(),
            document: "d".to_string(),
            created_at: now,
        };
        let domain: DomainCustomer = db_customer.into();
        assert_eq!(domain.id, 1);
        assert_eq!(domain.name, "n");
        assert_eq!(domain.email, "e@example.com");
        assert_eq!(domain.phone, "p");
        assert_eq!(domain.document, "d");
        assert_eq!(domain.created_at, now);
    }
}
