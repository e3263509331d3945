//! Repository implementation for customers.

use diesel::prelude::*;

use crate::{
    domain::{
        customer::{Customer, NewCustomer, UpdateCustomer},
        types::CustomerId,
    },
    models::customer::{
        Customer as DbCustomer, NewCustomer as DbNewCustomer, UpdateCustomer as DbUpdateCustomer,
    },
    repository::{CustomerReader, CustomerWriter, DieselRepository, errors::RepositoryResult},
};

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: CustomerId) -> RepositoryResult<Option<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let customer = customers::table
            .find(id.get())
            .first::<DbCustomer>(&mut conn)
            .optional()?;

        Ok(customer.map(Into::into))
    }

    fn list_customers(&self) -> RepositoryResult<Vec<Customer>> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let items = customers::table
            .order(customers::name.asc())
            .load::<DbCustomer>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_new_customer: DbNewCustomer = new_customer.into();

        let created = diesel::insert_into(customers::table)
            .values(&db_new_customer)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(created.into())
    }

    fn update_customer(
        &self,
        id: CustomerId,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateCustomer = updates.into();

        let updated = diesel::update(customers::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbCustomer>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_customer(&self, id: CustomerId) -> RepositoryResult<()> {
        use crate::schema::customers;

        let mut conn = self.conn()?;
        diesel::delete(customers::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
