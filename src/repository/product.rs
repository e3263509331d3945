//! Repository implementation for catalog products.

use diesel::prelude::*;

use crate::{
    domain::{
        product::{NewProduct, Product, UpdateProduct},
        types::ProductId,
    },
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    repository::{
        DieselRepository, ProductReader, ProductWriter,
        errors::{RepositoryError, RepositoryResult},
    },
};

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let product = products::table
            .find(id.get())
            .first::<DbProduct>(&mut conn)
            .optional()?;

        match product {
            Some(product) => Ok(Some(
                Product::try_from(product).map_err(RepositoryError::from)?,
            )),
            None => Ok(None),
        }
    }

    fn list_products(&self) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        products::table
            .order(products::name.asc())
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(|p| Product::try_from(p).map_err(RepositoryError::from))
            .collect()
    }

    fn list_products_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Product>> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        products::table
            .filter(products::id.eq_any(ids))
            .load::<DbProduct>(&mut conn)?
            .into_iter()
            .map(|p| Product::try_from(p).map_err(RepositoryError::from))
            .collect()
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_new_product: DbNewProduct = new_product.into();

        let created = diesel::insert_into(products::table)
            .values(&db_new_product)
            .get_result::<DbProduct>(&mut conn)?;

        Product::try_from(created).map_err(RepositoryError::from)
    }

    fn update_product(&self, id: ProductId, updates: &UpdateProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_updates: DbUpdateProduct = updates.into();

        let updated = diesel::update(products::table.find(id.get()))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Product::try_from(updated).map_err(RepositoryError::from)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<()> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        diesel::delete(products::table.find(id.get())).execute(&mut conn)?;
        Ok(())
    }
}
