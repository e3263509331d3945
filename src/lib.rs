#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
mod server {
    use actix_files::Files;
    use actix_web::cookie::Key;
    use actix_web::{App, HttpServer, middleware, web};
    use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};
    use tera::Tera;

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::api::{api_v1_product_seed, api_v1_products};
    use crate::routes::budget::{
        add_budget, delete_budget, new_budget, save_budget, show_budget, show_budgets,
    };
    use crate::routes::customer::{add_customer, delete_customer, save_customer, show_customers};
    use crate::routes::main::index;
    use crate::routes::product::{add_product, delete_product, save_product, show_products};
    use crate::routes::settings::{save_settings, seed_demo_data, show_settings};

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);

        let secret_key = Key::from(server_config.secret.as_bytes());
        let message_store = CookieMessageStore::builder(secret_key).build();
        let message_framework = FlashMessagesFramework::builder(message_store).build();

        let tera = Tera::new(&server_config.templates_dir)
            .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;

        let bind_address = (server_config.address.clone(), server_config.port);
        let assets_dir = server_config.assets_dir.clone();

        HttpServer::new(move || {
            App::new()
                .wrap(message_framework.clone())
                .wrap(middleware::Compress::default())
                .wrap(middleware::Logger::default())
                .service(Files::new("/assets", &assets_dir))
                .service(
                    web::scope("/api")
                        .service(api_v1_products)
                        .service(api_v1_product_seed),
                )
                .service(index)
                .service(show_customers)
                .service(add_customer)
                .service(save_customer)
                .service(delete_customer)
                .service(show_products)
                .service(add_product)
                .service(save_product)
                .service(delete_product)
                .service(show_budgets)
                // Registered before `show_budget` so "new" is not read as an id.
                .service(new_budget)
                .service(show_budget)
                .service(add_budget)
                .service(save_budget)
                .service(delete_budget)
                .service(show_settings)
                .service(save_settings)
                .service(seed_demo_data)
                .app_data(web::Data::new(tera.clone()))
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(server_config.clone()))
        })
        .bind(bind_address)?
        .run()
        .await
    }
}

#[cfg(feature = "server")]
pub use server::run;
