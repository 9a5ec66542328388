use std::env;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use supplier_pricing::db::establish_connection_pool;
use supplier_pricing::repository::DieselRepository;
use supplier_pricing::routes::api::{
    api_v1_add_supplier_price, api_v1_compute_purchase_line, api_v1_delete_supplier_price,
    api_v1_list_supplier_prices, api_v1_purchase_price, api_v1_update_supplier_price,
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let database_url = env::var("DATABASE_URL").unwrap_or("app.db".to_string());
    let port = env::var("PORT").unwrap_or("8080".to_string());
    let port = port.parse::<u16>().unwrap_or(8080);
    let address = env::var("ADDRESS").unwrap_or("127.0.0.1".to_string());

    let pool = match establish_connection_pool(&database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api")
                    .service(api_v1_list_supplier_prices)
                    .service(api_v1_add_supplier_price)
                    .service(api_v1_update_supplier_price)
                    .service(api_v1_delete_supplier_price)
                    .service(api_v1_purchase_price)
                    .service(api_v1_compute_purchase_line),
            )
            .app_data(web::Data::new(repo.clone()))
    })
    .bind((address, port))?
    .run()
    .await
}
