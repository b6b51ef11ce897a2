use std::env;

use actix_web::{App, HttpResponse, HttpServer, middleware, web};
use dotenvy::dotenv;

use review_catalog::db::establish_connection_pool;
use review_catalog::repository::DieselRepository;
use review_catalog::routes::products::{add_product, get_product, list_products, update_product};
use review_catalog::routes::users::{login_user, register_user};

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
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let body = HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": err.to_string() }));
            actix_web::error::InternalError::from_response(err, body).into()
        });

        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(json_config)
            .app_data(web::Data::new(repo.clone()))
            .service(list_products)
            .service(get_product)
            .service(add_product)
            .service(update_product)
            .service(register_user)
            .service(login_user)
    })
    .bind((address, port))?
    .run()
    .await
}
