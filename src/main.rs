use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use studio_booking::config::ServerConfig;
use studio_booking::db::{establish_connection_pool, run_pending_migrations};
use studio_booking::repository::DieselRepository;
use studio_booking::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match run_pending_migrations(&pool) {
        Ok(0) => {}
        Ok(applied) => log::info!("Applied {applied} pending migrations"),
        Err(e) => {
            log::error!("Failed to run database migrations: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);
    let bind = (config.address.clone(), config.port);
    log::info!(
        "Listening on {}:{}, day_of_week 0 is {}",
        bind.0,
        bind.1,
        config.day_of_week
    );
    let config = web::Data::new(config);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .app_data(config.clone())
            .configure(routes::configure)
    })
    .bind(bind)?
    .run()
    .await
}
