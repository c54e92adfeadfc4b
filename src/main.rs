use actix_web::{App, HttpServer, middleware, web};

use bill_tracker::config::ServerConfig;
use bill_tracker::db::{establish_connection_pool, run_migrations};
use bill_tracker::repository::DieselRepository;
use bill_tracker::routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = ServerConfig::from_env();

    let pool = match establish_connection_pool(&config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };

    match run_migrations(&pool) {
        Ok(applied) => log::info!("Database ready, {applied} migration(s) applied"),
        Err(e) => {
            log::error!("Failed to migrate database: {e}");
            std::process::exit(1);
        }
    }

    let repo = DieselRepository::new(pool);

    log::info!("Listening on {}:{}", config.address, config.port);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(web::Data::new(repo.clone()))
            .configure(routes::configure)
    })
    .bind((config.address.clone(), config.port))?
    .run()
    .await
}
