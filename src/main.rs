use std::io;

use dotenvy::dotenv;
use order_api::infrastructure::{DieselOrderRepository, InMemoryOrderRepository};
use order_api::{build_server, create_pool, run_migrations, AppConfig, OrderService, Storage};

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = AppConfig::from_env().map_err(io::Error::other)?;

    let service = match config.storage {
        Storage::Postgres => {
            let database_url = config.database_url.as_deref().unwrap_or_default();
            let pool = create_pool(database_url, config.pool_max_size).map_err(io::Error::other)?;
            run_migrations(&pool).map_err(io::Error::other)?;
            OrderService::new(DieselOrderRepository::new(pool), config.client_id_policy)
        }
        Storage::Memory => {
            log::warn!("using in-memory storage; orders are lost on shutdown");
            OrderService::new(InMemoryOrderRepository::new(), config.client_id_policy)
        }
    };

    log::info!("Starting server at http://{}:{}", config.host, config.port);

    build_server(service, &config.host, config.port)?.await
}
