use dotenvy::dotenv;

use pustok_store::config::StoreConfig;
use pustok_store::db::establish_connection_pool;
use pustok_store::repository::DieselRepository;

fn main() {
    dotenv().ok(); // Load .env file
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = StoreConfig::from_env();

    let pool = match establish_connection_pool(&config) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            std::process::exit(1);
        }
    };
    let repo = DieselRepository::new(pool);

    match repo.initialize_schema() {
        Ok(report) => log::info!(
            "Initialized {} ({} migrations, {} colors, {} sizes)",
            config.database_url,
            report.migrations_applied,
            report.colors_seeded,
            report.sizes_seeded
        ),
        Err(e) => {
            log::error!("Schema initialization failed: {e}");
            std::process::exit(1);
        }
    }
}
