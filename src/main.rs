use crate::config::Config;
use crate::db::{init_db, Database};
use astra::Server;

mod config;
mod db;
mod domain;
mod errors;
mod logger;
mod responses;
mod router;
mod service;
mod templates;


fn main() {
    let config = Config::load();
    logger::init_logger(config.verbose, config.log_json);

    let addr = match config.validate() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::error!("configuration invalid: {e}");
            std::process::exit(1);
        }
    };

    let db = Database::new(config.database.clone());

    if let Err(e) = init_db(&db, &config.schema) {
        tracing::error!("database initialization failed: {e}");
        std::process::exit(1);
    }

    tracing::info!(
        %addr,
        database = %db.path().display(),
        workers = config.workers,
        "starting server"
    );

    let server = Server::bind(&addr).max_workers(config.workers);

    let result = server.serve(move |req, _info| router::serve(req, &db));

    if let Err(e) = result {
        tracing::error!("server ended with error: {e}");
        std::process::exit(1);
    }

    tracing::info!("server shut down cleanly");
}
