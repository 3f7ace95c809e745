//! Tournament API server.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default; override with env HOST and PORT.
//! Log level via RUST_LOG (default info).

use actix_web::{middleware::Logger, web::Data, App, HttpServer};
use std::sync::Arc;
use tournament_rounds::{web, Config, MemoryStore, TournamentService};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();
    let (host, port) = config.bind_addr();
    log::info!("Starting server at http://{}:{}", host, port);

    let state = Data::new(TournamentService::new(Arc::new(MemoryStore::new())));

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .configure(web::configure)
    })
    .bind(config.bind_addr())?
    .run()
    .await
}
