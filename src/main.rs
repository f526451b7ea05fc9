use actix_cors::Cors;
use actix_web::{
    middleware::{Condition, Logger},
    web, App, HttpServer,
};
use clap::Parser;
use peopledb::{
    clients::server::{self, HTTP_LOG_FORMAT},
    consts::consts::DEFAULT_PORT,
    database::{database::Database, options::DatabaseOptions},
    model::person::seed_people,
};
use std::io;

/// 📇 peopledb HTTP Server, a small JSON interface over an in-memory list of people
#[derive(Parser, Debug)]
struct Cli {
    /// Port the http server will run on
    #[clap(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address the http server will run on
    #[clap(short, long, default_value = "0.0.0.0")]
    address: String,

    /// Turns off the per request access log
    #[clap(long)]
    no_log_http: bool,

    /// Start with an empty list instead of the two seed people
    #[clap(long)]
    no_seed: bool,

    #[clap(long, default_value_t = 2)]
    http_workers: usize,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let args = Cli::parse();

    let seed = match args.no_seed {
        true => vec![],
        false => seed_people(),
    };

    let request_manager = Database::new(DatabaseOptions::default().set_seed(seed)).run();

    let server_request_manager = request_manager.clone();
    let log_http = !args.no_log_http;

    let http_server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(server_request_manager.clone()))
            .configure(server::configure)
            .wrap(Cors::permissive())
            .wrap(Condition::new(log_http, Logger::new(HTTP_LOG_FORMAT)))
    })
    .workers(args.http_workers)
    .bind((args.address.as_str(), args.port))?;

    log::info!("Server is Running on Port {}", args.port);

    http_server.run().await?;

    // actix has stopped accepting requests, let the database thread finish
    match request_manager.send_shutdown_request() {
        Ok(shutdown_response) => log::info!("Shutting down server: {}", shutdown_response),
        Err(err) => log::error!("Failed to shut down database: {}", err),
    }

    Ok(())
}
