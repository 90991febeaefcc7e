use crate::db::connection::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use astra::Server;
use std::env;
use std::net::SocketAddr;

mod db;
mod domain;
mod errors;
mod responses;
mod router;

#[cfg(test)]
mod tests;

fn main() {
    // Environment-driven configuration. DATABASE_URL is the SQLite file
    // path; DATABASE_NAME is only reported by /test (the path already
    // names the database).
    let port = env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(8000);
    let db_path = env::var("DATABASE_URL").unwrap_or_else(|_| "listings.sqlite3".to_string());

    let db = Database::new(db_path);

    if let Err(e) = init_db(&db, "sql/schema.sql") {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }

    let addr: SocketAddr = SocketAddr::from(([0, 0, 0, 0], port));
    println!("Starting server at http://{addr}");

    let server = Server::bind(addr).max_workers(8);

    // Serve requests, mapping errors to JSON responses at the edge.
    let result = server.serve(move |req, _info| match handle(req, &db) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
