use crate::db::connection::{init_db, seed_db, Database};
use crate::domain::Facets;
use crate::router::handle;
use astra::Server;
use std::net::SocketAddr;

mod db;
mod domain;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

const DB_PATH: &str = "realestate.sqlite3";
const SCHEMA_PATH: &str = "sql/schema.sql";
const SEED_PATH: &str = "sql/seed.sql";

fn main() {
    // 1️⃣ Create the database handle
    let db = Database::new(DB_PATH);

    // 2️⃣ Apply the schema and, on a fresh database, the demo seed
    if let Err(e) = init_db(&db, SCHEMA_PATH) {
        eprintln!("❌ Database initialization failed: {e}");
        std::process::exit(1);
    }
    if let Err(e) = seed_db(&db, SEED_PATH) {
        eprintln!("❌ Database seeding failed: {e}");
        std::process::exit(1);
    }

    // 3️⃣ Load the listings table once; it is immutable for the session
    // and passed by reference to the filter engine and query catalog.
    let table = match db::listings::load_all(&db) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("❌ Failed to load listings: {e}");
            std::process::exit(1);
        }
    };
    let facets = Facets::from_table(&table);
    println!("Loaded {} listings.", table.len());

    // 4️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    let result = server.serve(move |req, _info| match handle(req, &table, &facets) {
        Ok(resp) => resp,
        Err(err) => responses::error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
