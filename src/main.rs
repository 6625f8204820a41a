use crate::describer::GeminiDescriber;
use crate::responses::error_to_response;
use crate::router::{handle, App};
use crate::store::{seed, PropertyStore};
use astra::Server;
use std::net::SocketAddr;

mod describer;
mod domain;
mod errors;
mod responses;
mod router;
mod store;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    // 1️⃣ Seed the in-memory store with the mock listings
    let store = PropertyStore::new(seed::initial_properties());

    // 2️⃣ Wire up the description API if a key is configured
    let describer = GeminiDescriber::from_env();
    if describer.is_none() {
        println!("ℹ️ GEMINI_API_KEY not set, AI descriptions disabled");
    }

    let app = App { store, describer };

    // 3️⃣ Start the server
    let addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // 4️⃣ Serve requests, passing the app state into the closure
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
