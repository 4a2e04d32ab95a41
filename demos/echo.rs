//! Echo - simple request/response example.
//!
//! This example demonstrates:
//! - Declaring a request type with its response contract
//! - Registering a closure handler in the registry
//! - Dispatching through the sender without naming the handler

use std::sync::Arc;

use courier::{HandlerRegistry, Request, Sender};

/// Request carrying a message to echo back.
struct Echo {
    message: String,
}

impl Request for Echo {
    type Response = String;
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut registry = HandlerRegistry::new();

    // Register the echo handler
    registry.register_fn(|req: Echo, _cancel| async move { Ok(req.message) });

    let sender = Sender::new(Arc::new(registry));

    let reply = sender
        .send(Echo {
            message: "hello".to_string(),
        })
        .await?;
    println!("echo: {reply}");

    Ok(())
}
