//! The `Execute` trait - commands are structs whose fields are the parameters.
//!
//! Every boundary operation is a command struct with builder methods and an
//! `Execute` impl. Commands return `serde_json::Value` so callers get a
//! uniform JSON surface regardless of entity kind.

pub use async_trait::async_trait;
use serde_json::Value;

/// An executable command against a context `C`, failing with error `E`
#[async_trait]
pub trait Execute<C, E> {
    async fn execute(&self, ctx: &C) -> std::result::Result<Value, E>;
}
