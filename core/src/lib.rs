//! Greets the caller and sums the numbers in its event.
//!
//! The runners in this workspace host [`Handler`] either behind the Lambda
//! custom runtime or as a one-shot local invocation.

pub mod config;
pub mod context;
pub mod display;
pub mod encoding;
pub mod errors;
pub mod event;
pub mod handler;
pub mod response;
pub mod sum;
pub mod telemetry;

pub use config::{load_config, HandlerConfig};
pub use context::InvocationContext;
pub use errors::{HandlerError, Result};
pub use handler::{handle, Handler};
pub use response::Response;
