use serde_json::Value;
use tracing::{debug, info};

use crate::config::HandlerConfig;
use crate::context::InvocationContext;
use crate::errors::Result;
use crate::event::Event;
use crate::response::{Response, ResponseBody};
use crate::sum::sum_numbers;

/// Greets the caller and sums the numbers it sent.
///
/// Holds only immutable configuration, so one instance serves every
/// invocation of the process.
#[derive(Debug, Clone, Default)]
pub struct Handler {
    config: HandlerConfig,
}

impl Handler {
    pub fn new(config: HandlerConfig) -> Self {
        Self { config }
    }

    /// Processes one event.
    ///
    /// 1. Read `name`, falling back to the configured default.
    /// 2. Build the greeting.
    /// 3. Read `numbers`, falling back to the configured default.
    /// 4. Sum them, failing on the first non-numeric element.
    /// 5. Encode `message`, `sum` and `processed_numbers` as the body.
    pub fn handle(&self, event: &Value, context: &InvocationContext) -> Result<Response> {
        info!(
            request_id = %context.request_id,
            function_name = context.function_name.as_deref().unwrap_or("-"),
            "Hello from Lambda!"
        );

        let event = Event::parse(event)?;
        let message = format!("Hello, {}!", event.name(&self.config));
        let numbers = event.numbers(&self.config)?;
        let sum = sum_numbers(numbers.items())?;
        debug!(count = numbers.items().len(), ?sum, "summed numbers");

        Response::ok(&ResponseBody {
            message: &message,
            sum,
            processed_numbers: numbers,
        })
    }
}

/// Handles `event` with the built-in defaults.
pub fn handle(event: &Value, context: &InvocationContext) -> Result<Response> {
    Handler::default().handle(event, context)
}
