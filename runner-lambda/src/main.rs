use greeting_core::telemetry::init_tracing;
use greeting_core::{load_config, Handler, InvocationContext, Response};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};

/// Runs one invocation. Failures go back to the runtime, which reports them
/// to Lambda as an invocation error.
pub async fn lambda_handler(
    handler: &Handler,
    event: LambdaEvent<Value>,
) -> Result<Response, Error> {
    let (payload, context) = event.into_parts();
    let invocation = InvocationContext::new(context.request_id.clone())
        .with_function_name(context.env_config.function_name.clone());

    handler.handle(&payload, &invocation).map_err(|e| {
        if e.is_bad_event() {
            warn!(request_id = %invocation.request_id, "rejected event: {e}");
        } else {
            error!(request_id = %invocation.request_id, "invocation failed: {e}");
        }
        Error::from(e)
    })
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing(false);

    let config = load_config(None).map_err(|e| {
        error!("Failed to load configuration: {e:#}");
        Error::from(e.to_string())
    })?;
    info!(default_name = %config.default_name, "Running in AWS Lambda environment");

    let handler = Handler::new(config);
    let handler = &handler;
    lambda_runtime::run(service_fn(move |event| async move {
        lambda_handler(handler, event).await
    }))
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_runtime::Context;
    use serde_json::json;

    #[tokio::test]
    async fn handles_event_payload() {
        let handler = Handler::default();
        let payload = json!({"name": "Ada", "numbers": [10, 20, 30]});
        let event = LambdaEvent::new(payload, Context::default());

        let response = lambda_handler(&handler, event).await.unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            r#"{"message": "Hello, Ada!", "sum": 60, "processed_numbers": [10, 20, 30]}"#
        );
    }

    #[tokio::test]
    async fn non_numeric_numbers_fail_the_invocation() {
        let handler = Handler::default();
        let event = LambdaEvent::new(json!({"numbers": ["a"]}), Context::default());

        let err = lambda_handler(&handler, event).await.unwrap_err();
        assert!(err.to_string().contains("not numeric"));
    }
}
