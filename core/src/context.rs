/// Host-supplied description of the current invocation.
///
/// The handler never branches on it; it only tags log output.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvocationContext {
    pub request_id: String,
    pub function_name: Option<String>,
}

impl InvocationContext {
    pub fn new(request_id: impl Into<String>) -> Self {
        Self {
            request_id: request_id.into(),
            function_name: None,
        }
    }

    pub fn with_function_name(mut self, function_name: impl Into<String>) -> Self {
        self.function_name = Some(function_name.into());
        self
    }
}
