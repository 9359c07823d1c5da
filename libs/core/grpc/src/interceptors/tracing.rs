use tonic::{Request, Status};

use crate::context::REQUEST_ID_HEADER;

/// Interceptor for request correlation on outbound calls
///
/// Requests built from a [`CallContext`](crate::CallContext) already carry the
/// caller's `x-request-id`; anything else gets a fresh UUID so every downstream log
/// line can still be correlated.
///
/// # Example
/// ```ignore
/// use grpc_client::interceptors::TracingInterceptor;
/// use rpc::user::v1::user_service_client::UserServiceClient;
///
/// let client = UserServiceClient::with_interceptor(channel, TracingInterceptor::new());
/// ```
#[derive(Clone, Debug, Default)]
pub struct TracingInterceptor;

impl TracingInterceptor {
    /// Create a new tracing interceptor
    pub fn new() -> Self {
        Self
    }
}

impl tonic::service::Interceptor for TracingInterceptor {
    fn call(&mut self, mut request: Request<()>) -> Result<Request<()>, Status> {
        let request_id = match request.metadata().get(REQUEST_ID_HEADER) {
            Some(existing) => existing.to_str().unwrap_or_default().to_string(),
            None => {
                let generated = uuid::Uuid::new_v4().to_string();
                request.metadata_mut().insert(
                    REQUEST_ID_HEADER,
                    generated
                        .parse()
                        .map_err(|_| Status::internal("Failed to create request ID"))?,
                );
                generated
            }
        };

        tracing::debug!(
            target: "grpc_client",
            request_id = %request_id,
            "Outgoing gRPC request"
        );

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::service::Interceptor;

    #[test]
    fn test_generates_request_id_when_missing() {
        let mut tracing = TracingInterceptor::new();
        let req = tracing.call(Request::new(())).unwrap();
        let id_str = req.metadata().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap();
        assert!(uuid::Uuid::parse_str(id_str).is_ok());
    }

    #[test]
    fn test_keeps_caller_request_id() {
        let mut tracing = TracingInterceptor::new();
        let mut request = Request::new(());
        request
            .metadata_mut()
            .insert(REQUEST_ID_HEADER, "upstream-id".parse().unwrap());

        let req = tracing.call(request).unwrap();
        assert_eq!(
            req.metadata().get(REQUEST_ID_HEADER).unwrap().to_str().unwrap(),
            "upstream-id"
        );
    }
}
