//! Networking modules for the CollabSphere REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` is the HTTP seam, `api` builds every remote call on top of it,
//! `error` classifies failures and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;

// =============================================================================
// TEST HELPERS
// =============================================================================

#[cfg(test)]
pub mod test_helpers {
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::rc::Rc;

    use async_trait::async_trait;

    use super::error::ApiError;
    use super::transport::{HttpRequest, HttpResponse, Transport};
    use crate::config::ClientConfig;

    /// Transport that replays queued responses and records every request.
    #[derive(Clone, Default)]
    pub struct MockTransport {
        responses: Rc<RefCell<VecDeque<Result<HttpResponse, ApiError>>>>,
        requests: Rc<RefCell<Vec<HttpRequest>>>,
    }

    impl MockTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
            self.responses
                .borrow_mut()
                .push_back(Ok(HttpResponse::new(status, body.to_string())));
            self
        }

        pub fn fail(&self, err: ApiError) -> &Self {
            self.responses.borrow_mut().push_back(Err(err));
            self
        }

        pub fn requests(&self) -> Vec<HttpRequest> {
            self.requests.borrow().clone()
        }

        pub fn request_count(&self) -> usize {
            self.requests.borrow().len()
        }
    }

    #[async_trait(?Send)]
    impl Transport for MockTransport {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            self.requests.borrow_mut().push(request);
            self.responses
                .borrow_mut()
                .pop_front()
                .unwrap_or_else(|| Err(ApiError::Transport("no mock response queued".to_owned())))
        }
    }

    pub fn test_config() -> ClientConfig {
        ClientConfig { api_base_url: "http://api.test".to_owned(), page_size: 10 }
    }
}
