use super::{HttpRequest, HttpResponse, Transport};

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Replays queued responses and keeps every request it was handed.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<HttpResponse, String>>>>,
    requests: Arc<Mutex<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub fn push_failure<T: Into<String>>(&self, message: T) {
        self.responses.lock().unwrap().push_back(Err(message.into()));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request has been sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);

        let mut responses = self.responses.lock().unwrap();
        match responses.pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(anyhow::anyhow!(message)),
            None => Err(anyhow::anyhow!("no response queued")),
        }
    }
}

#[tokio::test]
async fn mock_transport_replays_responses_in_order() {
    let transport = MockTransport::new();
    transport.push(HttpResponse::new(200, "first"));
    transport.push_failure("connection reset");

    let url = reqwest::Url::parse("http://localhost").unwrap();
    let request = HttpRequest::new(reqwest::Method::POST, url);

    let response = transport.send(request.clone()).await.unwrap();
    assert_eq!(response.body, b"first");

    let err = transport.send(request.clone()).await.unwrap_err();
    assert_eq!(format!("{err}"), "connection reset");

    assert!(transport.send(request).await.is_err());
    assert_eq!(transport.requests().len(), 3);
}
