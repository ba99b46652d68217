#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use memo_common::http::{HttpRequest, HttpResponse, Method, Transport};
use memo_common::{ApiClient, ApiConfig, ClientError};
use serde_json::{json, Value};

pub const BASE: &str = "http://127.0.0.1:8000";

/// Replays queued responses in order and records every request it sees.
#[derive(Debug, Default)]
pub struct FakeTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, String>>>,
    requests: RefCell<Vec<HttpRequest>>,
}

impl FakeTransport {
    pub fn respond(self, status: u16, body: impl Into<String>) -> Self {
        self.responses.borrow_mut().push_back(Ok(HttpResponse {
            status,
            body: body.into(),
        }));
        self
    }

    pub fn respond_json(self, status: u16, body: Value) -> Self {
        self.respond(status, body.to_string())
    }

    pub fn fail(self, message: &str) -> Self {
        self.responses.borrow_mut().push_back(Err(message.to_owned()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }

    pub fn methods(&self) -> Vec<Method> {
        self.requests.borrow().iter().map(|r| r.method).collect()
    }
}

#[async_trait(?Send)]
impl Transport for FakeTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ClientError> {
        self.requests.borrow_mut().push(request);
        match self.responses.borrow_mut().pop_front() {
            Some(Ok(response)) => Ok(response),
            Some(Err(message)) => Err(ClientError::Network(message)),
            None => panic!("no response queued for request"),
        }
    }
}

pub fn client(transport: FakeTransport) -> ApiClient<FakeTransport> {
    ApiClient::new(&ApiConfig::new(BASE), transport).unwrap()
}

pub fn memo_json(id: i64, title: &str, content: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "title": title,
        "content": content,
        "tags": tags,
        "created_at": "2024-05-01T09:00:00+00:00",
        "updated_at": "2024-05-02T10:15:30+00:00",
    })
}

pub fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_str(request.body.as_deref().expect("request has a body")).unwrap()
}
