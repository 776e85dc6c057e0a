// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking the Kubernetes API and the event transport.

use crate::kubernetes::EventTransport;
use http::{Request, Response};
use http_body_util::BodyExt;
use k8s_openapi::api::core::v1::Event;
use kube::api::ObjectList;
use kube::client::Body;
use kube::core::ErrorResponse;
use kube::Client;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;

/// A request seen by [`MockService`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub query: Option<String>,
    pub content_type: Option<String>,
    pub body: String,
}

/// A mock HTTP service that returns predefined responses based on request paths
/// and records every request it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert((method.to_string(), path.to_string()), (status, body.to_string()));
        self
    }

    /// Add a response for GET requests matching the exact path
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    /// Add a response for POST requests matching the exact path
    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_put(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PUT", path, status, body)
    }

    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, status, body)
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client from this mock service
    pub fn into_client(self) -> Client {
        Client::new(self, "default")
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let (parts, body) = req.into_parts();
        let method = parts.method.to_string();
        let path = parts.uri.path().to_string();
        let query = parts.uri.query().map(str::to_string);
        let content_type = parts
            .headers
            .get(http::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let response = self.find_response(&method, &path);
        let requests = self.requests.clone();

        Box::pin(async move {
            let bytes = body
                .collect()
                .await
                .map_err(|e| tower::BoxError::from(e.to_string()))?
                .to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                query,
                content_type,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });

            let (status, body) = response.unwrap_or_else(|| (404, not_found_json()));
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Create a mock event JSON response
pub fn event_json(name: &str, namespace: &str) -> String {
    event_value(name, namespace).to_string()
}

fn event_value(name: &str, namespace: &str) -> serde_json::Value {
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "Event",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "resourceVersion": "1"
        },
        "involvedObject": {
            "kind": "Pod",
            "name": "web-0",
            "namespace": namespace
        },
        "reason": "Started",
        "type": "Normal"
    })
}

/// Create a mock event list JSON response from (name, namespace) pairs
pub fn event_list_json(events: &[(&str, &str)]) -> String {
    let items: Vec<serde_json::Value> = events
        .iter()
        .map(|(name, namespace)| event_value(name, namespace))
        .collect();
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "EventList",
        "metadata": { "resourceVersion": "10" },
        "items": items
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json() -> String {
    status_json(404, "NotFound", "not found")
}

pub fn status_json(code: u16, reason: &str, message: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": message,
        "reason": reason,
        "code": code
    })
    .to_string()
}

/// A call made against [`RecordingTransport`]
#[derive(Debug, Clone, PartialEq)]
pub enum TransportCall {
    Create { namespace: String },
    Replace { namespace: String, name: String },
    Patch { namespace: String, name: String, patch: Vec<u8> },
    List { namespace: String, field_selector: String },
}

/// In-memory [`EventTransport`] that records calls and echoes events back
#[derive(Clone, Default)]
pub struct RecordingTransport {
    calls: Arc<Mutex<Vec<TransportCall>>>,
    listed: Vec<(String, String)>,
    failure: Option<(u16, String)>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events returned by `list`, as (name, namespace) pairs
    pub fn with_listed(mut self, events: &[(&str, &str)]) -> Self {
        self.listed = events
            .iter()
            .map(|(n, ns)| (n.to_string(), ns.to_string()))
            .collect();
        self
    }

    /// Make every call fail with an API error of the given code and reason
    pub fn failing(mut self, code: u16, reason: &str) -> Self {
        self.failure = Some((code, reason.to_string()));
        self
    }

    pub fn calls(&self) -> Vec<TransportCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: TransportCall) -> kube::Result<()> {
        self.calls.lock().unwrap().push(call);
        match &self.failure {
            Some((code, reason)) => {
                let status: ErrorResponse =
                    serde_json::from_str(&status_json(*code, reason, "rejected")).unwrap();
                Err(kube::Error::Api(status))
            }
            None => Ok(()),
        }
    }
}

impl EventTransport for RecordingTransport {
    fn api_version(&self) -> &str {
        "v1"
    }

    async fn create(&self, namespace: &str, event: &Event) -> kube::Result<Event> {
        self.record(TransportCall::Create {
            namespace: namespace.to_string(),
        })?;
        Ok(event.clone())
    }

    async fn replace(&self, namespace: &str, name: &str, event: &Event) -> kube::Result<Event> {
        self.record(TransportCall::Replace {
            namespace: namespace.to_string(),
            name: name.to_string(),
        })?;
        Ok(event.clone())
    }

    async fn patch(&self, namespace: &str, name: &str, patch: &[u8]) -> kube::Result<Event> {
        self.record(TransportCall::Patch {
            namespace: namespace.to_string(),
            name: name.to_string(),
            patch: patch.to_vec(),
        })?;
        Ok(serde_json::from_value(event_value(name, namespace)).unwrap())
    }

    async fn list(&self, namespace: &str, field_selector: &str) -> kube::Result<ObjectList<Event>> {
        self.record(TransportCall::List {
            namespace: namespace.to_string(),
            field_selector: field_selector.to_string(),
        })?;
        let listed: Vec<(&str, &str)> = self
            .listed
            .iter()
            .map(|(n, ns)| (n.as_str(), ns.as_str()))
            .collect();
        Ok(serde_json::from_str(&event_list_json(&listed)).unwrap())
    }
}
