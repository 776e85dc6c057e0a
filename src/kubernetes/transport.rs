// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Transport for the events resource

use k8s_openapi::api::core::v1::Event;
use kube::{
    api::{ListParams, ObjectList, Patch, PatchParams, PostParams},
    Api, Client,
};
use std::future::Future;
use tracing::{debug, instrument};

/// Remote operations on the events resource.
///
/// An empty namespace addresses the cluster-wide collection.
pub trait EventTransport: Send + Sync {
    /// API version negotiated with the server, e.g. `v1`
    fn api_version(&self) -> &str;

    fn create(
        &self,
        namespace: &str,
        event: &Event,
    ) -> impl Future<Output = kube::Result<Event>> + Send;

    fn replace(
        &self,
        namespace: &str,
        name: &str,
        event: &Event,
    ) -> impl Future<Output = kube::Result<Event>> + Send;

    /// Apply a strategic merge patch
    fn patch(
        &self,
        namespace: &str,
        name: &str,
        patch: &[u8],
    ) -> impl Future<Output = kube::Result<Event>> + Send;

    fn list(
        &self,
        namespace: &str,
        field_selector: &str,
    ) -> impl Future<Output = kube::Result<ObjectList<Event>>> + Send;
}

/// [`EventTransport`] backed by a kube [`Client`]
#[derive(Clone)]
pub struct KubeEventTransport {
    client: Client,
}

impl KubeEventTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    fn api(&self, namespace: &str) -> Api<Event> {
        if namespace.is_empty() {
            Api::all(self.client.clone())
        } else {
            Api::namespaced(self.client.clone(), namespace)
        }
    }
}

impl EventTransport for KubeEventTransport {
    fn api_version(&self) -> &str {
        <Event as k8s_openapi::Resource>::API_VERSION
    }

    #[instrument(skip(self, event))]
    async fn create(&self, namespace: &str, event: &Event) -> kube::Result<Event> {
        debug!("POST event");
        self.api(namespace)
            .create(&PostParams::default(), event)
            .await
    }

    #[instrument(skip(self, event))]
    async fn replace(&self, namespace: &str, name: &str, event: &Event) -> kube::Result<Event> {
        debug!("PUT event");
        self.api(namespace)
            .replace(name, &PostParams::default(), event)
            .await
    }

    #[instrument(skip(self, patch), fields(patch_len = patch.len()))]
    async fn patch(&self, namespace: &str, name: &str, patch: &[u8]) -> kube::Result<Event> {
        let body: serde_json::Value =
            serde_json::from_slice(patch).map_err(kube::Error::SerdeError)?;
        debug!("PATCH event");
        self.api(namespace)
            .patch(name, &PatchParams::default(), &Patch::Strategic(body))
            .await
    }

    #[instrument(skip(self))]
    async fn list(&self, namespace: &str, field_selector: &str) -> kube::Result<ObjectList<Event>> {
        let mut lp = ListParams::default();
        if !field_selector.is_empty() {
            lp = lp.fields(field_selector);
        }
        let events = self.api(namespace).list(&lp).await?;
        debug!("Listed {} events", events.items.len());
        Ok(events)
    }
}
