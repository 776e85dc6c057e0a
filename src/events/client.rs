// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Event client bound to a namespace

use crate::error::{EventsError, Operation, Result};
use crate::events::reference::ReferenceResolver;
use crate::events::selector::{build_field_selector, FieldSelector};
use crate::kubernetes::{EventTransport, KubeEventTransport};
use k8s_openapi::api::core::v1::Event;
use kube::{api::ObjectList, Client};
use tracing::{debug, instrument};

pub type EventList = ObjectList<Event>;

/// Creates, updates, patches and searches events on behalf of a namespace.
///
/// The namespace each request goes to is taken from the event itself. A client
/// bound to a non-empty namespace refuses events from any other namespace
/// without contacting the server; a client bound to `""` accepts all of them.
#[derive(Clone)]
pub struct NamespacedEventClient<T> {
    namespace: String,
    transport: T,
}

impl NamespacedEventClient<KubeEventTransport> {
    pub fn from_client(client: Client, namespace: impl Into<String>) -> Self {
        Self::new(KubeEventTransport::new(client), namespace)
    }
}

impl<T: EventTransport> NamespacedEventClient<T> {
    pub fn new(transport: T, namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            transport,
        }
    }

    /// The bound namespace, empty when cluster-wide
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    fn ensure_namespace(&self, operation: Operation, target: &str) -> Result<()> {
        if !self.namespace.is_empty() && target != self.namespace {
            return Err(EventsError::NamespaceMismatch {
                operation,
                event_namespace: target.to_string(),
                client_namespace: self.namespace.clone(),
            });
        }
        Ok(())
    }

    /// Create `event` in its own namespace and return the server's copy
    #[instrument(skip(self, event), fields(namespace = event_namespace(event)))]
    pub async fn create_in_namespace(&self, event: &Event) -> Result<Event> {
        let namespace = event_namespace(event);
        self.ensure_namespace(Operation::Create, namespace)?;

        self.transport
            .create(namespace, event)
            .await
            .map_err(|source| EventsError::Transport {
                operation: Operation::Create,
                source,
            })
    }

    /// Replace the stored event with `event`.
    ///
    /// `event` must carry the resourceVersion it was read at; the server
    /// rejects the update otherwise.
    #[instrument(skip(self, event), fields(namespace = event_namespace(event), name = event_name(event)))]
    pub async fn update_in_namespace(&self, event: &Event) -> Result<Event> {
        let namespace = event_namespace(event);
        self.ensure_namespace(Operation::Update, namespace)?;

        self.transport
            .replace(namespace, event_name(event), event)
            .await
            .map_err(|source| EventsError::Transport {
                operation: Operation::Update,
                source,
            })
    }

    /// Apply a strategic merge patch to the event addressed by `event`'s
    /// namespace and name
    #[instrument(skip(self, event, patch), fields(namespace = event_namespace(event), name = event_name(event)))]
    pub async fn patch_in_namespace(&self, event: &Event, patch: &[u8]) -> Result<Event> {
        let namespace = event_namespace(event);
        self.ensure_namespace(Operation::Patch, namespace)?;

        self.transport
            .patch(namespace, event_name(event), patch)
            .await
            .map_err(|source| EventsError::Transport {
                operation: Operation::Patch,
                source,
            })
    }

    /// Find the events about `obj`.
    ///
    /// `obj` must live in the bound namespace unless the client is cluster-wide.
    #[instrument(skip(self, resolver, obj))]
    pub async fn search<K, R>(&self, resolver: &R, obj: &K) -> Result<EventList>
    where
        K: ?Sized,
        R: ReferenceResolver<K>,
    {
        let reference = resolver.resolve(obj)?;
        let namespace = reference.namespace.as_deref().unwrap_or_default();
        self.ensure_namespace(Operation::Search, namespace)?;

        let selector = self.field_selector(
            non_empty(&reference.name),
            non_empty(&reference.namespace),
            non_empty(&reference.kind),
            non_empty(&reference.uid),
        );
        debug!("Searching events with field selector '{}'", selector);

        self.transport
            .list(&self.namespace, &selector.to_string())
            .await
            .map_err(|source| EventsError::Transport {
                operation: Operation::Search,
                source,
            })
    }

    /// Selector for events about an involved object, using the field names of
    /// the API version the transport speaks
    pub fn field_selector(
        &self,
        name: Option<&str>,
        namespace: Option<&str>,
        kind: Option<&str>,
        uid: Option<&str>,
    ) -> FieldSelector {
        build_field_selector(self.transport.api_version(), name, namespace, kind, uid)
    }
}

fn event_namespace(event: &Event) -> &str {
    event.metadata.namespace.as_deref().unwrap_or_default()
}

fn event_name(event: &Event) -> &str {
    event.metadata.name.as_deref().unwrap_or_default()
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}
