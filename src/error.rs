// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

/// The event operation a failure belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Update,
    Patch,
    Search,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Update => "update",
            Operation::Patch => "patch",
            Operation::Search => "search",
        }
    }

    fn mismatch_message(&self, event_namespace: &str, client_namespace: &str) -> String {
        match self {
            Operation::Search => format!(
                "won't be able to find any events of namespace '{}' in namespace '{}'",
                event_namespace, client_namespace
            ),
            _ => format!(
                "can't {} an event with namespace '{}' in namespace '{}'",
                self.as_str(),
                event_namespace,
                client_namespace
            ),
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum EventsError {
    #[error("{}", .operation.mismatch_message(.event_namespace, .client_namespace))]
    NamespaceMismatch {
        operation: Operation,
        event_namespace: String,
        client_namespace: String,
    },

    #[error("Failed to resolve object reference: {0}")]
    ReferenceResolution(String),

    #[error("Failed to {operation} events: {source}")]
    Transport {
        operation: Operation,
        #[source]
        source: kube::Error,
    },

    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Failed to parse kubeconfig: {0}")]
    KubeconfigError(String),
}

impl EventsError {
    /// Whether this is a local namespace precondition failure
    pub fn is_namespace_mismatch(&self) -> bool {
        matches!(self, EventsError::NamespaceMismatch { .. })
    }
}

pub type Result<T> = std::result::Result<T, EventsError>;
