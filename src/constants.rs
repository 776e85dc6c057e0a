// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Field paths understood by the API server when filtering events
pub mod fields {
    /// Name of the involved object for every API version served today
    pub const INVOLVED_OBJECT_NAME: &str = "involvedObject.name";
    pub const INVOLVED_OBJECT_NAMESPACE: &str = "involvedObject.namespace";
    pub const INVOLVED_OBJECT_KIND: &str = "involvedObject.kind";
    pub const INVOLVED_OBJECT_UID: &str = "involvedObject.uid";
}

/// Environment variables read by the command-line entry point
pub mod env {
    /// Namespace the event client is bound to; unset or empty means cluster-wide
    pub const NAMESPACE: &str = "EVENTS_NAMESPACE";
    /// Optional kubeconfig file used instead of the inferred configuration
    pub const KUBECONFIG_PATH: &str = "KUBECONFIG_PATH";
    pub const INVOLVED_KIND: &str = "INVOLVED_KIND";
    pub const INVOLVED_NAME: &str = "INVOLVED_NAME";
    pub const INVOLVED_NAMESPACE: &str = "INVOLVED_NAMESPACE";
    pub const INVOLVED_UID: &str = "INVOLVED_UID";
}
