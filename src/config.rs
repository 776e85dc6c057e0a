// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::env as vars;
use anyhow::{bail, Result};
use k8s_openapi::api::core::v1::ObjectReference;
use std::env;
use std::path::PathBuf;

/// Configuration loaded from environment variables
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Namespace the event client is bound to, empty for cluster-wide
    pub namespace: String,
    /// Kubeconfig file to use instead of the inferred configuration
    pub kubeconfig_path: Option<PathBuf>,
    /// Object whose events are looked up
    pub involved_object: ObjectReference,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.is_empty());

        let mut involved_object = ObjectReference {
            kind: non_empty(vars::INVOLVED_KIND),
            name: non_empty(vars::INVOLVED_NAME),
            namespace: non_empty(vars::INVOLVED_NAMESPACE),
            uid: non_empty(vars::INVOLVED_UID),
            ..Default::default()
        };
        if involved_object.kind.is_none()
            && involved_object.name.is_none()
            && involved_object.namespace.is_none()
            && involved_object.uid.is_none()
        {
            bail!(
                "none of {}, {}, {} or {} is set",
                vars::INVOLVED_KIND,
                vars::INVOLVED_NAME,
                vars::INVOLVED_NAMESPACE,
                vars::INVOLVED_UID
            );
        }

        let namespace = lookup(vars::NAMESPACE).unwrap_or_default();
        if involved_object.namespace.is_none() && !namespace.is_empty() {
            involved_object.namespace = Some(namespace.clone());
        }

        Ok(Config {
            namespace,
            kubeconfig_path: non_empty(vars::KUBECONFIG_PATH).map(PathBuf::from),
            involved_object,
        })
    }
}
