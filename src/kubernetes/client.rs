// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation

use crate::config::Config;
use crate::error::{EventsError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::Client;
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from the configured kubeconfig file, or from the
/// inferred in-cluster / local configuration when none is set
#[instrument(skip(config))]
pub async fn create_client(config: &Config) -> Result<Client> {
    match &config.kubeconfig_path {
        Some(path) => {
            info!("Creating Kubernetes client from {}", path.display());
            let kubeconfig = read_kubeconfig(path).await?;
            create_client_from_kubeconfig(&kubeconfig).await
        }
        None => {
            debug!("Inferring Kubernetes client configuration");
            Ok(Client::try_default().await?)
        }
    }
}

async fn read_kubeconfig(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path).await.map_err(|e| {
        EventsError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })
}

/// Create a Kubernetes client from a kubeconfig string
async fn create_client_from_kubeconfig(kubeconfig: &str) -> Result<Client> {
    let kubeconfig_parsed: Kubeconfig = serde_yaml::from_str(kubeconfig)
        .map_err(|e| EventsError::KubeconfigError(format!("Failed to parse kubeconfig: {}", e)))?;

    let client_config =
        kube::Config::from_custom_kubeconfig(kubeconfig_parsed, &KubeConfigOptions::default())
            .await
            .map_err(|e| {
                EventsError::KubeconfigError(format!("Failed to create config: {}", e))
            })?;

    Client::try_from(client_config)
        .map_err(|e| EventsError::KubeconfigError(format!("Failed to create client: {}", e)))
}
