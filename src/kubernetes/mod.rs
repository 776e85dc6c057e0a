// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Kubernetes client creation and the events transport.

pub mod client;
pub mod transport;

pub use client::create_client;
pub use transport::{EventTransport, KubeEventTransport};
