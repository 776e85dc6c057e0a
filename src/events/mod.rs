// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace-safe event operations and involved-object search.

pub mod client;
pub mod reference;
pub mod selector;

pub use client::{EventList, NamespacedEventClient};
pub use reference::{DynamicResolver, ExistingReference, ReferenceResolver, TypedResolver};
pub use selector::{build_field_selector, involved_object_name_field_label, FieldSelector};
