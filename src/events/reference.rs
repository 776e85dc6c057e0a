// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Resolution of arbitrary objects into the reference an event points at.

use crate::error::{EventsError, Result};
use k8s_openapi::api::core::v1::ObjectReference;
use kube::{api::DynamicObject, Resource};

/// Turns an object of type `K` into an [`ObjectReference`]
pub trait ReferenceResolver<K: ?Sized> {
    fn resolve(&self, obj: &K) -> Result<ObjectReference>;
}

/// Resolves statically typed resources, taking kind and apiVersion from the type
#[derive(Debug, Clone, Copy, Default)]
pub struct TypedResolver;

impl<K> ReferenceResolver<K> for TypedResolver
where
    K: Resource<DynamicType = ()>,
{
    fn resolve(&self, obj: &K) -> Result<ObjectReference> {
        Ok(obj.object_ref(&()))
    }
}

/// Resolves untyped objects from the type information they carry
#[derive(Debug, Clone, Copy, Default)]
pub struct DynamicResolver;

impl ReferenceResolver<DynamicObject> for DynamicResolver {
    fn resolve(&self, obj: &DynamicObject) -> Result<ObjectReference> {
        let Some(types) = obj.types.as_ref().filter(|t| !t.kind.is_empty()) else {
            return Err(EventsError::ReferenceResolution(format!(
                "object {:?} carries no kind",
                obj.metadata.name
            )));
        };

        Ok(ObjectReference {
            api_version: Some(types.api_version.clone()),
            kind: Some(types.kind.clone()),
            name: obj.metadata.name.clone(),
            namespace: obj.metadata.namespace.clone(),
            uid: obj.metadata.uid.clone(),
            resource_version: obj.metadata.resource_version.clone(),
            ..Default::default()
        })
    }
}

/// Passes an already built reference through untouched
#[derive(Debug, Clone, Copy, Default)]
pub struct ExistingReference;

impl ReferenceResolver<ObjectReference> for ExistingReference {
    fn resolve(&self, obj: &ObjectReference) -> Result<ObjectReference> {
        Ok(obj.clone())
    }
}
