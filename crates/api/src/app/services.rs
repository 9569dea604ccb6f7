//! Resource service layer: narrow per-resource interfaces behind which the
//! actual store lives, plus the default in-memory wiring.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::Utc;
use uuid::Uuid;

use openchoreo_core::{ListOptions, MAX_PAGE_SIZE, PageResult, ServiceError, ServiceResult};
use openchoreo_domain::{
    Component, ComponentType, Environment, Organization, ReleaseBinding, Resource, SecretReference,
    Workload,
};

/// Scope passed for cluster-scoped resources (no namespace in the path).
pub const CLUSTER_SCOPE: &str = "";

/// CRUD surface a resource service exposes to the handlers.
///
/// In production this fronts the Kubernetes API server through a typed
/// client; here the default implementation is an in-memory store. Handlers
/// only ever see this trait.
#[async_trait]
pub trait ResourceService<T>: Send + Sync {
    async fn list(&self, namespace: &str, opts: ListOptions) -> ServiceResult<PageResult<T>>;
    async fn get(&self, namespace: &str, name: &str) -> ServiceResult<T>;
    async fn create(&self, namespace: &str, resource: T) -> ServiceResult<T>;
    async fn update(&self, namespace: &str, resource: T) -> ServiceResult<T>;
    async fn delete(&self, namespace: &str, name: &str) -> ServiceResult<()>;
}

/// Aggregator of all resource services, injected into handlers via
/// `Extension<Arc<AppServices>>`.
pub struct AppServices {
    pub components: Arc<dyn ResourceService<Component>>,
    pub component_types: Arc<dyn ResourceService<ComponentType>>,
    pub workloads: Arc<dyn ResourceService<Workload>>,
    pub release_bindings: Arc<dyn ResourceService<ReleaseBinding>>,
    pub environments: Arc<dyn ResourceService<Environment>>,
    pub organizations: Arc<dyn ResourceService<Organization>>,
    pub secret_references: Arc<dyn ResourceService<SecretReference>>,
}

/// Default wiring: every resource type backed by its own in-memory store.
pub fn build_services() -> AppServices {
    AppServices {
        components: Arc::new(InMemoryResourceService::new()),
        component_types: Arc::new(InMemoryResourceService::new()),
        workloads: Arc::new(InMemoryResourceService::new()),
        release_bindings: Arc::new(InMemoryResourceService::new()),
        environments: Arc::new(InMemoryResourceService::new()),
        organizations: Arc::new(InMemoryResourceService::new()),
        secret_references: Arc::new(InMemoryResourceService::new()),
    }
}

/// In-memory, name-ordered resource store.
///
/// Stand-in for the Kubernetes-backed client that keeps the pagination
/// contract honest: stable (namespace, name) ordering and opaque cursors.
/// The cursor encodes the last returned name; an undecodable cursor is a
/// validation error here, never in the normalizer.
pub struct InMemoryResourceService<T> {
    items: Mutex<BTreeMap<(String, String), T>>,
}

impl<T> InMemoryResourceService<T> {
    pub fn new() -> Self {
        Self {
            items: Mutex::new(BTreeMap::new()),
        }
    }
}

impl<T> Default for InMemoryResourceService<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn encode_cursor(name: &str) -> String {
    URL_SAFE_NO_PAD.encode(name.as_bytes())
}

fn decode_cursor(cursor: &str) -> ServiceResult<String> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|_| ServiceError::validation("invalid cursor"))?;
    String::from_utf8(bytes).map_err(|_| ServiceError::validation("invalid cursor"))
}

#[async_trait]
impl<T: Resource> ResourceService<T> for InMemoryResourceService<T> {
    async fn list(&self, namespace: &str, opts: ListOptions) -> ServiceResult<PageResult<T>> {
        let after = match opts.cursor.as_deref() {
            Some(c) => Some(decode_cursor(c)?),
            None => None,
        };
        let limit = opts.limit.clamp(1, MAX_PAGE_SIZE) as usize;

        let items = self
            .items
            .lock()
            .map_err(|_| ServiceError::internal("store lock poisoned"))?;

        let mut page: Vec<T> = Vec::with_capacity(limit);
        let mut next_cursor = None;
        for ((ns, name), item) in items.iter() {
            if ns != namespace {
                continue;
            }
            if let Some(after) = &after {
                if name <= after {
                    continue;
                }
            }
            if page.len() == limit {
                // One item past the page boundary: more remain.
                next_cursor = page.last().map(|r| encode_cursor(&r.metadata().name));
                break;
            }
            page.push(item.clone());
        }

        Ok(PageResult {
            items: page,
            next_cursor,
        })
    }

    async fn get(&self, namespace: &str, name: &str) -> ServiceResult<T> {
        let items = self
            .items
            .lock()
            .map_err(|_| ServiceError::internal("store lock poisoned"))?;
        items
            .get(&(namespace.to_string(), name.to_string()))
            .cloned()
            .ok_or_else(|| ServiceError::not_found(T::KIND))
    }

    async fn create(&self, namespace: &str, mut resource: T) -> ServiceResult<T> {
        let name = resource.metadata().name.clone();
        if name.is_empty() {
            return Err(ServiceError::validation("resource name is required"));
        }

        let mut items = self
            .items
            .lock()
            .map_err(|_| ServiceError::internal("store lock poisoned"))?;

        let key = (namespace.to_string(), name.clone());
        if items.contains_key(&key) {
            return Err(ServiceError::already_exists(format!(
                "{} {name:?} already exists",
                T::KIND
            )));
        }

        let meta = resource.metadata_mut();
        meta.namespace = (!namespace.is_empty()).then(|| namespace.to_string());
        meta.uid = Some(Uuid::now_v7());
        meta.creation_timestamp = Some(Utc::now());

        items.insert(key, resource.clone());
        Ok(resource)
    }

    async fn update(&self, namespace: &str, mut resource: T) -> ServiceResult<T> {
        let name = resource.metadata().name.clone();
        if name.is_empty() {
            return Err(ServiceError::validation("resource name is required"));
        }

        let mut items = self
            .items
            .lock()
            .map_err(|_| ServiceError::internal("store lock poisoned"))?;

        let key = (namespace.to_string(), name);
        let existing = items
            .get(&key)
            .ok_or_else(|| ServiceError::not_found(T::KIND))?;

        // Full replace, but server-managed metadata stays with the store.
        let (uid, created_at) = {
            let existing_meta = existing.metadata();
            (existing_meta.uid, existing_meta.creation_timestamp)
        };
        let meta = resource.metadata_mut();
        meta.namespace = (!namespace.is_empty()).then(|| namespace.to_string());
        meta.uid = uid;
        meta.creation_timestamp = created_at;

        items.insert(key, resource.clone());
        Ok(resource)
    }

    async fn delete(&self, namespace: &str, name: &str) -> ServiceResult<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| ServiceError::internal("store lock poisoned"))?;
        items
            .remove(&(namespace.to_string(), name.to_string()))
            .map(|_| ())
            .ok_or_else(|| ServiceError::not_found(T::KIND))
    }
}
