//! 线程安全的注册表包装
//!
//! [`Registry`] 本身不做同步；需要跨线程共享时用互斥锁把整个注册表包起来。
//! 每个操作持有锁直到返回，工厂内部的嵌套解析直接使用已借出的
//! `&mut Registry`，不会重复加锁。
//!
//! 锁不可重入：工厂内部若调用捕获的 `SharedRegistry` 克隆会死锁，应改用传入的 `&mut Registry`。

use std::any::Any;
use std::sync::Arc;

use parking_lot::Mutex;

use super::registry::{Factory, Registry, Service};
use super::stats::RegistryStats;
use super::ServiceLifetime;
use crate::errors::Result;

/// 可克隆、可跨线程共享的注册表句柄
#[derive(Clone, Default)]
pub struct SharedRegistry {
    inner: Arc<Mutex<Registry>>,
}

impl SharedRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 在锁内直接操作底层注册表
    pub fn with<R>(&self, f: impl FnOnce(&mut Registry) -> R) -> R {
        f(&mut self.inner.lock())
    }

    pub fn define_service(&self, id: impl Into<String>, factory: Factory, lifetime: ServiceLifetime) {
        self.inner.lock().define_service(id, factory, lifetime);
    }

    pub fn define_singleton<T, F>(&self, id: impl Into<String>, f: F)
    where
        F: Fn(&mut Registry) -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.inner.lock().define_singleton(id, f);
    }

    pub fn define_transient<T, F>(&self, id: impl Into<String>, f: F)
    where
        F: Fn(&mut Registry) -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.inner.lock().define_transient(id, f);
    }

    pub fn define_value<T>(&self, id: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        self.inner.lock().define_value(id, value);
    }

    pub fn resolve(&self, id: &str) -> Option<Service> {
        self.inner.lock().resolve(id)
    }

    pub fn must_resolve(&self, id: &str) -> Result<Service> {
        self.inner.lock().must_resolve(id)
    }

    pub fn resolve_as<T>(&self, id: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.inner.lock().resolve_as(id)
    }

    pub fn must_resolve_as<T>(&self, id: &str) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.inner.lock().must_resolve_as(id)
    }

    pub fn raw(&self, id: &str) -> Option<Factory> {
        self.inner.lock().raw(id)
    }

    pub fn has(&self, id: &str) -> bool {
        self.inner.lock().has(id)
    }

    pub fn delete(&self, id: &str) {
        self.inner.lock().delete(id);
    }

    pub fn stats(&self) -> RegistryStats {
        self.inner.lock().stats()
    }
}

impl From<Registry> for SharedRegistry {
    fn from(registry: Registry) -> Self {
        Self {
            inner: Arc::new(Mutex::new(registry)),
        }
    }
}
