//! 基于字符串标识的服务注册表
//!
//! 两张表：
//! - 定义表：标识 -> 工厂 + 生命周期
//! - 缓存表：标识 -> 已构造的单例
//!
//! 工厂拿到注册表本身（`&mut Registry`），可以在构造过程中继续解析其他服务，
//! 依赖图因此在首次需要时按调用顺序深度优先展开。
//!
//! 注意：
//! - 注册表不做任何同步，跨线程请使用 [`super::SharedRegistry`]
//! - 没有循环依赖检测，工厂在返回前解析自己的标识会无限递归
//! - 重新定义一个已缓存的单例不会清除旧缓存，只有 [`Registry::delete`] 会

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, trace, warn};

use super::stats::RegistryStats;
use super::ServiceLifetime;
use crate::config::RegistryConfig;
use crate::errors::{RegistryError, Result};

/// 类型擦除后的服务实例
pub type Service = Arc<dyn Any + Send + Sync>;

/// 服务工厂
pub type Factory = Arc<dyn Fn(&mut Registry) -> Service + Send + Sync>;

/// 把普通闭包包装成 [`Factory`]
pub fn factory<T, F>(f: F) -> Factory
where
    F: Fn(&mut Registry) -> T + Send + Sync + 'static,
    T: Any + Send + Sync,
{
    Arc::new(move |registry: &mut Registry| -> Service { Arc::new(f(registry)) })
}

#[derive(Clone)]
struct Definition {
    /// 值条目没有工厂
    factory: Option<Factory>,
    lifetime: ServiceLifetime,
}

/// 服务注册表
pub struct Registry {
    name: String,
    definitions: HashMap<String, Definition>,
    services: HashMap<String, Service>,
    collect_stats: bool,
    stats: RegistryStats,
}

impl Registry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::named("default")
    }

    /// 创建带名称的空注册表，名称只用于日志
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            definitions: HashMap::new(),
            services: HashMap::new(),
            collect_stats: true,
            stats: RegistryStats::default(),
        }
    }

    /// 按配置创建注册表，`[values]` 中的每一项注册为值条目（`toml::Value`）
    pub fn with_config(config: &RegistryConfig) -> Self {
        let mut registry = Self::named(config.name.clone());
        registry.collect_stats = config.collect_stats;
        for (id, value) in &config.values {
            registry.define_value(id.clone(), value.clone());
        }
        debug!(
            registry = %registry.name,
            values = config.values.len(),
            "Registry created from config"
        );
        registry
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 注册（或覆盖）服务定义，不影响缓存表
    pub fn define_service(
        &mut self,
        id: impl Into<String>,
        factory: Factory,
        lifetime: ServiceLifetime,
    ) {
        self.insert_definition(id.into(), Some(factory), lifetime);
    }

    /// 注册单例服务
    pub fn define_singleton<T, F>(&mut self, id: impl Into<String>, f: F)
    where
        F: Fn(&mut Registry) -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.define_service(id, factory(f), ServiceLifetime::Singleton);
    }

    /// 注册瞬态服务
    pub fn define_transient<T, F>(&mut self, id: impl Into<String>, f: F)
    where
        F: Fn(&mut Registry) -> T + Send + Sync + 'static,
        T: Any + Send + Sync,
    {
        self.define_service(id, factory(f), ServiceLifetime::Transient);
    }

    /// 注册字面值：无工厂的单例，缓存立即写入
    pub fn define_value<T>(&mut self, id: impl Into<String>, value: T)
    where
        T: Any + Send + Sync,
    {
        let id = id.into();
        self.insert_definition(id.clone(), None, ServiceLifetime::Singleton);
        self.services.insert(id, Arc::new(value));
    }

    fn insert_definition(&mut self, id: String, factory: Option<Factory>, lifetime: ServiceLifetime) {
        debug!(
            registry = %self.name,
            id = %id,
            lifetime = ?lifetime,
            has_factory = factory.is_some(),
            "Service defined"
        );
        self.definitions.insert(id, Definition { factory, lifetime });
    }

    /// 解析服务，未注册时返回 `None`
    pub fn resolve(&mut self, id: &str) -> Option<Service> {
        self.record(|s| s.total_resolutions += 1);

        let Some(Definition { factory, lifetime }) = self.definitions.get(id).cloned() else {
            self.record(|s| s.not_found += 1);
            trace!(registry = %self.name, id, "Service not defined");
            return None;
        };

        if lifetime.is_singleton() {
            if let Some(service) = self.services.get(id) {
                let service = service.clone();
                self.record(|s| s.cache_hits += 1);
                trace!(registry = %self.name, id, "Singleton cache hit");
                return Some(service);
            }
            self.record(|s| s.cache_misses += 1);
        }

        let Some(factory) = factory else {
            // 只有值条目没有工厂，而值条目的缓存在注册时已写入
            warn!(registry = %self.name, id, "Service has neither factory nor cached value");
            self.record(|s| s.not_found += 1);
            return None;
        };

        self.record(|s| s.constructions += 1);
        debug!(registry = %self.name, id, lifetime = ?lifetime, "Constructing service");
        let service = factory(self);

        if lifetime.is_singleton() {
            self.services.insert(id.to_string(), service.clone());
        }
        Some(service)
    }

    /// 解析服务，未注册时返回 [`RegistryError::ServiceNotDefined`]
    pub fn must_resolve(&mut self, id: &str) -> Result<Service> {
        self.resolve(id)
            .ok_or_else(|| RegistryError::ServiceNotDefined(id.to_string()))
    }

    /// 解析并向下转型，未注册或类型不符时返回 `None`
    pub fn resolve_as<T>(&mut self, id: &str) -> Option<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.resolve(id)?.downcast::<T>().ok()
    }

    /// 解析并向下转型，区分未注册与类型不符
    pub fn must_resolve_as<T>(&mut self, id: &str) -> Result<Arc<T>>
    where
        T: Any + Send + Sync,
    {
        self.must_resolve(id)?
            .downcast::<T>()
            .map_err(|_| RegistryError::TypeMismatch {
                id: id.to_string(),
                expected: type_name::<T>(),
            })
    }

    /// 返回原始工厂而不调用它
    ///
    /// 未注册与值条目（无工厂）都返回 `None`，调用方无法仅凭此区分两者。
    pub fn raw(&self, id: &str) -> Option<Factory> {
        self.definitions.get(id).and_then(|def| def.factory.clone())
    }

    /// 是否存在定义，不查看缓存
    pub fn has(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// 删除定义和缓存，两者都不存在时什么也不做
    pub fn delete(&mut self, id: &str) {
        let cached = self.services.remove(id).is_some();
        let defined = self.definitions.remove(id).is_some();
        debug!(registry = %self.name, id, defined, cached, "Service deleted");
    }

    /// 该标识当前是否有缓存值
    pub fn is_cached(&self, id: &str) -> bool {
        self.services.contains_key(id)
    }

    pub fn lifetime(&self, id: &str) -> Option<ServiceLifetime> {
        self.definitions.get(id).map(|def| def.lifetime)
    }

    /// 已定义的标识，按字典序
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.definitions.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// 获取统计快照
    pub fn stats(&self) -> RegistryStats {
        self.stats
    }

    pub fn reset_stats(&mut self) {
        self.stats = RegistryStats::default();
    }

    fn record(&mut self, update: impl FnOnce(&mut RegistryStats)) {
        if self.collect_stats {
            update(&mut self.stats);
        }
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cached: Vec<&str> = self.services.keys().map(String::as_str).collect();
        cached.sort_unstable();
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("defined", &self.ids())
            .field("cached", &cached)
            .field("stats", &self.stats)
            .finish()
    }
}
