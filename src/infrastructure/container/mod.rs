//! Container module

pub mod registry;
pub mod shared;
pub mod stats;

pub use registry::{factory, Factory, Registry, Service};
pub use shared::SharedRegistry;
pub use stats::RegistryStats;

/// 服务生命周期
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceLifetime {
    /// 首次解析后缓存，之后每次返回同一实例
    Singleton,
    /// 每次解析都创建新实例
    Transient,
}

impl ServiceLifetime {
    pub fn is_singleton(self) -> bool {
        self == ServiceLifetime::Singleton
    }
}
