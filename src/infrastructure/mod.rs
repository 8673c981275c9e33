//! 基础设施层
//!
//! 目前只包含服务注册表（依赖注入容器）

pub mod container;

pub use container::{
    Factory, Registry, RegistryStats, Service, ServiceLifetime, SharedRegistry,
};
