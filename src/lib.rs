//! 字符串标识的依赖注入服务注册表
//!
//! ```
//! use svc_registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.define_singleton("greeting", |_| "hello".to_string());
//! registry.define_singleton("message", |reg: &mut Registry| {
//!     let greeting = reg.resolve_as::<String>("greeting").unwrap();
//!     format!("{} world", greeting)
//! });
//!
//! let message = registry.must_resolve_as::<String>("message").unwrap();
//! assert_eq!(message.as_str(), "hello world");
//! ```

pub mod config;
pub mod errors;
pub mod infrastructure;
pub mod logging;

pub use config::RegistryConfig;
pub use errors::{ConfigError, RegistryError, Result};
pub use infrastructure::container::{
    factory, Factory, Registry, RegistryStats, Service, ServiceLifetime, SharedRegistry,
};
