use thiserror::Error;

/// 注册表解析错误
#[derive(Debug, Error)]
pub enum RegistryError {
    /// 标识未注册（`must_resolve` 系列）
    #[error("service [{0}] not defined")]
    ServiceNotDefined(String),
    /// 已注册，但存储的值不是请求的类型
    #[error("service [{id}] is not of type {expected}")]
    TypeMismatch { id: String, expected: &'static str },
}

impl RegistryError {
    /// 出错的服务标识
    pub fn id(&self) -> &str {
        match self {
            RegistryError::ServiceNotDefined(id) => id,
            RegistryError::TypeMismatch { id, .. } => id,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read file '{0}': {1}")]
    FileRead(String, #[source] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// 结果类型别名
pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_defined_message_carries_id() {
        let err = RegistryError::ServiceNotDefined("db".to_string());
        assert_eq!(err.to_string(), "service [db] not defined");
        assert_eq!(err.id(), "db");
    }

    #[test]
    fn test_type_mismatch_message() {
        let err = RegistryError::TypeMismatch {
            id: "port".to_string(),
            expected: "u16",
        };
        assert_eq!(err.to_string(), "service [port] is not of type u16");
        assert_eq!(err.id(), "port");
    }
}
