//! 解析统计

use std::fmt;

/// 注册表统计信息
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryStats {
    /// `resolve` 调用总次数（包括工厂内部的嵌套解析）
    pub total_resolutions: usize,
    /// 单例命中缓存的次数（值条目也计入）
    pub cache_hits: usize,
    /// 单例未命中缓存的次数
    pub cache_misses: usize,
    /// 工厂被调用的次数
    pub constructions: usize,
    /// 请求了未注册标识的次数
    pub not_found: usize,
}

impl RegistryStats {
    /// 获取总解析次数
    pub fn total(&self) -> usize {
        self.total_resolutions
    }

    /// 单例缓存命中率，没有单例查询时为 0
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.cache_hits + self.cache_misses;
        if lookups == 0 {
            0.0
        } else {
            self.cache_hits as f64 / lookups as f64
        }
    }
}

impl fmt::Display for RegistryStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "resolutions={} hits={} misses={} constructions={} not_found={} hit_rate={:.2}",
            self.total_resolutions,
            self.cache_hits,
            self.cache_misses,
            self.constructions,
            self.not_found,
            self.hit_rate()
        )
    }
}
