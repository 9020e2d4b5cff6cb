//! 运行时配置
//!
//! 通过 [`ConfigSource`] 读取变量，缺失或非法的值回退到默认值。
//! 前端在构建期通过 `option_env!` 提供变量，测试中使用内存实现。

use log::{LevelFilter, warn};

/// 这些是默认值，如果构建环境中没有定义对应变量，则使用这些值
pub const DEFAULT_API_URL: &str = "http://localhost:5678/webhook/mock-student-data";
pub const DEFAULT_FETCH_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_LOGIN_DELAY_MS: u32 = 1_500;
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;

pub const VAR_API_URL: &str = "CLASSTRACK_API_URL";
pub const VAR_FETCH_TIMEOUT_MS: &str = "CLASSTRACK_FETCH_TIMEOUT_MS";
pub const VAR_LOGIN_DELAY_MS: &str = "CLASSTRACK_LOGIN_DELAY_MS";
pub const VAR_LOG_LEVEL: &str = "CLASSTRACK_LOG_LEVEL";

/// 抽象配置来源接口
pub trait ConfigSource {
    fn var(&self, name: &str) -> Option<String>;
}

/// 门户配置
#[derive(Debug, Clone, PartialEq)]
pub struct PortalConfig {
    /// 数据源地址（末尾不带 `/`）
    pub api_url: String,
    /// 等待数据源的最长时间，超时后视为失败并使用回退数据
    pub fetch_timeout_ms: u32,
    /// 模拟登录延迟
    pub login_delay_ms: u32,
    pub log_level: LevelFilter,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PortalConfig {
    pub fn from_source(source: &impl ConfigSource) -> Self {
        let defaults = Self::default();
        Self {
            api_url: source
                .var(VAR_API_URL)
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.api_url),
            fetch_timeout_ms: parse_or(source, VAR_FETCH_TIMEOUT_MS, defaults.fetch_timeout_ms),
            login_delay_ms: parse_or(source, VAR_LOGIN_DELAY_MS, defaults.login_delay_ms),
            log_level: parse_or(source, VAR_LOG_LEVEL, defaults.log_level),
        }
    }

    /// 任务状态更新地址
    pub fn task_url(&self, task_id: u32) -> String {
        format!("{}/tasks/{}", self.api_url, task_id)
    }
}

fn parse_or<T: std::str::FromStr>(source: &impl ConfigSource, name: &str, default: T) -> T {
    match source.var(name) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("[Config] Invalid value {:?} for {}, using default.", raw, name);
            default
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct MockEnv {
        vars: HashMap<String, String>,
    }

    impl MockEnv {
        fn new() -> Self {
            Self {
                vars: HashMap::new(),
            }
        }

        fn with_var(mut self, name: &str, value: &str) -> Self {
            self.vars.insert(name.to_string(), value.to_string());
            self
        }
    }

    impl ConfigSource for MockEnv {
        fn var(&self, name: &str) -> Option<String> {
            self.vars.get(name).cloned()
        }
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = PortalConfig::from_source(&MockEnv::new());
        assert_eq!(config, PortalConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let env = MockEnv::new()
            .with_var(VAR_API_URL, "https://portal.example.edu/api/")
            .with_var(VAR_FETCH_TIMEOUT_MS, "250")
            .with_var(VAR_LOG_LEVEL, "debug");

        let config = PortalConfig::from_source(&env);
        assert_eq!(config.api_url, "https://portal.example.edu/api");
        assert_eq!(config.fetch_timeout_ms, 250);
        assert_eq!(config.login_delay_ms, DEFAULT_LOGIN_DELAY_MS);
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.task_url(4), "https://portal.example.edu/api/tasks/4");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let env = MockEnv::new()
            .with_var(VAR_FETCH_TIMEOUT_MS, "soon")
            .with_var(VAR_API_URL, "   ");

        let config = PortalConfig::from_source(&env);
        assert_eq!(config.fetch_timeout_ms, DEFAULT_FETCH_TIMEOUT_MS);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
