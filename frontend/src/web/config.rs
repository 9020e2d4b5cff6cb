//! 构建期环境变量
//!
//! WASM 中没有进程环境，变量在编译时通过 `option_env!` 固化。

use classtrack_shared::config::{
    ConfigSource, VAR_API_URL, VAR_FETCH_TIMEOUT_MS, VAR_LOG_LEVEL, VAR_LOGIN_DELAY_MS,
};

pub struct BuildEnv;

impl ConfigSource for BuildEnv {
    fn var(&self, name: &str) -> Option<String> {
        let value = match name {
            VAR_API_URL => option_env!("CLASSTRACK_API_URL"),
            VAR_FETCH_TIMEOUT_MS => option_env!("CLASSTRACK_FETCH_TIMEOUT_MS"),
            VAR_LOGIN_DELAY_MS => option_env!("CLASSTRACK_LOGIN_DELAY_MS"),
            VAR_LOG_LEVEL => option_env!("CLASSTRACK_LOG_LEVEL"),
            _ => None,
        };
        value.map(str::to_string)
    }
}
