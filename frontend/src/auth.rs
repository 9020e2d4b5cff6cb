//! 认证模块
//!
//! 持有门户状态机 [`Shell`]，会话只通过它修改。
//! 路由服务监听派生的认证信号，会话变化后自动重新执行守卫。

use classtrack_shared::config::PortalConfig;
use classtrack_shared::shell::Shell;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use log::info;

use crate::web::LocalStorage;

pub type PortalShell = Shell<LocalStorage>;

/// 认证上下文
///
/// 所有字段都是 `Copy` 的句柄，通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub shell: RwSignal<PortalShell>,
    pub config: StoredValue<PortalConfig>,
}

impl AuthContext {
    pub fn new(shell: PortalShell, config: PortalConfig) -> Self {
        Self {
            shell: RwSignal::new(shell),
            config: StoredValue::new(config),
        }
    }

    /// 获取认证状态信号（用于路由服务注入）
    ///
    /// 仅在认证状态真正变化时通知订阅者。
    pub fn is_authenticated_signal(&self) -> Signal<bool> {
        let shell = self.shell;
        Memo::new(move |_| shell.with(|s| s.is_authenticated())).into()
    }

    /// 当前登录的学号
    pub fn subject_id(&self) -> Signal<String> {
        let shell = self.shell;
        Signal::derive(move || {
            shell.with(|s| s.session().subject_id().unwrap_or_default().to_string())
        })
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 模拟登录校验
///
/// 等待配置的延迟后返回，不修改会话。调用方在用户确认后调用 [`login`]。
pub async fn verify_credentials(ctx: &AuthContext, subject_id: &str, pin: &str) -> bool {
    let delay = ctx.config.with_value(|c| c.login_delay_ms);
    TimeoutFuture::new(delay).await;
    !subject_id.trim().is_empty() && !pin.is_empty()
}

/// 登录并保存状态
///
/// 导航由路由服务的认证状态监听自动处理。
pub fn login(ctx: &AuthContext, subject_id: String) {
    ctx.shell.update(|shell| {
        shell.login(subject_id.trim());
    });
}

/// 注销并清除状态
pub fn logout(ctx: &AuthContext) {
    info!("[Session] Logout requested.");
    ctx.shell.update(|shell| {
        shell.logout();
    });
}
