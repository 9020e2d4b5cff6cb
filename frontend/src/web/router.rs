//! 路由服务模块 - 核心引擎
//!
//! 封装了 web_sys 的 History API，实现高内聚：
//! 所有对 window.history 的操作都集中在此模块。
//! 守卫决策由状态机给出，这里只负责把决策同步到地址栏。

use classtrack_shared::route::{AppRoute, HistoryMode, NavigationCause, RenderDecision};
use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::prelude::*;

use crate::auth::PortalShell;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 地址栏与路由不一致时写入 History
///
/// 重定向与会话变化总是替换当前记录，避免后退按钮回到被拒绝的页面。
fn sync_history(decision: RenderDecision, cause: NavigationCause) {
    let path = decision.target().to_path();
    if current_path() == path {
        return;
    }
    match decision.history_mode(cause) {
        HistoryMode::Push => push_history_state(path),
        HistoryMode::Replace => replace_history_state(path),
    }
}

/// 路由器服务
///
/// 封装所有路由操作，通过 Signal 驱动界面更新。
/// 当前路由由状态机持有，这里派生只读信号。
#[derive(Clone, Copy)]
pub struct RouterService {
    shell: RwSignal<PortalShell>,
    current_route: Memo<AppRoute>,
    /// 认证状态检查（注入的信号，实现解耦）
    is_authenticated: Signal<bool>,
}

impl RouterService {
    /// 创建新的路由服务，并对地址栏中的初始路由执行一次守卫
    fn new(shell: RwSignal<PortalShell>, is_authenticated: Signal<bool>) -> Self {
        let router = Self {
            shell,
            current_route: Memo::new(move |_| shell.with(|s| s.current_route())),
            is_authenticated,
        };
        router.navigate_to_route(AppRoute::from_path(&current_path()), NavigationCause::Restore);
        router
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> Memo<AppRoute> {
        self.current_route
    }

    /// **核心方法：导航与守卫**
    ///
    /// 流程：请求 -> 验证(Guard) -> 处理 -> 加载
    pub fn navigate(&self, route: AppRoute) {
        self.navigate_to_route(route, NavigationCause::User);
    }

    /// 侧边栏导航，未知 ID 不做任何事
    pub fn select_section(&self, id: &str) {
        let decision = self
            .shell
            .try_update(|shell| shell.select_section(id))
            .flatten();
        if let Some(decision) = decision {
            sync_history(decision, NavigationCause::User);
        }
    }

    /// 导航到指定路由
    ///
    /// # Arguments
    /// * `target_route` - 目标路由
    /// * `cause` - 导航来源，决定使用 pushState 还是 replaceState
    fn navigate_to_route(&self, target_route: AppRoute, cause: NavigationCause) {
        let Some(decision) = self.shell.try_update(|shell| shell.navigate(target_route)) else {
            return;
        };
        if decision.is_redirect() {
            info!(
                "[Router] {} is not available for this session. Redirecting to {}.",
                target_route,
                decision.target()
            );
        }
        sync_history(decision, cause);
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let router = *self;

        let closure = Closure::<dyn Fn()>::new(move || {
            // popstate 时也执行守卫逻辑
            let target_route = AppRoute::from_path(&current_path());
            debug!("[Router] popstate -> {}", target_route);
            router.navigate_to_route(target_route, NavigationCause::Restore);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }

    /// 设置认证状态变化时的自动重定向
    fn setup_auth_redirect(&self) {
        let shell = self.shell;
        let is_authenticated = self.is_authenticated;

        // 使用 Effect 监听认证状态变化
        Effect::new(move |_| {
            let is_auth = is_authenticated.get();
            let Some(decision) = shell.try_update(|s| s.revalidate()) else {
                return;
            };
            debug!(
                "[Router] Auth state changed (authenticated: {}), now at {}.",
                is_auth,
                decision.target()
            );
            sync_history(decision, NavigationCause::SessionChange);
        });
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router(shell: RwSignal<PortalShell>, is_authenticated: Signal<bool>) -> RouterService {
    let router = RouterService::new(shell, is_authenticated);

    // 初始化监听器
    router.init_popstate_listener();
    router.setup_auth_redirect();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 门户状态机
    shell: RwSignal<PortalShell>,
    /// 认证状态信号
    is_authenticated: Signal<bool>,
    /// 子组件
    children: Children,
) -> impl IntoView {
    // 提供路由服务到 Context
    provide_router(shell, is_authenticated);

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || {
        let current = router.current_route().get();
        matcher(current)
    }
}

/// 站内链接
///
/// 拦截点击，通过路由服务导航而不是整页跳转。
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(into, optional)] class: String,
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(to);
    };

    view! {
        <a href=to.to_path() class=class on:click=on_click>
            {children()}
        </a>
    }
}
