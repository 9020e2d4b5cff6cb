//! ClassTrack Pro 前端应用
//!
//! 采用 Context-Driven 的高内聚低耦合架构：
//! - `classtrack_shared::shell`: 门户状态机（会话、守卫、选择器）
//! - `web::router`: 路由服务（History API 同步）
//! - `auth`: 认证上下文
//! - `components`: UI 组件层

mod api;
mod auth;
mod components {
    pub mod add_task_dialog;
    pub mod chat;
    pub mod dashboard;
    pub mod exams;
    pub mod landing;
    pub mod layout;
    pub mod login;
    pub mod not_found;
    pub mod notes;
    pub mod reports;
    pub mod schedule;
    pub mod settings;
    pub mod tasks;
}

use classtrack_shared::config::PortalConfig;
use classtrack_shared::route::AppRoute;
use classtrack_shared::shell::Shell;
use leptos::prelude::*;

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::landing::LandingPage;
use crate::components::layout::AppLayout;
use crate::components::login::LoginPage;
use crate::components::reports::{AttendancePage, ReportsPage};
use crate::components::schedule::SchedulePage;
use crate::components::chat::ChatPage;
use crate::components::exams::TestsPage;
use crate::components::not_found::NotFoundPage;
use crate::components::notes::NotesPage;
use crate::components::settings::SettingsPage;
use crate::components::tasks::TasksPage;

// 原生 Web API 封装模块
pub(crate) mod web {
    pub mod clock;
    mod config;
    mod logger;
    pub mod router;
    mod storage;

    pub use config::BuildEnv;
    pub use logger::ConsoleLogger;
    pub use storage::LocalStorage;
}

use web::router::{Router, RouterOutlet};
use web::{BuildEnv, ConsoleLogger, LocalStorage};

/// 安装控制台日志器，级别来自构建期配置
pub fn init_logging() {
    let config = PortalConfig::from_source(&BuildEnv);
    ConsoleLogger::install(config.log_level);
}

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件，已认证视图包裹在侧边栏布局中。
fn route_matcher(route: AppRoute) -> AnyView {
    let page = match route {
        AppRoute::Landing => return view! { <LandingPage /> }.into_any(),
        AppRoute::Login(kind) => return view! { <LoginPage kind=kind /> }.into_any(),
        AppRoute::Dashboard => view! { <DashboardPage /> }.into_any(),
        AppRoute::Schedule => view! { <SchedulePage /> }.into_any(),
        AppRoute::Tasks => view! { <TasksPage /> }.into_any(),
        AppRoute::Reports => view! { <ReportsPage /> }.into_any(),
        AppRoute::Attendance => view! { <AttendancePage /> }.into_any(),
        AppRoute::Tests => view! { <TestsPage /> }.into_any(),
        AppRoute::Chat => view! { <ChatPage /> }.into_any(),
        AppRoute::Notes => view! { <NotesPage /> }.into_any(),
        AppRoute::Settings => view! { <SettingsPage /> }.into_any(),
        AppRoute::NotFound => view! { <NotFoundPage /> }.into_any(),
    };

    view! { <AppLayout>{page}</AppLayout> }.into_any()
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 读取配置并从 LocalStorage 恢复会话
    let config = PortalConfig::from_source(&BuildEnv);
    let auth_ctx = AuthContext::new(Shell::new(LocalStorage), config);
    provide_context(auth_ctx);

    // 2. 获取认证状态信号，用于注入路由服务
    let is_authenticated = auth_ctx.is_authenticated_signal();

    view! {
        // 3. 路由器组件：对地址栏路由执行守卫并监听会话变化
        <Router shell=auth_ctx.shell is_authenticated=is_authenticated>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
