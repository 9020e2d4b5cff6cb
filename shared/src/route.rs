//! 路由定义模块 - 领域模型
//!
//! 纯粹的业务逻辑层，不依赖于 DOM 或 web_sys。
//! 定义了应用的所有路由、访问角色以及守卫决策。

use std::fmt::Display;

use log::debug;

/// 访问视图所需的角色
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// 仅限未登录用户（入口页、登录页）
    Anonymous,
    /// 仅限已登录用户
    Authenticated,
}

/// 登录页的用户类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LoginKind {
    Student,
    Teacher,
    Admin,
}

impl LoginKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Student => "Student",
            Self::Teacher => "Teacher",
            Self::Admin => "Admin",
        }
    }
}

/// 应用路由枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppRoute {
    /// 入口页 (默认路由)
    #[default]
    Landing,
    Login(LoginKind),
    Dashboard,
    Schedule,
    Tasks,
    Tests,
    Reports,
    Attendance,
    Chat,
    Notes,
    Settings,
    /// 页面未找到（位于已认证区域内）
    NotFound,
}

impl AppRoute {
    /// 所有已认证视图，按侧边栏顺序排列
    pub const APP_VIEWS: [AppRoute; 10] = [
        Self::Dashboard,
        Self::Schedule,
        Self::Tasks,
        Self::Tests,
        Self::Reports,
        Self::Attendance,
        Self::Chat,
        Self::Notes,
        Self::Settings,
        Self::NotFound,
    ];

    /// 所有匿名视图
    pub const ANONYMOUS_VIEWS: [AppRoute; 4] = [
        Self::Landing,
        Self::Login(LoginKind::Student),
        Self::Login(LoginKind::Teacher),
        Self::Login(LoginKind::Admin),
    ];

    /// 将 URL path 解析为路由枚举
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        match path {
            "" => Self::Landing,
            "/student-login" => Self::Login(LoginKind::Student),
            "/teacher/login" => Self::Login(LoginKind::Teacher),
            "/admin/login" => Self::Login(LoginKind::Admin),
            "/dashboard" => Self::Dashboard,
            "/schedule" => Self::Schedule,
            "/tasks" => Self::Tasks,
            "/tests" => Self::Tests,
            "/reports" => Self::Reports,
            "/attendance" => Self::Attendance,
            "/chat" => Self::Chat,
            "/notes" => Self::Notes,
            "/settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    /// 获取路由对应的 URL path
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Login(LoginKind::Student) => "/student-login",
            Self::Login(LoginKind::Teacher) => "/teacher/login",
            Self::Login(LoginKind::Admin) => "/admin/login",
            Self::Dashboard => "/dashboard",
            Self::Schedule => "/schedule",
            Self::Tasks => "/tasks",
            Self::Tests => "/tests",
            Self::Reports => "/reports",
            Self::Attendance => "/attendance",
            Self::Chat => "/chat",
            Self::Notes => "/notes",
            Self::Settings => "/settings",
            Self::NotFound => "/404",
        }
    }

    /// **核心守卫属性：访问该路由所需的角色**
    pub fn requires_role(&self) -> Role {
        match self {
            Self::Landing | Self::Login(_) => Role::Anonymous,
            _ => Role::Authenticated,
        }
    }

    /// 认证失败时的重定向目标（匿名入口）
    pub fn anonymous_entry_point() -> Self {
        Self::Landing
    }

    /// 已认证用户访问匿名页面时的重定向目标
    pub fn authenticated_home() -> Self {
        Self::Dashboard
    }
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// 守卫决策
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderDecision {
    Render(AppRoute),
    Redirect(AppRoute),
}

impl RenderDecision {
    /// 决策执行后最终展示的路由
    pub fn target(&self) -> AppRoute {
        match self {
            Self::Render(route) | Self::Redirect(route) => *route,
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, Self::Redirect(_))
    }

    /// 决策写入浏览器历史的方式
    ///
    /// 只有用户主动导航且未被重定向时新增历史记录，其余情况替换当前记录。
    pub fn history_mode(&self, cause: NavigationCause) -> HistoryMode {
        match (cause, self) {
            (NavigationCause::User, Self::Render(_)) => HistoryMode::Push,
            _ => HistoryMode::Replace,
        }
    }
}

/// 触发导航的来源
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationCause {
    /// 点击链接或菜单
    User,
    /// 启动或浏览器前进/后退
    Restore,
    /// 登录、注销等会话变化
    SessionChange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryMode {
    Push,
    Replace,
}

/// **路由守卫**
///
/// 规则按顺序匹配，第一条命中即返回：
/// 1. 需要认证但未认证 → 重定向到匿名入口
/// 2. 仅限匿名但已认证 → 重定向到已认证首页
/// 3. 否则渲染目标路由
///
/// 每次导航都必须重新求值，不缓存结果。
pub fn guard(requested: AppRoute, is_authenticated: bool) -> RenderDecision {
    match (requested.requires_role(), is_authenticated) {
        (Role::Authenticated, false) => {
            debug!("[Router] Access to {} denied, redirecting to entry.", requested);
            RenderDecision::Redirect(AppRoute::anonymous_entry_point())
        }
        (Role::Anonymous, true) => {
            debug!("[Router] Already authenticated, leaving {}.", requested);
            RenderDecision::Redirect(AppRoute::authenticated_home())
        }
        _ => RenderDecision::Render(requested),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_views_redirect_anonymous_users() {
        for view in AppRoute::APP_VIEWS {
            assert_eq!(
                guard(view, false),
                RenderDecision::Redirect(AppRoute::Landing),
                "view {}",
                view
            );
        }
    }

    #[test]
    fn test_anonymous_views_redirect_authenticated_users() {
        for view in AppRoute::ANONYMOUS_VIEWS {
            assert_eq!(
                guard(view, true),
                RenderDecision::Redirect(AppRoute::Dashboard),
                "view {}",
                view
            );
        }
    }

    #[test]
    fn test_matching_role_renders() {
        for view in AppRoute::APP_VIEWS {
            assert_eq!(guard(view, true), RenderDecision::Render(view));
        }
        for view in AppRoute::ANONYMOUS_VIEWS {
            assert_eq!(guard(view, false), RenderDecision::Render(view));
        }
    }

    #[test]
    fn test_only_user_render_pushes_history() {
        let render = RenderDecision::Render(AppRoute::Tasks);
        let redirect = RenderDecision::Redirect(AppRoute::Dashboard);

        assert_eq!(render.history_mode(NavigationCause::User), HistoryMode::Push);
        assert_eq!(redirect.history_mode(NavigationCause::User), HistoryMode::Replace);
        assert_eq!(render.history_mode(NavigationCause::Restore), HistoryMode::Replace);
        // 登录后守卫已重新求值，再次验证得到的是 Render，也不能新增记录
        assert_eq!(render.history_mode(NavigationCause::SessionChange), HistoryMode::Replace);
        assert_eq!(redirect.history_mode(NavigationCause::SessionChange), HistoryMode::Replace);
    }

    #[test]
    fn test_path_round_trip_for_known_routes() {
        for view in AppRoute::APP_VIEWS
            .into_iter()
            .chain(AppRoute::ANONYMOUS_VIEWS)
            .filter(|r| *r != AppRoute::NotFound)
        {
            assert_eq!(AppRoute::from_path(view.to_path()), view);
        }
    }

    #[test]
    fn test_unknown_paths_are_not_found_and_protected() {
        let route = AppRoute::from_path("/grades/2024");
        assert_eq!(route, AppRoute::NotFound);
        assert_eq!(route.requires_role(), Role::Authenticated);
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        assert_eq!(AppRoute::from_path("/tasks/"), AppRoute::Tasks);
        assert_eq!(AppRoute::from_path("/"), AppRoute::Landing);
    }

    #[test]
    fn test_decision_target() {
        assert_eq!(
            RenderDecision::Redirect(AppRoute::Landing).target(),
            AppRoute::Landing
        );
        assert!(!RenderDecision::Render(AppRoute::Tasks).is_redirect());
    }
}
