//! 单选视图状态机
//!
//! 在 N 个选项中恰好保持一个处于激活状态，用于侧边栏导航和星期选择器。

use std::fmt::Debug;

use log::warn;

use crate::route::{AppRoute, Role};

/// 单选状态机
///
/// 不变量：选项非空且不重复，`active` 始终指向一个已注册的选项。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSelector<K> {
    options: Vec<K>,
    active: usize,
}

impl<K: Clone + PartialEq + Debug> ViewSelector<K> {
    /// 创建选择器，第一个选项初始激活
    ///
    /// 通过 `first` 参数在类型层面保证选项非空；重复选项会被忽略。
    pub fn new(first: K, rest: impl IntoIterator<Item = K>) -> Self {
        let mut options = vec![first];
        for option in rest {
            if !options.contains(&option) {
                options.push(option);
            }
        }
        Self { options, active: 0 }
    }

    /// 激活指定选项
    ///
    /// 未知选项是非致命情况：记录日志，保持原选择不变，返回 `false`。
    pub fn select(&mut self, id: &K) -> bool {
        match self.options.iter().position(|option| option == id) {
            Some(index) => {
                self.active = index;
                true
            }
            None => {
                warn!("[Selector] Ignoring unknown selection {:?}.", id);
                false
            }
        }
    }

    pub fn current(&self) -> &K {
        &self.options[self.active]
    }

    pub fn is_active(&self, id: &K) -> bool {
        self.current() == id
    }

    pub fn contains(&self, id: &K) -> bool {
        self.options.contains(id)
    }

    pub fn options(&self) -> &[K] {
        &self.options
    }

    /// 按注册顺序遍历选项及其激活状态
    pub fn entries(&self) -> impl Iterator<Item = (&K, bool)> + '_ {
        self.options
            .iter()
            .enumerate()
            .map(move |(index, option)| (option, index == self.active))
    }
}

// =========================================================
// 侧边栏导航项
// =========================================================

/// 侧边栏菜单项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    /// Font Awesome 图标类名
    pub icon: &'static str,
    pub route: AppRoute,
    pub badge: Option<u32>,
}

impl NavItem {
    pub fn requires_role(&self) -> Role {
        self.route.requires_role()
    }
}

/// 侧边栏主菜单
pub const MAIN_MENU: [NavItem; 7] = [
    NavItem {
        id: "dashboard",
        label: "Dashboard",
        icon: "fas fa-chart-bar",
        route: AppRoute::Dashboard,
        badge: None,
    },
    NavItem {
        id: "schedule",
        label: "Schedule",
        icon: "fas fa-calendar",
        route: AppRoute::Schedule,
        badge: None,
    },
    NavItem {
        id: "tasks",
        label: "Tasks",
        icon: "fas fa-tasks",
        route: AppRoute::Tasks,
        badge: Some(3),
    },
    NavItem {
        id: "tests",
        label: "Tests",
        icon: "fas fa-file-alt",
        route: AppRoute::Tests,
        badge: None,
    },
    NavItem {
        id: "reports",
        label: "Reports",
        icon: "fas fa-chart-line",
        route: AppRoute::Reports,
        badge: None,
    },
    NavItem {
        id: "chat",
        label: "Chat",
        icon: "fas fa-comments",
        route: AppRoute::Chat,
        badge: None,
    },
    NavItem {
        id: "notes",
        label: "Notes",
        icon: "fas fa-sticky-note",
        route: AppRoute::Notes,
        badge: Some(2),
    },
];

/// 侧边栏底部菜单（注销按钮单独渲染）
pub const FOOTER_MENU: [NavItem; 1] = [NavItem {
    id: "settings",
    label: "Settings",
    icon: "fas fa-cog",
    route: AppRoute::Settings,
    badge: None,
}];

/// 所有可导航的菜单项
pub fn nav_items() -> impl Iterator<Item = &'static NavItem> {
    MAIN_MENU.iter().chain(FOOTER_MENU.iter())
}

/// 查找路由对应的菜单项
pub fn nav_item_for(route: AppRoute) -> Option<&'static NavItem> {
    nav_items().find(|item| item.route == route)
}

/// 侧边栏选择器：以菜单项 ID 为键
pub fn section_selector() -> ViewSelector<&'static str> {
    let mut ids = nav_items().map(|item| item.id);
    // MAIN_MENU 非空
    let first = ids.next().unwrap_or("dashboard");
    ViewSelector::new(first, ids)
}
