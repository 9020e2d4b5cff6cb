//! 顶层状态机
//!
//! 组合会话存储、路由守卫、侧边栏/星期选择器、课表与任务列表，
//! 以及测验、笔记、聊天与设置页的视图状态。
//! 会话与视图选择只能通过这里的方法修改，UI 层持有 `Shell` 并在每次修改后重新渲染。
//! 实现了"请求 -> 验证(Guard) -> 应用"的导航流程。

use chrono::NaiveDate;
use log::{info, warn};

use crate::chat::{ChatBoard, Message};
use crate::error::PortalResult;
use crate::exams::{Exam, ExamBoard, ExamFilter, ExamStats};
use crate::notes::{Note, NoteDraft, NoteList};
use crate::route::{AppRoute, RenderDecision, guard};
use crate::schedule::{ClassEntry, DayKey, ScheduleTable, ScheduleView, day_selector};
use crate::selector::{NavItem, ViewSelector, nav_item_for, nav_items, section_selector};
use crate::session::{KeyValueStore, Session, SessionStore};
use crate::settings::SettingsState;
use crate::tasks::{Task, TaskFilter, TaskList, TaskStats};
use crate::{PortalData, fixture};

pub struct Shell<S: KeyValueStore> {
    sessions: SessionStore<S>,
    route: AppRoute,
    sections: ViewSelector<&'static str>,
    days: ViewSelector<DayKey>,
    schedule: ScheduleTable,
    tasks: TaskList,
    task_filter: TaskFilter,
    exams: ExamBoard,
    exam_filter: ExamFilter,
    notes: NoteList,
    chats: ChatBoard,
    settings: SettingsState,
    sidebar_open: bool,
}

impl<S: KeyValueStore> Shell<S> {
    /// 创建状态机，会话从持久化存储恢复，停留在匿名入口
    pub fn new(store: S) -> Self {
        Self {
            sessions: SessionStore::new(store),
            route: AppRoute::anonymous_entry_point(),
            sections: section_selector(),
            days: day_selector(),
            schedule: fixture::weekly_schedule(),
            tasks: TaskList::default(),
            task_filter: TaskFilter::default(),
            exams: ExamBoard::new(fixture::exams()),
            exam_filter: ExamFilter::default(),
            notes: NoteList::new(fixture::notes()),
            chats: ChatBoard::new(fixture::conversations()),
            settings: SettingsState::new(fixture::settings_form()),
            sidebar_open: false,
        }
    }

    /// 启动：从持久化状态恢复后对初始路由执行一次守卫
    pub fn boot(store: S, initial: AppRoute) -> (Self, RenderDecision) {
        let mut shell = Self::new(store);
        let decision = shell.navigate(initial);
        (shell, decision)
    }

    // =========================================================
    // 导航与守卫
    // =========================================================

    /// **核心方法：导航与守卫**
    ///
    /// 每次调用都以当前会话重新求值，应用决策后的目标路由。
    /// 重定向的执行（History 操作）由调用方负责。
    pub fn navigate(&mut self, requested: AppRoute) -> RenderDecision {
        let decision = guard(requested, self.sessions.is_authenticated());
        self.apply(decision.target());
        decision
    }

    /// 以当前会话重新验证当前路由（会话变化后调用）
    pub fn revalidate(&mut self) -> RenderDecision {
        self.navigate(self.route)
    }

    fn apply(&mut self, route: AppRoute) {
        self.route = route;
        if let Some(item) = nav_item_for(route) {
            self.sections.select(&item.id);
        }
        self.sidebar_open = false;
    }

    pub fn current_route(&self) -> AppRoute {
        self.route
    }

    /// 侧边栏导航：按菜单项 ID 选择
    ///
    /// 未知 ID 不改变任何状态，返回 `None`。
    pub fn select_section(&mut self, id: &str) -> Option<RenderDecision> {
        let item = nav_items().find(|item| item.id == id);
        match item {
            Some(item) => Some(self.navigate(item.route)),
            None => {
                warn!("[Selector] Ignoring unknown section {:?}.", id);
                None
            }
        }
    }

    pub fn active_section(&self) -> &'static str {
        *self.sections.current()
    }

    pub fn is_section_active(&self, item: &NavItem) -> bool {
        self.sections.is_active(&item.id)
    }

    // =========================================================
    // 会话
    // =========================================================

    pub fn session(&self) -> &Session {
        self.sessions.session()
    }

    pub fn is_authenticated(&self) -> bool {
        self.sessions.is_authenticated()
    }

    /// 登录并重新验证当前路由（登录页会被重定向到首页）
    pub fn login(&mut self, subject_id: impl Into<String>) -> RenderDecision {
        self.sessions.login(subject_id);
        self.revalidate()
    }

    /// 注销并返回匿名入口
    pub fn logout(&mut self) -> RenderDecision {
        self.sessions.logout();
        self.tasks = TaskList::default();
        self.task_filter = TaskFilter::default();
        self.days = day_selector();
        self.sections = section_selector();
        self.exams = ExamBoard::new(fixture::exams());
        self.exam_filter = ExamFilter::default();
        self.notes = NoteList::new(fixture::notes());
        self.chats = ChatBoard::new(fixture::conversations());
        self.settings = SettingsState::new(fixture::settings_form());
        info!("[Router] Session cleared, returning to {}.", AppRoute::anonymous_entry_point());
        self.navigate(AppRoute::anonymous_entry_point())
    }

    /// 持久化状态被外部修改后同步
    pub fn reload_session(&mut self) -> RenderDecision {
        self.sessions.reload();
        self.revalidate()
    }

    // =========================================================
    // 课表
    // =========================================================

    /// 选择星期并同步返回新的课表视图
    pub fn select_day(&mut self, day: DayKey) -> ScheduleView<'_> {
        self.days.select(&day);
        self.schedule_view()
    }

    pub fn active_day(&self) -> DayKey {
        *self.days.current()
    }

    pub fn days(&self) -> &ViewSelector<DayKey> {
        &self.days
    }

    pub fn schedule_view(&self) -> ScheduleView<'_> {
        self.schedule.view_for(self.active_day())
    }

    pub fn classes_for(&self, day: &str) -> &[ClassEntry] {
        self.schedule.classes_for(day)
    }

    // =========================================================
    // 任务
    // =========================================================

    pub fn toggle_task(&mut self, id: u32) -> PortalResult<Task> {
        self.tasks.toggle(id).map_err(|e| e.in_op("shell.toggle_task"))
    }

    pub fn add_task(&mut self, title: impl Into<String>, due_date: NaiveDate) -> PortalResult<Task> {
        self.tasks.add(title, due_date).cloned()
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// 每次调用都从完整任务集合重新计算
    pub fn task_stats(&self) -> TaskStats {
        self.tasks.stats()
    }

    pub fn set_task_filter(&mut self, filter: TaskFilter) {
        self.task_filter = filter;
    }

    pub fn task_filter(&self) -> TaskFilter {
        self.task_filter
    }

    pub fn visible_tasks(&self) -> Vec<Task> {
        self.tasks.filtered(self.task_filter).cloned().collect()
    }

    // =========================================================
    // 测验
    // =========================================================

    pub fn exams(&self) -> &ExamBoard {
        &self.exams
    }

    pub fn exam_stats(&self) -> ExamStats {
        self.exams.stats()
    }

    pub fn set_exam_filter(&mut self, filter: ExamFilter) {
        self.exam_filter = filter;
    }

    pub fn exam_filter(&self) -> ExamFilter {
        self.exam_filter
    }

    pub fn visible_exams(&self) -> Vec<Exam> {
        self.exams.filtered(self.exam_filter).cloned().collect()
    }

    // =========================================================
    // 笔记
    // =========================================================

    pub fn notes(&self) -> &NoteList {
        &self.notes
    }

    pub fn search_notes(&mut self, query: impl Into<String>) {
        self.notes.set_query(query);
    }

    pub fn visible_notes(&self) -> Vec<Note> {
        self.notes.visible().cloned().collect()
    }

    pub fn select_note(&mut self, id: u32) -> PortalResult<Note> {
        self.notes
            .select(id)
            .cloned()
            .map_err(|e| e.in_op("shell.select_note"))
    }

    pub fn add_note(&mut self, draft: NoteDraft, date: NaiveDate) -> PortalResult<Note> {
        self.notes.add(draft, date).cloned()
    }

    // =========================================================
    // 聊天
    // =========================================================

    pub fn chats(&self) -> &ChatBoard {
        &self.chats
    }

    pub fn select_chat(&mut self, id: u32) -> PortalResult<()> {
        self.chats
            .select(id)
            .map(|_| ())
            .map_err(|e| e.in_op("shell.select_chat"))
    }

    pub fn send_message(&mut self, text: &str, time: impl Into<String>) -> PortalResult<Message> {
        self.chats.send(text, time).cloned()
    }

    // =========================================================
    // 设置
    // =========================================================

    pub fn settings(&self) -> &SettingsState {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut SettingsState {
        &mut self.settings
    }

    // =========================================================
    // 数据加载
    // =========================================================

    /// 异步加载完成：整体替换任务与课表
    ///
    /// 数据中不含课表时保留当前课表。
    pub fn apply_data(&mut self, data: &PortalData) {
        self.tasks.replace(data.tasks.clone());
        if !data.schedule.is_empty() {
            self.schedule = ScheduleTable::from_items(&data.schedule);
        }
    }

    // =========================================================
    // 移动端侧边栏
    // =========================================================

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn close_sidebar(&mut self) {
        self.sidebar_open = false;
    }

    pub fn is_sidebar_open(&self) -> bool {
        self.sidebar_open
    }
}

#[cfg(test)]
mod tests;
