use super::*;
use crate::exams::ExamFilter;
use crate::notes::NoteDraft;
use crate::route::{HistoryMode, LoginKind, NavigationCause};
use crate::settings::{ProfileField, SettingsTab};
use crate::session::MemoryStore;
use crate::{STORAGE_AUTHENTICATED_KEY, STORAGE_STUDENT_NUMBER_KEY};

// =========================================================
// 辅助函数
// =========================================================

fn anonymous_shell() -> (Shell<MemoryStore>, MemoryStore) {
    let storage = MemoryStore::new();
    (Shell::new(storage.clone()), storage)
}

fn logged_in_shell() -> (Shell<MemoryStore>, MemoryStore) {
    let (mut shell, storage) = anonymous_shell();
    shell.navigate(AppRoute::Login(LoginKind::Student));
    shell.login("2021-0001");
    (shell, storage)
}

// =========================================================
// 导航与守卫
// =========================================================

#[test]
fn test_boot_without_session_redirects_protected_route() {
    let (shell, decision) = Shell::boot(MemoryStore::new(), AppRoute::Tasks);
    assert_eq!(decision, RenderDecision::Redirect(AppRoute::Landing));
    assert_eq!(shell.current_route(), AppRoute::Landing);
}

#[test]
fn test_boot_with_persisted_session_renders_protected_route() {
    let storage = MemoryStore::new();
    storage.set(STORAGE_AUTHENTICATED_KEY, "true");
    storage.set(STORAGE_STUDENT_NUMBER_KEY, "2021-0001");

    let (shell, decision) = Shell::boot(storage, AppRoute::Schedule);
    assert_eq!(decision, RenderDecision::Render(AppRoute::Schedule));
    assert_eq!(shell.active_section(), "schedule");
}

#[test]
fn test_login_redirects_away_from_login_page() {
    let (mut shell, _) = anonymous_shell();
    assert_eq!(
        shell.navigate(AppRoute::Login(LoginKind::Teacher)),
        RenderDecision::Render(AppRoute::Login(LoginKind::Teacher))
    );

    let decision = shell.login("T-100");
    assert_eq!(decision, RenderDecision::Redirect(AppRoute::Dashboard));
    assert_eq!(shell.current_route(), AppRoute::Dashboard);
    assert_eq!(shell.session().subject_id(), Some("T-100"));
}

#[test]
fn test_session_change_replaces_login_page_in_history() {
    let (mut shell, _) = anonymous_shell();
    shell.navigate(AppRoute::Login(LoginKind::Student));
    shell.login("2021-0001");

    // 认证信号的监听者随后再次验证，此时已停留在首页
    let decision = shell.revalidate();
    assert_eq!(decision, RenderDecision::Render(AppRoute::Dashboard));
    assert_eq!(
        decision.history_mode(NavigationCause::SessionChange),
        HistoryMode::Replace
    );

    shell.logout();
    let decision = shell.revalidate();
    assert_eq!(decision, RenderDecision::Render(AppRoute::Landing));
    assert_eq!(
        decision.history_mode(NavigationCause::SessionChange),
        HistoryMode::Replace
    );
}

#[test]
fn test_guard_is_reevaluated_after_logout() {
    let (mut shell, storage) = logged_in_shell();
    assert_eq!(
        shell.navigate(AppRoute::Notes),
        RenderDecision::Render(AppRoute::Notes)
    );

    assert_eq!(shell.logout(), RenderDecision::Render(AppRoute::Landing));
    assert!(!storage.contains(STORAGE_AUTHENTICATED_KEY));
    assert_eq!(
        shell.navigate(AppRoute::Notes),
        RenderDecision::Redirect(AppRoute::Landing)
    );
}

#[test]
fn test_external_logout_is_picked_up_on_reload() {
    let (mut shell, storage) = logged_in_shell();
    shell.navigate(AppRoute::Reports);

    storage.delete(STORAGE_AUTHENTICATED_KEY);
    assert_eq!(
        shell.reload_session(),
        RenderDecision::Redirect(AppRoute::Landing)
    );
}

// =========================================================
// 侧边栏
// =========================================================

#[test]
fn test_section_follows_route() {
    let (mut shell, _) = logged_in_shell();
    assert_eq!(shell.active_section(), "dashboard");

    shell.navigate(AppRoute::Tasks);
    assert_eq!(shell.active_section(), "tasks");

    // 非菜单路由不改变激活项
    shell.navigate(AppRoute::NotFound);
    assert_eq!(shell.active_section(), "tasks");
}

#[test]
fn test_select_section_by_id() {
    let (mut shell, _) = logged_in_shell();
    assert_eq!(
        shell.select_section("settings"),
        Some(RenderDecision::Render(AppRoute::Settings))
    );
    let active: Vec<_> = crate::selector::nav_items()
        .filter(|item| shell.is_section_active(item))
        .map(|item| item.id)
        .collect();
    assert_eq!(active, vec!["settings"]);
}

#[test]
fn test_unknown_section_is_noop() {
    let (mut shell, _) = logged_in_shell();
    shell.navigate(AppRoute::Chat);
    assert_eq!(shell.select_section("grades"), None);
    assert_eq!(shell.current_route(), AppRoute::Chat);
    assert_eq!(shell.active_section(), "chat");
}

#[test]
fn test_navigation_closes_mobile_sidebar() {
    let (mut shell, _) = logged_in_shell();
    shell.toggle_sidebar();
    assert!(shell.is_sidebar_open());
    shell.navigate(AppRoute::Schedule);
    assert!(!shell.is_sidebar_open());
}

// =========================================================
// 课表与任务
// =========================================================

#[test]
fn test_select_day_renders_synchronously() {
    let (mut shell, _) = logged_in_shell();
    assert_eq!(shell.active_day(), DayKey::Monday);

    match shell.select_day(DayKey::Thursday) {
        ScheduleView::Classes(classes) => {
            assert_eq!(classes.len(), 1);
            assert_eq!(classes[0].subject, "Physics Lab");
        }
        ScheduleView::NoClasses => panic!("thursday has classes"),
    }
    assert_eq!(shell.active_day(), DayKey::Thursday);
}

#[test]
fn test_apply_data_replaces_tasks_and_schedule() {
    let (mut shell, _) = logged_in_shell();
    let data = fixture::fallback_data();
    shell.apply_data(&data);

    assert_eq!(shell.task_stats().total, 3);
    // 数据源课表中周五没有课程
    assert_eq!(shell.select_day(DayKey::Friday), ScheduleView::NoClasses);
    assert_eq!(shell.classes_for("thursday")[0].subject, "English");
}

#[test]
fn test_loaded_schedule_does_not_depend_on_entry_page() {
    let storage = MemoryStore::new();
    storage.set(STORAGE_AUTHENTICATED_KEY, "true");
    storage.set(STORAGE_STUDENT_NUMBER_KEY, "2021-0001");
    let data = fixture::fallback_data();

    // 直接进入课表页：挂载时加载
    let (mut direct, _) = Shell::boot(storage.clone(), AppRoute::Schedule);
    direct.apply_data(&data);

    // 先进入仪表盘加载，再切换到课表页并再次加载
    let (mut via_dashboard, _) = Shell::boot(storage, AppRoute::Dashboard);
    via_dashboard.apply_data(&data);
    via_dashboard.navigate(AppRoute::Schedule);
    via_dashboard.apply_data(&data);

    assert_eq!(direct.classes_for("thursday"), via_dashboard.classes_for("thursday"));
    assert_eq!(direct.classes_for("thursday")[0].subject, "English");
    for day in DayKey::ALL {
        assert_eq!(direct.classes_for(day.key()), via_dashboard.classes_for(day.key()));
    }
}

#[test]
fn test_toggle_and_filter_tasks() {
    let (mut shell, _) = logged_in_shell();
    shell.apply_data(&fixture::fallback_data());

    shell.set_task_filter(TaskFilter::Completed);
    assert_eq!(shell.visible_tasks().len(), 1);

    let task = shell.toggle_task(1).unwrap();
    assert!(task.is_completed());
    assert_eq!(shell.visible_tasks().len(), 2);
    assert_eq!(shell.task_stats().pending, 1);

    let err = shell.toggle_task(42).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.spans().len(), 2);
}

#[test]
fn test_task_list_and_counts_agree_after_toggle() {
    let (mut shell, _) = logged_in_shell();
    let data = fixture::fallback_data();
    shell.apply_data(&data);

    shell.toggle_task(3).unwrap();
    let pending = shell
        .tasks()
        .tasks()
        .iter()
        .filter(|t| !t.is_completed())
        .count();
    assert_eq!(pending, shell.task_stats().pending);
    assert_ne!(shell.tasks().tasks(), data.tasks.as_slice());
}

#[test]
fn test_logout_resets_view_state() {
    let (mut shell, _) = logged_in_shell();
    shell.apply_data(&fixture::fallback_data());
    shell.select_day(DayKey::Wednesday);
    shell.set_task_filter(TaskFilter::Pending);
    shell.set_exam_filter(ExamFilter::Completed);
    shell.search_notes("physics");
    shell.select_chat(2).unwrap();
    shell.send_message("see you there", "1:50 PM").unwrap();
    shell.settings_mut().select_tab(SettingsTab::Privacy);

    shell.logout();
    assert_eq!(shell.active_day(), DayKey::Monday);
    assert_eq!(shell.task_filter(), TaskFilter::All);
    assert_eq!(shell.task_stats().total, 0);
    assert_eq!(shell.exam_filter(), ExamFilter::All);
    assert_eq!(shell.notes().query(), "");
    assert!(shell.chats().is_selected(1));
    let group = &shell.chats().conversations()[1];
    assert_eq!(group.unread, 5);
    assert_eq!(group.messages.len(), 1);
    assert_eq!(shell.settings().active_tab(), SettingsTab::Profile);
}

// =========================================================
// 测验、笔记、聊天与设置
// =========================================================

#[test]
fn test_exam_filter_and_stats() {
    let (mut shell, _) = logged_in_shell();
    assert_eq!(shell.visible_exams().len(), 4);

    shell.set_exam_filter(ExamFilter::Upcoming);
    let titles: Vec<String> = shell.visible_exams().into_iter().map(|e| e.title).collect();
    assert_eq!(titles, vec!["Mathematics Midterm Exam", "Chemistry Lab Test"]);

    let stats = shell.exam_stats();
    assert_eq!(stats.completed, 2);
    // (85% + 92%) / 2
    assert_eq!(stats.average_score, 89);
}

#[test]
fn test_new_note_is_selected_and_searchable() {
    let (mut shell, _) = logged_in_shell();
    let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let draft = NoteDraft {
        title: "Thermodynamics".to_string(),
        content: "Energy is conserved.".to_string(),
        subject: "Physics".to_string(),
        ..Default::default()
    };

    let note = shell.add_note(draft, today).unwrap();
    assert_eq!(shell.notes().selected(), Some(&note));

    shell.search_notes("thermo");
    assert_eq!(shell.visible_notes(), vec![note]);

    let err = shell.select_note(404).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.spans().len(), 2);
}

#[test]
fn test_sent_message_lands_in_selected_chat() {
    let (mut shell, _) = logged_in_shell();
    shell.select_chat(4).unwrap();
    let message = shell.send_message("Which chapters exactly?", "10:20 AM").unwrap();

    let chat = shell.chats().selected().unwrap();
    assert_eq!(chat.id, 4);
    assert_eq!(chat.messages.last(), Some(&message));
    assert!(shell.select_chat(99).is_err());
    assert!(shell.chats().is_selected(4));
}

#[test]
fn test_settings_saved_through_shell() {
    let (mut shell, _) = logged_in_shell();
    shell.settings_mut().set_field(ProfileField::Phone, "+63 912 345 6789");
    assert!(shell.settings().is_dirty());
    shell.settings_mut().save().unwrap();
    assert_eq!(shell.settings().saved().profile.phone, "+63 912 345 6789");
}
