//! ClassTrack Pro 领域核心
//!
//! 与 UI 框架无关的纯业务逻辑层：
//! - `session`: 会话存储（认证标志的持久化）
//! - `route`: 路由定义与守卫决策
//! - `selector`: 单选视图状态机（侧边栏 / 星期选择器）
//! - `schedule`: 按星期查询课表
//! - `tasks`: 任务完成状态切换与统计
//! - `source`: 外部数据源契约与回退策略
//! - `exams` / `notes` / `chat` / `settings`: 测验、笔记、聊天与设置页的视图状态
//! - `shell`: 组合以上组件的顶层状态机

use serde::{Deserialize, Serialize};

pub mod chat;
pub mod config;
pub mod error;
pub mod exams;
pub mod fixture;
pub mod notes;
pub mod route;
pub mod schedule;
pub mod selector;
pub mod session;
pub mod settings;
pub mod shell;
pub mod source;
pub mod tasks;

pub use error::{PortalError, PortalErrorStatus, PortalResult};
pub use tasks::{Task, TaskStatus};

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 持久化认证标志的存储键，值为 `"true"` 或不存在
pub const STORAGE_AUTHENTICATED_KEY: &str = "plmun_authenticated";
/// 持久化学号的存储键
pub const STORAGE_STUDENT_NUMBER_KEY: &str = "plmun_student_number";
/// 认证标志的唯一有效值
pub const AUTHENTICATED_FLAG: &str = "true";

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 学生档案
///
/// 统计字段可能缺失，仪表盘渲染时使用 [`DashboardStats`] 的默认值补齐。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub gpa: Option<f64>,
    #[serde(default)]
    pub attendance: Option<u32>,
    #[serde(default)]
    pub tasks_due: Option<u32>,
    #[serde(default)]
    pub announcements: Option<u32>,
}

/// 数据源返回的课表条目（带星期名称）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleItem {
    pub id: u32,
    pub subject: String,
    /// 星期名称，如 "Monday"
    pub day: String,
    pub time: String,
    pub room: String,
    pub professor: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub subject: String,
    pub percentage: u32,
    pub total_classes: u32,
    pub attended: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub trend: Trend,
}

/// 数据源的完整载荷
///
/// 形状固定：`{ student, schedule, tasks, attendance, reports }`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalData {
    pub student: StudentProfile,
    #[serde(default)]
    pub schedule: Vec<ScheduleItem>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    #[serde(default)]
    pub reports: Vec<Report>,
}

/// 任务状态更新的确认
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdateAck {
    pub success: bool,
    pub task_id: u32,
    pub status: TaskStatus,
}

/// 仪表盘统计卡片数据
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashboardStats {
    pub gpa: f64,
    pub attendance: u32,
    pub tasks_due: u32,
    pub announcements: u32,
}

impl DashboardStats {
    pub const DEFAULT_GPA: f64 = 3.25;
    pub const DEFAULT_ATTENDANCE: u32 = 88;
    pub const DEFAULT_TASKS_DUE: u32 = 2;
    pub const DEFAULT_ANNOUNCEMENTS: u32 = 1;

    /// 从学生档案派生统计，缺失或为零的字段使用默认值
    pub fn from_profile(profile: &StudentProfile) -> Self {
        Self {
            gpa: profile
                .gpa
                .filter(|v| *v != 0.0)
                .unwrap_or(Self::DEFAULT_GPA),
            attendance: nonzero_or(profile.attendance, Self::DEFAULT_ATTENDANCE),
            tasks_due: nonzero_or(profile.tasks_due, Self::DEFAULT_TASKS_DUE),
            announcements: nonzero_or(profile.announcements, Self::DEFAULT_ANNOUNCEMENTS),
        }
    }
}

fn nonzero_or(value: Option<u32>, default: u32) -> u32 {
    value.filter(|v| *v != 0).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashboard_stats_use_defaults_for_missing_fields() {
        let profile = StudentProfile {
            name: "Saira Goodman".to_string(),
            gpa: Some(4.7),
            attendance: Some(0),
            ..Default::default()
        };

        let stats = DashboardStats::from_profile(&profile);
        assert_eq!(stats.gpa, 4.7);
        assert_eq!(stats.attendance, DashboardStats::DEFAULT_ATTENDANCE);
        assert_eq!(stats.tasks_due, DashboardStats::DEFAULT_TASKS_DUE);
        assert_eq!(stats.announcements, DashboardStats::DEFAULT_ANNOUNCEMENTS);
    }

    #[test]
    fn test_portal_data_parses_wire_shape() {
        let json = r#"{
            "student": { "name": "Saira Goodman", "gpa": 4.7, "tasksDue": 2 },
            "schedule": [
                { "id": 1, "subject": "Mathematics", "day": "Monday",
                  "time": "09:00-10:30", "room": "Room 101", "professor": "Dr. Smith" }
            ],
            "tasks": [
                { "id": 1, "title": "Complete Math Assignment",
                  "status": "pending", "dueDate": "2024-01-15" }
            ],
            "attendance": [
                { "subject": "Physics", "percentage": 88, "totalClasses": 24, "attended": 21 }
            ],
            "reports": [
                { "title": "Attendance Trend", "description": "above average", "trend": "up" }
            ]
        }"#;

        let data: PortalData = serde_json::from_str(json).unwrap();
        assert_eq!(data.student.tasks_due, Some(2));
        assert_eq!(data.schedule[0].day, "Monday");
        assert_eq!(data.tasks[0].status, TaskStatus::Pending);
        assert_eq!(data.attendance[0].total_classes, 24);
        assert_eq!(data.reports[0].trend, Trend::Up);
    }

    #[test]
    fn test_task_update_ack_uses_camel_case() {
        let ack = TaskUpdateAck {
            success: true,
            task_id: 3,
            status: TaskStatus::Completed,
        };
        let value = serde_json::to_value(&ack).unwrap();
        assert_eq!(value["taskId"], 3);
        assert_eq!(value["status"], "completed");
    }
}
