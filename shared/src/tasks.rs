//! 任务模块
//!
//! 每个任务只有 `Pending ⇄ Completed` 两种状态，只能通过 [`TaskList::toggle`] 切换。
//! 统计数据 [`TaskStats`] 从不存储，每次都由完整任务集合重新计算。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn flipped(self) -> Self {
        match self {
            Self::Pending => Self::Completed,
            Self::Completed => Self::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: u32,
    pub title: String,
    pub due_date: NaiveDate,
    pub status: TaskStatus,
}

impl Task {
    pub fn new(id: u32, title: impl Into<String>, due_date: NaiveDate, status: TaskStatus) -> Self {
        Self {
            id,
            title: title.into(),
            due_date,
            status,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

/// 派生统计
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskStats {
    pub total: usize,
    pub pending: usize,
    pub completed: usize,
}

impl TaskStats {
    pub fn of(tasks: &[Task]) -> Self {
        let completed = tasks.iter().filter(|t| t.is_completed()).count();
        Self {
            total: tasks.len(),
            pending: tasks.len() - completed,
            completed,
        }
    }

    pub fn count_for(&self, filter: TaskFilter) -> usize {
        match filter {
            TaskFilter::All => self.total,
            TaskFilter::Pending => self.pending,
            TaskFilter::Completed => self.completed,
        }
    }
}

/// 任务列表筛选器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaskFilter {
    #[default]
    All,
    Pending,
    Completed,
}

impl TaskFilter {
    pub const ALL: [TaskFilter; 3] = [Self::All, Self::Pending, Self::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Self::All => true,
            Self::Pending => task.status == TaskStatus::Pending,
            Self::Completed => task.status == TaskStatus::Completed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Tasks",
            Self::Pending => "Pending",
            Self::Completed => "Completed",
        }
    }

    /// 筛选结果为空时的提示文案
    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::All => "You have no tasks yet.",
            Self::Pending => "No pending tasks found.",
            Self::Completed => "No completed tasks found.",
        }
    }
}

/// 任务集合
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// 整体替换（异步加载完成时）
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    pub fn get(&self, id: u32) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// **切换任务完成状态**
    ///
    /// 返回切换后的任务；未知 ID 返回可恢复的 `NotFound`。
    pub fn toggle(&mut self, id: u32) -> PortalResult<Task> {
        let task = self
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| {
                PortalError::not_found(format!("task {} does not exist", id))
                    .in_op_with("tasks.toggle", id.to_string())
            })?;
        task.status = task.status.flipped();
        Ok(task.clone())
    }

    /// 新建任务，状态为 Pending，ID 取当前最大值加一
    pub fn add(&mut self, title: impl Into<String>, due_date: NaiveDate) -> PortalResult<&Task> {
        let title = title.into();
        let title = title.trim();
        if title.is_empty() {
            return Err(PortalError::invalid_input("task title must not be empty").in_op("tasks.add"));
        }
        let id = self
            .tasks
            .iter()
            .map(|t| t.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| PortalError::invalid_input("task id space exhausted").in_op("tasks.add"))?;
        self.tasks
            .push(Task::new(id, title, due_date, TaskStatus::Pending));
        self.tasks
            .last()
            .ok_or_else(|| PortalError::not_found("added task is missing").in_op("tasks.add"))
    }

    pub fn stats(&self) -> TaskStats {
        TaskStats::of(&self.tasks)
    }

    pub fn filtered(&self, filter: TaskFilter) -> impl Iterator<Item = &Task> + '_ {
        self.tasks.iter().filter(move |t| filter.matches(t))
    }
}
