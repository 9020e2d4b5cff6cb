//! 表单状态管理模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到新任务参数的转换

use chrono::NaiveDate;
use classtrack_shared::{PortalError, PortalResult};
use leptos::prelude::*;

/// `<input type="date">` 的值格式
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// 表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，非常适合作为 Props 在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    pub title: RwSignal<String>,
    pub due_date: RwSignal<String>,
}

impl FormState {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            due_date: RwSignal::new(String::new()),
        }
    }

    /// 重置表单到初始状态
    pub fn reset(&self) {
        self.title.set(String::new());
        self.due_date.set(String::new());
    }

    /// 读取标题与截止日期
    ///
    /// 标题的空白校验由任务列表负责，这里只解析日期。
    pub fn to_request(&self) -> PortalResult<(String, NaiveDate)> {
        let raw = self.due_date.get_untracked();
        let due = NaiveDate::parse_from_str(raw.trim(), DATE_INPUT_FORMAT).map_err(|e| {
            PortalError::invalid_input(format!("invalid due date {:?}", raw))
                .with_source(e)
                .in_op("form.to_request")
        })?;
        Ok((self.title.get_untracked(), due))
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
