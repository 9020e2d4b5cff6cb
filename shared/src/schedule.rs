//! 课表查询模块
//!
//! 按星期键查询课程列表。同一天内的顺序即数据源中的插入顺序，渲染时不得重新排序。

use std::collections::BTreeMap;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::ScheduleItem;
use crate::selector::ViewSelector;

/// 星期键（周一至周五）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKey {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl DayKey {
    /// 规范顺序
    pub const ALL: [DayKey; 5] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
    ];

    /// 解析星期名称（不区分大小写），未映射的名称返回 `None`
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.key().eq_ignore_ascii_case(name.trim()))
    }

    pub fn key(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
        }
    }
}

impl Display for DayKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// 星期选择器，初始激活周一
pub fn day_selector() -> ViewSelector<DayKey> {
    ViewSelector::new(DayKey::Monday, DayKey::ALL)
}

/// 一节课
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub subject: String,
    pub time: String,
    pub room: String,
    pub professor: String,
}

impl ClassEntry {
    pub fn new(subject: &str, time: &str, room: &str, professor: &str) -> Self {
        Self {
            subject: subject.to_string(),
            time: time.to_string(),
            room: room.to_string(),
            professor: professor.to_string(),
        }
    }
}

impl From<&ScheduleItem> for ClassEntry {
    fn from(item: &ScheduleItem) -> Self {
        Self {
            subject: item.subject.clone(),
            time: item.time.clone(),
            room: item.room.clone(),
            professor: item.professor.clone(),
        }
    }
}

/// 某天课表的渲染形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleView<'a> {
    Classes(&'a [ClassEntry]),
    /// "No classes scheduled" 空状态
    NoClasses,
}

/// 周课表
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ScheduleTable {
    days: BTreeMap<DayKey, Vec<ClassEntry>>,
}

impl ScheduleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一节课到指定日期末尾
    pub fn push(&mut self, day: DayKey, entry: ClassEntry) {
        self.days.entry(day).or_default().push(entry);
    }

    pub fn with_day(mut self, day: DayKey, entries: Vec<ClassEntry>) -> Self {
        self.days.entry(day).or_default().extend(entries);
        self
    }

    /// 由数据源条目构建课表，按星期分组并保持源顺序
    ///
    /// 星期名称无法识别的条目会被丢弃。
    pub fn from_items(items: &[ScheduleItem]) -> Self {
        let mut table = Self::new();
        for item in items {
            match DayKey::parse(&item.day) {
                Some(day) => table.push(day, ClassEntry::from(item)),
                None => log::debug!(
                    "[Schedule] Dropping class {} with unknown day {:?}.",
                    item.id,
                    item.day
                ),
            }
        }
        table
    }

    /// 查询某天的课程
    ///
    /// 纯函数：相同输入总是返回相同的有序结果；未知或未映射的日期返回空切片。
    pub fn classes_for(&self, day: &str) -> &[ClassEntry] {
        DayKey::parse(day)
            .map(|day| self.classes_on(day))
            .unwrap_or(&[])
    }

    pub fn classes_on(&self, day: DayKey) -> &[ClassEntry] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn view_for(&self, day: DayKey) -> ScheduleView<'_> {
        match self.classes_on(day) {
            [] => ScheduleView::NoClasses,
            classes => ScheduleView::Classes(classes),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}
