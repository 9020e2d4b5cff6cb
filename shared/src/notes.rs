//! 笔记模块
//!
//! 支持按关键字搜索、选择当前笔记以及新建笔记。
//! 新笔记插入列表最前面并自动成为当前笔记。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PortalError, PortalResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    Blue,
    Green,
    Purple,
    Orange,
    Red,
}

impl NoteColor {
    pub const ALL: [NoteColor; 5] = [Self::Blue, Self::Green, Self::Purple, Self::Orange, Self::Red];

    pub fn key(&self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Purple => "purple",
            Self::Orange => "orange",
            Self::Red => "red",
        }
    }

    /// 未知颜色回退为蓝色
    pub fn parse(key: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.key().eq_ignore_ascii_case(key.trim()))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u32,
    pub title: String,
    pub content: String,
    pub subject: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub color: NoteColor,
}

impl Note {
    /// 不区分大小写，匹配标题、正文或科目
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        [&self.title, &self.content, &self.subject]
            .iter()
            .any(|field| field.to_lowercase().contains(&query))
    }
}

/// 新建笔记表单提交的内容
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteDraft {
    pub title: String,
    pub content: String,
    pub subject: String,
    /// 逗号分隔的标签
    pub tags: String,
    pub color: NoteColor,
}

impl NoteDraft {
    fn into_note(self, id: u32, date: NaiveDate) -> PortalResult<Note> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(PortalError::invalid_input("note title must not be empty").in_op("notes.add"));
        }
        let tags = self
            .tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .collect();
        Ok(Note {
            id,
            title: title.to_string(),
            content: self.content.trim().to_string(),
            subject: self.subject.trim().to_string(),
            date,
            tags,
            color: self.color,
        })
    }
}

/// 笔记集合
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NoteList {
    notes: Vec<Note>,
    selected: Option<u32>,
    query: String,
}

impl NoteList {
    /// 创建集合，第一条笔记初始选中
    pub fn new(notes: Vec<Note>) -> Self {
        let selected = notes.first().map(|n| n.id);
        Self {
            notes,
            selected,
            query: String::new(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn get(&self, id: u32) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn selected(&self) -> Option<&Note> {
        self.selected.and_then(|id| self.get(id))
    }

    pub fn select(&mut self, id: u32) -> PortalResult<&Note> {
        let note = self.notes.iter().find(|n| n.id == id).ok_or_else(|| {
            PortalError::not_found(format!("note {} does not exist", id))
                .in_op_with("notes.select", id.to_string())
        })?;
        self.selected = Some(id);
        Ok(note)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// 当前搜索条件下可见的笔记；搜索不改变选中项
    pub fn visible(&self) -> impl Iterator<Item = &Note> + '_ {
        self.notes.iter().filter(move |n| n.matches(&self.query))
    }

    /// 保存新笔记：插入最前并选中，ID 取当前最大值加一
    pub fn add(&mut self, draft: NoteDraft, date: NaiveDate) -> PortalResult<&Note> {
        let id = self
            .notes
            .iter()
            .map(|n| n.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| PortalError::invalid_input("note id space exhausted").in_op("notes.add"))?;
        let note = draft.into_note(id, date)?;
        self.notes.insert(0, note);
        self.selected = Some(id);
        self.notes
            .first()
            .ok_or_else(|| PortalError::not_found("added note is missing").in_op("notes.add"))
    }
}

#[cfg(test)]
mod tests;
