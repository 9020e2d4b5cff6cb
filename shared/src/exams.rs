//! 测验模块
//!
//! 测验列表按状态筛选，统计数据每次从完整列表重新计算。

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExamStatus {
    #[default]
    Upcoming,
    Completed,
    Missed,
}

impl ExamStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Missed => "Missed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exam {
    pub id: u32,
    pub title: String,
    pub subject: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: String,
    #[serde(default)]
    pub status: ExamStatus,
    #[serde(default)]
    pub score: Option<u32>,
    pub total_marks: u32,
}

impl Exam {
    /// 得分百分比（四舍五入），未评分或满分为零时返回 `None`
    pub fn score_percent(&self) -> Option<u32> {
        let score = self.score?;
        if self.total_marks == 0 {
            return None;
        }
        Some(((score as f64 / self.total_marks as f64) * 100.0).round() as u32)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExamStats {
    pub total: usize,
    pub upcoming: usize,
    pub completed: usize,
    pub missed: usize,
    /// 已评分测验的平均百分比，没有评分时为 0
    pub average_score: u32,
}

impl ExamStats {
    pub fn of(exams: &[Exam]) -> Self {
        let count = |status: ExamStatus| exams.iter().filter(|e| e.status == status).count();
        let graded: Vec<u32> = exams.iter().filter_map(Exam::score_percent).collect();
        let average_score = if graded.is_empty() {
            0
        } else {
            (graded.iter().sum::<u32>() as f64 / graded.len() as f64).round() as u32
        };
        Self {
            total: exams.len(),
            upcoming: count(ExamStatus::Upcoming),
            completed: count(ExamStatus::Completed),
            missed: count(ExamStatus::Missed),
            average_score,
        }
    }

    pub fn count_for(&self, filter: ExamFilter) -> usize {
        match filter {
            ExamFilter::All => self.total,
            ExamFilter::Upcoming => self.upcoming,
            ExamFilter::Completed => self.completed,
            ExamFilter::Missed => self.missed,
        }
    }
}

/// 测验列表筛选器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExamFilter {
    #[default]
    All,
    Upcoming,
    Completed,
    Missed,
}

impl ExamFilter {
    pub const ALL: [ExamFilter; 4] = [Self::All, Self::Upcoming, Self::Completed, Self::Missed];

    pub fn matches(&self, exam: &Exam) -> bool {
        match self {
            Self::All => true,
            Self::Upcoming => exam.status == ExamStatus::Upcoming,
            Self::Completed => exam.status == ExamStatus::Completed,
            Self::Missed => exam.status == ExamStatus::Missed,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All Tests",
            Self::Upcoming => "Upcoming",
            Self::Completed => "Completed",
            Self::Missed => "Missed",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self {
            Self::All => "You have no tests scheduled.",
            Self::Upcoming => "No upcoming tests found.",
            Self::Completed => "No completed tests found.",
            Self::Missed => "No missed tests found.",
        }
    }
}

/// 测验集合
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExamBoard {
    exams: Vec<Exam>,
}

impl ExamBoard {
    pub fn new(exams: Vec<Exam>) -> Self {
        Self { exams }
    }

    pub fn exams(&self) -> &[Exam] {
        &self.exams
    }

    pub fn stats(&self) -> ExamStats {
        ExamStats::of(&self.exams)
    }

    pub fn filtered(&self, filter: ExamFilter) -> impl Iterator<Item = &Exam> + '_ {
        self.exams.iter().filter(move |e| filter.matches(e))
    }
}

#[cfg(test)]
mod tests;
