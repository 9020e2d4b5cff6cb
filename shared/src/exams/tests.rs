use super::*;
use crate::fixture;

// =========================================================
// 辅助函数
// =========================================================

fn exam(id: u32, status: ExamStatus, score: Option<u32>, total_marks: u32) -> Exam {
    Exam {
        id,
        title: format!("Exam {}", id),
        subject: "Mathematics".to_string(),
        date: NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        time: "09:00 AM".to_string(),
        duration: "2 hours".to_string(),
        status,
        score,
        total_marks,
    }
}

// =========================================================
// 筛选
// =========================================================

#[test]
fn test_filter_by_status() {
    let board = ExamBoard::new(fixture::exams());

    let upcoming: Vec<u32> = board.filtered(ExamFilter::Upcoming).map(|e| e.id).collect();
    assert_eq!(upcoming, vec![1, 3]);
    let completed: Vec<u32> = board.filtered(ExamFilter::Completed).map(|e| e.id).collect();
    assert_eq!(completed, vec![2, 4]);
    assert_eq!(board.filtered(ExamFilter::All).count(), 4);
    assert_eq!(board.filtered(ExamFilter::Missed).count(), 0);
}

#[test]
fn test_filter_counts_match_filtered_lists() {
    let board = ExamBoard::new(fixture::exams());
    let stats = board.stats();
    for filter in ExamFilter::ALL {
        assert_eq!(stats.count_for(filter), board.filtered(filter).count(), "{:?}", filter);
    }
}

// =========================================================
// 统计
// =========================================================

#[test]
fn test_average_uses_percentage_of_graded_exams() {
    let board = ExamBoard::new(vec![
        exam(1, ExamStatus::Completed, Some(40), 50),
        exam(2, ExamStatus::Completed, Some(90), 100),
        exam(3, ExamStatus::Upcoming, None, 100),
    ]);
    // 80% 与 90% 的平均值
    assert_eq!(board.stats().average_score, 85);
}

#[test]
fn test_average_is_zero_without_grades() {
    let board = ExamBoard::new(vec![exam(1, ExamStatus::Upcoming, None, 100)]);
    assert_eq!(board.stats().average_score, 0);
    assert_eq!(ExamBoard::default().stats(), ExamStats::default());
}

#[test]
fn test_zero_total_marks_has_no_percentage() {
    assert_eq!(exam(1, ExamStatus::Completed, Some(5), 0).score_percent(), None);
}

#[test]
fn test_exam_wire_format() {
    let json = r#"{ "id": 2, "title": "Physics Quiz - Mechanics", "subject": "Physics",
        "date": "2024-01-15", "time": "10:30 AM", "duration": "45 minutes",
        "status": "completed", "score": 85, "totalMarks": 100 }"#;
    let parsed: Exam = serde_json::from_str(json).unwrap();
    assert_eq!(parsed.status, ExamStatus::Completed);
    assert_eq!(parsed.score_percent(), Some(85));
}
