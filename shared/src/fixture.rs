//! 内置静态数据
//!
//! 数据源不可达时的回退数据集、默认周课表，
//! 以及尚无数据接口的测验、笔记、聊天与设置页的初始数据。

use chrono::NaiveDate;

use crate::chat::{Conversation, Message, Sender};
use crate::exams::{Exam, ExamStatus};
use crate::notes::{Note, NoteColor};
use crate::schedule::{ClassEntry, DayKey, ScheduleTable};
use crate::settings::{AcademicYear, NotificationPrefs, ProfileForm, SettingsForm};
use crate::tasks::{Task, TaskStatus};
use crate::{AttendanceRecord, PortalData, Report, ScheduleItem, StudentProfile, Trend};

/// 默认周课表
pub fn weekly_schedule() -> ScheduleTable {
    ScheduleTable::new()
        .with_day(
            DayKey::Monday,
            vec![
                ClassEntry::new("Mathematics", "09:00-10:30", "Room 101", "Dr. Smith"),
                ClassEntry::new("Physics", "11:00-12:30", "Room 102", "Dr. Brown"),
            ],
        )
        .with_day(
            DayKey::Tuesday,
            vec![
                ClassEntry::new("Chemistry", "09:00-10:30", "Room 103", "Dr. Wilson"),
                ClassEntry::new("Biology", "14:00-15:30", "Room 104", "Dr. Davis"),
            ],
        )
        .with_day(
            DayKey::Wednesday,
            vec![
                ClassEntry::new("Mathematics", "10:00-11:30", "Room 101", "Dr. Smith"),
                ClassEntry::new("English", "13:00-14:30", "Room 105", "Dr. Taylor"),
            ],
        )
        .with_day(
            DayKey::Thursday,
            vec![ClassEntry::new("Physics Lab", "09:00-12:00", "Lab 201", "Dr. Brown")],
        )
        .with_day(
            DayKey::Friday,
            vec![
                ClassEntry::new("Chemistry Lab", "10:00-13:00", "Lab 202", "Dr. Wilson"),
                ClassEntry::new("Mathematics", "14:00-15:30", "Room 101", "Dr. Smith"),
            ],
        )
}

fn schedule_item(id: u32, subject: &str, day: &str, time: &str, room: &str, professor: &str) -> ScheduleItem {
    ScheduleItem {
        id,
        subject: subject.to_string(),
        day: day.to_string(),
        time: time.to_string(),
        room: room.to_string(),
        professor: professor.to_string(),
    }
}

fn due(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

fn attendance(subject: &str, percentage: u32, total_classes: u32, attended: u32) -> AttendanceRecord {
    AttendanceRecord {
        subject: subject.to_string(),
        percentage,
        total_classes,
        attended,
    }
}

fn report(title: &str, description: &str, trend: Trend) -> Report {
    Report {
        title: title.to_string(),
        description: description.to_string(),
        trend,
    }
}

/// 回退数据集，形状与数据源返回值一致
pub fn fallback_data() -> PortalData {
    PortalData {
        student: StudentProfile {
            name: "Saira Goodman".to_string(),
            email: "saira.goodman@university.edu".to_string(),
            avatar: "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=100&h=100&fit=crop&crop=face".to_string(),
            gpa: Some(4.7),
            attendance: Some(96),
            tasks_due: Some(2),
            announcements: Some(1),
        },
        schedule: vec![
            schedule_item(1, "Mathematics", "Monday", "09:00-10:30", "Room 101", "Dr. Smith"),
            schedule_item(2, "Physics", "Monday", "11:00-12:30", "Room 102", "Dr. Brown"),
            schedule_item(3, "Chemistry", "Tuesday", "09:00-10:30", "Room 103", "Dr. Wilson"),
            schedule_item(4, "Biology", "Wednesday", "10:00-11:30", "Room 104", "Dr. Davis"),
            schedule_item(5, "English", "Thursday", "14:00-15:30", "Room 105", "Dr. Taylor"),
        ],
        tasks: vec![
            Task::new(1, "Complete Math Assignment", due(2024, 1, 15), TaskStatus::Pending),
            Task::new(2, "Physics Lab Report", due(2024, 1, 12), TaskStatus::Completed),
            Task::new(3, "Chemistry Quiz Preparation", due(2024, 1, 18), TaskStatus::Pending),
        ],
        attendance: vec![
            attendance("Mathematics", 92, 25, 23),
            attendance("Physics", 88, 24, 21),
            attendance("Chemistry", 95, 22, 21),
            attendance("Biology", 85, 26, 22),
            attendance("English", 90, 20, 18),
        ],
        reports: vec![
            report(
                "Performance Improvement",
                "Your GPA has improved by 0.2 points compared to last semester",
                Trend::Up,
            ),
            report(
                "Attendance Trend",
                "Your attendance is 5% higher than the class average",
                Trend::Up,
            ),
            report(
                "Task Completion",
                "You've completed 85% of assigned tasks on time",
                Trend::Stable,
            ),
        ],
    }
}

// =========================================================
// 测验
// =========================================================

#[allow(clippy::too_many_arguments)]
fn exam(
    id: u32,
    title: &str,
    subject: &str,
    date: NaiveDate,
    time: &str,
    duration: &str,
    status: ExamStatus,
    score: Option<u32>,
    total_marks: u32,
) -> Exam {
    Exam {
        id,
        title: title.to_string(),
        subject: subject.to_string(),
        date,
        time: time.to_string(),
        duration: duration.to_string(),
        status,
        score,
        total_marks,
    }
}

pub fn exams() -> Vec<Exam> {
    vec![
        exam(1, "Mathematics Midterm Exam", "Mathematics", due(2024, 1, 20), "09:00 AM", "2 hours", ExamStatus::Upcoming, None, 100),
        exam(2, "Physics Quiz - Mechanics", "Physics", due(2024, 1, 15), "10:30 AM", "45 minutes", ExamStatus::Completed, Some(85), 100),
        exam(3, "Chemistry Lab Test", "Chemistry", due(2024, 1, 18), "02:00 PM", "1.5 hours", ExamStatus::Upcoming, None, 50),
        exam(4, "Biology Final Exam", "Biology", due(2024, 1, 12), "09:00 AM", "3 hours", ExamStatus::Completed, Some(92), 100),
    ]
}

// =========================================================
// 笔记
// =========================================================

fn note(id: u32, title: &str, content: &str, subject: &str, date: NaiveDate, tags: &[&str], color: NoteColor) -> Note {
    Note {
        id,
        title: title.to_string(),
        content: content.to_string(),
        subject: subject.to_string(),
        date,
        tags: tags.iter().map(|t| t.to_string()).collect(),
        color,
    }
}

pub fn notes() -> Vec<Note> {
    vec![
        note(
            1,
            "Mathematics - Calculus Derivatives",
            "Key concepts for derivatives:\n\n1. Power rule: d/dx(x^n) = nx^(n-1)\n2. Product rule: d/dx(fg) = f'g + fg'\n3. Chain rule: d/dx(f(g(x))) = f'(g(x)) * g'(x)\n\nImportant examples:\n- d/dx(x^3) = 3x^2\n- d/dx(sin(x)) = cos(x)\n- d/dx(e^x) = e^x",
            "Mathematics",
            due(2024, 1, 15),
            &["calculus", "derivatives", "math"],
            NoteColor::Blue,
        ),
        note(
            2,
            "Physics - Newton's Laws",
            "Newton's Three Laws of Motion:\n\n1. First Law (Law of Inertia): An object at rest stays at rest, and an object in motion stays in motion, unless acted upon by an external force.\n\n2. Second Law: F = ma (Force equals mass times acceleration)\n\n3. Third Law: For every action, there is an equal and opposite reaction.\n\nApplications:\n- Free body diagrams\n- Friction forces\n- Circular motion",
            "Physics",
            due(2024, 1, 14),
            &["newton", "laws", "motion", "physics"],
            NoteColor::Green,
        ),
        note(
            3,
            "Chemistry - Organic Reactions",
            "Common organic reactions:\n\n1. Substitution reactions\n2. Elimination reactions\n3. Addition reactions\n4. Oxidation and reduction\n\nMechanisms:\n- SN1 and SN2 reactions\n- E1 and E2 eliminations\n- Electrophilic addition\n\nImportant functional groups:\n- Alcohols, aldehydes, ketones\n- Carboxylic acids, esters",
            "Chemistry",
            due(2024, 1, 13),
            &["organic", "reactions", "chemistry"],
            NoteColor::Purple,
        ),
        note(
            4,
            "Biology - Cell Division",
            "Cell division processes:\n\nMitosis:\n1. Prophase - chromosomes condense\n2. Metaphase - chromosomes align\n3. Anaphase - chromosomes separate\n4. Telophase - nuclei reform\n\nMeiosis:\n- Two rounds of division\n- Produces gametes\n- Genetic diversity through crossing over\n\nKey differences between mitosis and meiosis",
            "Biology",
            due(2024, 1, 12),
            &["cell", "division", "mitosis", "meiosis"],
            NoteColor::Orange,
        ),
    ]
}

// =========================================================
// 聊天
// =========================================================

#[allow(clippy::too_many_arguments)]
fn conversation(
    id: u32,
    name: &str,
    role: &str,
    avatar: &str,
    time: &str,
    unread: u32,
    online: bool,
    messages: Vec<Message>,
) -> Conversation {
    Conversation {
        id,
        name: name.to_string(),
        role: role.to_string(),
        avatar: avatar.to_string(),
        last_message: messages.last().map(|m| m.text.clone()).unwrap_or_default(),
        time: time.to_string(),
        unread,
        online,
        messages,
    }
}

pub fn conversations() -> Vec<Conversation> {
    vec![
        conversation(
            1,
            "Dr. Sarah Wilson",
            "Mathematics Professor",
            "https://images.unsplash.com/photo-1494790108755-2616b612b786?w=40&h=40&fit=crop&crop=face",
            "2:30 PM",
            2,
            true,
            vec![
                Message::new("Hello! I have a question about the assignment.", Sender::Me, "2:25 PM"),
                Message::new("Hi! I'd be happy to help. What's your question?", Sender::Other, "2:26 PM"),
                Message::new("I'm not sure about the formatting requirements for the lab report.", Sender::Me, "2:27 PM"),
                Message::new("Please review the assignment guidelines before submitting.", Sender::Other, "2:30 PM"),
            ],
        ),
        conversation(
            2,
            "Study Group - Physics",
            "Group Chat",
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=40&h=40&fit=crop&crop=face",
            "1:45 PM",
            5,
            false,
            vec![Message::new("Anyone available for the lab session tomorrow?", Sender::Other, "1:45 PM")],
        ),
        conversation(
            3,
            "Dr. Michael Brown",
            "Chemistry Professor",
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=40&h=40&fit=crop&crop=face",
            "11:20 AM",
            0,
            true,
            vec![Message::new("Great work on the lab report!", Sender::Other, "11:20 AM")],
        ),
        conversation(
            4,
            "Class Discussion - Biology",
            "Class Chat",
            "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=40&h=40&fit=crop&crop=face",
            "10:15 AM",
            1,
            false,
            vec![Message::new("The exam will cover chapters 5-8", Sender::Other, "10:15 AM")],
        ),
    ]
}

// =========================================================
// 设置
// =========================================================

pub fn settings_form() -> SettingsForm {
    SettingsForm {
        profile: ProfileForm {
            name: "Alex Johnson".to_string(),
            email: "alex.johnson@university.edu".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            major: "Computer Science".to_string(),
            year: AcademicYear::Junior,
        },
        notifications: NotificationPrefs::default(),
    }
}
