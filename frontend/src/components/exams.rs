use classtrack_shared::exams::{Exam, ExamFilter, ExamStatus};
use leptos::prelude::*;

use crate::auth::use_auth;

fn status_badge(status: ExamStatus) -> &'static str {
    match status {
        ExamStatus::Upcoming => "badge badge-info",
        ExamStatus::Completed => "badge badge-success",
        ExamStatus::Missed => "badge badge-error",
    }
}

#[component]
fn ExamCard(exam: Exam) -> impl IntoView {
    let percent = exam.score_percent();
    let score = exam.score.map(|score| {
        view! {
            <div class="flex items-center justify-between mt-3 p-3 bg-success/10 rounded-lg">
                <span class="font-medium text-success">
                    {format!("Score: {}/{}", score, exam.total_marks)}
                </span>
                <progress
                    class="progress progress-success w-24"
                    value=percent.unwrap_or_default().to_string()
                    max="100"
                ></progress>
            </div>
        }
    });

    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <div class="flex items-center justify-between">
                    <h3 class="card-title text-lg">{exam.title.clone()}</h3>
                    <span class=status_badge(exam.status)>{exam.status.label()}</span>
                </div>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 text-sm text-base-content/70">
                    <div><span class="font-medium">"Subject: "</span>{exam.subject.clone()}</div>
                    <div><span class="font-medium">"Date: "</span>{exam.date.to_string()}</div>
                    <div><span class="font-medium">"Time: "</span>{exam.time.clone()}</div>
                    <div><span class="font-medium">"Duration: "</span>{exam.duration.clone()}</div>
                </div>
                {score}
            </div>
        </div>
    }
}

/// 测验与考试
///
/// 数据为本地初始数据，筛选状态保存在状态机中。
#[component]
pub fn TestsPage() -> impl IntoView {
    let auth = use_auth();
    let stats = move || auth.shell.with(|s| s.exam_stats());
    let filter = move || auth.shell.with(|s| s.exam_filter());
    let visible = move || auth.shell.with(|s| s.visible_exams());

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Tests & Exams"</h1>
                <p class="text-base-content/70">"Manage your upcoming tests and view your results."</p>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Upcoming Tests"</div>
                    <div class="stat-value text-info">{move || stats().upcoming}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Average Score"</div>
                    <div class="stat-value text-success">{move || format!("{}%", stats().average_score)}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Tests Completed"</div>
                    <div class="stat-value text-secondary">{move || stats().completed}</div>
                </div>
            </div>

            <div role="tablist" class="tabs tabs-boxed bg-base-100">
                {ExamFilter::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <a
                                role="tab"
                                class=move || if filter() == option { "tab tab-active" } else { "tab" }
                                on:click=move |_| auth.shell.update(|s| s.set_exam_filter(option))
                            >
                                {option.label()}
                                " (" {move || stats().count_for(option)} ")"
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="space-y-4">
                <Show when=move || visible().is_empty()>
                    <div class="text-center py-12 text-base-content/50">
                        <i class="fas fa-file-alt text-4xl mb-2"></i>
                        <h3 class="font-medium">"No tests found"</h3>
                        <p>{move || filter().empty_message()}</p>
                    </div>
                </Show>
                <For
                    each=visible
                    key=|exam| exam.id
                    children=move |exam| view! { <ExamCard exam=exam /> }
                />
            </div>
        </div>
    }
}
