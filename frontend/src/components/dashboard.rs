use classtrack_shared::source::LoadState;
use classtrack_shared::{DashboardStats, PortalData};
use leptos::prelude::*;

use crate::api::use_portal_data;
use crate::auth::use_auth;

/// 加载中占位
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center h-64">
            <span class="loading loading-spinner loading-lg text-primary"></span>
        </div>
    }
}

#[component]
fn StatCard(title: &'static str, value: String, icon: &'static str, color: &'static str) -> impl IntoView {
    view! {
        <div class="stat">
            <div class=format!("stat-figure {}", color)>
                <i class=format!("{} text-3xl", icon)></i>
            </div>
            <div class="stat-title">{title}</div>
            <div class=format!("stat-value {}", color)>{value}</div>
        </div>
    }
}

#[component]
fn DashboardContent(data: PortalData) -> impl IntoView {
    let auth = use_auth();
    let stats = DashboardStats::from_profile(&data.student);
    let task_stats = move || auth.shell.with(|s| s.task_stats());
    // 列表与计数都读状态机，切换后保持一致
    let tasks = move || auth.shell.with(|s| s.tasks().tasks().to_vec());

    view! {
        <div class="space-y-8">
            <div class="flex items-center gap-4">
                <div class="avatar">
                    <div class="w-16 rounded-full">
                        <img src=data.student.avatar.clone() alt="Profile" />
                    </div>
                </div>
                <div>
                    <h1 class="text-3xl font-bold">{format!("Welcome back, {}!", data.student.name)}</h1>
                    <p class="text-base-content/70">{data.student.email.clone()}</p>
                </div>
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <StatCard title="GPA" value=format!("{:.2}", stats.gpa) icon="fas fa-graduation-cap" color="text-primary" />
                <StatCard title="Attendance" value=format!("{}%", stats.attendance) icon="fas fa-user-check" color="text-success" />
                <StatCard title="Tasks Due" value=stats.tasks_due.to_string() icon="fas fa-tasks" color="text-warning" />
                <StatCard title="Announcements" value=stats.announcements.to_string() icon="fas fa-bullhorn" color="text-info" />
            </div>

            <div class="grid grid-cols-1 lg:grid-cols-2 gap-6">
                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body">
                        <h3 class="card-title">"My tasks"</h3>
                        <p class="text-base-content/70 text-sm">
                            {move || {
                                let s = task_stats();
                                format!("{} pending, {} completed", s.pending, s.completed)
                            }}
                        </p>
                        <ul class="mt-2 space-y-2">
                            <For
                                each=tasks
                                key=|task| (task.id, task.status)
                                children=move |task| {
                                    let done = task.is_completed();
                                    view! {
                                        <li class="flex justify-between">
                                            <span class=if done { "line-through opacity-50" } else { "" }>{task.title}</span>
                                            <span class="badge badge-outline">{task.due_date.to_string()}</span>
                                        </li>
                                    }
                                }
                            />
                        </ul>
                    </div>
                </div>

                <div class="card bg-base-100 shadow-xl">
                    <div class="card-body p-0">
                        <h3 class="card-title p-6 pb-2">"My schedule"</h3>
                        <div class="overflow-x-auto w-full">
                            <table class="table table-zebra w-full">
                                <thead>
                                    <tr>
                                        <th>"Day"</th>
                                        <th>"Time"</th>
                                        <th>"Lesson"</th>
                                        <th class="hidden md:table-cell">"Teacher"</th>
                                        <th class="hidden md:table-cell">"Location"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {data
                                        .schedule
                                        .iter()
                                        .map(|item| {
                                            view! {
                                                <tr>
                                                    <td>{item.day.clone()}</td>
                                                    <td class="font-mono text-sm">{item.time.clone()}</td>
                                                    <td class="font-bold">{item.subject.clone()}</td>
                                                    <td class="hidden md:table-cell">{item.professor.clone()}</td>
                                                    <td class="hidden md:table-cell">{item.room.clone()}</td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let data = use_portal_data();

    move || match data.get() {
        LoadState::Loading => view! { <Loading /> }.into_any(),
        LoadState::Ready(data) => view! { <DashboardContent data=data /> }.into_any(),
    }
}
