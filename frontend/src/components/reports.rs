use classtrack_shared::route::AppRoute;
use classtrack_shared::source::LoadState;
use classtrack_shared::{AttendanceRecord, Report, Trend};
use leptos::prelude::*;

use crate::api::use_portal_data;
use crate::components::dashboard::Loading;
use crate::web::router::Link;

fn trend_icon(trend: Trend) -> &'static str {
    match trend {
        Trend::Up => "fas fa-arrow-up text-success",
        Trend::Down => "fas fa-arrow-down text-error",
        Trend::Stable => "fas fa-minus text-info",
    }
}

#[component]
fn ReportList(reports: Vec<Report>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
            {reports
                .into_iter()
                .map(|report| {
                    view! {
                        <div class="card bg-base-100 shadow-xl">
                            <div class="card-body">
                                <div class="flex items-center justify-between">
                                    <h3 class="card-title text-lg">{report.title}</h3>
                                    <i class=trend_icon(report.trend)></i>
                                </div>
                                <p class="text-sm text-base-content/70">{report.description}</p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let data = use_portal_data();

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Academic Reports"</h1>
                    <p class="text-base-content/70">"Insights into your academic performance."</p>
                </div>
                <Link to=AppRoute::Attendance class="btn btn-outline gap-2">
                    <i class="fas fa-user-check"></i> "Attendance"
                </Link>
            </div>
            {move || match data.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Ready(data) => view! { <ReportList reports=data.reports /> }.into_any(),
            }}
        </div>
    }
}

fn attendance_color(percentage: u32) -> &'static str {
    match percentage {
        90.. => "progress-success",
        80..=89 => "progress-warning",
        _ => "progress-error",
    }
}

#[component]
fn AttendanceTable(records: Vec<AttendanceRecord>) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="overflow-x-auto w-full">
                <table class="table table-zebra w-full">
                    <thead>
                        <tr>
                            <th>"Subject"</th>
                            <th>"Attended"</th>
                            <th>"Rate"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {records
                            .into_iter()
                            .map(|record| {
                                view! {
                                    <tr>
                                        <td class="font-bold">{record.subject}</td>
                                        <td class="font-mono text-sm">
                                            {format!("{} / {}", record.attended, record.total_classes)}
                                        </td>
                                        <td class="flex items-center gap-2">
                                            <progress
                                                class=format!("progress w-32 {}", attendance_color(record.percentage))
                                                value=record.percentage.to_string()
                                                max="100"
                                            ></progress>
                                            {format!("{}%", record.percentage)}
                                        </td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
pub fn AttendancePage() -> impl IntoView {
    let data = use_portal_data();

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Attendance"</h1>
                <p class="text-base-content/70">"Your attendance across all subjects."</p>
            </div>
            {move || match data.get() {
                LoadState::Loading => view! { <Loading /> }.into_any(),
                LoadState::Ready(data) => view! { <AttendanceTable records=data.attendance /> }.into_any(),
            }}
        </div>
    }
}
