use classtrack_shared::schedule::{ClassEntry, DayKey, ScheduleView};
use classtrack_shared::source::LoadState;
use leptos::prelude::*;

use crate::api::use_portal_data;
use crate::auth::use_auth;
use crate::components::dashboard::Loading;

fn class_card(entry: &ClassEntry) -> impl IntoView + use<> {
    view! {
        <div class="card bg-base-100 shadow">
            <div class="card-body">
                <h3 class="card-title">{entry.subject.clone()}</h3>
                <div class="flex flex-wrap gap-4 text-sm text-base-content/70">
                    <span><i class="fas fa-clock mr-1"></i>{entry.time.clone()}</span>
                    <span><i class="fas fa-door-open mr-1"></i>{entry.room.clone()}</span>
                    <span><i class="fas fa-user mr-1"></i>{entry.professor.clone()}</span>
                </div>
            </div>
        </div>
    }
}

/// 周课表
///
/// 星期选项卡由状态机的星期选择器驱动，切换后同步重新渲染。
#[component]
fn ScheduleContent() -> impl IntoView {
    let auth = use_auth();

    let day_tab = move |day: DayKey| {
        let is_active = move || auth.shell.with(|s| s.active_day() == day);
        view! {
            <a
                role="tab"
                class=move || if is_active() { "tab tab-active" } else { "tab" }
                on:click=move |_| {
                    auth.shell.update(|s| {
                        s.select_day(day);
                    })
                }
            >
                {day.label()}
            </a>
        }
    };

    let classes = move || {
        auth.shell.with(|s| match s.schedule_view() {
            ScheduleView::Classes(entries) => entries.iter().map(class_card).collect_view().into_any(),
            ScheduleView::NoClasses => view! {
                <div class="text-center py-12 text-base-content/50">
                    <i class="fas fa-calendar-times text-4xl mb-2"></i>
                    <p>"No classes scheduled for this day."</p>
                </div>
            }
            .into_any(),
        })
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Class Schedule"</h1>
                <p class="text-base-content/70">"Your weekly class timetable."</p>
            </div>

            <div role="tablist" class="tabs tabs-boxed bg-base-100">
                {DayKey::ALL.into_iter().map(day_tab).collect_view()}
            </div>

            <div class="space-y-4">{classes}</div>
        </div>
    }
}

/// 挂载时加载数据，加载完成后以数据源课表为准
#[component]
pub fn SchedulePage() -> impl IntoView {
    let data = use_portal_data();

    move || match data.get() {
        LoadState::Loading => view! { <Loading /> }.into_any(),
        LoadState::Ready(_) => view! { <ScheduleContent /> }.into_any(),
    }
}
