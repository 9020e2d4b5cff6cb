use chrono::NaiveDate;
use classtrack_shared::Task;
use classtrack_shared::source::LoadState;
use classtrack_shared::tasks::TaskFilter;
use leptos::prelude::*;
use log::warn;

use crate::api::{submit_task_status, use_portal_data};
use crate::auth::use_auth;
use crate::components::add_task_dialog::AddTaskDialog;
use crate::components::dashboard::Loading;

#[component]
fn TaskRow(task: Task) -> impl IntoView {
    let auth = use_auth();
    let id = task.id;
    let done = task.is_completed();

    // 先在本地切换，再提交到数据源
    let on_toggle = move |_| match auth.shell.try_update(|s| s.toggle_task(id)) {
        Some(Ok(updated)) => {
            submit_task_status(auth.config.get_value(), updated.id, updated.status)
        }
        Some(Err(e)) => warn!("[Data] {}", e),
        None => {}
    };

    view! {
        <tr>
            <td>
                <input
                    type="checkbox"
                    class="checkbox checkbox-primary"
                    prop:checked=done
                    on:change=on_toggle
                />
            </td>
            <td class=if done { "line-through opacity-50" } else { "font-semibold" }>
                {task.title.clone()}
            </td>
            <td class="font-mono text-sm">{task.due_date.to_string()}</td>
            <td>
                <span class=if done { "badge badge-success" } else { "badge badge-warning" }>
                    {task.status.label()}
                </span>
            </td>
        </tr>
    }
}

#[component]
fn TasksContent() -> impl IntoView {
    let auth = use_auth();
    let stats = move || auth.shell.with(|s| s.task_stats());
    let filter = move || auth.shell.with(|s| s.task_filter());
    let visible = move || auth.shell.with(|s| s.visible_tasks());

    let handle_add = move |(title, due): (String, NaiveDate)| {
        auth.shell
            .try_update(|s| s.add_task(title, due).err())
            .flatten()
            .map(|e| e.message().to_string())
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between">
                <div>
                    <h1 class="text-3xl font-bold">"Tasks & Assignments"</h1>
                    <p class="text-base-content/70">"Manage your academic tasks and track your progress."</p>
                </div>
                <AddTaskDialog on_add=handle_add />
            </div>

            <div class="stats shadow w-full stats-vertical md:stats-horizontal bg-base-100">
                <div class="stat">
                    <div class="stat-title">"Total Tasks"</div>
                    <div class="stat-value text-primary">{move || stats().total}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Pending"</div>
                    <div class="stat-value text-warning">{move || stats().pending}</div>
                </div>
                <div class="stat">
                    <div class="stat-title">"Completed"</div>
                    <div class="stat-value text-success">{move || stats().completed}</div>
                </div>
            </div>

            <div role="tablist" class="tabs tabs-boxed bg-base-100">
                {TaskFilter::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <a
                                role="tab"
                                class=move || if filter() == option { "tab tab-active" } else { "tab" }
                                on:click=move |_| auth.shell.update(|s| s.set_task_filter(option))
                            >
                                {option.label()}
                                " (" {move || stats().count_for(option)} ")"
                            </a>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="card bg-base-100 shadow-xl">
                <div class="overflow-x-auto w-full">
                    <table class="table w-full">
                        <thead>
                            <tr>
                                <th></th>
                                <th>"Task"</th>
                                <th>"Due"</th>
                                <th>"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <Show when=move || visible().is_empty()>
                                <tr>
                                    <td colspan="4" class="text-center py-8 text-base-content/50">
                                        {move || filter().empty_message()}
                                    </td>
                                </tr>
                            </Show>
                            <For
                                each=visible
                                key=|task| (task.id, task.status)
                                children=move |task| view! { <TaskRow task=task /> }
                            />
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let data = use_portal_data();

    move || match data.get() {
        LoadState::Loading => view! { <Loading /> }.into_any(),
        LoadState::Ready(_) => view! { <TasksContent /> }.into_any(),
    }
}
