mod form_state;

use chrono::NaiveDate;
use leptos::prelude::*;

use form_state::FormState;

#[component]
pub fn AddTaskDialog(
    /// 提交回调，返回错误信息时对话框保持打开
    #[prop(into)]
    on_add: Callback<(String, NaiveDate), Option<String>>,
) -> impl IntoView {
    let (open, set_open) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);
    let dialog_ref = NodeRef::<leptos::html::Dialog>::new();
    let state = FormState::new();

    Effect::new(move |_| {
        if let Some(dialog) = dialog_ref.get() {
            if open.get() {
                if !dialog.open() {
                    let _ = dialog.show_modal();
                }
            } else if dialog.open() {
                dialog.close();
            }
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = match state.to_request() {
            Ok(request) => request,
            Err(e) => {
                set_error_msg.set(Some(e.message().to_string()));
                return;
            }
        };

        match on_add.run(request) {
            Some(msg) => set_error_msg.set(Some(msg)),
            None => {
                set_error_msg.set(None);
                set_open.set(false);
                state.reset();
            }
        }
    };

    view! {
        // 触发按钮
        <button class="btn btn-primary gap-2" on:click=move |_| set_open.set(true)>
            <i class="fas fa-plus"></i> "Add Task"
        </button>

        // 模态框内容
        <dialog class="modal" node_ref=dialog_ref on:close=move |_| set_open.set(false)>
            <div class="modal-box">
                <h3 class="font-bold text-lg">"New Task"</h3>

                <form on:submit=on_submit class="space-y-4 mt-4">
                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm py-2">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="form-control">
                        <label for="task_title" class="label">
                            <span class="label-text">"Title"</span>
                        </label>
                        <input id="task_title" required
                            type="text"
                            placeholder="Biology Essay"
                            on:input=move |ev| state.title.set(event_target_value(&ev))
                            prop:value=move || state.title.get()
                            class="input input-bordered w-full"
                        />
                    </div>
                    <div class="form-control">
                        <label for="task_due" class="label">
                            <span class="label-text">"Due date"</span>
                        </label>
                        <input id="task_due" required
                            type="date"
                            on:input=move |ev| state.due_date.set(event_target_value(&ev))
                            prop:value=move || state.due_date.get()
                            class="input input-bordered w-full"
                        />
                    </div>

                    <div class="modal-action">
                        <button type="button" class="btn" on:click=move |_| set_open.set(false)>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn btn-primary">"Add"</button>
                    </div>
                </form>
            </div>
        </dialog>
    }
}
