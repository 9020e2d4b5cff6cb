use classtrack_shared::notes::{Note, NoteColor, NoteDraft};
use leptos::prelude::*;
use log::warn;

use crate::auth::use_auth;
use crate::web::clock;

fn color_dot(color: NoteColor) -> &'static str {
    match color {
        NoteColor::Blue => "w-3 h-3 rounded-full mt-2 bg-info",
        NoteColor::Green => "w-3 h-3 rounded-full mt-2 bg-success",
        NoteColor::Purple => "w-3 h-3 rounded-full mt-2 bg-secondary",
        NoteColor::Orange => "w-3 h-3 rounded-full mt-2 bg-warning",
        NoteColor::Red => "w-3 h-3 rounded-full mt-2 bg-error",
    }
}

#[component]
fn NoteRow(note: Note) -> impl IntoView {
    let auth = use_auth();
    let id = note.id;
    let is_selected = move || auth.shell.with(|s| s.notes().selected().is_some_and(|n| n.id == id));
    let extra_tags = note.tags.len().saturating_sub(2);

    let on_select = move |_| {
        if let Some(Err(e)) = auth.shell.try_update(|s| s.select_note(id)) {
            warn!("[Notes] {}", e);
        }
    };

    view! {
        <li
            class=move || {
                if is_selected() {
                    "p-4 border-b border-base-200 cursor-pointer bg-primary/10"
                } else {
                    "p-4 border-b border-base-200 cursor-pointer hover:bg-base-200"
                }
            }
            on:click=on_select
        >
            <div class="flex items-start gap-3">
                <div class=color_dot(note.color)></div>
                <div class="flex-1 min-w-0">
                    <h3 class="font-semibold truncate">{note.title.clone()}</h3>
                    <p class="text-sm text-base-content/70 line-clamp-2">{note.content.clone()}</p>
                    <div class="flex justify-between mt-2 text-xs text-base-content/50">
                        <span>{note.subject.clone()}</span>
                        <span>{note.date.to_string()}</span>
                    </div>
                    <div class="flex flex-wrap gap-1 mt-2">
                        {note
                            .tags
                            .iter()
                            .take(2)
                            .map(|tag| view! { <span class="badge badge-ghost badge-sm">{tag.clone()}</span> })
                            .collect_view()}
                        {(extra_tags > 0).then(|| view! { <span class="text-xs opacity-60">{format!("+{}", extra_tags)}</span> })}
                    </div>
                </div>
            </div>
        </li>
    }
}

#[component]
fn NoteDetail(note: Note) -> impl IntoView {
    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">{note.title}</h3>
                <div class="flex gap-4 text-sm text-base-content/60">
                    <span>{note.subject}</span>
                    <span>{note.date.to_string()}</span>
                </div>
                <pre class="whitespace-pre-wrap font-sans leading-relaxed mt-4">{note.content}</pre>
                <div class="mt-4">
                    <h4 class="text-sm font-medium mb-2">"Tags"</h4>
                    <div class="flex flex-wrap gap-2">
                        {note
                            .tags
                            .into_iter()
                            .map(|tag| view! { <span class="badge badge-primary badge-outline">{tag}</span> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

/// 新建笔记表单，保存失败时保持打开并显示错误
#[component]
fn NoteForm(
    #[prop(into)] on_save: Callback<NoteDraft, Option<String>>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let title = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let content = RwSignal::new(String::new());
    let tags = RwSignal::new(String::new());
    let color = RwSignal::new(NoteColor::default());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let draft = NoteDraft {
            title: title.get_untracked(),
            content: content.get_untracked(),
            subject: subject.get_untracked(),
            tags: tags.get_untracked(),
            color: color.get_untracked(),
        };
        set_error_msg.set(on_save.run(draft));
    };

    view! {
        <form on:submit=on_submit class="card bg-base-100 shadow-xl">
            <div class="card-body space-y-3">
                <h3 class="card-title">"New Note"</h3>
                <Show when=move || error_msg.get().is_some()>
                    <div role="alert" class="alert alert-error text-sm py-2">
                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                    </div>
                </Show>
                <input
                    type="text"
                    placeholder="Title"
                    class="input input-bordered w-full"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <div class="flex gap-3">
                    <input
                        type="text"
                        placeholder="Subject"
                        class="input input-bordered flex-1"
                        prop:value=move || subject.get()
                        on:input=move |ev| subject.set(event_target_value(&ev))
                    />
                    <select
                        class="select select-bordered"
                        on:change=move |ev| color.set(NoteColor::parse(&event_target_value(&ev)))
                    >
                        {NoteColor::ALL
                            .into_iter()
                            .map(|option| {
                                view! {
                                    <option value=option.key() selected=move || color.get() == option>
                                        {option.key()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
                <textarea
                    placeholder="Write your note..."
                    class="textarea textarea-bordered w-full h-40"
                    prop:value=move || content.get()
                    on:input=move |ev| content.set(event_target_value(&ev))
                ></textarea>
                <input
                    type="text"
                    placeholder="Tags, separated by commas"
                    class="input input-bordered w-full"
                    prop:value=move || tags.get()
                    on:input=move |ev| tags.set(event_target_value(&ev))
                />
                <div class="card-actions justify-end">
                    <button type="button" class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary">"Save Note"</button>
                </div>
            </div>
        </form>
    }
}

#[component]
pub fn NotesPage() -> impl IntoView {
    let auth = use_auth();
    let (show_new_note, set_show_new_note) = signal(false);
    let query = move || auth.shell.with(|s| s.notes().query().to_string());
    let visible = move || auth.shell.with(|s| s.visible_notes());
    let selected = Memo::new(move |_| auth.shell.with(|s| s.notes().selected().cloned()));

    let handle_save = move |draft: NoteDraft| {
        let result = auth
            .shell
            .try_update(|s| s.add_note(draft, clock::today()).err())
            .flatten()
            .map(|e| e.message().to_string());
        if result.is_none() {
            set_show_new_note.set(false);
        }
        result
    };

    view! {
        <div class="flex flex-col lg:flex-row gap-6 min-h-[70vh]">
            <div class="lg:w-1/3 card bg-base-100 shadow-xl">
                <div class="p-4 border-b border-base-200 space-y-4">
                    <div class="flex items-center justify-between">
                        <h2 class="text-xl font-bold">"My Notes"</h2>
                        <button class="btn btn-primary btn-sm btn-square" on:click=move |_| set_show_new_note.set(true)>
                            <i class="fas fa-plus"></i>
                        </button>
                    </div>
                    <label class="input input-bordered flex items-center gap-2">
                        <i class="fas fa-search opacity-50"></i>
                        <input
                            type="text"
                            class="grow"
                            placeholder="Search notes..."
                            prop:value=query
                            on:input=move |ev| auth.shell.update(|s| s.search_notes(event_target_value(&ev)))
                        />
                    </label>
                </div>
                <ul class="overflow-y-auto">
                    <For
                        each=visible
                        key=|note| note.id
                        children=move |note| view! { <NoteRow note=note /> }
                    />
                </ul>
            </div>

            <div class="flex-1">
                {move || {
                    if show_new_note.get() {
                        view! {
                            <NoteForm on_save=handle_save on_cancel=move |_| set_show_new_note.set(false) />
                        }
                        .into_any()
                    } else {
                        match selected.get() {
                            Some(note) => view! { <NoteDetail note=note /> }.into_any(),
                            None => view! {
                                <div class="text-center py-24 text-base-content/50">
                                    <i class="fas fa-sticky-note text-5xl mb-4"></i>
                                    <h3 class="text-lg font-medium">"Select a note"</h3>
                                    <p>"Choose a note from the list to view its content"</p>
                                </div>
                            }
                            .into_any(),
                        }
                    }
                }}
            </div>
        </div>
    }
}
