use classtrack_shared::chat::{Conversation, Message};
use leptos::prelude::*;
use log::{debug, warn};

use crate::auth::use_auth;
use crate::web::clock;

#[component]
fn ConversationRow(chat: Conversation) -> impl IntoView {
    let auth = use_auth();
    let id = chat.id;
    let is_selected = move || auth.shell.with(|s| s.chats().is_selected(id));
    let unread = move || {
        auth.shell.with(|s| {
            s.chats()
                .conversations()
                .iter()
                .find(|c| c.id == id)
                .map_or(0, |c| c.unread)
        })
    };

    let on_select = move |_| {
        if let Some(Err(e)) = auth.shell.try_update(|s| s.select_chat(id)) {
            warn!("[Chat] {}", e);
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
            <div class="flex items-center gap-3">
                <div class=if chat.online { "avatar online" } else { "avatar offline" }>
                    <div class="w-12 rounded-full">
                        <img src=chat.avatar.clone() alt=chat.name.clone() />
                    </div>
                </div>
                <div class="flex-1 min-w-0">
                    <div class="flex items-center justify-between">
                        <h3 class="font-semibold truncate">{chat.name.clone()}</h3>
                        <span class="text-xs opacity-60">{chat.time.clone()}</span>
                    </div>
                    <p class="text-sm text-base-content/70 truncate">{chat.last_message.clone()}</p>
                    <p class="text-xs opacity-60">{chat.role.clone()}</p>
                </div>
                <Show when=move || { unread() > 0 }>
                    <span class="badge badge-primary badge-sm">{unread}</span>
                </Show>
            </div>
        </li>
    }
}

fn message_bubble(message: &Message) -> impl IntoView + use<> {
    let mine = message.is_mine();
    view! {
        <div class=if mine { "chat chat-end" } else { "chat chat-start" }>
            <div class=if mine { "chat-bubble chat-bubble-primary" } else { "chat-bubble" }>
                {message.text.clone()}
            </div>
            <div class="chat-footer opacity-50 text-xs">{message.time.clone()}</div>
        </div>
    }
}

#[component]
fn ChatWindow(chat: Conversation) -> impl IntoView {
    let auth = use_auth();
    let draft = RwSignal::new(String::new());

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = draft.get_untracked();
        match auth.shell.try_update(|s| s.send_message(&text, clock::time_label())) {
            Some(Ok(message)) => {
                debug!("[Chat] Sent {:?}.", message.text);
                draft.set(String::new());
            }
            Some(Err(e)) => debug!("[Chat] {}", e),
            None => {}
        }
    };

    view! {
        <div class="card bg-base-100 shadow-xl h-full flex flex-col">
            <div class="p-4 border-b border-base-200 flex items-center gap-3">
                <div class="avatar">
                    <div class="w-10 rounded-full">
                        <img src=chat.avatar.clone() alt=chat.name.clone() />
                    </div>
                </div>
                <div>
                    <h3 class="font-semibold">{chat.name.clone()}</h3>
                    <p class="text-sm opacity-60">{chat.role.clone()}</p>
                </div>
                <span class=if chat.online { "ml-auto text-sm text-success" } else { "ml-auto text-sm opacity-60" }>
                    {if chat.online { "Online" } else { "Offline" }}
                </span>
            </div>

            <div class="flex-1 p-4 overflow-y-auto bg-base-200">
                {chat.messages.iter().map(message_bubble).collect_view()}
            </div>

            <form on:submit=on_send class="p-4 border-t border-base-200 flex gap-2">
                <input
                    type="text"
                    placeholder="Type a message..."
                    class="input input-bordered flex-1"
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Send"</button>
            </form>
        </div>
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let auth = use_auth();
    let conversations = move || auth.shell.with(|s| s.chats().conversations().to_vec());
    let selected = Memo::new(move |_| auth.shell.with(|s| s.chats().selected().cloned()));

    view! {
        <div class="flex flex-col lg:flex-row gap-6 min-h-[70vh]">
            <div class="lg:w-1/3 card bg-base-100 shadow-xl">
                <div class="p-4 border-b border-base-200">
                    <h2 class="text-xl font-bold">"Messages"</h2>
                </div>
                <ul class="overflow-y-auto">
                    <For
                        each=conversations
                        key=|chat| (chat.id, chat.last_message.clone())
                        children=move |chat| view! { <ConversationRow chat=chat /> }
                    />
                </ul>
            </div>

            <div class="flex-1">
                {move || match selected.get() {
                    Some(chat) => view! { <ChatWindow chat=chat /> }.into_any(),
                    None => view! {
                        <div class="text-center py-24 text-base-content/50">
                            <i class="fas fa-comments text-5xl mb-4"></i>
                            <h3 class="text-lg font-medium">"Select a conversation"</h3>
                            <p>"Choose a chat from the list to start messaging"</p>
                        </div>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
