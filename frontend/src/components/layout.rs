//! 已认证区域的布局
//!
//! 左侧为侧边栏（主菜单 + 底部菜单），顶部为导航栏。
//! 激活项由状态机的侧边栏选择器决定，移动端通过开关控制侧边栏显隐。

use classtrack_shared::selector::{FOOTER_MENU, MAIN_MENU, NavItem};
use leptos::prelude::*;

use crate::auth::{logout, use_auth};
use crate::web::router::use_router;

#[component]
fn NavEntry(item: &'static NavItem) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();
    let is_active = move || auth.shell.with(|s| s.is_section_active(item));

    view! {
        <li>
            <a
                href=item.route.to_path()
                class=move || if is_active() { "active" } else { "" }
                on:click=move |ev| {
                    ev.prevent_default();
                    router.select_section(item.id);
                }
            >
                <i class=format!("{} w-5", item.icon)></i>
                {item.label}
                {item.badge.map(|count| view! { <span class="badge badge-error badge-sm">{count}</span> })}
            </a>
        </li>
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let auth = use_auth();
    let is_open = move || auth.shell.with(|s| s.is_sidebar_open());

    view! {
        // 移动端遮罩
        <Show when=is_open>
            <div
                class="fixed inset-0 bg-black/50 z-40 lg:hidden"
                on:click=move |_| auth.shell.update(|s| s.close_sidebar())
            ></div>
        </Show>

        <aside class=move || {
            if is_open() {
                "fixed left-0 top-0 h-full w-64 bg-neutral text-neutral-content z-50 transition-transform translate-x-0"
            } else {
                "fixed left-0 top-0 h-full w-64 bg-neutral text-neutral-content z-50 transition-transform -translate-x-full lg:translate-x-0"
            }
        }>
            <div class="flex flex-col h-full">
                <div class="p-6 border-b border-neutral-content/10">
                    <h2 class="text-xl font-bold">"ClassTrack Pro"</h2>
                    <p class="text-xs opacity-60">"Student Portal"</p>
                </div>

                <ul class="menu flex-1 p-4 gap-1">
                    {MAIN_MENU.iter().map(|item| view! { <NavEntry item=item /> }).collect_view()}
                </ul>

                <ul class="menu p-4 border-t border-neutral-content/10 gap-1">
                    {FOOTER_MENU.iter().map(|item| view! { <NavEntry item=item /> }).collect_view()}
                    <li>
                        <a class="text-error" on:click=move |_| logout(&auth)>
                            <i class="fas fa-sign-out-alt w-5"></i>
                            "Logout"
                        </a>
                    </li>
                </ul>
            </div>
        </aside>
    }
}

#[component]
fn TopNavbar() -> impl IntoView {
    let auth = use_auth();
    let subject_id = auth.subject_id();

    view! {
        <div class="navbar bg-base-100 shadow-sm sticky top-0 z-30">
            <div class="flex-1 gap-2">
                <button
                    class="btn btn-ghost btn-square lg:hidden"
                    on:click=move |_| auth.shell.update(|s| s.toggle_sidebar())
                >
                    <i class="fas fa-bars"></i>
                </button>
                <input
                    type="text"
                    placeholder="Search..."
                    class="input input-bordered w-80 hidden lg:block"
                />
            </div>
            <div class="flex-none gap-2">
                <button class="btn btn-ghost btn-circle">
                    <i class="fas fa-bell"></i>
                </button>
                <div class="dropdown dropdown-end">
                    <div tabindex="0" role="button" class="btn btn-ghost gap-2">
                        <i class="fas fa-user-circle text-xl"></i>
                        <span class="hidden md:inline">{move || subject_id.get()}</span>
                    </div>
                    <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-100 rounded-box w-52">
                        <li>
                            <a on:click=move |_| logout(&auth) class="text-error">
                                <i class="fas fa-sign-out-alt"></i>
                                "Logout"
                            </a>
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}

/// 侧边栏 + 顶部导航栏 + 内容区
#[component]
pub fn AppLayout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-base-200">
            <Sidebar />
            <div class="lg:ml-64">
                <TopNavbar />
                <main class="p-4 md:p-8">{children()}</main>
            </div>
        </div>
    }
}
