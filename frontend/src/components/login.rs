use classtrack_shared::route::{AppRoute, LoginKind};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::auth::{login, use_auth, verify_credentials};
use crate::web::router::use_router;

/// 登录页
///
/// 三种身份共用同一表单。校验通过后显示成功状态，
/// 用户点击继续时才写入会话，随后由路由服务重定向到仪表盘。
#[component]
pub fn LoginPage(kind: LoginKind) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let (subject_id, set_subject_id) = signal(String::new());
    let (pin, set_pin) = signal(String::new());
    let (is_submitting, set_is_submitting) = signal(false);
    let (verified, set_verified) = signal(false);
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if subject_id.get().trim().is_empty() || pin.get().is_empty() {
            set_error_msg.set(Some("Please fill in all fields".to_string()));
            return;
        }

        set_is_submitting.set(true);
        set_error_msg.set(None);

        spawn_local(async move {
            let ok = verify_credentials(&auth, &subject_id.get_untracked(), &pin.get_untracked()).await;
            if ok {
                set_verified.try_set(true);
            } else {
                set_error_msg.try_set(Some("Sign in failed. Check your credentials.".to_string()));
            }
            set_is_submitting.try_set(false);
        });
    };

    let on_continue = move |_| login(&auth, subject_id.get_untracked());

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-md">
                <div class="text-center mb-4">
                    <h1 class="text-3xl font-bold">{format!("{} Login", kind.label())}</h1>
                    <p class="text-base-content/70">"Sign in to continue to ClassTrack Pro"</p>
                </div>

                <div class="card shrink-0 w-full shadow-2xl bg-base-100">
                    <Show
                        when=move || verified.get()
                        fallback=move || view! {
                            <form class="card-body" on:submit=on_submit>
                                <Show when=move || error_msg.get().is_some()>
                                    <div role="alert" class="alert alert-error text-sm py-2">
                                        <span>{move || error_msg.get().unwrap_or_default()}</span>
                                    </div>
                                </Show>

                                <div class="form-control">
                                    <label class="label" for="subject_id">
                                        <span class="label-text">{format!("{} Number", kind.label())}</span>
                                    </label>
                                    <input
                                        id="subject_id"
                                        type="text"
                                        placeholder="2021-0001"
                                        on:input=move |ev| set_subject_id.set(event_target_value(&ev))
                                        prop:value=subject_id
                                        class="input input-bordered"
                                        required
                                    />
                                </div>
                                <div class="form-control">
                                    <label class="label" for="pin">
                                        <span class="label-text">"PIN Number"</span>
                                    </label>
                                    <input
                                        id="pin"
                                        type="password"
                                        placeholder="••••••"
                                        on:input=move |ev| set_pin.set(event_target_value(&ev))
                                        prop:value=pin
                                        class="input input-bordered"
                                        required
                                    />
                                </div>
                                <div class="form-control mt-6">
                                    <button class="btn btn-primary" disabled=move || is_submitting.get()>
                                        {move || if is_submitting.get() {
                                            view! { <span class="loading loading-spinner"></span> "Signing in..." }.into_any()
                                        } else {
                                            "SIGN IN".into_any()
                                        }}
                                    </button>
                                </div>
                                <button
                                    type="button"
                                    class="btn btn-ghost btn-sm"
                                    on:click=move |_| router.navigate(AppRoute::Landing)
                                >
                                    "Back"
                                </button>
                            </form>
                        }
                    >
                        <div class="card-body items-center text-center">
                            <div class="rounded-full bg-success text-success-content p-4">
                                <i class="fas fa-check text-2xl"></i>
                            </div>
                            <h2 class="text-2xl font-bold mt-4">"Login Successful!"</h2>
                            <p class="text-base-content/70">
                                "You can now access your dashboard."
                            </p>
                            <button class="btn btn-primary w-full mt-6" on:click=on_continue>
                                {format!("Continue to {} Dashboard", kind.label())}
                            </button>
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
