use classtrack_shared::settings::{AcademicYear, NotificationChannel, ProfileField, SettingsTab};
use leptos::prelude::*;

use crate::auth::use_auth;

#[component]
fn ProfileInput(field: ProfileField, label: &'static str, input_type: &'static str) -> impl IntoView {
    let auth = use_auth();
    let value = move || auth.shell.with(|s| s.settings().draft().profile.field(field).to_string());

    view! {
        <div class="form-control">
            <label class="label">
                <span class="label-text">{label}</span>
            </label>
            <input
                type=input_type
                class="input input-bordered w-full"
                prop:value=value
                on:input=move |ev| auth.shell.update(|s| s.settings_mut().set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
fn ProfileTab() -> impl IntoView {
    let auth = use_auth();
    let name = move || auth.shell.with(|s| s.settings().saved().profile.name.clone());
    let email = move || auth.shell.with(|s| s.settings().saved().profile.email.clone());
    let year = move || auth.shell.with(|s| s.settings().draft().profile.year);

    view! {
        <h2 class="card-title mb-4">"Profile Information"</h2>
        <div class="flex items-center gap-6 mb-6">
            <div class="avatar">
                <div class="w-24 rounded-full">
                    <img
                        src="https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face"
                        alt="Profile"
                    />
                </div>
            </div>
            <div>
                <h3 class="text-lg font-semibold">{name}</h3>
                <p class="text-base-content/70">{email}</p>
            </div>
        </div>
        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
            <ProfileInput field=ProfileField::Name label="Full Name" input_type="text" />
            <ProfileInput field=ProfileField::Email label="Email" input_type="email" />
            <ProfileInput field=ProfileField::Phone label="Phone" input_type="tel" />
            <ProfileInput field=ProfileField::Major label="Major" input_type="text" />
            <div class="form-control">
                <label class="label">
                    <span class="label-text">"Academic Year"</span>
                </label>
                <select
                    class="select select-bordered w-full"
                    on:change=move |ev| {
                        if let Some(year) = AcademicYear::parse(&event_target_value(&ev)) {
                            auth.shell.update(|s| s.settings_mut().set_year(year));
                        }
                    }
                >
                    {AcademicYear::ALL
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option value=option.label() selected=move || year() == option>
                                    {option.label()}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>
        </div>
    }
}

#[component]
fn AccountTab() -> impl IntoView {
    view! {
        <h2 class="card-title mb-4">"Account Settings"</h2>
        <div class="space-y-6">
            <div class="border border-base-300 rounded-lg p-4 space-y-4">
                <h3 class="font-semibold">"Change Password"</h3>
                <input type="password" placeholder="Current Password" class="input input-bordered w-full" />
                <input type="password" placeholder="New Password" class="input input-bordered w-full" />
                <input type="password" placeholder="Confirm New Password" class="input input-bordered w-full" />
            </div>
            <div class="border border-base-300 rounded-lg p-4">
                <h3 class="font-semibold">"Two-Factor Authentication"</h3>
                <p class="text-sm text-base-content/70 mb-4">"Add an extra layer of security to your account."</p>
                <button class="btn btn-primary" disabled>"Enable 2FA"</button>
            </div>
        </div>
    }
}

#[component]
fn NotificationsTab() -> impl IntoView {
    let auth = use_auth();

    view! {
        <h2 class="card-title mb-4">"Notification Preferences"</h2>
        <div class="space-y-4">
            {NotificationChannel::ALL
                .into_iter()
                .map(|channel| {
                    let enabled = move || {
                        auth.shell.with(|s| s.settings().draft().notifications.is_enabled(channel))
                    };
                    view! {
                        <label class="flex items-center justify-between p-4 border border-base-300 rounded-lg cursor-pointer">
                            <div>
                                <h3 class="font-medium">{channel.label()}</h3>
                                <p class="text-sm text-base-content/70">{channel.description()}</p>
                            </div>
                            <input
                                type="checkbox"
                                class="toggle toggle-primary"
                                prop:checked=enabled
                                on:change=move |_| {
                                    auth.shell.update(|s| {
                                        s.settings_mut().toggle_notification(channel);
                                    })
                                }
                            />
                        </label>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn PrivacyTab() -> impl IntoView {
    view! {
        <h2 class="card-title mb-4">"Privacy Settings"</h2>
        <div class="space-y-6">
            <div class="border border-base-300 rounded-lg p-4 space-y-3">
                <h3 class="font-semibold">"Data Privacy"</h3>
                <p class="text-sm text-base-content/70">"Control how your data is used and shared within the platform."</p>
                <label class="flex items-center gap-3">
                    <input type="checkbox" class="checkbox" checked />
                    <span class="text-sm">"Allow data collection for analytics"</span>
                </label>
                <label class="flex items-center gap-3">
                    <input type="checkbox" class="checkbox" checked />
                    <span class="text-sm">"Share progress with academic advisors"</span>
                </label>
                <label class="flex items-center gap-3">
                    <input type="checkbox" class="checkbox" />
                    <span class="text-sm">"Allow third-party integrations"</span>
                </label>
            </div>
        </div>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let auth = use_auth();
    // 只在选项卡变化时重建内容
    let active = Memo::new(move |_| auth.shell.with(|s| s.settings().active_tab()));
    let is_dirty = move || auth.shell.with(|s| s.settings().is_dirty());
    let (error_msg, set_error_msg) = signal(Option::<String>::None);

    let on_save = move |_| {
        let result = auth.shell.try_update(|s| s.settings_mut().save());
        set_error_msg.set(match result {
            Some(Err(e)) => Some(e.message().to_string()),
            _ => None,
        });
    };
    let on_cancel = move |_| {
        auth.shell.update(|s| s.settings_mut().cancel());
        set_error_msg.set(None);
    };

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold">"Settings"</h1>
                <p class="text-base-content/70">"Manage your account settings and preferences."</p>
            </div>

            <div class="flex flex-col lg:flex-row gap-8">
                <ul class="menu bg-base-100 rounded-box shadow-xl lg:w-64">
                    {SettingsTab::ALL
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <li>
                                    <a
                                        class=move || if active.get() == tab { "active" } else { "" }
                                        on:click=move |_| {
                                            auth.shell.update(|s| {
                                                s.settings_mut().select_tab(tab);
                                            })
                                        }
                                    >
                                        <i class=format!("{} w-5", tab.icon())></i>
                                        {tab.label()}
                                    </a>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>

                <div class="flex-1 space-y-6">
                    <div class="card bg-base-100 shadow-xl">
                        <div class="card-body">
                            {move || match active.get() {
                                SettingsTab::Profile => view! { <ProfileTab /> }.into_any(),
                                SettingsTab::Account => view! { <AccountTab /> }.into_any(),
                                SettingsTab::Notifications => view! { <NotificationsTab /> }.into_any(),
                                SettingsTab::Privacy => view! { <PrivacyTab /> }.into_any(),
                            }}
                        </div>
                    </div>

                    <Show when=move || error_msg.get().is_some()>
                        <div role="alert" class="alert alert-error text-sm">
                            <span>{move || error_msg.get().unwrap_or_default()}</span>
                        </div>
                    </Show>

                    <div class="flex justify-end gap-4">
                        <button class="btn" disabled=move || !is_dirty() on:click=on_cancel>"Cancel"</button>
                        <button class="btn btn-primary" disabled=move || !is_dirty() on:click=on_save>
                            "Save Changes"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
