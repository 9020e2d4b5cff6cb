use classtrack_shared::route::{AppRoute, LoginKind};
use leptos::prelude::*;

use crate::web::router::use_router;

struct RoleCard {
    kind: LoginKind,
    description: &'static str,
    icon: &'static str,
    color: &'static str,
}

const ROLE_CARDS: [RoleCard; 3] = [
    RoleCard {
        kind: LoginKind::Student,
        description: "Access your academic records, schedules, and student services",
        icon: "fas fa-user-graduate",
        color: "btn-info",
    },
    RoleCard {
        kind: LoginKind::Teacher,
        description: "Manage classes, grades, and academic resources",
        icon: "fas fa-chalkboard-teacher",
        color: "btn-success",
    },
    RoleCard {
        kind: LoginKind::Admin,
        description: "Access administrative tools and system management",
        icon: "fas fa-user-shield",
        color: "btn-error",
    },
];

/// 匿名入口页：选择登录身份
#[component]
pub fn LandingPage() -> impl IntoView {
    let router = use_router();

    view! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content flex-col w-full max-w-4xl">
                <div class="text-center mb-6">
                    <h1 class="text-4xl font-bold">"ClassTrack Pro"</h1>
                    <p class="text-base-content/70 mt-2">"Choose how you want to sign in"</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6 w-full">
                    {ROLE_CARDS
                        .iter()
                        .map(|card| {
                            let kind = card.kind;
                            view! {
                                <div class="card bg-base-100 shadow-xl">
                                    <div class="card-body items-center text-center">
                                        <i class=format!("{} text-4xl", card.icon)></i>
                                        <h2 class="card-title">{kind.label()}</h2>
                                        <p class="text-sm text-base-content/70">{card.description}</p>
                                        <div class="card-actions mt-4">
                                            <button
                                                class=format!("btn {}", card.color)
                                                on:click=move |_| router.navigate(AppRoute::Login(kind))
                                            >
                                                "Continue as " {kind.label()}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
