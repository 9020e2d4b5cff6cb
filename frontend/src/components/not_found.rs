use classtrack_shared::route::AppRoute;
use leptos::prelude::*;

use crate::web::router::Link;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center min-h-[60vh]">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-error">"404"</h1>
                <p class="text-xl mt-4">"Page not found"</p>
                <Link to=AppRoute::Dashboard class="btn btn-primary mt-6">
                    "Back to Dashboard"
                </Link>
            </div>
        </div>
    }
}
