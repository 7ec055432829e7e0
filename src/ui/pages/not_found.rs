//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::route;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PublicLayout;

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Page Not Found | Zpluse University" />
        <PublicLayout>
            <div class="min-h-[60vh] flex flex-col items-center justify-center text-center px-4 py-20">
                <div class="w-24 h-24 mb-6 rounded-full bg-blue-50 dark:bg-blue-900/30 flex items-center justify-center">
                    <Icon name=icons::SEARCH class="text-[48px] text-blue-600" />
                </div>

                <h1 class="text-6xl font-extrabold text-slate-900 dark:text-white mb-4">"404"</h1>
                <h2 class="text-2xl font-semibold text-slate-900 dark:text-white mb-2">"Page Not Found"</h2>
                <p class="text-slate-500 dark:text-slate-400 mb-8 max-w-md">
                    "The page you're looking for doesn't exist or has been moved."
                </p>

                <div class="flex flex-col sm:flex-row items-center gap-4">
                    <A
                        href=route::HOME
                        attr:class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-xl"
                    >
                        "Go Home"
                    </A>
                    <A
                        href=route::COLLEGES
                        attr:class="px-6 py-3 border border-slate-200 dark:border-slate-700 font-semibold rounded-xl hover:bg-slate-100 dark:hover:bg-slate-800"
                    >
                        "Explore Colleges"
                    </A>
                </div>
            </div>
        </PublicLayout>
    }
}
