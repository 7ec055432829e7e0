//! Live class room: the conferencing embed for one class

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::core::live_class::embed_url;
use crate::core::route;
use crate::ui::api::use_services;
use crate::ui::auth::use_auth_context;
use crate::ui::common::Spinner;
use crate::ui::icon::{Icon, icons};

#[component]
pub fn LiveClassPage() -> impl IntoView {
    let params = use_params_map();
    let auth = use_auth_context();
    let meet_domain = use_services().config.meet_domain;
    let navigate = use_navigate();

    let class_id = Memo::new(move |_| params.with(|p| p.get("class_id").unwrap_or_default()));
    let frame_loaded = RwSignal::new(false);

    let src = Memo::new(move |_| {
        auth.user()
            .map(|user| class_id.with(|id| embed_url(&meet_domain, id, &user)))
    });

    let leave = move |_| {
        let home = match auth.role() {
            Some(Ok(role)) => role.home_path(),
            _ => route::HOME,
        };
        navigate(home, Default::default());
    };

    view! {
        <Title text="Live Class | Zpluse University" />
        <div class="h-screen flex flex-col bg-slate-950 text-white">
            <header class="h-14 shrink-0 flex items-center justify-between px-4 border-b border-slate-800">
                <div class="flex items-center gap-3">
                    <span class="relative flex h-2.5 w-2.5">
                        <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-red-400 opacity-75"></span>
                        <span class="relative inline-flex rounded-full h-2.5 w-2.5 bg-red-500"></span>
                    </span>
                    <div>
                        <h1 class="text-sm font-bold">"Live Session Room"</h1>
                        <p class="text-xs text-slate-400">{move || format!("Class {}", class_id.get())}</p>
                    </div>
                </div>
                <button
                    class="flex items-center gap-2 px-4 py-2 rounded-xl bg-red-600 hover:bg-red-700 text-sm font-bold"
                    on:click=leave
                >
                    <Icon name=icons::LOGOUT class="text-[18px]" />
                    "Leave Class"
                </button>
            </header>

            <main class="relative flex-1">
                <Show when=move || !frame_loaded.get()>
                    <div class="absolute inset-0 flex flex-col items-center justify-center gap-4 bg-slate-950 z-10">
                        <Spinner />
                        <p class="text-sm text-slate-400">"Initializing Secure Classroom..."</p>
                    </div>
                </Show>
                {move || {
                    src.get()
                        .map(|src| {
                            view! {
                                <iframe
                                    src=src
                                    title="Live class"
                                    class="absolute inset-0 w-full h-full border-0"
                                    allow="camera; microphone; fullscreen; display-capture; autoplay"
                                    on:load=move |_| frame_loaded.set(true)
                                ></iframe>
                            }
                        })
                }}
            </main>
        </div>
    }
}
