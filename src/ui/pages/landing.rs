//! Landing page component
//!
//! Public entry point for Zpluse University featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with Apply / Explore calls to action
//! - Live headline statistics from the API
//! - Role overview (admin, teacher, student)
//! - About section anchored at `#about`
//! - Call-to-action band

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::lms::CollegeStats;
use crate::core::route;
use crate::ui::api::use_api;
use crate::ui::auth::use_auth_context;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::{BRAND_NAME, BRAND_TAGLINE, PublicLayout};

#[component]
pub fn LandingPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth_context();
    let stats = RwSignal::new(CollegeStats::default());

    // Stats are decorative; a failed load keeps the defaults
    Effect::new(move |_| {
        let api = api.clone();
        spawn_local(async move {
            match api.college_stats().await {
                Ok(Some(loaded)) => {
                    stats.try_set(loaded);
                }
                Ok(None) => {}
                Err(e) => leptos::logging::warn!("Error fetching stats: {}", e),
            }
        });
    });

    // Signed-in users are offered their workspace instead of registration
    let primary_cta = move || match auth.role() {
        Some(Ok(role)) => (role.home_path(), "Go to Dashboard"),
        _ => (route::REGISTER, "Apply Now"),
    };

    view! {
        <SeoMeta />

        <PublicLayout>
            // Hero Section
            <section class="pt-20 pb-12 px-4 relative overflow-hidden">
                <div class="flex justify-center mb-6">
                    <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-blue-50 dark:bg-blue-900/30 border border-blue-100 dark:border-blue-800 text-blue-600 dark:text-blue-300 text-xs font-semibold">
                        <span class="relative flex h-2 w-2">
                            <span class="animate-ping absolute inline-flex h-full w-full rounded-full bg-blue-400 opacity-75"></span>
                            <span class="relative inline-flex rounded-full h-2 w-2 bg-blue-600"></span>
                        </span>
                        "Zpluse University Ecosystem Live"
                    </div>
                </div>
                <div class="text-center max-w-2xl mx-auto">
                    <h1 class="text-4xl sm:text-5xl font-extrabold tracking-tight text-slate-900 dark:text-white leading-[1.15] mb-6">
                        "The Future of " <br />
                        <span class="text-blue-600">"Higher Education"</span>
                    </h1>
                    <p class="text-slate-600 dark:text-slate-300 text-lg leading-relaxed mb-8">
                        "A comprehensive, Next-Gen Learning Management System uniting Administrators, Teachers, and Students in a single, high-performance ecosystem."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4 justify-center items-center">
                        <A
                            href=move || primary_cta().0.to_string()
                            attr:class="w-full sm:w-auto px-8 py-3.5 bg-blue-600 hover:bg-blue-700 text-white font-semibold rounded-xl shadow-lg shadow-blue-500/30 flex items-center justify-center gap-2"
                        >
                            {move || primary_cta().1}
                            <Icon name=icons::ARROW_FORWARD class="text-lg" />
                        </A>
                        <A
                            href=route::COLLEGES
                            attr:class="w-full sm:w-auto px-8 py-3.5 bg-white dark:bg-slate-800 border border-slate-200 dark:border-slate-700 text-slate-700 dark:text-slate-200 font-semibold rounded-xl flex items-center justify-center gap-2"
                        >
                            "Explore Colleges"
                            <Icon name=icons::SEARCH class="text-lg" />
                        </A>
                    </div>
                </div>
            </section>

            // Stats
            <section class="py-8 px-4 border-t border-slate-100 dark:border-slate-800">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4 max-w-4xl mx-auto">
                    <StatTile value=Signal::derive(move || stats.with(CollegeStats::colleges_label)) label="Top Colleges" />
                    <StatTile value=Signal::derive(move || stats.with(CollegeStats::students_label)) label="Active Students" />
                    <StatTile value=Signal::derive(move || stats.with(CollegeStats::placement_label)) label="Placement Rate" />
                    <StatTile value=Signal::derive(move || stats.with(CollegeStats::support_label)) label="AI Support" />
                </div>
            </section>

            // Roles
            <section class="py-16 px-4">
                <div class="max-w-6xl mx-auto">
                    <h2 class="text-3xl font-bold text-center text-slate-900 dark:text-white mb-10">
                        "Designed for Every Role"
                    </h2>
                    <div class="grid md:grid-cols-3 gap-6">
                        <RoleCard
                            icon=icons::SHIELD
                            title="Admin Console"
                            description="Manage the college registry, onboard institutions from their websites and keep an eye on new accounts."
                        />
                        <RoleCard
                            icon=icons::SCHOOL
                            title="Teacher Workspace"
                            description="Create courses, upload study material and start live classes for enrolled students."
                        />
                        <RoleCard
                            icon=icons::BOOK
                            title="Student Hub"
                            description="Track course progress, shortlist colleges and join live sessions from one dashboard."
                        />
                    </div>
                </div>
            </section>

            // About
            <section id="about" class="py-16 px-4 bg-white dark:bg-slate-900 border-y border-slate-100 dark:border-slate-800">
                <div class="max-w-5xl mx-auto grid md:grid-cols-2 gap-10 items-center">
                    <div>
                        <h2 class="text-3xl font-bold text-slate-900 dark:text-white mb-4">{format!("About {}", BRAND_NAME)}</h2>
                        <p class="text-slate-600 dark:text-slate-300 leading-relaxed">
                            {BRAND_TAGLINE}
                            ". We connect aspiring students with the right campus and give educators the tools to teach beyond the classroom."
                        </p>
                    </div>
                    <div class="grid grid-cols-2 gap-4">
                        <div class="p-5 rounded-2xl bg-slate-50 dark:bg-slate-800 text-center">
                            <Icon name=icons::SHIELD class="text-3xl text-emerald-600" />
                            <p class="mt-2 font-bold">"UGC Approved"</p>
                        </div>
                        <div class="p-5 rounded-2xl bg-slate-50 dark:bg-slate-800 text-center">
                            <Icon name=icons::LANGUAGE class="text-3xl text-blue-600" />
                            <p class="mt-2 font-bold">"Global Network"</p>
                        </div>
                    </div>
                </div>
            </section>

            // Call to action
            <section class="py-16 px-4">
                <div class="max-w-4xl mx-auto rounded-3xl bg-gradient-to-r from-blue-600 to-indigo-600 p-10 text-center text-white">
                    <h2 class="text-3xl font-bold mb-3">"Ready to begin your journey?"</h2>
                    <p class="text-blue-100 mb-6">"Create a free account and explore institutions across India."</p>
                    <div class="flex flex-col sm:flex-row gap-3 justify-center">
                        <A href=route::REGISTER attr:class="px-6 py-3 bg-white text-blue-600 rounded-full font-bold">
                            "Get Started"
                        </A>
                        <A href=route::ADMISSIONS attr:class="px-6 py-3 border border-white/40 rounded-full font-bold">
                            "Admissions Guide"
                        </A>
                    </div>
                </div>
            </section>
        </PublicLayout>
    }
}

#[component]
fn StatTile(value: Signal<String>, label: &'static str) -> impl IntoView {
    view! {
        <div class="p-4 rounded-2xl bg-white dark:bg-slate-800/50 border border-slate-100 dark:border-slate-800 text-center">
            <div class="text-3xl font-bold text-blue-600 mb-1">{move || value.get()}</div>
            <div class="text-xs font-semibold uppercase tracking-wider text-slate-500 dark:text-slate-400">{label}</div>
        </div>
    }
}

#[component]
fn RoleCard(icon: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="p-6 rounded-3xl bg-white dark:bg-slate-900 border border-slate-100 dark:border-slate-800 shadow-sm hover:shadow-lg transition-shadow">
            <div class="w-12 h-12 rounded-2xl bg-blue-50 dark:bg-blue-900/30 text-blue-600 flex items-center justify-center mb-4">
                <Icon name=icon class="text-[28px]" />
            </div>
            <h3 class="text-lg font-bold text-slate-900 dark:text-white mb-2">{title}</h3>
            <p class="text-sm text-slate-600 dark:text-slate-400">{description}</p>
        </div>
    }
}

/// SEO meta tags for the landing page
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Zpluse University | The Next-Gen Education Ecosystem" />
        <Meta name="description" content="Discover top colleges, compare institutions side by side and learn with live classes on the Zpluse University platform." />
        <Meta name="keywords" content="colleges in India, college directory, compare colleges, admissions, online learning, live classes" />
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://www.zpluseuniversity.com/" />
        <Meta property="og:title" content="Zpluse University" />
        <Meta property="og:description" content="The Next-Gen Education Ecosystem" />
        <Link rel="canonical" href="https://www.zpluseuniversity.com/" />
    }
}
