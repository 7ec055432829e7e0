use leptos::prelude::*;
use leptos_meta::{Link, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::config::ClientConfig;
use crate::core::role::Role;
use crate::ui::ToastContainer;
use crate::ui::api::provide_services;
use crate::ui::auth::{RoleGuard, provide_auth_context};
use crate::ui::colleges::{provide_compare_context, provide_shortlist_context};
use crate::ui::pages::{
    AdminDashboardPage, AdmissionsPage, CollegeDetailPage, CollegesPage, ComparePage,
    EducatorDocsPage, ForgotPasswordPage, HelpPage, LandingPage, LiveClassPage, LoginPage,
    NotFoundPage, PrivacyPage, RegisterPage, ResetPasswordPage, StudentDashboardPage,
    StudyHubLiveClassesPage, StudyHubPage, StudyHubPerformancePage, StudyHubProfilePage,
    TeacherDashboardPage, TermsPage,
};
use crate::ui::theme::provide_theme_context;
use crate::ui::toast::provide_toast_context;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let services = provide_services(ClientConfig::from_build_env());
    provide_theme_context();
    provide_toast_context();
    provide_auth_context(services);
    provide_shortlist_context();
    // Reports a full tray through the toast context
    provide_compare_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/zpluse.css"/>
        <Link
            rel="stylesheet"
            href="https://fonts.googleapis.com/css2?family=Material+Symbols+Outlined:opsz,wght,FILL,GRAD@20..48,100..700,0..1,-50..200"
        />

        // sets the document title
        <Title text="Zpluse University"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/colleges") view=CollegesPage/>
                <Route path=path!("/colleges/compare") view=ComparePage/>
                <Route path=path!("/college/:id") view=CollegeDetailPage/>
                <Route path=path!("/admissions") view=AdmissionsPage/>
                <Route path=path!("/help") view=HelpPage/>
                <Route path=path!("/terms") view=TermsPage/>
                <Route path=path!("/privacy") view=PrivacyPage/>
                <Route path=path!("/docs/educators") view=EducatorDocsPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/register") view=RegisterPage/>
                <Route path=path!("/forgot-password") view=ForgotPasswordPage/>
                <Route path=path!("/reset-password") view=ResetPasswordPage/>

                <Route
                    path=path!("/dashboard")
                    view=|| view! {
                        <RoleGuard allowed=&[Role::Student]>
                            <StudentDashboardPage/>
                        </RoleGuard>
                    }
                />
                <Route
                    path=path!("/study-hub")
                    view=|| view! {
                        <RoleGuard allowed=&[Role::Student]>
                            <StudyHubPage/>
                        </RoleGuard>
                    }
                />
                <Route
                    path=path!("/study-hub/live-classes")
                    view=|| view! {
                        <RoleGuard allowed=&[Role::Student]>
                            <StudyHubLiveClassesPage/>
                        </RoleGuard>
                    }
                />
                <Route
                    path=path!("/study-hub/performance")
                    view=|| view! {
                        <RoleGuard allowed=&[Role::Student]>
                            <StudyHubPerformancePage/>
                        </RoleGuard>
                    }
                />
                <Route
                    path=path!("/study-hub/profile")
                    view=|| view! {
                        <RoleGuard allowed=&[Role::Student]>
                            <StudyHubProfilePage/>
                        </RoleGuard>
                    }
                />
                <Route
                    path=path!("/teacher")
                    view=|| view! {
                        <RoleGuard allowed=&[Role::Teacher]>
                            <TeacherDashboardPage/>
                        </RoleGuard>
                    }
                />
                <Route
                    path=path!("/admin")
                    view=|| view! {
                        <RoleGuard allowed=&[Role::Admin]>
                            <AdminDashboardPage/>
                        </RoleGuard>
                    }
                />
                <Route
                    path=path!("/live/:class_id")
                    view=|| view! {
                        <RoleGuard allowed=&Role::ALL>
                            <LiveClassPage/>
                        </RoleGuard>
                    }
                />
            </Routes>
        </Router>

        <ToastContainer/>
    }
}
