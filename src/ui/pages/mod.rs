//! Application pages module
//!
//! Public pages:
//! - Landing, college directory, compare, college profile
//! - Sign in, registration, password recovery
//! - Static documents (admissions, help, terms, privacy, educator docs)
//!
//! Guarded workspaces:
//! - Student dashboard, teacher workspace, admin panel, live class room
//! - Study Hub (student only): home, live classes, performance, profile

mod admin;
mod college_detail;
mod colleges;
mod compare;
mod docs;
mod forgot_password;
mod landing;
mod live_class;
mod login;
mod not_found;
mod register;
mod reset_password;
mod student_dashboard;
mod study_hub;
mod teacher;

pub use admin::AdminDashboardPage;
pub use college_detail::CollegeDetailPage;
pub use colleges::CollegesPage;
pub use compare::ComparePage;
pub use docs::{AdmissionsPage, EducatorDocsPage, HelpPage, PrivacyPage, TermsPage};
pub use forgot_password::ForgotPasswordPage;
pub use landing::LandingPage;
pub use live_class::LiveClassPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use reset_password::ResetPasswordPage;
pub use student_dashboard::StudentDashboardPage;
pub use study_hub::{
    StudyHubLiveClassesPage, StudyHubPage, StudyHubPerformancePage, StudyHubProfilePage,
};
pub use teacher::TeacherDashboardPage;
