//! Static documents: admissions guide, help center, policies, educator docs
//!
//! The text lives in `docs/*.md` and is compiled into the binary.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::route;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PublicLayout;
use crate::ui::markdown::{Markdown, outline};

/// A bundled document and the chrome around it
struct Document {
    title: &'static str,
    badge: &'static str,
    icon: &'static str,
    content: &'static str,
    /// Closing call to action: label and target
    action: Option<(&'static str, &'static str)>,
}

static ADMISSIONS: Document = Document {
    title: "Admissions Guide",
    badge: "Admissions 2026",
    icon: icons::SCHOOL,
    content: include_str!("../../../docs/admissions.md"),
    action: Some(("Create Account", route::REGISTER)),
};

static HELP: Document = Document {
    title: "Help Center",
    badge: "Support",
    icon: icons::HELP,
    content: include_str!("../../../docs/help.md"),
    action: None,
};

static TERMS: Document = Document {
    title: "Terms of Service",
    badge: "Legal",
    icon: icons::GAVEL,
    content: include_str!("../../../docs/terms.md"),
    action: None,
};

static PRIVACY: Document = Document {
    title: "Privacy Policy",
    badge: "Legal",
    icon: icons::SHIELD,
    content: include_str!("../../../docs/privacy.md"),
    action: None,
};

static EDUCATORS: Document = Document {
    title: "Educator Documentation",
    badge: "For Teachers",
    icon: icons::BOOK,
    content: include_str!("../../../docs/educators.md"),
    action: Some(("Start Teaching", route::REGISTER)),
};

#[component]
fn DocumentPage(doc: &'static Document) -> impl IntoView {
    let sections = outline(doc.content);

    view! {
        <Title text=format!("{} | Zpluse University", doc.title) />
        <PublicLayout>
            <div class="max-w-6xl mx-auto px-4 sm:px-6 lg:px-8 pt-12 pb-24">
                <nav class="mb-8 text-sm">
                    <A href=route::HOME attr:class="text-blue-600 hover:underline">"Home"</A>
                    <span class="mx-2 text-slate-400">"/"</span>
                    <span class="text-slate-500">{doc.title}</span>
                </nav>

                <div class="inline-flex items-center gap-2 px-3 py-1 rounded-full bg-blue-50 dark:bg-blue-900/30 text-blue-600 dark:text-blue-300 text-xs font-semibold mb-4 border border-blue-100 dark:border-blue-800">
                    <Icon name=doc.icon class="text-[16px]" />
                    {doc.badge}
                </div>
                <h1 class="text-4xl font-extrabold text-slate-900 dark:text-white mb-10">{doc.title}</h1>

                <div class="grid lg:grid-cols-4 gap-10">
                    <aside class="hidden lg:block">
                        <div class="sticky top-24 space-y-1">
                            <p class="text-xs font-bold uppercase tracking-wider text-slate-400 mb-3">"On this page"</p>
                            {sections
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <a
                                            href=format!("#{}", section.id)
                                            class="block text-sm text-slate-600 dark:text-slate-400 hover:text-blue-600 py-1"
                                        >
                                            {section.title}
                                        </a>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </aside>
                    <article class="lg:col-span-3 bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800 p-6 sm:p-10">
                        <Markdown content=doc.content />
                    </article>
                </div>

                {doc
                    .action
                    .map(|(label, href)| {
                        view! {
                            <div class="mt-16 rounded-3xl bg-gradient-to-r from-blue-600 to-indigo-600 p-10 text-center text-white">
                                <h2 class="text-2xl font-bold mb-4">"Ready to get started?"</h2>
                                <A href=href attr:class="inline-flex items-center gap-2 px-6 py-3 bg-white text-blue-600 rounded-full font-bold">
                                    {label}
                                    <Icon name=icons::ARROW_FORWARD class="text-[18px]" />
                                </A>
                            </div>
                        }
                    })}
            </div>
        </PublicLayout>
    }
}

#[component]
pub fn AdmissionsPage() -> impl IntoView {
    view! { <DocumentPage doc=&ADMISSIONS /> }
}

#[component]
pub fn HelpPage() -> impl IntoView {
    view! { <DocumentPage doc=&HELP /> }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    view! { <DocumentPage doc=&TERMS /> }
}

#[component]
pub fn PrivacyPage() -> impl IntoView {
    view! { <DocumentPage doc=&PRIVACY /> }
}

#[component]
pub fn EducatorDocsPage() -> impl IntoView {
    view! { <DocumentPage doc=&EDUCATORS /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_document_has_sections() {
        for doc in [&ADMISSIONS, &HELP, &TERMS, &PRIVACY, &EDUCATORS] {
            assert!(outline(doc.content).len() >= 3, "{}", doc.title);
        }
    }

    #[test]
    fn test_help_outline_slugs() {
        let sections = outline(HELP.content);
        assert_eq!(sections[0].id, "how-do-i-reset-my-password");
        assert_eq!(sections.last().map(|s| s.title.as_str()), Some("Still need help?"));
    }
}
