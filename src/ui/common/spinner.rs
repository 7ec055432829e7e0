use leptos::prelude::*;

/// Spinner size options
#[derive(Clone, Copy, PartialEq)]
pub enum SpinnerSize {
    Small,
    Medium,
    Large,
}

impl SpinnerSize {
    fn class(&self) -> &'static str {
        match self {
            SpinnerSize::Small => "w-4 h-4 border-2",
            SpinnerSize::Medium => "w-8 h-8 border-[3px]",
            SpinnerSize::Large => "w-12 h-12 border-4",
        }
    }
}

/// Loading spinner component
#[component]
pub fn Spinner(
    /// Spinner size
    #[prop(default = SpinnerSize::Medium)]
    size: SpinnerSize,
    /// Additional CSS classes
    #[prop(default = String::new())]
    class: String,
    /// Optional label text
    #[prop(default = String::new())]
    label: String,
) -> impl IntoView {
    let ring = format!(
        "{} rounded-full border-blue-600 border-t-transparent animate-spin {}",
        size.class(),
        class
    );

    view! {
        <div class="flex flex-col items-center gap-3">
            <div class=ring role="status" aria-live="polite">
                <span class="sr-only">"Loading..."</span>
            </div>
            {(!label.is_empty()).then(|| view! {
                <p class="text-sm font-medium text-slate-500 dark:text-slate-400">{label.clone()}</p>
            })}
        </div>
    }
}

/// Inline spinner for buttons or text
#[component]
pub fn InlineSpinner() -> impl IntoView {
    view! { <Spinner size=SpinnerSize::Small class="border-white border-t-transparent".to_string() /> }
}

/// Centered spinner filling the viewport
#[component]
pub fn FullPageSpinner(
    /// Loading message
    #[prop(default = "Loading...".to_string())]
    message: String,
) -> impl IntoView {
    view! {
        <div class="min-h-[60vh] w-full flex items-center justify-center">
            <Spinner size=SpinnerSize::Large label=message />
        </div>
    }
}

/// Placeholder cards while a grid loads
#[component]
pub fn SkeletonGrid(
    /// Number of placeholder cards
    #[prop(default = 6)]
    count: usize,
) -> impl IntoView {
    view! {
        <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3" aria-busy="true">
            {(0..count).map(|_| view! {
                <div class="rounded-2xl border border-slate-100 dark:border-slate-800 p-5 animate-pulse">
                    <div class="h-32 rounded-xl bg-slate-200 dark:bg-slate-800 mb-4"></div>
                    <div class="h-4 w-3/4 rounded bg-slate-200 dark:bg-slate-800 mb-2"></div>
                    <div class="h-3 w-1/2 rounded bg-slate-200 dark:bg-slate-800"></div>
                </div>
            }).collect_view()}
        </div>
    }
}
