use leptos::prelude::*;

const INPUT_CLASS: &str = "w-full px-4 py-2.5 rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-900 text-slate-900 dark:text-white placeholder:text-slate-400 focus:outline-none focus:ring-2 focus:ring-blue-500/40 focus:border-blue-500";
const LABEL_CLASS: &str = "block text-sm font-semibold text-slate-700 dark:text-slate-300";

/// Generic form field component with label and input
#[component]
pub fn FormField(
    /// Field label text
    label: &'static str,
    /// Whether field is required (shows red asterisk)
    #[prop(default = false)]
    required: bool,
    /// Input type (text, password, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Value bound to the input
    value: RwSignal<String>,
    /// Browser autocomplete hint
    #[prop(default = "off")]
    autocomplete: &'static str,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class=LABEL_CLASS>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <input
                type=input_type
                class=INPUT_CLASS
                placeholder=placeholder
                autocomplete=autocomplete
                required=required
                bind:value=value
            />
        </div>
    }
}

/// Text area form field component
#[component]
pub fn TextAreaField(
    label: &'static str,
    #[prop(default = false)]
    required: bool,
    #[prop(default = "")]
    placeholder: &'static str,
    value: RwSignal<String>,
    /// Number of rows
    #[prop(default = 3)]
    rows: u32,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class=LABEL_CLASS>
                {label}
                {required.then(|| view! { <span class="text-red-500 ml-0.5">"*"</span> })}
            </label>
            <textarea
                class=format!("{} resize-none", INPUT_CLASS)
                placeholder=placeholder
                rows=rows
                required=required
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </div>
    }
}

/// Select/dropdown form field component
#[component]
pub fn SelectField(
    label: &'static str,
    /// Selected option value
    value: RwSignal<String>,
    /// Options as (value, display_text) pairs
    options: Vec<(String, String)>,
) -> impl IntoView {
    view! {
        <div class="space-y-1.5">
            <label class=LABEL_CLASS>{label}</label>
            <select
                class=INPUT_CLASS
                prop:value=move || value.get()
                on:change=move |ev| value.set(event_target_value(&ev))
            >
                {options.into_iter().map(|(val, text)| {
                    view! { <option value=val>{text}</option> }
                }).collect_view()}
            </select>
        </div>
    }
}
