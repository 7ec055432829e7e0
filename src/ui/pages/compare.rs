//! Side-by-side comparison of up to three colleges

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::core::directory::{College, MAX_COMPARE};
use crate::core::route;
use crate::ui::colleges::{use_college_feed, use_compare};
use crate::ui::common::BackendUnavailable;
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::PublicLayout;

/// One row of the comparison table
struct Metric {
    label: &'static str,
    value: fn(&College) -> String,
}

static METRICS: [Metric; 5] = [
    Metric {
        label: "Location",
        value: |c| or_na(c.location()),
    },
    Metric {
        label: "Type",
        value: |c| or_na(c.kind.clone().unwrap_or_default()),
    },
    Metric {
        label: "Established",
        value: |c| c.established().map(|y| y.to_string()).unwrap_or_else(|| "N/A".to_string()),
    },
    Metric {
        label: "NAAC Rating",
        value: College::rating_label,
    },
    Metric {
        label: "Fees",
        value: |c| or_na(c.fee_structure.clone().unwrap_or_default()),
    },
];

fn or_na(value: String) -> String {
    if value.trim().is_empty() { "N/A".to_string() } else { value }
}

#[component]
pub fn ComparePage() -> impl IntoView {
    let feed = use_college_feed(None, "Error loading data");
    let compare = use_compare();

    let selected = Memo::new(move |_| {
        let pool = feed.colleges.get();
        compare.selection.with(|selection| selection.resolve(&pool))
    });

    view! {
        <Title text="Compare Colleges | Zpluse University" />
        <PublicLayout>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
                <div class="mb-10">
                    <A href=route::COLLEGES attr:class="text-blue-600 font-bold flex items-center gap-1 mb-4 hover:underline">
                        <Icon name=icons::ARROW_BACK class="text-[18px]" />
                        "Back to Directory"
                    </A>
                    <h1 class="text-3xl font-extrabold text-slate-900 dark:text-white flex items-center gap-3">
                        <Icon name=icons::COMPARE class="text-blue-600 text-4xl" />
                        "Compare Institutes"
                    </h1>
                    <p class="text-slate-500 mt-2">
                        "Select up to 3 colleges to evaluate their metrics side-by-side."
                    </p>
                </div>

                // Selection pool
                <div class="bg-white dark:bg-slate-900 p-6 rounded-2xl border border-slate-200 dark:border-slate-800 shadow-sm mb-12">
                    <h2 class="font-bold text-slate-900 dark:text-white mb-4">
                        {move || format!(
                            "Select Colleges to Compare ({}/{})",
                            compare.selection.with(|s| s.len()),
                            MAX_COMPARE,
                        )}
                    </h2>
                    {move || {
                        if feed.loading.get() {
                            view! {
                                <div class="animate-pulse flex gap-4">
                                    <div class="h-12 w-48 bg-slate-200 dark:bg-slate-800 rounded-lg"></div>
                                    <div class="h-12 w-48 bg-slate-200 dark:bg-slate-800 rounded-lg"></div>
                                </div>
                            }
                                .into_any()
                        } else if let Some(message) = feed.error.get() {
                            view! { <BackendUnavailable message=message on_retry=Callback::new(move |_| feed.retry()) /> }
                                .into_any()
                        } else {
                            view! {
                                <div class="flex flex-wrap gap-3">
                                    <For
                                        each=move || feed.colleges.get()
                                        key=|college| college.id.clone()
                                        children=move |college| {
                                            let id = StoredValue::new(college.id.clone());
                                            let is_selected = move || id.with_value(|id| compare.contains(id));
                                            view! {
                                                <button
                                                    class=move || {
                                                        if is_selected() {
                                                            "px-4 py-2 rounded-xl text-sm font-semibold border flex items-center gap-2 bg-blue-600 border-blue-600 text-white shadow-md"
                                                        } else {
                                                            "px-4 py-2 rounded-xl text-sm font-semibold border flex items-center gap-2 bg-slate-50 dark:bg-slate-950 border-slate-200 dark:border-slate-800 text-slate-700 dark:text-slate-300 hover:border-blue-500"
                                                        }
                                                    }
                                                    on:click=move |_| {
                                                        id.with_value(|id| compare.toggle(id));
                                                    }
                                                >
                                                    <Show when=is_selected>
                                                        <Icon name=icons::CHECK class="text-[16px]" />
                                                    </Show>
                                                    {college.name.clone()}
                                                </button>
                                            }
                                        }
                                    />
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </div>

                // Comparison table
                <Show
                    when=move || !selected.with(Vec::is_empty)
                    fallback=|| {
                        view! {
                            <div class="text-center py-24 bg-white dark:bg-slate-900 rounded-3xl border border-dashed border-slate-300 dark:border-slate-800 text-slate-500">
                                <Icon name=icons::COMPARE class="text-6xl mb-4" />
                                <p>"Select colleges from the pool above to start your comparison."</p>
                            </div>
                        }
                    }
                >
                    <ComparisonTable colleges=selected />
                </Show>
            </div>
        </PublicLayout>
    }
}

#[component]
fn ComparisonTable(colleges: Memo<Vec<College>>) -> impl IntoView {
    let empty_columns = move || MAX_COMPARE.saturating_sub(colleges.with(Vec::len));

    view! {
        <div class="bg-white dark:bg-slate-900 rounded-3xl border border-slate-200 dark:border-slate-800 shadow-xl overflow-x-auto">
            <table class="w-full text-left border-collapse min-w-[800px]">
                <thead>
                    <tr class="bg-slate-50 dark:bg-slate-800/50">
                        <th class="p-6 border-b border-r dark:border-slate-800 w-1/4">
                            <span class="text-slate-500 uppercase font-bold text-xs tracking-wider">"Metrics"</span>
                        </th>
                        {move || {
                            colleges
                                .get()
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <th class="p-6 border-b border-r dark:border-slate-800 w-1/4 text-center">
                                            <div class="w-16 h-16 mx-auto bg-slate-100 dark:bg-slate-800 rounded-xl mb-3 flex items-center justify-center overflow-hidden">
                                                {match c.logo_url.clone() {
                                                    Some(src) => view! { <img src=src alt="logo" class="w-full h-full object-cover" /> }.into_any(),
                                                    None => view! { <Icon name=icons::SCHOOL class="text-slate-400" /> }.into_any(),
                                                }}
                                            </div>
                                            <h3 class="font-bold text-lg text-slate-900 dark:text-white line-clamp-2">{c.name}</h3>
                                        </th>
                                    }
                                })
                                .collect_view()
                        }}
                        {move || {
                            (0..empty_columns())
                                .map(|_| {
                                    view! {
                                        <th class="p-6 border-b border-slate-200 dark:border-slate-800 w-1/4">
                                            <A
                                                href=route::COLLEGES
                                                attr:class="w-full border-2 border-dashed border-slate-200 dark:border-slate-700 rounded-xl flex items-center justify-center text-slate-400 p-8"
                                            >
                                                "Add College"
                                            </A>
                                        </th>
                                    }
                                })
                                .collect_view()
                        }}
                    </tr>
                </thead>
                <tbody class="text-slate-600 dark:text-slate-300">
                    {METRICS
                        .iter()
                        .map(|metric| {
                            let value = metric.value;
                            view! {
                                <tr class="hover:bg-slate-50 dark:hover:bg-slate-800/30">
                                    <td class="p-4 border-b border-r dark:border-slate-800 font-semibold bg-slate-50 dark:bg-slate-800/20">
                                        {metric.label}
                                    </td>
                                    {move || {
                                        colleges
                                            .with(|list| list.iter().map(value).collect::<Vec<_>>())
                                            .into_iter()
                                            .map(|text| {
                                                view! { <td class="p-4 border-b border-r dark:border-slate-800 text-center">{text}</td> }
                                            })
                                            .collect_view()
                                    }}
                                    {move || {
                                        (0..empty_columns())
                                            .map(|_| view! { <td class="p-4 border-b dark:border-slate-800"></td> })
                                            .collect_view()
                                    }}
                                </tr>
                            }
                        })
                        .collect_view()}
                    <tr>
                        <td class="p-4 border-r dark:border-slate-800 font-semibold bg-slate-50 dark:bg-slate-800/20">"Action"</td>
                        {move || {
                            colleges
                                .get()
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <td class="p-4 border-r dark:border-slate-800 text-center">
                                            <A href=route::college_path(&c.id) attr:class="text-blue-600 font-bold hover:underline">
                                                "View Full Profile"
                                            </A>
                                        </td>
                                    }
                                })
                                .collect_view()
                        }}
                        {move || (0..empty_columns()).map(|_| view! { <td></td> }).collect_view()}
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn college(json: serde_json::Value) -> College {
        serde_json::from_value(json).unwrap()
    }

    fn metric(label: &str) -> &'static Metric {
        METRICS.iter().find(|m| m.label == label).unwrap()
    }

    #[test]
    fn test_metrics_fall_back_to_na() {
        let bare = college(serde_json::json!({ "id": "c1", "name": "Bare College" }));
        for m in &METRICS {
            assert_eq!((m.value)(&bare), "N/A", "{}", m.label);
        }
    }

    #[test]
    fn test_metrics_format_known_values() {
        let iitb = college(serde_json::json!({
            "id": "c1",
            "name": "IIT Bombay",
            "city": "Mumbai",
            "state": "Maharashtra",
            "type": "Public",
            "rating": 4.8,
            "established_year": 1958
        }));
        assert_eq!((metric("Location").value)(&iitb), "Mumbai, Maharashtra");
        assert_eq!((metric("Established").value)(&iitb), "1958");
        assert_eq!((metric("NAAC Rating").value)(&iitb), "4.8/5.0");
        assert_eq!((metric("Type").value)(&iitb), "Public");
    }
}
