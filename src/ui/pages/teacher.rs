//! Teacher workspace
//!
//! Lists the teacher's courses and the roster of the first one, and hosts
//! the create-course and upload-material dialogs. Any course can be opened
//! as a live class.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;
use leptos_router::hooks::use_navigate;

use crate::core::error::ApiError;
use crate::core::forms::validate_required;
use crate::core::lms::{Course, Enrollment, Material, MaterialKind, NewCourse, UploadFile};
use crate::core::role::Role;
use crate::core::route;
use crate::ui::api::use_api;
use crate::ui::auth::use_auth_context;
use crate::ui::common::{
    BackendUnavailable, EmptyState, FormField, InlineSpinner, Modal, SelectField, Spinner,
    TextAreaField,
};
use crate::ui::icon::{Icon, icons};
use crate::ui::layout::DashboardLayout;
use crate::ui::toast::use_toast;

const COURSE_CATEGORIES: [&str; 5] = ["Technology", "Business", "Science", "Arts", "Other"];

#[component]
pub fn TeacherDashboardPage() -> impl IntoView {
    let api = use_api();
    let auth = use_auth_context();
    let toasts = use_toast();
    let navigate = use_navigate();

    let courses = RwSignal::new(Vec::<Course>::new());
    let roster = RwSignal::new(Vec::<Enrollment>::new());
    let uploads = RwSignal::new(Vec::<Material>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0u32);

    let create_open = RwSignal::new(false);
    let upload_open = RwSignal::new(false);

    let teacher_id = Memo::new(move |_| auth.user().map(|user| user.id));

    Effect::new(move |_| {
        reload.track();
        let Some(teacher_id) = teacher_id.get() else {
            return;
        };
        let api = api.clone();
        loading.set(true);
        error.set(None);

        spawn_local(async move {
            match api.teacher_courses(&teacher_id).await {
                Ok(list) => {
                    let first = list.first().map(|course| course.id.clone());
                    courses.try_set(list);
                    if let Some(course_id) = first {
                        match api.course_enrollments(&course_id).await {
                            Ok(rows) => {
                                roster.try_set(rows);
                            }
                            Err(e) => {
                                toasts.push_error("Error loading students", &e);
                            }
                        }
                    }
                }
                Err(e) => {
                    error.try_set(Some(e.to_string()));
                    toasts.push_error("Error loading courses", &e);
                }
            }
            loading.try_set(false);
        });
    });

    let start_live = Callback::new(move |course_id: String| {
        toasts.info("Starting Live Class", "Connecting to your secure classroom...");
        navigate(&route::live_class_path(&course_id), Default::default());
    });

    let on_created = Callback::new(move |course: Option<Course>| match course {
        Some(course) => courses.update(|list| list.insert(0, course)),
        None => reload.update(|n| *n = n.wrapping_add(1)),
    });

    let on_uploaded = Callback::new(move |material: Option<Material>| {
        if let Some(material) = material {
            uploads.update(|list| list.insert(0, material));
        }
    });

    view! {
        <Title text="Teacher Workspace | Zpluse University" />
        <DashboardLayout title="Teacher Workspace" role=Role::Teacher>
            <div class="flex flex-wrap gap-3 mb-8">
                <button
                    class="flex items-center gap-2 px-4 py-2.5 rounded-xl bg-blue-600 hover:bg-blue-700 text-white text-sm font-bold"
                    on:click=move |_| create_open.set(true)
                >
                    <Icon name=icons::ADD class="text-[18px]" />
                    "New Course"
                </button>
                <button
                    class="flex items-center gap-2 px-4 py-2.5 rounded-xl border border-slate-200 dark:border-slate-700 text-sm font-bold hover:border-blue-500"
                    on:click=move |_| upload_open.set(true)
                >
                    <Icon name=icons::UPLOAD class="text-[18px]" />
                    "Upload Material"
                </button>
            </div>

            <div class="grid lg:grid-cols-3 gap-8">
                <section class="lg:col-span-2 bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800 p-6">
                    <h2 class="text-lg font-bold mb-4">"My Courses"</h2>
                    {move || {
                        if loading.get() {
                            view! { <div class="py-12 flex justify-center"><Spinner /></div> }.into_any()
                        } else if let Some(message) = error.get() {
                            view! {
                                <BackendUnavailable
                                    message=message
                                    on_retry=Callback::new(move |_| reload.update(|n| *n = n.wrapping_add(1)))
                                />
                            }
                                .into_any()
                        } else if courses.with(Vec::is_empty) {
                            view! {
                                <EmptyState
                                    icon=icons::BOOK
                                    title="No courses yet"
                                    hint="Create your first course to start teaching."
                                />
                            }
                                .into_any()
                        } else {
                            view! {
                                <div class="grid sm:grid-cols-2 gap-4">
                                    <For
                                        each=move || courses.get()
                                        key=|course| course.id.clone()
                                        children=move |course| view! { <CourseCard course=course on_start_live=start_live /> }
                                    />
                                </div>
                            }
                                .into_any()
                        }
                    }}
                </section>

                <div class="space-y-8">
                    <section class="bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800 p-6">
                        <h2 class="text-lg font-bold mb-1">"Students"</h2>
                        <p class="text-xs text-slate-500 mb-4">
                            {move || {
                                courses
                                    .with(|list| list.first().map(|c| c.title.clone()))
                                    .map(|title| format!("Enrolled in {}", title))
                                    .unwrap_or_else(|| "Enrollments appear once you publish a course.".to_string())
                            }}
                        </p>
                        <Show
                            when=move || !roster.with(Vec::is_empty)
                            fallback=|| view! { <EmptyState icon=icons::GROUP title="No students enrolled" /> }
                        >
                            <ul class="divide-y divide-slate-100 dark:divide-slate-800">
                                {move || {
                                    roster
                                        .get()
                                        .into_iter()
                                        .map(|row| view! { <RosterRow enrollment=row /> })
                                        .collect_view()
                                }}
                            </ul>
                        </Show>
                    </section>

                    <Show when=move || !uploads.with(Vec::is_empty)>
                        <section class="bg-white dark:bg-slate-900 rounded-2xl border border-slate-100 dark:border-slate-800 p-6">
                            <h2 class="text-lg font-bold mb-4">"Recent Uploads"</h2>
                            <ul class="space-y-2 text-sm">
                                {move || {
                                    uploads
                                        .get()
                                        .into_iter()
                                        .map(|material| {
                                            let icon = match material.kind.unwrap_or_default() {
                                                MaterialKind::Pdf => icons::PDF,
                                                MaterialKind::Video => icons::VIDEO,
                                                MaterialKind::Link => icons::LINK,
                                            };
                                            view! {
                                                <li class="flex items-center gap-2">
                                                    <Icon name=icon class="text-[18px] text-blue-600" />
                                                    <span class="truncate">{material.title}</span>
                                                </li>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </ul>
                        </section>
                    </Show>
                </div>
            </div>

            <Modal title="Create Course" is_open=create_open>
                <CreateCourseForm is_open=create_open on_created=on_created />
            </Modal>
            <Modal title="Upload Material" is_open=upload_open>
                <UploadMaterialForm is_open=upload_open courses=courses on_uploaded=on_uploaded />
            </Modal>
        </DashboardLayout>
    }
}

#[component]
fn CourseCard(course: Course, on_start_live: Callback<String>) -> impl IntoView {
    let id = course.id.clone();
    let students = course.enrollment_count.unwrap_or(0);

    view! {
        <article class="p-5 rounded-xl border border-slate-100 dark:border-slate-800 flex flex-col gap-3">
            <div>
                <p class="text-xs font-semibold uppercase tracking-wide text-blue-600">
                    {course.category.unwrap_or_else(|| "General".to_string())}
                </p>
                <h3 class="font-bold text-slate-900 dark:text-white">{course.title}</h3>
                <p class="text-sm text-slate-500 line-clamp-2">{course.description.unwrap_or_default()}</p>
            </div>
            <div class="mt-auto flex items-center justify-between">
                <span class="flex items-center gap-1 text-xs text-slate-500">
                    <Icon name=icons::GROUP class="text-[16px]" />
                    {format!("{} students", students)}
                </span>
                <button
                    class="flex items-center gap-1 px-3 py-1.5 rounded-lg bg-emerald-600 hover:bg-emerald-700 text-white text-xs font-bold"
                    on:click=move |_| on_start_live.run(id.clone())
                >
                    <Icon name=icons::VIDEO class="text-[16px]" />
                    "Start Live Class"
                </button>
            </div>
        </article>
    }
}

#[component]
fn RosterRow(enrollment: Enrollment) -> impl IntoView {
    let progress = enrollment.progress();
    let name = enrollment
        .student_name
        .clone()
        .or_else(|| enrollment.student_id.clone())
        .unwrap_or_else(|| "Student".to_string());

    view! {
        <li class="py-3">
            <div class="flex justify-between text-sm mb-1">
                <span class="font-semibold truncate">{name}</span>
                <span class="text-slate-500">{format!("{:.0}%", progress)}</span>
            </div>
            <div class="h-1.5 rounded-full bg-slate-100 dark:bg-slate-800 overflow-hidden">
                <div class="h-full bg-blue-600 rounded-full" style=format!("width: {:.0}%", progress)></div>
            </div>
        </li>
    }
}

#[component]
fn CreateCourseForm(is_open: RwSignal<bool>, on_created: Callback<Option<Course>>) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toasts = use_toast();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(COURSE_CATEGORIES[0].to_string());
    let saving = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let title_val = title.get_untracked().trim().to_string();
        if let Err(e) = validate_required(&title_val, "Title required", "Please enter a course title.") {
            toasts.error(e.title, e.message);
            return;
        }

        saving.set(true);
        let course = NewCourse::new(
            title_val.clone(),
            description.get_untracked().trim(),
            category.get_untracked(),
        );
        let api = api.get_value();
        spawn_local(async move {
            match api.create_course(&course).await {
                Ok(created) => {
                    toasts.success("Course Created", format!("\"{}\" is ready for students.", title_val));
                    on_created.run(created);
                    title.try_set(String::new());
                    description.try_set(String::new());
                    is_open.try_set(false);
                }
                Err(e) => {
                    toasts.push_error("Creation Failed", &e);
                }
            }
            saving.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <FormField label="Course title" required=true placeholder="Intro to Data Structures" value=title />
            <TextAreaField label="Description" placeholder="What will students learn?" value=description />
            <SelectField
                label="Category"
                value=category
                options=COURSE_CATEGORIES.iter().map(|c| (c.to_string(), c.to_string())).collect()
            />
            <SubmitRow label="Create Course" busy=saving on_cancel=Callback::new(move |_| is_open.set(false)) />
        </form>
    }
}

/// File chosen in the upload form, read into memory
#[cfg(not(feature = "ssr"))]
async fn selected_file(input: NodeRef<leptos::html::Input>) -> Result<Option<UploadFile>, ApiError> {
    let Some(file) = input
        .get_untracked()
        .and_then(|el| el.files())
        .and_then(|files| files.get(0))
    else {
        return Ok(None);
    };
    crate::ui::transport::read_file(&file).await.map(Some)
}

#[cfg(feature = "ssr")]
async fn selected_file(_input: NodeRef<leptos::html::Input>) -> Result<Option<UploadFile>, ApiError> {
    Ok(None)
}

#[component]
fn UploadMaterialForm(
    is_open: RwSignal<bool>,
    courses: RwSignal<Vec<Course>>,
    on_uploaded: Callback<Option<Material>>,
) -> impl IntoView {
    let api = StoredValue::new(use_api());
    let toasts = use_toast();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let course_id = RwSignal::new(
        courses
            .with_untracked(|list| list.first().map(|c| c.id.clone()))
            .unwrap_or_default(),
    );
    let title = RwSignal::new(String::new());
    let kind = RwSignal::new(MaterialKind::default());
    let uploading = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if uploading.get_untracked() {
            return;
        }
        let course_val = course_id.get_untracked();
        let title_val = title.get_untracked().trim().to_string();
        let checked = validate_required(&course_val, "Course required", "Create a course before uploading material.")
            .and_then(|_| validate_required(&title_val, "Title required", "Please name the material."));
        if let Err(e) = checked {
            toasts.error(e.title, e.message);
            return;
        }

        uploading.set(true);
        let kind_val = kind.get_untracked();
        let api = api.get_value();
        spawn_local(async move {
            let result = match selected_file(file_input).await {
                Ok(Some(file)) => api.upload_material(&course_val, &title_val, kind_val, file).await.map(Some),
                Ok(None) => Ok(None),
                Err(e) => Err(e),
            };
            match result {
                Ok(Some(material)) => {
                    toasts.success("Material Uploaded", format!("{} was added to the course.", title_val));
                    on_uploaded.run(material);
                    title.try_set(String::new());
                    is_open.try_set(false);
                }
                Ok(None) => {
                    toasts.error("File required", "Please choose a file to upload.");
                }
                Err(e) => {
                    toasts.push_error("Upload Failed", &e);
                }
            }
            uploading.try_set(false);
        });
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <div class="space-y-1.5">
                <label class="block text-sm font-semibold text-slate-700 dark:text-slate-300">"Course"</label>
                <select
                    class="w-full px-4 py-2.5 rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-900"
                    prop:value=move || course_id.get()
                    on:change=move |ev| course_id.set(event_target_value(&ev))
                >
                    {move || {
                        courses
                            .get()
                            .into_iter()
                            .map(|course| view! { <option value=course.id>{course.title}</option> })
                            .collect_view()
                    }}
                </select>
            </div>
            <FormField label="Title" required=true placeholder="Week 1 slides" value=title />
            <div class="space-y-1.5">
                <label class="block text-sm font-semibold text-slate-700 dark:text-slate-300">"Type"</label>
                <select
                    class="w-full px-4 py-2.5 rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-900"
                    prop:value=move || kind.get().as_str()
                    on:change=move |ev| kind.set(MaterialKind::parse(&event_target_value(&ev)))
                >
                    {MaterialKind::ALL
                        .into_iter()
                        .map(|k| view! { <option value=k.as_str()>{k.as_str().to_uppercase()}</option> })
                        .collect_view()}
                </select>
            </div>
            <div class="space-y-1.5">
                <label class="block text-sm font-semibold text-slate-700 dark:text-slate-300">"File"</label>
                <input
                    type="file"
                    node_ref=file_input
                    class="block w-full text-sm text-slate-500 file:mr-4 file:py-2 file:px-4 file:rounded-lg file:border-0 file:bg-blue-50 file:text-blue-700 file:font-semibold"
                />
            </div>
            <SubmitRow label="Upload" busy=uploading on_cancel=Callback::new(move |_| is_open.set(false)) />
        </form>
    }
}

#[component]
fn SubmitRow(label: &'static str, busy: RwSignal<bool>, on_cancel: Callback<()>) -> impl IntoView {
    view! {
        <div class="flex justify-end gap-3 pt-2">
            <button
                type="button"
                class="px-4 py-2 rounded-xl text-sm font-semibold text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-800"
                on:click=move |_| on_cancel.run(())
            >
                "Cancel"
            </button>
            <button
                type="submit"
                class="flex items-center gap-2 px-5 py-2 rounded-xl bg-blue-600 hover:bg-blue-700 disabled:opacity-60 text-white text-sm font-bold"
                disabled=move || busy.get()
            >
                <Show when=move || busy.get() fallback=move || label>
                    <InlineSpinner />
                    "Working..."
                </Show>
            </button>
        </div>
    }
}
