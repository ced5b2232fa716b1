//! Create or edit a course. `/admin/courses/new` starts blank;
//! `/admin/courses/:id/edit` preloads the stored course.

use crudview::FormData;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::{AdminHeader, AdminLayout};
use crate::components::dynamic_form::DynamicForm;
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::use_store;
use crate::util::forms::{course_form, course_values};
use crate::util::stats::find_course;

#[component]
pub fn CourseEditorPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <CourseEditor/>
        </AdminLayout>
    }
}

/// Waits for the initial load so an edit route can find its record.
#[component]
fn CourseEditor() -> impl IntoView {
    let store = use_store();
    move || {
        if store.with(|s| s.loading) {
            view! { <p class="muted">"Loading..."</p> }.into_any()
        } else {
            view! { <CourseForm/> }.into_any()
        }
    }
}

#[component]
fn CourseForm() -> impl IntoView {
    let store = use_store();
    let nav = super::Navigator::new();
    let params = use_params_map();
    let busy = RwSignal::new(false);
    let id = params.read_untracked().get("id");
    let editing = id.is_some();

    let existing = id.as_deref().and_then(|id| find_course(&store.get_untracked().courses, id).cloned());
    if editing && existing.is_none() {
        return view! {
            <div class="admin-page">
                <AdminHeader title="Course Not Found"/>
                <a class="btn btn--outline" href="/admin/courses">"Back to Courses"</a>
            </div>
        }
        .into_any();
    }

    let mut schema = course_form();
    if editing {
        schema.title = "Edit Course".to_owned();
        schema.submit_text = "Save Changes".to_owned();
    }
    let initial = existing.as_ref().map(course_values);
    let instructor = existing.map(|c| c.instructor);

    let on_submit = Callback::new(move |data: FormData| {
        let Some(user) = store.current_user() else {
            return;
        };
        let draft = crate::util::forms::course_draft(&data, instructor.as_deref().unwrap_or(&user.name));
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let id = id.clone();
            leptos::task::spawn_local(async move {
                let saved = match &id {
                    Some(id) => crate::net::api::update_course(id, &draft).await,
                    None => crate::net::api::create_course(&draft).await,
                };
                match saved {
                    Ok(course) => {
                        log::info!("saved course {}", course.id);
                        store.dispatch(if id.is_some() { Action::UpdateCourse(course) } else { Action::AddCourse(course) });
                        nav.go("/admin/courses");
                    }
                    Err(e) => {
                        crate::util::dialog::alert("Failed to save course. Please try again.");
                        store.fail(e);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (draft, &id, nav);
    });

    view! {
        <div class="admin-page admin-page--narrow">
            <a class="btn btn--ghost btn--sm" href="/admin/courses">"← Back to Courses"</a>
            <DynamicForm schema initial=initial.unwrap_or_default() on_submit loading=busy/>
        </div>
    }
    .into_any()
}
