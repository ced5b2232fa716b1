//! Enrollment tracking: progress edits and removal.

use crudview::{BadgeTone, CellDisplay, ColumnSchema, RowActions, TableConfig};
use leptos::prelude::*;

use super::{AdminHeader, AdminLayout};
use crate::components::data_table::DataTable;
use crate::net::types::{Enrollment, EnrollmentStatus};
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::{AppStore, use_store};
use crate::util::format::locale_date;
use crate::util::stats::find_course;

fn enrollment_table(store: AppStore) -> TableConfig<Enrollment> {
    let columns = vec![
        ColumnSchema::new("userId", "Student").sortable().render(move |e: &Enrollment| {
            let name = store.with(|s| s.users.iter().find(|u| u.id == e.user_id).map(|u| u.name.clone()));
            CellDisplay::text(name.unwrap_or_else(|| "Unknown User".to_owned()))
        }),
        ColumnSchema::new("courseId", "Course").sortable().render(move |e: &Enrollment| {
            let title = store.with(|s| find_course(&s.courses, &e.course_id).map(|c| c.title.clone()));
            CellDisplay::text(title.unwrap_or_else(|| "Unknown Course".to_owned()))
        }),
        ColumnSchema::new("status", "Status").sortable().render(|e: &Enrollment| match e.status {
            EnrollmentStatus::Completed => CellDisplay::badge("Completed", BadgeTone::Success),
            EnrollmentStatus::InProgress => CellDisplay::badge("In Progress", BadgeTone::Secondary),
            EnrollmentStatus::Paused => CellDisplay::badge("Paused", BadgeTone::Warning),
        }),
        ColumnSchema::new("progress", "Progress")
            .sortable()
            .render(|e: &Enrollment| CellDisplay::text(format!("{}%", e.progress))),
        ColumnSchema::new("enrolledAt", "Enrolled")
            .sortable()
            .render(|e: &Enrollment| CellDisplay::text(locale_date(e.enrolled_at))),
    ];
    let actions = RowActions::default()
        .on_edit(move |e: &Enrollment| edit_progress(store, e))
        .on_delete(move |e: &Enrollment| remove_enrollment(store, e));
    TableConfig::new(columns).actions(actions).paginate(10)
}

fn edit_progress(store: AppStore, enrollment: &Enrollment) {
    let Some(raw) = crate::util::dialog::prompt("Enter new progress (0-100):", &enrollment.progress.to_string())
    else {
        return;
    };
    let Some((progress, status)) = crate::util::forms::parse_progress(&raw) else {
        crate::util::dialog::alert("Progress must be a number between 0 and 100.");
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let id = enrollment.id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::update_enrollment(&id, progress, status).await {
                Ok(updated) => store.dispatch(Action::UpdateEnrollment(updated)),
                Err(e) => {
                    crate::util::dialog::alert("Failed to update enrollment. Please try again.");
                    store.fail(e);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = (store, progress, status);
}

fn remove_enrollment(store: AppStore, enrollment: &Enrollment) {
    if !crate::util::dialog::confirm("Are you sure you want to remove this enrollment?") {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let id = enrollment.id.clone();
        let course_id = enrollment.course_id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_enrollment(&id).await {
                Ok(()) => {
                    store.dispatch(Action::DeleteEnrollment(id));
                    // The server released the seat; pick up the new count.
                    match crate::net::api::fetch_course(&course_id).await {
                        Ok(course) => store.dispatch(Action::UpdateCourse(course)),
                        Err(e) => store.fail(e),
                    }
                }
                Err(e) => {
                    crate::util::dialog::alert("Failed to remove enrollment. Please try again.");
                    store.fail(e);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = store;
}

#[component]
pub fn AdminEnrollmentsPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <AdminEnrollments/>
        </AdminLayout>
    }
}

#[component]
fn AdminEnrollments() -> impl IntoView {
    let store = use_store();
    let rows = Signal::derive(move || store.with(|s| s.enrollments.clone()));

    view! {
        <div class="admin-page">
            <AdminHeader title="Enrollment Management" subtitle="Track and manage course enrollments"/>
            <DataTable config=enrollment_table(store) rows title="All Enrollments"/>
        </div>
    }
}
