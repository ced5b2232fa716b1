//! Course catalog management.

use crudview::{BadgeTone, CellDisplay, ColumnSchema, RowActions, TableConfig};
use leptos::prelude::*;

use super::{AdminHeader, AdminLayout, Navigator};
use crate::components::data_table::DataTable;
use crate::net::types::{Course, Level};
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::{AppStore, use_store};
use crate::util::format::locale_date;

fn course_table(store: AppStore, nav: Navigator) -> TableConfig<Course> {
    let columns = vec![
        ColumnSchema::new("thumbnail", "Image")
            .render(|c: &Course| CellDisplay::Image { src: c.thumbnail.clone(), alt: c.title.clone() }),
        ColumnSchema::new("title", "Title").sortable(),
        ColumnSchema::new("instructor", "Instructor").sortable(),
        ColumnSchema::new("category", "Category")
            .sortable()
            .render(|c: &Course| CellDisplay::badge(c.category.clone(), BadgeTone::Secondary)),
        ColumnSchema::new("level", "Level").sortable().render(|c: &Course| {
            let tone = match c.level {
                Level::Beginner => BadgeTone::Success,
                Level::Intermediate => BadgeTone::Warning,
                Level::Advanced => BadgeTone::Danger,
            };
            CellDisplay::badge(c.level.label(), tone)
        }),
        ColumnSchema::new("price", "Price").sortable().render(|c: &Course| CellDisplay::text(format!("${}", c.price))),
        ColumnSchema::new("enrolledStudents", "Students").sortable(),
        ColumnSchema::new("rating", "Rating").sortable().render(|c: &Course| CellDisplay::text(format!("{} ⭐", c.rating))),
        ColumnSchema::new("createdAt", "Created")
            .sortable()
            .render(|c: &Course| CellDisplay::text(locale_date(c.created_at))),
    ];
    let actions = RowActions::default()
        .on_view(move |c: &Course| nav.go(&format!("/courses/{}", c.id)))
        .on_edit(move |c: &Course| nav.go(&format!("/admin/courses/{}/edit", c.id)))
        .on_delete(move |c: &Course| delete_course(store, c));
    TableConfig::new(columns).actions(actions).paginate(10)
}

fn delete_course(store: AppStore, course: &Course) {
    if !crate::util::dialog::confirm(&format!("Are you sure you want to delete \"{}\"?", course.title)) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let id = course.id.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::delete_course(&id).await {
                Ok(()) => store.dispatch(Action::DeleteCourse(id)),
                Err(e) => {
                    log::warn!("delete course {id} failed: {e}");
                    crate::util::dialog::alert("Failed to delete course. Please try again.");
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = store;
}

#[component]
pub fn AdminCoursesPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <AdminCourses/>
        </AdminLayout>
    }
}

#[component]
fn AdminCourses() -> impl IntoView {
    let store = use_store();
    let nav = Navigator::new();
    let rows = Signal::derive(move || store.with(|s| s.courses.clone()));

    view! {
        <div class="admin-page">
            <AdminHeader title="Courses Management" subtitle="Manage your course catalog">
                <a class="btn btn--primary" href="/admin/courses/new">"+ New Course"</a>
            </AdminHeader>
            <DataTable config=course_table(store, nav) rows title="All Courses"/>
        </div>
    }
}
