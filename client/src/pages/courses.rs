//! Course catalog with filters and a grid/list layout toggle.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::components::course_filters::CourseFilterPanel;
use crate::state::store::use_store;
use crate::state::ui::{CatalogLayout, UiState};
use crate::util::catalog::{CourseFilters, course_count_label};

#[component]
pub fn CoursesPage() -> impl IntoView {
    let store = use_store();
    let ui = expect_context::<RwSignal<UiState>>();
    let filters = RwSignal::new(CourseFilters::default());

    let visible = move || filters.with(|f| store.with(|s| f.apply(&s.courses).into_iter().cloned().collect::<Vec<_>>()));
    let layout = move || ui.with(|u| u.catalog_layout);

    view! {
        <div class="page catalog">
            <header class="page__header">
                <h1>"All Courses"</h1>
                <p class="muted">"Expand your skills with expert-led courses across technology, design and business."</p>
            </header>
            <div class="catalog__layout">
                <CourseFilterPanel filters/>
                <div class="catalog__results">
                    <div class="catalog__toolbar">
                        <span class="muted">{move || course_count_label(visible().len())}</span>
                        <button
                            class="btn btn--outline btn--sm"
                            on:click=move |_| ui.update(|u| u.catalog_layout = u.catalog_layout.toggled())
                        >
                            {move || if layout() == CatalogLayout::Grid { "List view" } else { "Grid view" }}
                        </button>
                    </div>
                    <Show
                        when=move || !visible().is_empty()
                        fallback=move || view! {
                            <div class="catalog__empty">
                                <p class="muted">"No courses found matching your criteria."</p>
                                <button class="btn btn--outline" on:click=move |_| filters.set(CourseFilters::default())>
                                    "Clear Filters"
                                </button>
                            </div>
                        }
                    >
                        <div class=move || layout().css_class()>
                            {move || visible().into_iter().map(|course| view! { <CourseCard course/> }).collect_view()}
                        </div>
                    </Show>
                </div>
            </div>
        </div>
    }
}
