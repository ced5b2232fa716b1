//! Filter panel for the course catalog.

use leptos::prelude::*;

use crate::net::types::Level;
use crate::util::catalog::{COURSE_CATEGORIES, CourseFilters, DEFAULT_PRICE_RANGE};

const ALL_CATEGORIES: &str = "All Categories";
const ALL_LEVELS: &str = "All Levels";

#[component]
pub fn CourseFilterPanel(filters: RwSignal<CourseFilters>) -> impl IntoView {
    let category_value = move || filters.with(|f| f.category.clone().unwrap_or_else(|| ALL_CATEGORIES.to_owned()));
    let level_value = move || filters.with(|f| f.level.map_or(ALL_LEVELS, Level::as_str).to_owned());

    let set_price = move |index: usize, raw: String| {
        let Ok(value) = raw.trim().parse::<f64>() else {
            return;
        };
        filters.update(|f| {
            if index == 0 {
                f.price_range.0 = value.max(0.0);
            } else {
                f.price_range.1 = value.max(0.0);
            }
        });
    };

    view! {
        <aside class="card filters">
            <div class="card__header">
                <h2 class="card__title">"Filters"</h2>
            </div>
            <div class="card__content filters__body">
                <label class="filters__label" for="course-search">"Search Courses"</label>
                <input
                    id="course-search"
                    class="input"
                    type="search"
                    placeholder="Search by title or instructor..."
                    prop:value=move || filters.with(|f| f.search.clone())
                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                />

                <label class="filters__label" for="course-category">"Category"</label>
                <select
                    id="course-category"
                    class="input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.category = (value != ALL_CATEGORIES).then_some(value));
                    }
                >
                    {std::iter::once(ALL_CATEGORIES)
                        .chain(COURSE_CATEGORIES)
                        .map(|c| view! { <option value=c selected=move || category_value() == c>{c}</option> })
                        .collect_view()}
                </select>

                <label class="filters__label" for="course-level">"Level"</label>
                <select
                    id="course-level"
                    class="input"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.level = Level::parse(&value));
                    }
                >
                    <option value=ALL_LEVELS selected=move || level_value() == ALL_LEVELS>{ALL_LEVELS}</option>
                    {Level::ALL
                        .map(|l| view! { <option value=l.as_str() selected=move || level_value() == l.as_str()>{l.label()}</option> })
                        .collect_view()}
                </select>

                <span class="filters__label">"Price Range ($)"</span>
                <div class="filters__price">
                    <input
                        class="input"
                        type="number"
                        min="0"
                        aria-label="Minimum price"
                        prop:value=move || filters.with(|f| f.price_range.0.to_string())
                        on:change=move |ev| set_price(0, event_target_value(&ev))
                    />
                    <span>"to"</span>
                    <input
                        class="input"
                        type="number"
                        min="0"
                        aria-label="Maximum price"
                        prop:value=move || filters.with(|f| f.price_range.1.to_string())
                        on:change=move |ev| set_price(1, event_target_value(&ev))
                    />
                </div>
                <p class="muted filters__hint">
                    {format!("Default ${} to ${}", DEFAULT_PRICE_RANGE.0, DEFAULT_PRICE_RANGE.1)}
                </p>

                <button class="btn btn--outline btn--block" on:click=move |_| filters.set(CourseFilters::default())>
                    "Clear All Filters"
                </button>
            </div>
        </aside>
    }
}
