//! Summary cards for the admin overview.

use leptos::prelude::*;

use crate::state::store::use_store;
use crate::util::format::currency;
use crate::util::stats::site_stats;

#[component]
pub fn StatsCards() -> impl IntoView {
    let store = use_store();
    let stats = Memo::new(move |_| store.with(site_stats));

    let cards = move || {
        let s = stats.get();
        [
            ("Total Courses", s.courses.to_string(), "Active courses"),
            ("Blog Posts", s.published_posts.to_string(), "Published posts"),
            ("Total Enrollments", s.enrollments.to_string(), "Student enrollments"),
            ("Comments", s.comments.to_string(), "Total comments"),
            ("Total Revenue", currency(s.revenue), "From course sales"),
            ("Users", s.users.to_string(), "Registered users"),
        ]
        .into_iter()
        .map(|(title, value, description)| {
            view! {
                <div class="card stat-card">
                    <div class="card__header stat-card__header">
                        <span class="stat-card__title">{title}</span>
                    </div>
                    <div class="card__content">
                        <div class="stat-card__value">{value}</div>
                        <p class="muted stat-card__description">{description}</p>
                    </div>
                </div>
            }
        })
        .collect_view()
    };

    view! { <div class="stat-grid">{cards}</div> }
}
