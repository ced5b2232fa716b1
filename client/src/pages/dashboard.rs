//! Student dashboard: learning figures, enrolled courses and recent activity.
//!
//! SYSTEM CONTEXT
//! ==============
//! Signed-in users only. Everything here is derived from the store with
//! `util::stats`; the page issues no requests of its own.

use leptos::prelude::*;

use crate::components::require_role::RequireRole;
use crate::net::types::{Course, Enrollment, EnrollmentStatus};
use crate::state::store::use_store;
use crate::util::format::{locale_date, truncate};
use crate::util::stats::{find_course, learner_stats, recent_enrollments};

const RECENT_COURSES: usize = 3;
const RECENT_COMMENTS: usize = 5;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Tab {
    Overview,
    Courses,
    Activity,
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <RequireRole>
            <Dashboard/>
        </RequireRole>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let store = use_store();
    let tab = RwSignal::new(Tab::Overview);
    let user_id = move || store.with(|s| s.user.as_ref().map(|u| u.id.clone()).unwrap_or_default());
    let name = move || store.with(|s| s.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let stats = move || store.with(|s| learner_stats(s, &user_id()));

    // Every enrollment of this user, newest first, joined with its course.
    let mine = move |limit: usize| {
        store.with(|s| {
            let uid = user_id();
            recent_enrollments(s.enrollments.iter().filter(|e| e.user_id == uid), limit)
                .into_iter()
                .filter_map(|e| find_course(&s.courses, &e.course_id).map(|c| (e.clone(), c.clone())))
                .collect::<Vec<_>>()
        })
    };

    let activity = move || {
        store.with(|s| {
            let uid = user_id();
            let mut comments: Vec<_> = s.comments.iter().filter(|c| c.user_id == uid).cloned().collect();
            comments.sort_by_key(|c| std::cmp::Reverse(c.created_at));
            comments.truncate(RECENT_COMMENTS);
            comments
                .into_iter()
                .map(|c| {
                    let title = s.blog_posts.iter().find(|p| p.id == c.post_id).map(|p| p.title.clone()).unwrap_or_default();
                    (c, title)
                })
                .collect::<Vec<_>>()
        })
    };

    let tab_button = move |value: Tab, label: &'static str| {
        view! {
            <button class="tabs__tab" class:tabs__tab--active=move || tab.get() == value on:click=move |_| tab.set(value)>
                {label}
            </button>
        }
    };

    view! {
        <div class="page dashboard">
            <header class="page__header">
                <h1>{move || format!("Welcome back, {}!", name())}</h1>
                <p class="muted">"Continue your learning journey and track your progress."</p>
            </header>

            <div class="stat-grid">
                <div class="card stat-card">
                    <span class="stat-card__title">"Enrolled Courses"</span>
                    <div class="stat-card__value">{move || stats().enrolled}</div>
                    <p class="muted">{move || format!("{} in progress", stats().in_progress)}</p>
                </div>
                <div class="card stat-card">
                    <span class="stat-card__title">"Completed"</span>
                    <div class="stat-card__value">{move || stats().completed}</div>
                    <p class="muted">{move || format!("{}% completion rate", stats().completion_rate)}</p>
                </div>
                <div class="card stat-card">
                    <span class="stat-card__title">"Average Progress"</span>
                    <div class="stat-card__value">{move || format!("{}%", stats().average_progress)}</div>
                    <div class="progress">
                        <div class="progress__bar" style=move || format!("width:{}%;", stats().average_progress)></div>
                    </div>
                </div>
                <div class="card stat-card">
                    <span class="stat-card__title">"Comments"</span>
                    <div class="stat-card__value">{move || stats().comments}</div>
                    <p class="muted">"Blog interactions"</p>
                </div>
            </div>

            <div class="tabs">
                {tab_button(Tab::Overview, "Overview")}
                {tab_button(Tab::Courses, "My Courses")}
                {tab_button(Tab::Activity, "Activity")}
            </div>

            {move || match tab.get() {
                Tab::Overview => view! {
                    <div class="dashboard__overview">
                        <section class="card">
                            <div class="card__header"><h2 class="card__title">"Recent Courses"</h2></div>
                            <div class="card__content">
                                {enrollment_list(mine(RECENT_COURSES), false)}
                            </div>
                        </section>
                        <section class="card">
                            <div class="card__header"><h2 class="card__title">"Quick Actions"</h2></div>
                            <div class="card__content dashboard__actions">
                                <a class="btn btn--primary btn--block" href="/courses">"Browse Courses"</a>
                                <a class="btn btn--outline btn--block" href="/blog">"Read Blog"</a>
                                <a class="btn btn--outline btn--block" href="/profile">"Edit Profile"</a>
                            </div>
                        </section>
                    </div>
                }
                .into_any(),
                Tab::Courses => view! {
                    <section class="card">
                        <div class="card__header"><h2 class="card__title">"My Courses"</h2></div>
                        <div class="card__content">{enrollment_list(mine(usize::MAX), true)}</div>
                    </section>
                }
                .into_any(),
                Tab::Activity => {
                    let items = activity();
                    view! {
                        <section class="card">
                            <div class="card__header"><h2 class="card__title">"Recent Activity"</h2></div>
                            <div class="card__content">
                                {if items.is_empty() {
                                    view! { <p class="muted">"No recent activity"</p> }.into_any()
                                } else {
                                    items
                                        .into_iter()
                                        .map(|(comment, title)| view! {
                                            <div class="activity">
                                                <p>
                                                    <strong>"Commented on "</strong>
                                                    <a href=format!("/blog/{}", comment.post_id)>{title}</a>
                                                </p>
                                                <p class="muted">{truncate(&comment.content, 140)}</p>
                                                <p class="muted small">{locale_date(comment.created_at)}</p>
                                            </div>
                                        })
                                        .collect_view()
                                        .into_any()
                                }}
                            </div>
                        </section>
                    }
                    .into_any()
                }
            }}
        </div>
    }
}

fn enrollment_list(items: Vec<(Enrollment, Course)>, detailed: bool) -> AnyView {
    if items.is_empty() {
        return view! {
            <div class="dashboard__empty">
                <p class="muted">"No courses enrolled yet"</p>
                <a class="btn btn--primary" href="/courses">"Browse Courses"</a>
            </div>
        }
        .into_any();
    }
    items
        .into_iter()
        .map(|(enrollment, course)| {
            let status = match enrollment.status {
                EnrollmentStatus::Completed => "badge badge--success",
                EnrollmentStatus::InProgress => "badge badge--secondary",
                EnrollmentStatus::Paused => "badge badge--warning",
            };
            view! {
                <div class="enrolled-course">
                    <img class="enrolled-course__thumb" src=course.thumbnail.clone() alt=course.title.clone()/>
                    <div class="enrolled-course__body">
                        <h4>{course.title.clone()}</h4>
                        {detailed.then(|| view! { <p class="muted">{truncate(&course.description, 160)}</p> })}
                        <p class="muted">{format!("by {} · enrolled {}", course.instructor, locale_date(enrollment.enrolled_at))}</p>
                        <div class="progress">
                            <div class="progress__bar" style=format!("width:{}%;", enrollment.progress.min(100))></div>
                        </div>
                    </div>
                    <div class="enrolled-course__side">
                        <span class=status>{enrollment.status.as_str()}</span>
                        <span class="muted">{format!("{}%", enrollment.progress)}</span>
                        <a class="btn btn--sm btn--outline" href=format!("/courses/{}", course.id)>"Continue"</a>
                    </div>
                </div>
            }
        })
        .collect_view()
        .into_any()
}
