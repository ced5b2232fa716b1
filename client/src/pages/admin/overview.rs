//! Admin landing page: site figures and the latest activity.

use leptos::prelude::*;

use super::{AdminHeader, AdminLayout};
use crate::components::stats_cards::StatsCards;
use crate::components::user_avatar::{AvatarSize, UserAvatar};
use crate::state::store::use_store;
use crate::util::format::{locale_date, truncate};
use crate::util::stats::{find_course, recent_comments, recent_enrollments, recent_posts};

const RECENT_LIMIT: usize = 5;

#[component]
pub fn AdminOverviewPage() -> impl IntoView {
    view! {
        <AdminLayout>
            <AdminOverview/>
        </AdminLayout>
    }
}

#[component]
fn AdminOverview() -> impl IntoView {
    let store = use_store();

    let enrollments = move || {
        store.with(|s| {
            recent_enrollments(&s.enrollments, RECENT_LIMIT)
                .into_iter()
                .map(|e| {
                    let student = s.users.iter().find(|u| u.id == e.user_id).map_or("Unknown User", |u| u.name.as_str());
                    let course = find_course(&s.courses, &e.course_id).map_or("Unknown Course", |c| c.title.as_str());
                    (student.to_owned(), course.to_owned(), e.progress, locale_date(e.enrolled_at))
                })
                .collect::<Vec<_>>()
        })
    };
    let posts = move || {
        store.with(|s| {
            recent_posts(&s.blog_posts, RECENT_LIMIT)
                .into_iter()
                .map(|p| (p.id.clone(), p.title.clone(), p.is_published, p.views))
                .collect::<Vec<_>>()
        })
    };
    let comments = move || {
        store.with(|s| {
            recent_comments(&s.comments, RECENT_LIMIT)
                .into_iter()
                .map(|c| {
                    let post = s.blog_posts.iter().find(|p| p.id == c.post_id).map_or("Unknown Post", |p| p.title.as_str());
                    (c.user_name.clone(), c.user_avatar.clone(), truncate(&c.content, 60), post.to_owned())
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="admin-page">
            <AdminHeader title="Admin Dashboard" subtitle="Overview of your learning platform">
                <a class="btn btn--primary" href="/admin/courses/new">"+ New Course"</a>
                <a class="btn btn--outline" href="/admin/blog/new">"+ New Post"</a>
            </AdminHeader>
            <StatsCards/>
            <div class="admin-overview__grid">
                <section class="card">
                    <div class="card__header"><h2>"Recent Enrollments"</h2></div>
                    <ul class="card__content activity-list">
                        {move || {
                            enrollments()
                                .into_iter()
                                .map(|(student, course, progress, date)| {
                                    view! {
                                        <li class="activity-list__item">
                                            <div>
                                                <p class="activity-list__title">{student}</p>
                                                <p class="muted">{course}</p>
                                            </div>
                                            <div class="activity-list__meta">
                                                <span class="badge badge--secondary">{format!("{progress}%")}</span>
                                                <span class="muted">{date}</span>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
                <section class="card">
                    <div class="card__header"><h2>"Recent Posts"</h2></div>
                    <ul class="card__content activity-list">
                        {move || {
                            posts()
                                .into_iter()
                                .map(|(id, title, published, views)| {
                                    view! {
                                        <li class="activity-list__item">
                                            <a class="activity-list__title" href=format!("/blog/{id}")>{title}</a>
                                            <div class="activity-list__meta">
                                                <span class=if published { "badge" } else { "badge badge--secondary" }>
                                                    {if published { "Published" } else { "Draft" }}
                                                </span>
                                                <span class="muted">{format!("{views} views")}</span>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
                <section class="card">
                    <div class="card__header"><h2>"Recent Comments"</h2></div>
                    <ul class="card__content activity-list">
                        {move || {
                            comments()
                                .into_iter()
                                .map(|(name, avatar, content, post)| {
                                    view! {
                                        <li class="activity-list__item">
                                            <UserAvatar name=name.clone() src=avatar.unwrap_or_default() size=AvatarSize::Sm/>
                                            <div>
                                                <p class="activity-list__title">{name}</p>
                                                <p>{content}</p>
                                                <p class="muted">{format!("on {post}")}</p>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()
                        }}
                    </ul>
                </section>
            </div>
        </div>
    }
}
