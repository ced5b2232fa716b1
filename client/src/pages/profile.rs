//! Profile page: account details, learning summary and editable settings.

use crudview::FormData;
use leptos::prelude::*;

use crate::components::dynamic_form::DynamicForm;
use crate::components::require_role::RequireRole;
use crate::components::role_badge::RoleBadge;
use crate::components::user_avatar::{AvatarSize, UserAvatar};
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::use_store;
use crate::util::format::{locale_date, long_date, truncate};
use crate::util::forms::{profile_form, profile_update, profile_values};
use crate::util::stats::{find_course, learner_stats};

#[component]
pub fn ProfilePage() -> impl IntoView {
    view! {
        <RequireRole>
            <Profile/>
        </RequireRole>
    }
}

#[component]
fn Profile() -> impl IntoView {
    let store = use_store();
    let editing = RwSignal::new(false);
    let busy = RwSignal::new(false);
    let notice = RwSignal::new(None::<String>);

    let user = move || store.current_user();
    let stats = move || store.with(|s| s.user.as_ref().map(|u| learner_stats(s, &u.id)).unwrap_or_default());

    let courses = move || {
        store.with(|s| {
            let Some(me) = s.user.as_ref() else {
                return Vec::new();
            };
            s.enrollments
                .iter()
                .filter(|e| e.user_id == me.id)
                .filter_map(|e| find_course(&s.courses, &e.course_id).map(|c| (c.title.clone(), e.progress, e.enrolled_at)))
                .collect::<Vec<_>>()
        })
    };

    let comments = move || {
        store.with(|s| {
            let Some(me) = s.user.as_ref() else {
                return Vec::new();
            };
            s.comments
                .iter()
                .filter(|c| c.user_id == me.id)
                .map(|c| {
                    let title = s.blog_posts.iter().find(|p| p.id == c.post_id).map(|p| p.title.clone()).unwrap_or_default();
                    (title, c.content.clone(), c.created_at)
                })
                .collect::<Vec<_>>()
        })
    };

    let on_save = Callback::new(move |data: FormData| {
        let update = profile_update(&data);
        busy.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::update_profile(&update).await {
                Ok(user) => {
                    store.dispatch(Action::UpdateUser(user));
                    notice.set(Some("Profile updated".to_owned()));
                    editing.set(false);
                }
                Err(e) => notice.set(Some(e)),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = update;
        }
    });

    view! {
        <div class="page profile">
            <header class="page__header profile__header">
                {move || user().map(|u| view! {
                    <UserAvatar name=u.name.clone() src=u.avatar.clone().unwrap_or_default() size=AvatarSize::Lg/>
                    <div>
                        <h1>"My Profile"</h1>
                        <p class="muted">"Manage your account and track your progress"</p>
                        <p>
                            <strong>{u.name.clone()}</strong>
                            " · "
                            {u.email.clone()}
                            " "
                            <RoleBadge role=u.role/>
                        </p>
                        <p class="muted small">{format!("Member since {}", long_date(u.created_at))}</p>
                    </div>
                })}
            </header>

            <div class="stat-grid">
                <div class="card stat-card">
                    <span class="stat-card__title">"Enrolled Courses"</span>
                    <div class="stat-card__value">{move || stats().enrolled}</div>
                </div>
                <div class="card stat-card">
                    <span class="stat-card__title">"Completed Courses"</span>
                    <div class="stat-card__value">{move || stats().completed}</div>
                </div>
                <div class="card stat-card">
                    <span class="stat-card__title">"Comments Posted"</span>
                    <div class="stat-card__value">{move || stats().comments}</div>
                </div>
            </div>

            <section class="card">
                <div class="card__header"><h2 class="card__title">"My Enrolled Courses"</h2></div>
                <div class="card__content">
                    {move || {
                        let items = courses();
                        if items.is_empty() {
                            return view! { <p class="muted">"You haven't enrolled in any courses yet."</p> }.into_any();
                        }
                        items
                            .into_iter()
                            .map(|(title, progress, enrolled_at)| view! {
                                <div class="enrolled-course">
                                    <div class="enrolled-course__body">
                                        <h3>{title}</h3>
                                        <p class="muted small">{format!("Enrolled: {}", locale_date(enrolled_at))}</p>
                                    </div>
                                    <p class="enrolled-course__side">{format!("{progress}% Complete")}</p>
                                </div>
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </section>

            <section class="card">
                <div class="card__header"><h2 class="card__title">"My Comments"</h2></div>
                <div class="card__content">
                    {move || {
                        let items = comments();
                        if items.is_empty() {
                            return view! { <p class="muted">"You haven't posted any comments yet."</p> }.into_any();
                        }
                        items
                            .into_iter()
                            .map(|(title, content, at)| view! {
                                <div class="activity">
                                    <h4>{title}</h4>
                                    <p>{truncate(&content, 200)}</p>
                                    <p class="muted small">{locale_date(at)}</p>
                                </div>
                            })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </section>

            <section class="card">
                <div class="card__header profile__settings-header">
                    <h2 class="card__title">"Profile Settings"</h2>
                    <Show when=move || !editing.get()>
                        <button class="btn btn--primary btn--sm" on:click=move |_| {
                            notice.set(None);
                            editing.set(true);
                        }>"Edit Profile"</button>
                    </Show>
                </div>
                <div class="card__content">
                    {move || notice.get().map(|n| view! { <p class="notice">{n}</p> })}
                    {move || {
                        let Some(u) = user() else {
                            return view! { <span></span> }.into_any();
                        };
                        if editing.get() {
                            view! {
                                <DynamicForm schema=profile_form() initial=profile_values(&u) on_submit=on_save loading=busy bare=true/>
                                <button class="btn btn--outline btn--block" on:click=move |_| editing.set(false)>"Cancel"</button>
                            }
                            .into_any()
                        } else {
                            view! {
                                <dl class="profile__facts">
                                    <dt>"Name"</dt><dd>{u.name.clone()}</dd>
                                    <dt>"Email"</dt><dd>{u.email.clone()}</dd>
                                    <dt>"Bio"</dt><dd>{u.bio.clone().unwrap_or_else(|| "No bio yet.".to_owned())}</dd>
                                </dl>
                            }
                            .into_any()
                        }
                    }}
                </div>
            </section>
        </div>
    }
}
