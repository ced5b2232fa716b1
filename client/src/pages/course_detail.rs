//! Single course: description, lessons, instructor and enrollment.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::course_card::level_class;
use crate::components::enrollment_button::EnrollmentButton;
use crate::components::user_avatar::{AvatarSize, UserAvatar};
use crate::net::types::Course;
use crate::state::store::use_store;
use crate::util::format::currency;
use crate::util::stats::{find_course, find_enrollment};

#[component]
pub fn CourseDetailPage() -> impl IntoView {
    let store = use_store();
    let params = use_params_map();
    let course_id = move || params.read().get("id").unwrap_or_default();

    let course = move || store.with(|s| find_course(&s.courses, &course_id()).cloned());
    let enrolled = move || {
        store.with(|s| {
            s.user.as_ref().is_some_and(|u| find_enrollment(&s.enrollments, &u.id, &course_id()).is_some())
        })
    };

    move || match course() {
        Some(course) => course_view(course, enrolled).into_any(),
        None => view! {
            <div class="page page--centered">
                <h1>"Course Not Found"</h1>
                <p class="muted">"The course you're looking for doesn't exist."</p>
                <a class="btn btn--primary" href="/courses">"Browse Courses"</a>
            </div>
        }
        .into_any(),
    }
}

fn course_view(course: Course, enrolled: impl Fn() -> bool + Copy + Send + Sync + 'static) -> impl IntoView {
    let lessons = course.lessons.clone();
    view! {
        <div class="page course-detail">
            <div class="course-detail__main">
                <div class="course-detail__badges">
                    <span class=level_class(course.level)>{course.level.label()}</span>
                    <span class="badge badge--secondary">{course.category.clone()}</span>
                </div>
                <h1>{course.title.clone()}</h1>
                <p class="lead muted">{course.description.clone()}</p>
                <img class="course-detail__image" src=course.thumbnail.clone() alt=course.title.clone()/>
                <div class="course-detail__meta muted">
                    <span>"⏱ " {course.duration.clone()}</span>
                    <span>{format!("👥 {} students", course.enrolled_students)}</span>
                    <span>{format!("★ {:.1} rating", course.rating)}</span>
                    <span>{format!("{} lessons", course.lessons.len())}</span>
                </div>

                <section class="card">
                    <div class="card__header"><h2 class="card__title">"Instructor"</h2></div>
                    <div class="card__content course-detail__instructor">
                        <UserAvatar name=course.instructor.clone() size=AvatarSize::Lg/>
                        <div>
                            <h3>{course.instructor.clone()}</h3>
                            <p class="muted">{format!("Expert in {}", course.category)}</p>
                        </div>
                    </div>
                </section>

                <section class="card">
                    <div class="card__header"><h2 class="card__title">"Course Content"</h2></div>
                    <div class="card__content">
                        {if lessons.is_empty() {
                            view! { <p class="muted">"Course content will be available soon."</p> }.into_any()
                        } else {
                            lessons
                                .into_iter()
                                .map(|lesson| view! {
                                    <div class="lesson">
                                        <span class="lesson__mark" class:lesson__mark--done=enrolled></span>
                                        <div class="lesson__body">
                                            <h4>{format!("{}. {}", lesson.order, lesson.title)}</h4>
                                            <p class="muted">{lesson.description}</p>
                                        </div>
                                        <span class="muted">{format!("{} min", lesson.duration)}</span>
                                    </div>
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </div>
                </section>
            </div>

            <aside class="card course-detail__sidebar">
                <div class="card__content">
                    <div class="course-detail__price">{currency(course.price)}</div>
                    <p class="muted">"One-time payment"</p>
                    <EnrollmentButton course_id=course.id.clone()/>
                    <Show when=enrolled>
                        <p class="text-success">"✓ You're enrolled in this course"</p>
                    </Show>
                    <dl class="course-detail__facts">
                        <dt>"Duration"</dt><dd>{course.duration.clone()}</dd>
                        <dt>"Level"</dt><dd>{course.level.label()}</dd>
                        <dt>"Students"</dt><dd>{course.enrolled_students}</dd>
                        <dt>"Lessons"</dt><dd>{course.lessons.len()}</dd>
                        <dt>"Category"</dt><dd>{course.category.clone()}</dd>
                    </dl>
                </div>
            </aside>
        </div>
    }
}
