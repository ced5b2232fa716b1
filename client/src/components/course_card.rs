//! Catalog card for one course.

use leptos::prelude::*;

use crate::components::enrollment_button::EnrollmentButton;
use crate::components::user_avatar::{AvatarSize, UserAvatar};
use crate::net::types::{Course, Level};
use crate::util::format::currency;

pub fn level_class(level: Level) -> &'static str {
    match level {
        Level::Beginner => "badge level level--beginner",
        Level::Intermediate => "badge level level--intermediate",
        Level::Advanced => "badge level level--advanced",
    }
}

#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    let href = format!("/courses/{}", course.id);
    view! {
        <article class="card course-card">
            <div class="course-card__media">
                <img class="course-card__thumb" src=course.thumbnail.clone() alt=course.title.clone()/>
                <span class=format!("{} course-card__level", level_class(course.level))>{course.level.label()}</span>
                <span class="badge badge--secondary course-card__price">{currency(course.price)}</span>
            </div>
            <div class="card__content course-card__body">
                <h3 class="course-card__title">{course.title.clone()}</h3>
                <p class="muted course-card__description">{course.description.clone()}</p>
                <div class="course-card__instructor">
                    <UserAvatar name=course.instructor.clone() size=AvatarSize::Sm/>
                    <span class="muted">{course.instructor.clone()}</span>
                </div>
                <div class="course-card__meta muted">
                    <span title="Duration">"⏱ " {course.duration.clone()}</span>
                    <span title="Students">"👥 " {course.enrolled_students}</span>
                    <span title="Rating">"★ " {format!("{:.1}", course.rating)}</span>
                </div>
                <div class="muted">{format!("{} lessons", course.lessons.len())}</div>
            </div>
            <div class="card__footer course-card__actions">
                <EnrollmentButton course_id=course.id.clone()/>
                <a class="btn btn--outline btn--block" href=href>"View Details"</a>
            </div>
        </article>
    }
}
