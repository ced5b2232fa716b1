//! Enroll action and enrollment status for one course.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server creates the enrollment and bumps the course counter in one
//! transaction and returns both records. The store receives them as two
//! separate dispatches, enrollment first.

use leptos::prelude::*;

use crate::net::types::EnrollmentStatus;
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::use_store;
use crate::util::stats::find_enrollment;

#[component]
pub fn EnrollmentButton(#[prop(into)] course_id: String) -> impl IntoView {
    let store = use_store();
    let busy = RwSignal::new(false);
    let course_id = StoredValue::new(course_id);

    let enrollment = move || {
        store.with(|s| {
            let user = s.user.as_ref()?;
            course_id.with_value(|id| find_enrollment(&s.enrollments, &user.id, id).cloned())
        })
    };

    let on_enroll = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let id = course_id.get_value();
            leptos::task::spawn_local(async move {
                match crate::net::api::enroll(&id).await {
                    Ok(response) => {
                        log::info!("enrolled in course {id}");
                        store.dispatch(Action::AddEnrollment(response.enrollment));
                        store.dispatch(Action::UpdateCourse(response.course));
                    }
                    Err(e) => {
                        crate::util::dialog::alert(&e);
                        store.fail(e);
                    }
                }
                busy.set(false);
            });
        }
    };

    move || {
        if store.with(|s| s.user.is_none()) {
            return view! { <a class="btn btn--outline btn--block" href="/login">"Login to Enroll"</a> }.into_any();
        }
        match enrollment() {
            Some(e) => {
                let done = e.status == EnrollmentStatus::Completed;
                view! {
                    <div class="enrollment">
                        <div class="enrollment__status">
                            <span class=if done { "badge badge--success" } else { "badge badge--secondary" }>
                                {if done { "Completed" } else { "Enrolled" }}
                            </span>
                            <span class="muted">{format!("{}%", e.progress)}</span>
                        </div>
                        {(!done).then(|| view! {
                            <div class="progress">
                                <div class="progress__bar" style=format!("width:{}%;", e.progress.min(100))></div>
                            </div>
                        })}
                    </div>
                }
                .into_any()
            }
            None => view! {
                <button class="btn btn--primary btn--block" disabled=move || busy.get() on:click=on_enroll>
                    {move || if busy.get() { "Enrolling..." } else { "Enroll Now" }}
                </button>
            }
            .into_any(),
        }
    }
}
