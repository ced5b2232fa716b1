//! Application store: every domain collection plus load/error flags.
//!
//! DESIGN
//! ======
//! `reduce` is the only mutation path. It is pure: it takes the current
//! state and one `Action` and returns the next state with exactly one
//! collection or flag replaced. Updates are full replacements matched by id,
//! never patches.
//!
//! `AppStore` wraps the state in a signal. The root `App` creates it once and
//! provides it through context; there is no global instance.
//!
//! CONSISTENCY
//! ===========
//! No action spans two collections. Enrolling is an `AddEnrollment` followed
//! by a separate `UpdateCourse`; if the second never happens the course's
//! `enrolled_students` stays stale.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use leptos::prelude::*;

use crate::net::types::{BlogPost, Comment, Course, Enrollment, User};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AppState {
    /// Signed-in user, if any.
    pub user: Option<User>,
    pub users: Vec<User>,
    pub courses: Vec<Course>,
    pub enrollments: Vec<Enrollment>,
    pub blog_posts: Vec<BlogPost>,
    pub comments: Vec<Comment>,
    pub loading: bool,
    /// Most recent error; a new one overwrites it.
    pub error: Option<String>,
}

/// One requested state transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    SetUser(Option<User>),

    SetUsers(Vec<User>),
    AddUser(User),
    UpdateUser(User),
    DeleteUser(String),

    SetCourses(Vec<Course>),
    AddCourse(Course),
    UpdateCourse(Course),
    DeleteCourse(String),

    SetEnrollments(Vec<Enrollment>),
    AddEnrollment(Enrollment),
    UpdateEnrollment(Enrollment),
    DeleteEnrollment(String),

    SetBlogPosts(Vec<BlogPost>),
    AddBlogPost(BlogPost),
    UpdateBlogPost(BlogPost),
    DeleteBlogPost(String),

    SetComments(Vec<Comment>),
    AddComment(Comment),
    UpdateComment(Comment),
    DeleteComment(String),

    SetLoading(bool),
    SetError(Option<String>),
}

/// Records addressed by id for update/delete.
trait Keyed {
    fn key(&self) -> &str;
}

macro_rules! keyed {
    ($($ty:ty),*) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.id
            }
        })*
    };
}

keyed!(User, Course, Enrollment, BlogPost, Comment);

fn replaced<T: Keyed + Clone>(items: &[T], record: T) -> Vec<T> {
    items
        .iter()
        .map(|item| if item.key() == record.key() { record.clone() } else { item.clone() })
        .collect()
}

fn without<T: Keyed + Clone>(items: &[T], id: &str) -> Vec<T> {
    items.iter().filter(|item| item.key() != id).cloned().collect()
}

fn with_added<T: Clone>(items: &[T], record: T) -> Vec<T> {
    let mut next = items.to_vec();
    next.push(record);
    next
}

/// Pure transition function.
#[must_use]
pub fn reduce(state: &AppState, action: Action) -> AppState {
    let mut next = state.clone();
    match action {
        Action::SetUser(user) => next.user = user,

        Action::SetUsers(users) => next.users = users,
        Action::AddUser(user) => next.users = with_added(&state.users, user),
        Action::UpdateUser(user) => {
            // The signed-in user's own record is mirrored into `user`.
            if state.user.as_ref().is_some_and(|current| current.id == user.id) {
                next.user = Some(user.clone());
            }
            next.users = replaced(&state.users, user);
        }
        Action::DeleteUser(id) => next.users = without(&state.users, &id),

        Action::SetCourses(courses) => next.courses = courses,
        Action::AddCourse(course) => next.courses = with_added(&state.courses, course),
        Action::UpdateCourse(course) => next.courses = replaced(&state.courses, course),
        Action::DeleteCourse(id) => next.courses = without(&state.courses, &id),

        Action::SetEnrollments(items) => next.enrollments = items,
        Action::AddEnrollment(item) => next.enrollments = with_added(&state.enrollments, item),
        Action::UpdateEnrollment(item) => next.enrollments = replaced(&state.enrollments, item),
        Action::DeleteEnrollment(id) => next.enrollments = without(&state.enrollments, &id),

        Action::SetBlogPosts(posts) => next.blog_posts = posts,
        Action::AddBlogPost(post) => next.blog_posts = with_added(&state.blog_posts, post),
        Action::UpdateBlogPost(post) => next.blog_posts = replaced(&state.blog_posts, post),
        Action::DeleteBlogPost(id) => next.blog_posts = without(&state.blog_posts, &id),

        Action::SetComments(comments) => next.comments = comments,
        Action::AddComment(comment) => next.comments = with_added(&state.comments, comment),
        Action::UpdateComment(comment) => next.comments = replaced(&state.comments, comment),
        Action::DeleteComment(id) => next.comments = without(&state.comments, &id),

        Action::SetLoading(loading) => next.loading = loading,
        Action::SetError(error) => next.error = error,
    }
    next
}

// =============================================================================
// STORE HANDLE
// =============================================================================

/// Copyable handle to the reactive store.
#[derive(Clone, Copy, Debug)]
pub struct AppStore {
    state: RwSignal<AppState>,
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AppStore {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RwSignal::new(AppState::default()) }
    }

    /// Apply one action.
    pub fn dispatch(&self, action: Action) {
        self.state.update(|state| *state = reduce(state, action));
    }

    /// Tracked read of a projection of the state.
    pub fn with<T>(&self, f: impl FnOnce(&AppState) -> T) -> T {
        self.state.with(f)
    }

    /// Untracked snapshot, for event handlers.
    #[must_use]
    pub fn get_untracked(&self) -> AppState {
        self.state.get_untracked()
    }

    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.with(|s| s.user.clone())
    }

    /// Record a handler failure for the error banner.
    pub fn fail(&self, message: impl Into<String>) {
        self.dispatch(Action::SetError(Some(message.into())));
    }
}

/// The store provided by the root component.
#[must_use]
pub fn use_store() -> AppStore {
    expect_context::<AppStore>()
}
