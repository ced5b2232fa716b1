//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::error_banner::ErrorBanner;
use crate::components::nav_bar::NavBar;
use crate::pages::admin::{
    blog::AdminBlogPage, comments::AdminCommentsPage, course_editor::CourseEditorPage, courses::AdminCoursesPage,
    enrollments::AdminEnrollmentsPage, overview::AdminOverviewPage, post_editor::PostEditorPage,
    users::AdminUsersPage,
};
use crate::pages::{
    blog::BlogPage, blog_post::BlogPostPage, course_detail::CourseDetailPage, courses::CoursesPage,
    dashboard::DashboardPage, home::HomePage, login::LoginPage, profile::ProfilePage, register::RegisterPage,
};
use crate::state::store::AppStore;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Load the session user and every collection the pages read. Users are
/// only listed for admins.
#[cfg(feature = "hydrate")]
async fn initial_load(store: AppStore) {
    use crate::net::api;
    use crate::net::types::Role;
    use crate::state::store::Action;

    store.dispatch(Action::SetLoading(true));
    let user = api::fetch_current_user().await;
    let is_admin = user.as_ref().is_some_and(|u| u.role == Role::Admin);
    store.dispatch(Action::SetUser(user));

    match api::fetch_courses().await {
        Ok(courses) => store.dispatch(Action::SetCourses(courses)),
        Err(e) => store.fail(e),
    }
    match api::fetch_posts().await {
        Ok(posts) => store.dispatch(Action::SetBlogPosts(posts)),
        Err(e) => store.fail(e),
    }
    match api::fetch_enrollments().await {
        Ok(items) => store.dispatch(Action::SetEnrollments(items)),
        Err(e) => store.fail(e),
    }
    match api::fetch_comments().await {
        Ok(comments) => store.dispatch(Action::SetComments(comments)),
        Err(e) => store.fail(e),
    }
    if is_admin {
        match api::fetch_users().await {
            Ok(users) => store.dispatch(Action::SetUsers(users)),
            Err(e) => store.fail(e),
        }
    }
    store.dispatch(Action::SetLoading(false));
    log::info!("initial data loaded");
}

/// Root application component.
///
/// Provides the store and UI state, starts the initial load in the browser
/// and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = AppStore::new();
    let ui = RwSignal::new(UiState::default());
    provide_context(store);
    provide_context(ui);

    #[cfg(feature = "hydrate")]
    {
        let theme = crate::util::dark_mode::load();
        crate::util::dark_mode::apply(theme);
        ui.update(|u| u.theme = theme);
        // Guards must not redirect before the session check has run.
        store.dispatch(crate::state::store::Action::SetLoading(true));
        leptos::task::spawn_local(initial_load(store));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/learnhub.css"/>
        <Title text="LearnHub"/>

        <Router>
            <NavBar/>
            <ErrorBanner/>
            <Routes fallback=|| view! { <div class="page page--centered">"Page not found."</div> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("courses") view=CoursesPage/>
                <Route path=(StaticSegment("courses"), ParamSegment("id")) view=CourseDetailPage/>
                <Route path=StaticSegment("blog") view=BlogPage/>
                <Route path=(StaticSegment("blog"), ParamSegment("id")) view=BlogPostPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("profile") view=ProfilePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("admin") view=AdminOverviewPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("courses")) view=AdminCoursesPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("courses"), StaticSegment("new"))
                    view=CourseEditorPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("courses"), ParamSegment("id"), StaticSegment("edit"))
                    view=CourseEditorPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("blog")) view=AdminBlogPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("blog"), StaticSegment("new"))
                    view=PostEditorPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("blog"), ParamSegment("id"), StaticSegment("edit"))
                    view=PostEditorPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("users")) view=AdminUsersPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("enrollments")) view=AdminEnrollmentsPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("comments")) view=AdminCommentsPage/>
            </Routes>
        </Router>
    }
}
