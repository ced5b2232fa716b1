//! Landing page: hero, headline figures, featured courses and recent posts.

use leptos::prelude::*;

use crate::components::blog_card::BlogCard;
use crate::components::course_card::CourseCard;
use crate::state::store::use_store;
use crate::util::catalog::published;

const FEATURED_COURSES: usize = 3;
const RECENT_POSTS: usize = 2;

#[component]
pub fn HomePage() -> impl IntoView {
    let store = use_store();
    let featured = move || store.with(|s| s.courses.iter().take(FEATURED_COURSES).cloned().collect::<Vec<_>>());
    let recent = move || store.with(|s| published(&s.blog_posts).take(RECENT_POSTS).cloned().collect::<Vec<_>>());
    let course_count = move || store.with(|s| s.courses.len());
    let student_count = move || store.with(|s| s.courses.iter().map(|c| u64::from(c.enrolled_students)).sum::<u64>());

    view! {
        <div class="page home">
            <section class="hero">
                <h1 class="hero__title">"Learn, Grow, and " <span class="text-primary">"Excel"</span></h1>
                <p class="hero__lead muted">
                    "Discover world-class courses and insightful articles from industry experts. "
                    "Start your learning journey today and unlock your potential."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary btn--lg" href="/courses">"Explore Courses"</a>
                    <a class="btn btn--outline btn--lg" href="/blog">"Read Blog →"</a>
                </div>
            </section>

            <section class="figures">
                <div class="figure">
                    <div class="figure__value">{move || format!("{}+", course_count())}</div>
                    <div class="muted">"Courses"</div>
                </div>
                <div class="figure">
                    <div class="figure__value">{student_count}</div>
                    <div class="muted">"Students"</div>
                </div>
            </section>

            <section class="section">
                <h2 class="section__title">"Featured Courses"</h2>
                <p class="section__lead muted">
                    "Discover our most popular courses, carefully selected to help you achieve your learning goals."
                </p>
                <Show
                    when=move || !featured().is_empty()
                    fallback=|| view! { <p class="muted">"No courses available yet."</p> }
                >
                    <div class="course-grid">
                        {move || featured().into_iter().map(|course| view! { <CourseCard course/> }).collect_view()}
                    </div>
                </Show>
                <a class="btn btn--outline" href="/courses">"View All Courses →"</a>
            </section>

            <section class="section">
                <h2 class="section__title">"Latest from Our Blog"</h2>
                <p class="section__lead muted">
                    "Stay updated with the latest trends, tips, and insights from our expert contributors."
                </p>
                <Show
                    when=move || !recent().is_empty()
                    fallback=|| view! { <p class="muted">"No blog posts available yet."</p> }
                >
                    <div class="post-grid">
                        {move || recent().into_iter().map(|post| view! { <BlogCard post/> }).collect_view()}
                    </div>
                </Show>
                <a class="btn btn--outline" href="/blog">"View All Posts →"</a>
            </section>

            <section class="cta">
                <h2>"Ready to Start Learning?"</h2>
                <p>"Join thousands of students who are already advancing their careers with our courses."</p>
                <div class="hero__actions">
                    <a class="btn btn--secondary btn--lg" href="/register">"Get Started Free"</a>
                    <a class="btn btn--outline btn--lg" href="/courses">"Browse Courses"</a>
                </div>
            </section>
        </div>
    }
}
