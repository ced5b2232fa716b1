//! Comments for one post, with one level of replies.
//!
//! SYSTEM CONTEXT
//! ==============
//! Comments come from the store. Each render builds a `CommentTree` for the
//! post; top-level comments list their replies beneath them. New comments
//! and replies are posted to the server and the stored copy is added on
//! success.

use leptos::prelude::*;

use crate::components::user_avatar::{AvatarSize, UserAvatar};
use crate::net::types::Comment;
#[cfg(feature = "hydrate")]
use crate::net::types::CommentDraft;
#[cfg(feature = "hydrate")]
use crate::state::store::Action;
use crate::state::store::{AppStore, use_store};
use crate::util::auth::can_moderate;
use crate::util::comment_tree::CommentTree;
use crate::util::format::short_datetime;

#[component]
pub fn CommentSection(#[prop(into)] post_id: String) -> impl IntoView {
    let store = use_store();
    let post_id = StoredValue::new(post_id);
    let draft = RwSignal::new(String::new());
    let replying_to = RwSignal::new(None::<String>);
    let reply_text = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let count = move || store.with(|s| post_id.with_value(|id| CommentTree::build(&s.comments, id).len()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get_untracked().trim().to_owned();
        if content.is_empty() || store.current_user().is_none() {
            return;
        }
        post_comment(store, post_id.get_value(), content, None, busy, move || draft.set(String::new()));
    };

    let on_reply = Callback::new(move |parent_id: String| {
        let content = reply_text.get_untracked().trim().to_owned();
        if content.is_empty() {
            return;
        }
        post_comment(store, post_id.get_value(), content, Some(parent_id), busy, move || {
            reply_text.set(String::new());
            replying_to.set(None);
        });
    });

    let threads = move || {
        store.with(|s| {
            post_id.with_value(|id| {
                let tree = CommentTree::build(&s.comments, id);
                tree.roots()
                    .iter()
                    .map(|root| {
                        let replies: Vec<Comment> = tree.replies_to(&root.id).iter().map(|c| (*c).clone()).collect();
                        ((*root).clone(), replies)
                    })
                    .collect::<Vec<_>>()
            })
        })
    };

    view! {
        <section class="card comments">
            <div class="card__header">
                <h2 class="card__title">{move || format!("Comments ({})", count())}</h2>
            </div>
            <div class="card__content">
                {move || match store.current_user() {
                    Some(user) => view! {
                        <form class="comments__form" on:submit=on_submit>
                            <UserAvatar name=user.name.clone() src=user.avatar.clone().unwrap_or_default() size=AvatarSize::Sm/>
                            <textarea
                                class="input input--area"
                                placeholder="Share your thoughts..."
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                class="btn btn--primary"
                                type="submit"
                                disabled=move || busy.get() || draft.get().trim().is_empty()
                            >
                                {move || if busy.get() { "Posting..." } else { "Post Comment" }}
                            </button>
                        </form>
                    }
                    .into_any(),
                    None => view! {
                        <p class="comments__signin muted">
                            <a href="/login">"Sign in"</a>
                            " to join the discussion."
                        </p>
                    }
                    .into_any(),
                }}
                <Show
                    when=move || { count() > 0 }
                    fallback=|| view! { <p class="comments__empty muted">"No comments yet. Be the first to share your thoughts!"</p> }
                >
                    {move || {
                        threads()
                            .into_iter()
                            .map(|(root, replies)| {
                                let root_id = root.id.clone();
                                let reply_target = root.id.clone();
                                view! {
                                    <div class="comments__thread">
                                        <CommentItem comment=root replying_to=replying_to/>
                                        <div class="comments__replies">
                                            {replies
                                                .into_iter()
                                                .map(|reply| view! { <CommentItem comment=reply is_reply=true replying_to=replying_to/> })
                                                .collect_view()}
                                        </div>
                                        <Show when=move || replying_to.get().as_deref() == Some(root_id.as_str())>
                                            <ReplyBox text=reply_text busy=busy parent_id=reply_target.clone() on_reply=on_reply cancel=replying_to/>
                                        </Show>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </div>
        </section>
    }
}

#[component]
fn CommentItem(comment: Comment, #[prop(optional)] is_reply: bool, replying_to: RwSignal<Option<String>>) -> impl IntoView {
    let store = use_store();
    let owner = comment.user_id.clone();
    let can_delete = move || store.with(|s| can_moderate(s.user.as_ref(), &owner));
    let signed_in = move || store.with(|s| s.user.is_some());
    let id = StoredValue::new(comment.id.clone());
    let post_id = StoredValue::new(comment.post_id.clone());

    let on_delete = move |_| {
        if !crate::util::dialog::confirm("Are you sure you want to delete this comment?") {
            return;
        }
        remove_comment(store, post_id.get_value(), id.get_value());
    };

    view! {
        <div class="comment" class:comment--reply=is_reply>
            <UserAvatar name=comment.user_name.clone() src=comment.user_avatar.clone().unwrap_or_default() size=AvatarSize::Sm/>
            <div class="comment__body">
                <div class="comment__meta">
                    <span class="comment__author">{comment.user_name.clone()}</span>
                    <span class="muted">{short_datetime(comment.created_at)}</span>
                </div>
                <p class="comment__content">{comment.content.clone()}</p>
                <div class="comment__actions">
                    {(!is_reply).then(|| view! {
                        <Show when=signed_in>
                            <button class="btn btn--ghost btn--sm" on:click=move |_| replying_to.set(Some(id.get_value()))>
                                "Reply"
                            </button>
                        </Show>
                    })}
                    <Show when=can_delete>
                        <button class="btn btn--ghost btn--sm btn--danger" on:click=on_delete>"Delete"</button>
                    </Show>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ReplyBox(
    text: RwSignal<String>,
    busy: RwSignal<bool>,
    parent_id: String,
    on_reply: Callback<String>,
    cancel: RwSignal<Option<String>>,
) -> impl IntoView {
    let parent_id = StoredValue::new(parent_id);
    view! {
        <div class="comments__reply-box">
            <textarea
                class="input input--area"
                placeholder="Write a reply..."
                prop:value=move || text.get()
                on:input=move |ev| text.set(event_target_value(&ev))
            ></textarea>
            <div class="comments__reply-actions">
                <button
                    class="btn btn--primary btn--sm"
                    disabled=move || busy.get() || text.get().trim().is_empty()
                    on:click=move |_| on_reply.run(parent_id.get_value())
                >
                    "Reply"
                </button>
                <button
                    class="btn btn--ghost btn--sm"
                    on:click=move |_| {
                        cancel.set(None);
                        text.set(String::new());
                    }
                >
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

fn post_comment(
    store: AppStore,
    post_id: String,
    content: String,
    parent_id: Option<String>,
    busy: RwSignal<bool>,
    on_done: impl FnOnce() + 'static,
) {
    busy.set(true);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::add_comment(&post_id, &CommentDraft { content, parent_id }).await {
            Ok(comment) => {
                store.dispatch(Action::AddComment(comment));
                on_done();
            }
            Err(e) => {
                crate::util::dialog::alert(&e);
                store.fail(e);
            }
        }
        busy.set(false);
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, post_id, content, parent_id, on_done);
    }
}

fn remove_comment(store: AppStore, post_id: String, comment_id: String) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match crate::net::api::delete_comment(&post_id, &comment_id).await {
            Ok(()) => store.dispatch(Action::DeleteComment(comment_id)),
            Err(e) => {
                crate::util::dialog::alert(&e);
                store.fail(e);
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (store, post_id, comment_id);
    }
}
