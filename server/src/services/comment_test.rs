use super::*;

use time::macros::datetime;

fn comment(parent_id: Option<Uuid>) -> Comment {
    Comment {
        id: Uuid::new_v4(),
        post_id: Uuid::new_v4(),
        user_id: Uuid::new_v4(),
        user_name: "Alice Johnson".to_owned(),
        user_avatar: None,
        content: "Great article!".to_owned(),
        parent_id,
        created_at: datetime!(2024-03-02 10:00 UTC),
        updated_at: datetime!(2024-03-02 10:00 UTC),
    }
}

#[test]
fn reply_to_top_level_attaches_to_it() {
    let root = comment(None);
    assert_eq!(thread_root(&root), root.id);
}

#[test]
fn reply_to_reply_is_flattened_to_root() {
    let root_id = Uuid::new_v4();
    let reply = comment(Some(root_id));
    assert_eq!(thread_root(&reply), root_id);
}

#[test]
fn blank_content_is_rejected() {
    let errors = validate_content("   ").unwrap_err();
    assert_eq!(errors[0].message, "Content is required");
}

#[test]
fn content_length_limit_counts_chars() {
    assert!(validate_content(&"é".repeat(2000)).is_ok());
    assert!(validate_content(&"a".repeat(2001)).is_err());
}

#[cfg(feature = "live-db-tests")]
#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL/live Postgres"]
async fn replies_flatten_and_cascade() {
    use crate::services::blog::{PostInput, create_post};
    use crate::services::user::Role;
    use crate::state::test_helpers::{insert_user, integration_pool};

    let pool = integration_pool().await;
    let author = insert_user(&pool, "john@example.com", Role::Admin).await;
    let reader = insert_user(&pool, "bob@example.com", Role::Student).await;
    let post = create_post(
        &pool,
        &author,
        PostInput {
            title: "The Future of Web Development".to_owned(),
            content: "Web development continues to evolve.".to_owned(),
            excerpt: "Trends".to_owned(),
            author: None,
            thumbnail: None,
            category: "Technology".to_owned(),
            tags: vec!["web".to_owned()],
            is_published: true,
        },
    )
    .await
    .expect("create post");

    let input = |content: &str, parent_id| CommentInput { content: content.to_owned(), parent_id };
    let root = create_comment(&pool, &reader, post.id, input("Great article!", None)).await.expect("root");
    let reply = create_comment(&pool, &author, post.id, input("Thanks!", Some(root.id))).await.expect("reply");
    let nested = create_comment(&pool, &reader, post.id, input("You're welcome", Some(reply.id)))
        .await
        .expect("nested");
    assert_eq!(reply.parent_id, Some(root.id));
    assert_eq!(nested.parent_id, Some(root.id));
    assert_eq!(root.user_name, "bob");

    let foreign = update_comment(&pool, &reader, post.id, reply.id, "edited").await;
    assert!(matches!(foreign, Err(CommentError::Forbidden)));

    delete_comment(&pool, &reader, post.id, root.id).await.expect("delete root");
    assert!(list_for_post(&pool, post.id).await.expect("list").is_empty());
}
