//! List posts

use anyhow::Result;

use crate::content::{Post, PostStore};
use crate::Postdesk;

/// Print every post, in store order
pub fn run(app: &Postdesk) -> Result<()> {
    let store = app.load_store()?;
    let posts = store.list();

    println!("Posts ({}):", posts.len());
    for post in &posts {
        println!("  {}", format_post(post));
    }

    Ok(())
}

/// One listing line: `id - date - title (author) [n comments]`
pub fn format_post(post: &Post) -> String {
    let comments = match post.comments.len() {
        1 => "1 comment".to_string(),
        n => format!("{} comments", n),
    };
    format!(
        "{} - {} - {} ({}) [{}]",
        post.id, post.date, post.title, post.author, comments
    )
}
