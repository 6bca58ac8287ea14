//! Terminal rendering of posts and tags.
use gelbooru_common::{post::Post, serde_json, tag::Tag};
use owo_colors::OwoColorize;

use crate::error::CliError;

pub fn print_posts(posts: &[Post], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(posts)?);
        return Ok(());
    }

    if posts.is_empty() {
        println!("{}", "No posts found".bold().blue());
        return Ok(());
    }

    for post in posts {
        println!("{}", post_line(post));

        let mut tags: Vec<&str> = post.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        println!("    {}", tags.join(" ").dimmed());
    }

    Ok(())
}

pub fn print_tags(tags: &[Tag], json: bool) -> Result<(), CliError> {
    if json {
        println!("{}", serde_json::to_string_pretty(tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("{}", "No tags found".bold().blue());
        return Ok(());
    }

    for tag in tags {
        let category = tag.category().unwrap_or_default();
        println!(
            "{:>10} {}{} {}",
            tag.count.to_string().bold(),
            tag.name_without_category(),
            category.dimmed(),
            format!("[{}]", tag.id).dimmed()
        );
    }

    Ok(())
}

fn post_line(post: &Post) -> String {
    format!(
        "{} {} {} {}",
        format!("#{}", post.id).bold().blue(),
        format!("[{}]", post.rating).bold(),
        format!("score {}", post.score).green(),
        post.url()
    )
}
