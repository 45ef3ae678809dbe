//! Author-list formatting for publications.
//!
//! Each author becomes one [`AuthorToken`]: the visible name (with any
//! joint-contribution suffix appended), how it is styled, and the separator
//! that follows it. [`render_author_list`] turns the tokens into markup.
//!
//! ## Punctuation
//!
//! ```text
//! 1 author    Chen
//! 2 authors   Chen and Miller
//! 3+ authors  Chen, Miller, and Gkioulekas
//! ```
//!
//! Two authors never get a comma before "and"; three or more always do.
//!
//! ## Joint contribution
//!
//! Groups are scanned in declaration order and the **last** group containing
//! an author supplies the suffix. Members that are not among the authors are
//! ignored here (the loader reports them as configuration errors).

use crate::model::{Person, Publication};
use maud::{Markup, html};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorStyle {
    /// The page owner.
    Bold,
    Link(String),
    Plain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorToken {
    /// Name plus joint-contribution suffix.
    pub display: String,
    pub style: AuthorStyle,
    /// Text emitted after this name; empty for the last author.
    pub separator: &'static str,
}

/// Joint-contribution suffix for `person`, or `""` when it has none.
pub fn author_suffix<'a>(publication: &'a Publication, person: &Person) -> &'a str {
    let mut suffix = "";
    for group in &publication.joint_groups {
        if group.members.iter().any(|id| *id == person.id) {
            suffix = group.suffix.as_str();
        }
    }
    suffix
}

fn style_for(person: &Person) -> AuthorStyle {
    if person.is_self {
        return AuthorStyle::Bold;
    }
    match person.homepage_url.as_deref() {
        Some(url) if !url.trim().is_empty() => AuthorStyle::Link(url.to_string()),
        _ => AuthorStyle::Plain,
    }
}

/// Separator following author `index` in a list of `count`.
fn separator(index: usize, count: usize) -> &'static str {
    if index + 1 == count {
        ""
    } else if index + 2 == count {
        if count == 2 { " and " } else { ", and " }
    } else {
        ", "
    }
}

pub fn resolve_authors(publication: &Publication) -> Vec<AuthorToken> {
    let count = publication.authors.len();
    publication
        .authors
        .iter()
        .enumerate()
        .map(|(i, person)| AuthorToken {
            display: format!("{}{}", person.name, author_suffix(publication, person)),
            style: style_for(person),
            separator: separator(i, count),
        })
        .collect()
}

/// Renders the author line. Zero authors render as empty markup.
pub fn render_author_list(publication: &Publication) -> Markup {
    html! {
        @for token in resolve_authors(publication) {
            @match &token.style {
                AuthorStyle::Bold => b { (token.display) },
                AuthorStyle::Link(url) => a href=(url) { (token.display) },
                AuthorStyle::Plain => span.author { (token.display) },
            }
            (token.separator)
        }
    }
}
