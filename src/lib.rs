//! # Scholar Site
//!
//! A minimal static site generator for academic homepages. A single
//! `site.toml` describes the people, publications, courses and project pages;
//! the generator turns it into a home page plus one page per project.
//!
//! # Architecture: Load → Render → Write
//!
//! ```text
//! 1. Load     content/site.toml + config.toml  →  Site + SiteConfig
//! 2. Render   Site                             →  maud Markup (pure, no I/O)
//! 3. Write    Markup                           →  dist/index.html, dist/project/<id>/index.html
//! ```
//!
//! Rendering functions never touch the filesystem, so every fragment can be
//! unit-tested on its own. A full regeneration is cheap; there is no cache and
//! no incremental build.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`model`] | Content model: people, publications, courses, projects, icons |
//! | [`content`] | Loads and validates `site.toml` into the model |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`authors`] | Author-list formatting with joint-contribution suffixes |
//! | [`resource`] | Icon + link + label fragments and titled resource groups |
//! | [`generate`] | Home and project page composition, page writing |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Maud Over Template Engines
//!
//! HTML is built with [Maud](https://maud.lambda.xyz/) as a typed tree, not
//! by string concatenation. Interpolation is escaped by default; the only
//! unescaped inputs are venue strings and the markdown bio, both of which are
//! trusted content that intentionally carries markup.
//!
//! ## Explicit Ordering
//!
//! Publications, joint-contribution groups and courses are ordered lists in
//! `site.toml`. Display order is declaration order, never the iteration order
//! of some map.
//!
//! ## Configuration Is Injected
//!
//! Stylesheet lists, embed URL prefixes and the footer credit live in
//! [`config::SiteConfig`], which is passed into every renderer for the
//! duration of one run instead of being process-wide constants.

pub mod authors;
pub mod config;
pub mod content;
pub mod generate;
pub mod model;
pub mod output;
pub mod resource;

#[cfg(test)]
pub(crate) mod test_helpers;
