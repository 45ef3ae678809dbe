//! Resource (icon + link + label) rendering.
//!
//! One fragment shape is shared by the about-me panel, publication resource
//! rows and project resource lists; callers wrap it in whatever layout
//! container they need.

use crate::model::Resource;
use maud::{Markup, html};

/// Renders the icon marker (if any) followed by the label.
///
/// A non-empty `path` becomes the link target verbatim. An empty path gives
/// a plain, non-interactive label.
pub fn render_resource(resource: &Resource) -> Markup {
    html! {
        @if let Some(class) = resource.icon.css_class() {
            i class=(class) {}
            " "
        }
        @if resource.is_linked() {
            a href=(resource.path) { (resource.label) }
        } @else {
            span.resource-label { (resource.label) }
        }
    }
}

/// Renders a titled list of resources, or nothing at all for an empty slice.
pub fn render_resource_group(title: &str, resources: &[Resource]) -> Markup {
    html! {
        @if !resources.is_empty() {
            div.resource-group {
                h4 class="mt-4 font-weight-light" { (title) }
                @for resource in resources {
                    div class="container mt-1 mb-1" { (render_resource(resource)) }
                }
            }
        }
    }
}
