//! HTML page generation.
//!
//! Takes a loaded [`Site`] and writes the final static HTML.
//!
//! ## Generated Pages
//!
//! - **Home page** (`/index.html`): about-me header, bio, optional music
//!   gallery, publication cards, teaching list, footer
//! - **Project pages** (`/project/{id}/index.html`): one per configured
//!   project, paired with the publication of the same id
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! ├── index.html
//! └── project/
//!     └── dipole-sums/
//!         └── index.html
//! ```
//!
//! Stylesheets are referenced, never written. Their hrefs come from
//! [`SiteConfig::stylesheet_hrefs`] and are adjusted for page depth, so the
//! assets directory must be deployed next to `index.html`.
//!
//! ## Project Page Sections
//!
//! After the title block, sections appear in a fixed order and each one is
//! dropped entirely (heading included) when it has no content:
//!
//! ```text
//! Abstract → Resources → Videos → Cite → Acknowledgements
//! ```
//!
//! ## HTML Generation
//!
//! Uses [maud](https://maud.lambda.xyz/) for compile-time HTML templating.
//! Everything is escaped except two trusted inputs: venue strings (which
//! carry inline badges) and the bio, which is markdown rendered with
//! pulldown-cmark.

use crate::authors::render_author_list;
use crate::config::SiteConfig;
use crate::model::{
    Course, HomePage, Icon, Project, ProjectResources, Publication, Resource, Site, Video,
};
use crate::resource::{render_resource, render_resource_group};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no publication with id '{0}' to pair the project page with")]
    MissingPublication(String),
    #[error("{0} page(s) failed to generate")]
    PagesFailed(usize),
}

const COPY_JS: &str = include_str!("../static/copy.js");
const GALLERY_CSS: &str = include_str!("../static/gallery.css");

/// Project pages live at `project/<id>/`, two levels below the root.
pub const PROJECT_DEPTH: usize = 2;

/// A page that was written successfully.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedPage {
    pub id: String,
    pub title: String,
    /// Relative to the output root.
    pub path: PathBuf,
}

/// A project page that could not be written.
#[derive(Debug)]
pub struct PageFailure {
    pub id: String,
    pub error: GenerateError,
}

/// Outcome of one generation run.
#[derive(Debug)]
pub struct GenerateReport {
    pub output_dir: PathBuf,
    pub home: PathBuf,
    pub projects: Vec<GeneratedPage>,
    pub failures: Vec<PageFailure>,
}

impl GenerateReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Render and write the whole site.
///
/// The home page is written first and any failure there aborts the run.
/// Project pages are independent: a failing one, including a project with no
/// publication of the same id, is recorded in the report and the rest are
/// still written.
pub fn generate(
    site: &Site,
    output_dir: &Path,
    config: &SiteConfig,
) -> Result<GenerateReport, GenerateError> {
    let home = PathBuf::from("index.html");
    write_page(render_home_page(&site.home, config), &output_dir.join(&home))?;

    let mut projects = Vec::new();
    let mut failures = Vec::new();
    for project in &site.projects {
        let Some(publication) = site.publication(&project.id) else {
            failures.push(PageFailure {
                id: project.id.clone(),
                error: GenerateError::MissingPublication(project.id.clone()),
            });
            continue;
        };
        let path = project_page_path(&project.id);
        match render_project_page_to(project, publication, &output_dir.join(&path), config) {
            Ok(()) => projects.push(GeneratedPage {
                id: project.id.clone(),
                title: publication.title.clone(),
                path,
            }),
            Err(error) => failures.push(PageFailure {
                id: project.id.clone(),
                error,
            }),
        }
    }

    Ok(GenerateReport {
        output_dir: output_dir.to_path_buf(),
        home,
        projects,
        failures,
    })
}

/// Path of a project page relative to the output root.
pub fn project_page_path(id: &str) -> PathBuf {
    Path::new("project").join(id).join("index.html")
}

/// Write a rendered document, creating its parent directory if needed.
pub fn write_page(page: Markup, path: &Path) -> Result<(), GenerateError> {
    let wrap = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(wrap)?;
    }
    fs::write(path, page.into_string()).map_err(wrap)
}

/// Render a project page and write it to `path`.
pub fn render_project_page_to(
    project: &Project,
    publication: &Publication,
    path: &Path,
    config: &SiteConfig,
) -> Result<(), GenerateError> {
    write_page(render_project_page(project, publication, config), path)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(title: &str, stylesheets: &[String], content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                @for href in stylesheets {
                    link rel="stylesheet" type="text/css" href=(href);
                }
                title { (title) }
            }
            body {
                (content)
            }
        }
    }
}

/// Photo, name and contact links at the top of the home page.
fn about_me_section(home: &HomePage) -> Markup {
    let about = &home.about_me;
    html! {
        div.container {
            div class="d-flex pl-5 pt-5 justify-content-start" {
                div {
                    img #profile-pic .float-left
                        src=(about.photo)
                        title=[about.photo_title.as_deref()]
                        alt=(about.photo_alt.as_deref().unwrap_or(&about.name));
                }
                div.col {
                    div class="d-block profile-row" {
                        h1.name { (about.name) }
                    }
                    @for resource in &about.resources {
                        div class="d-block profile-row" { (render_resource(resource)) }
                    }
                }
            }
        }
    }
}

/// Markdown bio. Blank input renders nothing.
fn render_bio(markdown: &str) -> Markup {
    if markdown.trim().is_empty() {
        return html! {};
    }
    let parser = Parser::new(markdown);
    let mut body_html = String::new();
    md_html::push_html(&mut body_html, parser);
    html! {
        div.bio { (PreEscaped(body_html)) }
    }
}

/// Left/right margins of one music-gallery cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackMargins {
    pub left: &'static str,
    pub right: &'static str,
}

const TRACKS_PER_ROW: usize = 3;
const TRACK_GAP: &str = "4px";

/// Cells at the start of a row have no left margin, cells at the end of a
/// full row have no right margin.
pub fn track_margins(index: usize) -> TrackMargins {
    let column = index % TRACKS_PER_ROW;
    TrackMargins {
        left: if column == 0 { "0" } else { TRACK_GAP },
        right: if column == TRACKS_PER_ROW - 1 { "0" } else { TRACK_GAP },
    }
}

/// Collapsible grid of embedded music players, three per row.
fn music_gallery(tracks: &[String], config: &SiteConfig) -> Markup {
    if !config.music.enabled || tracks.is_empty() {
        return html! {};
    }
    html! {
        style { (PreEscaped(GALLERY_CSS)) }
        details.music-gallery {
            summary.music-toggle {
                span.music-toggle-indicator { "▶" }
                " Music"
            }
            @for (row, chunk) in tracks.chunks(TRACKS_PER_ROW).enumerate() {
                div.music-row {
                    @for (column, track) in chunk.iter().enumerate() {
                        @let margins = track_margins(row * TRACKS_PER_ROW + column);
                        iframe.music-item
                            src={ (config.music.embed_base) (track) }
                            style={ "margin-left: " (margins.left) "; margin-right: " (margins.right) ";" }
                            loading="lazy"
                            allow="autoplay; clipboard-write; encrypted-media" {}
                    }
                }
            }
        }
    }
}

/// One publication card: thumbnail, title, authors, venue, resource row.
fn publication_card(publication: &Publication) -> Markup {
    html! {
        div.publication-card {
            div class="d-flex flex-row pb-4" {
                img.publication-thumbnail.img-responsive.img-thumbnail
                    src=(publication.thumbnail)
                    alt=(publication.title);
                div class="d-flex flex-column pl-4" {
                    h5 { (publication.title) }
                    div.authors { (render_author_list(publication)) }
                    div.venue { (PreEscaped(&publication.venue)) }
                    div class="d-flex flex-row justify-content-start pt-2" {
                        @for resource in &publication.resources {
                            div class="pr-3" { (render_resource(resource)) }
                        }
                    }
                }
            }
        }
    }
}

/// "Role, Fall 2024, Spring 2023" with linked semesters where a syllabus exists.
fn teaching_entry(course: &Course) -> Markup {
    let last = course.semesters.len().saturating_sub(1);
    html! {
        li.teaching-entry {
            div class="d-flex flex-row pb-4" {
                div class="d-flex flex-column pl-4" {
                    div.course-name { (course.name) }
                    div.course-terms {
                        (course.role) ", "
                        @for (i, semester) in course.semesters.iter().enumerate() {
                            @let trailing = if i == last { "" } else { ", " };
                            @if semester.is_linked() {
                                a href=(semester.path) { (semester.label) (trailing) }
                            } @else {
                                (semester.label) (trailing)
                            }
                        }
                    }
                }
            }
        }
    }
}

fn footer(config: &SiteConfig) -> Markup {
    let credit = &config.footer;
    let has_link = !credit.credit_name.is_empty() && !credit.credit_url.is_empty();
    html! {
        div.faux-footer {}
        div.bottom-centered {
            (credit.credit_text)
            @if has_link {
                br;
                a href=(credit.credit_url) { (credit.credit_name) }
                "."
            }
        }
    }
}

/// A titled project-page section.
fn section(name: &str, content: Markup) -> Markup {
    html! {
        div.project-section {
            h2 class="mt-4 font-weight-normal" { (name) }
            hr;
            (content)
        }
    }
}

fn present(text: Option<&str>) -> Option<&str> {
    text.filter(|t| !t.trim().is_empty())
}

fn abstract_section(text: Option<&str>) -> Markup {
    match present(text) {
        Some(text) => section("Abstract", html! { p { (text) } }),
        None => html! {},
    }
}

/// Publication links then code links; omitted only when both are empty.
fn resources_section(resources: &ProjectResources) -> Markup {
    if resources.is_empty() {
        return html! {};
    }
    section(
        "Resources",
        html! {
            (render_resource_group("Publication", &resources.publication))
            (render_resource_group("Code", &resources.code))
        },
    )
}

fn videos_section(videos: &[Video], config: &SiteConfig) -> Markup {
    if videos.is_empty() {
        return html! {};
    }
    section(
        "Videos",
        html! {
            div.container {
                @for video in videos {
                    div.img-container {
                        h4.font-weight-light { (video.label) }
                        iframe class="embed-responsive-item project-video"
                            src={ (config.video.embed_base) (video.video_id) }
                            allowfullscreen {}
                    }
                }
            }
        },
    )
}

fn citation_section(citation: Option<&str>) -> Markup {
    let Some(citation) = present(citation) else {
        return html! {};
    };
    section(
        "Cite",
        html! {
            div.code-background {
                button.code-copy-btn type="button" title="Copy to clipboard" onclick="copyCitation()" {
                    i class=[Icon::Copy.css_class()] {}
                }
                pre #citation-to-copy { (citation) }
            }
            script { (PreEscaped(COPY_JS)) }
        },
    )
}

fn acknowledgements_section(text: Option<&str>) -> Markup {
    match present(text) {
        Some(text) => section("Acknowledgements", html! { p { (text) } }),
        None => html! {},
    }
}

// ============================================================================
// Page Renderers
// ============================================================================

/// Renders the home page.
pub fn render_home_page(home: &HomePage, config: &SiteConfig) -> Markup {
    let content = html! {
        (about_me_section(home))
        div.container {
            div class="d-flex flex-column pl-5 pt-3" {
                (render_bio(&home.bio))
                (music_gallery(&home.music, config))
                div #publications class="pt-2" {
                    h3 { "Publications" }
                    hr;
                    div #publications-list class="pt-1" {
                        @for publication in &home.publications {
                            (publication_card(publication))
                        }
                    }
                }
                div #teaching {
                    h3 { "Teaching" }
                    hr;
                    ul {
                        @for course in &home.courses {
                            (teaching_entry(course))
                        }
                    }
                }
            }
            (footer(config))
        }
    };

    base_document(&home.about_me.name, &config.stylesheet_hrefs(0), content)
}

/// Renders a project page for `publication`.
pub fn render_project_page(
    project: &Project,
    publication: &Publication,
    config: &SiteConfig,
) -> Markup {
    let home_link = Resource::new(Icon::BackArrow, "../../", "home");
    let content = html! {
        div.container {
            nav class="navbar navbar-expand-lg" {
                div.container-fluid {
                    ul class="navbar-nav ml-auto" {
                        li.nav-item { (render_resource(&home_link)) }
                    }
                }
            }
            h1 class="card-title font-weight-normal" { (publication.title) }
            h5.font-weight-light { (render_author_list(publication)) }
            img class="card-img-top mt-3"
                src=(project.hero_image)
                alt={ (publication.title) "-teaser" };
            p class="font-italic mt-2" { (project.hero_caption) }
            (abstract_section(project.abstract_text.as_deref()))
            (resources_section(&project.resources))
            (videos_section(&project.videos, config))
            (citation_section(project.citation.as_deref()))
            (acknowledgements_section(project.acknowledgements.as_deref()))
        }
    };

    base_document(
        &publication.title,
        &config.stylesheet_hrefs(PROJECT_DEPTH),
        content,
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::*;
    use tempfile::TempDir;

    fn config() -> SiteConfig {
        SiteConfig::default()
    }

    fn sample_home() -> HomePage {
        let mut bo = person("bo", "Bo");
        bo.homepage_url = Some("https://bo.example".into());
        home_with(
            vec![publication_with(vec![self_person("ada", "Ada"), bo], vec![])],
            vec![course("Rendering (CS 468)", &[("Spring 2023", "https://cs.example/468")])],
        )
    }

    // =========================================================================
    // Home page
    // =========================================================================

    #[test]
    fn base_document_includes_doctype() {
        let doc = base_document("T", &[], html! { p { "x" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
    }

    #[test]
    fn home_title_is_owner_name() {
        let html = render_home_page(&sample_home(), &config()).into_string();
        assert!(html.contains("<title>Ada Lovelace</title>"));
    }

    #[test]
    fn home_links_stylesheets_in_order() {
        let html = render_home_page(&sample_home(), &config()).into_string();
        assert_eq!(html.matches(r#"rel="stylesheet""#).count(), 3);
        assert_in_order(
            &html,
            &[
                r#"href="assets/font-awesome/css/font-awesome.css""#,
                r#"href="assets/bootstrap.min.css""#,
                r#"href="assets/style.css""#,
            ],
        );
    }

    #[test]
    fn home_sections_in_fixed_order() {
        let mut home = sample_home();
        home.music = vec!["track1".into()];
        let html = render_home_page(&home, &config()).into_string();
        assert_in_order(
            &html,
            &[
                "<head>",
                "profile-pic",
                r#"class="bio""#,
                "music-gallery",
                "<h3>Publications</h3>",
                "<h3>Teaching</h3>",
                "bottom-centered",
            ],
        );
    }

    #[test]
    fn one_publication_and_one_course() {
        let html = render_home_page(&sample_home(), &config()).into_string();
        assert_eq!(html.matches(r#"class="publication-card""#).count(), 1);
        assert_eq!(html.matches(r#"class="teaching-entry""#).count(), 1);
    }

    #[test]
    fn publications_render_in_sequence_order() {
        let mut first = publication_with(vec![self_person("a", "A")], vec![]);
        first.title = "Zebra Paper".into();
        let mut second = publication_with(vec![self_person("a", "A")], vec![]);
        second.title = "Aardvark Paper".into();
        let home = home_with(vec![first, second], vec![]);
        let html = render_home_page(&home, &config()).into_string();
        assert_in_order(&html, &["Zebra Paper", "Aardvark Paper"]);
    }

    #[test]
    fn publication_card_contents() {
        let html = render_home_page(&sample_home(), &config()).into_string();
        assert!(html.contains(r#"src="thumb.png""#));
        assert!(html.contains("<h5>A Paper</h5>"));
        assert!(html.contains(r#"<b>Ada</b> and <a href="https://bo.example">Bo</a>"#));
        assert!(html.contains(r#"<a href="https://arxiv.org/abs/1">arXiv</a>"#));
    }

    #[test]
    fn venue_is_not_escaped() {
        let mut publ = publication_with(vec![self_person("a", "A")], vec![]);
        publ.venue = r#"CVPR, 2024 <span style="color: #F09858;">(best paper)</span>"#.into();
        let html = render_home_page(&home_with(vec![publ], vec![]), &config()).into_string();
        assert!(html.contains(r#"<span style="color: #F09858;">(best paper)</span>"#));
    }

    #[test]
    fn title_is_escaped() {
        let mut publ = publication_with(vec![self_person("a", "A")], vec![]);
        publ.title = "<script>alert('xss')</script>".into();
        let html = render_home_page(&home_with(vec![publ], vec![]), &config()).into_string();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn bio_markdown_rendered() {
        let html = render_home_page(&sample_home(), &config()).into_string();
        assert!(html.contains("<em>engines</em>"));
    }

    #[test]
    fn bio_raw_html_passes_through() {
        let mut home = sample_home();
        home.bio = r#"I study at <a href="https://www.cornell.edu/">Cornell</a>."#.into();
        let html = render_home_page(&home, &config()).into_string();
        assert!(html.contains(r#"<a href="https://www.cornell.edu/">Cornell</a>"#));
    }

    #[test]
    fn blank_bio_omitted() {
        let mut home = sample_home();
        home.bio = "  ".into();
        let html = render_home_page(&home, &config()).into_string();
        assert!(!html.contains(r#"class="bio""#));
    }

    #[test]
    fn about_me_photo_alt_falls_back_to_name() {
        let html = render_home_page(&sample_home(), &config()).into_string();
        assert!(html.contains(r#"alt="Ada Lovelace""#));
        assert!(html.contains(r#"href="mailto:ada@example.org""#));
    }

    #[test]
    fn teaching_semesters_joined_with_commas() {
        let c = course(
            "Algebraic Structures",
            &[
                ("Fall 2022", "https://a.example"),
                ("Spring 2023", ""),
                ("Fall 2023", "https://c.example"),
            ],
        );
        let html = teaching_entry(&c).into_string();
        assert!(html.contains("Teaching Assistant, "));
        assert!(html.contains(r#"<a href="https://a.example">Fall 2022, </a>"#));
        assert!(html.contains("Spring 2023, "));
        assert!(html.contains(r#"<a href="https://c.example">Fall 2023</a>"#));
        assert!(!html.contains("Fall 2023, "));
    }

    #[test]
    fn teaching_unlinked_semester_is_plain() {
        let c = course("Graphics", &[("Fall 2024", "")]);
        let html = teaching_entry(&c).into_string();
        assert!(!html.contains("<a "));
        assert!(html.contains("Teaching Assistant, Fall 2024"));
    }

    #[test]
    fn footer_credit_link_when_configured() {
        let mut cfg = config();
        cfg.footer.credit_name = "Bailey Miller's website".into();
        cfg.footer.credit_url = "https://www.bailey-miller.com/".into();
        let html = footer(&cfg).into_string();
        assert!(html.contains(r#"<a href="https://www.bailey-miller.com/">"#));
        assert!(html.contains("Bailey Miller"));
        let plain = footer(&config()).into_string();
        assert!(!plain.contains("<a "));
        assert!(plain.contains("Design and source code based on"));
    }

    // =========================================================================
    // Music gallery
    // =========================================================================

    #[test]
    fn track_margins_follow_row_position() {
        for i in 0..10 {
            let m = track_margins(i);
            assert_eq!(m.left == "0", i % 3 == 0, "left margin at {i}");
            assert_eq!(m.right == "0", i % 3 == 2, "right margin at {i}");
        }
    }

    #[test]
    fn music_gallery_rows_of_three() {
        let tracks: Vec<String> = (0..7).map(|i| format!("t{i}")).collect();
        let html = music_gallery(&tracks, &config()).into_string();
        assert_eq!(html.matches(r#"class="music-row""#).count(), 3);
        assert_eq!(html.matches("<iframe").count(), 7);
        assert!(html.contains(r#"src="https://open.spotify.com/embed/track/t6""#));
        assert_in_order(&html, &["t0", "t1", "t2", "music-row", "t3"]);
    }

    #[test]
    fn music_gallery_starts_collapsed() {
        let html = music_gallery(&["x".to_string()], &config()).into_string();
        assert!(html.contains("<details class=\"music-gallery\">"));
        assert!(html.contains("music-toggle-indicator"));
        assert!(html.contains("rotate(90deg)"));
    }

    #[test]
    fn music_gallery_absent_for_no_tracks() {
        assert_eq!(music_gallery(&[], &config()).into_string(), "");
        let html = render_home_page(&sample_home(), &config()).into_string();
        assert!(!html.contains("music-gallery"));
    }

    #[test]
    fn music_gallery_absent_when_disabled() {
        let mut cfg = config();
        cfg.music.enabled = false;
        assert_eq!(music_gallery(&["x".to_string()], &cfg).into_string(), "");
    }

    // =========================================================================
    // Project page
    // =========================================================================

    fn project_html(project: &Project) -> String {
        let publ = publication_with(vec![self_person("x", "X")], vec![]);
        render_project_page(project, &publ, &config()).into_string()
    }

    #[test]
    fn project_page_header() {
        let html = project_html(&bare_project("p"));
        assert!(html.contains(r#"href="../../""#));
        assert!(html.contains("fa fa-long-arrow-left"));
        assert!(html.contains("A Paper"));
        assert!(html.contains("<b>X</b>"));
        assert!(html.contains(r#"src="hero.png""#));
        assert!(html.contains(r#"alt="A Paper-teaser""#));
        assert!(html.contains("A caption"));
    }

    #[test]
    fn project_stylesheets_two_levels_up() {
        let html = project_html(&bare_project("p"));
        assert!(html.contains(r#"href="../../assets/bootstrap.min.css""#));
        assert_eq!(html.matches(r#"rel="stylesheet""#).count(), 3);
    }

    #[test]
    fn bare_project_has_no_sections() {
        let html = project_html(&bare_project("p"));
        assert!(!html.contains("project-section"));
        assert!(!html.contains("<h2"));
    }

    #[test]
    fn full_project_sections_in_order() {
        let html = project_html(&full_project("p"));
        assert_eq!(html.matches(r#"class="project-section""#).count(), 5);
        assert_in_order(
            &html,
            &[
                ">Abstract</h2>",
                ">Resources</h2>",
                ">Videos</h2>",
                ">Cite</h2>",
                ">Acknowledgements</h2>",
            ],
        );
    }

    #[test]
    fn resources_with_both_lists_have_two_groups() {
        let html = project_html(&full_project("p"));
        assert_eq!(html.matches(r#"class="resource-group""#).count(), 2);
        assert_in_order(&html, &[">Publication</h4>", ">Code</h4>"]);
    }

    #[test]
    fn resources_with_one_list_keeps_section() {
        let mut project = bare_project("p");
        project.resources.code = vec![Resource::new(Icon::Github, "https://github.com/x", "Code")];
        let html = project_html(&project);
        assert!(html.contains(">Resources</h2>"));
        assert_eq!(html.matches(r#"class="resource-group""#).count(), 1);
        assert!(!html.contains(">Publication</h4>"));
    }

    #[test]
    fn videos_embed_each_id() {
        let html = project_html(&full_project("p"));
        assert!(html.contains(r#"src="https://www.youtube.com/embed/J9o7kgrpco0""#));
        assert!(html.contains("presentation slides"));
        assert!(html.contains("allowfullscreen"));
    }

    #[test]
    fn citation_has_copy_control() {
        let html = project_html(&full_project("p"));
        assert!(html.contains("code-copy-btn"));
        assert!(html.contains("fa fa-clipboard"));
        assert!(html.contains(r#"<pre id="citation-to-copy">@article{x, title={Y}}</pre>"#));
        assert!(html.contains("navigator.clipboard"));
    }

    #[test]
    fn blank_optional_text_is_omitted() {
        let mut project = bare_project("p");
        project.abstract_text = Some(String::new());
        project.citation = Some("  ".into());
        project.acknowledgements = Some(String::new());
        let html = project_html(&project);
        assert!(!html.contains("project-section"));
    }

    // =========================================================================
    // Writing
    // =========================================================================

    #[test]
    fn project_page_path_layout() {
        assert_eq!(
            project_page_path("dipole"),
            Path::new("project").join("dipole").join("index.html")
        );
    }

    #[test]
    fn render_project_page_to_creates_parent_dirs() {
        let tmp = TempDir::new().unwrap();
        let site = site_with_project(full_project("p1"));
        let project = &site.projects[0];
        let publ = site.publication("p1").unwrap();
        let path = tmp.path().join("project/p1/index.html");
        render_project_page_to(project, publ, &path, &config()).unwrap();
        assert!(path.exists());
        // Second write into the existing directory is fine
        render_project_page_to(project, publ, &path, &config()).unwrap();
    }

    #[test]
    fn generate_writes_home_and_projects() {
        let tmp = TempDir::new().unwrap();
        let site = site_with_project(bare_project("p1"));
        let report = generate(&site, tmp.path(), &config()).unwrap();
        assert!(report.is_success());
        assert!(tmp.path().join("index.html").exists());
        assert!(tmp.path().join("project/p1/index.html").exists());
        assert_eq!(report.projects.len(), 1);
        assert_eq!(report.projects[0].id, "p1");
    }

    #[test]
    fn failing_project_page_is_reported() {
        let tmp = TempDir::new().unwrap();
        // A plain file where the project directory should go
        fs::write(tmp.path().join("project"), "").unwrap();
        let site = site_with_project(bare_project("p1"));
        let report = generate(&site, tmp.path(), &config()).unwrap();
        assert!(tmp.path().join("index.html").exists());
        assert!(!report.is_success());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, "p1");
        assert!(matches!(report.failures[0].error, GenerateError::Write { .. }));
    }

    #[test]
    fn project_without_publication_is_reported() {
        let tmp = TempDir::new().unwrap();
        let mut site = site_with_project(bare_project("p1"));
        site.projects.push(bare_project("missing"));
        let report = generate(&site, tmp.path(), &config()).unwrap();
        assert!(!report.is_success());
        assert_eq!(report.projects.len(), 1);
        assert!(tmp.path().join("project/p1/index.html").exists());
        assert!(!tmp.path().join("project/missing").exists());
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].id, "missing");
        assert!(matches!(
            &report.failures[0].error,
            GenerateError::MissingPublication(id) if id == "missing"
        ));
    }
}
