//! Content model shared by the loader and the renderers.
//!
//! Everything here is built once by [`crate::content::load_site`] (or by hand
//! in tests) and is read-only afterwards. The only behavior is a few derived
//! lookups; formatting lives in [`crate::authors`], [`crate::resource`] and
//! [`crate::generate`].

use serde::{Deserialize, Serialize};

/// An author or collaborator.
///
/// `id` is the key publications and joint-contribution groups use to refer
/// to the person; it never appears in rendered output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub homepage_url: Option<String>,
    /// The page owner. Rendered bold and never linked.
    pub is_self: bool,
}

/// Icon-font marker shown in front of a resource label.
///
/// Identifiers are kebab-case (`"envelope"`, `"back-arrow"`, ...). Anything
/// unrecognized becomes [`Icon::None`], so a typo costs a missing glyph, not
/// a failed build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Icon {
    #[default]
    None,
    Pdf,
    Envelope,
    Archive,
    Book,
    Github,
    Zip,
    Code,
    Copy,
    Globe,
    BackArrow,
    GradCap,
    MapMarker,
    File,
    Linkedin,
}

impl Icon {
    pub fn parse(id: &str) -> Self {
        match id.trim() {
            "pdf" => Icon::Pdf,
            "envelope" => Icon::Envelope,
            "archive" => Icon::Archive,
            "book" => Icon::Book,
            "github" => Icon::Github,
            "zip" => Icon::Zip,
            "code" => Icon::Code,
            "copy" => Icon::Copy,
            "globe" => Icon::Globe,
            "back-arrow" => Icon::BackArrow,
            "grad-cap" => Icon::GradCap,
            "map-marker" => Icon::MapMarker,
            "file" => Icon::File,
            "linkedin" => Icon::Linkedin,
            _ => Icon::None,
        }
    }

    /// Identifier as written in `site.toml`. Empty for [`Icon::None`].
    pub fn as_str(self) -> &'static str {
        match self {
            Icon::None => "",
            Icon::Pdf => "pdf",
            Icon::Envelope => "envelope",
            Icon::Archive => "archive",
            Icon::Book => "book",
            Icon::Github => "github",
            Icon::Zip => "zip",
            Icon::Code => "code",
            Icon::Copy => "copy",
            Icon::Globe => "globe",
            Icon::BackArrow => "back-arrow",
            Icon::GradCap => "grad-cap",
            Icon::MapMarker => "map-marker",
            Icon::File => "file",
            Icon::Linkedin => "linkedin",
        }
    }

    /// Font Awesome 4 class list, or `None` when no marker should be drawn.
    pub fn css_class(self) -> Option<&'static str> {
        let class = match self {
            Icon::None => return None,
            Icon::Pdf => "fa fa-file-pdf-o",
            Icon::Envelope => "fa fa-envelope",
            Icon::Archive => "fa fa-archive",
            Icon::Book => "fa fa-book",
            Icon::Github => "fa fa-github",
            Icon::Zip => "fa fa-file-archive-o",
            Icon::Code => "fa fa-file-code-o",
            Icon::Copy => "fa fa-clipboard",
            Icon::Globe => "fa fa-globe",
            Icon::BackArrow => "fa fa-long-arrow-left",
            Icon::GradCap => "fa fa-graduation-cap",
            Icon::MapMarker => "fa fa-map-marker",
            Icon::File => "fa fa-file",
            Icon::Linkedin => "fa fa-linkedin-square",
        };
        Some(class)
    }
}

impl From<String> for Icon {
    fn from(id: String) -> Self {
        Icon::parse(&id)
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.as_str().to_string()
    }
}

/// A labeled, optionally linked, optionally iconed reference.
///
/// `path` is used verbatim as the link target (`mailto:`, relative file,
/// external URL). An empty path renders the label as plain text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Resource {
    #[serde(default)]
    pub icon: Icon,
    #[serde(default)]
    pub path: String,
    pub label: String,
}

impl Resource {
    pub fn new(icon: Icon, path: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            icon,
            path: path.into(),
            label: label.into(),
        }
    }

    pub fn is_linked(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Authors sharing an equal-contribution annotation such as `*` or `†`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JointGroup {
    pub suffix: String,
    /// Person ids.
    pub members: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Publication {
    /// Cross-reference key for the optional project page.
    pub id: String,
    pub thumbnail: String,
    pub title: String,
    pub authors: Vec<Person>,
    /// Declaration order matters: when a person is in several groups the
    /// last one wins.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub joint_groups: Vec<JointGroup>,
    /// Trusted markup, emitted without escaping.
    pub venue: String,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Course {
    pub role: String,
    pub name: String,
    /// `label` is the semester name, `path` an optional syllabus link.
    pub semesters: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Video {
    pub label: String,
    /// Opaque id interpolated into the embed URL.
    pub video_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProjectResources {
    pub publication: Vec<Resource>,
    pub code: Vec<Resource>,
}

impl ProjectResources {
    pub fn is_empty(&self) -> bool {
        self.publication.is_empty() && self.code.is_empty()
    }
}

/// Extended material for one publication, rendered at `project/<id>/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    /// Id of the paired [`Publication`].
    pub id: String,
    pub hero_image: String,
    pub hero_caption: String,
    #[serde(rename = "abstract", skip_serializing_if = "Option::is_none")]
    pub abstract_text: Option<String>,
    pub videos: Vec<Video>,
    pub resources: ProjectResources,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub acknowledgements: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citation: Option<String>,
}

/// Header block at the top of the home page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AboutMe {
    pub name: String,
    pub photo: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_alt: Option<String>,
    pub resources: Vec<Resource>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HomePage {
    pub about_me: AboutMe,
    /// Markdown. Raw HTML is allowed.
    pub bio: String,
    /// Display order.
    pub publications: Vec<Publication>,
    pub courses: Vec<Course>,
    /// Music-platform track ids for the optional gallery.
    pub music: Vec<String>,
}

/// A fully loaded site: the home page plus every project page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Site {
    pub home: HomePage,
    pub projects: Vec<Project>,
}

impl Site {
    pub fn publication(&self, id: &str) -> Option<&Publication> {
        self.home.publications.iter().find(|p| p.id == id)
    }
}

/// Non-empty text after trimming, or `None`.
pub(crate) fn non_blank(text: Option<String>) -> Option<String> {
    text.filter(|t| !t.trim().is_empty())
}
