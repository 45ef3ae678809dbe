//! Content loading and validation.
//!
//! Reads `site.toml` from the content root and resolves it into a [`Site`].
//! People are declared once and referenced by id everywhere else.
//!
//! ## File Layout
//!
//! ```toml
//! bio = """
//! I am a Ph.D. student at <a href="https://www.cornell.edu/">Cornell</a>.
//! """
//! music = ["4uLU6hMCjMI75M1A2tKUQC"]
//!
//! [about]
//! name = "Hanyu Chen"
//! photo = "data/images/profile.jpg"
//! resources = [
//!     { icon = "envelope", path = "mailto:me@example.org", label = "Email" },
//! ]
//!
//! [people.hanyu-chen]
//! name = "Hanyu Chen"
//! homepage = "https://hanyuc.com"
//! me = true
//!
//! [[publications]]
//! id = "dipole-sums"
//! thumbnail = "data/images/thumbnails/fast_dipole_sums.png"
//! title = "3D Reconstruction with Fast Dipole Sums"
//! authors = ["hanyu-chen", "bailey-miller"]
//! venue = "ACM Trans. on Graph. (SIGGRAPH Asia), 2024"
//! resources = [{ icon = "book", path = "https://arxiv.org/abs/2405.16788", label = "arXiv" }]
//!
//! [[publications.joint]]
//! suffix = "*"
//! authors = ["hanyu-chen", "bailey-miller"]
//!
//! [[courses]]
//! role = "Teaching Assistant"
//! name = "Computer Graphics Practicum"
//! semesters = [{ label = "Fall 2024", path = "https://classes.cornell.edu/" }]
//!
//! [[projects]]
//! id = "dipole-sums"        # must match a publication id
//! hero_image = "teaser.png"
//! hero_caption = "Reconstructions from a handful of views."
//! abstract = "..."
//! videos = [{ label = "Talk", video_id = "J9o7kgrpco0" }]
//! citation = "@article{...}"
//!
//! [projects.resources]
//! publication = [{ icon = "pdf", path = "paper.pdf", label = "Paper" }]
//! code = [{ icon = "github", path = "https://github.com/...", label = "Code" }]
//! ```
//!
//! ## Validation
//!
//! The loader enforces these rules:
//! - Every author id refers to a declared person
//! - No person appears twice in one publication's author list
//! - Joint-contribution groups only name that publication's authors
//! - Publication ids and project ids are unique
//! - Every project pairs with an existing publication
//! - Project ids are usable as a single directory name (`project/<id>/`)

use crate::model::{
    AboutMe, Course, HomePage, JointGroup, Person, Project, ProjectResources, Publication,
    Resource, Site, Video, non_blank,
};
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("No site.toml found in {0}")]
    MissingSiteFile(PathBuf),
    #[error("Publication '{publication}' lists unknown person '{person}'")]
    UnknownPerson { publication: String, person: String },
    #[error("Publication '{publication}' lists '{person}' more than once")]
    DuplicateAuthor { publication: String, person: String },
    #[error(
        "Publication '{publication}': joint group '{suffix}' names '{person}', who is not an author"
    )]
    StrayJointAuthor {
        publication: String,
        suffix: String,
        person: String,
    },
    #[error("Duplicate publication id '{0}'")]
    DuplicatePublication(String),
    #[error("Project '{0}' has no publication with the same id")]
    UnknownProjectPublication(String),
    #[error("Duplicate project id '{0}'")]
    DuplicateProject(String),
    #[error("Project id '{0}' cannot be used as a directory name")]
    InvalidProjectId(String),
}

// ============================================================================
// site.toml schema
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct SiteFile {
    about: AboutEntry,
    #[serde(default)]
    bio: String,
    #[serde(default)]
    people: BTreeMap<String, PersonEntry>,
    #[serde(default)]
    publications: Vec<PublicationEntry>,
    #[serde(default)]
    courses: Vec<CourseEntry>,
    #[serde(default)]
    music: Vec<String>,
    #[serde(default)]
    projects: Vec<ProjectEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PersonEntry {
    name: String,
    #[serde(default)]
    homepage: Option<String>,
    #[serde(default)]
    me: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AboutEntry {
    name: String,
    photo: String,
    #[serde(default)]
    photo_title: Option<String>,
    #[serde(default)]
    photo_alt: Option<String>,
    #[serde(default)]
    resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PublicationEntry {
    id: String,
    thumbnail: String,
    title: String,
    #[serde(default)]
    authors: Vec<String>,
    #[serde(default)]
    joint: Vec<JointEntry>,
    #[serde(default)]
    venue: String,
    #[serde(default)]
    resources: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JointEntry {
    suffix: String,
    authors: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CourseEntry {
    role: String,
    name: String,
    #[serde(default)]
    semesters: Vec<Resource>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ProjectEntry {
    id: String,
    hero_image: String,
    #[serde(default)]
    hero_caption: String,
    #[serde(default, rename = "abstract")]
    abstract_text: Option<String>,
    #[serde(default)]
    videos: Vec<Video>,
    #[serde(default)]
    resources: ProjectResources,
    #[serde(default)]
    acknowledgements: Option<String>,
    #[serde(default)]
    citation: Option<String>,
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate `site.toml` from the content root.
pub fn load_site(root: &Path) -> Result<Site, ContentError> {
    let site_path = root.join("site.toml");
    if !site_path.exists() {
        return Err(ContentError::MissingSiteFile(root.to_path_buf()));
    }
    let content = fs::read_to_string(&site_path)?;
    parse_site(&content)
}

/// Parse and validate `site.toml` content.
pub fn parse_site(content: &str) -> Result<Site, ContentError> {
    let file: SiteFile = toml::from_str(content)?;
    resolve_site(file)
}

fn resolve_site(file: SiteFile) -> Result<Site, ContentError> {
    let people: BTreeMap<&str, Person> = file
        .people
        .iter()
        .map(|(id, entry)| {
            let person = Person {
                id: id.clone(),
                name: entry.name.clone(),
                homepage_url: non_blank(entry.homepage.clone()),
                is_self: entry.me,
            };
            (id.as_str(), person)
        })
        .collect();

    let mut seen_publications = HashSet::new();
    let mut publications = Vec::with_capacity(file.publications.len());
    for entry in file.publications {
        if !seen_publications.insert(entry.id.clone()) {
            return Err(ContentError::DuplicatePublication(entry.id));
        }
        publications.push(resolve_publication(entry, &people)?);
    }

    let mut seen_projects = HashSet::new();
    let mut projects = Vec::with_capacity(file.projects.len());
    for entry in file.projects {
        if !is_directory_name(&entry.id) {
            return Err(ContentError::InvalidProjectId(entry.id));
        }
        if !seen_publications.contains(&entry.id) {
            return Err(ContentError::UnknownProjectPublication(entry.id));
        }
        if !seen_projects.insert(entry.id.clone()) {
            return Err(ContentError::DuplicateProject(entry.id));
        }
        projects.push(Project {
            id: entry.id,
            hero_image: entry.hero_image,
            hero_caption: entry.hero_caption,
            abstract_text: non_blank(entry.abstract_text),
            videos: entry.videos,
            resources: entry.resources,
            acknowledgements: non_blank(entry.acknowledgements),
            citation: non_blank(entry.citation),
        });
    }

    let about = file.about;
    let home = HomePage {
        about_me: AboutMe {
            name: about.name,
            photo: about.photo,
            photo_title: non_blank(about.photo_title),
            photo_alt: non_blank(about.photo_alt),
            resources: about.resources,
        },
        bio: file.bio,
        publications,
        courses: file
            .courses
            .into_iter()
            .map(|c| Course {
                role: c.role,
                name: c.name,
                semesters: c.semesters,
            })
            .collect(),
        music: file
            .music
            .into_iter()
            .filter(|track| !track.trim().is_empty())
            .collect(),
    };

    Ok(Site { home, projects })
}

fn is_directory_name(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\'])
}

fn resolve_publication(
    entry: PublicationEntry,
    people: &BTreeMap<&str, Person>,
) -> Result<Publication, ContentError> {
    let mut authors: Vec<Person> = Vec::with_capacity(entry.authors.len());
    for id in &entry.authors {
        let person = people
            .get(id.as_str())
            .ok_or_else(|| ContentError::UnknownPerson {
                publication: entry.id.clone(),
                person: id.clone(),
            })?;
        if authors.iter().any(|a| a.id == person.id) {
            return Err(ContentError::DuplicateAuthor {
                publication: entry.id.clone(),
                person: id.clone(),
            });
        }
        authors.push(person.clone());
    }

    let mut joint_groups = Vec::with_capacity(entry.joint.len());
    for group in entry.joint {
        if let Some(stray) = group
            .authors
            .iter()
            .find(|member| !entry.authors.contains(member))
        {
            return Err(ContentError::StrayJointAuthor {
                publication: entry.id.clone(),
                suffix: group.suffix,
                person: stray.clone(),
            });
        }
        joint_groups.push(JointGroup {
            suffix: group.suffix,
            members: group.authors,
        });
    }

    Ok(Publication {
        id: entry.id,
        thumbnail: entry.thumbnail,
        title: entry.title,
        authors,
        joint_groups,
        venue: entry.venue,
        resources: entry.resources,
    })
}
