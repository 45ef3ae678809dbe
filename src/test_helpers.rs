//! Shared test utilities for the scholar-site test suite.
//!
//! Provides fixture setup, small model builders, and an ordering assertion
//! for rendered HTML.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let publ = publication_with(vec![self_person("x", "X"), person("b", "Bo")], vec![]);
//! let html = render_home_page(&home_with(vec![publ], vec![]), &SiteConfig::default());
//! assert_in_order(&html.into_string(), &["<h3>Publications</h3>", "<h3>Teaching</h3>"]);
//! ```

use std::path::Path;
use tempfile::TempDir;

use crate::model::{
    AboutMe, Course, HomePage, Icon, JointGroup, Person, Project, ProjectResources, Publication,
    Resource, Site, Video,
};

// =========================================================================
// Fixture setup
// =========================================================================

/// Copy `fixtures/content/` to a temp directory and return it.
pub fn setup_fixtures() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/content");
    for entry in std::fs::read_dir(&fixtures).unwrap() {
        let entry = entry.unwrap();
        std::fs::copy(entry.path(), tmp.path().join(entry.file_name())).unwrap();
    }
    tmp
}

// =========================================================================
// Model builders
// =========================================================================

/// A collaborator without a homepage.
pub fn person(id: &str, name: &str) -> Person {
    Person {
        id: id.to_string(),
        name: name.to_string(),
        homepage_url: None,
        is_self: false,
    }
}

/// The page owner.
pub fn self_person(id: &str, name: &str) -> Person {
    Person {
        is_self: true,
        ..person(id, name)
    }
}

/// A publication with the given authors and `(suffix, member ids)` groups.
pub fn publication_with(authors: Vec<Person>, groups: Vec<(&str, Vec<&str>)>) -> Publication {
    Publication {
        id: "pub".to_string(),
        thumbnail: "thumb.png".to_string(),
        title: "A Paper".to_string(),
        authors,
        joint_groups: groups
            .into_iter()
            .map(|(suffix, members)| JointGroup {
                suffix: suffix.to_string(),
                members: members.into_iter().map(String::from).collect(),
            })
            .collect(),
        venue: "CVPR, 2024".to_string(),
        resources: vec![Resource::new(Icon::Book, "https://arxiv.org/abs/1", "arXiv")],
    }
}

pub fn course(name: &str, semesters: &[(&str, &str)]) -> Course {
    Course {
        role: "Teaching Assistant".to_string(),
        name: name.to_string(),
        semesters: semesters
            .iter()
            .map(|(label, path)| Resource::new(Icon::None, *path, *label))
            .collect(),
    }
}

pub fn home_with(publications: Vec<Publication>, courses: Vec<Course>) -> HomePage {
    HomePage {
        about_me: AboutMe {
            name: "Ada Lovelace".to_string(),
            photo: "data/images/profile.jpg".to_string(),
            photo_title: None,
            photo_alt: None,
            resources: vec![Resource::new(Icon::Envelope, "mailto:ada@example.org", "Email")],
        },
        bio: "I work on *engines*.".to_string(),
        publications,
        courses,
        music: Vec::new(),
    }
}

/// A project with every optional section empty.
pub fn bare_project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        hero_image: "hero.png".to_string(),
        hero_caption: "A caption".to_string(),
        abstract_text: None,
        videos: Vec::new(),
        resources: ProjectResources::default(),
        acknowledgements: None,
        citation: None,
    }
}

/// A project with every optional section filled.
pub fn full_project(id: &str) -> Project {
    Project {
        abstract_text: Some("We study things.".to_string()),
        videos: vec![Video {
            label: "presentation slides".to_string(),
            video_id: "J9o7kgrpco0".to_string(),
        }],
        resources: ProjectResources {
            publication: vec![Resource::new(Icon::Pdf, "../../paper.pdf", "Paper")],
            code: vec![Resource::new(Icon::Github, "https://github.com/x/y", "Source")],
        },
        acknowledgements: Some("Supported by XYZ.".to_string()),
        citation: Some("@article{x, title={Y}}".to_string()),
        ..bare_project(id)
    }
}

pub fn site_with_project(project: Project) -> Site {
    let mut publ = publication_with(vec![self_person("x", "X")], vec![]);
    publ.id = project.id.clone();
    Site {
        home: home_with(vec![publ], vec![]),
        projects: vec![project],
    }
}

// =========================================================================
// Assertions
// =========================================================================

/// Assert every needle occurs in `html`, in the given order.
pub fn assert_in_order(html: &str, needles: &[&str]) {
    let mut from = 0;
    for needle in needles {
        match html[from..].find(needle) {
            Some(pos) => from += pos + needle.len(),
            None => panic!("'{needle}' not found after byte {from} (expected order {needles:?})"),
        }
    }
}
