//! # Item Catalog
//!
//! The static, ordered list of portfolio entries shown in the scene. Each entry
//! carries the text displayed by the information panel together with where and
//! in which color its shape is placed. The catalog is built once at startup and
//! never mutated afterwards; scene objects refer back into it by index.

use std::collections::HashSet;

use cgmath::Vector3;

use crate::error::{FolioError, Result};

/// Link value used by entries that have nowhere to point yet
pub const PLACEHOLDER_LINK: &str = "#";

/// Converts a `0xRRGGBB` color into linear `[r, g, b]` components in `0.0..=1.0`
pub fn hex_rgb(hex: u32) -> [f32; 3] {
    [
        ((hex >> 16) & 0xff) as f32 / 255.0,
        ((hex >> 8) & 0xff) as f32 / 255.0,
        (hex & 0xff) as f32 / 255.0,
    ]
}

/// A single portfolio item
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub link: Option<String>,
    pub position: Vector3<f32>,
    pub color: [f32; 3],
}

impl CatalogEntry {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        link: Option<&str>,
        position: Vector3<f32>,
        color: u32,
    ) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            link: link.map(str::to_string),
            position,
            color: hex_rgb(color),
        }
    }

    /// The link affordance the information panel should offer for this entry
    pub fn link_action(&self) -> Option<LinkAction> {
        LinkAction::from_link(self.link.as_deref())
    }
}

/// How the information panel presents an entry's link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// `mailto:` links, presented as an email action
    Email(String),
    /// Any other usable link
    LearnMore(String),
}

impl LinkAction {
    /// Classifies a raw link. Missing, blank and placeholder links yield `None`.
    pub fn from_link(link: Option<&str>) -> Option<Self> {
        let link = link?.trim();
        if link.is_empty() || link == PLACEHOLDER_LINK {
            return None;
        }

        if link.to_ascii_lowercase().starts_with("mailto:") {
            Some(Self::Email(link.to_string()))
        } else {
            Some(Self::LearnMore(link.to_string()))
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email(_) => "Send Email",
            Self::LearnMore(_) => "Learn More",
        }
    }

    pub fn uri(&self) -> &str {
        match self {
            Self::Email(uri) | Self::LearnMore(uri) => uri,
        }
    }
}

/// Ordered, immutable collection of catalog entries with unique ids
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog, rejecting empty or duplicate ids
    pub fn new(entries: Vec<CatalogEntry>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(entries.len());
        for (index, entry) in entries.iter().enumerate() {
            if entry.id.is_empty() {
                return Err(FolioError::EmptyEntryId(index));
            }
            if !seen.insert(entry.id.as_str()) {
                return Err(FolioError::DuplicateEntryId(entry.id.clone()));
            }
        }

        Ok(Self { entries })
    }

    /// The four portfolio items the scene ships with
    pub fn builtin() -> Self {
        let entries = vec![
            CatalogEntry::new(
                "project1",
                "Project Alpha",
                "A revolutionary web application built with React and Node.js. Focused on real-time collaboration.",
                Some(PLACEHOLDER_LINK),
                Vector3::new(-2.0, 0.0, 0.0),
                0xff0000,
            ),
            CatalogEntry::new(
                "skill1",
                "Three.js Expertise",
                "Proficient in creating interactive 3D web experiences using Three.js, including models, lighting, and interactions.",
                Some(PLACEHOLDER_LINK),
                Vector3::new(0.0, 1.5, -1.0),
                0x00ff00,
            ),
            CatalogEntry::new(
                "project2",
                "Data Visualization Dashboard",
                "An interactive dashboard displaying complex datasets using D3.js and Vanilla JavaScript.",
                Some(PLACEHOLDER_LINK),
                Vector3::new(2.0, 0.0, 0.0),
                0x0000ff,
            ),
            CatalogEntry::new(
                "contact",
                "Get In Touch",
                "Interested in collaborating or learning more? Feel free to reach out!",
                Some("mailto:your.email@example.com"),
                Vector3::new(0.0, -1.5, 1.0),
                0xffff00,
            ),
        ];

        Self { entries }
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    /// Position of the entry with the given id
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str) -> CatalogEntry {
        CatalogEntry::new(id, "t", "d", None, Vector3::new(0.0, 0.0, 0.0), 0)
    }

    #[test]
    fn test_builtin_catalog_order() {
        let catalog = Catalog::builtin();
        let ids: Vec<&str> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["project1", "skill1", "project2", "contact"]);
        assert!(Catalog::new(catalog.entries().to_vec()).is_ok());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![entry("a"), entry("b"), entry("a")]);
        assert!(matches!(result, Err(FolioError::DuplicateEntryId(id)) if id == "a"));
    }

    #[test]
    fn test_empty_id_rejected() {
        let result = Catalog::new(vec![entry("a"), entry("")]);
        assert!(matches!(result, Err(FolioError::EmptyEntryId(1))));
    }

    #[test]
    fn test_hex_rgb() {
        assert_eq!(hex_rgb(0xff0000), [1.0, 0.0, 0.0]);
        assert_eq!(hex_rgb(0xffff00), [1.0, 1.0, 0.0]);
        let grey = hex_rgb(0x555555);
        assert!((grey[0] - 0.333_333).abs() < 1e-5);
    }

    #[test]
    fn test_link_classification() {
        assert_eq!(LinkAction::from_link(None), None);
        assert_eq!(LinkAction::from_link(Some("#")), None);
        assert_eq!(LinkAction::from_link(Some("  ")), None);

        let email = LinkAction::from_link(Some("mailto:me@example.com")).unwrap();
        assert_eq!(email.label(), "Send Email");
        assert_eq!(email.uri(), "mailto:me@example.com");

        let web = LinkAction::from_link(Some("https://example.com")).unwrap();
        assert_eq!(web, LinkAction::LearnMore("https://example.com".to_string()));
        assert_eq!(web.label(), "Learn More");
    }

    #[test]
    fn test_builtin_links() {
        let catalog = Catalog::builtin();
        let skill = &catalog.entries()[catalog.index_of("skill1").unwrap()];
        assert_eq!(skill.link_action(), None);

        let contact = &catalog.entries()[catalog.index_of("contact").unwrap()];
        assert!(matches!(contact.link_action(), Some(LinkAction::Email(_))));
    }
}
