//! Project catalog and showcase controller.
//!
//! The catalog is a constant in-memory table of project records, built once
//! at load from embedded JSON. Activating a project card populates the
//! showcase modal from the matching record.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

const PROJECTS_JSON: &str = include_str!("data/projects.json");

/// Image category under `assets/images/projects/`.
///
/// Records carry this explicitly; keyword inference from the identifier is
/// kept only as a fallback constructor for data that predates the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectCategory {
    /// Office and institutional buildings.
    Buildings,
    /// Water treatment and distribution.
    WaterSupply,
    /// Airports, highways, and industrial infrastructure.
    Airports,
}

impl ProjectCategory {
    /// Path segment under the project image root.
    #[must_use]
    pub const fn as_path(self) -> &'static str {
        match self {
            Self::Buildings => "buildings",
            Self::WaterSupply => "water-supply",
            Self::Airports => "airports",
        }
    }

    /// Infer a category from keywords in a project identifier.
    #[must_use]
    pub fn infer(project_id: &str) -> Self {
        if project_id.contains("water") {
            Self::WaterSupply
        } else if ["airport", "highway", "road", "industrial"]
            .iter()
            .any(|kw| project_id.contains(kw))
        {
            Self::Airports
        } else {
            Self::Buildings
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

/// One project in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Stable identifier, matched against card `data-project` attributes.
    pub id: String,
    /// Project title.
    pub title: String,
    /// Location line.
    pub location: String,
    /// Client name.
    pub client: String,
    /// Completion year.
    pub year: String,
    /// Services rendered.
    pub services: String,
    /// Long description.
    pub description: String,
    /// The challenge paragraph.
    pub challenge: String,
    /// The solution paragraph.
    pub solution: String,
    /// The results paragraph.
    pub results: String,
    /// Image category; inferred from the id when absent in the data.
    #[serde(default)]
    pub category: Option<ProjectCategory>,
    /// Ordered image file names.
    pub images: Vec<String>,
}

impl ProjectRecord {
    /// The record's category, inferring from the id if the data omits it.
    #[must_use]
    pub fn category(&self) -> ProjectCategory {
        self.category
            .unwrap_or_else(|| ProjectCategory::infer(&self.id))
    }

    /// URL for one of the record's images.
    #[must_use]
    pub fn image_url(&self, file: &str) -> String {
        format!(
            "../assets/images/projects/{}/{}",
            self.category().as_path(),
            file
        )
    }
}

/// The in-memory project table, keyed by identifier. Built once, never
/// mutated.
#[derive(Debug, Clone, Default)]
pub struct ProjectCatalog {
    records: HashMap<String, ProjectRecord>,
}

impl ProjectCatalog {
    /// Build a catalog from a list of records.
    #[must_use]
    pub fn from_records(records: Vec<ProjectRecord>) -> Self {
        Self {
            records: records.into_iter().map(|r| (r.id.clone(), r)).collect(),
        }
    }

    /// Parse a catalog from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// The catalog shipped with the site.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(PROJECTS_JSON).expect("embedded project data is valid")
    }

    /// Look up a record by identifier.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.records.get(id)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Modal text slots populated from a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSlot {
    /// Modal title.
    Title,
    /// Location line.
    Location,
    /// Client line.
    Client,
    /// Year line.
    Year,
    /// Services line.
    Services,
    /// Description paragraph.
    Description,
    /// Challenge paragraph.
    Challenge,
    /// Solution paragraph.
    Solution,
    /// Results paragraph.
    Results,
}

/// DOM mutations requested by the showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ShowcaseEffect {
    /// Write text into a modal slot.
    SetText {
        /// Which slot.
        slot: TextSlot,
        /// Text content.
        text: String,
    },
    /// Swap the main image.
    SetMainImage {
        /// Image URL.
        url: String,
        /// Alt text (the project title).
        alt: String,
    },
    /// Remove all thumbnails.
    ClearThumbnails,
    /// Append a thumbnail.
    AddThumbnail {
        /// Image URL.
        url: String,
        /// Whether this thumbnail starts active.
        active: bool,
    },
    /// Move the active marker to this thumbnail.
    SetActiveThumbnail(usize),
    /// Open the showcase modal.
    OpenModal,
}

/// Showcase controller: drives the project modal from the catalog.
#[derive(Debug, Clone, Default)]
pub struct Showcase {
    catalog: ProjectCatalog,
    active_project: Option<String>,
}

impl Showcase {
    /// Create a showcase over a catalog.
    #[must_use]
    pub const fn new(catalog: ProjectCatalog) -> Self {
        Self {
            catalog,
            active_project: None,
        }
    }

    /// Create a showcase over the built-in catalog.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(ProjectCatalog::builtin())
    }

    /// The catalog backing this showcase.
    #[must_use]
    pub const fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    /// Identifier of the project currently shown, if any.
    #[must_use]
    pub fn active_project(&self) -> Option<&str> {
        self.active_project.as_deref()
    }

    /// A project card was activated. Unknown identifiers are a silent no-op
    /// and leave the modal untouched.
    pub fn activate(&mut self, project_id: &str) -> Vec<ShowcaseEffect> {
        let Some(record) = self.catalog.get(project_id) else {
            return Vec::new();
        };
        self.active_project = Some(project_id.to_string());

        let mut effects = vec![
            ShowcaseEffect::SetText {
                slot: TextSlot::Title,
                text: record.title.clone(),
            },
            ShowcaseEffect::SetText {
                slot: TextSlot::Location,
                text: record.location.clone(),
            },
            ShowcaseEffect::SetText {
                slot: TextSlot::Client,
                text: record.client.clone(),
            },
            ShowcaseEffect::SetText {
                slot: TextSlot::Year,
                text: record.year.clone(),
            },
            ShowcaseEffect::SetText {
                slot: TextSlot::Services,
                text: record.services.clone(),
            },
            ShowcaseEffect::SetText {
                slot: TextSlot::Description,
                text: record.description.clone(),
            },
            ShowcaseEffect::SetText {
                slot: TextSlot::Challenge,
                text: record.challenge.clone(),
            },
            ShowcaseEffect::SetText {
                slot: TextSlot::Solution,
                text: record.solution.clone(),
            },
            ShowcaseEffect::SetText {
                slot: TextSlot::Results,
                text: record.results.clone(),
            },
        ];

        if let Some(first) = record.images.first() {
            effects.push(ShowcaseEffect::SetMainImage {
                url: record.image_url(first),
                alt: record.title.clone(),
            });
        }
        effects.push(ShowcaseEffect::ClearThumbnails);
        for (index, image) in record.images.iter().enumerate() {
            effects.push(ShowcaseEffect::AddThumbnail {
                url: record.image_url(image),
                active: index == 0,
            });
        }
        effects.push(ShowcaseEffect::OpenModal);
        effects
    }

    /// A thumbnail was clicked: swap the main image and the active marker.
    /// Ignored when no project is shown or the index is out of range.
    pub fn select_thumbnail(&self, index: usize) -> Vec<ShowcaseEffect> {
        let Some(record) = self
            .active_project
            .as_deref()
            .and_then(|id| self.catalog.get(id))
        else {
            return Vec::new();
        };
        let Some(image) = record.images.get(index) else {
            return Vec::new();
        };
        vec![
            ShowcaseEffect::SetMainImage {
                url: record.image_url(image),
                alt: record.title.clone(),
            },
            ShowcaseEffect::SetActiveThumbnail(index),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = ProjectCatalog::builtin();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.get("rra-building").is_some());
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_category_inference_table() {
        assert_eq!(
            ProjectCategory::infer("gatsibo-water"),
            ProjectCategory::WaterSupply
        );
        assert_eq!(
            ProjectCategory::infer("kigali-airport"),
            ProjectCategory::Airports
        );
        assert_eq!(
            ProjectCategory::infer("north-highway"),
            ProjectCategory::Airports
        );
        assert_eq!(
            ProjectCategory::infer("ring-road"),
            ProjectCategory::Airports
        );
        assert_eq!(
            ProjectCategory::infer("industrial-park"),
            ProjectCategory::Airports
        );
        assert_eq!(
            ProjectCategory::infer("rra-building"),
            ProjectCategory::Buildings
        );
    }

    #[test]
    fn test_explicit_category_wins_over_inference() {
        let record = ProjectRecord {
            id: "water-tower-offices".to_string(),
            title: "Water Tower Offices".to_string(),
            location: String::new(),
            client: String::new(),
            year: String::new(),
            services: String::new(),
            description: String::new(),
            challenge: String::new(),
            solution: String::new(),
            results: String::new(),
            category: Some(ProjectCategory::Buildings),
            images: vec![],
        };
        assert_eq!(record.category(), ProjectCategory::Buildings);
    }

    #[test]
    fn test_image_url_shape() {
        let catalog = ProjectCatalog::builtin();
        let record = catalog.get("gatsibo-water").expect("known id");
        assert_eq!(
            record.image_url("gatsibo-water-1.jpg"),
            "../assets/images/projects/water-supply/gatsibo-water-1.jpg"
        );
    }

    #[test]
    fn test_activate_known_project() {
        let mut showcase = Showcase::builtin();
        let effects = showcase.activate("gatsibo-water");

        assert!(effects.contains(&ShowcaseEffect::SetText {
            slot: TextSlot::Title,
            text: "Gatsibo Water Supply".to_string(),
        }));
        assert!(matches!(
            effects.iter().find(|e| matches!(e, ShowcaseEffect::SetMainImage { .. })),
            Some(ShowcaseEffect::SetMainImage { url, .. })
                if url.contains("/water-supply/")
        ));
        let thumbnails: Vec<_> = effects
            .iter()
            .filter_map(|e| match e {
                ShowcaseEffect::AddThumbnail { active, .. } => Some(*active),
                _ => None,
            })
            .collect();
        assert_eq!(thumbnails, vec![true, false, false]);
        assert_eq!(effects.last(), Some(&ShowcaseEffect::OpenModal));
        assert_eq!(showcase.active_project(), Some("gatsibo-water"));
    }

    #[test]
    fn test_activate_unknown_project_is_silent() {
        let mut showcase = Showcase::builtin();
        assert!(showcase.activate("unknown-project").is_empty());
        assert_eq!(showcase.active_project(), None);
    }

    #[test]
    fn test_select_thumbnail() {
        let mut showcase = Showcase::builtin();
        showcase.activate("rra-building");
        let effects = showcase.select_thumbnail(2);
        assert_eq!(
            effects,
            vec![
                ShowcaseEffect::SetMainImage {
                    url: "../assets/images/projects/buildings/rra-building-3.jpg".to_string(),
                    alt: "Rwanda Revenue Authority Building".to_string(),
                },
                ShowcaseEffect::SetActiveThumbnail(2),
            ]
        );
    }

    #[test]
    fn test_select_thumbnail_out_of_range() {
        let mut showcase = Showcase::builtin();
        showcase.activate("rra-building");
        assert!(showcase.select_thumbnail(9).is_empty());
    }

    #[test]
    fn test_select_thumbnail_without_active_project() {
        let showcase = Showcase::builtin();
        assert!(showcase.select_thumbnail(0).is_empty());
    }

    #[test]
    fn test_category_serde_kebab_case() {
        let json = serde_json::to_string(&ProjectCategory::WaterSupply).expect("serialize");
        assert_eq!(json, "\"water-supply\"");
    }
}
