use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CareerOpeningId(pub Uuid);

impl CareerOpeningId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for CareerOpeningId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(CareerOpeningId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// A job opening on the careers page
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerOpening {
    pub id: CareerOpeningId,
    pub title: String,
    pub department: String,
    pub location: Option<String>,
    pub description: String,
    pub closes_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_open: bool,
    pub metadata: EntityMetadata,
}

impl CareerOpening {
    pub fn new_for_insert(dto: CareerOpeningDto) -> Result<Self, String> {
        let opening = Self {
            id: CareerOpeningId::new_v4(),
            title: dto.title,
            department: dto.department,
            location: dto.location,
            description: dto.description,
            closes_at: dto.closes_at,
            is_open: dto.is_open.unwrap_or(true),
            metadata: EntityMetadata::new(),
        };
        opening.validate()?;
        Ok(opening)
    }

    pub fn update(&mut self, dto: CareerOpeningDto) -> Result<(), String> {
        self.title = dto.title;
        self.department = dto.department;
        self.location = dto.location;
        self.description = dto.description;
        self.closes_at = dto.closes_at;
        if let Some(open) = dto.is_open {
            self.is_open = open;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("title cannot be empty".into());
        }
        if self.department.trim().is_empty() {
            return Err("department cannot be empty".into());
        }
        Ok(())
    }

    /// Open for applications: flagged open and not past the closing date
    pub fn accepts_applications_at(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        self.is_open && self.closes_at.map_or(true, |closes| now < closes)
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

impl AggregateRoot for CareerOpening {
    type Id = CareerOpeningId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a005"
    }

    fn collection_name() -> &'static str {
        "career"
    }

    fn element_name() -> &'static str {
        "Career opening"
    }

    fn list_name() -> &'static str {
        "Career openings"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct CareerOpeningDto {
    pub id: Option<String>,
    pub title: String,
    pub department: String,
    pub location: Option<String>,
    pub description: String,
    pub closes_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_open: Option<bool>,
}
