use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TenderId(pub Uuid);

impl TenderId {
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

impl AggregateId for TenderId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(TenderId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Derived from the clock against the tender window, never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TenderStatus {
    Upcoming,
    Open,
    Closed,
}

/// A published tender notice
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tender {
    pub id: TenderId,
    /// Official reference number, unique among tenders
    pub reference_no: String,
    pub title: String,
    pub description: String,
    pub opens_at: chrono::DateTime<chrono::Utc>,
    pub closes_at: chrono::DateTime<chrono::Utc>,
    pub document_path: Option<String>,
    pub metadata: EntityMetadata,
}

impl Tender {
    pub fn new_for_insert(dto: TenderDto) -> Result<Self, String> {
        let tender = Self {
            id: TenderId::new_v4(),
            reference_no: dto.reference_no.trim().to_string(),
            title: dto.title,
            description: dto.description,
            opens_at: dto.opens_at,
            closes_at: dto.closes_at,
            document_path: dto.document_path,
            metadata: EntityMetadata::new(),
        };
        tender.validate()?;
        Ok(tender)
    }

    pub fn update(&mut self, dto: TenderDto) -> Result<(), String> {
        self.reference_no = dto.reference_no.trim().to_string();
        self.title = dto.title;
        self.description = dto.description;
        self.opens_at = dto.opens_at;
        self.closes_at = dto.closes_at;
        self.document_path = dto.document_path;
        self.validate()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.reference_no.is_empty() {
            return Err("reference number cannot be empty".into());
        }
        if self.title.trim().is_empty() {
            return Err("title cannot be empty".into());
        }
        if self.closes_at <= self.opens_at {
            return Err("closing date must be after opening date".into());
        }
        Ok(())
    }

    /// Status at the given instant
    pub fn status_at(&self, now: chrono::DateTime<chrono::Utc>) -> TenderStatus {
        if now < self.opens_at {
            TenderStatus::Upcoming
        } else if now < self.closes_at {
            TenderStatus::Open
        } else {
            TenderStatus::Closed
        }
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

impl AggregateRoot for Tender {
    type Id = TenderId;

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
        "a004"
    }

    fn collection_name() -> &'static str {
        "tender"
    }

    fn element_name() -> &'static str {
        "Tender"
    }

    fn list_name() -> &'static str {
        "Tenders"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TenderDto {
    pub id: Option<String>,
    pub reference_no: String,
    pub title: String,
    pub description: String,
    pub opens_at: chrono::DateTime<chrono::Utc>,
    pub closes_at: chrono::DateTime<chrono::Utc>,
    pub document_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};

    fn sample(opens_in: i64, closes_in: i64) -> Tender {
        Tender::new_for_insert(TenderDto {
            id: None,
            reference_no: "TND-2025-014".into(),
            title: "Supply of distribution transformers".into(),
            description: "Sealed bids invited.".into(),
            opens_at: Utc::now() + Duration::hours(opens_in),
            closes_at: Utc::now() + Duration::hours(closes_in),
            document_path: None,
        })
        .unwrap()
    }

    #[test]
    fn test_status_derivation() {
        let now = Utc::now();
        assert_eq!(sample(1, 48).status_at(now), TenderStatus::Upcoming);
        assert_eq!(sample(-1, 48).status_at(now), TenderStatus::Open);
        assert_eq!(sample(-48, -1).status_at(now), TenderStatus::Closed);
    }

    #[test]
    fn test_window_must_be_ordered() {
        let result = Tender::new_for_insert(TenderDto {
            id: None,
            reference_no: "TND-2025-015".into(),
            title: "Cable laying works".into(),
            description: "".into(),
            opens_at: Utc::now(),
            closes_at: Utc::now() - Duration::hours(1),
            document_path: None,
        });
        assert!(result.is_err());
    }
}
