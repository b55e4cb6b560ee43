use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique service identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtilityServiceId(pub Uuid);

impl UtilityServiceId {
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

impl AggregateId for UtilityServiceId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(UtilityServiceId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// One entry in the public services catalogue (new connection, billing,
/// street lighting, ...). Feeds SERVICES page sections and the public
/// services endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilityService {
    pub id: UtilityServiceId,
    pub name: String,
    pub summary: String,
    pub icon: Option<String>,
    pub body: Option<String>,
    /// Position in catalogue listings, ascending
    pub display_order: i32,
    pub is_active: bool,
    pub metadata: EntityMetadata,
}

impl UtilityService {
    pub fn new_for_insert(dto: UtilityServiceDto) -> Result<Self, String> {
        let service = Self {
            id: UtilityServiceId::new_v4(),
            name: dto.name,
            summary: dto.summary,
            icon: dto.icon,
            body: dto.body,
            display_order: dto.display_order.unwrap_or(0),
            is_active: dto.is_active.unwrap_or(true),
            metadata: EntityMetadata::new(),
        };
        service.validate()?;
        Ok(service)
    }

    pub fn update(&mut self, dto: UtilityServiceDto) -> Result<(), String> {
        self.name = dto.name;
        self.summary = dto.summary;
        self.icon = dto.icon;
        self.body = dto.body;
        if let Some(order) = dto.display_order {
            self.display_order = order;
        }
        if let Some(active) = dto.is_active {
            self.is_active = active;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("service name cannot be empty".into());
        }
        if self.summary.trim().is_empty() {
            return Err("service summary cannot be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

impl AggregateRoot for UtilityService {
    type Id = UtilityServiceId;

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
        "a002"
    }

    fn collection_name() -> &'static str {
        "service"
    }

    fn element_name() -> &'static str {
        "Service"
    }

    fn list_name() -> &'static str {
        "Services"
    }
}

/// Create/update payload for a catalogue entry
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct UtilityServiceDto {
    pub id: Option<String>,
    pub name: String,
    pub summary: String,
    pub icon: Option<String>,
    pub body: Option<String>,
    pub display_order: Option<i32>,
    pub is_active: Option<bool>,
}
