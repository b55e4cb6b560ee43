use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ComplaintId(pub Uuid);

impl ComplaintId {
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

impl AggregateId for ComplaintId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(ComplaintId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintCategory {
    Complaint,
    NewConnection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplaintStatus {
    Received,
    InProgress,
    Resolved,
}

/// A complaint or new-connection request submitted through the public form
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    pub id: ComplaintId,
    /// Consumer account number, where the submitter has one
    pub consumer_no: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub category: ComplaintCategory,
    pub message: String,
    pub status: ComplaintStatus,
    pub metadata: EntityMetadata,
}

impl Complaint {
    pub fn new_for_insert(dto: ComplaintDto) -> Result<Self, String> {
        let complaint = Self {
            id: ComplaintId::new_v4(),
            consumer_no: dto.consumer_no,
            name: dto.name,
            phone: dto.phone,
            email: dto.email,
            category: dto.category,
            message: dto.message,
            status: ComplaintStatus::Received,
            metadata: EntityMetadata::new(),
        };
        complaint.validate()?;
        Ok(complaint)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("name cannot be empty".into());
        }
        if self.phone.trim().is_empty() {
            return Err("phone cannot be empty".into());
        }
        if self.message.trim().is_empty() {
            return Err("message cannot be empty".into());
        }
        if let Some(ref email) = self.email {
            if !email.trim().is_empty() && !email.contains('@') {
                return Err("invalid email format".into());
            }
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

impl AggregateRoot for Complaint {
    type Id = ComplaintId;

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
        "a006"
    }

    fn collection_name() -> &'static str {
        "complaint"
    }

    fn element_name() -> &'static str {
        "Complaint"
    }

    fn list_name() -> &'static str {
        "Complaints"
    }
}

/// Public form submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintDto {
    pub consumer_no: Option<String>,
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub category: ComplaintCategory,
    pub message: String,
}

/// Admin status transition payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintStatusDto {
    pub id: String,
    pub status: ComplaintStatus,
}
