use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsPostId(pub Uuid);

impl NewsPostId {
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

impl AggregateId for NewsPostId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(NewsPostId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// A news item / public announcement
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsPost {
    pub id: NewsPostId,
    pub headline: String,
    pub body: String,
    pub cover_image: Option<String>,
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_published: bool,
    pub metadata: EntityMetadata,
}

impl NewsPost {
    pub fn new_for_insert(dto: NewsPostDto) -> Result<Self, String> {
        let is_published = dto.is_published.unwrap_or(false);
        let post = Self {
            id: NewsPostId::new_v4(),
            headline: dto.headline,
            body: dto.body,
            cover_image: dto.cover_image,
            published_at: if is_published {
                Some(dto.published_at.unwrap_or_else(chrono::Utc::now))
            } else {
                dto.published_at
            },
            is_published,
            metadata: EntityMetadata::new(),
        };
        post.validate()?;
        Ok(post)
    }

    pub fn update(&mut self, dto: NewsPostDto) -> Result<(), String> {
        self.headline = dto.headline;
        self.body = dto.body;
        self.cover_image = dto.cover_image;
        if let Some(published) = dto.is_published {
            // first transition to published stamps the publication time
            if published && !self.is_published && self.published_at.is_none() {
                self.published_at = Some(chrono::Utc::now());
            }
            self.is_published = published;
        }
        if let Some(at) = dto.published_at {
            self.published_at = Some(at);
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.headline.trim().is_empty() {
            return Err("headline cannot be empty".into());
        }
        if self.body.trim().is_empty() {
            return Err("body cannot be empty".into());
        }
        Ok(())
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

impl AggregateRoot for NewsPost {
    type Id = NewsPostId;

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
        "a003"
    }

    fn collection_name() -> &'static str {
        "news"
    }

    fn element_name() -> &'static str {
        "News post"
    }

    fn list_name() -> &'static str {
        "News"
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewsPostDto {
    pub id: Option<String>,
    pub headline: String,
    pub body: String,
    pub cover_image: Option<String>,
    pub published_at: Option<chrono::DateTime<chrono::Utc>>,
    pub is_published: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publishing_stamps_publication_time() {
        let mut post = NewsPost::new_for_insert(NewsPostDto {
            headline: "Scheduled maintenance".into(),
            body: "Substation 4 will be offline.".into(),
            ..Default::default()
        })
        .unwrap();
        assert!(post.published_at.is_none());

        post.update(NewsPostDto {
            headline: post.headline.clone(),
            body: post.body.clone(),
            is_published: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert!(post.is_published);
        assert!(post.published_at.is_some());
    }
}
