use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum accepted page title length
pub const MIN_TITLE_LEN: usize = 3;

// ============================================================================
// ID Types
// ============================================================================

/// Unique page identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageId(pub Uuid);

impl PageId {
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

impl AggregateId for PageId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(PageId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// Identifier of a single section row; regenerated on every section-set swap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SectionId(pub Uuid);

impl SectionId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

// ============================================================================
// Section content (tagged union over the fixed type catalogue)
// ============================================================================

/// Content payload of a section, discriminated by its `type` tag.
///
/// Static variants carry their payload inline. Dynamic variants (FAQ,
/// LEADERSHIP, SERVICES, PROJECTS, MEDIA_GALLERY, ACHIEVEMENTS) carry no
/// payload; their data is pulled from the live collections when the page
/// is composed for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SectionContent {
    Hero(HeroContent),
    TextBlock(TextBlockContent),
    CardGrid(CardGridContent),
    Faq,
    Leadership,
    Services,
    Projects,
    MediaGallery,
    Subscribe(SubscribeContent),
    Achievements,
    #[serde(rename = "WORKWITHUS")]
    WorkWithUs(WorkWithUsContent),
}

impl SectionContent {
    /// The wire tag of this variant
    pub fn type_tag(&self) -> &'static str {
        match self {
            SectionContent::Hero(_) => "HERO",
            SectionContent::TextBlock(_) => "TEXT_BLOCK",
            SectionContent::CardGrid(_) => "CARD_GRID",
            SectionContent::Faq => "FAQ",
            SectionContent::Leadership => "LEADERSHIP",
            SectionContent::Services => "SERVICES",
            SectionContent::Projects => "PROJECTS",
            SectionContent::MediaGallery => "MEDIA_GALLERY",
            SectionContent::Subscribe(_) => "SUBSCRIBE",
            SectionContent::Achievements => "ACHIEVEMENTS",
            SectionContent::WorkWithUs(_) => "WORKWITHUS",
        }
    }

    /// True for sections that pull live data when the page is composed
    pub fn is_dynamic(&self) -> bool {
        matches!(
            self,
            SectionContent::Faq
                | SectionContent::Leadership
                | SectionContent::Services
                | SectionContent::Projects
                | SectionContent::MediaGallery
                | SectionContent::Achievements
        )
    }

    /// Payload validation, run at the boundary before content enters the core
    pub fn validate(&self) -> Result<(), String> {
        match self {
            SectionContent::Hero(hero) => {
                if hero.title.trim().is_empty() {
                    return Err("HERO section requires a title".into());
                }
            }
            SectionContent::TextBlock(block) => {
                if block.body.trim().is_empty() {
                    return Err("TEXT_BLOCK section requires a body".into());
                }
            }
            SectionContent::CardGrid(grid) => {
                if grid.cards.is_empty() {
                    return Err("CARD_GRID section requires at least one card".into());
                }
                for card in &grid.cards {
                    if card.title.trim().is_empty() {
                        return Err("CARD_GRID card requires a title".into());
                    }
                }
            }
            _ => {}
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub title: String,
    pub subtitle: Option<String>,
    pub background_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextBlockContent {
    pub heading: Option<String>,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardGridContent {
    pub heading: Option<String>,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    pub text: Option<String>,
    pub icon: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscribeContent {
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkWithUsContent {
    pub heading: Option<String>,
    pub body: Option<String>,
}

// ============================================================================
// Section
// ============================================================================

/// One ordered content block within a page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: SectionId,
    /// Integer position within the page; gaps allowed, ties broken by
    /// insertion sequence
    pub order: i32,
    #[serde(flatten)]
    pub content: SectionContent,
}

// ============================================================================
// SEO record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeoMeta {
    pub title: Option<String>,
    pub description: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// A content-managed route composed of ordered sections plus navigation
/// and SEO metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: PageId,
    /// Unique URL-safe identifier, derived from the title when not supplied
    pub slug: String,
    pub title: String,
    pub is_published: bool,
    pub show_in_navbar: bool,
    /// Display text override for the navigation menu; falls back to `title`
    pub nav_label: Option<String>,
    /// Empty/absent means a top-level navigation item; otherwise names a
    /// dropdown bucket
    pub nav_group: Option<String>,
    pub seo: Option<SeoMeta>,
    pub sections: Vec<Section>,
    pub metadata: EntityMetadata,
}

impl Page {
    /// Build a new page from a creation DTO. Fails with a message when the
    /// title is missing or too short.
    pub fn new_for_insert(dto: PageDto) -> Result<Self, String> {
        let title = dto
            .title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or_else(|| "title is required".to_string())?;

        let slug = match dto.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            Some(explicit) => slugify(explicit),
            None => slugify(&title),
        };

        let sections = sections_from_dtos(dto.sections.unwrap_or_default());

        let page = Self {
            id: PageId::new_v4(),
            slug,
            title,
            is_published: dto.is_published.unwrap_or(false),
            show_in_navbar: dto.show_in_navbar.unwrap_or(false),
            nav_label: normalize_opt(dto.nav_label),
            nav_group: normalize_opt(dto.nav_group),
            seo: dto.seo.map(SeoMeta::from),
            sections,
            metadata: EntityMetadata::new(),
        };

        page.validate()?;
        Ok(page)
    }

    /// Apply a partial update DTO. Slug is recomputed only when `slug` or
    /// `title` is supplied. When `sections` is present the entire previous
    /// section set is discarded and replaced (fresh ids).
    pub fn apply(&mut self, dto: PageDto) -> Result<(), String> {
        if let Some(title) = dto.title {
            let title = title.trim().to_string();
            match dto.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
                Some(explicit) => self.slug = slugify(explicit),
                None => self.slug = slugify(&title),
            }
            self.title = title;
        } else if let Some(slug) = dto.slug.as_deref().map(str::trim).filter(|s| !s.is_empty()) {
            self.slug = slugify(slug);
        }

        if let Some(v) = dto.is_published {
            self.is_published = v;
        }
        if let Some(v) = dto.show_in_navbar {
            self.show_in_navbar = v;
        }
        if let Some(v) = dto.nav_label {
            self.nav_label = normalize_opt(Some(v));
        }
        if let Some(v) = dto.nav_group {
            self.nav_group = normalize_opt(Some(v));
        }
        if let Some(seo) = dto.seo {
            self.seo = Some(SeoMeta::from(seo));
        }
        if let Some(section_dtos) = dto.sections {
            self.sections = sections_from_dtos(section_dtos);
        }

        self.validate()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().len() < MIN_TITLE_LEN {
            return Err(format!(
                "title must be at least {} characters",
                MIN_TITLE_LEN
            ));
        }
        if !is_valid_slug(&self.slug) {
            return Err(format!("slug '{}' is not URL-safe", self.slug));
        }
        for section in &self.sections {
            section.content.validate()?;
        }
        Ok(())
    }

    /// Menu display text: `nav_label` when set, otherwise the title
    pub fn nav_label_or_title(&self) -> &str {
        self.nav_label.as_deref().unwrap_or(&self.title)
    }

    /// Sections in render order (stable on `order`, insertion sequence
    /// breaks ties)
    pub fn ordered_sections(&self) -> Vec<&Section> {
        let mut sections: Vec<&Section> = self.sections.iter().collect();
        sections.sort_by_key(|s| s.order);
        sections
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    pub fn before_write(&mut self) {
        self.metadata.touch();
        self.metadata.increment_version();
    }
}

impl AggregateRoot for Page {
    type Id = PageId;

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
        "a001"
    }

    fn collection_name() -> &'static str {
        "page"
    }

    fn element_name() -> &'static str {
        "Page"
    }

    fn list_name() -> &'static str {
        "Pages"
    }
}

fn sections_from_dtos(dtos: Vec<SectionDto>) -> Vec<Section> {
    dtos.into_iter()
        .enumerate()
        .map(|(idx, dto)| Section {
            id: SectionId::new_v4(),
            order: dto.order.unwrap_or(idx as i32),
            content: dto.content,
        })
        .collect()
}

fn normalize_opt(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

// ============================================================================
// Slug handling
// ============================================================================

/// Derive a URL-safe slug: lowercase, non `[a-z0-9]` runs become single
/// hyphens, leading/trailing hyphens trimmed.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for ch in input.chars() {
        let lower = ch.to_ascii_lowercase();
        if lower.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(lower);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

/// Matches `^[a-z0-9]+(-[a-z0-9]+)*$`
pub fn is_valid_slug(slug: &str) -> bool {
    if slug.is_empty() || slug.starts_with('-') || slug.ends_with('-') || slug.contains("--") {
        return false;
    }
    slug.chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Create/update payload for a page. All fields optional so the same shape
/// serves POST (create) and PATCH (partial update).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageDto {
    pub id: Option<String>,
    pub title: Option<String>,
    pub slug: Option<String>,
    pub is_published: Option<bool>,
    pub show_in_navbar: Option<bool>,
    pub nav_label: Option<String>,
    pub nav_group: Option<String>,
    pub sections: Option<Vec<SectionDto>>,
    pub seo: Option<SeoDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDto {
    pub order: Option<i32>,
    #[serde(flatten)]
    pub content: SectionContent,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeoDto {
    pub title: Option<String>,
    pub description: Option<String>,
}

impl From<SeoDto> for SeoMeta {
    fn from(dto: SeoDto) -> Self {
        SeoMeta {
            title: dto.title,
            description: dto.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_basic() {
        assert_eq!(slugify("Our Heritage"), "our-heritage");
        assert_eq!(slugify("  Tariffs & Charges 2025  "), "tariffs-charges-2025");
        assert_eq!(slugify("already-a-slug"), "already-a-slug");
    }

    #[test]
    fn test_slugify_collapses_and_trims_hyphens() {
        assert_eq!(slugify("--Power -- Outages--"), "power-outages");
        assert_eq!(slugify("a___b"), "a-b");
        assert!(is_valid_slug(&slugify("Weird!!  ++ Title")));
    }

    #[test]
    fn test_slug_shape() {
        assert!(is_valid_slug("our-heritage"));
        assert!(is_valid_slug("a1-b2"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("trailing-"));
        assert!(!is_valid_slug("double--hyphen"));
        assert!(!is_valid_slug("Upper-case"));
    }

    #[test]
    fn test_new_for_insert_derives_slug_from_title() {
        let dto = PageDto {
            title: Some("Our Heritage".into()),
            ..Default::default()
        };
        let page = Page::new_for_insert(dto).unwrap();
        assert_eq!(page.slug, "our-heritage");
        assert!(!page.is_published);
        assert!(page.sections.is_empty());
    }

    #[test]
    fn test_new_for_insert_requires_title() {
        let err = Page::new_for_insert(PageDto::default()).unwrap_err();
        assert!(err.contains("title"));
    }

    #[test]
    fn test_new_for_insert_rejects_short_title() {
        let dto = PageDto {
            title: Some("Hi".into()),
            ..Default::default()
        };
        assert!(Page::new_for_insert(dto).is_err());
    }

    #[test]
    fn test_sections_get_index_order_when_unspecified() {
        let dto = PageDto {
            title: Some("Test Page".into()),
            sections: Some(vec![
                SectionDto {
                    order: None,
                    content: SectionContent::Faq,
                },
                SectionDto {
                    order: Some(10),
                    content: SectionContent::Services,
                },
                SectionDto {
                    order: None,
                    content: SectionContent::Subscribe(SubscribeContent { prompt: None }),
                },
            ]),
            ..Default::default()
        };
        let page = Page::new_for_insert(dto).unwrap();
        let orders: Vec<i32> = page.sections.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![0, 10, 2]);
    }

    #[test]
    fn test_ordered_sections_stable_on_ties() {
        let mk = |order: i32, content: SectionContent| Section {
            id: SectionId::new_v4(),
            order,
            content,
        };
        let page = Page {
            sections: vec![
                mk(5, SectionContent::Faq),
                mk(1, SectionContent::Services),
                mk(5, SectionContent::Projects),
            ],
            ..Page::new_for_insert(PageDto {
                title: Some("Ordering".into()),
                ..Default::default()
            })
            .unwrap()
        };
        let tags: Vec<&str> = page
            .ordered_sections()
            .iter()
            .map(|s| s.content.type_tag())
            .collect();
        // ties keep insertion sequence
        assert_eq!(tags, vec!["SERVICES", "FAQ", "PROJECTS"]);
    }

    #[test]
    fn test_apply_recomputes_slug_only_when_supplied() {
        let mut page = Page::new_for_insert(PageDto {
            title: Some("Old Title".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(page.slug, "old-title");

        page.apply(PageDto {
            is_published: Some(true),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(page.slug, "old-title");
        assert!(page.is_published);

        page.apply(PageDto {
            title: Some("New Title".into()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(page.slug, "new-title");
    }

    #[test]
    fn test_apply_replaces_section_set_with_fresh_ids() {
        let mut page = Page::new_for_insert(PageDto {
            title: Some("Sections".into()),
            sections: Some(vec![SectionDto {
                order: None,
                content: SectionContent::Faq,
            }]),
            ..Default::default()
        })
        .unwrap();
        let old_ids: Vec<SectionId> = page.sections.iter().map(|s| s.id).collect();

        page.apply(PageDto {
            sections: Some(vec![
                SectionDto {
                    order: None,
                    content: SectionContent::Services,
                },
                SectionDto {
                    order: None,
                    content: SectionContent::Projects,
                },
            ]),
            ..Default::default()
        })
        .unwrap();

        assert_eq!(page.sections.len(), 2);
        for section in &page.sections {
            assert!(!old_ids.contains(&section.id));
        }
    }

    #[test]
    fn test_section_content_wire_tags() {
        let hero = SectionContent::Hero(HeroContent {
            title: "Powering the City".into(),
            subtitle: None,
            background_image: Some("/media/hero.jpg".into()),
        });
        let json = serde_json::to_value(&hero).unwrap();
        assert_eq!(json["type"], "HERO");
        assert_eq!(json["content"]["title"], "Powering the City");
        assert_eq!(json["content"]["backgroundImage"], "/media/hero.jpg");

        let faq = serde_json::to_value(SectionContent::Faq).unwrap();
        assert_eq!(faq["type"], "FAQ");
        assert!(faq.get("content").is_none());

        let wwu: SectionContent =
            serde_json::from_value(serde_json::json!({"type": "WORKWITHUS", "content": {}}))
                .unwrap();
        assert_eq!(wwu.type_tag(), "WORKWITHUS");
    }

    #[test]
    fn test_section_content_validation() {
        let bad_hero = SectionContent::Hero(HeroContent {
            title: "  ".into(),
            subtitle: None,
            background_image: None,
        });
        assert!(bad_hero.validate().is_err());

        let empty_grid = SectionContent::CardGrid(CardGridContent {
            heading: None,
            cards: vec![],
        });
        assert!(empty_grid.validate().is_err());
    }

    #[test]
    fn test_dynamic_section_classification() {
        assert!(SectionContent::Faq.is_dynamic());
        assert!(SectionContent::Services.is_dynamic());
        assert!(!SectionContent::Hero(HeroContent {
            title: "t".into(),
            subtitle: None,
            background_image: None,
        })
        .is_dynamic());
    }
}
