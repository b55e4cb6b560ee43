//! Navigation resolution: derives the rendered menu tree from the live page
//! set plus the fixed built-in route table.
//!
//! Pure and deterministic: repeated resolution over an unchanged input
//! yields an identical tree.

use crate::domain::a001_page::aggregate::Page;
use serde::{Deserialize, Serialize};

/// Slug of the specially-designated, aggressively cached home route
pub const HOME_SLUG: &str = "home";

/// A built-in route: fixed slug/title/group, merged into the menu alongside
/// database-backed pages. Locked — cannot be deleted, hidden, or moved to
/// another bucket.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinRoute {
    pub slug: &'static str,
    pub title: &'static str,
    /// `None` renders inline at top level, `Some` names a dropdown bucket
    pub nav_group: Option<&'static str>,
}

/// Built-in routes in presentation order. Dropdown buckets named here come
/// first in the rendered menu, in table order.
pub const BUILTIN_ROUTES: &[BuiltinRoute] = &[
    BuiltinRoute {
        slug: HOME_SLUG,
        title: "Home",
        nav_group: None,
    },
    BuiltinRoute {
        slug: "services",
        title: "Our Services",
        nav_group: Some("whatwedo"),
    },
    BuiltinRoute {
        slug: "projects",
        title: "Projects",
        nav_group: Some("whatwedo"),
    },
    BuiltinRoute {
        slug: "about",
        title: "About Us",
        nav_group: Some("aboutus"),
    },
    BuiltinRoute {
        slug: "leadership",
        title: "Leadership",
        nav_group: Some("aboutus"),
    },
    BuiltinRoute {
        slug: "tenders",
        title: "Tenders",
        nav_group: None,
    },
    BuiltinRoute {
        slug: "careers",
        title: "Careers",
        nav_group: None,
    },
    BuiltinRoute {
        slug: "news",
        title: "News",
        nav_group: None,
    },
    BuiltinRoute {
        slug: "contact",
        title: "Contact Us",
        nav_group: None,
    },
];

/// Look up a built-in route by slug
pub fn builtin_route(slug: &str) -> Option<&'static BuiltinRoute> {
    BUILTIN_ROUTES.iter().find(|r| r.slug == slug)
}

pub fn is_builtin_slug(slug: &str) -> bool {
    builtin_route(slug).is_some()
}

/// One navigation candidate: a page row or a built-in route
#[derive(Debug, Clone, PartialEq)]
pub struct NavSource {
    pub slug: String,
    pub title: String,
    pub nav_label: Option<String>,
    pub nav_group: Option<String>,
    pub show_in_navbar: bool,
    pub locked: bool,
}

impl NavSource {
    fn label(&self) -> &str {
        self.nav_label.as_deref().unwrap_or(&self.title)
    }
}

impl From<&Page> for NavSource {
    fn from(page: &Page) -> Self {
        NavSource {
            slug: page.slug.clone(),
            title: page.title.clone(),
            nav_label: page.nav_label.clone(),
            nav_group: page.nav_group.clone(),
            show_in_navbar: page.show_in_navbar,
            locked: false,
        }
    }
}

impl From<&BuiltinRoute> for NavSource {
    fn from(route: &BuiltinRoute) -> Self {
        NavSource {
            slug: route.slug.to_string(),
            title: route.title.to_string(),
            nav_label: None,
            nav_group: route.nav_group.map(str::to_string),
            show_in_navbar: true,
            locked: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub slug: String,
    pub label: String,
    pub locked: bool,
}

/// One dropdown bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavGroup {
    pub key: String,
    pub items: Vec<NavItem>,
}

/// The resolved menu: TOP items render inline, groups render as dropdowns,
/// HIDDEN items are listed for the admin navigation builder only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavTree {
    pub top: Vec<NavItem>,
    pub groups: Vec<NavGroup>,
    pub hidden: Vec<NavItem>,
}

/// Resolve the navigation tree from the current page set.
///
/// Built-ins and pages merge keyed by slug; a page sharing a built-in slug
/// overrides the display label only — lock status, bucket, and visibility
/// stay with the built-in. Items within every bucket order by label
/// (case-insensitive), slug as tiebreak. Dropdown buckets order by first
/// encounter: built-in table order first, then new groups in item-scan
/// order.
pub fn resolve(pages: &[Page]) -> NavTree {
    let mut merged: Vec<NavSource> = Vec::with_capacity(BUILTIN_ROUTES.len() + pages.len());
    for route in BUILTIN_ROUTES {
        merged.push(NavSource::from(route));
    }
    for page in pages {
        if let Some(existing) = merged.iter_mut().find(|s| s.slug == page.slug) {
            // editable fields only; the built-in keeps its bucket and lock
            existing.nav_label = Some(page.nav_label_or_title().to_string());
        } else {
            merged.push(NavSource::from(page));
        }
    }
    resolve_sources(merged)
}

fn resolve_sources(mut sources: Vec<NavSource>) -> NavTree {
    sources.sort_by(|a, b| {
        a.label()
            .to_lowercase()
            .cmp(&b.label().to_lowercase())
            .then_with(|| a.slug.cmp(&b.slug))
    });

    let mut top = Vec::new();
    let mut hidden = Vec::new();
    let mut group_keys: Vec<String> = BUILTIN_ROUTES
        .iter()
        .filter_map(|r| r.nav_group.map(str::to_string))
        .fold(Vec::new(), |mut keys, key| {
            if !keys.contains(&key) {
                keys.push(key);
            }
            keys
        });
    let mut groups: Vec<NavGroup> = group_keys
        .iter()
        .map(|key| NavGroup {
            key: key.clone(),
            items: Vec::new(),
        })
        .collect();

    for source in &sources {
        let item = NavItem {
            slug: source.slug.clone(),
            label: source.label().to_string(),
            locked: source.locked,
        };
        if !source.show_in_navbar {
            hidden.push(item);
            continue;
        }
        match source.nav_group.as_deref().filter(|g| !g.is_empty()) {
            None => top.push(item),
            Some(key) => {
                if let Some(pos) = group_keys.iter().position(|k| k == key) {
                    groups[pos].items.push(item);
                } else {
                    group_keys.push(key.to_string());
                    groups.push(NavGroup {
                        key: key.to_string(),
                        items: vec![item],
                    });
                }
            }
        }
    }

    NavTree {
        top,
        groups,
        hidden,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_page::aggregate::{Page, PageDto};

    fn page(title: &str, group: Option<&str>, show: bool) -> Page {
        Page::new_for_insert(PageDto {
            title: Some(title.to_string()),
            nav_group: group.map(str::to_string),
            show_in_navbar: Some(show),
            is_published: Some(true),
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let pages = vec![
            page("Our Heritage", Some("aboutus"), true),
            page("Energy Saving Tips", None, true),
            page("Hidden Draft", None, false),
        ];
        let first = resolve(&pages);
        let second = resolve(&pages);
        assert_eq!(first, second);
    }

    #[test]
    fn test_named_group_membership() {
        let pages = vec![page("Our Heritage", Some("aboutus"), true)];
        let tree = resolve(&pages);

        let aboutus = tree.groups.iter().find(|g| g.key == "aboutus").unwrap();
        assert!(aboutus.items.iter().any(|i| i.slug == "our-heritage"));
        assert!(!tree.top.iter().any(|i| i.slug == "our-heritage"));
        assert!(!tree.hidden.iter().any(|i| i.slug == "our-heritage"));
    }

    #[test]
    fn test_hidden_page_only_in_hidden_bucket() {
        let pages = vec![page("Hidden Draft", Some("aboutus"), false)];
        let tree = resolve(&pages);

        assert!(tree.hidden.iter().any(|i| i.slug == "hidden-draft"));
        assert!(!tree.top.iter().any(|i| i.slug == "hidden-draft"));
        for group in &tree.groups {
            assert!(!group.items.iter().any(|i| i.slug == "hidden-draft"));
        }
    }

    #[test]
    fn test_empty_group_means_top_level() {
        let pages = vec![page("Energy Saving Tips", Some(""), true)];
        let tree = resolve(&pages);
        assert!(tree.top.iter().any(|i| i.slug == "energy-saving-tips"));
    }

    #[test]
    fn test_every_page_lands_in_exactly_one_bucket() {
        let pages = vec![
            page("Alpha", None, true),
            page("Beta", Some("aboutus"), true),
            page("Gamma", Some("community"), true),
            page("Delta", None, false),
        ];
        let tree = resolve(&pages);

        for slug in ["alpha", "beta", "gamma", "delta"] {
            let in_top = tree.top.iter().filter(|i| i.slug == slug).count();
            let in_groups: usize = tree
                .groups
                .iter()
                .map(|g| g.items.iter().filter(|i| i.slug == slug).count())
                .sum();
            let in_hidden = tree.hidden.iter().filter(|i| i.slug == slug).count();
            assert_eq!(in_top + in_groups + in_hidden, 1, "slug {}", slug);
        }
    }

    #[test]
    fn test_page_overrides_builtin_label_not_lock() {
        let mut custom = page("Tender Notices", None, false);
        custom.slug = "tenders".to_string();
        let tree = resolve(&[custom]);

        // still at top level, still locked, label took the page's title
        let item = tree.top.iter().find(|i| i.slug == "tenders").unwrap();
        assert!(item.locked);
        assert_eq!(item.label, "Tender Notices");
        assert!(!tree.hidden.iter().any(|i| i.slug == "tenders"));
    }

    #[test]
    fn test_builtin_groups_precede_new_groups() {
        let pages = vec![page("Community Outreach", Some("community"), true)];
        let tree = resolve(&pages);

        let keys: Vec<&str> = tree.groups.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["whatwedo", "aboutus", "community"]);
    }

    #[test]
    fn test_items_sorted_by_label_within_bucket() {
        let pages = vec![
            page("Zebra Crossing Works", Some("whatwedo"), true),
            page("Asset Register", Some("whatwedo"), true),
        ];
        let tree = resolve(&pages);
        let whatwedo = tree.groups.iter().find(|g| g.key == "whatwedo").unwrap();
        let labels: Vec<&str> = whatwedo.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Asset Register",
                "Our Services",
                "Projects",
                "Zebra Crossing Works"
            ]
        );
    }

    #[test]
    fn test_nav_label_overrides_title() {
        let mut p = page("A Very Long Administrative Title", None, true);
        p.nav_label = Some("Short".to_string());
        let tree = resolve(&[p]);
        assert!(tree.top.iter().any(|i| i.label == "Short"));
    }
}
