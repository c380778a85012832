//! Static site content. Projects and technology icons are catalog
//! configuration and live in `content/catalog.json`; everything else is
//! presentational and declared here.

use crate::catalog::{Catalog, CatalogError};
use crate::launcher::{AppTarget, MobileApp};

const CATALOG_JSON: &str = include_str!("../content/catalog.json");

/// Build the production catalog from the embedded configuration.
pub fn load_catalog() -> Result<Catalog, CatalogError> {
    let catalog = Catalog::from_json(CATALOG_JSON)?;
    tracing::info!(
        projects = catalog.all_records().len(),
        icons = catalog.icons().len(),
        "catalog loaded"
    );
    Ok(catalog)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Testimonial {
    pub quote: &'static str,
    pub name: &'static str,
    /// Empty when the author gave no role.
    pub designation: &'static str,
    pub image: &'static str,
}

pub static TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Collaborating with Epiphanus was an absolute pleasure. His promptness, and dedication to delivering exceptional results were evident throughout our project.",
        name: "Michael Chen",
        designation: "Product Manager at TechFlow",
        image: "/images/profile.jpg",
    },
    Testimonial {
        quote: "Epiphanus's enthusiasm for every facet of development truly stands out. If you're seeking to elevate your website and elevate your brand, Epiphanus is the ideal partner.",
        name: "Emily Watson",
        designation: "",
        image: "/images/no-img.png",
    },
];

/// Skill categories in display order.
pub static SKILLS: &[(&str, &[&str])] = &[
    ("frontend", &["HTML & CSS", "Javascript (TS)", "React", "Next.js"]),
    ("backend", &["Upstash Redis", "PostgreSQL", "GraphQL", "Appwrite"]),
    ("tools", &["Tanstack-Query", "Vite", "Github", "Prisma"]),
    ("mobile", &["React Native", "Expo"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialPlatform {
    pub title: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

pub static SOCIAL_PLATFORMS: &[SocialPlatform] = &[
    SocialPlatform {
        title: "LinkedIn",
        glyph: "in",
        href: "https://www.linkedin.com/in/onyeso-epiphanus-8651b1284",
    },
    SocialPlatform {
        title: "Twitter",
        glyph: "𝕏",
        href: "https://x.com/patroncodes",
    },
    SocialPlatform {
        title: "GitHub",
        glyph: "⌥",
        href: "https://github.com/patroncodes",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Photo,
    Video,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MediaItem {
    pub id: &'static str,
    pub kind: MediaKind,
    pub title: &'static str,
    pub source: &'static str,
    pub favorite: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GallerySection {
    pub title: &'static str,
    pub items: &'static [MediaItem],
}

const fn photo(id: &'static str, source: &'static str) -> MediaItem {
    MediaItem {
        id,
        kind: MediaKind::Photo,
        title: "",
        source,
        favorite: true,
    }
}

pub static GALLERY: &[GallerySection] = &[
    GallerySection {
        title: "Today",
        items: &[MediaItem {
            id: "today-1",
            kind: MediaKind::Video,
            title: "What was bro thinking?😂",
            source: "/videos/listen.mp4",
            favorite: false,
        }],
    },
    GallerySection {
        title: "May 20",
        items: &[
            photo("may-1", "/images/movieflix1.jpg"),
            photo("may-2", "/images/movieflix2.jpg"),
            photo("may-3", "/images/movieflix3.jpg"),
            photo("may-4", "/images/movieflix4.jpg"),
            photo("may-5", "/images/profile.jpg"),
            photo("may-6", "/images/profile-animated.png"),
        ],
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    pub id: u32,
    pub query: &'static str,
    pub time: &'static str,
}

pub static BROWSER_HISTORY: &[HistoryEntry] = &[
    HistoryEntry { id: 1, query: "GitHub", time: "10:02" },
    HistoryEntry { id: 2, query: "MDN Web Docs", time: "13:45" },
    HistoryEntry { id: 3, query: "Vercel", time: "13:52" },
];

const INFO: MobileApp = MobileApp {
    name: "Info",
    glyph: "ℹ",
    color: "bg-gray-400",
    target: AppTarget::Screen("/info"),
};
const SNAKE: MobileApp = MobileApp {
    name: "Snake",
    glyph: "🐍",
    color: "bg-green-600",
    target: AppTarget::Placeholder,
};
const ITUNES: MobileApp = MobileApp {
    name: "iTunes",
    glyph: "🎵",
    color: "bg-red-200",
    target: AppTarget::Placeholder,
};

/// Launcher pages. The third page is left empty for the music widget.
pub static MOBILE_APPS: &[&[MobileApp]] = &[
    &[INFO, SNAKE, ITUNES],
    &[
        MobileApp {
            name: "Weather",
            glyph: "☁",
            color: "bg-blue-500",
            target: AppTarget::Placeholder,
        },
        MobileApp {
            name: "Guess",
            glyph: "🧠",
            color: "text-primary bg-white",
            target: AppTarget::Placeholder,
        },
        MobileApp {
            name: "Projects",
            glyph: "📁",
            color: "bg-yellow-300",
            target: AppTarget::Screen("/projects"),
        },
        INFO,
        SNAKE,
        ITUNES,
        MobileApp {
            name: "Chrome",
            glyph: "◎",
            color: "bg-gradient-chrome text-white",
            target: AppTarget::Screen("/browser"),
        },
    ],
    &[],
];

/// Apps pinned to the bottom of the home screen.
pub static DOCK_APPS: &[MobileApp] = &[
    MobileApp {
        name: "Photos",
        glyph: "▦",
        color: "bg-white",
        target: AppTarget::Screen("/gallery"),
    },
    MobileApp {
        name: "Projects",
        glyph: "📁",
        color: "bg-yellow-300",
        target: AppTarget::Screen("/projects"),
    },
    MobileApp {
        name: "Chrome",
        glyph: "◎",
        color: "bg-gradient-chrome text-white",
        target: AppTarget::Screen("/browser"),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Panel;
    use crate::launcher::{page_capacity, visible_apps};

    #[test]
    fn test_production_catalog_loads() {
        let catalog = load_catalog().expect("embedded catalog should be valid");
        assert_eq!(catalog.all_records().len(), 5);
        assert_eq!(catalog.all_records()[0].id, "snapgram");
    }

    #[test]
    fn test_every_production_tag_has_an_icon() {
        let catalog = load_catalog().unwrap();
        for project in catalog.all_records() {
            for tag in &project.technologies {
                assert!(
                    catalog.icons().resolve(tag).is_some(),
                    "{} uses unmapped technology {}",
                    project.id,
                    tag
                );
            }
        }
    }

    #[test]
    fn test_snapgram_stack_scenario() {
        use crate::catalog::panel::render;
        use crate::catalog::PanelContent;

        let catalog = load_catalog().unwrap();
        let snapgram = catalog.find_by_id(Some("snapgram")).unwrap();
        let Some(PanelContent::Stack(entries)) =
            render(Some(Panel::Stack), snapgram, catalog.icons())
        else {
            panic!("expected stack content");
        };
        let labels: Vec<&str> = entries.iter().map(|e| e.label).collect();
        assert_eq!(labels, vec!["React", "Tailwindcss", "Typescript", "Appwrite"]);
        assert!(entries.iter().all(|e| e.icon.is_some()));
    }

    #[test]
    fn test_only_prisma_is_inverted() {
        let catalog = load_catalog().unwrap();
        assert!(catalog.icons().resolve("Prisma").unwrap().invert_on_dark);
        assert!(!catalog.icons().resolve("Redis").unwrap().invert_on_dark);
    }

    #[test]
    fn test_project_without_lists() {
        let catalog = load_catalog().unwrap();
        let school = catalog.find_by_id(Some("school-manager")).unwrap();
        assert!(school.features.is_empty());
        assert!(school.challenges.is_empty());
        assert!(school.learnings.is_empty());
    }

    #[test]
    fn test_launcher_pages_fit() {
        for (index, page) in MOBILE_APPS.iter().enumerate() {
            assert!(page.len() <= page_capacity(index), "page {} overflows", index + 1);
            assert_eq!(visible_apps(index, page).len(), page.len());
        }
        assert!(MOBILE_APPS.last().is_some_and(|page| page.is_empty()));
    }

    #[test]
    fn test_gallery_ids_are_unique() {
        let mut ids: Vec<&str> = GALLERY
            .iter()
            .flat_map(|section| section.items.iter().map(|item| item.id))
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
