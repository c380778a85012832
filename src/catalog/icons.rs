use serde::Deserialize;
use std::collections::HashMap;

/// Icon asset for a technology tag.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechIcon {
    pub path: String,
    /// Dark artwork that must be colour-inverted to stay visible on the black modal.
    #[serde(default)]
    pub invert_on_dark: bool,
}

/// Lookup table from technology tag to icon.
///
/// Keys are stored normalised (trimmed, ASCII lower-case) and lookups normalise
/// the requested tag the same way, so `"Next.js"` finds the `"next.js"` entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TechIconTable {
    icons: HashMap<String, TechIcon>,
}

fn normalize_tag(tag: &str) -> String {
    tag.trim().to_ascii_lowercase()
}

impl TechIconTable {
    pub fn new(icons: impl IntoIterator<Item = (String, TechIcon)>) -> Self {
        Self {
            icons: icons
                .into_iter()
                .map(|(tag, icon)| (normalize_tag(&tag), icon))
                .collect(),
        }
    }

    /// Resolve a tag. `None` means the caller draws its fallback badge.
    pub fn resolve(&self, tag: &str) -> Option<&TechIcon> {
        let icon = self.icons.get(&normalize_tag(tag));
        if icon.is_none() {
            tracing::debug!(tag, "no icon mapped for technology, using fallback");
        }
        icon
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}

impl<'de> Deserialize<'de> for TechIconTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = HashMap::<String, TechIcon>::deserialize(deserializer)?;
        Ok(Self::new(raw))
    }
}

/// Single-letter badge drawn in place of a missing icon.
pub fn monogram(tag: &str) -> String {
    tag.trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(path: &str) -> TechIcon {
        TechIcon {
            path: path.to_string(),
            invert_on_dark: false,
        }
    }

    fn table() -> TechIconTable {
        TechIconTable::new([
            ("react".to_string(), icon("/icons/re.svg")),
            ("next.js".to_string(), icon("/icons/next.svg")),
            (
                "Prisma".to_string(),
                TechIcon {
                    path: "/icons/prisma.svg".to_string(),
                    invert_on_dark: true,
                },
            ),
        ])
    }

    #[test]
    fn test_resolve_ignores_case_and_padding() {
        let table = table();
        assert_eq!(table.resolve("React").map(|i| i.path.as_str()), Some("/icons/re.svg"));
        assert_eq!(table.resolve("NEXT.JS").map(|i| i.path.as_str()), Some("/icons/next.svg"));
        assert_eq!(table.resolve(" react ").map(|i| i.path.as_str()), Some("/icons/re.svg"));
    }

    #[test]
    fn test_keys_are_normalised_on_construction() {
        let table = table();
        let prisma = table.resolve("prisma").expect("prisma should be mapped");
        assert!(prisma.invert_on_dark);
    }

    #[test]
    fn test_unmapped_tag_resolves_to_none() {
        assert!(table().resolve("Svelte").is_none());
        assert!(table().resolve("").is_none());
    }

    #[test]
    fn test_deserialize_from_config_map() {
        let table: TechIconTable = serde_json::from_str(
            r#"{ "Redis": { "path": "/icons/redis.svg" }, "prisma": { "path": "/icons/prisma.svg", "invertOnDark": true } }"#,
        )
        .unwrap();
        assert_eq!(table.len(), 2);
        assert!(!table.resolve("redis").unwrap().invert_on_dark);
        assert!(table.resolve("Prisma").unwrap().invert_on_dark);
    }

    #[test]
    fn test_monogram() {
        assert_eq!(monogram("Svelte"), "S");
        assert_eq!(monogram("  go"), "G");
        assert_eq!(monogram(""), "?");
    }
}
