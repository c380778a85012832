/// The first launcher page shares the screen with the clock, so it holds fewer apps.
pub const FIRST_PAGE_CAPACITY: usize = 6;
pub const PAGE_CAPACITY: usize = 9;

/// Where tapping a launcher tile goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppTarget {
    /// A screen with its own route.
    Screen(&'static str),
    /// An app with no screen yet; shown as a loading placeholder.
    Placeholder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileApp {
    pub name: &'static str,
    pub glyph: &'static str,
    pub color: &'static str,
    pub target: AppTarget,
}

impl MobileApp {
    pub fn href(&self) -> String {
        match self.target {
            AppTarget::Screen(path) => path.to_string(),
            AppTarget::Placeholder => format!("/apps/{}", app_slug(self.name)),
        }
    }
}

/// URL-safe form of an app name: lower-case alphanumerics, everything else dropped.
pub fn app_slug(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn page_capacity(page_index: usize) -> usize {
    if page_index == 0 {
        FIRST_PAGE_CAPACITY
    } else {
        PAGE_CAPACITY
    }
}

/// Apps that fit on a launcher page. Anything past the page's capacity is not shown.
pub fn visible_apps(page_index: usize, apps: &[MobileApp]) -> &[MobileApp] {
    let capacity = page_capacity(page_index);
    if apps.len() > capacity {
        tracing::warn!(
            page = page_index + 1,
            apps = apps.len(),
            capacity,
            "launcher page over capacity, hiding extra apps"
        );
    }
    &apps[..apps.len().min(capacity)]
}

/// Find a placeholder app by its slug.
pub fn find_by_slug<'a>(pages: &'a [&'a [MobileApp]], slug: &str) -> Option<&'a MobileApp> {
    pages
        .iter()
        .flat_map(|page| page.iter())
        .find(|app| app_slug(app.name) == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app(name: &'static str) -> MobileApp {
        MobileApp {
            name,
            glyph: "*",
            color: "bg-gray-400",
            target: AppTarget::Placeholder,
        }
    }

    #[test]
    fn test_first_page_holds_six() {
        let apps: Vec<MobileApp> = (0..8).map(|_| app("Snake")).collect();
        assert_eq!(visible_apps(0, &apps).len(), 6);
        assert_eq!(visible_apps(0, &apps[..3]).len(), 3);
    }

    #[test]
    fn test_later_pages_hold_nine() {
        let apps: Vec<MobileApp> = (0..12).map(|_| app("Snake")).collect();
        assert_eq!(visible_apps(1, &apps).len(), 9);
        assert_eq!(visible_apps(4, &apps[..9]).len(), 9);
        assert!(visible_apps(2, &[]).is_empty());
    }

    #[test]
    fn test_overflow_keeps_leading_apps() {
        let apps = [
            app("A"), app("B"), app("C"), app("D"), app("E"), app("F"), app("G"),
        ];
        let names: Vec<&str> = visible_apps(0, &apps).iter().map(|a| a.name).collect();
        assert_eq!(names, vec!["A", "B", "C", "D", "E", "F"]);
    }

    #[test]
    fn test_href() {
        let screen = MobileApp {
            target: AppTarget::Screen("/projects"),
            ..app("Projects")
        };
        assert_eq!(screen.href(), "/projects");
        assert_eq!(app("iTunes").href(), "/apps/itunes");
    }

    #[test]
    fn test_slug_and_lookup() {
        assert_eq!(app_slug("iTunes"), "itunes");
        assert_eq!(app_slug("Guess Who?"), "guesswho");

        let first = [app("Snake"), app("iTunes")];
        let second = [app("Weather")];
        let pages: [&[MobileApp]; 2] = [&first, &second];
        assert_eq!(find_by_slug(&pages, "weather").map(|a| a.name), Some("Weather"));
        assert_eq!(find_by_slug(&pages, "itunes").map(|a| a.name), Some("iTunes"));
        assert!(find_by_slug(&pages, "chess").is_none());
    }
}
