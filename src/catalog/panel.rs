use super::disclosure::Panel;
use super::icons::{TechIcon, TechIconTable};
use super::record::{ListField, Project};

/// One row of the technologies panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackEntry<'a> {
    pub label: &'a str,
    /// `None` when the tag has no icon; the view draws a monogram instead.
    pub icon: Option<&'a TechIcon>,
}

/// What the open panel shows for a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelContent<'a> {
    Prose(&'a str),
    Stack(Vec<StackEntry<'a>>),
    Bullets(ListField, &'a [String]),
}

/// Project the selected record into the active panel.
///
/// Returns `None` when no panel is open, in which case only the base view is drawn.
pub fn render<'a>(
    active: Option<Panel>,
    project: &'a Project,
    icons: &'a TechIconTable,
) -> Option<PanelContent<'a>> {
    let content = match active? {
        Panel::Description => PanelContent::Prose(&project.description),
        Panel::Stack => PanelContent::Stack(stack_entries(project, icons)),
        Panel::Features => bullets(project, ListField::Features),
        Panel::Challenges => bullets(project, ListField::Challenges),
        Panel::Learnings => bullets(project, ListField::Learnings),
    };
    Some(content)
}

fn bullets(project: &Project, field: ListField) -> PanelContent<'_> {
    PanelContent::Bullets(field, project.entries(field))
}

fn stack_entries<'a>(project: &'a Project, icons: &'a TechIconTable) -> Vec<StackEntry<'a>> {
    project
        .technologies
        .iter()
        .map(|tag| StackEntry {
            label: tag,
            icon: icons.resolve(tag),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Disclosure};
    use pretty_assertions::assert_eq;

    const FIXTURE: &str = r#"{
        "techIcons": {
            "react": { "path": "/icons/re.svg" },
            "tailwindcss": { "path": "/icons/tail.svg" },
            "typescript": { "path": "/icons/ts.svg" },
            "appwrite": { "path": "/icons/appwrite.svg" },
            "prisma": { "path": "/icons/prisma.svg", "invertOnDark": true }
        },
        "projects": [
            {
                "id": "snapgram",
                "title": "Snapgram",
                "thumbnail": "/images/snapgram.png",
                "description": "A social media app.",
                "technologies": ["React", "Tailwindcss", "Typescript", "Appwrite"],
                "features": ["Auth", "Posts"],
                "challenges": ["Errors"],
                "liveUrl": "https://snapgram.example"
            },
            {
                "id": "bare",
                "title": "Bare",
                "thumbnail": "/images/bare.png",
                "description": "Nothing listed.",
                "technologies": ["Prisma", "Svelte", "React"],
                "liveUrl": ""
            }
        ]
    }"#;

    fn catalog() -> Catalog {
        Catalog::from_json(FIXTURE).unwrap()
    }

    #[test]
    fn test_closed_renders_nothing() {
        let catalog = catalog();
        let project = catalog.find_by_id(Some("snapgram")).unwrap();
        assert_eq!(render(None, project, catalog.icons()), None);
    }

    #[test]
    fn test_description_is_prose() {
        let catalog = catalog();
        let project = catalog.find_by_id(Some("snapgram")).unwrap();
        assert_eq!(
            render(Some(Panel::Description), project, catalog.icons()),
            Some(PanelContent::Prose("A social media app."))
        );
    }

    #[test]
    fn test_stack_lists_every_tag_in_order() {
        let catalog = catalog();
        let project = catalog.find_by_id(Some("snapgram")).unwrap();
        let mut disclosure = Disclosure::default();
        disclosure.open(Panel::Stack);

        let Some(PanelContent::Stack(entries)) =
            render(disclosure.active(), project, catalog.icons())
        else {
            panic!("expected stack content");
        };

        let rendered: Vec<(&str, Option<&str>)> = entries
            .iter()
            .map(|e| (e.label, e.icon.map(|i| i.path.as_str())))
            .collect();
        assert_eq!(
            rendered,
            vec![
                ("React", Some("/icons/re.svg")),
                ("Tailwindcss", Some("/icons/tail.svg")),
                ("Typescript", Some("/icons/ts.svg")),
                ("Appwrite", Some("/icons/appwrite.svg")),
            ]
        );
    }

    #[test]
    fn test_unmapped_tag_does_not_stop_the_stack() {
        let catalog = catalog();
        let project = catalog.find_by_id(Some("bare")).unwrap();
        let Some(PanelContent::Stack(entries)) =
            render(Some(Panel::Stack), project, catalog.icons())
        else {
            panic!("expected stack content");
        };

        assert_eq!(entries.len(), 3);
        assert!(entries[0].icon.is_some_and(|i| i.invert_on_dark));
        assert_eq!(entries[1].label, "Svelte");
        assert!(entries[1].icon.is_none());
        assert!(entries[2].icon.is_some_and(|i| !i.invert_on_dark));
    }

    #[test]
    fn test_bulleted_panels_project_their_field() {
        let catalog = catalog();
        let project = catalog.find_by_id(Some("snapgram")).unwrap();
        assert_eq!(
            render(Some(Panel::Features), project, catalog.icons()),
            Some(PanelContent::Bullets(
                ListField::Features,
                &["Auth".to_string(), "Posts".to_string()]
            ))
        );
        assert_eq!(
            render(Some(Panel::Challenges), project, catalog.icons()),
            Some(PanelContent::Bullets(ListField::Challenges, &["Errors".to_string()]))
        );
    }

    #[test]
    fn test_empty_list_is_an_empty_panel_not_a_hidden_one() {
        let catalog = catalog();
        let project = catalog.find_by_id(Some("bare")).unwrap();
        for panel in [Panel::Features, Panel::Challenges, Panel::Learnings] {
            match render(Some(panel), project, catalog.icons()) {
                Some(PanelContent::Bullets(_, items)) => assert!(items.is_empty()),
                other => panic!("expected empty bullets for {:?}, got {:?}", panel, other),
            }
        }
    }
}
