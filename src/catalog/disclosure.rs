use super::record::ListField;

/// A detail panel that can be opened over the project view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Description,
    Stack,
    Features,
    Challenges,
    Learnings,
}

impl Panel {
    /// Menu order on the details screen.
    pub const ALL: [Panel; 5] = [
        Panel::Description,
        Panel::Stack,
        Panel::Features,
        Panel::Challenges,
        Panel::Learnings,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Panel::Description => "Description",
            Panel::Stack => "Technologies Used",
            Panel::Features => "Features",
            Panel::Challenges => "Challenges",
            Panel::Learnings => "Progress Made",
        }
    }

    /// The list field a bulleted panel shows, if it is one.
    pub fn list_field(&self) -> Option<ListField> {
        match self {
            Panel::Features => Some(ListField::Features),
            Panel::Challenges => Some(ListField::Challenges),
            Panel::Learnings => Some(ListField::Learnings),
            Panel::Description | Panel::Stack => None,
        }
    }
}

/// Which panel, if any, is open. Flat toggle: the last `open` wins and `close`
/// always returns to the resting state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Disclosure {
    active: Option<Panel>,
}

impl Disclosure {
    pub fn active(&self) -> Option<Panel> {
        self.active
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn open(&mut self, panel: Panel) {
        self.active = Some(panel);
    }

    pub fn close(&mut self) {
        self.active = None;
    }
}
