use std::fmt;

use crate::contacts::{
    contact::ContactId,
    filter::Filter,
};

/// Which of the three panels is on screen, with what it needs to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Welcome(Filter),
    Create,
    Edit(ContactId),
}

impl Default for Panel {
    fn default() -> Self {
        Panel::Welcome(Filter::None)
    }
}

impl Panel {
    pub fn kind(&self) -> PanelKind {
        match self {
            Panel::Welcome(_) => PanelKind::Welcome,
            Panel::Create     => PanelKind::Create,
            Panel::Edit(_)    => PanelKind::Edit,
        }
    }

    pub fn filter(&self) -> Option<&Filter> {
        match self {
            Panel::Welcome(filter) => Some(filter),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PanelKind {
    Welcome,
    Create,
    Edit,
}

impl PanelKind {
    pub const ALL: [PanelKind; 3] = [PanelKind::Welcome, PanelKind::Create, PanelKind::Edit];
}

impl fmt::Display for PanelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PanelKind::Welcome => "welcome",
            PanelKind::Create  => "create",
            PanelKind::Edit    => "edit",
        };
        write!(f, "{}", name)
    }
}

/// Label the contact form is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Create,
    Edit,
}

impl fmt::Display for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormAction::Create => write!(f, "Create"),
            FormAction::Edit   => write!(f, "Edit"),
        }
    }
}
