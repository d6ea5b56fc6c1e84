pub mod panel;
pub mod templates;
pub mod view;
pub mod controller;
pub mod debounce;
pub mod session;

pub use self::{
    panel::{FormAction, Panel, PanelKind},
    templates::{Templates, TextTemplates},
    view::{EditForm, View},
    controller::{Action, ContactManager},
    debounce::Debouncer,
    session::{Event, Session},
};
