pub mod core;
pub mod contacts;
pub mod ui;

pub use crate::core::{
    error::{self, Error},
    config,
    logger,
    default_configuration as configuration,
};

pub use crate::contacts::{
    Contact,
    ContactId,
    ContactForm,
    ContactStore,
    ContactService,
    APIClient,
    Filter,
};

pub use crate::ui::{
    Action,
    ContactManager,
    Debouncer,
    Event,
    Panel,
    PanelKind,
    Session,
};
