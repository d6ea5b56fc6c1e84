use crate::contacts::contact::{ContactId, ContactForm};
use super::panel::PanelKind;

/// The edit form currently materialized, if any.
#[derive(Debug, Clone, PartialEq)]
pub struct EditForm {
    id      : ContactId,
    markup  : String,
    form    : ContactForm,
}

impl EditForm {
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    /// Field values the form was pre-filled with.
    pub fn form(&self) -> &ContactForm {
        &self.form
    }
}

/// Panel containers and the search box of one UI session.
/// Exactly one container is visible at any time.
#[derive(Debug)]
pub struct View {
    visible     : PanelKind,
    search      : String,

    welcome     : String,
    create_form : Option<String>,
    edit_form   : Option<EditForm>,
}

impl Default for View {
    fn default() -> Self {
        Self {
            visible     : PanelKind::Welcome,
            search      : String::new(),
            welcome     : String::new(),
            create_form : None,
            edit_form   : None,
        }
    }
}

impl View {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visible(&self) -> PanelKind {
        self.visible
    }

    pub fn is_visible(&self, kind: PanelKind) -> bool {
        self.visible == kind
    }

    /// Shows `kind`, hiding the other two containers.
    pub(crate) fn show(&mut self, kind: PanelKind) {
        self.visible = kind;
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub(crate) fn set_search(&mut self, value: &str) {
        self.search = value.to_string();
    }

    pub(crate) fn clear_search(&mut self) {
        self.search.clear();
    }

    pub fn welcome(&self) -> &str {
        &self.welcome
    }

    pub(crate) fn set_welcome(&mut self, markup: String) {
        self.welcome = markup;
    }

    pub fn create_form(&self) -> Option<&str> {
        self.create_form.as_deref()
    }

    pub(crate) fn mount_create_form(&mut self, markup: String) {
        self.create_form = Some(markup);
    }

    pub fn edit_form(&self) -> Option<&EditForm> {
        self.edit_form.as_ref()
    }

    pub(crate) fn mount_edit_form(&mut self, id: &ContactId, markup: String, form: ContactForm) {
        self.edit_form = Some(EditForm {
            id: id.clone(),
            markup,
            form,
        });
    }

    pub(crate) fn discard_edit_form(&mut self) {
        self.edit_form = None;
    }

    /// Markup of the visible container.
    pub fn markup(&self) -> &str {
        match self.visible {
            PanelKind::Welcome => &self.welcome,
            PanelKind::Create  => self.create_form.as_deref().unwrap_or_default(),
            PanelKind::Edit    => self.edit_form.as_ref().map(|v| v.markup.as_str()).unwrap_or_default(),
        }
    }
}
