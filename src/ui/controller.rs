use log::{debug, info, error};

use crate::contacts::{
    contact::{Contact, ContactId, ContactForm},
    filter::Filter,
    service::ContactService,
    store::ContactStore,
};

use super::{
    panel::{FormAction, Panel, PanelKind},
    templates::{Templates, TextTemplates},
    view::View,
};

/// User intents the controller reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Add,
    Home,
    Cancel,
    Edit(ContactId),
    Delete(ContactId),
    SubmitCreate(ContactForm),
    SubmitEdit(ContactForm),
    /// Submission of whichever form is visible.
    Submit(ContactForm),
    /// Settled search box value.
    Search(String),
    Tag(String),
}

/// The view-state controller. Owns the contact snapshot, the panel state
/// and the view it renders into, for the whole lifetime of a UI session.
pub struct ContactManager<S> {
    service     : S,
    store       : ContactStore,
    templates   : Box<dyn Templates>,

    panel       : Panel,
    view        : View,
}

impl<S> ContactManager<S> where S: ContactService {
    pub fn new(service: S) -> Self {
        Self::with_templates(service, Box::new(TextTemplates))
    }

    pub fn with_templates(service: S, templates: Box<dyn Templates>) -> Self {
        Self {
            service,
            store       : ContactStore::new(),
            templates,
            panel       : Panel::default(),
            view        : View::new(),
        }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    /// Contacts on the welcome panel under the active criteria.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        self.store.filter(self.panel.filter().unwrap_or(&Filter::None))
    }

    /// Initial fetch, then the welcome panel and the hidden create form.
    pub async fn start(&mut self) {
        self.refresh_from_service().await;
        self.mount_create_form();
    }

    /// Re-fetches the collection before showing the unfiltered welcome panel.
    /// A failed fetch keeps the previous collection on screen.
    pub async fn refresh_from_service(&mut self) {
        _ = self.store.load(&self.service).await;
        self.refresh_from_cache();
    }

    /// Shows the unfiltered welcome panel from the cached collection.
    pub fn refresh_from_cache(&mut self) {
        self.view.clear_search();
        self.display_welcome(Filter::None);
    }

    /// Raw search box edit, before it settles.
    pub fn input_search(&mut self, value: &str) {
        self.view.set_search(value);
    }

    pub async fn dispatch(&mut self, action: Action) {
        debug!("Dispatching {:?} on {} panel", action, self.panel.kind());

        match action {
            Action::Add                 => self.display_create(),
            Action::Home                => self.refresh_from_cache(),
            Action::Cancel              => self.cancel(),
            Action::Edit(id)            => self.open_editor(&id).await,
            Action::Delete(id)          => self.delete(&id).await,
            Action::SubmitCreate(form)  => self.submit_create(&form).await,
            Action::SubmitEdit(form)    => self.submit_edit(&form).await,
            Action::Submit(form)        => self.submit(&form).await,
            Action::Search(value)       => self.search(&value),
            Action::Tag(tag)            => self.select_tag(&tag),
        }
    }

    fn display_welcome(&mut self, filter: Filter) {
        let markup = self.templates.welcome(&self.store.filter(&filter));
        self.view.set_welcome(markup);
        self.panel = Panel::Welcome(filter);
        self.view.show(PanelKind::Welcome);
    }

    fn mount_create_form(&mut self) {
        let markup = self.templates.contact_form(None, FormAction::Create);
        self.view.mount_create_form(markup);
    }

    fn display_create(&mut self) {
        if self.view.create_form().is_none() {
            self.mount_create_form();
        }
        self.panel = Panel::Create;
        self.view.show(PanelKind::Create);
    }

    fn cancel(&mut self) {
        if self.panel.kind() == PanelKind::Welcome {
            debug!("Nothing to cancel on the welcome panel");
            return;
        }
        self.view.clear_search();
        self.display_welcome(Filter::None);
    }

    async fn open_editor(&mut self, id: &ContactId) {
        if self.panel.kind() != PanelKind::Welcome {
            debug!("Ignored editing contact {id} outside the welcome panel");
            return;
        }

        self.view.discard_edit_form();
        let contact = match self.service.contact(id).await {
            Ok(v) => v,
            Err(e) => {
                error!("Fetching contact {id} error: {e}");
                return;
            }
        };

        let markup = self.templates.contact_form(Some(&contact), FormAction::Edit);
        self.view.mount_edit_form(id, markup, ContactForm::from_contact(&contact));
        self.panel = Panel::Edit(id.clone());
        self.view.show(PanelKind::Edit);
    }

    async fn delete(&mut self, id: &ContactId) {
        if self.panel.kind() != PanelKind::Welcome {
            debug!("Ignored deleting contact {id} outside the welcome panel");
            return;
        }

        if let Err(e) = self.service.remove_contact(id).await {
            error!("Deleting contact {id} error: {e}");
            return;
        }
        info!("Contact {id} deleted.");
        self.refresh_from_service().await;
    }

    async fn submit_create(&mut self, form: &ContactForm) {
        if self.panel != Panel::Create {
            debug!("Ignored create form submitted outside the create panel");
            return;
        }

        if let Err(e) = self.service.create_contact(form).await {
            error!("Creating contact error: {e}");
            return;
        }
        info!("Contact created.");
        self.mount_create_form();
        self.refresh_from_service().await;
    }

    async fn submit_edit(&mut self, form: &ContactForm) {
        if self.panel.kind() != PanelKind::Edit {
            debug!("Ignored edit form submitted outside the edit panel");
            return;
        }
        let Some(edit) = self.view.edit_form() else {
            error!("Edit form is missing");
            return;
        };

        let id = edit.id().clone();
        let mut data = edit.form().clone();
        data.merge(form);

        if let Err(e) = self.service.update_contact(&id, &data).await {
            error!("Updating contact {id} error: {e}");
            return;
        }
        info!("Successfully updated contact {id} info.");
        self.refresh_from_service().await;
    }

    async fn submit(&mut self, form: &ContactForm) {
        match self.panel.kind() {
            PanelKind::Create   => self.submit_create(form).await,
            PanelKind::Edit     => self.submit_edit(form).await,
            PanelKind::Welcome  => debug!("No form to submit on the welcome panel"),
        }
    }

    fn search(&mut self, value: &str) {
        self.view.set_search(value);
        let filter = Filter::from_search(value);
        if self.panel.kind() != PanelKind::Welcome {
            // the hidden list follows the box, the visible panel stays
            debug!("Search settled on the {} panel", self.panel.kind());
            let markup = self.templates.welcome(&self.store.filter(&filter));
            self.view.set_welcome(markup);
            return;
        }
        self.display_welcome(filter);
    }

    fn select_tag(&mut self, tag: &str) {
        if self.panel.kind() != PanelKind::Welcome {
            debug!("Ignored tag {tag} outside the welcome panel");
            return;
        }
        self.display_welcome(Filter::Tag(tag.to_string()));
    }
}
