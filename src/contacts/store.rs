use log::{debug, error};

use crate::core::Result;
use super::{
    contact::{Contact, ContactId},
    filter::Filter,
    service::ContactService,
};

/// In-memory snapshot of every contact as of the last successful fetch.
#[derive(Debug, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn contact(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Swaps in a whole new collection.
    pub fn replace(&mut self, contacts: Vec<Contact>) {
        self.contacts = contacts;
    }

    /// Fetches the full collection and replaces the snapshot. On failure the
    /// previous snapshot stays in place.
    pub async fn load<S>(&mut self, service: &S) -> Result<&[Contact]>
    where S: ContactService {
        match service.contacts().await {
            Ok(contacts) => {
                debug!("Loaded {} contacts", contacts.len());
                self.replace(contacts);
                Ok(self.contacts())
            },
            Err(e) => {
                error!("Fetching contacts error: {e}");
                Err(e)
            }
        }
    }

    pub fn filter(&self, filter: &Filter) -> Vec<&Contact> {
        filter.apply(&self.contacts)
    }
}
