use crate::core::Result;
use super::contact::{Contact, ContactId, ContactForm};

/// Remote contact storage.
#[allow(async_fn_in_trait)]
pub trait ContactService {
    async fn contacts(&self) -> Result<Vec<Contact>>;
    async fn contact(&self, id: &ContactId) -> Result<Contact>;

    async fn create_contact(&self, form: &ContactForm) -> Result<()>;
    async fn update_contact(&self, id: &ContactId, form: &ContactForm) -> Result<()>;
    async fn remove_contact(&self, id: &ContactId) -> Result<()>;
}
