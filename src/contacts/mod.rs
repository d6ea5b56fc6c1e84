pub mod contact;
pub mod filter;
pub mod store;
pub mod service;
pub mod api_client;

pub use self::{
    contact::{Contact, ContactId, ContactForm, Tags},
    filter::Filter,
    store::ContactStore,
    service::ContactService,
    api_client::APIClient,
};
