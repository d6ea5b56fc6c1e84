use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;
use log::debug;

use crate::{
    Error,
    core::Result,
};

use super::{
    contact::{Contact, ContactId, ContactForm},
    service::ContactService,
};

/// HTTP client of the contact service rooted at `base_url`.
pub struct APIClient {
    base_url    : String,
    client      : Client,
}

impl APIClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().build().map_err(|e| {
            Error::State(format!("Http error: creating http client error {e}"))
        })?;
        Self::with_client(base_url, client)
    }

    pub fn with_client(base_url: &str, client: Client) -> Result<Self> {
        Url::parse(base_url)?;
        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // No separator handling: the id is a bare suffix of the base url.
    pub(crate) fn contact_url(&self, id: &ContactId) -> String {
        format!("{}{}", self.base_url, id)
    }

    async fn send(&self, req: RequestBuilder) -> Result<Response> {
        let rsp = req
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| {
            Error::Network(format!("Http error: sending http request error {e}"))
        })?;

        let status = rsp.status();
        if !status.is_success() {
            let body = rsp.text().await.unwrap_or_default();
            return Err(Error::Network(format!("Http error: invalid http response {status} {body}")));
        }
        Ok(rsp)
    }

    async fn get_json<T>(&self, url: &str) -> Result<T>
    where T: DeserializeOwned {
        let rsp = self.send(self.client.get(url)).await?;
        rsp.json::<T>().await.map_err(|e| {
            Error::Parse(format!("Http error: deserialize json error {e}"))
        })
    }

    async fn send_json<T>(&self, req: RequestBuilder, data: &T) -> Result<()>
    where T: Serialize + ?Sized {
        let req = req
            .header("Content-Type", "application/json")
            .json(data);
        self.send(req).await.map(|_| ())
    }
}

impl ContactService for APIClient {
    async fn contacts(&self) -> Result<Vec<Contact>> {
        debug!("Fetching contacts from {}", self.base_url);
        self.get_json::<Vec<Contact>>(&self.base_url).await
    }

    async fn contact(&self, id: &ContactId) -> Result<Contact> {
        self.get_json::<Contact>(&self.contact_url(id)).await
    }

    async fn create_contact(&self, form: &ContactForm) -> Result<()> {
        let req = self.client.post(&self.base_url);
        self.send_json(req, form).await
    }

    async fn update_contact(&self, id: &ContactId, form: &ContactForm) -> Result<()> {
        let req = self.client.put(self.contact_url(id));
        self.send_json(req, form).await
    }

    async fn remove_contact(&self, id: &ContactId) -> Result<()> {
        #[derive(Serialize)]
        struct RequestData<'a> {
            id: &'a ContactId,
        }

        let req = self.client.delete(self.contact_url(id));
        self.send_json(req, &RequestData { id }).await
    }
}
