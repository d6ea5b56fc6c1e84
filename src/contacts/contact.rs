use std::fmt;
use std::collections::BTreeMap;
use serde::{Serialize, Deserialize};

/// Separator used by the service for the joined tag field.
pub const TAG_SEPARATOR: &str = ", ";

/// Opaque contact key, appended verbatim to the service url.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "IdRepr", into = "String")]
pub struct ContactId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Number(u64),
    Text(String),
}

impl From<IdRepr> for ContactId {
    fn from(repr: IdRepr) -> Self {
        match repr {
            IdRepr::Number(v) => Self(v.to_string()),
            IdRepr::Text(v) => Self(v),
        }
    }
}

impl From<ContactId> for String {
    fn from(id: ContactId) -> Self {
        id.0
    }
}

impl From<&str> for ContactId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for ContactId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl ContactId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tag field as it may arrive: the service joins tags into one string,
/// anything already split is a sequence.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Tags {
    Joined(String),
    List(Vec<String>),
}

/// Turns a tag field into trimmed, non-empty tokens. Already normalized
/// tags come out unchanged.
pub fn normalize_tags(tags: Option<Tags>) -> Vec<String> {
    match tags {
        None => Vec::new(),
        Some(Tags::List(list)) => tokens(list.iter().map(|v| v.as_str())),
        Some(Tags::Joined(joined)) => tokens(joined.split(TAG_SEPARATOR)),
    }
}

fn tokens<'a, I>(iter: I) -> Vec<String>
where I: Iterator<Item = &'a str> {
    iter.map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string())
        .collect()
}

#[derive(Deserialize)]
struct ContactRecord {
    id          : ContactId,
    #[serde(default)]
    full_name   : String,
    #[serde(default)]
    email       : Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    tags        : Option<Tags>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ContactRecord")]
pub struct Contact {
    id          : ContactId,
    full_name   : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    email       : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phone_number: Option<String>,
    tags        : Vec<String>,
}

impl From<ContactRecord> for Contact {
    fn from(record: ContactRecord) -> Self {
        Self {
            id          : record.id,
            full_name   : record.full_name,
            email       : record.email,
            phone_number: record.phone_number,
            tags        : normalize_tags(record.tags),
        }
    }
}

impl Contact {
    pub fn new(id: ContactId, full_name: &str) -> Self {
        Self {
            id,
            full_name   : full_name.to_string(),
            email       : None,
            phone_number: None,
            tags        : Vec::new(),
        }
    }

    pub fn with_email(mut self, email: &str) -> Self {
        self.email = Some(email.to_string());
        self
    }

    pub fn with_phone_number(mut self, phone: &str) -> Self {
        self.phone_number = Some(phone.to_string());
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|v| v.to_string()).collect();
        self
    }

    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone_number(&self) -> Option<&str> {
        self.phone_number.as_deref()
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|v| v == tag)
    }

    /// Tags in the transport form used by the service and the forms.
    pub fn joined_tags(&self) -> String {
        self.tags.join(TAG_SEPARATOR)
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.full_name)?;
        if !self.tags.is_empty() {
            write!(f, "[{}]", self.joined_tags())?;
        }
        Ok(())
    }
}

/// Field name/value pairs of a submitted contact form.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ContactForm {
    fields: BTreeMap<String, String>,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-filled form for editing an existing contact.
    pub fn from_contact(contact: &Contact) -> Self {
        let mut form = Self::new();
        form.set_field("full_name", contact.full_name());
        if let Some(email) = contact.email() {
            form.set_field("email", email);
        }
        if let Some(phone) = contact.phone_number() {
            form.set_field("phone_number", phone);
        }
        form.set_field("tags", &contact.joined_tags());
        form
    }

    pub fn with_field(mut self, name: &str, value: &str) -> Self {
        self.set_field(name, value);
        self
    }

    pub fn set_field(&mut self, name: &str, value: &str) {
        self.fields.insert(name.to_string(), value.to_string());
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|v| v.as_str())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Overwrites fields with the ones present in `other`.
    pub fn merge(&mut self, other: &ContactForm) {
        for (name, value) in other.fields() {
            self.set_field(name, value);
        }
    }

    pub fn reset(&mut self) {
        self.fields.clear();
    }
}
