use std::fmt;

use super::contact::Contact;

/// Rule narrowing which contacts are displayed. Exactly one is active.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    None,
    Name(String),
    Tag(String),
}

impl Filter {
    /// Criteria derived from the search box: empty text shows everything.
    pub fn from_search(value: &str) -> Self {
        match value.is_empty() {
            true  => Filter::None,
            false => Filter::Name(value.to_string()),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Filter::None)
    }

    pub fn apply<'a, I>(&self, contacts: I) -> Vec<&'a Contact>
    where I: IntoIterator<Item = &'a Contact> {
        match self {
            Filter::None => contacts.into_iter().collect(),
            Filter::Name(name) => filter_by_name(contacts, name),
            Filter::Tag(tag) => filter_by_tag(contacts, tag),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Filter::None      => write!(f, "none"),
            Filter::Name(v)   => write!(f, "name~{}", v),
            Filter::Tag(v)    => write!(f, "tag={}", v),
        }
    }
}

/// Contacts whose full name contains `substring`, ignoring case.
/// Source order is kept.
pub fn filter_by_name<'a, I>(contacts: I, substring: &str) -> Vec<&'a Contact>
where I: IntoIterator<Item = &'a Contact> {
    let needle = substring.to_lowercase();
    contacts.into_iter()
        .filter(|c| c.full_name().to_lowercase().contains(&needle))
        .collect()
}

/// Contacts carrying exactly `tag` (case-sensitive).
pub fn filter_by_tag<'a, I>(contacts: I, tag: &str) -> Vec<&'a Contact>
where I: IntoIterator<Item = &'a Contact> {
    contacts.into_iter()
        .filter(|c| c.has_tag(tag))
        .collect()
}
