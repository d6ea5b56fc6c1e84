use std::fmt::Write;

use crate::contacts::contact::Contact;
use super::panel::FormAction;

/// Render functions for the three panel fragments.
pub trait Templates {
    /// Contact list shown on the welcome panel.
    fn welcome(&self, contacts: &[&Contact]) -> String;

    /// One entry of the list, composed into `welcome`.
    fn contact(&self, contact: &Contact) -> String;

    /// Create or edit form, pre-filled from `contact` when editing.
    fn contact_form(&self, contact: Option<&Contact>, action: FormAction) -> String;
}

const FORM_FIELDS: [&str; 4] = ["full_name", "email", "phone_number", "tags"];

/// Plain text templates for terminal front-ends.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextTemplates;

impl Templates for TextTemplates {
    fn welcome(&self, contacts: &[&Contact]) -> String {
        let mut out = String::from("Contacts\n--------\n");
        if contacts.is_empty() {
            out.push_str("There are no contacts.\n");
            return out;
        }

        for contact in contacts {
            out.push_str(&self.contact(contact));
        }
        out
    }

    fn contact(&self, contact: &Contact) -> String {
        let mut out = String::new();
        _ = write!(out, "[{}] {}", contact.id(), contact.full_name());
        if let Some(email) = contact.email() {
            _ = write!(out, "  <{}>", email);
        }
        if let Some(phone) = contact.phone_number() {
            _ = write!(out, "  {}", phone);
        }
        for tag in contact.tags() {
            _ = write!(out, "  #{}", tag);
        }
        _ = writeln!(out);
        _ = writeln!(out, "    edit {} | delete {}", contact.id(), contact.id());
        out
    }

    fn contact_form(&self, contact: Option<&Contact>, action: FormAction) -> String {
        let mut out = String::new();
        _ = writeln!(out, "== {} Contact ==", action);

        for field in FORM_FIELDS {
            let value = contact.map(|c| match field {
                "full_name"     => c.full_name().to_string(),
                "email"         => c.email().unwrap_or_default().to_string(),
                "phone_number"  => c.phone_number().unwrap_or_default().to_string(),
                _               => c.joined_tags(),
            }).unwrap_or_default();
            _ = writeln!(out, "{:<13}: {}", field, value);
        }
        _ = writeln!(out, "submit FIELD=VALUE... | cancel");
        out
    }
}
