use crate::contacts::contact::{Contact, ContactId};
use crate::ui::{
    panel::FormAction,
    templates::{Templates, TextTemplates},
};

#[test]
fn test_welcome() {
    let templates = TextTemplates;
    assert!(templates.welcome(&[]).contains("There are no contacts."));

    let ann = Contact::new(ContactId::from(1), "Ann")
        .with_email("ann@example.com")
        .with_tags(&["work", "x"]);
    let bob = Contact::new(ContactId::from(2), "Bob");

    let markup = templates.welcome(&[&ann, &bob]);
    assert!(markup.contains("[1] Ann  <ann@example.com>  #work  #x"));
    assert!(markup.contains("edit 1 | delete 1"));
    assert!(markup.contains("[2] Bob\n"));
    assert!(markup.find("Ann").unwrap() < markup.find("Bob").unwrap());
    assert!(markup.contains(&templates.contact(&bob)));
}

#[test]
fn test_contact_form() {
    let templates = TextTemplates;
    let markup = templates.contact_form(None, FormAction::Create);
    assert!(markup.starts_with("== Create Contact =="));
    assert!(markup.contains("full_name    : \n"));

    let contact = Contact::new(ContactId::from(4), "Dee")
        .with_phone_number("555-0101")
        .with_tags(&["a", "b"]);
    let markup = templates.contact_form(Some(&contact), FormAction::Edit);
    assert!(markup.starts_with("== Edit Contact =="));
    assert!(markup.contains("full_name    : Dee\n"));
    assert!(markup.contains("phone_number : 555-0101\n"));
    assert!(markup.contains("tags         : a, b\n"));
    assert!(markup.contains("email        : \n"));
}
