use crate::contacts::contact::{
    normalize_tags,
    Contact,
    ContactId,
    ContactForm,
    Tags,
};

#[test]
fn test_deserialize_contact() {
    let data = r#"{"id":1,"full_name":"Ann Archer","email":"ann@example.com","phone_number":"12345","tags":"work, friend"}"#;
    let contact = serde_json::from_str::<Contact>(data).unwrap();

    assert_eq!(contact.id(), &ContactId::from(1));
    assert_eq!(contact.id().to_string(), "1");
    assert_eq!(contact.full_name(), "Ann Archer");
    assert_eq!(contact.email(), Some("ann@example.com"));
    assert_eq!(contact.phone_number(), Some("12345"));
    assert_eq!(contact.tags(), &["work".to_string(), "friend".to_string()]);
    assert!(contact.has_tag("work"));
    assert!(!contact.has_tag("Work"));
    assert_eq!(contact.joined_tags(), "work, friend");
}

#[test]
fn test_deserialize_without_tags() {
    let contact = serde_json::from_str::<Contact>(r#"{"id":"a7","full_name":"Bob"}"#).unwrap();
    assert_eq!(contact.id().as_str(), "a7");
    assert!(contact.tags().is_empty());
    assert!(contact.email().is_none());

    let contact = serde_json::from_str::<Contact>(r#"{"id":2,"full_name":"Bob","tags":null}"#).unwrap();
    assert!(contact.tags().is_empty());

    let contact = serde_json::from_str::<Contact>(r#"{"id":2,"full_name":"Bob","tags":""}"#).unwrap();
    assert!(contact.tags().is_empty());
}

#[test]
fn test_normalize_tags() {
    assert_eq!(normalize_tags(None), Vec::<String>::new());
    assert_eq!(
        normalize_tags(Some(Tags::Joined("work, x".into()))),
        vec!["work".to_string(), "x".to_string()]
    );
    // only ", " separates tokens
    assert_eq!(
        normalize_tags(Some(Tags::Joined("a,b, c".into()))),
        vec!["a,b".to_string(), "c".to_string()]
    );

    assert_eq!(normalize_tags(Some(Tags::Joined("a, , b ".into()))), vec!["a".to_string(), "b".to_string()]);

    let list = vec!["work".to_string(), " spaced ".to_string(), "".to_string()];
    assert_eq!(
        normalize_tags(Some(Tags::List(list))),
        vec!["work".to_string(), "spaced".to_string()]
    );

    let normalized = vec!["work".to_string(), "x".to_string()];
    assert_eq!(normalize_tags(Some(Tags::List(normalized.clone()))), normalized);
}

#[test]
fn test_deserialize_tag_list() {
    let data = r#"{"id":1,"full_name":"A","tags":[" work ","x"]}"#;
    let contact = serde_json::from_str::<Contact>(data).unwrap();
    assert_eq!(contact.tags(), &["work".to_string(), "x".to_string()]);
    assert!(contact.has_tag("work"));
}

#[test]
fn test_normalize_idempotent() {
    let data = r#"{"id":5,"full_name":"Cy","tags":"one, two"}"#;
    let contact = serde_json::from_str::<Contact>(data).unwrap();

    let reloaded = serde_json::to_string(&contact).unwrap();
    assert!(reloaded.contains(r#""tags":["one","two"]"#));
    assert!(reloaded.contains(r#""id":"5""#));

    let again = serde_json::from_str::<Contact>(&reloaded).unwrap();
    assert_eq!(again, contact);
}

#[test]
fn test_contact_form() {
    let contact = Contact::new(ContactId::from(9), "Dee")
        .with_phone_number("555")
        .with_tags(&["a", "b"]);

    let mut form = ContactForm::from_contact(&contact);
    assert_eq!(form.field("full_name"), Some("Dee"));
    assert_eq!(form.field("phone_number"), Some("555"));
    assert_eq!(form.field("email"), None);
    assert_eq!(form.field("tags"), Some("a, b"));

    let json = serde_json::to_value(&form).unwrap();
    assert_eq!(json, serde_json::json!({
        "full_name": "Dee",
        "phone_number": "555",
        "tags": "a, b"
    }));

    form.reset();
    assert!(form.is_empty());
    assert_eq!(serde_json::to_string(&form).unwrap(), "{}");
}

#[test]
fn test_form_merge() {
    let contact = Contact::new(ContactId::from(4), "Dee").with_email("dee@example.com");
    let mut form = ContactForm::from_contact(&contact);
    assert_eq!(form.field("tags"), Some(""));

    form.merge(&ContactForm::new().with_field("tags", "gym"));
    assert_eq!(form.field("full_name"), Some("Dee"));
    assert_eq!(form.field("email"), Some("dee@example.com"));
    assert_eq!(form.field("tags"), Some("gym"));
}

#[test]
fn test_display() {
    let contact = Contact::new(ContactId::from("x1"), "Eve").with_tags(&["t"]);
    assert_eq!(contact.to_string(), "x1:Eve[t]");
    assert_eq!(Contact::new(ContactId::from(3), "Fay").to_string(), "3:Fay");
}
