use crate::Error;
use crate::contacts::{
    contact::{Contact, ContactId},
    filter::Filter,
    store::ContactStore,
};
use crate::unitests::{sample_contacts, MockService, Op};

#[tokio::test]
async fn test_load_replaces() {
    let service = MockService::new(sample_contacts());
    let mut store = ContactStore::new();
    assert!(store.is_empty());

    store.replace(vec![Contact::new(ContactId::from(42), "Stale")]);
    let result = store.load(&service).await;
    assert!(result.is_ok());
    assert_eq!(result.unwrap().len(), 3);
    assert_eq!(store.len(), 3);
    assert!(store.contact(&ContactId::from(42)).is_none());
    assert_eq!(store.contact(&ContactId::from(2)).unwrap().full_name(), "Bob Banner");
    assert_eq!(service.calls(Op::List), 1);
}

#[tokio::test]
async fn test_load_failure_keeps_snapshot() {
    let service = MockService::new(sample_contacts());
    let mut store = ContactStore::new();
    assert!(store.load(&service).await.is_ok());

    service.fail(Op::List);
    assert!(store.load(&service).await.is_err());
    assert_eq!(store.contacts(), sample_contacts().as_slice());

    service.recover();
    service.set_offline(true);
    assert!(store.load(&service).await.is_err());
    assert_eq!(store.len(), 3);
}

#[tokio::test]
async fn test_load_undecodable_keeps_snapshot() {
    let service = MockService::new(sample_contacts());
    let mut store = ContactStore::new();
    assert!(store.load(&service).await.is_ok());

    service.garble(Op::List);
    let result = store.load(&service).await;
    assert!(matches!(result, Err(Error::Parse(_))));
    assert_eq!(store.contacts(), sample_contacts().as_slice());

    service.recover();
    assert!(store.load(&service).await.is_ok());
    assert_eq!(service.calls(Op::List), 3);
}

#[tokio::test]
async fn test_filter_does_not_mutate() {
    let service = MockService::new(sample_contacts());
    let mut store = ContactStore::new();
    _ = store.load(&service).await;

    assert_eq!(store.filter(&Filter::Tag("work".into())).len(), 1);
    assert_eq!(store.filter(&Filter::Name("o".into())).len(), 2);
    assert_eq!(store.filter(&Filter::None).len(), 3);
    assert_eq!(store.len(), 3);
}
