// crates/isoxml-rs/tests/references.rs

//! Integration tests for identifier handling across parse, edit and save.

use isoxml_rs::{DataKind, Document, EntityTag, IsoxmlError, IsoxmlManager, Value};

const DEVICE_AND_ALLOCATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<ISO11783_TaskData VersionMajor="4" VersionMinor="3" DataTransferOrigin="1">
  <DVC A="DVC1" D="A00086000D00000B" F="31303030303030" G="FF000000006564">
    <DVP A="1" B="0" C="0.1" D="1"/>
  </DVC>
  <TSK A="TSK1" G="1">
    <DAN A="A00086000D00000B" C="DVC1"/>
  </TSK>
</ISO11783_TaskData>"#;

fn device_attributes(name: &str) -> Vec<(&'static str, Value)> {
    vec![
        ("DeviceDesignator", Value::from(name)),
        ("ClientNAME", Value::from("A00086000D00000B")),
        ("DeviceStructureLabel", Value::from("31303030303030")),
        ("DeviceLocalizationLabel", Value::from("FF000000006564")),
    ]
}

#[test]
fn test_reference_resolves_to_same_entity() {
    let _ = env_logger::try_init();
    let manager = IsoxmlManager::default();
    let doc = manager.parse_str(DEVICE_AND_ALLOCATION).unwrap();

    let root = doc.root().unwrap();
    let dvc = doc.children_in_role(root, "Device")[0];
    let tsk = doc.children_in_role(root, "Task")[0];
    let dan = doc.children_in_role(tsk, "DeviceAllocation")[0];

    let target = doc
        .entity(dan)
        .unwrap()
        .attribute("DeviceIdRef")
        .and_then(Value::as_reference)
        .expect("DAN has no device reference");
    assert_eq!(target.as_str(), "DVC1");
    assert_eq!(doc.resolve(target.as_str()), Some(dvc));
    assert_eq!(doc.xml_id_of(dvc).map(|id| id.as_str()), Some("DVC1"));

    // The presentation nested in the device belongs to that exact instance.
    let dvp = doc.children_in_role(dvc, "DeviceValuePresentation")[0];
    assert_eq!(doc.entity(dvp).unwrap().parent(), Some(dvc));
}

#[test]
fn test_forward_reference_stays_unresolved() {
    let manager = IsoxmlManager::default();
    let text = r#"<ISO11783_TaskData VersionMajor="4" VersionMinor="3" DataTransferOrigin="1"><TSK A="TSK1" C="CTR4" G="1"/></ISO11783_TaskData>"#;
    let mut doc = manager.parse_str(text).unwrap();

    assert_eq!(doc.resolve("CTR4"), None);
    let reference = doc
        .references()
        .iter()
        .find(|r| r.xml_id.as_str() == "CTR4")
        .expect("Forward reference was not reserved");
    assert_eq!(reference.entity, None);

    // A customer created later never collides with the reserved id.
    let ctr = doc
        .create_entity(EntityTag::Customer, [("CustomerLastName", Value::from("Late"))])
        .unwrap();
    doc.add_child(doc.root().unwrap(), ctr).unwrap();
    assert_eq!(doc.register_entity(ctr, None).unwrap().as_str(), "CTR5");

    let written = manager.serialize_xml(&mut doc).unwrap();
    assert!(written.contains(r#"C="CTR4""#));
    assert!(written.contains(r#"<CTR A="CTR5" B="Late"/>"#));
}

#[test]
fn test_new_ids_continue_after_parsed_ids() {
    let manager = IsoxmlManager::default();
    let mut doc = manager.parse_str(DEVICE_AND_ALLOCATION).unwrap();

    let device = doc.create_entity(EntityTag::Device, device_attributes("Second")).unwrap();
    doc.add_child(doc.root().unwrap(), device).unwrap();
    assert_eq!(doc.register_entity(device, None).unwrap().as_str(), "DVC2");
    // Idempotent for the same instance.
    assert_eq!(doc.register_entity(device, None).unwrap().as_str(), "DVC2");
    assert_eq!(doc.entities_of_tag(EntityTag::Device).len(), 2);
}

#[test]
fn test_programmatic_document_round_trip() {
    let _ = env_logger::try_init();
    let mut manager = IsoxmlManager::default();
    let mut doc = manager.create_document().unwrap();
    let root = doc.root().unwrap();

    let customer = doc
        .create_entity(EntityTag::Customer, [("CustomerLastName", Value::from("Meier"))])
        .unwrap();
    doc.add_child(root, customer).unwrap();

    let planned = Document::enum_value(EntityTag::Task, "TaskStatus", "Planned").unwrap();
    let customer_ref = doc.reference_to(customer).unwrap();
    let task = doc
        .create_entity(
            EntityTag::Task,
            [
                ("TaskDesignator", Value::from("Spring spraying")),
                ("CustomerIdRef", customer_ref),
                ("TaskStatus", planned),
            ],
        )
        .unwrap();
    doc.add_child(root, task).unwrap();

    let data = manager.serialize(&mut doc).unwrap();
    let reloaded = manager.parse(&data, DataKind::Zip).unwrap();

    let task_key = reloaded.entities_of_tag(EntityTag::Task)[0];
    let reference = reloaded
        .entity(task_key)
        .unwrap()
        .attribute("CustomerIdRef")
        .and_then(Value::as_reference)
        .unwrap()
        .clone();
    let target = reloaded.resolve_entity(reference.as_str()).unwrap();
    assert_eq!(target.attribute("CustomerLastName"), Some(&Value::from("Meier")));
    assert_eq!(reloaded.xml_id_of(task_key).unwrap().as_str(), "TSK1");
}

#[test]
fn test_correlation_keys_keep_ids_stable() {
    let manager = IsoxmlManager::default();
    let mut doc = manager.create_document().unwrap();
    let root = doc.root().unwrap();

    let first = doc.create_entity(EntityTag::Device, device_attributes("A")).unwrap();
    let second = doc.create_entity(EntityTag::Device, device_attributes("B")).unwrap();
    doc.add_child(root, first).unwrap();
    doc.add_child(root, second).unwrap();

    let a = doc.register_entity(first, Some("fmis:device:17")).unwrap();
    let again = doc.register_entity(first, Some("fmis:device:17")).unwrap();
    assert_eq!(a, again);

    // Same external key on a different, already-bound instance does not merge.
    let b = doc.register_entity(second, Some("fmis:device:17")).unwrap();
    assert_ne!(a, b);

    let reference = doc.references().get(&a).unwrap();
    assert_eq!(reference.correlation_key.as_deref(), Some("fmis:device:17"));
    assert_eq!(reference.entity, Some(first));
}

#[test]
fn test_removed_entity_no_longer_resolves() {
    let manager = IsoxmlManager::default();
    let mut doc = manager.parse_str(DEVICE_AND_ALLOCATION).unwrap();
    let dvc = doc.resolve("DVC1").unwrap();

    doc.remove_entity(dvc).unwrap();
    assert_eq!(doc.resolve("DVC1"), None);
    assert!(doc.entities_of_tag(EntityTag::Device).is_empty());

    // The allocation still carries its reference text.
    let written = manager.serialize_xml(&mut doc).unwrap();
    assert!(!written.contains("<DVC"));
    assert!(written.contains(r#"C="DVC1""#));
}

#[test]
fn test_exhausted_identifier_space_is_an_error() {
    let manager = IsoxmlManager::default();
    let text = r#"<ISO11783_TaskData VersionMajor="4" VersionMinor="3" DataTransferOrigin="1"><CTR A="CTR9223372036854775807" B="Last"/></ISO11783_TaskData>"#;
    let mut doc = manager.parse_str(text).unwrap();

    let ctr = doc
        .create_entity(EntityTag::Customer, [("CustomerLastName", Value::from("New"))])
        .unwrap();
    doc.add_child(doc.root().unwrap(), ctr).unwrap();
    assert!(matches!(
        doc.register_entity(ctr, None),
        Err(IsoxmlError::IdentifierSpaceExhausted { .. })
    ));
    assert!(matches!(
        manager.serialize_xml(&mut doc),
        Err(IsoxmlError::IdentifierSpaceExhausted { .. })
    ));

    // The existing customer keeps its identifier.
    let last = doc.resolve_entity("CTR9223372036854775807").unwrap();
    assert_eq!(last.attribute("CustomerLastName"), Some(&Value::from("Last")));
}
