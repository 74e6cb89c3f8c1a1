// crates/isoxml-rs/src/codec.rs

//! Conversion between XML elements and document entities, driven by the
//! descriptor tables.
//!
//! Decoding is lenient: attribute values that fail to coerce, unknown
//! attributes and unexpected children are logged and skipped so that as
//! much of a real-world file as possible survives. Encoding emits
//! attributes in descriptor order and children in stored order.

use crate::document::{Document, Entity, EntityKey};
use crate::error::IsoxmlError;
use crate::model::{AttributeDescriptor, EntityDescriptor, EntityTag, NumberFormat, ScalarType};
use crate::types::{Attributes, Value, XmlId};
use crate::xml::XmlElement;
use log::{debug, trace, warn};

/// Decodes `element` as the document root and installs it.
///
/// # Errors
/// `UnknownEntityTag` if the element name is not a known tag.
pub(crate) fn decode_root(doc: &mut Document, element: &XmlElement) -> Result<EntityKey, IsoxmlError> {
    let tag = EntityTag::from_code(&element.name).ok_or_else(|| IsoxmlError::UnknownEntityTag {
        tag: element.name.clone(),
    })?;
    let key = decode_entity(doc, tag, element);
    doc.root = Some(key);
    Ok(key)
}

/// Decodes `element` as an entity of `tag`, recursing into its children.
///
/// The element name itself is not checked; the caller has already mapped
/// it to `tag`.
pub fn decode_entity(doc: &mut Document, tag: EntityTag, element: &XmlElement) -> EntityKey {
    let desc = tag.descriptor();
    let mut attributes = Attributes::new();
    let mut own_id = None;

    for attr in desc.attributes {
        let Some(raw) = element.attribute(attr.code) else {
            if !attr.optional && !attr.primary_id {
                warn!(
                    "{}",
                    IsoxmlError::MissingRequiredAttribute {
                        tag: desc.code,
                        attribute: attr.name,
                    }
                );
            }
            continue;
        };
        if attr.primary_id {
            own_id = Some(raw);
            continue;
        }
        match coerce(doc, desc, attr, raw) {
            Ok(value) => {
                attributes.insert(attr.name, value);
            }
            Err(e) => warn!("Skipping attribute: {}", e),
        }
    }
    for (code, _) in &element.attributes {
        if desc.attribute_by_code(code).is_none() {
            debug!("Ignoring unknown attribute {}@{}", desc.code, code);
        }
    }

    let mut children = Vec::with_capacity(element.children.len());
    for child in &element.children {
        match child_tag(desc, child) {
            Ok(child_tag) => children.push(decode_entity(doc, child_tag, child)),
            Err(e) => warn!("Skipping child element: {}", e),
        }
    }

    let key = doc.insert(Entity {
        tag,
        attributes,
        children,
        parent: None,
    });
    let child_keys = doc.entity(key).map(|e| e.children.clone()).unwrap_or_default();
    for child in child_keys {
        if let Ok(entity) = doc.entity_mut(child) {
            entity.parent = Some(key);
        }
    }

    if let Some(raw) = own_id {
        if let Err(e) = doc.references.allocate(desc.code, Some(raw), Some(key), None) {
            // Keep the text so the value survives a round trip.
            warn!("Keeping unregistered identifier on {}: {}", desc.code, e);
            if let Some(attr) = desc.primary_id() {
                if let Ok(entity) = doc.entity_mut(key) {
                    entity.attributes.insert(attr.name, Value::String(raw.to_string()));
                }
            }
        }
    }
    trace!("Decoded {} entity {:?}", desc.code, key);
    key
}

fn child_tag(parent: &EntityDescriptor, element: &XmlElement) -> Result<EntityTag, IsoxmlError> {
    let tag = EntityTag::from_code(&element.name).ok_or_else(|| IsoxmlError::UnknownEntityTag {
        tag: element.name.clone(),
    })?;
    if parent.child(tag).is_none() {
        return Err(IsoxmlError::UnexpectedChild {
            parent: parent.code,
            child: tag.code(),
        });
    }
    Ok(tag)
}

/// Converts attribute text into a typed value.
///
/// Reference values are registered in the document's reference table so
/// that forward references reserve their identifier. A reference whose
/// prefix names a different tag than the attribute's target is rejected.
fn coerce(
    doc: &mut Document,
    desc: &EntityDescriptor,
    attr: &AttributeDescriptor,
    raw: &str,
) -> Result<Value, IsoxmlError> {
    let invalid = || IsoxmlError::InvalidAttributeValue {
        tag: desc.code,
        attribute: attr.name,
        value: raw.to_string(),
    };

    match attr.scalar {
        ScalarType::String => Ok(Value::String(raw.to_string())),
        ScalarType::Number(NumberFormat::Integer) => raw
            .trim()
            .parse::<i64>()
            .map(Value::Integer)
            .map_err(|_| invalid()),
        ScalarType::Number(NumberFormat::Decimal) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .map(Value::Decimal)
            .ok_or_else(invalid),
        ScalarType::Reference(target) => {
            let id = XmlId::parse(raw)?;
            if id.tag() != target.code() {
                return Err(invalid());
            }
            doc.references.allocate(target.code(), Some(raw), None, None)?;
            Ok(Value::Reference(id))
        }
        ScalarType::Enum(_) => Ok(match attr.enum_by_code(raw) {
            Some(entry) => Value::Enum(entry),
            None => {
                debug!("Unknown {} code {:?} on {}, passing through", attr.name, raw, desc.code);
                Value::UnknownEnum(raw.to_string())
            }
        }),
    }
}

/// Encodes the entity behind `key` and its subtree into an XML element.
///
/// Entities whose tag requires an identifier but have none yet get one
/// allocated here. Optional identifiers are only written when registered.
///
/// # Errors
/// `UnknownEntity` if `key` (or one of its children) is not live.
pub fn encode_entity(doc: &mut Document, key: EntityKey) -> Result<XmlElement, IsoxmlError> {
    let desc = doc.entity(key).ok_or(IsoxmlError::UnknownEntity)?.tag.descriptor();

    let own_id = match desc.primary_id() {
        Some(attr) if !attr.optional => {
            let stored = doc.entity(key).and_then(|e| e.attributes.get(attr.name)).is_some();
            if stored { None } else { Some(doc.register_entity(key, None)?) }
        }
        Some(_) => doc.xml_id_of(key).cloned(),
        None => None,
    };

    let entity = doc.entity(key).ok_or(IsoxmlError::UnknownEntity)?;
    let mut element = XmlElement::new(desc.code);
    for attr in desc.attributes {
        if attr.primary_id {
            if let Some(id) = &own_id {
                element.push_attribute(attr.code, id.as_str());
                continue;
            }
        }
        if let Some(value) = entity.attributes.get(attr.name) {
            element.push_attribute(attr.code, value.to_xml_text());
        }
    }

    let children = entity.children.clone();
    for child in children {
        element.children.push(encode_entity(doc, child)?);
    }
    Ok(element)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xml::parse_str;

    fn decode(xml: &str) -> (Document, EntityKey) {
        let mut doc = Document::new();
        let element = parse_str(xml).unwrap();
        let key = decode_root(&mut doc, &element).unwrap();
        (doc, key)
    }

    #[test]
    fn test_decode_typed_values() {
        let (doc, key) = decode(
            r#"<PTN A="52.1234567" B="-7.5" C="12" D="4" G="9" X="ignored"/>"#,
        );
        let ptn = doc.entity(key).unwrap();
        assert_eq!(ptn.tag(), EntityTag::Position);
        assert_eq!(ptn.attribute("PositionNorth"), Some(&Value::Decimal(52.1234567)));
        assert_eq!(ptn.attribute("PositionEast"), Some(&Value::Decimal(-7.5)));
        assert_eq!(ptn.attribute("PositionUp"), Some(&Value::Integer(12)));
        assert_eq!(
            ptn.attribute("PositionStatus").and_then(Value::enum_name),
            Some("RtkFixedInteger")
        );
        assert_eq!(ptn.attribute("NumberOfSatellites"), Some(&Value::Integer(9)));
        assert_eq!(ptn.attributes().len(), 5);
    }

    #[test]
    fn test_invalid_values_are_skipped() {
        let (doc, key) = decode(r#"<PTN A="north" B="1.0" C="1.5" D="1"/>"#);
        let ptn = doc.entity(key).unwrap();
        assert_eq!(ptn.attribute("PositionNorth"), None);
        assert_eq!(ptn.attribute("PositionUp"), None);
        assert_eq!(ptn.attribute("PositionEast"), Some(&Value::Decimal(1.0)));
    }

    #[test]
    fn test_reference_to_wrong_tag_is_omitted() {
        let (doc, key) = decode(r#"<DAN A="00" C="CTR1"/>"#);
        let dan = doc.entity(key).unwrap();
        assert_eq!(dan.attribute("DeviceIdRef"), None);
        assert_eq!(dan.attribute("ClientNAMEValue"), Some(&Value::from("00")));
        // Nothing was reserved for the rejected value.
        assert!(doc.references().is_empty());

        let (doc, key) = decode(r#"<DAN A="00" C="DVC1"/>"#);
        let device = doc.entity(key).unwrap().attribute("DeviceIdRef");
        assert_eq!(device.and_then(Value::as_reference).map(|id| id.as_str()), Some("DVC1"));
    }

    #[test]
    fn test_unexpected_children_are_skipped() {
        let (doc, key) = decode(
            r#"<TSK A="TSK1" G="1"><CTR A="CTR1" B="x"/><FOO/><TIM A="2024-01-01T00:00:00" D="4"/></TSK>"#,
        );
        let tsk = doc.entity(key).unwrap();
        assert_eq!(tsk.children().len(), 1);
        let tim = doc.entity(tsk.children()[0]).unwrap();
        assert_eq!(tim.tag(), EntityTag::Time);
        assert_eq!(tim.parent(), Some(key));
    }

    #[test]
    fn test_unknown_root_is_rejected() {
        let mut doc = Document::new();
        let element = parse_str("<FOO/>").unwrap();
        assert!(matches!(
            decode_root(&mut doc, &element),
            Err(IsoxmlError::UnknownEntityTag { .. })
        ));
        assert!(doc.root().is_none());
    }

    #[test]
    fn test_encode_allocates_required_identifiers() {
        let mut doc = Document::new();
        let tsk = doc
            .create_entity(
                EntityTag::Task,
                [("TaskStatus", Document::enum_value(EntityTag::Task, "TaskStatus", "Planned").unwrap())],
            )
            .unwrap();
        let pln = doc
            .create_entity(
                EntityTag::Polygon,
                [("PolygonType", Document::enum_value(EntityTag::Polygon, "PolygonType", "Flag").unwrap())],
            )
            .unwrap();

        let element = encode_entity(&mut doc, tsk).unwrap();
        assert_eq!(
            element.attributes,
            vec![("A".to_string(), "TSK1".to_string()), ("G".to_string(), "1".to_string())]
        );
        // Optional identifiers are not invented.
        let element = encode_entity(&mut doc, pln).unwrap();
        assert_eq!(element.attribute("E"), None);
        assert_eq!(element.attribute("A"), Some("7"));
    }

    /// Builds an element for `tag` with valid text for each attribute.
    /// `full` adds every optional attribute and one required-only child
    /// per child slot.
    fn sample(tag: EntityTag, full: bool) -> XmlElement {
        let desc = tag.descriptor();
        let mut element = XmlElement::new(desc.code);
        for attr in desc.attributes.iter().filter(|a| full || !a.optional) {
            let text = match attr.scalar {
                _ if attr.primary_id => format!("{}1", desc.code),
                ScalarType::String => "x".to_string(),
                ScalarType::Number(NumberFormat::Integer) => "3".to_string(),
                ScalarType::Number(NumberFormat::Decimal) => "1.5".to_string(),
                ScalarType::Reference(target) => format!("{}7", target.code()),
                ScalarType::Enum(values) => values[0].code.to_string(),
            };
            element.push_attribute(attr.code, text);
        }
        if full {
            for child in desc.children {
                element.children.push(sample(child.tag, false));
            }
        }
        element
    }

    #[test]
    fn test_every_tag_round_trips() {
        for &tag in EntityTag::ALL {
            for full in [false, true] {
                let element = sample(tag, full);
                let mut doc = Document::new();
                let key = decode_root(&mut doc, &element).unwrap();
                let encoded = encode_entity(&mut doc, key).unwrap();
                assert_eq!(encoded, element, "{} (all attributes: {}) changed", tag, full);
            }
        }
    }

    #[test]
    fn test_encode_emits_references_and_child_order() {
        let xml = r#"<TSK A="TSK-3" C="CTR2" G="2"><TIM A="2024-01-01T00:00:00" D="4"/><TZN A="1"/><TIM A="2024-01-02T00:00:00" D="1"/></TSK>"#;
        let element = parse_str(xml).unwrap();
        let mut doc = Document::new();
        let key = decode_root(&mut doc, &element).unwrap();

        let encoded = encode_entity(&mut doc, key).unwrap();
        assert_eq!(encoded, element);
        assert_eq!(doc.references().len(), 2);
        assert_eq!(doc.resolve("CTR2"), None);
    }
}
