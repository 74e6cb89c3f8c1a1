// crates/isoxml-rs/src/resolver.rs

//! The per-document reference table.
//!
//! Maps external identifiers (`DVC1`, `PDT-3`, ...) to entities in the
//! document arena and hands out fresh identifiers when programmatically
//! created entities need one. Exactly one table exists per `Document`.

use crate::document::EntityKey;
use crate::error::IsoxmlError;
use crate::types::XmlId;
use log::trace;
use std::collections::BTreeMap;

/// One entry of the reference table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    pub xml_id: XmlId,
    /// The entity this identifier names. `None` while only forward
    /// references to the identifier have been seen.
    pub entity: Option<EntityKey>,
    /// The external system's own identifier (e.g. an FMIS database key),
    /// used to keep identifiers stable across save/load cycles.
    pub correlation_key: Option<String>,
}

/// Registry of all identifiers known to one document.
#[derive(Debug, Default)]
pub struct ReferenceTable {
    references: BTreeMap<XmlId, Reference>,
    /// `None` once the suffix after the highest one in use would overflow.
    next_suffix: BTreeMap<String, Option<i64>>,
}

impl ReferenceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers or allocates an identifier for an entity of `tag`.
    ///
    /// With `xml_id` given, the identifier is parsed, the allocation counter
    /// for its tag is advanced past it, and the stored reference is created or
    /// merged (`entity` and `correlation_key` overwrite only when supplied).
    ///
    /// Without `xml_id`, an existing reference of the same tag is reused when
    /// it already points at `entity`, or when its correlation key equals
    /// `correlation_key` and it is not bound to a different entity. Otherwise
    /// a new identifier `<tag><next suffix>` is created.
    ///
    /// # Errors
    /// `MalformedIdentifier` if `xml_id` does not match `<3 uppercase
    /// letters><digits>` or its prefix differs from `tag`.
    /// `IdentifierSpaceExhausted` if a fresh identifier is needed but the
    /// highest suffix in use is `i64::MAX`.
    pub fn allocate(
        &mut self,
        tag: &str,
        xml_id: Option<&str>,
        entity: Option<EntityKey>,
        correlation_key: Option<&str>,
    ) -> Result<&Reference, IsoxmlError> {
        let id = match xml_id {
            Some(raw) => {
                let id = XmlId::parse(raw)?;
                if id.tag() != tag {
                    return Err(IsoxmlError::MalformedIdentifier { id: raw.to_string() });
                }
                let next = self.next_suffix.entry(tag.to_string()).or_insert(Some(1));
                *next = match (*next, id.suffix().checked_add(1)) {
                    (Some(current), Some(after)) => Some(current.max(after)),
                    _ => None,
                };
                id
            }
            None => match self.find_existing(tag, entity, correlation_key) {
                Some(existing) => existing,
                None => {
                    let next = self.next_suffix.entry(tag.to_string()).or_insert(Some(1));
                    let suffix = next.ok_or_else(|| IsoxmlError::IdentifierSpaceExhausted {
                        tag: tag.to_string(),
                    })?;
                    *next = suffix.checked_add(1);
                    let id = XmlId::from_parts(tag, suffix);
                    trace!("Allocated new identifier {}", id);
                    id
                }
            },
        };

        let reference = self
            .references
            .entry(id.clone())
            .or_insert_with(|| Reference {
                xml_id: id,
                entity: None,
                correlation_key: None,
            });
        if entity.is_some() {
            reference.entity = entity;
        }
        if let Some(key) = correlation_key {
            reference.correlation_key = Some(key.to_string());
        }
        Ok(reference)
    }

    /// Dedup search used before a fresh identifier is allocated.
    fn find_existing(
        &self,
        tag: &str,
        entity: Option<EntityKey>,
        correlation_key: Option<&str>,
    ) -> Option<XmlId> {
        let same_tag = || self.references.values().filter(move |r| r.xml_id.tag() == tag);

        if let Some(key) = entity {
            if let Some(r) = same_tag().find(|r| r.entity == Some(key)) {
                return Some(r.xml_id.clone());
            }
        }
        let correlation_key = correlation_key?;
        same_tag()
            .find(|r| {
                r.correlation_key.as_deref() == Some(correlation_key)
                    && (r.entity.is_none() || r.entity == entity)
            })
            .map(|r| r.xml_id.clone())
    }

    /// Looks up the entity an identifier names. Never allocates.
    pub fn resolve(&self, xml_id: &str) -> Option<EntityKey> {
        let id = XmlId::parse(xml_id).ok()?;
        self.references.get(&id).and_then(|r| r.entity)
    }

    /// Looks up the full reference record for an identifier.
    pub fn get(&self, xml_id: &XmlId) -> Option<&Reference> {
        self.references.get(xml_id)
    }

    /// Finds the reference bound to `entity`.
    pub fn by_entity(&self, entity: EntityKey) -> Option<&Reference> {
        self.references.values().find(|r| r.entity == Some(entity))
    }

    /// All bound entities whose identifier carries `tag`, ordered by suffix.
    pub fn all_of_tag(&self, tag: &str) -> Vec<EntityKey> {
        let mut refs: Vec<&Reference> = self
            .references
            .values()
            .filter(|r| r.xml_id.tag() == tag && r.entity.is_some())
            .collect();
        refs.sort_by_key(|r| r.xml_id.suffix());
        refs.into_iter().filter_map(|r| r.entity).collect()
    }

    /// Drops the entity binding of every reference pointing at `entity`.
    /// The identifiers stay reserved.
    pub(crate) fn unbind(&mut self, entity: EntityKey) {
        for reference in self.references.values_mut() {
            if reference.entity == Some(entity) {
                reference.entity = None;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.references.len()
    }

    pub fn is_empty(&self) -> bool {
        self.references.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reference> {
        self.references.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(n: usize) -> EntityKey {
        EntityKey::from_index(n)
    }

    #[test]
    fn test_allocate_fresh_ids_are_distinct() {
        let mut table = ReferenceTable::new();
        let a = table.allocate("DVC", None, Some(key(0)), None).unwrap().xml_id.clone();
        let b = table.allocate("DVC", None, Some(key(1)), None).unwrap().xml_id.clone();
        let c = table.allocate("TSK", None, Some(key(2)), None).unwrap().xml_id.clone();

        assert_eq!(a.as_str(), "DVC1");
        assert_eq!(b.as_str(), "DVC2");
        assert_eq!(c.as_str(), "TSK1");
    }

    #[test]
    fn test_allocate_is_idempotent_per_entity() {
        let mut table = ReferenceTable::new();
        let first = table.allocate("PDT", None, Some(key(7)), None).unwrap().clone();
        let second = table.allocate("PDT", None, Some(key(7)), None).unwrap().clone();
        assert_eq!(first, second);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_existing_id_advances_counter() {
        let mut table = ReferenceTable::new();
        table.allocate("ABC", Some("ABC7"), Some(key(0)), None).unwrap();
        let next = table.allocate("ABC", None, Some(key(1)), None).unwrap();
        assert_eq!(next.xml_id.suffix(), 8);

        // A lower explicit id never moves the counter backwards.
        table.allocate("ABC", Some("ABC2"), Some(key(2)), None).unwrap();
        let next = table.allocate("ABC", None, Some(key(3)), None).unwrap();
        assert_eq!(next.xml_id.suffix(), 9);
    }

    #[test]
    fn test_highest_suffix_exhausts_allocation() {
        let mut table = ReferenceTable::new();
        table.allocate("CTR", Some("CTR9223372036854775807"), Some(key(0)), None).unwrap();
        assert!(matches!(
            table.allocate("CTR", None, Some(key(1)), None),
            Err(IsoxmlError::IdentifierSpaceExhausted { tag }) if tag == "CTR"
        ));
        // The existing binding is untouched and other tags still allocate.
        assert_eq!(table.resolve("CTR9223372036854775807"), Some(key(0)));
        assert_eq!(table.allocate("FRM", None, Some(key(2)), None).unwrap().xml_id.as_str(), "FRM1");
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_allocating_last_suffix_then_exhausts() {
        let mut table = ReferenceTable::new();
        table.allocate("PDT", Some("PDT9223372036854775806"), Some(key(0)), None).unwrap();
        let last = table.allocate("PDT", None, Some(key(1)), None).unwrap();
        assert_eq!(last.xml_id.suffix(), i64::MAX);
        assert!(table.allocate("PDT", None, Some(key(2)), None).is_err());
    }

    #[test]
    fn test_negative_ids_do_not_move_counter() {
        let mut table = ReferenceTable::new();
        table.allocate("TSK", Some("TSK-1"), Some(key(0)), None).unwrap();
        let next = table.allocate("TSK", None, Some(key(1)), None).unwrap();
        assert_eq!(next.xml_id.as_str(), "TSK1");
    }

    #[test]
    fn test_existing_id_merges() {
        let mut table = ReferenceTable::new();
        // Forward reference: only the id is known.
        table.allocate("CTR", Some("CTR3"), None, None).unwrap();
        assert_eq!(table.resolve("CTR3"), None);

        table.allocate("CTR", Some("CTR3"), None, Some("fmis-42")).unwrap();
        let merged = table.allocate("CTR", Some("CTR3"), Some(key(5)), None).unwrap();
        assert_eq!(merged.entity, Some(key(5)));
        assert_eq!(merged.correlation_key.as_deref(), Some("fmis-42"));
        assert_eq!(table.resolve("CTR3"), Some(key(5)));
    }

    #[test]
    fn test_correlation_key_dedup() {
        let mut table = ReferenceTable::new();
        let a1 = table.allocate("FRM", None, Some(key(1)), Some("K")).unwrap().clone();
        let a2 = table.allocate("FRM", None, Some(key(1)), Some("K")).unwrap().clone();
        assert_eq!(a1, a2);

        // Same key, different instance already bound elsewhere: no merge.
        let b = table.allocate("FRM", None, Some(key(2)), Some("K")).unwrap().clone();
        assert_ne!(a1.xml_id, b.xml_id);
    }

    #[test]
    fn test_correlation_key_binds_unbound_reference() {
        let mut table = ReferenceTable::new();
        table.allocate("PFD", Some("PFD4"), None, Some("field-9")).unwrap();
        let bound = table.allocate("PFD", None, Some(key(3)), Some("field-9")).unwrap();
        assert_eq!(bound.xml_id.as_str(), "PFD4");
        assert_eq!(bound.entity, Some(key(3)));
    }

    #[test]
    fn test_malformed_ids_are_rejected() {
        let mut table = ReferenceTable::new();
        for raw in ["DVC", "dvc1", "DVC1x", "12"] {
            assert!(matches!(
                table.allocate("DVC", Some(raw), None, None),
                Err(IsoxmlError::MalformedIdentifier { .. })
            ));
        }
        // Prefix must match the tag being registered.
        assert!(matches!(
            table.allocate("DVC", Some("DET1"), None, None),
            Err(IsoxmlError::MalformedIdentifier { .. })
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_lookups() {
        let mut table = ReferenceTable::new();
        table.allocate("DVC", Some("DVC10"), Some(key(10)), None).unwrap();
        table.allocate("DVC", Some("DVC2"), Some(key(2)), None).unwrap();
        table.allocate("DVC", Some("DVC5"), None, None).unwrap();
        table.allocate("DET", Some("DET1"), Some(key(1)), None).unwrap();

        assert_eq!(table.all_of_tag("DVC"), vec![key(2), key(10)]);
        assert_eq!(table.by_entity(key(1)).map(|r| r.xml_id.as_str()), Some("DET1"));
        assert_eq!(table.resolve("DVC5"), None);
        assert_eq!(table.resolve("not an id"), None);

        table.unbind(key(2));
        assert_eq!(table.resolve("DVC2"), None);
        assert_eq!(table.all_of_tag("DVC"), vec![key(10)]);
    }
}
