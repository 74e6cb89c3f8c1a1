// crates/isoxml-rs/src/document.rs

//! The in-memory task data document.
//!
//! Entities live in an arena owned by the `Document` and are addressed by
//! [`EntityKey`]. A parent lists its children by key; the tree shape is
//! maintained by [`Document::add_child`] and [`Document::remove_entity`].
//! Arena slots are never reused, so a key of a removed entity simply stops
//! resolving.

use crate::error::IsoxmlError;
use crate::model::EntityTag;
use crate::resolver::ReferenceTable;
use crate::types::{Attributes, Value, XmlId};
use log::{debug, trace};
use std::collections::BTreeMap;

/// Handle to an entity in a [`Document`]'s arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityKey(usize);

impl EntityKey {
    pub(crate) fn from_index(index: usize) -> Self {
        EntityKey(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub(crate) tag: EntityTag,
    pub(crate) attributes: Attributes,
    pub(crate) children: Vec<EntityKey>,
    pub(crate) parent: Option<EntityKey>,
}

impl Entity {
    pub fn tag(&self) -> EntityTag {
        self.tag
    }

    /// Attribute values keyed by semantic field name.
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    pub fn attribute(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Children in document order.
    pub fn children(&self) -> &[EntityKey] {
        &self.children
    }

    pub fn parent(&self) -> Option<EntityKey> {
        self.parent
    }
}

/// A non-XML (or unparsed XML) member of a task data package.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuxiliaryFile {
    /// `*.BIN` files: time logs and grids.
    Binary(Vec<u8>),
    /// Everything else, e.g. external XML fragments and time log headers.
    Text(String),
}

impl AuxiliaryFile {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            AuxiliaryFile::Binary(data) => data,
            AuxiliaryFile::Text(text) => text.as_bytes(),
        }
    }
}

/// A task data document: the entity tree, its reference table and the
/// auxiliary files shipped next to the primary XML.
#[derive(Debug, Default)]
pub struct Document {
    pub(crate) entities: Vec<Option<Entity>>,
    pub(crate) root: Option<EntityKey>,
    pub(crate) references: ReferenceTable,
    pub(crate) files: BTreeMap<String, AuxiliaryFile>,
    pub(crate) link_list: Option<String>,
}

impl Document {
    /// Creates an empty document without a root entity.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Tree access ---

    pub fn root(&self) -> Option<EntityKey> {
        self.root
    }

    pub fn root_entity(&self) -> Option<&Entity> {
        self.root.and_then(|key| self.entity(key))
    }

    /// Returns the live entity behind `key`.
    pub fn entity(&self, key: EntityKey) -> Option<&Entity> {
        self.entities.get(key.0).and_then(Option::as_ref)
    }

    pub(crate) fn entity_mut(&mut self, key: EntityKey) -> Result<&mut Entity, IsoxmlError> {
        self.entities
            .get_mut(key.0)
            .and_then(Option::as_mut)
            .ok_or(IsoxmlError::UnknownEntity)
    }

    pub(crate) fn insert(&mut self, entity: Entity) -> EntityKey {
        let key = EntityKey::from_index(self.entities.len());
        self.entities.push(Some(entity));
        key
    }

    /// Iterates over all live entities in creation order.
    pub fn entities(&self) -> impl Iterator<Item = (EntityKey, &Entity)> {
        self.entities
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_ref().map(|e| (EntityKey(i), e)))
    }

    /// The children of `key` nested under the given role name.
    pub fn children_in_role(&self, key: EntityKey, role: &str) -> Vec<EntityKey> {
        let Some(entity) = self.entity(key) else {
            return Vec::new();
        };
        let Some(slot) = entity.tag.descriptor().child_by_role(role) else {
            return Vec::new();
        };
        entity
            .children
            .iter()
            .copied()
            .filter(|&child| self.entity(child).is_some_and(|c| c.tag == slot.tag))
            .collect()
    }

    // --- Programmatic construction ---

    /// Creates a detached entity of `tag` from `(semantic name, value)` pairs.
    ///
    /// Passing the identifier attribute (e.g. `TaskId`) with a string value
    /// registers that identifier for the new entity. All other required
    /// attributes must be present.
    ///
    /// # Errors
    /// `UnknownAttribute`, `InvalidAttributeValue` for a value of the wrong
    /// type, `MissingRequiredAttribute`, or `MalformedIdentifier`.
    pub fn create_entity<'a, I>(&mut self, tag: EntityTag, attributes: I) -> Result<EntityKey, IsoxmlError>
    where
        I: IntoIterator<Item = (&'a str, Value)>,
    {
        let desc = tag.descriptor();
        let mut map = Attributes::new();
        let mut explicit_id = None;

        for (name, value) in attributes {
            let attr = desc.attribute(name).ok_or_else(|| IsoxmlError::UnknownAttribute {
                tag: desc.code,
                attribute: name.to_string(),
            })?;
            if attr.primary_id {
                let raw = value.as_str().ok_or_else(|| invalid_value(desc.code, attr.name, &value))?;
                explicit_id = Some(XmlId::parse(raw)?);
                continue;
            }
            if !value.matches(attr.scalar) {
                return Err(invalid_value(desc.code, attr.name, &value));
            }
            map.insert(attr.name, value);
        }

        if let Some(missing) = desc
            .attributes
            .iter()
            .find(|a| !a.optional && !a.primary_id && !map.contains_key(a.name))
        {
            return Err(IsoxmlError::MissingRequiredAttribute {
                tag: desc.code,
                attribute: missing.name,
            });
        }
        if let Some(id) = &explicit_id {
            if id.tag() != desc.code {
                return Err(IsoxmlError::MalformedIdentifier { id: id.to_string() });
            }
        }

        let key = self.insert(Entity {
            tag,
            attributes: map,
            children: Vec::new(),
            parent: None,
        });
        if let Some(id) = explicit_id {
            self.references
                .allocate(desc.code, Some(id.as_str()), Some(key), None)?;
        }
        trace!("Created {} entity {:?}", desc.code, key);
        Ok(key)
    }

    /// Sets one attribute, validating it against the descriptor table.
    pub fn set_attribute(&mut self, key: EntityKey, name: &str, value: Value) -> Result<(), IsoxmlError> {
        let entity = self.entity_mut(key)?;
        let desc = entity.tag.descriptor();
        let attr = desc
            .attribute(name)
            .filter(|a| !a.primary_id)
            .ok_or_else(|| IsoxmlError::UnknownAttribute {
                tag: desc.code,
                attribute: name.to_string(),
            })?;
        if !value.matches(attr.scalar) {
            return Err(invalid_value(desc.code, attr.name, &value));
        }
        entity.attributes.insert(attr.name, value);
        Ok(())
    }

    /// Removes an optional attribute and returns its old value.
    ///
    /// Identifiers are not attributes in this sense; they belong to the
    /// reference table and are rejected like in [`Document::set_attribute`].
    pub fn remove_attribute(&mut self, key: EntityKey, name: &str) -> Result<Option<Value>, IsoxmlError> {
        let entity = self.entity_mut(key)?;
        let desc = entity.tag.descriptor();
        let attr = desc
            .attribute(name)
            .filter(|a| !a.primary_id)
            .ok_or_else(|| IsoxmlError::UnknownAttribute {
                tag: desc.code,
                attribute: name.to_string(),
            })?;
        if !attr.optional {
            return Err(IsoxmlError::MissingRequiredAttribute {
                tag: desc.code,
                attribute: attr.name,
            });
        }
        Ok(entity.attributes.remove(attr.name))
    }

    /// Appends `child` to `parent`'s children, detaching it from any
    /// previous parent first.
    ///
    /// # Errors
    /// `UnknownEntity` for dead keys. `UnexpectedChild` if the parent's tag
    /// may not nest the child's tag, or if `child` is the root or an
    /// ancestor of `parent`.
    pub fn add_child(&mut self, parent: EntityKey, child: EntityKey) -> Result<(), IsoxmlError> {
        let parent_tag = self.entity(parent).ok_or(IsoxmlError::UnknownEntity)?.tag;
        let child_entity = self.entity(child).ok_or(IsoxmlError::UnknownEntity)?;
        let child_tag = child_entity.tag;
        let previous = child_entity.parent;

        let nestable = parent_tag.descriptor().child(child_tag).is_some();
        if !nestable || self.root == Some(child) || self.is_ancestor(child, parent) {
            return Err(IsoxmlError::UnexpectedChild {
                parent: parent_tag.code(),
                child: child_tag.code(),
            });
        }

        if let Some(previous) = previous {
            self.entity_mut(previous)?.children.retain(|&k| k != child);
        }
        self.entity_mut(parent)?.children.push(child);
        self.entity_mut(child)?.parent = Some(parent);
        Ok(())
    }

    fn is_ancestor(&self, candidate: EntityKey, mut key: EntityKey) -> bool {
        loop {
            if key == candidate {
                return true;
            }
            match self.entity(key).and_then(|e| e.parent) {
                Some(parent) => key = parent,
                None => return false,
            }
        }
    }

    /// Makes a detached entity the document root.
    ///
    /// Any tag is accepted, so single entities can be written as XML text.
    /// Packages additionally require an `ISO11783_TaskData` root.
    ///
    /// # Errors
    /// `UnknownEntity` for a dead key, `AttachedEntity` if it has a parent.
    pub fn set_root(&mut self, key: EntityKey) -> Result<(), IsoxmlError> {
        let entity = self.entity(key).ok_or(IsoxmlError::UnknownEntity)?;
        if entity.parent.is_some() {
            return Err(IsoxmlError::AttachedEntity { tag: entity.tag.code() });
        }
        self.root = Some(key);
        Ok(())
    }

    /// Removes an entity together with its subtree.
    ///
    /// Identifiers of removed entities stay reserved in the reference table
    /// but no longer resolve.
    pub fn remove_entity(&mut self, key: EntityKey) -> Result<(), IsoxmlError> {
        let parent = self.entity(key).ok_or(IsoxmlError::UnknownEntity)?.parent;
        if let Some(parent) = parent {
            self.entity_mut(parent)?.children.retain(|&k| k != key);
        }
        if self.root == Some(key) {
            self.root = None;
        }

        let mut pending = vec![key];
        let mut removed = 0usize;
        while let Some(next) = pending.pop() {
            if let Some(entity) = self.entities.get_mut(next.0).and_then(Option::take) {
                pending.extend(entity.children);
                self.references.unbind(next);
                removed += 1;
            }
        }
        debug!("Removed {} entities", removed);
        Ok(())
    }

    // --- References ---

    pub fn references(&self) -> &ReferenceTable {
        &self.references
    }

    /// Returns the identifier of `key`, allocating one if it has none yet.
    ///
    /// A `correlation_key` from an external system keeps the identifier
    /// stable: an unbound reference registered with the same key is reused.
    ///
    /// # Errors
    /// `NotIdentifiable` if the entity's tag has no identifier attribute.
    pub fn register_entity(&mut self, key: EntityKey, correlation_key: Option<&str>) -> Result<XmlId, IsoxmlError> {
        let entity = self.entity(key).ok_or(IsoxmlError::UnknownEntity)?;
        let desc = entity.tag.descriptor();
        if desc.primary_id().is_none() {
            return Err(IsoxmlError::NotIdentifiable { tag: desc.code });
        }
        let reference = self.references.allocate(desc.code, None, Some(key), correlation_key)?;
        Ok(reference.xml_id.clone())
    }

    /// A reference value pointing at `key`, for use in `*IdRef` attributes.
    pub fn reference_to(&mut self, key: EntityKey) -> Result<Value, IsoxmlError> {
        self.register_entity(key, None).map(Value::Reference)
    }

    /// The identifier currently bound to `key`, if any.
    pub fn xml_id_of(&self, key: EntityKey) -> Option<&XmlId> {
        self.references.by_entity(key).map(|r| &r.xml_id)
    }

    /// Resolves an identifier to a live entity key.
    pub fn resolve(&self, xml_id: &str) -> Option<EntityKey> {
        self.references
            .resolve(xml_id)
            .filter(|&key| self.entity(key).is_some())
    }

    /// Resolves an identifier to the entity itself.
    pub fn resolve_entity(&self, xml_id: &str) -> Option<&Entity> {
        self.resolve(xml_id).and_then(|key| self.entity(key))
    }

    /// All live, identified entities of `tag`, ordered by identifier suffix.
    pub fn entities_of_tag(&self, tag: EntityTag) -> Vec<EntityKey> {
        self.references
            .all_of_tag(tag.code())
            .into_iter()
            .filter(|&key| self.entity(key).is_some())
            .collect()
    }

    /// Looks up the enumeration value `name` of `tag`'s attribute `attribute`.
    pub fn enum_value(tag: EntityTag, attribute: &str, name: &str) -> Option<Value> {
        tag.descriptor()
            .attribute(attribute)?
            .enum_by_name(name)
            .map(Value::Enum)
    }

    // --- Package members ---

    pub fn add_file(&mut self, name: impl Into<String>, file: AuxiliaryFile) {
        self.files.insert(name.into(), file);
    }

    pub fn file(&self, name: &str) -> Option<&AuxiliaryFile> {
        self.files.get(name)
    }

    pub fn remove_file(&mut self, name: &str) -> Option<AuxiliaryFile> {
        self.files.remove(name)
    }

    /// Auxiliary files keyed by file name, without folder.
    pub fn files(&self) -> &BTreeMap<String, AuxiliaryFile> {
        &self.files
    }

    /// The raw `LINKLIST.XML` content, if the package carried one.
    pub fn link_list(&self) -> Option<&str> {
        self.link_list.as_deref()
    }

    pub fn set_link_list(&mut self, link_list: Option<String>) {
        self.link_list = link_list;
    }

    /// Returns the next free file stem for `tag`, e.g. `GRD00003`.
    ///
    /// Existing auxiliary files named `<TAG><5 digits>.<ext>` are scanned and
    /// the highest index plus one is used.
    ///
    /// # Errors
    /// `FilenameSpaceExhausted` once index 99999 is taken.
    pub fn generate_unique_filename(&self, tag: EntityTag) -> Result<String, IsoxmlError> {
        let code = tag.code();
        let highest = self
            .files
            .keys()
            .filter_map(|name| file_index(code, name))
            .max()
            .unwrap_or(0);
        let next = highest + 1;
        if next > 99_999 {
            return Err(IsoxmlError::FilenameSpaceExhausted { tag: code });
        }
        Ok(format!("{}{:05}", code, next))
    }
}

/// Parses the index out of a `<code><5 digits>.<3 chars>` file name.
fn file_index(code: &str, name: &str) -> Option<u32> {
    let prefix = name.get(..code.len())?;
    if !prefix.eq_ignore_ascii_case(code) {
        return None;
    }
    let (digits, ext) = name[code.len()..].split_once('.')?;
    if digits.len() != 5 || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if ext.len() != 3 || !ext.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    digits.parse().ok()
}

fn invalid_value(tag: &'static str, attribute: &'static str, value: &Value) -> IsoxmlError {
    IsoxmlError::InvalidAttributeValue {
        tag,
        attribute,
        value: value.to_xml_text(),
    }
}
