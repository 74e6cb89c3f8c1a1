// src/lib.rs

#![doc = "Reads, edits and writes ISO 11783-10 (ISOXML) task data sets."]
#![doc = ""]
#![doc = "A task data set is a `TASKDATA.XML` document, usually packed in a ZIP"]
#![doc = "archive together with binary time logs and grids. This library decodes it"]
#![doc = "into an entity arena driven by static descriptor tables and writes it back."]
#![doc = ""]
#![doc = "It supports:"]
#![doc = "- `IsoxmlManager::parse`: Reading XML text or ZIP packages into a `Document`."]
#![doc = "- `IsoxmlManager::serialize`: Writing a `Document` back into a ZIP package."]
#![doc = "- `Document`: Building and editing entities, with identifiers managed by a per-document reference table."]

// --- Crate Modules ---

mod archive;
mod codec;
mod document;
mod error;
mod manager;
mod model;
mod resolver;
mod types;
mod xml;

// --- Public API Re-exports ---

pub use codec::{decode_entity, encode_entity};
pub use document::{AuxiliaryFile, Document, Entity, EntityKey};
pub use error::IsoxmlError;
pub use manager::{DataKind, IsoxmlManager, ManagerOptions};
pub use model::{
    AttributeDescriptor, ChildDescriptor, EntityDescriptor, EntityTag, EnumDescriptor, NumberFormat,
    ScalarType,
};
pub use resolver::{Reference, ReferenceTable};
pub use types::{Attributes, Value, XmlId};
pub use xml::XmlElement;
