// crates/isoxml-rs/src/error.rs

use core::fmt;
use core::str::Utf8Error;
use quick_xml::Error as XmlError;
use quick_xml::events::attributes::AttrError;
use std::io;
use zip::result::ZipError;

/// Errors that can occur while parsing, editing or serializing ISOXML data.
#[derive(Debug)]
pub enum IsoxmlError {
    /// An error from the underlying `quick-xml` reader.
    XmlParsing(XmlError),

    /// An error from the `zip` crate while reading or writing the container.
    Zip(ZipError),

    /// I/O error while reading a container member or writing XML output.
    Io(io::Error),

    /// Input text (or an element or attribute name) was not valid UTF-8.
    InvalidUtf8(Utf8Error),

    /// An identifier did not match `<3 uppercase letters><digits>`,
    /// or its prefix did not match the expected tag.
    MalformedIdentifier { id: String },

    /// A schema-mandated attribute was absent.
    MissingRequiredAttribute {
        tag: &'static str,
        attribute: &'static str,
    },

    /// No descriptor is known for an element name.
    UnknownEntityTag { tag: String },

    /// A known entity appeared under a parent that does not permit it.
    UnexpectedChild {
        parent: &'static str,
        child: &'static str,
    },

    /// An attribute value could not be coerced to its scalar type.
    InvalidAttributeValue {
        tag: &'static str,
        attribute: &'static str,
        value: String,
    },

    /// An attribute name is not part of the entity's descriptor table.
    UnknownAttribute { tag: &'static str, attribute: String },

    /// The ZIP archive has no `TASKDATA.XML` member.
    MissingPrimaryDocument,

    /// A required XML element was missing (e.g., the task data root).
    MissingElement { element: &'static str },

    /// The input data kind is neither XML text nor a ZIP archive.
    UnsupportedContainerKind { kind: String },

    /// Serialization was requested for a document without a root entity.
    IncompleteDocument,

    /// An entity key no longer refers to a live entity.
    UnknownEntity,

    /// The entity's tag has no identifier attribute, so it cannot be referenced.
    NotIdentifiable { tag: &'static str },

    /// The entity is nested under a parent and cannot stand on its own.
    AttachedEntity { tag: &'static str },

    /// All 99999 filenames for a tag are taken.
    FilenameSpaceExhausted { tag: &'static str },

    /// No identifier suffix above the highest one in use is left for a tag.
    IdentifierSpaceExhausted { tag: String },
}

impl From<XmlError> for IsoxmlError {
    fn from(e: XmlError) -> Self {
        IsoxmlError::XmlParsing(e)
    }
}

impl From<AttrError> for IsoxmlError {
    fn from(e: AttrError) -> Self {
        IsoxmlError::XmlParsing(XmlError::from(e))
    }
}

impl From<ZipError> for IsoxmlError {
    fn from(e: ZipError) -> Self {
        IsoxmlError::Zip(e)
    }
}

impl From<io::Error> for IsoxmlError {
    fn from(e: io::Error) -> Self {
        IsoxmlError::Io(e)
    }
}

impl From<Utf8Error> for IsoxmlError {
    fn from(e: Utf8Error) -> Self {
        IsoxmlError::InvalidUtf8(e)
    }
}

impl fmt::Display for IsoxmlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IsoxmlError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            IsoxmlError::Zip(e) => write!(f, "ZIP container error: {}", e),
            IsoxmlError::Io(e) => write!(f, "I/O error: {}", e),
            IsoxmlError::InvalidUtf8(e) => write!(f, "Invalid UTF-8: {}", e),
            IsoxmlError::MalformedIdentifier { id } => {
                write!(f, "Malformed identifier: '{}'", id)
            }
            IsoxmlError::MissingRequiredAttribute { tag, attribute } => {
                write!(f, "Missing required attribute {} on {}", attribute, tag)
            }
            IsoxmlError::UnknownEntityTag { tag } => write!(f, "Unknown entity tag: {}", tag),
            IsoxmlError::UnexpectedChild { parent, child } => {
                write!(f, "{} is not a permitted child of {}", child, parent)
            }
            IsoxmlError::InvalidAttributeValue {
                tag,
                attribute,
                value,
            } => write!(
                f,
                "Invalid value '{}' for attribute {} on {}",
                value, attribute, tag
            ),
            IsoxmlError::UnknownAttribute { tag, attribute } => {
                write!(f, "{} has no attribute named {}", tag, attribute)
            }
            IsoxmlError::MissingPrimaryDocument => {
                write!(f, "ZIP archive doesn't contain TASKDATA.XML")
            }
            IsoxmlError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            IsoxmlError::UnsupportedContainerKind { kind } => {
                write!(f, "Unsupported data type: {}", kind)
            }
            IsoxmlError::IncompleteDocument => write!(f, "Document has no root entity"),
            IsoxmlError::UnknownEntity => write!(f, "Entity key does not refer to a live entity"),
            IsoxmlError::NotIdentifiable { tag } => write!(f, "{} entities carry no identifier", tag),
            IsoxmlError::AttachedEntity { tag } => {
                write!(f, "{} entity is still attached to a parent", tag)
            }
            IsoxmlError::FilenameSpaceExhausted { tag } => {
                write!(f, "No free filename left for {}", tag)
            }
            IsoxmlError::IdentifierSpaceExhausted { tag } => {
                write!(f, "No free identifier left for {}", tag)
            }
        }
    }
}

impl std::error::Error for IsoxmlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IsoxmlError::XmlParsing(e) => Some(e),
            IsoxmlError::Io(e) => Some(e),
            IsoxmlError::Zip(e) => Some(e),
            IsoxmlError::InvalidUtf8(e) => Some(e),
            _ => None,
        }
    }
}
