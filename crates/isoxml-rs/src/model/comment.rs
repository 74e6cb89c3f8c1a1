// crates/isoxml-rs/src/model/comment.rs

//! Coded comments, attached files and external file references.

use super::{
    AttributeDescriptor as A, ChildDescriptor as C, EntityDescriptor, EntityTag,
    EnumDescriptor as E, INTEGER, STRING, ScalarType, id_ref,
};

const CODED_COMMENT_SCOPE: &[E] = &[
    E { code: "1", name: "Point" },
    E { code: "2", name: "Global" },
    E { code: "3", name: "Continuous" },
];

const FILE_TYPE: &[E] = &[E { code: "1", name: "XML" }];

const PRESERVE: &[E] = &[
    E { code: "1", name: "PreserveNo" },
    E { code: "2", name: "PreserveYes" },
];

pub(crate) static CCT: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::CodedComment,
    code: "CCT",
    name: "CodedComment",
    attributes: &[
        A::new("A", "CodedCommentId", STRING).primary_id(),
        A::new("B", "CodedCommentDesignator", STRING),
        A::new("C", "CodedCommentScope", ScalarType::Enum(CODED_COMMENT_SCOPE)),
        A::new("D", "CodedCommentGroupIdRef", id_ref(EntityTag::CodedCommentGroup)).optional(),
    ],
    children: &[C { tag: EntityTag::CodedCommentListValue, role: "CodedCommentListValue" }],
};

pub(crate) static CCL: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::CodedCommentListValue,
    code: "CCL",
    name: "CodedCommentListValue",
    attributes: &[
        A::new("A", "CodedCommentListValueId", STRING).primary_id(),
        A::new("B", "CodedCommentListValueDesignator", STRING),
    ],
    children: &[],
};

pub(crate) static CCG: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::CodedCommentGroup,
    code: "CCG",
    name: "CodedCommentGroup",
    attributes: &[
        A::new("A", "CodedCommentGroupId", STRING).primary_id(),
        A::new("B", "CodedCommentGroupDesignator", STRING),
    ],
    children: &[],
};

/// A manufacturer-specific file shipped alongside the task data.
pub(crate) static AFE: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::AttachedFile,
    code: "AFE",
    name: "AttachedFile",
    attributes: &[
        A::new("A", "FilenameWithExtension", STRING),
        A::new("B", "Preserve", ScalarType::Enum(PRESERVE)),
        A::new("C", "ManufacturerGLN", STRING),
        A::new("D", "FileType", INTEGER),
        A::new("E", "FileVersion", STRING).optional(),
        A::new("F", "FileLength", INTEGER).optional(),
    ],
    children: &[],
};

/// Points at another XML file in the package holding further entities.
pub(crate) static XFR: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ExternalFileReference,
    code: "XFR",
    name: "ExternalFileReference",
    attributes: &[
        A::new("A", "Filename", STRING),
        A::new("B", "Filetype", ScalarType::Enum(FILE_TYPE)),
    ],
    children: &[],
};
