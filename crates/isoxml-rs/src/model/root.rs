// crates/isoxml-rs/src/model/root.rs

//! The `ISO11783_TaskData` root element and the `XFC` root of external
//! files.

use super::{
    AttributeDescriptor as A, ChildDescriptor as C, EntityDescriptor, EntityTag, EnumDescriptor as E,
    ScalarType, STRING,
};

pub(crate) const ROOT_ELEMENT: &str = "ISO11783_TaskData";

const VERSION_MAJOR: &[E] = &[
    E { code: "0", name: "DIS" },
    E { code: "1", name: "FDIS1" },
    E { code: "2", name: "FDIS2" },
    E { code: "3", name: "E2DIS" },
    E { code: "4", name: "E2FDIS" },
];

const VERSION_MINOR: &[E] = &[
    E { code: "0", name: "Minor0" },
    E { code: "1", name: "Minor1" },
    E { code: "2", name: "Minor2" },
    E { code: "3", name: "Minor3" },
];

const DATA_TRANSFER_ORIGIN: &[E] = &[
    E { code: "1", name: "FMIS" },
    E { code: "2", name: "MICS" },
];

pub(crate) static TASK_DATA: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::TaskData,
    code: ROOT_ELEMENT,
    name: "ISO11783TaskDataFile",
    attributes: &[
        A::new("VersionMajor", "VersionMajor", ScalarType::Enum(VERSION_MAJOR)),
        A::new("VersionMinor", "VersionMinor", ScalarType::Enum(VERSION_MINOR)),
        A::new("ManagementSoftwareManufacturer", "ManagementSoftwareManufacturer", STRING).optional(),
        A::new("ManagementSoftwareVersion", "ManagementSoftwareVersion", STRING).optional(),
        A::new("TaskControllerManufacturer", "TaskControllerManufacturer", STRING).optional(),
        A::new("TaskControllerVersion", "TaskControllerVersion", STRING).optional(),
        A::new("DataTransferOrigin", "DataTransferOrigin", ScalarType::Enum(DATA_TRANSFER_ORIGIN)),
        A::new("lang", "Lang", STRING).optional(),
    ],
    children: &[
        C { tag: EntityTag::AttachedFile, role: "AttachedFile" },
        C { tag: EntityTag::BaseStation, role: "BaseStation" },
        C { tag: EntityTag::CodedComment, role: "CodedComment" },
        C { tag: EntityTag::CodedCommentGroup, role: "CodedCommentGroup" },
        C { tag: EntityTag::ColourLegend, role: "ColourLegend" },
        C { tag: EntityTag::CropType, role: "CropType" },
        C { tag: EntityTag::CulturalPractice, role: "CulturalPractice" },
        C { tag: EntityTag::Customer, role: "Customer" },
        C { tag: EntityTag::Device, role: "Device" },
        C { tag: EntityTag::Farm, role: "Farm" },
        C { tag: EntityTag::OperationTechnique, role: "OperationTechnique" },
        C { tag: EntityTag::Partfield, role: "Partfield" },
        C { tag: EntityTag::Product, role: "Product" },
        C { tag: EntityTag::ProductGroup, role: "ProductGroup" },
        C { tag: EntityTag::Task, role: "Task" },
        C { tag: EntityTag::ValuePresentation, role: "ValuePresentation" },
        C { tag: EntityTag::Worker, role: "Worker" },
        C { tag: EntityTag::ExternalFileReference, role: "ExternalFileReference" },
        C { tag: EntityTag::TaskControllerCapabilities, role: "TaskControllerCapabilities" },
    ],
};

/// Root of a file named by an `XFR`. Holds the same top-level entities as
/// the main document, minus the file references and capabilities.
pub(crate) static XFC: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ExternalFileContents,
    code: "XFC",
    name: "ExternalFileContents",
    attributes: &[],
    children: &[
        C { tag: EntityTag::AttachedFile, role: "AttachedFile" },
        C { tag: EntityTag::BaseStation, role: "BaseStation" },
        C { tag: EntityTag::CodedComment, role: "CodedComment" },
        C { tag: EntityTag::CodedCommentGroup, role: "CodedCommentGroup" },
        C { tag: EntityTag::ColourLegend, role: "ColourLegend" },
        C { tag: EntityTag::CropType, role: "CropType" },
        C { tag: EntityTag::CulturalPractice, role: "CulturalPractice" },
        C { tag: EntityTag::Customer, role: "Customer" },
        C { tag: EntityTag::Device, role: "Device" },
        C { tag: EntityTag::Farm, role: "Farm" },
        C { tag: EntityTag::OperationTechnique, role: "OperationTechnique" },
        C { tag: EntityTag::Partfield, role: "Partfield" },
        C { tag: EntityTag::Product, role: "Product" },
        C { tag: EntityTag::ProductGroup, role: "ProductGroup" },
        C { tag: EntityTag::Task, role: "Task" },
        C { tag: EntityTag::ValuePresentation, role: "ValuePresentation" },
        C { tag: EntityTag::Worker, role: "Worker" },
    ],
};
