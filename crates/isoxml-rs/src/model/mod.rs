// crates/isoxml-rs/src/model/mod.rs

//! Schema-derived descriptor tables for ISO 11783-10 task data entities.
//!
//! These tables are the output of the offline schema compilation step: for
//! every entity tag they list the XML attribute codes with their semantic
//! names, scalar types and optionality, plus the child entities the tag may
//! nest. The runtime never parses a schema; it only consults these tables.

#![allow(clippy::pedantic)]

mod comment;
mod device;
mod farm;
mod geometry;
mod guidance;
mod product;
mod root;
mod task;

pub(crate) use root::ROOT_ELEMENT;

use core::fmt;

/// The closed set of entity tags known to this crate.
///
/// Every variant maps to exactly one descriptor table (see [`EntityTag::descriptor`]),
/// so a missing registration is a compile error rather than a runtime failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntityTag {
    TaskData,
    ExternalFileContents,
    // Master data
    Customer,
    Farm,
    Partfield,
    Worker,
    // Geometry
    Polygon,
    LineString,
    Point,
    // Guidance
    BaseStation,
    GuidanceGroup,
    GuidancePattern,
    GuidanceAllocation,
    GuidanceShift,
    // Devices
    Device,
    DeviceElement,
    DeviceObjectReference,
    DeviceProcessData,
    DeviceProperty,
    DeviceValuePresentation,
    TaskControllerCapabilities,
    // Products, crops and practices
    Product,
    ProductRelation,
    ProductGroup,
    CropType,
    CropVariety,
    ValuePresentation,
    ColourLegend,
    ColourRange,
    CulturalPractice,
    OperationTechnique,
    OperationTechniqueReference,
    // Tasks
    Task,
    TreatmentZone,
    ProcessDataVariable,
    Time,
    Position,
    DataLogValue,
    OperTechPractice,
    WorkerAllocation,
    DeviceAllocation,
    Connection,
    ProductAllocation,
    AllocationStamp,
    TimeLog,
    Grid,
    CommentAllocation,
    DataLogTrigger,
    ControlAssignment,
    // Comments and files
    CodedComment,
    CodedCommentListValue,
    CodedCommentGroup,
    AttachedFile,
    ExternalFileReference,
}

impl EntityTag {
    /// All known tags, in declaration order.
    pub const ALL: &'static [EntityTag] = &[
        EntityTag::TaskData,
        EntityTag::ExternalFileContents,
        EntityTag::Customer,
        EntityTag::Farm,
        EntityTag::Partfield,
        EntityTag::Worker,
        EntityTag::Polygon,
        EntityTag::LineString,
        EntityTag::Point,
        EntityTag::BaseStation,
        EntityTag::GuidanceGroup,
        EntityTag::GuidancePattern,
        EntityTag::GuidanceAllocation,
        EntityTag::GuidanceShift,
        EntityTag::Device,
        EntityTag::DeviceElement,
        EntityTag::DeviceObjectReference,
        EntityTag::DeviceProcessData,
        EntityTag::DeviceProperty,
        EntityTag::DeviceValuePresentation,
        EntityTag::TaskControllerCapabilities,
        EntityTag::Product,
        EntityTag::ProductRelation,
        EntityTag::ProductGroup,
        EntityTag::CropType,
        EntityTag::CropVariety,
        EntityTag::ValuePresentation,
        EntityTag::ColourLegend,
        EntityTag::ColourRange,
        EntityTag::CulturalPractice,
        EntityTag::OperationTechnique,
        EntityTag::OperationTechniqueReference,
        EntityTag::Task,
        EntityTag::TreatmentZone,
        EntityTag::ProcessDataVariable,
        EntityTag::Time,
        EntityTag::Position,
        EntityTag::DataLogValue,
        EntityTag::OperTechPractice,
        EntityTag::WorkerAllocation,
        EntityTag::DeviceAllocation,
        EntityTag::Connection,
        EntityTag::ProductAllocation,
        EntityTag::AllocationStamp,
        EntityTag::TimeLog,
        EntityTag::Grid,
        EntityTag::CommentAllocation,
        EntityTag::DataLogTrigger,
        EntityTag::ControlAssignment,
        EntityTag::CodedComment,
        EntityTag::CodedCommentListValue,
        EntityTag::CodedCommentGroup,
        EntityTag::AttachedFile,
        EntityTag::ExternalFileReference,
    ];

    /// Returns the descriptor table for this tag.
    pub fn descriptor(self) -> &'static EntityDescriptor {
        match self {
            EntityTag::TaskData => &root::TASK_DATA,
            EntityTag::ExternalFileContents => &root::XFC,
            EntityTag::Customer => &farm::CTR,
            EntityTag::Farm => &farm::FRM,
            EntityTag::Partfield => &farm::PFD,
            EntityTag::Worker => &farm::WKR,
            EntityTag::Polygon => &geometry::PLN,
            EntityTag::LineString => &geometry::LSG,
            EntityTag::Point => &geometry::PNT,
            EntityTag::BaseStation => &guidance::BSN,
            EntityTag::GuidanceGroup => &guidance::GGP,
            EntityTag::GuidancePattern => &guidance::GPN,
            EntityTag::GuidanceAllocation => &guidance::GAN,
            EntityTag::GuidanceShift => &guidance::GST,
            EntityTag::Device => &device::DVC,
            EntityTag::DeviceElement => &device::DET,
            EntityTag::DeviceObjectReference => &device::DOR,
            EntityTag::DeviceProcessData => &device::DPD,
            EntityTag::DeviceProperty => &device::DPT,
            EntityTag::DeviceValuePresentation => &device::DVP,
            EntityTag::TaskControllerCapabilities => &device::TCC,
            EntityTag::Product => &product::PDT,
            EntityTag::ProductRelation => &product::PRN,
            EntityTag::ProductGroup => &product::PGP,
            EntityTag::CropType => &product::CTP,
            EntityTag::CropVariety => &product::CVT,
            EntityTag::ValuePresentation => &product::VPN,
            EntityTag::ColourLegend => &product::CLD,
            EntityTag::ColourRange => &product::CRG,
            EntityTag::CulturalPractice => &product::CPC,
            EntityTag::OperationTechnique => &product::OTQ,
            EntityTag::OperationTechniqueReference => &product::OTR,
            EntityTag::Task => &task::TSK,
            EntityTag::TreatmentZone => &task::TZN,
            EntityTag::ProcessDataVariable => &task::PDV,
            EntityTag::Time => &task::TIM,
            EntityTag::Position => &task::PTN,
            EntityTag::DataLogValue => &task::DLV,
            EntityTag::OperTechPractice => &task::OTP,
            EntityTag::WorkerAllocation => &task::WAN,
            EntityTag::DeviceAllocation => &task::DAN,
            EntityTag::Connection => &task::CNN,
            EntityTag::ProductAllocation => &task::PAN,
            EntityTag::AllocationStamp => &task::ASP,
            EntityTag::TimeLog => &task::TLG,
            EntityTag::Grid => &task::GRD,
            EntityTag::CommentAllocation => &task::CAN,
            EntityTag::DataLogTrigger => &task::DLT,
            EntityTag::ControlAssignment => &task::CAT,
            EntityTag::CodedComment => &comment::CCT,
            EntityTag::CodedCommentListValue => &comment::CCL,
            EntityTag::CodedCommentGroup => &comment::CCG,
            EntityTag::AttachedFile => &comment::AFE,
            EntityTag::ExternalFileReference => &comment::XFR,
        }
    }

    /// The XML element name, e.g. `TSK` or `ISO11783_TaskData`.
    pub fn code(self) -> &'static str {
        self.descriptor().code
    }

    /// Looks up a tag by its XML element name.
    pub fn from_code(code: &str) -> Option<EntityTag> {
        EntityTag::ALL.iter().copied().find(|t| t.code() == code)
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// How a numeric attribute is represented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberFormat {
    /// `xs:long`, `xs:unsignedByte`, `xs:unsignedShort`, `xs:unsignedLong`.
    Integer,
    /// `xs:decimal`, `xs:double`.
    Decimal,
}

/// A known enumeration entry: XML code and semantic name.
#[derive(Debug, PartialEq, Eq)]
pub struct EnumDescriptor {
    pub code: &'static str,
    pub name: &'static str,
}

/// The scalar type of an attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScalarType {
    String,
    Number(NumberFormat),
    /// An `xs:IDREF` naming an entity of the given tag. The identifier's
    /// prefix must be that tag's code.
    Reference(EntityTag),
    Enum(&'static [EnumDescriptor]),
}

/// One XML attribute of an entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeDescriptor {
    /// The XML attribute name (a single uppercase letter, or `lang`).
    pub code: &'static str,
    /// The semantic field name used in the attribute map.
    pub name: &'static str,
    pub scalar: ScalarType,
    pub optional: bool,
    /// Whether this attribute is the entity's own `xs:ID`.
    pub primary_id: bool,
}

impl AttributeDescriptor {
    pub const fn new(code: &'static str, name: &'static str, scalar: ScalarType) -> Self {
        Self {
            code,
            name,
            scalar,
            optional: false,
            primary_id: false,
        }
    }

    pub const fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub const fn primary_id(mut self) -> Self {
        self.primary_id = true;
        self
    }

    /// Finds an enumeration entry by its semantic name.
    pub fn enum_by_name(&self, name: &str) -> Option<&'static EnumDescriptor> {
        match self.scalar {
            ScalarType::Enum(values) => values.iter().find(|v| v.name == name),
            _ => None,
        }
    }

    /// Finds an enumeration entry by its XML code.
    pub fn enum_by_code(&self, code: &str) -> Option<&'static EnumDescriptor> {
        match self.scalar {
            ScalarType::Enum(values) => values.iter().find(|v| v.code == code),
            _ => None,
        }
    }
}

/// A child slot: which tag may be nested, and under which role name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildDescriptor {
    pub tag: EntityTag,
    pub role: &'static str,
}

/// The complete descriptor table for one entity tag.
#[derive(Debug)]
pub struct EntityDescriptor {
    pub tag: EntityTag,
    pub code: &'static str,
    pub name: &'static str,
    pub attributes: &'static [AttributeDescriptor],
    pub children: &'static [ChildDescriptor],
}

impl EntityDescriptor {
    /// Looks up an attribute by semantic name.
    pub fn attribute(&self, name: &str) -> Option<&'static AttributeDescriptor> {
        self.attributes.iter().find(|a| a.name == name)
    }

    /// Looks up an attribute by XML code.
    pub fn attribute_by_code(&self, code: &str) -> Option<&'static AttributeDescriptor> {
        self.attributes.iter().find(|a| a.code == code)
    }

    /// The entity's own identifier attribute, if it has one.
    pub fn primary_id(&self) -> Option<&'static AttributeDescriptor> {
        self.attributes.iter().find(|a| a.primary_id)
    }

    /// The child slot for `tag`, if this entity may nest it.
    pub fn child(&self, tag: EntityTag) -> Option<&'static ChildDescriptor> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// The child slot with the given role name.
    pub fn child_by_role(&self, role: &str) -> Option<&'static ChildDescriptor> {
        self.children.iter().find(|c| c.role == role)
    }
}

// --- Shorthands used by the generated tables ---

pub(crate) const STRING: ScalarType = ScalarType::String;
pub(crate) const INTEGER: ScalarType = ScalarType::Number(NumberFormat::Integer);
pub(crate) const DECIMAL: ScalarType = ScalarType::Number(NumberFormat::Decimal);

pub(crate) const fn id_ref(target: EntityTag) -> ScalarType {
    ScalarType::Reference(target)
}
