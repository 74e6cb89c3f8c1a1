// crates/isoxml-rs/src/model/device.rs

//! Device descriptions as reported by implements (DVC and its children) and
//! the capabilities of the task controller that recorded them.

use super::{
    AttributeDescriptor as A, ChildDescriptor as C, DECIMAL, EntityDescriptor, EntityTag,
    EnumDescriptor as E, INTEGER, STRING, ScalarType,
};

const DEVICE_ELEMENT_TYPE: &[E] = &[
    E { code: "1", name: "Device" },
    E { code: "2", name: "Function" },
    E { code: "3", name: "Bin" },
    E { code: "4", name: "Section" },
    E { code: "5", name: "Unit" },
    E { code: "6", name: "Connector" },
    E { code: "7", name: "Navigation" },
];

const TC_VERSION: &[E] = &[
    E { code: "0", name: "DIS" },
    E { code: "1", name: "FDIS1" },
    E { code: "2", name: "FDIS2" },
    E { code: "3", name: "E2DIS" },
    E { code: "4", name: "E2FDIS" },
];

pub(crate) static DVC: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Device,
    code: "DVC",
    name: "Device",
    attributes: &[
        A::new("A", "DeviceId", STRING).primary_id(),
        A::new("B", "DeviceDesignator", STRING).optional(),
        A::new("C", "DeviceSoftwareVersion", STRING).optional(),
        A::new("D", "ClientNAME", STRING),
        A::new("E", "DeviceSerialNumber", STRING).optional(),
        A::new("F", "DeviceStructureLabel", STRING),
        A::new("G", "DeviceLocalizationLabel", STRING),
    ],
    children: &[
        C { tag: EntityTag::DeviceElement, role: "DeviceElement" },
        C { tag: EntityTag::DeviceProcessData, role: "DeviceProcessData" },
        C { tag: EntityTag::DeviceProperty, role: "DeviceProperty" },
        C { tag: EntityTag::DeviceValuePresentation, role: "DeviceValuePresentation" },
    ],
};

pub(crate) static DET: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::DeviceElement,
    code: "DET",
    name: "DeviceElement",
    attributes: &[
        A::new("A", "DeviceElementId", STRING).primary_id(),
        A::new("B", "DeviceElementObjectId", INTEGER),
        A::new("C", "DeviceElementType", ScalarType::Enum(DEVICE_ELEMENT_TYPE)),
        A::new("D", "DeviceElementDesignator", STRING).optional(),
        A::new("E", "DeviceElementNumber", INTEGER),
        A::new("F", "ParentObjectId", INTEGER),
    ],
    children: &[C { tag: EntityTag::DeviceObjectReference, role: "DeviceObjectReference" }],
};

pub(crate) static DOR: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::DeviceObjectReference,
    code: "DOR",
    name: "DeviceObjectReference",
    attributes: &[A::new("A", "DeviceObjectId", INTEGER)],
    children: &[],
};

pub(crate) static DPD: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::DeviceProcessData,
    code: "DPD",
    name: "DeviceProcessData",
    attributes: &[
        A::new("A", "DeviceProcessDataObjectId", INTEGER),
        A::new("B", "DeviceProcessDataDDI", STRING),
        A::new("C", "DeviceProcessDataProperty", INTEGER),
        A::new("D", "DeviceProcessDataTriggerMethods", INTEGER),
        A::new("E", "DeviceProcessDataDesignator", STRING).optional(),
        A::new("F", "DeviceValuePresentationObjectId", INTEGER).optional(),
    ],
    children: &[],
};

pub(crate) static DPT: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::DeviceProperty,
    code: "DPT",
    name: "DeviceProperty",
    attributes: &[
        A::new("A", "DevicePropertyObjectId", INTEGER),
        A::new("B", "DevicePropertyDDI", STRING),
        A::new("C", "DevicePropertyValue", INTEGER),
        A::new("D", "DevicePropertyDesignator", STRING).optional(),
        A::new("E", "DeviceValuePresentationObjectId", INTEGER).optional(),
    ],
    children: &[],
};

pub(crate) static DVP: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::DeviceValuePresentation,
    code: "DVP",
    name: "DeviceValuePresentation",
    attributes: &[
        A::new("A", "DeviceValuePresentationObjectId", INTEGER),
        A::new("B", "Offset", INTEGER),
        A::new("C", "Scale", DECIMAL),
        A::new("D", "NumberOfDecimals", INTEGER),
        A::new("E", "UnitDesignator", STRING).optional(),
    ],
    children: &[],
};

pub(crate) static TCC: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::TaskControllerCapabilities,
    code: "TCC",
    name: "TaskControllerCapabilities",
    attributes: &[
        A::new("A", "TaskControllerControlFunctionNAME", STRING),
        A::new("B", "TaskControllerDesignator", STRING),
        A::new("C", "VersionNumber", ScalarType::Enum(TC_VERSION)),
        A::new("D", "ProvidedCapabilities", INTEGER),
        A::new("E", "NumberOfBoomsSectionControl", INTEGER),
        A::new("F", "NumberOfSectionsSectionControl", INTEGER),
        A::new("G", "NumberOfControlChannels", INTEGER),
    ],
    children: &[],
};
