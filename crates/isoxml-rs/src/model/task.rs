// crates/isoxml-rs/src/model/task.rs

//! Tasks and everything nested in them: treatment zones, times, logging
//! configuration and allocations.

use super::{
    AttributeDescriptor as A, ChildDescriptor as C, DECIMAL, EntityDescriptor, EntityTag,
    EnumDescriptor as E, INTEGER, STRING, ScalarType, id_ref,
};

const TASK_STATUS: &[E] = &[
    E { code: "1", name: "Planned" },
    E { code: "2", name: "Running" },
    E { code: "3", name: "Paused" },
    E { code: "4", name: "Completed" },
    E { code: "5", name: "Template" },
    E { code: "6", name: "Canceled" },
];

const TIME_TYPE: &[E] = &[
    E { code: "1", name: "Planned" },
    E { code: "2", name: "Preliminary" },
    E { code: "4", name: "Effective" },
    E { code: "5", name: "Ineffective" },
    E { code: "6", name: "Repair" },
    E { code: "7", name: "Clearing" },
    E { code: "8", name: "PoweredDown" },
];

const ALLOCATION_STAMP_TYPE: &[E] = &[
    E { code: "1", name: "Planned" },
    E { code: "4", name: "Effective" },
];

const POSITION_STATUS: &[E] = &[
    E { code: "0", name: "NoGpsFix" },
    E { code: "1", name: "GnssFix" },
    E { code: "2", name: "DgnssFix" },
    E { code: "3", name: "PreciseGnss" },
    E { code: "4", name: "RtkFixedInteger" },
    E { code: "5", name: "RtkFloat" },
    E { code: "6", name: "EstDrMode" },
    E { code: "7", name: "ManualInput" },
    E { code: "8", name: "SimulateMode" },
    E { code: "14", name: "Error" },
    E { code: "15", name: "PositionStatusValueIsNotAvailable" },
];

const TRANSFER_MODE: &[E] = &[
    E { code: "1", name: "Filling" },
    E { code: "2", name: "Emptying" },
    E { code: "3", name: "Remainder" },
];

const TIME_LOG_TYPE: &[E] = &[E { code: "1", name: "BinaryTimelogFile" }];

const GRID_TYPE: &[E] = &[
    E { code: "1", name: "GridType1" },
    E { code: "2", name: "GridType2" },
];

pub(crate) static TSK: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Task,
    code: "TSK",
    name: "Task",
    attributes: &[
        A::new("A", "TaskId", STRING).primary_id(),
        A::new("B", "TaskDesignator", STRING).optional(),
        A::new("C", "CustomerIdRef", id_ref(EntityTag::Customer)).optional(),
        A::new("D", "FarmIdRef", id_ref(EntityTag::Farm)).optional(),
        A::new("E", "PartfieldIdRef", id_ref(EntityTag::Partfield)).optional(),
        A::new("F", "ResponsibleWorkerIdRef", id_ref(EntityTag::Worker)).optional(),
        A::new("G", "TaskStatus", ScalarType::Enum(TASK_STATUS)),
        A::new("H", "DefaultTreatmentZoneCode", INTEGER).optional(),
        A::new("I", "PositionLostTreatmentZoneCode", INTEGER).optional(),
        A::new("J", "OutOfFieldTreatmentZoneCode", INTEGER).optional(),
    ],
    children: &[
        C { tag: EntityTag::TreatmentZone, role: "TreatmentZone" },
        C { tag: EntityTag::Time, role: "Time" },
        C { tag: EntityTag::OperTechPractice, role: "OperTechPractice" },
        C { tag: EntityTag::WorkerAllocation, role: "WorkerAllocation" },
        C { tag: EntityTag::DeviceAllocation, role: "DeviceAllocation" },
        C { tag: EntityTag::Connection, role: "Connection" },
        C { tag: EntityTag::ProductAllocation, role: "ProductAllocation" },
        C { tag: EntityTag::DataLogTrigger, role: "DataLogTrigger" },
        C { tag: EntityTag::CommentAllocation, role: "CommentAllocation" },
        C { tag: EntityTag::TimeLog, role: "TimeLog" },
        C { tag: EntityTag::Grid, role: "Grid" },
        C { tag: EntityTag::ControlAssignment, role: "ControlAssignment" },
        C { tag: EntityTag::GuidanceAllocation, role: "GuidanceAllocation" },
    ],
};

pub(crate) static TZN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::TreatmentZone,
    code: "TZN",
    name: "TreatmentZone",
    attributes: &[
        A::new("A", "TreatmentZoneCode", INTEGER),
        A::new("B", "TreatmentZoneDesignator", STRING).optional(),
        A::new("C", "TreatmentZoneColour", INTEGER).optional(),
    ],
    children: &[
        C { tag: EntityTag::Polygon, role: "Polygon" },
        C { tag: EntityTag::ProcessDataVariable, role: "ProcessDataVariable" },
    ],
};

pub(crate) static PDV: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ProcessDataVariable,
    code: "PDV",
    name: "ProcessDataVariable",
    attributes: &[
        A::new("A", "ProcessDataDDI", STRING),
        A::new("B", "ProcessDataValue", INTEGER),
        A::new("C", "ProductIdRef", id_ref(EntityTag::Product)).optional(),
        A::new("D", "DeviceElementIdRef", id_ref(EntityTag::DeviceElement)).optional(),
        A::new("E", "ValuePresentationIdRef", id_ref(EntityTag::ValuePresentation)).optional(),
        A::new("F", "ActualCulturalPracticeValue", INTEGER).optional(),
        A::new("G", "ElementTypeInstanceValue", INTEGER).optional(),
    ],
    children: &[],
};

pub(crate) static TIM: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Time,
    code: "TIM",
    name: "Time",
    attributes: &[
        A::new("A", "Start", STRING),
        A::new("B", "Stop", STRING).optional(),
        A::new("C", "Duration", INTEGER).optional(),
        A::new("D", "Type", ScalarType::Enum(TIME_TYPE)),
    ],
    children: &[
        C { tag: EntityTag::Position, role: "Position" },
        C { tag: EntityTag::DataLogValue, role: "DataLogValue" },
    ],
};

pub(crate) static PTN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Position,
    code: "PTN",
    name: "Position",
    attributes: &[
        A::new("A", "PositionNorth", DECIMAL),
        A::new("B", "PositionEast", DECIMAL),
        A::new("C", "PositionUp", INTEGER).optional(),
        A::new("D", "PositionStatus", ScalarType::Enum(POSITION_STATUS)),
        A::new("E", "PDOP", DECIMAL).optional(),
        A::new("F", "HDOP", DECIMAL).optional(),
        A::new("G", "NumberOfSatellites", INTEGER).optional(),
        A::new("H", "GpsUtcTime", INTEGER).optional(),
        A::new("I", "GpsUtcDate", INTEGER).optional(),
    ],
    children: &[],
};

pub(crate) static DLV: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::DataLogValue,
    code: "DLV",
    name: "DataLogValue",
    attributes: &[
        A::new("A", "ProcessDataDDI", STRING),
        A::new("B", "ProcessDataValue", INTEGER),
        A::new("C", "DeviceElementIdRef", id_ref(EntityTag::DeviceElement)),
        A::new("D", "DataLogPGN", INTEGER).optional(),
        A::new("E", "DataLogPGNStartBit", INTEGER).optional(),
        A::new("F", "DataLogPGNStopBit", INTEGER).optional(),
    ],
    children: &[],
};

pub(crate) static WAN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::WorkerAllocation,
    code: "WAN",
    name: "WorkerAllocation",
    attributes: &[A::new("A", "WorkerIdRef", id_ref(EntityTag::Worker))],
    children: &[C { tag: EntityTag::AllocationStamp, role: "AllocationStamp" }],
};

pub(crate) static DAN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::DeviceAllocation,
    code: "DAN",
    name: "DeviceAllocation",
    attributes: &[
        A::new("A", "ClientNAMEValue", STRING),
        A::new("B", "ClientNAMEMask", STRING).optional(),
        A::new("C", "DeviceIdRef", id_ref(EntityTag::Device)).optional(),
    ],
    children: &[C { tag: EntityTag::AllocationStamp, role: "AllocationStamp" }],
};

pub(crate) static ASP: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::AllocationStamp,
    code: "ASP",
    name: "AllocationStamp",
    attributes: &[
        A::new("A", "Start", STRING),
        A::new("B", "Stop", STRING).optional(),
        A::new("C", "Duration", INTEGER).optional(),
        A::new("D", "Type", ScalarType::Enum(ALLOCATION_STAMP_TYPE)),
    ],
    children: &[C { tag: EntityTag::Position, role: "Position" }],
};

pub(crate) static TLG: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::TimeLog,
    code: "TLG",
    name: "TimeLog",
    attributes: &[
        A::new("A", "Filename", STRING),
        A::new("B", "Filelength", INTEGER).optional(),
        A::new("C", "TimeLogType", ScalarType::Enum(TIME_LOG_TYPE)),
    ],
    children: &[],
};

pub(crate) static GRD: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Grid,
    code: "GRD",
    name: "Grid",
    attributes: &[
        A::new("A", "GridMinimumNorthPosition", DECIMAL),
        A::new("B", "GridMinimumEastPosition", DECIMAL),
        A::new("C", "GridCellNorthSize", DECIMAL),
        A::new("D", "GridCellEastSize", DECIMAL),
        A::new("E", "GridMaximumColumn", INTEGER),
        A::new("F", "GridMaximumRow", INTEGER),
        A::new("G", "Filename", STRING),
        A::new("H", "Filelength", INTEGER).optional(),
        A::new("I", "GridType", ScalarType::Enum(GRID_TYPE)),
        A::new("J", "TreatmentZoneCode", INTEGER).optional(),
    ],
    children: &[],
};

pub(crate) static CAN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::CommentAllocation,
    code: "CAN",
    name: "CommentAllocation",
    attributes: &[
        A::new("A", "CodedCommentIdRef", id_ref(EntityTag::CodedComment)).optional(),
        A::new("B", "CodedCommentListValueIdRef", id_ref(EntityTag::CodedCommentListValue)).optional(),
        A::new("C", "FreeCommentText", STRING).optional(),
    ],
    children: &[C { tag: EntityTag::AllocationStamp, role: "AllocationStamp" }],
};

pub(crate) static DLT: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::DataLogTrigger,
    code: "DLT",
    name: "DataLogTrigger",
    attributes: &[
        A::new("A", "DataLogDDI", STRING),
        A::new("B", "DataLogMethod", INTEGER),
        A::new("C", "DataLogDistanceInterval", INTEGER).optional(),
        A::new("D", "DataLogTimeInterval", INTEGER).optional(),
        A::new("E", "DataLogThresholdMinimum", INTEGER).optional(),
        A::new("F", "DataLogThresholdMaximum", INTEGER).optional(),
        A::new("G", "DataLogThresholdChange", INTEGER).optional(),
        A::new("H", "DeviceElementIdRef", id_ref(EntityTag::DeviceElement)).optional(),
        A::new("I", "ValuePresentationIdRef", id_ref(EntityTag::ValuePresentation)).optional(),
        A::new("J", "DataLogPGN", INTEGER).optional(),
        A::new("K", "DataLogPGNStartBit", INTEGER).optional(),
        A::new("L", "DataLogPGNStopBit", INTEGER).optional(),
    ],
    children: &[],
};

pub(crate) static PAN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ProductAllocation,
    code: "PAN",
    name: "ProductAllocation",
    attributes: &[
        A::new("A", "ProductIdRef", id_ref(EntityTag::Product)),
        A::new("B", "QuantityDDI", STRING).optional(),
        A::new("C", "QuantityValue", INTEGER).optional(),
        A::new("D", "TransferMode", ScalarType::Enum(TRANSFER_MODE)).optional(),
        A::new("E", "DeviceElementIdRef", id_ref(EntityTag::DeviceElement)).optional(),
        A::new("F", "ValuePresentationIdRef", id_ref(EntityTag::ValuePresentation)).optional(),
        A::new("G", "ProductSubTypeIdRef", id_ref(EntityTag::Product)).optional(),
    ],
    children: &[C { tag: EntityTag::AllocationStamp, role: "AllocationStamp" }],
};

/// Links a device element of one device to one of another (e.g. tractor
/// hitch to implement).
pub(crate) static CNN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Connection,
    code: "CNN",
    name: "Connection",
    attributes: &[
        A::new("A", "DeviceIdRef_0", id_ref(EntityTag::Device)),
        A::new("B", "DeviceElementIdRef_0", id_ref(EntityTag::DeviceElement)),
        A::new("C", "DeviceIdRef_1", id_ref(EntityTag::Device)),
        A::new("D", "DeviceElementIdRef_1", id_ref(EntityTag::DeviceElement)),
    ],
    children: &[],
};

pub(crate) static OTP: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::OperTechPractice,
    code: "OTP",
    name: "OperTechPractice",
    attributes: &[
        A::new("A", "CulturalPracticeIdRef", id_ref(EntityTag::CulturalPractice)),
        A::new("B", "OperationTechniqueIdRef", id_ref(EntityTag::OperationTechnique)).optional(),
    ],
    children: &[],
};

pub(crate) static CAT: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ControlAssignment,
    code: "CAT",
    name: "ControlAssignment",
    attributes: &[
        A::new("A", "SourceClientNAME", STRING),
        A::new("B", "UserClientNAME", STRING),
        A::new("C", "SourceDeviceStructureLabel", STRING),
        A::new("D", "UserDeviceStructureLabel", STRING),
        A::new("E", "SourceDeviceElementNumber", INTEGER),
        A::new("F", "UserDeviceElementNumber", INTEGER),
        A::new("G", "ProcessDataDDI", STRING),
    ],
    children: &[C { tag: EntityTag::AllocationStamp, role: "AllocationStamp" }],
};
