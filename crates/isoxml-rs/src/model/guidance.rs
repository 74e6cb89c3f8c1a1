// crates/isoxml-rs/src/model/guidance.rs

//! Guidance lines, their groups and shifts, and the RTK base stations they
//! were recorded against.

use super::{
    AttributeDescriptor as A, ChildDescriptor as C, DECIMAL, EntityDescriptor, EntityTag,
    EnumDescriptor as E, INTEGER, STRING, ScalarType, id_ref,
};

const PATTERN_TYPE: &[E] = &[
    E { code: "1", name: "AB" },
    E { code: "2", name: "APlus" },
    E { code: "3", name: "Curve" },
    E { code: "4", name: "Pivot" },
    E { code: "5", name: "Spiral" },
];

const PATTERN_OPTIONS: &[E] = &[
    E { code: "1", name: "ClockwiseForPivot" },
    E { code: "2", name: "CounterClockwiseForPivot" },
    E { code: "3", name: "FullCircleForPivot" },
];

const PROPAGATION_DIRECTION: &[E] = &[
    E { code: "1", name: "BothDirections" },
    E { code: "2", name: "LeftDirectionOnly" },
    E { code: "3", name: "RightDirectionOnly" },
    E { code: "4", name: "NoPropagation" },
];

const PATTERN_EXTENSION: &[E] = &[
    E { code: "1", name: "FromBothFirstAndLastPoint" },
    E { code: "2", name: "FromFirstPointOnly" },
    E { code: "3", name: "FromLastPointOnly" },
    E { code: "4", name: "NoExtensions" },
];

const GNSS_METHOD: &[E] = &[
    E { code: "0", name: "NoGpsFix" },
    E { code: "1", name: "GnssFix" },
    E { code: "2", name: "DgnssFix" },
    E { code: "3", name: "PreciseGnss" },
    E { code: "4", name: "RtkFixedInteger" },
    E { code: "5", name: "RtkFloat" },
    E { code: "6", name: "EstDrMode" },
    E { code: "7", name: "ManualInput" },
    E { code: "8", name: "SimulateMode" },
    E { code: "16", name: "DesktopGeneratedData" },
    E { code: "17", name: "Other" },
];

pub(crate) static BSN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::BaseStation,
    code: "BSN",
    name: "BaseStation",
    attributes: &[
        A::new("A", "BaseStationId", STRING).primary_id(),
        A::new("B", "BaseStationDesignator", STRING),
        A::new("C", "BaseStationNorth", DECIMAL),
        A::new("D", "BaseStationEast", DECIMAL),
        A::new("E", "BaseStationUp", INTEGER),
    ],
    children: &[],
};

pub(crate) static GGP: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::GuidanceGroup,
    code: "GGP",
    name: "GuidanceGroup",
    attributes: &[
        A::new("A", "GuidanceGroupId", STRING).primary_id(),
        A::new("B", "GuidanceGroupDesignator", STRING).optional(),
    ],
    children: &[
        C { tag: EntityTag::GuidancePattern, role: "GuidancePattern" },
        C { tag: EntityTag::Polygon, role: "BoundaryPolygon" },
    ],
};

pub(crate) static GPN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::GuidancePattern,
    code: "GPN",
    name: "GuidancePattern",
    attributes: &[
        A::new("A", "GuidancePatternId", STRING).primary_id(),
        A::new("B", "GuidancePatternDesignator", STRING).optional(),
        A::new("C", "GuidancePatternType", ScalarType::Enum(PATTERN_TYPE)),
        A::new("D", "GuidancePatternOptions", ScalarType::Enum(PATTERN_OPTIONS)).optional(),
        A::new("E", "GuidancePatternPropagationDirection", ScalarType::Enum(PROPAGATION_DIRECTION))
            .optional(),
        A::new("F", "GuidancePatternExtension", ScalarType::Enum(PATTERN_EXTENSION)).optional(),
        A::new("G", "GuidancePatternHeading", DECIMAL).optional(),
        A::new("H", "GuidancePatternRadius", INTEGER).optional(),
        A::new("I", "GuidancePatternGNSSMethod", ScalarType::Enum(GNSS_METHOD)).optional(),
        A::new("J", "GuidancePatternHorizontalAccuracy", DECIMAL).optional(),
        A::new("K", "GuidancePatternVerticalAccuracy", DECIMAL).optional(),
        A::new("L", "BaseStationIdRef", id_ref(EntityTag::BaseStation)).optional(),
        A::new("M", "OriginalSRID", STRING).optional(),
        A::new("N", "NumberOfSwathsLeft", INTEGER).optional(),
        A::new("O", "NumberOfSwathsRight", INTEGER).optional(),
    ],
    children: &[
        C { tag: EntityTag::LineString, role: "LineString" },
        C { tag: EntityTag::Polygon, role: "BoundaryPolygon" },
    ],
};

/// Selects a guidance group for a task.
pub(crate) static GAN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::GuidanceAllocation,
    code: "GAN",
    name: "GuidanceAllocation",
    attributes: &[A::new("A", "GuidanceGroupIdRef", id_ref(EntityTag::GuidanceGroup))],
    children: &[
        C { tag: EntityTag::AllocationStamp, role: "AllocationStamp" },
        C { tag: EntityTag::GuidanceShift, role: "GuidanceShift" },
    ],
};

pub(crate) static GST: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::GuidanceShift,
    code: "GST",
    name: "GuidanceShift",
    attributes: &[
        A::new("A", "GuidanceGroupIdRef", id_ref(EntityTag::GuidanceGroup)).optional(),
        A::new("B", "GuidancePatternIdRef", id_ref(EntityTag::GuidancePattern)).optional(),
        A::new("C", "GuidanceEastShift", INTEGER).optional(),
        A::new("D", "GuidanceNorthShift", INTEGER).optional(),
        A::new("E", "PropagationOffset", INTEGER).optional(),
    ],
    children: &[C { tag: EntityTag::AllocationStamp, role: "AllocationStamp" }],
};
