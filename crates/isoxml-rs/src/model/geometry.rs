// crates/isoxml-rs/src/model/geometry.rs

//! Polygons, line strings and points.

use super::{
    AttributeDescriptor as A, ChildDescriptor as C, DECIMAL, EntityDescriptor, EntityTag,
    EnumDescriptor as E, INTEGER, STRING, ScalarType,
};

const POLYGON_TYPE: &[E] = &[
    E { code: "1", name: "PartfieldBoundary" },
    E { code: "2", name: "TreatmentZone" },
    E { code: "3", name: "WaterSurface" },
    E { code: "4", name: "Building" },
    E { code: "5", name: "Road" },
    E { code: "6", name: "Obstacle" },
    E { code: "7", name: "Flag" },
    E { code: "8", name: "Other" },
    E { code: "9", name: "Mainfield" },
    E { code: "10", name: "Headland" },
    E { code: "11", name: "BufferZone" },
    E { code: "12", name: "Windbreak" },
];

const LINE_STRING_TYPE: &[E] = &[
    E { code: "1", name: "PolygonExterior" },
    E { code: "2", name: "PolygonInterior" },
    E { code: "3", name: "TramLine" },
    E { code: "4", name: "SamplingRoute" },
    E { code: "5", name: "GuidancePattern" },
    E { code: "6", name: "Drainage" },
    E { code: "7", name: "Fence" },
    E { code: "8", name: "Flag" },
    E { code: "9", name: "Obstacle" },
];

const POINT_TYPE: &[E] = &[
    E { code: "1", name: "Flag" },
    E { code: "2", name: "Other" },
    E { code: "3", name: "FieldAccess" },
    E { code: "4", name: "Storage" },
    E { code: "5", name: "Obstacle" },
    E { code: "6", name: "GuidanceReferenceA" },
    E { code: "7", name: "GuidanceReferenceB" },
    E { code: "8", name: "GuidanceReferenceCenter" },
    E { code: "9", name: "GuidancePoint" },
    E { code: "10", name: "PartfieldReferencePoint" },
    E { code: "11", name: "Homebase" },
];

pub(crate) static PLN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Polygon,
    code: "PLN",
    name: "Polygon",
    attributes: &[
        A::new("A", "PolygonType", ScalarType::Enum(POLYGON_TYPE)),
        A::new("B", "PolygonDesignator", STRING).optional(),
        A::new("C", "PolygonArea", INTEGER).optional(),
        A::new("D", "PolygonColour", INTEGER).optional(),
        A::new("E", "PolygonId", STRING).optional().primary_id(),
    ],
    children: &[C { tag: EntityTag::LineString, role: "LineString" }],
};

pub(crate) static LSG: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::LineString,
    code: "LSG",
    name: "LineString",
    attributes: &[
        A::new("A", "LineStringType", ScalarType::Enum(LINE_STRING_TYPE)),
        A::new("B", "LineStringDesignator", STRING).optional(),
        A::new("C", "LineStringWidth", INTEGER).optional(),
        A::new("D", "LineStringLength", INTEGER).optional(),
        A::new("E", "LineStringColour", INTEGER).optional(),
        A::new("F", "LineStringId", STRING).optional().primary_id(),
    ],
    children: &[C { tag: EntityTag::Point, role: "Point" }],
};

pub(crate) static PNT: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Point,
    code: "PNT",
    name: "Point",
    attributes: &[
        A::new("A", "PointType", ScalarType::Enum(POINT_TYPE)),
        A::new("B", "PointDesignator", STRING).optional(),
        A::new("C", "PointNorth", DECIMAL),
        A::new("D", "PointEast", DECIMAL),
        A::new("E", "PointUp", INTEGER).optional(),
        A::new("F", "PointColour", INTEGER).optional(),
        A::new("G", "PointId", STRING).optional().primary_id(),
        A::new("H", "PointHorizontalAccuracy", DECIMAL).optional(),
        A::new("I", "PointVerticalAccuracy", DECIMAL).optional(),
        A::new("J", "Filename", STRING).optional(),
        A::new("K", "Filelength", INTEGER).optional(),
    ],
    children: &[],
};
