// crates/isoxml-rs/src/model/farm.rs

//! Master data: customers, farms, partfields and workers.

use super::{
    AttributeDescriptor as A, ChildDescriptor as C, DECIMAL, EntityDescriptor, EntityTag, STRING,
    id_ref,
};

pub(crate) static CTR: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Customer,
    code: "CTR",
    name: "Customer",
    attributes: &[
        A::new("A", "CustomerId", STRING).primary_id(),
        A::new("B", "CustomerLastName", STRING),
        A::new("C", "CustomerFirstName", STRING).optional(),
        A::new("D", "CustomerStreet", STRING).optional(),
        A::new("E", "CustomerPOBox", STRING).optional(),
        A::new("F", "CustomerPostalCode", STRING).optional(),
        A::new("G", "CustomerCity", STRING).optional(),
        A::new("H", "CustomerState", STRING).optional(),
        A::new("I", "CustomerCountry", STRING).optional(),
        A::new("J", "CustomerPhone", STRING).optional(),
        A::new("K", "CustomerMobile", STRING).optional(),
        A::new("L", "CustomerFax", STRING).optional(),
        A::new("M", "CustomerEMail", STRING).optional(),
    ],
    children: &[],
};

pub(crate) static FRM: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Farm,
    code: "FRM",
    name: "Farm",
    attributes: &[
        A::new("A", "FarmId", STRING).primary_id(),
        A::new("B", "FarmDesignator", STRING),
        A::new("C", "FarmStreet", STRING).optional(),
        A::new("D", "FarmPOBox", STRING).optional(),
        A::new("E", "FarmPostalCode", STRING).optional(),
        A::new("F", "FarmCity", STRING).optional(),
        A::new("G", "FarmState", STRING).optional(),
        A::new("H", "FarmCountry", STRING).optional(),
        A::new("I", "CustomerIdRef", id_ref(EntityTag::Customer)).optional(),
    ],
    children: &[],
};

pub(crate) static PFD: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Partfield,
    code: "PFD",
    name: "Partfield",
    attributes: &[
        A::new("A", "PartfieldId", STRING).primary_id(),
        A::new("B", "PartfieldCode", STRING).optional(),
        A::new("C", "PartfieldDesignator", STRING),
        A::new("D", "PartfieldArea", DECIMAL),
        A::new("E", "CustomerIdRef", id_ref(EntityTag::Customer)).optional(),
        A::new("F", "FarmIdRef", id_ref(EntityTag::Farm)).optional(),
        A::new("G", "CropTypeIdRef", id_ref(EntityTag::CropType)).optional(),
        A::new("H", "CropVarietyIdRef", id_ref(EntityTag::CropVariety)).optional(),
        A::new("I", "FieldIdRef", id_ref(EntityTag::Partfield)).optional(),
    ],
    children: &[
        C { tag: EntityTag::Polygon, role: "Polygon" },
        C { tag: EntityTag::LineString, role: "LineString" },
        C { tag: EntityTag::Point, role: "Point" },
        C { tag: EntityTag::GuidanceGroup, role: "GuidanceGroup" },
    ],
};

pub(crate) static WKR: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Worker,
    code: "WKR",
    name: "Worker",
    attributes: &[
        A::new("A", "WorkerId", STRING).primary_id(),
        A::new("B", "WorkerLastName", STRING),
        A::new("C", "WorkerFirstName", STRING).optional(),
        A::new("D", "WorkerStreet", STRING).optional(),
        A::new("E", "WorkerPOBox", STRING).optional(),
        A::new("F", "WorkerPostalCode", STRING).optional(),
        A::new("G", "WorkerCity", STRING).optional(),
        A::new("H", "WorkerState", STRING).optional(),
        A::new("I", "WorkerCountry", STRING).optional(),
        A::new("J", "WorkerPhone", STRING).optional(),
        A::new("K", "WorkerMobile", STRING).optional(),
        A::new("L", "WorkerLicenseNumber", STRING).optional(),
        A::new("M", "WorkerEMail", STRING).optional(),
    ],
    children: &[],
};
