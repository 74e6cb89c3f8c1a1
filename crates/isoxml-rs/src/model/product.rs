// crates/isoxml-rs/src/model/product.rs

//! Products, product groups, crops, cultural practices and value
//! presentations with their colour legends.

use super::{
    AttributeDescriptor as A, ChildDescriptor as C, DECIMAL, EntityDescriptor, EntityTag,
    EnumDescriptor as E, INTEGER, STRING, ScalarType, id_ref,
};

const PRODUCT_TYPE: &[E] = &[
    E { code: "1", name: "Single" },
    E { code: "2", name: "Mixture" },
    E { code: "3", name: "TemporaryMixture" },
];

const PRODUCT_GROUP_TYPE: &[E] = &[
    E { code: "1", name: "ProductGroupDefault" },
    E { code: "2", name: "CropType" },
];

pub(crate) static PDT: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::Product,
    code: "PDT",
    name: "Product",
    attributes: &[
        A::new("A", "ProductId", STRING).primary_id(),
        A::new("B", "ProductDesignator", STRING),
        A::new("C", "ProductGroupIdRef", id_ref(EntityTag::ProductGroup)).optional(),
        A::new("D", "ValuePresentationIdRef", id_ref(EntityTag::ValuePresentation)).optional(),
        A::new("E", "QuantityDDI", STRING).optional(),
        A::new("F", "ProductType", ScalarType::Enum(PRODUCT_TYPE)).optional(),
        A::new("G", "MixtureRecipeQuantity", INTEGER).optional(),
        A::new("H", "DensityMassPerVolume", INTEGER).optional(),
        A::new("I", "DensityMassPerCount", INTEGER).optional(),
        A::new("J", "DensityVolumePerCount", INTEGER).optional(),
    ],
    children: &[C { tag: EntityTag::ProductRelation, role: "ProductRelation" }],
};

pub(crate) static PRN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ProductRelation,
    code: "PRN",
    name: "ProductRelation",
    attributes: &[
        A::new("A", "ProductIdRef", id_ref(EntityTag::Product)),
        A::new("B", "QuantityValue", INTEGER),
    ],
    children: &[],
};

pub(crate) static PGP: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ProductGroup,
    code: "PGP",
    name: "ProductGroup",
    attributes: &[
        A::new("A", "ProductGroupId", STRING).primary_id(),
        A::new("B", "ProductGroupDesignator", STRING),
        A::new("C", "ProductGroupType", ScalarType::Enum(PRODUCT_GROUP_TYPE)).optional(),
    ],
    children: &[],
};

pub(crate) static CTP: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::CropType,
    code: "CTP",
    name: "CropType",
    attributes: &[
        A::new("A", "CropTypeId", STRING).primary_id(),
        A::new("B", "CropTypeDesignator", STRING),
        A::new("C", "ProductGroupIdRef", id_ref(EntityTag::ProductGroup)).optional(),
    ],
    children: &[C { tag: EntityTag::CropVariety, role: "CropVariety" }],
};

pub(crate) static CVT: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::CropVariety,
    code: "CVT",
    name: "CropVariety",
    attributes: &[
        A::new("A", "CropVarietyId", STRING).primary_id(),
        A::new("B", "CropVarietyDesignator", STRING),
        A::new("C", "ProductIdRef", id_ref(EntityTag::Product)).optional(),
    ],
    children: &[],
};

pub(crate) static VPN: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ValuePresentation,
    code: "VPN",
    name: "ValuePresentation",
    attributes: &[
        A::new("A", "ValuePresentationId", STRING).primary_id(),
        A::new("B", "Offset", INTEGER),
        A::new("C", "Scale", DECIMAL),
        A::new("D", "NumberOfDecimals", INTEGER),
        A::new("E", "UnitDesignator", STRING).optional(),
        A::new("F", "ColourLegendIdRef", id_ref(EntityTag::ColourLegend)).optional(),
    ],
    children: &[],
};

pub(crate) static CLD: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ColourLegend,
    code: "CLD",
    name: "ColourLegend",
    attributes: &[
        A::new("A", "ColourLegendId", STRING).primary_id(),
        A::new("B", "DefaultColour", INTEGER).optional(),
    ],
    children: &[C { tag: EntityTag::ColourRange, role: "ColourRange" }],
};

pub(crate) static CRG: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::ColourRange,
    code: "CRG",
    name: "ColourRange",
    attributes: &[
        A::new("A", "MinimumValue", INTEGER),
        A::new("B", "MaximumValue", INTEGER),
        A::new("C", "Colour", INTEGER),
    ],
    children: &[],
};

pub(crate) static CPC: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::CulturalPractice,
    code: "CPC",
    name: "CulturalPractice",
    attributes: &[
        A::new("A", "CulturalPracticeId", STRING).primary_id(),
        A::new("B", "CulturalPracticeDesignator", STRING),
    ],
    children: &[C {
        tag: EntityTag::OperationTechniqueReference,
        role: "OperationTechniqueReference",
    }],
};

pub(crate) static OTQ: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::OperationTechnique,
    code: "OTQ",
    name: "OperationTechnique",
    attributes: &[
        A::new("A", "OperationTechniqueId", STRING).primary_id(),
        A::new("B", "OperationTechniqueDesignator", STRING),
    ],
    children: &[],
};

pub(crate) static OTR: EntityDescriptor = EntityDescriptor {
    tag: EntityTag::OperationTechniqueReference,
    code: "OTR",
    name: "OperationTechniqueReference",
    attributes: &[A::new("A", "OperationTechniqueIdRef", id_ref(EntityTag::OperationTechnique))],
    children: &[],
};
