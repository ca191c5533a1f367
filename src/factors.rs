use crate::models::{ActivityCategory, ActivityType};

/// Fixed kg-CO₂-per-unit constant for one activity type.
#[derive(Debug, Clone, Copy)]
pub struct EmissionFactor {
    pub label: &'static str,
    pub category: ActivityCategory,
    pub co2_per_unit: f64,
    pub unit: &'static str,
}

static CAR: EmissionFactor = EmissionFactor {
    label: "Car",
    category: ActivityCategory::Travel,
    co2_per_unit: 0.192,
    unit: "km",
};

static PUBLIC_TRANSPORT: EmissionFactor = EmissionFactor {
    label: "Public Transport",
    category: ActivityCategory::Travel,
    co2_per_unit: 0.089,
    unit: "km",
};

static FLIGHT: EmissionFactor = EmissionFactor {
    label: "Flight",
    category: ActivityCategory::Travel,
    co2_per_unit: 0.255,
    unit: "km",
};

static ELECTRICITY: EmissionFactor = EmissionFactor {
    label: "Electricity",
    category: ActivityCategory::Energy,
    co2_per_unit: 0.475,
    unit: "kWh",
};

static GAS: EmissionFactor = EmissionFactor {
    label: "Natural Gas",
    category: ActivityCategory::Energy,
    co2_per_unit: 0.203,
    unit: "kWh",
};

static MEAT: EmissionFactor = EmissionFactor {
    label: "Meat Meal",
    category: ActivityCategory::Food,
    co2_per_unit: 7.26,
    unit: "meals",
};

static DAIRY: EmissionFactor = EmissionFactor {
    label: "Dairy Products",
    category: ActivityCategory::Food,
    co2_per_unit: 3.2,
    unit: "servings",
};

static VEGETARIAN: EmissionFactor = EmissionFactor {
    label: "Vegetarian Meal",
    category: ActivityCategory::Food,
    co2_per_unit: 1.7,
    unit: "meals",
};

/// Lookup is total over the enum, so an unknown-type case cannot reach this
/// table; unrecognized type strings are rejected when the request is parsed.
pub fn factor(kind: ActivityType) -> &'static EmissionFactor {
    match kind {
        ActivityType::Car => &CAR,
        ActivityType::PublicTransport => &PUBLIC_TRANSPORT,
        ActivityType::Flight => &FLIGHT,
        ActivityType::Electricity => &ELECTRICITY,
        ActivityType::Gas => &GAS,
        ActivityType::Meat => &MEAT,
        ActivityType::Dairy => &DAIRY,
        ActivityType::Vegetarian => &VEGETARIAN,
    }
}
