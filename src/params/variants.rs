//! Supported GM variants and their per-car data.

use super::error::ParamsError;
use std::str::FromStr;

pub const MPH_TO_MS: f64 = 0.44704;
pub const LB_TO_KG: f64 = 0.453592;

named_enum! {
    /// Supported vehicle variant, named by its fingerprint string.
    pub enum Variant {
        HoldenAstra => "HOLDEN ASTRA RS-V BK 2017",
        Volt => "CHEVROLET VOLT PREMIUM 2017",
        CadillacAts => "CADILLAC ATS Premium Performance 2018",
        CadillacCt6 => "CADILLAC CT6 SUPERCRUISE 2018",
        Malibu => "CHEVROLET MALIBU PREMIER 2017",
        Acadia => "GMC ACADIA DENALI 2018",
        BuickRegal => "BUICK REGAL ESSENCE 2018",
    }
}

impl FromStr for Variant {
    type Err = ParamsError;

    fn from_str(id: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .iter()
            .copied()
            .find(|v| v.name() == id)
            .ok_or_else(|| ParamsError::UnknownVariant(id.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum SafetyModel {
    Gm,
    Cadillac,
}

#[derive(Clone, Copy, Debug)]
pub(crate) enum CurbMass {
    Kg(f64),
    Lb(f64),
}

impl CurbMass {
    pub(crate) fn kg(self) -> f64 {
        match self {
            Self::Kg(kg) => kg,
            Self::Lb(lb) => lb * LB_TO_KG,
        }
    }
}

/// Raw per-variant data; everything else in a `ParamTable` derives from it.
#[derive(Clone, Copy, Debug)]
pub(crate) struct VariantData {
    pub variant: Variant,
    /// Minimum engage speed in mph, `None` when the PCM decides.
    pub min_enable_mph: Option<f64>,
    pub curb_mass: CurbMass,
    pub wheelbase: f64,
    pub steer_ratio: f64,
    pub center_to_front_ratio: f64,
    pub safety_model: SafetyModel,
    pub native_full_range_cruise: bool,
    /// Lateral PID (kp, ki) override; shared tuning otherwise.
    pub lateral_pid: Option<(f64, f64)>,
    pub steer_rate_cost: Option<f64>,
}

static VOLT: VariantData = VariantData {
    variant: Variant::Volt,
    min_enable_mph: Some(8.0),
    curb_mass: CurbMass::Kg(1607.0),
    wheelbase: 2.69,
    steer_ratio: 15.7,
    center_to_front_ratio: 0.4,
    safety_model: SafetyModel::Gm,
    native_full_range_cruise: false,
    lateral_pid: Some((0.12, 0.05)),
    steer_rate_cost: Some(0.7),
};

static MALIBU: VariantData = VariantData {
    variant: Variant::Malibu,
    min_enable_mph: Some(18.0),
    curb_mass: CurbMass::Kg(1496.0),
    wheelbase: 2.83,
    steer_ratio: 15.8,
    center_to_front_ratio: 0.4,
    safety_model: SafetyModel::Gm,
    native_full_range_cruise: false,
    lateral_pid: None,
    steer_rate_cost: None,
};

static HOLDEN_ASTRA: VariantData = VariantData {
    variant: Variant::HoldenAstra,
    min_enable_mph: Some(18.0),
    curb_mass: CurbMass::Kg(1363.0),
    wheelbase: 2.662,
    steer_ratio: 15.7,
    center_to_front_ratio: 0.4,
    safety_model: SafetyModel::Gm,
    native_full_range_cruise: false,
    lateral_pid: None,
    steer_rate_cost: None,
};

static ACADIA: VariantData = VariantData {
    variant: Variant::Acadia,
    min_enable_mph: None,
    curb_mass: CurbMass::Lb(4353.0),
    wheelbase: 2.86,
    steer_ratio: 14.4,
    center_to_front_ratio: 0.4,
    safety_model: SafetyModel::Gm,
    native_full_range_cruise: false,
    lateral_pid: None,
    steer_rate_cost: None,
};

static BUICK_REGAL: VariantData = VariantData {
    variant: Variant::BuickRegal,
    min_enable_mph: Some(18.0),
    curb_mass: CurbMass::Lb(3779.0),
    wheelbase: 2.83,
    steer_ratio: 14.4,
    center_to_front_ratio: 0.4,
    safety_model: SafetyModel::Gm,
    native_full_range_cruise: false,
    lateral_pid: None,
    steer_rate_cost: None,
};

static CADILLAC_ATS: VariantData = VariantData {
    variant: Variant::CadillacAts,
    min_enable_mph: Some(18.0),
    curb_mass: CurbMass::Kg(1601.0),
    wheelbase: 2.78,
    steer_ratio: 15.3,
    center_to_front_ratio: 0.49,
    safety_model: SafetyModel::Gm,
    native_full_range_cruise: false,
    lateral_pid: None,
    steer_rate_cost: None,
};

static CADILLAC_CT6: VariantData = VariantData {
    variant: Variant::CadillacCt6,
    min_enable_mph: None,
    curb_mass: CurbMass::Lb(4016.0),
    wheelbase: 3.11,
    steer_ratio: 14.6,
    center_to_front_ratio: 0.465,
    safety_model: SafetyModel::Cadillac,
    native_full_range_cruise: true,
    lateral_pid: None,
    steer_rate_cost: None,
};

pub(crate) fn data_for(variant: Variant) -> &'static VariantData {
    match variant {
        Variant::Volt => &VOLT,
        Variant::Malibu => &MALIBU,
        Variant::HoldenAstra => &HOLDEN_ASTRA,
        Variant::Acadia => &ACADIA,
        Variant::BuickRegal => &BUICK_REGAL,
        Variant::CadillacAts => &CADILLAC_ATS,
        Variant::CadillacCt6 => &CADILLAC_CT6,
    }
}
