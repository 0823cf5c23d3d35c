//! Compiled-in registry of telemetry channels
//!
//! Every channel the panel can show is a [`FieldKey`]. The key set is
//! closed, so looking up the entry for a key the renderer names can never
//! fail. Wire keys arriving as strings go through [`lookup`].

use once_cell::sync::Lazy;
use std::collections::HashMap;
use telemachus_dash_types::{FieldSpec, FieldType};

/// Identifier of one registered telemetry channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldKey {
    VesselName,
    Throttle,
    Heading,
    Pitch,
    Roll,
    AngleToPrograde,
    SurfaceVelocity,
    OrbitalVelocity,
    GeeForce,
    AtmosphericDensity,
    DynamicPressure,
    Altitude,
    Periapsis,
    Apoapsis,
    TimeToPeriapsis,
    TimeToApoapsis,
    Inclination,
    Eccentricity,
    Stage,
    Sas,
    Rcs,
    Lights,
    Brakes,
    Gear,
    Kerosene,
    LiquidOxygen,
    Hydrazine,
    Aerozine50,
    Nto,
    Mmh,
    XenonGas,
    Udmh,
    MonoPropellant,
    ElectricCharge,
    SolidFuel,
    MissionTime,
}

impl FieldKey {
    /// All keys, in the same order as the registry table
    pub const ALL: [FieldKey; 36] = [
        FieldKey::VesselName,
        FieldKey::Throttle,
        FieldKey::Heading,
        FieldKey::Pitch,
        FieldKey::Roll,
        FieldKey::AngleToPrograde,
        FieldKey::SurfaceVelocity,
        FieldKey::OrbitalVelocity,
        FieldKey::GeeForce,
        FieldKey::AtmosphericDensity,
        FieldKey::DynamicPressure,
        FieldKey::Altitude,
        FieldKey::Periapsis,
        FieldKey::Apoapsis,
        FieldKey::TimeToPeriapsis,
        FieldKey::TimeToApoapsis,
        FieldKey::Inclination,
        FieldKey::Eccentricity,
        FieldKey::Stage,
        FieldKey::Sas,
        FieldKey::Rcs,
        FieldKey::Lights,
        FieldKey::Brakes,
        FieldKey::Gear,
        FieldKey::Kerosene,
        FieldKey::LiquidOxygen,
        FieldKey::Hydrazine,
        FieldKey::Aerozine50,
        FieldKey::Nto,
        FieldKey::Mmh,
        FieldKey::XenonGas,
        FieldKey::Udmh,
        FieldKey::MonoPropellant,
        FieldKey::ElectricCharge,
        FieldKey::SolidFuel,
        FieldKey::MissionTime,
    ];

    /// Registry entry for this key
    pub fn spec(self) -> &'static FieldSpec {
        &FIELDS[self as usize]
    }

    /// Short wire key, e.g. `"Alt"`
    pub fn as_str(self) -> &'static str {
        self.spec().key
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn unit(self) -> &'static str {
        self.spec().unit
    }

    /// Parse a wire key back into a registered key
    pub fn from_key(key: &str) -> Option<FieldKey> {
        INDEX.get(key).copied()
    }
}

const fn numeric(
    key: &'static str,
    remote_path: &'static str,
    label: &'static str,
    unit: &'static str,
) -> FieldSpec {
    FieldSpec {
        key,
        remote_path,
        remote_max_path: "",
        label,
        unit,
        field_type: FieldType::Numerical,
    }
}

const fn toggle(key: &'static str, remote_path: &'static str, label: &'static str) -> FieldSpec {
    FieldSpec {
        key,
        remote_path,
        remote_max_path: "",
        label,
        unit: "",
        field_type: FieldType::Boolean,
    }
}

const fn resource(
    key: &'static str,
    remote_path: &'static str,
    remote_max_path: &'static str,
    label: &'static str,
    unit: &'static str,
) -> FieldSpec {
    FieldSpec {
        key,
        remote_path,
        remote_max_path,
        label,
        unit,
        field_type: FieldType::Numerical,
    }
}

/// Registry table, indexed by `FieldKey as usize`
static FIELDS: [FieldSpec; 36] = [
    FieldSpec {
        key: "Name",
        remote_path: "v.name",
        remote_max_path: "",
        label: "Name",
        unit: "",
        field_type: FieldType::Text,
    },
    numeric("Throt", "f.throttle", "Throttle", ""),
    numeric("H", "n.heading", "Heading", "°"),
    numeric("P", "n.pitch", "Pitch", "°"),
    numeric("R", "n.roll", "Roll", "°"),
    numeric("ToPro", "v.angleToPrograde", "Ang to prograde", "°"),
    numeric("Vel", "v.surfaceVelocity", "Surface velocity", "m/s"),
    numeric("OVel", "v.orbitalVelocity", "Orbital velocity", "m/s"),
    numeric("G", "v.geeForce", "Gee", "G"),
    numeric("Atm", "v.atmosphericDensity", "Atmos density", ""),
    numeric("Q", "v.dynamicPressure", "Q", ""),
    numeric("Alt", "v.altitude", "Radar altitude", ""),
    numeric("Pe", "o.PeA", "Pe", ""),
    numeric("Ap", "o.ApA", "Ap", ""),
    numeric("TTPe", "o.timeToPe", "Time to Pe", ""),
    numeric("TTAp", "o.timeToAp", "Time to Ap", ""),
    numeric("Incl", "o.inclination", "Inclination", "°"),
    numeric("Ecc", "o.eccentricity", "Eccentricity", ""),
    numeric("St", "mj.node", "Stage", ""),
    toggle("SAS", "v.sasValue", "SAS"),
    toggle("RCS", "v.rcsValue", "RCS"),
    toggle("LGT", "v.lightValue", "LIGHT"),
    toggle("BRK", "v.brakeValue", "BRK"),
    toggle("GEAR", "v.gearValue", "GEAR"),
    resource("Kero", "r.resource[Kerosene]", "r.resourceMax[Kerosene]", "Kerosene", "L"),
    resource("LOX", "r.resource[LqdOxygen]", "r.resourceMax[LqdOxygen]", "Liquid oxygen", "L"),
    resource("Hydra", "r.resource[Hydrazine]", "r.resourceMax[Hydrazine]", "Hydrazine", "L"),
    resource("Aero", "r.resource[Aerozine50]", "r.resourceMax[Aerozine50]", "Aerozine 50", "L"),
    resource("NTO", "r.resource[NTO]", "r.resourceMax[NTO]", "NTO", "L"),
    resource("MMH", "r.resource[MMH]", "r.resourceMax[MMH]", "MMH", "L"),
    resource("Xen", "r.resource[XenonGas]", "r.resourceMax[XenonGas]", "Xenon gas", "L"),
    resource("UDMH", "r.resource[UDMH]", "r.resourceMax[UDMH]", "UDMH", "L"),
    resource(
        "Mono",
        "r.resource[MonoPropellant]",
        "r.resourceMax[MonoPropellant]",
        "Monopropellant",
        "L",
    ),
    resource(
        "Elec",
        "r.resource[ElectricCharge]",
        "r.resourceMax[ElectricCharge]",
        "Electric charge",
        "Wh",
    ),
    resource("Solid", "r.resource[SolidFuel]", "r.resourceMax[SolidFuel]", "Solid fuel", "kg"),
    numeric("T", "v.missionTime", "Time", ""),
];

static INDEX: Lazy<HashMap<&'static str, FieldKey>> = Lazy::new(|| {
    log::trace!("Building field registry index ({} entries)", FIELDS.len());
    FieldKey::ALL.iter().map(|&k| (k.as_str(), k)).collect()
});

/// Every registered channel
pub fn fields() -> &'static [FieldSpec] {
    &FIELDS
}

/// Registry entry for a wire key
pub fn lookup(key: &str) -> Option<&'static FieldSpec> {
    FieldKey::from_key(key).map(FieldKey::spec)
}
