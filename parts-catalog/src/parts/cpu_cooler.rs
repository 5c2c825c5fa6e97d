//! CPU cooler records (air and AIO liquid).

use serde::Deserialize;

use crate::{
    field::PartRecord,
    text::{terminate, with_price},
};

#[derive(Debug, Clone, Deserialize)]
pub struct CpuCoolerSpec {
    pub name: String,
    /// Free-form cooler type, e.g. "Dual-Tower Air Cooler" or "AIO Liquid Cooler".
    #[serde(rename = "type")]
    pub cooler_type: String,
    /// Air coolers only.
    #[serde(default)]
    pub fan_size: Option<String>,
    /// Liquid coolers only.
    #[serde(default)]
    pub radiator_size: Option<String>,
    pub tdp: String,
    pub rgb: String,
    pub compatibility: String,
    #[serde(default)]
    pub price: Option<String>,
}

/// Cooling technology, derived from the free-form `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoolerKind {
    Air,
    Liquid,
    Other,
}

impl CpuCoolerSpec {
    pub fn kind(&self) -> CoolerKind {
        let t = self.cooler_type.to_lowercase();
        if t.contains("liquid") || t.contains("aio") {
            CoolerKind::Liquid
        } else if t.contains("air") {
            CoolerKind::Air
        } else {
            CoolerKind::Other
        }
    }
}

spec_fields! {
    pub enum CpuCoolerField {
        Name => ("name", "name"),
        Type => ("type", "cooler type"),
        FanSize => ("fan_size", "fan size"),
        RadiatorSize => ("radiator_size", "radiator size"),
        Tdp => ("tdp", "TDP rating"),
        Rgb => ("rgb", "lighting"),
        Compatibility => ("compatibility", "compatibility"),
        Price => ("price", "price"),
    }
    synonyms {
        "fan" => FanSize,
        "radiator" => RadiatorSize,
        "rad" => RadiatorSize,
        "cooling_capacity" => Tdp,
        "rating" => Tdp,
        "max_tdp" => Tdp,
        "lighting" => Rgb,
        "led" => Rgb,
        "sockets" => Compatibility,
        "socket" => Compatibility,
        "clearance" => Compatibility,
    }
}

impl PartRecord for CpuCoolerSpec {
    type Field = CpuCoolerField;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: CpuCoolerField) -> Option<&str> {
        match field {
            CpuCoolerField::Name => Some(&self.name),
            CpuCoolerField::Type => Some(&self.cooler_type),
            CpuCoolerField::FanSize => self.fan_size.as_deref(),
            CpuCoolerField::RadiatorSize => self.radiator_size.as_deref(),
            CpuCoolerField::Tdp => Some(&self.tdp),
            CpuCoolerField::Rgb => Some(&self.rgb),
            CpuCoolerField::Compatibility => Some(&self.compatibility),
            CpuCoolerField::Price => self.price.as_deref(),
        }
    }

    fn describe(&self) -> String {
        let mut text = format!("The {} is a {}. ", self.name, self.cooler_type);

        let size = match self.kind() {
            CoolerKind::Air => self
                .value(CpuCoolerField::FanSize)
                .map(|fan| format!("It uses a {fan} fan and is rated")),
            CoolerKind::Liquid => self
                .value(CpuCoolerField::RadiatorSize)
                .map(|radiator| format!("It has a {radiator} radiator and is rated")),
            CoolerKind::Other => None,
        };
        let rated = size.unwrap_or_else(|| "It is rated".to_string());
        text.push_str(&format!("{rated} for CPUs up to {}. ", self.tdp));

        text.push_str(&format!(
            "It features {}. Compatibility: {}",
            self.rgb, self.compatibility
        ));
        with_price(terminate(text), self.price.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cooler(kind: &str, fan: Option<&str>, radiator: Option<&str>) -> CpuCoolerSpec {
        CpuCoolerSpec {
            name: "Test Cooler".into(),
            cooler_type: kind.into(),
            fan_size: fan.map(Into::into),
            radiator_size: radiator.map(Into::into),
            tdp: "Up to 220W".into(),
            rgb: "No RGB".into(),
            compatibility: "Supports AM5.".into(),
            price: None,
        }
    }

    #[test]
    fn kind_is_derived_from_type() {
        assert_eq!(cooler("Dual-Tower Air Cooler", None, None).kind(), CoolerKind::Air);
        assert_eq!(cooler("AIO Liquid Cooler", None, None).kind(), CoolerKind::Liquid);
        assert_eq!(cooler("Passive Heatsink", None, None).kind(), CoolerKind::Other);
    }

    #[test]
    fn air_cooler_mentions_fan_not_radiator() {
        let text = cooler("Air Cooler", Some("120mm"), None).describe();
        assert!(text.contains("It uses a 120mm fan and is rated for CPUs up to Up to 220W."));
        assert!(!text.contains("radiator"));
    }

    #[test]
    fn tdp_rating_survives_missing_size() {
        let air = cooler("Air Cooler", None, None).describe();
        assert_eq!(
            air,
            "The Test Cooler is a Air Cooler. It is rated for CPUs up to Up to 220W. It features No RGB. Compatibility: Supports AM5."
        );

        let passive = cooler("Passive Heatsink", Some("120mm"), None).describe();
        assert!(passive.contains("It is rated for CPUs up to Up to 220W."));
        assert!(!passive.contains("fan and is rated"));
    }

    #[test]
    fn liquid_cooler_mentions_radiator_not_fan() {
        let text = cooler("AIO Liquid Cooler", None, Some("240mm")).describe();
        assert!(text.contains("It has a 240mm radiator"));
        assert!(!text.contains("fan and is rated"));
        assert!(text.ends_with("Compatibility: Supports AM5."));
    }
}
