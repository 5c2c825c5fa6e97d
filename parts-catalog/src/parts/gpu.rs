//! Graphics card records.

use serde::Deserialize;

use crate::{
    field::PartRecord,
    text::{terminate, with_price},
};

#[derive(Debug, Clone, Deserialize)]
pub struct GpuSpec {
    pub name: String,
    pub vram: String,
    pub clock_speed: String,
    pub power_consumption: String,
    pub slot_type: String,
    pub compatibility: String,
    #[serde(default)]
    pub price: Option<String>,
}

spec_fields! {
    pub enum GpuField {
        Name => ("name", "name"),
        Vram => ("vram", "VRAM"),
        ClockSpeed => ("clock_speed", "boost clock"),
        PowerConsumption => ("power_consumption", "power consumption"),
        SlotType => ("slot_type", "slot type"),
        Compatibility => ("compatibility", "compatibility"),
        Price => ("price", "price"),
    }
    synonyms {
        "memory" => Vram,
        "video_memory" => Vram,
        "boost_clock" => ClockSpeed,
        "boost" => ClockSpeed,
        "clock" => ClockSpeed,
        "speed" => ClockSpeed,
        "frequency" => ClockSpeed,
        "power" => PowerConsumption,
        "wattage" => PowerConsumption,
        "tdp" => PowerConsumption,
        "tgp" => PowerConsumption,
        "interface" => SlotType,
        "pcie" => SlotType,
        "slot" => SlotType,
    }
}

impl PartRecord for GpuSpec {
    type Field = GpuField;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: GpuField) -> Option<&str> {
        match field {
            GpuField::Name => Some(&self.name),
            GpuField::Vram => Some(&self.vram),
            GpuField::ClockSpeed => Some(&self.clock_speed),
            GpuField::PowerConsumption => Some(&self.power_consumption),
            GpuField::SlotType => Some(&self.slot_type),
            GpuField::Compatibility => Some(&self.compatibility),
            GpuField::Price => self.price.as_deref(),
        }
    }

    fn describe(&self) -> String {
        let text = format!(
            "The {} has {} VRAM, a boost clock of {}, and consumes approximately {}. It uses a {} slot. Compatibility: {}",
            self.name,
            self.vram,
            self.clock_speed,
            self.power_consumption,
            self.slot_type,
            self.compatibility
        );
        with_price(terminate(text), self.price.as_deref())
    }
}
