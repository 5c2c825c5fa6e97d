//! RAM module records.

use serde::Deserialize;

use crate::{
    field::PartRecord,
    text::{terminate, with_price},
};

#[derive(Debug, Clone, Deserialize)]
pub struct RamSpec {
    pub name: String,
    pub capacity: String,
    #[serde(rename = "type")]
    pub memory_type: String,
    pub speed: String,
    pub voltage: String,
    pub compatibility: String,
    #[serde(default)]
    pub price: Option<String>,
}

spec_fields! {
    /// Fields a RAM question can be about.
    pub enum RamField {
        Name => ("name", "name"),
        Capacity => ("capacity", "capacity"),
        Type => ("type", "memory type"),
        Speed => ("speed", "speed"),
        Voltage => ("voltage", "voltage"),
        Compatibility => ("compatibility", "compatibility"),
        Price => ("price", "price"),
    }
    synonyms {
        "frequency" => Speed,
        "clock" => Speed,
        "mhz" => Speed,
        "size" => Capacity,
        "gb" => Capacity,
        "ddr" => Type,
        "generation" => Type,
        "volts" => Voltage,
        "v" => Voltage,
    }
}

impl PartRecord for RamSpec {
    type Field = RamField;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: RamField) -> Option<&str> {
        match field {
            RamField::Name => Some(&self.name),
            RamField::Capacity => Some(&self.capacity),
            RamField::Type => Some(&self.memory_type),
            RamField::Speed => Some(&self.speed),
            RamField::Voltage => Some(&self.voltage),
            RamField::Compatibility => Some(&self.compatibility),
            RamField::Price => self.price.as_deref(),
        }
    }

    fn describe(&self) -> String {
        let text = format!(
            "The {} is a {} {} RAM running at {}, with a voltage of {}. Compatibility: {}",
            self.name, self.capacity, self.memory_type, self.speed, self.voltage, self.compatibility
        );
        with_price(terminate(text), self.price.as_deref())
    }
}
