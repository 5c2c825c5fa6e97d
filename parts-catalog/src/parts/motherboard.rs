//! Motherboard records.

use serde::Deserialize;

use crate::{
    field::PartRecord,
    text::{terminate, with_price},
};

#[derive(Debug, Clone, Deserialize)]
pub struct MotherboardSpec {
    pub name: String,
    pub socket: String,
    pub chipset: String,
    pub form_factor: String,
    pub memory_support: String,
    pub features: String,
    pub compatibility: String,
    #[serde(default)]
    pub price: Option<String>,
}

spec_fields! {
    pub enum MotherboardField {
        Name => ("name", "name"),
        Socket => ("socket", "socket"),
        Chipset => ("chipset", "chipset"),
        FormFactor => ("form_factor", "form factor"),
        MemorySupport => ("memory_support", "memory support"),
        Features => ("features", "feature set"),
        Compatibility => ("compatibility", "compatibility"),
        Price => ("price", "price"),
    }
    synonyms {
        "size" => FormFactor,
        "ram" => MemorySupport,
        "memory" => MemorySupport,
        "max_memory" => MemorySupport,
        "ram_support" => MemorySupport,
        "io" => Features,
        "ports" => Features,
        "connectivity" => Features,
        "cpu_support" => Compatibility,
        "supported_cpus" => Compatibility,
    }
}

impl PartRecord for MotherboardSpec {
    type Field = MotherboardField;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: MotherboardField) -> Option<&str> {
        match field {
            MotherboardField::Name => Some(&self.name),
            MotherboardField::Socket => Some(&self.socket),
            MotherboardField::Chipset => Some(&self.chipset),
            MotherboardField::FormFactor => Some(&self.form_factor),
            MotherboardField::MemorySupport => Some(&self.memory_support),
            MotherboardField::Features => Some(&self.features),
            MotherboardField::Compatibility => Some(&self.compatibility),
            MotherboardField::Price => self.price.as_deref(),
        }
    }

    fn describe(&self) -> String {
        let text = format!(
            "The {} uses the {} socket with the {} chipset. It is a {} board supporting {}. Key features include: {}. Compatibility: {}",
            self.name,
            self.socket,
            self.chipset,
            self.form_factor,
            self.memory_support,
            self.features,
            self.compatibility
        );
        with_price(terminate(text), self.price.as_deref())
    }
}
