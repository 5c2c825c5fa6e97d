//! Power supply records.

use serde::Deserialize;

use crate::{
    field::PartRecord,
    text::{terminate, with_price},
};

#[derive(Debug, Clone, Deserialize)]
pub struct PsuSpec {
    pub name: String,
    pub wattage: String,
    pub efficiency_rating: String,
    pub modularity: String,
    pub cables: String,
    pub compatibility: String,
    #[serde(default)]
    pub price: Option<String>,
}

spec_fields! {
    pub enum PsuField {
        Name => ("name", "name"),
        Wattage => ("wattage", "wattage"),
        EfficiencyRating => ("efficiency_rating", "efficiency rating"),
        Modularity => ("modularity", "modularity"),
        Cables => ("cables", "cable set"),
        Compatibility => ("compatibility", "compatibility"),
        Price => ("price", "price"),
    }
    synonyms {
        "watts" => Wattage,
        "power" => Wattage,
        "capacity" => Wattage,
        "output" => Wattage,
        "efficiency" => EfficiencyRating,
        "rating" => EfficiencyRating,
        "80_plus" => EfficiencyRating,
        "certification" => EfficiencyRating,
        "modular" => Modularity,
        "connectors" => Cables,
        "cable" => Cables,
    }
}

impl PartRecord for PsuSpec {
    type Field = PsuField;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: PsuField) -> Option<&str> {
        match field {
            PsuField::Name => Some(&self.name),
            PsuField::Wattage => Some(&self.wattage),
            PsuField::EfficiencyRating => Some(&self.efficiency_rating),
            PsuField::Modularity => Some(&self.modularity),
            PsuField::Cables => Some(&self.cables),
            PsuField::Compatibility => Some(&self.compatibility),
            PsuField::Price => self.price.as_deref(),
        }
    }

    fn describe(&self) -> String {
        let text = format!(
            "The {} is a {}, {} certified, {} PSU. It comes with {}. Compatibility: {}",
            self.name,
            self.wattage,
            self.efficiency_rating,
            self.modularity,
            self.cables,
            self.compatibility
        );
        with_price(terminate(text), self.price.as_deref())
    }
}
