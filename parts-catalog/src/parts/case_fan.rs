//! Case fan records.

use serde::Deserialize;

use crate::{
    field::PartRecord,
    text::{terminate, with_price},
};

#[derive(Debug, Clone, Deserialize)]
pub struct CaseFanSpec {
    pub name: String,
    pub size: String,
    pub rpm_range: String,
    pub airflow: String,
    /// Only published for static-pressure oriented fans.
    #[serde(default)]
    pub static_pressure: Option<String>,
    pub noise_level: String,
    pub rgb: String,
    pub compatibility: String,
    #[serde(default)]
    pub price: Option<String>,
}

spec_fields! {
    pub enum CaseFanField {
        Name => ("name", "name"),
        Size => ("size", "size"),
        RpmRange => ("rpm_range", "RPM range"),
        Airflow => ("airflow", "airflow"),
        StaticPressure => ("static_pressure", "static pressure"),
        NoiseLevel => ("noise_level", "noise level"),
        Rgb => ("rgb", "lighting"),
        Compatibility => ("compatibility", "compatibility"),
        Price => ("price", "price"),
    }
    synonyms {
        "speed" => RpmRange,
        "fan_speed" => RpmRange,
        "cfm" => Airflow,
        "pressure" => StaticPressure,
        "noise" => NoiseLevel,
        "loudness" => NoiseLevel,
        "db" => NoiseLevel,
        "dba" => NoiseLevel,
        "lighting" => Rgb,
        "led" => Rgb,
        "dimension" => Size,
    }
}

impl PartRecord for CaseFanSpec {
    type Field = CaseFanField;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: CaseFanField) -> Option<&str> {
        match field {
            CaseFanField::Name => Some(&self.name),
            CaseFanField::Size => Some(&self.size),
            CaseFanField::RpmRange => Some(&self.rpm_range),
            CaseFanField::Airflow => Some(&self.airflow),
            CaseFanField::StaticPressure => self.static_pressure.as_deref(),
            CaseFanField::NoiseLevel => Some(&self.noise_level),
            CaseFanField::Rgb => Some(&self.rgb),
            CaseFanField::Compatibility => Some(&self.compatibility),
            CaseFanField::Price => self.price.as_deref(),
        }
    }

    fn describe(&self) -> String {
        let mut text = format!(
            "The {} is a {} case fan. It runs at {}, providing {} airflow ",
            self.name, self.size, self.rpm_range, self.airflow
        );
        if let Some(pressure) = self.value(CaseFanField::StaticPressure) {
            text.push_str(&format!("with {pressure} static pressure, "));
        }
        text.push_str(&format!(
            "and has a noise level of {}. It features {}. Compatibility: {}",
            self.noise_level, self.rgb, self.compatibility
        ));
        with_price(terminate(text), self.price.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fan(static_pressure: Option<&str>) -> CaseFanSpec {
        CaseFanSpec {
            name: "Test Fan".into(),
            size: "120mm".into(),
            rpm_range: "200-1800 RPM".into(),
            airflow: "56.3 CFM".into(),
            static_pressure: static_pressure.map(Into::into),
            noise_level: "0.3 Sone".into(),
            rgb: "No RGB".into(),
            compatibility: "Needs a 4-pin header.".into(),
            price: None,
        }
    }

    #[test]
    fn static_pressure_clause_only_when_known() {
        let with = fan(Some("2.2 mmH2O")).describe();
        assert!(with.contains("56.3 CFM airflow with 2.2 mmH2O static pressure, and has a noise level of 0.3 Sone."));

        let without = fan(None).describe();
        assert!(without.contains("56.3 CFM airflow and has a noise level"));
        assert!(!without.contains("static pressure"));
    }
}
