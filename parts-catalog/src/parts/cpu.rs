//! CPU records.

use serde::Deserialize;

use crate::{
    field::PartRecord,
    text::{terminate, with_price},
};

#[derive(Debug, Clone, Deserialize)]
pub struct CpuSpec {
    pub name: String,
    pub socket: String,
    pub base_clock: String,
    pub cores_threads: String,
    pub tdp: String,
    pub compatibility: String,
    #[serde(default)]
    pub price: Option<String>,
}

spec_fields! {
    /// Fields a CPU question can be about.
    pub enum CpuField {
        Name => ("name", "name"),
        Socket => ("socket", "socket"),
        BaseClock => ("base_clock", "base clock speed"),
        CoresThreads => ("cores_threads", "core and thread count"),
        Tdp => ("tdp", "TDP"),
        Compatibility => ("compatibility", "compatibility"),
        Price => ("price", "price"),
    }
    synonyms {
        "clock" => BaseClock,
        "clock_speed" => BaseClock,
        "speed" => BaseClock,
        "frequency" => BaseClock,
        "ghz" => BaseClock,
        "cores" => CoresThreads,
        "threads" => CoresThreads,
        "core_count" => CoresThreads,
        "thread_count" => CoresThreads,
        "power" => Tdp,
        "wattage" => Tdp,
        "power_draw" => Tdp,
        "thermal_design_power" => Tdp,
        "platform" => Socket,
    }
}

impl PartRecord for CpuSpec {
    type Field = CpuField;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: CpuField) -> Option<&str> {
        match field {
            CpuField::Name => Some(&self.name),
            CpuField::Socket => Some(&self.socket),
            CpuField::BaseClock => Some(&self.base_clock),
            CpuField::CoresThreads => Some(&self.cores_threads),
            CpuField::Tdp => Some(&self.tdp),
            CpuField::Compatibility => Some(&self.compatibility),
            CpuField::Price => self.price.as_deref(),
        }
    }

    fn describe(&self) -> String {
        let text = format!(
            "The {} has {} and a base clock speed of {}. It uses the {} socket and has a TDP of {}. For compatibility, it works with {}",
            self.name, self.cores_threads, self.base_clock, self.socket, self.tdp, self.compatibility
        );
        with_price(terminate(text), self.price.as_deref())
    }
}
