//! Storage records (hard disks and SSDs).

use serde::Deserialize;

use crate::{
    field::PartRecord,
    text::{terminate, with_price},
};

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSpec {
    pub name: String,
    /// "HDD", "NVMe SSD", "SATA SSD", ...
    #[serde(rename = "type")]
    pub drive_type: String,
    pub capacity: String,
    pub interface: String,
    pub form_factor: String,
    /// Spinning disks only.
    #[serde(default)]
    pub rpm: Option<String>,
    /// Solid state drives only.
    #[serde(default)]
    pub read_speed: Option<String>,
    #[serde(default)]
    pub write_speed: Option<String>,
    pub compatibility: String,
    #[serde(default)]
    pub price: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    HardDisk,
    SolidState,
    Other,
}

impl StorageSpec {
    pub fn kind(&self) -> StorageKind {
        let t = self.drive_type.to_uppercase();
        if t.contains("SSD") {
            StorageKind::SolidState
        } else if t.contains("HDD") {
            StorageKind::HardDisk
        } else {
            StorageKind::Other
        }
    }
}

spec_fields! {
    pub enum StorageField {
        Name => ("name", "name"),
        Type => ("type", "drive type"),
        Capacity => ("capacity", "capacity"),
        Interface => ("interface", "interface"),
        FormFactor => ("form_factor", "form factor"),
        Rpm => ("rpm", "spindle speed"),
        ReadSpeed => ("read_speed", "read speed"),
        WriteSpeed => ("write_speed", "write speed"),
        Compatibility => ("compatibility", "compatibility"),
        Price => ("price", "price"),
    }
    synonyms {
        "size" => Capacity,
        "storage" => Capacity,
        "space" => Capacity,
        "connection" => Interface,
        "connector" => Interface,
        "spin_speed" => Rpm,
        "rotation_speed" => Rpm,
        "reads" => ReadSpeed,
        "sequential_read" => ReadSpeed,
        "writes" => WriteSpeed,
        "sequential_write" => WriteSpeed,
        "kind" => Type,
    }
}

impl PartRecord for StorageSpec {
    type Field = StorageField;

    fn name(&self) -> &str {
        &self.name
    }

    fn field(&self, field: StorageField) -> Option<&str> {
        match field {
            StorageField::Name => Some(&self.name),
            StorageField::Type => Some(&self.drive_type),
            StorageField::Capacity => Some(&self.capacity),
            StorageField::Interface => Some(&self.interface),
            StorageField::FormFactor => Some(&self.form_factor),
            StorageField::Rpm => self.rpm.as_deref(),
            StorageField::ReadSpeed => self.read_speed.as_deref(),
            StorageField::WriteSpeed => self.write_speed.as_deref(),
            StorageField::Compatibility => Some(&self.compatibility),
            StorageField::Price => self.price.as_deref(),
        }
    }

    fn preferred_field(&self, detail: &str) -> Option<StorageField> {
        let asks_speed = matches!(detail, "speed" | "drive_speed" | "disk_speed");
        (asks_speed && self.kind() == StorageKind::HardDisk).then_some(StorageField::Rpm)
    }

    fn describe(&self) -> String {
        let mut text = format!(
            "The {} is a {} {} with {} capacity, using a {} interface. ",
            self.name, self.form_factor, self.drive_type, self.capacity, self.interface
        );

        match self.kind() {
            StorageKind::HardDisk => {
                if let Some(rpm) = self.value(StorageField::Rpm) {
                    text.push_str(&format!("It spins at {rpm}. "));
                }
            }
            StorageKind::SolidState => {
                if let (Some(read), Some(write)) = (
                    self.value(StorageField::ReadSpeed),
                    self.value(StorageField::WriteSpeed),
                ) {
                    text.push_str(&format!(
                        "It offers read speeds of up to {read} and write speeds up to {write}. "
                    ));
                }
            }
            StorageKind::Other => {}
        }

        text.push_str(&format!("Compatibility: {}", self.compatibility));
        with_price(terminate(text), self.price.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hdd() -> StorageSpec {
        StorageSpec {
            name: "Seagate Barracuda 1TB".into(),
            drive_type: "HDD".into(),
            capacity: "1TB".into(),
            interface: "SATA 6Gb/s".into(),
            form_factor: "3.5-inch".into(),
            rpm: Some("7200 RPM".into()),
            read_speed: None,
            write_speed: None,
            compatibility: "Needs a SATA port.".into(),
            price: None,
        }
    }

    fn ssd() -> StorageSpec {
        StorageSpec {
            name: "Crucial MX500 500GB".into(),
            drive_type: "SATA SSD".into(),
            capacity: "500GB".into(),
            interface: "SATA 6Gb/s".into(),
            form_factor: "2.5-inch".into(),
            rpm: None,
            read_speed: Some("~560MB/s".into()),
            write_speed: Some("~510MB/s".into()),
            compatibility: "Needs a SATA port.".into(),
            price: Some("₱3,000".into()),
        }
    }

    #[test]
    fn hdd_description_mentions_rpm_only() {
        let text = hdd().describe();
        assert_eq!(
            text,
            "The Seagate Barracuda 1TB is a 3.5-inch HDD with 1TB capacity, using a SATA 6Gb/s interface. It spins at 7200 RPM. Compatibility: Needs a SATA port."
        );
        assert!(!text.contains("read speeds"));
    }

    #[test]
    fn ssd_description_mentions_throughput_and_price() {
        let text = ssd().describe();
        assert!(text.contains("read speeds of up to ~560MB/s and write speeds up to ~510MB/s"));
        assert!(!text.contains("spins"));
        assert!(text.ends_with("Price: ₱3,000."));
    }

    #[test]
    fn kind_is_case_insensitive() {
        let mut drive = ssd();
        drive.drive_type = "nvme ssd".into();
        assert_eq!(drive.kind(), StorageKind::SolidState);
        assert_eq!(hdd().kind(), StorageKind::HardDisk);
    }
}
