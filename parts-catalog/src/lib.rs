//! Read-only PC parts knowledge base.
//!
//! Public API: [`PartsCatalog`]. It holds one [`Catalog`] per hardware
//! [`Category`], the recommended [`BuildCatalog`] tiers and the
//! [`CompatibilityGuide`]. Data ships embedded ([`PartsCatalog::builtin`]) and
//! can be overridden file by file from a directory ([`PartsCatalog::from_dir`]).
//! Every load validates integrity, so a catalog that loads is safe to serve.

#[macro_use]
pub mod field;

pub mod alias;
pub mod builds;
pub mod catalog;
pub mod category;
pub mod compatibility;
pub mod errors;
pub mod parts;
pub mod text;

use std::{
    borrow::Cow,
    fs,
    path::{Path, PathBuf},
};

use tracing::{debug, info};

pub use builds::{BuildCatalog, BuildLineItem, BuildProfile};
pub use catalog::{Catalog, Resolved};
pub use category::Category;
pub use compatibility::{CompatibilityGuide, CompatibilityQuery};
pub use errors::CatalogError;
pub use field::{PartRecord, SpecField, render_detail};
pub use parts::*;

/// Everything the webhook can answer from.
#[derive(Debug, Clone)]
pub struct PartsCatalog {
    pub cpu: Catalog<CpuSpec>,
    pub ram: Catalog<RamSpec>,
    pub motherboard: Catalog<MotherboardSpec>,
    pub gpu: Catalog<GpuSpec>,
    pub case_fan: Catalog<CaseFanSpec>,
    pub cpu_cooler: Catalog<CpuCoolerSpec>,
    pub storage: Catalog<StorageSpec>,
    pub psu: Catalog<PsuSpec>,
    pub builds: BuildCatalog,
    pub compatibility: CompatibilityGuide,
}

/// Embedded copy of `data/`.
fn builtin_file(file: &str) -> Option<&'static str> {
    Some(match file {
        "cpu.json" => include_str!("../data/cpu.json"),
        "ram.json" => include_str!("../data/ram.json"),
        "motherboard.json" => include_str!("../data/motherboard.json"),
        "gpu.json" => include_str!("../data/gpu.json"),
        "case_fan.json" => include_str!("../data/case_fan.json"),
        "cpu_cooler.json" => include_str!("../data/cpu_cooler.json"),
        "storage.json" => include_str!("../data/storage.json"),
        "psu.json" => include_str!("../data/psu.json"),
        builds::BUILDS_FILE => include_str!("../data/builds.json"),
        compatibility::COMPATIBILITY_FILE => include_str!("../data/compatibility.json"),
        _ => return None,
    })
}

impl PartsCatalog {
    /// Load the catalog compiled into the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load(|file| Ok(Cow::Borrowed(builtin_file(file).unwrap_or_default())))
    }

    /// Load catalog files from `dir`; files absent there fall back to the embedded copy.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let dir = dir.as_ref();
        info!(target: "parts_catalog", dir = %dir.display(), "loading catalog overrides");
        Self::load(|file| {
            let path: PathBuf = dir.join(file);
            if path.is_file() {
                debug!(target: "parts_catalog", file, "using override");
                fs::read_to_string(&path)
                    .map(Cow::Owned)
                    .map_err(|source| CatalogError::Io { path, source })
            } else {
                debug!(target: "parts_catalog", file, "using builtin");
                Ok(Cow::Borrowed(builtin_file(file).unwrap_or_default()))
            }
        })
    }

    fn load<'a>(
        read: impl Fn(&str) -> Result<Cow<'a, str>, CatalogError>,
    ) -> Result<Self, CatalogError> {
        let part = |category: Category| read(&category.data_file());

        let catalog = Self {
            cpu: Catalog::from_json(Category::Cpu, &part(Category::Cpu)?)?,
            ram: Catalog::from_json(Category::Ram, &part(Category::Ram)?)?,
            motherboard: Catalog::from_json(Category::Motherboard, &part(Category::Motherboard)?)?,
            gpu: Catalog::from_json(Category::Gpu, &part(Category::Gpu)?)?,
            case_fan: Catalog::from_json(Category::CaseFan, &part(Category::CaseFan)?)?,
            cpu_cooler: Catalog::from_json(Category::CpuCooler, &part(Category::CpuCooler)?)?,
            storage: Catalog::from_json(Category::Storage, &part(Category::Storage)?)?,
            psu: Catalog::from_json(Category::Psu, &part(Category::Psu)?)?,
            builds: BuildCatalog::from_json(&read(builds::BUILDS_FILE)?)?,
            compatibility: CompatibilityGuide::from_json(&read(
                compatibility::COMPATIBILITY_FILE,
            )?)?,
        };

        info!(
            target: "parts_catalog",
            cpus = catalog.cpu.len(),
            ram = catalog.ram.len(),
            motherboards = catalog.motherboard.len(),
            gpus = catalog.gpu.len(),
            case_fans = catalog.case_fan.len(),
            cpu_coolers = catalog.cpu_cooler.len(),
            storage = catalog.storage.len(),
            psus = catalog.psu.len(),
            builds = catalog.builds.len(),
            "catalog loaded"
        );
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_self_consistent<R: PartRecord>(catalog: &Catalog<R>) {
        for key in catalog.keys() {
            let hit = catalog.lookup(key).expect("canonical key resolves");
            assert_eq!(hit.key, key);
        }
        for (alias, target) in catalog.aliases().iter() {
            for variant in [
                alias.to_string(),
                alias.to_uppercase(),
                format!("  {alias}\t"),
            ] {
                let hit = catalog
                    .lookup(&variant)
                    .unwrap_or_else(|| panic!("{}: alias {variant:?} did not resolve", catalog.category()));
                assert_eq!(hit.key, target);
            }
        }
    }

    #[test]
    fn builtin_catalogs_are_self_consistent() {
        let c = PartsCatalog::builtin().unwrap();
        assert_self_consistent(&c.cpu);
        assert_self_consistent(&c.ram);
        assert_self_consistent(&c.motherboard);
        assert_self_consistent(&c.gpu);
        assert_self_consistent(&c.case_fan);
        assert_self_consistent(&c.cpu_cooler);
        assert_self_consistent(&c.storage);
        assert_self_consistent(&c.psu);
        assert_eq!(c.builds.len(), 3);
    }

    #[test]
    fn every_record_renders_a_description() {
        let c = PartsCatalog::builtin().unwrap();
        for (_, cpu) in c.cpu.records() {
            assert!(cpu.describe().starts_with(&format!("The {}", cpu.name())));
        }
        for (_, storage) in c.storage.records() {
            assert!(storage.describe().ends_with('.'));
        }
    }

    #[test]
    fn directory_overrides_single_file_and_keeps_the_rest() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("gpu.json"),
            r#"{
                "records": {
                    "test card 9000": {
                        "name": "Test Card 9000",
                        "vram": "4GB GDDR6",
                        "clock_speed": "1500 MHz",
                        "power_consumption": "75W",
                        "slot_type": "PCIe 4.0 x16",
                        "compatibility": "Any PCIe x16 slot"
                    }
                },
                "aliases": { "tc9000": "test card 9000" }
            }"#,
        )
        .unwrap();

        let c = PartsCatalog::from_dir(dir.path()).unwrap();
        assert_eq!(c.gpu.len(), 1);
        assert_eq!(c.gpu.lookup("TC9000").unwrap().record.name(), "Test Card 9000");
        assert_eq!(c.cpu.len(), PartsCatalog::builtin().unwrap().cpu.len());
    }

    #[test]
    fn broken_override_fails_the_load() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("psu.json"), "{ not json").unwrap();
        let err = PartsCatalog::from_dir(dir.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Json { ref file, .. } if file == "psu.json"));
    }
}
