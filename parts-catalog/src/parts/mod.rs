//! Per-category part records, field enums and description templates.

pub mod case_fan;
pub mod cpu;
pub mod cpu_cooler;
pub mod gpu;
pub mod motherboard;
pub mod psu;
pub mod ram;
pub mod storage;

pub use case_fan::{CaseFanField, CaseFanSpec};
pub use cpu::{CpuField, CpuSpec};
pub use cpu_cooler::{CoolerKind, CpuCoolerField, CpuCoolerSpec};
pub use gpu::{GpuField, GpuSpec};
pub use motherboard::{MotherboardField, MotherboardSpec};
pub use psu::{PsuField, PsuSpec};
pub use ram::{RamField, RamSpec};
pub use storage::{StorageField, StorageKind, StorageSpec};
