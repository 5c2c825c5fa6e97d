use std::fmt;

/// Hardware categories served by the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cpu,
    Ram,
    Motherboard,
    Gpu,
    CaseFan,
    CpuCooler,
    Storage,
    Psu,
}

impl Category {
    pub const ALL: [Category; 8] = [
        Category::Cpu,
        Category::Ram,
        Category::Motherboard,
        Category::Gpu,
        Category::CaseFan,
        Category::CpuCooler,
        Category::Storage,
        Category::Psu,
    ];

    /// Short machine name, also the data file stem.
    pub fn slug(self) -> &'static str {
        match self {
            Category::Cpu => "cpu",
            Category::Ram => "ram",
            Category::Motherboard => "motherboard",
            Category::Gpu => "gpu",
            Category::CaseFan => "case_fan",
            Category::CpuCooler => "cpu_cooler",
            Category::Storage => "storage",
            Category::Psu => "psu",
        }
    }

    /// How the category is called in replies ("the CPU model", "the case fan model").
    pub fn noun(self) -> &'static str {
        match self {
            Category::Cpu => "CPU",
            Category::Ram => "RAM",
            Category::Motherboard => "motherboard",
            Category::Gpu => "graphics card",
            Category::CaseFan => "case fan",
            Category::CpuCooler => "CPU cooler",
            Category::Storage => "storage device",
            Category::Psu => "PSU",
        }
    }

    /// A model name used when asking the user to be more specific.
    pub fn example_model(self) -> &'static str {
        match self {
            Category::Cpu => "Intel Core i5-14500",
            Category::Ram => "Kingston FURY Beast DDR4",
            Category::Motherboard => "ASUS PRIME B550M-K",
            Category::Gpu => "Gigabyte RTX 3050 EAGLE OC",
            Category::CaseFan => "COOLMOON YX120",
            Category::CpuCooler => "COOLMOON AOSOR S400",
            Category::Storage => "Seagate Barracuda 1TB",
            Category::Psu => "Corsair RM850x",
        }
    }

    pub fn data_file(self) -> String {
        format!("{}.json", self.slug())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}
