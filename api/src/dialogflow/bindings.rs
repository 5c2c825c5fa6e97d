//! How each hardware category is wired into the agent: intent display name,
//! parameter names and the suffix of its details context.

use parts_catalog::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryBinding {
    pub category: Category,
    pub intent: &'static str,
    pub model_param: &'static str,
    /// Accepted detail parameter names; the first one is written back to contexts.
    pub detail_params: &'static [&'static str],
    pub context_suffix: &'static str,
}

impl CategoryBinding {
    pub fn primary_detail_param(&self) -> &'static str {
        self.detail_params[0]
    }
}

pub const BINDINGS: [CategoryBinding; 8] = [
    CategoryBinding {
        category: Category::Cpu,
        intent: "Get_CPU_Details",
        model_param: "cpu-model",
        detail_params: &["cpu_detail_type", "cpu-detail"],
        context_suffix: "cpu_details_context",
    },
    CategoryBinding {
        category: Category::Ram,
        intent: "Get_RAM_Details",
        model_param: "ram-model",
        detail_params: &["ram-detail"],
        context_suffix: "ram_details_context",
    },
    CategoryBinding {
        category: Category::Motherboard,
        intent: "Get_Motherboard_Details",
        model_param: "motherboard-model",
        detail_params: &["motherboard-detail"],
        context_suffix: "motherboard_details_context",
    },
    CategoryBinding {
        category: Category::Gpu,
        intent: "Get_GPU_Details",
        model_param: "gpu-model",
        detail_params: &["gpu-detail"],
        context_suffix: "gpu_details_context",
    },
    CategoryBinding {
        category: Category::CaseFan,
        intent: "Get_Case_Fan_Details",
        model_param: "case-fan-model",
        detail_params: &["case-fan-detail"],
        context_suffix: "case_fan_details_context",
    },
    CategoryBinding {
        category: Category::CpuCooler,
        intent: "Get_CPU_Cooler_Details",
        model_param: "cooler-model",
        detail_params: &["cooler-detail"],
        context_suffix: "cpu_cooler_details_context",
    },
    CategoryBinding {
        category: Category::Storage,
        intent: "Get_Storage_Details",
        model_param: "storage-model",
        detail_params: &["storage-detail"],
        context_suffix: "storage_details_context",
    },
    CategoryBinding {
        category: Category::Psu,
        intent: "Get_PSU_Details",
        model_param: "psu-model",
        detail_params: &["psu-detail"],
        context_suffix: "psu_details_context",
    },
];

pub fn binding(category: Category) -> &'static CategoryBinding {
    let index = match category {
        Category::Cpu => 0,
        Category::Ram => 1,
        Category::Motherboard => 2,
        Category::Gpu => 3,
        Category::CaseFan => 4,
        Category::CpuCooler => 5,
        Category::Storage => 6,
        Category::Psu => 7,
    };
    &BINDINGS[index]
}

/// Category whose intent display name is exactly `intent`.
pub fn by_intent(intent: &str) -> Option<&'static CategoryBinding> {
    BINDINGS.iter().find(|b| b.intent == intent)
}
