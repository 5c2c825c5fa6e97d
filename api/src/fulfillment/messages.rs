//! Fixed reply texts.

use parts_catalog::Category;

pub const INVALID_REQUEST: &str = "Invalid request payload.";

pub const UNKNOWN_INTENT: &str = "I'm sorry, I don't have information for that component type yet, or I didn't understand your request fully.";

pub const UNKNOWN_BUILD: &str =
    "I don't have that build type. Please choose entry-level, mid-range, or high-end.";

pub const COMPATIBILITY_GUIDANCE: &str = "I'm sorry, I don't have information on that specific compatibility question. Please try asking in a different way, such as 'What is AM5?' or 'What CPUs are compatible with LGA1700?'";

pub fn missing_model(category: Category) -> String {
    format!(
        "Please specify the {} model you are interested in (e.g., \"{}\").",
        category.noun(),
        category.example_model()
    )
}

pub fn not_found(category: Category, raw_model: &str) -> String {
    format!(
        "Sorry, I couldn't find details for the {} \"{}\".",
        category.noun(),
        raw_model
    )
}
