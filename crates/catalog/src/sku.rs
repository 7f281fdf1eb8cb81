//! SKU generation for admin-created variants.
//!
//! Format: `CAT-NAM-SIZE-SUFFIX`, e.g. `TOP-CLA-M-4F2A`.

use uuid::Uuid;

/// Build a SKU with an explicit suffix.
pub fn build_sku(category: &str, name: &str, size: &str, suffix: &str) -> String {
    let category_code: String = category.chars().take(3).collect::<String>().to_uppercase();
    let name_code: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .take(3)
        .collect::<String>()
        .to_uppercase();
    format!(
        "{category_code}-{name_code}-{}-{}",
        size.to_uppercase(),
        suffix.to_uppercase()
    )
}

/// Build a SKU with a random 4-character suffix.
pub fn generate_sku(category: &str, name: &str, size: &str) -> String {
    let random = Uuid::new_v4().simple().to_string();
    build_sku(category, name, size, &random[..4])
}
