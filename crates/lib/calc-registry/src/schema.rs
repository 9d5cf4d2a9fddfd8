/// Shared route prefix for every calculator page.
pub const ROUTE_PREFIX: &str = "/tools/calculators/";

/// Route the directory page itself is served from.
pub const INDEX_PATH: &str = "/tools/calculators";

pub const INDEX_TITLE: &str = "Calculators";
pub const INDEX_SUBTITLE: &str = "Free online calculators for finance, health, math and everyday use";
