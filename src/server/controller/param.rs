use serde::Deserialize;

/// Hard ceiling on requested page sizes.
const MAX_PER_PAGE: u64 = 100;

/// Pagination query parameters shared by paginated list endpoints.
#[derive(Deserialize)]
pub struct PaginationParam {
    /// Zero-indexed page number.
    #[serde(default)]
    pub page: u64,
    /// Requested page size, defaulting to 10 and clamped to 100.
    #[serde(default = "default_per_page")]
    pub per_page: u64,
}

fn default_per_page() -> u64 {
    10
}

impl PaginationParam {
    /// Page size with the ceiling applied.
    pub fn effective_per_page(&self) -> u64 {
        self.per_page.min(MAX_PER_PAGE)
    }
}
