//! Shared constants used across the application.

/// Number of numbered page buttons in the pagination window.
pub const MAX_PAGINATION_BUTTONS: u32 = 5;

/// Page sizes offered in the page-size selector.
pub const PAGE_SIZES: [u32; 4] = [10, 20, 50, 100];

/// Page size used until the user picks another one.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Session store key holding the API base URL.
pub const API_BASE_URL_KEY: &str = "apiBaseUrl";

/// User agent sent with every API request.
pub const USER_AGENT: &str = concat!("masterblog-frontend/", env!("CARGO_PKG_VERSION"));
