//! Maud HTML template components for the web UI.
//!
//! - `layout`: Base page layout
//! - `button`: Configurable button and link-button components
//! - `alert`: Transient success/error notices
//! - `form`: Form elements and input components
//! - `pagination`: Page navigation controls
//! - `post`: Post cards, the post list and the create/update dialog
//! - `toolbar`: Sort, search, page-size and API address controls
//! - `confirm`: Delete confirmation panel

pub mod alert;
pub mod button;
pub mod confirm;
pub mod form;
pub mod layout;
pub mod pagination;
pub mod post;
pub mod toolbar;

pub use alert::{Alert, AlertVariant};
pub use button::{Button, ButtonVariant};
pub use confirm::ConfirmationPanel;
pub use form::{Form, FormGroup, Input, Select, SelectOption, TextArea};
pub use layout::BaseLayout;
pub use pagination::Pagination;
pub use post::{PostCard, PostDialog, PostList};
pub use toolbar::{PageSizeMenu, Toolbar};
