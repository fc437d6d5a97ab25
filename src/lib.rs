pub mod errors;
pub mod models;
pub mod routes;
pub mod sort;
pub mod traits;

// Re-export for implementors using double-Option update fields
pub use serde_with;

pub use errors::RestError;
pub use models::{IdResponse, ListQuery, SortOrder};
pub use routes::resource_router;
pub use traits::{CrudAction, PatchActiveModel, RestResource};
