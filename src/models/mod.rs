pub mod assignments;
pub mod auth;
pub mod common;
pub mod submissions;

pub use common::document::{DeleteResult, Document, InsertOneResult, UpdateResult};
pub use common::error_code::ErrorCode;
pub use common::pagination::{PageWindow, PaginationParams};
pub use common::response::ApiResponse;
