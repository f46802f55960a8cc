mod r#impl;
mod structs;

pub use r#impl::DEVELOPMENT_JWT_SECRET;
pub use structs::*;
