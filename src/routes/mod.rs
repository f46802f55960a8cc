pub mod assignments;

pub mod auth;

pub mod submissions;

pub mod system;

pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use submissions::configure_submissions_routes;
pub use system::configure_system_routes;
