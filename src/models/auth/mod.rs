pub mod requests;
pub mod responses;

pub use requests::IssueTokenRequest;
pub use responses::IssueTokenResponse;
