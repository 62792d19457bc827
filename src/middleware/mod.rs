pub mod auth;
pub mod response;

pub use auth::{identity_middleware, resolve_identity, AuthUser, RequestIdentity};
pub use response::{ApiResponse, ApiResult};
