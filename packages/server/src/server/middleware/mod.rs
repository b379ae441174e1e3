// HTTP middleware
pub mod jwt_auth;
pub mod request_id;

pub use jwt_auth::*;
pub use request_id::*;
