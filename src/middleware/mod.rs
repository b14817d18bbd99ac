// Middleware for security headers and panic recovery

pub mod catch_panic;
pub mod security_headers;

pub use catch_panic::*;
pub use security_headers::*;
