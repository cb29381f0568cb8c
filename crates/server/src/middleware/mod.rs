pub mod cors;

pub use cors::{preflight_middleware, with_cors_headers};
