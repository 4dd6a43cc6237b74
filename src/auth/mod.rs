//! Authentication: register, login, JWT.

mod jwt;
mod handlers;
mod service;

pub use handlers::{login, register};
pub use jwt::{Claims, JwtSecret, DEFAULT_TOKEN_TTL_SECS};
pub use service::AuthAppService;
