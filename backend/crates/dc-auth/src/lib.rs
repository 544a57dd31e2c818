pub mod claims;
pub mod error;
pub mod password;
pub mod session_guard;
pub mod token_codec;

pub use claims::Claims;
pub use error::{AuthError, Result};
pub use password::{hash_password, verify_password};
pub use session_guard::{BEARER_PREFIX, SessionGuard, Unauthenticated};
pub use token_codec::{IssuedToken, TokenCodec};
