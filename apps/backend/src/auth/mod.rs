pub mod claims;
pub mod cookie;
pub mod password;
pub mod token;
pub mod validators;

pub use claims::Claims;
pub use token::{TokenCodec, TokenError};
