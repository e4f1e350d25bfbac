pub mod claims;
pub mod errors;
pub mod service;
pub mod token;

pub use claims::Claims;
pub use claims::MAX_SUBJECT_LENGTH;
pub use errors::TokenError;
pub use service::TokenService;
pub use token::Token;
