pub mod authenticated_user;
pub mod token;

pub use authenticated_user::{AuthenticatedUser, OptionalUser};
pub use token::TokenClaims;
