pub mod catalog_service;
pub mod student_service;
pub mod token_service;
pub mod user_service;

pub use token_service::{Claims, TokenService};
