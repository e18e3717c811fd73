pub mod student;
pub mod user;
pub mod write_result;

pub use student::*;
pub use user::*;
pub use write_result::*;
