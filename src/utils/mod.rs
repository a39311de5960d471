// Utils compartidos

pub mod initials;
pub mod storage;

pub use initials::initials_from_email;
pub use storage::*;
