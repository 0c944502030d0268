pub mod contact;
pub mod health_check;

pub use contact::submit_contact;
pub use health_check::health_check;
