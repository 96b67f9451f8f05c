pub mod contact;
pub mod email;
pub mod lead;
mod lenient;

pub use contact::{Contact, ContactKey};
pub use email::valid_email;
pub use lead::Lead;
