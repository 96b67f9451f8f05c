pub mod normalize;
pub mod stats;

pub use normalize::normalize_contacts;
pub use stats::LeadStats;
