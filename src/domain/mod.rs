pub mod campsite;
pub mod comment;

pub use campsite::*;
pub use comment::*;
