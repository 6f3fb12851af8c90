pub mod labels;
pub mod messages;
pub mod view;

pub use labels::{Labels, Language};
