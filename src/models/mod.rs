pub mod filter;
pub mod form;
pub mod record;
pub mod shift;

pub use filter::DateFilter;
pub use form::{FormRejection, FormState, Submission};
pub use record::Record;
pub use shift::Shift;
