//! Classification metrics.

mod accuracy;

pub use accuracy::{accuracy_count, accuracy_score};
