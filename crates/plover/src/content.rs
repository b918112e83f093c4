mod course;
mod front_matter;
mod post;
mod reading_metrics;
mod record;
mod sorting;

pub use course::*;
pub use front_matter::*;
pub use post::*;
pub use reading_metrics::*;
pub use record::*;
pub use sorting::*;
