mod poisson;

pub use poisson::{poisson_disc, DEFAULT_REJECTION_LIMIT};
