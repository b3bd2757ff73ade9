pub mod units;

pub use units::{format_gb, format_yuan};
