pub mod filter;

pub use filter::{dashboard_filter_post, table_filter_post};
