//! HTTP execution
//!
//! [`BatchFetcher`] runs GET requests over a shared client: one at a time
//! with [`BatchFetcher::fetch_one`], or as a bounded concurrent fan-out
//! with [`BatchFetcher::fetch_all`] whose results stay index-aligned with
//! the input regardless of completion order.

mod batch;

pub use batch::{ApiResponse, BatchFetcher};
