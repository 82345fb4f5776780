//! Query construction and URL length guarding
//!
//! # Overview
//!
//! [`Params`] collects query parameters and serializes them into a
//! canonical, deduplicated query string. [`split_url`] keeps each request
//! URL under a server-imposed length ceiling by cutting over-length query
//! strings at `&` boundaries only, so no key=value pair is ever severed.

mod encoder;
mod split;

pub use encoder::Params;
pub use split::{split_url, DEFAULT_MAX_URL_LEN};
