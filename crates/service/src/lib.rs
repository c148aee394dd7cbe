//! Storage façade over the models crate: key routing, value decoding, the
//! four uniform operations, and the catalog read projections.
//! - One key namespace, two stores; the router decides which one a call hits.
//! - Clear error taxonomy mapped to HTTP statuses by the server crate.

pub mod catalog;
pub mod errors;
pub mod scope;
pub mod storage;
#[cfg(test)]
pub mod test_support;
pub mod value;
