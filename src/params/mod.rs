//! Parameter tree construction
//!
//! - `pairs`: splits `key=value` arguments into an ordered mapping
//! - `builder`: merges inline values and values files under the `Values` root

pub mod builder;
pub mod pairs;

pub use builder::{build_parameters, Parameters};
pub use pairs::parse_pairs;
