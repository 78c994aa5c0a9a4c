//! Response DTOs for outbound HTTP calls.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

/// Joke payload. The endpoint returns more fields; only `value` is read.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Joke {
    pub value: String,
}
