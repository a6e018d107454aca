//! Usage errors — caller contract violations, distinct from match failure.
//!
//! Match failure is the dominant, cheap path and is always `Ok(false)`;
//! an `Error` means the call itself was malformed and must surface at the
//! call site rather than masquerade as "no match".

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A symbol-aware pattern was evaluated without a resolver.
    #[error("pattern requires a resolver, but none was supplied")]
    ResolverRequired,
}

pub type Result<T> = std::result::Result<T, Error>;
