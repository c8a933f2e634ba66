//! Derived data computed from evaluated frames.

/// Stable frame digests.
pub mod fingerprint;
