//! Range rendering into frame sinks.
//!
//! Sinks consume evaluated frames in timeline order and are driven by
//! [`render_range`](pipeline::render_range).

/// Chunked, optionally parallel range evaluation.
pub mod pipeline;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
