//! Static asset references and loaders.

/// [`AssetRef`](store::AssetRef) and the [`AssetResolver`](store::AssetResolver) trait.
pub mod store;
