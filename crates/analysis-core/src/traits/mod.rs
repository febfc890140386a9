//! Trait definitions for external collaborators.

mod provider;

pub use provider::PriceHistoryProvider;
