//! Chain identifiers, metadata records, and the static registry.
//!
//! - [`ChainId`] — the closed set of chains and its text form.
//! - [`ChainInfo`], [`ChainFamily`], [`ProviderSlugs`] — the metadata records.
//! - [`chain_info`], [`lookup`], [`visible_chains`] — accessors over the table.

mod id;
mod info;
mod registry;

pub use self::id::*;
pub use self::info::*;
pub use self::registry::*;
