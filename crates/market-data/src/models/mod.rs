//! Market data models
//!
//! This module contains the core data types for quote API operations:
//! - `quote` - Price snapshot for a single symbol (Quote)
//! - `lookup` - Symbol search result (LookupResult)
//! - `function` - API function identifiers (ApiFunction)

mod function;
mod lookup;
mod quote;

pub use function::ApiFunction;
pub use lookup::LookupResult;
pub use quote::Quote;
