//! # bstv - Brave Shields Tooltip Viewer Library
//!
//! This library provides the fixed catalog of Shields tooltip variants — the
//! messages the browser's ad- and tracker-blocking feature shows to explain a
//! blocking action or upgrade event. Each variant bundles a stable numeric id
//! with the two string-resource keys (title and body text) that an external
//! localization catalog resolves to user-facing copy.
//!
//! ## Features
//!
//! - Closed enum of tooltip variants with total, infallible accessors
//! - Stable ids, contiguous from 0, safe for external callers to persist
//!   (e.g. "which tooltip was last shown" state)
//! - Rehydrate variants from persisted ids or snake_case names
//! - Query the catalog with glob patterns (e.g. `"*ads*"`, `"tooltip_title_*"`)
//! - Human-readable descriptions for every variant
//!
//! ## Quick Start
//!
//! ### Reading the catalog
//!
//! ```rust
//! use bstv::TooltipVariant;
//!
//! let variant = TooltipVariant::AdsTrackerBlocked;
//! assert_eq!(variant.id(), 2);
//! assert_eq!(variant.title_ref(), "tooltip_title_3");
//! assert_eq!(variant.text_ref(), "tooltip_text_3");
//! ```
//!
//! The resource keys are opaque references into the browser's localization
//! catalog; this crate never resolves them to display strings.
//!
//! ### Rehydrating persisted state
//!
//! ```rust
//! use bstv::TooltipVariant;
//!
//! // External callers persist the id of the last tooltip they showed
//! let last_shown = TooltipVariant::try_from(1)?;
//! assert_eq!(last_shown, TooltipVariant::VideoAdsBlocked);
//!
//! // Names work too, case-insensitively
//! let by_name = TooltipVariant::from_name("https_upgrade")?;
//! assert_eq!(by_name.id(), 3);
//! # Ok::<(), bstv::Error>(())
//! ```
//!
//! ### Querying the catalog
//!
//! ```rust
//! use bstv::query_variants;
//!
//! let ads = query_variants(&["*ads*"])?;
//! assert_eq!(ads.len(), 3);
//!
//! // Patterns also match resource keys, with OR logic across patterns
//! let mixed = query_variants(&["tooltip_title_1", "https_*"])?;
//! assert_eq!(mixed.len(), 2);
//! # Ok::<(), bstv::Error>(())
//! ```
//!
//! ### Iterating all variants
//!
//! ```rust
//! use bstv::TooltipVariant;
//!
//! for variant in TooltipVariant::ALL {
//!     println!("{} -> {}", variant.id(), variant.title_ref());
//! }
//! ```
//!
//! ## Error Handling
//!
//! The catalog accessors are total functions over a closed enum and cannot
//! fail. Fallible lookups return [`Result<T, Error>`]:
//!
//! ```rust
//! use bstv::{Error, TooltipVariant};
//!
//! match TooltipVariant::try_from(42) {
//!     Ok(variant) => println!("last shown: {}", variant),
//!     Err(Error::UnknownVariantId { id }) => {
//!         eprintln!("stale persisted id: {}", id);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

// Re-export all public types at crate root
pub use types::{Catalog, CatalogEntry};
pub use variant::TooltipVariant;

// Re-export error types
pub use error::{Error, Result};

// Re-export all public functions at crate root
pub use descriptions::get_variant_description;
pub use query::query_variants;

// All modules are private - use re-exports above for public API
mod descriptions;
mod error;
mod query;
mod types;
mod variant;
