//! # Item Packer Core
//!
//! Order calculation for items shipped in fixed-size packs.
//!
//! Given a requested item count and a catalog of pack sizes, the calculator
//! produces a breakdown that never ships fewer items than requested, keeps
//! overpack low, and consolidates smaller packs into larger ones whenever
//! sizes are exact multiples.
//!
//! ## Core Components
//!
//! - **Calculation**: [`calculate_order`] runs greedy fill, residual pack
//!   and consolidation against a catalog snapshot
//! - **Model**: [`Pack`], [`OrderLine`], [`Order`], [`OrderSummary`]
//! - **Storage**: [`PackCatalog`], [`OrderHistory`] and the [`PackStore`]
//!   facade, each guarding its own data
//! - **Configuration**: [`StorageConfig`] with soft limits and default packs
//!
//! ## Quick Start
//!
//! ```rust
//! use item_packer_core::{PackStore, StorageConfig};
//!
//! let store = PackStore::new(StorageConfig::new().with_standard_packs()).unwrap();
//!
//! let order = store.calculate_order(1001).unwrap();
//! assert_eq!(order.total_items, 1250);
//! assert_eq!(order.overpacked_items, 249);
//! ```
//!
//! The calculation itself is a pure function of a snapshot:
//!
//! ```rust
//! use item_packer_core::{calculate_order, Pack};
//!
//! let packs: Vec<Pack> = [250, 500, 1000]
//!     .into_iter()
//!     .map(|a| Pack::new(a).unwrap())
//!     .collect();
//!
//! let order = calculate_order(751, &packs).unwrap();
//! assert_eq!(order.lines.len(), 1);
//! assert_eq!(order.lines[0].pack.amount, 1000);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialization/deserialization support

pub mod calculator;
pub mod catalog;
pub mod config;
pub mod error;
pub mod history;
pub mod order;
pub mod pack;
pub mod store;

// Re-exports
pub use calculator::{
    add_residual_pack, apply_merge, calculate_order, consolidate, find_cross_size_merge,
    find_same_size_merge, greedy_fill, Merge,
};
pub use catalog::PackCatalog;
pub use config::{StorageConfig, DEFAULT_SOFT_LIMIT};
pub use error::{Error, Result};
pub use history::OrderHistory;
pub use order::{Order, OrderLine, OrderSummary};
pub use pack::{sorted_ascending, sorted_descending, Pack, PackSize, STANDARD_PACK_SIZES};
pub use store::PackStore;
