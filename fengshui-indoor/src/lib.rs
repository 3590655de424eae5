//! Indoor Feng Shui layout scoring.
//!
//! A room is described as a list of [`PlacedItem`]s. Each item is resolved
//! through an [`ItemCatalog`] to its element and energy, and
//! [`IndoorScorer`] turns the tallies into element balance, energy, space
//! and function scores plus ordered recommendations.

#![forbid(unsafe_code)]

mod catalog;
mod layout;
pub mod recommendations;
mod room;
mod scorer;

pub use catalog::{BaguaZone, CatalogError, ItemAttributes, ItemCatalog, Placement};
pub use layout::{PlacedItem, parse_layout};
pub use room::{FUNCTIONAL_BASE, Presence, RoomRule, RoomType};
pub use scorer::{EnergyBalance, IndoorAnalysis, IndoorError, IndoorScorer};
