//! Domain types for Cadence Player

mod ad;
mod item;
mod report;
mod track;

pub use ad::{Ad, AdKind};
pub use item::PlayableItem;
pub use report::PlayReport;
pub use track::Track;
