//! Keeps map markers in step with the entity store.
//!
//! The map widget is reached only through [`scene::SceneGraph`], so the
//! reconciliation in [`sync::MapSynchronizer`] runs the same in the browser
//! (Leaflet scene in `bsn-ui`) and headless ([`scene::MemoryScene`]).

pub mod display;
pub mod marker;
pub mod scene;
pub mod sync;

pub use display::{DisplayReading, MapEntity};
pub use marker::{ClickAction, MarkerProps};
pub use scene::{MarkerPatch, MemoryScene, SceneGraph};
pub use sync::{MapSynchronizer, MapView, SyncReport};
