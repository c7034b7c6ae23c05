//! Galaxy mode: ideas scattered as nodes, linked by proximity, over a drifting particle field.

mod animation;
mod component;
mod config;
mod error;
mod layout;
mod linker;
mod particles;
mod render;
mod state;
mod surface;
mod types;

pub use component::GalaxyView;
pub use types::{IdeaRecord, Origin};
