//! Input collaborators: file loaders, the built-in reference network and
//! synthetic series generators

pub mod loader;
pub mod reference;
pub mod synthetic;

pub use loader::{load_network, load_series, parse_series_text, NetworkDocument};
pub use reference::{reference_document, reference_network};
