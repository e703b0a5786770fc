mod component;
mod content;
mod context;
mod index;
pub mod layout;
mod preview;
mod store;
mod types;

pub use component::BoardView;
pub use content::ContentCache;
pub use preview::PreviewCanvas;
pub use store::{BoardState, BoardStore};
pub use types::{BoardData, Card, Document, DocumentKind};
