pub mod content;
pub mod gallery;
pub mod media;

// Re-exports
pub use content::{ContentError, MediaRecord, PortfolioData};
pub use gallery::{GalleryModal, ModalView};
pub use media::{EmbedOptions, EmbedResult, MediaKind, classify, embed, link_card, resolve};
