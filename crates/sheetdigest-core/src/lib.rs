//! sheetdigest-core - Input decoding, report rendering and the pipeline facade.

pub mod document;
pub mod error;
pub mod storage;

pub use document::{Content, Digest, InputKind};
pub use error::{DigestError, Result};

pub use sheetdigest_engine::layout::{LayoutPolicy, Page};
