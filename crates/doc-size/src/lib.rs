pub mod convert;
mod options;
pub mod paper_sizes;
mod resolve;
mod types;

pub use convert::{ConvertOptions, convert};
pub use options::*;
pub use paper_sizes::PaperSizeEntry;
#[cfg(feature = "serde")]
pub use resolve::resolve_json;
pub use resolve::resolve;
pub use types::*;
