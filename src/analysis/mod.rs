//! Sequence analysis collaborators
//!
//! Read-only views over the buffer used by the extended commands:
//! - `translate` - transcription and translation (standard genetic code)
//! - `gc` - overall and sliding-window GC content
//! - `align` - global pairwise alignment via rust-bio
//! - `plot` - text sparkline for numeric series
//! - `one_hot` - numeric encoding in alphabet order

pub mod align;
pub mod gc;
pub mod one_hot;
pub mod plot;
pub mod translate;

pub use align::{pairwise_align, AlignmentReport};
pub use gc::{gc_content, GcReport};
pub use one_hot::one_hot;
pub use plot::plot;
pub use translate::{transcribe, translate};
