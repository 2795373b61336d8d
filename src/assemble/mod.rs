//! Turning a decoded snapshot into the final codelab
//!
//! Assembly runs top to bottom in a single pass. The first failure at any
//! depth aborts the whole document; nothing partial is returned.

mod document;
mod step;


pub use document::assemble_codelab;
pub use step::assemble_step;
