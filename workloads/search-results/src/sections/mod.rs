//! Section renderers for the search results page.

mod filters;
mod header;
mod recommendations;
mod results;

pub use filters::*;
pub use header::*;
pub use recommendations::*;
pub use results::*;
