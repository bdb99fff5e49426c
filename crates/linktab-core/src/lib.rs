pub mod config;
pub mod logging;

pub mod error;
pub mod extract;
pub mod loader;
pub mod opener;
pub mod session;

pub use error::LinkError;
pub use extract::{ExtractConfig, LinkSet};
pub use opener::UrlOpener;
pub use session::RunOutcome;
