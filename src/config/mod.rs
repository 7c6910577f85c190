//! Configuration types and the config file layer.
//!
//! Runtime options are plain structs built by the CLI from command-line
//! arguments layered over the values in [`FileConfig`].

pub mod extensions;
pub mod file;
pub mod listing;
pub mod scan;

pub use extensions::{DEFAULT_EXTENSIONS, ExtensionSet};
pub use file::FileConfig;
pub use listing::{ListingOptions, SortCriteria};
pub use scan::ScanOptions;
