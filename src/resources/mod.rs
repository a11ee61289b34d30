//! Resources bundled into the executable
//!
//! Resource names live in their own namespace, separate from the filesystem.
//! A leading `/` means the root of that namespace; names without one resolve
//! against a bundle's base prefix.

mod bundle;
mod embedded;
mod memory;
mod stream;

pub use bundle::{resolve_name, ResourceBundle};
pub use embedded::EmbeddedBundle;
pub use memory::MemoryBundle;
pub use stream::ResourceStream;
