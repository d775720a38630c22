//! ua-client
//!
//! Capability interface over the remote directory service plus its HTTP
//! implementation. The batch engine only ever sees `DirectoryClient`.

pub(crate) mod client;
pub(crate) mod directory_client;
pub(crate) mod error;
pub(crate) mod status_table;
pub(crate) mod wire;

#[cfg(test)]
mod tests;

pub use client::{HttpDirectoryClient, PAGE_SIZE};
pub use directory_client::DirectoryClient;
pub use error::{ClientError, Result as ClientResult};
pub use status_table::SubCallStatus;
