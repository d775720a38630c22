pub(crate) mod client;

pub use client::{HttpDirectoryClient, PAGE_SIZE};
