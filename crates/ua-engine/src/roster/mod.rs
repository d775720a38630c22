pub mod columns;
pub mod loader;
