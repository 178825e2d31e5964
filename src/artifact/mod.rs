pub mod download;
pub mod filter;
