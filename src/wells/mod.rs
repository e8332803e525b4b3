pub mod collection;
pub mod download;
