pub mod gallery;
pub mod vendor;
