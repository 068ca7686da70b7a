//! Types and state shared between the comparison frontend and the catalog backend.

pub mod comparison;
pub mod model;
pub mod requests;
pub mod responses;
