pub mod contacts;
pub mod error;
pub mod generator;
pub mod workbook;

pub use contacts::{Row, Table};
pub use error::SampleError;
