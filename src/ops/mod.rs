//! Input side of the pipeline: reading the operations document and turning
//! each entry into a validated [`record::Operation`].

pub mod load;
pub mod parse;
pub mod record;

pub use load::load_operations_file;
pub use parse::parse_operation;
