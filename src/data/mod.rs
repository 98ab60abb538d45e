//! Text inputs: matrix files and GV form fields

pub mod csv;
pub mod input;

pub use csv::{csv_text_to_matrix, csv_text_to_weights, parse_numeric_rows};
pub use input::GvInput;
