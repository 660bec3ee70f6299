mod error;
mod file;
mod text;

pub use error::ParseError;
pub use file::{load_file, save_file, save_file_with_options};
pub use text::{WriteOptions, parse_reader, parse_text, write_text, write_to};
