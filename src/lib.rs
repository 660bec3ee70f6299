pub mod document;
pub mod error;
pub mod grammar;
pub mod io;
pub mod section;

pub use document::{Document, DocumentError};
pub use error::Error;
pub use io::{
    ParseError, WriteOptions, load_file, parse_reader, parse_text, save_file,
    save_file_with_options, write_text, write_to,
};
pub use section::Section;
