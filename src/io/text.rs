use std::io::BufRead;

use super::ParseError;
use crate::{Document, Section};
use crate::grammar;

#[derive(Debug, Clone, Default)]
pub struct WriteOptions {
    /// Emit an empty line between a `[section]` header and its first pair.
    pub blank_after_header: bool,
}

/// Parse a document from text.
pub fn parse_text(text: &str) -> Result<Document, ParseError> {
    let mut doc = Document::new();
    doc.load_text(text)?;
    Ok(doc)
}

/// Parse a document from a buffered reader, one line at a time.
pub fn parse_reader(reader: impl BufRead) -> Result<Document, ParseError> {
    let mut doc = Document::new();
    doc.load_reader(reader)?;
    Ok(doc)
}

impl Document {
    /// Parse `text` into this document.
    ///
    /// Pairs before the first header go to the empty section, which is
    /// created up front. On a malformed line parsing stops; whatever was read
    /// before it stays in the document.
    pub fn load_text(&mut self, text: &str) -> Result<(), ParseError> {
        let mut parser = LineParser::new(self);
        for line in text.lines() {
            parser.feed(line)?;
        }
        parser.finish();
        Ok(())
    }

    /// Same as [`Document::load_text`], reading lines from `reader`.
    pub fn load_reader(&mut self, reader: impl BufRead) -> Result<(), ParseError> {
        let mut parser = LineParser::new(self);
        for line in reader.lines() {
            parser.feed(&line?)?;
        }
        parser.finish();
        Ok(())
    }
}

struct LineParser<'a> {
    doc: &'a mut Document,
    current: String,
    line_no: usize,
}

impl<'a> LineParser<'a> {
    fn new(doc: &'a mut Document) -> Self {
        doc.open_section("");
        Self {
            doc,
            current: String::new(),
            line_no: 0,
        }
    }
}

impl LineParser<'_> {
    fn feed(&mut self, raw: &str) -> Result<(), ParseError> {
        self.line_no += 1;
        let line = grammar::trim_line(raw);
        if line.is_empty() {
            return Ok(());
        }

        if grammar::is_section_line(line) {
            let name = grammar::section_name(line);
            if grammar::is_valid_section_name(name) {
                tracing::trace!(line = self.line_no, section = name, "section header");
                self.doc.open_section(name);
                self.current = name.to_string();
                return Ok(());
            }
        } else if let Some((key, value)) = grammar::split_key_value(line) {
            self.doc.open_section(&self.current).insert(key, value);
            return Ok(());
        } else if line.starts_with('#') {
            return Ok(());
        }

        tracing::warn!(line = self.line_no, content = line, "malformed line");
        Err(ParseError::MalformedLine {
            line: self.line_no,
            content: line.to_string(),
        })
    }

    fn finish(self) {
        tracing::debug!(
            lines = self.line_no,
            sections = self.doc.len(),
            "parsed document"
        );
    }
}

/// Serialize a document. The empty section has no header, so its pairs are
/// written first; it is skipped when it holds none. Named sections and pairs
/// follow in insertion order, each section followed by a blank line.
pub fn write_text(doc: &Document, options: &WriteOptions) -> String {
    let mut out = String::new();

    if let Some(global) = doc.section("").filter(|s| !s.is_empty()) {
        write_pairs(&mut out, global);
        out.push('\n');
    }

    for (name, section) in doc.sections().filter(|(name, _)| !name.is_empty()) {
        out.push('[');
        out.push_str(name);
        out.push_str("]\n");
        if options.blank_after_header {
            out.push('\n');
        }
        write_pairs(&mut out, section);
        out.push('\n');
    }

    out
}

fn write_pairs(out: &mut String, section: &Section) {
    for (key, value) in section.iter() {
        out.push_str(key);
        out.push_str(" = ");
        out.push_str(value);
        out.push('\n');
    }
}

/// Serialize a document into `writer`.
pub fn write_to(
    doc: &Document,
    mut writer: impl std::io::Write,
    options: &WriteOptions,
) -> std::io::Result<()> {
    writer.write_all(write_text(doc, options).as_bytes())?;
    writer.flush()
}
