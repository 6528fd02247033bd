//! XML tokenizer driver.
//!
//! Reads bytes with the namespace-aware quick-xml reader and forwards every
//! element start, end and text node to a [`Parser`]. Element names bound to a
//! namespace are passed in Clark notation (`{uri}local`) so the parser can
//! decide which namespace it accepts.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::name::ResolveResult;
use quick_xml::NsReader;

use crate::error::Result;
use crate::parser::{Attributes, Parser};
use crate::value::Value;

/// Chunk size used when feeding files, in bytes.
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Parse a complete document from a buffered reader.
///
/// # Errors
/// Any tokenizer, IO or schema error.
pub fn from_reader<R: BufRead>(reader: R) -> Result<Value> {
    drive(reader, Parser::new())
}

/// Parse a document held in memory.
///
/// # Examples
/// ```
/// let metadata = mbxml::xml::from_str(
///     r#"<metadata xmlns="http://musicbrainz.org/ns/mmd-2.0#">
///          <artist id="1"><name>Foo</name></artist>
///        </metadata>"#,
/// )
/// .unwrap();
/// assert_eq!(metadata["artist"]["name"], "Foo");
/// ```
pub fn from_str(xml: &str) -> Result<Value> {
    from_reader(xml.as_bytes())
}

/// Parse a document delivered as a sequence of byte chunks.
///
/// Chunk boundaries may fall anywhere, including inside a tag or a
/// multi-byte character.
pub fn from_chunks<I>(chunks: I) -> Result<Value>
where
    I: IntoIterator,
    I::Item: AsRef<[u8]>,
{
    from_reader(ChunkReader::new(chunks.into_iter()))
}

/// Parse a file, reading it `chunk_size` bytes at a time.
pub fn from_path(path: impl AsRef<Path>, chunk_size: usize) -> Result<Value> {
    let path = path.as_ref();
    tracing::debug!(path = %path.display(), chunk_size, "Parsing file");
    let file = File::open(path)?;
    from_reader(BufReader::with_capacity(chunk_size.max(1), file))
}

/// Drive `parser` over every event of `reader` and finish it.
///
/// # Errors
/// The first error raised by the tokenizer or the parser.
pub fn drive<R: BufRead>(reader: R, mut parser: Parser<'_>) -> Result<Value> {
    let mut reader = NsReader::from_reader(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let (namespace, event) = reader.read_resolved_event_into(&mut buf)?;
        match event {
            Event::Start(start) => {
                let tag = qualified_name(&namespace, &start)?;
                parser.open(&tag, attributes(&start)?)?;
            }
            Event::Empty(start) => {
                let tag = qualified_name(&namespace, &start)?;
                parser.open(&tag, attributes(&start)?)?;
                parser.close(&tag)?;
            }
            Event::End(end) => {
                let local = std::str::from_utf8(end.local_name().into_inner())?;
                parser.close(&clark(&namespace, local))?;
            }
            Event::Text(text) => parser.text(&text.unescape()?)?,
            Event::CData(data) => parser.text(std::str::from_utf8(&data)?)?,
            Event::Eof => break,
            Event::Decl(_) | Event::PI(_) | Event::Comment(_) | Event::DocType(_) => {}
        }
    }

    parser.finish()
}

fn qualified_name(namespace: &ResolveResult<'_>, start: &BytesStart<'_>) -> Result<String> {
    let local = std::str::from_utf8(start.local_name().into_inner())?;
    Ok(clark(namespace, local))
}

fn clark(namespace: &ResolveResult<'_>, local: &str) -> String {
    match namespace {
        ResolveResult::Bound(ns) => {
            format!("{{{}}}{}", String::from_utf8_lossy(ns.as_ref()), local)
        }
        // Undeclared prefixes stay on the name so the lookup rejects it.
        ResolveResult::Unknown(prefix) => {
            format!("{}:{}", String::from_utf8_lossy(prefix), local)
        }
        ResolveResult::Unbound => local.to_string(),
    }
}

/// Collect attributes as written, skipping namespace declarations.
fn attributes(start: &BytesStart<'_>) -> Result<Attributes> {
    let mut attrs = Attributes::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = attr.key;
        if key.as_ref() == b"xmlns" || key.prefix().is_some_and(|p| p.as_ref() == b"xmlns") {
            continue;
        }
        let name = std::str::from_utf8(key.as_ref())?.to_string();
        let value = attr.unescape_value()?.into_owned();
        attrs.insert(name, value);
    }
    Ok(attrs)
}

/// Adapter presenting an iterator of byte chunks as a `BufRead`.
pub struct ChunkReader<I: Iterator> {
    chunks: I,
    current: Option<I::Item>,
    pos: usize,
}

impl<I> ChunkReader<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    pub fn new(chunks: I) -> Self {
        Self {
            chunks,
            current: None,
            pos: 0,
        }
    }
}

impl<I> BufRead for ChunkReader<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        // Skip exhausted and empty chunks.
        while self
            .current
            .as_ref()
            .is_none_or(|chunk| self.pos >= chunk.as_ref().len())
        {
            match self.chunks.next() {
                Some(chunk) => {
                    self.current = Some(chunk);
                    self.pos = 0;
                }
                None => {
                    self.current = None;
                    return Ok(&[]);
                }
            }
        }
        Ok(self
            .current
            .as_ref()
            .map_or(&[][..], |chunk| &chunk.as_ref()[self.pos..]))
    }

    fn consume(&mut self, amt: usize) {
        self.pos += amt;
    }
}

impl<I> Read for ChunkReader<I>
where
    I: Iterator,
    I::Item: AsRef<[u8]>,
{
    fn read(&mut self, out: &mut [u8]) -> io::Result<usize> {
        let available = self.fill_buf()?;
        let n = available.len().min(out.len());
        out[..n].copy_from_slice(&available[..n]);
        self.consume(n);
        Ok(n)
    }
}
