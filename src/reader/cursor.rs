//! Pull-cursor adapter over quick-xml.
//!
//! The reader wants three things the raw event stream does not give it
//! directly: owned events it can hold across buffer reuse, a depth
//! counter, and "expand the current element into a detached subtree" for
//! the recursive builders.

use std::io::BufRead;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::{ReadError, Result};

/// An element name plus its unescaped attributes.
#[derive(Clone, Debug)]
pub struct XmlElement {
    pub name: String,
    pub attrs: Vec<(String, String)>,
}

impl XmlElement {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

/// The events the reader cares about; everything else (text, comments,
/// processing instructions) is skipped by the cursor.
#[derive(Debug)]
pub enum XmlEvent {
    Start(XmlElement),
    Empty(XmlElement),
    End(String),
    Eof,
}

/// A detached element subtree, produced by [`Cursor::expand_subtree`].
#[derive(Clone, Debug)]
pub struct XmlNode {
    pub name: String,
    pub attrs: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

impl From<XmlElement> for XmlNode {
    fn from(element: XmlElement) -> Self {
        Self {
            name: element.name,
            attrs: element.attrs,
            children: Vec::new(),
        }
    }
}

pub struct Cursor<R: BufRead> {
    reader: Reader<R>,
    buf: Vec<u8>,
    depth: usize,
}

impl<R: BufRead> Cursor<R> {
    pub fn from_reader(input: R) -> Self {
        let mut reader = Reader::from_reader(input);
        reader.config_mut().trim_text(true);
        Self {
            reader,
            buf: Vec::new(),
            depth: 0,
        }
    }

    /// Number of currently open elements.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Advance to the next start/empty/end event, skipping everything
    /// the ABI grammar has no use for.
    pub fn next_event(&mut self) -> Result<XmlEvent> {
        loop {
            self.buf.clear();
            match self.reader.read_event_into(&mut self.buf)? {
                Event::Start(start) => {
                    let element = to_element(&start)?;
                    self.depth += 1;
                    return Ok(XmlEvent::Start(element));
                }
                Event::Empty(start) => return Ok(XmlEvent::Empty(to_element(&start)?)),
                Event::End(end) => {
                    self.depth = self.depth.saturating_sub(1);
                    let name = String::from_utf8_lossy(end.name().as_ref()).into_owned();
                    return Ok(XmlEvent::End(name));
                }
                Event::Eof => return Ok(XmlEvent::Eof),
                _ => {}
            }
        }
    }

    /// Consume the rest of the current element and return it as a
    /// detached subtree. `is_empty` says whether `element` came from a
    /// self-closing tag, in which case there is nothing left to consume.
    pub fn expand_subtree(&mut self, element: XmlElement, is_empty: bool) -> Result<XmlNode> {
        let root = XmlNode::from(element);
        if is_empty {
            return Ok(root);
        }
        let mut stack: Vec<XmlNode> = vec![root];
        loop {
            match self.next_event()? {
                XmlEvent::Start(el) => stack.push(XmlNode::from(el)),
                XmlEvent::Empty(el) => {
                    // stack is never empty before the root's end event
                    stack.last_mut().unwrap().children.push(XmlNode::from(el));
                }
                XmlEvent::End(_) => {
                    let node = stack.pop().unwrap();
                    match stack.last_mut() {
                        Some(parent) => parent.children.push(node),
                        None => return Ok(node),
                    }
                }
                XmlEvent::Eof => return Err(ReadError::TruncatedDocument),
            }
        }
    }
}

fn to_element(start: &BytesStart<'_>) -> Result<XmlElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attrs = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        let raw = String::from_utf8_lossy(&attr.value).into_owned();
        // Identifier text may carry XML escapes; tolerate bad ones.
        let value = quick_xml::escape::unescape(&raw)
            .map(|v| v.into_owned())
            .unwrap_or(raw);
        attrs.push((key, value));
    }
    Ok(XmlElement { name, attrs })
}
