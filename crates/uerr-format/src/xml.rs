// SPDX-License-Identifier: MIT OR Apache-2.0
//! Tag-based encoder.
//!
//! Each map entry becomes an element named after its key, in ascending key
//! order. Nested maps become nested elements, arrays repeat an item element
//! per entry, scalars become escaped text and `null` an empty element.
//! Characters XML 1.0 does not allow in text are replaced by U+FFFD.

use std::borrow::Cow;

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use serde_json::{Map, Value};

use crate::FormatError;

/// XML encoder settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlOptions {
    /// Wrap the output in this element; `None` emits a bare fragment.
    pub root: Option<String>,
    /// Element name used for each array entry.
    pub item: String,
}

impl Default for XmlOptions {
    fn default() -> Self {
        Self {
            root: None,
            item: "item".into(),
        }
    }
}

/// Encode `map` as XML.
pub fn encode_map(map: &Map<String, Value>, options: &XmlOptions) -> Result<String, FormatError> {
    check_name(&options.item)?;
    let mut writer = Writer::new(Vec::new());

    match &options.root {
        Some(root) => {
            check_name(root)?;
            start(&mut writer, root)?;
            write_map(&mut writer, map, options)?;
            end(&mut writer, root)?;
        }
        None => write_map(&mut writer, map, options)?,
    }

    String::from_utf8(writer.into_inner()).map_err(|e| FormatError::Xml {
        reason: e.to_string(),
    })
}

fn write_map(
    writer: &mut Writer<Vec<u8>>,
    map: &Map<String, Value>,
    options: &XmlOptions,
) -> Result<(), FormatError> {
    let mut entries: Vec<(&String, &Value)> = map.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    for (key, value) in entries {
        write_value(writer, key, value, options)?;
    }
    Ok(())
}

fn write_value(
    writer: &mut Writer<Vec<u8>>,
    name: &str,
    value: &Value,
    options: &XmlOptions,
) -> Result<(), FormatError> {
    check_name(name)?;
    match value {
        Value::Object(map) => {
            start(writer, name)?;
            write_map(writer, map, options)?;
            end(writer, name)
        }
        Value::Array(items) => {
            start(writer, name)?;
            for item in items {
                write_value(writer, &options.item, item, options)?;
            }
            end(writer, name)
        }
        Value::Null => write(writer, Event::Empty(BytesStart::new(name))),
        Value::String(s) => text_element(writer, name, s),
        Value::Number(n) => text_element(writer, name, &n.to_string()),
        Value::Bool(b) => text_element(writer, name, if *b { "true" } else { "false" }),
    }
}

fn text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<(), FormatError> {
    start(writer, name)?;
    if !text.is_empty() {
        write(writer, Event::Text(BytesText::new(&legal_text(text))))?;
    }
    end(writer, name)
}

fn legal_text(text: &str) -> Cow<'_, str> {
    if text.chars().all(is_xml_char) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(
            text.chars()
                .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
                .collect(),
        )
    }
}

/// The `Char` production of XML 1.0.
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\u{9}'
            | '\u{A}'
            | '\u{D}'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn start(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), FormatError> {
    write(writer, Event::Start(BytesStart::new(name)))
}

fn end(writer: &mut Writer<Vec<u8>>, name: &str) -> Result<(), FormatError> {
    write(writer, Event::End(BytesEnd::new(name)))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<(), FormatError> {
    writer.write_event(event).map_err(|e| FormatError::Xml {
        reason: e.to_string(),
    })
}

/// Element names: a letter or `_`, then letters, digits, `_`, `-` or `.`.
fn check_name(name: &str) -> Result<(), FormatError> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
        }
        _ => false,
    };
    if valid {
        Ok(())
    } else {
        Err(FormatError::InvalidElementName {
            name: name.to_owned(),
        })
    }
}
