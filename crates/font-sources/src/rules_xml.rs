//! Rewriting the `<rules>` element of designspace XML in place.
//!
//! Everything outside `<rules>` is kept byte for byte, including elements
//! norad does not model (axis labels, variable-font definitions).

use std::{fmt::Write, ops::Range};

use opsz_core::OpszRule;
use quick_xml::{
    Reader,
    escape::escape,
    events::{BytesStart, Event},
};

use crate::error::Result;

const INDENT: &str = "  ";

/// Byte positions of the top-level elements a rules rewrite cares about.
#[derive(Debug, Default, PartialEq)]
struct Landmarks {
    /// The existing `<rules>` element, tags included.
    rules: Option<Range<usize>>,
    /// `processing` attribute of the existing `<rules>` element.
    processing: Option<String>,
    /// Start of the `<sources>` element.
    sources: Option<usize>,
    /// Start of the closing root tag.
    root_end: Option<usize>,
}

fn scan(xml: &str) -> Result<Landmarks> {
    let mut reader = Reader::from_str(xml);
    let mut marks = Landmarks::default();
    let mut rules_start = None;
    let mut depth = 0usize;

    loop {
        let before = reader.buffer_position() as usize;
        match reader.read_event()? {
            Event::Start(start) => {
                if depth == 1 {
                    match start.name().as_ref() {
                        b"rules" => {
                            rules_start = Some(before);
                            marks.processing = processing(&start)?;
                        }
                        b"sources" => {
                            marks.sources.get_or_insert(before);
                        }
                        _ => (),
                    }
                }
                depth += 1;
            }
            Event::Empty(start) if depth == 1 => match start.name().as_ref() {
                b"rules" => {
                    marks.rules = Some(before..reader.buffer_position() as usize);
                    marks.processing = processing(&start)?;
                }
                b"sources" => {
                    marks.sources.get_or_insert(before);
                }
                _ => (),
            },
            Event::End(end) => {
                depth = depth.saturating_sub(1);
                if depth == 1 && end.name().as_ref() == b"rules" {
                    if let Some(start) = rules_start.take() {
                        marks.rules = Some(start..reader.buffer_position() as usize);
                    }
                } else if depth == 0 {
                    marks.root_end = Some(before);
                }
            }
            Event::Eof => break,
            _ => (),
        }
    }
    Ok(marks)
}

fn processing(start: &BytesStart) -> Result<Option<String>> {
    for attr in start.attributes() {
        let attr = attr?;
        if attr.key.as_ref() == b"processing" {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

/// Serialize `rules` as a `<rules>` element nested one level below the root.
///
/// The first line carries no indentation; it replaces an element in place.
fn rules_element(rules: &[OpszRule], processing: Option<&str>) -> String {
    let mut xml = String::from("<rules");
    if let Some(processing) = processing {
        let _ = write!(xml, " processing=\"{}\"", escape(processing));
    }
    if rules.is_empty() {
        xml.push_str("/>");
        return xml;
    }
    xml.push('>');

    for rule in rules {
        // norad reads condition bounds as f32; narrowing before formatting
        // writes the short form it reads back (`8.099`, not `8.098999999999999`).
        let minimum = rule.minimum as f32;
        let maximum = rule.maximum as f32;
        let _ = write!(
            xml,
            "\n{INDENT}{INDENT}<rule name=\"{name}\">\
             \n{INDENT}{INDENT}{INDENT}<conditionset>\
             \n{INDENT}{INDENT}{INDENT}{INDENT}<condition name=\"{axis}\" minimum=\"{minimum}\" maximum=\"{maximum}\"/>\
             \n{INDENT}{INDENT}{INDENT}</conditionset>\
             \n{INDENT}{INDENT}{INDENT}<sub name=\"{substitute}\" with=\"{with}\"/>\
             \n{INDENT}{INDENT}</rule>",
            name = escape(rule.name.as_str()),
            axis = escape(rule.axis.as_str()),
            substitute = escape(rule.substitute.as_str()),
            with = escape(rule.with.as_str()),
        );
    }
    let _ = write!(xml, "\n{INDENT}</rules>");
    xml
}

/// Return `xml` with its `<rules>` element replaced by `rules`.
///
/// Without an existing element, the new one goes before `<sources>`, or
/// before the closing root tag when there are no sources either. The
/// `processing` attribute of a replaced element is kept.
pub(crate) fn replace_rules(xml: &str, rules: &[OpszRule]) -> Result<String> {
    let marks = scan(xml)?;
    let element = rules_element(rules, marks.processing.as_deref());

    let mut out = String::with_capacity(xml.len() + element.len());
    match (marks.rules, marks.sources, marks.root_end) {
        (Some(range), _, _) => {
            out.push_str(&xml[..range.start]);
            out.push_str(&element);
            out.push_str(&xml[range.end..]);
        }
        (None, Some(at), _) => {
            out.push_str(&xml[..at]);
            out.push_str(&element);
            out.push('\n');
            out.push_str(INDENT);
            out.push_str(&xml[at..]);
        }
        (None, None, Some(at)) => {
            out.push_str(&xml[..at]);
            out.push_str(INDENT);
            out.push_str(&element);
            out.push('\n');
            out.push_str(&xml[at..]);
        }
        (None, None, None) => out.push_str(xml),
    }
    Ok(out)
}
