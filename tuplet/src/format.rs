//! Templated rendering of tuple slots.
//!
//! A template is ordinary text with placeholders:
//!
//! | placeholder | renders |
//! | :---------- | :------ |
//! | `%k$s`      | slot `k` (one-based) |
//! | `%s`        | the next slot, counting sequential placeholders only |
//! | `%k$S`, `%S`| as above, upper-cased |
//! | `%n`        | a newline |
//! | `%%`        | a literal `%` |
//!
//! Positional and sequential placeholders may be mixed; positional ones do not advance the
//! sequential counter. Slots need not all be used, but a placeholder beyond the last slot is an
//! error. Widths, flags and other conversions are not supported.
//!
//! Every fixed-arity tuple has a canonical template, [`Tuple::FORMAT`](crate::Tuple::FORMAT), for
//! which rendering reproduces the tuple's [`Display`](std::fmt::Display) output. Slots render
//! through [`Render`], so an absent value fills its placeholder with `null`.
//!
//! # Examples
//!
//! ```
//! use tuplet::{Triple, Tuple};
//!
//! let triple = Triple::of("a", 2, 'c');
//! assert_eq!(triple.to_string_with("%3$s-%1$s").unwrap(), "c-a");
//! assert_eq!(triple.to_string_with("%s/%s/%S").unwrap(), "a/2/C");
//! assert_eq!(
//!     triple.to_string_with(<Triple<&str, i32, char>>::FORMAT).unwrap(),
//!     triple.to_string()
//! );
//! ```

use std::str::FromStr;

use crate::{
    structural::{Render, Rendered},
    FormatError, TupleError,
};

/// One piece of a parsed [`Template`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Text copied verbatim (with `%%` and `%n` already resolved).
    Literal(String),
    /// A slot reference.
    Slot {
        /// The one-based slot position.
        position: usize,
        /// Whether to upper-case the rendered value.
        upper: bool,
        /// The byte offset of the placeholder in the template.
        offset: usize,
    },
}

/// A parsed rendering template, independent of any particular tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template.
    pub fn parse(template: &str) -> Result<Self, FormatError> {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut sequential = 0;
        let mut chars = template.char_indices().peekable();

        while let Some((offset, c)) = chars.next() {
            if c != '%' {
                literal.push(c);
                continue;
            }

            let mut digits = String::new();
            while let Some(&(_, d)) = chars.peek() {
                if !d.is_ascii_digit() {
                    break;
                }
                digits.push(d);
                let _ = chars.next();
            }

            let explicit = if digits.is_empty() {
                None
            } else {
                match chars.next() {
                    Some((_, '$')) => {}
                    _ => return Err(FormatError::Malformed { offset }),
                }
                match usize::from_str(&digits) {
                    Ok(position) if position > 0 => Some(position),
                    _ => return Err(FormatError::Malformed { offset }),
                }
            };

            let conversion = match chars.next() {
                Some((_, conversion)) => conversion,
                None => return Err(FormatError::Malformed { offset }),
            };

            match (conversion, explicit) {
                ('%', None) => literal.push('%'),
                ('n', None) => literal.push('\n'),
                ('s', _) | ('S', _) => {
                    let position = match explicit {
                        Some(position) => position,
                        None => {
                            sequential += 1;
                            sequential
                        }
                    };
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Slot {
                        position,
                        upper: conversion == 'S',
                        offset,
                    });
                }
                ('%', Some(_)) | ('n', Some(_)) => return Err(FormatError::Malformed { offset }),
                (conversion, _) => {
                    return Err(FormatError::UnknownConversion { conversion, offset })
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }
        Ok(Template { segments })
    }

    /// The parsed segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The largest slot position referenced, or zero if the template references no slots.
    pub fn max_position(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Slot { position, .. } => Some(*position),
                Segment::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Render the template against the given slots.
    pub fn render(&self, slots: &[&dyn Render]) -> Result<String, FormatError> {
        let mut rendered = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Slot {
                    position,
                    upper,
                    offset,
                } => {
                    let slot = slots
                        .get(position - 1)
                        .ok_or(FormatError::MissingArgument {
                            position: *position,
                            arity: slots.len(),
                            offset: *offset,
                        })?;
                    let value = Rendered(*slot).to_string();
                    if *upper {
                        rendered.push_str(&value.to_uppercase());
                    } else {
                        rendered.push_str(&value);
                    }
                }
            }
        }
        Ok(rendered)
    }
}

impl FromStr for Template {
    type Err = FormatError;

    fn from_str(template: &str) -> Result<Self, Self::Err> {
        Template::parse(template)
    }
}

/// Parse `template` and render it against `slots` in one step.
pub fn render(template: &str, slots: &[&dyn Render]) -> Result<String, TupleError> {
    Ok(Template::parse(template)?.render(slots)?)
}
