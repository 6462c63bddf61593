//! Content shaping for translated elements.
//!
//! Elements that carry decoration (a button icon, an emphasized span) keep it
//! across language swaps. The decision is made here on plain data so the DOM
//! layer only has to build nodes from a [`Content`].

#[cfg(test)]
#[path = "template_test.rs"]
mod template_test;

/// Structure of a tagged element as observed before writing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shape {
    /// A `<button>` with an `<i>` icon child.
    IconButton,
    /// An element containing a `<strong>` span with this current text.
    Emphasis { text: String },
    /// Anything else.
    Plain,
}

/// What to write into an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Content {
    /// Keep the existing icon, followed by `" " + label`.
    IconLabel(String),
    /// `before<strong>emphasis</strong>after`, built from text nodes.
    Emphasized { before: String, emphasis: String, after: String },
    /// Plain text content.
    Text(String),
}

impl Content {
    /// Visible text of the written content, icon excluded.
    pub fn text(&self) -> String {
        match self {
            Self::IconLabel(label) => format!(" {label}"),
            Self::Emphasized { before, emphasis, after } => format!("{before}{emphasis}{after}"),
            Self::Text(text) => text.clone(),
        }
    }
}

/// Decide how `value` is written into an element of the given shape.
///
/// The emphasis branch re-wraps the first verbatim occurrence of the old
/// emphasized text. When that text is empty or absent from `value` the
/// element gets plain text.
pub fn render(shape: &Shape, value: &str) -> Content {
    match shape {
        Shape::IconButton => Content::IconLabel(value.to_owned()),
        Shape::Emphasis { text } if !text.is_empty() => match value.split_once(text.as_str()) {
            Some((before, after)) => Content::Emphasized {
                before: before.to_owned(),
                emphasis: text.clone(),
                after: after.to_owned(),
            },
            None => Content::Text(value.to_owned()),
        },
        Shape::Emphasis { .. } | Shape::Plain => Content::Text(value.to_owned()),
    }
}
