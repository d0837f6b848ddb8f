//! Chunk-aware escaping of CSS into the body of a double-quoted JavaScript
//! string literal.
//!
//! The [`Transcoder`] accepts the stylesheet one chunk at a time and emits the
//! escaped text for each chunk as soon as it is settled. Whitespace at the end
//! of a chunk cannot be rendered yet: spaces may turn out to precede a newline
//! (and be trimmed), and newlines may turn out to be the last thing in the
//! input (and be dropped or inlined). That run is held back as pending text
//! and re-examined with the next chunk, so every chunking of the same input
//! produces the same output as [`escape`] on the whole buffer.
//!
//! ```text
//! chunk ─▶ pending + chunk ─▶ escape \ and " ─▶ normalize \r\n, \r ─▶ split off trailing run
//!                                                                    │
//!                           settled text ◀── trim / materialize ◀────┘
//! ```

use crate::options::Css2JsOptions;

/// Newline rendering when splitting into concatenated literals.
const SPLIT_NEWLINE: &str = "\\n\" +\n\"";

/// Newline rendering inside a single literal.
const INLINE_NEWLINE: &str = "\\n";

/// The subset of [`Css2JsOptions`] the escaping step reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct EscapeFlags {
    split_on_newline: bool,
    trim_spaces_before_newline: bool,
    trim_trailing_newline: bool,
}

/// Text carried from one chunk into the next.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
enum Pending {
    #[default]
    Empty,
    /// Canonical newlines, spaces and tabs that ended the previous chunk
    Whitespace(String),
}

/// Stateful escaper for one conversion job.
///
/// Call [`transform`](Self::transform) for every chunk in arrival order, then
/// [`finish`](Self::finish) once the input has ended. Concatenating all
/// returned strings gives the escaped body.
///
/// # Example
///
/// ```rust
/// use css2js::{Css2JsOptions, Transcoder};
///
/// let options = Css2JsOptions::default();
/// let mut transcoder = Transcoder::new(&options);
///
/// let mut body = transcoder.transform("a { color: red }\n");
/// body.push_str(&transcoder.transform("b { color: blue }\n"));
/// body.push_str(&transcoder.finish());
///
/// assert_eq!(body, "a { color: red }\\n\" +\n\"b { color: blue }");
/// ```
#[derive(Debug, Clone)]
pub struct Transcoder {
    flags: EscapeFlags,
    pending: Pending,
    /// Last raw character consumed was `\r`
    after_cr: bool,
}

impl Transcoder {
    pub fn new(options: &Css2JsOptions) -> Self {
        Self {
            flags: EscapeFlags {
                split_on_newline: options.split_on_newline,
                trim_spaces_before_newline: options.trim_spaces_before_newline,
                trim_trailing_newline: options.trim_trailing_newline,
            },
            pending: Pending::Empty,
            after_cr: false,
        }
    }

    /// Escape one chunk, returning the part of the output it settles.
    pub fn transform(&mut self, chunk: &str) -> String {
        let mut text = match std::mem::take(&mut self.pending) {
            Pending::Empty => String::with_capacity(chunk.len() + chunk.len() / 8),
            Pending::Whitespace(run) => run,
        };
        self.push_escaped(chunk, &mut text);

        let settled = text.trim_end_matches(is_deferred).len();
        let run = text.split_off(settled);
        if !run.is_empty() {
            self.pending = Pending::Whitespace(run);
        }

        self.flags.render(&text, false)
    }

    /// Flush the pending run once the input has ended.
    pub fn finish(self) -> String {
        match self.pending {
            Pending::Empty => String::new(),
            Pending::Whitespace(run) => self.flags.render(&run, true),
        }
    }

    /// Whether whitespace from the last chunk is still waiting for more input.
    #[cfg(test)]
    fn has_pending(&self) -> bool {
        matches!(self.pending, Pending::Whitespace(_))
    }

    /// Append `chunk` to `out` with backslashes and quotes escaped and every
    /// line terminator reduced to `\n`.
    fn push_escaped(&mut self, chunk: &str, out: &mut String) {
        for c in chunk.chars() {
            let after_cr = std::mem::replace(&mut self.after_cr, false);
            match c {
                '\\' => out.push_str("\\\\"),
                '"' => out.push_str("\\\""),
                '\r' => {
                    out.push('\n');
                    self.after_cr = true;
                }
                // second half of a \r\n pair
                '\n' if after_cr => {}
                c => out.push(c),
            }
        }
    }
}

impl EscapeFlags {
    /// Render canonical text. Unless `at_end` is set, `text` never ends in
    /// whitespace, so every space run before a newline lies entirely inside it.
    fn render(self, text: &str, at_end: bool) -> String {
        let mut lines: Vec<&str> = text.split('\n').collect();
        let last = lines.len() - 1;

        if self.trim_spaces_before_newline {
            for line in &mut lines[..last] {
                *line = line.trim_end_matches([' ', '\t']);
            }
        }

        let ends_with_newline = last > 0 && lines[last].is_empty();
        let mut inline_last_newline = false;
        if at_end && ends_with_newline {
            if self.trim_trailing_newline {
                while lines.len() > 1 && lines.last().is_some_and(|line| line.is_empty()) {
                    lines.pop();
                }
            } else {
                // avoid a dangling `"" ` piece after the last split
                inline_last_newline = true;
            }
        }

        let newline = if self.split_on_newline {
            SPLIT_NEWLINE
        } else {
            INLINE_NEWLINE
        };

        let count = lines.len();
        let mut out = String::with_capacity(text.len() + count * newline.len());
        for (i, line) in lines.into_iter().enumerate() {
            if i > 0 {
                if inline_last_newline && i == count - 1 {
                    out.push_str(INLINE_NEWLINE);
                } else {
                    out.push_str(newline);
                }
            }
            out.push_str(line);
        }
        out
    }
}

fn is_deferred(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n')
}

/// Escape a complete stylesheet in one pass.
///
/// Equivalent to a single [`Transcoder::transform`] followed by
/// [`Transcoder::finish`].
pub fn escape(css: &str, options: &Css2JsOptions) -> String {
    let mut transcoder = Transcoder::new(options);
    let mut body = transcoder.transform(css);
    body.push_str(&transcoder.finish());
    body
}
