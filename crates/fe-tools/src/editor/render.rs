//! Line-numbered rendering of file content and edit snippets.

use fe_core::{maybe_truncate, MAX_RESPONSE_LEN};

/// Tab stop width used when expanding tabs, matching `cat -n` output the
/// model is used to seeing.
pub const TAB_WIDTH: usize = 8;

/// Lines of context shown on each side of an edit in post-edit snippets.
pub const SNIPPET_CONTEXT: usize = 4;

/// Expand tab characters to fixed-width stops. Columns reset at each
/// newline.
pub fn expand_tabs(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut col = 0usize;
    for ch in text.chars() {
        match ch {
            '\t' => {
                let spaces = TAB_WIDTH - (col % TAB_WIDTH);
                out.extend(std::iter::repeat(' ').take(spaces));
                col += spaces;
            }
            '\n' => {
                out.push('\n');
                col = 0;
            }
            _ => {
                out.push(ch);
                col += 1;
            }
        }
    }
    out
}

/// Render `content` with 1-based line numbers starting at `start_line`,
/// under a `cat -n` header naming `descriptor` (the path, or
/// "a snippet of <path>" for post-edit windows). Output is bounded by
/// [`maybe_truncate`].
pub fn render(content: &str, descriptor: &str, start_line: usize, tabs: bool) -> String {
    let expanded;
    let body = if tabs {
        expanded = expand_tabs(content);
        expanded.as_str()
    } else {
        content
    };

    let numbered = body
        .split('\n')
        .enumerate()
        .map(|(i, line)| format!("{:6}\t{}", i + start_line, line))
        .collect::<Vec<_>>()
        .join("\n");

    let out = format!(
        "Here's the result of running `cat -n` on {}:\n{}\n",
        descriptor, numbered
    );
    maybe_truncate(&out, MAX_RESPONSE_LEN).into_owned()
}
