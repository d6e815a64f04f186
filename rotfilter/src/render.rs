//! Line rendering: apply one transform to every character of every line.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::debug;

use crate::cipher::Transform;

/// Render one line: same length, same order, each character transformed.
pub fn render_line(line: &str, transform: Transform) -> String {
    line.chars().map(|ch| transform.apply(ch)).collect()
}

/// Read newline-delimited lines from `input` until EOF, writing one rendered
/// line (with trailing newline) to `output` per input line.
///
/// Transform application cannot fail; the only error path is I/O.
pub fn filter_lines<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    transform: Transform,
) -> Result<()> {
    let mut lines = 0u64;
    for line in input.lines() {
        let line = line.context("read line from input")?;
        writeln!(output, "{}", render_line(&line, transform)).context("write rendered line")?;
        lines += 1;
    }
    debug!(lines, ?transform, "input exhausted");
    Ok(())
}
