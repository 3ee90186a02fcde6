//! The read-eval-print loop.
//!
//! Reading and writing go through generic `BufRead`/`Write` handles so the
//! loop runs the same against a terminal and against in-memory buffers.

use crate::config::ReplConfig;
use crate::reporting::render_parse_error;
use lispy_eval::{destroy, eval, print, read};
use lispy_parse::{parse, ParseError};
use std::io::{self, BufRead, Write};

pub const VERSION_BANNER: &str = "Lispy Version 0.5";
pub const EXIT_HINT: &str = "Press Ctrl+c to Exit";

/// Name used for the input in parse-error reports.
const SOURCE_NAME: &str = "<stdin>";

/// Counts for a finished session.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Lines that parsed and produced a result.
    pub evaluated: usize,
    /// Lines rejected by the parser.
    pub parse_failures: usize,
}

/// Parse, read, evaluate and print one line.
pub fn evaluate_line(source: &str) -> Result<String, ParseError> {
    let tree = parse(source)?;
    let result = eval(read(&tree));
    let text = print(&result);
    destroy(result);
    Ok(text)
}

/// Run a session: either the configured `-e` lines, or an interactive loop
/// over `input` until end of input.
///
/// Each line yields exactly one line on `out` (a value or an evaluation
/// error). Parse failures are reported on `err` and the loop continues.
pub fn run<R, W, E>(config: &ReplConfig, mut input: R, out: &mut W, err: &mut E) -> io::Result<Summary>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let mut summary = Summary::default();

    if config.is_batch() {
        for line in &config.expressions {
            handle_line(config, line, out, err, &mut summary)?;
        }
        return Ok(summary);
    }

    if config.banner {
        writeln!(out, "{VERSION_BANNER}")?;
        writeln!(out, "{EXIT_HINT}")?;
        writeln!(out)?;
    }

    let mut buf = Vec::new();
    loop {
        write!(out, "{}", config.prompt)?;
        out.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // End of input: finish the prompt line so the shell starts clean.
            writeln!(out)?;
            break;
        }
        // Invalid UTF-8 decodes to U+FFFD, which the parser rejects like any
        // other stray character.
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches('\n').trim_end_matches('\r');
        handle_line(config, line, out, err, &mut summary)?;
    }

    tracing::debug!(
        evaluated = summary.evaluated,
        parse_failures = summary.parse_failures,
        "session finished"
    );
    Ok(summary)
}

fn handle_line<W: Write, E: Write>(
    config: &ReplConfig,
    line: &str,
    out: &mut W,
    err: &mut E,
    summary: &mut Summary,
) -> io::Result<()> {
    tracing::debug!(line, "read");
    let tree = match parse(line) {
        Ok(tree) => tree,
        Err(error) => {
            summary.parse_failures = summary.parse_failures.saturating_add(1);
            write!(err, "{}", render_parse_error(&error, SOURCE_NAME, line))?;
            return err.flush();
        }
    };

    if config.dump_tree {
        write!(out, "{tree}")?;
    }

    let result = eval(read(&tree));
    writeln!(out, "{}", print(&result))?;
    destroy(result);
    summary.evaluated = summary.evaluated.saturating_add(1);
    Ok(())
}
