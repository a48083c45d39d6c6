//! Driver for minic: parses a source file and prints its syntax tree.

use std::io::{self, Write};
use std::path::Path;

use console::style;
use minic_parser::parser::Parser;
use minic_parser::print_tree;
use minic_source::{Source, SyntaxError};
use tracing::{debug, info};

/// Driver settings, filled from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Only print the tree itself, without status lines.
    pub quiet: bool,
}

/// Result of running the driver on one source text.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Parsing succeeded and the tree was printed.
    Tree,
    /// Parsing succeeded but the program is empty.
    Empty,
    /// Parsing failed. Holds the reported syntax errors.
    Failed(Vec<SyntaxError>),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, Outcome::Failed(_))
    }

    /// Process exit status for this outcome: `0` on success, `1` on a syntax error.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            0
        } else {
            1
        }
    }
}

/// Formats `error` as `path:line:column: error: message`, locating it in `source`.
///
/// The `error:` prefix is styled red and bold when `colored` is set.
pub fn render_diagnostic(path: &Path, source: &Source, error: &SyntaxError, colored: bool) -> String {
    let (line, column) = source.line_col(error.span().start);
    format!(
        "{}:{}:{}: {} {}",
        path.display(),
        line,
        column,
        style("error:").red().bold().force_styling(colored),
        error
    )
}

/// Parses `content` and writes the status lines and the tree trace to `out`.
///
/// Syntax errors are not written to `out`; they are returned in [`Outcome::Failed`] so that the caller can render
/// them with their location.
pub fn run(content: &str, options: &Options, out: &mut impl Write) -> io::Result<Outcome> {
    let source = Source::new(content);
    let ast = Parser::new(&source).parse_program();

    if !source.has_no_errors() {
        let errors = source.errors.errors();
        info!(errors = errors.len(), "syntax analysis failed");
        if !options.quiet {
            writeln!(out, "Parse failed.")?;
        }
        return Ok(Outcome::Failed(errors));
    }

    info!("syntax analysis succeeded");
    if !options.quiet {
        writeln!(out, "Parse succeeded.")?;
    }

    match ast {
        Some(root) => {
            if !options.quiet {
                writeln!(out, "Abstract syntax tree:")?;
            }
            out.write_all(print_tree(Some(&root)).as_bytes())?;
            debug!(depth = root.depth(), "printed syntax tree");
            Ok(Outcome::Tree)
        }
        None => {
            if !options.quiet {
                writeln!(out, "No syntax tree was produced (root is empty).")?;
            }
            Ok(Outcome::Empty)
        }
    }
}
