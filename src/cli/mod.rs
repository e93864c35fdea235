//! CLI argument parsing and command dispatch.

pub mod args;
pub mod format;
pub mod quote;
pub mod report;

pub use args::{AmountStyle, Cli, Commands, OutputFormat};

/// Print rendered output, ending with exactly one newline.
fn emit(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}
