use clap::Parser;

/// Top-level CLI structure.
#[derive(Parser, Debug)]
#[command(
    name = "charcount",
    about = "Count the occurrences of each character and print the tally as delimited text"
)]
pub struct Cli {
    /// Print the version and exit
    #[arg(long)]
    pub version: bool,

    /// List available dialects and exit (see --output-dialect)
    #[arg(long)]
    pub dialects: bool,

    /// Path to read input from (if not specified, read from stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<String>,

    /// Path to write output to (if not specified, write to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Delimiter of the output; `\t` and `\0` are recognised aliases
    #[arg(long, visible_alias = "od", value_name = "DELIM")]
    pub output_delimiter: Option<String>,

    /// Dialect of the output (see --dialects for the recognised names)
    #[arg(long, visible_alias = "ol", value_name = "NAME")]
    pub output_dialect: Option<String>,

    /// Emit timing diagnostics
    #[arg(long)]
    pub debug: bool,
}
