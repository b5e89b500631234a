use clap::{Command, arg};

pub use stabrs_index::consts::STAB_CMD;

pub fn create_stab_cli() -> Command {
    Command::new(STAB_CMD)
        .author("Databio")
        .about("Answer point queries against an indexed interval file")
        .arg_required_else_help(true)
        .arg(arg!(-i <intervals> "Tab-separated interval file (track, start, end, ...); may be gzipped"))
        .arg(arg!(-q <queries> "Query file with one `track<TAB>point` per line, or '-' for stdin"))
        .arg(arg!(-f --format <format> "Output format, either 'text' or 'json'"))
}
