mod stab;

use anyhow::Result;
use clap::Command;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const PKG_NAME: &str = "stabrs";
    pub const BIN_NAME: &str = "stabrs";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Stabbing queries over half-open interval collections: index a file of intervals once, then answer many point queries.")
        .subcommand_required(true)
        .subcommand(stab::cli::create_stab_cli())
}

fn main() -> Result<()> {
    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // STAB
        //
        Some((stab::cli::STAB_CMD, matches)) => {
            stab::handlers::run_stab(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}
