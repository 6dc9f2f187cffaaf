// SPDX-License-Identifier: MPL-2.0
use iced_docs::app::{self, paths, Flags};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Browse the Lumen UI documentation.

USAGE:
  iced_docs [OPTIONS] [ROUTE]

ARGS:
  [ROUTE]                Page to open, e.g. #/usage/installation

OPTIONS:
  --lang <ID>            Interface language (e.g. en-US, fr)
  --docs-dir <PATH>      Read pages from PATH/pages instead of the bundled ones
  --config-dir <PATH>    Directory containing settings.toml
  -h, --help             Print this help
";

fn parse_flags() -> Result<Flags, pico_args::Error> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    Ok(Flags {
        lang: args.opt_value_from_str("--lang")?,
        docs_dir: args.opt_value_from_str("--docs-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        route: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    })
}

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let flags = match parse_flags() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
