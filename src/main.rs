// SPDX-License-Identifier: MPL-2.0
use kiosk_status::app::{self, paths, Flags};
use kiosk_status::logging::{init_logging, LogConfig};

const HELP: &str = "\
kiosk_status - simulated kiosk status display

USAGE:
  kiosk_status [OPTIONS]

OPTIONS:
  --lang <ID>          UI language (e.g. en-US, fr)
  --config-dir <DIR>   Directory holding settings.toml
  --seed <N>           Fixed seed for a reproducible sequence of states
  --interval <SECS>    Seconds between state changes
  --fullscreen         Start in fullscreen
  -v, -vv, -vvv        Increase log verbosity (RUST_LOG overrides)
  -h, --help           Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let verbosity = count_verbosity(&mut args);
    if let Err(err) = init_logging(&LogConfig::from_verbosity(verbosity)) {
        eprintln!("logging disabled: {err}");
    }

    let config_dir: Option<String> = parse_opt(&mut args, "--config-dir");
    paths::init_cli_override(config_dir);

    let flags = Flags {
        lang: parse_opt(&mut args, "--lang"),
        seed: parse_opt(&mut args, "--seed"),
        interval_secs: parse_opt(&mut args, "--interval"),
        fullscreen: args.contains("--fullscreen"),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "ignoring unrecognized arguments");
    }

    app::run(flags)
}

fn count_verbosity(args: &mut pico_args::Arguments) -> u8 {
    if args.contains("-vvv") {
        return 3;
    }
    if args.contains("-vv") {
        return 2;
    }
    let mut count = 0;
    while args.contains("-v") {
        count += 1;
    }
    count.min(3)
}

/// Reads an optional flag value, treating malformed values as absent.
fn parse_opt<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(err) => {
            eprintln!("{key}: {err}");
            None
        }
    }
}
