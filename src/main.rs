// SPDX-License-Identifier: MPL-2.0
use iced_intake::app::{self, paths, Flags};

const HELP: &str = "\
iced_intake

USAGE:
  iced_intake [OPTIONS]

OPTIONS:
  -h, --help            Print this help
  --lang <LOCALE>       Interface language (en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  --notes <FILE>        Text file loaded into the notes panel
  --activity-log        Print the activity log as JSON on exit
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: read_option(&mut args, "--lang"),
        config_dir: read_option(&mut args, "--config-dir"),
        notes: read_option::<String>(&mut args, "--notes").map(Into::into),
        activity_log: args.contains("--activity-log"),
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("Warning: ignoring unused arguments: {remaining:?}");
    }

    paths::init_cli_override(flags.config_dir.clone());
    app::run(flags)
}

fn read_option<T>(args: &mut pico_args::Arguments, key: &'static str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        eprintln!("Warning: invalid value for {key}: {err}");
        None
    })
}
