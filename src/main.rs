// SPDX-License-Identifier: MPL-2.0
use scanora::app::{self, Flags};
use scanora::ui::notifications::kind;

const HELP: &str = "\
Scanora

USAGE:
  scanora [OPTIONS]

OPTIONS:
  --data-dir DIR     Directory for state.cbor (overrides SCANORA_DATA_DIR)
  --config-dir DIR   Directory for settings.toml (overrides SCANORA_CONFIG_DIR)
  --preview KIND     Show the notification KIND at startup
  --list-kinds       Print the registered notification kinds and exit
  -h, --help         Print this help and exit
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    if args.contains("--list-kinds") {
        for kind in kind::all() {
            println!("{:<22} {:?} -> {:?}", kind.key, kind.category, kind.surface());
        }
        return Ok(());
    }

    let flags = match parse_flags(&mut args) {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("error: {err}\n\n{HELP}");
            std::process::exit(2);
        }
    };

    let remaining = args.finish();
    if !remaining.is_empty() {
        eprintln!("warning: ignoring unexpected arguments: {remaining:?}");
    }

    app::run(flags)
}

fn parse_flags(args: &mut pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    Ok(Flags {
        data_dir: args.opt_value_from_str("--data-dir")?,
        config_dir: args.opt_value_from_str("--config-dir")?,
        preview: args.opt_value_from_str("--preview")?,
    })
}
