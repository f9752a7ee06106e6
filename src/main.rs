// SPDX-License-Identifier: MPL-2.0
use iced_invitation::app::{self, Flags};

const HELP: &str = "\
Usage: iced_invitation [OPTIONS] [SITE_DIR]

Arguments:
  [SITE_DIR]            Folder holding info.txt and photo/ (default: current directory)

Options:
  --lang <ID>           Interface language (e.g. en-US, ko)
  --config-dir <DIR>    Folder holding settings.toml
  --play-bgm            Start the background music unmuted
  -h, --help            Print this help
";

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{}", HELP);
        return Ok(());
    }

    let lang = match args.opt_value_from_str("--lang") {
        Ok(lang) => lang,
        Err(err) => {
            log::warn!("ignoring --lang: {}", err);
            None
        }
    };
    let config_dir = match args.opt_value_from_str("--config-dir") {
        Ok(dir) => dir,
        Err(err) => {
            log::warn!("ignoring --config-dir: {}", err);
            None
        }
    };
    let play_bgm = args.contains("--play-bgm");

    let flags = Flags {
        lang,
        config_dir,
        play_bgm,
        site_dir: args
            .finish()
            .into_iter()
            .next()
            .and_then(|s| s.into_string().ok()),
    };

    app::run(flags)
}
