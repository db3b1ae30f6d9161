// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use std::path::PathBuf;

const USAGE: &str = "\
Usage: iced_gallery [OPTIONS] [PATH]

PATH is a gallery.toml manifest or a directory of images
(defaults to the current directory).

Options:
  --lang <LOCALE>       Interface language (e.g. en-US, fr)
  --config-dir <DIR>    Directory holding settings.toml
  -h, --help            Print this help";

fn main() -> iced::Result {
    let _ = env_logger::Builder::from_default_env()
        .format_timestamp_secs()
        .try_init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return Ok(());
    }

    let lang = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        log::warn!("ignoring --lang: {err}");
        None
    });
    let config_dir = args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
        log::warn!("ignoring --config-dir: {err}");
        None
    });
    let gallery_path = args.finish().into_iter().next().map(PathBuf::from);

    app::run(Flags {
        lang,
        config_dir,
        gallery_path,
    })
}
