// SPDX-License-Identifier: MPL-2.0
use iced_hook::app::{self, Flags};

const HELP: &str = "\
iced_hook: send an image to a chat webhook

USAGE:
  iced_hook [OPTIONS] [IMAGE]

OPTIONS:
  -h, --help              Print this help
      --lang <LOCALE>     Interface language (e.g. en-US, fr)
      --config-dir <DIR>  Directory holding settings.toml

ENV:
  ICED_HOOK_CONFIG_DIR    Same as --config-dir (the flag wins)
  RUST_LOG                Log filter (default: info)
";

fn main() -> iced::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang").unwrap_or_else(|err| {
        tracing::warn!(%err, "ignoring invalid --lang");
        None
    });
    let config_dir: Option<String> =
        args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(%err, "ignoring invalid --config-dir");
            None
        });
    let file_path = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    app::run(Flags {
        lang,
        file_path,
        config_dir,
    })
}
