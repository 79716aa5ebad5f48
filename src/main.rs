// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use pico_args;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        api_url: args.opt_value_from_str("--api-url").unwrap(),
        config_dir: args.opt_value_from_str("--config-dir").unwrap(),
    };

    app::run(flags)
}
