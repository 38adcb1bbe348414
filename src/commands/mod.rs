mod config;
mod prompt;
mod show;
mod view;

pub use config::{cmd_config_get, cmd_config_set, cmd_config_show, config_json};
pub use prompt::cmd_prompt;
pub use show::{cmd_show, fetch_once, format_show, show_json};
pub use view::cmd_view;
