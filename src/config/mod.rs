mod settings;

pub use settings::{save_shell_config_to, Config, EXAMPLE_CONFIG};
