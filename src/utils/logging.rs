use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "error" }
}

/// Initialise `env_logger`. `RUST_LOG` takes precedence over `--verbose`.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    let mut builder = Builder::from_env(env);
    builder.format_timestamp(None).format_target(verbose);

    // Keep HTTP stack chatter out of verbose output
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_module("hyper", LevelFilter::Warn);
        builder.filter_module("reqwest", LevelFilter::Info);
    }

    // A second init (tests, embedding) is harmless
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true), "debug");
        assert_eq!(default_filter(false), "error");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        init(false);
        init(true);
        log::debug!("logger initialised");
    }
}
