use env_logger::{Builder, Env, Target};

/// Installs the global logger: `info` unless `RUST_LOG` says otherwise,
/// written to stdout alongside the output of the spawned tools.
pub fn init() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Stdout)
        .format_target(false)
        .try_init()
        .unwrap_or_default();
}
