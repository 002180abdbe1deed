use std::io::Write;

/// `filter` takes precedence over `RUST_LOG`. Records go to stderr, stdout belongs to the game.
pub fn init(filter: Option<&str>) {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    );
    if let Some(filter) = filter {
        builder.parse_filters(filter);
    }
    builder
        .format(|buf, record| {
            writeln!(buf, "[{}][{}]{}", buf.timestamp_millis(), record.level(), record.args())
        })
        .target(env_logger::Target::Stderr)
        .init();
}
