use std::io;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "day_scaffold=info";
const VERBOSE_DIRECTIVE: &str = "day_scaffold=debug,info";

// stdout 保留給 [[bin]] 宣告，日誌一律寫到 stderr
pub fn init_cli_logger(verbose: bool) {
    let directive = if verbose {
        VERBOSE_DIRECTIVE
    } else {
        DEFAULT_DIRECTIVE
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));

    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}
