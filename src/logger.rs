use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Filter variables in precedence order.
const FILTER_ENV_VARS: [&str; 2] = ["SCALEPROBE_LOG", "RUST_LOG"];

const DEFAULT_DIRECTIVES: &str = "info";
/// Per-connection events from the HTTP stack stay at `info` under `--verbose`.
const VERBOSE_DIRECTIVES: &str = "debug,hyper=info,hyper_util=info,h2=info,reqwest=info";

/// Picks the first parseable filter from the environment, else a default
/// based on `verbose`. Unparseable values are skipped.
fn resolve_directives<F>(verbose: bool, lookup: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    FILTER_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| EnvFilter::try_new(value).is_ok())
        .unwrap_or_else(|| {
            let fallback = if verbose {
                VERBOSE_DIRECTIVES
            } else {
                DEFAULT_DIRECTIVES
            };
            fallback.to_owned()
        })
}

/// Installs the global subscriber writing driver progress to stdout.
///
/// Event targets are only shown with `verbose`. Calling this twice keeps the
/// first subscriber.
pub fn init_logging(verbose: bool, no_color: bool) {
    let directives = resolve_directives(verbose, |name| std::env::var(name).ok());
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::new(directives))
        .with_ansi(!no_color)
        .with_target(verbose)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Logging already initialised: {}", err);
    }
}
