use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// 函式庫與各 binary 的 target 都要列出，否則 main 裡的日誌會被濾掉
const CLI_DIRECTIVES: &str = "vet_finder_skill=info,vet_finder=info";
const CLI_VERBOSE_DIRECTIVES: &str = "vet_finder_skill=debug,vet_finder=debug,info";
const LAMBDA_DIRECTIVES: &str = "vet_finder_skill=info,lambda=info";

fn filter_or_default(default_directives: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

pub fn init_cli_logger(verbose: bool) {
    let filter = if verbose {
        filter_or_default(CLI_VERBOSE_DIRECTIVES)
    } else {
        filter_or_default(CLI_DIRECTIVES)
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_lambda_logger() {
    let filter = filter_or_default(LAMBDA_DIRECTIVES);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json()
                .flatten_event(true)
                .with_current_span(true), // request_id 由 span 帶入每一行
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::Level;

    // 以 scoped dispatcher 檢查，不會動到全域 subscriber
    fn enabled_under(directives: &str, check: impl FnOnce() -> bool) -> bool {
        let subscriber = tracing_subscriber::registry().with(EnvFilter::new(directives));
        tracing::subscriber::with_default(subscriber, check)
    }

    #[test]
    fn test_cli_filter_enables_binary_target() {
        assert!(enabled_under(CLI_DIRECTIVES, || {
            tracing::enabled!(target: "vet_finder", Level::INFO)
        }));
        assert!(enabled_under(CLI_DIRECTIVES, || {
            tracing::enabled!(target: "vet_finder", Level::ERROR)
        }));
        assert!(enabled_under(CLI_DIRECTIVES, || {
            tracing::enabled!(target: "vet_finder_skill::core::engine", Level::INFO)
        }));
        assert!(!enabled_under(CLI_DIRECTIVES, || {
            tracing::enabled!(target: "vet_finder", Level::DEBUG)
        }));
    }

    #[test]
    fn test_verbose_cli_filter_enables_debug() {
        assert!(enabled_under(CLI_VERBOSE_DIRECTIVES, || {
            tracing::enabled!(target: "vet_finder", Level::DEBUG)
        }));
        assert!(enabled_under(CLI_VERBOSE_DIRECTIVES, || {
            tracing::enabled!(target: "vet_finder_skill::adapters::geosearch", Level::DEBUG)
        }));
    }

    #[test]
    fn test_lambda_filter_enables_binary_target() {
        assert!(enabled_under(LAMBDA_DIRECTIVES, || {
            tracing::enabled!(target: "lambda", Level::INFO)
        }));
        assert!(enabled_under(LAMBDA_DIRECTIVES, || {
            tracing::enabled!(target: "vet_finder_skill::app::handlers::find_vet", Level::ERROR)
        }));
    }
}
