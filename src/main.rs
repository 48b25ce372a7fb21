use std::process::ExitCode;

use shopify_price_search::logging::{init_tracing, DEFAULT_FILTER};
use shopify_price_search::{ProductSearch, SearchConfig, SearchError, SearchRequest};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; the variables may come from the shell.
    dotenv::dotenv().ok();

    if let Err(e) = init_tracing(DEFAULT_FILTER) {
        eprintln!("failed to initialize tracing: {e}");
    }

    let request = SearchRequest::from_args(std::env::args().skip(1));

    let config = match SearchConfig::from_env() {
        Ok(config) => config,
        Err(e) => return fail(&SearchError::Config(e)),
    };

    let search = match ProductSearch::new(&config) {
        Ok(search) => search,
        Err(e) => {
            // Client construction happens before any request is logged
            eprintln!("Error: {e}");
            return ExitCode::from(e.exit_code());
        }
    };

    let mut stdout = std::io::stdout().lock();
    match search.run(&request, &mut stdout).await {
        Ok(outcome) => {
            tracing::debug!(?outcome, "search finished");
            ExitCode::SUCCESS
        }
        Err(e) => fail(&e),
    }
}

fn fail(error: &SearchError) -> ExitCode {
    if !error.is_logged() {
        eprintln!("Error: {error}");
    }
    ExitCode::from(error.exit_code())
}
