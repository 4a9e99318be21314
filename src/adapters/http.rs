use crate::utils::error::Result;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// 建立整個行程共用的 HTTP client；未設定逾時則沿用 reqwest 預設
pub fn build_client(timeout_seconds: Option<u64>) -> Result<Client> {
    let mut builder = Client::builder().user_agent(USER_AGENT);

    if let Some(secs) = timeout_seconds {
        tracing::debug!("HTTP request timeout set to {}s", secs);
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_client_with_and_without_timeout() {
        assert!(build_client(None).is_ok());
        assert!(build_client(Some(3)).is_ok());
    }
}
