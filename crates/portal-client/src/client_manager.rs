//! Lazy GitHub client construction
//!
//! The client is created on first use from a token resolved at runtime
//! and then reused for the rest of the session.

use crate::{DispatchError, OctocrabClient, WorkflowClient, DEFAULT_HOST};
use anyhow::{Context, Result};
use log::{debug, info};
use std::sync::Arc;

/// Environment variable holding a token for one specific host
///
/// `ghe.example.com` becomes `GITHUB_TOKEN_GHE_EXAMPLE_COM`.
pub fn host_env_key(host: &str) -> String {
    format!(
        "GITHUB_TOKEN_{}",
        host.replace(['.', '-'], "_").to_uppercase()
    )
}

/// Looks up an environment variable
pub type EnvLookup = fn(&str) -> Option<String>;

fn process_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Resolves GitHub tokens for a host
///
/// Tries multiple sources in order:
/// 1. Host-specific env var (e.g., `GITHUB_TOKEN_GITHUB_COM`)
/// 2. `gh auth token --hostname {host}` command
/// 3. Generic `GITHUB_TOKEN` or `GH_TOKEN` (github.com only)
#[derive(Debug, Clone)]
pub struct TokenResolver {
    /// Cached default token from GITHUB_TOKEN/GH_TOKEN
    default_token: Option<String>,
    /// Whether to ask the gh CLI
    use_gh_cli: bool,
    /// Source of host-specific token variables
    env: EnvLookup,
}

impl Default for TokenResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenResolver {
    /// Create a resolver reading `GITHUB_TOKEN`/`GH_TOKEN` from the environment
    pub fn new() -> Self {
        let default_token = std::env::var("GITHUB_TOKEN")
            .or_else(|_| std::env::var("GH_TOKEN"))
            .ok()
            .filter(|token| !token.trim().is_empty());

        Self {
            default_token,
            use_gh_cli: true,
            env: process_env,
        }
    }

    /// Create a resolver with an explicit fallback token and no gh CLI lookup
    pub fn with_default_token(default_token: Option<String>) -> Self {
        Self {
            default_token,
            use_gh_cli: false,
            env: process_env,
        }
    }

    /// Read host-specific token variables through `env` instead of the process
    pub fn with_env(mut self, env: EnvLookup) -> Self {
        self.env = env;
        self
    }

    /// Get a token for the given host
    pub async fn get_token(&self, host: &str) -> Result<String> {
        let env_key = host_env_key(host);
        if let Some(token) = (self.env)(&env_key) {
            if !token.trim().is_empty() {
                debug!("Using token from env var {} for host {}", env_key, host);
                return Ok(token);
            }
        }

        if self.use_gh_cli {
            if let Some(token) = gh_cli_token(host).await {
                debug!("Using token from gh CLI for host {}", host);
                return Ok(token);
            }
        }

        if host == DEFAULT_HOST {
            if let Some(ref token) = self.default_token {
                debug!("Using default token (GITHUB_TOKEN/GH_TOKEN) for github.com");
                return Ok(token.clone());
            }
        }

        Err(anyhow::anyhow!(
            "No token found for host '{}'. Set {} or GITHUB_TOKEN, or run 'gh auth login --hostname {}'",
            host,
            env_key,
            host
        ))
    }
}

/// Ask the gh CLI for a token; a missing binary or logged-out CLI is not an error
async fn gh_cli_token(host: &str) -> Option<String> {
    debug!("Trying gh auth token for host {}", host);
    let output = tokio::process::Command::new("gh")
        .args(["auth", "token", "--hostname", host])
        .output()
        .await
        .context("Failed to run 'gh auth token'")
        .inspect_err(|e| debug!("{:#}", e))
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let token = String::from_utf8(output.stdout).ok()?.trim().to_string();
    (!token.is_empty()).then_some(token)
}

/// Owns the workflow client for the session
///
/// # Example
///
/// ```rust,ignore
/// let mut manager = ClientManager::new();
/// let client = manager.get_client().await?;
/// client.dispatch_workflow(&dispatch).await?;
/// ```
pub struct ClientManager {
    client: Option<Arc<dyn WorkflowClient>>,
    tokens: TokenResolver,
}

impl Default for ClientManager {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientManager {
    /// Create a manager that builds an octocrab client on first use
    pub fn new() -> Self {
        Self::with_resolver(TokenResolver::new())
    }

    pub fn with_resolver(tokens: TokenResolver) -> Self {
        Self {
            client: None,
            tokens,
        }
    }

    /// Create a manager around an already constructed client
    pub fn with_client(client: Arc<dyn WorkflowClient>) -> Self {
        Self {
            client: Some(client),
            tokens: TokenResolver::with_default_token(None),
        }
    }

    /// Check if a client has been created (without creating one)
    pub fn has_client(&self) -> bool {
        self.client.is_some()
    }

    /// Get or create the client
    pub async fn get_client(&mut self) -> Result<Arc<dyn WorkflowClient>, DispatchError> {
        if let Some(client) = &self.client {
            return Ok(Arc::clone(client));
        }

        info!("Creating GitHub client for host: {}", DEFAULT_HOST);
        let token = self
            .tokens
            .get_token(DEFAULT_HOST)
            .await
            .map_err(|e| DispatchError::MissingToken(e.to_string()))?;

        let client: Arc<dyn WorkflowClient> = Arc::new(
            OctocrabClient::from_token(token)
                .map_err(|e| DispatchError::Transport(format!("{:#}", e)))?,
        );
        self.client = Some(Arc::clone(&client));

        info!("GitHub client created for host: {}", DEFAULT_HOST);
        Ok(client)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RepositoryInfo, WorkflowDispatch};
    use async_trait::async_trait;

    struct NoopClient;

    #[async_trait]
    impl WorkflowClient for NoopClient {
        async fn dispatch_workflow(&self, _dispatch: &WorkflowDispatch) -> Result<(), DispatchError> {
            Ok(())
        }

        async fn fetch_repository(&self, _owner: &str, _name: &str) -> Result<RepositoryInfo> {
            Err(anyhow::anyhow!("not found"))
        }
    }

    #[test]
    fn test_host_env_key_generation() {
        let hosts = [
            ("github.com", "GITHUB_TOKEN_GITHUB_COM"),
            ("ghe.example.com", "GITHUB_TOKEN_GHE_EXAMPLE_COM"),
            (
                "github-enterprise.corp.com",
                "GITHUB_TOKEN_GITHUB_ENTERPRISE_CORP_COM",
            ),
        ];

        for (host, expected_key) in hosts {
            assert_eq!(host_env_key(host), expected_key, "host '{}'", host);
        }
    }

    #[tokio::test]
    async fn test_default_token_only_applies_to_github_com() {
        let resolver = TokenResolver::with_default_token(Some("fallback".to_string()));

        let token = resolver.get_token("mfe-portal-test.invalid").await;
        assert!(token.is_err());
        let message = token.unwrap_err().to_string();
        assert!(message.contains("GITHUB_TOKEN_MFE_PORTAL_TEST_INVALID"));
    }

    fn empty_env(_key: &str) -> Option<String> {
        None
    }

    fn host_env(key: &str) -> Option<String> {
        (key == "GITHUB_TOKEN_GITHUB_COM").then(|| "from-host-var".to_string())
    }

    #[tokio::test]
    async fn test_missing_token_is_dispatch_error() {
        let resolver = TokenResolver::with_default_token(None).with_env(empty_env);
        let mut manager = ClientManager::with_resolver(resolver);

        let result = manager.get_client().await;
        assert!(matches!(result, Err(DispatchError::MissingToken(_))));
        assert!(!manager.has_client());
    }

    #[tokio::test]
    async fn test_host_variable_wins_over_default_token() {
        let resolver =
            TokenResolver::with_default_token(Some("fallback".to_string())).with_env(host_env);
        assert_eq!(resolver.get_token(DEFAULT_HOST).await.unwrap(), "from-host-var");

        let resolver =
            TokenResolver::with_default_token(Some("fallback".to_string())).with_env(empty_env);
        assert_eq!(resolver.get_token(DEFAULT_HOST).await.unwrap(), "fallback");
    }

    #[tokio::test]
    async fn test_with_client_is_reused() {
        let mut manager = ClientManager::with_client(Arc::new(NoopClient));
        assert!(manager.has_client());

        let first = manager.get_client().await.unwrap();
        let second = manager.get_client().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }
}
