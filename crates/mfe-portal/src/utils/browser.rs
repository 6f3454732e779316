//! Opening links of created repositories in the system browser

/// Program and arguments that open `url` on this platform
fn opener(url: &str) -> (&'static str, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open", vec![url.to_string()])
    } else if cfg!(target_os = "windows") {
        // `start` treats the first quoted argument as the window title
        (
            "cmd",
            vec!["/C".into(), "start".into(), String::new(), url.to_string()],
        )
    } else {
        ("xdg-open", vec![url.to_string()])
    }
}

/// Only web links are handed to the system opener
fn is_web_url(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Open a URL in the default browser; failures are logged, never raised
pub async fn open_url(url: String) {
    if !is_web_url(&url) {
        log::warn!("Refusing to open non-http URL: {}", url);
        return;
    }

    let (program, args) = opener(&url);
    match tokio::process::Command::new(program).args(&args).spawn() {
        Ok(mut child) => {
            if let Err(e) = child.wait().await {
                log::warn!("{} did not finish cleanly: {}", program, e);
            }
        }
        Err(e) => log::error!("Failed to open {} with {}: {}", url, program, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opener_passes_url_last() {
        let (_, args) = opener("https://github.com/mfepocautomation/my-app");
        assert_eq!(
            args.last().map(String::as_str),
            Some("https://github.com/mfepocautomation/my-app")
        );
    }

    #[test]
    fn test_only_web_urls_are_opened() {
        assert!(is_web_url("https://github.com/mfepocautomation/my-app"));
        assert!(is_web_url("http://localhost:3000"));
        assert!(!is_web_url("file:///etc/passwd"));
        assert!(!is_web_url("javascript:alert(1)"));
        assert!(!is_web_url(" https://github.com"));
        assert!(!is_web_url(""));
    }
}
