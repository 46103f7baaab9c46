//! Environment overrides
//!
//! The hosting platform tells the runner about VM mode, video recording,
//! a pre-installed browser and the outbound proxy through environment
//! variables. They are read once into a [`RunnerEnv`] snapshot which the
//! argument builder takes as an explicit input.

/// Set when running inside a platform VM
pub const VM_VAR: &str = "SAUCE_VM";
/// Set when the platform records video of the session
pub const VIDEO_RECORD_VAR: &str = "SAUCE_VIDEO_RECORD";
/// Explicit browser executable, honoured in VM mode only
pub const BROWSER_PATH_VAR: &str = "SAUCE_BROWSER_PATH";
/// Outbound HTTP proxy URL
pub const HTTP_PROXY_VAR: &str = "HTTP_PROXY";

/// Snapshot of the environment variables the builder reacts to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunnerEnv {
    pub vm: bool,
    pub video_record: bool,
    pub browser_path: Option<String>,
    pub http_proxy: Option<String>,
}

impl RunnerEnv {
    /// Read the snapshot from the process environment
    pub fn from_process() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the snapshot from an arbitrary variable lookup
    ///
    /// Empty values count as unset. The proxy falls back to the lowercase
    /// `http_proxy` spelling.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        Self {
            vm: get(VM_VAR).is_some(),
            video_record: get(VIDEO_RECORD_VAR).is_some(),
            browser_path: get(BROWSER_PATH_VAR),
            http_proxy: get(HTTP_PROXY_VAR).or_else(|| get(HTTP_PROXY_VAR.to_lowercase().as_str())),
        }
    }

    /// Browser executable that replaces the alias table's launch string
    pub fn browser_override(&self) -> Option<&str> {
        if self.vm {
            self.browser_path.as_deref()
        } else {
            None
        }
    }

    /// Proxy as `host:port`, with the URL scheme removed
    pub fn proxy_address(&self) -> Option<&str> {
        self.http_proxy.as_deref().map(strip_scheme)
    }
}

/// Strip a leading `scheme://` and any trailing slashes
fn strip_scheme(url: &str) -> &str {
    let rest = match url.find("://") {
        Some(idx) => &url[idx + "://".len()..],
        None => url,
    };
    rest.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_from(pairs: &[(&str, &str)]) -> RunnerEnv {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        RunnerEnv::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_empty_environment() {
        assert_eq!(env_from(&[]), RunnerEnv::default());
    }

    #[test]
    fn test_vm_snapshot() {
        let env = env_from(&[
            ("SAUCE_VM", "truthy"),
            ("SAUCE_VIDEO_RECORD", "truthy"),
            ("SAUCE_BROWSER_PATH", r"D:\chrome99\chrome.exe"),
            ("HTTP_PROXY", "http://localhost:8080"),
        ]);
        assert!(env.vm);
        assert!(env.video_record);
        assert_eq!(env.browser_override(), Some(r"D:\chrome99\chrome.exe"));
        assert_eq!(env.proxy_address(), Some("localhost:8080"));
    }

    #[test]
    fn test_browser_path_ignored_outside_vm() {
        let env = env_from(&[("SAUCE_BROWSER_PATH", "/usr/bin/firefox")]);
        assert_eq!(env.browser_override(), None);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let env = env_from(&[("SAUCE_VM", ""), ("HTTP_PROXY", "")]);
        assert!(!env.vm);
        assert_eq!(env.http_proxy, None);
    }

    #[test]
    fn test_lowercase_proxy_fallback() {
        let env = env_from(&[("http_proxy", "https://proxy.internal:3128/")]);
        assert_eq!(env.proxy_address(), Some("proxy.internal:3128"));
    }

    #[test]
    fn test_strip_scheme() {
        assert_eq!(strip_scheme("http://localhost:8080"), "localhost:8080");
        assert_eq!(strip_scheme("localhost:8080"), "localhost:8080");
        assert_eq!(strip_scheme("socks5://10.0.0.1:1080/"), "10.0.0.1:1080");
    }
}
