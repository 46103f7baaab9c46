//! Browser alias table
//!
//! Maps the logical browser names used in run configs to TestCafe's
//! headless launch strings.

use crate::common::{Error, Result};

/// A supported browser and its launch string
#[derive(Debug, Clone)]
pub struct BrowserInfo {
    /// Name as written in run configs (matched exactly)
    pub name: &'static str,
    /// TestCafe browser alias with headless launch parameters
    pub launch: &'static str,
}

/// All supported browsers
static BROWSERS: &[BrowserInfo] = &[
    BrowserInfo {
        name: "chrome",
        launch: "chrome:headless",
    },
    BrowserInfo {
        name: "firefox",
        launch: "firefox:headless:marionettePort=9223",
    },
    BrowserInfo {
        name: "microsoftedge",
        launch: "edge:headless",
    },
    BrowserInfo {
        name: "edge",
        launch: "edge:headless",
    },
    BrowserInfo {
        name: "safari",
        launch: "safari",
    },
];

/// Get browser info by name
pub fn get_browser(name: &str) -> Option<&'static BrowserInfo> {
    BROWSERS.iter().find(|b| b.name == name)
}

/// Resolve the headless launch string for a browser name
pub fn launch_token(name: &str) -> Result<&'static str> {
    get_browser(name)
        .map(|b| b.launch)
        .ok_or_else(|| Error::UnsupportedBrowser(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_entry_resolves() {
        for browser in BROWSERS {
            assert_eq!(launch_token(browser.name).unwrap(), browser.launch);
        }
    }

    #[test]
    fn test_firefox_uses_marionette() {
        assert_eq!(
            launch_token("firefox").unwrap(),
            "firefox:headless:marionettePort=9223"
        );
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(launch_token("microsoftedge").unwrap(), "edge:headless");
        assert!(matches!(
            launch_token("Chrome"),
            Err(Error::UnsupportedBrowser(ref name)) if name == "Chrome"
        ));
        assert!(launch_token("MicrosoftEdge").is_err());
        assert!(launch_token(" firefox").is_err());
    }

    #[test]
    fn test_unknown_browser() {
        let err = launch_token("invalid").unwrap_err();
        assert_eq!(err.to_string(), "Unsupported browser: invalid.");
    }
}
