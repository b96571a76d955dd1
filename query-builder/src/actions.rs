use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    /// The platform refused to write to the clipboard
    Clipboard(String),
    /// The platform refused to open the search page
    Navigation(String),
    /// A platform API is missing in this environment
    Unavailable(&'static str),
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionError::Clipboard(e) => write!(f, "clipboard write failed: {e}"),
            ActionError::Navigation(e) => write!(f, "could not open search: {e}"),
            ActionError::Unavailable(api) => write!(f, "{api} is not available"),
        }
    }
}

impl std::error::Error for ActionError {}

/// Write access to the system clipboard.
pub trait Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ActionError>;
}

/// Opens urls outside of the builder.
pub trait Navigator {
    /// Opens `url` in the browsing context named `target` (usually a new tab).
    fn open_new_context(&self, url: &str, target: &str) -> Result<(), ActionError>;
}

/// Builds the search page url, with `query` percent-encoded as the `q` parameter.
pub fn search_url(config: &BuilderConfig, query: &str) -> String {
    format!("{}?q={}", config.search_endpoint, urlencoding::encode(query))
}

impl QueryAssembler {
    /// Copies the displayed query, exactly as displayed.
    ///
    /// Errors are logged and returned but never change the assembler.
    pub fn copy_current_query(&self, clipboard: &impl Clipboard) -> Result<(), ActionError> {
        clipboard.write_text(self.query()).map_err(|e| {
            warn!("Failed to copy query: {e}");
            e
        })
    }

    /// Opens the search page for the displayed query.
    ///
    /// Returns `Ok(false)` without touching the navigator if the query is blank.
    pub fn dispatch_search(&self, navigator: &impl Navigator) -> Result<bool, ActionError> {
        if self.query().trim().is_empty() {
            debug!("Not searching for an empty query");
            return Ok(false);
        }
        let url = search_url(self.config(), self.query());
        info!("Opening search {url}");
        if let Err(e) = navigator.open_new_context(&url, &self.config().new_context_target) {
            warn!("Failed to open search: {e}");
            return Err(e);
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_encoding() {
        let config = BuilderConfig::default();
        assert_eq!(search_url(&config, "React -Vue"), "https://www.google.com/search?q=React%20-Vue");
        assert_eq!(
            search_url(&config, "\"a b\" site:github.com"),
            "https://www.google.com/search?q=%22a%20b%22%20site%3Agithub.com"
        );
        assert_eq!(search_url(&config, "價格&x=1"), "https://www.google.com/search?q=%E5%83%B9%E6%A0%BC%26x%3D1");
    }

    #[test]
    fn display() {
        assert_eq!(ActionError::Unavailable("navigator.clipboard").to_string(), "navigator.clipboard is not available");
    }
}
