/// Default search page, also the only provider the webui uses.
pub const GOOGLE_SEARCH_ENDPOINT: &str = "https://www.google.com/search";

/// Settings of a [`QueryAssembler`](crate::assembler::QueryAssembler) and the urls it builds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Search page that receives the query as its `q` parameter.
    ///
    /// The provider is fixed: the webui always runs with the default value.
    pub search_endpoint: String,
    /// Browsing context searches are opened in (default: `_blank`)
    pub new_context_target: String,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        BuilderConfig {
            search_endpoint: String::from(GOOGLE_SEARCH_ENDPOINT),
            new_context_target: String::from("_blank"),
        }
    }
}
