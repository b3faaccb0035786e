//! Routing sources to loaders by pattern.

use std::fmt;
use std::sync::Arc;

use chunkline_splitter::Document;
use regex::Regex;

use crate::Loader;
use crate::error::{LoaderError, Result};

#[derive(Clone)]
struct Route {
    pattern: Regex,
    loader: Arc<dyn Loader>,
}

/// Picks a [`Loader`] for each source by matching it against regex patterns.
///
/// When several patterns match, the most recently registered route wins, so
/// routes added with [`with_loader`](Self::with_loader) override the defaults.
#[derive(Clone, Default)]
pub struct LoaderRouter {
    routes: Vec<Route>,
}

impl fmt::Debug for LoaderRouter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.routes
                    .iter()
                    .map(|route| (route.pattern.as_str(), route.loader.name())),
            )
            .finish()
    }
}

impl LoaderRouter {
    /// Creates a router with no routes.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a router with the built-in loaders: `.txt` files, plus `.pdf`
    /// files when the `pdf` feature is enabled.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut router = Self::empty();
        router.push(builtin_pattern(r"(?i)\.txt$"), Arc::new(crate::TextLoader));
        #[cfg(feature = "pdf")]
        router.push(builtin_pattern(r"(?i)\.pdf$"), Arc::new(crate::PdfLoader::new()));
        router
    }

    /// Registers `loader` for sources matching `pattern`.
    #[must_use]
    pub fn with_loader(mut self, pattern: Regex, loader: impl Loader + 'static) -> Self {
        self.push(pattern, Arc::new(loader));
        self
    }

    fn push(&mut self, pattern: Regex, loader: Arc<dyn Loader>) {
        self.routes.push(Route { pattern, loader });
    }

    /// Returns the loader responsible for `source`.
    ///
    /// # Errors
    /// Returns [`LoaderError::UnsupportedSource`] when no pattern matches.
    pub fn resolve(&self, source: &str) -> Result<&dyn Loader> {
        self.routes
            .iter()
            .rev()
            .find(|route| route.pattern.is_match(source))
            .map(|route| route.loader.as_ref())
            .ok_or_else(|| LoaderError::UnsupportedSource(source.to_string()))
    }

    /// Loads `source` with the matching loader.
    ///
    /// # Errors
    /// Fails when no loader matches or the loader itself fails.
    pub fn load(&self, source: &str) -> Result<Vec<Document>> {
        let loader = self.resolve(source)?;
        tracing::debug!(source, loader = loader.name(), "loading source");
        loader.load(source)
    }
}

fn builtin_pattern(pattern: &str) -> Regex {
    Regex::new(pattern).expect("built-in source pattern is valid")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Fixed(&'static str);

    impl Loader for Fixed {
        fn load(&self, source: &str) -> Result<Vec<Document>> {
            Ok(vec![Document::new(source, self.0)])
        }

        fn name(&self) -> &'static str {
            self.0
        }
    }

    #[test]
    fn default_routes_match_extensions() {
        let router = LoaderRouter::with_defaults();
        assert_eq!(router.resolve("notes.txt").unwrap().name(), "text");
        assert_eq!(router.resolve("NOTES.TXT").unwrap().name(), "text");
        assert!(router.resolve("notes.txt.bak").is_err());
        #[cfg(feature = "pdf")]
        assert_eq!(router.resolve("paper.pdf").unwrap().name(), "pdf");
    }

    #[test]
    fn unknown_source_is_unsupported() {
        let err = LoaderRouter::with_defaults().resolve("slides.pptx").unwrap_err();
        assert!(matches!(err, LoaderError::UnsupportedSource(s) if s == "slides.pptx"));
    }

    #[test]
    fn later_routes_override_earlier_ones() {
        let router = LoaderRouter::with_defaults()
            .with_loader(Regex::new(r"\.txt$").unwrap(), Fixed("custom"));
        let docs = router.load("readme.txt").unwrap();
        assert_eq!(docs[0].text, "custom");
    }

    #[test]
    fn empty_router_supports_nothing() {
        assert!(LoaderRouter::empty().load("a.txt").is_err());
    }

    #[test]
    fn debug_lists_patterns() {
        let debug = format!("{:?}", LoaderRouter::with_defaults());
        assert!(debug.contains("text"));
    }
}
