use thiserror::Error;

/// The taxonomy is deliberately narrow. A scan has no failure outcome: an
/// unsearchable page counts as a miss, an empty document is an immediate
/// not-found, stopping an idle coordinator is a no-op, and superseding a
/// running scan is defined behavior. What remains is configuration and the
/// one OS call that can fail.
#[derive(Error, Debug)]
pub enum PagescanError {
    // Config
    #[error("no page search provider configured")]
    NoProvider,

    // Runtime
    #[error("failed to spawn scan worker")]
    WorkerSpawn(#[source] std::io::Error),
}

impl PagescanError {
    /// Whether this error is a builder misconfiguration (a programming bug)
    /// rather than a runtime condition worth retrying.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::NoProvider)
    }
}
