use std::time::Duration;

/// Final record ordering emitted by the parser. Consumers only rely on
/// `parent_id` resolution, not position, so both orderings are valid views
/// of the same forest.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyOrdering {
    /// Each parent immediately followed by its own replies.
    Interleaved,
    /// All parents first, then all replies (each still carrying parent_id).
    Grouped,
}

/// Parser behavior toggles. One implementation covers the dump variants that
/// used to drift apart as separate scripts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseOptions {
    /// When false, usernames are blanked on every record (privacy toggle).
    pub include_username: bool,
    pub reply_ordering: ReplyOrdering,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self { include_username: true, reply_ordering: ReplyOrdering::Interleaved }
    }
}

/// User-facing options with sensible defaults and builder chaining.
#[derive(Clone, Debug)]
pub struct EtlOptions {
    pub parse: ParseOptions,
    pub probe_timeout: Duration,
    pub parallelism: Option<usize>, // Some(N) to size the rayon pool, None for default
    pub progress: bool,             // show progress bar
    pub progress_label: Option<String>,
    pub pretty_json: bool,          // pretty-print exported JSON arrays
}

impl Default for EtlOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            probe_timeout: crate::probe::DEFAULT_PROBE_TIMEOUT,
            parallelism: None,
            progress: true,
            progress_label: None,
            pretty_json: true,
        }
    }
}

impl EtlOptions {
    pub fn with_include_username(mut self, yes: bool) -> Self {
        self.parse.include_username = yes;
        self
    }
    pub fn with_reply_ordering(mut self, ordering: ReplyOrdering) -> Self {
        self.parse.reply_ordering = ordering;
        self
    }
    pub fn with_probe_timeout(mut self, timeout: Duration) -> Self {
        self.probe_timeout = timeout;
        self
    }
    pub fn with_parallelism(mut self, threads: usize) -> Self {
        self.parallelism = Some(threads);
        self
    }
    pub fn with_progress(mut self, yes: bool) -> Self {
        self.progress = yes;
        self
    }
    pub fn with_progress_label(mut self, label: impl Into<String>) -> Self {
        self.progress_label = Some(label.into());
        self
    }
    pub fn with_pretty_json(mut self, yes: bool) -> Self {
        self.pretty_json = yes;
        self
    }
}
