mod canonical;
mod config;
mod export;
mod parse;
mod pipeline;
mod probe;
mod progress;
mod record;
mod resolve;
mod util;

pub use crate::canonical::{normalize, CanonicalUrl};
pub use crate::config::{EtlOptions, ParseOptions, ReplyOrdering};
pub use crate::parse::parse_dump;
pub use crate::pipeline::{CommentEtl, VideoComments};
pub use crate::record::{CommentRecord, RecordKind};
pub use crate::resolve::{resolve, resolve_with, LinkResolution};

// Expose the probe so batch callers can construct it once and share it.
pub use crate::probe::{Probe, DEFAULT_PROBE_TIMEOUT};

// Expose export writers and the per-video summary type.
pub use crate::export::{write_json_array, write_ndjson, VideoSummary};

// Expose progress and tracing helpers so binaries can import from crate root.
pub use crate::progress::make_count_progress;
pub use crate::util::init_tracing_once;
