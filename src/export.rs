//! Output dataset files. Formats and filenames here serve the export
//! collaborator; the records themselves are written as-is.

use crate::record::CommentRecord;
use crate::util::replace_file_atomic;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// End-of-run report line for one processed video.
#[derive(Clone, Debug, Serialize)]
pub struct VideoSummary {
    pub file_name: String,
    pub video_url: String,
    pub comment_count: usize,
}

/// Write records as one JSON array, atomically (temp file + rename).
pub fn write_json_array(path: &Path, records: &[CommentRecord], pretty: bool) -> Result<()> {
    let tmp = path.with_extension("json.inprogress");
    {
        let f = File::create(&tmp).with_context(|| format!("create {}", tmp.display()))?;
        let mut w = BufWriter::new(f);
        if pretty {
            serde_json::to_writer_pretty(&mut w, records)?;
        } else {
            serde_json::to_writer(&mut w, records)?;
        }
        w.flush()?;
    }
    replace_file_atomic(&tmp, path)
}

/// Write records as NDJSON, one object per line, atomically.
pub fn write_ndjson(path: &Path, records: &[CommentRecord]) -> Result<()> {
    let tmp = path.with_extension("ndjson.inprogress");
    {
        let f = File::create(&tmp).with_context(|| format!("create {}", tmp.display()))?;
        let mut w = BufWriter::new(f);
        for record in records {
            serde_json::to_writer(&mut w, record)?;
            w.write_all(b"\n")?;
        }
        w.flush()?;
    }
    replace_file_atomic(&tmp, path)
}
