use crate::config::{EtlOptions, ReplyOrdering};
use crate::export::{write_json_array, VideoSummary};
use crate::parse::parse_dump;
use crate::probe::Probe;
use crate::progress::make_count_progress;
use crate::record::CommentRecord;
use crate::resolve::{dedupe, partition_with, LinkResolution};
use crate::util::init_tracing_once;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Parsed records for one video, keyed by its canonical URL.
#[derive(Clone, Debug)]
pub struct VideoComments {
    pub url: String,
    pub records: Vec<CommentRecord>,
}

/// Batch front door: resolve a link set, then turn the per-video raw dumps
/// supplied by the external scraper into structured datasets.
#[derive(Clone)]
pub struct CommentEtl {
    pub(crate) opts: EtlOptions,
}

impl CommentEtl {
    pub fn new() -> Self {
        Self { opts: EtlOptions::default() }
    }

    // -------- Builder methods --------
    pub fn include_username(mut self, yes: bool) -> Self { self.opts = self.opts.with_include_username(yes); self }
    pub fn reply_ordering(mut self, ordering: ReplyOrdering) -> Self { self.opts = self.opts.with_reply_ordering(ordering); self }
    pub fn probe_timeout(mut self, timeout: Duration) -> Self { self.opts = self.opts.with_probe_timeout(timeout); self }
    pub fn parallelism(mut self, threads: usize) -> Self { self.opts = self.opts.with_parallelism(threads); self }
    pub fn progress(mut self, yes: bool) -> Self { self.opts = self.opts.with_progress(yes); self }
    pub fn progress_label(mut self, label: impl Into<String>) -> Self { self.opts = self.opts.with_progress_label(label); self }
    pub fn pretty_json(mut self, yes: bool) -> Self { self.opts = self.opts.with_pretty_json(yes); self }

    /// Canonicalize, dedupe and probe one batch of raw links. The probe
    /// client is built once here and shared by reference across workers;
    /// its construction is the only fallible step.
    pub fn resolve_links<I, S>(&self, raws: I) -> Result<LinkResolution>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let probe = Probe::new(self.opts.probe_timeout).context("configuring reachability probe")?;
        Ok(self.resolve_links_with(raws, |u| probe.is_reachable(u)))
    }

    /// Same resolution policy with a caller-supplied probe (tests, dry runs).
    pub fn resolve_links_with<I, S, P>(&self, raws: I, probe: P) -> LinkResolution
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        P: Fn(&str) -> bool + Sync,
    {
        init_tracing_once();
        self.install_pool();

        let deduped = dedupe(raws);
        if !deduped.malformed.is_empty() {
            tracing::warn!(count = deduped.malformed.len(), urls = ?deduped.malformed, "ignored malformed links");
        }
        if !deduped.duplicates.is_empty() {
            tracing::info!(count = deduped.duplicates.len(), urls = ?deduped.duplicates, "duplicates removed");
        }

        let pb = if self.opts.progress {
            let label = self.opts.progress_label.as_deref().unwrap_or("Checking reachability");
            Some(make_count_progress(deduped.cleaned.len() as u64, label))
        } else {
            None
        };

        let res = partition_with(deduped, |u| {
            let ok = probe(u);
            if let Some(pb) = &pb {
                pb.inc(1);
            }
            ok
        });
        if let Some(pb) = pb {
            pb.finish_with_message("reachability done");
        }

        if !res.unreachable.is_empty() {
            tracing::warn!(count = res.unreachable.len(), urls = ?res.unreachable, "unreachable links skipped");
        }
        if res.is_empty() {
            tracing::info!("no reachable videos; nothing to do");
        }
        res
    }

    /// Parse independent raw dumps in parallel, one per video. Output order
    /// matches input order (results collected by index, no shared state).
    pub fn parse_dumps(&self, dumps: &[(String, String)]) -> Vec<VideoComments> {
        init_tracing_once();
        self.install_pool();

        let pb = if self.opts.progress {
            let label = self.opts.progress_label.as_deref().unwrap_or("Parsing dumps");
            Some(make_count_progress(dumps.len() as u64, label))
        } else {
            None
        };

        let videos: Vec<VideoComments> = dumps
            .par_iter()
            .map(|(url, raw)| {
                let records = parse_dump(raw, &self.opts.parse);
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                VideoComments { url: url.clone(), records }
            })
            .collect();

        if let Some(pb) = pb {
            pb.finish_with_message("parsing done");
        }
        videos
    }

    /// Parse dumps and write one anonymized `video_<n>.json` array per video
    /// into `out_dir`. Returns the per-video summaries for the final report.
    pub fn process_to_dir(&self, dumps: &[(String, String)], out_dir: &Path) -> Result<Vec<VideoSummary>> {
        let videos = self.parse_dumps(dumps);
        fs::create_dir_all(out_dir).with_context(|| format!("create {}", out_dir.display()))?;

        let mut summaries = Vec::with_capacity(videos.len());
        for (idx, video) in videos.iter().enumerate() {
            let file_name = format!("video_{}.json", idx + 1);
            let path: PathBuf = out_dir.join(&file_name);
            write_json_array(&path, &video.records, self.opts.pretty_json)?;
            tracing::info!(file = %file_name, url = %video.url, comments = video.records.len(), "wrote video dataset");
            summaries.push(VideoSummary {
                file_name,
                video_url: video.url.clone(),
                comment_count: video.records.len(),
            });
        }
        Ok(summaries)
    }

    fn install_pool(&self) {
        if let Some(n) = self.opts.parallelism {
            if n > 0 {
                rayon::ThreadPoolBuilder::new().num_threads(n).build_global().ok();
            }
        }
    }
}

impl Default for CommentEtl {
    fn default() -> Self {
        Self::new()
    }
}
