//! Link set resolution: canonicalize, dedupe, then probe reachability.

use crate::canonical::{normalize, CanonicalUrl};
use crate::probe::Probe;
use ahash::AHashSet;
use rayon::prelude::*;

/// Outcome of resolving one input batch. The four sequences are disjoint and
/// together account for every input exactly once: `malformed` holds the
/// original raw strings, the other three hold canonical forms in first-seen
/// order. Built once per batch run, read-only afterward.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkResolution {
    pub malformed: Vec<String>,
    pub duplicates: Vec<String>,
    pub reachable: Vec<String>,
    pub unreachable: Vec<String>,
}

impl LinkResolution {
    /// The explicit no-work state: nothing survived to scrape.
    pub fn is_empty(&self) -> bool {
        self.reachable.is_empty()
    }

    pub fn total(&self) -> usize {
        self.malformed.len() + self.duplicates.len() + self.reachable.len() + self.unreachable.len()
    }
}

pub(crate) struct Deduped {
    pub malformed: Vec<String>,
    pub duplicates: Vec<String>,
    pub cleaned: Vec<String>,
}

/// Canonicalize and dedupe in input order. First-seen copy wins; later
/// occurrences of the same canonical identity land in `duplicates`.
pub(crate) fn dedupe<I, S>(raws: I) -> Deduped
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen: AHashSet<CanonicalUrl> = AHashSet::new();
    let mut malformed = Vec::new();
    let mut duplicates = Vec::new();
    let mut cleaned = Vec::new();

    for raw in raws {
        let raw = raw.as_ref();
        match normalize(raw) {
            None => malformed.push(raw.to_string()),
            Some(canon) => {
                if seen.contains(&canon) {
                    duplicates.push(canon.into_string());
                } else {
                    cleaned.push(canon.as_str().to_string());
                    seen.insert(canon);
                }
            }
        }
    }

    Deduped { malformed, duplicates, cleaned }
}

/// Probe every cleaned URL exactly once, fanning out on the rayon pool.
/// Verdicts are collected by index, so `reachable` keeps first-seen order
/// regardless of completion order.
pub(crate) fn partition_with<P>(deduped: Deduped, probe: P) -> LinkResolution
where
    P: Fn(&str) -> bool + Sync,
{
    let Deduped { malformed, duplicates, cleaned } = deduped;

    let verdicts: Vec<bool> = cleaned.par_iter().map(|u| probe(u)).collect();

    let mut reachable = Vec::new();
    let mut unreachable = Vec::new();
    for (url, ok) in cleaned.into_iter().zip(verdicts) {
        if ok {
            reachable.push(url);
        } else {
            unreachable.push(url);
        }
    }

    LinkResolution { malformed, duplicates, reachable, unreachable }
}

/// Resolve a batch with a caller-supplied probe function. Never fails for
/// any input shape; rejection paths fill the report buckets instead.
pub fn resolve_with<I, S, P>(raws: I, probe: P) -> LinkResolution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: Fn(&str) -> bool + Sync,
{
    partition_with(dedupe(raws), probe)
}

/// Resolve a batch using the real HTTP probe.
pub fn resolve<I, S>(raws: I, probe: &Probe) -> LinkResolution
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    resolve_with(raws, |u| probe.is_reachable(u))
}
