//! Comment block parser: turns one raw extension dump into a flat forest of
//! parent/reply records.

use crate::config::{ParseOptions, ReplyOrdering};
use crate::record::CommentRecord;

const BLOCK_SENTINEL: &str = "#####";
const COMMENT_MARKER: &str = "[COMMENT]";
const REPLY_MARKER: &str = "[REPLY]";
const REPLIES_HEADING: &str = "Replies:";
const EDITED_FLAG: &str = "(edited)";

/// Parse one raw dump into records. Blocks without the `[COMMENT]` marker or
/// with an incomplete header are dropped silently — advertisement and other
/// boilerplate segments are expected noise, not errors. Pure function of its
/// input: re-parsing the same dump yields an identical sequence. Never
/// panics on partial data.
pub fn parse_dump(raw: &str, opts: &ParseOptions) -> Vec<CommentRecord> {
    let mut parents: Vec<CommentRecord> = Vec::new();
    let mut reply_groups: Vec<Vec<CommentRecord>> = Vec::new();

    for block in raw.split(BLOCK_SENTINEL) {
        if block.trim().is_empty() {
            continue;
        }
        if let Some((parent, replies)) = parse_block(block, opts) {
            parents.push(parent);
            reply_groups.push(replies);
        }
    }

    let mut out = Vec::with_capacity(parents.len() + reply_groups.iter().map(Vec::len).sum::<usize>());
    match opts.reply_ordering {
        ReplyOrdering::Interleaved => {
            for (parent, replies) in parents.into_iter().zip(reply_groups) {
                out.push(parent);
                out.extend(replies);
            }
        }
        ReplyOrdering::Grouped => {
            out.extend(parents);
            for replies in reply_groups {
                out.extend(replies);
            }
        }
    }
    out
}

/// One delimited block: a parent entry, optionally followed by a `Replies:`
/// section holding repeated `[REPLY]` sub-blocks.
fn parse_block(block: &str, opts: &ParseOptions) -> Option<(CommentRecord, Vec<CommentRecord>)> {
    let lines: Vec<&str> = block.lines().map(str::trim).collect();

    let start = lines.iter().position(|l| !l.is_empty())?;
    if !lines[start].contains(COMMENT_MARKER) {
        return None;
    }

    let replies_at = lines
        .iter()
        .enumerate()
        .skip(start + 1)
        .find(|(_, l)| l.starts_with(REPLIES_HEADING))
        .map(|(i, _)| i);
    let parent_end = replies_at.unwrap_or(lines.len());

    let parent = parse_entry(&lines[start + 1..parent_end], opts, None)?;

    let mut replies = Vec::new();
    if let Some(at) = replies_at {
        let tail = &lines[at + 1..];
        let marks: Vec<usize> = tail
            .iter()
            .enumerate()
            .filter(|(_, l)| l.contains(REPLY_MARKER))
            .map(|(i, _)| i)
            .collect();
        for (n, &m) in marks.iter().enumerate() {
            let end = marks.get(n + 1).copied().unwrap_or(tail.len());
            if let Some(reply) = parse_entry(&tail[m + 1..end], opts, Some(parent.comment_url.clone())) {
                replies.push(reply);
            }
        }
    }

    Some((parent, replies))
}

/// `lines` directly follow a `[COMMENT]`/`[REPLY]` marker line. The first
/// four non-blank lines are the fixed header (username, profile URL, comment
/// URL, metadata); everything after the metadata line is the body. An entry
/// with an incomplete header is discarded whole, never partially emitted.
fn parse_entry(lines: &[&str], opts: &ParseOptions, parent_id: Option<String>) -> Option<CommentRecord> {
    let mut header = [0usize; 4];
    let mut found = 0;
    for (i, l) in lines.iter().enumerate() {
        if l.is_empty() {
            continue;
        }
        header[found] = i;
        found += 1;
        if found == 4 {
            break;
        }
    }
    if found < 4 {
        return None;
    }

    let username = if opts.include_username {
        lines[header[0]].to_string()
    } else {
        String::new()
    };
    let profile_url = lines[header[1]].to_string();
    let comment_url = lines[header[2]].to_string();
    let (posted, edited, likes, replies) = parse_meta_line(lines[header[3]]);

    // Body keeps interior blank lines; leading/trailing blanks are stripped.
    let mut body = &lines[header[3] + 1..];
    while body.first().map_or(false, |l| l.is_empty()) {
        body = &body[1..];
    }
    while body.last().map_or(false, |l| l.is_empty()) {
        body = &body[..body.len() - 1];
    }
    let comment = body.join("\n");

    Some(CommentRecord {
        username,
        profile_url,
        comment_url,
        posted,
        edited,
        likes,
        replies,
        comment,
        parent_id,
    })
}

/// Metadata line: an `(edited)` flag anywhere in the line, then `|`-separated
/// segments. The first segment is the relative post time; `like:<int>` and
/// `reply:<int>` set the counters; unrecognized segments are ignored.
fn parse_meta_line(meta: &str) -> (String, bool, u64, u64) {
    let edited = meta.contains(EDITED_FLAG);
    let meta = if edited { meta.replace(EDITED_FLAG, "") } else { meta.to_string() };

    let mut likes = 0u64;
    let mut replies = 0u64;
    let mut parts = meta.split('|').map(str::trim);
    let posted = parts.next().unwrap_or("").to_string();
    for part in parts {
        if let Some(v) = part.strip_prefix("like:") {
            likes = v.trim().parse().unwrap_or(0);
        } else if let Some(v) = part.strip_prefix("reply:") {
            replies = v.trim().parse().unwrap_or(0);
        }
    }
    (posted, edited, likes, replies)
}
