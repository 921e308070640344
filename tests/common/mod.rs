#![allow(dead_code)]

/// One well-formed entry (the 4 header lines + body) for a `[COMMENT]` or
/// `[REPLY]` sub-block. `meta` is the raw metadata line, e.g.
/// `"3 days ago|like:12|reply:4"`.
pub fn entry(marker: &str, username: &str, meta: &str, body: &[&str]) -> String {
    let mut s = String::new();
    s.push_str(marker);
    s.push('\n');
    s.push_str(username);
    s.push('\n');
    s.push_str(&format!("https://www.youtube.com/@{username}\n"));
    s.push_str(&format!("https://www.youtube.com/watch?v=abcdefghijk&lc={username}\n"));
    s.push_str(meta);
    s.push('\n');
    for line in body {
        s.push_str(line);
        s.push('\n');
    }
    s
}

/// A parent block with no `Replies:` section.
pub fn parent_block(username: &str, meta: &str, body: &[&str]) -> String {
    entry("[COMMENT]", username, meta, body)
}

/// A parent block followed by a `Replies:` section holding the given
/// pre-rendered `[REPLY]` entries.
pub fn parent_with_replies(username: &str, meta: &str, body: &[&str], replies: &[String]) -> String {
    let mut s = parent_block(username, meta, body);
    s.push_str("Replies:\n");
    for r in replies {
        s.push_str(r);
    }
    s
}

pub fn reply_entry(username: &str, meta: &str, body: &[&str]) -> String {
    entry("[REPLY]", username, meta, body)
}

/// Join blocks into one dump string with the `#####` sentinel between them,
/// mirroring what the extension emits.
pub fn wrap_dump(blocks: &[String]) -> String {
    let mut s = String::new();
    for b in blocks {
        s.push_str("#####\n");
        s.push_str(b);
    }
    s.push_str("#####\n");
    s
}
