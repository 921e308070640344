#[path = "common/mod.rs"]
mod common;

use common::*;
use std::fs;
use ytetl::{parse_dump, write_json_array, write_ndjson, CommentEtl, CommentRecord, ParseOptions};

fn sample_records() -> Vec<CommentRecord> {
    let dump = wrap_dump(&[parent_with_replies(
        "alice",
        "3 days ago|like:12|reply:1",
        &["parent body"],
        &[reply_entry("bob", "2 days ago|like:3", &["reply body"])],
    )]);
    parse_dump(&dump, &ParseOptions::default())
}

/// A written JSON array round-trips into the same records, and parents carry
/// no `parent_id` key at all in the serialized form.
#[test]
fn json_array_round_trip() {
    let records = sample_records();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("video_1.json");

    write_json_array(&path, &records, true).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let back: Vec<CommentRecord> = serde_json::from_str(&text).unwrap();
    assert_eq!(back, records);

    let raw: serde_json::Value = serde_json::from_str(&text).unwrap();
    let arr = raw.as_array().unwrap();
    assert!(arr[0].get("parent_id").is_none());
    assert_eq!(arr[1]["parent_id"], records[0].comment_url);
}

#[test]
fn ndjson_one_object_per_line() {
    let records = sample_records();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("video_1.ndjson");

    write_ndjson(&path, &records).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), records.len());
    for (line, record) in lines.iter().zip(&records) {
        let back: CommentRecord = serde_json::from_str(line).unwrap();
        assert_eq!(&back, record);
    }
}

/// The batch driver writes one anonymized video_<n>.json per dump and
/// reports matching summaries, in input order.
#[test]
fn process_to_dir_writes_numbered_files() {
    let dump_a = wrap_dump(&[parent_block("alice", "1 day ago|like:1", &["a"])]);
    let dump_b = wrap_dump(&[
        parent_block("bob", "2 days ago|like:2", &["b"]),
        parent_block("carol", "3 days ago|like:3", &["c"]),
    ]);
    let dumps = vec![
        ("https://www.youtube.com/watch?v=aaaaaaaaaaa".to_string(), dump_a),
        ("https://www.youtube.com/watch?v=bbbbbbbbbbb".to_string(), dump_b),
    ];

    let dir = tempfile::tempdir().unwrap();
    let etl = CommentEtl::new().progress(false);
    let summaries = etl.process_to_dir(&dumps, dir.path()).unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].file_name, "video_1.json");
    assert_eq!(summaries[0].comment_count, 1);
    assert_eq!(summaries[1].file_name, "video_2.json");
    assert_eq!(summaries[1].comment_count, 2);
    assert_eq!(summaries[1].video_url, dumps[1].0);

    let back: Vec<CommentRecord> =
        serde_json::from_str(&fs::read_to_string(dir.path().join("video_2.json")).unwrap()).unwrap();
    assert_eq!(back.len(), 2);
    assert_eq!(back[0].username, "bob");
    assert_eq!(back[1].username, "carol");
}

/// parse_dumps keeps input order and shares no state across videos.
#[test]
fn parse_dumps_preserves_input_order() {
    let dumps: Vec<(String, String)> = (0..8)
        .map(|i| {
            let user = format!("user{i}");
            (
                format!("https://www.youtube.com/watch?v=aaaaaaaaaa{i}"),
                wrap_dump(&[parent_block(&user, "1 day ago", &["x"])]),
            )
        })
        .collect();

    let etl = CommentEtl::new().progress(false);
    let videos = etl.parse_dumps(&dumps);

    assert_eq!(videos.len(), dumps.len());
    for (i, v) in videos.iter().enumerate() {
        assert_eq!(v.url, dumps[i].0);
        assert_eq!(v.records[0].username, format!("user{i}"));
    }
}
