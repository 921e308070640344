use ytetl::normalize;

const ID: &str = "cpcfdwnf4M8";

/// All three accepted link shapes carrying the same 11-char id collapse to
/// the identical canonical URL; extra query parameters are discarded.
#[test]
fn three_shapes_one_identity() {
    let expected = format!("https://www.youtube.com/watch?v={ID}");
    let shapes = [
        format!("https://youtu.be/{ID}?si=XYZ"),
        format!("https://www.youtube.com/shorts/{ID}"),
        format!("https://www.youtube.com/watch?v={ID}"),
        format!("https://www.youtube.com/watch?v={ID}&t=42s"),
    ];
    for s in &shapes {
        let canon = normalize(s).unwrap_or_else(|| panic!("rejected {s}"));
        assert_eq!(canon.as_str(), expected);
        assert_eq!(canon.video_id(), ID);
    }
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    let canon = normalize(&format!("  https://youtu.be/{ID}  ")).unwrap();
    assert_eq!(canon.video_id(), ID);
}

#[test]
fn host_is_case_insensitive() {
    assert!(normalize(&format!("https://WWW.YOUTUBE.COM/watch?v={ID}")).is_some());
    assert!(normalize(&format!("https://YOUTU.BE/{ID}")).is_some());
}

#[test]
fn rejects_empty_and_blank() {
    assert!(normalize("").is_none());
    assert!(normalize("   ").is_none());
}

#[test]
fn rejects_non_youtube_host() {
    assert!(normalize("https://vimeo.com/123456789").is_none());
    assert!(normalize(&format!("https://example.com/watch?v={ID}")).is_none());
}

#[test]
fn rejects_bad_id_length() {
    // 10 and 12 characters both fail the full-match rule.
    assert!(normalize("https://youtu.be/abcdefghij").is_none());
    assert!(normalize("https://youtu.be/abcdefghijkl").is_none());
    assert!(normalize("https://www.youtube.com/watch?v=abcdefghij").is_none());
}

#[test]
fn rejects_bad_id_characters() {
    assert!(normalize("https://youtu.be/abc$efghijk").is_none());
}

#[test]
fn rejects_other_youtube_paths() {
    assert!(normalize("https://www.youtube.com/playlist?list=PLx").is_none());
    assert!(normalize("https://www.youtube.com/@somechannel").is_none());
    assert!(normalize("https://www.youtube.com/").is_none());
}

#[test]
fn rejects_watch_without_v_param() {
    assert!(normalize("https://www.youtube.com/watch?t=42").is_none());
}

#[test]
fn rejects_scheme_less_input() {
    // Not parseable as an absolute URL, so there is no host to inspect.
    assert!(normalize(&format!("youtu.be/{ID}")).is_none());
}
