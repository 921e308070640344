use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use ytetl::{init_tracing_once, CommentEtl};

const DEFAULT_OUT_DIR: &str = "./processed-json-comment-files";

fn main() -> Result<()> {
    init_tracing_once();

    let mut urls: Vec<String> = Vec::new();
    let mut dumps_dir: Option<PathBuf> = None;
    let mut out_dir = PathBuf::from(DEFAULT_OUT_DIR);

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--dumps" => dumps_dir = args.next().map(PathBuf::from),
            "--out" => {
                if let Some(d) = args.next() {
                    out_dir = PathBuf::from(d);
                }
            }
            _ => urls.push(arg),
        }
    }

    if urls.is_empty() {
        eprintln!("usage: ytetl [--dumps <dir>] [--out <dir>] <url> [<url> ...]");
        return Ok(());
    }

    let etl = CommentEtl::new().progress(true);
    let res = etl.resolve_links(&urls)?;

    if !res.malformed.is_empty() {
        println!("Malformed URLs: {:?}", res.malformed);
    }
    if !res.duplicates.is_empty() {
        println!("Duplicates removed: {:?}", res.duplicates);
    }
    if !res.unreachable.is_empty() {
        println!("Unreachable skipped: {:?}", res.unreachable);
    }
    if res.is_empty() {
        println!("No valid videos to process.");
        return Ok(());
    }

    let Some(dir) = dumps_dir else {
        println!("Videos ready to scrape:");
        for u in &res.reachable {
            println!("  {u}");
        }
        return Ok(());
    };

    // Dump files (one per video, produced by the extension scraper) pair
    // positionally with the reachable URLs, sorted by file name.
    let mut files: Vec<PathBuf> = fs::read_dir(&dir)?
        .filter_map(|e| e.ok().map(|e| e.path()))
        .filter(|p| p.extension().map_or(false, |x| x == "txt"))
        .collect();
    files.sort();

    let mut dumps: Vec<(String, String)> = Vec::with_capacity(files.len());
    for (url, path) in res.reachable.iter().zip(files.iter()) {
        dumps.push((url.clone(), fs::read_to_string(path)?));
    }

    let summaries = etl.process_to_dir(&dumps, &out_dir)?;
    println!("\nVideos processed:");
    for s in &summaries {
        println!("{}: {} - {} comments", s.file_name, s.video_url, s.comment_count);
    }
    Ok(())
}
