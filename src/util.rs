use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

static INIT_ONCE: std::sync::Once = std::sync::Once::new();
pub fn init_tracing_once() {
    INIT_ONCE.call_once(|| {
        let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let _ = tracing_subscriber::fmt().with_env_filter(env_filter).try_init();
    });
}

/// Atomically replace `dest` with `tmp`. Falls back to copy+remove when the
/// rename fails (e.g. tmp and dest live on different filesystems).
pub fn replace_file_atomic(tmp: &Path, dest: &Path) -> Result<()> {
    match fs::rename(tmp, dest) {
        Ok(_) => Ok(()),
        Err(_) => {
            fs::copy(tmp, dest)
                .with_context(|| format!("copy {} -> {}", tmp.display(), dest.display()))?;
            fs::remove_file(tmp).with_context(|| format!("remove {}", tmp.display()))?;
            Ok(())
        }
    }
}
