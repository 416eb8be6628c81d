//! Local release acquisition from a directory of text (and PDF) files.

use std::path::{Path, PathBuf};

use anyhow::Context;
use pressai_core::CompaniesFile;
use pressai_sentiment::{find_date_in_text, ReleaseItem, YearMonth};

/// Build one `ReleaseItem` per regular file in `dir`, sorted by filename.
///
/// PDF files are listed with no text, since PDF extraction is not supported;
/// the pipeline skips them. Files that cannot be read are logged and left out.
///
/// # Errors
///
/// Returns an error if the directory itself cannot be listed.
pub(crate) fn load_local_releases(
    dir: &Path,
    companies: &CompaniesFile,
) -> anyhow::Result<Vec<ReleaseItem>> {
    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .with_context(|| format!("failed to list releases directory {}", dir.display()))?
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry.path()),
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "failed to read directory entry");
                None
            }
        })
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut items = Vec::with_capacity(paths.len());
    for path in paths {
        match release_from_path(&path, companies) {
            Ok(item) => items.push(item),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %format!("{e:#}"), "skipping unreadable release file");
            }
        }
    }

    tracing::info!(dir = %dir.display(), releases = items.len(), "loaded local releases");
    Ok(items)
}

fn release_from_path(path: &Path, companies: &CompaniesFile) -> anyhow::Result<ReleaseItem> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let company = companies
        .infer_from_filename(&filename)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    let url = path.display().to_string();

    if is_pdf(&filename) {
        tracing::debug!(path = %url, "PDF release listed without text");
        return Ok(ReleaseItem {
            url,
            title: filename,
            text: None,
            publish_date: None,
            company,
            is_local: true,
        });
    }

    let bytes = std::fs::read(path).with_context(|| format!("failed to read {url}"))?;
    let text = String::from_utf8_lossy(&bytes).into_owned();
    let publish_date = find_date_in_text(&filename).and_then(YearMonth::first_day);

    Ok(ReleaseItem {
        url,
        title: filename,
        text: Some(text),
        publish_date,
        company,
        is_local: true,
    })
}

fn is_pdf(filename: &str) -> bool {
    Path::new(filename)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"))
}
