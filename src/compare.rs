// Compare pipeline: load both snapshots, extract, diff

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::routes::diff::{ComparisonResult, diff};
use crate::routes::extract::extract;
use crate::routes::parser::{RawDocument, load_document};
use std::path::PathBuf;
use tokio::task;

/// Load and compare the two snapshots named in `config`.
///
/// Both documents must decode; if either fails nothing is compared, since
/// diffing one table against nothing would report every route as changed.
pub async fn compare(config: &Config) -> AppResult<ComparisonResult> {
    let (pre_doc, post_doc) = tokio::try_join!(
        load(config.pre.clone()),
        load(config.post.clone())
    )?;

    let pre = extract(&pre_doc, &config.filter, config.entries);
    let post = extract(&post_doc, &config.filter, config.entries);
    tracing::info!(
        "Extracted {} pre and {} post entries (vrf: {}, entries: {:?})",
        pre.len(),
        post.len(),
        config.filter,
        config.entries
    );

    let result = diff(&pre, &post);
    if result.is_empty() {
        tracing::info!("No differences between pre and post");
        return Ok(result);
    }
    tracing::info!(
        "{} entries only in pre, {} only in post",
        result.only_in_pre.len(),
        result.only_in_post.len()
    );
    Ok(result)
}

async fn load(path: PathBuf) -> AppResult<RawDocument> {
    tracing::debug!("Loading {}", path.display());
    task::spawn_blocking(move || load_document(&path))
        .await
        .map_err(|e| AppError::Task(e.to_string()))?
}
