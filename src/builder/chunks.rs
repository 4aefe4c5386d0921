//! Locale partitioning
//!
//! Splits a platform's locale list into N ordered, contiguous, non-empty
//! chunks. Locales are sorted lexicographically first, so the result is
//! independent of the input order; earlier chunks absorb the remainder
//! (5 locales / 2 chunks → 3 + 2).

use crate::core::error::{ConfigError, GraphResult};

/// One contiguous partition of a platform's locale list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleChunk {
  /// Platform this chunk belongs to
  pub platform: String,
  /// 1-based chunk index; there is never a chunk 0
  pub index: u32,
  /// Locales assigned to this chunk, in sorted order
  pub locales: Vec<String>,
}

/// Partition a locale list into `chunk_count` chunks
///
/// Chunk sizes are `ceil(n/k)` for the first `n mod k` chunks and
/// `floor(n/k)` for the rest. A chunk count of zero, or one that would force
/// an empty chunk, is a configuration error.
pub fn partition(platform: &str, locales: &[String], chunk_count: u32) -> GraphResult<Vec<LocaleChunk>> {
  let mut sorted: Vec<String> = locales.to_vec();
  sorted.sort();
  sorted.dedup();

  if chunk_count == 0 || chunk_count as usize > sorted.len() {
    return Err(
      ConfigError::ChunkCount {
        platform: platform.to_string(),
        chunks: chunk_count,
        locales: sorted.len(),
      }
      .into(),
    );
  }

  let n = sorted.len();
  let k = chunk_count as usize;
  let base = n / k;
  let remainder = n % k;

  let mut chunks = Vec::with_capacity(k);
  let mut start = 0;
  for i in 0..k {
    let size = if i < remainder { base + 1 } else { base };
    chunks.push(LocaleChunk {
      platform: platform.to_string(),
      index: (i + 1) as u32,
      locales: sorted[start..start + size].to_vec(),
    });
    start += size;
  }

  Ok(chunks)
}
