//! macOS のシステムフォント取得

use anyhow::Result;
use std::path::PathBuf;

/// macOS のシステムフォント候補を返す
pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    Ok(vec![
        // San Francisco（macOS 標準）
        PathBuf::from("/System/Library/Fonts/SFNS.ttf"),
        // fallback
        PathBuf::from("/System/Library/Fonts/Supplemental/Arial.ttf"),
        PathBuf::from("/Library/Fonts/Arial.ttf"),
        PathBuf::from("/System/Library/Fonts/Geneva.ttf"),
    ])
}
