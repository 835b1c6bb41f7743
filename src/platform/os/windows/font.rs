//! Windows のシステムフォント取得

use anyhow::Result;
use std::path::PathBuf;

/// システムフォント候補を返す
///
/// fontdue は .ttc のコレクションを読めないため .ttf のみ
pub fn system_font_candidates() -> Result<Vec<PathBuf>> {
    let fonts_dir = std::env::var("WINDIR")
        .map(|w| PathBuf::from(w).join("Fonts"))
        .unwrap_or_else(|_| PathBuf::from(r"C:\Windows\Fonts"));

    Ok(["segoeui.ttf", "arial.ttf", "tahoma.ttf", "verdana.ttf"]
        .iter()
        .map(|name| fonts_dir.join(name))
        .collect())
}
