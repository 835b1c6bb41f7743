use anyhow::{Context, Result};
use orinium_text::engine::bridge::text::{FallbackGlyphMetrics, GlyphMetricsProvider};
use orinium_text::engine::renderer_model::RenderDefaults;
use orinium_text::engine::richtext::{GlyphHeightMeasurement, TextLayoutEngine};
use orinium_text::platform::renderer::PlatformGlyphMetrics;
use std::env;
use std::sync::Arc;

/// usage: orinium_text <text> [wrap_width] [font_size]
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let text = args
        .get(1)
        .cloned()
        .unwrap_or_else(|| "The <color 255 80 80>quick</> brown fox\n<center>jumped</>".to_string())
        .replace("\\n", "\n");
    let wrap_width = args
        .get(2)
        .map(|w| w.parse::<f32>())
        .transpose()
        .context("wrap_width must be a number")?;
    let font_size = args
        .get(3)
        .map(|s| s.parse::<f32>())
        .transpose()
        .context("font_size must be a number")?
        .unwrap_or(16.0);

    let metrics: Arc<dyn GlyphMetricsProvider> = match PlatformGlyphMetrics::new(font_size) {
        Ok(m) => Arc::new(m),
        Err(e) => {
            log::warn!("No usable font ({e}), falling back to heuristic metrics");
            Arc::new(FallbackGlyphMetrics::new(font_size))
        }
    };

    let mut engine = TextLayoutEngine::new(metrics);
    engine.initialize_layout(&text, GlyphHeightMeasurement::FullHeight);
    engine.set_wrap(wrap_width);
    if let Err(e) = engine.run() {
        log::error!("{e}");
    }

    let layout = engine.layout();
    let (w, h) = layout.text_size();
    println!("size: {w} x {h}, lines: {}", layout.line_count());
    for block in layout.blocks() {
        println!(
            "  [{:>3}..{:>3}] {:<8} {:?}{}",
            block.start_index,
            block.end_index(),
            if block.newline { "newline" } else { "" },
            layout.block_str(block),
            if block.skip { " (skip)" } else { "" },
        );
    }
    println!("selection index max: {}", layout.selection_index_max());

    let commands = engine.render((0.0, 0.0), &RenderDefaults::default());
    println!("draw commands: {}", commands.len());

    Ok(())
}
