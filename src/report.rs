use crate::request::{CompressionOutcome, CompressionResult};

/// Formats a size already expressed in KB, promoting to MB past 1024.
pub fn format_size_kb(kb: f64) -> String {
    if kb >= 1024.0 {
        format!("{:.2} MB", kb / 1024.0)
    } else {
        format!("{:.2} KB", kb)
    }
}

/// One line per compressed file, for verbose output.
pub fn render_result_line(result: &CompressionResult) -> String {
    format!(
        "📦 {}: {} -> {} ({:.2}%)",
        result.file_name,
        format_size_kb(result.original_kb),
        format_size_kb(result.compressed_kb),
        result.ratio
    )
}

/// The completion summary the shell prints once per batch. Covers only
/// the successful subset; failures are reported individually as they
/// happen.
pub fn render_summary(outcome: &CompressionOutcome) -> String {
    let mut lines = vec![
        "📊 Compression Summary:".to_string(),
        format!("  📁 Files compressed: {}", outcome.success_count()),
        format!(
            "  📊 Total original size: {}",
            format_size_kb(outcome.total_original_kb())
        ),
        format!(
            "  📈 Total compressed size: {}",
            format_size_kb(outcome.total_compressed_kb())
        ),
        format!("  🎯 Overall compression ratio: {:.2}%", outcome.overall_ratio()),
    ];

    if outcome.failure_count() > 0 {
        lines.push(format!("  ⚠️  Failed files: {}", outcome.failure_count()));
    }

    lines.join("\n")
}
