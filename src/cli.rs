use crate::constants::DEFAULT_QUALITY;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "imgpress",
    about = "Batch image compressor that writes compressed copies alongside the originals",
    long_about = "imgpress compresses one or more raster images at a chosen quality level and \
                  writes each result next to its original as <name>_compressed.<ext>. \
                  Inputs can be files, directories, or glob patterns; the batch runs on a \
                  background worker while progress, per-file failures, and a final summary \
                  are reported as it goes.",
    version,
    after_help = "EXAMPLES:\n  \
    imgpress photo.jpg\n  \
    imgpress -q 60 ./vacation\n  \
    imgpress -r -q 85 \"scans/*.png\" extra.bmp"
)]
pub struct Args {
    #[arg(
        required = true,
        help = "Input image files, directories, or glob patterns",
        long_help = "Input image files, directories, or glob patterns, processed in the \
                     order given. Directories and patterns expand to the accepted image \
                     types (jpg, jpeg, png, bmp); explicit file paths are passed through \
                     as-is."
    )]
    pub inputs: Vec<String>,

    #[arg(
        short = 'q',
        long,
        default_value_t = DEFAULT_QUALITY,
        help = "Compression quality (1-100, default: 80)",
        long_help = "Compression quality from 1 (smallest files) to 100 (highest fidelity). \
                     For PNG output the quality selects the optimizer effort tier instead \
                     of a lossy setting."
    )]
    pub quality: u8,

    #[arg(
        short = 'r',
        long,
        help = "Descend into subdirectories when an input is a directory"
    )]
    pub recursive: bool,

    #[arg(long, help = "Suppress progress and summary output")]
    pub quiet: bool,

    #[arg(
        short = 'v',
        long,
        conflicts_with = "quiet",
        help = "Print a line per compressed file in the final summary"
    )]
    pub verbose: bool,
}
