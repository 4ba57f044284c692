use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use log::info;
use tbf_pack::{
    default_output_path, write_container, write_preview, Atlas, Charset, FontdueRasterizer,
    GlyphExtractor, PreviewFormat, PreviewGrid,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Convert an outline font to a TRAMPBALLFONT bitmap font")]
struct Cli {
    /// Input font path (TTF or OTF)
    font: PathBuf,
    /// Nominal size in pixels, used for both axes
    #[arg(short, long, default_value_t = 16, value_parser = clap::value_parser!(u32).range(1..))]
    size: u32,
    /// Output file path [default: font path with a .tbf extension]
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Also write an XPM preview of the glyph sheet to <output>.xpm
    #[arg(short = 'x', long, default_value_t = false)]
    create_xpm: bool,
    /// Also write a BMP preview of the glyph sheet to <output>.bmp
    #[arg(short = 'b', long, default_value_t = false)]
    create_bmp: bool,
}

impl Cli {
    fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| default_output_path(&self.font))
    }

    fn preview_formats(&self) -> Vec<PreviewFormat> {
        let mut formats = Vec::new();
        if self.create_xpm {
            formats.push(PreviewFormat::Xpm);
        }
        if self.create_bmp {
            formats.push(PreviewFormat::Bmp);
        }
        formats
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    convert(&cli)
}

fn convert(cli: &Cli) -> Result<()> {
    let charset = Charset::printable_ascii();
    let output = cli.output_path();

    let rasterizer = FontdueRasterizer::open(&cli.font)
        .with_context(|| format!("extraction failed for {:?}", cli.font))?;

    let progress = ProgressBar::new(charset.len() as u64);
    progress.set_style(
        ProgressStyle::with_template(
            "{spinner} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} glyphs",
        )?
        .progress_chars("=> "),
    );
    let glyphs = GlyphExtractor::new(&rasterizer, charset, cli.size)
        .extract_with(|_| progress.inc(1))
        .with_context(|| format!("extraction failed for {:?}", cli.font))?;
    progress.finish_and_clear();

    let atlas = Atlas::pack(charset, &glyphs)
        .with_context(|| format!("packing failed for {:?} at size {}", cli.font, cli.size))?;

    let encoding = write_container(&output, &atlas, cli.size)
        .with_context(|| format!("encoding failed for {:?}", output))?;
    info!("{:?} -> {:?} ({:?})", cli.font, output, encoding);

    let formats = cli.preview_formats();
    if !formats.is_empty() {
        let grid = PreviewGrid::from_atlas(&atlas);
        for format in formats {
            write_preview(&output, &grid, format)
                .with_context(|| format!("preview failed for {:?}", output))?;
        }
    }

    Ok(())
}
