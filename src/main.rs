use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use highlight_pdf::pagesize::{self, PageOrientation, PageSize};
use highlight_pdf::{Cm, Font, HighlightPdf, Info, TextFormat};
use log::{error, info};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "highlight-pdf",
    about = "Render a text file as highlighted paragraphs on a PDF page, with an image in the bottom corners",
    version
)]
struct Cli {
    /// UTF-8 text file, one paragraph per line
    #[arg(short, long)]
    text: PathBuf,

    /// Image drawn in both bottom corners of the page
    #[arg(short, long)]
    image: PathBuf,

    /// TrueType or OpenType font to set the text in
    #[arg(short, long)]
    font: PathBuf,

    /// Output file path
    #[arg(short, long, default_value = "highlighted.pdf")]
    output: PathBuf,

    /// Margin around the text, in centimetres
    #[arg(short, long, default_value_t = 2.0)]
    margin: f32,

    /// Font size in points, also used as the line height
    #[arg(short = 's', long, default_value_t = 12)]
    font_size: u16,

    /// Paper size
    #[arg(short, long, value_enum, default_value_t = Paper::Letter)]
    paper: Paper,

    /// Turn the page sideways
    #[arg(long)]
    landscape: bool,

    /// Document title
    #[arg(long)]
    title: Option<String>,

    /// Document author
    #[arg(long)]
    author: Option<String>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Paper {
    Letter,
    Legal,
    Tabloid,
    A3,
    A4,
    A5,
}

impl Paper {
    fn size(self) -> PageSize {
        match self {
            Paper::Letter => pagesize::LETTER,
            Paper::Legal => pagesize::LEGAL,
            Paper::Tabloid => pagesize::TABLOID,
            Paper::A3 => pagesize::A3,
            Paper::A4 => pagesize::A4,
            Paper::A5 => pagesize::A5,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    info!(
        "rendering {} with {} into {}",
        cli.text.display(),
        cli.image.display(),
        cli.output.display()
    );

    match render(&cli) {
        Ok(()) => {
            info!("wrote {}", cli.output.display());
            Ok(())
        }
        Err(e) => {
            error!("rendering failed: {e:?}");
            Err(e)
        }
    }
}

fn render(cli: &Cli) -> Result<()> {
    let font_bytes = std::fs::read(&cli.font)
        .with_context(|| format!("failed to read font {}", cli.font.display()))?;
    let font = Font::load(font_bytes)
        .with_context(|| format!("failed to parse font {}", cli.font.display()))?;
    let format = TextFormat::new(Cm(cli.margin), cli.font_size, font)?;

    let text = File::open(&cli.text)
        .with_context(|| format!("failed to open {}", cli.text.display()))?;
    let image = File::open(&cli.image)
        .with_context(|| format!("failed to open {}", cli.image.display()))?;

    let page_size = if cli.landscape {
        cli.paper.size().landscape()
    } else {
        cli.paper.size()
    };

    let mut document_info = Info::new();
    if let Some(title) = &cli.title {
        document_info = document_info.title(title);
    }
    if let Some(author) = &cli.author {
        document_info = document_info.author(author);
    }

    let pdf = HighlightPdf::new()
        .text_format(format)
        .sources(text, image)
        .page_size(page_size)
        .info(document_info)
        .render()
        .context("failed to build the document")?;

    std::fs::write(&cli.output, pdf)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;
    Ok(())
}
