use anyhow::Result;
use clap::{Parser, ValueEnum};
use pdf_compose::{ComposeOptions, ImageId, SourceImage, compose, plan_pages, probe_dimensions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pdfc", about = "Compose images into a paginated PDF", version)]
struct Cli {
    /// Input image file(s) - one page each, in the given order
    #[arg(short, long, required = true, num_args = 1..)]
    input: Vec<PathBuf>,

    /// Output PDF file
    #[arg(short, long)]
    output: PathBuf,

    /// Page size
    #[arg(long, default_value = "a4", value_enum)]
    page_size: PageSizeArg,

    /// Page orientation (ignored for auto page size)
    #[arg(long, default_value = "portrait", value_enum)]
    orientation: OrientationArg,

    /// Uniform page margin
    #[arg(long, default_value = "small", value_enum)]
    margin: MarginArg,

    /// Print the page layout, don't write a PDF
    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    A4,
    Letter,
    Auto,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum MarginArg {
    None,
    Small,
    Large,
}

impl From<PageSizeArg> for pdf_compose::PageSize {
    fn from(arg: PageSizeArg) -> Self {
        match arg {
            PageSizeArg::A4 => Self::A4,
            PageSizeArg::Letter => Self::Letter,
            PageSizeArg::Auto => Self::Auto,
        }
    }
}

impl From<OrientationArg> for pdf_compose::Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<MarginArg> for pdf_compose::Margin {
    fn from(arg: MarginArg) -> Self {
        match arg {
            MarginArg::None => Self::None,
            MarginArg::Small => Self::Small,
            MarginArg::Large => Self::Large,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut images = Vec::new();
    for (index, path) in cli.input.iter().enumerate() {
        let bytes = tokio::fs::read(path).await?;
        let display_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        images.push(SourceImage {
            id: ImageId(index as u64),
            bytes,
            display_name,
        });
    }

    let options = ComposeOptions {
        page_size: cli.page_size.into(),
        orientation: cli.orientation.into(),
        margin: cli.margin.into(),
        output_filename: cli
            .output
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| cli.output.display().to_string()),
    };

    if cli.dry_run {
        let mut dimensions = Vec::new();
        for image in &images {
            dimensions.push(probe_dimensions(image).await?);
        }
        let plans = plan_pages(&dimensions, &options)?;

        println!("Page layout:");
        for (index, plan) in plans.iter().enumerate() {
            println!(
                "  page {}: {:.1}x{:.1}mm, image {:.1}x{:.1}mm at ({:.1}, {:.1})",
                index + 1,
                plan.page_width_mm,
                plan.page_height_mm,
                plan.render_width_mm,
                plan.render_height_mm,
                plan.offset_x_mm,
                plan.offset_y_mm
            );
        }
        return Ok(());
    }

    let bytes = compose(&images, &options).await?;
    tokio::fs::write(&cli.output, bytes).await?;
    println!("Composed {} images → {}", images.len(), cli.output.display());

    Ok(())
}
