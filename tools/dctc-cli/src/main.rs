//! dctc CLI - approximate images with a block DCT and measure the loss.

use anyhow::{ensure, Context, Result};
use clap::{ArgGroup, Parser, Subcommand, ValueEnum};
use dctc::{
    compress, mse, psnr, sweep, ColorChannels, Dimensions, Image, ReductionMode,
    SimilarityMetric, SweepMode, WindowedSsim,
};
use log::info;
use std::path::{Path, PathBuf};

/// Block-DCT image approximation and quality sweeps
#[derive(Parser)]
#[command(name = "dctc")]
#[command(version)]
#[command(about = "Approximate grayscale images by discarding DCT coefficients", long_about = None)]
#[command(after_help = "EXAMPLES:
    dctc compress -i photo.png -o approx.png --scale 2
    dctc compress -i photo.png -o approx.png --coefficients 6
    dctc sweep -i photo.png --mode coefficients --from 1 --to 64
    dctc gray -i photo.png -o gray.png

Set RUST_LOG=debug to trace the pipeline.")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress an image and write the reconstruction
    ///
    /// Color input is converted to grayscale first. Without --coefficients
    /// the coefficients are quantized with the JPEG luminance table times
    /// --scale (default 1).
    #[command(visible_alias = "c")]
    #[command(group(ArgGroup::new("reduction").args(["coefficients", "scale"])))]
    Compress {
        /// Input image file
        #[arg(short, long)]
        input: PathBuf,

        /// Output image file; the format follows the extension
        #[arg(short, long)]
        output: PathBuf,

        /// Keep this many zig-zag coefficients per block (1-64)
        #[arg(short = 'k', long)]
        coefficients: Option<usize>,

        /// Quantization table scale factor (> 0)
        #[arg(short, long)]
        scale: Option<f32>,
    },

    /// Print MSE, PSNR and SSIM over a range of parameters as CSV
    #[command(visible_alias = "s")]
    Sweep {
        /// Input image file
        #[arg(short, long)]
        input: PathBuf,

        /// Parameter to vary
        #[arg(short, long, default_value = "scale", value_enum)]
        mode: ModeArg,

        /// First parameter value
        #[arg(long, default_value_t = 1.0)]
        from: f32,

        /// Last parameter value (inclusive)
        #[arg(long, default_value_t = 5.0)]
        to: f32,

        /// Distance between parameter values
        #[arg(long, default_value_t = 1.0)]
        step: f32,
    },

    /// Convert an image to grayscale
    #[command(visible_alias = "g")]
    Gray {
        /// Input image file
        #[arg(short, long)]
        input: PathBuf,

        /// Output image file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Scale factor applied to the quantization table
    Scale,
    /// Number of zig-zag coefficients kept per block
    Coefficients,
}

impl From<ModeArg> for SweepMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Scale => SweepMode::ScaleFactor,
            ModeArg::Coefficients => SweepMode::CoefficientCount,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Compress {
            input,
            output,
            coefficients,
            scale,
        } => {
            let mode = match coefficients {
                Some(k) => ReductionMode::truncate(k),
                None => scale.map(ReductionMode::quantize).unwrap_or_default(),
            };
            run_compress(&input, &output, mode)
        }
        Commands::Sweep {
            input,
            mode,
            from,
            to,
            step,
        } => run_sweep(&input, mode.into(), &parameter_range(from, to, step)?),
        Commands::Gray { input, output } => {
            let image = load_image(&input)?.to_gray();
            save_image(&image, &output)
        }
    }
}

fn run_compress(input: &Path, output: &Path, mode: ReductionMode) -> Result<()> {
    let original = load_image(input)?.to_gray();
    info!(
        "Compressing {} ({}x{}) with {:?}",
        input.display(),
        original.width(),
        original.height(),
        mode
    );

    let approx = compress(&original, mode).context("Compression failed")?;
    save_image(&approx, output)?;

    let error = mse(&original, &approx)?;
    let ssim = WindowedSsim::default().similarity(&original, &approx)?;
    info!(
        "Wrote {}: MSE {:.3}, PSNR {:.3} dB, SSIM {:.4}",
        output.display(),
        error,
        psnr(error),
        ssim
    );
    Ok(())
}

fn run_sweep(input: &Path, mode: SweepMode, params: &[f32]) -> Result<()> {
    let image = load_image(input)?;
    info!(
        "Sweeping {} over {} values of {}",
        input.display(),
        params.len(),
        mode
    );

    let points = sweep(&image, mode, params).context("Sweep failed")?;

    println!("parameter,mse,psnr,ssim");
    for p in points {
        println!("{},{:.6},{:.6},{:.6}", p.parameter, p.mse, p.psnr, p.ssim);
    }
    Ok(())
}

/// `from, from + step, ...` up to and including `to`
fn parameter_range(from: f32, to: f32, step: f32) -> Result<Vec<f32>> {
    ensure!(step > 0.0, "--step must be positive, got {}", step);
    ensure!(to >= from, "--to ({}) must not be below --from ({})", to, from);

    let count = ((to - from) / step + 1e-4).floor() as usize;
    Ok((0..=count).map(|i| from + i as f32 * step).collect())
}

fn load_image(path: &Path) -> Result<Image> {
    let decoded =
        image::open(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let dimensions = Dimensions::new(decoded.width(), decoded.height());

    let image = if decoded.color().has_color() {
        Image::from_raw(dimensions, ColorChannels::RGB, decoded.to_rgb8().into_raw())?
    } else {
        Image::from_raw(dimensions, ColorChannels::Gray, decoded.to_luma8().into_raw())?
    };
    Ok(image)
}

fn save_image(image: &Image, path: &Path) -> Result<()> {
    image.ensure_gray()?;
    let buffer = image::GrayImage::from_raw(image.width(), image.height(), image.data().to_vec())
        .context("Image buffer does not match its dimensions")?;
    buffer
        .save(path)
        .with_context(|| format!("Failed to write {}", path.display()))
}
