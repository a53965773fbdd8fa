//! # Briefprint CLI
//!
//! Command-line interface for receipt documents.
//!
//! ## Usage
//!
//! ```bash
//! # Print a sample briefing
//! briefprint demo
//!
//! # Show it as a text frame instead
//! briefprint --preview demo
//!
//! # Print wrapped text under a header
//! briefprint text --header "Note" "Water the plants before leaving"
//!
//! # Print a route map from an encoded polyline, or save it as PNG
//! briefprint route '_p~iF~ps|U_ulLnnqC_mqNvxq`@'
//! briefprint route --png route.png '_p~iF~ps|U_ulLnnqC_mqNvxq`@'
//!
//! # QR codes, photos and icons
//! briefprint qr https://example.com
//! briefprint photo --png dithered.png cat.jpg
//! briefprint icon --weather 501
//!
//! # Use a different printer profile or device
//! briefprint --config kitchen.json --device /dev/ttyUSB0 demo
//! ```
//!
//! Set `RUST_LOG=debug` to see buffer sizes and transport writes.

use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};

use briefprint::{
    BriefprintError, PrinterConfig,
    document::{HardwareSink, Sequencer, Sink},
    preview::PreviewSink,
    protocol::text::Alignment,
    render::{
        bitmap::Bitmap,
        dither, icons, qr,
        route::{DEFAULT_MAX_HEIGHT, RouteRasterizer},
    },
    stats,
    transport::{DEFAULT_DEVICE, DeviceTransport},
};

/// Sample ride used by `demo`
const DEMO_POLYLINE: &str = "_p~iF~ps|U_ulLnnqC_mqNvxq`@";

/// Briefprint - receipt printer document utility
#[derive(Parser, Debug)]
#[command(name = "briefprint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Printer device path
    #[arg(long, global = true, default_value = DEFAULT_DEVICE)]
    device: PathBuf,

    /// Render a text preview to stdout instead of printing
    #[arg(long, global = true)]
    preview: bool,

    /// Printer profile (JSON)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print a sample briefing exercising every element
    Demo,

    /// Print word-wrapped text
    Text {
        /// Text to print
        text: String,

        /// Optional header above the text
        #[arg(long)]
        header: Option<String>,
    },

    /// Print a route map from an encoded polyline
    Route {
        /// Encoded polyline
        polyline: String,

        /// Save the map as PNG instead of printing
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Print a QR code
    Qr {
        /// Text or URL to encode
        data: String,

        /// Save the code as PNG instead of printing
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Print a dithered photo
    Photo {
        /// Image file (PNG, JPEG, ...)
        path: PathBuf,

        /// Save the dithered result as PNG instead of printing
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },

    /// Print a built-in icon (omit the name to list icons)
    Icon {
        /// Icon name
        name: Option<String>,

        /// Pick the icon for a weather condition code instead
        #[arg(long, conflicts_with = "name")]
        weather: Option<u16>,

        /// Save the icon as PNG instead of printing
        #[arg(long, value_name = "FILE")]
        png: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), BriefprintError> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => PrinterConfig::from_json_file(path)?,
        None => PrinterConfig::default(),
    };

    match &cli.command {
        Commands::Demo => {
            let mut doc = open_document(&cli, config);
            demo(&mut doc)?;
            finish(&cli, doc)
        }

        Commands::Text { text, header } => {
            let mut doc = open_document(&cli, config);
            doc.init();
            if let Some(header) = header {
                doc.print_header(header);
            }
            doc.print_wrapped(text).feed_and_cut();
            finish(&cli, doc)
        }

        Commands::Route { polyline, png } => {
            let rasterizer = RouteRasterizer::new(config.image_width_dots, DEFAULT_MAX_HEIGHT);
            let Some(map) = rasterizer.render_polyline(polyline)? else {
                println!("Route has no extent, nothing to draw.");
                return Ok(());
            };
            print_bitmap(&cli, config, &map, png.as_deref())
        }

        Commands::Qr { data, png } => {
            let code = qr::qr_bitmap(data)?;
            print_bitmap(&cli, config, &code, png.as_deref())
        }

        Commands::Photo { path, png } => {
            let photo = dither::load_photo(path, config.image_width_dots as u32)?;
            print_bitmap(&cli, config, &photo, png.as_deref())
        }

        Commands::Icon { name, weather, png } => {
            let icon = match (name, weather) {
                (Some(name), _) => icons::by_name(name).ok_or_else(|| {
                    BriefprintError::Image(format!(
                        "Unknown icon '{}'. Run without a name to list icons.",
                        name
                    ))
                })?,
                (None, Some(code)) => icons::weather_icon(Some(*code)),
                (None, None) => {
                    println!("Available icons:");
                    for name in icons::list_names() {
                        println!("  {}", name);
                    }
                    return Ok(());
                }
            };
            print_bitmap(&cli, config, &icon.bitmap(), png.as_deref())
        }
    }
}

/// Sequencer for the selected backend.
fn open_document(cli: &Cli, config: PrinterConfig) -> Sequencer<Box<dyn Sink>> {
    let sink: Box<dyn Sink> = if cli.preview {
        Box::new(PreviewSink::new(io::stdout(), config.columns))
    } else {
        Box::new(HardwareSink::new(DeviceTransport::new(&cli.device), &config))
    };
    Sequencer::new(sink, config)
}

fn finish(cli: &Cli, mut doc: Sequencer<Box<dyn Sink>>) -> Result<(), BriefprintError> {
    doc.flush()?;
    if !cli.preview {
        println!("Printed successfully!");
    }
    Ok(())
}

/// Print a single centered bitmap, or save it when `png` is given.
fn print_bitmap(
    cli: &Cli,
    config: PrinterConfig,
    bitmap: &Bitmap,
    png: Option<&Path>,
) -> Result<(), BriefprintError> {
    if let Some(path) = png {
        save_png(path, bitmap)?;
        println!(
            "Saved {}x{} image to {}",
            bitmap.width(),
            bitmap.height(),
            path.display()
        );
        return Ok(());
    }

    let mut doc = open_document(cli, config);
    doc.init().set_alignment(Alignment::Center);
    doc.print_image(bitmap)?;
    doc.set_alignment(Alignment::Left).feed_and_cut();
    finish(cli, doc)
}

/// Sample morning briefing.
fn demo<S: Sink>(doc: &mut Sequencer<S>) -> Result<(), BriefprintError> {
    let today = chrono::Local::now().date_naive();

    doc.init()
        .print_header("MORNING BRIEF")
        .set_alignment(Alignment::Center)
        .print_line(&today.format("%A, %B %-d").to_string())
        .set_alignment(Alignment::Left);

    doc.print_section_title("WEATHER");
    doc.print_image(&icons::weather_icon(Some(500)).bitmap())?;
    doc.print_line("Light rain, 14\u{b0}C \u{2013} clearing by noon")
        .print_leader("High / Low", "18\u{b0} / 9\u{b0}")
        .print_leader("Sunset", "7:42 PM");

    doc.print_section_title("LAST RIDE");
    doc.print_leader("Distance", &stats::format_distance(42195.0))
        .print_leader("Moving Time", &stats::format_duration(5130))
        .print_leader("Avg Speed", &stats::format_speed(8.2))
        .print_leader("Elevation", &stats::format_elevation(312.4));
    if let Some(pace) = stats::format_pace(3.4) {
        doc.print_leader("Avg Pace", &pace);
    }
    if let Some(map) = RouteRasterizer::new(doc.config().image_width_dots, DEFAULT_MAX_HEIGHT)
        .render_polyline(DEMO_POLYLINE)?
    {
        doc.set_alignment(Alignment::Center);
        doc.print_image(&map)?;
        doc.set_alignment(Alignment::Left);
    }

    doc.print_section_title("THIS WEEK");
    doc.print_line(&stats::date_range_label(today, 7))
        .set_underline(true)
        .print_line("3 rides, 1 run")
        .set_underline(false)
        .print_wrapped(
            "Consistency beats intensity \u{2014} an easy spin today keeps the streak alive \
             without costing tomorrow\u{2019}s long run.",
        )
        .print_divider('=');

    doc.set_alignment(Alignment::Center);
    doc.print_image(&qr::qr_bitmap("https://example.com/briefing")?)?;
    doc.set_alignment(Alignment::Left).feed_and_cut();
    Ok(())
}

/// Save a bitmap as a black-on-white PNG image
fn save_png(path: &Path, bitmap: &Bitmap) -> Result<(), BriefprintError> {
    use image::{GrayImage, Luma};

    let img = GrayImage::from_fn(bitmap.width() as u32, bitmap.height() as u32, |x, y| {
        let is_black = bitmap.pixel(x as usize, y as usize);
        Luma([if is_black { 0u8 } else { 255u8 }])
    });

    img.save(path)
        .map_err(|e| BriefprintError::Image(format!("Failed to save PNG: {}", e)))?;

    Ok(())
}
