use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

const LOG_ENV: &str = "BAGEL_TEE_LOG";

#[derive(Parser, Debug)]
#[command(name = "bagel-tee", version)]
struct Cli {
    /// Extra directory of .ttf/.otf/.ttc fonts (overrides BAGEL_TEE_FONT_DIR).
    #[arg(long, global = true)]
    font_dir: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the one-line variant title.
    Summary(OrderArgs),
    /// Print the compiled ingredient list as JSON.
    Compile(OrderArgs),
    /// Print computed layout parameters as JSON.
    Layout(LayoutArgs),
    /// Render the live preview to a PNG.
    Preview(PreviewArgs),
    /// Render the 3600x4800 print PNG.
    Export(ExportArgs),
    /// Export and print the cart line-item JSON.
    Cart(CartArgs),
}

#[derive(Args, Debug)]
struct OrderArgs {
    /// Order JSON. The default order is used when omitted.
    #[arg(long)]
    order: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct BackgroundArgs {
    /// Mockup image drawn behind the text (contain fit).
    #[arg(long, conflicts_with = "solid")]
    background: Option<PathBuf>,

    /// Flat background color, e.g. #FFFFFF.
    #[arg(long)]
    solid: Option<String>,
}

#[derive(Args, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    order: OrderArgs,

    #[arg(long, value_enum, default_value_t = ModeChoice::Preview)]
    mode: ModeChoice,

    /// Canvas width; defaults to 550 (preview) or 3600 (export).
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height; defaults to 733 (preview) or 4800 (export).
    #[arg(long)]
    height: Option<u32>,
}

#[derive(Args, Debug)]
struct PreviewArgs {
    #[command(flatten)]
    order: OrderArgs,

    #[command(flatten)]
    background: BackgroundArgs,

    #[arg(long, default_value_t = PREVIEW_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = PREVIEW_HEIGHT)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct ExportArgs {
    #[command(flatten)]
    order: OrderArgs,

    #[command(flatten)]
    background: BackgroundArgs,

    /// Output PNG path; defaults to bagel-order-<name>-<millis>.png in the current directory.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct CartArgs {
    #[command(flatten)]
    order: OrderArgs,

    /// Write the payload here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeChoice {
    Preview,
    Export,
}

const PREVIEW_WIDTH: u32 = 550;
const PREVIEW_HEIGHT: u32 = 733;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let font_dir = cli.font_dir;
    match cli.cmd {
        Command::Summary(args) => cmd_summary(args),
        Command::Compile(args) => cmd_compile(args),
        Command::Layout(args) => cmd_layout(args),
        Command::Preview(args) => cmd_preview(args, font_dir),
        Command::Export(args) => cmd_export(args, font_dir),
        Command::Cart(args) => cmd_cart(args, font_dir),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_order(args: &OrderArgs) -> anyhow::Result<bagel_tee::Order> {
    let Some(path) = &args.order else {
        return Ok(bagel_tee::Order::default());
    };
    let f = File::open(path).with_context(|| format!("open order '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(f))
        .with_context(|| format!("parse order JSON '{}'", path.display()))
}

fn settings(
    background: &BackgroundArgs,
    font_dir: Option<PathBuf>,
) -> anyhow::Result<bagel_tee::RenderSettings> {
    let background = match (&background.background, &background.solid) {
        (Some(path), _) => {
            bagel_tee::Background::Image(bagel_tee::ImageSource::Path(path.clone()))
        }
        (None, Some(hex)) => bagel_tee::Background::Solid(bagel_tee::Rgb8::from_hex(hex)?),
        (None, None) => bagel_tee::Background::Transparent,
    };
    Ok(bagel_tee::RenderSettings {
        background,
        font_dir,
    })
}

fn ensure_parent(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    Ok(())
}

fn now_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

fn cmd_summary(args: OrderArgs) -> anyhow::Result<()> {
    let order = read_order(&args)?;
    println!("{}", bagel_tee::summary(&order));
    Ok(())
}

fn cmd_compile(args: OrderArgs) -> anyhow::Result<()> {
    let order = read_order(&args)?;
    let list = bagel_tee::compile(&order);
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}

fn cmd_layout(args: LayoutArgs) -> anyhow::Result<()> {
    let order = read_order(&args.order)?;
    let (mode, default_w, default_h) = match args.mode {
        ModeChoice::Preview => (bagel_tee::RenderMode::Preview, PREVIEW_WIDTH, PREVIEW_HEIGHT),
        ModeChoice::Export => (
            bagel_tee::RenderMode::Export,
            bagel_tee::EXPORT_WIDTH,
            bagel_tee::EXPORT_HEIGHT,
        ),
    };
    let canvas = bagel_tee::Canvas::new(
        args.width.unwrap_or(default_w),
        args.height.unwrap_or(default_h),
    )?;

    let list = bagel_tee::compile(&order);
    let layout = bagel_tee::compute_layout(&list, canvas, mode, order.has_name());
    println!("{}", serde_json::to_string_pretty(&layout)?);
    Ok(())
}

fn cmd_preview(args: PreviewArgs, font_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let order = read_order(&args.order)?;
    let canvas = bagel_tee::Canvas::new(args.width, args.height)?;
    let mut preview = bagel_tee::LivePreview::new(canvas, settings(&args.background, font_dir)?)?;
    preview.on_order_changed(&order)?;

    let bytes = bagel_tee::encode_png(preview.surface())?;
    ensure_parent(&args.out)?;
    std::fs::write(&args.out, bytes)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_export(args: ExportArgs, font_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let order = read_order(&args.order)?;
    let image = bagel_tee::export_png(&order, &settings(&args.background, font_dir)?)?;

    let out = args
        .out
        .unwrap_or_else(|| PathBuf::from(bagel_tee::export_file_name(&order, now_ms())));
    ensure_parent(&out)?;
    std::fs::write(&out, &image.bytes).with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {} ({}x{})", out.display(), image.width, image.height);
    Ok(())
}

fn cmd_cart(args: CartArgs, font_dir: Option<PathBuf>) -> anyhow::Result<()> {
    let order = read_order(&args.order)?;
    let exporter = bagel_tee::Exporter::new(bagel_tee::RenderSettings {
        background: bagel_tee::Background::Transparent,
        font_dir,
    });
    let timestamp_ms = u64::try_from(now_ms()).context("timestamp out of range")?;
    let item = bagel_tee::CartLineItem::build(&order, Some(&exporter), timestamp_ms)?;
    let json = item.to_json()?;

    match args.out {
        Some(out) => {
            ensure_parent(&out)?;
            std::fs::write(&out, json).with_context(|| format!("write '{}'", out.display()))?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}
