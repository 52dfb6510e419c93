// RustPixel
// copyright zipxing@hotmail.com 2022～2025

/// pixel_fb demo tool...
///
/// Paints a gradient on a SoftScreen, fills every cell with a random color,
/// then swings the viewport around a circle. Each frame is presented to a
/// double-buffered framebuffer and, with the image feature, saved as PNG.
///
/// Usage:
/// pixel-demo
/// pixel-demo --frames 90 --out frames
/// pixel-demo --config screen.toml --format rgba8 --seed 42
///
use clap::{value_parser, Arg, ArgMatches, Command};
use log::{error, info, warn};
use pixel_fb::config::{PixelFormat, ScreenConfig};
use pixel_fb::prelude::*;
use pixel_fb::util::Rand;
use pixel_fb::PIXEL_FB_VERSION;
use std::path::PathBuf;

fn make_parser() -> ArgMatches {
    Command::new("pixel-demo")
        .version(PIXEL_FB_VERSION)
        .author("zipxing@hotmail.com")
        .about("Renders a panning soft screen frame by frame")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Screen config toml, defaults are used when absent"),
        )
        .arg(
            Arg::new("frames")
                .long("frames")
                .short('n')
                .value_parser(value_parser!(u32))
                .default_value("360")
                .help("Number of frames around the circle"),
        )
        .arg(
            Arg::new("out")
                .long("out")
                .short('o')
                .default_value("frames")
                .help("Output folder for png frames"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["rgba8", "rgb565be"])
                .help("Pixel format, overrides the config file"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .value_parser(value_parser!(u64))
                .help("Seed for cell colors, current time when absent"),
        )
        .get_matches()
}

struct DemoArgs {
    cfg: ScreenConfig,
    frames: u32,
    out: PathBuf,
    seed: Option<u64>,
}

fn main() {
    let matches = make_parser();
    let mut cfg = match matches.get_one::<String>("config") {
        Some(path) => match ScreenConfig::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("pixel-demo: {}", e);
                std::process::exit(1);
            }
        },
        None => ScreenConfig::default(),
    };
    if let Some(fmt) = matches.get_one::<String>("format") {
        match fmt.parse::<PixelFormat>() {
            Ok(f) => cfg.format = f,
            Err(e) => {
                eprintln!("pixel-demo: {}", e);
                std::process::exit(1);
            }
        }
    }

    let log_dir_err = PathBuf::from(&cfg.log_file)
        .parent()
        .and_then(|dir| std::fs::create_dir_all(dir).err());
    if let Err(e) = pixel_fb::log::init_log(pixel_fb::log::parse_level(&cfg.log_level), &cfg.log_file) {
        eprintln!("pixel-demo: {}", e);
    }
    if let Some(e) = log_dir_err {
        warn!("cannot create log folder for {}: {}", cfg.log_file, e);
    }

    let args = DemoArgs {
        frames: matches.get_one::<u32>("frames").copied().unwrap_or(360),
        out: PathBuf::from(
            matches
                .get_one::<String>("out")
                .map(|s| s.as_str())
                .unwrap_or("frames"),
        ),
        seed: matches.get_one::<u64>("seed").copied(),
        cfg,
    };

    let result = match args.cfg.format {
        PixelFormat::Rgba8 => run::<Rgba8>(&args),
        PixelFormat::Rgb565Be => run::<Rgb565Be>(&args),
    };
    match result {
        Ok(n) => println!("pixel-demo: {} frames, {} pixels presented", args.frames, n),
        Err(e) => {
            error!("demo failed: {}", e);
            eprintln!("pixel-demo: {}", e);
            std::process::exit(1);
        }
    }
}

/// Runs the demo in pixel format `P`, returning the number of pixels flushed.
fn run<P: Pixel>(args: &DemoArgs) -> pixel_fb::Result<usize> {
    let cfg = &args.cfg;
    info!("pixel-demo {} format {}", PIXEL_FB_VERSION, cfg.format);
    let mut screen: SoftScreen<P> = SoftScreen::new(cfg.cell, cfg.viewport, cfg.canvas)?;
    let canvas = screen.canvas();

    // vertical gray ramp over the whole canvas
    let h = canvas.dy().max(1);
    for y in canvas.min.y..canvas.max.y {
        let v = ((y - canvas.min.y) * 255 / h) as u8;
        for x in canvas.min.x..canvas.max.x {
            screen.set(x, y, &Rgba8::new(v, v, v));
        }
    }

    let mut rng = Rand::new();
    match args.seed {
        Some(seed) => rng.srand(seed),
        None => rng.srand_now(),
    }
    let (cols, rows) = screen.grid();
    for row in 0..rows {
        for col in 0..cols {
            let c = Rgba8::new(rng.rand_u8(), rng.rand_u8(), rng.rand_u8());
            let mut cell = screen.cell_at(col, row);
            let b = cell.bounds();
            cell.fill(b, &c);
        }
    }
    info!("filled {}x{} cells", cols, rows);

    #[cfg(feature = "image")]
    std::fs::create_dir_all(&args.out)?;

    let vp = screen.viewport();
    let panel: FlatBuffer<P> = FlatBuffer::empty(Rect::from_size(0, 0, vp.dx(), vp.dy()));
    let mut fb = Framebuffer::with_double_buffer(panel)?;
    let mut presented = 0usize;
    let frames = args.frames.max(1);
    for i in 0..args.frames {
        let snap = screen.snapshot();
        fb.blit(&snap, Point::zero());
        presented += fb.dirty().area();
        fb.flush();

        #[cfg(feature = "image")]
        pixel_fb::render::png::save_png(args.out.join(format!("grid-frame-{:03}.png", i)), &screen)?;

        let theta = i as f64 * std::f64::consts::TAU / frames as f64;
        screen.set_viewport(Point::new(
            (canvas.dx() as f64 * theta.cos()) as i32,
            (canvas.dy() as f64 * theta.sin()) as i32,
        ));
    }
    #[cfg(not(feature = "image"))]
    info!("image feature off, {:?} left untouched", args.out);
    info!("presented {} pixels in {} frames", presented, args.frames);
    Ok(presented)
}
