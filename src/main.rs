use std::path::PathBuf;
use std::time::Duration;
use anyhow::{bail, Context};
use clap::Parser;
use raylib::prelude::*;
use tracing_subscriber::EnvFilter;

use showcase::booking::LogBooking;
use showcase::constants::*;
use showcase::content::Content;
use showcase::engine::Engine;
use showcase::header::Header;
use showcase::hero::HeroEngine;
use showcase::session::Session;
use showcase::testimonials::TestimonialEngine;
use showcase::texture_loader::load_sorted_image_paths;

/// Log filter used when `RUST_LOG` is unset or invalid
const DEFAULT_LOG_FILTER: &str = "info";

/// Catering showcase window
#[derive(Parser, Debug)]
#[command(name = "showcase")]
#[command(about = "Hero slider, testimonials and login header for a catering showcase")]
struct Args {
    /// Directory of slide images, used when the content file lists no slides
    images: Option<PathBuf>,

    /// TOML content file (slides, testimonials, booking)
    #[arg(long, short = 'c')]
    content: Option<PathBuf>,

    /// JSON file standing in for browser local storage
    #[arg(long, default_value = "local_storage.json")]
    session: PathBuf,

    /// Business name shown in the header
    #[arg(long, default_value = "Saffron & Sage Catering")]
    brand: String,

    #[arg(long, default_value_t = RENDER_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = RENDER_HEIGHT)]
    height: i32,

    #[arg(long, default_value_t = FPS)]
    fps: u32,

    #[arg(long)]
    fullscreen: bool,
}

/// Header, hero and testimonial areas for a screen of the given size.
fn layout(width: f32, height: f32) -> (Rectangle, Rectangle, Rectangle) {
    let header = HEADER_HEIGHT as f32;
    let hero_height = ((height - header) * 0.68).floor();
    (
        Rectangle::new(0.0, 0.0, width, header),
        Rectangle::new(0.0, header, width, hero_height),
        Rectangle::new(0.0, header + hero_height, width, height - header - hero_height),
    )
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let args = Args::parse();

    let mut content = match &args.content {
        Some(path) => Content::load(path)?,
        None => Content::default(),
    };
    if content.hero.slides.is_empty() {
        if let Some(dir) = &args.images {
            let paths = load_sorted_image_paths(dir)?;
            content.hero.slides = Content::slides_from_paths(&paths);
        }
    }
    if content.hero.slides.is_empty() {
        bail!("No hero slides: pass an image directory or a content file with [hero].slides");
    }
    tracing::info!(
        slides = content.hero.slides.len(),
        testimonials = content.testimonials.items.len(),
        "Starting showcase"
    );

    let (mut rl, thread) = raylib::init()
        .size(args.width, args.height)
        .title(&args.brand)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(args.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    if args.fullscreen {
        rl.toggle_fullscreen();
    }

    let mut header = Header::new(args.brand.clone(), Session::open(&args.session));
    let mut hero = HeroEngine::load(
        &mut rl,
        &thread,
        &content.hero,
        content.booking.clone(),
        Box::new(LogBooking::default()),
    )
    .context("failed to set up hero slider")?;
    let mut testimonials = if content.testimonials.items.is_empty() {
        tracing::info!("No testimonials configured");
        None
    } else {
        Some(TestimonialEngine::new(&content.testimonials).context("failed to set up testimonials")?)
    };

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = Duration::from_secs_f32(rl.get_frame_time().max(0.0));
        let (header_area, hero_area, testimonial_area) =
            layout(rl.get_screen_width() as f32, rl.get_screen_height() as f32);

        let mut engines: Vec<(&mut dyn Engine, Rectangle)> = vec![
            (&mut header as &mut dyn Engine, header_area),
            (&mut hero as &mut dyn Engine, hero_area),
        ];
        if let Some(t) = testimonials.as_mut() {
            engines.push((t as &mut dyn Engine, testimonial_area));
        }

        for (engine, area) in engines.iter_mut() {
            engine.handle_input(&rl, *area);
            engine.update(dt);
        }

        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        for (engine, area) in engines.iter() {
            engine.draw(&mut d, *area);
        }
    }

    tracing::info!("Showcase closed");
    Ok(())
}
