use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use drawing::config::Config;
use drawing::draw::{Circle, Color, Rectangle, Triangle, color};
use drawing::host::{HeadlessHost, Host};
use drawing::registry::ShapeRegistry;
use drawing::scene::{Scene, set_default_scene};
use drawing::surface::CairoSurface;
use drawing::surface::image::MAX_DIMENSION;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drawing")]
#[command(version, about = "Retained-mode 2D scene renderer")]
struct Cli {
    /// Write the rendered scene to this PNG file
    #[arg(long, short = 'o', value_name = "PNG")]
    output: Option<PathBuf>,

    /// Viewport width (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DIMENSION)))]
    width: Option<u32>,

    /// Viewport height (overrides config)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DIMENSION)))]
    height: Option<u32>,

    /// Read configuration from this file instead of ~/.config/drawing/config.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Add a shape by type name (repeatable); a demo scene is drawn when omitted
    #[arg(long = "shape", value_name = "NAME")]
    shapes: Vec<String>,

    /// Print the available shape types and exit
    #[arg(long, action = ArgAction::SetTrue)]
    list_shapes: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let registry = ShapeRegistry::with_builtin()
        .with_colors(config.shapes.fill(), config.shapes.border());

    if cli.list_shapes {
        for name in registry.names() {
            println!("{name}");
        }
        return Ok(());
    }

    let Some(output) = cli.output.as_ref() else {
        println!("drawing: Retained-mode 2D scene renderer");
        println!();
        println!("Usage:");
        println!("  drawing --output scene.png                 Render the demo scene");
        println!("  drawing --output scene.png --shape Circle  Render shapes by name");
        println!("  drawing --list-shapes                      List shape types");
        println!("  drawing --help                             Show help");
        return Ok(());
    };

    let mut host = HeadlessHost::new(config.surface.width, config.surface.height);
    let surface = CairoSurface::new(config.surface.width, config.surface.height)
        .context("Failed to create drawing surface")?;
    let scene = Scene::attach(surface, &mut host);
    if set_default_scene(scene.clone()).is_err() {
        log::warn!("Default scene already initialized");
    }

    if cli.shapes.is_empty() {
        populate_demo(&scene, config.shapes.fill(), config.shapes.border());
    } else {
        for name in &cli.shapes {
            registry
                .create(name, &scene)
                .with_context(|| format!("Cannot add shape '{name}'"))?;
        }
    }

    if cli.width.is_some() || cli.height.is_some() {
        let (current_width, current_height) = host.viewport_size();
        host.set_viewport(
            cli.width.unwrap_or(current_width),
            cli.height.unwrap_or(current_height),
        );
    }

    scene
        .with_surface_as(|surface: &CairoSurface| surface.write_png(output))
        .context("Scene is not backed by a raster surface")?
        .with_context(|| format!("Failed to write {}", output.display()))?;

    let (width, height) = scene.size();
    println!(
        "Wrote {}x{} scene with {} shape(s) to {}",
        width,
        height,
        scene.len(),
        output.display()
    );
    Ok(())
}

/// Builds the sample scene: a rectangle, a circle and a triangle, then
/// restyles them through their handles.
fn populate_demo(scene: &Scene, fill: Color, border: Color) {
    let rect = scene.add(Rectangle::new(40.0, 40.0, 160.0, 90.0).with_colors(fill, border));
    let circle = scene.add(Circle::new(300.0, 100.0, 40.0).with_colors(fill, border));
    let triangle = scene.add(Triangle::new(400.0, 200.0, 120.0, 160.0).with_colors(fill, border));

    rect.set_fill_color(color::YELLOW);
    circle.set_radius(60.0);
    circle.set_fill_color(color::BLUE);
    triangle.set_border_color(color::RED);
}
