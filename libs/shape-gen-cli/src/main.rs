//! `shape-gen`: generate a primitive 3D model from a photo or a text prompt.

mod args;

use anyhow::{Context, Result};
use args::{Command, GenerateArgs, Source};
use serde::Serialize;
use shape_gen::{ModelGenerator, ShapeId};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Summary of one generation, printed on success.
#[derive(Debug, Serialize)]
struct Report {
    shape: ShapeId,
    enhanced_prompt: Option<String>,
    output: PathBuf,
    preview: Option<PathBuf>,
    vertices: usize,
    faces: usize,
}

fn main() -> Result<()> {
    let command = args::parse(std::env::args().skip(1).collect())?;

    match command {
        Command::Help => {
            print!("{}", args::USAGE);
            Ok(())
        }
        Command::Shapes => {
            init_tracing(false);
            print_shapes();
            Ok(())
        }
        Command::Generate(args) => {
            init_tracing(args.verbose);
            run(args)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: GenerateArgs) -> Result<()> {
    let generator = ModelGenerator::new(args.config);

    if let Some(dir) = args.out.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("creating output directory {}", dir.display()))?;
    }

    let model = match &args.source {
        Source::Text(prompt) => generator
            .generate_text_to_file(prompt, &args.out)
            .with_context(|| format!("generating model for {prompt:?}"))?,
        Source::Image(path) => generator
            .generate_image_to_file(path, &args.out)
            .with_context(|| format!("generating model from {}", path.display()))?,
    };

    if let Some(preview) = &args.preview {
        generator
            .visualize(&model.mesh)?
            .save_svg(preview)
            .context("writing preview")?;
    }

    let report = Report {
        shape: model.classification.shape,
        enhanced_prompt: model.classification.enhanced_prompt.clone(),
        output: args.out.clone(),
        preview: args.preview.clone(),
        vertices: model.mesh.vertex_count(),
        faces: model.mesh.triangle_count(),
    };
    debug!(?report, "generation finished");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        if let Some(prompt) = &report.enhanced_prompt {
            println!("Prompt:   {prompt}");
        }
        println!("Shape:    {}", report.shape);
        println!("Mesh:     {} vertices, {} faces", report.vertices, report.faces);
        println!("Model:    {}", report.output.display());
        if let Some(preview) = &report.preview {
            println!("Preview:  {}", preview.display());
        }
        println!("3D model generated successfully!");
    }

    Ok(())
}

fn print_shapes() {
    let generator = ModelGenerator::default();
    let classifier = generator.classifier();

    println!("Keyword table (first match wins):");
    for rule in classifier.rules() {
        println!("  {:<9} {}", rule.shape(), rule.keywords().join(", "));
    }
    println!("  {:<9} (no keyword matched)", classifier.fallback());
    println!("  {:<9} (any image)", ShapeId::Cube);
}
