use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use sketchshapes::contour::ShapeKind;
use sketchshapes::sampler::{ReplayToken, SamplerParams, ShapeSample, ShapeSampler};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

#[derive(Parser)]
#[command(name = "sketchshapes")]
#[command(about = "Synthetic hand-drawn shape dataset generator")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Circle,
    Triangle,
    Square,
    All,
}

impl KindArg {
    fn kinds(self) -> Vec<ShapeKind> {
        match self {
            KindArg::Circle => vec![ShapeKind::Circle],
            KindArg::Triangle => vec![ShapeKind::Triangle],
            KindArg::Square => vec![ShapeKind::Square],
            KindArg::All => ShapeKind::ALL.to_vec(),
        }
    }
}

#[derive(Subcommand)]
enum Action {
    /// Generate labeled contour samples into a directory (one JSON per
    /// sample plus a manifest)
    Generate {
        #[arg(long, value_enum, default_value = "all")]
        kind: KindArg,
        /// Samples per shape class
        #[arg(long, default_value_t = 20)]
        count: usize,
        #[arg(long, default_value_t = 2025)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Regenerate one sample from its replay token and print it to stdout
    Replay {
        #[arg(long, value_enum)]
        kind: KindArg,
        #[arg(long)]
        seed: u64,
        #[arg(long)]
        index: u64,
    },
}

#[derive(Serialize)]
struct ManifestEntry {
    file: String,
    label: &'static str,
    seed: u64,
    index: u64,
}

#[derive(Serialize)]
struct Manifest {
    seed: u64,
    count_per_kind: usize,
    size_range: [f64; 2],
    irregularity_range: [f64; 2],
    circle_segments: usize,
    position_offset: f64,
    samples: Vec<ManifestEntry>,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Generate {
            kind,
            count,
            seed,
            out,
        } => generate(kind, count, seed, &out),
        Action::Replay { kind, seed, index } => replay(kind, seed, index),
    }
}

fn generate(kind: KindArg, count: usize, seed: u64, out: &Path) -> Result<()> {
    std::fs::create_dir_all(out)
        .with_context(|| format!("creating output directory {}", out.display()))?;

    let params = SamplerParams::default();
    let mut entries = Vec::new();
    for kind in kind.kinds() {
        let mut gen = ShapeSampler::new(kind, params.clone(), seed)?;
        tracing::info!(kind = kind.label(), count, seed, "generate");
        for i in 0..count {
            let sample = gen.generate_next()?;
            let file = format!("{}_{i}.json", kind.label());
            let path = out.join(&file);
            std::fs::write(&path, serde_json::to_vec_pretty(&sample_json(&sample))?)
                .with_context(|| format!("writing {}", path.display()))?;
            entries.push(ManifestEntry {
                file,
                label: kind.label(),
                seed: sample.replay.seed,
                index: sample.replay.index,
            });
        }
    }

    let manifest = Manifest {
        seed,
        count_per_kind: count,
        size_range: [params.size_min, params.size_max],
        irregularity_range: [params.irregularity_min, params.irregularity_max],
        circle_segments: params.circle_segments,
        position_offset: params.position_offset,
        samples: entries,
    };
    let manifest_path = out.join("manifest.json");
    std::fs::write(&manifest_path, serde_json::to_vec_pretty(&manifest)?)?;
    tracing::info!(
        samples = manifest.samples.len(),
        manifest = %manifest_path.display(),
        "done"
    );
    Ok(())
}

fn replay(kind: KindArg, seed: u64, index: u64) -> Result<()> {
    let kinds = kind.kinds();
    if kinds.len() != 1 {
        bail!("replay needs a single shape kind, not 'all'");
    }
    let gen = ShapeSampler::new(kinds[0], SamplerParams::default(), seed)?;
    let sample = gen.regenerate(&ReplayToken { seed, index })?;
    println!("{}", serde_json::to_string_pretty(&sample_json(&sample))?);
    Ok(())
}

/// Renderer hand-off: label, color, and the scene-space point loop.
fn sample_json(sample: &ShapeSample) -> serde_json::Value {
    let scene = sample.scene_contour();
    let points: Vec<[f64; 2]> = scene.points.iter().map(|p| [p.x, p.y]).collect();
    let c = sample.spec.color;
    serde_json::json!({
        "label": sample.spec.kind.label(),
        "replay": { "seed": sample.replay.seed, "index": sample.replay.index },
        "color": [c.r, c.g, c.b, c.a],
        "size": sample.spec.size,
        "irregularity": sample.spec.irregularity,
        "rotation_deg": sample.spec.rotation_deg,
        "offset": [sample.spec.offset.x, sample.spec.offset.y],
        "closed": true,
        "points": points,
    })
}
