use saliency_map::image::io::{load_rgb_image, save_grayscale_f32, save_grayscale_u8, write_json_file};
use saliency_map::normalize::range_normalize;
use saliency_map::{SaliencyEngine, SaliencyParams, SaliencyReport};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct SaliencyToolConfig {
    pub input: PathBuf,
    /// Optional second frame; when present the motion channel sees real flow.
    #[serde(default)]
    pub next_frame: Option<PathBuf>,
    #[serde(default)]
    pub params: SaliencyParams,
    pub output: SaliencyOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct SaliencyOutputConfig {
    pub dir: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
    #[serde(default = "default_true")]
    pub save_channels: bool,
    #[serde(default = "default_true")]
    pub save_conspicuity: bool,
}

fn default_true() -> bool {
    true
}

pub fn load_config(path: &Path) -> Result<SaliencyToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let mut engine = SaliencyEngine::with_params(config.params.clone());
    let first = load_rgb_image(&config.input)?;
    engine.set_source_image(first);
    engine.create_saliency_map().map_err(|e| e.to_string())?;

    if let Some(next) = &config.next_frame {
        let second = load_rgb_image(next)?;
        if second.width() != engine.r().width() || second.height() != engine.r().height() {
            log::warn!(
                "saliency_demo: next frame {} has a different size, motion will be zero",
                next.display()
            );
        }
        engine.set_source_image(second);
        engine.create_saliency_map().map_err(|e| e.to_string())?;
    }

    let dir = &config.output.dir;
    let saliency_path = dir.join("saliency.png");
    save_grayscale_u8(engine.saliency_map(), &saliency_path)?;

    if config.output.save_channels {
        for (name, plane) in [
            ("r", engine.r()),
            ("g", engine.g()),
            ("b", engine.b()),
            ("i", engine.i()),
        ] {
            save_grayscale_u8(plane, &dir.join(format!("channel_{name}.png")))?;
        }
    }

    if config.output.save_conspicuity {
        let maps = engine
            .conspicuity_maps()
            .ok_or("Engine produced no conspicuity maps")?;
        for (label, map) in maps.labeled() {
            save_grayscale_f32(&range_normalize(map), &dir.join(format!("conspicuity_{label}.png")))?;
        }
    }

    let report = engine.report().ok_or("Engine produced no report")?;
    if let Some(path) = &config.output.report_json {
        let summary = SaliencySummary {
            input: config.input.display().to_string(),
            next_frame: config.next_frame.as_ref().map(|p| p.display().to_string()),
            saliency_image: saliency_path.display().to_string(),
            report,
        };
        write_json_file(path, &summary)?;
        println!("Saved report to {}", path.display());
    }

    println!(
        "Saved {}x{} saliency map to {} ({:.3} ms)",
        report.input.width,
        report.input.height,
        saliency_path.display(),
        report.timings.total_ms
    );

    Ok(())
}

fn usage() -> String {
    "Usage: saliency_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaliencySummary<'a> {
    input: String,
    next_frame: Option<String>,
    saliency_image: String,
    report: &'a SaliencyReport,
}
