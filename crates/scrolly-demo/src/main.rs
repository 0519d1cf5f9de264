// File: crates/scrolly-demo/src/main.rs
// Summary: Demo loads the asset dataset, plays a scroll script, and writes one chart frame per step.
//
// Usage: scrolly-demo [DATA] [--out DIR] [--config FILE] [--png] [--scroll id[:ratio],...]

use anyhow::{bail, Context, Result};
use scrolly_core::dataset::DEFAULT_DATA_PATH;
use scrolly_core::{
    load_wide_from_path, render_page, IntersectionEntry, RenderOptions, Scene, ScrollDriver, Step,
    SECTIONS,
};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Debug)]
struct Args {
    data: PathBuf,
    out_dir: PathBuf,
    config: Option<PathBuf>,
    png: bool,
    scroll: Option<String>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            data: PathBuf::from(DEFAULT_DATA_PATH),
            out_dir: PathBuf::from("target/out"),
            config: None,
            png: false,
            scroll: None,
        }
    }
}

fn parse_args(mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut args = Args::default();
    let mut positional = None;
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--out" => args.out_dir = it.next().context("--out needs a directory")?.into(),
            "--config" => args.config = Some(it.next().context("--config needs a file")?.into()),
            "--png" => args.png = true,
            "--scroll" => args.scroll = Some(it.next().context("--scroll needs a step list")?),
            s if s.starts_with("--") => bail!("unknown flag '{s}'"),
            _ if positional.is_none() => positional = Some(PathBuf::from(&arg)),
            _ => bail!("unexpected argument '{arg}'"),
        }
    }
    if let Some(p) = positional {
        args.data = p;
    }
    Ok(args)
}

/// `national,policy:0.6` → entries in order; a missing ratio means fully visible.
fn parse_scroll(spec: &str) -> Result<Vec<IntersectionEntry>> {
    spec.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|tok| -> Result<IntersectionEntry> {
            let (id, ratio) = match tok.split_once(':') {
                Some((id, r)) => {
                    let r: f64 = r.parse().with_context(|| format!("bad ratio in '{tok}'"))?;
                    (id, r)
                }
                None => (tok, 1.0),
            };
            Ok(IntersectionEntry::new(id, ratio))
        })
        .collect()
}

/// Reading top to bottom: each section scrolls fully into view, then out again.
fn default_scroll() -> Vec<IntersectionEntry> {
    SECTIONS
        .iter()
        .flat_map(|s| [IntersectionEntry::new(s.step.id(), 1.0), IntersectionEntry::new(s.step.id(), 0.0)])
        .collect()
}

fn write_frame(out_dir: &Path, name: &str, scene: &Scene, png: bool) -> Result<()> {
    let svg_path = out_dir.join(format!("{name}.svg"));
    scene
        .write_svg(&svg_path)
        .with_context(|| format!("writing {}", svg_path.display()))?;
    info!("Wrote {}", svg_path.display());
    if png {
        let png_path = svg_path.with_extension("png");
        scene
            .render_to_png(&png_path)
            .with_context(|| format!("writing {}", png_path.display()))?;
        info!("Wrote {}", png_path.display());
    }
    Ok(())
}

fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = parse_args(std::env::args().skip(1))?;
    let options = match &args.config {
        Some(path) => RenderOptions::from_json_file(path)
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None => RenderOptions::default(),
    };
    let script = match &args.scroll {
        Some(spec) => parse_scroll(spec)?,
        None => default_scroll(),
    };

    // A dataset that cannot be read or parsed leaves the page blank.
    let records = match load_wide_from_path(&args.data) {
        Ok(records) => records,
        Err(err) => {
            error!("failed to load '{}': {err}; nothing drawn", args.data.display());
            return Ok(());
        }
    };
    info!(years = records.len(), "Loaded {}", args.data.display());

    let mut driver = ScrollDriver::start(records, options);
    if let Err(err) = driver.view().ensure_data() {
        warn!("{err}; nothing drawn");
        return Ok(());
    }

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("creating {}", args.out_dir.display()))?;
    write_frame(&args.out_dir, "frame_0_initial", driver.view().scene(), args.png)?;

    let page = render_page("Median assets by race", &SECTIONS, &driver.view().scene().to_svg());
    let page_path = args.out_dir.join("index.html");
    std::fs::write(&page_path, page).with_context(|| format!("writing {}", page_path.display()))?;
    info!("Wrote {}", page_path.display());

    let out_dir = args.out_dir.clone();
    let png = args.png;
    let drawn = driver.feed(script, |event, scene| {
        let name = format!("frame_{}_{}", event.seq + 1, event.step);
        write_frame(&out_dir, &name, scene, png)
    })?;

    let last = driver.view().highlight().map(|g| g.as_str()).unwrap_or("none");
    info!(frames = drawn, highlight = last, "scroll script finished");
    if drawn == 0 {
        warn!("scroll script triggered no steps; known steps: {:?}", Step::ALL.map(Step::id));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args> {
        parse_args(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_point_at_bundled_dataset() {
        let a = args(&[]).unwrap();
        assert_eq!(a.data, PathBuf::from("data/median_assets_by_race.json"));
        assert_eq!(a.out_dir, PathBuf::from("target/out"));
        assert!(!a.png);
    }

    #[test]
    fn flags_and_positional() {
        let a = args(&["assets.json", "--png", "--out", "frames", "--scroll", "policy"]).unwrap();
        assert_eq!(a.data, PathBuf::from("assets.json"));
        assert_eq!(a.out_dir, PathBuf::from("frames"));
        assert!(a.png);
        assert_eq!(a.scroll.as_deref(), Some("policy"));
        assert!(args(&["--bogus"]).is_err());
        assert!(args(&["a.json", "b.json"]).is_err());
        assert!(args(&["--out"]).is_err());
    }

    #[test]
    fn scroll_script_parsing() {
        let entries = parse_scroll("national, policy:0.4,").unwrap();
        assert_eq!(
            entries,
            vec![IntersectionEntry::new("national", 1.0), IntersectionEntry::new("policy", 0.4)]
        );
        assert!(parse_scroll("policy:half").is_err());
    }

    #[test]
    fn default_script_visits_every_section() {
        let script = default_scroll();
        assert_eq!(script.len(), 8);
        assert_eq!(script[0], IntersectionEntry::new("intro", 1.0));
        assert_eq!(script[6], IntersectionEntry::new("policy", 1.0));
    }
}
