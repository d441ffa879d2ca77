// File: crates/demo/src/main.rs
// Summary: Demo loads the synth release CSV and renders every chart kind to SVG.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use synthviz_charts::charts::{area, bar, density, donut, dual_axis, line, scatter, treemap};
use synthviz_charts::svg::write_svg;
use synthviz_charts::theme::year_color;
use synthviz_charts::{
    AreaChartConfig, ArchPoint, BarChartConfig, BarColor, BarDatum, DensityChartConfig,
    DonutChartConfig, DonutEntry, DualAxisChartConfig, DualAxisPoint, LineChartConfig,
    LinePoint, Margin, ScatterChartConfig, TreemapChartConfig, TreemapLeaf,
};
use synthviz_stats::{fit_polynomial, Observation};

/// One row of the dataset.
#[derive(Debug, Clone)]
struct SynthRecord {
    year: i32,
    brand: String,
    name: String,
    architecture: String,
    polyphony: u32,
    multitimbrality: u32,
    duration_sec: f64,
    units_sold: f64,
    fame: f64,
}

fn main() -> Result<()> {
    let raw = std::env::args().nth(1).unwrap_or_else(|| "data/synths.csv".to_string());
    let path = resolve_path(&raw)?;
    println!("Using input file: {}", path.display());

    let records = load_synth_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    println!("Loaded {} synth records", records.len());

    if records.is_empty() {
        anyhow::bail!("no records loaded, check headers/delimiter.");
    }

    // 1) Releases per year, colored by era.
    let releases = releases_by_year(&records);
    let config = BarChartConfig {
        color: BarColor::PerBar(|d| year_color(d.label.parse().unwrap_or(0))),
        label_filter: Some(|label| label.parse::<i32>().map_or(false, |y| y % 5 == 0)),
        title: Some("Synth Releases by Year".to_string()),
        y_label: Some("Releases".to_string()),
        aria_label: "Synth Releases by Year".to_string(),
        ..BarChartConfig::default()
    };
    let svg = bar::render(&releases, &config)?;
    write_out("releases_by_year", &svg)?;

    // 2) Top brands by release count.
    let brands = top_brands(&records, 10);
    let config = BarChartConfig {
        width: 900.0,
        margin: Margin::new(40.0, 30.0, 60.0, 60.0),
        color: BarColor::Uniform("#FFB6C1"),
        band_padding: 0.2,
        y_ticks: 6,
        title: Some("Top 10 Brands by Releases".to_string()),
        y_label: Some("Releases".to_string()),
        aria_label: "Top 10 Brands by Releases".to_string(),
        ..BarChartConfig::default()
    };
    let svg = bar::render(&brands, &config)?;
    write_out("brand_releases", &svg)?;

    // 3) Highest fame per architecture, normalized to 0..1.
    let fame = fame_by_architecture(&records);
    let config = BarChartConfig {
        width: 900.0,
        margin: Margin::new(40.0, 30.0, 60.0, 60.0),
        color: BarColor::Uniform("#FFA500"),
        band_padding: 0.3,
        y_ticks: 5,
        title: Some("Highest Fame per Architecture".to_string()),
        y_label: Some("Fame".to_string()),
        aria_label: "Highest Fame per Architecture".to_string(),
        ..BarChartConfig::default()
    };
    let svg = bar::render(&fame, &config)?;
    write_out("fame_by_architecture", &svg)?;

    // 4) Longest demo recordings; the tall bottom margin leaves room for
    // full model names.
    let longest = top_durations(&records, 5);
    let config = BarChartConfig {
        width: 900.0,
        margin: Margin::new(40.0, 30.0, 120.0, 60.0),
        color: BarColor::Uniform("#90EE90"),
        band_padding: 0.2,
        y_ticks: 6,
        title: Some("Top 5 Longest Demos".to_string()),
        y_label: Some("Duration (s)".to_string()),
        aria_label: "Top 5 Longest Demos".to_string(),
        ..BarChartConfig::default()
    };
    let svg = bar::render(&longest, &config)?;
    write_out("top_durations", &svg)?;

    // 5) Average multitimbrality per year.
    let multi = multitimbrality_by_year(&records);
    let config = LineChartConfig {
        title: Some("Average Multitimbrality per Year".to_string()),
        x_label: Some("Year".to_string()),
        y_label: Some("Average Multitimbrality".to_string()),
        aria_label: "Average Multitimbrality per Year".to_string(),
        ..LineChartConfig::default()
    };
    let svg = line::render(&multi, &config)?;
    write_out("multitimbrality_trend", &svg)?;

    // 6) Demo duration density.
    let durations: Vec<f64> = records.iter().map(|r| r.duration_sec).collect();
    let config = DensityChartConfig {
        title: Some("Demo Duration Distribution".to_string()),
        aria_label: "Demo Duration Distribution".to_string(),
        ..DensityChartConfig::default()
    };
    let svg = density::render(&durations, &config)?;
    write_out("duration_density", &svg)?;

    // 7) Polyphony donut.
    let entries = polyphony_counts(&records);
    let config = DonutChartConfig {
        title: Some("Polyphony Distribution".to_string()),
        aria_label: "Polyphony Distribution".to_string(),
        ..DonutChartConfig::default()
    };
    let svg = donut::render(&entries, &config)?;
    write_out("polyphony_donut", &svg)?;

    // 8) Top words in synth names.
    let words = top_name_words(&records, 30);
    let config = TreemapChartConfig {
        title: Some("Top 30 Words in Synth Names".to_string()),
        aria_label: "Top 30 Words in Synth Names".to_string(),
        ..TreemapChartConfig::default()
    };
    let svg = treemap::render(&words, &config)?;
    write_out("name_words_treemap", &svg)?;

    // 9) Releases vs average polyphony on twin axes.
    let yearly = yearly_summary(&records);
    let config = DualAxisChartConfig {
        title: Some("Releases and Average Polyphony by Year".to_string()),
        left_label: Some("Releases".to_string()),
        right_label: Some("Average Polyphony".to_string()),
        aria_label: "Releases and Average Polyphony by Year".to_string(),
        ..DualAxisChartConfig::default()
    };
    let svg = dual_axis::render(&yearly, &config)?;
    write_out("releases_vs_polyphony", &svg)?;

    // 10) Digital vs analog stacked area.
    let split = architecture_split(&records);
    let config = AreaChartConfig {
        title: Some("Digital vs Analog Releases".to_string()),
        aria_label: "Digital vs Analog Releases".to_string(),
        ..AreaChartConfig::default()
    };
    let svg = area::render(&split, &config)?;
    write_out("architecture_area", &svg)?;

    // 11) Average demo duration per year with a forecast point for 2027.
    let mut duration_obs = duration_by_year(&records);
    let model = fit_polynomial(&duration_obs, 2)?;
    duration_obs.push(Observation::predicted(2027.0, model.predict(2027.0)));
    println!("Predicted 2027 average duration: {:.1}s", model.predict(2027.0));
    let config = ScatterChartConfig {
        title: Some("Average Demo Duration by Year".to_string()),
        x_label: Some("Year".to_string()),
        y_label: Some("Duration (s)".to_string()),
        legend: Some((
            "Yearly average".to_string(),
            "Quadratic fit".to_string(),
            "2027 forecast".to_string(),
        )),
        aria_label: "Average Demo Duration by Year".to_string(),
        ..ScatterChartConfig::default()
    };
    let svg = scatter::render(&duration_obs, &config)?;
    write_out("duration_trend", &svg)?;

    // 12) Fame vs units sold.
    let sales: Vec<Observation> =
        records.iter().map(|r| Observation::new(r.fame, r.units_sold)).collect();
    let config = ScatterChartConfig {
        title: Some("Fame vs Units Sold".to_string()),
        x_label: Some("Fame".to_string()),
        y_label: Some("Units Sold".to_string()),
        aria_label: "Fame vs Units Sold".to_string(),
        ..ScatterChartConfig::default()
    };
    let svg = scatter::render(&sales, &config)?;
    write_out("fame_vs_sales", &svg)?;

    Ok(())
}

/// Resolve the input path, falling back to a path relative to the crate.
fn resolve_path(raw: &str) -> Result<PathBuf> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    let alt = Path::new(env!("CARGO_MANIFEST_DIR")).join(raw);
    if alt.exists() {
        return Ok(alt);
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Render target under target/out.
fn write_out(stem: &str, svg: &str) -> Result<()> {
    let out = PathBuf::from("target/out").join(format!("{stem}.svg"));
    write_svg(&out, svg).with_context(|| format!("writing {}", out.display()))?;
    println!("Wrote {}", out.display());
    Ok(())
}

/// Load the synth CSV, tolerating header name variants.
fn load_synth_csv(path: &Path) -> Result<Vec<SynthRecord>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr.headers()?.iter().map(|h| h.to_lowercase()).collect::<Vec<_>>();

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_year = idx(&["year", "release_year"]).context("missing 'year' column")?;
    let i_brand = idx(&["brand", "manufacturer"]).context("missing 'brand' column")?;
    let i_name = idx(&["name", "model"]).context("missing 'name' column")?;
    let i_arch = idx(&["architecture", "arch", "type"]).context("missing 'architecture' column")?;
    let i_poly = idx(&["polyphony", "voices"]).context("missing 'polyphony' column")?;
    let i_multi = idx(&["multitimbrality", "timbres", "parts"])
        .context("missing 'multitimbrality' column")?;
    let i_dur = idx(&["duration_sec", "duration", "demo_duration"])
        .context("missing 'duration_sec' column")?;
    let i_sold = idx(&["units_sold", "sales"]).context("missing 'units_sold' column")?;
    let i_fame = idx(&["fame", "fame_score"]).context("missing 'fame' column")?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let field = |i: usize| rec.get(i).unwrap_or("").trim();
        let year: i32 = match field(i_year).parse() {
            Ok(y) => y,
            Err(_) => continue,
        };
        out.push(SynthRecord {
            year,
            brand: field(i_brand).to_string(),
            name: field(i_name).to_string(),
            architecture: field(i_arch).to_lowercase(),
            polyphony: field(i_poly).parse().unwrap_or(1),
            multitimbrality: field(i_multi).parse().unwrap_or(1),
            duration_sec: field(i_dur).parse().unwrap_or(0.0),
            units_sold: field(i_sold).parse().unwrap_or(0.0),
            fame: field(i_fame).parse().unwrap_or(0.0),
        });
    }
    Ok(out)
}

fn releases_by_year(records: &[SynthRecord]) -> Vec<BarDatum> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.year).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(year, n)| BarDatum { label: year.to_string(), value: n as f64 })
        .collect()
}

/// Brands with the most releases, descending, at most `limit` of them.
fn top_brands(records: &[SynthRecord], limit: usize) -> Vec<BarDatum> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.brand.as_str()).or_default() += 1;
    }
    let mut bars: Vec<BarDatum> = counts
        .into_iter()
        .map(|(brand, n)| BarDatum { label: brand.to_string(), value: n as f64 })
        .collect();
    bars.sort_by(|a, b| b.value.total_cmp(&a.value));
    bars.truncate(limit);
    bars
}

/// Highest fame seen per architecture, rescaled to 0..1.
fn fame_by_architecture(records: &[SynthRecord]) -> Vec<BarDatum> {
    let mut best: BTreeMap<&str, f64> = BTreeMap::new();
    for r in records {
        let entry = best.entry(r.architecture.as_str()).or_insert(0.0);
        *entry = entry.max(r.fame);
    }
    best.into_iter()
        .map(|(arch, fame)| BarDatum { label: arch.to_string(), value: fame / 100.0 })
        .collect()
}

/// The `limit` longest demo recordings, by model name.
fn top_durations(records: &[SynthRecord], limit: usize) -> Vec<BarDatum> {
    let mut bars: Vec<BarDatum> = records
        .iter()
        .map(|r| BarDatum { label: r.name.clone(), value: r.duration_sec })
        .collect();
    bars.sort_by(|a, b| b.value.total_cmp(&a.value));
    bars.truncate(limit);
    bars
}

fn multitimbrality_by_year(records: &[SynthRecord]) -> Vec<LinePoint> {
    let mut by_year: BTreeMap<i32, (usize, f64)> = BTreeMap::new();
    for r in records {
        let entry = by_year.entry(r.year).or_default();
        entry.0 += 1;
        entry.1 += r.multitimbrality as f64;
    }
    by_year
        .into_iter()
        .map(|(year, (n, sum))| LinePoint { x: year as f64, y: sum / n as f64 })
        .collect()
}

fn polyphony_counts(records: &[SynthRecord]) -> Vec<DonutEntry> {
    let mut counts: BTreeMap<u32, usize> = BTreeMap::new();
    for r in records {
        *counts.entry(r.polyphony).or_default() += 1;
    }
    counts
        .into_iter()
        .map(|(voices, n)| DonutEntry {
            label: if voices == 1 { "monophonic".to_string() } else { format!("{voices} voices") },
            count: n as f64,
        })
        .collect()
}

/// Most frequent words of three letters or more across all synth names.
fn top_name_words(records: &[SynthRecord], limit: usize) -> Vec<TreemapLeaf> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for r in records {
        for word in r.name.split_whitespace() {
            let word: String = word
                .chars()
                .filter(|c| c.is_alphabetic())
                .collect::<String>()
                .to_lowercase();
            if word.len() >= 3 {
                *counts.entry(word).or_default() += 1;
            }
        }
    }
    let mut leaves: Vec<TreemapLeaf> = counts
        .into_iter()
        .map(|(label, n)| TreemapLeaf { label, value: n as f64 })
        .collect();
    leaves.sort_by(|a, b| b.value.total_cmp(&a.value));
    leaves.truncate(limit);
    leaves
}

fn yearly_summary(records: &[SynthRecord]) -> Vec<DualAxisPoint> {
    let mut by_year: BTreeMap<i32, (usize, f64)> = BTreeMap::new();
    for r in records {
        let entry = by_year.entry(r.year).or_default();
        entry.0 += 1;
        entry.1 += r.polyphony as f64;
    }
    by_year
        .into_iter()
        .map(|(year, (n, poly_sum))| DualAxisPoint {
            year: year as f64,
            release_count: n as f64,
            average_polyphony: poly_sum / n as f64,
        })
        .collect()
}

fn architecture_split(records: &[SynthRecord]) -> Vec<ArchPoint> {
    let mut by_year: BTreeMap<i32, (f64, f64)> = BTreeMap::new();
    for r in records {
        let entry = by_year.entry(r.year).or_default();
        if r.architecture.contains("analog") {
            entry.1 += 1.0;
        } else {
            entry.0 += 1.0;
        }
    }
    by_year
        .into_iter()
        .map(|(year, (digital, analog))| ArchPoint { year: year as f64, digital, analog })
        .collect()
}

fn duration_by_year(records: &[SynthRecord]) -> Vec<Observation> {
    let mut by_year: BTreeMap<i32, (usize, f64)> = BTreeMap::new();
    for r in records {
        let entry = by_year.entry(r.year).or_default();
        entry.0 += 1;
        entry.1 += r.duration_sec;
    }
    by_year
        .into_iter()
        .map(|(year, (n, sum))| Observation::new(year as f64, sum / n as f64))
        .collect()
}
