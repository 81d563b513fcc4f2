//! Corpus statistics and words-per-sentence chart.
use std::fs::File;
use std::path::{Path, PathBuf};

use log::info;
use plotters::prelude::*;
use serde::Serialize;

use crate::error::Error;

use super::SentencePair;

/// Word count distribution of the original sentences.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    #[serde(skip)]
    word_counts: Vec<usize>,
    pub max: usize,
    pub median: f64,
    pub p90: f64,
    pub p99: f64,
    pub total_words: usize,
    pub nb_sentences: usize,
    pub nb_documents: usize,
}

/// Linear interpolation percentile over sorted values.
fn percentile(sorted: &[usize], p: f64) -> f64 {
    match sorted.len() {
        0 => 0.0,
        1 => sorted[0] as f64,
        len => {
            let rank = p / 100.0 * (len - 1) as f64;
            let low = rank.floor() as usize;
            let high = rank.ceil() as usize;
            let fraction = rank - low as f64;
            sorted[low] as f64 + (sorted[high] as f64 - sorted[low] as f64) * fraction
        }
    }
}

impl Statistics {
    pub fn from_pairs(pairs: &[SentencePair], nb_documents: usize) -> Self {
        let word_counts: Vec<usize> = pairs
            .iter()
            .map(|pair| pair.original.split_whitespace().count())
            .collect();

        let mut sorted = word_counts.clone();
        sorted.sort_unstable();

        Self {
            max: sorted.last().copied().unwrap_or_default(),
            median: percentile(&sorted, 50.0),
            p90: percentile(&sorted, 90.0),
            p99: percentile(&sorted, 99.0),
            total_words: sorted.iter().sum(),
            nb_sentences: sorted.len(),
            nb_documents,
            word_counts,
        }
    }

    pub fn word_counts(&self) -> &[usize] {
        &self.word_counts
    }

    /// Save the summary (without individual counts) as JSON.
    pub fn write_json(&self, dst: &Path) -> Result<(), Error> {
        let f = File::create(dst)?;
        serde_json::to_writer_pretty(f, self)?;
        Ok(())
    }
}

/// Summary location for a chart at `chart`: `<stem>.summary.json` in the same folder.
///
/// A chart named `*.json` is never overwritten.
pub fn summary_path(chart: &Path) -> PathBuf {
    let stem = chart
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "statistics".to_string());
    chart.with_file_name(format!("{stem}.summary.json"))
}

fn render_err<E: std::fmt::Display>(e: E) -> Error {
    Error::Render(e.to_string())
}

/// Draw a histogram of words per sentence (bins of width 1)
/// with markers for median, 90th and 99th percentiles and max.
pub fn render_histogram(stats: &Statistics, dst: &Path) -> Result<(), Error> {
    if stats.word_counts.is_empty() {
        return Err(Error::Render("no sentences to plot".to_string()));
    }

    let mut bins = vec![0usize; stats.max + 1];
    for count in &stats.word_counts {
        bins[*count] += 1;
    }
    let y_max = bins.iter().copied().max().unwrap_or_default();
    let x_max = stats.max as u32 + 2;

    let root = SVGBackend::new(dst, (1280, 720)).into_drawing_area();
    root.fill(&WHITE).map_err(render_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Words per sentence", ("sans-serif", 28))
        .margin(16)
        .x_label_area_size(48)
        .y_label_area_size(72)
        .build_cartesian_2d(0u32..x_max, 0usize..y_max + y_max / 5 + 1)
        .map_err(render_err)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_desc(format!(
            "words per sentence ({} words in total)",
            stats.total_words
        ))
        .y_desc(format!(
            "sentences ({} sentences from {} documents)",
            stats.nb_sentences, stats.nb_documents
        ))
        .draw()
        .map_err(render_err)?;

    chart
        .draw_series(
            Histogram::vertical(&chart)
                .style(BLUE.mix(0.5).filled())
                .margin(0)
                .data(stats.word_counts.iter().map(|count| (*count as u32, 1usize))),
        )
        .map_err(render_err)?;

    let markers = [
        ("median", stats.median, GREEN),
        ("90%", stats.p90, MAGENTA),
        ("99%", stats.p99, RED),
        ("max", stats.max as f64, BLACK),
    ];
    let top = y_max + y_max / 10;
    for (idx, (label, value, color)) in markers.into_iter().enumerate() {
        let x = value.round() as u32;
        chart
            .draw_series(LineSeries::new(
                vec![(x, 0), (x, top)],
                color.stroke_width(2),
            ))
            .map_err(render_err)?;

        // stagger labels so close markers stay readable
        let y = top.saturating_sub(idx * top / 12);
        chart
            .draw_series(std::iter::once(Text::new(
                format!(" {label}: {value:.1}"),
                (x, y),
                ("sans-serif", 16).into_font().color(&color),
            )))
            .map_err(render_err)?;
    }

    root.present().map_err(render_err)?;
    info!("saved words per sentence chart to {:?}", dst);
    Ok(())
}
