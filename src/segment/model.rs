/*! Segmentation model loading.

A model is looked up by name:
1. `unicode` is the plain [UnicodeSegmenter].
1. `<models_dir>/<name>.txt`, an abbreviation list, if it exists.
1. a built-in abbreviation list for some names (`de`).

When none matches, [SegmenterModel::load_or_install] can fetch `<model_url><name>.txt` into `models_dir` and retry once.
!*/
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use reqwest::Url;

use crate::download::Downloader;
use crate::error::Error;

use super::{AbbreviationSegmenter, Segmenter, UnicodeSegmenter};

const GERMAN_ABBREVIATIONS: &[&str] = &[
    "Abb.", "Abs.", "Bd.", "bzw.", "ca.", "d.h.", "Dr.", "etc.", "evtl.", "Fr.", "geb.", "ggf.",
    "Hr.", "Hrn.", "i.e.", "Jh.", "Jhdt.", "Kap.", "Nr.", "o.ä.", "Prof.", "s.", "S.", "sog.",
    "St.", "Str.", "u.a.", "usw.", "v.", "vgl.", "z.B.", "z.T.",
];

/// Loaded segmentation model.
#[derive(Debug, Clone)]
pub enum SegmenterModel {
    Unicode(UnicodeSegmenter),
    Abbreviations(AbbreviationSegmenter),
}

impl SegmenterModel {
    fn model_path(name: &str, models_dir: &Path) -> PathBuf {
        models_dir.join(format!("{name}.txt"))
    }

    fn builtin(name: &str) -> Option<Self> {
        match name {
            "unicode" => Some(Self::Unicode(UnicodeSegmenter)),
            "de" => Some(Self::Abbreviations(AbbreviationSegmenter::new(
                GERMAN_ABBREVIATIONS.iter().copied(),
            ))),
            _ => None,
        }
    }

    /// Load a model by name, looking in `models_dir` first.
    pub fn load(name: &str, models_dir: &Path) -> Result<Self, Error> {
        if name == "unicode" {
            return Ok(Self::Unicode(UnicodeSegmenter));
        }

        let path = Self::model_path(name, models_dir);
        if path.is_file() {
            debug!("loading segmentation model from {:?}", path);
            let list = std::fs::read_to_string(&path)?;
            let segmenter = AbbreviationSegmenter::from_list(&list);
            info!(
                "loaded segmentation model {} ({} abbreviations)",
                name,
                segmenter.len()
            );
            return Ok(Self::Abbreviations(segmenter));
        }

        Self::builtin(name).ok_or_else(|| Error::SegmenterMissing(name.to_string()))
    }

    /// Load a model, installing it from `model_url` if it is missing.
    ///
    /// Only one installation attempt is made.
    pub fn load_or_install(
        name: &str,
        models_dir: &Path,
        model_url: Option<&Url>,
        downloader: &Downloader,
    ) -> Result<Self, Error> {
        match Self::load(name, models_dir) {
            Err(Error::SegmenterMissing(_)) => {
                let base = model_url.ok_or_else(|| Error::SegmenterMissing(name.to_string()))?;
                let url = base.join(&format!("{name}.txt"))?;
                warn!("segmentation model {} not found, installing from {}", name, url);
                downloader.save_to(&url, &Self::model_path(name, models_dir))?;
                Self::load(name, models_dir)
            }
            other => other,
        }
    }
}

impl Segmenter for SegmenterModel {
    fn segment<'a>(&self, text: &'a str) -> Vec<&'a str> {
        match self {
            Self::Unicode(s) => s.segment(text),
            Self::Abbreviations(s) => s.segment(text),
        }
    }
}
