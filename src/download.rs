/*! Archive and model retrieval.

Archives are fetched in one blocking request and kept in memory, since zip reading needs random access.
Local paths (or `file://` urls) are read from disk, which is handy for offline runs and tests.
!*/
use std::fs::File;
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use bytes::Bytes;
use log::{debug, info};
use reqwest::Url;

use crate::error::Error;

/// Default TextGrid query: every prose work, as plain text.
pub const DEFAULT_URL: &str = "https://textgridlab.org/1.0/aggregator/zip/query?query=*&filter=format%3Atext%2Fxml&filter=work.genre%3Aprose&transform=text&meta=false&only=text/xml&dirnames=";

/// holds the http client that will make the requests.
pub struct Downloader {
    client: reqwest::blocking::Client,
}

impl Downloader {
    pub fn new() -> Self {
        Self::with_client(reqwest::blocking::Client::new())
    }

    /// use a preconfigured client (proxies, timeouts).
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }

    /// fire a blocking request and return the whole body.
    ///
    /// Non-success status codes are errors.
    pub fn fetch(&self, url: &Url) -> Result<Bytes, Error> {
        debug!("downloading {}", url);
        let response = self.client.get(url.clone()).send()?.error_for_status()?;
        let body = response.bytes()?;
        info!("fetched {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// attempt to download from `url`, storing the result in `dst`.
    pub fn save_to(&self, url: &Url, dst: &Path) -> Result<PathBuf, Error> {
        let body = self.fetch(url)?;
        if let Some(parent) = dst.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = File::create(dst)?;
        out.write_all(&body)?;
        Ok(dst.to_path_buf())
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}

/// Where an archive comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArchiveSource {
    Remote(Url),
    Local(PathBuf),
}

impl ArchiveSource {
    /// http(s) urls are remote, `file://` urls and anything that does not parse as an url are local paths.
    pub fn from_input(input: &str) -> Result<Self, Error> {
        match Url::parse(input) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => Ok(Self::Remote(url)),
            Ok(url) if url.scheme() == "file" => url
                .to_file_path()
                .map(Self::Local)
                .map_err(|_| Error::Config(format!("invalid file url: {input}"))),
            Ok(url) => Err(Error::Config(format!(
                "unsupported url scheme {} in {input}",
                url.scheme()
            ))),
            Err(_) => Ok(Self::Local(PathBuf::from(input))),
        }
    }

    /// Get the archive content as a random-access reader.
    pub fn open(&self, downloader: &Downloader) -> Result<Cursor<Vec<u8>>, Error> {
        let content = match self {
            Self::Remote(url) => {
                info!("Retrieve the zip-file from {}", url);
                downloader.fetch(url)?.to_vec()
            }
            Self::Local(path) => {
                info!("Reading the zip-file from {:?}", path);
                std::fs::read(path)?
            }
        };
        Ok(Cursor::new(content))
    }
}
