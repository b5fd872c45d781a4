use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tracing::warn;

pub mod models;
use models::*;

use crate::catalog::{LineRecord, StationRecord};

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Could not find file with name: {0}")]
    FileNotFound(String),
}

pub struct Config {
    pub stations_file_name: String,
    pub lines_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stations_file_name: "stations.geojson".into(),
            lines_file_name: "lines.geojson".into(),
        }
    }
}

#[derive(Default)]
pub enum StorageType {
    #[default]
    None,
    Dir(PathBuf),
}

/// The static geographic data a deployment ships: one GeoJSON feature
/// collection of station points and one of line strings.
#[derive(Default)]
pub struct Dataset {
    config: Config,
    storage: StorageType,
}

impl Dataset {
    pub fn new(config: self::Config) -> Self {
        Self {
            config,
            storage: Default::default(),
        }
    }

    pub fn from_dir(mut self, path: PathBuf) -> Self {
        self.storage = StorageType::Dir(path);
        self
    }

    /// Streams station records out of the stations file. Features without
    /// a name are dropped with a warning, matching how the map treats
    /// them.
    pub fn stream_stations<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, StationRecord)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Dir(dir) => {
                let collection: StationCollection =
                    read_collection(dir, &self.config.stations_file_name)?;
                collection
                    .features
                    .into_iter()
                    .filter_map(|feature| {
                        let record = feature.into_record();
                        if record.is_none() {
                            warn!("Skipping station feature without a name");
                        }
                        record
                    })
                    .enumerate()
                    .for_each(f);
                Ok(())
            }
        }
    }

    pub fn stream_lines<F>(&self, f: F) -> Result<(), self::Error>
    where
        F: FnMut((usize, LineRecord)),
    {
        match &self.storage {
            StorageType::None => Ok(()),
            StorageType::Dir(dir) => {
                let collection: LineCollection =
                    read_collection(dir, &self.config.lines_file_name)?;
                collection
                    .features
                    .into_iter()
                    .filter_map(|feature| {
                        let record = feature.into_record();
                        if record.is_none() {
                            warn!("Skipping line feature without a name");
                        }
                        record
                    })
                    .enumerate()
                    .for_each(f);
                Ok(())
            }
        }
    }
}

fn read_collection<T>(dir: &Path, file_name: &str) -> Result<T, self::Error>
where
    T: DeserializeOwned,
{
    let path = dir.join(file_name);
    if !path.exists() {
        return Err(self::Error::FileNotFound(file_name.to_string()));
    }
    let file = File::open(path)?;
    let collection = serde_json::from_reader(BufReader::new(file))?;
    Ok(collection)
}
