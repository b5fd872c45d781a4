use std::{collections::HashMap, sync::Arc};

mod models;
pub use models::*;
use tracing::warn;

use crate::{
    dataset::{self, Dataset},
    shared,
};

type NameToIndex = HashMap<Arc<str>, usize>;
type NameToNames = HashMap<Arc<str>, Box<[Arc<str>]>>;

/// The read-only station/line dataset behind the map. Built once at
/// startup, never mutated afterwards.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    stations: Box<[StationRecord]>,
    lines: Box<[LineRecord]>,

    station_lookup: Arc<NameToIndex>,
    line_lookup: Arc<NameToIndex>,
    line_to_stations: Arc<NameToNames>,
}

impl Catalog {
    pub fn new() -> Self {
        Default::default()
    }

    /// Streams the dataset files into the catalog.
    /// Depending on the size of the data this can be a blocking function.
    pub fn with_dataset(self, dataset: Dataset) -> Result<Self, dataset::Error> {
        let mut lines: Vec<LineRecord> = Vec::new();
        dataset.stream_lines(|(_, line)| lines.push(line))?;

        let mut stations: Vec<StationRecord> = Vec::new();
        dataset.stream_stations(|(_, station)| stations.push(station))?;

        Ok(self.with_records(stations, lines))
    }

    /// Builds the catalog from records already in memory. Station order is
    /// preserved and defines the per-line station sequence.
    pub fn with_records(mut self, stations: Vec<StationRecord>, lines: Vec<LineRecord>) -> Self {
        let mut line_lookup: NameToIndex = HashMap::new();
        for (i, line) in lines.iter().enumerate() {
            line_lookup.insert(line.name.clone(), i);
        }

        let mut station_lookup: NameToIndex = HashMap::new();
        let mut line_to_stations: HashMap<Arc<str>, Vec<Arc<str>>> = HashMap::new();
        for (i, station) in stations.iter().enumerate() {
            station_lookup.insert(station.name.clone(), i);
            for line_name in station.lines.iter() {
                if !line_lookup.contains_key(line_name) {
                    warn!(
                        "Station {} references unknown line {}",
                        station.name, line_name
                    );
                    continue;
                }
                line_to_stations
                    .entry(line_name.clone())
                    .or_default()
                    .push(station.name.clone());
            }
        }

        self.stations = stations.into();
        self.lines = lines.into();
        self.station_lookup = station_lookup.into();
        self.line_lookup = line_lookup.into();
        let line_to_stations: NameToNames = line_to_stations
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        self.line_to_stations = line_to_stations.into();
        self
    }

    pub fn stations(&self) -> &[StationRecord] {
        &self.stations
    }

    pub fn lines(&self) -> &[LineRecord] {
        &self.lines
    }

    /// Get a station with the given name.
    /// If no station is found with the given name None is returned.
    /// The record is safe and quick to clone if an owned instance is needed.
    pub fn station_by_name(&self, name: &str) -> Option<&StationRecord> {
        let station_index = self.station_lookup.get(name)?;
        Some(&self.stations[*station_index])
    }

    /// Get a line with the given name.
    /// If no line is found with the given name None is returned.
    pub fn line_by_name(&self, name: &str) -> Option<&LineRecord> {
        let line_index = self.line_lookup.get(name)?;
        Some(&self.lines[*line_index])
    }

    /// Returns the stations of a line in sequence order.
    /// If there is no line with the given name None is returned.
    pub fn stations_by_line(&self, line_name: &str) -> Option<Vec<&StationRecord>> {
        self.line_lookup.get(line_name)?;
        let sequence = match self.line_to_stations.get(line_name) {
            Some(sequence) => sequence.as_ref(),
            None => &[],
        };
        Some(
            sequence
                .iter()
                .filter_map(|station_name| self.station_by_name(station_name))
                .collect(),
        )
    }

    /// Returns the lines serving a station.
    /// If no station is found with the given name None is returned.
    pub fn lines_by_station(&self, station_name: &str) -> Option<Vec<&LineRecord>> {
        let station = self.station_by_name(station_name)?;
        Some(
            station
                .lines
                .iter()
                .filter_map(|line_name| self.line_by_name(line_name))
                .collect(),
        )
    }

    /// Returns the immediate neighbors of a station, one pair per shared
    /// line and direction: the previous and next station in each line's
    /// sequence.
    pub fn adjacent_stations(&self, station_name: &str) -> Option<Vec<(&LineRecord, &StationRecord)>> {
        let station = self.station_by_name(station_name)?;
        let mut neighbors = Vec::new();
        for line_name in station.lines.iter() {
            let Some(line) = self.line_by_name(line_name) else {
                continue;
            };
            let Some(sequence) = self.line_to_stations.get(line_name) else {
                continue;
            };
            let Some(position) = sequence
                .iter()
                .position(|name| name.as_ref() == station.name.as_ref())
            else {
                continue;
            };
            if position > 0
                && let Some(previous) = self.station_by_name(&sequence[position - 1])
            {
                neighbors.push((line, previous));
            }
            if let Some(next_name) = sequence.get(position + 1)
                && let Some(next) = self.station_by_name(next_name)
            {
                neighbors.push((line, next));
            }
        }
        Some(neighbors)
    }

    /// Does a fuzzy search on all the stations, comparing their name to the needle.
    pub fn search_stations_by_name<'a>(&'a self, needle: &'a str) -> Vec<&'a StationRecord> {
        shared::search(needle, &self.stations)
    }

    /// Does a fuzzy search on all the lines, comparing their name to the needle.
    pub fn search_lines_by_name<'a>(&'a self, needle: &'a str) -> Vec<&'a LineRecord> {
        shared::search(needle, &self.lines)
    }
}
