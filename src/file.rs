//! Scenario persistence. Any serde type can be loaded from or saved to a JSON file.

use std::fs::File;
use std::io::{BufReader, BufWriter, Error, Write};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Reads a JSON-encoded value from the file at `path`.
pub fn read_json<D: DeserializeOwned>(path: impl AsRef<Path>) -> Result<D, Error> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes `value` to `path` as pretty-printed JSON, replacing any existing file.
pub fn write_json(path: impl AsRef<Path>, value: &impl Serialize) -> Result<(), Error> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()
}

pub trait ReadJsonFile: Sized {
    fn read_json_file(path: impl AsRef<Path>) -> Result<Self, Error>;
}

impl<D: DeserializeOwned> ReadJsonFile for D {
    fn read_json_file(path: impl AsRef<Path>) -> Result<Self, Error> {
        read_json(path)
    }
}

pub trait WriteJsonFile {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), Error>;
}

impl<S: Serialize> WriteJsonFile for S {
    fn write_json_file(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        write_json(path, self)
    }
}
