use crate::evaluation::Snapshot;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CurveFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

/// Ordered record of smoothed outputs taken while running over a stream.
#[derive(Debug, Clone, Default)]
pub struct SmoothingCurve {
    entries: Vec<Snapshot>,
}

impl SmoothingCurve {
    pub fn push(&mut self, snapshot: Snapshot) {
        self.entries.push(snapshot)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    pub fn latest(&self) -> Option<Snapshot> {
        self.entries.last().copied()
    }
    pub fn entries(&self) -> &[Snapshot] {
        &self.entries
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: CurveFormat) -> Result<(), Error> {
        let w = BufWriter::new(File::create(path)?);
        match fmt {
            CurveFormat::Csv => self.write_with_delimiter(w, ','),
            CurveFormat::Tsv => self.write_with_delimiter(w, '\t'),
            CurveFormat::Json => self.write_json(w),
        }
    }

    fn write_with_delimiter<W: Write>(&self, mut w: W, delimiter: char) -> Result<(), Error> {
        writeln!(w, "samples_seen{d}sample{d}ewma", d = delimiter)?;
        for s in &self.entries {
            writeln!(
                w,
                "{}{d}{:.12}{d}{:.12}",
                s.samples_seen,
                s.sample,
                s.smoothed,
                d = delimiter
            )?;
        }
        w.flush()
    }

    fn write_json<W: Write>(&self, mut w: W) -> Result<(), Error> {
        writeln!(w, "[")?;
        for (i, s) in self.entries.iter().enumerate() {
            writeln!(
                w,
                "  {}{}",
                serde_json::to_string(s)?,
                if i + 1 == self.entries.len() { "" } else { "," }
            )?;
        }
        writeln!(w, "]")?;
        w.flush()
    }
}
