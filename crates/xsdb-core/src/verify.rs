//! Full-table verification scan
//!
//! Walks every process × era for one energy, computes event counts and
//! effective luminosities, and checks that each referenced
//! dataset-description file exists on disk. Missing values yield empty
//! row slots and missing files are collected, so a scan always runs to
//! completion; escalation is the caller's choice via
//! [`ScanReport::ensure_complete`].

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::db::SampleDatabase;
use crate::error::{Error, Result};
use crate::record::{Category, Energy, Era};

/// One process × era line of the scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanRow {
    /// Process name.
    pub process: String,
    /// Scanned era.
    pub era: Era,
    /// Weighted generated-event count, if recorded for this era.
    pub n_events: Option<f64>,
    /// Effective luminosity in pb^-1, if the entry has a cross section.
    ///
    /// Includes the k-factor and correction when the entry carries them.
    pub lumi: Option<f64>,
    /// Dataset-description file path, if any.
    pub dataset_file: Option<String>,
    /// Whether the dataset file exists under the scanned directory.
    pub found: Option<bool>,
}

/// A referenced dataset-description file absent on disk.
#[derive(Debug, Clone, Serialize)]
pub struct MissingDataset {
    /// Process name.
    pub process: String,
    /// Era whose entry references the file.
    pub era: Era,
    /// Path relative to the scanned directory.
    pub path: String,
}

/// Result of a full-table scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// Scanned centre-of-mass energy.
    pub energy: Energy,
    /// Directory dataset paths were resolved against.
    pub datasets_dir: PathBuf,
    /// One row per process × era.
    pub rows: Vec<ScanRow>,
    /// Referenced files absent on disk.
    pub missing: Vec<MissingDataset>,
}

impl ScanReport {
    /// Escalate missing dataset files to a hard error.
    pub fn ensure_complete(&self) -> Result<()> {
        if self.missing.is_empty() {
            return Ok(());
        }
        Err(Error::MissingDatasets {
            count: self.missing.len(),
            dir: self.datasets_dir.clone(),
        })
    }
}

/// Scan every process in `db` for the given eras.
pub fn scan(db: &SampleDatabase, energy: Energy, eras: &[Era], datasets_dir: &Path) -> ScanReport {
    let mut rows = Vec::new();
    let mut missing = Vec::new();

    for name in db.names() {
        // Names come from the table itself, so entry() cannot fail.
        let sample = match db.entry(name) {
            Ok(sample) => sample,
            Err(_) => continue,
        };
        for &era in eras {
            let n_events = db.get_nevt(name, energy, era).ok();
            let lumi = if sample.has(Category::CrossSection) && n_events.is_some() {
                db.get_lumi(
                    name,
                    energy,
                    era,
                    sample.has(Category::KFactor),
                    sample.has(Category::Correction),
                )
                .ok()
            } else {
                None
            };

            let path = db.get_xml(name, energy, era).unwrap_or_default();
            let (dataset_file, found) = if path.is_empty() {
                (None, None)
            } else {
                let exists = datasets_dir.join(&path).is_file();
                if !exists {
                    missing.push(MissingDataset {
                        process: name.to_string(),
                        era,
                        path: path.clone(),
                    });
                }
                (Some(path), Some(exists))
            };

            rows.push(ScanRow {
                process: name.to_string(),
                era,
                n_events,
                lumi,
                dataset_file,
                found,
            });
        }
    }

    ScanReport { energy, datasets_dir: datasets_dir.to_path_buf(), rows, missing }
}

#[cfg(test)]
mod tests {
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::*;
    use crate::record::{Period, Sample};

    fn tmp_dir(name: &str) -> PathBuf {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap().as_nanos();
        let mut p = std::env::temp_dir();
        p.push(format!("xsdb_scan_{}_{}_{}", std::process::id(), nanos, name));
        p
    }

    fn toy_db() -> SampleDatabase {
        let e13 = Period::Energy(Energy::Tev13);
        SampleDatabase::from_entries([
            (
                "Signal".to_string(),
                Sample::new()
                    .xsec(e13, 2.0, "toy")
                    .nevt(Period::Era(Era::UL17), 1000.0)
                    .xml(Period::Era(Era::UL17), "sig/UL17/Signal.xml", "/Signal/UL17/MINIAODSIM"),
            ),
            (
                "Background".to_string(),
                Sample::new()
                    .xsec(e13, 4.0, "toy")
                    .nevt(Period::Era(Era::UL17), 800.0)
                    .xml(Period::Era(Era::UL17), "bkg/UL17/Background.xml", "/Background/UL17/MINIAODSIM"),
            ),
            // No dataset file: must not be reported missing.
            ("Bare".to_string(), Sample::new().nevt(Period::Era(Era::UL17), 10.0)),
        ])
    }

    #[test]
    fn scan_collects_missing_files_without_aborting() {
        let dir = tmp_dir("missing");
        std::fs::create_dir_all(dir.join("sig/UL17")).unwrap();
        std::fs::write(dir.join("sig/UL17/Signal.xml"), "<dataset/>").unwrap();

        let db = toy_db();
        let report = scan(&db, Energy::Tev13, &[Era::UL17], &dir);

        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.missing.len(), 1);
        assert_eq!(report.missing[0].process, "Background");
        assert!(report.ensure_complete().is_err());

        let signal = report.rows.iter().find(|r| r.process == "Signal").unwrap();
        assert_eq!(signal.found, Some(true));
        assert_eq!(signal.lumi, Some(500.0));

        let bare = report.rows.iter().find(|r| r.process == "Bare").unwrap();
        assert_eq!(bare.dataset_file, None);
        assert_eq!(bare.found, None);
        assert_eq!(bare.lumi, None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn scan_passes_when_all_files_exist() {
        let dir = tmp_dir("complete");
        std::fs::create_dir_all(dir.join("sig/UL17")).unwrap();
        std::fs::create_dir_all(dir.join("bkg/UL17")).unwrap();
        std::fs::write(dir.join("sig/UL17/Signal.xml"), "<dataset/>").unwrap();
        std::fs::write(dir.join("bkg/UL17/Background.xml"), "<dataset/>").unwrap();

        let db = toy_db();
        let report = scan(&db, Energy::Tev13, &[Era::UL17], &dir);
        assert!(report.missing.is_empty());
        assert!(report.ensure_complete().is_ok());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn scan_skips_eras_without_entries() {
        let dir = tmp_dir("eras");
        std::fs::create_dir_all(&dir).unwrap();

        let db = toy_db();
        let report = scan(&db, Energy::Tev13, &[Era::UL16preVFP, Era::UL17], &dir);

        // Every process appears once per requested era.
        assert_eq!(report.rows.len(), 6);
        let early = report
            .rows
            .iter()
            .find(|r| r.process == "Signal" && r.era == Era::UL16preVFP)
            .unwrap();
        assert_eq!(early.n_events, None);
        assert_eq!(early.lumi, None);
        assert_eq!(early.dataset_file, None);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn full_builtin_scan_completes() {
        let dir = tmp_dir("builtin");
        std::fs::create_dir_all(&dir).unwrap();

        let db = SampleDatabase::new();
        let report = scan(&db, Energy::Tev13, &Era::ALL, &dir);
        assert_eq!(report.rows.len(), db.len() * Era::ALL.len());
        // Nothing on disk: every referenced file is reported missing.
        assert!(!report.missing.is_empty());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
