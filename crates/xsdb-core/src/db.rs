//! Sample database accessor
//!
//! [`SampleDatabase`] owns the merged, immutable metadata table and
//! translates `(process, energy, era, category)` queries into scalar or
//! string values. Required categories (cross section, event count) fail
//! loudly when absent; optional ones degrade to their sentinel defaults.

use std::collections::BTreeMap;

use crate::data;
use crate::error::{Error, Result};
use crate::record::{Category, Energy, Era, Sample};

/// Read-only accessor over the sample metadata table.
#[derive(Debug, Clone)]
pub struct SampleDatabase {
    table: BTreeMap<String, Sample>,
}

impl SampleDatabase {
    /// Database over the builtin table.
    pub fn new() -> Self {
        Self { table: data::builtin_table() }
    }

    /// Builtin table with caller entries merged on top.
    ///
    /// Entries whose name collides with a builtin one replace it wholesale.
    /// The merge happens once, here; the database is read-only afterwards.
    pub fn with_extra<I>(extra: I) -> Self
    where
        I: IntoIterator<Item = (String, Sample)>,
    {
        let mut table = data::builtin_table();
        table.extend(extra);
        Self { table }
    }

    /// Database over a fully caller-supplied table.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, Sample)>,
    {
        Self { table: entries.into_iter().collect() }
    }

    /// Number of processes in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Whether `name` is a known process.
    pub fn contains(&self, name: &str) -> bool {
        self.table.contains_key(name)
    }

    /// Process names, in lexical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.table.keys().map(String::as_str)
    }

    /// The full record for `name`.
    pub fn entry(&self, name: &str) -> Result<&Sample> {
        self.table.get(name).ok_or_else(|| Error::UnknownProcess(name.to_string()))
    }

    /// Resolve a numeric value.
    ///
    /// An unknown process always fails. A missing category or period fails
    /// under `strict` and yields the category sentinel otherwise. Era-keyed
    /// values override energy-keyed ones unless they equal the sentinel.
    pub fn get_value(
        &self,
        name: &str,
        energy: Energy,
        era: Era,
        category: Category,
        strict: bool,
    ) -> Result<f64> {
        let sample = self.entry(name)?;
        let sentinel = category.sentinel();
        let resolved =
            sample.table(category).and_then(|table| table.resolve(energy, era, sentinel));
        match resolved {
            Some(value) => Ok(value),
            None if strict => Err(Error::MissingValue {
                name: name.to_string(),
                category,
                energy,
                era,
            }),
            None => Ok(sentinel),
        }
    }

    /// Cross section in pb. Strict: absence is a data error.
    pub fn get_xs(&self, name: &str, energy: Energy, era: Era) -> Result<f64> {
        self.get_value(name, energy, era, Category::CrossSection, true)
    }

    /// Weighted generated-event count. Strict: absence is a data error.
    pub fn get_nevt(&self, name: &str, energy: Energy, era: Era) -> Result<f64> {
        self.get_value(name, energy, era, Category::NEvents, true)
    }

    /// Branching ratio; 1.0 when the sample has none.
    pub fn get_br(&self, name: &str, energy: Energy, era: Era) -> Result<f64> {
        self.get_value(name, energy, era, Category::BranchingRatio, false)
    }

    /// k-factor; 1.0 when the sample has none.
    pub fn get_kfactor(&self, name: &str, energy: Energy, era: Era) -> Result<f64> {
        self.get_value(name, energy, era, Category::KFactor, false)
    }

    /// Correction factor; 1.0 when the sample has none.
    pub fn get_corr(&self, name: &str, energy: Energy, era: Era) -> Result<f64> {
        self.get_value(name, energy, era, Category::Correction, false)
    }

    /// Dataset-description file path; empty when the sample has none.
    pub fn get_xml(&self, name: &str, energy: Energy, era: Era) -> Result<String> {
        let sample = self.entry(name)?;
        Ok(sample
            .xml_table()
            .and_then(|t| t.resolve_file(energy, era))
            .unwrap_or_default()
            .to_string())
    }

    /// Source dataset identifier behind the dataset-description file;
    /// empty when the sample has none.
    pub fn get_xml_source(&self, name: &str, energy: Energy, era: Era) -> Result<String> {
        let sample = self.entry(name)?;
        Ok(sample
            .xml_table()
            .and_then(|t| t.resolve_source(energy, era))
            .unwrap_or_default()
            .to_string())
    }

    /// Provenance string for a numeric value; empty when none is recorded.
    pub fn get_source(
        &self,
        name: &str,
        energy: Energy,
        era: Era,
        category: Category,
    ) -> Result<String> {
        let sample = self.entry(name)?;
        Ok(sample
            .table(category)
            .and_then(|t| t.resolve_source(energy, era))
            .unwrap_or_default()
            .to_string())
    }

    /// Effective luminosity in pb^-1:
    /// `|n_events| / (xsec * br * [kfac] * [corr])`.
    ///
    /// The k-factor and correction enter only on request. A zero cross
    /// section is a data-entry bug and surfaces as an infinite value.
    pub fn get_lumi(
        &self,
        name: &str,
        energy: Energy,
        era: Era,
        k_factor: bool,
        corrections: bool,
    ) -> Result<f64> {
        let nevt = self.get_nevt(name, energy, era)?;
        let mut denom = self.get_xs(name, energy, era)? * self.get_br(name, energy, era)?;
        if k_factor {
            denom *= self.get_kfactor(name, energy, era)?;
        }
        if corrections {
            denom *= self.get_corr(name, energy, era)?;
        }
        Ok(nevt.abs() / denom)
    }
}

impl Default for SampleDatabase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::record::Period;

    const E13: Energy = Energy::Tev13;

    #[test]
    fn pinned_ttbar_dilepton_values() {
        let db = SampleDatabase::new();
        assert_eq!(db.get_xs("TTTo2L2Nu", E13, Era::UL17).unwrap(), 831.76);
        assert_eq!(db.get_nevt("TTTo2L2Nu", E13, Era::UL17).unwrap(), 7545276778.28);
        assert_eq!(db.get_br("TTTo2L2Nu", E13, Era::UL17).unwrap(), 0.105);
    }

    #[test]
    fn era_specific_cross_section_overrides_generic() {
        let db = SampleDatabase::new();
        assert_eq!(db.get_xs("WW", E13, Era::UL17).unwrap(), 75.92);
        assert_eq!(db.get_xs("WW", E13, Era::UL18).unwrap(), 75.91);
    }

    #[test]
    fn missing_branching_ratio_defaults_to_identity() {
        let db = SampleDatabase::new();
        assert_eq!(db.get_br("WW", E13, Era::UL17).unwrap(), 1.0);
        assert_eq!(db.get_corr("WW", E13, Era::UL17).unwrap(), 1.0);
    }

    #[test]
    fn unknown_process_fails() {
        let db = SampleDatabase::new();
        assert!(matches!(
            db.get_xs("NoSuchProcess", E13, Era::UL17),
            Err(Error::UnknownProcess(_))
        ));
        // Lenient getters still require a known process.
        assert!(db.get_br("NoSuchProcess", E13, Era::UL17).is_err());
    }

    #[test]
    fn strict_lookup_fails_on_missing_category() {
        let db = SampleDatabase::new();
        // Collision data: no cross section record at all.
        assert!(matches!(
            db.get_xs("SingleMuon_RunB", E13, Era::UL17),
            Err(Error::MissingValue { category: Category::CrossSection, .. })
        ));
    }

    #[test]
    fn strict_lookup_fails_on_missing_era() {
        let db = SampleDatabase::new();
        // SingleMuon_RunA exists only in UL18.
        assert!(db.get_nevt("SingleMuon_RunA", E13, Era::UL18).is_ok());
        assert!(matches!(
            db.get_nevt("SingleMuon_RunA", E13, Era::UL17),
            Err(Error::MissingValue { category: Category::NEvents, .. })
        ));
    }

    #[test]
    fn lumi_round_trips_against_components() {
        let db = SampleDatabase::new();
        for era in Era::ALL {
            let lumi = db.get_lumi("TTTo2L2Nu", E13, era, false, false).unwrap();
            let expected = db.get_nevt("TTTo2L2Nu", E13, era).unwrap()
                / (db.get_xs("TTTo2L2Nu", E13, era).unwrap()
                    * db.get_br("TTTo2L2Nu", E13, era).unwrap());
            assert_relative_eq!(lumi, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn lumi_applies_k_factor_and_correction_on_request() {
        let db = SampleDatabase::new();
        let name = "WJetsToLNu_HT-100To200";
        let plain = db.get_lumi(name, E13, Era::UL17, false, false).unwrap();
        let with_k = db.get_lumi(name, E13, Era::UL17, true, false).unwrap();
        let kfac = db.get_kfactor(name, E13, Era::UL17).unwrap();
        assert!(kfac != 1.0);
        assert_relative_eq!(plain / with_k, kfac, max_relative = 1e-12);

        let with_both = db.get_lumi(name, E13, Era::UL17, true, true).unwrap();
        let corr = db.get_corr(name, E13, Era::UL17).unwrap();
        assert_relative_eq!(with_k / with_both, corr, max_relative = 1e-12);
    }

    #[test]
    fn lumi_uses_absolute_event_count() {
        let extra = [(
            "InterferenceSample".to_string(),
            Sample::new()
                .xsec(Period::Energy(E13), 2.0, "toy")
                .nevt(Period::Era(Era::UL17), -1000.0),
        )];
        let db = SampleDatabase::with_extra(extra);
        assert_relative_eq!(
            db.get_lumi("InterferenceSample", E13, Era::UL17, false, false).unwrap(),
            500.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn extra_entries_extend_and_override() {
        let extra = [
            (
                "MyScalar_M1000".to_string(),
                Sample::new()
                    .xsec(Period::Energy(E13), 0.015, "private production")
                    .nevt(Period::Era(Era::UL18), 250000.0),
            ),
            (
                "TTTo2L2Nu".to_string(),
                Sample::new().xsec(Period::Energy(E13), 999.0, "override"),
            ),
        ];
        let db = SampleDatabase::with_extra(extra);
        assert_eq!(db.get_xs("MyScalar_M1000", E13, Era::UL18).unwrap(), 0.015);
        // Override replaces the whole record, so the event count is gone.
        assert_eq!(db.get_xs("TTTo2L2Nu", E13, Era::UL17).unwrap(), 999.0);
        assert!(db.get_nevt("TTTo2L2Nu", E13, Era::UL17).is_err());
    }

    #[test]
    fn provenance_strings_resolve() {
        let db = SampleDatabase::new();
        let source = db.get_source("TTTo2L2Nu", E13, Era::UL17, Category::CrossSection).unwrap();
        assert!(!source.is_empty());
        let dataset = db.get_xml_source("TTTo2L2Nu", E13, Era::UL17).unwrap();
        assert!(dataset.starts_with('/'));
        // No provenance recorded for event counts.
        assert_eq!(db.get_source("TTTo2L2Nu", E13, Era::UL17, Category::NEvents).unwrap(), "");
    }

    #[test]
    fn xml_defaults_to_empty_for_samples_without_files() {
        let extra = [(
            "Bare".to_string(),
            Sample::new().xsec(Period::Energy(E13), 1.0, "toy"),
        )];
        let db = SampleDatabase::with_extra(extra);
        assert_eq!(db.get_xml("Bare", E13, Era::UL17).unwrap(), "");
        assert_eq!(db.get_xml_source("Bare", E13, Era::UL17).unwrap(), "");
    }
}
