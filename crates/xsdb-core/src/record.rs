//! Sample records and period keys
//!
//! The original bookkeeping stored one field per `<category>_<period>`
//! combination and resolved lookups by constructed attribute name. Here the
//! period is an explicit tagged key ([`Period`]) so the era-over-energy
//! resolution is ordinary map access and statically checkable.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

/// Centre-of-mass energy of a production campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Energy {
    /// Run-2 proton-proton collisions at 13 TeV.
    #[serde(rename = "13TeV")]
    Tev13,
}

impl Energy {
    /// All known energies.
    pub const ALL: [Energy; 1] = [Energy::Tev13];

    /// Physics label, as used in dataset bookkeeping.
    pub fn label(self) -> &'static str {
        match self {
            Energy::Tev13 => "13TeV",
        }
    }
}

impl fmt::Display for Energy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Energy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Energy::ALL
            .into_iter()
            .find(|e| e.label() == s)
            .ok_or_else(|| Error::UnknownLabel(s.to_string()))
    }
}

/// Data-taking / production campaign era.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Era {
    /// 2016 pre-VFP ("APV") Ultra-Legacy campaign.
    UL16preVFP,
    /// 2016 post-VFP Ultra-Legacy campaign.
    UL16postVFP,
    /// 2017 Ultra-Legacy campaign.
    UL17,
    /// 2018 Ultra-Legacy campaign.
    UL18,
}

impl Era {
    /// All known eras, in campaign order.
    pub const ALL: [Era; 4] = [Era::UL16preVFP, Era::UL16postVFP, Era::UL17, Era::UL18];

    /// Campaign label, as used in dataset bookkeeping.
    pub fn label(self) -> &'static str {
        match self {
            Era::UL16preVFP => "UL16preVFP",
            Era::UL16postVFP => "UL16postVFP",
            Era::UL17 => "UL17",
            Era::UL18 => "UL18",
        }
    }
}

impl fmt::Display for Era {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl FromStr for Era {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Era::ALL
            .into_iter()
            .find(|e| e.label() == s)
            .ok_or_else(|| Error::UnknownLabel(s.to_string()))
    }
}

/// Key under which a value is stored: either valid for a whole energy or
/// specific to one era. Era-keyed values override energy-keyed ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Period {
    /// Valid for every era taken at this energy.
    Energy(Energy),
    /// Specific to one production era.
    Era(Era),
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Period::Energy(e) => f.pad(e.label()),
            Period::Era(e) => f.pad(e.label()),
        }
    }
}

/// Numeric value categories stored per sample.
///
/// Dataset-description paths (the `xml` side of a sample) resolve through
/// [`crate::SampleDatabase::get_xml`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Category {
    /// Production cross section, in pb.
    CrossSection,
    /// Branching ratio into the sample's final state.
    BranchingRatio,
    /// Higher-order / leading-order cross-section scale factor.
    KFactor,
    /// Ad hoc multiplicative correction for known mismodeling.
    Correction,
    /// Weighted number of generated events.
    NEvents,
}

impl Category {
    /// Sentinel returned by lenient lookups when no value is stored.
    ///
    /// Required categories default to -1.0 so a leaked sentinel is visibly
    /// unphysical; optional ones default to the multiplicative identity.
    pub fn sentinel(self) -> f64 {
        match self {
            Category::CrossSection | Category::NEvents => -1.0,
            Category::BranchingRatio | Category::KFactor | Category::Correction => 1.0,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Category::CrossSection => "cross-section",
            Category::BranchingRatio => "branching-ratio",
            Category::KFactor => "k-factor",
            Category::Correction => "correction",
            Category::NEvents => "n-events",
        };
        f.write_str(s)
    }
}

/// Per-period numeric values with paired provenance strings.
#[derive(Debug, Clone, Default)]
pub struct ValueTable {
    values: BTreeMap<Period, f64>,
    sources: BTreeMap<Period, String>,
}

impl ValueTable {
    fn set(&mut self, at: Period, value: f64, source: Option<&str>) {
        self.values.insert(at, value);
        if let Some(source) = source {
            self.sources.insert(at, source.to_string());
        }
    }

    /// Resolve a value for `(energy, era)`.
    ///
    /// The era-keyed value wins unless it is absent or equals the category
    /// sentinel, in which case the energy-keyed value is returned. `None`
    /// means neither key is present.
    pub(crate) fn resolve(&self, energy: Energy, era: Era, sentinel: f64) -> Option<f64> {
        let era_value = self.values.get(&Period::Era(era)).copied();
        let energy_value = self.values.get(&Period::Energy(energy)).copied();
        match (era_value, energy_value) {
            (Some(v), _) if v != sentinel => Some(v),
            (_, Some(v)) => Some(v),
            (Some(v), None) => Some(v),
            (None, None) => None,
        }
    }

    /// Resolve the provenance string for `(energy, era)`, era key first.
    pub(crate) fn resolve_source(&self, energy: Energy, era: Era) -> Option<&str> {
        self.sources
            .get(&Period::Era(era))
            .or_else(|| self.sources.get(&Period::Energy(energy)))
            .map(String::as_str)
    }
}

/// Per-period dataset-description file paths with paired dataset identifiers.
#[derive(Debug, Clone, Default)]
pub struct XmlTable {
    files: BTreeMap<Period, String>,
    sources: BTreeMap<Period, String>,
}

impl XmlTable {
    fn set(&mut self, at: Period, file: &str, dataset: &str) {
        self.files.insert(at, file.to_string());
        self.sources.insert(at, dataset.to_string());
    }

    pub(crate) fn resolve_file(&self, energy: Energy, era: Era) -> Option<&str> {
        self.files
            .get(&Period::Era(era))
            .or_else(|| self.files.get(&Period::Energy(energy)))
            .map(String::as_str)
    }

    pub(crate) fn resolve_source(&self, energy: Energy, era: Era) -> Option<&str> {
        self.sources
            .get(&Period::Era(era))
            .or_else(|| self.sources.get(&Period::Energy(energy)))
            .map(String::as_str)
    }
}

/// Metadata record for one physics process.
///
/// Every category is optional: collision-data entries carry only event
/// counts and dataset paths, and most simulation entries have no k-factor
/// or correction.
#[derive(Debug, Clone, Default)]
pub struct Sample {
    cross_section: Option<ValueTable>,
    branching_ratio: Option<ValueTable>,
    k_factor: Option<ValueTable>,
    correction: Option<ValueTable>,
    n_events: Option<ValueTable>,
    xml: Option<XmlTable>,
}

impl Sample {
    /// Empty record; populate with the chained setters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a cross section in pb, with its citation.
    pub fn xsec(mut self, at: Period, value: f64, source: &str) -> Self {
        self.cross_section.get_or_insert_with(ValueTable::default).set(at, value, Some(source));
        self
    }

    /// Set a branching ratio, with its citation.
    pub fn br(mut self, at: Period, value: f64, source: &str) -> Self {
        self.branching_ratio.get_or_insert_with(ValueTable::default).set(at, value, Some(source));
        self
    }

    /// Set a k-factor, with its citation.
    pub fn kfactor(mut self, at: Period, value: f64, source: &str) -> Self {
        self.k_factor.get_or_insert_with(ValueTable::default).set(at, value, Some(source));
        self
    }

    /// Set a correction factor, with its citation.
    pub fn corr(mut self, at: Period, value: f64, source: &str) -> Self {
        self.correction.get_or_insert_with(ValueTable::default).set(at, value, Some(source));
        self
    }

    /// Set a weighted generated-event count.
    pub fn nevt(mut self, at: Period, value: f64) -> Self {
        self.n_events.get_or_insert_with(ValueTable::default).set(at, value, None);
        self
    }

    /// Set a dataset-description file path and its source dataset identifier.
    pub fn xml(mut self, at: Period, file: &str, dataset: &str) -> Self {
        self.xml.get_or_insert_with(XmlTable::default).set(at, file, dataset);
        self
    }

    /// The value table for a numeric category, if the sample has one.
    pub(crate) fn table(&self, category: Category) -> Option<&ValueTable> {
        match category {
            Category::CrossSection => self.cross_section.as_ref(),
            Category::BranchingRatio => self.branching_ratio.as_ref(),
            Category::KFactor => self.k_factor.as_ref(),
            Category::Correction => self.correction.as_ref(),
            Category::NEvents => self.n_events.as_ref(),
        }
    }

    pub(crate) fn xml_table(&self) -> Option<&XmlTable> {
        self.xml.as_ref()
    }

    /// Whether the sample carries any value for `category`.
    pub fn has(&self, category: Category) -> bool {
        self.table(category).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const E13: Period = Period::Energy(Energy::Tev13);
    const UL17: Period = Period::Era(Era::UL17);
    const UL18: Period = Period::Era(Era::UL18);

    #[test]
    fn era_value_overrides_energy_value() {
        let sample = Sample::new().xsec(E13, 75.91, "generic").xsec(UL17, 75.92, "rederived");
        let table = sample.table(Category::CrossSection).unwrap();
        assert_eq!(table.resolve(Energy::Tev13, Era::UL17, -1.0), Some(75.92));
        // No UL18-specific value: the energy-keyed one applies.
        assert_eq!(table.resolve(Energy::Tev13, Era::UL18, -1.0), Some(75.91));
    }

    #[test]
    fn sentinel_era_value_falls_back_to_energy() {
        let sample = Sample::new().xsec(E13, 10.0, "generic").xsec(UL18, -1.0, "placeholder");
        let table = sample.table(Category::CrossSection).unwrap();
        assert_eq!(table.resolve(Energy::Tev13, Era::UL18, -1.0), Some(10.0));
    }

    #[test]
    fn lone_sentinel_era_value_is_returned() {
        let sample = Sample::new().nevt(UL17, -1.0);
        let table = sample.table(Category::NEvents).unwrap();
        assert_eq!(table.resolve(Energy::Tev13, Era::UL17, -1.0), Some(-1.0));
        assert_eq!(table.resolve(Energy::Tev13, Era::UL18, -1.0), None);
    }

    #[test]
    fn source_prefers_era_entry() {
        let sample = Sample::new().xsec(E13, 1.0, "generic").xsec(UL17, 2.0, "specific");
        let table = sample.table(Category::CrossSection).unwrap();
        assert_eq!(table.resolve_source(Energy::Tev13, Era::UL17), Some("specific"));
        assert_eq!(table.resolve_source(Energy::Tev13, Era::UL18), Some("generic"));
    }

    #[test]
    fn period_labels_round_trip() {
        for era in Era::ALL {
            assert_eq!(era.label().parse::<Era>().unwrap(), era);
        }
        assert_eq!("13TeV".parse::<Energy>().unwrap(), Energy::Tev13);
        assert!("UL19".parse::<Era>().is_err());
    }
}
