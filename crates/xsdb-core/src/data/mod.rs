//! Builtin sample metadata table
//!
//! Inert data, grouped by process family. Cross sections are in pb; each
//! value carries its provenance next to it. Dataset-description paths are
//! relative to the datasets directory handed to the verification scan.

mod data_runs;
mod diboson;
mod dyjets;
mod higgs;
mod qcd;
mod singletop;
mod ttbar;
mod wjets;

use std::collections::BTreeMap;

use crate::record::{Energy, Era, Period, Sample};

pub(crate) const E13TEV: Period = Period::Energy(Energy::Tev13);
pub(crate) const UL16PREVFP: Period = Period::Era(Era::UL16preVFP);
pub(crate) const UL16POSTVFP: Period = Period::Era(Era::UL16postVFP);
pub(crate) const UL17: Period = Period::Era(Era::UL17);
pub(crate) const UL18: Period = Period::Era(Era::UL18);

/// Assemble the builtin table. Called once per database construction.
pub fn builtin_table() -> BTreeMap<String, Sample> {
    let mut table = BTreeMap::new();
    ttbar::register(&mut table);
    singletop::register(&mut table);
    wjets::register(&mut table);
    dyjets::register(&mut table);
    diboson::register(&mut table);
    qcd::register(&mut table);
    higgs::register(&mut table);
    data_runs::register(&mut table);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Category;

    #[test]
    fn table_is_populated() {
        let table = builtin_table();
        assert!(table.len() > 90, "unexpectedly small table: {}", table.len());
        for name in ["TTTo2L2Nu", "WW", "WJetsToLNu", "QCD_Pt_470to600", "SingleMuon_RunB"] {
            assert!(table.contains_key(name), "missing entry: {name}");
        }
    }

    #[test]
    fn simulation_entries_carry_event_counts() {
        let table = builtin_table();
        for (name, sample) in &table {
            if sample.has(Category::CrossSection) {
                assert!(sample.has(Category::NEvents), "{name} has a cross section but no event count");
            }
        }
    }

    #[test]
    fn data_entries_carry_no_simulation_values() {
        let table = builtin_table();
        for stream in ["SingleMuon", "SingleElectron", "EGamma", "MuonEG"] {
            for (name, sample) in table.iter().filter(|(n, _)| n.starts_with(stream)) {
                assert!(!sample.has(Category::CrossSection), "{name} should not have a cross section");
                assert!(sample.has(Category::NEvents), "{name} should have an event count");
            }
        }
    }

    #[test]
    fn muon_eg_ul17_sources_follow_upstream_bookkeeping() {
        // Known upstream oddity: the UL17 RunE/RunF rows record UL18 dataset
        // strings. Preserved verbatim; this test pins the quirk so a
        // well-meaning cleanup shows up as a diff.
        let db = crate::SampleDatabase::new();
        for name in ["MuonEG_RunE", "MuonEG_RunF"] {
            let source = db.get_xml_source(name, Energy::Tev13, Era::UL17).unwrap();
            assert!(source.contains("/Run2018"), "{name}: {source}");
            // The dataset-description file itself still lives under UL17.
            let file = db.get_xml(name, Energy::Tev13, Era::UL17).unwrap();
            assert!(file.contains("/UL17/"), "{name}: {file}");
        }
    }
}
