//! Collision-data entries: event counts and dataset files only.
//!
//! The MuonEG RunE/RunF UL17 rows carry UL18 dataset strings; that is how
//! the upstream bookkeeping records them, so they are preserved verbatim.

use std::collections::BTreeMap;

use crate::record::Sample;

use super::{UL16PREVFP, UL16POSTVFP, UL17, UL18};

pub(super) fn register(table: &mut BTreeMap<String, Sample>) {
    table.insert(
        "SingleMuon_RunA".to_string(),
        Sample::new()
            .nevt(UL18, 299069675.0)
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/SingleMuon_RunA_UL18.xml",
                "/SingleMuon/Run2018A-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleMuon_RunB".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 210859358.0)
            .nevt(UL17, 720085303.0)
            .nevt(UL18, 702613567.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleMuon_RunB_UL16preVFP.xml",
                "/SingleMuon/Run2016B-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleMuon_RunB_UL17.xml",
                "/SingleMuon/Run2017B-UL2017_MiniAODv2-v1/MINIAOD",
            )
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/SingleMuon_RunB_UL18.xml",
                "/SingleMuon/Run2018B-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleMuon_RunC".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 153523021.0)
            .nevt(UL17, 168925710.0)
            .nevt(UL18, 675317093.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleMuon_RunC_UL16preVFP.xml",
                "/SingleMuon/Run2016C-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleMuon_RunC_UL17.xml",
                "/SingleMuon/Run2017C-UL2017_MiniAODv2-v1/MINIAOD",
            )
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/SingleMuon_RunC_UL18.xml",
                "/SingleMuon/Run2018C-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleMuon_RunD".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 446880093.0)
            .nevt(UL17, 298135546.0)
            .nevt(UL18, 401104843.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleMuon_RunD_UL16preVFP.xml",
                "/SingleMuon/Run2016D-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleMuon_RunD_UL17.xml",
                "/SingleMuon/Run2017D-UL2017_MiniAODv2-v1/MINIAOD",
            )
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/SingleMuon_RunD_UL18.xml",
                "/SingleMuon/Run2018D-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleMuon_RunE".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 229551903.0)
            .nevt(UL17, 717517510.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleMuon_RunE_UL16preVFP.xml",
                "/SingleMuon/Run2016E-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleMuon_RunE_UL17.xml",
                "/SingleMuon/Run2017E-UL2017_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleMuon_RunF".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 769005891.0)
            .nevt(UL16POSTVFP, 174156244.0)
            .nevt(UL17, 194511402.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleMuon_RunF_UL16preVFP.xml",
                "/SingleMuon/Run2016F-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/data/UL16postVFP/SingleMuon_RunF_UL16postVFP.xml",
                "/SingleMuon/Run2016F-UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleMuon_RunF_UL17.xml",
                "/SingleMuon/Run2017F-UL2017_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleMuon_RunG".to_string(),
        Sample::new()
            .nevt(UL16POSTVFP, 249230179.0)
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/data/UL16postVFP/SingleMuon_RunG_UL16postVFP.xml",
                "/SingleMuon/Run2016G-UL2016_MiniAODv2-v2/MINIAOD",
            ),
    );
    table.insert(
        "SingleMuon_RunH".to_string(),
        Sample::new()
            .nevt(UL16POSTVFP, 171670649.0)
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/data/UL16postVFP/SingleMuon_RunH_UL16postVFP.xml",
                "/SingleMuon/Run2016H-UL2016_MiniAODv2-v2/MINIAOD",
            ),
    );
    table.insert(
        "SingleElectron_RunB".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 470648881.0)
            .nevt(UL17, 87484697.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleElectron_RunB_UL16preVFP.xml",
                "/SingleElectron/Run2016B-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleElectron_RunB_UL17.xml",
                "/SingleElectron/Run2017B-UL2017_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleElectron_RunC".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 395920052.0)
            .nevt(UL17, 362333813.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleElectron_RunC_UL16preVFP.xml",
                "/SingleElectron/Run2016C-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleElectron_RunC_UL17.xml",
                "/SingleElectron/Run2017C-UL2017_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleElectron_RunD".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 514904047.0)
            .nevt(UL17, 374116092.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleElectron_RunD_UL16preVFP.xml",
                "/SingleElectron/Run2016D-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleElectron_RunD_UL17.xml",
                "/SingleElectron/Run2017D-UL2017_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleElectron_RunE".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 389535577.0)
            .nevt(UL17, 405054103.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleElectron_RunE_UL16preVFP.xml",
                "/SingleElectron/Run2016E-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleElectron_RunE_UL17.xml",
                "/SingleElectron/Run2017E-UL2017_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleElectron_RunF".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 530600430.0)
            .nevt(UL16POSTVFP, 319968413.0)
            .nevt(UL17, 521248195.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/SingleElectron_RunF_UL16preVFP.xml",
                "/SingleElectron/Run2016F-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/data/UL16postVFP/SingleElectron_RunF_UL16postVFP.xml",
                "/SingleElectron/Run2016F-UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/SingleElectron_RunF_UL17.xml",
                "/SingleElectron/Run2017F-UL2017_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "SingleElectron_RunG".to_string(),
        Sample::new()
            .nevt(UL16POSTVFP, 529855115.0)
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/data/UL16postVFP/SingleElectron_RunG_UL16postVFP.xml",
                "/SingleElectron/Run2016G-UL2016_MiniAODv2-v2/MINIAOD",
            ),
    );
    table.insert(
        "SingleElectron_RunH".to_string(),
        Sample::new()
            .nevt(UL16POSTVFP, 498986407.0)
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/data/UL16postVFP/SingleElectron_RunH_UL16postVFP.xml",
                "/SingleElectron/Run2016H-UL2016_MiniAODv2-v2/MINIAOD",
            ),
    );
    table.insert(
        "EGamma_RunA".to_string(),
        Sample::new()
            .nevt(UL18, 650603266.0)
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/EGamma_RunA_UL18.xml",
                "/EGamma/Run2018A-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "EGamma_RunB".to_string(),
        Sample::new()
            .nevt(UL18, 393828101.0)
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/EGamma_RunB_UL18.xml",
                "/EGamma/Run2018B-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "EGamma_RunC".to_string(),
        Sample::new()
            .nevt(UL18, 680629262.0)
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/EGamma_RunC_UL18.xml",
                "/EGamma/Run2018C-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "EGamma_RunD".to_string(),
        Sample::new()
            .nevt(UL18, 182949290.0)
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/EGamma_RunD_UL18.xml",
                "/EGamma/Run2018D-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "MuonEG_RunA".to_string(),
        Sample::new()
            .nevt(UL18, 169749345.0)
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/MuonEG_RunA_UL18.xml",
                "/MuonEG/Run2018A-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "MuonEG_RunB".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 94310908.0)
            .nevt(UL17, 99876499.0)
            .nevt(UL18, 88410489.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/MuonEG_RunB_UL16preVFP.xml",
                "/MuonEG/Run2016B-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/MuonEG_RunB_UL17.xml",
                "/MuonEG/Run2017B-UL2017_MiniAODv2-v1/MINIAOD",
            )
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/MuonEG_RunB_UL18.xml",
                "/MuonEG/Run2018B-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "MuonEG_RunC".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 150563633.0)
            .nevt(UL17, 40755963.0)
            .nevt(UL18, 31834602.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/MuonEG_RunC_UL16preVFP.xml",
                "/MuonEG/Run2016C-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/MuonEG_RunC_UL17.xml",
                "/MuonEG/Run2017C-UL2017_MiniAODv2-v1/MINIAOD",
            )
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/MuonEG_RunC_UL18.xml",
                "/MuonEG/Run2018C-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "MuonEG_RunD".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 174404300.0)
            .nevt(UL17, 187243123.0)
            .nevt(UL18, 82324808.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/MuonEG_RunD_UL16preVFP.xml",
                "/MuonEG/Run2016D-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/MuonEG_RunD_UL17.xml",
                "/MuonEG/Run2017D-UL2017_MiniAODv2-v1/MINIAOD",
            )
            .xml(
                UL18,
                "RunII_106X_v2/data/UL18/MuonEG_RunD_UL18.xml",
                "/MuonEG/Run2018D-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "MuonEG_RunE".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 67593123.0)
            .nevt(UL17, 136909936.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/MuonEG_RunE_UL16preVFP.xml",
                "/MuonEG/Run2016E-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            // Upstream records the UL18 dataset string for this UL17 run.
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/MuonEG_RunE_UL17.xml",
                "/MuonEG/Run2018E-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "MuonEG_RunF".to_string(),
        Sample::new()
            .nevt(UL16PREVFP, 30804200.0)
            .nevt(UL16POSTVFP, 188254111.0)
            .nevt(UL17, 32313503.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/data/UL16preVFP/MuonEG_RunF_UL16preVFP.xml",
                "/MuonEG/Run2016F-HIPM_UL2016_MiniAODv2-v2/MINIAOD",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/data/UL16postVFP/MuonEG_RunF_UL16postVFP.xml",
                "/MuonEG/Run2016F-UL2016_MiniAODv2-v2/MINIAOD",
            )
            // Upstream records the UL18 dataset string for this UL17 run.
            .xml(
                UL17,
                "RunII_106X_v2/data/UL17/MuonEG_RunF_UL17.xml",
                "/MuonEG/Run2018F-UL2018_MiniAODv2-v1/MINIAOD",
            ),
    );
    table.insert(
        "MuonEG_RunG".to_string(),
        Sample::new()
            .nevt(UL16POSTVFP, 48256239.0)
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/data/UL16postVFP/MuonEG_RunG_UL16postVFP.xml",
                "/MuonEG/Run2016G-UL2016_MiniAODv2-v2/MINIAOD",
            ),
    );
    table.insert(
        "MuonEG_RunH".to_string(),
        Sample::new()
            .nevt(UL16POSTVFP, 175004069.0)
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/data/UL16postVFP/MuonEG_RunH_UL16postVFP.xml",
                "/MuonEG/Run2016H-UL2016_MiniAODv2-v2/MINIAOD",
            ),
    );
}
