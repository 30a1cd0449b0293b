//! Diboson production.
//!
//! The inclusive WW entry keeps the UL17 re-derived cross section next to
//! the generic 13TeV one; era-specific values take precedence in lookups.

use std::collections::BTreeMap;

use crate::record::Sample;

use super::{E13TEV, UL16PREVFP, UL16POSTVFP, UL17, UL18};

pub(super) fn register(table: &mut BTreeMap<String, Sample>) {
    table.insert(
        "WW".to_string(),
        Sample::new()
            .xsec(E13TEV, 75.91, "NNLO qq->WW, arXiv:1408.5243")
            .xsec(UL17, 75.92, "GenXSecAnalyzer on the UL17 production")
            .nevt(UL16PREVFP, 67659379.33)
            .nevt(UL16POSTVFP, 34478802.34)
            .nevt(UL17, 11051717.06)
            .nevt(UL18, 25854597.85)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WW_CP5_pythia8_UL16preVFP.xml",
                "/WW_TuneCP5_13TeV-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WW_CP5_pythia8_UL16postVFP.xml",
                "/WW_TuneCP5_13TeV-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WW_CP5_pythia8_UL17.xml",
                "/WW_TuneCP5_13TeV-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WW_CP5_pythia8_UL18.xml",
                "/WW_TuneCP5_13TeV-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WZ".to_string(),
        Sample::new()
            .xsec(E13TEV, 27.56, "NLO MCFM 8.0")
            .nevt(UL16PREVFP, 10292529.81)
            .nevt(UL16POSTVFP, 39467159.41)
            .nevt(UL17, 30451655.21)
            .nevt(UL18, 28142151.82)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WZ_CP5_pythia8_UL16preVFP.xml",
                "/WZ_TuneCP5_13TeV-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WZ_CP5_pythia8_UL16postVFP.xml",
                "/WZ_TuneCP5_13TeV-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WZ_CP5_pythia8_UL17.xml",
                "/WZ_TuneCP5_13TeV-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WZ_CP5_pythia8_UL18.xml",
                "/WZ_TuneCP5_13TeV-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "ZZ".to_string(),
        Sample::new()
            .xsec(E13TEV, 12.14, "NLO MCFM 8.0")
            .nevt(UL16PREVFP, 27660531.58)
            .nevt(UL16POSTVFP, 7610216.97)
            .nevt(UL17, 26969873.02)
            .nevt(UL18, 22740680.98)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/ZZ_CP5_pythia8_UL16preVFP.xml",
                "/ZZ_TuneCP5_13TeV-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/ZZ_CP5_pythia8_UL16postVFP.xml",
                "/ZZ_TuneCP5_13TeV-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/ZZ_CP5_pythia8_UL17.xml",
                "/ZZ_TuneCP5_13TeV-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/ZZ_CP5_pythia8_UL18.xml",
                "/ZZ_TuneCP5_13TeV-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WWTo2L2Nu".to_string(),
        Sample::new()
            .xsec(E13TEV, 12.178, "NNLO times BR, arXiv:1408.5243")
            .nevt(UL16PREVFP, 76335291.37)
            .nevt(UL16POSTVFP, 52871910.14)
            .nevt(UL17, 69842665.85)
            .nevt(UL18, 27656195.12)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WWTo2L2Nu_CP5_powheg-pythia8_UL16preVFP.xml",
                "/WWTo2L2Nu_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WWTo2L2Nu_CP5_powheg-pythia8_UL16postVFP.xml",
                "/WWTo2L2Nu_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WWTo2L2Nu_CP5_powheg-pythia8_UL17.xml",
                "/WWTo2L2Nu_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WWTo2L2Nu_CP5_powheg-pythia8_UL18.xml",
                "/WWTo2L2Nu_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WZTo3LNu".to_string(),
        Sample::new()
            .xsec(E13TEV, 4.42, "NLO amc@NLO, XSDB")
            .nevt(UL16PREVFP, 29034742.73)
            .nevt(UL17, 37530166.46)
            .nevt(UL18, 53107313.6)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WZTo3LNu_CP5_amcatnloFXFX-pythia8_UL16preVFP.xml",
                "/WZTo3LNu_TuneCP5_13TeV-amcatnloFXFX-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WZTo3LNu_CP5_amcatnloFXFX-pythia8_UL17.xml",
                "/WZTo3LNu_TuneCP5_13TeV-amcatnloFXFX-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WZTo3LNu_CP5_amcatnloFXFX-pythia8_UL18.xml",
                "/WZTo3LNu_TuneCP5_13TeV-amcatnloFXFX-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "ZZTo2L2Nu".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.564, "NNLO, arXiv:1405.2219")
            .nevt(UL16PREVFP, 58931527.34)
            .nevt(UL16POSTVFP, 20934079.59)
            .nevt(UL17, 39427065.23)
            .nevt(UL18, 54185355.0)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/ZZTo2L2Nu_CP5_powheg-pythia8_UL16preVFP.xml",
                "/ZZTo2L2Nu_TuneCP5_13TeV_powheg_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/ZZTo2L2Nu_CP5_powheg-pythia8_UL16postVFP.xml",
                "/ZZTo2L2Nu_TuneCP5_13TeV_powheg_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/ZZTo2L2Nu_CP5_powheg-pythia8_UL17.xml",
                "/ZZTo2L2Nu_TuneCP5_13TeV_powheg_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/ZZTo2L2Nu_CP5_powheg-pythia8_UL18.xml",
                "/ZZTo2L2Nu_TuneCP5_13TeV_powheg_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "ZZTo4L".to_string(),
        Sample::new()
            .xsec(E13TEV, 1.256, "NNLO, arXiv:1405.2219")
            .nevt(UL16PREVFP, 58698263.01)
            .nevt(UL16POSTVFP, 63783218.11)
            .nevt(UL17, 36948351.8)
            .nevt(UL18, 79686729.33)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/ZZTo4L_CP5_powheg-pythia8_UL16preVFP.xml",
                "/ZZTo4L_TuneCP5_13TeV_powheg_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/ZZTo4L_CP5_powheg-pythia8_UL16postVFP.xml",
                "/ZZTo4L_TuneCP5_13TeV_powheg_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/ZZTo4L_CP5_powheg-pythia8_UL17.xml",
                "/ZZTo4L_TuneCP5_13TeV_powheg_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/ZZTo4L_CP5_powheg-pythia8_UL18.xml",
                "/ZZTo4L_TuneCP5_13TeV_powheg_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
}
