//! W+jets production, inclusive and HT-binned.
//!
//! HT bins carry the LO cross section with the inclusive NNLO/LO k-factor
//! and a residual stitching correction on top.

use std::collections::BTreeMap;

use crate::record::Sample;

use super::{E13TEV, UL16PREVFP, UL16POSTVFP, UL17, UL18};

pub(super) fn register(table: &mut BTreeMap<String, Sample>) {
    table.insert(
        "WJetsToLNu".to_string(),
        Sample::new()
            .xsec(E13TEV, 61526.7, "NNLO FEWZ 3.1, arXiv:1402.4140")
            .nevt(UL16PREVFP, 72983618.98)
            .nevt(UL16POSTVFP, 157557695.98)
            .nevt(UL17, 112100641.39)
            .nevt(UL18, 173982929.94)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WJetsToLNu_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/WJetsToLNu_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WJetsToLNu_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/WJetsToLNu_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WJetsToLNu_CP5_madgraphMLM-pythia8_UL17.xml",
                "/WJetsToLNu_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WJetsToLNu_CP5_madgraphMLM-pythia8_UL18.xml",
                "/WJetsToLNu_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WJetsToLNu_HT-70To100".to_string(),
        Sample::new()
            .xsec(E13TEV, 1264.0, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.21, "NNLO/LO inclusive W ratio, FEWZ 3.1")
            .corr(E13TEV, 0.977, "LO HT-stitching residual, internal fit")
            .nevt(UL16PREVFP, 60010822.17)
            .nevt(UL16POSTVFP, 72300489.08)
            .nevt(UL17, 35940409.03)
            .nevt(UL18, 32152346.06)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WJetsToLNu_HT-70To100_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/WJetsToLNu_HT-70To100_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WJetsToLNu_HT-70To100_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/WJetsToLNu_HT-70To100_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WJetsToLNu_HT-70To100_CP5_madgraphMLM-pythia8_UL17.xml",
                "/WJetsToLNu_HT-70To100_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WJetsToLNu_HT-70To100_CP5_madgraphMLM-pythia8_UL18.xml",
                "/WJetsToLNu_HT-70To100_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WJetsToLNu_HT-100To200".to_string(),
        Sample::new()
            .xsec(E13TEV, 1256.0, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.21, "NNLO/LO inclusive W ratio, FEWZ 3.1")
            .corr(E13TEV, 0.996, "LO HT-stitching residual, internal fit")
            .corr(UL16PREVFP, 0.993, "LO HT-stitching residual, internal fit")
            .nevt(UL16PREVFP, 57519323.06)
            .nevt(UL16POSTVFP, 15058546.0)
            .nevt(UL17, 29850442.11)
            .nevt(UL18, 74726478.07)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WJetsToLNu_HT-100To200_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/WJetsToLNu_HT-100To200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WJetsToLNu_HT-100To200_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/WJetsToLNu_HT-100To200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WJetsToLNu_HT-100To200_CP5_madgraphMLM-pythia8_UL17.xml",
                "/WJetsToLNu_HT-100To200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WJetsToLNu_HT-100To200_CP5_madgraphMLM-pythia8_UL18.xml",
                "/WJetsToLNu_HT-100To200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WJetsToLNu_HT-200To400".to_string(),
        Sample::new()
            .xsec(E13TEV, 335.5, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.21, "NNLO/LO inclusive W ratio, FEWZ 3.1")
            .corr(E13TEV, 0.995, "LO HT-stitching residual, internal fit")
            .corr(UL16PREVFP, 1.0, "LO HT-stitching residual, internal fit")
            .nevt(UL16PREVFP, 54358780.73)
            .nevt(UL16POSTVFP, 30679089.77)
            .nevt(UL17, 36361748.46)
            .nevt(UL18, 58869976.56)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WJetsToLNu_HT-200To400_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/WJetsToLNu_HT-200To400_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WJetsToLNu_HT-200To400_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/WJetsToLNu_HT-200To400_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WJetsToLNu_HT-200To400_CP5_madgraphMLM-pythia8_UL17.xml",
                "/WJetsToLNu_HT-200To400_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WJetsToLNu_HT-200To400_CP5_madgraphMLM-pythia8_UL18.xml",
                "/WJetsToLNu_HT-200To400_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WJetsToLNu_HT-400To600".to_string(),
        Sample::new()
            .xsec(E13TEV, 45.25, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.21, "NNLO/LO inclusive W ratio, FEWZ 3.1")
            .corr(E13TEV, 0.993, "LO HT-stitching residual, internal fit")
            .nevt(UL16PREVFP, 68075938.95)
            .nevt(UL16POSTVFP, 52170649.76)
            .nevt(UL17, 39968863.35)
            .nevt(UL18, 23593750.75)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WJetsToLNu_HT-400To600_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/WJetsToLNu_HT-400To600_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WJetsToLNu_HT-400To600_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/WJetsToLNu_HT-400To600_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WJetsToLNu_HT-400To600_CP5_madgraphMLM-pythia8_UL17.xml",
                "/WJetsToLNu_HT-400To600_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WJetsToLNu_HT-400To600_CP5_madgraphMLM-pythia8_UL18.xml",
                "/WJetsToLNu_HT-400To600_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WJetsToLNu_HT-600To800".to_string(),
        Sample::new()
            .xsec(E13TEV, 10.97, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.21, "NNLO/LO inclusive W ratio, FEWZ 3.1")
            .corr(E13TEV, 0.985, "LO HT-stitching residual, internal fit")
            .nevt(UL16PREVFP, 61961043.76)
            .nevt(UL16POSTVFP, 83562197.94)
            .nevt(UL17, 78699803.34)
            .nevt(UL18, 9170260.98)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WJetsToLNu_HT-600To800_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/WJetsToLNu_HT-600To800_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WJetsToLNu_HT-600To800_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/WJetsToLNu_HT-600To800_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WJetsToLNu_HT-600To800_CP5_madgraphMLM-pythia8_UL17.xml",
                "/WJetsToLNu_HT-600To800_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WJetsToLNu_HT-600To800_CP5_madgraphMLM-pythia8_UL18.xml",
                "/WJetsToLNu_HT-600To800_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WJetsToLNu_HT-800To1200".to_string(),
        Sample::new()
            .xsec(E13TEV, 4.933, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.21, "NNLO/LO inclusive W ratio, FEWZ 3.1")
            .corr(E13TEV, 0.961, "LO HT-stitching residual, internal fit")
            .nevt(UL16PREVFP, 76982994.19)
            .nevt(UL16POSTVFP, 68783142.22)
            .nevt(UL17, 71294875.02)
            .nevt(UL18, 34636651.39)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WJetsToLNu_HT-800To1200_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/WJetsToLNu_HT-800To1200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WJetsToLNu_HT-800To1200_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/WJetsToLNu_HT-800To1200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WJetsToLNu_HT-800To1200_CP5_madgraphMLM-pythia8_UL17.xml",
                "/WJetsToLNu_HT-800To1200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WJetsToLNu_HT-800To1200_CP5_madgraphMLM-pythia8_UL18.xml",
                "/WJetsToLNu_HT-800To1200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WJetsToLNu_HT-1200To2500".to_string(),
        Sample::new()
            .xsec(E13TEV, 1.16, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.21, "NNLO/LO inclusive W ratio, FEWZ 3.1")
            .corr(E13TEV, 0.98, "LO HT-stitching residual, internal fit")
            .nevt(UL16PREVFP, 86023413.47)
            .nevt(UL16POSTVFP, 69453652.49)
            .nevt(UL17, 49999081.52)
            .nevt(UL18, 84206830.28)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WJetsToLNu_HT-1200To2500_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/WJetsToLNu_HT-1200To2500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WJetsToLNu_HT-1200To2500_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/WJetsToLNu_HT-1200To2500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WJetsToLNu_HT-1200To2500_CP5_madgraphMLM-pythia8_UL17.xml",
                "/WJetsToLNu_HT-1200To2500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WJetsToLNu_HT-1200To2500_CP5_madgraphMLM-pythia8_UL18.xml",
                "/WJetsToLNu_HT-1200To2500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WJetsToLNu_HT-2500ToInf".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.008001, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.21, "NNLO/LO inclusive W ratio, FEWZ 3.1")
            .corr(E13TEV, 1.037, "LO HT-stitching residual, internal fit")
            .nevt(UL16PREVFP, 59107343.49)
            .nevt(UL16POSTVFP, 59730608.29)
            .nevt(UL17, 86840108.35)
            .nevt(UL18, 77237749.01)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WJetsToLNu_HT-2500ToInf_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/WJetsToLNu_HT-2500ToInf_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WJetsToLNu_HT-2500ToInf_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/WJetsToLNu_HT-2500ToInf_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WJetsToLNu_HT-2500ToInf_CP5_madgraphMLM-pythia8_UL17.xml",
                "/WJetsToLNu_HT-2500ToInf_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WJetsToLNu_HT-2500ToInf_CP5_madgraphMLM-pythia8_UL18.xml",
                "/WJetsToLNu_HT-2500ToInf_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
}
