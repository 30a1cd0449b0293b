//! Standard Model Higgs production.

use std::collections::BTreeMap;

use crate::record::Sample;

use super::{E13TEV, UL16PREVFP, UL16POSTVFP, UL17, UL18};

pub(super) fn register(table: &mut BTreeMap<String, Sample>) {
    table.insert(
        "GluGluHToTauTau_M125".to_string(),
        Sample::new()
            .xsec(E13TEV, 3.046, "YR4 N3LO ggF times BR(H->tautau)")
            .nevt(UL16PREVFP, 6120072.43)
            .nevt(UL16POSTVFP, 9191923.86)
            .nevt(UL17, 10398327.74)
            .nevt(UL18, 6686531.45)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/GluGluHToTauTau_M125_CP5_powheg-pythia8_UL16preVFP.xml",
                "/GluGluHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/GluGluHToTauTau_M125_CP5_powheg-pythia8_UL16postVFP.xml",
                "/GluGluHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/GluGluHToTauTau_M125_CP5_powheg-pythia8_UL17.xml",
                "/GluGluHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/GluGluHToTauTau_M125_CP5_powheg-pythia8_UL18.xml",
                "/GluGluHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "VBFHToTauTau_M125".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.2372, "YR4 NNLO VBF times BR(H->tautau)")
            .nevt(UL16PREVFP, 7546221.55)
            .nevt(UL16POSTVFP, 3534517.47)
            .nevt(UL17, 7596377.67)
            .nevt(UL18, 4325896.4)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/VBFHToTauTau_M125_CP5_powheg-pythia8_UL16preVFP.xml",
                "/VBFHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/VBFHToTauTau_M125_CP5_powheg-pythia8_UL16postVFP.xml",
                "/VBFHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/VBFHToTauTau_M125_CP5_powheg-pythia8_UL17.xml",
                "/VBFHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/VBFHToTauTau_M125_CP5_powheg-pythia8_UL18.xml",
                "/VBFHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WplusHToTauTau_M125".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.0527, "YR4 NNLO WH times BR(H->tautau)")
            .nevt(UL16PREVFP, 3652571.15)
            .nevt(UL16POSTVFP, 2534339.27)
            .nevt(UL17, 1273441.25)
            .nevt(UL18, 1130940.88)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WplusHToTauTau_M125_CP5_powheg-pythia8_UL16preVFP.xml",
                "/WplusHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WplusHToTauTau_M125_CP5_powheg-pythia8_UL16postVFP.xml",
                "/WplusHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WplusHToTauTau_M125_CP5_powheg-pythia8_UL17.xml",
                "/WplusHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WplusHToTauTau_M125_CP5_powheg-pythia8_UL18.xml",
                "/WplusHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "WminusHToTauTau_M125".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.0334, "YR4 NNLO WH times BR(H->tautau)")
            .nevt(UL16PREVFP, 4885446.96)
            .nevt(UL16POSTVFP, 3907781.49)
            .nevt(UL17, 1348295.89)
            .nevt(UL18, 4207222.18)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/WminusHToTauTau_M125_CP5_powheg-pythia8_UL16preVFP.xml",
                "/WminusHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/WminusHToTauTau_M125_CP5_powheg-pythia8_UL16postVFP.xml",
                "/WminusHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/WminusHToTauTau_M125_CP5_powheg-pythia8_UL17.xml",
                "/WminusHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/WminusHToTauTau_M125_CP5_powheg-pythia8_UL18.xml",
                "/WminusHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "ZHToTauTau_M125".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.0554, "YR4 NNLO ZH times BR(H->tautau)")
            .nevt(UL16PREVFP, 4913059.22)
            .nevt(UL16POSTVFP, 4705326.08)
            .nevt(UL17, 2720975.66)
            .nevt(UL18, 1202808.81)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/ZHToTauTau_M125_CP5_powheg-pythia8_UL16preVFP.xml",
                "/ZHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/ZHToTauTau_M125_CP5_powheg-pythia8_UL16postVFP.xml",
                "/ZHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/ZHToTauTau_M125_CP5_powheg-pythia8_UL17.xml",
                "/ZHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/ZHToTauTau_M125_CP5_powheg-pythia8_UL18.xml",
                "/ZHToTauTau_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "GluGluHToBB_M125".to_string(),
        Sample::new()
            .xsec(E13TEV, 28.293, "YR4 N3LO ggF times BR(H->bb)")
            .nevt(UL16PREVFP, 2168509.16)
            .nevt(UL16POSTVFP, 9585786.04)
            .nevt(UL17, 7020596.83)
            .nevt(UL18, 4795019.98)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/GluGluHToBB_M125_CP5_powheg-pythia8_UL16preVFP.xml",
                "/GluGluHToBB_M-125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/GluGluHToBB_M125_CP5_powheg-pythia8_UL16postVFP.xml",
                "/GluGluHToBB_M-125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/GluGluHToBB_M125_CP5_powheg-pythia8_UL17.xml",
                "/GluGluHToBB_M-125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/GluGluHToBB_M125_CP5_powheg-pythia8_UL18.xml",
                "/GluGluHToBB_M-125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "VBFHToBB_M125".to_string(),
        Sample::new()
            .xsec(E13TEV, 2.2026, "YR4 NNLO VBF times BR(H->bb)")
            .nevt(UL16PREVFP, 5836167.98)
            .nevt(UL16POSTVFP, 2314529.81)
            .nevt(UL17, 7077630.46)
            .nevt(UL18, 8778118.96)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/VBFHToBB_M125_CP5_powheg-pythia8_UL16preVFP.xml",
                "/VBFHToBB_M-125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/VBFHToBB_M125_CP5_powheg-pythia8_UL16postVFP.xml",
                "/VBFHToBB_M-125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/VBFHToBB_M125_CP5_powheg-pythia8_UL17.xml",
                "/VBFHToBB_M-125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/VBFHToBB_M125_CP5_powheg-pythia8_UL18.xml",
                "/VBFHToBB_M-125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
}
