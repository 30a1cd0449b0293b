//! Top-quark pair production.
//!
//! Inclusive ttbar is split by decay channel; the 831.76 pb NNLO+NNLL cross
//! section is shared and the channel branching ratios are kept as separate
//! records so the split stays visible in lookups.

use std::collections::BTreeMap;

use crate::record::Sample;

use super::{E13TEV, UL16PREVFP, UL16POSTVFP, UL17, UL18};

pub(super) fn register(table: &mut BTreeMap<String, Sample>) {
    table.insert(
        "TTTo2L2Nu".to_string(),
        Sample::new()
            .xsec(E13TEV, 831.76, "NNLO+NNLL top++ 2.0, arXiv:1303.6254")
            .br(E13TEV, 0.105, "PDG 2020, (W->lnu)^2 summed over e/mu/tau")
            .nevt(UL16PREVFP, 5288320746.36)
            .nevt(UL16POSTVFP, 5740845487.96)
            .nevt(UL17, 7545276778.28)
            .nevt(UL18, 2225496839.1)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/TTTo2L2Nu_CP5_powheg-pythia8_UL16preVFP.xml",
                "/TTTo2L2Nu_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TTTo2L2Nu_CP5_powheg-pythia8_UL16postVFP.xml",
                "/TTTo2L2Nu_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TTTo2L2Nu_CP5_powheg-pythia8_UL17.xml",
                "/TTTo2L2Nu_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TTTo2L2Nu_CP5_powheg-pythia8_UL18.xml",
                "/TTTo2L2Nu_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TTToSemiLeptonic".to_string(),
        Sample::new()
            .xsec(E13TEV, 831.76, "NNLO+NNLL top++ 2.0, arXiv:1303.6254")
            .br(E13TEV, 0.438, "PDG 2020, 2 * BR(W->lnu) * BR(W->qq)")
            .nevt(UL16PREVFP, 29682416490.77)
            .nevt(UL16POSTVFP, 36670216383.94)
            .nevt(UL17, 31825782358.9)
            .nevt(UL18, 25086315427.13)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/TTToSemiLeptonic_CP5_powheg-pythia8_UL16preVFP.xml",
                "/TTToSemiLeptonic_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TTToSemiLeptonic_CP5_powheg-pythia8_UL16postVFP.xml",
                "/TTToSemiLeptonic_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TTToSemiLeptonic_CP5_powheg-pythia8_UL17.xml",
                "/TTToSemiLeptonic_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TTToSemiLeptonic_CP5_powheg-pythia8_UL18.xml",
                "/TTToSemiLeptonic_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TTToHadronic".to_string(),
        Sample::new()
            .xsec(E13TEV, 831.76, "NNLO+NNLL top++ 2.0, arXiv:1303.6254")
            .br(E13TEV, 0.457, "PDG 2020, BR(W->qq)^2")
            .nevt(UL16PREVFP, 18372662973.58)
            .nevt(UL16POSTVFP, 14442719726.78)
            .nevt(UL17, 17615962809.41)
            .nevt(UL18, 18378206526.04)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/TTToHadronic_CP5_powheg-pythia8_UL16preVFP.xml",
                "/TTToHadronic_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TTToHadronic_CP5_powheg-pythia8_UL16postVFP.xml",
                "/TTToHadronic_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TTToHadronic_CP5_powheg-pythia8_UL17.xml",
                "/TTToHadronic_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TTToHadronic_CP5_powheg-pythia8_UL18.xml",
                "/TTToHadronic_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TT_Mtt-700to1000".to_string(),
        Sample::new()
            .xsec(E13TEV, 64.35, "top++ 2.0 scaled to the mtt slice, TOP-18-003")
            .nevt(UL16POSTVFP, 138425199.75)
            .nevt(UL17, 168038569.99)
            .nevt(UL18, 94561423.35)
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TT_Mtt-700to1000_CP5_powheg-pythia8_UL16postVFP.xml",
                "/TT_Mtt-700to1000_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TT_Mtt-700to1000_CP5_powheg-pythia8_UL17.xml",
                "/TT_Mtt-700to1000_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TT_Mtt-700to1000_CP5_powheg-pythia8_UL18.xml",
                "/TT_Mtt-700to1000_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TT_Mtt-1000toInf".to_string(),
        Sample::new()
            .xsec(E13TEV, 16.42, "top++ 2.0 scaled to the mtt slice, TOP-18-003")
            .nevt(UL16POSTVFP, 27823966.37)
            .nevt(UL17, 79479171.4)
            .nevt(UL18, 163210400.27)
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TT_Mtt-1000toInf_CP5_powheg-pythia8_UL16postVFP.xml",
                "/TT_Mtt-1000toInf_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TT_Mtt-1000toInf_CP5_powheg-pythia8_UL17.xml",
                "/TT_Mtt-1000toInf_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TT_Mtt-1000toInf_CP5_powheg-pythia8_UL18.xml",
                "/TT_Mtt-1000toInf_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TTZToLLNuNu_M-10".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.2529, "LHC Higgs XS WG YR4, arXiv:1610.07922")
            .nevt(UL16PREVFP, 5253278.34)
            .nevt(UL16POSTVFP, 6218829.84)
            .nevt(UL17, 3698250.31)
            .nevt(UL18, 7563330.9)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/TTZToLLNuNu_M-10_CP5_amcatnlo-pythia8_UL16preVFP.xml",
                "/TTZToLLNuNu_M-10_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TTZToLLNuNu_M-10_CP5_amcatnlo-pythia8_UL16postVFP.xml",
                "/TTZToLLNuNu_M-10_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TTZToLLNuNu_M-10_CP5_amcatnlo-pythia8_UL17.xml",
                "/TTZToLLNuNu_M-10_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TTZToLLNuNu_M-10_CP5_amcatnlo-pythia8_UL18.xml",
                "/TTZToLLNuNu_M-10_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TTZToQQ".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.5297, "LHC Higgs XS WG YR4, arXiv:1610.07922")
            .nevt(UL16PREVFP, 4281594.52)
            .nevt(UL16POSTVFP, 5892424.25)
            .nevt(UL17, 4060734.55)
            .nevt(UL18, 5641851.41)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/TTZToQQ_CP5_amcatnlo-pythia8_UL16preVFP.xml",
                "/TTZToQQ_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TTZToQQ_CP5_amcatnlo-pythia8_UL16postVFP.xml",
                "/TTZToQQ_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TTZToQQ_CP5_amcatnlo-pythia8_UL17.xml",
                "/TTZToQQ_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TTZToQQ_CP5_amcatnlo-pythia8_UL18.xml",
                "/TTZToQQ_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TTWJetsToLNu".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.2043, "LHC Higgs XS WG YR4, arXiv:1610.07922")
            .nevt(UL16PREVFP, 4888265.91)
            .nevt(UL16POSTVFP, 5959571.3)
            .nevt(UL17, 5838786.67)
            .nevt(UL18, 2165570.38)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/TTWJetsToLNu_CP5_amcatnloFXFX-madspin-pythia8_UL16preVFP.xml",
                "/TTWJetsToLNu_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TTWJetsToLNu_CP5_amcatnloFXFX-madspin-pythia8_UL16postVFP.xml",
                "/TTWJetsToLNu_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TTWJetsToLNu_CP5_amcatnloFXFX-madspin-pythia8_UL17.xml",
                "/TTWJetsToLNu_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TTWJetsToLNu_CP5_amcatnloFXFX-madspin-pythia8_UL18.xml",
                "/TTWJetsToLNu_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TTWJetsToQQ".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.4062, "LHC Higgs XS WG YR4, arXiv:1610.07922")
            .nevt(UL16PREVFP, 502558.84)
            .nevt(UL16POSTVFP, 630681.19)
            .nevt(UL17, 711209.9)
            .nevt(UL18, 819810.72)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/TTWJetsToQQ_CP5_amcatnloFXFX-madspin-pythia8_UL16preVFP.xml",
                "/TTWJetsToQQ_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TTWJetsToQQ_CP5_amcatnloFXFX-madspin-pythia8_UL16postVFP.xml",
                "/TTWJetsToQQ_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TTWJetsToQQ_CP5_amcatnloFXFX-madspin-pythia8_UL17.xml",
                "/TTWJetsToQQ_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TTWJetsToQQ_CP5_amcatnloFXFX-madspin-pythia8_UL18.xml",
                "/TTWJetsToQQ_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TTGJets".to_string(),
        Sample::new()
            .xsec(E13TEV, 3.697, "NLO amc@NLO, XSDB")
            .nevt(UL16PREVFP, 7305031.83)
            .nevt(UL16POSTVFP, 16892385.02)
            .nevt(UL17, 11121046.92)
            .nevt(UL18, 8393212.78)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/TTGJets_CP5_amcatnloFXFX-madspin-pythia8_UL16preVFP.xml",
                "/TTGJets_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TTGJets_CP5_amcatnloFXFX-madspin-pythia8_UL16postVFP.xml",
                "/TTGJets_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TTGJets_CP5_amcatnloFXFX-madspin-pythia8_UL17.xml",
                "/TTGJets_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TTGJets_CP5_amcatnloFXFX-madspin-pythia8_UL18.xml",
                "/TTGJets_TuneCP5_13TeV-amcatnloFXFX-madspin-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "ttHTobb".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.2934, "YR4 ttH times BR(H->bb), arXiv:1610.07922")
            .nevt(UL16PREVFP, 11378694.45)
            .nevt(UL16POSTVFP, 5567703.65)
            .nevt(UL17, 6355678.22)
            .nevt(UL18, 11449265.68)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/ttHTobb_CP5_powheg-pythia8_UL16preVFP.xml",
                "/ttHTobb_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/ttHTobb_CP5_powheg-pythia8_UL16postVFP.xml",
                "/ttHTobb_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/ttHTobb_CP5_powheg-pythia8_UL17.xml",
                "/ttHTobb_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/ttHTobb_CP5_powheg-pythia8_UL18.xml",
                "/ttHTobb_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "ttHToNonbb".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.2151, "YR4 ttH times (1 - BR(H->bb)), arXiv:1610.07922")
            .nevt(UL16PREVFP, 11595239.81)
            .nevt(UL16POSTVFP, 11652756.28)
            .nevt(UL17, 4482140.55)
            .nevt(UL18, 7310882.02)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/ttHToNonbb_CP5_powheg-pythia8_UL16preVFP.xml",
                "/ttHToNonbb_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/ttHToNonbb_CP5_powheg-pythia8_UL16postVFP.xml",
                "/ttHToNonbb_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/ttHToNonbb_CP5_powheg-pythia8_UL17.xml",
                "/ttHToNonbb_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/ttHToNonbb_CP5_powheg-pythia8_UL18.xml",
                "/ttHToNonbb_M125_TuneCP5_13TeV-powheg-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "TTTT".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.009103, "NLO, arXiv:1711.02116")
            .nevt(UL16PREVFP, 3276810.57)
            .nevt(UL16POSTVFP, 2352431.05)
            .nevt(UL17, 2393199.89)
            .nevt(UL18, 2507700.59)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/TTTT_CP5_amcatnlo-pythia8_UL16preVFP.xml",
                "/TTTT_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/TTTT_CP5_amcatnlo-pythia8_UL16postVFP.xml",
                "/TTTT_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/TTTT_CP5_amcatnlo-pythia8_UL17.xml",
                "/TTTT_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/TTTT_CP5_amcatnlo-pythia8_UL18.xml",
                "/TTTT_TuneCP5_13TeV-amcatnlo-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
}
