//! Drell-Yan production, inclusive and HT-binned.

use std::collections::BTreeMap;

use crate::record::Sample;

use super::{E13TEV, UL16PREVFP, UL16POSTVFP, UL17, UL18};

pub(super) fn register(table: &mut BTreeMap<String, Sample>) {
    table.insert(
        "DYJetsToLL_M-50".to_string(),
        Sample::new()
            .xsec(E13TEV, 6077.22, "NNLO FEWZ 3.1, arXiv:1402.4140")
            .nevt(UL16PREVFP, 64817346.0)
            .nevt(UL16POSTVFP, 126311594.52)
            .nevt(UL17, 65220450.75)
            .nevt(UL18, 84060758.62)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-50_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-50_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-50_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-50_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-50_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-50_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-50_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-50_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "DYJetsToLL_M-10to50".to_string(),
        Sample::new()
            .xsec(E13TEV, 18610.0, "LO madgraphMLM, XSDB")
            .nevt(UL16PREVFP, 91668170.97)
            .nevt(UL16POSTVFP, 99767842.86)
            .nevt(UL17, 97773616.07)
            .nevt(UL18, 76542335.09)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-10to50_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-10to50_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-10to50_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-10to50_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-10to50_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-10to50_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-10to50_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-10to50_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "DYJetsToLL_M-50_HT-70to100".to_string(),
        Sample::new()
            .xsec(E13TEV, 169.9, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.23, "NNLO/LO inclusive DY ratio, FEWZ 3.1")
            .nevt(UL16PREVFP, 17695786.16)
            .nevt(UL16POSTVFP, 15704770.06)
            .nevt(UL17, 10032625.8)
            .nevt(UL18, 40891516.04)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-50_HT-70to100_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-50_HT-70to100_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-50_HT-70to100_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-50_HT-70to100_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-50_HT-70to100_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-50_HT-70to100_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-50_HT-70to100_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-50_HT-70to100_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "DYJetsToLL_M-50_HT-100to200".to_string(),
        Sample::new()
            .xsec(E13TEV, 161.1, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.23, "NNLO/LO inclusive DY ratio, FEWZ 3.1")
            .nevt(UL16PREVFP, 26412582.75)
            .nevt(UL16POSTVFP, 30156115.33)
            .nevt(UL17, 45362876.68)
            .nevt(UL18, 16453908.75)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-50_HT-100to200_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-50_HT-100to200_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-50_HT-100to200_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-50_HT-100to200_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-50_HT-100to200_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-50_HT-100to200_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-50_HT-100to200_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-50_HT-100to200_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "DYJetsToLL_M-50_HT-200to400".to_string(),
        Sample::new()
            .xsec(E13TEV, 48.66, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.23, "NNLO/LO inclusive DY ratio, FEWZ 3.1")
            .nevt(UL16PREVFP, 41769592.75)
            .nevt(UL16POSTVFP, 41052832.62)
            .nevt(UL17, 17110265.55)
            .nevt(UL18, 10189388.35)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-50_HT-200to400_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-50_HT-200to400_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-50_HT-200to400_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-50_HT-200to400_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-50_HT-200to400_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-50_HT-200to400_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-50_HT-200to400_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-50_HT-200to400_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "DYJetsToLL_M-50_HT-400to600".to_string(),
        Sample::new()
            .xsec(E13TEV, 6.968, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.23, "NNLO/LO inclusive DY ratio, FEWZ 3.1")
            .nevt(UL16PREVFP, 12726132.93)
            .nevt(UL16POSTVFP, 37758725.08)
            .nevt(UL17, 41943560.11)
            .nevt(UL18, 29179485.62)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-50_HT-400to600_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-50_HT-400to600_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-50_HT-400to600_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-50_HT-400to600_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-50_HT-400to600_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-50_HT-400to600_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-50_HT-400to600_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-50_HT-400to600_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "DYJetsToLL_M-50_HT-600to800".to_string(),
        Sample::new()
            .xsec(E13TEV, 1.743, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.23, "NNLO/LO inclusive DY ratio, FEWZ 3.1")
            .nevt(UL16PREVFP, 14974591.15)
            .nevt(UL16POSTVFP, 47270824.94)
            .nevt(UL17, 29871279.93)
            .nevt(UL18, 4093345.46)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-50_HT-600to800_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-50_HT-600to800_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-50_HT-600to800_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-50_HT-600to800_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-50_HT-600to800_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-50_HT-600to800_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-50_HT-600to800_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-50_HT-600to800_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "DYJetsToLL_M-50_HT-800to1200".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.8052, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.23, "NNLO/LO inclusive DY ratio, FEWZ 3.1")
            .nevt(UL16PREVFP, 13215685.24)
            .nevt(UL16POSTVFP, 35906853.91)
            .nevt(UL17, 23645957.54)
            .nevt(UL18, 37091937.15)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-50_HT-800to1200_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-50_HT-800to1200_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-50_HT-800to1200_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-50_HT-800to1200_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-50_HT-800to1200_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-50_HT-800to1200_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-50_HT-800to1200_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-50_HT-800to1200_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "DYJetsToLL_M-50_HT-1200to2500".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.1933, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.23, "NNLO/LO inclusive DY ratio, FEWZ 3.1")
            .nevt(UL16PREVFP, 3240060.03)
            .nevt(UL16POSTVFP, 24760590.17)
            .nevt(UL17, 22296343.86)
            .nevt(UL18, 40882791.95)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-50_HT-1200to2500_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-50_HT-1200to2500_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-50_HT-1200to2500_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-50_HT-1200to2500_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-50_HT-1200to2500_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-50_HT-1200to2500_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-50_HT-1200to2500_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-50_HT-1200to2500_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "DYJetsToLL_M-50_HT-2500toInf".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.003468, "LO madgraphMLM, XSDB")
            .kfactor(E13TEV, 1.23, "NNLO/LO inclusive DY ratio, FEWZ 3.1")
            .nevt(UL16PREVFP, 44724039.29)
            .nevt(UL16POSTVFP, 13057889.09)
            .nevt(UL17, 19489859.68)
            .nevt(UL18, 21222943.42)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/SM/UL16preVFP/DYJetsToLL_M-50_HT-2500toInf_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/DYJetsToLL_M-50_HT-2500toInf_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/SM/UL16postVFP/DYJetsToLL_M-50_HT-2500toInf_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/DYJetsToLL_M-50_HT-2500toInf_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/SM/UL17/DYJetsToLL_M-50_HT-2500toInf_CP5_madgraphMLM-pythia8_UL17.xml",
                "/DYJetsToLL_M-50_HT-2500toInf_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/SM/UL18/DYJetsToLL_M-50_HT-2500toInf_CP5_madgraphMLM-pythia8_UL18.xml",
                "/DYJetsToLL_M-50_HT-2500toInf_TuneCP5_PSweights_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
}
