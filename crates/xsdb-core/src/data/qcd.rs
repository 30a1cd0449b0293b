//! QCD multijet production, pT-hat and HT binned.

use std::collections::BTreeMap;

use crate::record::Sample;

use super::{E13TEV, UL16PREVFP, UL16POSTVFP, UL17, UL18};

pub(super) fn register(table: &mut BTreeMap<String, Sample>) {
    table.insert(
        "QCD_Pt_15to30".to_string(),
        Sample::new()
            .xsec(E13TEV, 1246000000.0, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 34843733.54)
            .nevt(UL16POSTVFP, 47457998.83)
            .nevt(UL17, 58681460.27)
            .nevt(UL18, 69398648.24)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_15to30_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_15to30_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_15to30_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_15to30_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_15to30_CP5_pythia8_UL17.xml",
                "/QCD_Pt_15to30_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_15to30_CP5_pythia8_UL18.xml",
                "/QCD_Pt_15to30_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_30to50".to_string(),
        Sample::new()
            .xsec(E13TEV, 106500000.0, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 18615892.98)
            .nevt(UL16POSTVFP, 22664191.8)
            .nevt(UL17, 7961303.96)
            .nevt(UL18, 30803942.9)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_30to50_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_30to50_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_30to50_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_30to50_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_30to50_CP5_pythia8_UL17.xml",
                "/QCD_Pt_30to50_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_30to50_CP5_pythia8_UL18.xml",
                "/QCD_Pt_30to50_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_50to80".to_string(),
        Sample::new()
            .xsec(E13TEV, 15700000.0, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 48217041.07)
            .nevt(UL16POSTVFP, 13831392.37)
            .nevt(UL17, 8063663.56)
            .nevt(UL18, 65667397.84)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_50to80_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_50to80_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_50to80_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_50to80_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_50to80_CP5_pythia8_UL17.xml",
                "/QCD_Pt_50to80_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_50to80_CP5_pythia8_UL18.xml",
                "/QCD_Pt_50to80_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_80to120".to_string(),
        Sample::new()
            .xsec(E13TEV, 2346000.0, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 15108826.32)
            .nevt(UL16POSTVFP, 60080779.14)
            .nevt(UL17, 12950557.13)
            .nevt(UL18, 31692651.38)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_80to120_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_80to120_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_80to120_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_80to120_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_80to120_CP5_pythia8_UL17.xml",
                "/QCD_Pt_80to120_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_80to120_CP5_pythia8_UL18.xml",
                "/QCD_Pt_80to120_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_120to170".to_string(),
        Sample::new()
            .xsec(E13TEV, 407300.0, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 37150690.88)
            .nevt(UL16POSTVFP, 41184826.24)
            .nevt(UL17, 19098748.97)
            .nevt(UL18, 10634740.74)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_120to170_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_120to170_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_120to170_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_120to170_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_120to170_CP5_pythia8_UL17.xml",
                "/QCD_Pt_120to170_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_120to170_CP5_pythia8_UL18.xml",
                "/QCD_Pt_120to170_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_170to300".to_string(),
        Sample::new()
            .xsec(E13TEV, 103500.0, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 50412605.97)
            .nevt(UL16POSTVFP, 36551576.28)
            .nevt(UL17, 18757752.53)
            .nevt(UL18, 11236297.15)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_170to300_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_170to300_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_170to300_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_170to300_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_170to300_CP5_pythia8_UL17.xml",
                "/QCD_Pt_170to300_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_170to300_CP5_pythia8_UL18.xml",
                "/QCD_Pt_170to300_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_300to470".to_string(),
        Sample::new()
            .xsec(E13TEV, 6826.0, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 46600198.67)
            .nevt(UL16POSTVFP, 43299474.7)
            .nevt(UL17, 38737221.93)
            .nevt(UL18, 29339164.09)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_300to470_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_300to470_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_300to470_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_300to470_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_300to470_CP5_pythia8_UL17.xml",
                "/QCD_Pt_300to470_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_300to470_CP5_pythia8_UL18.xml",
                "/QCD_Pt_300to470_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_470to600".to_string(),
        Sample::new()
            .xsec(E13TEV, 552.1, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 43415840.06)
            .nevt(UL16POSTVFP, 43115743.34)
            .nevt(UL17, 12341776.01)
            .nevt(UL18, 61907103.08)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_470to600_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_470to600_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_470to600_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_470to600_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_470to600_CP5_pythia8_UL17.xml",
                "/QCD_Pt_470to600_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_470to600_CP5_pythia8_UL18.xml",
                "/QCD_Pt_470to600_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_600to800".to_string(),
        Sample::new()
            .xsec(E13TEV, 156.5, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 59611173.5)
            .nevt(UL16POSTVFP, 12706169.91)
            .nevt(UL17, 53591394.31)
            .nevt(UL18, 61604827.88)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_600to800_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_600to800_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_600to800_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_600to800_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_600to800_CP5_pythia8_UL17.xml",
                "/QCD_Pt_600to800_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_600to800_CP5_pythia8_UL18.xml",
                "/QCD_Pt_600to800_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_800to1000".to_string(),
        Sample::new()
            .xsec(E13TEV, 26.28, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 34979904.46)
            .nevt(UL16POSTVFP, 13092809.33)
            .nevt(UL17, 6130929.29)
            .nevt(UL18, 26995682.2)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_800to1000_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_800to1000_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_800to1000_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_800to1000_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_800to1000_CP5_pythia8_UL17.xml",
                "/QCD_Pt_800to1000_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_800to1000_CP5_pythia8_UL18.xml",
                "/QCD_Pt_800to1000_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_1000to1400".to_string(),
        Sample::new()
            .xsec(E13TEV, 7.465, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 69563843.17)
            .nevt(UL16POSTVFP, 15878369.78)
            .nevt(UL17, 68073045.26)
            .nevt(UL18, 51905663.99)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_1000to1400_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_1000to1400_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_1000to1400_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_1000to1400_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_1000to1400_CP5_pythia8_UL17.xml",
                "/QCD_Pt_1000to1400_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_1000to1400_CP5_pythia8_UL18.xml",
                "/QCD_Pt_1000to1400_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_1400to1800".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.6484, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 16241421.79)
            .nevt(UL16POSTVFP, 22977088.23)
            .nevt(UL17, 11306743.82)
            .nevt(UL18, 36443896.57)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_1400to1800_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_1400to1800_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_1400to1800_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_1400to1800_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_1400to1800_CP5_pythia8_UL17.xml",
                "/QCD_Pt_1400to1800_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_1400to1800_CP5_pythia8_UL18.xml",
                "/QCD_Pt_1400to1800_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_1800to2400".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.08734, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 66423683.51)
            .nevt(UL16POSTVFP, 65457108.79)
            .nevt(UL17, 8662173.98)
            .nevt(UL18, 67811973.42)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_1800to2400_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_1800to2400_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_1800to2400_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_1800to2400_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_1800to2400_CP5_pythia8_UL17.xml",
                "/QCD_Pt_1800to2400_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_1800to2400_CP5_pythia8_UL18.xml",
                "/QCD_Pt_1800to2400_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_2400to3200".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.005237, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 19672593.84)
            .nevt(UL16POSTVFP, 10563167.15)
            .nevt(UL17, 52650050.5)
            .nevt(UL18, 25196434.38)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_2400to3200_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_2400to3200_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_2400to3200_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_2400to3200_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_2400to3200_CP5_pythia8_UL17.xml",
                "/QCD_Pt_2400to3200_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_2400to3200_CP5_pythia8_UL18.xml",
                "/QCD_Pt_2400to3200_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_Pt_3200toInf".to_string(),
        Sample::new()
            .xsec(E13TEV, 0.0001352, "LO pythia8, XSDB")
            .nevt(UL16PREVFP, 51932721.47)
            .nevt(UL16POSTVFP, 56035535.54)
            .nevt(UL17, 50127904.17)
            .nevt(UL18, 6282828.76)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_Pt_3200toInf_CP5_pythia8_UL16preVFP.xml",
                "/QCD_Pt_3200toInf_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_Pt_3200toInf_CP5_pythia8_UL16postVFP.xml",
                "/QCD_Pt_3200toInf_TuneCP5_13TeV_pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_Pt_3200toInf_CP5_pythia8_UL17.xml",
                "/QCD_Pt_3200toInf_TuneCP5_13TeV_pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_Pt_3200toInf_CP5_pythia8_UL18.xml",
                "/QCD_Pt_3200toInf_TuneCP5_13TeV_pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_HT50to100".to_string(),
        Sample::new()
            .xsec(E13TEV, 185300000.0, "LO madgraphMLM, XSDB")
            .nevt(UL16POSTVFP, 8725582.5)
            .nevt(UL17, 40185918.03)
            .nevt(UL18, 47599346.82)
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_HT50to100_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/QCD_HT50to100_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_HT50to100_CP5_madgraphMLM-pythia8_UL17.xml",
                "/QCD_HT50to100_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_HT50to100_CP5_madgraphMLM-pythia8_UL18.xml",
                "/QCD_HT50to100_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_HT100to200".to_string(),
        Sample::new()
            .xsec(E13TEV, 23590000.0, "LO madgraphMLM, XSDB")
            .nevt(UL16PREVFP, 9625272.11)
            .nevt(UL16POSTVFP, 39315423.72)
            .nevt(UL17, 41121363.69)
            .nevt(UL18, 31623842.65)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_HT100to200_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/QCD_HT100to200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_HT100to200_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/QCD_HT100to200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_HT100to200_CP5_madgraphMLM-pythia8_UL17.xml",
                "/QCD_HT100to200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_HT100to200_CP5_madgraphMLM-pythia8_UL18.xml",
                "/QCD_HT100to200_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_HT200to300".to_string(),
        Sample::new()
            .xsec(E13TEV, 1551000.0, "LO madgraphMLM, XSDB")
            .nevt(UL16PREVFP, 34336997.42)
            .nevt(UL16POSTVFP, 31846734.87)
            .nevt(UL17, 51606437.38)
            .nevt(UL18, 17284112.06)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_HT200to300_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/QCD_HT200to300_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_HT200to300_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/QCD_HT200to300_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_HT200to300_CP5_madgraphMLM-pythia8_UL17.xml",
                "/QCD_HT200to300_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_HT200to300_CP5_madgraphMLM-pythia8_UL18.xml",
                "/QCD_HT200to300_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_HT300to500".to_string(),
        Sample::new()
            .xsec(E13TEV, 323400.0, "LO madgraphMLM, XSDB")
            .nevt(UL16PREVFP, 13791425.87)
            .nevt(UL16POSTVFP, 58729375.62)
            .nevt(UL17, 33109005.18)
            .nevt(UL18, 5061151.66)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_HT300to500_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/QCD_HT300to500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_HT300to500_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/QCD_HT300to500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_HT300to500_CP5_madgraphMLM-pythia8_UL17.xml",
                "/QCD_HT300to500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_HT300to500_CP5_madgraphMLM-pythia8_UL18.xml",
                "/QCD_HT300to500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_HT500to700".to_string(),
        Sample::new()
            .xsec(E13TEV, 30140.0, "LO madgraphMLM, XSDB")
            .nevt(UL16PREVFP, 41504737.3)
            .nevt(UL16POSTVFP, 12821569.96)
            .nevt(UL17, 8024093.68)
            .nevt(UL18, 52647554.93)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_HT500to700_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/QCD_HT500to700_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_HT500to700_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/QCD_HT500to700_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_HT500to700_CP5_madgraphMLM-pythia8_UL17.xml",
                "/QCD_HT500to700_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_HT500to700_CP5_madgraphMLM-pythia8_UL18.xml",
                "/QCD_HT500to700_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_HT700to1000".to_string(),
        Sample::new()
            .xsec(E13TEV, 6344.0, "LO madgraphMLM, XSDB")
            .nevt(UL16PREVFP, 39372345.12)
            .nevt(UL16POSTVFP, 18636357.69)
            .nevt(UL17, 16136666.57)
            .nevt(UL18, 8530770.18)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_HT700to1000_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/QCD_HT700to1000_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_HT700to1000_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/QCD_HT700to1000_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_HT700to1000_CP5_madgraphMLM-pythia8_UL17.xml",
                "/QCD_HT700to1000_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_HT700to1000_CP5_madgraphMLM-pythia8_UL18.xml",
                "/QCD_HT700to1000_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_HT1000to1500".to_string(),
        Sample::new()
            .xsec(E13TEV, 1092.0, "LO madgraphMLM, XSDB")
            .nevt(UL16PREVFP, 29328174.99)
            .nevt(UL16POSTVFP, 58937790.09)
            .nevt(UL17, 38124978.06)
            .nevt(UL18, 47924860.93)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_HT1000to1500_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/QCD_HT1000to1500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_HT1000to1500_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/QCD_HT1000to1500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_HT1000to1500_CP5_madgraphMLM-pythia8_UL17.xml",
                "/QCD_HT1000to1500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_HT1000to1500_CP5_madgraphMLM-pythia8_UL18.xml",
                "/QCD_HT1000to1500_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_HT1500to2000".to_string(),
        Sample::new()
            .xsec(E13TEV, 99.76, "LO madgraphMLM, XSDB")
            .nevt(UL16PREVFP, 33225119.88)
            .nevt(UL16POSTVFP, 33402623.39)
            .nevt(UL17, 14741889.21)
            .nevt(UL18, 54860106.73)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_HT1500to2000_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/QCD_HT1500to2000_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_HT1500to2000_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/QCD_HT1500to2000_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_HT1500to2000_CP5_madgraphMLM-pythia8_UL17.xml",
                "/QCD_HT1500to2000_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_HT1500to2000_CP5_madgraphMLM-pythia8_UL18.xml",
                "/QCD_HT1500to2000_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
    table.insert(
        "QCD_HT2000toInf".to_string(),
        Sample::new()
            .xsec(E13TEV, 20.35, "LO madgraphMLM, XSDB")
            .nevt(UL16PREVFP, 51781241.89)
            .nevt(UL16POSTVFP, 54503165.47)
            .nevt(UL17, 40654146.64)
            .nevt(UL18, 22143424.19)
            .xml(
                UL16PREVFP,
                "RunII_106X_v2/QCD/UL16preVFP/QCD_HT2000toInf_CP5_madgraphMLM-pythia8_UL16preVFP.xml",
                "/QCD_HT2000toInf_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODAPVv2-106X_mcRun2_asymptotic_preVFP_v11-v1/MINIAODSIM",
            )
            .xml(
                UL16POSTVFP,
                "RunII_106X_v2/QCD/UL16postVFP/QCD_HT2000toInf_CP5_madgraphMLM-pythia8_UL16postVFP.xml",
                "/QCD_HT2000toInf_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL16MiniAODv2-106X_mcRun2_asymptotic_v17-v1/MINIAODSIM",
            )
            .xml(
                UL17,
                "RunII_106X_v2/QCD/UL17/QCD_HT2000toInf_CP5_madgraphMLM-pythia8_UL17.xml",
                "/QCD_HT2000toInf_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL17MiniAODv2-106X_mc2017_realistic_v9-v1/MINIAODSIM",
            )
            .xml(
                UL18,
                "RunII_106X_v2/QCD/UL18/QCD_HT2000toInf_CP5_madgraphMLM-pythia8_UL18.xml",
                "/QCD_HT2000toInf_TuneCP5_13TeV-madgraphMLM-pythia8/RunIISummer20UL18MiniAODv2-106X_upgrade2018_realistic_v16_L1v1-v1/MINIAODSIM",
            ),
    );
}
