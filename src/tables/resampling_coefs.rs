// low-pass at 8000.ratio Hz, 3500 Hz pass edge (0.1 dB ripple), 4000 Hz stop
// edge (-60 dB)

use crate::runtime::*;
use crate::tables::CoefficientTable;

pub static BUTTERWORTH_RESAMPLING_RATIO2: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.46169877, 0.46169877, 0.00000000, -0.07660247, 0.00000000),
        SosCoefs::new(0.21342394, 0.42684789, 0.21342394, -0.15339161, 0.00708738),
        SosCoefs::new(0.21420239, 0.42840479, 0.21420239, -0.15394768, 0.01075726),
        SosCoefs::new(0.21550621, 0.43101241, 0.21550621, -0.15488911, 0.01691393),
        SosCoefs::new(0.21735128, 0.43470257, 0.21735128, -0.15621132, 0.02561645),
        SosCoefs::new(0.21975305, 0.43950610, 0.21975305, -0.15794059, 0.03695278),
        SosCoefs::new(0.22273742, 0.44547485, 0.22273742, -0.16008462, 0.05103432),
        SosCoefs::new(0.22633485, 0.45266970, 0.22633485, -0.16266827, 0.06800766),
        SosCoefs::new(0.23058146, 0.46116292, 0.23058146, -0.16572270, 0.08804854),
        SosCoefs::new(0.23552433, 0.47104865, 0.23552433, -0.16927432, 0.11137162),
        SosCoefs::new(0.24121727, 0.48243453, 0.24121727, -0.17336577, 0.13823483),
        SosCoefs::new(0.24772504, 0.49545007, 0.24772504, -0.17804317, 0.16894332),
        SosCoefs::new(0.25512453, 0.51024907, 0.25512453, -0.18336125, 0.20385939),
        SosCoefs::new(0.26350645, 0.52701290, 0.26350645, -0.18938544, 0.24341124),
        SosCoefs::new(0.27297803, 0.54595606, 0.27297803, -0.19619278, 0.28810490),
        SosCoefs::new(0.28366616, 0.56733231, 0.28366616, -0.20387447, 0.33853910),
        SosCoefs::new(0.29572126, 0.59144251, 0.29572126, -0.21253863, 0.39542365),
        SosCoefs::new(0.30932222, 0.61864443, 0.30932222, -0.22231381, 0.45960268),
        SosCoefs::new(0.32468259, 0.64936518, 0.32468259, -0.23335351, 0.53208387),
        SosCoefs::new(0.34205847, 0.68411694, 0.34205847, -0.24584177, 0.61407565),
        SosCoefs::new(0.36175862, 0.72351723, 0.36175862, -0.26000052, 0.70703498),
        SosCoefs::new(0.38415752, 0.76831504, 0.38415752, -0.27609890, 0.81272899),
        SosCoefs::new(0.40971248, 0.81942496, 0.40971248, -0.29446557, 0.93331548),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x3B18_F1F6, 0x3B18_F1F6, 0x0000_0000, 0xFB18_F1F6, 0x0000_0000),
        SosCoefsQ31::from_bits(0x1B51_79CC, 0x36A2_F399, 0x1B51_79CC, 0xF62E_D4F4, 0x00E8_3D49),
        SosCoefsQ31::from_bits(0x1B6A_FBED, 0x36D5_F7D9, 0x1B6A_FBED, 0xF625_B8A1, 0x0160_7E71),
        SosCoefsQ31::from_bits(0x1B95_B513, 0x372B_6A27, 0x1B95_B513, 0xF616_4BFC, 0x022A_3C57),
        SosCoefsQ31::from_bits(0x1BD2_2AB7, 0x37A4_556D, 0x1BD2_2AB7, 0xF600_A23F, 0x0347_665D),
        SosCoefsQ31::from_bits(0x1C20_DE30, 0x3841_BC61, 0x1C20_DE30, 0xF5E4_4D2B, 0x04BA_DE6B),
        SosCoefsQ31::from_bits(0x1C82_A8F2, 0x3905_51E4, 0x1C82_A8F2, 0xF5C1_2C6D, 0x0688_4AED),
        SosCoefsQ31::from_bits(0x1CF8_8A51, 0x39F1_14A3, 0x1CF8_8A51, 0xF596_D7D3, 0x08B4_799F),
        SosCoefsQ31::from_bits(0x1D83_B17C, 0x3B07_62F7, 0x1D83_B17C, 0xF564_CC9F, 0x0B45_2CB0),
        SosCoefsQ31::from_bits(0x1E25_A940, 0x3C4B_5280, 0x1E25_A940, 0xF52A_9C10, 0x0E41_6CE1),
        SosCoefsQ31::from_bits(0x1EE0_3515, 0x3DC0_6A2A, 0x1EE0_3515, 0xF4E7_9345, 0x11B1_ADCA),
        SosCoefsQ31::from_bits(0x1FB5_743B, 0x3F6A_E876, 0x1FB5_743B, 0xF49A_F0D6, 0x159F_EF41),
        SosCoefsQ31::from_bits(0x20A7_EBB6, 0x414F_D76C, 0x20A7_EBB6, 0xF443_CF29, 0x1A18_1087),
        SosCoefsQ31::from_bits(0x21BA_9451, 0x4375_28A2, 0x21BA_9451, 0xF3E1_1BE3, 0x1F28_197D),
        SosCoefsQ31::from_bits(0x22F0_F1B1, 0x45E1_E362, 0x22F0_F1B1, 0xF371_93D5, 0x24E0_9F1B),
        SosCoefsQ31::from_bits(0x244F_2C2F, 0x489E_585D, 0x244F_2C2F, 0xF2F3_B87A, 0x2B55_3FC6),
        SosCoefsQ31::from_bits(0x25DA_31B0, 0x4BB4_635F, 0x25DA_31B0, 0xF265_C462, 0x329D_3DFB),
        SosCoefsQ31::from_bits(0x2797_DED4, 0x4F2F_BDA7, 0x2797_DED4, 0xF1C5_9C49, 0x3AD4_42BC),
        SosCoefsQ31::from_bits(0x298F_32F9, 0x531E_65F1, 0x298F_32F9, 0xF110_BC73, 0x441B_52FD),
        SosCoefsQ31::from_bits(0x2BC8_926A, 0x5791_24D5, 0x2BC8_926A, 0xF044_20DE, 0x4E9A_07EF),
        SosCoefsQ31::from_bits(0x2E4E_1B38, 0x5C9C_366F, 0x2E4E_1B38, 0xEF5C_26C8, 0x5A80_1F4E),
        SosCoefsQ31::from_bits(0x312C_12DD, 0x6258_25BA, 0x312C_12DD, 0xEE54_6549, 0x6807_80E1),
        SosCoefsQ31::from_bits(0x3471_755F, 0x68E2_EABF, 0x3471_755F, 0xED27_79E2, 0x7776_E1BB),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 1),
};

pub static CHEBYSHEV1_RESAMPLING_RATIO2: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.12417668, 0.12417668, 0.00000000, -0.75164664, 0.00000000),
        SosCoefs::new(0.03710015, 0.07420030, 0.03710015, -1.43342960, 0.58183019),
        SosCoefs::new(0.09458310, 0.18916620, 0.09458310, -1.24908780, 0.62742021),
        SosCoefs::new(0.17055375, 0.34110749, 0.17055375, -1.00823353, 0.69044851),
        SosCoefs::new(0.24785643, 0.49571287, 0.24785643, -0.76866765, 0.76009338),
        SosCoefs::new(0.31507570, 0.63015139, 0.31507570, -0.56959396, 0.82989675),
        SosCoefs::new(0.36652747, 0.73305495, 0.36652747, -0.43181641, 0.89792630),
        SosCoefs::new(0.39994055, 0.79988110, 0.39994055, -0.36568951, 0.96545170),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x0FE5_057E, 0x0FE5_057E, 0x0000_0000, 0xCFE5_057E, 0x0000_0000),
        SosCoefsQ31::from_bits(0x04BF_B29A, 0x097F_6534, 0x04BF_B29A, 0xA442_B07F, 0x4A79_696B),
        SosCoefsQ31::from_bits(0x0C1B_4C91, 0x1836_9922, 0x0C1B_4C91, 0xB00E_F207, 0x504F_4E35),
        SosCoefsQ31::from_bits(0x15D4_B484, 0x2BA9_6907, 0x15D4_B484, 0xBF79_1A18, 0x5860_9DDF),
        SosCoefsQ31::from_bits(0x1FB9_C276, 0x3F73_84ED, 0x1FB9_C276, 0xCECE_2635, 0x614A_BD70),
        SosCoefsQ31::from_bits(0x2854_6683, 0x50A8_CD06, 0x2854_6683, 0xDB8B_C5C7, 0x6A3A_0E7F),
        SosCoefsQ31::from_bits(0x2EEA_5F4B, 0x5DD4_BE97, 0x2EEA_5F4B, 0xE45D_1EBA, 0x72EF_3FBB),
        SosCoefsQ31::from_bits(0x3331_407B, 0x6662_80F6, 0x3331_407B, 0xE898_8B09, 0x7B93_EBDA),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 1),
};

pub static CHEBYSHEV2_RESAMPLING_RATIO2: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.65415380, 0.65415380, 0.00000000, 0.30830760, 0.00000000),
        SosCoefs::new(0.44260404, 0.81184893, 0.44260404, 0.57467186, 0.12238515),
        SosCoefs::new(0.48339839, 0.69232112, 0.48339839, 0.46044633, 0.19867157),
        SosCoefs::new(0.54243855, 0.52773375, 0.54243855, 0.30235869, 0.31025215),
        SosCoefs::new(0.61129404, 0.35264384, 0.61129404, 0.13249278, 0.44273915),
        SosCoefs::new(0.68407254, 0.19544930, 0.68407254, -0.02307532, 0.58666970),
        SosCoefs::new(0.75853437, 0.07606539, 0.75853437, -0.14658765, 0.73972177),
        SosCoefs::new(0.83605570, 0.00918509, 0.83605570, -0.22578933, 0.90708582),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x53BB_4FD2, 0x53BB_4FD2, 0x0000_0000, 0x13BB_4FD2, 0x0000_0000),
        SosCoefsQ31::from_bits(0x38A7_3FC8, 0x67EA_AA77, 0x38A7_3FC8, 0x24C7_6C7B, 0x0FAA_5112),
        SosCoefsQ31::from_bits(0x3DDF_FFA3, 0x589D_FA7D, 0x3DDF_FFA3, 0x1D77_F3E7, 0x196E_11F5),
        SosCoefsQ31::from_bits(0x456E_A054, 0x438C_C78D, 0x456E_A054, 0x1359_D845, 0x27B6_57AB),
        SosCoefsQ31::from_bits(0x4E3E_E21B, 0x2D23_6EEC, 0x4E3E_E21B, 0x087A_C2FE, 0x38AB_AD26),
        SosCoefsQ31::from_bits(0x578F_B064, 0x1904_7B8A, 0x578F_B064, 0xFE85_EF14, 0x4B17_FE2A),
        SosCoefsQ31::from_bits(0x6117_A77C, 0x09BC_82B4, 0x6117_A77C, 0xF69E_4ED8, 0x5EAF_33FB),
        SosCoefsQ31::from_bits(0x6B03_DF89, 0x012C_FA20, 0x6B03_DF89, 0xF18C_AAEC, 0x741B_635A),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 0),
};

pub static ELLIPTIC_RESAMPLING_RATIO2: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.10422502, 0.18083119, 0.10422502, -0.86786993, 0.25715116),
        SosCoefs::new(0.33512863, 0.23394224, 0.33512863, -0.63298904, 0.53718853),
        SosCoefs::new(0.63410168, 0.09126338, 0.63410168, -0.43075481, 0.79189915),
        SosCoefs::new(0.80880005, -0.03632785, 0.80880005, -0.34543253, 0.94304357),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x0D57_3ED9, 0x1725_79F0, 0x0D57_3ED9, 0xC874_D1B2, 0x20EA_543E),
        SosCoefsQ31::from_bits(0x2AE5_7EAD, 0x1DF1_D1B7, 0x2AE5_7EAD, 0xD77D_1B8C, 0x44C2_97F8),
        SosCoefsQ31::from_bits(0x512A_3E6B, 0x0BAE_84AE, 0x512A_3E6B, 0xE46E_8362, 0x655C_F390),
        SosCoefsQ31::from_bits(0x6786_C29B, 0xFB59_9BF2, 0x6786_C29B, 0xE9E4_6EFA, 0x78B5_A6DC),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 0),
};

pub static BUTTERWORTH_RESAMPLING_RATIO3: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.11687420, 0.23374840, 0.11687420, -0.63304602, 0.10054282),
        SosCoefs::new(0.11690147, 0.23380294, 0.11690147, -0.63767376, 0.10527964),
        SosCoefs::new(0.11577391, 0.23154781, 0.11577391, -0.65200954, 0.11510516),
        SosCoefs::new(0.10982452, 0.21964904, 0.10982452, -0.67639498, 0.11569306),
        SosCoefs::new(0.11455965, 0.22911930, 0.11455965, -0.66428033, 0.12251893),
        SosCoefs::new(0.11721519, 0.23443039, 0.11721519, -0.65900381, 0.12786458),
        SosCoefs::new(0.11748451, 0.23496901, 0.11748451, -0.66919587, 0.13913389),
        SosCoefs::new(0.11884171, 0.23768342, 0.11884171, -0.67440437, 0.14977122),
        SosCoefs::new(0.12019079, 0.24038157, 0.12019079, -0.68247817, 0.16324131),
        SosCoefs::new(0.12170428, 0.24340855, 0.12170428, -0.69140989, 0.17822700),
        SosCoefs::new(0.12350078, 0.24700156, 0.12350078, -0.70120028, 0.19520341),
        SosCoefs::new(0.12546279, 0.25092558, 0.12546279, -0.71246603, 0.21431720),
        SosCoefs::new(0.12765393, 0.25530786, 0.12765393, -0.72494351, 0.23555923),
        SosCoefs::new(0.13008735, 0.26017470, 0.13008735, -0.73874692, 0.25909632),
        SosCoefs::new(0.13277317, 0.26554634, 0.13277317, -0.75398888, 0.28508155),
        SosCoefs::new(0.13572658, 0.27145316, 0.13572658, -0.77076554, 0.31367185),
        SosCoefs::new(0.13896801, 0.27793603, 0.13896801, -0.78917419, 0.34504624),
        SosCoefs::new(0.14251877, 0.28503753, 0.14251877, -0.80933732, 0.37941239),
        SosCoefs::new(0.14640232, 0.29280463, 0.14640232, -0.83139137, 0.41700063),
        SosCoefs::new(0.15064547, 0.30129095, 0.15064547, -0.85548751, 0.45806941),
        SosCoefs::new(0.15527828, 0.31055655, 0.15527828, -0.88179631, 0.50290942),
        SosCoefs::new(0.16033442, 0.32066885, 0.16033442, -0.91050923, 0.55184693),
        SosCoefs::new(0.16585179, 0.33170359, 0.16585179, -0.94184135, 0.60524853),
        SosCoefs::new(0.17187296, 0.34374592, 0.17187296, -0.97603444, 0.66352629),
        SosCoefs::new(0.17844581, 0.35689161, 0.17844581, -1.01336039, 0.72714362),
        SosCoefs::new(0.18562421, 0.37124842, 0.18562421, -1.05412522, 0.79662207),
        SosCoefs::new(0.19346886, 0.38693771, 0.19346886, -1.09867349, 0.87254891),
        SosCoefs::new(0.20204810, 0.40409620, 0.20204810, -1.14739341, 0.95558581),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x0EF5_BBDE, 0x1DEB_77BC, 0x0EF5_BBDE, 0xD77C_2C90, 0x0CDE_9659),
        SosCoefsQ31::from_bits(0x0EF6_A09C, 0x1DED_4137, 0x0EF6_A09C, 0xD730_5A65, 0x0D79_CDA4),
        SosCoefsQ31::from_bits(0x0ED1_ADE9, 0x1DA3_5BD3, 0x0ED1_ADE9, 0xD645_79C8, 0x0EBB_C415),
        SosCoefsQ31::from_bits(0x0E0E_BADA, 0x1C1D_75B5, 0x0E0E_BADA, 0xD4B5_F1D2, 0x0ECF_07C5),
        SosCoefsQ31::from_bits(0x0EA9_E401, 0x1D53_C802, 0x0EA9_E401, 0xD57C_6E5B, 0x0FAE_B34F),
        SosCoefsQ31::from_bits(0x0F00_E850, 0x1E01_D09F, 0x0F00_E850, 0xD5D2_E1B3, 0x105D_DDD9),
        SosCoefsQ31::from_bits(0x0F09_BB78, 0x1E13_76F0, 0x0F09_BB78, 0xD52B_E51B, 0x11CF_23AB),
        SosCoefsQ31::from_bits(0x0F36_348A, 0x1E6C_6914, 0x0F36_348A, 0xD4D6_8F0D, 0x132B_B40E),
        SosCoefsQ31::from_bits(0x0F62_6962, 0x1EC4_D2C3, 0x0F62_6962, 0xD452_4711, 0x14E5_1763),
        SosCoefsQ31::from_bits(0x0F94_017A, 0x1F28_02F3, 0x0F94_017A, 0xD3BF_F0BF, 0x16D0_246A),
        SosCoefsQ31::from_bits(0x0FCE_DFA5, 0x1F9D_BF4A, 0x0FCE_DFA5, 0xD31F_88D7, 0x18FC_6CE5),
        SosCoefsQ31::from_bits(0x100F_2A2F, 0x201E_545D, 0x100F_2A2F, 0xD266_F4E2, 0x1B6E_BEF6),
        SosCoefsQ31::from_bits(0x1056_F6C6, 0x20AD_ED8C, 0x1056_F6C6, 0xD19A_868C, 0x1E26_CE00),
        SosCoefsQ31::from_bits(0x10A6_B3C9, 0x214D_6791, 0x10A6_B3C9, 0xD0B8_5ED4, 0x212A_117A),
        SosCoefsQ31::from_bits(0x10FE_B611, 0x21FD_6C21, 0x10FE_B611, 0xCFBE_A56E, 0x247D_8D66),
        SosCoefsQ31::from_bits(0x115F_7D0F, 0x22BE_FA1E, 0x115F_7D0F, 0xCEAB_C707, 0x2826_662F),
        SosCoefsQ31::from_bits(0x11C9_B431, 0x2393_6862, 0x11C9_B431, 0xCD7E_2B8B, 0x2C2A_79AE),
        SosCoefsQ31::from_bits(0x123E_0E10, 0x247C_1C21, 0x123E_0E10, 0xCC33_D13C, 0x3090_95C9),
        SosCoefsQ31::from_bits(0x12BD_4FA2, 0x257A_9F43, 0x12BD_4FA2, 0xCACA_7BDD, 0x3560_46CC),
        SosCoefsQ31::from_bits(0x1348_59D6, 0x2690_B3AC, 0x1348_59D6, 0xC93F_B14D, 0x3AA2_04BE),
        SosCoefsQ31::from_bits(0x13E0_2896, 0x27C0_512D, 0x13E0_2896, 0xC790_A634, 0x405F_55F3),
        SosCoefsQ31::from_bits(0x1485_D6A0, 0x290B_AD41, 0x1485_D6A0, 0xC5BA_377C, 0x46A2_EB89),
        SosCoefsQ31::from_bits(0x153A_A1B1, 0x2A75_4362, 0x153A_A1B1, 0xC3B8_DF0D, 0x4D78_C8AC),
        SosCoefsQ31::from_bits(0x15FF_EEE8, 0x2BFF_DDCF, 0x15FF_EEE8, 0xC188_A6DB, 0x54EE_6DE7),
        SosCoefsQ31::from_bits(0x16D7_4FEC, 0x2DAE_9FD7, 0x16D7_4FEC, 0xBF25_1A74, 0x5D13_0AC6),
        SosCoefsQ31::from_bits(0x17C2_88C1, 0x2F85_1182, 0x17C2_88C1, 0xBC89_3662, 0x65F7_B640),
        SosCoefsQ31::from_bits(0x18C3_9666, 0x3187_2CCD, 0x18C3_9666, 0xB9AF_5566, 0x6FAF_AECE),
        SosCoefsQ31::from_bits(0x19DC_B650, 0x33B9_6CA1, 0x19DC_B650, 0xB691_1B3B, 0x7A50_A2CC),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 1),
};

pub static CHEBYSHEV1_RESAMPLING_RATIO3: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.06984721, 0.06984721, 0.00000000, -0.86030558, 0.00000000),
        SosCoefs::new(0.01192443, 0.02384887, 0.01192443, -1.69809631, 0.74579405),
        SosCoefs::new(0.03174267, 0.06348534, 0.03174267, -1.63514802, 0.76211869),
        SosCoefs::new(0.06082575, 0.12165149, 0.06082575, -1.54400984, 0.78731282),
        SosCoefs::new(0.09455197, 0.18910393, 0.09455197, -1.44088373, 0.81909159),
        SosCoefs::new(0.12830468, 0.25660935, 0.12830468, -1.34208901, 0.85530771),
        SosCoefs::new(0.15820125, 0.31640249, 0.15820125, -1.26156148, 0.89436646),
        SosCoefs::new(0.18134382, 0.36268764, 0.18134382, -1.20998791, 0.93536318),
        SosCoefs::new(0.19574591, 0.39149182, 0.19574591, -1.19503148, 0.97801512),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x08F0_C0DB, 0x08F0_C0DB, 0x0000_0000, 0xC8F0_C0DB, 0x0000_0000),
        SosCoefsQ31::from_bits(0x0186_BD67, 0x030D_7ACD, 0x0186_BD67, 0x9352_63D7, 0x5F76_2DEC),
        SosCoefsQ31::from_bits(0x0410_24CF, 0x0820_499E, 0x0410_24CF, 0x9759_BC21, 0x618D_1AF9),
        SosCoefsQ31::from_bits(0x07C9_2356, 0x0F92_46AC, 0x07C9_2356, 0x9D2E_F15E, 0x64C6_AA9C),
        SosCoefsQ31::from_bits(0x0C1A_4760, 0x1834_8EC0, 0x0C1A_4760, 0xA3C8_8F9D, 0x68D7_FE45),
        SosCoefsQ31::from_bits(0x106C_49A0, 0x20D8_9340, 0x106C_49A0, 0xAA1B_36AF, 0x6D7A_B921),
        SosCoefsQ31::from_bits(0x143F_F03B, 0x287F_E076, 0x143F_F03B, 0xAF42_93A7, 0x727A_999D),
        SosCoefsQ31::from_bits(0x1736_4633, 0x2E6C_8C67, 0x1736_4633, 0xB28F_8EDC, 0x77B9_FB14),
        SosCoefsQ31::from_bits(0x190E_33BA, 0x321C_6774, 0x190E_33BA, 0xB384_9AB4, 0x7D2F_997F),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 0),
};

pub static CHEBYSHEV2_RESAMPLING_RATIO3: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.55540685, 0.55540685, 0.00000000, 0.11081370, 0.00000000),
        SosCoefs::new(0.33213779, 0.54208166, 0.33213779, 0.15558210, 0.05077514),
        SosCoefs::new(0.39473540, 0.34524482, 0.39473540, -0.01830180, 0.15301742),
        SosCoefs::new(0.47775488, 0.08796921, 0.47775488, -0.24634649, 0.28982547),
        SosCoefs::new(0.56423368, -0.17278598, 0.56423368, -0.47897259, 0.43465398),
        SosCoefs::new(0.64447619, -0.40322496, 0.64447619, -0.68699933, 0.57272674),
        SosCoefs::new(0.71536629, -0.59010228, 0.71536629, -0.85942818, 0.70005848),
        SosCoefs::new(0.77774070, -0.73145639, 0.77774070, -0.99546219, 0.81948720),
        SosCoefs::new(0.83445349, -0.82909119, 0.83445349, -1.09815613, 0.93797192),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x4717_925A, 0x4717_925A, 0x0000_0000, 0x0717_925A, 0x0000_0000),
        SosCoefsQ31::from_bits(0x2A83_7DBA, 0x4562_EE8A, 0x2A83_7DBA, 0x09F5_0E9B, 0x067F_CCC8),
        SosCoefsQ31::from_bits(0x3286_B091, 0x2C30_FB71, 0x3286_B091, 0xFED4_24B1, 0x1396_1331),
        SosCoefsQ31::from_bits(0x3D27_1272, 0x0B42_9335, 0x3D27_1272, 0xF03B_DBEA, 0x2519_0045),
        SosCoefsQ31::from_bits(0x4838_CF30, 0xE9E2_2623, 0x4838_CF30, 0xE158_8355, 0x37A2_BDD9),
        SosCoefsQ31::from_bits(0x527E_321F, 0xCC63_1FD8, 0x527E_321F, 0xD408_33F8, 0x494F_1C25),
        SosCoefsQ31::from_bits(0x5B91_1F69, 0xB477_874A, 0x5B91_1F69, 0xC8FF_20F5, 0x599B_8431),
        SosCoefsQ31::from_bits(0x638D_01E0, 0xA25F_A30F, 0x638D_01E0, 0xC04A_58F3, 0x68E4_F4E8),
        SosCoefsQ31::from_bits(0x6ACF_5F38, 0x95E0_56FE, 0x6ACF_5F38, 0xB9B7_CF5B, 0x780F_76B8),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 0),
};

pub static ELLIPTIC_RESAMPLING_RATIO3: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.17907685, 0.17907685, 0.00000000, -0.64184631, 0.00000000),
        SosCoefs::new(0.12036833, 0.03413689, 0.12036833, -1.25729463, 0.53216819),
        SosCoefs::new(0.40896453, -0.28556376, 0.40896453, -1.21206388, 0.74442917),
        SosCoefs::new(0.69704949, -0.68846036, 0.69704949, -1.18585854, 0.89149716),
        SosCoefs::new(0.84667712, -0.90839387, 0.84667712, -1.18618323, 0.97114359),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x16EB_FD75, 0x16EB_FD75, 0x0000_0000, 0xD6EB_FD75, 0x0000_0000),
        SosCoefsQ31::from_bits(0x0F68_3AC4, 0x045E_98F6, 0x0F68_3AC4, 0xAF88_7C17, 0x441E_164F),
        SosCoefsQ31::from_bits(0x3458_F320, 0xDB72_A585, 0x3458_F320, 0xB26D_8B9F, 0x5F49_7487),
        SosCoefsQ31::from_bits(0x5938_EAE7, 0xA7E0_87F4, 0x5938_EAE7, 0xB41A_E4CB, 0x721C_942C),
        SosCoefsQ31::from_bits(0x6C5F_EA71, 0x8BB9_BFF4, 0x6C5F_EA71, 0xB415_92F4, 0x7C4E_6EEE),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 0),
};

pub static BUTTERWORTH_RESAMPLING_RATIO4: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.27000140, 0.27000140, 0.00000000, -0.45999720, 0.00000000),
        SosCoefs::new(0.07425064, 0.14850128, 0.07425064, -0.91353192, 0.21053449),
        SosCoefs::new(0.07282536, 0.14565071, 0.07282536, -0.92117339, 0.21247481),
        SosCoefs::new(0.07546273, 0.15092546, 0.07546273, -0.91267392, 0.21452485),
        SosCoefs::new(0.07587225, 0.15174451, 0.07587225, -0.92086488, 0.22435389),
        SosCoefs::new(0.07085341, 0.14170682, 0.07085341, -0.94145118, 0.22486481),
        SosCoefs::new(0.07660288, 0.15320577, 0.07660288, -0.93069945, 0.23711098),
        SosCoefs::new(0.07056262, 0.14112523, 0.07056262, -0.96195305, 0.24420352),
        SosCoefs::new(0.07580132, 0.15160263, 0.07580132, -0.95345531, 0.25666058),
        SosCoefs::new(0.07460075, 0.14920149, 0.07460075, -0.96676647, 0.26516946),
        SosCoefs::new(0.07749352, 0.15498703, 0.07749352, -0.96472776, 0.27470183),
        SosCoefs::new(0.07764597, 0.15529194, 0.07764597, -0.98172900, 0.29231288),
        SosCoefs::new(0.07849325, 0.15698649, 0.07849325, -0.99291458, 0.30688757),
        SosCoefs::new(0.07974108, 0.15948217, 0.07974108, -1.00510908, 0.32407341),
        SosCoefs::new(0.08082889, 0.16165779, 0.08082889, -1.02015353, 0.34346910),
        SosCoefs::new(0.08208109, 0.16416217, 0.08208109, -1.03591656, 0.36424091),
        SosCoefs::new(0.08345319, 0.16690637, 0.08345319, -1.05313616, 0.38694891),
        SosCoefs::new(0.08493349, 0.16986698, 0.08493349, -1.07185726, 0.41159122),
        SosCoefs::new(0.08653910, 0.17307820, 0.08653910, -1.09210396, 0.43826035),
        SosCoefs::new(0.08827271, 0.17654541, 0.08827271, -1.11398490, 0.46707572),
        SosCoefs::new(0.09014213, 0.18028425, 0.09014213, -1.13757847, 0.49814697),
        SosCoefs::new(0.09215532, 0.18431064, 0.09215532, -1.16298313, 0.53160441),
        SosCoefs::new(0.09432030, 0.18864061, 0.09432030, -1.19030524, 0.56758645),
        SosCoefs::new(0.09664621, 0.19329243, 0.09664621, -1.21965782, 0.60624267),
        SosCoefs::new(0.09914282, 0.19828563, 0.09914282, -1.25116443, 0.64773569),
        SosCoefs::new(0.10182064, 0.20364127, 0.10182064, -1.28495807, 0.69224062),
        SosCoefs::new(0.10469104, 0.20938207, 0.10469104, -1.32118199, 0.73994613),
        SosCoefs::new(0.10776620, 0.21553241, 0.10776620, -1.35999005, 0.79105486),
        SosCoefs::new(0.11105920, 0.22211839, 0.11105920, -1.40154702, 0.84578380),
        SosCoefs::new(0.11458395, 0.22916789, 0.11458395, -1.44602874, 0.90436453),
        SosCoefs::new(0.11835526, 0.23671053, 0.11835526, -1.49362210, 0.96704316),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x228F_67E9, 0x228F_67E9, 0x0000_0000, 0xE28F_67E9, 0x0000_0000),
        SosCoefsQ31::from_bits(0x0981_0B88, 0x1302_1710, 0x0981_0B88, 0xC588_B168, 0x1AF2_CB4F),
        SosCoefsQ31::from_bits(0x0952_575C, 0x12A4_AEB8, 0x0952_575C, 0xC50B_7EC6, 0x1B32_5FE4),
        SosCoefsQ31::from_bits(0x09A8_C347, 0x1351_868E, 0x09A8_C347, 0xC596_C01E, 0x1B75_8CE2),
        SosCoefsQ31::from_bits(0x09B6_2E97, 0x136C_5D2E, 0x09B6_2E97, 0xC510_8CBE, 0x1CB7_A0E0),
        SosCoefsQ31::from_bits(0x0911_B977, 0x1223_72ED, 0x0911_B977, 0xC3BF_4392, 0x1CC8_5EB7),
        SosCoefsQ31::from_bits(0x09CE_1F91, 0x139C_3F22, 0x09CE_1F91, 0xC46F_6B95, 0x1E59_A719),
        SosCoefsQ31::from_bits(0x0908_3222, 0x1210_6444, 0x0908_3222, 0xC26F_5C75, 0x1F42_0F9F),
        SosCoefsQ31::from_bits(0x09B3_DB85, 0x1367_B70B, 0x09B3_DB85, 0xC2FA_9690, 0x20DA_40F5),
        SosCoefsQ31::from_bits(0x098C_846A, 0x1319_08D5, 0x098C_846A, 0xC220_7F86, 0x21F1_129D),
        SosCoefsQ31::from_bits(0x09EB_4EBC, 0x13D6_9D78, 0x09EB_4EBC, 0xC241_E67A, 0x2329_6DFB),
        SosCoefsQ31::from_bits(0x09F0_4D9D, 0x13E0_9B3A, 0x09F0_4D9D, 0xC12B_5A24, 0x256A_822D),
        SosCoefsQ31::from_bits(0x0A0C_1114, 0x1418_2228, 0x0A0C_1114, 0xC074_1669, 0x2748_177E),
        SosCoefsQ31::from_bits(0x0A34_F4AF, 0x1469_E95E, 0x0A34_F4AF, 0xBFAC_4AF4, 0x297B_3CD5),
        SosCoefsQ31::from_bits(0x0A58_99E7, 0x14B1_33CE, 0x0A58_99E7, 0xBEB5_CDFD, 0x2BF6_CBA3),
        SosCoefsQ31::from_bits(0x0A81_A20F, 0x1503_441E, 0x0A81_A20F, 0xBDB3_8B06, 0x2E9F_722F),
        SosCoefsQ31::from_bits(0x0AAE_9813, 0x155D_3027, 0x0AAE_9813, 0xBC99_6ACB, 0x3187_8AB8),
        SosCoefsQ31::from_bits(0x0ADF_19C2, 0x15BE_3384, 0x0ADF_19C2, 0xBB66_B0D0, 0x34AF_0568),
        SosCoefsQ31::from_bits(0x0B13_B694, 0x1627_6D28, 0x0B13_B694, 0xBA1A_F801, 0x3818_EA4E),
        SosCoefsQ31::from_bits(0x0B4C_8521, 0x1699_0A41, 0x0B4C_8521, 0xB8B4_78AF, 0x3BC9_2324),
        SosCoefsQ31::from_bits(0x0B89_C6F5, 0x1713_8DEB, 0x0B89_C6F5, 0xB731_EA12, 0x3FC3_47B2),
        SosCoefsQ31::from_bits(0x0BCB_BEDC, 0x1797_7DB8, 0x0BCB_BEDC, 0xB591_AF34, 0x440B_9D09),
        SosCoefsQ31::from_bits(0x0C12_B00B, 0x1825_6017, 0x0C12_B00B, 0xB3D2_09F6, 0x48A6_AC42),
        SosCoefsQ31::from_bits(0x0C5E_E733, 0x18BD_CE65, 0x0C5E_E733, 0xB1F1_2055, 0x4D99_5C22),
        SosCoefsQ31::from_bits(0x0CB0_B637, 0x1961_6C6F, 0x0CB0_B637, 0xAFEC_EC0A, 0x52E9_00C9),
        SosCoefsQ31::from_bits(0x0D08_7568, 0x1A10_EAD0, 0x0D08_7568, 0xADC3_3F35, 0x589B_5736),
        SosCoefsQ31::from_bits(0x0D66_840F, 0x1ACD_081F, 0x0D66_840F, 0xAB71_C119, 0x5EB6_8E0B),
        SosCoefsQ31::from_bits(0x0DCB_4870, 0x1B96_90DF, 0x0DCB_4870, 0xA8F5_EC4B, 0x6541_492A),
        SosCoefsQ31::from_bits(0x0E37_300F, 0x1C6E_601E, 0x0E37_300F, 0xA64D_0DB9, 0x6C42_A4C9),
        SosCoefsQ31::from_bits(0x0EAA_AFD0, 0x1D55_5F9F, 0x0EAA_AFD0, 0xA374_43E0, 0x73C2_377F),
        SosCoefsQ31::from_bits(0x0F26_43EC, 0x1E4C_87D8, 0x0F26_43EC, 0xA068_7EDE, 0x7BC8_11F3),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 1),
};

pub static CHEBYSHEV1_RESAMPLING_RATIO4: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.00327106, 0.00654212, 0.00327106, -1.80161616, 0.81470041),
        SosCoefs::new(0.01010426, 0.02020852, 0.01010426, -1.78063995, 0.82105699),
        SosCoefs::new(0.02280383, 0.04560767, 0.02280383, -1.74211040, 0.83332574),
        SosCoefs::new(0.03964861, 0.07929722, 0.03964861, -1.69213225, 0.85072668),
        SosCoefs::new(0.05850285, 0.11700570, 0.05850285, -1.63830564, 0.87231704),
        SosCoefs::new(0.07715369, 0.15430738, 0.07715369, -1.58850331, 0.89716495),
        SosCoefs::new(0.09347063, 0.18694126, 0.09347063, -1.54991954, 0.92447492),
        SosCoefs::new(0.10589992, 0.21179984, 0.10589992, -1.52849405, 0.95364399),
        SosCoefs::new(0.11323255, 0.22646511, 0.11323255, -1.52863713, 0.98425204),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x006B_2FA7, 0x00D6_5F4E, 0x006B_2FA7, 0x8CB2_5220, 0x6848_1A5B),
        SosCoefsQ31::from_bits(0x014B_18AC, 0x0296_3157, 0x014B_18AC, 0x8E09_FEBB, 0x6918_6539),
        SosCoefsQ31::from_bits(0x02EB_3C6D, 0x05D6_78DA, 0x02EB_3C6D, 0x9081_435E, 0x6AAA_6AF9),
        SosCoefsQ31::from_bits(0x0513_34A1, 0x0A26_6943, 0x0513_34A1, 0x93B4_1AEC, 0x6CE4_9CAD),
        SosCoefsQ31::from_bits(0x077D_0577, 0x0EFA_0AEE, 0x077D_0577, 0x9726_0018, 0x6FA8_15AC),
        SosCoefsQ31::from_bits(0x09E0_2C13, 0x13C0_5825, 0x09E0_2C13, 0x9A55_F638, 0x72D6_4D1A),
        SosCoefsQ31::from_bits(0x0BF6_D87A, 0x17ED_B0F4, 0x0BF6_D87A, 0x9CCE_1E4B, 0x7655_31BB),
        SosCoefsQ31::from_bits(0x0D8E_20E7, 0x1B1C_41CD, 0x0D8E_20E7, 0x9E2D_2747, 0x7A11_01A3),
        SosCoefsQ31::from_bits(0x0E7E_6782, 0x1CFC_CF04, 0x0E7E_6782, 0x9E2A_CF31, 0x7DFB_F88D),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFF0, 0),
};

pub static CHEBYSHEV2_RESAMPLING_RATIO4: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.24635593, 0.45093343, 0.24635593, -0.06927490, 0.01292020),
        SosCoefs::new(0.30751724, 0.26963318, 0.30751724, -0.21806225, 0.10272991),
        SosCoefs::new(0.40441062, -0.01624511, 0.40441062, -0.45317275, 0.24574888),
        SosCoefs::new(0.50824734, -0.31966738, 0.50824734, -0.70381105, 0.40063836),
        SosCoefs::new(0.60202717, -0.58883275, 0.60202717, -0.92798921, 0.54321080),
        SosCoefs::new(0.68037106, -0.80657368, 0.68037106, -1.11207305, 0.66624149),
        SosCoefs::new(0.74412492, -0.97394596, 0.74412492, -1.25746898, 0.77177285),
        SosCoefs::new(0.79637966, -1.09795964, 0.79637966, -1.37073047, 0.86553016),
        SosCoefs::new(0.84069096, -1.18570272, 0.84069096, -1.45895841, 0.95463761),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x1F88_9759, 0x39B8_2FC9, 0x1F88_9759, 0xFB91_0001, 0x01A7_5E79),
        SosCoefsQ31::from_bits(0x275C_B99E, 0x2283_5702, 0x275C_B99E, 0xF20B_44A7, 0x0D26_40F0),
        SosCoefsQ31::from_bits(0x33C3_BA31, 0xFDEB_AE1D, 0x33C3_BA31, 0xE2FF_37BA, 0x1F74_B30B),
        SosCoefsQ31::from_bits(0x410E_3FBB, 0xD715_23B1, 0x410E_3FBB, 0xD2F4_C27E, 0x3348_1E2B),
        SosCoefsQ31::from_bits(0x4D0F_39F1, 0xB4A1_20DA, 0x4D0F_39F1, 0xC49B_D324, 0x4587_EE74),
        SosCoefsQ31::from_bits(0x5716_6621, 0x98C2_318D, 0x5716_6621, 0xB8D3_CB90, 0x5547_66AE),
        SosCoefsQ31::from_bits(0x5F3F_7C3B, 0x8355_BD18, 0x5F3F_7C3B, 0xAF85_A0D6, 0x62C9_73E2),
        SosCoefsQ31::from_bits(0x32F7_E264, 0xB9BB_0780, 0x32F7_E264, 0xA845_F3B1, 0x6EC9_B130),
        SosCoefsQ31::from_bits(0x35CD_E173, 0xB41D_7256, 0x35CD_E173, 0xA2A0_6CE6, 0x7A31_90AA),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static ELLIPTIC_RESAMPLING_RATIO4: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.13664632, 0.13664632, 0.00000000, -0.72670736, 0.00000000),
        SosCoefs::new(0.09723179, -0.03426296, 0.09723179, -1.46400633, 0.62420696),
        SosCoefs::new(0.38356357, -0.45638905, 0.38356357, -1.48366161, 0.79439969),
        SosCoefs::new(0.68048874, -0.94894866, 0.68048874, -1.50065110, 0.91267992),
        SosCoefs::new(0.83461201, -1.21165916, 0.83461201, -1.51925185, 0.97681672),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x117D_A06C, 0x117D_A06C, 0x0000_0000, 0xD17D_A06C, 0x0000_0000),
        SosCoefsQ31::from_bits(0x0C72_1764, 0xFB9D_457A, 0x0C72_1764, 0xA24D_B862, 0x4FE6_037E),
        SosCoefsQ31::from_bits(0x3118_9C6D, 0xC595_0B24, 0x3118_9C6D, 0xA10B_B02E, 0x65AE_E3A2),
        SosCoefsQ31::from_bits(0x571A_414D, 0x8688_D9A9, 0x571A_414D, 0x9FF5_5513, 0x74D2_B21C),
        SosCoefsQ31::from_bits(0x356A_4883, 0xB274_2D27, 0x356A_4883, 0x9EC4_93E8, 0x7D08_548B),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 2),
};

pub static BUTTERWORTH_RESAMPLING_RATIO6: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.04320722, 0.08641443, 0.04320722, -1.16895896, 0.34178783),
        SosCoefs::new(0.04303706, 0.08607413, 0.04303706, -1.17388623, 0.34603449),
        SosCoefs::new(0.04268659, 0.08537318, 0.04268659, -1.18377206, 0.35451842),
        SosCoefs::new(0.04213324, 0.08426649, 0.04213324, -1.19870302, 0.36723599),
        SosCoefs::new(0.04131076, 0.08262151, 0.04131076, -1.21921231, 0.38445533),
        SosCoefs::new(0.04009408, 0.08018817, 0.04009408, -1.24793496, 0.40831129),
        SosCoefs::new(0.03782322, 0.07564643, 0.03782322, -1.27100257, 0.42229543),
        SosCoefs::new(0.04032451, 0.08064901, 0.04032451, -1.26626460, 0.42756263),
        SosCoefs::new(0.03472373, 0.06944746, 0.03472373, -1.29432529, 0.43322021),
        SosCoefs::new(0.03029672, 0.06059343, 0.03029672, -1.31846431, 0.43965118),
        SosCoefs::new(0.02852463, 0.05704926, 0.02852463, -1.32609703, 0.44019555),
        SosCoefs::new(0.03934237, 0.07868474, 0.03934237, -1.29546078, 0.45283026),
        SosCoefs::new(0.03931915, 0.07863830, 0.03931915, -1.29849582, 0.45577243),
        SosCoefs::new(0.04054564, 0.08109128, 0.04054564, -1.30834821, 0.47053077),
        SosCoefs::new(0.04069572, 0.08139145, 0.04069572, -1.32565812, 0.48844101),
        SosCoefs::new(0.04107984, 0.08215969, 0.04107984, -1.34032051, 0.50463988),
        SosCoefs::new(0.04165012, 0.08330024, 0.04165012, -1.35578832, 0.52238879),
        SosCoefs::new(0.04217302, 0.08434604, 0.04217302, -1.37331013, 0.54200220),
        SosCoefs::new(0.04273292, 0.08546584, 0.04273292, -1.39185110, 0.56278277),
        SosCoefs::new(0.04334301, 0.08668602, 0.04334301, -1.41159135, 0.58496339),
        SosCoefs::new(0.04399026, 0.08798052, 0.04399026, -1.43266831, 0.60862935),
        SosCoefs::new(0.04467794, 0.08935587, 0.04467794, -1.45507609, 0.63378784),
        SosCoefs::new(0.04540816, 0.09081632, 0.04540816, -1.47885634, 0.66048899),
        SosCoefs::new(0.04618183, 0.09236366, 0.04618183, -1.50405272, 0.68878004),
        SosCoefs::new(0.04700023, 0.09400046, 0.04700023, -1.53070649, 0.71870741),
        SosCoefs::new(0.04786466, 0.09572932, 0.04786466, -1.55885960, 0.75031825),
        SosCoefs::new(0.04877644, 0.09755289, 0.04877644, -1.58855440, 0.78366018),
        SosCoefs::new(0.04973684, 0.09947369, 0.04973684, -1.61983285, 0.81878022),
        SosCoefs::new(0.05074713, 0.10149425, 0.05074713, -1.65273576, 0.85572426),
        SosCoefs::new(0.05180849, 0.10361698, 0.05180849, -1.68730239, 0.89453635),
        SosCoefs::new(0.05292207, 0.10584414, 0.05292207, -1.72356944, 0.93525772),
        SosCoefs::new(0.05408888, 0.10817776, 0.05408888, -1.76157019, 0.97792571),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x0587_D068, 0x0B0F_A0CF, 0x0587_D068, 0xB52F_C6C5, 0x2BBF_B415),
        SosCoefsQ31::from_bits(0x0582_3D11, 0x0B04_7A22, 0x0582_3D11, 0xB4DF_0C4F, 0x2C4A_DBA8),
        SosCoefsQ31::from_bits(0x0576_C116, 0x0AED_822D, 0x0576_C116, 0xB43D_1421, 0x2D60_DC18),
        SosCoefsQ31::from_bits(0x0564_9F43, 0x0AC9_3E86, 0x0564_9F43, 0xB348_7320, 0x2F01_96CC),
        SosCoefsQ31::from_bits(0x0549_ABBB, 0x0A93_5776, 0x0549_ABBB, 0xB1F8_6CF2, 0x3135_D509),
        SosCoefsQ31::from_bits(0x0521_CD8C, 0x0A43_9B17, 0x0521_CD8C, 0xB021_D567, 0x3443_8B61),
        SosCoefsQ31::from_bits(0x04D7_6423, 0x09AE_C847, 0x04D7_6423, 0xAEA7_E4D8, 0x360D_C6DD),
        SosCoefsQ31::from_bits(0x0529_5A79, 0x0A52_B4F1, 0x0529_5A79, 0xAEF5_854D, 0x36BA_5F48),
        SosCoefsQ31::from_bits(0x0471_D3C7, 0x08E3_A78D, 0x0471_D3C7, 0xAD29_C646, 0x3773_C28E),
        SosCoefsQ31::from_bits(0x03E0_C349, 0x07C1_8692, 0x03E0_C349, 0xAB9E_47DC, 0x3846_7D6B),
        SosCoefsQ31::from_bits(0x03A6_B1ED, 0x074D_63DB, 0x03A6_B1ED, 0xAB21_39E7, 0x3858_53E7),
        SosCoefsQ31::from_bits(0x0509_2BB9, 0x0A12_5772, 0x0509_2BB9, 0xAD17_2BAC, 0x39F6_578C),
        SosCoefsQ31::from_bits(0x0508_68F0, 0x0A10_D1E1, 0x0508_68F0, 0xACE5_71C4, 0x3A56_C039),
        SosCoefsQ31::from_bits(0x0530_997B, 0x0A61_32F5, 0x0530_997B, 0xAC44_05DD, 0x3C3A_5A30),
        SosCoefsQ31::from_bits(0x0535_8478, 0x0A6B_08F1, 0x0535_8478, 0xAB28_6AD8, 0x3E85_3C30),
        SosCoefsQ31::from_bits(0x0542_1AB4, 0x0A84_3568, 0x0542_1AB4, 0xAA38_3058, 0x4098_0A20),
        SosCoefsQ31::from_bits(0x0554_CA86, 0x0AA9_950C, 0x0554_CA86, 0xA93A_C3A6, 0x42DD_A2CE),
        SosCoefsQ31::from_bits(0x0565_ECEA, 0x0ACB_D9D4, 0x0565_ECEA, 0xA81B_AFD7, 0x4560_53FC),
        SosCoefsQ31::from_bits(0x0578_45B2, 0x0AF0_8B64, 0x0578_45B2, 0xA6EB_E95F, 0x4809_440B),
        SosCoefsQ31::from_bits(0x058C_4381, 0x0B18_8702, 0x058C_4381, 0xA5A8_7CBD, 0x4AE0_1489),
        SosCoefsQ31::from_bits(0x05A1_790D, 0x0B42_F219, 0x05A1_790D, 0xA44F_2999, 0x4DE7_9101),
        SosCoefsQ31::from_bits(0x05B8_01B1, 0x0B70_0361, 0x05B8_01B1, 0xA2E0_0884, 0x511F_F5B9),
        SosCoefsQ31::from_bits(0x05CF_EF45, 0x0B9F_DE8A, 0x05CF_EF45, 0xA15A_6AEE, 0x548A_E737),
        SosCoefsQ31::from_bits(0x05E9_4943, 0x0BD2_9287, 0x05E9_4943, 0x9FBD_99A7, 0x5829_F1BE),
        SosCoefsQ31::from_bits(0x0604_1A82, 0x0C08_3505, 0x0604_1A82, 0x9E08_E7A9, 0x5BFE_9AB8),
        SosCoefsQ31::from_bits(0x0620_6DE2, 0x0C40_DBC5, 0x0620_6DE2, 0x9C3B_A4ED, 0x600A_6DB0),
        SosCoefsQ31::from_bits(0x063E_4E78, 0x0C7C_9CF0, 0x063E_4E78, 0x9A55_1FEC, 0x644E_FA09),
        SosCoefsQ31::from_bits(0x065D_C6E4, 0x0CBB_8DC9, 0x065D_C6E4, 0x9854_A89D, 0x68CD_CA57),
        SosCoefsQ31::from_bits(0x067E_E1BF, 0x0CFD_C37F, 0x067E_E1BF, 0x9639_93CB, 0x6D88_5F68),
        SosCoefsQ31::from_bits(0x06A1_A921, 0x0D43_5242, 0x06A1_A921, 0x9403_3CD9, 0x7280_2AD2),
        SosCoefsQ31::from_bits(0x06C6_267E, 0x0D8C_4CFB, 0x06C6_267E, 0x91B1_09CD, 0x77B6_865D),
        SosCoefsQ31::from_bits(0x06EC_6267, 0x0DD8_C4CF, 0x06EC_6267, 0x8F42_6F1B, 0x7D2C_AB67),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 1),
};

pub static CHEBYSHEV1_RESAMPLING_RATIO6: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.00143821, 0.00287642, 0.00143821, -1.86922480, 0.87497764),
        SosCoefs::new(0.00445564, 0.00891128, 0.00445564, -1.86108982, 0.87891237),
        SosCoefs::new(0.01011000, 0.02021999, 0.01011000, -1.84616571, 0.88660569),
        SosCoefs::new(0.01770115, 0.03540231, 0.01770115, -1.82692839, 0.89773301),
        SosCoefs::new(0.02631471, 0.05262943, 0.02631471, -1.80660902, 0.91186787),
        SosCoefs::new(0.03494112, 0.06988225, 0.03494112, -1.78874804, 0.92853376),
        SosCoefs::new(0.04254490, 0.08508980, 0.04254490, -1.77676162, 0.94724749),
        SosCoefs::new(0.04831609, 0.09663218, 0.04831609, -1.77357332, 0.96754498),
        SosCoefs::new(0.05160893, 0.10321786, 0.05160893, -1.78132633, 0.98898569),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x002F_2094, 0x005E_4129, 0x002F_2094, 0x885E_9EF5, 0x6FFF_4468),
        SosCoefsQ31::from_bits(0x0092_009A, 0x0124_0133, 0x0092_009A, 0x88E3_E78B, 0x7080_3351),
        SosCoefsQ31::from_bits(0x014B_48CA, 0x0296_9194, 0x014B_48CA, 0x89D8_6BC8, 0x717C_4B97),
        SosCoefsQ31::from_bits(0x0244_080C, 0x0488_1019, 0x0244_080C, 0x8B13_9AF1, 0x72E8_EA50),
        SosCoefsQ31::from_bits(0x035E_47D3, 0x06BC_8FA6, 0x035E_47D3, 0x8C60_8493, 0x74B8_1626),
        SosCoefsQ31::from_bits(0x0478_F363, 0x08F1_E6C5, 0x0478_F363, 0x8D85_26F5, 0x76DA_31B7),
        SosCoefsQ31::from_bits(0x0572_1C7A, 0x0AE4_38F4, 0x0572_1C7A, 0x8E49_899E, 0x793F_67DA),
        SosCoefsQ31::from_bits(0x062F_38C1, 0x0C5E_7181, 0x062F_38C1, 0x8E7D_C656, 0x7BD8_8398),
        SosCoefsQ31::from_bits(0x069B_1F18, 0x0D36_3E30, 0x069B_1F18, 0x8DFE_BFD5, 0x7E97_153D),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFA, 0),
};

pub static CHEBYSHEV2_RESAMPLING_RATIO6: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.15854661, 0.25641577, 0.15854661, -0.49911557, 0.07262457),
        SosCoefs::new(0.25092477, 0.01739127, 0.25092477, -0.66664804, 0.18588884),
        SosCoefs::new(0.38475383, -0.32823361, 0.38475383, -0.90956079, 0.35083483),
        SosCoefs::new(0.51324816, -0.65872403, 0.51324816, -1.14322121, 0.51099349),
        SosCoefs::new(0.61763960, -0.92506739, 0.61763960, -1.33373534, 0.64394716),
        SosCoefs::new(0.69703655, -1.12458192, 0.69703655, -1.47960517, 0.74909635),
        SosCoefs::new(0.75638833, -1.26957554, 0.75638833, -1.58996472, 0.83316584),
        SosCoefs::new(0.80108995, -1.37321840, 0.80108995, -1.67484853, 0.90381002),
        SosCoefs::new(0.83553041, -1.44558309, 0.83553041, -1.74262374, 0.96810146),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x144B_4164, 0x20D2_3B67, 0x144B_4164, 0xE00E_7D91, 0x094B_C30D),
        SosCoefsQ31::from_bits(0x201E_4D7E, 0x0239_E08A, 0x201E_4D7E, 0xD555_A378, 0x17CB_3495),
        SosCoefsQ31::from_bits(0x313F_9D07, 0xD5FC_70E0, 0x313F_9D07, 0xC5C9_C18A, 0x2CE8_27DB),
        SosCoefsQ31::from_bits(0x41B2_1D9E, 0xABAE_EE4C, 0x41B2_1D9E, 0xB6D5_76B9, 0x4168_3C17),
        SosCoefsQ31::from_bits(0x4F0E_D082, 0x8997_6449, 0x4F0E_D082, 0xAAA4_1484, 0x526C_DC46),
        SosCoefsQ31::from_bits(0x2C9C_3F2F, 0xB806_D98E, 0x2C9C_3F2F, 0xA14E_2619, 0x5FE2_63A7),
        SosCoefsQ31::from_bits(0x3068_AA9E, 0xAEBF_463D, 0x3068_AA9E, 0x9A3E_04A3, 0x6AA5_2DAA),
        SosCoefsQ31::from_bits(0x3345_0ECA, 0xA81D_308E, 0x3345_0ECA, 0x94CF_4821, 0x73B0_0C01),
        SosCoefsQ31::from_bits(0x3579_5487, 0xA37B_910E, 0x3579_5487, 0x9078_DA45, 0x7BEA_BFAD),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 5),
};

pub static ELLIPTIC_RESAMPLING_RATIO6: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.09349722, 0.09349722, 0.00000000, -0.81300556, 0.00000000),
        SosCoefs::new(0.08139206, -0.08814859, 0.08139206, -1.65670025, 0.73133579),
        SosCoefs::new(0.36853746, -0.59356378, 0.36853746, -1.71077712, 0.85428826),
        SosCoefs::new(0.67121152, -1.15337198, 0.67121152, -1.74946732, 0.93851838),
        SosCoefs::new(0.82653288, -1.44416441, 0.82653288, -1.77485653, 0.98375787),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x0BF7_B787, 0x0BF7_B787, 0x0000_0000, 0xCBF7_B787, 0x0000_0000),
        SosCoefsQ31::from_bits(0x0A6B_0E20, 0xF4B7_8C02, 0x0A6B_0E20, 0x95F8_9F85, 0x5D9C_6938),
        SosCoefsQ31::from_bits(0x2F2C_3C49, 0xB406_1A2B, 0x2F2C_3C49, 0x9282_A0B3, 0x6D59_5158),
        SosCoefsQ31::from_bits(0x2AF5_212C, 0xB62F_274C, 0x2AF5_212C, 0x9008_BA3C, 0x7821_5ED0),
        SosCoefsQ31::from_bits(0x34E5_EA25, 0xA392_CF6E, 0x34E5_EA25, 0x8E68_C02B, 0x7DEB_C71B),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static BUTTERWORTH_RESAMPLING_RATIO8: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.16313444, 0.16313444, 0.00000000, -0.67373112, 0.00000000),
        SosCoefs::new(0.01972824, 0.03945648, 0.01972824, -1.43649850, 0.51541145),
        SosCoefs::new(0.02676017, 0.05352035, 0.02676017, -1.34744959, 0.45449029),
        SosCoefs::new(0.02683156, 0.05366312, 0.02683156, -1.35146025, 0.45878650),
        SosCoefs::new(0.02675103, 0.05350206, 0.02675103, -1.36007649, 0.46708061),
        SosCoefs::new(0.02655395, 0.05310791, 0.02655395, -1.37264496, 0.47886078),
        SosCoefs::new(0.02626267, 0.05252534, 0.02626267, -1.38868021, 0.49373089),
        SosCoefs::new(0.02588279, 0.05176558, 0.02588279, -1.40788319, 0.51141435),
        SosCoefs::new(0.02540340, 0.05080680, 0.02540340, -1.43001722, 0.53163083),
        SosCoefs::new(0.01711874, 0.03423747, 0.01711874, -1.48278731, 0.55126225),
        SosCoefs::new(0.02480311, 0.04960622, 0.02480311, -1.45530621, 0.55451864),
        SosCoefs::new(0.01807398, 0.03614797, 0.01807398, -1.48518008, 0.55747601),
        SosCoefs::new(0.01989770, 0.03979539, 0.01989770, -1.48450570, 0.56409649),
        SosCoefs::new(0.02269833, 0.04539665, 0.02269833, -1.47858422, 0.56937753),
        SosCoefs::new(0.02453599, 0.04907197, 0.02453599, -1.47584751, 0.57399145),
        SosCoefs::new(0.02462457, 0.04924913, 0.02462457, -1.48952209, 0.58802036),
        SosCoefs::new(0.02483049, 0.04966098, 0.02483049, -1.50339000, 0.60271197),
        SosCoefs::new(0.02506899, 0.05013798, 0.02506899, -1.51775853, 0.61803449),
        SosCoefs::new(0.02533995, 0.05067989, 0.02533995, -1.53322759, 0.63458738),
        SosCoefs::new(0.02560889, 0.05121777, 0.02560889, -1.54984486, 0.65228041),
        SosCoefs::new(0.02589834, 0.05179668, 0.02589834, -1.56738144, 0.67097480),
        SosCoefs::new(0.02620570, 0.05241140, 0.02620570, -1.58594354, 0.69076635),
        SosCoefs::new(0.02652950, 0.05305901, 0.02652950, -1.60554423, 0.71166224),
        SosCoefs::new(0.02687055, 0.05374109, 0.02687055, -1.62618788, 0.73367006),
        SosCoefs::new(0.02722913, 0.05445826, 0.02722913, -1.64788801, 0.75680453),
        SosCoefs::new(0.02760535, 0.05521070, 0.02760535, -1.67065631, 0.78107770),
        SosCoefs::new(0.02799936, 0.05599873, 0.02799936, -1.69450183, 0.80649929),
        SosCoefs::new(0.02841130, 0.05682260, 0.02841130, -1.71943208, 0.83307729),
        SosCoefs::new(0.02884125, 0.05768250, 0.02884125, -1.74545215, 0.86081715),
        SosCoefs::new(0.02928924, 0.05857848, 0.02928924, -1.77256438, 0.88972135),
        SosCoefs::new(0.02975526, 0.05951053, 0.02975526, -1.80076773, 0.91978879),
        SosCoefs::new(0.03023923, 0.06047847, 0.03023923, -1.83005728, 0.95101421),
        SosCoefs::new(0.03074100, 0.06148199, 0.03074100, -1.86042355, 0.98338753),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x14E1_96DD, 0x14E1_96DD, 0x0000_0000, 0xD4E1_96DD, 0x0000_0000),
        SosCoefsQ31::from_bits(0x0286_7474, 0x050C_E8E8, 0x0286_7474, 0xA410_689D, 0x41F9_0096),
        SosCoefsQ31::from_bits(0x036C_E09C, 0x06D9_C139, 0x036C_E09C, 0xA9C3_62CB, 0x3A2C_BCDC),
        SosCoefsQ31::from_bits(0x036F_3775, 0x06DE_6EEA, 0x036F_3775, 0xA981_ACDD, 0x3AB9_8419),
        SosCoefsQ31::from_bits(0x036C_93E8, 0x06D9_27D0, 0x036C_93E8, 0xA8F4_81C1, 0x3BC9_4C1D),
        SosCoefsQ31::from_bits(0x0366_1EB6, 0x06CC_3D6C, 0x0366_1EB6, 0xA826_95C1, 0x3D4B_4F56),
        SosCoefsQ31::from_bits(0x035C_9342, 0x06B9_2684, 0x035C_9342, 0xA71F_DD0E, 0x3F32_92EC),
        SosCoefsQ31::from_bits(0x0350_2093, 0x06A0_4126, 0x0350_2093, 0xA5E5_3DEA, 0x4176_067A),
        SosCoefsQ31::from_bits(0x0340_6B2F, 0x0680_D65E, 0x0340_6B2F, 0xA47A_9911, 0x440C_7A9A),
        SosCoefsQ31::from_bits(0x0230_F25C, 0x0461_E4B9, 0x0230_F25C, 0xA11A_0346, 0x468F_C2E4),
        SosCoefsQ31::from_bits(0x032C_BF8F, 0x0659_7F1D, 0x032C_BF8F, 0xA2DC_4359, 0x46FA_7788),
        SosCoefsQ31::from_bits(0x0250_3F91, 0x04A0_7F22, 0x0250_3F91, 0xA0F2_CF44, 0x475B_5FBC),
        SosCoefsQ31::from_bits(0x028C_01FB, 0x0518_03F6, 0x028C_01FB, 0xA0FD_DBCB, 0x4834_5056),
        SosCoefsQ31::from_bits(0x02E7_C75B, 0x05CF_8EB7, 0x02E7_C75B, 0xA15E_E047, 0x48E1_5CE1),
        SosCoefsQ31::from_bits(0x0323_FEC4, 0x0647_FD89, 0x0323_FEC4, 0xA18B_B6E5, 0x4978_8D47),
        SosCoefsQ31::from_bits(0x0326_E5D7, 0x064D_CBAE, 0x0326_E5D7, 0xA0AB_AB88, 0x4B44_404C),
        SosCoefsQ31::from_bits(0x032D_A543, 0x065B_4A87, 0x032D_A543, 0x9FC8_754D, 0x4D25_AA72),
        SosCoefsQ31::from_bits(0x0335_75F0, 0x066A_EBE0, 0x0335_75F0, 0x9EDD_0B58, 0x4F1B_C110),
        SosCoefsQ31::from_bits(0x033E_56DE, 0x067C_ADBD, 0x033E_56DE, 0x9DDF_995E, 0x513A_28BE),
        SosCoefsQ31::from_bits(0x0347_26EB, 0x068E_4DD6, 0x0347_26EB, 0x9CCF_5785, 0x537D_ECA1),
        SosCoefsQ31::from_bits(0x0350_A309, 0x06A1_4612, 0x0350_A309, 0x9BB0_05C6, 0x55E2_8099),
        SosCoefsQ31::from_bits(0x035A_B55A, 0x06B5_6AB4, 0x035A_B55A, 0x9A7F_E6A7, 0x586B_081A),
        SosCoefsQ31::from_bits(0x0365_519D, 0x06CA_A339, 0x0365_519D, 0x993E_C36D, 0x5B17_BF98),
        SosCoefsQ31::from_bits(0x0370_7E79, 0x06E0_FCF1, 0x0370_7E79, 0x97EC_89AE, 0x5DE8_E687),
        SosCoefsQ31::from_bits(0x037C_3E81, 0x06F8_7D01, 0x037C_3E81, 0x9689_00BA, 0x60DE_F88E),
        SosCoefsQ31::from_bits(0x0388_9271, 0x0711_24E2, 0x0388_9271, 0x9513_F790, 0x63FA_5AA5),
        SosCoefsQ31::from_bits(0x0395_7BAF, 0x072A_F75F, 0x0395_7BAF, 0x938D_482D, 0x673B_5E63),
        SosCoefsQ31::from_bits(0x03A2_FB45, 0x0745_F68A, 0x03A2_FB45, 0x91F4_D323, 0x6AA2_46CE),
        SosCoefsQ31::from_bits(0x03B1_11EC, 0x0762_23D9, 0x03B1_11EC, 0x904A_830C, 0x6E2F_4199),
        SosCoefsQ31::from_bits(0x03BF_BFF7, 0x077F_7FED, 0x03BF_BFF7, 0x8E8E_4E1F, 0x71E2_639C),
        SosCoefsQ31::from_bits(0x03CF_053E, 0x079E_0A7C, 0x03CF_053E, 0x8CC0_38B1, 0x75BB_A397),
        SosCoefsQ31::from_bits(0x03DE_E114, 0x07BD_C229, 0x03DE_E114, 0x8AE0_5772, 0x79BA_D56D),
        SosCoefsQ31::from_bits(0x03EF_5229, 0x07DE_A453, 0x03EF_5229, 0x88EE_D213, 0x7DDF_A47F),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 1),
};

pub static CHEBYSHEV1_RESAMPLING_RATIO8: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.00080994, 0.00161988, 0.00080994, -1.90214839, 0.90538816),
        SosCoefs::new(0.00251138, 0.00502277, 0.00251138, -1.89824163, 0.90828717),
        SosCoefs::new(0.00570736, 0.01141472, 0.00570736, -1.89115000, 0.91397943),
        SosCoefs::new(0.01001281, 0.02002562, 0.01001281, -1.88221371, 0.92226495),
        SosCoefs::new(0.01491616, 0.02983231, 0.01491616, -1.87320493, 0.93286956),
        SosCoefs::new(0.01984085, 0.03968170, 0.01984085, -1.86609256, 0.94546801),
        SosCoefs::new(0.02418412, 0.04836823, 0.02418412, -1.86279428, 0.95970484),
        SosCoefs::new(0.02746534, 0.05493069, 0.02746534, -1.86494510, 0.97520854),
        SosCoefs::new(0.02930060, 0.05860120, 0.02930060, -1.87369986, 0.99159697),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x001A_8A46, 0x0035_148C, 0x001A_8A46, 0x8643_3361, 0x73E3_C256),
        SosCoefsQ31::from_bits(0x0052_4B05, 0x00A4_960B, 0x0052_4B05, 0x8683_3588, 0x7442_C106),
        SosCoefsQ31::from_bits(0x00BB_04C9, 0x0176_0992, 0x00BB_04C9, 0x86F7_6603, 0x74FD_471E),
        SosCoefsQ31::from_bits(0x0148_198D, 0x0290_3319, 0x0148_198D, 0x8789_CF85, 0x760C_C729),
        SosCoefsQ31::from_bits(0x01E8_C5CB, 0x03D1_8B96, 0x01E8_C5CB, 0x881D_690D, 0x7768_4512),
        SosCoefsQ31::from_bits(0x028A_251D, 0x0514_4A3B, 0x028A_251D, 0x8891_F087, 0x7905_188A),
        SosCoefsQ31::from_bits(0x0318_7715, 0x0630_EE29, 0x0318_7715, 0x88C7_FA80, 0x7AD7_9BBA),
        SosCoefsQ31::from_bits(0x0383_FC03, 0x0707_F806, 0x0383_FC03, 0x88A4_BD4A, 0x7CD3_A232),
        SosCoefsQ31::from_bits(0x03C0_1F3C, 0x0780_3E77, 0x03C0_1F3C, 0x8815_4D2A, 0x7EEC_A641),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFE1, 0),
};

pub static CHEBYSHEV2_RESAMPLING_RATIO8: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.11539600, 0.15644761, 0.11539600, -0.76925900, 0.15649862),
        SosCoefs::new(0.23021008, -0.11848759, 0.23021008, -0.93588648, 0.27781905),
        SosCoefs::new(0.38672316, -0.49291323, 0.38672316, -1.16353503, 0.44406811),
        SosCoefs::new(0.52691533, -0.82756386, 0.52691533, -1.36846068, 0.59472748),
        SosCoefs::new(0.63397601, -1.08199537, 0.63397601, -1.52652968, 0.71248633),
        SosCoefs::new(0.71129566, -1.26416656, 0.71129566, -1.64288517, 0.80130993),
        SosCoefs::new(0.76648845, -1.39207844, 0.76648845, -1.72889995, 0.86979841),
        SosCoefs::new(0.80609623, -1.48101910, 0.80609623, -1.79459250, 0.92576586),
        SosCoefs::new(0.83477987, -1.54153660, 0.83477987, -1.84757931, 0.97560245),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x0EC5_4BD6, 0x1406_79B1, 0x0EC5_4BD6, 0xCEC4_75E8, 0x1408_258F),
        SosCoefsQ31::from_bits(0x1D77_8615, 0xF0D5_6618, 0x1D77_8615, 0xC41A_6F98, 0x238F_9310),
        SosCoefsQ31::from_bits(0x3180_24FB, 0xC0E8_3819, 0x3180_24FB, 0xB588_A45D, 0x38D7_3956),
        SosCoefsQ31::from_bits(0x4371_F62D, 0x9612_6330, 0x4371_F62D, 0xA86B_23E8, 0x4C20_07B9),
        SosCoefsQ31::from_bits(0x2893_101C, 0xBAC0_967D, 0x2893_101C, 0x9E4D_5672, 0x5B32_C088),
        SosCoefsQ31::from_bits(0x2D85_DE3D, 0xAF17_E523, 0x2D85_DE3D, 0x96DA_F828, 0x6691_52EB),
        SosCoefsQ31::from_bits(0x310E_2593, 0xA6E8_2FD0, 0x310E_2593, 0x9159_B402, 0x6F55_8DE8),
        SosCoefsQ31::from_bits(0x3397_14A4, 0xA136_FBAB, 0x3397_14A4, 0x8D25_657B, 0x767F_7EEE),
        SosCoefsQ31::from_bits(0x356D_088C, 0x9D57_76DB, 0x356D_088C, 0x89C1_42B2, 0x7CE0_8A80),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 6),
};

pub static ELLIPTIC_RESAMPLING_RATIO8: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.07128300, 0.07128300, 0.00000000, -0.85743399, 0.00000000),
        SosCoefs::new(0.07632474, -0.10947373, 0.07632474, -1.74797589, 0.79115165),
        SosCoefs::new(0.36518112, -0.64803458, 0.36518112, -1.80534597, 0.88767364),
        SosCoefs::new(0.66950699, -1.23119750, 0.66950699, -1.84506645, 0.95288293),
        SosCoefs::new(0.82414715, -1.52959384, 0.82414715, -1.86889783, 0.98759830),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x091F_CD2D, 0x091F_CD2D, 0x0000_0000, 0xC91F_CD2D, 0x0000_0000),
        SosCoefsQ31::from_bits(0x09C5_025A, 0xF1FC_C3C7, 0x09C5_025A, 0x9021_29BA, 0x6544_7507),
        SosCoefsQ31::from_bits(0x2EBE_414A, 0xAD0D_33F9, 0x2EBE_414A, 0x8C75_3630, 0x719F_4A2D),
        SosCoefsQ31::from_bits(0x2AD9_33D7, 0xB134_0F6B, 0x2AD9_33D7, 0x89EA_6E6A, 0x79F8_1160),
        SosCoefsQ31::from_bits(0x34BE_D3B5, 0x9E1B_2270, 0x34BE_D3B5, 0x8863_FA5A, 0x7E69_9EFE),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static BUTTERWORTH_RESAMPLING_RATIO12: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.00986202, 0.01972404, 0.00986202, -1.59742365, 0.63687174),
        SosCoefs::new(0.01365645, 0.02731290, 0.01365645, -1.53354959, 0.58817539),
        SosCoefs::new(0.01357894, 0.02715787, 0.01357894, -1.53778126, 0.59209700),
        SosCoefs::new(0.01348642, 0.02697285, 0.01348642, -1.54405699, 0.59800268),
        SosCoefs::new(0.01338845, 0.02677691, 0.01338845, -1.55220493, 0.60575874),
        SosCoefs::new(0.01326179, 0.02652357, 0.01326179, -1.56260762, 0.61565476),
        SosCoefs::new(0.01309654, 0.02619307, 0.01309654, -1.57524675, 0.62763290),
        SosCoefs::new(0.01290628, 0.02581255, 0.01290628, -1.58965274, 0.64127785),
        SosCoefs::new(0.01270768, 0.02541536, 0.01270768, -1.60540689, 0.65623761),
        SosCoefs::new(0.01250289, 0.02500578, 0.01250289, -1.62245623, 0.67246778),
        SosCoefs::new(0.01228563, 0.02457126, 0.01228563, -1.64065285, 0.68979537),
        SosCoefs::new(0.00732157, 0.01464314, 0.00732157, -1.66241207, 0.69169836),
        SosCoefs::new(0.00791177, 0.01582354, 0.00791177, -1.66213911, 0.69378620),
        SosCoefs::new(0.00878772, 0.01757544, 0.00878772, -1.66375589, 0.69890677),
        SosCoefs::new(0.00999967, 0.01999934, 0.00999967, -1.66700251, 0.70700119),
        SosCoefs::new(0.01193777, 0.02387554, 0.01193777, -1.66092874, 0.70867982),
        SosCoefs::new(0.01163989, 0.02327978, 0.01163989, -1.67128088, 0.71784045),
        SosCoefs::new(0.01201207, 0.02402413, 0.01201207, -1.67933809, 0.72738635),
        SosCoefs::new(0.01207804, 0.02415607, 0.01207804, -1.69246940, 0.74078155),
        SosCoefs::new(0.01215990, 0.02431981, 0.01215990, -1.70557816, 0.75421778),
        SosCoefs::new(0.01225563, 0.02451126, 0.01225563, -1.71922487, 0.76824739),
        SosCoefs::new(0.01235943, 0.02471886, 0.01235943, -1.73354057, 0.78297830),
        SosCoefs::new(0.01246701, 0.02493403, 0.01246701, -1.74857320, 0.79844126),
        SosCoefs::new(0.01257857, 0.02515713, 0.01257857, -1.76427196, 0.81458622),
        SosCoefs::new(0.01269525, 0.02539050, 0.01269525, -1.78062655, 0.83140756),
        SosCoefs::new(0.01281652, 0.02563303, 0.01281652, -1.79763634, 0.84890240),
        SosCoefs::new(0.01294236, 0.02588471, 0.01294236, -1.81528711, 0.86705653),
        SosCoefs::new(0.01307269, 0.02614538, 0.01307269, -1.83356695, 0.88585770),
        SosCoefs::new(0.01320739, 0.02641479, 0.01320739, -1.85246064, 0.90529021),
        SosCoefs::new(0.01334635, 0.02669270, 0.01334635, -1.87195063, 0.92533603),
        SosCoefs::new(0.01348941, 0.02697883, 0.01348941, -1.89201681, 0.94597447),
        SosCoefs::new(0.01363642, 0.02727285, 0.01363642, -1.91263616, 0.96718185),
        SosCoefs::new(0.01378719, 0.02757438, 0.01378719, -1.93378255, 0.98893131),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x0143_28A4, 0x0286_5148, 0x0143_28A4, 0x99C3_CF96, 0x5185_0365),
        SosCoefsQ31::from_bits(0x01BF_7E9C, 0x037E_FD37, 0x01BF_7E9C, 0x9DDA_52D0, 0x4B49_54CE),
        SosCoefsQ31::from_bits(0x01BC_F45D, 0x0379_E8BA, 0x01BC_F45D, 0x9D94_FDE9, 0x4BC9_D5A2),
        SosCoefsQ31::from_bits(0x01B9_EC52, 0x0373_D8A4, 0x01B9_EC52, 0x9D2E_2B9A, 0x4C8B_5A13),
        SosCoefsQ31::from_bits(0x01B6_B67C, 0x036D_6CF8, 0x01B6_B67C, 0x9CA8_ACA6, 0x4D89_80A3),
        SosCoefsQ31::from_bits(0x01B2_8FEB, 0x0365_1FD6, 0x01B2_8FEB, 0x9BFE_3CA0, 0x4ECD_C66D),
        SosCoefsQ31::from_bits(0x01AD_25B7, 0x035A_4B6D, 0x01AD_25B7, 0x9B2F_283C, 0x5056_4661),
        SosCoefsQ31::from_bits(0x01A6_E9B2, 0x034D_D363, 0x01A6_E9B2, 0x9A43_2126, 0x5215_647B),
        SosCoefsQ31::from_bits(0x01A0_67BE, 0x0340_CF7B, 0x01A0_67BE, 0x9941_0372, 0x53FF_9814),
        SosCoefsQ31::from_bits(0x0199_B1D3, 0x0333_63A6, 0x0199_B1D3, 0x9829_AD5A, 0x5613_6C97),
        SosCoefsQ31::from_bits(0x0192_9351, 0x0325_26A2, 0x0192_9351, 0x96FF_8B2B, 0x584B_36EE),
        SosCoefsQ31::from_bits(0x00EF_E9CC, 0x01DF_D397, 0x00EF_E9CC, 0x959B_0A64, 0x5889_9267),
        SosCoefsQ31::from_bits(0x0103_40C1, 0x0206_8183, 0x0103_40C1, 0x959F_8344, 0x58CD_FC7D),
        SosCoefsQ31::from_bits(0x011F_F4BD, 0x023F_E97A, 0x011F_F4BD, 0x9585_0603, 0x5975_C6EE),
        SosCoefsQ31::from_bits(0x0147_AB50, 0x028F_56A0, 0x0147_AB50, 0x954F_D4B0, 0x5A7F_03E0),
        SosCoefsQ31::from_bits(0x0187_2D43, 0x030E_5A87, 0x0187_2D43, 0x95B3_57ED, 0x5AB6_0533),
        SosCoefsQ31::from_bits(0x017D_6A7B, 0x02FA_D4F6, 0x017D_6A7B, 0x9509_BBE9, 0x5BE2_321B),
        SosCoefsQ31::from_bits(0x0189_9C84, 0x0313_3908, 0x0189_9C84, 0x9485_B98C, 0x5D1A_FEF9),
        SosCoefsQ31::from_bits(0x018B_C5EC, 0x0317_8BD7, 0x018B_C5EC, 0x93AE_94D7, 0x5ED1_EE01),
        SosCoefsQ31::from_bits(0x018E_74AC, 0x031C_E957, 0x018E_74AC, 0x92D7_CEAF, 0x608A_3551),
        SosCoefsQ31::from_bits(0x0191_97AD, 0x0323_2F59, 0x0191_97AD, 0x91F8_3841, 0x6255_EE31),
        SosCoefsQ31::from_bits(0x0194_FE6E, 0x0329_FCDC, 0x0194_FE6E, 0x910D_ABD7, 0x6438_A20A),
        SosCoefsQ31::from_bits(0x0198_84E6, 0x0331_09CC, 0x0198_84E6, 0x9017_606A, 0x6633_52C4),
        SosCoefsQ31::from_bits(0x019C_2CA8, 0x0338_5951, 0x019C_2CA8, 0x8F16_2B14, 0x6844_5C78),
        SosCoefsQ31::from_bits(0x019F_FF7E, 0x033F_FEFB, 0x019F_FF7E, 0x8E0A_36F0, 0x6A6B_9016),
        SosCoefsQ31::from_bits(0x01A3_F8BB, 0x0347_F176, 0x01A3_F8BB, 0x8CF3_86B7, 0x6CA8_D57E),
        SosCoefsQ31::from_bits(0x01A8_1859, 0x0350_30B2, 0x01A8_1859, 0x8BD2_5606, 0x6EFB_B557),
        SosCoefsQ31::from_bits(0x01AC_5DAB, 0x0358_BB56, 0x01AC_5DAB, 0x8AA6_D6D3, 0x7163_C906),
        SosCoefsQ31::from_bits(0x01B0_C7A5, 0x0361_8F4A, 0x01B0_C7A5, 0x8971_48EC, 0x73E0_8CBB),
        SosCoefsQ31::from_bits(0x01B5_554C, 0x036A_AA99, 0x01B5_554C, 0x8831_F5FA, 0x7671_693E),
        SosCoefsQ31::from_bits(0x01BA_056A, 0x0374_0AD4, 0x01BA_056A, 0x86E9_324F, 0x7915_B10A),
        SosCoefsQ31::from_bits(0x01BE_D69D, 0x037D_AD39, 0x01BE_D69D, 0x8597_5E82, 0x7BCC_9D6F),
        SosCoefsQ31::from_bits(0x01C3_C755, 0x0387_8EAA, 0x01C3_C755, 0x843C_E81B, 0x7E95_4D1E),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 1),
};

pub static CHEBYSHEV1_RESAMPLING_RATIO12: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.00036196, 0.00072391, 0.00036196, -1.93477926, 0.93622708),
        SosCoefs::new(0.00112285, 0.00224569, 0.00112285, -1.93366053, 0.93815191),
        SosCoefs::new(0.00255394, 0.00510787, 0.00255394, -1.93172571, 0.94194145),
        SosCoefs::new(0.00448519, 0.00897038, 0.00448519, -1.92953855, 0.94747930),
        SosCoefs::new(0.00668817, 0.01337633, 0.00668817, -1.92784704, 0.95459970),
        SosCoefs::new(0.00890212, 0.01780425, 0.00890212, -1.92748209, 0.96309599),
        SosCoefs::new(0.01085148, 0.02170297, 0.01085148, -1.92924496, 0.97272902),
        SosCoefs::new(0.01231446, 0.02462893, 0.01231446, -1.93379620, 0.98323431),
        SosCoefs::new(0.01311468, 0.02622936, 0.01311468, -1.94155739, 0.99432708),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x000B_DC4D, 0x0017_B89A, 0x000B_DC4D, 0x842C_939A, 0x77D6_4A00),
        SosCoefsQ31::from_bits(0x0024_CB1E, 0x0049_963D, 0x0024_CB1E, 0x843E_E7E9, 0x7815_5CA7),
        SosCoefsQ31::from_bits(0x0053_AFF6, 0x00A7_5FED, 0x0053_AFF6, 0x845E_9B22, 0x7891_8995),
        SosCoefsQ31::from_bits(0x0092_F87C, 0x0125_F0F7, 0x0092_F87C, 0x8482_70BE, 0x7947_0073),
        SosCoefsQ31::from_bits(0x00DB_286A, 0x01B6_50D3, 0x00DB_286A, 0x849E_2778, 0x7A30_52B7),
        SosCoefsQ31::from_bits(0x0123_B46C, 0x0247_68D7, 0x0123_B46C, 0x84A4_222B, 0x7B46_BAB1),
        SosCoefsQ31::from_bits(0x0163_94DB, 0x02C7_29B5, 0x0163_94DB, 0x8487_4025, 0x7C82_6269),
        SosCoefsQ31::from_bits(0x0193_8535, 0x0327_0A69, 0x0193_8535, 0x843C_AED8, 0x7DDA_9F39),
        SosCoefsQ31::from_bits(0x01AD_BDEC, 0x035B_7BD8, 0x01AD_BDEC, 0x83BD_8616, 0x7F46_1C1D),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFF8, 0),
};

pub static CHEBYSHEV2_RESAMPLING_RATIO12: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.07595966, 0.05933470, 0.07595966, -1.09349171, 0.30474572),
        SosCoefs::new(0.21952212, -0.25854825, 0.21952212, -1.24352616, 0.42402214),
        SosCoefs::new(0.40077677, -0.65974552, 0.40077677, -1.43360079, 0.57540881),
        SosCoefs::new(0.55032972, -0.99049012, 0.55032972, -1.59169105, 0.70186038),
        SosCoefs::new(0.65694813, -1.22585635, 0.65694813, -1.70629570, 0.79433561),
        SosCoefs::new(0.72979758, -1.38609030, 0.72979758, -1.78721094, 0.86071581),
        SosCoefs::new(0.77927357, -1.49413201, 0.77927357, -1.84564946, 0.91006460),
        SosCoefs::new(0.81284927, -1.56639960, 0.81284927, -1.88999761, 0.94929654),
        SosCoefs::new(0.83526236, -1.61317476, 0.83526236, -1.92613712, 0.98348709),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x09B9_0BC5, 0x0798_4793, 0x09B9_0BC5, 0xBA04_3B59, 0x2701_E86C),
        SosCoefsQ31::from_bits(0x1C19_4CFE, 0xDEE7_E40E, 0x1C19_4CFE, 0xB06A_1143, 0x3646_5B84),
        SosCoefsQ31::from_bits(0x334C_A73D, 0xAB8D_756A, 0x334C_A73D, 0xA43F_E278, 0x49A6_FEF5),
        SosCoefsQ31::from_bits(0x4671_3453, 0x8137_9EA8, 0x4671_3453, 0x9A21_BBD8, 0x59D6_8F9E),
        SosCoefsQ31::from_bits(0x2A0B_7030, 0xB18B_91CB, 0x2A0B_7030, 0x92CC_0D20, 0x65AC_CA17),
        SosCoefsQ31::from_bits(0x2EB5_00EB, 0xA74A_4BE5, 0x2EB5_00EB, 0x8D9E_55FC, 0x6E2B_EF7F),
        SosCoefsQ31::from_bits(0x31DF_9E44, 0xA060_2424, 0x31DF_9E44, 0x89E0_E115, 0x747C_FF2D),
        SosCoefsQ31::from_bits(0x3405_B8F1, 0x9BC0_1BE0, 0x3405_B8F1, 0x870A_477A, 0x7982_8C8F),
        SosCoefsQ31::from_bits(0x3574_F047, 0x98C1_BEA2, 0x3574_F047, 0x84BA_2B5B, 0x7DE2_E7AA),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 6),
};

pub static ELLIPTIC_RESAMPLING_RATIO12: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.04842362, 0.04842362, 0.00000000, -0.90315276, 0.00000000),
        SosCoefs::new(0.07329830, -0.12680175, 0.07329830, -1.83578345, 0.85557831),
        SosCoefs::new(0.36475754, -0.69218981, 0.36475754, -1.88586294, 0.92318821),
        SosCoefs::new(0.66983759, -1.29116501, 0.66983759, -1.91951452, 0.96802468),
        SosCoefs::new(0.82292183, -1.59267182, 0.82292183, -1.93844901, 0.99162086),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x0632_BEBF, 0x0632_BEBF, 0x0000_0000, 0xC632_BEBF, 0x0000_0000),
        SosCoefsQ31::from_bits(0x0961_D6B5, 0xEFC4_F5D8, 0x0961_D6B5, 0x8A82_861D, 0x6D83_9709),
        SosCoefsQ31::from_bits(0x2EB0_6002, 0xA766_530D, 0x2EB0_6002, 0x874E_0584, 0x762B_0809),
        SosCoefsQ31::from_bits(0x2ADE_9E79, 0xAD5D_8D6A, 0x2ADE_9E79, 0x8526_AC90, 0x7BE8_3B9A),
        SosCoefsQ31::from_bits(0x34AA_C057, 0x9A11_AA37, 0x34AA_C057, 0x83F0_7392, 0x7EED_6EA7),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};
