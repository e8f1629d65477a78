// high-pass, 50 Hz stop edge (-60 dB), 200 Hz pass edge (0.1 dB ripple)

use crate::runtime::*;
use crate::tables::CoefficientTable;

pub static BUTTERWORTH_DC_REMOVE_8000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.94995506, -0.94995506, 0.00000000, -0.89991012, 0.00000000),
        SosCoefs::new(0.91099249, -1.82198499, 0.91099249, -1.81692838, 0.82704159),
        SosCoefs::new(0.93591953, -1.87183906, 0.93591953, -1.86664409, 0.87703402),
        SosCoefs::new(0.97444922, -1.94889843, 0.97444922, -1.94348960, 0.95430726),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7998_20A0, 0x8667_DF60, 0x0000_0000, 0xC667_DF60, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3A4D_B376, 0x8B64_9914, 0x3A4D_B376, 0x8BB7_7204, 0x69DC_7FB8),
        SosCoefsQ31::from_bits(0x3BE6_1B06, 0x8833_C9F3, 0x3BE6_1B06, 0x8888_E737, 0x7042_A6A3),
        SosCoefsQ31::from_bits(0x3E5D_603E, 0x8345_3F84, 0x3E5D_603E, 0x839D_DDCC, 0x7A26_BD89),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 4),
};

pub static CHEBYSHEV1_DC_REMOVE_8000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.87257179, -0.87257179, 0.00000000, -0.74514357, 0.00000000),
        SosCoefs::new(0.89472895, -1.78945790, 0.89472895, -1.77202830, 0.80688749),
        SosCoefs::new(0.97359589, -1.94719178, 0.97359589, -1.93709851, 0.95728505),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x6FB0_6EAD, 0x904F_9153, 0x0000_0000, 0xD04F_9153, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3943_3D35, 0x8D79_8597, 0x3943_3D35, 0x8E97_1698, 0x6748_16D4),
        SosCoefsQ31::from_bits(0x3E4F_6522, 0x8361_35BD, 0x3E4F_6522, 0x8406_93FD, 0x7A88_5107),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 2),
};

pub static CHEBYSHEV2_DC_REMOVE_8000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.95899850, -0.95899850, 0.00000000, -0.91799700, 0.00000000),
        SosCoefs::new(0.93370967, -1.86692182, 0.93370967, -1.86350873, 0.87083244),
        SosCoefs::new(0.97253386, -1.94371130, 0.97253386, -1.94015706, 0.94862197),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7AC0_767C, 0x853F_8984, 0x0000_0000, 0xC53F_8984, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3BC1_E639, 0x8884_5A5D, 0x3BC1_E639, 0x88BC_45E6, 0x6F77_6FF6),
        SosCoefsQ31::from_bits(0x3E3D_FEAD, 0x839A_3BEE, 0x3E3D_FEAD, 0x83D4_777F, 0x796C_71D7),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static ELLIPTIC_DC_REMOVE_8000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.85905039, -1.71779494, 0.85905039, -1.70183450, 0.73406123),
        SosCoefs::new(0.95634496, -1.91077400, 0.95634496, -1.92477746, 0.94296010),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x36FA_AE7E, 0x920F_A5CC, 0x36FA_AE7E, 0x9315_24C3, 0x5DF5_B7E6),
        SosCoefsQ31::from_bits(0x3D34_C183, 0x85B5_E0FA, 0x3D34_C183, 0x84D0_7235, 0x78B2_EA99),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 2),
};

pub static BUTTERWORTH_DC_REMOVE_12000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.96607305, -0.96607305, 0.00000000, -0.93214610, 0.00000000),
        SosCoefs::new(0.93939539, -1.87879077, 0.93939539, -1.87647366, 0.88110789),
        SosCoefs::new(0.95691468, -1.91382937, 0.95691468, -1.91146904, 0.91618970),
        SosCoefs::new(0.98341716, -1.96683432, 0.98341716, -1.96440862, 0.96926003),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7BA8_4820, 0x8457_B7E0, 0x0000_0000, 0xC457_B7E0, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3C1F_0DD4, 0x87C1_E459, 0x3C1F_0DD4, 0x87E7_DB0B, 0x70C8_24B3),
        SosCoefsQ31::from_bits(0x3D3E_1716, 0x8583_D1D3, 0x3D3E_1716, 0x85AA_7DC5, 0x7545_B43E),
        SosCoefsQ31::from_bits(0x3EF0_4E8A, 0x821F_62ED, 0x3EF0_4E8A, 0x8247_210E, 0x7C10_B66A),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 4),
};

pub static CHEBYSHEV1_DC_REMOVE_12000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.91137186, -0.91137186, 0.00000000, -0.82274372, 0.00000000),
        SosCoefs::new(0.92921150, -1.85842299, 0.92921150, -1.85039636, 0.86644963),
        SosCoefs::new(0.98337483, -1.96674965, 0.98337483, -1.96222906, 0.97127025),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x74A7_D543, 0x8B58_2ABD, 0x0000_0000, 0xCB58_2ABE, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3B78_337E, 0x890F_9903, 0x3B78_337E, 0x8993_1B28, 0x6EE7_D245),
        SosCoefsQ31::from_bits(0x3EEF_9CF9, 0x8220_C60F, 0x3EEF_9CF9, 0x826A_D6CE, 0x7C52_9561),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 2),
};

pub static CHEBYSHEV2_DC_REMOVE_12000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.97228883, -0.97228883, 0.00000000, -0.94457766, 0.00000000),
        SosCoefs::new(0.95517821, -1.91013022, 0.95517821, -1.90857852, 0.91190812),
        SosCoefs::new(0.98190929, -1.96320988, 0.98190929, -1.96161491, 0.96541355),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7C73_F5DD, 0x838C_0A23, 0x0000_0000, 0xC38C_0A23, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3D21_A3C9, 0x85C0_6D2A, 0x3D21_A3C9, 0x85D9_D977, 0x74B9_67BD),
        SosCoefsQ31::from_bits(0x3ED7_9A10, 0x825A_C4F4, 0x3ED7_9A10, 0x8274_E6C0, 0x7B92_ABD8),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static ELLIPTIC_DC_REMOVE_12000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.90318123, -1.80621986, 0.90318123, -1.79877861, 0.81380370),
        SosCoefs::new(0.96774786, -1.93463577, 0.96774786, -1.95339219, 0.96155330),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x39CD_B8A0, 0x8C66_E4D2, 0x39CD_B8A0, 0x8CE0_CFB2, 0x682A_B841),
        SosCoefsQ31::from_bits(0x3DEF_94B8, 0x842E_ED71, 0x3DEF_94B8, 0x82FB_9F4F, 0x7B14_2DAB),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFF8, 2),
};

pub static BUTTERWORTH_DC_REMOVE_16000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.97433775, -0.97433775, 0.00000000, -0.94867550, 0.00000000),
        SosCoefs::new(0.95405882, -1.90811764, 0.95405882, -1.90679399, 0.90944130),
        SosCoefs::new(0.96755139, -1.93510278, 0.96755139, -1.93376041, 0.93644516),
        SosCoefs::new(0.98773697, -1.97547394, 0.98773697, -1.97410356, 0.97684433),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7CB7_196C, 0x8348_E694, 0x0000_0000, 0xC348_E694, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3D0F_4CBC, 0x85E1_6689, 0x3D0F_4CBC, 0x85F7_165B, 0x7468_9294),
        SosCoefsQ31::from_bits(0x3DEC_5CAC, 0x8427_46A9, 0x3DEC_5CAC, 0x843D_44FF, 0x77DD_6F5B),
        SosCoefsQ31::from_bits(0x3F37_1522, 0x8191_D5BC, 0x3F37_1522, 0x81A8_4989, 0x7D09_3C21),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 4),
};

pub static CHEBYSHEV1_DC_REMOVE_16000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.93204807, -0.93204807, 0.00000000, -0.86409614, 0.00000000),
        SosCoefs::new(0.94669841, -1.89339681, 0.94669841, -1.88880054, 0.89799308),
        SosCoefs::new(0.98790479, -1.97580959, 0.98790479, -1.97325708, 0.97836209),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x774D_59E6, 0x88B2_A61A, 0x0000_0000, 0xC8B2_A61B, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3C96_B4E9, 0x86D2_962F, 0x3C96_B4E9, 0x871D_E455, 0x72F1_6FF0),
        SosCoefsQ31::from_bits(0x3F39_D506, 0x818C_55F4, 0x3F39_D506, 0x81B6_27EF, 0x7D3A_F80D),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 2),
};

pub static CHEBYSHEV2_DC_REMOVE_16000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.97907215, -0.97907215, 0.00000000, -0.95814430, 0.00000000),
        SosCoefs::new(0.96614482, -1.93216095, 0.96614482, -1.93127812, 0.93317248),
        SosCoefs::new(0.98651795, -1.97269189, 0.98651795, -1.97179049, 0.97393730),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7D52_3C73, 0x82AD_C38D, 0x0000_0000, 0xC2AD_C38D, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3DD5_5118, 0x8457_7997, 0x3DD5_5118, 0x8465_F073, 0x7772_3219),
        SosCoefsQ31::from_bits(0x3F23_1C2E, 0x81BF_6A83, 0x3F23_1C2E, 0x81CE_2F40, 0x7CA9_FA34),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static ELLIPTIC_DC_REMOVE_16000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.92627386, -1.85246553, 0.92627386, -1.84817617, 0.85683709),
        SosCoefs::new(0.97320598, -1.94592586, 0.97320598, -1.96639786, 0.97101112),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x3B48_122C, 0x8971_3467, 0x3B48_122C, 0x89B7_7B4D, 0x6DAC_D67E),
        SosCoefsQ31::from_bits(0x3E49_01C3, 0x8375_F35C, 0x3E49_01C3, 0x8226_899A, 0x7C4A_17AE),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFD, 2),
};

pub static BUTTERWORTH_DC_REMOVE_24000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.98274453, -0.98274453, 0.00000000, -0.96548905, 0.00000000),
        SosCoefs::new(0.96904151, -1.93808302, 0.96904151, -1.93748551, 0.93868053),
        SosCoefs::new(0.97827895, -1.95655790, 0.97827895, -1.95595469, 0.95716110),
        SosCoefs::new(0.99194290, -1.98388580, 0.99194290, -1.98327417, 0.98449743),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7DCA_929A, 0x8235_6D66, 0x0000_0000, 0xC235_6D66, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3E04_C6AF, 0x83F6_72A2, 0x3E04_C6AF, 0x8400_3CC5, 0x7826_AF01),
        SosCoefsQ31::from_bits(0x3E9C_1F4E, 0x82C7_C163, 0x3E9C_1F4E, 0x82D1_A36A, 0x7A84_4148),
        SosCoefsQ31::from_bits(0x3F7B_FE11, 0x8108_03DE, 0x3F7B_FE11, 0x8112_093B, 0x7E04_02FF),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 4),
};

pub static CHEBYSHEV1_DC_REMOVE_24000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.95366146, -0.95366146, 0.00000000, -0.90732292, 0.00000000),
        SosCoefs::new(0.96433434, -1.92866867, 0.96433434, -1.92658902, 0.93074833),
        SosCoefs::new(0.99218880, -1.98437760, 0.99218880, -1.98323888, 0.98551631),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7A11_9422, 0x85EE_6BDE, 0x0000_0000, 0xC5EE_6BDE, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3DB7_A75E, 0x8490_B143, 0x3DB7_A75E, 0x84B2_C3F5, 0x7722_C2DD),
        SosCoefsQ31::from_bits(0x3F80_0572, 0x80FF_F51D, 0x3F80_0572, 0x8112_9D3B, 0x7E25_6602),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 2),
};

pub static CHEBYSHEV2_DC_REMOVE_24000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.98595033, -0.98595033, 0.00000000, -0.97190067, 0.00000000),
        SosCoefs::new(0.97726922, -1.95448058, 0.97726922, -1.95408370, 0.95493531),
        SosCoefs::new(0.99107083, -1.98198807, 0.99107083, -1.98158559, 0.98254414),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7E33_9EDC, 0x81CC_6124, 0x0000_0000, 0xC1CC_6124, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3E8B_942E, 0x82E9_CA4D, 0x3E8B_942E, 0x82F0_4AF0, 0x7A3B_51FD),
        SosCoefsQ31::from_bits(0x3F6D_B45D, 0x8127_1B85, 0x3F6D_B45D, 0x812D_B3A0, 0x7DC4_01A8),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static ELLIPTIC_DC_REMOVE_24000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.95008835, -1.90013926, 0.95008835, -1.89818495, 0.90213101),
        SosCoefs::new(0.97849596, -1.95677481, 0.97849596, -1.97851279, 0.98057324),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x3CCE_3F62, 0x8664_1E4F, 0x3CCE_3F62, 0x8684_2341, 0x7379_076C),
        SosCoefsQ31::from_bits(0x3E9F_AD89, 0x82C4_3391, 0x3E9F_AD89, 0x8160_0BE8, 0x7D83_6C80),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 2),
};

pub static BUTTERWORTH_DC_REMOVE_32000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.98700241, -0.98700241, 0.00000000, -0.97400481, 0.00000000),
        SosCoefs::new(0.97665530, -1.95331061, 0.97665530, -1.95297187, 0.95364935),
        SosCoefs::new(0.98367630, -1.96735260, 0.98367630, -1.96701142, 0.96769377),
        SosCoefs::new(0.99400213, -1.98800425, 0.99400213, -1.98765950, 0.98834901),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7E56_1846, 0x81A9_E7BA, 0x0000_0000, 0xC1A9_E7BA, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3E81_8540, 0x82FC_F57F, 0x3E81_8540, 0x8302_8242, 0x7A11_2E87),
        SosCoefsQ31::from_bits(0x3EF4_8D6E, 0x8216_E524, 0x3EF4_8D6E, 0x821C_7C1D, 0x7BDD_63AA),
        SosCoefsQ31::from_bits(0x3F9D_BB19, 0x80C4_89CE, 0x3F9D_BB19, 0x80CA_2FCD, 0x7E82_3862),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 4),
};

pub static CHEBYSHEV1_DC_REMOVE_32000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.96484215, -0.96484215, 0.00000000, -0.92968431, 0.00000000),
        SosCoefs::new(0.97320421, -1.94640843, 0.97320421, -1.94522810, 0.94758876),
        SosCoefs::new(0.99423709, -1.98847417, 0.99423709, -1.98783245, 0.98911590),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7B7F_F29E, 0x8480_0D62, 0x0000_0000, 0xC480_0D62, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3E48_FA54, 0x836E_0B58, 0x3E48_FA54, 0x8381_6200, 0x794A_96A0),
        SosCoefsQ31::from_bits(0x3FA1_9498, 0x80BC_D6D1, 0x3FA1_9498, 0x80C7_5A63, 0x7E9B_5984),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 2),
};

pub static CHEBYSHEV2_DC_REMOVE_32000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.98942567, -0.98942567, 0.00000000, -0.97885135, 0.00000000),
        SosCoefs::new(0.98289126, -1.96574978, 0.98289126, -1.96552525, 0.96600704),
        SosCoefs::new(0.99332564, -1.98656468, 0.99332564, -1.98633777, 0.98687818),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7EA5_8021, 0x815A_7FDF, 0x0000_0000, 0xC15A_7FDF, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3EE7_B0B9, 0x8231_27D5, 0x3EE7_B0B9, 0x8234_D592, 0x7BA6_1E60),
        SosCoefsQ31::from_bits(0x3F92_A5B0, 0x80DC_1FD6, 0x3F92_A5B0, 0x80DF_D78F, 0x7E52_0635),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static ELLIPTIC_DC_REMOVE_32000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.96227533, -1.92452932, 0.96227533, -1.92341614, 0.92566383),
        SosCoefs::new(0.98107647, -1.96203052, 0.98107647, -1.98423075, 0.98539261),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x3D95_EB40, 0x84D4_82F8, 0x3D95_EB40, 0x84E6_BFFB, 0x767C_2706),
        SosCoefsQ31::from_bits(0x3EC9_F502, 0x826E_177A, 0x3EC9_F502, 0x8102_5D04, 0x7E21_5853),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFEB, 2),
};

pub static BUTTERWORTH_DC_REMOVE_48000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.99129727, -0.99129727, 0.00000000, -0.98259454, 0.00000000),
        SosCoefs::new(0.98435222, -1.96870445, 0.98435222, -1.96855271, 0.96885618),
        SosCoefs::new(0.98909574, -1.97819148, 0.98909574, -1.97803902, 0.97834395),
        SosCoefs::new(0.99603166, -1.99206331, 0.99603166, -1.99190978, 0.99221685),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7EE2_D436, 0x811D_2BCA, 0x0000_0000, 0xC11D_2BCA, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3EFF_A077, 0x8200_BF12, 0x3EFF_A077, 0x8203_3B7E, 0x7C03_7AB2),
        SosCoefsQ31::from_bits(0x3F4D_583A, 0x8165_4F8C, 0x3F4D_583A, 0x8167_CF09, 0x7D3A_5FE1),
        SosCoefsQ31::from_bits(0x3FBE_FB8F, 0x8082_08E2, 0x3FBE_FB8F, 0x8084_8CDA, 0x7F00_F62D),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 4),
};

pub static CHEBYSHEV1_DC_REMOVE_48000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.97628515, -0.97628515, 0.00000000, -0.95257030, 0.00000000),
        SosCoefs::new(0.98210638, -1.96421276, 0.98210638, -1.96368345, 0.96474208),
        SosCoefs::new(0.99622211, -1.99244422, 0.99622211, -1.99215849, 0.99272996),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7CF6_E96A, 0x8309_1696, 0x0000_0000, 0xC309_1696, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3EDA_D4B9, 0x824A_568E, 0x3EDA_D4B9, 0x8253_02A8, 0x7B7C_AB17),
        SosCoefsQ31::from_bits(0x3FC2_1A64, 0x807B_CB38, 0x3FC2_1A64, 0x8080_79B1, 0x7F11_C682),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 2),
};

pub static CHEBYSHEV2_DC_REMOVE_48000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.99292554, -0.99292554, 0.00000000, -0.98585109, 0.00000000),
        SosCoefs::new(0.98855355, -1.97709247, 0.98855355, -1.97699211, 0.97720747),
        SosCoefs::new(0.99556563, -1.99109268, 0.99556563, -1.99099160, 0.99123233),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7F18_2F2B, 0x80E7_D0D5, 0x0000_0000, 0xC0E7_D0D5, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3F44_761F, 0x8177_5120, 0x3F44_761F, 0x8178_F616, 0x7D15_2266),
        SosCoefsQ31::from_bits(0x3FB7_58E3, 0x8091_F006, 0x3FB7_58E3, 0x8093_97F7, 0x7EE0_B36D),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static ELLIPTIC_DC_REMOVE_48000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.97465373, -1.94929785, 0.97465373, -1.94879681, 0.94980849),
        SosCoefs::new(0.98361322, -1.96717190, 0.98361322, -1.98971944, 0.99023709),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x3E60_BA06, 0x833E_B43A, 0x3E60_BA06, 0x8346_E9BE, 0x7993_531F),
        SosCoefsQ31::from_bits(0x3EF3_84F4, 0x8219_DADF, 0x3EF3_84F4, 0x80A8_6FCF, 0x7EC0_16C1),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFD3, 2),
};

pub static BUTTERWORTH_DC_REMOVE_96000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.99562963, -0.99562963, 0.00000000, -0.99125926, 0.00000000),
        SosCoefs::new(0.99213340, -1.98426680, 0.99213340, -1.98422857, 0.98430504),
        SosCoefs::new(0.99453705, -1.98907411, 0.99453705, -1.98903578, 0.98911244),
        SosCoefs::new(0.99803108, -1.99606216, 0.99803108, -1.99602370, 0.99610062),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7F70_CAAD, 0x808F_3553, 0x0000_0000, 0xC08F_3553, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3F7F_1D19, 0x8101_C5CE, 0x3F7F_1D19, 0x8102_662B, 0x7DFD_B51D),
        SosCoefsQ31::from_bits(0x3FA6_7EBF, 0x80B3_0282, 0x3FA6_7EBF, 0x80B3_A342, 0x7E9B_3C7D),
        SosCoefsQ31::from_bits(0x3FDF_BDC1, 0x8040_847E, 0x3FDF_BDC1, 0x8041_25CF, 0x7F80_39A5),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 4),
};

pub static CHEBYSHEV1_DC_REMOVE_96000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.98800080, -0.98800080, 0.00000000, -0.97600159, 0.00000000),
        SosCoefs::new(0.99103897, -1.98207794, 0.99103897, -1.98194442, 0.98221146),
        SosCoefs::new(0.99814328, -1.99628656, 0.99814328, -1.99621500, 0.99635813),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7E76_CF64, 0x8189_309C, 0x0000_0000, 0xC189_309C, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3F6D_2EB6, 0x8125_A294, 0x3F6D_2EB6, 0x8127_D29A, 0x7DB9_1AE6),
        SosCoefsQ31::from_bits(0x3FE1_945B, 0x803C_D74A, 0x3FE1_945B, 0x803E_0376, 0x7F88_A9C2),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FFFF, 2),
};

pub static CHEBYSHEV2_DC_REMOVE_96000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.99645023, -0.99645023, 0.00000000, -0.99290045, 0.00000000),
        SosCoefs::new(0.99425638, -1.98850908, 0.99425638, -1.98848384, 0.98853799),
        SosCoefs::new(0.99779051, -1.99557136, 0.99779051, -1.99554603, 0.99560635),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x7F8B_AE55, 0x8074_51AB, 0x0000_0000, 0xC074_51AB, 0x0000_0000),
        SosCoefsQ31::from_bits(0x3FA1_E580, 0x80BC_446E, 0x3FA1_E580, 0x80BC_AE47, 0x7E88_69B2),
        SosCoefsQ31::from_bits(0x3FDB_CCBB, 0x8048_8F15, 0x3FDB_CCBB, 0x8048_F94E, 0x7F70_075D),
    ],
    fixed_gain: FixedGain::new(0x4000_0000, 3),
};

pub static ELLIPTIC_DC_REMOVE_96000: CoefficientTable = CoefficientTable {
    float: &[
        SosCoefs::new(0.98722734, -1.97445224, 0.98722734, -1.97432538, 0.97458154),
        SosCoefs::new(0.98610563, -1.97219758, 0.98610563, -1.99497660, 0.99510633),
    ],
    fixed: &[
        SosCoefsQ31::from_bits(0x3F2E_BB91, 0x81A2_9310, 0x3F2E_BB91, 0x81A4_A72D, 0x7CBF_167D),
        SosCoefsQ31::from_bits(0x3F1C_5B37, 0x81C7_82E8, 0x3F1C_5B37, 0x8052_4DA8, 0x7F5F_A4F2),
    ],
    fixed_gain: FixedGain::new(0x7FFF_FF1A, 2),
};
