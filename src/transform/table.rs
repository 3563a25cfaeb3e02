//! Uncertainty codebooks.
//!
//! Both tables follow `r = C * ((1 + x)^k - 1)` metres, stored in millimetres
//! and truncated to an integer:
//!
//! | Table | C | x | Codes |
//! |-------|-----|------|-------|
//! | [`UNCERTAINTY_MM`] | 10 | 0.1 | 128 (7 bit) |
//! | [`HA_UNCERTAINTY_MM`] | 0.3 | 0.02 | 256 (8 bit) |
//!
//! Entries are strictly increasing, which the inverse lookups rely on.

/// Number of codes in the regular uncertainty codebook.
pub const UNCERTAINTY_CODES: usize = 128;

/// Number of codes in the high-accuracy uncertainty codebook.
pub const HA_UNCERTAINTY_CODES: usize = 256;

/// Regular uncertainty radius in millimetres, indexed by the 7-bit code.
#[rustfmt::skip]
pub static UNCERTAINTY_MM: [u32; UNCERTAINTY_CODES] = [
    0, 1000, 2100, 3310, 4641, 6105, 7715, 9487, 11_435, 13_579, 15_937, 18_531, 21_384, 24_522,
    27_974, 31_772, 35_949, 40_544, 45_599, 51_159, 57_274, 64_002, 71_402, 79_543, 88_497,
    98_347, 109_181, 121_099, 134_209, 148_630, 164_494, 181_943, 201_137, 222_251, 245_476,
    271_024, 299_126, 330_039, 364_043, 401_447, 442_592, 487_851, 537_636, 592_400, 652_640,
    718_904, 791_795, 871_974, 960_172, 1_057_189, 1_163_908, 1_281_299, 1_410_429, 1_552_472,
    1_708_719, 1_880_591, 2_069_650, 2_277_615, 2_506_377, 2_758_014, 3_034_816, 3_339_298,
    3_674_227, 4_042_650, 4_447_915, 4_893_707, 5_384_077, 5_923_485, 6_516_834, 7_169_517,
    7_887_469, 8_677_216, 9_545_938, 10_501_531, 11_552_685, 12_708_953, 13_980_849, 15_379_933,
    16_918_927, 18_611_820, 20_474_002, 22_522_402, 24_775_642, 27_254_206, 29_980_627,
    32_979_690, 36_278_659, 39_907_525, 43_899_277, 48_290_205, 53_120_226, 58_433_248,
    64_277_573, 70_706_330, 77_777_964, 85_556_760, 94_113_436, 103_525_780, 113_879_358,
    125_268_293, 137_796_123, 151_576_735, 166_735_409, 183_409_950, 201_751_945, 221_928_139,
    244_121_953, 268_535_149, 295_389_664, 324_929_630, 357_423_593, 393_166_952, 432_484_648,
    475_734_112, 523_308_524, 575_640_376, 633_205_414, 696_526_955, 766_180_651, 842_799_716,
    927_080_688, 1_019_789_756, 1_121_769_732, 1_233_947_705, 1_357_343_476, 1_493_078_824,
    1_642_387_706, 1_806_627_477,
];

/// High-accuracy uncertainty radius in millimetres, indexed by the 8-bit code.
#[rustfmt::skip]
pub static HA_UNCERTAINTY_MM: [u32; HA_UNCERTAINTY_CODES] = [
    0, 6, 12, 18, 24, 31, 37, 44, 51, 58, 65, 73, 80, 88, 95, 103, 111, 120, 128, 137, 145, 154,
    163, 173, 182, 192, 202, 212, 222, 232, 243, 254, 265, 276, 288, 299, 311, 324, 336, 349, 362,
    375, 389, 402, 417, 431, 445, 460, 476, 491, 507, 523, 540, 556, 574, 591, 609, 627, 646, 665,
    684, 703, 724, 744, 765, 786, 808, 830, 853, 876, 899, 923, 948, 973, 998, 1024, 1051, 1078,
    1105, 1133, 1162, 1191, 1221, 1252, 1283, 1314, 1347, 1380, 1413, 1447, 1482, 1518, 1554,
    1592, 1629, 1668, 1707, 1748, 1788, 1830, 1873, 1916, 1961, 2006, 2052, 2099, 2147, 2196,
    2246, 2297, 2349, 2402, 2456, 2511, 2567, 2625, 2683, 2743, 2804, 2866, 2929, 2994, 3060,
    3127, 3195, 3265, 3336, 3409, 3483, 3559, 3636, 3715, 3795, 3877, 3961, 4046, 4133, 4222,
    4312, 4404, 4498, 4594, 4692, 4792, 4894, 4998, 5104, 5212, 5322, 5435, 5549, 5666, 5786,
    5907, 6032, 6158, 6287, 6419, 6554, 6691, 6830, 6973, 7119, 7267, 7418, 7573, 7730, 7891,
    8055, 8222, 8392, 8566, 8743, 8924, 9109, 9297, 9489, 9685, 9884, 10_088, 10_296, 10_508,
    10_724, 10_944, 11_169, 11_399, 11_633, 11_871, 12_115, 12_363, 12_616, 12_875, 13_138,
    13_407, 13_681, 13_961, 14_246, 14_537, 14_834, 15_136, 15_445, 15_760, 16_081, 16_409,
    16_743, 17_084, 17_431, 17_786, 18_148, 18_517, 18_893, 19_277, 19_669, 20_068, 20_475,
    20_891, 21_315, 21_747, 22_188, 22_638, 23_096, 23_564, 24_042, 24_529, 25_025, 25_532,
    26_048, 26_575, 27_113, 27_661, 28_220, 28_791, 29_372, 29_966, 30_571, 31_189, 31_818,
    32_461, 33_116, 33_784, 34_466, 35_161, 35_871, 36_594, 37_332, 38_085, 38_852, 39_635,
    40_434, 41_249, 42_080, 42_927, 43_792, 44_674, 45_573, 46_491,
];
