//! This module contains constants used throughout the code, that may eventually
//! be turned into configurable options.

/// Environment variable pointing to the directory holding the `.adn` instances.
pub const DATA_DIR_VAR: &str = "GENOME_DATA";

/// The naive algorithm enumerates all alignments, which is roughly `3^(n+m)`.
/// Inputs longer than this are rejected.
/// NOTE: 15 already takes minutes.
pub const NAIVE_MAX_LEN: usize = 15;

/// Secondary ids tried, in order, when looking up an instance by its size.
/// `Inst_{size:07}_{id}.adn`
pub const SECONDARY_IDS: [usize; 12] = [7, 8, 13, 45, 32, 56, 89, 76, 77, 3, 20, 6];

/// Sizes for which at least one instance exists in the data directory.
pub const INSTANCE_SIZES: [usize; 18] = [
    10, 12, 13, 14, 20, 50, 100, 500, 1000, 2000, 3000, 5000, 8000, 10000, 15000, 20000, 50000,
    100000,
];

/// All instance files of the data directory, ordered by size.
pub const INSTANCE_FILES: [&str; 58] = [
    "Inst_0000010_44.adn",
    "Inst_0000010_7.adn",
    "Inst_0000010_8.adn",
    "Inst_0000012_13.adn",
    "Inst_0000012_32.adn",
    "Inst_0000012_56.adn",
    "Inst_0000013_45.adn",
    "Inst_0000013_56.adn",
    "Inst_0000013_89.adn",
    "Inst_0000014_23.adn",
    "Inst_0000014_7.adn",
    "Inst_0000014_83.adn",
    "Inst_0000015_2.adn",
    "Inst_0000015_4.adn",
    "Inst_0000015_76.adn",
    "Inst_0000020_17.adn",
    "Inst_0000020_32.adn",
    "Inst_0000020_8.adn",
    "Inst_0000050_3.adn",
    "Inst_0000050_77.adn",
    "Inst_0000050_9.adn",
    "Inst_0000100_3.adn",
    "Inst_0000100_44.adn",
    "Inst_0000100_7.adn",
    "Inst_0000500_3.adn",
    "Inst_0000500_8.adn",
    "Inst_0000500_88.adn",
    "Inst_0001000_2.adn",
    "Inst_0001000_23.adn",
    "Inst_0001000_7.adn",
    "Inst_0002000_3.adn",
    "Inst_0002000_44.adn",
    "Inst_0002000_8.adn",
    "Inst_0003000_1.adn",
    "Inst_0003000_10.adn",
    "Inst_0003000_25.adn",
    "Inst_0003000_45.adn",
    "Inst_0005000_32.adn",
    "Inst_0005000_33.adn",
    "Inst_0005000_4.adn",
    "Inst_0008000_32.adn",
    "Inst_0008000_54.adn",
    "Inst_0008000_98.adn",
    "Inst_0010000_50.adn",
    "Inst_0010000_7.adn",
    "Inst_0010000_8.adn",
    "Inst_0015000_20.adn",
    "Inst_0015000_3.adn",
    "Inst_0015000_30.adn",
    "Inst_0020000_5.adn",
    "Inst_0020000_64.adn",
    "Inst_0020000_77.adn",
    "Inst_0050000_6.adn",
    "Inst_0050000_63.adn",
    "Inst_0050000_88.adn",
    "Inst_0100000_11.adn",
    "Inst_0100000_3.adn",
    "Inst_0100000_76.adn",
];
