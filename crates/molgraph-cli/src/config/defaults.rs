use std::path::PathBuf;

/// The heterocycle and carbonyl reference list used when the run configuration does
/// not supply its own.
pub const REFERENCE_NOTATIONS: [&str; 20] = [
    "C1CC1",
    "C1OC1",
    "C1NC1",
    "CCCC(=O)C",
    "CCC(=O)CC",
    "CCCCC=O",
    "CCCC(=O)O",
    "CCOC(=O)C",
    "CC(=O)OC(=O)C",
    "CCNC(=O)C",
    "CCCC(=O)N",
    "C1=CC=CC=C1",
    "C1=CNC=C1",
    "C1=CNN=C1",
    "C1=CN=CN1",
    "C1=CSC=N1",
    "C1=COC=C1",
    "C1=CC=C2C(=C1)C=CN2",
    "C1=CC=C2C(=C1)C=CC=N2",
    "C1=C2C(=NC=N1)N=CN2",
];

/// Values used for anything neither the CLI nor the config file sets.
pub struct DefaultsConfig {
    /// Resolved against the working directory.
    pub catalog: PathBuf,
    pub output_dir: PathBuf,
    pub reference_name: String,
    pub reference_indent: usize,
    pub reference_notations: Vec<String>,
    pub data_size: usize,
    pub competition_size: usize,
    pub max_node_size: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from("catalog.toml"),
            output_dir: PathBuf::from("."),
            reference_name: "josh".to_string(),
            reference_indent: 2,
            reference_notations: REFERENCE_NOTATIONS.iter().map(|s| s.to_string()).collect(),
            data_size: 3000,
            competition_size: 500,
            max_node_size: 100,
        }
    }
}
