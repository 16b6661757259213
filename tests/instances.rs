use pa_linear_space::config::{DATA_DIR_VAR, INSTANCE_FILES};
use pa_linear_space::prelude::*;

const INST_10: &str = "10\n5\nT A T A T G A G T C \nT A T T T \n";
const INST_12: &str = "12\n9\nA G T A C G C A T T G A \nT A T G C A A G A \n";

/// Align every readable instance with both algorithms.
#[test]
fn align_instances_from_directory() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Inst_0000010_7.adn"), INST_10).unwrap();
    std::fs::write(dir.path().join("Inst_0000012_13.adn"), INST_12).unwrap();
    let source = InstanceSource::new(dir.path());
    let cm = DnaMetricSpace;

    let mut aligned = 0;
    for r in source.by_size().take(2) {
        let (size, block) = r.unwrap();
        assert_eq!(block.x().len(), size);
        let quadratic = align_quadratic(block.x(), block.y(), &cm);
        let linear = align_linear_space(block.x(), block.y(), &cm);
        assert_eq!(quadratic.cost, linear.cost);
        assert_eq!(quadratic.cost, distance_dp(block.x(), block.y(), &cm));
        aligned += 1;
    }
    assert_eq!(aligned, 2);

    // Both files are among the known instances, and nothing else exists.
    let readable = source.all().filter(Result::is_ok).count();
    assert_eq!(readable, 2);
    assert_eq!(source.all().count(), INSTANCE_FILES.len());
}

#[test]
fn instance_directory_from_env() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Inst_0000010_7.adn"), INST_10).unwrap();
    std::env::set_var(DATA_DIR_VAR, dir.path());
    let source = InstanceSource::from_env().unwrap();
    assert_eq!(source.dir, dir.path());
    let block = source.load_of_size(10).unwrap();
    assert_eq!(distance_dp(block.x(), block.y(), &DnaMetricSpace), 10);

    std::env::remove_var(DATA_DIR_VAR);
    assert!(matches!(
        InstanceSource::from_env(),
        Err(Error::MissingDataDir { .. })
    ));
}
