use itertools::Itertools;
use pa_linear_space::generate::setup_with_seed;
use pa_linear_space::prelude::*;

fn dna(s: &str) -> Vec<Dna> {
    parse_dna(s).unwrap()
}

#[test]
fn all_algorithms_agree_on_small_inputs() {
    let cm = DnaMetricSpace;
    // All pairs of sequences of length at most 4 over a 2 letter alphabet.
    let words = (0..=4)
        .flat_map(|n| {
            (0..n)
                .map(|_| [Dna::A, Dna::T])
                .multi_cartesian_product()
                .chain((n == 0).then(Vec::new))
        })
        .collect_vec();
    for (x, y) in words.iter().cartesian_product(&words) {
        let d = distance_naive(x, y, &cm);
        assert_eq!(distance_dp(x, y, &cm), d);
        assert_eq!(distance_linear_space(x, y, &cm), d);
        assert_eq!(align_quadratic(x, y, &cm).cost, d);
        let align = align_linear_space(x, y, &cm);
        assert_eq!(alignment_cost(&align, &cm), d);
        assert!(align.is_alignment_of(x, y));
    }
}

#[test]
fn gattaca() {
    // U is outside of the DNA alphabet, so bytes are used here.
    let cm = LinearCost::<u8>::new_unit();
    let (x, y) = (b"GATTACA", b"GCATGCU");
    assert_eq!(distance_naive(x, y, &cm), 4);
    assert_eq!(distance_dp(x, y, &cm), 4);
    let quadratic = align_quadratic(x, y, &cm);
    let linear = align_linear_space(x, y, &cm);
    assert_eq!(quadratic.cost, 4);
    assert_eq!(linear.cost, 4);
    assert_eq!(quadratic, linear);
    assert_eq!(quadratic.x, b"GATTACA");
    assert_eq!(quadratic.y, b"GCATGCU");
}

#[test]
fn round_trip() {
    let cm = DnaMetricSpace;
    for seed in 0..10 {
        let block = setup_with_seed(60, 0.25, seed);
        for align in [
            align_quadratic(block.x(), block.y(), &cm),
            align_linear_space(block.x(), block.y(), &cm),
            align_linear_space_deque(block.x(), block.y(), &cm),
        ] {
            assert_eq!(strip_gaps(&align, Side::Left), block.x());
            assert_eq!(strip_gaps(&align, Side::Right), block.y());
        }
    }
}

#[test]
fn linear_space_alignment_is_the_quadratic_one() {
    let cms = [
        LinearCost::<Dna>::new_unit(),
        LinearCost::new_lcs(),
        LinearCost::new_linear(5, 2),
    ];
    for seed in 0..50 {
        let block = setup_with_seed(20 + seed as usize, 0.3, seed);
        let (x, y) = (block.x(), block.y());
        let quadratic = align_quadratic(x, y, &DnaMetricSpace);
        assert_eq!(align_linear_space(x, y, &DnaMetricSpace), quadratic);
        assert_eq!(align_linear_space_deque(x, y, &DnaMetricSpace), quadratic);
        for cm in &cms {
            assert_eq!(align_linear_space(x, y, cm), align_quadratic(x, y, cm));
        }
    }
}

#[test]
fn table_reuse() {
    let cm = DnaMetricSpace;
    let block = setup_with_seed(80, 0.2, 5);
    let (x, y) = (block.x(), block.y());
    let table = dp_table(x, y, &cm);
    assert_eq!(table.distance(), distance_dp(x, y, &cm));
    assert_eq!(
        align_quadratic_with_table(x, y, &cm, &table).unwrap(),
        align_quadratic(x, y, &cm)
    );
    assert!(align_quadratic_with_table(&x[1..], y, &cm, &table).is_err());
}

#[test]
fn alignment_against_empty_sequence() {
    let cm = LinearCost::<Dna>::new_linear_asymmetric(1, 2, 3);
    let y = dna("ACGTTG");
    let align = align_linear_space(&[], &y, &cm);
    assert_eq!(alignment_cost(&align, &cm), 6 * cm.ins());
    assert_eq!(align.x, gaps::<Dna>(6));
    let align = align_quadratic(&y, &[], &cm);
    assert_eq!(alignment_cost(&align, &cm), 6 * cm.del());
    assert!(strip_gaps(&align, Side::Right).is_empty());
}

#[test]
fn cut_is_on_an_optimal_path() {
    let cm = LinearCost::<Dna>::new_linear(1, 2);
    for seed in 0..10 {
        let block = setup_with_seed(50, 0.3, seed);
        let (x, y) = (block.x(), block.y());
        let (i, j) = cut(x, y, &cm);
        assert_eq!(
            distance_dp(&x[..i], &y[..j], &cm) + distance_dp(&x[i..], &y[j..], &cm),
            distance_dp(x, y, &cm)
        );
    }
}

#[test]
fn course_examples() {
    let cm = DnaMetricSpace;
    let (x, y) = (dna("AGTACGCA"), dna("TATGC"));
    assert_eq!(distance_dp(&x, &y, &cm), 10);
    assert_eq!(cut(&x, &y, &cm), (4, 2));
    assert_eq!(dna_to_string(&align_quadratic(&x, &y, &cm).y), "--TATGC-");
    assert_eq!(distance_dp(&dna("ACGT"), &dna("TGCA"), &cm), 10);

    let block = "10\n5\nT A T A T G A G T C\nT A T T T\n"
        .parse::<DnaBlock>()
        .unwrap();
    let (cost, align) = distance_and_align(block.x(), block.y(), &cm);
    assert_eq!(cost, 10);
    assert_eq!(align_linear_space(block.x(), block.y(), &cm).cost, 10);
    assert_eq!(
        align.to_string(),
        "TATATGAGTC\n||| |   | \nTAT-T---T-\ncost: 10"
    );
}

#[test]
fn aligners() {
    let block = setup_with_seed(6, 0.3, 42);
    let (x, y) = (block.x(), block.y());
    let cm = DnaMetricSpace;
    let expected = distance_naive(x, y, &cm);
    let mut aligners: Vec<Box<dyn Aligner<Metric = DnaMetricSpace>>> = vec![
        Box::new(Naive { cm }),
        Box::new(NW::new(cm, false)),
        Box::new(NW::new(cm, true)),
        Box::new(Hirschberg::new(cm, Accumulator::Vec)),
        Box::new(Hirschberg::new(cm, Accumulator::Deque)),
    ];
    for aligner in &mut aligners {
        assert_eq!(aligner.cost(x, y), expected, "{aligner:?}");
        let (cost, align) = aligner.align(x, y);
        assert_eq!(cost, expected);
        if let Some(align) = align {
            assert_eq!(alignment_cost(&align, aligner.cost_model()), expected);
        }
    }
}
