//! Random DNA instances: a uniform random sequence and a mutated copy of it.
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::dna::{Dna, DnaBlock};

/// Seed used by `setup`.
pub const DEFAULT_SEED: u64 = 31415;

enum Mutation {
    // Replace char at pos.
    Substitution(usize, Dna),
    // Insert char before pos.
    Insertion(usize, Dna),
    // Delete char at pos.
    Deletion(usize),
}

fn rand_base(rng: &mut impl Rng) -> Dna {
    Dna::BASES[rng.gen_range(0..Dna::BASES.len())]
}

fn random_mutation(len: usize, rng: &mut impl Rng) -> Mutation {
    // Substitution / insertion / deletion all with equal probability.
    // For length 0 sequences, only generate insertions.
    match if len == 0 { 1 } else { rng.gen_range(0..3usize) } {
        0 => Mutation::Substitution(rng.gen_range(0..len), rand_base(rng)),
        1 => Mutation::Insertion(rng.gen_range(0..len + 1), rand_base(rng)),
        _ => Mutation::Deletion(rng.gen_range(0..len)),
    }
}

/// A uniform random sequence of length `n` over `A C G T`.
pub fn random_sequence(n: usize, rng: &mut impl Rng) -> Vec<Dna> {
    (0..n).map(|_| rand_base(rng)).collect()
}

/// A copy of `seq` with `ceil(e * |seq|)` random edits applied one after the other.
///
/// A substitution may replace a base by itself, so the distance to `seq` can
/// be lower than the number of edits.
pub fn random_mutate(seq: &[Dna], e: f32, rng: &mut impl Rng) -> Vec<Dna> {
    let num_mutations = (e * seq.len() as f32).ceil() as usize;
    let mut b = seq.to_vec();
    for _ in 0..num_mutations {
        match random_mutation(b.len(), rng) {
            Mutation::Substitution(i, c) => b[i] = c,
            Mutation::Insertion(i, c) => b.insert(i, c),
            Mutation::Deletion(i) => {
                b.remove(i);
            }
        }
    }
    b
}

pub fn generate_pair(n: usize, e: f32, rng: &mut impl Rng) -> DnaBlock {
    let x = random_sequence(n, rng);
    let y = random_mutate(&x, e, rng);
    DnaBlock(x, y)
}

// For quick testing
pub fn setup_with_seed(n: usize, e: f32, seed: u64) -> DnaBlock {
    let ref mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_pair(n, e, rng)
}

pub fn setup(n: usize, e: f32) -> DnaBlock {
    setup_with_seed(n, e, DEFAULT_SEED)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn lengths() {
        for n in [0, 1, 10, 100] {
            let block = setup(n, 0.0);
            assert_eq!(block.x().len(), n);
            assert_eq!(block.x(), block.y());
        }
        // Each edit changes the length by at most one.
        let block = setup(100, 0.1);
        assert!((90..=110).contains(&block.y().len()));
        assert!(!block.x().contains(&Dna::Gap));
        assert!(!block.y().contains(&Dna::Gap));
    }

    #[test]
    fn empty_sequence_only_grows() {
        let ref mut rng = ChaCha8Rng::seed_from_u64(1);
        assert!(random_mutate(&[], 1.0, rng).is_empty());
        assert!(random_mutation(0, rng).is_insertion());
    }

    #[test]
    fn seeded() {
        assert_eq!(setup_with_seed(50, 0.2, 7), setup_with_seed(50, 0.2, 7));
        assert_ne!(setup_with_seed(50, 0.2, 7), setup_with_seed(50, 0.2, 8));
    }

    impl Mutation {
        fn is_insertion(&self) -> bool {
            matches!(self, Mutation::Insertion(..))
        }
    }
}
