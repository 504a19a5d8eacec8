use std::collections::BTreeMap;

use corpus_compile::processing::{pair_sentences, Pairing};
use corpus_compile::progress::NoProgress;
use corpus_compile::sentence::{Sentence, Source};
use rand::seq::SliceRandom;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Generate a shuffled set of sentences, along with the number of (old, modern) sentences per id.
fn random_sentences(rng: &mut StdRng) -> (Vec<Sentence>, BTreeMap<i64, (usize, usize)>) {
    let mut sentences = Vec::new();
    let mut counts = BTreeMap::new();

    for id in 0..rng.gen_range(1..30) {
        let nb_old = rng.gen_range(0..4);
        let nb_modern = rng.gen_range(0..4);
        for n in 0..nb_old {
            sentences.push(Sentence::new(id, Source::Old, format!("old {} {}", id, n)));
        }
        for n in 0..nb_modern {
            let source = if rng.gen_bool(0.5) {
                Source::Modern
            } else {
                Source::ModernAlt
            };
            sentences.push(Sentence::new(id, source, format!("modern {} {}", id, n)));
        }
        counts.insert(id, (nb_old, nb_modern));
    }

    sentences.shuffle(rng);
    (sentences, counts)
}

fn id_of(pairing: &Pairing) -> i64 {
    pairing.old.split(' ').nth(1).unwrap().parse().unwrap()
}

#[test]
fn group_yields_old_times_modern() {
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..50 {
        let (sentences, counts) = random_sentences(&mut rng);
        let pairings = pair_sentences(sentences, &mut NoProgress);

        let expected_total: usize = counts.values().map(|(m, n)| m * n).sum();
        assert_eq!(pairings.len(), expected_total);

        for (id, (m, n)) in counts {
            let nb = pairings.iter().filter(|p| id_of(p) == id).count();
            assert_eq!(nb, m * n, "id {}", id);
        }
    }
}

#[test]
fn ordered_by_ascending_id() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..50 {
        let (sentences, _) = random_sentences(&mut rng);
        let pairings = pair_sentences(sentences, &mut NoProgress);
        let ids: Vec<i64> = pairings.iter().map(id_of).collect();
        assert!(ids.windows(2).all(|w| w[0] <= w[1]));
    }
}

#[test]
fn relative_order_is_kept() {
    let mut rng = StdRng::seed_from_u64(1337);
    for _ in 0..50 {
        let (sentences, _) = random_sentences(&mut rng);

        // expected pairings, computed from corpus order
        let mut by_id: BTreeMap<i64, (Vec<String>, Vec<String>)> = BTreeMap::new();
        for s in &sentences {
            let entry = by_id.entry(s.id()).or_default();
            if s.is_modern() {
                entry.1.push(s.contents().to_string());
            } else {
                entry.0.push(s.contents().to_string());
            }
        }
        let mut expected = Vec::new();
        for (old, modern) in by_id.values() {
            for o in old {
                for m in modern {
                    expected.push(Pairing::new(o.clone(), m.clone()));
                }
            }
        }

        assert_eq!(pair_sentences(sentences, &mut NoProgress), expected);
    }
}
