use multiset::{Error, MultiSet};
use rand::Rng;
use std::collections::BTreeMap;

/// Exercise a full workflow through the public surface: seeding, mutation, algebra, predicates,
/// views and rendering against one running example.
#[test]
fn inventory_workflow() -> Result<(), Error> {
    let mut shelf: MultiSet<&str> = ["apple", "apple", "pear"].into_iter().collect();
    shelf.insert_n("plum", 3).remove_n(&"apple", 1);
    assert_eq!(shelf.multiplicity(&"apple"), 1);
    assert_eq!(shelf.len(), 3);

    let delivery: MultiSet<&str> = ["apple", "plum", "plum"].into_iter().collect();
    let stocked = shelf.sum(Some(&delivery))?;
    assert_eq!(stocked.multiplicity(&"apple"), 2);
    assert_eq!(stocked.multiplicity(&"plum"), 5);
    assert_eq!(stocked.multiplicity(&"pear"), 1);
    // operands were not consumed or modified
    assert_eq!(shelf.multiplicity(&"plum"), 3);
    assert_eq!(delivery.multiplicity(&"plum"), 2);

    assert!(stocked.is_superset_of(Some(["apple", "pear"]))?);
    assert!(stocked.overlaps(Some(["plum", "quince"]))?);
    assert!(!stocked.is_subset_of(Some(["apple", "plum"]))?);

    let mut map = stocked.to_map();
    map.clear();
    assert_eq!(stocked.len(), 3);

    let quantities = stocked.format("Q");
    assert_eq!(quantities.lines().count(), 3);
    assert!(quantities.lines().any(|line| line == "plum : 5"));
    assert_eq!(stocked.format("z"), "");

    Ok(())
}

/// The combining mutators agree with their pure counterparts where both exist, and chain.
#[test]
fn mutators_against_pure_operations() -> Result<(), Error> {
    let start: MultiSet<u32> = [1, 1, 2, 3].into_iter().collect();
    let other: MultiSet<u32> = [2, 2, 4].into_iter().collect();

    let pure = start.intersection(Some(&other))?;
    let mut mutated = start.clone();
    mutated.intersect_with(Some(other.iter().copied()))?;
    // the mutator keeps full multiplicities of surviving elements, the pure form takes the
    // minimum, so they agree exactly on which elements survive
    let mut surviving: Vec<_> = mutated.iter().copied().collect();
    surviving.sort_unstable();
    let mut expected: Vec<_> = pure.iter().copied().collect();
    expected.sort_unstable();
    assert_eq!(surviving, expected);

    let mut chained: MultiSet<u32> = [5, 5, 6].into_iter().collect();
    chained
        .union_with(Some([6, 7]))?
        .except_with(Some([5]))?
        .symmetric_except_with(Some([7, 8]))?;
    // 5 lost one occurrence, 6 untouched, 7 cancelled, 8 entered
    assert_eq!(chained.multiplicity(&5), 1);
    assert_eq!(chained.multiplicity(&6), 1);
    assert_eq!(chained.multiplicity(&7), 0);
    assert_eq!(chained.multiplicity(&8), 1);
    Ok(())
}

/// Random insert/remove traffic over a small element domain stays in agreement with a plain
/// count map used as the reference model.
#[test]
fn random_traffic_matches_reference_model() {
    let mut rng = rand::thread_rng();
    let mut set = MultiSet::new();
    let mut model: BTreeMap<u32, usize> = BTreeMap::new();

    for _ in 0..2000 {
        let item = rng.gen_range(0..8u32);
        match rng.gen_range(0..5) {
            0 => {
                set.insert(item);
                *model.entry(item).or_insert(0) += 1;
            }
            1 => {
                let count = rng.gen_range(0..4);
                set.insert_n(item, count);
                if count > 0 {
                    *model.entry(item).or_insert(0) += count;
                }
            }
            2 => {
                let existed = set.remove(&item);
                assert_eq!(existed, model.contains_key(&item));
                if let Some(count) = model.get_mut(&item) {
                    *count -= 1;
                    if *count == 0 {
                        model.remove(&item);
                    }
                }
            }
            3 => {
                let count = rng.gen_range(0..4);
                set.remove_n(&item, count);
                if count > 0 {
                    if let Some(held) = model.get_mut(&item) {
                        if *held <= count {
                            model.remove(&item);
                        } else {
                            *held -= count;
                        }
                    }
                }
            }
            _ => {
                set.remove_all(&item);
                model.remove(&item);
            }
        }

        assert_eq!(set.len(), model.len());
        for item in 0..8 {
            assert_eq!(
                set.multiplicity(&item),
                model.get(&item).copied().unwrap_or(0)
            );
        }
    }
}

/// Adding a multiset and subtracting it again restores the original multiplicities, and the
/// intersection never exceeds either operand.
#[test]
fn random_algebra_identities() {
    let mut rng = rand::thread_rng();

    for _ in 0..100 {
        let first = random_set(&mut rng);
        let second = random_set(&mut rng);

        assert_eq!(&(&first + &second) - &second, first);

        let common = &first * &second;
        for item in &common {
            assert!(common.multiplicity(item) <= first.multiplicity(item));
            assert!(common.multiplicity(item) <= second.multiplicity(item));
        }

        let total = &first + &second;
        for item in 0..6 {
            assert_eq!(
                total.multiplicity(&item),
                first.multiplicity(&item) + second.multiplicity(&item)
            );
        }
    }
}

fn random_set(rng: &mut impl Rng) -> MultiSet<u32> {
    let len = rng.gen_range(0..12);
    (0..len).map(|_| rng.gen_range(0..6u32)).collect()
}
