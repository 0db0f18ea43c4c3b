use std::fmt;

use nexus_blocklist::{BlockList, BlockListError};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MemoryBlock {
    base_address: usize,
    length: usize,
}

impl MemoryBlock {
    fn new(base_address: usize, length: usize) -> Self {
        Self {
            base_address,
            length,
        }
    }
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.base_address, self.length)
    }
}

fn contents(list: &BlockList<MemoryBlock>) -> Vec<MemoryBlock> {
    list.iter().copied().collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn insert_and_remove_walkthrough() {
    let a = MemoryBlock::new(0, 10);
    let b = MemoryBlock::new(10, 20);
    let c = MemoryBlock::new(30, 5);

    let mut list = BlockList::new();

    list.add_first(a);
    assert_eq!(list.len(), 1);
    assert_eq!(list.block_at(0), Ok(&a));

    list.add_last(b);
    assert_eq!(list.len(), 2);
    assert_eq!(list.block_at(1), Ok(&b));

    list.add(1, c).unwrap();
    assert_eq!(contents(&list), vec![a, c, b]);

    list.remove_block(&c).unwrap();
    assert_eq!(contents(&list), vec![a, b]);
    assert_eq!(list.len(), 2);

    list.remove_at(0).unwrap();
    assert_eq!(contents(&list), vec![b]);
    assert_eq!(list.len(), 1);
}

#[test]
fn index_equal_to_len_is_rejected_for_reads() {
    let mut list = BlockList::new();
    list.add_last(MemoryBlock::new(0, 1));
    list.add_last(MemoryBlock::new(1, 1));

    let err = BlockListError::InvalidIndex { index: 2, len: 2 };
    assert_eq!(list.node_at(2), Err(err));
    assert_eq!(list.block_at(2), Err(err));
    assert_eq!(list.remove_at(2), Err(err));

    // add accepts the same index as an append
    assert!(list.add(2, MemoryBlock::new(2, 1)).is_ok());
    assert_eq!(list.len(), 3);
}

#[test]
fn rendering_lists_blocks_with_trailing_space() {
    let list: BlockList<MemoryBlock> = [MemoryBlock::new(0, 4), MemoryBlock::new(4, 8)]
        .into_iter()
        .collect();
    assert_eq!(list.to_string(), "(0 , 4) (4 , 8) ");
}

#[test]
fn free_list_bookkeeping() {
    // Carve blocks off the front of a free list into an allocated list.
    let mut free: BlockList<MemoryBlock> =
        (0..4).map(|i| MemoryBlock::new(i * 100, 100)).collect();
    let mut allocated = BlockList::new();

    while let Some(key) = free.first() {
        let block = free.remove(key).unwrap();
        allocated.add_last(block);
    }

    assert!(free.is_empty());
    assert_eq!(allocated.len(), 4);
    assert_eq!(allocated.index_of(&MemoryBlock::new(300, 100)), Some(3));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn add_places_block_at_index() {
    for len in 0..6 {
        for index in 0..=len {
            let mut list: BlockList<usize> = (0..len).collect();
            list.add(index, 99).unwrap();

            assert_eq!(list.len(), len + 1);
            assert_eq!(list.block_at(index), Ok(&99));
        }
    }
}

#[test]
fn add_first_and_add_last_land_at_ends() {
    let mut list: BlockList<usize> = (0..3).collect();

    list.add_first(100);
    assert_eq!(list.block_at(0), Ok(&100));

    list.add_last(200);
    assert_eq!(list.block_at(list.len() - 1), Ok(&200));
}

#[test]
fn index_of_never_exceeds_position() {
    let list: BlockList<usize> = [3, 1, 3, 2, 1, 3].into_iter().collect();
    for i in 0..list.len() {
        let block = list.block_at(i).unwrap();
        assert!(list.index_of(block).unwrap() <= i);
    }
    assert_eq!(list.index_of(&42), None);
}

#[test]
fn remove_at_closes_gap() {
    for len in 1..6 {
        for index in 0..len {
            let mut list: BlockList<usize> = (0..len).collect();
            list.remove_at(index).unwrap();

            assert_eq!(list.len(), len - 1);
            if index + 1 < len {
                assert_eq!(list.block_at(index), Ok(&(index + 1)));
            }
        }
    }
}

#[test]
fn remove_block_missing() {
    let mut list: BlockList<usize> = (0..3).collect();
    assert_eq!(list.remove_block(&7), Err(BlockListError::ElementNotFound));
    assert_eq!(list.len(), 3);
}

#[test]
fn add_last_preserves_order() {
    let blocks: Vec<_> = (0..32).map(|i| MemoryBlock::new(i * 16, 16)).collect();
    let mut list = BlockList::new();
    for block in &blocks {
        list.add_last(*block);
    }

    for (i, block) in blocks.iter().enumerate() {
        assert_eq!(list.block_at(i), Ok(block));
    }
}

#[test]
fn foreign_key_past_end_is_noop() {
    let mut small: BlockList<usize> = (0..2).collect();
    let mut big: BlockList<usize> = (0..10).collect();
    let far = big.node_at(9).unwrap();

    assert_eq!(small.remove(far), None);
    assert_eq!(small.len(), 2);
    assert_eq!(big.remove(far), Some(9));
}

#[test]
fn keys_do_not_cross_between_lists() {
    let mut free: BlockList<usize> = (100..103).collect();
    let mut allocated: BlockList<usize> = (200..203).collect();

    let from_allocated = allocated.node_at(1).unwrap();
    let from_free = free.node_at(1).unwrap();

    assert_eq!(free.remove(from_allocated), None);
    assert_eq!(allocated.remove(from_free), None);
    assert!(free.iter().copied().eq(100..103));
    assert!(allocated.iter().copied().eq(200..203));

    assert_eq!(free.remove(from_free), Some(101));
    assert_eq!(allocated.remove(from_allocated), Some(201));
}

// =============================================================================
// Randomized model check against Vec
// =============================================================================

#[test]
fn random_ops_match_vec_model() {
    let mut rng = SmallRng::seed_from_u64(0xB10C);
    let mut list: BlockList<u32> = BlockList::new();
    let mut model: Vec<u32> = Vec::new();

    for step in 0..5_000u32 {
        match rng.random_range(0..6) {
            0 => {
                list.add_first(step);
                model.insert(0, step);
            }
            1 => {
                list.add_last(step);
                model.push(step);
            }
            2 => {
                let index = rng.random_range(0..=model.len() + 1);
                let result = list.add(index, step);
                if index <= model.len() {
                    assert!(result.is_ok());
                    model.insert(index, step);
                } else {
                    assert!(result.is_err());
                }
            }
            3 => {
                let index = rng.random_range(0..=model.len());
                let result = list.remove_at(index);
                if index < model.len() {
                    assert_eq!(result, Ok(model.remove(index)));
                } else {
                    assert!(result.is_err());
                }
            }
            4 => {
                if model.is_empty() {
                    continue;
                }
                let target = model[rng.random_range(0..model.len())];
                let pos = model.iter().position(|&b| b == target).unwrap();
                assert_eq!(list.index_of(&target), Some(pos));
                assert_eq!(list.remove_block(&target), Ok(target));
                model.remove(pos);
            }
            _ => {
                if model.is_empty() {
                    assert!(list.first().is_none());
                    continue;
                }
                let index = rng.random_range(0..model.len());
                let key = list.node_at(index).unwrap();
                assert_eq!(list.remove(key), Some(model.remove(index)));
            }
        }

        assert_eq!(list.len(), model.len());
        if step % 97 == 0 {
            assert!(list.iter().eq(model.iter()));
        }
    }

    assert!(list.iter().eq(model.iter()));
}
