//! Free-list / allocated-list bookkeeping for a toy heap.
//!
//! Run with: `cargo run --example free_list`

use std::fmt;

use nexus_blocklist::BlockList;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct MemoryBlock {
    base_address: usize,
    length: usize,
}

impl fmt::Display for MemoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} , {})", self.base_address, self.length)
    }
}

struct Heap {
    free: BlockList<MemoryBlock>,
    allocated: BlockList<MemoryBlock>,
}

impl Heap {
    fn new(size: usize) -> Self {
        let mut free = BlockList::new();
        free.add_last(MemoryBlock {
            base_address: 0,
            length: size,
        });
        Self {
            free,
            allocated: BlockList::new(),
        }
    }

    /// First free block large enough wins.
    fn malloc(&mut self, length: usize) -> Option<usize> {
        let index = self.free.iter().position(|b| b.length >= length)?;
        let block = self.free.remove_at(index).ok()?;

        if block.length > length {
            let rest = MemoryBlock {
                base_address: block.base_address + length,
                length: block.length - length,
            };
            self.free.add(index, rest).ok()?;
        }

        self.allocated.add_last(MemoryBlock {
            base_address: block.base_address,
            length,
        });
        Some(block.base_address)
    }

    fn release(&mut self, address: usize) -> bool {
        let Some(index) = self
            .allocated
            .iter()
            .position(|b| b.base_address == address)
        else {
            return false;
        };
        match self.allocated.remove_at(index) {
            Ok(block) => {
                self.free.add_last(block);
                true
            }
            Err(_) => false,
        }
    }
}

fn main() {
    let mut heap = Heap::new(100);

    let a = heap.malloc(20).unwrap();
    let b = heap.malloc(30).unwrap();
    let _c = heap.malloc(10).unwrap();

    println!("free:      {}", heap.free);
    println!("allocated: {}", heap.allocated);

    assert!(heap.release(a));
    assert!(heap.release(b));
    assert!(!heap.release(b), "double release must fail");

    println!("after freeing {} and {}:", a, b);
    println!("free:      {}", heap.free);
    println!("allocated: {}", heap.allocated);
}
