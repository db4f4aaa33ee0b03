use std::{
    collections::HashMap,
    hash::{BuildHasherDefault, Hasher},
};

// ----------------------------------------------
// PreHashedKeyMap / IdentityHasher
// ----------------------------------------------

// Hasher for maps where the key is an integer that is already well
// distributed (a pointer value or a precomputed hash), so no further
// hashing is needed. Just returns the value as is.
#[derive(Default)]
pub struct IdentityHasher {
    hash: u64,
}

impl Hasher for IdentityHasher {
    fn write(&mut self, _: &[u8]) {
        panic!("Only write_u64/write_usize are supported!");
    }

    #[inline]
    fn write_u64(&mut self, h: u64) {
        self.hash = h;
    }

    #[inline]
    fn write_usize(&mut self, h: usize) {
        self.hash = h as u64;
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }
}

pub type PreHashedKeyMap<K, V> = HashMap<K, V, BuildHasherDefault<IdentityHasher>>;

// Creates a default initialized empty PreHashedKeyMap.
// This can be used in a `const` context, such as to initialize a static
// variable.
#[inline]
pub const fn new_const_hash_map<K, V>() -> PreHashedKeyMap<K, V> {
    PreHashedKeyMap::with_hasher(BuildHasherDefault::<IdentityHasher>::new())
}

// ----------------------------------------------
// Unit Tests
// ----------------------------------------------

#[test]
fn test_pre_hashed_key_map() {
    let mut map: PreHashedKeyMap<u64, &str> = new_const_hash_map();
    map.insert(0xABCD, "first");
    map.insert(0x1234, "second");

    assert_eq!(map.get(&0xABCD), Some(&"first"));
    assert_eq!(map.get(&0x1234), Some(&"second"));
    assert_eq!(map.len(), 2);
}
