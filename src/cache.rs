use crate::fingerprint::Fingerprint;

pub const INITIAL_CACHE_CAPACITY: usize = 32;

/// Fingerprints reported so far, kept sorted and free of duplicates.
///
/// Lookups are binary searches. Inserts shift the tail, and the backing
/// storage doubles when it is full.
#[derive(Clone, Debug)]
pub struct SeenCache {
    keys: Vec<Fingerprint>,
}

impl SeenCache {
    pub fn new() -> Self {
        Self {
            keys: Vec::with_capacity(INITIAL_CACHE_CAPACITY),
        }
    }

    pub fn contains(&self, key: Fingerprint) -> bool {
        self.keys.binary_search(&key).is_ok()
    }

    /// Records `key`, returning `true` if it was not seen before.
    pub fn insert(&mut self, key: Fingerprint) -> bool {
        match self.keys.binary_search(&key) {
            Ok(_) => false,
            Err(position) => {
                if self.keys.len() == self.keys.capacity() {
                    self.keys.reserve_exact(self.keys.capacity().max(1));
                }
                self.keys.insert(position, key);
                debug_assert!(self.keys.windows(2).all(|pair| pair[0] < pair[1]));
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.keys.capacity()
    }

    /// The recorded fingerprints in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Fingerprint> + '_ {
        self.keys.iter().copied()
    }
}

impl Default for SeenCache {
    fn default() -> Self {
        Self::new()
    }
}
