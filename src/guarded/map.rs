use super::Guarded;
use core::borrow::Borrow;
use core::fmt;
use core::hash::Hash;
use std::collections::HashMap;

/// A hash map that can be shared and mutated from any thread.
///
/// Every operation takes the map's single reader/writer lock for its duration:
/// lookups and snapshots share it, inserts and removals hold it exclusively.
/// There is no resizing, eviction or ordering policy beyond that of
/// [`HashMap`].
///
/// Reads return clones, so a value handed out by [`get`](Self::get) or
/// [`values`](Self::values) is a snapshot and does not track later writes.
pub struct AtomicMap<K, V> {
    inner: Guarded<HashMap<K, V>>,
}

impl<K, V> AtomicMap<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            inner: Guarded::new(HashMap::new()),
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.inner.read(HashMap::len)
    }

    /// Returns `true` if the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.read(HashMap::is_empty)
    }

    /// Consumes the wrapper, returning the underlying map.
    pub fn into_inner(self) -> HashMap<K, V> {
        self.inner.into_inner()
    }
}

impl<K: Eq + Hash, V> AtomicMap<K, V> {
    /// Inserts or overwrites the entry for `key`.
    ///
    /// A displaced value is dropped after the lock is released.
    pub fn set(&self, key: K, value: V) {
        drop(self.inner.write(|map| map.insert(key, value)));
    }

    /// Removes the entry for `key`. Does nothing if it is absent.
    pub fn del<Q>(&self, key: &Q)
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        drop(self.inner.write(|map| map.remove(key)));
    }

    /// Returns `true` if an entry exists for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read(|map| map.contains_key(key))
    }
}

impl<K: Eq + Hash, V: Clone> AtomicMap<K, V> {
    /// Returns a copy of the value for `key`, or `None` if it is absent.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.inner.read(|map| map.get(key).cloned())
    }
}

impl<K, V: Clone> AtomicMap<K, V> {
    /// Returns a snapshot of every value, in no particular order.
    pub fn values(&self) -> Vec<V> {
        self.inner.read(|map| map.values().cloned().collect())
    }
}

impl<K: Clone, V> AtomicMap<K, V> {
    /// Returns a snapshot of every key, in no particular order.
    pub fn keys(&self) -> Vec<K> {
        self.inner.read(|map| map.keys().cloned().collect())
    }
}

impl<K, V> Default for AtomicMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Eq + Hash, V> FromIterator<(K, V)> for AtomicMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            inner: Guarded::new(iter.into_iter().collect()),
        }
    }
}

impl<K, V> fmt::Debug for AtomicMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicMap").field("len", &self.len()).finish()
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::AtomicMap;

    #[test]
    fn borrowed_key_lookups() {
        let m: AtomicMap<String, u32> = AtomicMap::new();
        m.set("alpha".to_string(), 1);
        assert_eq!(m.get("alpha"), Some(1));
        assert!(m.contains_key("alpha"));
        m.del("alpha");
        assert!(m.is_empty());
    }

    #[test]
    fn overwrite_keeps_len() {
        let m = AtomicMap::new();
        m.set(1, "a");
        m.set(1, "b");
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(&1), Some("b"));
    }

    #[test]
    fn collect_from_pairs() {
        let m: AtomicMap<_, _> = [(1, 'x'), (2, 'y')].into_iter().collect();
        let mut keys = m.keys();
        keys.sort_unstable();
        assert_eq!(keys, vec![1, 2]);
        assert_eq!(format!("{m:?}"), "AtomicMap { len: 2 }");
    }
}
