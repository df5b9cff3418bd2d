use alloc::string::String;
use alloc::string::ToString;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt;
use core::fmt::Debug;
use core::fmt::Display;
use core::ptr::NonNull;

use crate::error::Fallibility;
use crate::error::TryReserveError;
use crate::fib_hash;
use crate::trace;

/// The default value type: an opaque, never-null, pointer-sized handle.
///
/// The table copies handles in and out and never dereferences, owns, or frees
/// whatever they point at.
pub type Handle = NonNull<()>;

/// Lower bound on the probe-distance cap, so that tiny tables do not rehash
/// on the first few collisions.
const MIN_MAX_DIST: u32 = 4;

/// `max(ceil(log2(size)), 4)` for a power-of-two `size`.
#[inline(always)]
fn max_dist_for_size(size: usize) -> u32 {
    size.trailing_zeros().max(MIN_MAX_DIST)
}

/// Smallest power of two holding `capacity` entries at a load factor of at
/// most 0.5.
#[inline]
fn target_size(capacity: usize) -> Option<usize> {
    capacity
        .max(1)
        .checked_mul(2)
        .and_then(usize::checked_next_power_of_two)
}

/// The shape of a slot array: how many home slots it has, the matching hash
/// shift, and how far an entry may be displaced from its home slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Geometry {
    size: usize,
    shift: u32,
    max_dist: u32,
}

impl Geometry {
    fn for_size(size: usize, fallibility: Fallibility) -> Result<Self, TryReserveError> {
        debug_assert!(size.is_power_of_two());
        // Home slots are addressed by a 32-bit hash.
        if u32::try_from(size - 1).is_err() {
            return Err(fallibility.capacity_overflow());
        }

        Ok(Self {
            size,
            shift: fib_hash::shift_for_size(size),
            max_dist: max_dist_for_size(size),
        })
    }

    /// `size` home slots, `max_dist - 1` overflow slots for entries displaced
    /// past the last home slot, and one trailing sentinel.
    #[inline(always)]
    fn slot_count(self) -> usize {
        self.size + self.max_dist as usize
    }

    #[inline(always)]
    fn home(self, key: u64) -> usize {
        fib_hash::hash(key, self.shift) as usize
    }
}

#[derive(Clone, Copy)]
struct Slot<V> {
    key: u64,
    value: Option<V>,
    dist: u32,
}

impl<V: Copy> Slot<V> {
    const EMPTY: Self = Slot {
        key: 0,
        value: None,
        dist: 0,
    };

    #[inline(always)]
    fn new(key: u64, value: V) -> Self {
        Slot {
            key,
            value: Some(value),
            dist: 0,
        }
    }

    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// The same entry, probing again from its home slot.
    #[inline(always)]
    fn rehomed(self) -> Self {
        Slot { dist: 0, ..self }
    }
}

fn alloc_slots<V: Copy>(
    geometry: Geometry,
    fallibility: Fallibility,
) -> Result<Vec<Slot<V>>, TryReserveError> {
    let count = geometry.slot_count();
    let layout =
        Layout::array::<Slot<V>>(count).map_err(|_| fallibility.capacity_overflow())?;

    let mut slots = Vec::new();
    if slots.try_reserve_exact(count).is_err() {
        return Err(fallibility.alloc_err(layout));
    }
    slots.resize(count, Slot::EMPTY);
    Ok(slots)
}

/// Robin Hood insertion of an entry whose key is known to be absent.
///
/// Walks forward from the carried entry's home slot. Whenever the resident
/// entry is closer to its own home than the carried entry is, the two trade
/// places and the evicted resident continues the walk. If the carried entry
/// would reach `max_dist`, it is handed back instead; everything else has
/// already been stored.
#[inline]
fn place<V: Copy>(
    slots: &mut [Slot<V>],
    geometry: Geometry,
    mut carried: Slot<V>,
) -> Result<(), Slot<V>> {
    debug_assert_eq!(carried.dist, 0);

    let mut index = geometry.home(carried.key);
    loop {
        let slot = &mut slots[index];
        if slot.is_empty() {
            *slot = carried;
            return Ok(());
        }

        if slot.dist < carried.dist {
            core::mem::swap(slot, &mut carried);
        }

        carried.dist += 1;
        if carried.dist == geometry.max_dist {
            return Err(carried);
        }
        index += 1;
    }
}

/// An open-addressing hash table from `u64` keys to copyable handles, using
/// Robin Hood hashing.
///
/// Keys are hashed with [Fibonacci hashing](crate::fib_hash) and collisions
/// are resolved by linear probing. Each entry records its distance from its
/// home slot; on insertion, an entry that has travelled further takes the
/// slot of one that has travelled less ("rob from the rich"), which keeps
/// probe lengths short and uniform.
///
/// The distance any entry may travel is capped at `max(log2(size), 4)`. An
/// insertion that would exceed the cap doubles the number of home slots and
/// rehashes every entry. Because of the cap, the slot array carries
/// `max_dist` slots past the last home slot so probes never wrap, the very
/// last of which stays empty and ends every probe loop.
///
/// Deletion uses backward shifting rather than tombstones: the entries after
/// a removed one are pulled one slot closer to home until an empty slot or an
/// entry already at its home slot is reached.
///
/// Values are `Copy`, so the table never runs destructors: it does not own
/// whatever a handle refers to.
///
/// ## Example
///
/// ```rust
/// use robin_hash::HashTable;
///
/// let mut table: HashTable<u32> = HashTable::new();
/// table.put(5, 50);
/// table.put(21, 210);
///
/// assert_eq!(table.get(5), Some(50));
/// assert_eq!(table.delete(5), Some(50));
/// assert_eq!(table.get(5), None);
/// assert_eq!(table.get(21), Some(210));
/// ```
#[derive(Clone)]
pub struct HashTable<V = Handle> {
    slots: Vec<Slot<V>>,
    geometry: Geometry,
    len: usize,
}

impl<V: Copy> Default for HashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Debug for HashTable<V>
where
    V: Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashTable")
            .field("len", &self.len)
            .field("size", &self.geometry.size)
            .field("max_dist", &self.geometry.max_dist)
            .field(
                "entries",
                &DebugEntries {
                    iter: self.iter(),
                },
            )
            .finish()
    }
}

struct DebugEntries<'a, V> {
    iter: Iter<'a, V>,
}

impl<V: Copy + Debug> Debug for DebugEntries<'_, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter.clone()).finish()
    }
}

/// Renders the live count, then every physical slot as `[key,value,dist]`
/// with `-` for the value of an empty slot.
///
/// Intended for diagnostics and tests; the format is not stable.
impl<V> Display for HashTable<V>
where
    V: Copy + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "count: {}", self.len)?;
        for slot in &self.slots {
            match slot.value {
                Some(value) => writeln!(f, "[{},{:?},{}]", slot.key, value, slot.dist)?,
                None => writeln!(f, "[{},-,{}]", slot.key, slot.dist)?,
            }
        }
        Ok(())
    }
}

impl<V: Copy> HashTable<V> {
    /// Creates an empty table with the smallest allocation.
    ///
    /// Equivalent to `HashTable::with_capacity(0)`, which yields two home
    /// slots.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a table that holds `capacity` entries at a load factor of at
    /// most one half.
    ///
    /// The number of home slots is the smallest power of two that is at
    /// least `2 * max(capacity, 1)`.
    ///
    /// # Panics
    ///
    /// Panics if the number of home slots would overflow, and aborts if the
    /// allocation fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hash::HashTable;
    /// #
    /// let table: HashTable<u32> = HashTable::with_capacity(100);
    /// assert_eq!(table.capacity(), 256);
    /// assert_eq!(table.max_dist(), 8);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        infallible(Self::with_capacity_inner(capacity, Fallibility::Infallible))
    }

    /// Fallible version of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        Self::with_capacity_inner(capacity, Fallibility::Fallible)
    }

    fn with_capacity_inner(
        capacity: usize,
        fallibility: Fallibility,
    ) -> Result<Self, TryReserveError> {
        let size = target_size(capacity).ok_or_else(|| fallibility.capacity_overflow())?;
        let geometry = Geometry::for_size(size, fallibility)?;
        let slots = alloc_slots(geometry, fallibility)?;

        Ok(Self {
            slots,
            geometry,
            len: 0,
        })
    }

    /// Returns the number of entries in the table.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of home slots, always a power of two.
    ///
    /// This is not a hard limit on the number of entries: the table grows
    /// when an insertion exceeds the probe-distance cap, which usually
    /// happens somewhere between half and fully loaded.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.geometry.size
    }

    /// Returns the cap on how far an entry may be stored from its home slot.
    ///
    /// Every stored entry is at most `max_dist() - 1` slots from home.
    #[inline]
    pub fn max_dist(&self) -> u32 {
        self.geometry.max_dist
    }

    /// Returns the length of the slot array, `capacity() + max_dist()`.
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Inserts a key-value pair, returning the previous value for `key`.
    ///
    /// If the insertion would leave an entry more than `max_dist() - 1` slots
    /// from its home slot, the table doubles its home slots and rehashes.
    ///
    /// # Panics
    ///
    /// Panics if the number of home slots would overflow, and aborts if the
    /// allocation fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hash::HashTable;
    /// #
    /// let mut table: HashTable<&str> = HashTable::new();
    /// assert_eq!(table.put(7, "a"), None);
    /// assert_eq!(table.put(7, "b"), Some("a"));
    /// assert_eq!(table.get(7), Some("b"));
    /// assert_eq!(table.len(), 1);
    /// ```
    #[inline]
    pub fn put(&mut self, key: u64, value: V) -> Option<V> {
        infallible(self.put_inner(key, value, Fallibility::Infallible))
    }

    /// Fallible version of [`put`](Self::put).
    ///
    /// On error the table is unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hash::HashTable;
    /// #
    /// let mut table: HashTable<u64> = HashTable::new();
    /// for key in 0..1000 {
    ///     table.try_put(key, key * 2)?;
    /// }
    /// assert_eq!(table.get(500), Some(1000));
    /// # Ok::<(), robin_hash::TryReserveError>(())
    /// ```
    pub fn try_put(&mut self, key: u64, value: V) -> Result<Option<V>, TryReserveError> {
        self.put_inner(key, value, Fallibility::Fallible)
    }

    fn put_inner(
        &mut self,
        key: u64,
        value: V,
        fallibility: Fallibility,
    ) -> Result<Option<V>, TryReserveError> {
        if let Some(index) = self.find_index(key) {
            return Ok(self.slots[index].value.replace(value));
        }

        self.insert_unique(Slot::new(key, value), fallibility)?;
        Ok(None)
    }

    fn insert_unique(
        &mut self,
        slot: Slot<V>,
        fallibility: Fallibility,
    ) -> Result<(), TryReserveError> {
        if let Fallibility::Fallible = fallibility {
            // Growth must happen before anything is displaced: a failed
            // allocation would otherwise strand the displaced entry.
            while self.probe_overflows(slot.key) {
                let size = self.doubled_size(fallibility)?;
                self.rehash(size, None, fallibility)?;
            }
        }

        match place(&mut self.slots, self.geometry, slot) {
            Ok(()) => {
                self.len += 1;
                Ok(())
            }
            Err(displaced) => {
                trace::trace!(
                    key = displaced.key,
                    size = self.geometry.size,
                    "probe distance cap reached, growing"
                );
                let size = self.doubled_size(fallibility)?;
                self.rehash(size, Some(displaced), fallibility)
            }
        }
    }

    /// Replays [`place`] for `key` without moving anything, reporting
    /// whether it would hit the probe-distance cap.
    fn probe_overflows(&self, key: u64) -> bool {
        let mut dist: u32 = 0;
        let mut index = self.geometry.home(key);
        loop {
            let slot = &self.slots[index];
            if slot.is_empty() {
                return false;
            }

            dist = dist.min(slot.dist) + 1;
            if dist == self.geometry.max_dist {
                return true;
            }
            index += 1;
        }
    }

    fn doubled_size(&self, fallibility: Fallibility) -> Result<usize, TryReserveError> {
        self.geometry
            .size
            .checked_mul(2)
            .ok_or_else(|| fallibility.capacity_overflow())
    }

    /// Rebuilds the slot array with `size` home slots from every live entry,
    /// in physical order, followed by `carried` if there is one.
    ///
    /// The new array is fully built before any field changes. If an entry
    /// hits the probe-distance cap while rebuilding, the attempt is thrown
    /// away and retried at twice the size.
    #[cold]
    fn rehash(
        &mut self,
        size: usize,
        carried: Option<Slot<V>>,
        fallibility: Fallibility,
    ) -> Result<(), TryReserveError> {
        let mut size = size;
        loop {
            let geometry = Geometry::for_size(size, fallibility)?;
            let mut slots = alloc_slots(geometry, fallibility)?;

            let mut len = 0;
            let mut overflowed = false;
            let live = self
                .slots
                .iter()
                .filter(|slot| !slot.is_empty())
                .copied()
                .chain(carried);
            for slot in live {
                if place(&mut slots, geometry, slot.rehomed()).is_err() {
                    overflowed = true;
                    break;
                }
                len += 1;
            }

            if !overflowed {
                trace::debug!(
                    old_size = self.geometry.size,
                    new_size = geometry.size,
                    max_dist = geometry.max_dist,
                    len,
                    "rehashed"
                );
                self.slots = slots;
                self.geometry = geometry;
                self.len = len;
                return Ok(());
            }

            trace::debug!(size, "probe distance cap reached during rehash, doubling again");
            size = size
                .checked_mul(2)
                .ok_or_else(|| fallibility.capacity_overflow())?;
        }
    }

    /// Returns the slot index holding `key`.
    ///
    /// The walk stops early at an empty slot, or at an entry closer to its
    /// home than `key` would be at that point: Robin Hood ordering means
    /// `key` cannot appear any further along.
    #[inline]
    fn find_index(&self, key: u64) -> Option<usize> {
        let mut dist = 0;
        let mut index = self.geometry.home(key);
        loop {
            let slot = &self.slots[index];
            if slot.is_empty() {
                return None;
            }
            if slot.key == key {
                return Some(index);
            }
            if dist > slot.dist {
                return None;
            }

            dist += 1;
            index += 1;
        }
    }

    /// Returns the value stored for `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hash::HashTable;
    /// #
    /// let mut table: HashTable<u32> = HashTable::new();
    /// table.put(1, 10);
    /// assert_eq!(table.get(1), Some(10));
    /// assert_eq!(table.get(2), None);
    /// ```
    #[inline]
    pub fn get(&self, key: u64) -> Option<V> {
        self.find_index(key).and_then(|index| self.slots[index].value)
    }

    /// Returns `true` if the table holds an entry for `key`.
    #[inline]
    pub fn contains_key(&self, key: u64) -> bool {
        self.find_index(key).is_some()
    }

    /// Removes the entry for `key`, returning its value.
    ///
    /// Removing an absent key does nothing and returns `None`. The table
    /// never shrinks.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hash::HashTable;
    /// #
    /// let mut table: HashTable<u32> = HashTable::new();
    /// table.put(3, 30);
    /// assert_eq!(table.delete(3), Some(30));
    /// assert_eq!(table.delete(3), None);
    /// assert!(table.is_empty());
    /// ```
    pub fn delete(&mut self, key: u64) -> Option<V> {
        let index = self.find_index(key)?;
        let removed = self.slots[index].value;

        // Pull the rest of the chain back one slot. Empty slots and the
        // trailing sentinel have distance 0, so this always terminates in
        // bounds.
        let mut hole = index;
        loop {
            let next = self.slots[hole + 1];
            if next.dist == 0 {
                self.slots[hole] = Slot::EMPTY;
                break;
            }
            self.slots[hole] = Slot {
                dist: next.dist - 1,
                ..next
            };
            hole += 1;
        }

        self.len -= 1;
        removed
    }

    /// Removes every entry, keeping the allocation.
    pub fn clear(&mut self) {
        self.slots.fill(Slot::EMPTY);
        self.len = 0;
    }

    /// Grows the table so that it holds `len() + additional` entries at a
    /// load factor of at most one half. Never shrinks.
    ///
    /// # Panics
    ///
    /// Panics if the number of home slots would overflow, and aborts if the
    /// allocation fails.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hash::HashTable;
    /// #
    /// let mut table: HashTable<u32> = HashTable::new();
    /// table.put(1, 1);
    /// table.reserve(100);
    /// assert_eq!(table.capacity(), 256);
    /// assert_eq!(table.get(1), Some(1));
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        infallible(self.reserve_inner(additional, Fallibility::Infallible))
    }

    /// Fallible version of [`reserve`](Self::reserve).
    ///
    /// On error the table is unchanged.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.reserve_inner(additional, Fallibility::Fallible)
    }

    fn reserve_inner(
        &mut self,
        additional: usize,
        fallibility: Fallibility,
    ) -> Result<(), TryReserveError> {
        let size = self
            .len
            .checked_add(additional)
            .and_then(target_size)
            .ok_or_else(|| fallibility.capacity_overflow())?;
        if size > self.geometry.size {
            self.rehash(size, None, fallibility)?;
        }
        Ok(())
    }

    /// Returns an iterator over `(key, value)` pairs in slot order.
    ///
    /// The order has no relation to insertion order and changes on rehash.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hash::HashTable;
    /// #
    /// let table: HashTable<u32> = [(1, 10), (2, 20), (3, 30)].into_iter().collect();
    ///
    /// let mut pairs: Vec<(u64, u32)> = table.iter().collect();
    /// pairs.sort();
    /// assert_eq!(pairs, [(1, 10), (2, 20), (3, 30)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
            remaining: self.len,
        }
    }

    /// Renders the table as its [`Display`] form: the live count, then one
    /// `[key,value,dist]` line per physical slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use robin_hash::HashTable;
    /// #
    /// let table: HashTable<u32> = HashTable::new();
    /// assert_eq!(
    ///     table.debug_string(),
    ///     "count: 0\n[0,-,0]\n[0,-,0]\n[0,-,0]\n[0,-,0]\n[0,-,0]\n[0,-,0]\n"
    /// );
    /// ```
    pub fn debug_string(&self) -> String
    where
        V: Debug,
    {
        self.to_string()
    }

    /// Returns the largest distance any entry is stored from its home slot.
    #[cfg(any(test, feature = "stats"))]
    pub fn max_probe_distance(&self) -> u32 {
        self.slots
            .iter()
            .filter(|slot| !slot.is_empty())
            .map(|slot| slot.dist)
            .max()
            .unwrap_or(0)
    }

    /// Returns the mean distance entries are stored from their home slots.
    #[cfg(any(test, feature = "stats"))]
    pub fn avg_probe_distance(&self) -> f64 {
        if self.len == 0 {
            return 0.0;
        }

        let total: u64 = self
            .slots
            .iter()
            .filter(|slot| !slot.is_empty())
            .map(|slot| u64::from(slot.dist))
            .sum();
        total as f64 / self.len as f64
    }

    /// Counts entries by their distance from home.
    ///
    /// The histogram has `max_dist()` bins; bin `d` holds the number of
    /// entries stored `d` slots from their home slot.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> ProbeHistogram {
        let mut counts = alloc::vec![0usize; self.geometry.max_dist as usize];
        for slot in self.slots.iter().filter(|slot| !slot.is_empty()) {
            counts[slot.dist as usize] += 1;
        }

        ProbeHistogram {
            counts,
            populated: self.len,
        }
    }

    /// Returns occupancy and memory statistics for the table.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let total_slots = self.slots.len();
        let slot_bytes = core::mem::size_of::<Slot<V>>();

        DebugStats {
            populated: self.len,
            capacity: self.geometry.size,
            max_dist: self.geometry.max_dist,
            total_slots,
            load_factor: self.len as f64 / self.geometry.size as f64,
            slot_utilization: self.len as f64 / total_slots as f64,
            max_probe_distance: self.max_probe_distance(),
            avg_probe_distance: self.avg_probe_distance(),
            total_bytes: total_slots * slot_bytes,
            wasted_bytes: (total_slots - self.len) * slot_bytes,
        }
    }
}

/// Resolves the result of an operation run with [`Fallibility::Infallible`],
/// which diverges instead of returning an error.
#[inline(always)]
fn infallible<T>(result: Result<T, TryReserveError>) -> T {
    match result {
        Ok(value) => value,
        Err(_) => unreachable!("infallible growth returned an error"),
    }
}

impl<V: Copy> Extend<(u64, V)> for HashTable<V> {
    fn extend<I: IntoIterator<Item = (u64, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<V: Copy> FromIterator<(u64, V)> for HashTable<V> {
    fn from_iter<I: IntoIterator<Item = (u64, V)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut table = Self::with_capacity(iter.size_hint().0);
        table.extend(iter);
        table
    }
}

impl<'a, V: Copy> IntoIterator for &'a HashTable<V> {
    type Item = (u64, V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`HashTable`] in slot order.
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
#[derive(Clone)]
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Slot<V>>,
    remaining: usize,
}

impl<V: Copy> Iterator for Iter<'_, V> {
    type Item = (u64, V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        for slot in self.slots.by_ref() {
            if let Some(value) = slot.value {
                self.remaining -= 1;
                return Some((slot.key, value));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V: Copy> ExactSizeIterator for Iter<'_, V> {}

/// Entry counts per probe distance, from [`HashTable::probe_histogram`].
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeHistogram {
    counts: Vec<usize>,
    populated: usize,
}

#[cfg(any(test, feature = "stats"))]
impl ProbeHistogram {
    /// The count for each distance, starting at distance 0.
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of entries counted.
    pub fn populated(&self) -> usize {
        self.populated
    }

    /// Pretty-prints the histogram as a horizontal bar chart on stdout.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        let max = self.counts.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        let total_units = max_bar * 8;
        println!("probe histogram ({} entries):", self.populated);

        let make_bar = |count: usize| -> String {
            if count == 0 {
                return String::new();
            }
            let units = ((count as u128 * total_units as u128).div_ceil(max as u128)) as usize;
            let mut bar = "█".repeat(units / 8);
            let partial = match units % 8 {
                0 => None,
                1 => Some('▏'),
                2 => Some('▎'),
                3 => Some('▍'),
                4 => Some('▌'),
                5 => Some('▋'),
                6 => Some('▊'),
                _ => Some('▉'),
            };
            bar.extend(partial);
            bar
        };

        for (dist, &count) in self.counts.iter().enumerate() {
            println!("{dist:>2} | {} ({count})", make_bar(count));
        }
    }
}

/// Occupancy and memory statistics, from [`HashTable::debug_stats`].
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of entries in the table
    pub populated: usize,
    /// Number of home slots
    pub capacity: usize,
    /// Probe-distance cap
    pub max_dist: u32,
    /// Length of the slot array, including overflow slots and the sentinel
    pub total_slots: usize,
    /// populated / capacity
    pub load_factor: f64,
    /// populated / total_slots
    pub slot_utilization: f64,
    /// Largest stored distance from home
    pub max_probe_distance: u32,
    /// Mean stored distance from home
    pub avg_probe_distance: f64,
    /// Bytes used by the slot array
    pub total_bytes: usize,
    /// Bytes held by empty slots
    pub wasted_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Robin Hood Table Statistics ===");
        println!(
            "Population: {}/{} home slots ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!(
            "Slot Usage: {}/{} ({:.2}% utilization)",
            self.populated,
            self.total_slots,
            self.slot_utilization * 100.0
        );
        println!(
            "Probe Distance: max {} of {} allowed, avg {:.2}",
            self.max_probe_distance,
            self.max_dist - 1,
            self.avg_probe_distance
        );
        println!("Total Allocated: {} bytes", self.total_bytes);
        println!(
            "Memory: {} bytes wasted ({:.02}%)",
            self.wasted_bytes,
            if self.total_bytes == 0 {
                0.0
            } else {
                (self.wasted_bytes as f64 / self.total_bytes as f64) * 100.0
            }
        );
    }
}
