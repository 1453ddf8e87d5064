use rand::Rng;
use std::collections::HashMap;
use std::hash::Hash;

/// A set supporting constant-time insert, remove and uniform random choice.
#[derive(Debug, Clone)]
pub struct RandomSet<T>
where
    T: Eq + Hash + Copy,
{
    items: Vec<T>,
    positions: HashMap<T, usize>,
}

impl<T> Default for RandomSet<T>
where
    T: Eq + Hash + Copy,
{
    fn default() -> RandomSet<T> {
        RandomSet {
            items: Vec::new(),
            positions: HashMap::new(),
        }
    }
}

impl<T> RandomSet<T>
where
    T: Eq + Hash + Copy,
{
    pub fn insert(&mut self, value: T) -> bool {
        if self.positions.contains_key(&value) {
            return false;
        }
        self.positions.insert(value, self.items.len());
        self.items.push(value);
        true
    }

    pub fn remove(&mut self, value: &T) -> bool {
        let Some(index) = self.positions.remove(value) else {
            return false;
        };
        self.items.swap_remove(index);
        if let Some(moved) = self.items.get(index) {
            self.positions.insert(*moved, index);
        }
        true
    }

    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.positions.contains_key(value)
    }

    pub fn choose<R>(&self, rng: &mut R) -> Option<T>
    where
        R: Rng + ?Sized,
    {
        if self.items.is_empty() {
            return None;
        }
        Some(self.items[rng.gen_range(0..self.items.len())])
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.positions.clear();
    }
}

impl<T> FromIterator<T> for RandomSet<T>
where
    T: Eq + Hash + Copy,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = RandomSet::default();
        set.extend(iter);
        set
    }
}

impl<T> Extend<T> for RandomSet<T>
where
    T: Eq + Hash + Copy,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

/// Removes and returns a uniformly chosen element. Order of the remaining
/// elements is not preserved.
pub fn take_random<T, R>(values: &mut Vec<T>, rng: &mut R) -> Option<T>
where
    R: Rng + ?Sized,
{
    if values.is_empty() {
        return None;
    }
    let index = rng.gen_range(0..values.len());
    Some(values.swap_remove(index))
}
