//! Running best value with every tied holder.

/// Which end of the scale wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Highest,
    Lowest,
}

/// Tracks the best value seen so far and everyone tied at it.
///
/// A better value replaces the holder list; an equal value appends unless the
/// same key is already present. Under [`Direction::Highest`] zero never
/// qualifies, so an empty season or roster yields no holders.
pub(crate) struct Leader<K, H> {
    direction: Direction,
    best: Option<u32>,
    holders: Vec<(K, H)>,
}

impl<K: PartialEq, H> Leader<K, H> {
    pub(crate) fn highest() -> Self {
        Self::new(Direction::Highest)
    }

    pub(crate) fn lowest() -> Self {
        Self::new(Direction::Lowest)
    }

    fn new(direction: Direction) -> Self {
        Self {
            direction,
            best: None,
            holders: Vec::new(),
        }
    }

    /// Offers a candidate. `holder` is only built when the candidate is kept.
    pub(crate) fn offer(&mut self, value: u32, key: K, holder: impl FnOnce() -> H) {
        if self.direction == Direction::Highest && value == 0 {
            return;
        }

        let improves = match (self.best, self.direction) {
            (None, _) => true,
            (Some(best), Direction::Highest) => value > best,
            (Some(best), Direction::Lowest) => value < best,
        };

        if improves {
            self.best = Some(value);
            self.holders.clear();
            self.holders.push((key, holder()));
        } else if self.best == Some(value) && !self.holders.iter().any(|(k, _)| *k == key) {
            self.holders.push((key, holder()));
        }
    }

    pub(crate) fn best(&self) -> Option<u32> {
        self.best
    }

    pub(crate) fn into_holders(self) -> Vec<H> {
        self.holders.into_iter().map(|(_, h)| h).collect()
    }
}
