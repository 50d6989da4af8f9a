//! The non-neighboring connection registry.

use itertools::Itertools;

use crate::Error;

/// A single connection between two grid cells that are not geometric
/// neighbors.
///
/// `cell1` and `cell2` keep the orientation they were given on input;
/// ordering and edit matching treat the pair as unordered. Records carry no
/// identity beyond the triple, so duplicates of the same pair are distinct
/// entries.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NncData {
    /// Linearized index of the first cell.
    pub cell1: usize,
    /// Linearized index of the second cell.
    pub cell2: usize,
    /// Transmissibility of the connection, in internal units.
    pub trans: f64,
}

impl NncData {
    pub fn new(cell1: usize, cell2: usize, trans: f64) -> Self {
        Self {
            cell1,
            cell2,
            trans,
        }
    }

    /// Orientation-independent key used for ordering and edit matching.
    pub(crate) fn pair(&self) -> (usize, usize) {
        (self.cell1.min(self.cell2), self.cell1.max(self.cell2))
    }
}

/// An ordered list of [`NncData`] records.
///
/// Bulk loading sorts records by their unordered cell pair; later appends via
/// [`Nnc::add_nnc`] land at the end, unsorted, until [`Nnc::sort`] is called.
/// The registry is a plain owned value: clone it to hand a read-only snapshot
/// to a concurrent assembly phase.
#[derive(Debug, Clone, Default)]
pub struct Nnc {
    pub(crate) data: Vec<NncData>,
}

impl Nnc {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bulk-loads parsed connection records.
    ///
    /// Records are ordered lexicographically by their unordered cell pair.
    /// The sort is stable: records sharing a pair keep their relative input
    /// order and end up adjacent. Nothing is deduplicated.
    pub fn from_records(records: impl IntoIterator<Item = NncData>) -> Self {
        let data: Vec<NncData> = records
            .into_iter()
            .sorted_by_key(|nnc| nnc.pair())
            .collect();
        log::debug!("Loaded {} non-neighboring connections", data.len());
        Self { data }
    }

    /// Returns `true` if any connections are registered.
    pub fn has_nnc(&self) -> bool {
        !self.data.is_empty()
    }

    /// Number of registered connections.
    pub fn num_nnc(&self) -> usize {
        self.data.len()
    }

    /// The connection records in their current order.
    pub fn nncdata(&self) -> &[NncData] {
        &self.data
    }

    /// Checked positional read.
    pub fn get(&self, index: usize) -> Result<&NncData, Error> {
        self.data.get(index).ok_or_else(|| Error::IndexOutOfRange {
            index,
            len: self.data.len(),
        })
    }

    /// Appends a connection exactly as given.
    ///
    /// No deduplication and no re-sort; cell indices are not validated
    /// against any grid bound. Callers that need the pair ordering restored
    /// afterwards call [`Nnc::sort`].
    pub fn add_nnc(&mut self, cell1: usize, cell2: usize, trans: f64) {
        self.data.push(NncData::new(cell1, cell2, trans));
    }

    /// Re-establishes the unordered-pair ordering after appends.
    ///
    /// Stable, like the bulk load.
    pub fn sort(&mut self) {
        self.data.sort_by_key(|nnc| nnc.pair());
    }
}

impl<'a> IntoIterator for &'a Nnc {
    type Item = &'a NncData;
    type IntoIter = std::slice::Iter<'a, NncData>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_is_orientation_independent() {
        assert_eq!(NncData::new(7, 3, 1.0).pair(), (3, 7));
        assert_eq!(NncData::new(3, 7, 1.0).pair(), (3, 7));
        assert_eq!(NncData::new(5, 5, 1.0).pair(), (5, 5));
    }

    #[test]
    fn load_sort_is_stable_for_equal_pairs() {
        let nnc = Nnc::from_records([
            NncData::new(1, 0, 0.25),
            NncData::new(0, 1, 0.5),
            NncData::new(1, 0, 0.75),
        ]);
        // All three share the pair (0, 1); input order survives.
        let trans: Vec<f64> = nnc.into_iter().map(|n| n.trans).collect();
        assert_eq!(trans, vec![0.25, 0.5, 0.75]);
    }

    #[test]
    fn get_past_end_is_an_error() {
        let nnc = Nnc::from_records([NncData::new(0, 1, 0.5)]);
        assert!(nnc.get(0).is_ok());
        assert_eq!(
            nnc.get(1),
            Err(Error::IndexOutOfRange { index: 1, len: 1 })
        );
    }
}
