use super::trip::TripRecord;
use crate::errors::{DatasetError, WayfindResult};

/// Trip records paired 1:1 with integer weights, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedDataset {
    records: Vec<TripRecord>,
    weights: Vec<u64>,
}

impl WeightedDataset {
    /// Pair records with weights. Fails if the lengths differ.
    pub fn new(records: Vec<TripRecord>, weights: Vec<u64>) -> WayfindResult<Self> {
        if records.len() != weights.len() {
            return Err(DatasetError::WeightCountMismatch {
                records: records.len(),
                weights: weights.len(),
            }
            .into());
        }
        Ok(Self { records, weights })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[TripRecord] {
        &self.records
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    /// Borrow the oldest `len` records with their weights.
    pub fn window(&self, len: usize) -> WayfindResult<WeightedWindow<'_>> {
        if len > self.records.len() {
            return Err(DatasetError::WindowOutOfRange {
                requested: len,
                available: self.records.len(),
            }
            .into());
        }
        Ok(WeightedWindow {
            records: &self.records[..len],
            weights: &self.weights[..len],
        })
    }

    /// Borrow every record.
    pub fn full(&self) -> WeightedWindow<'_> {
        WeightedWindow {
            records: &self.records,
            weights: &self.weights,
        }
    }
}

/// A read-only prefix of a [`WeightedDataset`]. Lengths always agree.
#[derive(Debug, Clone, Copy)]
pub struct WeightedWindow<'a> {
    records: &'a [TripRecord],
    weights: &'a [u64],
}

impl<'a> WeightedWindow<'a> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &'a [TripRecord] {
        self.records
    }

    /// Iterate `(record, weight)` pairs, oldest first.
    pub fn iter(self) -> impl Iterator<Item = (&'a TripRecord, u64)> + 'a {
        self.records.iter().zip(self.weights.iter().copied())
    }
}
