// Entity aggregator - classify events into hour buckets and fold per entity
use crate::domain::bucket::{classify, HOURS_PER_DAY};
use crate::domain::probe::{Grouping, ProbeEvent};
use crate::domain::series::BucketValues;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// An event paired with the bucket ordinal it was classified into.
#[derive(Debug, Clone, Copy)]
pub struct ClassifiedEvent<'a> {
    pub event: &'a ProbeEvent,
    pub bucket: usize,
}

/// Aggregate function applied per entity-bucket pair. `Count` is the
/// default; the selector is threaded through callers so swapping reducers
/// never restructures them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Aggregate {
    #[default]
    Count,
    Sum,
    Average,
    Minimum,
    Maximum,
}

/// Running per-bucket statistics; finalized per `Aggregate` selector.
#[derive(Debug, Clone, Copy, Default)]
struct BucketAccumulator {
    count: u32,
    sum: f64,
    min: f64,
    max: f64,
}

impl BucketAccumulator {
    fn observe(&mut self, value: f64) {
        if self.count == 0 {
            self.min = value;
            self.max = value;
        } else {
            self.min = self.min.min(value);
            self.max = self.max.max(value);
        }
        self.count += 1;
        self.sum += value;
    }

    fn finalize(&self, aggregate: Aggregate) -> f64 {
        match aggregate {
            Aggregate::Count => f64::from(self.count),
            Aggregate::Sum => self.sum,
            Aggregate::Average => self.sum / f64::from(self.count),
            Aggregate::Minimum => self.min,
            Aggregate::Maximum => self.max,
        }
    }
}

/// Assigns each event its bucket ordinal within `day`. Pure per-event
/// classification; events outside the day are dropped and logged.
pub fn classify_events(day: NaiveDate, events: &[ProbeEvent]) -> Vec<ClassifiedEvent<'_>> {
    let mut classified = Vec::with_capacity(events.len());
    let mut out_of_range = 0usize;
    for event in events {
        match classify(day, event.timestamp) {
            Some(bucket) => classified.push(ClassifiedEvent { event, bucket }),
            None => out_of_range += 1,
        }
    }
    if out_of_range > 0 {
        tracing::warn!(
            "dropped {} events outside evaluation day {}",
            out_of_range,
            day
        );
    }
    classified
}

/// Folds classified events into per-entity bucket arrays for one grouping.
/// Output order is the BTreeMap key order, so two runs over the same input
/// are identical. Buckets without events stay `None`.
pub fn aggregate_entities(
    classified: &[ClassifiedEvent<'_>],
    grouping: Grouping,
    aggregate: Aggregate,
) -> BTreeMap<String, BucketValues> {
    let mut accumulators: BTreeMap<String, [Option<BucketAccumulator>; HOURS_PER_DAY]> =
        BTreeMap::new();
    for classified_event in classified {
        // A classified ordinal outside the day is a programming error.
        assert!(
            classified_event.bucket < HOURS_PER_DAY,
            "bucket ordinal {} out of range",
            classified_event.bucket
        );
        let slots = accumulators
            .entry(grouping.key_of(classified_event.event))
            .or_insert([None; HOURS_PER_DAY]);
        slots[classified_event.bucket]
            .get_or_insert_with(BucketAccumulator::default)
            .observe(classified_event.event.value);
    }
    accumulators
        .into_iter()
        .map(|(key, slots)| (key, slots.map(|slot| slot.map(|acc| acc.finalize(aggregate)))))
        .collect()
}

/// Folds classified events into a single ungrouped bucket array, for the
/// overall daily trend.
pub fn aggregate_overall(classified: &[ClassifiedEvent<'_>], aggregate: Aggregate) -> BucketValues {
    let mut slots: [Option<BucketAccumulator>; HOURS_PER_DAY] = [None; HOURS_PER_DAY];
    for classified_event in classified {
        assert!(
            classified_event.bucket < HOURS_PER_DAY,
            "bucket ordinal {} out of range",
            classified_event.bucket
        );
        slots[classified_event.bucket]
            .get_or_insert_with(BucketAccumulator::default)
            .observe(classified_event.event.value);
    }
    slots.map(|slot| slot.map(|acc| acc.finalize(aggregate)))
}
