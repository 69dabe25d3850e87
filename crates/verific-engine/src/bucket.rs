use crate::label;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use verific_types::{Error, Locale, Result, YearDisplay};

pub const TODAY_LABEL: &str = "Today";
pub const TOMORROW_LABEL: &str = "Tomorrow";

/// Relative position of a bucket. Declaration order is display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BucketKind {
    Today,
    Tomorrow,
    Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BucketOptions {
    pub locale: Locale,
    pub year_display: YearDisplay,
}

/// A named group of items sharing a calendar day classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket<T> {
    pub label: String,
    pub kind: BucketKind,
    /// Calendar day used for ordering. Earliest day when several days share the label.
    pub day: NaiveDate,
    /// Items in input order
    pub items: Vec<T>,
}

/// Buckets in display order, with lookup by label.
///
/// Serializes as `{"order": [labels...], "buckets": {label: [items...]}}`
/// with `buckets` keys emitted in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bucketing<T> {
    buckets: Vec<Bucket<T>>,
    index: HashMap<String, usize>,
}

impl<T> Bucketing<T> {
    fn from_unordered(mut buckets: Vec<Bucket<T>>) -> Self {
        // Keys are unique: one label per day for each kind
        buckets.sort_by_key(|b| (b.kind, b.day));
        let index = buckets
            .iter()
            .enumerate()
            .map(|(i, b)| (b.label.clone(), i))
            .collect();
        Self { buckets, index }
    }

    /// Bucket labels in display order
    pub fn order(&self) -> Vec<&str> {
        self.buckets.iter().map(|b| b.label.as_str()).collect()
    }

    pub fn buckets(&self) -> &[Bucket<T>] {
        &self.buckets
    }

    pub fn bucket(&self, label: &str) -> Option<&Bucket<T>> {
        self.index.get(label).map(|&i| &self.buckets[i])
    }

    /// Items filed under `label`
    pub fn get(&self, label: &str) -> Option<&[T]> {
        self.bucket(label).map(|b| b.items.as_slice())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Bucket<T>> {
        self.buckets.iter()
    }

    /// Number of buckets
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of items across all buckets
    pub fn total_items(&self) -> usize {
        self.buckets.iter().map(|b| b.items.len()).sum()
    }

    pub fn into_buckets(self) -> Vec<Bucket<T>> {
        self.buckets
    }

    /// Label-to-items mapping; pair with [`Bucketing::order`] for display order
    pub fn into_map(self) -> HashMap<String, Vec<T>> {
        self.buckets
            .into_iter()
            .map(|b| (b.label, b.items))
            .collect()
    }

    /// Apply `f` to every item, keeping labels and order
    pub fn map_items<U>(self, mut f: impl FnMut(T) -> U) -> Bucketing<U> {
        let buckets = self
            .buckets
            .into_iter()
            .map(|b| Bucket {
                label: b.label,
                kind: b.kind,
                day: b.day,
                items: b.items.into_iter().map(&mut f).collect(),
            })
            .collect();
        Bucketing {
            buckets,
            index: self.index,
        }
    }
}

impl<T> IntoIterator for Bucketing<T> {
    type Item = Bucket<T>;
    type IntoIter = std::vec::IntoIter<Bucket<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Bucketing<T> {
    type Item = &'a Bucket<T>;
    type IntoIter = std::slice::Iter<'a, Bucket<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.buckets.iter()
    }
}

impl<T: Serialize> Serialize for Bucketing<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Bucketing", 2)?;
        state.serialize_field("order", &self.order())?;
        state.serialize_field("buckets", &OrderedItems(&self.buckets))?;
        state.end()
    }
}

struct OrderedItems<'a, T>(&'a [Bucket<T>]);

impl<T: Serialize> Serialize for OrderedItems<'_, T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for bucket in self.0 {
            map.serialize_entry(&bucket.label, &bucket.items)?;
        }
        map.end()
    }
}

/// Group `items` into day buckets relative to `now`.
///
/// Days are taken in `now`'s timezone. `date_of` may return instants in any
/// timezone; they are converted before the calendar day is read.
pub fn bucket_by<T, Tz, ItemTz, F>(
    items: impl IntoIterator<Item = T>,
    mut date_of: F,
    now: &DateTime<Tz>,
    options: &BucketOptions,
) -> Bucketing<T>
where
    Tz: TimeZone,
    ItemTz: TimeZone,
    F: FnMut(&T) -> DateTime<ItemTz>,
{
    match group(items, |item| Ok::<_, Infallible>(date_of(item)), now, options) {
        Ok(bucketing) => bucketing,
        Err((_, never)) => match never {},
    }
}

/// Fallible form of [`bucket_by`].
///
/// The first projection error rejects the whole call with
/// [`Error::InvalidDate`] carrying the item's input position.
pub fn try_bucket_by<T, Tz, ItemTz, F, E>(
    items: impl IntoIterator<Item = T>,
    date_of: F,
    now: &DateTime<Tz>,
    options: &BucketOptions,
) -> Result<Bucketing<T>>
where
    Tz: TimeZone,
    ItemTz: TimeZone,
    F: FnMut(&T) -> std::result::Result<DateTime<ItemTz>, E>,
    E: fmt::Display,
{
    group(items, date_of, now, options).map_err(|(index, err)| {
        tracing::debug!(index, error = %err, "date projection failed");
        Error::InvalidDate {
            index,
            reason: err.to_string(),
        }
    })
}

fn group<T, Tz, ItemTz, F, E>(
    items: impl IntoIterator<Item = T>,
    mut date_of: F,
    now: &DateTime<Tz>,
    options: &BucketOptions,
) -> std::result::Result<Bucketing<T>, (usize, E)>
where
    Tz: TimeZone,
    ItemTz: TimeZone,
    F: FnMut(&T) -> std::result::Result<DateTime<ItemTz>, E>,
{
    let tz = now.timezone();
    let today = now.date_naive();

    let mut buckets: Vec<Bucket<T>> = Vec::new();
    let mut slots: HashMap<String, usize> = HashMap::new();

    for (position, item) in items.into_iter().enumerate() {
        let at = date_of(&item).map_err(|err| (position, err))?;
        let day = at.with_timezone(&tz).date_naive();
        let (kind, label) = label::classify(day, today, options);

        match slots.get(&label) {
            Some(&slot) => {
                let bucket = &mut buckets[slot];
                bucket.day = bucket.day.min(day);
                bucket.items.push(item);
            }
            None => {
                slots.insert(label.clone(), buckets.len());
                buckets.push(Bucket {
                    label,
                    kind,
                    day,
                    items: vec![item],
                });
            }
        }
    }

    let bucketing = Bucketing::from_unordered(buckets);
    tracing::debug!(
        %today,
        buckets = bucketing.len(),
        items = bucketing.total_items(),
        "grouped items by day"
    );
    Ok(bucketing)
}
