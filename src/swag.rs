//! Sorting and tallying of the swag collected along the shortest path.
use core::fmt;

use itertools::Itertools;
use log::debug;

use crate::astar::FxIndexMap;

const DIGITS: usize = 10;
const LETTERS: usize = 26;
/// Bucket 0 holds labels that are too short for the current position, followed by one bucket
/// per digit, one per letter (case folded) and a last bucket for everything else.
const OVERFLOW: usize = 1 + DIGITS + LETTERS;
const BUCKETS: usize = OVERFLOW + 1;

fn bucket_index(c: char) -> usize {
    let c = c.to_ascii_lowercase();
    if c.is_ascii_digit() {
        (c as u8 - b'0') as usize + 1
    } else if c.is_ascii_lowercase() {
        (c as u8 - b'a') as usize + 1 + DIGITS
    } else {
        OVERFLOW
    }
}

/// Sorts `items` alphabetically with a least-significant-character-first radix sort. Every
/// pass is stable, so equal keys keep their relative order.
///
/// Digits sort before letters and letters ignore case. Any other character sorts after `z`,
/// ordered by code point.
pub fn radix_sort(mut items: Vec<String>) -> Vec<String> {
    let max_length = items.iter().map(|s| s.chars().count()).max().unwrap_or(0);
    let mut buckets: Vec<Vec<String>> = vec![Vec::new(); BUCKETS];
    for position in (0..max_length).rev() {
        for item in items.drain(..) {
            let ix = item.chars().nth(position).map_or(0, bucket_index);
            buckets[ix].push(item);
        }
        buckets[OVERFLOW].sort_by_key(|item| item.chars().nth(position));
        for bucket in buckets.iter_mut() {
            items.append(bucket);
        }
    }
    items
}

/// Collected swag in path order, alphabetically and as a tally.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Labels in the order they were collected.
    pub collected: Vec<String>,
    /// Canonical labels sorted alphabetically, ignoring spaces.
    pub sorted: Vec<String>,
    /// Occurrences per canonical label, least frequent first.
    pub counts: Vec<(String, usize)>,
}

/// Sorts `collected` with [radix_sort] on the space-stripped labels, maps each key back to its
/// canonical form in `swag` and counts the results.
pub fn summarize<S: AsRef<str>>(collected: &[String], swag: &[S]) -> Summary {
    let keys = collected.iter().map(|s| s.replace(' ', "")).collect();
    let sorted = radix_sort(keys)
        .into_iter()
        .map(|key| {
            swag.iter()
                .map(|label| label.as_ref())
                .find(|label| label.replace(' ', "") == key)
                .map_or(key.clone(), str::to_owned)
        })
        .collect::<Vec<_>>();
    let mut tally: FxIndexMap<&str, usize> = FxIndexMap::default();
    for label in &sorted {
        *tally.entry(label.as_str()).or_insert(0) += 1;
    }
    let mut counts = tally
        .into_iter()
        .map(|(label, n)| (label.to_owned(), n))
        .collect::<Vec<_>>();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.reverse();
    debug!("Tallied {} distinct items", counts.len());
    Summary {
        collected: collected.to_vec(),
        sorted,
        counts,
    }
}

fn quoted(items: &[String]) -> String {
    format!("[{}]", items.iter().map(|s| format!("'{}'", s)).join(", "))
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(
            f,
            "Swag items in the order they were collected in the maze:\n{}",
            quoted(&self.collected)
        )?;
        writeln!(f, "\nSwag items, sorted:\n{}", quoted(&self.sorted))?;
        writeln!(f, "\nTabulated collection of swag items:")?;
        for (label, count) in &self.counts {
            writeln!(f, "\t{}: {}", label, count)?;
        }
        Ok(())
    }
}
