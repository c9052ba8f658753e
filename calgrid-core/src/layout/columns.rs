//! Horizontal placement of overlapping events.
//!
//! Events are grouped into clusters (connected components of the overlap
//! graph), and each cluster is colored greedily in start order so that no two
//! events sharing a column overlap. Every event in a cluster reports the
//! cluster's column count so the renderer can split the row evenly.

use std::borrow::Borrow;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::event::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnPlacement {
    /// 0-based column index within the cluster
    pub column: usize,
    pub total_columns: usize,
}

/// Open-interval overlap: back-to-back events do not overlap.
pub fn events_overlap(a: &Event, b: &Event) -> bool {
    a.start < b.end && b.start < a.end
}

/// Assign a column to every event. The result is indexed like `events`.
///
/// Ties in start time keep input order, so identical input always yields
/// identical columns. Accepts owned events or references.
pub fn assign_columns<E: Borrow<Event>>(events: &[E]) -> Vec<ColumnPlacement> {
    let mut placements = vec![
        ColumnPlacement {
            column: 0,
            total_columns: 1,
        };
        events.len()
    ];

    let mut order: Vec<usize> = (0..events.len()).collect();
    order.sort_by_key(|&i| nth(events, i).start);

    let mut clusters = DisjointSet::new(events.len());
    for (pos, &i) in order.iter().enumerate() {
        for &j in &order[pos + 1..] {
            // Later events start even later, none of them can reach back into `i`
            if nth(events, j).start >= nth(events, i).end {
                break;
            }
            if events_overlap(nth(events, i), nth(events, j)) {
                clusters.union(i, j);
            }
        }
    }

    let mut members: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for &i in &order {
        members.entry(clusters.find(i)).or_default().push(i);
    }

    for cluster in members.values() {
        let mut columns: Vec<Vec<usize>> = Vec::new();

        for &i in cluster {
            let free = columns.iter().position(|occupants| {
                occupants
                    .iter()
                    .all(|&j| !events_overlap(nth(events, i), nth(events, j)))
            });

            let column = match free {
                Some(column) => column,
                None => {
                    columns.push(Vec::new());
                    columns.len() - 1
                }
            };
            columns[column].push(i);
            placements[i].column = column;
        }

        for &i in cluster {
            placements[i].total_columns = columns.len();
        }
    }

    placements
}

fn nth<E: Borrow<Event>>(events: &[E], i: usize) -> &Event {
    events[i].borrow()
}

/// Union-find over event indices.
struct DisjointSet {
    parent: Vec<usize>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        DisjointSet {
            parent: (0..len).collect(),
        }
    }

    fn find(&mut self, i: usize) -> usize {
        let mut root = i;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = i;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a != root_b {
            // Smaller index as root keeps cluster ids stable
            let (keep, merge) = if root_a < root_b {
                (root_a, root_b)
            } else {
                (root_b, root_a)
            };
            self.parent[merge] = keep;
        }
    }
}
