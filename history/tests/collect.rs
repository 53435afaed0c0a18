use std::collections::BTreeMap;
use std::io;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use geo::polygon;
use rstest::{fixture, rstest};
use serde_json::{json, Value};

use aloft_boundaries::{BoundaryIndex, BoundaryLayer, BoundaryPolygon};
use aloft_formats::RawSnapshot;
use aloft_history::History;
use aloft_sources::{FetchError, Fetchable};

/// Serve canned snapshots, any hour not in the map fails like a timeout would.
///
#[derive(Debug, Default)]
struct Canned {
    snapshots: BTreeMap<u32, Value>,
    calls: Mutex<Vec<u32>>,
}

impl Canned {
    /// One record per hour, latitude is the hour offset
    fn hourly(hours: u32) -> Self {
        let snapshots = (0..hours)
            .map(|h| (h, json!([[h as f64, 5.0, 1000 + h]])))
            .collect();
        Canned {
            snapshots,
            ..Default::default()
        }
    }

    fn without(mut self, hour: u32) -> Self {
        self.snapshots.remove(&hour);
        self
    }

    fn calls(&self) -> Vec<u32> {
        let mut calls = self.calls.lock().unwrap().clone();
        calls.sort_unstable();
        calls
    }
}

impl Fetchable for Canned {
    fn name(&self) -> String {
        "canned".to_string()
    }

    fn try_fetch(&self, hour: u32) -> Result<RawSnapshot, FetchError> {
        self.calls.lock().unwrap().push(hour);
        self.snapshots
            .get(&hour)
            .cloned()
            .ok_or_else(|| FetchError::Io {
                path: format!("{hour:02}.json"),
                source: io::Error::new(io::ErrorKind::TimedOut, "timed out"),
            })
    }
}

#[fixture]
fn index() -> BoundaryIndex {
    let testland = polygon![
        (x: 0., y: 0.),
        (x: 10., y: 0.),
        (x: 10., y: 10.),
        (x: 0., y: 10.),
        (x: 0., y: 0.),
    ];
    let upper = polygon![
        (x: 0., y: 5.),
        (x: 10., y: 5.),
        (x: 10., y: 10.),
        (x: 0., y: 10.),
        (x: 0., y: 5.),
    ];
    BoundaryIndex::new(
        BoundaryLayer::new(vec![BoundaryPolygon::new("Testland", testland)]),
        BoundaryLayer::new(vec![BoundaryPolygon::new("Upper Testland", upper)]),
    )
}

#[rstest]
fn test_collect_zero(index: BoundaryIndex) {
    let src = Canned::hourly(24);
    let history = History::new(&src, &index);

    assert!(history.collect(0).is_empty());
    assert!(src.calls().is_empty());
}

#[rstest]
#[case(1)]
#[case(3)]
fn test_collect_one_fetch_per_hour(index: BoundaryIndex, #[case] jobs: usize) {
    let src = Canned::hourly(12).without(2).without(7);
    let history = History::new(&src, &index).jobs(jobs);

    let (records, stats) = history.collect_with_stats(12);

    assert_eq!((0..12).collect::<Vec<u32>>(), src.calls());
    assert_eq!(10, records.len());
    assert_eq!(10, stats.fetched);
    assert_eq!(2, stats.failed);
}

#[rstest]
fn test_collect_survives_timeout(index: BoundaryIndex) {
    let src = Canned::hourly(8).without(5);
    let history = History::new(&src, &index);

    let records = history.collect(8);

    let lats: Vec<f64> = records.iter().map(|r| r.lat).collect();
    assert_eq!(vec![0., 1., 2., 3., 4., 6., 7.], lats);
}

#[rstest]
fn test_collect_geocodes(index: BoundaryIndex) {
    let src = Canned::hourly(8);
    let history = History::new(&src, &index);

    let records = history.collect(8);

    // hour 0 is on the Testland edge, 1..4 inside, 5 on the Upper Testland edge, 6..7 in both
    assert_eq!(None, records[0].country);
    assert_eq!(Some("Testland".to_string()), records[3].country);
    assert_eq!(None, records[3].state);
    assert_eq!(Some("Testland".to_string()), records[7].country);
    assert_eq!(Some("Upper Testland".to_string()), records[7].state);
    assert_eq!(Some(1007.), records[7].alt);
}

#[rstest]
fn test_collect_mixed_shapes(index: BoundaryIndex) {
    let mut snapshots = BTreeMap::new();
    snapshots.insert(0, json!([[10.0, 20.0, 1500], [null, 5.0, 300]]));
    snapshots.insert(1, json!({"flights": [[1.0, 1.0, 100]], "meta": "ignore"}));
    snapshots.insert(2, json!("maintenance"));
    snapshots.insert(3, json!([[2.0, 2.0], ["x", 2.0, 2.0], [3.0]]));
    let src = Canned {
        snapshots,
        ..Default::default()
    };
    let history = History::new(&src, &index);

    let (records, stats) = history.collect_with_stats(4);

    let coords: Vec<(f64, f64, Option<f64>)> =
        records.iter().map(|r| (r.lat, r.lon, r.alt)).collect();
    assert_eq!(
        vec![
            (10.0, 20.0, Some(1500.0)),
            (1.0, 1.0, Some(100.0)),
            (2.0, 2.0, None)
        ],
        coords
    );
    assert_eq!(4, stats.fetched);
    assert_eq!(6, stats.candidates);
    assert_eq!(3, stats.rejected);
    assert_eq!(3, stats.records);
    assert_eq!(1, stats.no_country);
}

#[rstest]
fn test_collect_parallel_same_as_sequential(index: BoundaryIndex) {
    let src = Canned::hourly(24).without(11);

    let seq = History::new(&src, &index).collect(24);
    let par = History::new(&src, &index).jobs(6).collect(24);

    assert_eq!(seq, par);
    assert_eq!(23, par.len());
}

#[rstest]
#[case(1)]
#[case(4)]
fn test_collect_cancelled(index: BoundaryIndex, #[case] jobs: usize) {
    let src = Canned::hourly(6);
    let stop = Arc::new(AtomicBool::new(true));
    let history = History::new(&src, &index).jobs(jobs).stop_on(stop);

    let (records, stats) = history.collect_with_stats(6);

    assert!(records.is_empty());
    assert!(src.calls().is_empty());
    assert_eq!(6, stats.skipped);
}
