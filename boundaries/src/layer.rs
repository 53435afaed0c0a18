//! One tier of boundaries (countries or states) with its spatial index.
//!
//! The R-tree only holds bounding boxes.  A lookup collects the boxes containing the point,
//! puts them back in insertion order and runs the exact containment test on each, so the
//! first polygon in dataset order always wins, exactly like a linear scan would.
//!

use std::fmt::{Debug, Formatter};

use geo::{BoundingRect, Contains, MultiPolygon, Point};
use rstar::{Envelope, RTree, RTreeObject, SelectionFunction, AABB};

/// A named region.
///
#[derive(Clone, Debug, PartialEq)]
pub struct BoundaryPolygon {
    /// Human-readable name
    pub name: String,
    /// Area, x is longitude and y latitude
    pub geometry: MultiPolygon<f64>,
}

impl BoundaryPolygon {
    pub fn new(name: &str, geometry: impl Into<MultiPolygon<f64>>) -> Self {
        BoundaryPolygon {
            name: name.to_string(),
            geometry: geometry.into(),
        }
    }

    /// Uses `geo` semantics: a point on the boundary is not contained.
    ///
    #[inline]
    pub fn contains(&self, point: &Point<f64>) -> bool {
        self.geometry.contains(point)
    }
}

/// Bounding box of the polygon at `idx`.
///
#[derive(Clone, Debug)]
struct PolygonBox {
    idx: usize,
    env: AABB<[f64; 2]>,
}

impl RTreeObject for PolygonBox {
    type Envelope = AABB<[f64; 2]>;

    #[inline]
    fn envelope(&self) -> Self::Envelope {
        self.env
    }
}

/// Select every box containing a given point.
///
struct AtPoint([f64; 2]);

impl SelectionFunction<PolygonBox> for AtPoint {
    fn should_unpack_parent(&self, envelope: &AABB<[f64; 2]>) -> bool {
        envelope.contains_point(&self.0)
    }

    fn should_unpack_leaf(&self, leaf: &PolygonBox) -> bool {
        leaf.env.contains_point(&self.0)
    }
}

#[derive(Default)]
pub struct BoundaryLayer {
    polygons: Vec<BoundaryPolygon>,
    tree: RTree<PolygonBox>,
}

impl Debug for BoundaryLayer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BoundaryLayer")
            .field("polygons", &self.polygons.len())
            .finish()
    }
}

impl BoundaryLayer {
    /// Build the layer and its index, order of `polygons` is kept.
    ///
    pub fn new(polygons: Vec<BoundaryPolygon>) -> Self {
        let boxes: Vec<PolygonBox> = polygons
            .iter()
            .enumerate()
            .filter_map(|(idx, p)| {
                // Empty geometries have no box and can not contain anything
                let rect = p.geometry.bounding_rect()?;
                Some(PolygonBox {
                    idx,
                    env: AABB::from_corners(
                        [rect.min().x, rect.min().y],
                        [rect.max().x, rect.max().y],
                    ),
                })
            })
            .collect();

        BoundaryLayer {
            polygons,
            tree: RTree::bulk_load(boxes),
        }
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    pub fn polygons(&self) -> &[BoundaryPolygon] {
        &self.polygons
    }

    /// Every polygon containing `point`, in dataset order.
    ///
    pub fn matches<'a>(&'a self, point: &Point<f64>) -> impl Iterator<Item = &'a BoundaryPolygon> {
        let mut candidates: Vec<usize> = self
            .tree
            .locate_with_selection_function(AtPoint([point.x(), point.y()]))
            .map(|b| b.idx)
            .collect();
        candidates.sort_unstable();

        let point = *point;
        candidates
            .into_iter()
            .map(move |idx| &self.polygons[idx])
            .filter(move |p| p.contains(&point))
    }

    /// First polygon containing `point`, if any.
    ///
    pub fn find(&self, point: &Point<f64>) -> Option<&BoundaryPolygon> {
        self.matches(point).next()
    }
}

#[cfg(test)]
mod tests {
    use geo::{polygon, Polygon};
    use rstest::rstest;

    use super::*;

    fn square(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon<f64> {
        polygon![
            (x: x0, y: y0),
            (x: x1, y: y0),
            (x: x1, y: y1),
            (x: x0, y: y1),
            (x: x0, y: y0),
        ]
    }

    /// Reference implementation, test every polygon in order.
    fn scan<'a>(layer: &'a BoundaryLayer, point: &Point<f64>) -> Option<&'a BoundaryPolygon> {
        layer.polygons().iter().find(|p| p.contains(point))
    }

    #[test]
    fn test_layer_first_match_wins() {
        let layer = BoundaryLayer::new(vec![
            BoundaryPolygon::new("Big", square(0., 0., 10., 10.)),
            BoundaryPolygon::new("Small", square(2., 2., 4., 4.)),
        ]);
        let p = Point::new(3., 3.);
        assert_eq!("Big", layer.find(&p).unwrap().name);
        assert_eq!(2, layer.matches(&p).count());

        let layer = BoundaryLayer::new(vec![
            BoundaryPolygon::new("Small", square(2., 2., 4., 4.)),
            BoundaryPolygon::new("Big", square(0., 0., 10., 10.)),
        ]);
        assert_eq!("Small", layer.find(&p).unwrap().name);
    }

    #[test]
    fn test_layer_bbox_hit_but_outside() {
        // L-shaped region, its box covers (3, 3) but the polygon does not
        let ell = polygon![
            (x: 0., y: 0.),
            (x: 4., y: 0.),
            (x: 4., y: 1.),
            (x: 1., y: 1.),
            (x: 1., y: 4.),
            (x: 0., y: 4.),
            (x: 0., y: 0.),
        ];
        let layer = BoundaryLayer::new(vec![BoundaryPolygon::new("Ell", ell)]);
        assert!(layer.find(&Point::new(3., 3.)).is_none());
        assert_eq!("Ell", layer.find(&Point::new(0.5, 3.)).unwrap().name);
    }

    #[test]
    fn test_layer_empty() {
        let layer = BoundaryLayer::default();
        assert!(layer.is_empty());
        assert!(layer.find(&Point::new(0., 0.)).is_none());
    }

    #[test]
    fn test_layer_empty_geometry() {
        let layer = BoundaryLayer::new(vec![
            BoundaryPolygon::new("Nothing", MultiPolygon::<f64>::new(vec![])),
            BoundaryPolygon::new("Unit", square(0., 0., 1., 1.)),
        ]);
        assert_eq!(2, layer.len());
        assert_eq!("Unit", layer.find(&Point::new(0.5, 0.5)).unwrap().name);
    }

    #[rstest]
    #[case(5.0, 5.0)]
    #[case(15.5, 25.5)]
    #[case(-179.5, -89.5)]
    #[case(99.9, 0.1)]
    #[case(200.0, 200.0)]
    fn test_layer_same_as_scan(#[case] x: f64, #[case] y: f64) {
        // A grid of overlapping 15° squares
        let mut polygons = vec![];
        for i in -12..12 {
            for j in -6..6 {
                let (x0, y0) = (i as f64 * 15. - 2., j as f64 * 15. - 2.);
                polygons.push(BoundaryPolygon::new(
                    &format!("{i}/{j}"),
                    square(x0, y0, x0 + 17., y0 + 17.),
                ));
            }
        }
        let layer = BoundaryLayer::new(polygons);
        let p = Point::new(x, y);
        assert_eq!(scan(&layer, &p), layer.find(&p));
    }
}
