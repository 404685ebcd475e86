use static_aabb2d_index::{StaticAABB2DIndex, StaticAABB2DIndexBuilder};

use crate::{
    collide::{Contact, point_in_shape, shape_overlap, shape_overlap_poc},
    core::{math::Vector2, traits::Real},
    error::ShapeIndexError,
    primitives::Rect,
    shape::Shape,
};

/// Static broad phase over a set of shapes.
///
/// Shape bounds ([Shape::bounds]) are packed into a spatial index once, queries first collect
/// the shapes whose bounds touch the query bounds and then run the exact test on those only.
/// Results are indexes into the slice the index was built from, in ascending order.
///
/// # Examples
///
/// ```
/// # use shape_collide::*;
/// let shapes = [
///     Shape::rect(0.0, 0.0, 10.0, 10.0),
///     Shape::circle(30.0, 30.0, 5.0),
///     Shape::edge(0.0, 20.0, 20.0, 20.0),
/// ];
/// let index = ShapeIndex::new(&shapes).unwrap();
/// assert_eq!(index.query_overlapping(Shape::circle(12.0, 5.0, 3.0)), vec![0]);
/// assert_eq!(index.query_overlapping(Shape::edge(10.0, 15.0, 10.0, 40.0)), vec![2]);
/// ```
pub struct ShapeIndex<T = f64>
where
    T: Real,
{
    shapes: Vec<Shape<T>>,
    spatial_index: StaticAABB2DIndex<T>,
}

impl<T> ShapeIndex<T>
where
    T: Real,
{
    /// Build the index over `shapes`.
    pub fn new(shapes: &[Shape<T>]) -> Result<Self, ShapeIndexError> {
        let mut builder = StaticAABB2DIndexBuilder::new(shapes.len());
        for bounds in shapes.iter().map(Shape::bounds) {
            builder.add(bounds.x, bounds.y, bounds.right(), bounds.bottom());
        }
        let spatial_index = builder.build().map_err(ShapeIndexError::Build)?;
        tracing::debug!(count = shapes.len(), "built shape index");

        Ok(ShapeIndex {
            shapes: shapes.to_vec(),
            spatial_index,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in build order.
    #[inline]
    pub fn shapes(&self) -> &[Shape<T>] {
        &self.shapes
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Shape<T>> {
        self.shapes.get(index)
    }

    /// Indexes of all shapes whose bounds touch `bounds` (inclusive, no exact test).
    pub fn query_bounds(&self, bounds: Rect<T>) -> Vec<usize> {
        let mut hits =
            self.spatial_index
                .query(bounds.x, bounds.y, bounds.right(), bounds.bottom());
        hits.sort_unstable();
        hits
    }

    /// Indexes of all shapes overlapping `shape` according to [shape_overlap].
    pub fn query_overlapping(&self, shape: Shape<T>) -> Vec<usize> {
        let mut hits = self.query_bounds(shape.bounds());
        hits.retain(|&i| shape_overlap(shape, self.shapes[i]));
        hits
    }

    /// Contacts of `shape` against every overlapping shape, normals point from `shape` toward the
    /// indexed shape (see [shape_overlap_poc]).
    pub fn query_contacts(&self, shape: Shape<T>) -> Vec<(usize, Contact<T>)> {
        self.query_bounds(shape.bounds())
            .into_iter()
            .filter_map(|i| shape_overlap_poc(shape, self.shapes[i]).map(|c| (i, c)))
            .collect()
    }

    /// Indexes of all shapes containing `point` according to [point_in_shape].
    pub fn query_point(&self, point: Vector2<T>) -> Vec<usize> {
        let mut hits = self.spatial_index.query(point.x, point.y, point.x, point.y);
        hits.retain(|&i| point_in_shape(point, self.shapes[i]));
        hits.sort_unstable();
        hits
    }
}
