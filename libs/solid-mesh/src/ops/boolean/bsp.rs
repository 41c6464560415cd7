//! # BSP Tree
//!
//! Binary Space Partitioning tree for CSG boolean operations.
//! Based on the csg.js algorithm by Evan Wallace.
//!
//! ## Algorithm
//!
//! Each BSP node contains:
//! - A dividing plane
//! - Polygons coplanar with the plane
//! - Front subtree (polygons in front of plane)
//! - Back subtree (polygons behind plane)
//!
//! ## Stack Safety
//!
//! Tree depth grows with polygon count, so every recursive walk runs under
//! `stacker::maybe_grow` and `Drop` unlinks children iteratively.

use config::constants::{STACK_GROWTH, STACK_RED_ZONE};

use super::plane::Plane;
use super::polygon::{Polygon, Split};

/// A node in the BSP tree.
#[derive(Debug, Default)]
pub struct BspNode {
    /// Dividing plane, taken from the first polygon inserted
    plane: Option<Plane>,
    /// Polygons coplanar with `plane`
    polygons: Vec<Polygon>,
    /// Front subtree
    front: Option<Box<BspNode>>,
    /// Back subtree
    back: Option<Box<BspNode>>,
}

impl BspNode {
    /// Creates a BSP tree from polygons.
    pub fn new(polygons: Vec<Polygon>) -> Self {
        let mut node = Self::default();
        node.build(polygons);
        node
    }

    /// Inserts polygons, extending the tree as needed.
    pub fn build(&mut self, polygons: Vec<Polygon>) {
        if polygons.is_empty() {
            return;
        }
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            let plane = *self.plane.get_or_insert_with(|| polygons[0].plane());

            let mut split = Split::default();
            for poly in polygons {
                poly.split(&plane, &mut split);
            }
            self.polygons.extend(split.coplanar_front);
            self.polygons.extend(split.coplanar_back);

            if !split.front.is_empty() {
                self.front
                    .get_or_insert_with(Box::default)
                    .build(split.front);
            }
            if !split.back.is_empty() {
                self.back.get_or_insert_with(Box::default).build(split.back);
            }
        });
    }

    /// Converts solid space to empty space and vice versa.
    pub fn invert(&mut self) {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            for poly in &mut self.polygons {
                poly.flip();
            }
            if let Some(plane) = &mut self.plane {
                plane.flip();
            }
            if let Some(front) = &mut self.front {
                front.invert();
            }
            if let Some(back) = &mut self.back {
                back.invert();
            }
            std::mem::swap(&mut self.front, &mut self.back);
        });
    }

    /// Removes the parts of `polygons` that lie inside this tree's solid.
    pub fn clip_polygons(&self, polygons: Vec<Polygon>) -> Vec<Polygon> {
        let Some(plane) = self.plane else {
            return polygons;
        };
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            let mut split = Split::default();
            for poly in polygons {
                poly.split(&plane, &mut split);
            }

            let mut front = split.front;
            front.extend(split.coplanar_front);
            let mut back = split.back;
            back.extend(split.coplanar_back);

            let mut kept = match &self.front {
                Some(node) => node.clip_polygons(front),
                None => front,
            };
            if let Some(node) = &self.back {
                kept.extend(node.clip_polygons(back));
            }
            kept
        })
    }

    /// Removes every polygon in this tree that lies inside `other`.
    pub fn clip_to(&mut self, other: &BspNode) {
        stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, || {
            self.polygons = other.clip_polygons(std::mem::take(&mut self.polygons));
            if let Some(front) = &mut self.front {
                front.clip_to(other);
            }
            if let Some(back) = &mut self.back {
                back.clip_to(other);
            }
        });
    }

    /// Collects all polygons in the tree.
    pub fn all_polygons(&self) -> Vec<Polygon> {
        let mut result = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            result.extend(node.polygons.iter().cloned());
            stack.extend(node.back.as_deref());
            stack.extend(node.front.as_deref());
        }
        result
    }

    /// Number of polygons stored in the tree.
    pub fn polygon_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += node.polygons.len();
            stack.extend(node.front.as_deref());
            stack.extend(node.back.as_deref());
        }
        count
    }

    /// Depth of the deepest leaf.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            for child in [node.front.as_deref(), node.back.as_deref()].into_iter().flatten() {
                stack.push((child, depth + 1));
            }
        }
        deepest
    }
}

impl Drop for BspNode {
    fn drop(&mut self) {
        let mut pending: Vec<Box<BspNode>> = Vec::new();
        pending.extend(self.front.take());
        pending.extend(self.back.take());
        while let Some(mut node) = pending.pop() {
            pending.extend(node.front.take());
            pending.extend(node.back.take());
        }
    }
}
