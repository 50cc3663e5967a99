use glam::{Quat, Vec3};

use crate::animation::values::{Interpolatable, slerp_shortest};
use crate::errors::{MarionetteError, Result};

/// A hierarchical snapshot of local bone transforms.
///
/// A `Pose` mirrors the skeleton it was authored for: the root node holds the
/// root bone's local translation and rotation, and `children` follows the
/// skeleton's child order. Two poses are blended by position in that tree,
/// never by bone name, so every pose played on one skeleton must share the
/// same shape (same child count at every node).
#[derive(Debug, Clone, PartialEq)]
pub struct Pose {
    /// Local offset relative to the parent bone.
    pub translation: Vec3,
    /// Local orientation relative to the parent bone (unit quaternion).
    pub rotation: Quat,
    /// Child poses, in skeleton order.
    pub children: Vec<Pose>,
}

impl Pose {
    #[must_use]
    pub fn new(translation: Vec3, rotation: Quat) -> Self {
        Self {
            translation,
            rotation,
            children: Vec::new(),
        }
    }

    /// Builder-style child append.
    #[must_use]
    pub fn with_child(mut self, child: Pose) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: Pose) {
        self.children.push(child);
    }

    /// Blends two same-shaped pose trees.
    ///
    /// Translations are interpolated linearly, rotations with shortest-arc
    /// slerp, and children pairwise in order. The result has the shape of `a`.
    ///
    /// Shapes are validated when keyframes are added to an
    /// [`Animation`](crate::animation::Animation); mismatched inputs here are
    /// a caller bug and only checked in debug builds.
    #[must_use]
    pub fn interpolate(a: &Pose, b: &Pose, t: f32) -> Pose {
        debug_assert_eq!(
            a.children.len(),
            b.children.len(),
            "interpolating poses with different child counts"
        );

        Pose {
            translation: Vec3::interpolate_linear(&a.translation, &b.translation, t),
            rotation: slerp_shortest(a.rotation, b.rotation, t),
            children: a
                .children
                .iter()
                .zip(&b.children)
                .map(|(ca, cb)| Pose::interpolate(ca, cb, t))
                .collect(),
        }
    }

    /// Total number of nodes in this tree, including the root.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Pose::node_count).sum::<usize>()
    }

    /// Returns `true` when both trees have the same child count at every node.
    #[must_use]
    pub fn same_shape(&self, other: &Pose) -> bool {
        self.shape_mismatch(other).is_none()
    }

    /// Finds the first node (in depth-first order) whose child count differs.
    ///
    /// Returns the child-index path to that node, or `None` when the shapes
    /// match. The root is the empty path.
    #[must_use]
    pub fn shape_mismatch(&self, other: &Pose) -> Option<Vec<usize>> {
        let mut path = Vec::new();
        if find_mismatch(self, other, &mut path) {
            Some(path)
        } else {
            None
        }
    }

    /// Resolves a child-index path, e.g. `&[0, 2]` is the root's first
    /// child's third child.
    #[must_use]
    pub fn at_path(&self, path: &[usize]) -> Option<&Pose> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    #[must_use]
    pub fn at_path_mut(&mut self, path: &[usize]) -> Option<&mut Pose> {
        path.iter()
            .try_fold(self, |node, &index| node.children.get_mut(index))
    }

    pub fn set_rotation_at(&mut self, path: &[usize], rotation: Quat) -> Result<()> {
        let node = self
            .at_path_mut(path)
            .ok_or_else(|| MarionetteError::InvalidBonePath(path.to_vec()))?;
        node.rotation = rotation;
        Ok(())
    }

    pub fn set_translation_at(&mut self, path: &[usize], translation: Vec3) -> Result<()> {
        let node = self
            .at_path_mut(path)
            .ok_or_else(|| MarionetteError::InvalidBonePath(path.to_vec()))?;
        node.translation = translation;
        Ok(())
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Quat::IDENTITY)
    }
}

impl Interpolatable for Pose {
    fn interpolate_linear(start: &Self, end: &Self, t: f32) -> Self {
        Pose::interpolate(start, end, t)
    }
}

fn find_mismatch(a: &Pose, b: &Pose, path: &mut Vec<usize>) -> bool {
    if a.children.len() != b.children.len() {
        return true;
    }
    for (index, (ca, cb)) in a.children.iter().zip(&b.children).enumerate() {
        path.push(index);
        if find_mismatch(ca, cb, path) {
            return true;
        }
        path.pop();
    }
    false
}
