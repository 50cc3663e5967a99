use glam::Affine3A;

use crate::scene::BoneHandle;
use crate::scene::transform::Transform;

/// A single joint of a [`Skeleton`](crate::scene::Skeleton).
///
/// # Hierarchy
///
/// - `parent`: handle of the parent bone (`None` for the root)
/// - `children`: ordered child handles; the order defines how pose children
///   map onto bones and never changes after construction
///
/// Animation only writes `transform.position` and `transform.rotation`.
#[derive(Debug, Clone)]
pub struct Bone {
    pub name: String,
    pub(crate) parent: Option<BoneHandle>,
    pub(crate) children: Vec<BoneHandle>,
    pub transform: Transform,
}

impl Bone {
    #[must_use]
    pub fn new(name: impl Into<String>, transform: Transform) -> Self {
        Self {
            name: name.into(),
            parent: None,
            children: Vec::new(),
            transform,
        }
    }

    #[inline]
    #[must_use]
    pub fn parent(&self) -> Option<BoneHandle> {
        self.parent
    }

    #[inline]
    #[must_use]
    pub fn children(&self) -> &[BoneHandle] {
        &self.children
    }

    /// World matrix as of the last
    /// [`Skeleton::update_world_matrices`](crate::scene::Skeleton::update_world_matrices).
    #[inline]
    #[must_use]
    pub fn world_matrix(&self) -> &Affine3A {
        &self.transform.world_matrix
    }
}
