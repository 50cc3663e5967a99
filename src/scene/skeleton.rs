use glam::{Affine3A, Vec3};
use slotmap::SlotMap;

use crate::animation::Pose;
use crate::errors::{MarionetteError, Result};
use crate::scene::BoneHandle;
use crate::scene::bone::Bone;
use crate::scene::transform::Transform;

/// The live bone hierarchy of an animated model.
///
/// Bones live in a slot map and are addressed by stable [`BoneHandle`]s, so
/// renderers and skinning passes can keep handles across frames. The
/// [`Animator`](crate::animation::Animator) writes poses into the existing
/// bones through [`apply_pose`](Self::apply_pose); bones are never replaced.
#[derive(Debug, Clone)]
pub struct Skeleton {
    bones: SlotMap<BoneHandle, Bone>,
    root: BoneHandle,
}

impl Skeleton {
    /// Creates a skeleton containing only its root bone.
    #[must_use]
    pub fn new(root_name: &str, root_transform: Transform) -> Self {
        let mut bones = SlotMap::with_key();
        let root = bones.insert(Bone::new(root_name, root_transform));
        Self { bones, root }
    }

    /// Appends a bone as the last child of `parent`.
    pub fn add_bone(
        &mut self,
        parent: BoneHandle,
        name: &str,
        transform: Transform,
    ) -> Result<BoneHandle> {
        if !self.bones.contains_key(parent) {
            return Err(MarionetteError::InvalidBoneHandle(format!(
                "parent {parent:?} of '{name}'"
            )));
        }

        let mut bone = Bone::new(name, transform);
        bone.parent = Some(parent);
        let handle = self.bones.insert(bone);

        if let Some(parent_bone) = self.bones.get_mut(parent) {
            parent_bone.children.push(handle);
        }
        Ok(handle)
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> BoneHandle {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn bone(&self, handle: BoneHandle) -> Option<&Bone> {
        self.bones.get(handle)
    }

    #[inline]
    pub fn bone_mut(&mut self, handle: BoneHandle) -> Option<&mut Bone> {
        self.bones.get_mut(handle)
    }

    #[inline]
    #[must_use]
    pub fn bone_count(&self) -> usize {
        self.bones.len()
    }

    /// Iterates all bones in unspecified order.
    pub fn bones(&self) -> impl Iterator<Item = (BoneHandle, &Bone)> {
        self.bones.iter()
    }

    /// Depth-first search for the first bone called `name`.
    #[must_use]
    pub fn bone_by_name(&self, name: &str) -> Option<BoneHandle> {
        self.find_by_name(self.root, name)
    }

    fn find_by_name(&self, current: BoneHandle, name: &str) -> Option<BoneHandle> {
        let bone = self.bones.get(current)?;
        if bone.name == name {
            return Some(current);
        }
        bone.children
            .iter()
            .find_map(|&child| self.find_by_name(child, name))
    }

    /// Resolves a child-index path from the root (`&[]` is the root itself).
    #[must_use]
    pub fn bone_at_path(&self, path: &[usize]) -> Option<BoneHandle> {
        path.iter().try_fold(self.root, |handle, &index| {
            self.bones.get(handle)?.children.get(index).copied()
        })
    }

    /// Child-index path from the root to `handle`, usable with
    /// [`Pose::at_path_mut`] when authoring keyframes.
    #[must_use]
    pub fn path_to(&self, handle: BoneHandle) -> Option<Vec<usize>> {
        let mut path = Vec::new();
        let mut current = handle;
        while let Some(parent) = self.bones.get(current)?.parent {
            let index = self.bones.get(parent)?
                .children
                .iter()
                .position(|&child| child == current)?;
            path.push(index);
            current = parent;
        }
        path.reverse();
        Some(path)
    }

    /// Path of the bone called `name`.
    pub fn path_of(&self, name: &str) -> Result<Vec<usize>> {
        self.bone_by_name(name)
            .and_then(|handle| self.path_to(handle))
            .ok_or_else(|| MarionetteError::BoneNotFound(name.to_string()))
    }

    // ========================================================================
    // Pose exchange
    // ========================================================================

    /// Snapshots the current local translations and rotations as a [`Pose`].
    ///
    /// The result has the skeleton's shape, which makes it the natural base
    /// for authoring keyframes.
    #[must_use]
    pub fn capture_pose(&self) -> Pose {
        self.capture_from(self.root)
    }

    fn capture_from(&self, handle: BoneHandle) -> Pose {
        let Some(bone) = self.bones.get(handle) else {
            return Pose::default();
        };
        Pose {
            translation: bone.transform.position,
            rotation: bone.transform.rotation,
            children: bone
                .children
                .iter()
                .map(|&child| self.capture_from(child))
                .collect(),
        }
    }

    /// Writes `pose` onto the bones in place.
    ///
    /// Only translation and rotation are overwritten; scale and bone identity
    /// are preserved. Pose nodes without a matching bone are ignored.
    pub fn apply_pose(&mut self, pose: &Pose) {
        self.apply_from(self.root, pose);
    }

    fn apply_from(&mut self, handle: BoneHandle, pose: &Pose) {
        let Some(bone) = self.bones.get_mut(handle) else {
            return;
        };
        bone.transform.position = pose.translation;
        bone.transform.rotation = pose.rotation;

        for (index, child_pose) in pose.children.iter().enumerate() {
            let Some(child) = self
                .bones
                .get(handle)
                .and_then(|b| b.children.get(index).copied())
            else {
                break;
            };
            self.apply_from(child, child_pose);
        }
    }

    // ========================================================================
    // Hierarchy
    // ========================================================================

    /// Uniform model scale, applied on the root bone.
    pub fn set_scale(&mut self, scale: f32) {
        if let Some(root) = self.bones.get_mut(self.root) {
            root.transform.scale = Vec3::splat(scale);
        }
    }

    /// Recomputes world matrices top-down (`parent_world * local`).
    ///
    /// Subtrees whose local transforms and ancestors are unchanged keep their
    /// cached world matrices.
    pub fn update_world_matrices(&mut self) {
        self.update_subtree(self.root, Affine3A::IDENTITY, false);
    }

    fn update_subtree(&mut self, handle: BoneHandle, parent_world: Affine3A, parent_changed: bool) {
        let Some(bone) = self.bones.get_mut(handle) else {
            return;
        };

        let changed = bone.transform.update_local_matrix() || parent_changed;
        if changed {
            let world = parent_world * bone.transform.local_matrix;
            bone.transform.set_world_matrix(world);
        }
        let world = bone.transform.world_matrix;

        let mut index = 0;
        while let Some(child) = self
            .bones
            .get(handle)
            .and_then(|b| b.children.get(index).copied())
        {
            self.update_subtree(child, world, changed);
            index += 1;
        }
    }

    #[must_use]
    pub fn world_matrix(&self, handle: BoneHandle) -> Option<Affine3A> {
        self.bones.get(handle).map(|bone| bone.transform.world_matrix)
    }
}
