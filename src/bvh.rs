use crate::*;
use std::cmp::Ordering;

pub struct BVHNode {
    left: Arc<dyn Hittable>,
    right: Arc<dyn Hittable>,
    bbox: AABB,
}

impl Hittable for BVHNode {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>> {
        if !self.bbox.hit(ray, t) {
            return None;
        }
        match self.left.hit(ray, t) {
            Some(record) => {
                let closer = Interval { min: t.min, max: record.t };
                self.right.hit(ray, &closer).or(Some(record))
            }
            None => self.right.hit(ray, t),
        }
    }
    fn bounding_box(&self) -> Option<AABB> {
        Some(self.bbox)
    }
}

impl BVHNode {
    /// Builds a hierarchy over bounded objects. Returns `None` for an empty
    /// input; objects without a box are treated as empty boxes, so callers
    /// should split them off first (see `HittableList::into_bvh`).
    pub fn new(mut objects: Vec<Arc<dyn Hittable>>) -> Option<Self> {
        if objects.is_empty() {
            return None;
        }
        let size = objects.len();
        let node = Self::from_slice(&mut objects);
        log::debug!("bvh over {} objects, root box {:?}", size, node.bbox);
        Some(node)
    }

    fn from_slice(objects: &mut [Arc<dyn Hittable>]) -> Self {
        let bbox_of = |o: &Arc<dyn Hittable>| o.bounding_box().unwrap_or(AABB::NONE);
        let bbox = objects
            .iter()
            .fold(AABB::NONE, |acc, o| AABB::enclosing_volume(&acc, &bbox_of(o)));
        let axis = bbox.longest_axis();
        let comparator = |a: &Arc<dyn Hittable>, b: &Arc<dyn Hittable>| {
            bbox_of(a)[axis].min.partial_cmp(&bbox_of(b)[axis].min).unwrap_or(Ordering::Equal)
        };

        let (left, right) = match objects.len() {
            1 => (objects[0].clone(), objects[0].clone()),
            2 => (objects[0].clone(), objects[1].clone()),
            span => {
                objects.sort_by(comparator);
                let (lo, hi) = objects.split_at_mut(span / 2);
                let left = Arc::new(BVHNode::from_slice(lo));
                let right = Arc::new(BVHNode::from_slice(hi));
                (left as Arc<dyn Hittable>, right as Arc<dyn Hittable>)
            }
        };
        let bbox = AABB::enclosing_volume(&bbox_of(&left), &bbox_of(&right));
        Self { left, right, bbox }
    }
}
