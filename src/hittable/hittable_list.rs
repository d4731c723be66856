use crate::*;

/// Objects tested in order. Members only enter through `add`, which keeps
/// the cached box in step with them.
#[derive(Default)]
pub struct HittableList {
    objects: Vec<Arc<dyn Hittable>>,
    bbox: Option<AABB>,
    unbounded: bool,
}

impl HittableList {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn add(&mut self, object: Arc<dyn Hittable>) {
        match object.bounding_box() {
            Some(b) => {
                let current = self.bbox.unwrap_or(AABB::NONE);
                self.bbox = Some(AABB::enclosing_volume(&current, &b));
            }
            None => self.unbounded = true,
        }
        self.objects.push(object);
    }
    pub fn len(&self) -> usize {
        self.objects.len()
    }
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
    /// Moves every bounded object under a single `BVHNode`; unbounded ones
    /// stay in the list and are tested linearly.
    pub fn into_bvh(self) -> HittableList {
        let (bounded, unbounded): (Vec<_>, Vec<_>) =
            self.objects.into_iter().partition(|o| o.bounding_box().is_some());
        log::debug!("building bvh over {} objects, {} unbounded", bounded.len(), unbounded.len());

        let mut list = HittableList::new();
        if let Some(node) = BVHNode::new(bounded) {
            list.add(Arc::new(node));
        }
        for object in unbounded {
            list.add(object);
        }
        list
    }
}

impl Hittable for HittableList {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>> {
        // Only closer objects are permitted after each iteration
        let mut t_least = t.max;
        self.objects
            .iter()
            .filter_map(|object| {
                object.hit(ray, &Interval { min: t.min, max: t_least }).map(|record| {
                    t_least = record.t;
                    record
                })
            })
            .last()
    }
    fn bounding_box(&self) -> Option<AABB> {
        if self.unbounded {
            None
        } else {
            self.bbox
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::tests::*;

    fn spheres_along_z() -> HittableList {
        let mut list = HittableList::new();
        for z in [9.0, 3.0, 6.0] {
            list.add(Arc::new(Sphere::new(Point::new(0.0, 0.0, z), 1.0, gray())));
        }
        list
    }

    #[test]
    fn nearest_hit_wins() {
        let list = spheres_along_z();
        let ray = Ray::new(Point::ZERO, Vector::Z);
        let hit = list.hit(&ray, &Interval::new(0.001, INFINITY)).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-9);

        let hit = list.hit(&ray, &Interval::new(4.5, INFINITY)).unwrap();
        assert!((hit.t - 5.0).abs() < 1e-9);
    }

    #[test]
    fn empty_list() {
        let list = HittableList::new();
        assert!(list.is_empty());
        assert!(list.bounding_box().is_none());
        assert!(list.hit(&Ray::new(Point::ZERO, Vector::Z), &Interval::ALL).is_none());
    }

    #[test]
    fn bounding_box_encloses_members() {
        let bbox = spheres_along_z().bounding_box().unwrap();
        assert_eq!(bbox.min(), Point::new(-1.0, -1.0, 2.0));
        assert_eq!(bbox.max(), Point::new(1.0, 1.0, 10.0));
    }

    #[test]
    fn unbounded_member_drops_box() {
        let mut list = spheres_along_z();
        list.add(Arc::new(Plane::new(Point::ZERO, Vector::Y, gray())));
        assert!(list.bounding_box().is_none());
    }

    #[test]
    fn unbounded_member_first() {
        let mut list = HittableList::new();
        list.add(Arc::new(Plane::new(Point::ZERO, Vector::Y, gray())));
        list.add(Arc::new(unit_sphere()));
        assert!(list.bounding_box().is_none());
    }

    #[test]
    fn decorated_list_sees_unbounded_member() {
        let mut list = spheres_along_z();
        list.add(Arc::new(Plane::new(Point::ZERO, Vector::Y, gray())));
        assert!(FlipNormals::new(&list).bounding_box().is_none());
        assert!(Translate::new(&list, Vector::new(1.0, 2.0, 3.0)).bounding_box().is_none());
    }

    #[test]
    fn into_bvh_keeps_hits() {
        let mut list = spheres_along_z();
        list.add(Arc::new(Plane::new(Point::new(0.0, -2.0, 0.0), Vector::Y, gray())));
        let ray = Ray::new(Point::new(0.0, 0.0, -1.0), Vector::new(0.0, -0.1, 1.0));
        let t = Interval::new(0.001, INFINITY);
        let before = list.hit(&ray, &t).map(|r| r.t);

        let bvh = list.into_bvh();
        assert_eq!(bvh.len(), 2);
        let after = bvh.hit(&ray, &t).map(|r| r.t);
        assert_eq!(before, after);
    }
}
