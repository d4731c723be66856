use crate::*;

/// Infinite plane through `origin`. Has no bounding box.
pub struct Plane {
    origin: Point,
    normal: Vector,
    mat: Arc<dyn Material>,
}

impl Plane {
    pub fn new(origin: Point, normal: Vector, mat: Arc<dyn Material>) -> Self {
        Self { origin, normal: normal.normalize(), mat }
    }
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>> {
        let denom = ray.dir.dot(self.normal);
        if denom.abs() < 1e-8 {
            return None;
        }
        let root = (self.origin - ray.orig).dot(self.normal) / denom;
        if !t.surrounds(root) {
            return None;
        }
        Some(HitRecord { t: root, p: ray.at(root), normal: self.normal, mat: self.mat.as_ref() })
    }
    fn bounding_box(&self) -> Option<AABB> {
        None
    }
}
