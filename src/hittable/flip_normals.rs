use crate::*;

/// Reports the wrapped object's hits with the normal reversed, e.g. to turn a
/// ceiling quad into a light facing down.
pub struct FlipNormals<H> {
    object: H,
}

impl<H: Hittable> FlipNormals<H> {
    pub fn new(object: H) -> Self {
        Self { object }
    }
}

impl<H: Hittable> Hittable for FlipNormals<H> {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>> {
        self.object.hit(ray, t).map(|r| HitRecord { normal: -r.normal, ..r })
    }
    fn bounding_box(&self) -> Option<AABB> {
        self.object.bounding_box()
    }
}
