use crate::*;

/// Places the wrapped object at `offset` by moving incoming rays the other way.
///
/// Only `p` is mapped back to world space. `t` is unchanged because the moved
/// ray keeps its direction, and so is `normal` since a translation does not
/// turn anything.
pub struct Translate<H> {
    offset: Vector,
    object: H,
    bbox: Option<AABB>,
}

impl<H: Hittable> Translate<H> {
    pub fn new(object: H, offset: Vector) -> Self {
        let bbox = object.bounding_box().map(|b| &b + &offset);
        Self { object, offset, bbox }
    }
}

impl<H: Hittable> Hittable for Translate<H> {
    fn bounding_box(&self) -> Option<AABB> {
        self.bbox
    }
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>> {
        let offset_ray = Ray { orig: ray.orig - self.offset, dir: ray.dir };
        self.object.hit(&offset_ray, t).map(|r| HitRecord { p: r.p + self.offset, ..r })
    }
}
