use crate::*;

/// One ray/surface intersection. `mat` borrows from the shape that was hit.
#[derive(Clone, Copy)]
pub struct HitRecord<'a> {
    pub t: Float,
    pub p: Point,
    pub normal: Vector,
    pub mat: &'a dyn Material,
}

impl<'a> HitRecord<'a> {
    /// Whether the ray arrived on the side the normal points to.
    pub fn front_face(&self, ray: &Ray) -> bool {
        ray.dir.dot(self.normal) < 0.
    }
}
