use crate::*;
pub mod flip_normals;
pub mod hittable_list;
pub mod plane;
pub mod quad;
pub mod sphere;
pub mod translate;

pub use flip_normals::*;
pub use hittable_list::*;
pub use plane::*;
pub use quad::*;
pub use sphere::*;
pub use translate::*;

/// Anything a ray can be tested against.
pub trait Hittable: Send + Sync {
    /// Nearest intersection with `t` inside `t`, or `None` on a miss.
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>>;
    /// `None` when the object has no finite extent.
    fn bounding_box(&self) -> Option<AABB>;
}

impl<H: Hittable + ?Sized> Hittable for &H {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>> {
        (**self).hit(ray, t)
    }
    fn bounding_box(&self) -> Option<AABB> {
        (**self).bounding_box()
    }
}

impl<H: Hittable + ?Sized> Hittable for Arc<H> {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>> {
        (**self).hit(ray, t)
    }
    fn bounding_box(&self) -> Option<AABB> {
        (**self).bounding_box()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub fn gray() -> Arc<dyn Material> {
        Arc::new(Lambertian::from_color(Color::splat(0.5)))
    }

    pub fn unit_sphere() -> Sphere {
        Sphere::new(Point::ZERO, 1.0, gray())
    }

    pub fn approx(a: Vector, b: Vector) -> bool {
        a.distance(b) < 1e-9
    }

    #[test]
    fn borrowed_and_shared_handles_forward() {
        let sphere = unit_sphere();
        let ray = Ray::new(Point::new(0.0, 0.0, -5.0), Vector::Z);
        let t = Interval::new(0.001, INFINITY);

        let by_ref: &dyn Hittable = &sphere;
        let direct = sphere.hit(&ray, &t).map(|r| r.t);
        assert_eq!(Hittable::hit(&by_ref, &ray, &t).map(|r| r.t), direct);

        let shared: Arc<dyn Hittable> = Arc::new(unit_sphere());
        assert_eq!(shared.hit(&ray, &t).map(|r| r.t), direct);
        assert_eq!(shared.bounding_box(), sphere.bounding_box());
    }
}
