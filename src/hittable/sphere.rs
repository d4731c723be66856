use crate::*;
pub struct Sphere {
    center: Point,
    radius: Float,
    mat: Arc<dyn Material>,
    bbox: AABB,
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>> {
        let oc = self.center - ray.orig;
        let a = ray.dir.length_squared();
        let h = ray.dir.dot(oc);
        let c = oc.length_squared() - self.radius * self.radius;
        let discriminant = h * h - a * c;
        if discriminant < 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();
        let mut root = (h - sqrtd) / a;
        if !t.surrounds(root) {
            root = (h + sqrtd) / a;
            if !t.surrounds(root) {
                return None;
            }
        }
        let p = ray.at(root);
        let normal = (p - self.center) / self.radius;
        Some(HitRecord { t: root, p, normal, mat: self.mat.as_ref() })
    }
    fn bounding_box(&self) -> Option<AABB> {
        Some(self.bbox)
    }
}

impl Sphere {
    pub fn new(center: Point, radius: Float, mat: Arc<dyn Material>) -> Self {
        let r = Vector::ONE * radius;
        let bbox = AABB::enclosing_point(&(center - r), &(center + r));
        Sphere { center, radius, mat, bbox }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hittable::tests::*;

    #[test]
    fn nearest_root_first() {
        let sphere = Sphere::new(Point::new(0.0, 0.0, 3.0), 1.0, gray());
        let ray = Ray::new(Point::ZERO, Vector::Z);
        let hit = sphere.hit(&ray, &Interval::new(0.001, INFINITY)).unwrap();
        assert!((hit.t - 2.0).abs() < 1e-9);
        assert!(approx(hit.normal, -Vector::Z));
    }

    #[test]
    fn far_root_when_near_is_out_of_range() {
        let sphere = Sphere::new(Point::new(0.0, 0.0, 3.0), 1.0, gray());
        let ray = Ray::new(Point::ZERO, Vector::Z);
        let hit = sphere.hit(&ray, &Interval::new(2.5, INFINITY)).unwrap();
        assert!((hit.t - 4.0).abs() < 1e-9);
        assert!(approx(hit.normal, Vector::Z));
        assert!(sphere.hit(&ray, &Interval::new(4.5, INFINITY)).is_none());
    }

    #[test]
    fn normal_is_unit_length() {
        let sphere = Sphere::new(Point::new(1.0, 2.0, 3.0), 2.5, gray());
        let ray = Ray::new(Point::new(-5.0, 0.0, 0.0), Vector::new(1.0, 0.3, 0.4));
        let hit = sphere.hit(&ray, &Interval::new(0.001, INFINITY)).unwrap();
        assert!((hit.normal.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn bounding_box() {
        let bbox = unit_sphere().bounding_box().unwrap();
        assert_eq!(bbox.min(), Point::splat(-1.0));
        assert_eq!(bbox.max(), Point::splat(1.0));
    }
}
