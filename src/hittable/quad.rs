use crate::*;

/// Six quads forming the axis-aligned box spanned by `a` and `b`.
pub fn make_box(a: Point, b: Point, mat: Arc<dyn Material>) -> HittableList {
    let mut sides = HittableList::new();
    let min = a.min(b);
    let max = a.max(b);

    let dx = Vector::new(max.x - min.x, 0.0, 0.0);
    let dy = Vector::new(0.0, max.y - min.y, 0.0);
    let dz = Vector::new(0.0, 0.0, max.z - min.z);

    sides.add(Arc::new(Quad::new(Point::new(min.x, min.y, max.z), dx, dy, mat.clone()))); // front
    sides.add(Arc::new(Quad::new(Point::new(max.x, min.y, max.z), -dz, dy, mat.clone()))); // right
    sides.add(Arc::new(Quad::new(Point::new(max.x, min.y, min.z), -dx, dy, mat.clone()))); // back
    sides.add(Arc::new(Quad::new(Point::new(min.x, min.y, min.z), dz, dy, mat.clone()))); // left
    sides.add(Arc::new(Quad::new(Point::new(min.x, max.y, max.z), dx, -dz, mat.clone()))); // top
    sides.add(Arc::new(Quad::new(Point::new(min.x, min.y, min.z), dx, dz, mat))); // bottom
    sides
}

/// Parallelogram with corner `q` and edges `u`, `v`. The normal is `u × v`.
pub struct Quad {
    q: Point,
    u: Vector,
    v: Vector,
    n: Vector,
    w: Vector,
    d: Float,
    mat: Arc<dyn Material>,
    bbox: AABB,
}

impl Quad {
    pub fn new(q: Point, u: Vector, v: Vector, mat: Arc<dyn Material>) -> Self {
        let a = AABB::enclosing_point(&q, &(q + u + v));
        let b = AABB::enclosing_point(&(q + u), &(q + v));
        let bbox = AABB::enclosing_volume(&a, &b);
        let normal = u.cross(v);
        let w = normal / normal.length_squared();
        let n = normal.normalize();
        let d = n.dot(q);
        Self { q, u, v, n, w, d, mat, bbox }
    }
    fn is_interior(a: Float, b: Float) -> bool {
        const UNIT: Interval = Interval { min: 0.0, max: 1.0 };
        UNIT.contains(a) && UNIT.contains(b)
    }
}

impl Hittable for Quad {
    fn hit(&self, ray: &Ray, t: &Interval) -> Option<HitRecord<'_>> {
        let denom = ray.dir.dot(self.n);
        if denom.abs() < 1e-8 {
            return None;
        }
        let root = (self.d - self.n.dot(ray.orig)) / denom;
        if !t.contains(root) {
            return None;
        }
        let p = ray.at(root);
        let planar_p = p - self.q;
        let alpha = self.w.dot(planar_p.cross(self.v));
        let beta = self.w.dot(self.u.cross(planar_p));
        if !Quad::is_interior(alpha, beta) {
            return None;
        }
        Some(HitRecord { t: root, p, normal: self.n, mat: self.mat.as_ref() })
    }
    fn bounding_box(&self) -> Option<AABB> {
        Some(self.bbox)
    }
}
