use crate::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: Float,
    pub max: Float,
}

impl Add<Float> for &Interval {
    type Output = Interval;
    fn add(self, rhs: Float) -> Self::Output {
        let min = self.min + rhs;
        let max = self.max + rhs;
        Self::Output { min, max }
    }
}

impl Interval {
    pub const NONE: Self = Self { min: INFINITY, max: NEG_INFINITY };
    pub const ALL: Self = Self { min: NEG_INFINITY, max: INFINITY };
    pub fn new(min: Float, max: Float) -> Self {
        Self { min, max }
    }
    pub fn len(&self) -> Float {
        self.max - self.min
    }
    pub fn is_empty(&self) -> bool {
        self.max < self.min
    }
    pub fn contains(&self, x: Float) -> bool {
        self.min <= x && x <= self.max
    }
    pub fn surrounds(&self, x: Float) -> bool {
        self.min < x && x < self.max
    }
    pub fn clamp(&self, x: Float) -> Float {
        x.clamp(self.min, self.max)
    }
    pub fn expanded(&self, d: Float) -> Interval {
        Interval { min: self.min - d, max: self.max + d }
    }
    pub fn ordered(x: Float, y: Float) -> Self {
        let (min, max) = if x >= y { (y, x) } else { (x, y) };
        Self { min, max }
    }
    pub fn enclosing(a: &Self, b: &Self) -> Self {
        let min = a.min.min(b.min);
        let max = a.max.max(b.max);
        Interval { min, max }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub orig: Point,
    pub dir: Vector,
}

impl Ray {
    pub fn new(orig: Point, dir: Vector) -> Self {
        Self { orig, dir }
    }
    pub fn at(&self, t: Float) -> Point {
        self.orig + t * self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ray_at() {
        let eps = 1e-9;
        let ray = Ray::new(Point::new(1., 0., 0.), Vector::new(-1., 1., 0.));
        assert!(ray.at(0.0).distance_squared(ray.orig) < eps);
        assert!(ray.at(1.0).distance_squared(ray.orig + ray.dir) < eps);
        assert!(ray.at(2.0).distance_squared(Point::new(-1., 2., 0.)) < eps);
    }

    #[test]
    fn interval_bounds() {
        let i = Interval::new(0.0, 1.0);
        assert!(i.contains(0.0) && i.contains(1.0));
        assert!(!i.surrounds(0.0) && !i.surrounds(1.0));
        assert!(i.surrounds(0.5));
        assert_eq!(i.clamp(2.0), 1.0);
        assert_eq!(i.len(), 1.0);
    }

    #[test]
    fn interval_none_is_empty() {
        assert!(Interval::NONE.is_empty());
        assert!(!Interval::NONE.contains(0.0));
        assert!(Interval::ALL.surrounds(1e300));
    }

    #[test]
    fn interval_ordered_and_enclosing() {
        assert_eq!(Interval::ordered(3.0, -1.0), Interval::new(-1.0, 3.0));
        let a = Interval::new(0.0, 1.0);
        let b = Interval::new(2.0, 5.0);
        assert_eq!(Interval::enclosing(&a, &b), Interval::new(0.0, 5.0));
        assert_eq!(Interval::enclosing(&Interval::NONE, &a), a);
    }

    #[test]
    fn interval_shift_and_expand() {
        let i = Interval::new(-1.0, 1.0);
        assert_eq!(&i + 2.0, Interval::new(1.0, 3.0));
        assert_eq!(i.expanded(0.5), Interval::new(-1.5, 1.5));
    }
}
