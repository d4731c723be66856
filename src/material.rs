use crate::*;

pub trait Material: Send + Sync {
    /// Attenuation and scattered ray, or `None` if the ray is absorbed.
    fn scatter(&self, _ray: &Ray, _record: &HitRecord) -> Option<(Color, Ray)> {
        None
    }
    fn emitted(&self, _ray: &Ray, _record: &HitRecord) -> Color {
        Color::ZERO
    }
}

pub struct Lambertian {
    albedo: Color,
}

pub struct Metal {
    albedo: Color,
    fuzz: Float,
}

/// Emits on the side its surface normal faces. Wrap the shape in
/// `FlipNormals` to light the other side.
pub struct DiffuseLight {
    emit: Color,
}

impl Lambertian {
    pub fn from_color(albedo: Color) -> Self {
        Self { albedo }
    }
}

impl Metal {
    pub fn new(albedo: Color, fuzz: Float) -> Self {
        Self { albedo, fuzz: fuzz.min(1.0) }
    }
}

impl DiffuseLight {
    pub fn from_color(emit: Color) -> Self {
        Self { emit }
    }
}

impl Material for Lambertian {
    fn scatter(&self, _ray: &Ray, record: &HitRecord) -> Option<(Color, Ray)> {
        let dir = record.normal + Vector::random_unit_vector();
        let dir = if dir.near_zero() { record.normal } else { dir };
        Some((self.albedo, Ray { orig: record.p, dir }))
    }
}

impl Material for Metal {
    fn scatter(&self, ray: &Ray, record: &HitRecord) -> Option<(Color, Ray)> {
        let reflected = ray.dir.normalize().reflect(record.normal);
        let dir = reflected + self.fuzz * Vector::random_unit_vector();
        if dir.dot(record.normal) > 0.0 {
            Some((self.albedo, Ray { orig: record.p, dir }))
        } else {
            None
        }
    }
}

impl Material for DiffuseLight {
    fn emitted(&self, ray: &Ray, record: &HitRecord) -> Color {
        if record.front_face(ray) {
            self.emit
        } else {
            Color::ZERO
        }
    }
}
