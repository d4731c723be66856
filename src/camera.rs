use crate::*;
use rayon::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

pub struct Camera {
    background: Color,
    image_width: usize,
    image_height: usize,
    samples_per_pixel: usize,
    max_depth: usize,
    center: Point,
    pixel_corner: Point,
    pixel_delta_u: Vector,
    pixel_delta_v: Vector,
}

/// Pixels in row-major order, top row first.
pub struct Image {
    pub width: usize,
    pub height: usize,
    pub pixels: Vec<Color>,
}

impl Camera {
    pub fn new(
        lookfrom: Point,
        lookat: Point,
        vup: Vector,
        background: Color,
        vfov: Float,
        config: &RenderConfig,
    ) -> Self {
        let image_width = config.image_width.max(1);
        let image_height = config.image_height();
        let focus_dist = (lookfrom - lookat).length();
        let w = (lookfrom - lookat).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);
        let h = (vfov / 2.).to_radians().tan();
        let viewport_h = 2.0 * h * focus_dist;
        let viewport_w = viewport_h * (image_width as Float / image_height as Float);
        let center = lookfrom;
        let viewport_u = viewport_w * u;
        let viewport_v = viewport_h * -v;
        let pixel_delta_u = viewport_u / image_width as Float;
        let pixel_delta_v = viewport_v / image_height as Float;
        let viewport_upper_left = center - (focus_dist * w) - 0.5 * (viewport_u + viewport_v);
        let pixel_corner = viewport_upper_left + 0.5 * (pixel_delta_v + pixel_delta_u);
        Camera {
            background,
            image_width,
            image_height,
            samples_per_pixel: config.samples_per_pixel.max(1),
            max_depth: config.max_depth,
            center,
            pixel_corner,
            pixel_delta_u,
            pixel_delta_v,
        }
    }

    pub fn render(&self, world: &dyn Hittable) -> Image {
        log::info!(
            "rendering {}x{} at {} spp, depth {}",
            self.image_width,
            self.image_height,
            self.samples_per_pixel,
            self.max_depth
        );
        let start = Instant::now();
        let inverse_density = (self.samples_per_pixel as Float).recip();
        let mut pixels = vec![Color::ZERO; self.image_height * self.image_width];
        pixels.par_iter_mut().enumerate().for_each(|(x, c)| {
            let j = x / self.image_width;
            let i = x % self.image_width;
            *c = (0..self.samples_per_pixel)
                .map(|_| self.color(&self.get_ray(i, j), world, self.max_depth))
                .sum::<Color>()
                * inverse_density;
        });
        log::info!("rendered in {:.2?}", start.elapsed());
        Image { width: self.image_width, height: self.image_height, pixels }
    }

    fn color(&self, ray: &Ray, world: &dyn Hittable, depth: usize) -> Color {
        if depth == 0 {
            return Color::ZERO;
        }
        match world.hit(ray, &Interval { min: 0.001, max: INFINITY }) {
            Some(record) => {
                let emitted = record.mat.emitted(ray, &record);
                match record.mat.scatter(ray, &record) {
                    Some((attenuation, scattered)) => {
                        emitted + attenuation * self.color(&scattered, world, depth - 1)
                    }
                    None => emitted,
                }
            }
            None => self.background,
        }
    }

    fn get_ray(&self, i: usize, j: usize) -> Ray {
        let offset = Vector::random_on_pixel();
        let pixel_sample = self.pixel_corner
            + ((i as Float + offset.x) * self.pixel_delta_u)
            + ((j as Float + offset.y) * self.pixel_delta_v);
        Ray { orig: self.center, dir: pixel_sample - self.center }
    }
}

fn linear_to_gamma(linear: Float) -> Float {
    if linear > 0.0 {
        linear.sqrt()
    } else {
        0.0
    }
}

fn to_byte(linear: Float) -> u8 {
    const COLORSPACE: Interval = Interval { min: 0.000, max: 0.999 };
    let linear = if linear.is_nan() { 0.0 } else { linear };
    (256. * COLORSPACE.clamp(linear_to_gamma(linear))) as u8
}

impl Image {
    /// Plain-text PPM (P3), gamma 2.
    pub fn write_ppm<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "P3\n{} {}\n255", self.width, self.height)?;
        for c in &self.pixels {
            writeln!(out, "{} {} {}", to_byte(c.x), to_byte(c.y), to_byte(c.z))?;
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> RenderConfig {
        RenderConfig { image_width: 4, aspect_ratio: 2.0, samples_per_pixel: 2, max_depth: 4 }
    }

    #[test]
    fn empty_world_shows_background() {
        let camera = Camera::new(Point::ZERO, -Point::Z, Vector::Y, BLUE, 90.0, &tiny());
        let image = camera.render(&HittableList::new());
        assert_eq!((image.width, image.height), (4, 2));
        assert!(image.pixels.iter().all(|c| c.distance(BLUE) < 1e-9));
    }

    #[test]
    fn light_fills_view() {
        let light: Arc<dyn Material> = Arc::new(DiffuseLight::from_color(Color::ONE));
        let mut world = HittableList::new();
        // faces +z, towards the camera
        let corner = Point::new(-50.0, -50.0, -1.0);
        world.add(Arc::new(Quad::new(corner, Vector::X * 100.0, Vector::Y * 100.0, light)));
        let camera = Camera::new(Point::ZERO, -Point::Z, Vector::Y, Color::ZERO, 90.0, &tiny());
        let image = camera.render(&world);
        assert!(image.pixels.iter().all(|c| c.distance(Color::ONE) < 1e-9));
    }

    #[test]
    fn zero_depth_is_black() {
        let config = RenderConfig { max_depth: 0, ..tiny() };
        let camera = Camera::new(Point::ZERO, -Point::Z, Vector::Y, BLUE, 90.0, &config);
        let image = camera.render(&HittableList::new());
        assert!(image.pixels.iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn ppm_output() {
        let pixels = vec![Color::ONE * 4.0, Color::new(0.25, 0.0, -1.0)];
        let image = Image { width: 2, height: 1, pixels };
        let mut out = Vec::new();
        image.write_ppm(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "P3\n2 1\n255\n255 255 255\n128 0 0\n");
    }
}
