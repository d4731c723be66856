use crate::*;

/// A world ready to render together with the camera that frames it.
pub struct Scene {
    pub world: HittableList,
    pub camera: Camera,
}

impl Scene {
    pub fn render(&self) -> Image {
        self.camera.render(&self.world)
    }
}

/// Cornell box. The ceiling light is built facing up and flipped to shine
/// into the room; the two boxes are modelled at the origin and translated.
pub fn cornell(config: &RenderConfig) -> Scene {
    let config = RenderConfig { aspect_ratio: 1.0, ..*config };
    let camera = Camera::new(
        Point::new(278.0, 278.0, -800.0),
        Point::new(278.0, 278.0, 0.0),
        Vector::Y,
        Color::ZERO,
        40.0,
        &config,
    );
    let mut world = HittableList::new();

    let red: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.65, 0.05, 0.05)));
    let white: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.73, 0.73, 0.73)));
    let green: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.12, 0.45, 0.15)));
    let light: Arc<dyn Material> = Arc::new(DiffuseLight::from_color(Color::new(15.0, 15.0, 15.0)));

    // walls, floor and ceiling all face into the room
    let x = Vector::X * 555.0;
    let y = Vector::Y * 555.0;
    let z = Vector::Z * 555.0;
    world.add(Arc::new(Quad::new(Point::X * 555.0, z, y, green)));
    world.add(Arc::new(Quad::new(Point::ZERO, y, z, red)));
    world.add(Arc::new(Quad::new(Point::Y * 555.0, x, z, white.clone())));
    world.add(Arc::new(Quad::new(Point::ZERO, z, x, white.clone())));
    world.add(Arc::new(Quad::new(Point::Z * 555.0, y, x, white.clone())));

    let lamp = Quad::new(
        Point::new(213.0, 554.0, 227.0),
        Vector::new(0.0, 0.0, 105.0),
        Vector::new(130.0, 0.0, 0.0),
        light,
    );
    world.add(Arc::new(FlipNormals::new(lamp)));

    let tall = make_box(Point::ZERO, Point::new(165.0, 330.0, 165.0), white.clone());
    world.add(Arc::new(Translate::new(tall, Vector::new(265.0, 0.0, 295.0))));

    let short = make_box(Point::ZERO, Point::new(165.0, 165.0, 165.0), white);
    world.add(Arc::new(Translate::new(short, Vector::new(130.0, 0.0, 65.0))));

    log::debug!("cornell box: {} objects", world.len());
    Scene { world: world.into_bvh(), camera }
}

/// Spheres authored at the origin and placed with `Translate`, over an
/// infinite ground plane.
pub fn offset_spheres(config: &RenderConfig) -> Scene {
    let camera = Camera::new(Point::new(13., 2., 3.), Point::ZERO, Vector::Y, BLUE, 20., config);
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::from_color(Color::new(0.5, 0.5, 0.5)));
    world.add(Arc::new(Plane::new(Point::ZERO, Vector::Y, ground)));

    let brown = Arc::new(Lambertian::from_color(Color::new(0.4, 0.2, 0.1)));
    let mirror = Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0));
    let light = Arc::new(DiffuseLight::from_color(Color::new(4.0, 4.0, 4.0)));
    let unit: Arc<dyn Hittable> = Arc::new(Sphere::new(Point::ZERO, 1.0, brown));
    let polished: Arc<dyn Hittable> = Arc::new(Sphere::new(Point::ZERO, 1.0, mirror));
    let lamp: Arc<dyn Hittable> = Arc::new(Sphere::new(Point::ZERO, 0.5, light));

    world.add(Arc::new(Translate::new(unit.clone(), Vector::new(-4.0, 1.0, 0.0))));
    world.add(Arc::new(Translate::new(polished, Vector::new(0.0, 1.0, 0.0))));
    world.add(Arc::new(Translate::new(unit, Vector::new(4.0, 1.0, 0.0))));
    world.add(Arc::new(Translate::new(lamp, Vector::new(2.0, 0.5, 2.0))));

    log::debug!("offset spheres: {} objects", world.len());
    Scene { world: world.into_bvh(), camera }
}
