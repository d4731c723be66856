#![allow(clippy::upper_case_acronyms)]
use glam::DVec3;
use rand::distributions::Uniform;
use rand::prelude::*;
use std::cell::RefCell;
use std::f64::{INFINITY, NEG_INFINITY};
use std::ops::{Add, Index};
use std::sync::Arc;

pub mod aabb;
pub mod bvh;
pub mod camera;
pub mod config;
pub mod hitrecord;
pub mod hittable;
pub mod material;
pub mod math;
pub mod scene;

pub use aabb::*;
pub use bvh::*;
pub use camera::*;
pub use config::*;
pub use hitrecord::*;
pub use hittable::*;
pub use material::*;
pub use math::*;

pub type Color = DVec3;
pub type Point = DVec3;
pub type Vector = DVec3;
pub type Float = f64;

pub const BLUE: Color = Color { x: 0.7, y: 0.8, z: 1.0 };

thread_local! {
    static PIXEL_RNG: RefCell<(ThreadRng, Uniform<Float>)> = RefCell::new((
        thread_rng(),
        Uniform::new(-0.5, 0.5)
    ));
}

thread_local! {
    static SQUARE_RNG: RefCell<(ThreadRng, Uniform<Float>)> = RefCell::new((
        thread_rng(),
        Uniform::new(-1.0, 1.0)
    ));
}

pub trait Utils {
    fn random_unit_vector() -> Self;
    fn random_on_pixel() -> Self;
    fn random() -> Self;
    fn near_zero(&self) -> bool;
}

impl Utils for Vector {
    fn random_unit_vector() -> Self {
        loop {
            let p = Self::random();
            let lsq = p.length_squared();
            if 1e-160 < lsq && lsq <= 1.0 {
                return p / lsq.sqrt();
            }
        }
    }
    fn random_on_pixel() -> Point {
        PIXEL_RNG.with(|rng| {
            let (rng, distribution) = &mut *rng.borrow_mut();
            Point {
                x: distribution.sample(rng),
                y: distribution.sample(rng),
                z: 0.0,
            }
        })
    }
    fn random() -> Self {
        SQUARE_RNG.with(|rng| {
            let (rng, distribution) = &mut *rng.borrow_mut();
            Self {
                x: distribution.sample(rng),
                y: distribution.sample(rng),
                z: distribution.sample(rng),
            }
        })
    }
    fn near_zero(&self) -> bool {
        let t = 1e-8;
        (self.x.abs() < t) && (self.y.abs() < t) && (self.z.abs() < t)
    }
}
