use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{texture::Texture, utils::pixel::Rgba};

pub const TEST_IMAGE_SIZE: usize = 100;

pub fn rand_rgba<R: Rng>(rng: &mut R) -> Rgba {
    Rgba::new(
        rng.random::<u8>(),
        rng.random::<u8>(),
        rng.random::<u8>(),
        rng.random::<u8>(),
    )
}

/// Random square image, seeded so failures can be reproduced.
pub fn gen_random_image(size: usize, seed: u64) -> Texture<Rgba> {
    let mut rng = StdRng::seed_from_u64(seed);
    let pixels: Vec<Rgba> = (0..(size * size)).map(|_| rand_rgba(&mut rng)).collect();
    Texture::from_slice(size as u32, size as u32, &pixels)
}

/// Horizontal black to white ramp.
pub fn gen_gradient_image(width: u32, height: u32) -> Texture<Rgba> {
    let pixels: Vec<Rgba> = (0..height)
        .flat_map(|_| {
            (0..width).map(move |x| {
                let value = (x * 255 / (width - 1).max(1)) as u8;
                Rgba::opaque(value, value, value)
            })
        })
        .collect();
    Texture::from_slice(width, height, &pixels)
}

pub fn random_palette(size: usize, seed: u64) -> Vec<Rgba> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size)
        .map(|_| rand_rgba(&mut rng).with_alpha(u8::MAX))
        .collect()
}

pub fn black_white() -> Vec<Rgba> {
    vec![Rgba::opaque(0, 0, 0), Rgba::opaque(255, 255, 255)]
}
