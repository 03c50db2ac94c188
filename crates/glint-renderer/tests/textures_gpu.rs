//! Generated texture uploads on a real (or software) adapter.

use glint_common::Color;
use glint_renderer::gpu::{read_texture_rgba8, HeadlessGpu};
use glint_renderer::textures::{
    create_radial_gradient_texture, create_red_texture, create_solid_texture,
    radial_gradient_pixels,
};

fn gpu() -> Option<HeadlessGpu> {
    match HeadlessGpu::new_blocking() {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            eprintln!("skipping GPU test: {e}");
            None
        }
    }
}

#[test]
fn radial_gradient_uploads_generated_pixels() {
    let Some(gpu) = gpu() else { return };
    let texture = create_radial_gradient_texture(&gpu.device, &gpu.queue, 64).unwrap();
    assert_eq!((texture.size.width, texture.size.height), (64, 64));

    let pixels = read_texture_rgba8(&gpu.device, &gpu.queue, &texture.texture).unwrap();
    assert_eq!(pixels, radial_gradient_pixels(64).unwrap());
}

#[test]
fn red_texture_is_opaque_red() {
    let Some(gpu) = gpu() else { return };
    let texture = create_red_texture(&gpu.device, &gpu.queue, 64, 2).unwrap();
    let pixels = read_texture_rgba8(&gpu.device, &gpu.queue, &texture.texture).unwrap();
    assert!(pixels.chunks(4).all(|px| px == [255, 0, 0, 255]));
}

#[test]
fn overflowing_sizes_return_none() {
    let Some(gpu) = gpu() else { return };
    assert!(create_radial_gradient_texture(&gpu.device, &gpu.queue, u32::MAX).is_none());
    assert!(create_red_texture(&gpu.device, &gpu.queue, u32::MAX, u32::MAX).is_none());
}

#[test]
fn sizes_past_the_device_limit_return_none() {
    let Some(gpu) = gpu() else { return };
    let over = gpu.device.limits().max_texture_dimension_2d + 1;
    assert!(create_radial_gradient_texture(&gpu.device, &gpu.queue, over).is_none());
    assert!(create_solid_texture(&gpu.device, &gpu.queue, over, 1, Color::WHITE).is_none());
    assert!(create_red_texture(&gpu.device, &gpu.queue, 1, over).is_none());
}

#[test]
fn zero_sizes_return_none() {
    let Some(gpu) = gpu() else { return };
    assert!(create_radial_gradient_texture(&gpu.device, &gpu.queue, 0).is_none());
    assert!(create_red_texture(&gpu.device, &gpu.queue, 0, 8).is_none());
}
