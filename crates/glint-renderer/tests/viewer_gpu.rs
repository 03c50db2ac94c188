//! Debug texture viewer on a real (or software) adapter.

use glint_renderer::gpu::{read_texture_rgba8, HeadlessGpu};
use glint_renderer::textures::{create_radial_gradient_texture, create_red_texture};
use glint_renderer::{PhysicalSize, TextureViewer};

const WIDTH: u32 = 64;
const HEIGHT: u32 = 48;
const FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

fn gpu() -> Option<HeadlessGpu> {
    match HeadlessGpu::new_blocking() {
        Ok(gpu) => Some(gpu),
        Err(e) => {
            eprintln!("skipping GPU test: {e}");
            None
        }
    }
}

fn target(device: &wgpu::Device) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some("viewer test target"),
        size: wgpu::Extent3d {
            width: WIDTH,
            height: HEIGHT,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_SRC,
        view_formats: &[],
    })
}

fn pixel(pixels: &[u8], x: u32, y: u32) -> [u8; 4] {
    let i = ((y * WIDTH + x) * 4) as usize;
    [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]]
}

#[test]
fn placement_uniform_is_written_only_on_size_change() {
    let Some(gpu) = gpu() else { return };
    let viewer = TextureViewer::new(&gpu.device, FORMAT).unwrap();
    let red = create_red_texture(&gpu.device, &gpu.queue, 4, 4).unwrap();
    let mut viewed = viewer.bind(&gpu.device, red);

    assert!(viewed.set_target_size(&gpu.queue, PhysicalSize::new(WIDTH, HEIGHT)));
    assert!(!viewed.set_target_size(&gpu.queue, PhysicalSize::new(WIDTH, HEIGHT)));
    assert!(viewed.set_target_size(&gpu.queue, PhysicalSize::new(32, 32)));
    assert_eq!(viewed.texture().size, PhysicalSize::new(4, 4));
}

#[test]
fn transparent_texels_show_the_blue_backdrop() {
    let Some(gpu) = gpu() else { return };
    let viewer = TextureViewer::new(&gpu.device, FORMAT).unwrap();
    let disc = create_radial_gradient_texture(&gpu.device, &gpu.queue, 64).unwrap();
    let mut viewed = viewer.bind(&gpu.device, disc);

    let output = target(&gpu.device);
    let view = output.create_view(&wgpu::TextureViewDescriptor::default());
    // two frames through the same binding
    for _ in 0..2 {
        let mut encoder = gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor { label: None });
        viewer.render(&gpu.queue, &mut encoder, &view, &mut viewed, WIDTH, HEIGHT);
        gpu.queue.submit(std::iter::once(encoder.finish()));
    }

    let pixels = read_texture_rgba8(&gpu.device, &gpu.queue, &output).unwrap();
    assert_eq!(pixel(&pixels, 0, 0), [0, 0, 255, 255]);
    assert_eq!(pixel(&pixels, WIDTH - 1, HEIGHT - 1), [0, 0, 255, 255]);
    assert_eq!(pixel(&pixels, WIDTH / 2, HEIGHT / 2), [255, 255, 255, 255]);
}
