// Minimal check that the compositing pipeline works without any input images

use image::Rgb;

use glasses_compositor::{
    color::Color,
    composition::{colorize_frame, combine_layers, generate_mask, texture_layer},
    config::CompositorConfig,
    raster::{resize, Frame},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Testing Glasses-Compositor core pipeline");
    let config = CompositorConfig::default();

    // 1. Synthetic frame: two bright lens rims on black
    println!("\n1. Building frame...");
    let rims = Frame::from_fn(400, 160, |x, y| {
        let dy = y as f32 - 80.0;
        let near_rim = |cx: f32| {
            let d = ((x as f32 - cx).powi(2) + dy.powi(2)).sqrt();
            (55.0..=70.0).contains(&d)
        };
        if near_rim(110.0) || near_rim(290.0) { Rgb([200, 200, 200]) } else { Rgb([5, 5, 5]) }
    });
    let frame = resize(&rims, config.output_width)?;
    println!("   Frame: {}x{}", frame.width(), frame.height());

    // 2. Mask
    println!("\n2. Generating mask...");
    let mask = generate_mask(&frame, config.frame_threshold);
    println!("   Selected pixels: {}", mask.count_set());

    // 3. Color layer
    println!("\n3. Coloring frame red...");
    let color_layer = colorize_frame(&frame, &mask, Color::RED)?;

    // 4. Texture layer: diagonal stripes
    println!("\n4. Applying gold texture...");
    let stripes = Frame::from_fn(200, 80, |x, y| {
        if (x + y) % 12 < 4 { Rgb([240, 240, 240]) } else { Rgb([20, 20, 20]) }
    });
    let texture = texture_layer(&frame, &mask, &stripes, Color::GOLD, config.texture_threshold)?;

    // 5. Combine
    println!("\n5. Combining layers...");
    let result = combine_layers(&frame, &mask, &color_layer, &texture)?;

    match result.save("minimal_test_output.png") {
        Ok(()) => println!("   Output saved to: minimal_test_output.png"),
        Err(e) => println!("   Could not save file: {}", e),
    }

    println!("\nPipeline completed.");
    Ok(())
}
