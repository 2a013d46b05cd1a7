//! Demonstration of the terrain noise and color gradient

use procedural_planet::{
    ColorGradient, PlanetConfigBuilder, TerrainDisplacer, TerrainNoise, Vec3,
};

fn main() -> procedural_planet::Result<()> {
    env_logger::init();

    println!("Terrain System Demo\n");

    let config = PlanetConfigBuilder::new().seed(42).build()?;
    let noise = TerrainNoise::from_config(&config);
    let displacer = TerrainDisplacer::from_config(&config);
    let gradient = ColorGradient::terrain();

    println!("Sampling terrain at various positions:");
    println!("{:-<60}", "");

    let positions = vec![
        (Vec3::new(0.0, 1.0, 0.0), "North Pole"),
        (Vec3::new(0.0, -1.0, 0.0), "South Pole"),
        (Vec3::new(1.0, 0.0, 0.0), "Equator (0°)"),
        (Vec3::new(0.0, 0.0, 1.0), "Equator (90°)"),
        (Vec3::new(0.707, 0.707, 0.0), "Mid-latitude"),
        (Vec3::new(0.577, 0.577, 0.577), "Diagonal"),
    ];

    for (pos, label) in positions {
        let elevation = displacer.elevation(pos, &noise.base, &noise.ridges);
        let [r, g, b, _] = gradient.color_at(elevation);
        println!(
            "{:16} -> elevation {:+.3}, color ({:.2}, {:.2}, {:.2})",
            label, elevation, r, g, b
        );
    }

    println!("\n{:-<60}", "");
    println!("Elevation bands over a sample grid:");
    println!("{:-<60}", "");

    let samples = 1000;
    let mut counts = [0usize; 4];
    for i in 0..samples {
        let theta = 2.0 * std::f32::consts::PI * (i as f32 / samples as f32);
        let phi = std::f32::consts::PI * ((i as f32 * 0.618) % 1.0);
        let pos = Vec3::new(phi.sin() * theta.cos(), phi.cos(), phi.sin() * theta.sin());

        let elevation = displacer.elevation(pos, &noise.base, &noise.ridges);
        let band = match elevation {
            e if e < 0.0 => 0,
            e if e < 0.125 => 1,
            e if e < 0.75 => 2,
            _ => 3,
        };
        counts[band] += 1;
    }

    for (label, count) in ["Water", "Coast", "Highland", "Peak"].iter().zip(counts) {
        let percentage = (count as f32 / samples as f32) * 100.0;
        println!("{:10} : {:4} samples ({:5.1}%)", label, count, percentage);
    }

    Ok(())
}
