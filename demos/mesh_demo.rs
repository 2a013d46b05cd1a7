//! Demonstration of planet mesh generation

use procedural_planet::*;

fn main() -> Result<()> {
    env_logger::init();

    println!("Generating planet...");

    let config = PlanetConfigBuilder::new()
        .seed(42)
        .subdivisions(6)?
        .build()?;

    let planet = ProceduralPlanet::generate(config)?;
    let stats = planet.stats();

    println!("\nMesh statistics:");
    println!("  Triangles: {}", stats.triangle_count);
    println!("  Vertices: {}", stats.vertex_count);
    println!("  Pool vertices: {}", stats.pool_vertex_count);
    println!("  Elevation: {:.3} .. {:.3}", stats.min_elevation, stats.max_elevation);
    println!("  Ocean: {:.1}%", stats.submerged_fraction * 100.0);
    println!(
        "  Buffer: {} bytes ({:.2} MB)",
        stats.buffer_bytes,
        stats.buffer_bytes as f32 / 1024.0 / 1024.0
    );

    println!("\nVertex layout (stride {} floats):", VERTEX_LAYOUT.stride);
    for attribute in VERTEX_LAYOUT.attributes {
        println!(
            "  location {}: {:8} offset {} floats ({} bytes), {} components",
            attribute.location,
            attribute.name,
            attribute.offset,
            attribute.byte_offset(),
            attribute.components
        );
    }

    // Welded midpoints: same triangles, fewer distinct vertices
    let welded = PlanetConfig {
        weld_midpoints: true,
        ..config
    };
    let welded_planet = ProceduralPlanet::generate(welded)?;
    println!(
        "\nWelded pool: {} vertices (vs {})",
        welded_planet.stats().pool_vertex_count,
        stats.pool_vertex_count
    );

    println!("\n=== Subdivision levels ===");
    for subdivisions in 0..=7 {
        let config = PlanetConfigBuilder::new()
            .seed(42)
            .subdivisions(subdivisions)?
            .build()?;
        let planet = ProceduralPlanet::generate(config)?;
        println!(
            "level {}: {} triangles, {:.2} MB",
            subdivisions,
            planet.stats().triangle_count,
            planet.stats().buffer_bytes as f32 / 1024.0 / 1024.0
        );
    }

    Ok(())
}
