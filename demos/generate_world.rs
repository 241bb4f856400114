//! Example: Generate a wrapping hex world and print it as text
//!
//! Run with `cargo run --example generate_world -- [seed] [radius]`.

use hex_wrap_world::*;

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let seed = args.next().and_then(|s| s.parse().ok()).unwrap_or(42);
    let radius = args.next().and_then(|s| s.parse().ok()).unwrap_or(8);

    println!("Hex World Generation Example");
    println!("============================\n");

    let config = WorldConfigBuilder::new()
        .seed(seed)
        .radius(radius)?
        .build()?;

    println!("Configuration:");
    println!("  Seed: {}", config.seed);
    println!("  Radius: {}", config.radius);
    println!("  Cell Count: {}", config.cell_count());
    println!("  Step Budget: {}", config.step_budget());
    println!();

    let world = HexWorld::generate(config)?;
    let reachable = world.reachable_from(config.start);

    println!("Statistics:");
    println!("  Open cells: {}", world.open_count());
    println!("  Reachable from start: {}", reachable.len());
    println!();

    // One text row per offset row, two characters per column.
    let r = radius;
    for y in -r - r / 2 - 1..=r + r / 2 + 1 {
        let mut line = String::new();
        for x in -r..=r {
            let cell = offset_to_axial(Offset::new(x, y));
            let c = if !world.region().contains(cell) {
                ' '
            } else if cell == Axial::ORIGIN {
                '@'
            } else if world.is_open(cell) {
                '.'
            } else {
                '#'
            };
            line.push(c);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }

    // Sample the outline of a viewport straddling the region edge.
    let layout = HexLayout::new(10.0)?;
    let edge = layout.axial_to_pixel(Axial::new(radius, 0));
    let outline = visible_polygons(&world, &layout, edge - DVec2::splat(40.0), edge + DVec2::splat(40.0));
    println!(
        "\nViewport at region edge: {} hexes, {} open",
        outline.len(),
        outline.open_count()
    );

    println!("\nGeneration complete!");
    Ok(())
}
