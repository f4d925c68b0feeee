//! Section view walkthrough against the fixture kernel.
//!
//! Run with: cargo run -p linework --example section_view

use linework::{ExtractionPass, SectionRequest, ViewFeature};
use linework_kernel::testkit::{FixtureKernel, FixtureShape};
use linework_math::{Dir3, Point3, Vec3};

fn main() {
    println!("Section View Walkthrough\n");

    let kernel = FixtureKernel::new();
    let mut view = ViewFeature::<FixtureKernel>::new();

    // A 5x20 cylinder, sectioned through its axis by the XZ plane,
    // viewed from above.
    view.set_source(FixtureShape::Cylinder {
        radius: 5.0,
        height: 20.0,
    });
    view.set_section(Some(SectionRequest::new(Point3::origin(), Vec3::y(), 1e-6)));
    view.set_direction(Dir3::new_normalize(Vec3::new(0.0, 0.0, -1.0)));
    view.set_pass(ExtractionPass::WithHidden);

    match view.recompute(&kernel) {
        Ok(geometry) => {
            println!("Edges: {}", geometry.edge_geometry.len());
            for (i, edge) in geometry.edge_geometry.iter().enumerate() {
                let name = geometry
                    .references
                    .edge_name(i)
                    .unwrap_or_else(|| "synthetic".to_string());
                let kinds: Vec<&str> = edge.all_pieces().map(|p| p.kind_name()).collect();
                println!("  {i}: {name} -> {kinds:?}");
            }
            println!("Vertices: {}", geometry.vertex_geometry.len());
            for (i, vertex) in geometry.vertex_geometry.iter().enumerate() {
                println!(
                    "  {i}: ({:.2}, {:.2}) {:?}",
                    vertex.point.x, vertex.point.y, vertex.visibility
                );
            }
            println!(
                "\nAs JSON:\n{}",
                serde_json::to_string_pretty(geometry).unwrap()
            );
        }
        Err(error) => println!("recompute failed: {error}"),
    }
}
