//! Demonstration of equal-area partitioning and vertex emission

use eq_sphere_partition::*;

fn main() -> Result<()> {
    println!("Partitioning sphere...");

    let config = PartitionConfigBuilder::new()
        .region_count(200)?
        .max_latitude_cutoff(60.0)?
        .collar_twist_seed(42)
        .build()?;

    let partition = Partition::from_config(&config)?;

    println!("Requested {} regions", partition.region_count());
    println!("Ideal region area: {:.6}", partition.ideal_region_area());

    println!("\nCollars:");
    for collar in partition.collars() {
        println!(
            "  {:>2}: {:>7.3}° .. {:>7.3}°  {} regions",
            collar.index,
            collar.top_colatitude.to_degrees(),
            collar.bottom_colatitude.to_degrees(),
            collar.region_count
        );
    }

    let all = emit_vertices(&partition);
    let kept = VertexEmitter::new(&config).emit(&partition);
    println!("\nEmitted {} vertices, {} south of 60°N", all.len(), kept.len());

    if let Some(vertex) = kept.first() {
        println!(
            "First kept vertex: region {} at lat {:.2}°, lon {:.2}°",
            vertex.region,
            vertex.latitude(),
            vertex.longitude()
        );
    }

    Ok(())
}
