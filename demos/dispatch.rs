//! End-to-end dispatch on a small 2D scenario.

use cabpool::{Cab, Commuter, Dispatcher, Vector};

fn main() {
    // Three neighborhoods of commuters, given in the "x,y" wire form the
    // input collaborator would supply.
    let commuters: Vec<Commuter> = [
        // Near the origin
        "0.0,0.0", "0.1,0.2", "0.2,0.1", "-0.1,0.1",
        // Near (5, 5)
        "5.0,5.0", "5.1,4.9", "4.9,5.1", "5.2,5.2",
        // Near (10, 0)
        "10.0,0.0", "10.1,0.1", "9.9,-0.1", "10.2,0.2",
    ]
    .iter()
    .map(|s| Commuter::new(s.parse::<Vector>().expect("valid point literal")))
    .collect();

    let mut cabs = vec![
        Cab::new(Vector::new(0.5, 0.5)),
        Cab::new(Vector::new(6.0, 6.0)),
        Cab::new(Vector::new(9.0, 0.0)),
    ];

    let report = Dispatcher::new()
        .with_seed(42)
        .run(&commuters, &mut cabs)
        .expect("valid dispatch scenario");

    println!("=== Groups (k = {}) ===", report.groups.len());
    for (i, group) in report.groups.iter().enumerate() {
        println!(
            "  group {} at ({:5.2}, {:5.2}), {} commuters",
            i,
            group.centroid.x,
            group.centroid.y,
            group.commuters.len()
        );
        for commuter in &group.commuters {
            println!("    {commuter}");
        }
    }

    println!("\n=== Assignments ===");
    for assignment in &report.assignments {
        let cab = &cabs[assignment.cab];
        println!(
            "  {cab} -> pickup {} (distance {:.3})",
            assignment.centroid, assignment.distance
        );
    }

    println!("\nTotal Distance Travelled: {:.3}", report.total_distance);
}
