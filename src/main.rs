//! Command-line front end for the ray / ellipsoid intersection solver.
//!
//! Takes a sensor line-of-sight direction and origin offset in the
//! Earth-centered frame (kilometers) and prints where the ray first strikes
//! the WGS-84 reference ellipsoid, one coordinate per line, or
//! `No intersection` when the forward ray misses the surface.

use clap::Parser;
use nalgebra::Vector3;

use groundpoint::ellipsoid::Ellipsoid;
use groundpoint::intersection::{ray_ellipsoid_intersection, Ray};

#[derive(Parser, Debug)]
#[command(name = "groundpoint")]
#[command(about = "Intersect a line-of-sight ray with the WGS-84 ellipsoid", long_about = None)]
struct Cli {
    /// x-component of the ray direction
    d_l_x: f64,

    /// y-component of the ray direction
    d_l_y: f64,

    /// z-component of the ray direction
    d_l_z: f64,

    /// x-component offset of the ray origin, km
    c_l_x: f64,

    /// y-component offset of the ray origin, km
    c_l_y: f64,

    /// z-component offset of the ray origin, km
    c_l_z: f64,
}

fn main() {
    let cli = Cli::parse();

    let ray = Ray::new(
        Vector3::new(cli.c_l_x, cli.c_l_y, cli.c_l_z),
        Vector3::new(cli.d_l_x, cli.d_l_y, cli.d_l_z),
    );

    match ray_ellipsoid_intersection(&ray, &Ellipsoid::wgs84()) {
        Ok(Some(hit)) => {
            println!("{}", hit.point.x);
            println!("{}", hit.point.y);
            println!("{}", hit.point.z);
        }
        Ok(None) => println!("No intersection"),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
