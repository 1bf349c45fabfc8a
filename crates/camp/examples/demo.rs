//! Demo application showing basic camp-rs usage.
//!
//! Binds a photo plane to a camera, sweeps the distance and the lens, and
//! prints how the plane is resized to keep filling the frame.
//!
//! Run with `RUST_LOG=debug` to see every recompute.

use camp_rs::*;

fn main() -> Result<()> {
    init()?;
    set_render_frame(RenderFrame::new(1920, 1080))?;

    let camera = register_camera(
        Camera::new("Camera")
            .with_projection(Projection::perspective(18.0, 36.0, 24.0))
            .with_sensor_fit(SensorFit::Horizontal)
            .looking_at(Vec3::new(0.0, 1.6, 8.0), Vec3::new(0.0, 1.0, 0.0), Vec3::Y),
    )?;
    let plane = register_plane(
        Plane::new("photo").with_transform(Transform::from_translation(Vec3::new(0.0, 1.0, 0.0))),
    )?;

    let binding = bind(&plane, &camera)?;
    println!("bound at measured distance {:.3}", get_distance(binding)?);

    for distance in [0.0, 1.0, 2.5, 5.0, 10.0] {
        set_distance(binding, distance)?;
        let (width, height) = get_effective_scale(binding)?;
        println!("distance {distance:>5.2}: plane {width:>7.3} x {height:>7.3}");
    }

    for focal_length in [18.0, 35.0, 50.0, 85.0] {
        camera.set_projection(Projection::perspective(focal_length, 36.0, 24.0))?;
        let (width, height) = get_effective_scale(binding)?;
        println!("{focal_length:>3} mm lens: plane {width:>7.3} x {height:>7.3}");
    }

    camera.rotate(Quat::from_rotation_y(0.5))?;
    println!("after camera rotation, fills frame: {}", fills_frame(binding)?);

    if let Err(err) = set_distance(binding, -1.0) {
        println!("rejected: {err}");
    }

    unbind(binding)?;
    println!("unbound, plane left at {:?}", plane.world_transform()?.translation);

    shutdown();
    Ok(())
}
