//! Integration tests for the camp-rs public API.
//!
//! Note: camp keeps its scene in process-wide state (OnceLock), so all
//! checks run in sequence inside a single test function.

use camp_rs::*;

fn reset() {
    shutdown();
    init().expect("init failed");
}

/// Main API test that runs all subtests in sequence.
#[test]
fn api_tests() {
    // ========================================================================
    // LIFECYCLE
    // ========================================================================
    {
        assert!(matches!(
            register_camera(Camera::new("early")),
            Err(CampError::NotInitialized)
        ));

        let _ = init();
        assert!(is_initialized());
        assert!(matches!(init(), Err(CampError::AlreadyInitialized)));

        shutdown();
        assert!(!is_initialized());
        assert!(matches!(
            register_camera(Camera::new("ghost")),
            Err(CampError::NotInitialized)
        ));
        assert!(matches!(options(), Err(CampError::NotInitialized)));
        assert!(get_camera("ghost").is_none());
        init().expect("re-init after shutdown failed");
        assert!(get_camera("ghost").is_none());
        assert!(is_initialized());
    }

    // ========================================================================
    // REGISTRATION
    // ========================================================================
    {
        reset();
        let camera = register_camera(Camera::new("Camera")).unwrap();
        assert_eq!(camera.name(), "Camera");
        assert!(get_camera("Camera").is_some());
        assert!(get_camera("nonexistent").is_none());
        assert!(matches!(
            register_camera(Camera::new("Camera")),
            Err(CampError::CameraExists(_))
        ));

        let plane = register_plane(Plane::new("photo")).unwrap();
        assert_eq!(plane.name(), "photo");
        assert!(get_plane("photo").is_some());
        assert!(plane.binding().is_none());

        remove_plane("photo").unwrap();
        assert!(get_plane("photo").is_none());
        remove_camera("Camera").unwrap();
        assert!(get_camera("Camera").is_none());
    }

    // ========================================================================
    // EXAMPLE SCENARIO: 36 mm sensor, 18 mm lens, 1920x1080, distance 5
    // ========================================================================
    {
        reset();
        set_render_frame(RenderFrame::new(1920, 1080)).unwrap();
        let camera = register_camera(
            Camera::new("Camera")
                .with_projection(Projection::perspective(18.0, 36.0, 24.0))
                .with_sensor_fit(SensorFit::Horizontal),
        )
        .unwrap();
        let plane = register_plane(
            Plane::new("photo")
                .with_transform(Transform::from_translation(Vec3::new(0.0, 0.0, -3.0))),
        )
        .unwrap();

        let binding = bind(&plane, &camera).unwrap();
        assert_eq!(plane.binding(), Some(binding));
        assert!((get_distance(binding).unwrap() - 3.0).abs() < 1e-6);
        assert_eq!(get_source_size(binding).unwrap(), (2.0, 2.0));

        set_distance(binding, 5.0).unwrap();
        let (sx, sy) = get_effective_scale(binding).unwrap();
        assert!((sx - 10.0).abs() < 1e-4);
        assert!((sy - 5.625).abs() < 1e-4);
        assert!(fills_frame(binding).unwrap());

        let world = plane.world_transform().unwrap();
        assert!((world.translation - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-6);

        let corners = plane.corners().unwrap();
        assert!((corners[0] - Vec3::new(-5.0, -2.8125, -5.0)).length() < 1e-4);
        assert!((corners[2] - Vec3::new(5.0, 2.8125, -5.0)).length() < 1e-4);
    }

    // ========================================================================
    // DISTANCE EDITS
    // ========================================================================
    {
        let binding = get_plane("photo").and_then(|p| p.binding()).unwrap();

        assert!(matches!(
            set_distance(binding, -1.0),
            Err(CampError::InvalidDistance(_))
        ));
        assert_eq!(get_distance(binding).unwrap(), 5.0);

        set_distance(binding, 0.0).unwrap();
        assert_eq!(get_effective_scale(binding).unwrap(), (0.0, 0.0));

        let mut previous = 0.0;
        for distance in [0.5, 1.0, 2.5, 4.0, 8.0, 16.0] {
            set_distance(binding, distance).unwrap();
            let (sx, _) = get_effective_scale(binding).unwrap();
            assert!(sx > previous);
            previous = sx;
        }
    }

    // ========================================================================
    // CAMERA EDITS PROPAGATE
    // ========================================================================
    {
        let camera = get_camera("Camera").unwrap();
        let plane = get_plane("photo").unwrap();
        let binding = plane.binding().unwrap();
        set_distance(binding, 5.0).unwrap();

        let delta = Quat::from_rotation_y(0.25) * Quat::from_rotation_x(0.1);
        for _ in 0..20 {
            camera.rotate(delta).unwrap();
            let cam = camera.camera().unwrap();
            assert_eq!(plane.world_transform().unwrap().rotation, cam.rotation());
            assert!(fills_frame(binding).unwrap());
        }

        camera.set_position(Vec3::new(3.0, -1.0, 2.0)).unwrap();
        assert!(fills_frame(binding).unwrap());

        camera
            .set_projection(Projection::perspective(36.0, 36.0, 24.0))
            .unwrap();
        let (sx, _) = get_effective_scale(binding).unwrap();
        assert!((sx - 5.0).abs() < 1e-4);

        // Auto fit on a portrait frame switches to the sensor height
        camera.set_sensor_fit(SensorFit::Auto).unwrap();
        set_render_frame(RenderFrame::new(1080, 1920)).unwrap();
        let (_, sy) = get_effective_scale(binding).unwrap();
        assert!((sy - 2.0 * 5.0 * (24.0 / 72.0)).abs() < 1e-4);
        assert!(fills_frame(binding).unwrap());

        // Invalid optics are rejected without touching the binding
        let before = get_effective_scale(binding).unwrap();
        assert!(matches!(
            camera.set_projection(Projection::perspective(0.0, 36.0, 24.0)),
            Err(CampError::InvalidCameraParameters(_))
        ));
        assert_eq!(get_effective_scale(binding).unwrap(), before);
    }

    // ========================================================================
    // ORTHOGRAPHIC
    // ========================================================================
    {
        let camera = get_camera("Camera").unwrap();
        let binding = get_plane("photo").and_then(|p| p.binding()).unwrap();
        set_render_frame(RenderFrame::new(1600, 900)).unwrap();
        camera.set_projection(Projection::orthographic(8.0)).unwrap();

        set_distance(binding, 2.0).unwrap();
        let near = get_effective_scale(binding).unwrap();
        set_distance(binding, 20.0).unwrap();
        let far = get_effective_scale(binding).unwrap();
        assert_eq!(near, far);
        assert!((near.0 - 8.0).abs() < 1e-5);
        assert!((near.1 - 4.5).abs() < 1e-5);
        assert!(fills_frame(binding).unwrap());
    }

    // ========================================================================
    // UNBIND
    // ========================================================================
    {
        let camera = get_camera("Camera").unwrap();
        let plane = get_plane("photo").unwrap();
        let binding = plane.binding().unwrap();
        let last = plane.world_transform().unwrap();

        unbind(binding).unwrap();
        assert!(plane.binding().is_none());
        assert!(get_all_bindings().unwrap().is_empty());

        camera.rotate(Quat::from_rotation_z(1.0)).unwrap();
        assert_eq!(plane.world_transform().unwrap(), last);

        assert!(matches!(unbind(binding), Err(CampError::UnboundOperation(_))));
        assert!(matches!(
            set_distance(binding, 1.0),
            Err(CampError::UnboundOperation(_))
        ));

        // The plane is free again and can be rebound
        plane.set_transform(Transform::identity()).unwrap();
        let rebound = bind(&plane, &camera).unwrap();
        assert_ne!(rebound, binding);
        assert!(matches!(
            plane.set_transform(Transform::identity()),
            Err(CampError::PlaneAlreadyBound(_, _))
        ));
    }

    // ========================================================================
    // OPTIONS
    // ========================================================================
    {
        reset();
        set_options(Options {
            initial_distance: Some(7.0),
            ..Options::default()
        })
        .unwrap();
        assert_eq!(options().unwrap().initial_distance, Some(7.0));

        let camera = register_camera(Camera::new("Camera")).unwrap();
        let plane = register_plane(Plane::new("photo")).unwrap();
        let binding = bind(&plane, &camera).unwrap();
        assert_eq!(get_distance(binding).unwrap(), 7.0);

        let uniforms = plane.uniforms().unwrap();
        let (sx, sy) = get_effective_scale(binding).unwrap();
        assert!((uniforms.size[0] - sx).abs() < 1e-5);
        assert!((uniforms.size[1] - sy).abs() < 1e-5);
        assert_eq!(render_frame().unwrap(), RenderFrame::default());
    }

    shutdown();
}
