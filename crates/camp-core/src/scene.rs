//! Scene of cameras, planes and the bindings between them.
//!
//! Cameras and planes are stored by name and bindings by [`BindingHandle`];
//! nothing holds a reference to anything else. A binding names its plane and
//! camera, and every edit to an upstream value (camera optics or pose, render
//! frame, distance) runs one recompute pass over the bindings that depend on
//! it. Passes are computed on copies and committed only if every dependent
//! succeeds, so a rejected edit leaves the scene exactly as it was.

use std::collections::{BTreeMap, HashMap};

use glam::{Vec2, Vec3};

use crate::binder::{Binding, BindingHandle};
use crate::camera::Camera;
use crate::error::{CampError, Result};
use crate::frame_fill;
use crate::options::Options;
use crate::plane::Plane;
use crate::render_frame::RenderFrame;
use crate::transform::Transform;
use crate::uniforms::PlaneUniforms;

/// Cameras, planes, bindings and the render output they share.
pub struct Scene {
    cameras: HashMap<String, Camera>,
    planes: HashMap<String, Plane>,
    bindings: BTreeMap<BindingHandle, Binding>,
    render_frame: RenderFrame,
    options: Options,
    next_binding: u64,
}

impl Default for Scene {
    fn default() -> Self {
        Self::with_options(Options::default())
    }
}

impl Scene {
    /// Creates an empty scene with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty scene with the given options.
    pub fn with_options(options: Options) -> Self {
        Self {
            cameras: HashMap::new(),
            planes: HashMap::new(),
            bindings: BTreeMap::new(),
            render_frame: options.default_render_frame,
            options,
            next_binding: 1,
        }
    }

    /// Returns the options.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the options. The current render frame is kept.
    pub fn set_options(&mut self, options: Options) {
        self.options = options;
    }

    // ------------------------------------------------------------------
    // Cameras
    // ------------------------------------------------------------------

    /// Adds a camera.
    pub fn add_camera(&mut self, camera: Camera) -> Result<()> {
        if self.cameras.contains_key(camera.name()) {
            return Err(CampError::CameraExists(camera.name().to_string()));
        }
        self.cameras.insert(camera.name().to_string(), camera);
        Ok(())
    }

    /// Gets a camera by name.
    pub fn camera(&self, name: &str) -> Option<&Camera> {
        self.cameras.get(name)
    }

    /// Returns the names of all cameras.
    pub fn camera_names(&self) -> Vec<&str> {
        self.cameras.keys().map(String::as_str).collect()
    }

    /// Edits a camera and recomputes every plane bound to it.
    ///
    /// If the edited camera cannot produce a frame fill for one of its
    /// planes, the edit is discarded and the error returned.
    pub fn update_camera<F>(&mut self, name: &str, edit: F) -> Result<()>
    where
        F: FnOnce(&mut Camera),
    {
        let mut camera = self
            .cameras
            .get(name)
            .cloned()
            .ok_or_else(|| CampError::CameraNotFound(name.to_string()))?;
        edit(&mut camera);

        let refreshed = self.refresh_bindings(
            |b| b.camera() == name,
            |_| Some(&camera),
            &self.render_frame,
        )?;
        self.cameras.insert(name.to_string(), camera);
        self.commit(refreshed);
        Ok(())
    }

    /// Sets a camera's world pose.
    pub fn set_camera_transform(&mut self, name: &str, transform: Transform) -> Result<()> {
        self.update_camera(name, |camera| camera.set_transform(transform))
    }

    /// Removes a camera, first unbinding every plane bound to it.
    pub fn remove_camera(&mut self, name: &str) -> Result<Camera> {
        if !self.cameras.contains_key(name) {
            return Err(CampError::CameraNotFound(name.to_string()));
        }
        let dependents: Vec<BindingHandle> = self
            .bindings
            .values()
            .filter(|b| b.camera() == name)
            .map(Binding::handle)
            .collect();
        for handle in dependents {
            self.unbind(handle)?;
        }
        self.cameras
            .remove(name)
            .ok_or_else(|| CampError::CameraNotFound(name.to_string()))
    }

    // ------------------------------------------------------------------
    // Planes
    // ------------------------------------------------------------------

    /// Adds a plane.
    pub fn add_plane(&mut self, plane: Plane) -> Result<()> {
        if self.planes.contains_key(plane.name()) {
            return Err(CampError::PlaneExists(plane.name().to_string()));
        }
        self.planes.insert(plane.name().to_string(), plane);
        Ok(())
    }

    /// Gets a plane by name.
    pub fn plane(&self, name: &str) -> Option<&Plane> {
        self.planes.get(name)
    }

    /// Returns the names of all planes.
    pub fn plane_names(&self) -> Vec<&str> {
        self.planes.keys().map(String::as_str).collect()
    }

    /// Sets the transform of an unbound plane.
    ///
    /// Bound planes are driven by their camera; use [`Scene::set_distance`]
    /// to move them.
    pub fn set_plane_transform(&mut self, name: &str, transform: Transform) -> Result<()> {
        if let Some(binding) = self.binding_for_plane(name) {
            return Err(CampError::PlaneAlreadyBound(
                name.to_string(),
                binding.camera().to_string(),
            ));
        }
        let plane = self
            .planes
            .get_mut(name)
            .ok_or_else(|| CampError::PlaneNotFound(name.to_string()))?;
        plane.set_transform(transform);
        Ok(())
    }

    /// Removes a plane, unbinding it first if needed.
    pub fn remove_plane(&mut self, name: &str) -> Result<Plane> {
        if let Some(handle) = self.binding_for_plane(name).map(Binding::handle) {
            self.unbind(handle)?;
        }
        self.planes
            .remove(name)
            .ok_or_else(|| CampError::PlaneNotFound(name.to_string()))
    }

    // ------------------------------------------------------------------
    // Render frame
    // ------------------------------------------------------------------

    /// Returns the render frame.
    pub fn render_frame(&self) -> &RenderFrame {
        &self.render_frame
    }

    /// Changes the render output and recomputes every binding.
    pub fn set_render_frame(&mut self, frame: RenderFrame) -> Result<()> {
        frame.validate()?;
        let refreshed =
            self.refresh_bindings(|_| true, |b| self.cameras.get(b.camera()), &frame)?;
        self.render_frame = frame;
        self.commit(refreshed);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Bindings
    // ------------------------------------------------------------------

    /// Binds a plane to a camera.
    ///
    /// The distance starts at [`Options::initial_distance`] if set, otherwise
    /// at the plane's current distance from the camera.
    pub fn bind(&mut self, plane: &str, camera: &str) -> Result<BindingHandle> {
        if let Some(existing) = self.binding_for_plane(plane) {
            return Err(CampError::PlaneAlreadyBound(
                plane.to_string(),
                existing.camera().to_string(),
            ));
        }
        let cam = self
            .cameras
            .get(camera)
            .ok_or_else(|| CampError::CameraNotFound(camera.to_string()))?;
        let target = self
            .planes
            .get_mut(plane)
            .ok_or_else(|| CampError::PlaneNotFound(plane.to_string()))?;

        let handle = BindingHandle(self.next_binding);
        let binding = Binding::establish(
            handle,
            target,
            cam,
            &self.render_frame,
            self.options.initial_distance,
        )?;
        self.next_binding += 1;

        log::info!(
            "bound plane '{plane}' to camera '{camera}' as {handle} at distance {}",
            binding.distance()
        );
        self.bindings.insert(handle, binding);
        Ok(handle)
    }

    /// Removes a binding. The plane keeps its last computed world transform.
    pub fn unbind(&mut self, handle: BindingHandle) -> Result<()> {
        let binding = self
            .bindings
            .remove(&handle)
            .ok_or(CampError::UnboundOperation(handle.id()))?;
        let camera = self
            .cameras
            .get(binding.camera())
            .ok_or_else(|| CampError::CameraNotFound(binding.camera().to_string()))?;
        let plane = self
            .planes
            .get_mut(binding.plane())
            .ok_or_else(|| CampError::PlaneNotFound(binding.plane().to_string()))?;

        log::info!("unbound plane '{}' from camera '{}'", binding.plane(), binding.camera());
        binding.release(plane, camera);
        Ok(())
    }

    /// Gets a binding by handle.
    pub fn binding(&self, handle: BindingHandle) -> Option<&Binding> {
        self.bindings.get(&handle)
    }

    /// Gets the binding that drives a plane, if any.
    pub fn binding_for_plane(&self, plane: &str) -> Option<&Binding> {
        self.bindings.values().find(|b| b.plane() == plane)
    }

    /// Returns an iterator over all bindings, in handle order.
    pub fn bindings(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.values()
    }

    /// Sets the virtual distance of a binding and recomputes its fill.
    ///
    /// A rejected distance leaves the previous one in place.
    pub fn set_distance(&mut self, handle: BindingHandle, distance: f32) -> Result<()> {
        let binding = self
            .bindings
            .get_mut(&handle)
            .ok_or(CampError::UnboundOperation(handle.id()))?;
        let camera = self
            .cameras
            .get(binding.camera())
            .ok_or_else(|| CampError::CameraNotFound(binding.camera().to_string()))?;

        if let Err(err) = binding.set_distance(distance, camera, &self.render_frame) {
            log::warn!("rejected distance {distance} for {handle}: {err}");
            return Err(err);
        }
        if self.options.log_recomputes {
            log::debug!("{handle} distance -> {distance}, fill {:?}", binding.fill());
        }
        Ok(())
    }

    /// Current distance of a binding.
    pub fn distance(&self, handle: BindingHandle) -> Result<f32> {
        self.bindings
            .get(&handle)
            .map(Binding::distance)
            .ok_or(CampError::UnboundOperation(handle.id()))
    }

    /// Size the plane had when it was bound, before normalization.
    ///
    /// Its ratio is the aspect of the image the plane was authored for.
    pub fn source_size(&self, handle: BindingHandle) -> Result<Vec2> {
        self.bindings
            .get(&handle)
            .map(|b| b.frozen().source_size)
            .ok_or(CampError::UnboundOperation(handle.id()))
    }

    /// Width and height the bound plane currently spans.
    pub fn effective_scale(&self, handle: BindingHandle) -> Result<(f32, f32)> {
        self.bindings
            .get(&handle)
            .map(|b| (b.fill().scale_x, b.fill().scale_y))
            .ok_or(CampError::UnboundOperation(handle.id()))
    }

    // ------------------------------------------------------------------
    // Evaluated transforms
    // ------------------------------------------------------------------

    /// World transform of a plane, evaluated against its camera if bound.
    pub fn plane_world_transform(&self, name: &str) -> Result<Transform> {
        let plane = self
            .planes
            .get(name)
            .ok_or_else(|| CampError::PlaneNotFound(name.to_string()))?;
        match self.binding_for_plane(name) {
            Some(binding) => {
                let camera = self
                    .cameras
                    .get(binding.camera())
                    .ok_or_else(|| CampError::CameraNotFound(binding.camera().to_string()))?;
                Ok(binding.world_transform(camera))
            }
            None => Ok(*plane.transform()),
        }
    }

    /// World-space corners of a plane, counter-clockwise from bottom-left.
    pub fn plane_corners(&self, name: &str) -> Result<[Vec3; 4]> {
        let plane = self
            .planes
            .get(name)
            .ok_or_else(|| CampError::PlaneNotFound(name.to_string()))?;
        let world = self.plane_world_transform(name)?;
        Ok(plane.clone().with_transform(world).corners())
    }

    /// GPU uniforms for a plane at its evaluated world transform.
    pub fn plane_uniforms(&self, name: &str) -> Result<PlaneUniforms> {
        let plane = self
            .planes
            .get(name)
            .ok_or_else(|| CampError::PlaneNotFound(name.to_string()))?;
        Ok(PlaneUniforms::new(&self.plane_world_transform(name)?, plane.size()))
    }

    /// Checks that a bound plane's corners sit on its camera's frustum
    /// cross-section, within [`Options::corner_tolerance`].
    pub fn fills_frame(&self, handle: BindingHandle) -> Result<bool> {
        let binding = self
            .bindings
            .get(&handle)
            .ok_or(CampError::UnboundOperation(handle.id()))?;
        let camera = self
            .cameras
            .get(binding.camera())
            .ok_or_else(|| CampError::CameraNotFound(binding.camera().to_string()))?;

        let expected = frame_fill::frustum_corners(camera, &self.render_frame, binding.distance())?;
        let actual = self.plane_corners(binding.plane())?;
        let tolerance = self.options.corner_tolerance * (1.0 + binding.distance());
        Ok(actual
            .iter()
            .zip(expected.iter())
            .all(|(a, e)| a.distance(*e) <= tolerance))
    }

    /// Recomputes the selected bindings against `frame` into copies.
    fn refresh_bindings<'a, S, C>(
        &'a self,
        select: S,
        camera_for: C,
        frame: &RenderFrame,
    ) -> Result<Vec<Binding>>
    where
        S: Fn(&Binding) -> bool,
        C: Fn(&Binding) -> Option<&'a Camera>,
    {
        let mut refreshed = Vec::new();
        for binding in self.bindings.values() {
            if !select(binding) {
                continue;
            }
            let camera = camera_for(binding)
                .ok_or_else(|| CampError::CameraNotFound(binding.camera().to_string()))?;
            let mut copy = binding.clone();
            copy.refresh(camera, frame)?;
            if self.options.log_recomputes {
                log::debug!("recomputed {}: {:?}", copy.handle(), copy.fill());
            }
            refreshed.push(copy);
        }
        Ok(refreshed)
    }

    fn commit(&mut self, refreshed: Vec<Binding>) {
        for binding in refreshed {
            self.bindings.insert(binding.handle(), binding);
        }
    }
}
