use std::fmt;

/// Why the window could not get a GPU surface to draw on.
#[derive(Debug)]
pub enum RenderContextError {
    /// The window handle could not back a surface.
    Surface(wgpu::CreateSurfaceError),
    /// No adapter can present to the surface.
    Adapter(wgpu::RequestAdapterError),
    /// The adapter refused the device (limits or features).
    Device(wgpu::RequestDeviceError),
    /// The adapter reports no formats for this surface.
    NoSurfaceFormat,
}

impl fmt::Display for RenderContextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Surface(e) => write!(f, "cannot create surface: {e}"),
            Self::Adapter(e) => write!(f, "no usable GPU adapter: {e}"),
            Self::Device(e) => write!(f, "GPU device unavailable: {e}"),
            Self::NoSurfaceFormat => {
                write!(f, "adapter reports no formats for the window surface")
            }
        }
    }
}

impl std::error::Error for RenderContextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Surface(e) => Some(e),
            Self::Adapter(e) => Some(e),
            Self::Device(e) => Some(e),
            Self::NoSurfaceFormat => None,
        }
    }
}

/// A swapchain image acquired for one frame.
pub struct SurfaceFrame {
    texture: wgpu::SurfaceTexture,
    /// Color attachment view of the swapchain image.
    pub view: wgpu::TextureView,
}

/// Device, queue, and the window surface they present to.
pub struct RenderContext {
    /// Logical device.
    pub device: wgpu::Device,
    /// Command queue.
    pub queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
}

impl RenderContext {
    /// Open a device that can present to `window`, and configure the
    /// surface at `size` (clamped to at least 1x1).
    ///
    /// The surface uses an sRGB format when the adapter offers one, so
    /// linear shader output is gamma-encoded on store.
    ///
    /// # Errors
    ///
    /// Any failure here is fatal for the viewer; see
    /// [`RenderContextError`].
    pub async fn new(
        window: impl Into<wgpu::SurfaceTarget<'static>>,
        size: (u32, u32),
    ) -> Result<Self, RenderContextError> {
        let instance = wgpu::Instance::default();
        let surface = instance
            .create_surface(window)
            .map_err(RenderContextError::Surface)?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                compatible_surface: Some(&surface),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::Adapter)?;
        let info = adapter.get_info();
        log::info!("GPU adapter: {} ({:?})", info.name, info.backend);

        // The scene needs nothing beyond what WebGL2 guarantees.
        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("foldscope device"),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                    .using_resolution(adapter.limits()),
                ..Default::default()
            })
            .await
            .map_err(RenderContextError::Device)?;

        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(wgpu::TextureFormat::is_srgb)
            .or_else(|| caps.formats.first().copied())
            .ok_or(RenderContextError::NoSurfaceFormat)?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.0.max(1),
            height: size.1.max(1),
            present_mode: wgpu::PresentMode::AutoVsync,
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };
        surface.configure(&device, &config);
        log::debug!(
            "surface configured: {}x{} {format:?}",
            config.width,
            config.height
        );

        Ok(Self {
            device,
            queue,
            surface,
            config,
        })
    }

    /// Surface texture format.
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Surface size in physical pixels.
    pub fn size(&self) -> (u32, u32) {
        (self.config.width, self.config.height)
    }

    /// Resize the surface. Returns `false` (and does nothing) for zero or
    /// unchanged sizes.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        if width == 0 || height == 0 || (width, height) == self.size() {
            return false;
        }
        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        true
    }

    /// Configure again at the current size, after the surface was lost or
    /// went out of date.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    /// Acquire the next swapchain image.
    ///
    /// # Errors
    ///
    /// Passes on [`wgpu::SurfaceError`]; `Lost` and `Outdated` are
    /// recovered with [`reconfigure`](Self::reconfigure).
    pub fn acquire(&self) -> Result<SurfaceFrame, wgpu::SurfaceError> {
        let texture = self.surface.get_current_texture()?;
        let view = texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        Ok(SurfaceFrame { texture, view })
    }

    /// Submit the recorded commands and present `frame`.
    pub fn present(&self, encoder: wgpu::CommandEncoder, frame: SurfaceFrame) {
        let _ = self.queue.submit(std::iter::once(encoder.finish()));
        frame.texture.present();
    }
}
