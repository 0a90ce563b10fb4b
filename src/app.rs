use std::sync::Arc;
use winit::{
    application::ApplicationHandler,
    dpi::{LogicalSize, PhysicalSize},
    event::{DeviceEvent, DeviceId, ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowAttributes, WindowId},
};

use crate::{
    catalog::Catalog,
    config::SceneConfig,
    error::{FolioError, Result},
    gfx::rendering::RenderEngine,
    interaction::{PointerTracker, Showcase},
    loading::LoadingManager,
    ui::{
        panel::{open_link, LOAD_ERROR_MESSAGE},
        status_overlay, InfoPanel, PanelAction, UiManager,
    },
};

pub struct FolioApp {
    event_loop: EventLoop<()>,
    app_state: AppState,
}

struct AppState {
    window: Option<Arc<Window>>,
    render_engine: Option<RenderEngine>,
    ui_manager: Option<UiManager>,
    showcase: Showcase,
    panel: InfoPanel,
    pointer: PointerTracker,
    loading: LoadingManager,
    fatal: Option<FolioError>,
}

impl FolioApp {
    /// Portfolio viewer showing the built-in catalog
    pub fn new(config: SceneConfig) -> Result<Self> {
        Self::with_catalog(Catalog::builtin(), config)
    }

    pub fn with_catalog(catalog: Catalog, config: SceneConfig) -> Result<Self> {
        let event_loop = EventLoop::new()?;

        Ok(Self {
            event_loop,
            app_state: AppState {
                window: None,
                render_engine: None,
                ui_manager: None,
                pointer: PointerTracker::new(config.click_tolerance),
                showcase: Showcase::new(catalog, config),
                panel: InfoPanel::new(),
                loading: LoadingManager::new(),
                fatal: None,
            },
        })
    }

    /// Run the application (consumes self and starts the event loop)
    pub fn run(mut self) -> Result<()> {
        self.event_loop.set_control_flow(ControlFlow::Poll);
        self.event_loop.run_app(&mut self.app_state)?;

        match self.app_state.fatal.take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl AppState {
    fn init_graphics(&mut self, window: &Arc<Window>) -> Result<()> {
        let PhysicalSize { width, height } = window.inner_size();

        let target = window.clone();
        let config = self.showcase.config().clone();
        let renderer = pollster::block_on(async move {
            RenderEngine::new(target, width, height, &config).await
        })?;

        self.showcase
            .scene
            .init_gpu_resources(renderer.device(), renderer.object_layout());
        self.showcase.resize(width, height);

        let mut ui_manager = UiManager::new(
            renderer.device(),
            renderer.queue(),
            renderer.surface_format(),
            window,
        );
        ui_manager.update_display_size(width, height);

        self.ui_manager = Some(ui_manager);
        self.render_engine = Some(renderer);
        Ok(())
    }

    fn handle_click(&mut self, window: &Window) {
        let Some(position) = self.pointer.release() else {
            return;
        };
        if !self.loading.is_ready() {
            return;
        }

        let PhysicalSize { width, height } = window.inner_size();
        self.showcase
            .click(position, (width as f32, height as f32), &mut self.panel);
    }

    fn handle_key(&mut self, event_loop: &ActiveEventLoop, event: &KeyEvent) {
        if event.state == ElementState::Pressed
            && event.physical_key == PhysicalKey::Code(KeyCode::Escape)
        {
            event_loop.exit();
            return;
        }
        self.showcase.scene.camera_manager.process_keyboard_event(event);
    }

    fn redraw(&mut self, window: &Window) {
        let Some(render_engine) = self.render_engine.as_mut() else {
            return;
        };

        if self.loading.is_ready() {
            self.showcase.advance_frame();
        }
        let scene = &mut self.showcase.scene;
        scene.update();
        render_engine.update(&scene.camera_manager.camera.uniform);
        scene.sync_gpu(render_engine.queue());

        let mut action = None;
        match self.ui_manager.as_mut() {
            Some(ui_manager) => {
                let panel = &self.panel;
                let load_state = self.loading.state();
                render_engine.render_frame_with_ui(
                    &self.showcase.scene,
                    |device, queue, encoder, color_attachment| {
                        ui_manager.draw(device, queue, encoder, window, color_attachment, |ui| {
                            status_overlay(ui, load_state);
                            action = panel.draw(ui);
                        });
                    },
                );
            }
            None => render_engine.render_frame(&self.showcase.scene),
        }

        match action {
            Some(PanelAction::Close) => {
                self.showcase.dismiss(&mut self.panel);
            }
            Some(PanelAction::FollowLink(uri)) => {
                open_link(&uri);
            }
            None => {}
        }
    }
}

impl ApplicationHandler for AppState {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let config = self.showcase.config();
        let (width, height) = config.window_size;
        let attributes = WindowAttributes::default()
            .with_title(config.window_title.clone())
            .with_inner_size(LogicalSize::new(width, height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.loading.fail(err.to_string());
                self.fatal = Some(err.into());
                event_loop.exit();
                return;
            }
        };
        self.window = Some(window.clone());

        self.loading.begin("renderer");
        match self.init_graphics(&window) {
            Ok(()) => self.loading.finish("renderer"),
            Err(err) => {
                self.loading.fail(err.to_string());
                // Without a device there is no overlay to draw the message with
                window.set_title(LOAD_ERROR_MESSAGE);
                self.fatal = Some(err);
            }
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, window_id: WindowId, event: WindowEvent) {
        let Some(window) = self.window.clone() else {
            return;
        };

        // Handle UI input first
        if let Some(ui_manager) = self.ui_manager.as_mut() {
            if ui_manager.handle_input(&window, window_id, &event) {
                // The overlay owns this interaction; a press that started in
                // the scene must not turn into a click
                self.pointer.cancel();
                window.request_redraw();
                return;
            }
        }

        match event {
            WindowEvent::CloseRequested => event_loop.exit(),
            WindowEvent::KeyboardInput { event, .. } => self.handle_key(event_loop, &event),
            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.moved((position.x as f32, position.y as f32));
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.pointer.press(),
                ElementState::Released => self.handle_click(&window),
            },
            WindowEvent::Resized(PhysicalSize { width, height }) => {
                self.showcase.resize(width, height);
                if let Some(render_engine) = self.render_engine.as_mut() {
                    render_engine.resize(width, height);
                }
                if let Some(ui_manager) = self.ui_manager.as_mut() {
                    ui_manager.update_display_size(width, height);
                }
            }
            WindowEvent::RedrawRequested => self.redraw(&window),
            _ => (),
        }
    }

    fn device_event(&mut self, _event_loop: &ActiveEventLoop, _device_id: DeviceId, event: DeviceEvent) {
        if !self.loading.is_ready() {
            return;
        }

        // Don't process camera events while the pointer is over the overlay
        if self.ui_manager.as_ref().is_some_and(UiManager::wants_mouse) {
            return;
        }

        self.showcase.scene.camera_manager.process_event(&event);
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}
