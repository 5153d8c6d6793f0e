//! wgpu + egui window renderer.
//!
//! The renderer draws `Scene` values and never reads game state. Images
//! are uploaded once as egui textures; text uses egui's built-in font at
//! the two sizes the scene asks for.

pub mod assets;
pub mod gpu;
pub mod metrics;

use std::sync::Arc;

use egui::{Align2, Color32, FontId, LayerId, Pos2, Rect, TextureHandle, TextureOptions, Vec2};
use egui_wgpu::ScreenDescriptor;
use egui_winit::State as EguiWinitState;
use winit::event::WindowEvent;
use winit::window::Window;

use crate::core::error::Result;
use crate::core::types::Choice;
use crate::ui::palette::Rgb;
use crate::ui::scene::{Scene, CANVAS_WIDTH};

pub use assets::{AssetPaths, GameAssets, ImageData};
pub use gpu::GpuContext;
pub use metrics::FrameMetrics;

/// An uploaded image and its natural size in canvas units.
struct Sprite {
    texture: TextureHandle,
    size: Vec2,
}

impl Sprite {
    fn upload(ctx: &egui::Context, name: &str, image: &ImageData) -> Self {
        let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.rgba);
        Self {
            texture: ctx.load_texture(name, color_image, TextureOptions::LINEAR),
            size: Vec2::new(image.width as f32, image.height as f32),
        }
    }
}

/// Main renderer struct.
pub struct Renderer {
    window: Arc<Window>,
    ctx: GpuContext,
    egui_ctx: egui::Context,
    egui_state: EguiWinitState,
    egui_renderer: egui_wgpu::Renderer,
    background: Sprite,
    choices: [Sprite; 3],
}

impl Renderer {
    /// Create a renderer for the window and upload the game images.
    pub async fn new(window: Arc<Window>, assets: &GameAssets) -> Result<Self> {
        let ctx = GpuContext::new(window.clone()).await?;

        let egui_ctx = egui::Context::default();
        let egui_state =
            EguiWinitState::new(egui_ctx.clone(), egui::ViewportId::ROOT, &window, None, None);
        let egui_renderer = egui_wgpu::Renderer::new(&ctx.device, ctx.format(), None, 1);

        let background = Sprite::upload(&egui_ctx, "background", assets.background());
        let choices = Choice::ALL.map(|choice| {
            Sprite::upload(
                &egui_ctx,
                choice.asset_stem(),
                assets.choice_image(Some(choice)),
            )
        });

        Ok(Self {
            window,
            ctx,
            egui_ctx,
            egui_state,
            egui_renderer,
            background,
            choices,
        })
    }

    /// Forward a window event so egui tracks size and scale changes.
    pub fn on_window_event(&mut self, event: &WindowEvent) {
        let _ = self.egui_state.on_window_event(&self.window, event);
        if let WindowEvent::Resized(size) = event {
            self.ctx.resize(size.width, size.height);
        }
    }

    /// Render a frame from the given scene.
    pub fn render(&mut self, scene: &Scene) -> std::result::Result<(), wgpu::SurfaceError> {
        let raw_input = self.egui_state.take_egui_input(&self.window);
        self.egui_ctx.begin_frame(raw_input);
        self.paint_scene(scene);
        let full_output = self.egui_ctx.end_frame();
        self.egui_state
            .handle_platform_output(&self.window, full_output.platform_output);

        let paint_jobs = self
            .egui_ctx
            .tessellate(full_output.shapes, full_output.pixels_per_point);
        let (width, height) = self.ctx.size();
        let screen_descriptor = ScreenDescriptor {
            size_in_pixels: [width, height],
            pixels_per_point: full_output.pixels_per_point,
        };

        let output = self.ctx.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .ctx
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Scene Encoder"),
            });

        for (id, image_delta) in &full_output.textures_delta.set {
            self.egui_renderer
                .update_texture(&self.ctx.device, &self.ctx.queue, *id, image_delta);
        }
        let mut commands = self.egui_renderer.update_buffers(
            &self.ctx.device,
            &self.ctx.queue,
            &mut encoder,
            &paint_jobs,
            &screen_descriptor,
        );

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Scene Render Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            self.egui_renderer
                .render(&mut render_pass, &paint_jobs, &screen_descriptor);
        }

        for id in &full_output.textures_delta.free {
            self.egui_renderer.free_texture(id);
        }

        commands.push(encoder.finish());
        self.ctx.queue.submit(commands);
        output.present();

        Ok(())
    }

    /// Rebuild the surface after `SurfaceError::Lost` or `Outdated`.
    pub fn recover_surface(&mut self) {
        self.ctx.reconfigure();
    }

    fn paint_scene(&self, scene: &Scene) {
        let screen = self.egui_ctx.screen_rect();
        let scale = screen.width() / CANVAS_WIDTH;
        let to_screen =
            |[x, y]: [f32; 2]| Pos2::new(screen.min.x + x * scale, screen.min.y + y * scale);
        let painter = self.egui_ctx.layer_painter(LayerId::background());
        let full_uv = Rect::from_min_max(Pos2::ZERO, Pos2::new(1.0, 1.0));

        painter.image(
            self.background.texture.id(),
            Rect::from_min_size(screen.min, self.background.size * scale),
            full_uv,
            Color32::WHITE,
        );

        for sprite in &scene.sprites {
            let image = &self.choices[sprite.choice.unwrap_or(Choice::Rock).index()];
            painter.image(
                image.texture.id(),
                Rect::from_center_size(to_screen(sprite.center), image.size * scale),
                full_uv,
                Color32::WHITE,
            );
        }

        for text in &scene.texts {
            painter.text(
                to_screen(text.center),
                Align2::CENTER_CENTER,
                text.text,
                FontId::proportional(text.font.size() * scale),
                to_color32(text.color),
            );
        }
    }
}

fn to_color32(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.r, rgb.g, rgb.b)
}
