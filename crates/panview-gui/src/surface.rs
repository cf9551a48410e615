use panview_core::buffer::DisplayBuffer;
use panview_core::surface::DisplaySurface;

use crate::convert::buffer_to_color_image;

/// Display surface backed by a single egui texture.
pub struct TextureSurface {
    ctx: egui::Context,
    texture: Option<egui::TextureHandle>,
}

impl TextureSurface {
    pub fn new(ctx: &egui::Context) -> Self {
        Self {
            ctx: ctx.clone(),
            texture: None,
        }
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }
}

impl DisplaySurface for TextureSurface {
    fn present(&mut self, buffer: DisplayBuffer) {
        let image = buffer_to_color_image(&buffer);
        match self.texture.as_mut() {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => {
                self.texture = Some(self.ctx.load_texture(
                    "viewport",
                    image,
                    egui::TextureOptions::NEAREST,
                ));
            }
        }
        self.ctx.request_repaint();
    }

    fn clear(&mut self) {
        self.texture = None;
        self.ctx.request_repaint();
    }
}
