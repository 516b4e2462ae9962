//! Pointer-Intents: was der Host an den Controller meldet.

use glam::DVec2;

/// Primärtasten-Event in Viewport-Pixeln (Ursprung oben links).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerIntent {
    Down { pixel: DVec2 },
    Move { pixel: DVec2 },
    Up { pixel: DVec2 },
}

impl PointerIntent {
    pub fn pixel(&self) -> DVec2 {
        match *self {
            PointerIntent::Down { pixel }
            | PointerIntent::Move { pixel }
            | PointerIntent::Up { pixel } => pixel,
        }
    }
}
