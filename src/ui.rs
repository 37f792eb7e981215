use egui::{Color32, Context, FontId, Pos2};

use crate::model::CullMode;

/// A single line of overlay text in logical pixels
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLine {
    pub text: String,
    pub pos: Pos2,
    pub color: Color32,
}

pub fn overlay_lines(mode: CullMode) -> [OverlayLine; 2] {
    [
        OverlayLine {
            text: "A or LeftButton:Change CullMode.".to_string(),
            pos: Pos2::new(10.0, 30.0),
            color: Color32::WHITE,
        },
        OverlayLine {
            text: format!("CullMode:{mode}"),
            pos: Pos2::new(10.0, 60.0),
            color: Color32::YELLOW,
        },
    ]
}

/// Run one egui pass painting the overlay for `mode`
pub fn build_overlay(ctx: &Context, raw_input: egui::RawInput, mode: CullMode) -> egui::FullOutput {
    ctx.run(raw_input, |ctx| {
        let painter = ctx.layer_painter(egui::LayerId::new(egui::Order::Foreground, egui::Id::new("cull_overlay")));
        for line in overlay_lines(mode) {
            painter.text(line.pos, egui::Align2::LEFT_TOP, line.text, FontId::proportional(18.0), line.color);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlay_text() {
        let [help, status] = overlay_lines(CullMode::CullClockwise);
        assert_eq!(help.text, "A or LeftButton:Change CullMode.");
        assert_eq!(status.text, "CullMode:CullClockwise");
        assert_eq!(status.color, Color32::YELLOW);
        assert!(status.pos.y > help.pos.y);
    }

    #[test]
    fn test_build_overlay_produces_shapes() {
        let ctx = Context::default();
        let output = build_overlay(&ctx, egui::RawInput::default(), CullMode::None);
        assert!(!output.shapes.is_empty());
    }
}
