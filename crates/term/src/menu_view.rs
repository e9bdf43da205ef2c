//! MenuView and ControlsView: the text screens outside of play.
//!
//! Pure (no I/O); both draw into the same [`FrameBuffer`] as the scene.

use crate::fb::{Cell, CellStyle, FrameBuffer};
use crate::types::{MenuEntry, Rgb};

const BANNER: [&str; 5] = [
    "#####    ###   #   #   ####   ###    ####  #####  #####  #####",
    "#   #   #   #   # #   #      #   #  #        #    #      #   #",
    "####    #####    #    #      #####   ###     #    ####   ####",
    "#  #    #   #    #    #      #   #      #    #    #      #  #",
    "#   #   #   #    #     ####  #   #  ####     #    #####  #   #",
];
const SUBTITLE: &str = "TERMINAL EDITION";

const BANNER_COLOR: Rgb = Rgb::new(220, 30, 30);
const BACKGROUND: Rgb = Rgb::new(0, 0, 0);
const SELECTED_FG: Rgb = Rgb::new(255, 255, 255);
const SELECTED_BG: Rgb = Rgb::new(200, 0, 0);
const IDLE_FG: Rgb = Rgb::new(150, 150, 150);
const HEADING_COLOR: Rgb = Rgb::new(230, 200, 40);

const CONTROLS: [&str; 8] = [
    "W / S / UP / DOWN   Move forward / back",
    "A / D               Strafe",
    "LEFT / RIGHT        Turn",
    "MOUSE               Turn",
    "SHIFT               Sprint",
    "ENTER / SPACE       Fire",
    "ESC                 Back to menu",
    "",
];

fn blank(fb: &mut FrameBuffer) {
    fb.clear(Cell {
        ch: ' ',
        style: CellStyle::colors(IDLE_FG, BACKGROUND),
    });
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MenuView;

impl MenuView {
    pub fn render_into(&self, selection: usize, fb: &mut FrameBuffer) {
        blank(fb);

        let mut banner = CellStyle::colors(BANNER_COLOR, BACKGROUND);
        banner.bold = true;
        let mut y = 1u16;
        for line in BANNER {
            fb.put_str_centered(y, line, banner);
            y += 1;
        }
        fb.put_str_centered(y + 1, SUBTITLE, banner);
        y += 4;

        for (i, entry) in MenuEntry::ALL.iter().enumerate() {
            if i == selection {
                let mut style = CellStyle::colors(SELECTED_FG, SELECTED_BG);
                style.bold = true;
                fb.put_str_centered(y, &format!("  > {} <  ", entry.label()), style);
            } else {
                let style = CellStyle::colors(IDLE_FG, BACKGROUND);
                fb.put_str_centered(y, &format!("    {}    ", entry.label()), style);
            }
            y += 2;
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ControlsView;

impl ControlsView {
    pub fn render_into(&self, fb: &mut FrameBuffer) {
        blank(fb);

        let mut heading = CellStyle::colors(HEADING_COLOR, BACKGROUND);
        heading.bold = true;
        fb.put_str(2, 1, "=== CONTROLS ===", heading);

        let body = CellStyle::colors(Rgb::new(220, 220, 220), BACKGROUND);
        for (i, line) in CONTROLS.iter().enumerate() {
            fb.put_str(2, 3 + i as u16, line, body);
        }

        let mut footer = body;
        footer.dim = true;
        fb.put_str(2, 4 + CONTROLS.len() as u16, "Press BACKSPACE to return", footer);
    }
}
