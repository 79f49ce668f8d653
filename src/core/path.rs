use std::fmt::Write as _;

/// Builder for the textual moveto/curveto/lineto grammar consumed by the
/// host renderer: `M x y`, `C c1x c1y, c2x c2y, x y`, `L x y`, `Z`.
///
/// Coordinates use the shortest round-trip `f64` formatting, so identical
/// inputs always produce byte-identical path strings.
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.separator();
        let _ = write!(self.commands, "M {x} {y}");
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.separator();
        let _ = write!(self.commands, "L {x} {y}");
        self
    }

    pub fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) -> &mut Self {
        self.separator();
        let _ = write!(self.commands, "C {c1x} {c1y}, {c2x} {c2y}, {x} {y}");
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.separator();
        self.commands.push('Z');
        self
    }

    #[must_use]
    pub fn finish(self) -> String {
        self.commands
    }

    fn separator(&mut self) {
        if !self.commands.is_empty() {
            self.commands.push(' ');
        }
    }
}
