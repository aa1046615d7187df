use super::GameOfLife;
use crate::Pos2;

/// A rectangular view over the live cells of an engine.
///
/// The rectangle is half-open: `top_left` is included, `bottom_right` is
/// excluded on both axes.
pub struct GameEngineWindow<'a> {
    tl: Pos2,
    br: Pos2,
    engine: &'a GameOfLife,
}
impl<'a> GameEngineWindow<'a> {
    pub fn new(engine: &'a GameOfLife, top_left: Pos2, bottom_right: Pos2) -> Self {
        Self {
            tl: top_left,
            br: bottom_right,
            engine,
        }
    }

    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = Pos2> + '_ {
        let rx = self.tl.x..self.br.x;
        let ry = self.tl.y..self.br.y;
        self.engine
            .alive
            .iter()
            .copied()
            .filter(move |pos| rx.contains(&pos.x) && ry.contains(&pos.y))
    }
}

impl std::fmt::Display for GameEngineWindow<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in self.tl.y..self.br.y {
            for x in self.tl.x..self.br.x {
                let glyph = if self.engine.is_alive(Pos2::new(x, y)) {
                    "█"
                } else {
                    " "
                };
                f.write_str(glyph)?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i32, y: i32) -> Pos2 {
        Pos2::new(x, y)
    }

    #[test]
    fn iter_keeps_only_cells_inside_the_rectangle() {
        let game = GameOfLife::from_alive(vec![pos(0, 0), pos(1, 1), pos(2, 2), pos(-1, 0)]);

        let mut inside = game.window(pos(0, 0), pos(2, 2)).iter().collect::<Vec<_>>();
        inside.sort_by_key(|p| (p.y, p.x));
        assert_eq!(inside, vec![pos(0, 0), pos(1, 1)]);
    }

    #[test]
    fn display_draws_rows_top_to_bottom() {
        let game = GameOfLife::from_alive(vec![pos(0, 0), pos(1, 1)]);

        let drawn = game.window(pos(0, 0), pos(2, 2)).to_string();
        assert_eq!(drawn, "█ \n █\n");
    }
}
